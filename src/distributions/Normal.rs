//! # Normal distribution
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! ia a very important continuous probability distribution.
//!
//! This distribution is very frequent in statistics and extremly well studied.
//! It also has a key role en the [Central Limit Theorem](https://en.wikipedia.org/wiki/Central_limit_theorem)
//! (CLT), wich is a key theorem that says that the sum of `n` random variables
//! of **any** distribution (with finite variance) will give a new random variable
//! that is normally distributed as `n` grows to infinity.
//!
//! We implement the [Normal] distribution and the [StdNormal], wich is the same as [Normal]
//! but for fixed `mean = 0.0` and `standard_deviation = 1.0`.
//!

use rand::Rng;

use crate::{
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::{DistnError, check_finite},
    euclid,
};

// coefitients for the (aprox) computation of `1 - cdf(x)` of the std normal
const B_ZERO_COEFITIENT: f64 = 2.92678600515804815402;
const B_ONE_COEFITIENTS: [f64; 5] = [
    8.97280659046817350354,
    10.27157061171363078863,
    12.72323261907760928036,
    16.88639562007936907786,
    24.12333774572479110372,
];

const B_TWO_COEFITIENTS: [f64; 5] = [
    5.81582518933527390512,
    5.70347935898051436684,
    5.51862483025707963145,
    5.26184239579604207321,
    4.92081346632882032881,
];

const C_ONE_COEFITIENTS: [f64; 5] = [
    11.61511226260603247078,
    18.25323235347346524796,
    18.38871225773938486923,
    18.61193318971775795045,
    24.14804072812762821134,
];

const C_TWO_COEFITIENTS: [f64; 5] = [
    3.83362947800146179416,
    7.30756258553673541139,
    8.42742300458043240405,
    5.66479518878470764762,
    4.91396098895240075156,
];

pub const NORMAL_DOMAIN: ContinuousDomain = ContinuousDomain::Reals;

/// The standard normal distribution: `mean = 0.0` and `standard_deviation = 1.0`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StdNormal;

#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    /// The mean of the distribution
    mean: f64,
    /// The standard deviation of the distribution
    standard_deviation: f64,
}

impl StdNormal {
    /// Create a Standard normal distribution. Has a mean of `0.0` and a standard
    /// deviation of `1.0`.
    pub const fn new() -> StdNormal {
        return StdNormal;
    }

    /// Returns `m(x)` for `0.0 <= x` such that `1 - cdf(x) = m(x) * pdf(x)`
    /// (the [Mills ratio](https://en.wikipedia.org/wiki/Mills_ratio)).
    fn mills_ratio(point: f64) -> f64 {
        /*
        We will use the aproximation by:
        Dia, Yaya D. (2023). "Approximate Incomplete Integrals, Application to Complementary Error Function". SSRN. doi:10.2139/ssrn.4487559. S2CID 259689086.

        The precision of this method is extremly high: an error of less than
        `~1.1 * 10^-16 ~= 2^-53`. Considering that
        `f64::EPSILON = 2.220446049250313e-16 ~= 2.22 * 10^-16`, this solution
        may as well be considered exact if we are working with `f64`.

        ***

        Every term is a 2nd degree polynomial. Evaluated with Horner's rule:

        ```
        x^2 + a_1 * x + a_2 =
         = (x + a_1) * x + a_2
        ```

        For better efficiency we will use `f64::mul_add`.
        `x.mul_add(a, b) = x * a + b`
        */

        let mut numerator: f64 = 1.0;
        let mut denominator: f64 = point + B_ZERO_COEFITIENT;
        for i in 0..5 {
            numerator *= (point + C_TWO_COEFITIENTS[i]).mul_add(point, C_ONE_COEFITIENTS[i]);
            denominator *= (point + B_TWO_COEFITIENTS[i]).mul_add(point, B_ONE_COEFITIENTS[i]);
        }

        return numerator / denominator;
    }
}

impl Normal {
    /// Create a [Normal] distribution.
    ///
    ///  - The `mean` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be stricly greater than `0.0`.
    ///
    /// If those conditions are not fullfiled, an error will be returned.
    pub fn new(mean: f64, standard_deviation: f64) -> Result<Normal, DistnError> {
        let mean: f64 = check_finite("mean", mean)?;
        let standard_deviation: f64 = check_finite("sd", standard_deviation)?;
        if standard_deviation <= 0.0 {
            return Err(DistnError::InvalidNumber("sd"));
        }

        return Ok(Normal {
            mean,
            standard_deviation,
        });
    }

    /// Returns the mean, the first parameter of the normal distribution.
    pub const fn get_mean(&self) -> f64 {
        return self.mean;
    }

    /// Returns the standard deviation, the second parameter of the normal distribution.
    pub const fn get_standard_deviation(&self) -> f64 {
        return self.standard_deviation;
    }

    /// Maps `x` to the [StdNormal].
    fn standardize(&self, x: f64) -> f64 {
        return (x - self.mean) / self.standard_deviation;
    }
}

impl Distribution for StdNormal {
    fn pdf(&self, x: f64) -> f64 {
        return euclid::INV_SQRT_2_PI * (-x * x * 0.5).exp();
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &NORMAL_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x.is_infinite() {
            return if x.is_sign_positive() { 1.0 } else { 0.0 };
        }

        // `aproximation` = `1 - cdf(|x|)` = `cdf(-|x|)`
        let point: f64 = x.abs();
        let aproximation: f64 = StdNormal::mills_ratio(point) * self.pdf(point);

        return if x < 0.0 {
            aproximation
        } else {
            1.0 - aproximation
        };
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        return -0.5 * x * x - euclid::LN_SQRT_2_PI;
    }

    fn ln_cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x.is_infinite() {
            return if x.is_sign_positive() { 0.0 } else { f64::NEG_INFINITY };
        }

        let point: f64 = x.abs();
        // ln(1 - cdf(|x|)) = ln(m(|x|)) + ln(pdf(|x|))
        let ln_tail: f64 = StdNormal::mills_ratio(point).ln() + self.ln_pdf(point);

        return if x < 0.0 {
            ln_tail
        } else {
            (-ln_tail.exp()).ln_1p()
        };
    }

    fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() || p < 0.0 || 1.0 < p {
            return f64::NAN;
        }
        if p == 0.0 {
            return f64::NEG_INFINITY;
        }
        if p == 1.0 {
            return f64::INFINITY;
        }

        let x: f64 = euclid::inv_std_normal(p);

        /*
            One step of Halley's rational method (3rd order) is enough to
            get full machine precision from Acklam's aproximation.

            e = cdf(x) - p
            u = e / pdf(x) = e * sqrt(2*pi) * exp(x^2 / 2)
            x_n+1 = x - u / (1 + x * u / 2)

            To avoid the cancelation in `cdf(x) - p` for the upper tail we work
            with the lower tail of the symmetric point.
        */
        let (z, q, sign): (f64, f64, f64) = if x <= 0.0 { (x, p, 1.0) } else { (-x, 1.0 - p, -1.0) };
        let e: f64 = self.cdf(z) - q;
        let u: f64 = e * euclid::SQRT_2_PI * (0.5 * z * z).exp();
        let refined: f64 = z - u / (1.0 + 0.5 * z * u);

        if !refined.is_finite() {
            return x;
        }
        return sign * refined;
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // inverse transform sampling with u in (0, 1)
        let mut u: f64 = rng.random::<f64>();
        while u == 0.0 {
            u = rng.random::<f64>();
        }
        return self.quantile(u);
    }
}

impl Distribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        return StdNormal.pdf(self.standardize(x)) / self.standard_deviation;
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &NORMAL_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        return StdNormal.cdf(self.standardize(x));
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        return StdNormal.ln_pdf(self.standardize(x)) - self.standard_deviation.ln();
    }

    fn ln_cdf(&self, x: f64) -> f64 {
        return StdNormal.ln_cdf(self.standardize(x));
    }

    fn quantile(&self, p: f64) -> f64 {
        return self.mean + self.standard_deviation * StdNormal.quantile(p);
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return self.mean + self.standard_deviation * StdNormal.sample(rng);
    }
}

impl Default for Normal {
    fn default() -> Self {
        Normal {
            mean: 0.0,
            standard_deviation: 1.0,
        }
    }
}
