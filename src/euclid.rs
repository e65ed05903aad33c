//! Special functions and numerical helpers shared by the distributions.
//!
//! Contains the [log-gamma function](ln_gamma), the regularized incomplete
//! [gamma](reg_lower_gamma) and [beta](incomplete_beta) functions, an
//! approximation of the [inverse of the standard normal cdf](inv_std_normal)
//! and the search used by the quantile functions of the discrete distributions.
//!

use crate::configuration::{
    self,
    special_functions::{
        INCOMPLETE_BETA_MAX_ITERATIONS, INCOMPLETE_GAMMA_MAX_ITERATIONS, LENTZ_FLOOR,
        SERIES_EPSILON,
    },
};

/// `sqrt(2 * pi)`
pub const SQRT_2_PI: f64 = 2.506_628_274_631_000_5;
/// `1 / sqrt(2 * pi)`
pub const INV_SQRT_2_PI: f64 = 0.398_942_280_401_432_7;
/// `ln(sqrt(2 * pi))`
pub const LN_SQRT_2_PI: f64 = 0.918_938_533_204_672_8;

/// Lanczos coefitients (`g = 7`, `n = 9`).
const LANCZOS_COEFITIENTS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

// Acklam's coefitients for the inverse of the cdf of the standard normal.
const ACKLAM_A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];
const ACKLAM_B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];
const ACKLAM_C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];
const ACKLAM_D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];
/// Break point between the central region and the tails.
const ACKLAM_P_LOW: f64 = 0.02425;

/// Natural log of the absolute value of the [Gamma function](https://en.wikipedia.org/wiki/Gamma_function),
/// `ln(|Gamma(x)|)`.
///
/// Uses the [Lanczos approximation](https://en.wikipedia.org/wiki/Lanczos_approximation)
/// for `0.5 <= x` and the reflection formula otherwise.
///  - Poles (`0, -1, -2, ...`) return `+inf`.
///  - NaNs are propagated.
pub fn ln_gamma(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }

    if x == f64::INFINITY {
        return f64::INFINITY;
    }

    if x <= 0.0 && x.fract() == 0.0 {
        return f64::INFINITY;
    }

    if x < 0.5 {
        /*
            Reflection formula:
            Gamma(x) * Gamma(1 - x) = pi / sin(pi * x)
            ln|Gamma(x)| = ln(pi) - ln|sin(pi * x)| - ln|Gamma(1 - x)|
        */
        let pi: f64 = std::f64::consts::PI;
        return pi.ln() - (pi * x).sin().abs().ln() - ln_gamma(1.0 - x);
    }

    let z: f64 = x - 1.0;
    let mut a: f64 = LANCZOS_COEFITIENTS[0];
    for (i, c) in LANCZOS_COEFITIENTS.iter().enumerate().skip(1) {
        a += c / (z + i as f64);
    }
    // t = z + g + 1/2
    let t: f64 = z + 7.5;

    return LN_SQRT_2_PI + (z + 0.5) * t.ln() - t + a.ln();
}

/// Returns `ln(binom(n, k))`, the natural log of the
/// [binomial coefitient](https://en.wikipedia.org/wiki/Binomial_coefficient).
///
/// Assumes `0 <= k <= n`.
pub fn ln_binomial_coefficient(n: f64, k: f64) -> f64 {
    if k == 0.0 || k == n {
        return 0.0;
    }
    return ln_gamma(n + 1.0) - ln_gamma(k + 1.0) - ln_gamma(n - k + 1.0);
}

/// Computes `ln(1 - exp(x))` for `x <= 0` without losing precision.
///
/// See: Mächler, M. (2012). "Accurately Computing log(1 - exp(-|a|))".
pub fn ln_1m_exp(x: f64) -> f64 {
    if 0.0 < x {
        return f64::NAN;
    }
    if -std::f64::consts::LN_2 < x {
        return (-x.exp_m1()).ln();
    }
    return (-x.exp()).ln_1p();
}

/// Regularized lower [incomplete gamma function](https://en.wikipedia.org/wiki/Incomplete_gamma_function)
/// `P(a, x)`.
///
///  - NaNs are propagated.
///  - `a <= 0.0` returns a NaN.
///  - `x <= 0.0` returns `0.0` and `x = +inf` returns `1.0`.
pub fn reg_lower_gamma(a: f64, x: f64) -> f64 {
    if a.is_nan() || x.is_nan() || a <= 0.0 || a.is_infinite() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x.is_infinite() {
        return 1.0;
    }

    return match ln_incomplete_gamma(a, x) {
        IncompleteGamma::Lower(ln_p) => ln_p.exp(),
        IncompleteGamma::Upper(ln_q) => 1.0 - ln_q.exp(),
    };
}

/// Regularized upper [incomplete gamma function](https://en.wikipedia.org/wiki/Incomplete_gamma_function)
/// `Q(a, x) = 1 - P(a, x)`.
///
/// It is more precise than computing `1.0 - reg_lower_gamma(a, x)` when the
/// result is small. Follows the same conventions as [reg_lower_gamma].
pub fn reg_upper_gamma(a: f64, x: f64) -> f64 {
    if a.is_nan() || x.is_nan() || a <= 0.0 || a.is_infinite() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 1.0;
    }
    if x.is_infinite() {
        return 0.0;
    }

    return match ln_incomplete_gamma(a, x) {
        IncompleteGamma::Lower(ln_p) => 1.0 - ln_p.exp(),
        IncompleteGamma::Upper(ln_q) => ln_q.exp(),
    };
}

/// `ln(P(a, x))`, computed without leaving log space. Stays finite when
/// [reg_lower_gamma] underflows. Follows the same conventions as [reg_lower_gamma].
pub fn ln_reg_lower_gamma(a: f64, x: f64) -> f64 {
    if a.is_nan() || x.is_nan() || a <= 0.0 || a.is_infinite() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if x.is_infinite() {
        return 0.0;
    }

    return match ln_incomplete_gamma(a, x) {
        IncompleteGamma::Lower(ln_p) => ln_p,
        IncompleteGamma::Upper(ln_q) => ln_1m_exp(ln_q),
    };
}

/// `ln(Q(a, x))`, computed without leaving log space. Stays finite when
/// [reg_upper_gamma] underflows. Follows the same conventions as [reg_lower_gamma].
pub fn ln_reg_upper_gamma(a: f64, x: f64) -> f64 {
    if a.is_nan() || x.is_nan() || a <= 0.0 || a.is_infinite() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x.is_infinite() {
        return f64::NEG_INFINITY;
    }

    return match ln_incomplete_gamma(a, x) {
        IncompleteGamma::Lower(ln_p) => ln_1m_exp(ln_p),
        IncompleteGamma::Upper(ln_q) => ln_q,
    };
}

/// The side of the incomplete gamma function that was computed directly.
enum IncompleteGamma {
    /// `ln(P(a, x))`
    Lower(f64),
    /// `ln(Q(a, x))`
    Upper(f64),
}

/// Assumes `0 < a` and `0 < x`, both finite.
fn ln_incomplete_gamma(a: f64, x: f64) -> IncompleteGamma {
    /*
        Numerical Recipes, section 6.2:
         - For `x < a + 1` the series for `P` converges fast.
         - Otherwise we use the continued fraction for `Q` (evaluated with
            the modified Lentz's method).

        Both are multiplied by the common factor:
            `exp(-x) * x^a / Gamma(a)`
        wich we keep in log space.
    */

    let ln_front: f64 = a * x.ln() - x - ln_gamma(a);

    if x < a + 1.0 {
        let mut ap: f64 = a;
        let mut sum: f64 = 1.0 / a;
        let mut term: f64 = sum;
        for _ in 0..INCOMPLETE_GAMMA_MAX_ITERATIONS {
            ap += 1.0;
            term *= x / ap;
            sum += term;
            if term.abs() < sum.abs() * SERIES_EPSILON {
                break;
            }
        }

        return IncompleteGamma::Lower((ln_front + sum.ln()).min(0.0));
    }

    let mut b: f64 = x + 1.0 - a;
    let mut c: f64 = 1.0 / LENTZ_FLOOR;
    let mut d: f64 = 1.0 / b;
    let mut h: f64 = d;
    for i in 1..INCOMPLETE_GAMMA_MAX_ITERATIONS {
        let i_f: f64 = i as f64;
        let an: f64 = -i_f * (i_f - a);
        b += 2.0;

        d = an * d + b;
        if d.abs() < LENTZ_FLOOR {
            d = LENTZ_FLOOR;
        }
        c = b + an / c;
        if c.abs() < LENTZ_FLOOR {
            c = LENTZ_FLOOR;
        }
        d = 1.0 / d;

        let delta: f64 = d * c;
        h *= delta;
        if (delta - 1.0).abs() < SERIES_EPSILON {
            break;
        }
    }

    return IncompleteGamma::Upper((ln_front + h.ln()).min(0.0));
}

/// Regularized [incomplete beta function](https://en.wikipedia.org/wiki/Beta_function#Incomplete_beta_function)
/// `I_x(a, b)`.
///
///  - NaNs are propagated.
///  - `a <= 0.0` or `b <= 0.0` return a NaN.
///  - `x <= 0.0` returns `0.0` and `1.0 <= x` returns `1.0`.
pub fn incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    if a.is_nan() || b.is_nan() || x.is_nan() || a <= 0.0 || b <= 0.0 {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if 1.0 <= x {
        return 1.0;
    }

    // the continued fraction converges fast only on this side. Use the symmetry:
    // I_x(a, b) = 1 - I_{1-x}(b, a)
    if (a + 1.0) / (a + b + 2.0) < x {
        return 1.0 - ln_beta_fraction(b, a, 1.0 - x).exp();
    }
    return ln_beta_fraction(a, b, x).exp();
}

/// `ln(I_x(a, b))`, computed without leaving log space. Stays finite when
/// [incomplete_beta] underflows. Follows the same conventions as [incomplete_beta].
pub fn ln_incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    if a.is_nan() || b.is_nan() || x.is_nan() || a <= 0.0 || b <= 0.0 {
        return f64::NAN;
    }
    if x <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if 1.0 <= x {
        return 0.0;
    }

    if (a + 1.0) / (a + b + 2.0) < x {
        return ln_1m_exp(ln_beta_fraction(b, a, 1.0 - x));
    }
    return ln_beta_fraction(a, b, x);
}

/// The logarithm of the continued fraction of `I_x(a, b)`. Only converges fast
/// for `x <= (a + 1) / (a + b + 2)`.
fn ln_beta_fraction(a: f64, b: f64, x: f64) -> f64 {
    // front = x^a * (1-x)^b / (a * B(a, b))
    let ln_beta: f64 = ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b);
    let ln_front: f64 = a * x.ln() + b * (-x).ln_1p() - ln_beta - a.ln();

    let mut c: f64 = 1.0;
    let mut d: f64 = 1.0 - (a + b) * x / (a + 1.0);
    if d.abs() < LENTZ_FLOOR {
        d = LENTZ_FLOOR;
    }
    d = 1.0 / d;
    let mut h: f64 = d;

    for m in 1..=INCOMPLETE_BETA_MAX_ITERATIONS {
        let m_f: f64 = m as f64;
        let m2: f64 = 2.0 * m_f;

        // even step
        let aa: f64 = m_f * (b - m_f) * x / ((a + m2 - 1.0) * (a + m2));
        d = 1.0 + aa * d;
        if d.abs() < LENTZ_FLOOR {
            d = LENTZ_FLOOR;
        }
        c = 1.0 + aa / c;
        if c.abs() < LENTZ_FLOOR {
            c = LENTZ_FLOOR;
        }
        d = 1.0 / d;
        h *= d * c;

        // odd step
        let aa: f64 = -(a + m_f) * (a + b + m_f) * x / ((a + m2) * (a + m2 + 1.0));
        d = 1.0 + aa * d;
        if d.abs() < LENTZ_FLOOR {
            d = LENTZ_FLOOR;
        }
        c = 1.0 + aa / c;
        if c.abs() < LENTZ_FLOOR {
            c = LENTZ_FLOOR;
        }
        d = 1.0 / d;

        let delta: f64 = d * c;
        h *= delta;
        if (delta - 1.0).abs() < SERIES_EPSILON {
            break;
        }
    }

    return (ln_front + h.ln()).min(0.0);
}

/// Approximates the inverse of the cdf of the standard normal using
/// [Acklam's algorithm](https://web.archive.org/web/20151030215612/http://home.online.no/~pjacklam/notes/invnorm/).
///
/// The relative error is smaller than `1.15 * 10^-9`, the quantile of
/// the [Normal](crate::distributions::Normal) refines it afterwards.
///  - `p = 0.0` returns `-inf` and `p = 1.0` returns `+inf`.
///  - Values outside `[0, 1]` (and NaNs) return a NaN.
pub fn inv_std_normal(p: f64) -> f64 {
    if p.is_nan() || p < 0.0 || 1.0 < p {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    // work on the lower half and flip the sign for the upper one
    let (q, sign): (f64, f64) = if p < 0.5 { (p, 1.0) } else { (1.0 - p, -1.0) };

    let x: f64 = if q < ACKLAM_P_LOW {
        let t: f64 = (-2.0 * q.ln()).sqrt();
        let num: f64 = ACKLAM_C[0]
            .mul_add(t, ACKLAM_C[1])
            .mul_add(t, ACKLAM_C[2])
            .mul_add(t, ACKLAM_C[3])
            .mul_add(t, ACKLAM_C[4])
            .mul_add(t, ACKLAM_C[5]);
        let den: f64 = ACKLAM_D[0]
            .mul_add(t, ACKLAM_D[1])
            .mul_add(t, ACKLAM_D[2])
            .mul_add(t, ACKLAM_D[3])
            .mul_add(t, 1.0);
        num / den
    } else {
        let t: f64 = q - 0.5;
        let r: f64 = t * t;
        let num: f64 = ACKLAM_A[0]
            .mul_add(r, ACKLAM_A[1])
            .mul_add(r, ACKLAM_A[2])
            .mul_add(r, ACKLAM_A[3])
            .mul_add(r, ACKLAM_A[4])
            .mul_add(r, ACKLAM_A[5]);
        let den: f64 = ACKLAM_B[0]
            .mul_add(r, ACKLAM_B[1])
            .mul_add(r, ACKLAM_B[2])
            .mul_add(r, ACKLAM_B[3])
            .mul_add(r, ACKLAM_B[4])
            .mul_add(r, 1.0);
        num * t / den
    };

    return sign * x;
}

/// Finds the smallest integer `y` inside `bounds` such that
/// `p * (1 - fuzz) <= cdf(y)`, starting the search at `guess`.
///
/// `cdf` must be a non-decreasing function. The closer the guess is to the
/// awnser, the fewer evaluations of `cdf` are needed. `p` is assumed to be
/// in `(0, 1)`.
pub fn discrete_quantile_search<F>(cdf: F, guess: f64, bounds: (f64, f64), p: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let target: f64 = p * (1.0 - configuration::DISCRETE_QUANTILE_FUZZ);

    let mut y: f64 = if guess.is_finite() {
        guess.floor().clamp(bounds.0, bounds.1)
    } else {
        bounds.0
    };

    if target <= cdf(y) {
        // go left while we still satisfy the condition
        while bounds.0 < y && target <= cdf(y - 1.0) {
            y -= 1.0;
        }
        return y;
    }

    loop {
        y += 1.0;
        if bounds.1 <= y {
            return bounds.1;
        }
        if target <= cdf(y) {
            return y;
        }
    }
}
