use RDistributions::*;
use assert_approx_eq::assert_approx_eq;

const PROBABILITIES: [f64; 7] = [0.001, 0.05, 0.25, 0.5, 0.75, 0.95, 0.999];

#[cfg(test)]
mod known_values {

    use super::*;

    #[test]
    fn test_exponential() {
        assert_approx_eq!(qexp(0.5).rate(2.0).call().unwrap(), 0.34657359027997264, 1e-15);
        assert_approx_eq!(pexp(0.34657359).rate(2.0).call().unwrap(), 0.5, 1e-8);
        assert_eq!(dexp(0.0).call().unwrap(), 1.0);
        assert_eq!(dexp(-1.0).call().unwrap(), 0.0);
    }

    #[test]
    fn test_normal() {
        assert_approx_eq!(dnorm(0.0).call().unwrap(), 0.3989422804014327, 1e-15);
        assert_approx_eq!(pnorm(1.96).call().unwrap(), 0.9750021048517795, 1e-14);
        assert_approx_eq!(qnorm(0.975).call().unwrap(), 1.959963984540054, 1e-12);
        assert_approx_eq!(dnorm(1.0).mean(2.0).sd(3.0).call().unwrap(), 0.12579440923099772, 1e-15);
    }

    #[test]
    fn test_gamma() {
        assert_approx_eq!(dgamma(2.0).shape(2.0).call().unwrap(), 0.2706705664732254, 1e-14);
        assert_approx_eq!(pgamma(2.0).shape(2.0).call().unwrap(), 0.5939941502901619, 1e-13);
        assert_approx_eq!(pgamma(2.0).shape(3.0).rate(2.0).call().unwrap(), 0.7618966944464561, 1e-13);
        assert_approx_eq!(qgamma(0.5).shape(3.0).call().unwrap(), 2.67406031372356, 1e-9);
    }

    #[test]
    fn test_chi_squared() {
        assert_approx_eq!(dchisq(1.0).df(2.0).call().unwrap(), 0.3032653298563167, 1e-14);
        assert_approx_eq!(pchisq(1.0).df(2.0).call().unwrap(), 0.3934693402873666, 1e-14);
        assert_approx_eq!(qchisq(0.95).df(1.0).call().unwrap(), 3.841458820694124, 1e-9);
    }

    #[test]
    fn test_uniform() {
        assert_eq!(dunif(0.5).max(2.0).call().unwrap(), 0.5);
        assert_eq!(punif(0.5).max(2.0).call().unwrap(), 0.25);
        assert_eq!(qunif(0.25).max(2.0).call().unwrap(), 0.5);
        assert_eq!(dunif(0.5).call().unwrap(), 1.0);
    }

    #[test]
    fn test_poisson() {
        assert_approx_eq!(dpois(3.0).mu(3.0).call().unwrap(), 0.22404180765538775, 1e-15);
        assert_approx_eq!(ppois(2.0).mu(2.0).call().unwrap(), 0.6766764161830634, 1e-14);
        assert_eq!(qpois(0.5).mu(1.5).call().unwrap(), 1.0);
        assert_approx_eq!(dpois(0.0).call().unwrap(), (-1.0_f64).exp(), 1e-15);
    }

    #[test]
    fn test_binomial() {
        assert_approx_eq!(dbinom(17.0).size(22).prob(0.5).call().unwrap(), 0.006278514862060547, 1e-15);
        assert_approx_eq!(pbinom(1.0).size(3).prob(0.5).call().unwrap(), 0.5, 1e-14);
        assert_eq!(qbinom(0.5).size(3).prob(0.5).call().unwrap(), 1.0);
    }
}

#[cfg(test)]
mod round_trips {

    use super::*;

    #[test]
    fn test_continuous() {
        for &p in PROBABILITIES.iter() {
            let x: f64 = qexp(p).rate(3.0).call().unwrap();
            assert_approx_eq!(pexp(x).rate(3.0).call().unwrap(), p, 1e-12);

            let x: f64 = qgamma(p).shape(2.5).rate(0.5).call().unwrap();
            assert_approx_eq!(pgamma(x).shape(2.5).rate(0.5).call().unwrap(), p, 1e-10);

            let x: f64 = qnorm(p).mean(-4.0).sd(0.5).call().unwrap();
            assert_approx_eq!(pnorm(x).mean(-4.0).sd(0.5).call().unwrap(), p, 1e-12);

            let x: f64 = qchisq(p).df(7.0).call().unwrap();
            assert_approx_eq!(pchisq(x).df(7.0).call().unwrap(), p, 1e-10);

            let x: f64 = qunif(p).min(-1.0).max(3.0).call().unwrap();
            assert_approx_eq!(punif(x).min(-1.0).max(3.0).call().unwrap(), p, 1e-14);
        }
    }

    #[test]
    fn test_discrete() {
        for &p in PROBABILITIES.iter() {
            let x: f64 = qpois(p).mu(6.5).call().unwrap();
            assert!(p <= ppois(x).mu(6.5).call().unwrap() + 1e-12);
            assert!(ppois(x - 1.0).mu(6.5).call().unwrap() < p);

            let x: f64 = qbinom(p).size(40).prob(0.35).call().unwrap();
            assert!(p <= pbinom(x).size(40).prob(0.35).call().unwrap() + 1e-12);
            assert!(pbinom(x - 1.0).size(40).prob(0.35).call().unwrap() < p);
        }
    }

    #[test]
    fn test_small_shapes_and_scales() {
        for shape in [0.05, 0.1, 0.5, 2.5, 30.0] {
            for rate in [1e-10, 1.0, 1e20] {
                for &p in PROBABILITIES.iter() {
                    let x: f64 = qgamma(p).shape(shape).rate(rate).call().unwrap();
                    let back: f64 = pgamma(x).shape(shape).rate(rate).call().unwrap();
                    assert!(0.0 < x);
                    assert!((back - p).abs() <= 1e-10 * p, "shape {shape}, rate {rate}, p {p}: {back}");
                }
            }
        }

        for df in [0.1, 0.5, 1.0, 7.0, 200.0] {
            for &p in PROBABILITIES.iter() {
                let x: f64 = qchisq(p).df(df).call().unwrap();
                let back: f64 = pchisq(x).df(df).call().unwrap();
                assert!(0.0 < x);
                assert!((back - p).abs() <= 1e-10 * p, "df {df}, p {p}: {back}");
            }
        }
    }

    #[test]
    fn test_tiny_quantiles() {
        let x: f64 = qgamma(0.5).shape(2.0).rate(1e20).call().unwrap();
        assert!((x / 1.6783469900166607e-20 - 1.0).abs() < 1e-12, "{x}");

        let x: f64 = qgamma(0.1).shape(0.01).call().unwrap();
        assert_approx_eq!(pgamma(x).shape(0.01).call().unwrap(), 0.1, 1e-12);

        let x: f64 = qchisq(0.1).df(0.1).call().unwrap();
        assert!((x / 1.1689264114573042e-20 - 1.0).abs() < 1e-12, "{x}");
        assert_approx_eq!(pchisq(x).df(0.1).call().unwrap(), 0.1, 1e-12);
    }

    #[test]
    fn test_quantile_bounds() {
        assert_eq!(qexp(0.0).call().unwrap(), 0.0);
        assert_eq!(qexp(1.0).call().unwrap(), f64::INFINITY);
        assert_eq!(qnorm(0.0).call().unwrap(), f64::NEG_INFINITY);
        assert_eq!(qpois(1.0).call().unwrap(), f64::INFINITY);
        assert_eq!(qbinom(1.0).size(9).prob(0.1).call().unwrap(), 9.0);
        assert!(qnorm(1.5).call().unwrap().is_nan());
        assert!(qpois(-0.5).call().unwrap().is_nan());
    }
}

#[cfg(test)]
mod log_consistency {

    use super::*;

    #[test]
    fn test_density() {
        for x in [0.1, 0.5, 1.0, 2.0, 7.5] {
            let d: f64 = dexp(x).rate(1.5).call().unwrap();
            assert_approx_eq!(dexp(x).rate(1.5).log(true).call().unwrap(), d.ln(), 1e-12);

            let d: f64 = dgamma(x).shape(2.5).call().unwrap();
            assert_approx_eq!(dgamma(x).shape(2.5).log(true).call().unwrap(), d.ln(), 1e-12);

            let d: f64 = dnorm(x).mean(1.0).sd(2.0).call().unwrap();
            assert_approx_eq!(dnorm(x).mean(1.0).sd(2.0).log(true).call().unwrap(), d.ln(), 1e-12);

            let d: f64 = dchisq(x).df(3.0).call().unwrap();
            assert_approx_eq!(dchisq(x).df(3.0).log(true).call().unwrap(), d.ln(), 1e-12);

            let d: f64 = dunif(x).max(10.0).call().unwrap();
            assert_approx_eq!(dunif(x).max(10.0).log(true).call().unwrap(), d.ln(), 1e-12);
        }

        for x in [0.0, 1.0, 4.0, 9.0] {
            let d: f64 = dpois(x).mu(3.0).call().unwrap();
            assert_approx_eq!(dpois(x).mu(3.0).log(true).call().unwrap(), d.ln(), 1e-12);

            let d: f64 = dbinom(x).size(10).prob(0.4).call().unwrap();
            assert_approx_eq!(dbinom(x).size(10).prob(0.4).log(true).call().unwrap(), d.ln(), 1e-12);
        }
    }

    #[test]
    fn test_cumulative() {
        for q in [0.2, 1.0, 3.0] {
            let p: f64 = pgamma(q).shape(2.0).call().unwrap();
            assert_approx_eq!(pgamma(q).shape(2.0).log(true).call().unwrap(), p.ln(), 1e-12);

            let p: f64 = pnorm(q).call().unwrap();
            assert_approx_eq!(pnorm(q).log(true).call().unwrap(), p.ln(), 1e-12);

            let p: f64 = ppois(q).mu(2.0).call().unwrap();
            assert_approx_eq!(ppois(q).mu(2.0).log(true).call().unwrap(), p.ln(), 1e-12);
        }
    }

    #[test]
    fn test_cumulative_tails() {
        // all of these underflow without the log
        assert_eq!(ppois(0.0).mu(1000.0).call().unwrap(), 0.0);
        assert_approx_eq!(ppois(0.0).mu(1000.0).log(true).call().unwrap(), -1000.0, 1e-9);
        assert_approx_eq!(ppois(10.0).mu(1000.0).log(true).call().unwrap(), -946.0168196296328, 1e-9);

        assert_approx_eq!(pbinom(0.0).size(1000).prob(0.5).log(true).call().unwrap(), -693.1471805599453, 1e-9);
        assert_approx_eq!(pbinom(3.0).size(2000).prob(0.4).log(true).call().unwrap(), -1001.8559424775526, 1e-8);

        assert_approx_eq!(pgamma(1e-5).shape(100.0).log(true).call().unwrap(), -1515.0319319535765, 1e-9);
        assert_approx_eq!(pchisq(1e-10).df(50.0).log(true).call().unwrap(), -650.97855798553865, 1e-9);

        // and the upper end
        assert_approx_eq!(ppois(5000.0).mu(1000.0).log(true).call().unwrap(), 0.0, 1e-15);
        assert_eq!(pbinom(1000.0).size(1000).prob(0.5).log(true).call().unwrap(), 0.0);
        assert_eq!(pbinom(3.0).size(10).prob(1.0).log(true).call().unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_outside_support() {
        assert_eq!(dexp(-1.0).log(true).call().unwrap(), f64::NEG_INFINITY);
        assert_eq!(dunif(2.0).log(true).call().unwrap(), f64::NEG_INFINITY);
        assert_eq!(dpois(-2.0).log(true).call().unwrap(), f64::NEG_INFINITY);
        assert_eq!(pexp(-1.0).log(true).call().unwrap(), f64::NEG_INFINITY);
        // non-integer points have no mass
        assert_eq!(dpois(1.5).call().unwrap(), 0.0);
        assert_eq!(dbinom(2.5).size(5).prob(0.5).call().unwrap(), 0.0);
    }
}

/// Behaviours that were broken in the first R port of these functions.
#[cfg(test)]
mod fixed_defects {

    use super::*;

    #[test]
    fn test_dnorm_log_is_log_density() {
        let log_density: f64 = dnorm(0.0).log(true).call().unwrap();
        assert_approx_eq!(log_density, -0.9189385332046728, 1e-15);
    }

    #[test]
    fn test_dchisq_is_chi_squared_density() {
        // the density of a chi squared, not of another family
        let d: f64 = dchisq(3.0).df(4.0).call().unwrap();
        assert_approx_eq!(d, 0.75 * (-1.5_f64).exp(), 1e-15);
    }

    #[test]
    fn test_qbinom_uses_binomial() {
        assert_eq!(qbinom(0.95).size(100).prob(0.3).call().unwrap(), 38.0);
    }

    #[test]
    fn test_dexp_log_is_log_density() {
        assert_approx_eq!(dexp(1.0).rate(2.0).log(true).call().unwrap(), 2.0_f64.ln() - 2.0, 1e-15);
    }

    #[test]
    fn test_pchisq_is_cumulative() {
        // P(X <= x) for df = 2 is 1 - exp(-x/2)
        let p: f64 = pchisq(4.0).df(2.0).call().unwrap();
        assert_approx_eq!(p, 1.0 - (-2.0_f64).exp(), 1e-14);
    }

    #[test]
    fn test_runif_uses_seed() {
        let mut context: RngContext = RngContext::from_seed(99);
        let a: Vec<f64> = runif(&mut context, 4).seed(5_u64).call().unwrap().into_vec();
        let mut other: RngContext = RngContext::from_seed(12345);
        let b: Vec<f64> = runif(&mut other, 4).seed(5_u64).call().unwrap().into_vec();
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod parameter_errors {

    use super::*;

    #[test]
    fn test_errors_propagate() {
        assert_eq!(dexp(1.0).rate(-1.0).call(), Err(DistnError::InvalidNumber("rate")));
        assert_eq!(pnorm(1.0).sd(0.0).call(), Err(DistnError::InvalidNumber("sd")));
        assert_eq!(qgamma(0.5).shape(f64::NAN).call(), Err(DistnError::NanErr));
        assert_eq!(dbinom(1.0).size(3).prob(1.2).call(), Err(DistnError::InvalidNumber("prob")));
        assert!(punif(0.5).min(2.0).max(1.0).call().is_err());

        let mut context: RngContext = RngContext::from_seed(1);
        assert!(rchisq(&mut context, 3).df(-2.0).call().is_err());
        assert!(rpois(&mut context, 3).mu(-2.0).call().is_err());
    }
}
