use RDistributions::*;
use rand::{Rng, SeedableRng};

#[cfg(test)]
mod draws_shape {

    use super::*;

    #[test]
    fn test_single_and_many() {
        let mut context: RngContext = RngContext::from_seed(1);

        let one: Draws<f64> = rexp(&mut context, 1).seed(42_u64).call().unwrap();
        assert!(matches!(one, Draws::Single(_)));
        assert_eq!(one.len(), 1);
        assert!(one.single().is_some());

        let five: Draws<f64> = rexp(&mut context, 5).seed(42_u64).call().unwrap();
        assert!(matches!(five, Draws::Many(_)));
        assert_eq!(five.len(), 5);

        let none: Draws<u64> = rpois(&mut context, 0).call().unwrap();
        assert!(none.is_empty());
        assert_eq!(none, Draws::Many(Vec::new()));
    }

    #[test]
    fn test_discrete_draws_are_counts() {
        let mut context: RngContext = RngContext::from_seed(2);
        let draws: Draws<u64> = rbinom(&mut context, 200).size(10).prob(0.3).call().unwrap();
        assert!(draws.as_slice().iter().all(|&x| x <= 10));

        let draws: Draws<u64> = rpois(&mut context, 200).mu(50.0).call().unwrap();
        assert_eq!(draws.len(), 200);
    }
}

#[cfg(test)]
mod determinism {

    use super::*;

    #[test]
    fn test_fixed_seed() {
        let mut context: RngContext = RngContext::new();
        let a: Draws<f64> = rnorm(&mut context, 10).seed(42_u64).call().unwrap();
        let b: Draws<f64> = rnorm(&mut context, 10).seed(42_u64).call().unwrap();
        assert_eq!(a, b);

        let c: Draws<f64> = rnorm(&mut context, 10).seed(43_u64).call().unwrap();
        assert_ne!(a, c);

        let a: Draws<u64> = rbinom(&mut context, 10).size(50).prob(0.5).seed(7).call().unwrap();
        let b: Draws<u64> = rbinom(&mut context, 10).size(50).prob(0.5).seed(7).call().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unsuffixed_seed() {
        let mut context: RngContext = RngContext::from_seed(3);
        let a: Draws<f64> = rexp(&mut context, 6).seed(42).call().unwrap();
        let b: Draws<f64> = rexp(&mut context, 6).seed(42_u64).call().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_seed_does_not_touch_default() {
        let mut context: RngContext = RngContext::from_seed(10);
        let mut twin: RngContext = RngContext::from_seed(10);

        let _ = rgamma(&mut context, 5).shape(2.0).seed(3_u64).call().unwrap();

        let a: Draws<f64> = runif(&mut context, 3).call().unwrap();
        let b: Draws<f64> = runif(&mut twin, 3).call().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_default_generator_advances() {
        let mut context: RngContext = RngContext::from_seed(11);
        let a: Draws<f64> = runif(&mut context, 3).call().unwrap();
        let b: Draws<f64> = runif(&mut context, 3).call().unwrap();
        assert_ne!(a, b);

        context.set_seed(11);
        let c: Draws<f64> = runif(&mut context, 3).call().unwrap();
        assert_eq!(a, c);
    }

    #[test]
    fn test_state_restore() {
        let mut context: RngContext = RngContext::from_seed(12);
        let state: Generator = context.get_state();
        let a: Draws<f64> = rchisq(&mut context, 4).df(3.0).call().unwrap();
        context.set_state(state);
        let b: Draws<f64> = rchisq(&mut context, 4).df(3.0).call().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_instance_advances() {
        let mut context: RngContext = RngContext::from_seed(13);
        let mut generator: Generator = Generator::seed_from_u64(42);

        let a: Draws<f64> = rexp(&mut context, 5).seed(&mut generator).call().unwrap();
        let b: Draws<f64> = rexp(&mut context, 5).seed(&mut generator).call().unwrap();
        assert_ne!(a, b);

        // the same as drawing 10 values at once
        let mut fresh: Generator = Generator::seed_from_u64(42);
        let all: Vec<f64> = rexp(&mut context, 10).seed(&mut fresh).call().unwrap().into_vec();
        let mut joined: Vec<f64> = a.into_vec();
        joined.extend(b.into_vec());
        assert_eq!(joined, all);
    }
}

#[cfg(test)]
mod test_seed_tests {

    use super::*;

    #[test]
    fn test_fresh_is_independent() {
        let mut context: RngContext = RngContext::from_seed(20);
        let twin: RngContext = RngContext::from_seed(20);

        let mut fresh: ResolvedGenerator = test_seed(true, &context).unwrap();
        let _: u64 = fresh.random::<u64>();

        let mut expected: Generator = twin.get_state();
        assert_eq!(context.generator_mut().random::<u64>(), expected.random::<u64>());
    }

    #[test]
    fn test_snapshot_matches_default() {
        let mut context: RngContext = RngContext::from_seed(21);

        let value: u64 = {
            let mut snapshot: ResolvedGenerator = test_seed(false, &context).unwrap();
            snapshot.random::<u64>()
        };

        // the default generator was not consumed
        assert_eq!(context.generator_mut().random::<u64>(), value);
    }

    #[test]
    fn test_snapshot_in_sampler() {
        let mut context: RngContext = RngContext::from_seed(22);
        let snapshot: Draws<f64> = rnorm(&mut context, 4).seed(false).call().unwrap();
        let default: Draws<f64> = rnorm(&mut context, 4).call().unwrap();
        assert_eq!(snapshot, default);
    }

    #[test]
    fn test_integer_seeds() {
        let context: RngContext = RngContext::from_seed(23);
        let mut a: ResolvedGenerator = test_seed(42_u64, &context).unwrap();
        let mut b: ResolvedGenerator = test_seed(42_i64, &context).unwrap();
        let mut c: ResolvedGenerator = test_seed("42", &context).unwrap();
        let x: u64 = a.random::<u64>();
        assert_eq!(x, b.random::<u64>());
        assert_eq!(x, c.random::<u64>());
    }

    #[test]
    fn test_instance_passthrough() {
        let context: RngContext = RngContext::from_seed(24);
        let mut generator: Generator = Generator::seed_from_u64(5);
        let mut copy: Generator = generator.clone();

        {
            let mut resolved: ResolvedGenerator = test_seed(&mut generator, &context).unwrap();
            assert!(matches!(resolved, ResolvedGenerator::Borrowed(_)));
            let _: f64 = resolved.random::<f64>();
        }

        // the instance was advanced in place
        let _: f64 = copy.random::<f64>();
        assert_eq!(generator.random::<u64>(), copy.random::<u64>());
    }

    #[test]
    fn test_string_spellings() {
        for spelling in ["TRUE", "T", "true"] {
            assert!(matches!(Seed::try_from(spelling), Ok(Seed::Fresh)));
        }
        for spelling in ["FALSE", "F", "false"] {
            assert!(matches!(Seed::try_from(spelling), Ok(Seed::Snapshot)));
        }
        assert!(matches!(Seed::try_from("17"), Ok(Seed::Fixed(17))));
    }

    #[test]
    fn test_invalid_seed() {
        let context: RngContext = RngContext::from_seed(25);
        let error: DistnError = test_seed("invalid", &context).unwrap_err();
        assert_eq!(error, DistnError::InvalidSeed("invalid".to_string()));
        assert!(error.to_string().contains("seed must be a bool, a non-negative integer or a Generator instance"));

        assert!(matches!(test_seed(-1_i64, &context), Err(DistnError::InvalidSeed(_))));
        assert!(matches!(test_seed("-3", &context), Err(DistnError::InvalidSeed(_))));
        assert!(matches!(test_seed("1.5", &context), Err(DistnError::InvalidSeed(_))));
    }
}
