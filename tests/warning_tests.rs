use RDistributions::*;
use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    Registry,
    layer::{Context, Layer, SubscriberExt},
};

/// Counts the `WARN` events emitted while it is the default subscriber.
#[derive(Clone, Default)]
struct WarnCounter {
    count: Arc<Mutex<usize>>,
}

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            *self.count.lock().expect("poisoned counter") += 1;
        }
    }
}

fn count_warnings<F: FnOnce()>(f: F) -> usize {
    let counter: WarnCounter = WarnCounter::default();
    let subscriber = Registry::default().with(counter.clone());
    tracing::subscriber::with_default(subscriber, f);
    return *counter.count.lock().expect("poisoned counter");
}

#[cfg(test)]
mod r_warnings {

    use super::*;

    #[test]
    fn test_non_integer_mass() {
        let warnings: usize = count_warnings(|| {
            assert_eq!(dpois(1.5).call().unwrap(), 0.0);
        });
        assert_eq!(warnings, 1);

        let warnings: usize = count_warnings(|| {
            assert_eq!(dbinom(2.5).size(5).prob(0.5).log(true).call().unwrap(), f64::NEG_INFINITY);
        });
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_probability_outside_range() {
        let warnings: usize = count_warnings(|| {
            assert!(qnorm(1.5).call().unwrap().is_nan());
        });
        assert_eq!(warnings, 1);

        let warnings: usize = count_warnings(|| {
            assert!(qpois(-0.5).mu(2.0).call().unwrap().is_nan());
            assert!(qgamma(2.0).shape(3.0).call().unwrap().is_nan());
        });
        assert_eq!(warnings, 2);
    }

    #[test]
    fn test_no_warning_for_valid_input() {
        let warnings: usize = count_warnings(|| {
            let _ = dpois(2.0).mu(3.0).call().unwrap();
            let _ = dbinom(1.0).size(4).prob(0.2).call().unwrap();
            let _ = qnorm(0.5).call().unwrap();
            let _ = qnorm(f64::NAN).call().unwrap();
            let _ = pnorm(7.5).call().unwrap();
        });
        assert_eq!(warnings, 0);
    }
}
