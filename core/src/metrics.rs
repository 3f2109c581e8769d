//! Process counters for evaluated and rejected packages.

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

static GLOBAL: Lazy<Option<Metrics>> = Lazy::new(|| match Metrics::new() {
    Ok(m) => Some(m),
    Err(e) => {
        log::warn!("metrics registry disabled: {e}");
        None
    }
});

/// Process-wide counters; `None` if the registry could not be built.
pub fn global() -> Option<&'static Metrics> {
    GLOBAL.as_ref()
}

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    trainings_evaluated: IntCounterVec,
    packages_rejected: IntCounterVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let trainings_evaluated = IntCounterVec::new(
            Opts::new(
                "workout_trainings_evaluated_total",
                "Workouts turned into a report line",
            ),
            &["workout_type"],
        )?;
        let packages_rejected = IntCounterVec::new(
            Opts::new(
                "workout_packages_rejected_total",
                "Packages that could not be turned into a workout",
            ),
            &["reason"],
        )?;

        registry.register(Box::new(trainings_evaluated.clone()))?;
        registry.register(Box::new(packages_rejected.clone()))?;

        Ok(Self {
            registry,
            trainings_evaluated,
            packages_rejected,
        })
    }

    pub fn record_evaluated(&self, training_type: &str) {
        self.trainings_evaluated
            .with_label_values(&[training_type])
            .inc();
    }

    pub fn record_rejected(&self, reason: &str) {
        self.packages_rejected.with_label_values(&[reason]).inc();
    }

    pub fn evaluated(&self, training_type: &str) -> u64 {
        self.trainings_evaluated
            .with_label_values(&[training_type])
            .get()
    }

    pub fn rejected(&self, reason: &str) -> u64 {
        self.packages_rejected.with_label_values(&[reason]).get()
    }

    /// Prometheus text exposition of all counters.
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_labelled() {
        let m = Metrics::new().unwrap();
        m.record_evaluated("Running");
        m.record_evaluated("Running");
        m.record_rejected("arity_mismatch");

        assert_eq!(m.evaluated("Running"), 2);
        assert_eq!(m.evaluated("Swimming"), 0);
        assert_eq!(m.rejected("arity_mismatch"), 1);

        let text = m.render().unwrap();
        assert!(text.contains("workout_trainings_evaluated_total{workout_type=\"Running\"} 2"));
    }
}
