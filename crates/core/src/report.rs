use crate::error::Error;

/// Per-instance outcomes of a batch start/stop run. A rejected transition on
/// one instance never aborts the batch, so callers inspect the report instead
/// of a single `Result`.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<InstanceOutcome>,
}

#[derive(Debug)]
pub struct InstanceOutcome {
    pub instance_id: String,
    pub outcome: Result<(), Error>,
}

impl BatchReport {
    pub fn success(&mut self, instance_id: &str) {
        self.outcomes.push(InstanceOutcome {
            instance_id: instance_id.to_string(),
            outcome: Ok(()),
        });
    }

    pub fn failure(&mut self, instance_id: &str, error: Error) {
        self.outcomes.push(InstanceOutcome {
            instance_id: instance_id.to_string(),
            outcome: Err(error),
        });
    }

    pub fn failures(&self) -> impl Iterator<Item = &InstanceOutcome> {
        self.outcomes.iter().filter(|item| item.outcome.is_err())
    }

    pub fn is_complete_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComputeError;

    #[test]
    fn tracks_failures_per_instance() {
        let mut report = BatchReport::default();

        report.success("i-1");
        report.failure(
            "i-2",
            ComputeError::TransitionRejected {
                instance_id: "i-2".to_string(),
                reason: "not running".to_string(),
            }
            .into(),
        );
        report.success("i-3");

        assert!(!report.is_complete_success());
        assert_eq!(
            vec!["i-2"],
            report
                .failures()
                .map(|item| item.instance_id.as_str())
                .collect::<Vec<_>>(),
        );
    }
}
