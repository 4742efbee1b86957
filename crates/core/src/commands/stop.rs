use std::io::Write;

use crate::cloud_compute::CloudCompute;
use crate::error::Result;
use crate::report::BatchReport;

/// Requests a stop for every matching instance, with the same fire-and-continue
/// semantics as [`super::start_instances`].
pub async fn stop_instances(
    compute: &dyn CloudCompute,
    out: &mut dyn Write,
    project: Option<&str>,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for instance in compute.list_instances(project).await? {
        writeln!(out, "Stopping {}...", instance.id)?;

        match compute.stop_instance(&instance.id).await {
            Ok(()) => report.success(&instance.id),
            Err(error) => {
                writeln!(out, "Could not stop {}: {}", instance.id, error)?;
                report.failure(&instance.id, error);
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeCompute;
    use crate::models::InstanceState;
    use crate::test_utils::*;
    use indoc::indoc;
    use pretty_assertions as pa;

    #[tokio::test]
    async fn a_rejected_instance_does_not_abort_the_batch() {
        let mut fake = FakeCompute::new(vec![
            project_instance("i-1", "web"),
            project_instance("i-2", "web"),
        ]);
        fake.reject_stop("i-1");

        let mut out = Vec::new();
        let report = stop_instances(&fake, &mut out, None).await.unwrap();

        pa::assert_str_eq!(
            indoc!(
                r#"
                Stopping i-1...
                Could not stop i-1: instance i-1 rejected the state transition: not in a state from which it can be stopped
                Stopping i-2...
                "#
            ),
            String::from_utf8(out).unwrap(),
        );

        assert!(!report.is_complete_success());
        pa::assert_eq!(Some(InstanceState::Running), fake.instance_state("i-1"));
        pa::assert_eq!(Some(InstanceState::Stopping), fake.instance_state("i-2"));
    }
}
