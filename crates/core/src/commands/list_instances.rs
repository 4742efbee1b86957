use std::io::Write;

use crate::cloud_compute::CloudCompute;
use crate::error::Result;

/// Prints one row per instance: id, type, availability zone, state, public
/// DNS name, and the resolved project tag.
pub async fn list_instances(
    compute: &dyn CloudCompute,
    out: &mut dyn Write,
    project: Option<&str>,
) -> Result<()> {
    for instance in compute.list_instances(project).await? {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            instance.id,
            instance.instance_type,
            instance.availability_zone,
            instance.state,
            instance.public_dns_name,
            instance.project().unwrap_or("<no project>"),
        )?;
    }

    Ok(())
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
    async fn lists_every_instance_with_its_project_tag() {
        let mut stopped = instance("i-2");
        stopped.state = InstanceState::Stopped;
        stopped.public_dns_name = String::new();

        let fake = FakeCompute::new(vec![project_instance("i-1", "web"), stopped]);

        let mut out = Vec::new();
        list_instances(&fake, &mut out, None).await.unwrap();

        pa::assert_str_eq!(
            indoc!(
                r#"
                i-1,t2.micro,us-east-1a,running,i-1.example.compute.amazonaws.com,web
                i-2,t2.micro,us-east-1a,stopped,,<no project>
                "#
            ),
            String::from_utf8(out).unwrap(),
        );
    }

    #[tokio::test]
    async fn honors_the_project_filter() {
        let fake = FakeCompute::new(vec![
            project_instance("i-1", "web"),
            project_instance("i-2", "db"),
            instance("i-3"),
        ]);

        let mut out = Vec::new();
        list_instances(&fake, &mut out, Some("web")).await.unwrap();

        pa::assert_str_eq!(
            "i-1,t2.micro,us-east-1a,running,i-1.example.compute.amazonaws.com,web\n",
            String::from_utf8(out).unwrap(),
        );
    }
}
