use aws_sdk_ec2::Client as Ec2Client;
use aws_sdk_ec2::client::Waiters;
use aws_sdk_ec2::types::{Filter, Instance as Ec2Instance};
use fleetsnap_core::cloud_compute::WaitParams;
use fleetsnap_core::error::{ComputeError, Result};
use fleetsnap_core::models::{Instance, InstanceState, PROJECT_TAG};

use crate::aws_error::{map_aws_error, map_transition_error};

pub(super) async fn list_instances(
    client: &Ec2Client,
    project: Option<&str>,
) -> Result<Vec<Instance>> {
    let mut request = client.describe_instances();

    if let Some(project) = project {
        request = request.filters(
            Filter::builder()
                .name(format!("tag:{PROJECT_TAG}"))
                .values(project)
                .build(),
        );
    }

    let mut pages = request.into_paginator().send();
    let mut instances = Vec::new();

    while let Some(page) = pages.next().await {
        let page = page.map_err(|error| map_aws_error("DescribeInstances", error))?;

        for reservation in page.reservations() {
            for instance in reservation.instances() {
                instances.push(convert_instance(instance)?);
            }
        }
    }

    Ok(instances)
}

pub(super) async fn start_instance(client: &Ec2Client, instance_id: &str) -> Result<()> {
    client
        .start_instances()
        .instance_ids(instance_id)
        .send()
        .await
        .map_err(|error| map_transition_error("StartInstances", instance_id, error))?;

    Ok(())
}

pub(super) async fn stop_instance(client: &Ec2Client, instance_id: &str) -> Result<()> {
    client
        .stop_instances()
        .instance_ids(instance_id)
        .send()
        .await
        .map_err(|error| map_transition_error("StopInstances", instance_id, error))?;

    Ok(())
}

pub(super) async fn wait_until_stopped(
    client: &Ec2Client,
    instance_id: &str,
    wait: &WaitParams,
) -> Result<()> {
    client
        .wait_until_instance_stopped()
        .instance_ids(instance_id)
        .wait(wait.timeout)
        .await
        .map_err(|error| ComputeError::WaitFailed {
            instance_id: instance_id.to_string(),
            target: "stopped".to_string(),
            reason: error.to_string(),
        })?;

    Ok(())
}

pub(super) async fn wait_until_running(
    client: &Ec2Client,
    instance_id: &str,
    wait: &WaitParams,
) -> Result<()> {
    client
        .wait_until_instance_running()
        .instance_ids(instance_id)
        .wait(wait.timeout)
        .await
        .map_err(|error| ComputeError::WaitFailed {
            instance_id: instance_id.to_string(),
            target: "running".to_string(),
            reason: error.to_string(),
        })?;

    Ok(())
}

fn convert_instance(instance: &Ec2Instance) -> Result<Instance> {
    let id = instance
        .instance_id()
        .ok_or(ComputeError::MissingInstanceIdentifier)?
        .to_string();

    let state = instance
        .state()
        .and_then(|state| state.name())
        .map(|name| InstanceState::from_name(name.as_str()))
        .unwrap_or_else(|| InstanceState::Other("unknown".to_string()));

    let tags = instance
        .tags()
        .iter()
        .filter_map(|tag| Some((tag.key()?.to_string(), tag.value()?.to_string())))
        .collect();

    Ok(Instance {
        id,
        instance_type: instance
            .instance_type()
            .map(|instance_type| instance_type.as_str().to_string())
            .unwrap_or_default(),
        availability_zone: instance
            .placement()
            .and_then(|placement| placement.availability_zone())
            .unwrap_or_default()
            .to_string(),
        state,
        public_dns_name: instance.public_dns_name().unwrap_or_default().to_string(),
        tags,
    })
}
