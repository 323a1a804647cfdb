use tracing::{debug, info};

use crate::env::{apply_to_pod_spec, RESTORED_FROM_BACKUP};
use crate::error::Result;
use crate::workload::Workload;

use super::{ExecuteInput, ExecuteOutput, ResourceSelector, RestoreItemAction};

/// Stamps every container of restored StatefulSets and Deployments with
/// `RESTORED_FROM_BACKUP=<restore name>`.
#[derive(Clone, Debug, Default)]
pub struct RestoreEnvAction;

impl RestoreEnvAction {
    pub fn new() -> Self {
        Self
    }
}

impl RestoreItemAction for RestoreEnvAction {
    fn applies_to(&self) -> Result<ResourceSelector> {
        Ok(ResourceSelector {
            included_resources: Workload::RESOURCES.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        })
    }

    fn execute(&self, input: ExecuteInput) -> Result<ExecuteOutput> {
        let restore_name = input.restore.metadata.name.clone().unwrap_or_default();
        let mut workload = Workload::from_item(&input.item)?;
        let kind = workload.kind();
        let name = workload.name();

        match workload.pod_spec_mut() {
            Some(pod_spec) => {
                for container in apply_to_pod_spec(pod_spec, &restore_name) {
                    info!(
                        %kind,
                        %name,
                        %container,
                        env = RESTORED_FROM_BACKUP,
                        restore = %restore_name,
                        "Added restore marker to container environment"
                    );
                }
            }
            None => debug!(%kind, %name, "Workload has no pod template, nothing to mark"),
        }

        Ok(ExecuteOutput::new(workload.into_item()?))
    }
}
