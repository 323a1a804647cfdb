use k8s_openapi::api::apps::v1::{Deployment, StatefulSet};
use k8s_openapi::api::core::v1::PodSpec;
use k8s_openapi::Resource as _;
use kube::core::DynamicObject;
use kube::ResourceExt;

use crate::error::{Error, Result};

/// Workload types that embed a pod template
pub trait PodTemplated {
    fn pod_spec_mut(&mut self) -> Option<&mut PodSpec>;
}

impl PodTemplated for StatefulSet {
    fn pod_spec_mut(&mut self) -> Option<&mut PodSpec> {
        self.spec.as_mut()?.template.spec.as_mut()
    }
}

impl PodTemplated for Deployment {
    fn pod_spec_mut(&mut self) -> Option<&mut PodSpec> {
        self.spec.as_mut()?.template.spec.as_mut()
    }
}

/// A decoded workload of one of the supported kinds
#[derive(Clone, Debug)]
pub enum Workload {
    StatefulSet(StatefulSet),
    Deployment(Deployment),
}

impl Workload {
    /// Kinds accepted by [`Workload::from_item`]
    pub const KINDS: [&'static str; 2] = [StatefulSet::KIND, Deployment::KIND];

    /// Plural resource names of the supported kinds
    pub const RESOURCES: [&'static str; 2] = [
        StatefulSet::URL_PATH_SEGMENT,
        Deployment::URL_PATH_SEGMENT,
    ];

    /// Decode a generic document, dispatching on its `kind`
    pub fn from_item(item: &DynamicObject) -> Result<Self> {
        let kind = item
            .types
            .as_ref()
            .map(|t| t.kind.as_str())
            .unwrap_or_default();
        let value = serde_json::to_value(item)?;

        if kind == StatefulSet::KIND {
            Ok(Workload::StatefulSet(serde_json::from_value(value)?))
        } else if kind == Deployment::KIND {
            Ok(Workload::Deployment(serde_json::from_value(value)?))
        } else {
            Err(Error::UnsupportedKind {
                kind: kind.to_string(),
            })
        }
    }

    /// Encode back into the generic document form
    pub fn into_item(self) -> Result<DynamicObject> {
        let value = match self {
            Workload::StatefulSet(sts) => serde_json::to_value(sts)?,
            Workload::Deployment(deploy) => serde_json::to_value(deploy)?,
        };
        Ok(serde_json::from_value(value)?)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Workload::StatefulSet(_) => StatefulSet::KIND,
            Workload::Deployment(_) => Deployment::KIND,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Workload::StatefulSet(sts) => sts.name_any(),
            Workload::Deployment(deploy) => deploy.name_any(),
        }
    }

    pub fn pod_spec_mut(&mut self) -> Option<&mut PodSpec> {
        match self {
            Workload::StatefulSet(sts) => sts.pod_spec_mut(),
            Workload::Deployment(deploy) => deploy.pod_spec_mut(),
        }
    }
}
