use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Restore is the backup system's record of a single restore operation.
/// The hook only reads its name, but the whole object travels with every item.
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "velero.io",
    version = "v1",
    kind = "Restore",
    plural = "restores",
    status = "RestoreStatus",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct RestoreSpec {
    /// Name of the backup to restore from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_name: Option<String>,

    /// Schedule whose latest backup is restored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_name: Option<String>,

    /// Namespaces to include (all if empty)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_namespaces: Vec<String>,

    /// Namespaces to exclude
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_namespaces: Vec<String>,

    /// Resources to include (all if empty)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_resources: Vec<String>,

    /// Resources to exclude
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_resources: Vec<String>,

    /// Source namespace to target namespace renames
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub namespace_mapping: BTreeMap<String, String>,

    /// Label selector restricting restored items (pass-through)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<serde_json::Value>,

    /// Whether to restore persistent volumes from snapshots
    #[serde(rename = "restorePVs", skip_serializing_if = "Option::is_none")]
    pub restore_pvs: Option<bool>,

    /// Whether to keep node ports of restored services
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_node_ports: Option<bool>,

    /// Whether cluster-scoped resources are restored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_cluster_resources: Option<bool>,

    /// What to do with resources already present in the cluster: none or update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_resource_policy: Option<String>,
}

/// Lifecycle phase of a restore
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
pub enum RestorePhase {
    New,
    FailedValidation,
    InProgress,
    WaitingForPluginOperations,
    WaitingForPluginOperationsPartiallyFailed,
    Finalizing,
    FinalizingPartiallyFailed,
    Completed,
    PartiallyFailed,
    Failed,
    /// Phase introduced by a newer host
    #[serde(other)]
    Unknown,
}

impl Restore {
    /// Decode a restore handed over by the host. A missing or null `spec` is
    /// treated as empty since only the metadata is needed.
    pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Restore, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut value = serde_json::Value::deserialize(deserializer)?;
        if let Some(obj) = value.as_object_mut() {
            if obj.get("spec").is_none_or(serde_json::Value::is_null) {
                obj.insert("spec".to_string(), serde_json::json!({}));
            }
        }
        serde_json::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// Item counters reported while a restore runs
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestoreProgress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_restored: Option<i64>,
}

/// Status of a Restore resource
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestoreStatus {
    /// Current phase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<RestorePhase>,

    /// Reasons the restore spec was rejected
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation_errors: Vec<String>,

    /// Number of warnings emitted so far
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<i32>,

    /// Number of errors emitted so far
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_timestamp: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<RestoreProgress>,
}
