pub mod restore_env;
pub mod selector;

use kube::core::DynamicObject;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::crd::Restore;
use crate::error::Result;

pub use restore_env::RestoreEnvAction;
pub use selector::ResourceSelector;

/// Name the action is registered under with the host
pub const PLUGIN_NAME: &str = "restore-env/restored-from-backup";

/// A hook the host calls for every restored item matching [`applies_to`](RestoreItemAction::applies_to)
pub trait RestoreItemAction: Send + Sync {
    /// Which resources the host should hand to [`execute`](RestoreItemAction::execute).
    /// A zero-valued selector matches every resource.
    fn applies_to(&self) -> Result<ResourceSelector>;

    /// Transform a single item before it is created in the cluster
    fn execute(&self, input: ExecuteInput) -> Result<ExecuteOutput>;
}

/// Everything the host passes for one item
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteInput {
    /// Item about to be restored, possibly already modified by earlier actions
    pub item: DynamicObject,
    /// Item exactly as stored in the backup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_from_backup: Option<DynamicObject>,
    /// Restore operation being executed
    #[serde(deserialize_with = "Restore::deserialize_lenient")]
    pub restore: Restore,
}

/// Identifies a resource the host should restore alongside the current item
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceIdentifier {
    /// Resource name qualified by group, e.g. `persistentvolumeclaims` or `deployments.apps`
    pub group_resource: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub name: String,
}

/// Result of running an action on one item
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteOutput {
    /// Replacement for the input item
    pub updated_item: DynamicObject,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_items: Vec<ResourceIdentifier>,
    /// When true the host drops the item instead of creating it
    #[serde(default)]
    pub skip_restore: bool,
}

impl ExecuteOutput {
    pub fn new(updated_item: DynamicObject) -> Self {
        Self {
            updated_item,
            additional_items: Vec::new(),
            skip_restore: false,
        }
    }
}

impl ExecuteInput {
    /// Decode an input bundle given as JSON or YAML
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_yaml::from_slice(bytes)?)
    }
}

/// Run an action on one item the way the executable does. Items the action's
/// selector does not cover are still handed to it, so its own checks decide.
pub fn dispatch(action: &dyn RestoreItemAction, input: ExecuteInput) -> Result<ExecuteOutput> {
    let selector = action.applies_to()?;
    if !selector.matches_item(&input.item) {
        warn!(
            item = ?input.item.metadata.name,
            kind = ?input.item.types.as_ref().map(|t| t.kind.as_str()),
            "Item is outside the action's selector"
        );
    }
    action.execute(input)
}
