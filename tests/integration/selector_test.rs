use kube::core::DynamicObject;
use serde_json::json;

use restored_from_backup_plugin::crd::{Restore, RestoreSpec};
use restored_from_backup_plugin::error::Error;
use restored_from_backup_plugin::plugin::selector::group_resource_of;
use restored_from_backup_plugin::plugin::{
    dispatch, ExecuteInput, RestoreEnvAction, RestoreItemAction, ResourceSelector,
};

fn object(api_version: &str, kind: &str, name: &str, namespace: &str) -> DynamicObject {
    serde_json::from_value(json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": { "name": name, "namespace": namespace }
    }))
    .unwrap()
}

#[test]
fn test_action_selects_only_workloads() {
    let selector = RestoreEnvAction::new().applies_to().unwrap();

    assert!(selector.matches_item(&object("apps/v1", "StatefulSet", "db", "prod")));
    assert!(selector.matches_item(&object("apps/v1", "Deployment", "web", "prod")));
    assert!(!selector.matches_item(&object("apps/v1", "DaemonSet", "agent", "prod")));
    assert!(!selector.matches_item(&object("v1", "ConfigMap", "settings", "prod")));
}

#[test]
fn test_item_without_type_meta_is_not_selected() {
    let item: DynamicObject =
        serde_json::from_value(json!({ "metadata": { "name": "orphan" } })).unwrap();
    assert_eq!(group_resource_of(&item), None);
    assert!(!ResourceSelector::default().matches_item(&item));
}

#[test]
fn test_selector_serializes_in_host_format() {
    let selector = RestoreEnvAction::new().applies_to().unwrap();
    assert_eq!(
        serde_json::to_value(&selector).unwrap(),
        json!({ "includedResources": ["statefulsets", "deployments"] })
    );

    let decoded: ResourceSelector = serde_json::from_value(json!({
        "includedNamespaces": ["prod"],
        "includedResources": ["deployments.apps"],
        "labelSelector": "app=web"
    }))
    .unwrap();
    assert_eq!(decoded.label_selector.as_deref(), Some("app=web"));
    assert!(decoded.matches_item(&object("apps/v1", "Deployment", "web", "prod")));
    assert!(!decoded.matches_item(&object("apps/v1", "Deployment", "web", "dev")));
    assert!(!decoded.matches_item(&object("apps/v1", "StatefulSet", "db", "prod")));
}

#[test]
fn test_dispatch_reports_unselected_kind() {
    let input = ExecuteInput {
        item: object("apps/v1", "DaemonSet", "node-agent", "prod"),
        item_from_backup: None,
        restore: Restore::new("restore-a", RestoreSpec::default()),
    };

    let err = dispatch(&RestoreEnvAction::new(), input).unwrap_err();
    assert!(matches!(err, Error::UnsupportedKind { ref kind } if kind == "DaemonSet"));
}

#[test]
fn test_dispatch_runs_selected_item() {
    let input = ExecuteInput {
        item: object("apps/v1", "Deployment", "web", "prod"),
        item_from_backup: None,
        restore: Restore::new("restore-a", RestoreSpec::default()),
    };

    let output = dispatch(&RestoreEnvAction::new(), input).unwrap();
    assert_eq!(output.updated_item.metadata.name.as_deref(), Some("web"));
    assert!(!output.skip_restore);
}
