use k8s_openapi::api::core::v1::{Container, EnvVar, PodSpec};

/// Environment variable recording which restore produced a workload.
/// Downstream consumers read this name, so it must not change.
pub const RESTORED_FROM_BACKUP: &str = "RESTORED_FROM_BACKUP";

/// Replace any existing `RESTORED_FROM_BACKUP` entry on the container with one
/// carrying `restore_name`. Other entries keep their order.
pub fn set_restored_from(container: &mut Container, restore_name: &str) {
    let env = container.env.get_or_insert_with(Vec::new);
    env.retain(|e| e.name != RESTORED_FROM_BACKUP);
    env.push(EnvVar {
        name: RESTORED_FROM_BACKUP.to_string(),
        value: Some(restore_name.to_string()),
        value_from: None,
    });
}

/// Apply [`set_restored_from`] to every regular container of the pod spec.
/// Returns the names of the containers that were touched.
pub fn apply_to_pod_spec(pod_spec: &mut PodSpec, restore_name: &str) -> Vec<String> {
    pod_spec
        .containers
        .iter_mut()
        .map(|container| {
            set_restored_from(container, restore_name);
            container.name.clone()
        })
        .collect()
}

/// Value of the reserved variable on a container, if present.
pub fn restored_from(container: &Container) -> Option<&str> {
    container
        .env
        .as_ref()?
        .iter()
        .find(|e| e.name == RESTORED_FROM_BACKUP)
        .and_then(|e| e.value.as_deref())
}
