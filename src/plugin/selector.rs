use kube::core::{ApiResource, DynamicObject, GroupVersionKind};
use kube::ResourceExt;
use serde::{Deserialize, Serialize};

/// Selects the items an action is invoked for.
/// Every empty field matches everything; exclusions win over inclusions.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSelector {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_namespaces: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_namespaces: Vec<String>,
    /// Plural resource names, optionally group-qualified (`deployments.apps`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_resources: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_resources: Vec<String>,
    /// Label selector in `app=web,tier in (a,b)` form, evaluated by the host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<String>,
}

impl ResourceSelector {
    /// Check a resource by its group-qualified name and namespace.
    /// Cluster-scoped resources pass the namespace filters; labels are left to the host.
    pub fn matches(&self, group_resource: &str, namespace: Option<&str>) -> bool {
        if !filter(
            &self.included_resources,
            &self.excluded_resources,
            group_resource,
            resource_matches,
        ) {
            return false;
        }

        match namespace {
            Some(ns) => {
                let namespace_eq = |p: &str, v: &str| p == v;
                filter(
                    &self.included_namespaces,
                    &self.excluded_namespaces,
                    ns,
                    namespace_eq,
                )
            }
            None => true,
        }
    }

    /// Check a generic document, deriving its resource name from its type meta
    pub fn matches_item(&self, item: &DynamicObject) -> bool {
        group_resource_of(item)
            .is_some_and(|gr| self.matches(&gr, item.namespace().as_deref()))
    }
}

fn filter(
    included: &[String],
    excluded: &[String],
    value: &str,
    eq: fn(&str, &str) -> bool,
) -> bool {
    if excluded.iter().any(|p| p == "*" || eq(p, value)) {
        return false;
    }
    included.is_empty() || included.iter().any(|p| p == "*" || eq(p, value))
}

/// `deployments` matches `deployments.apps`; `deployments.apps` only matches itself
fn resource_matches(pattern: &str, group_resource: &str) -> bool {
    let (p_resource, p_group) = split_group_resource(pattern);
    let (resource, group) = split_group_resource(group_resource);
    p_resource.eq_ignore_ascii_case(resource) && (p_group.is_none() || p_group == group)
}

fn split_group_resource(s: &str) -> (&str, Option<&str>) {
    match s.split_once('.') {
        Some((resource, group)) => (resource, Some(group)),
        None => (s, None),
    }
}

/// Group-qualified plural resource name of a document, e.g. `statefulsets.apps`.
/// Core group resources are unqualified (`configmaps`).
pub fn group_resource_of(item: &DynamicObject) -> Option<String> {
    let types = item.types.as_ref()?;
    if types.kind.is_empty() {
        return None;
    }
    let (group, version) = types
        .api_version
        .split_once('/')
        .unwrap_or(("", types.api_version.as_str()));
    let ar = ApiResource::from_gvk(&GroupVersionKind::gvk(group, version, &types.kind));
    if ar.group.is_empty() {
        Some(ar.plural)
    } else {
        Some(format!("{}.{}", ar.plural, ar.group))
    }
}
