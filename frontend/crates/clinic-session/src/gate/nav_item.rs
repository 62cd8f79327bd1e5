use crate::Capability;

use clinic_core::Identity;

/// One link in the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub path: String,
    pub capability: Capability,
}

impl NavItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>, capability: Capability) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            capability,
        }
    }
}

/// Menu entries the identity may see.
///
/// Hiding a link is cosmetic; the route's own `AccessGate` still decides.
pub fn visible_items<'a>(items: &'a [NavItem], identity: Option<&Identity>) -> Vec<&'a NavItem> {
    let Some(identity) = identity else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| item.capability.admits(identity))
        .collect()
}
