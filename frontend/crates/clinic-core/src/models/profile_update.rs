use serde::{Deserialize, Serialize};

/// Partial profile change submitted by a settings form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    /// Number of fields the update touches.
    pub fn changed_fields(&self) -> usize {
        [
            self.display_name.is_some(),
            self.phone.is_some(),
            self.avatar_url.is_some(),
        ]
        .into_iter()
        .filter(|changed| *changed)
        .count()
    }
}
