use serde::{Deserialize, Serialize};

/// The database auditing configuration of a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auditing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_authorization_success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
