use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ListOptions, list_options::is_unset_or_empty};

/// An alert raised in a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_config_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledged_until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgement_comment: Option<String>,
}

/// The request body that acknowledges an alert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, typed_builder::TypedBuilder)]
#[builder(doc)]
#[serde(rename_all = "camelCase")]
pub struct AcknowledgeRequest {
    /// Acknowledge until this moment. Leaving it unset unacknowledges the alert.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledged_until: Option<DateTime<Utc>>,
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgement_comment: Option<String>,
}

/// Query options for listing alerts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, typed_builder::TypedBuilder)]
#[builder(doc)]
pub struct AlertsListOptions {
    /// Only return alerts in this status: `OPEN`, `TRACKING` or `CLOSED`
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "is_unset_or_empty")]
    pub status: Option<String>,
    #[builder(default)]
    #[serde(flatten)]
    pub list: ListOptions,
}
