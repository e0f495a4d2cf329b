use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A regional outage simulated on a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterOutageSimulation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outage_filters: Vec<OutageFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_request_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Selects the cloud region an outage simulation applies to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutageFilter {
    pub cloud_provider: String,
    pub region_name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The request body that starts an outage simulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterOutageSimulationRequest {
    pub outage_filters: Vec<OutageFilter>,
}
