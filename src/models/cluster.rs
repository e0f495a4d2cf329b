use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::models::Link;

/// A cluster of a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<String>,
    #[serde(rename = "mongoDBMajorVersion", skip_serializing_if = "Option::is_none")]
    pub mongo_db_major_version: Option<String>,
    #[serde(rename = "mongoDBVersion", skip_serializing_if = "Option::is_none")]
    pub mongo_db_version: Option<String>,
    #[serde(rename = "diskSizeGB", skip_serializing_if = "Option::is_none")]
    pub disk_size_gb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_shards: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_backup_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_settings: Option<ProviderSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_strings: Option<ConnectionStrings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_name: Option<ClusterState>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backing_provider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_size_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStrings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_srv: Option<String>,
}

/// The lifecycle state of a cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClusterState {
    Idle,
    Creating,
    Updating,
    Deleting,
    Deleted,
    Repairing,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FromStrClusterStateError {
    #[error("Invalid cluster state: {0}")]
    InvalidState(String),
}

impl Display for ClusterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClusterState::Idle => write!(f, "IDLE"),
            ClusterState::Creating => write!(f, "CREATING"),
            ClusterState::Updating => write!(f, "UPDATING"),
            ClusterState::Deleting => write!(f, "DELETING"),
            ClusterState::Deleted => write!(f, "DELETED"),
            ClusterState::Repairing => write!(f, "REPAIRING"),
        }
    }
}

impl FromStr for ClusterState {
    type Err = FromStrClusterStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IDLE" => Ok(ClusterState::Idle),
            "CREATING" => Ok(ClusterState::Creating),
            "UPDATING" => Ok(ClusterState::Updating),
            "DELETING" => Ok(ClusterState::Deleting),
            "DELETED" => Ok(ClusterState::Deleted),
            "REPAIRING" => Ok(ClusterState::Repairing),
            _ => Err(FromStrClusterStateError::InvalidState(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_state_from_str() {
        assert_eq!("IDLE".parse::<ClusterState>(), Ok(ClusterState::Idle));
        assert_eq!("creating".parse::<ClusterState>(), Ok(ClusterState::Creating));
        assert_eq!(
            "bogus".parse::<ClusterState>(),
            Err(FromStrClusterStateError::InvalidState("bogus".to_string()))
        );
    }

    #[test]
    fn test_cluster_state_display_matches_wire_name() {
        for state in [
            ClusterState::Idle,
            ClusterState::Creating,
            ClusterState::Updating,
            ClusterState::Deleting,
            ClusterState::Deleted,
            ClusterState::Repairing,
        ] {
            assert_eq!(
                serde_json::to_value(state).unwrap(),
                serde_json::Value::String(state.to_string())
            );
        }
    }

    #[test]
    fn test_cluster_deserialize() {
        let cluster: Cluster = serde_json::from_str(
            r#"{"id":"c-id","name":"Cluster0","stateName":"IDLE","providerSettings":{"providerName":"AWS","instanceSizeName":"M10"},"connectionStrings":{"standardSrv":"mongodb+srv://cluster0.example.net"}}"#,
        )
        .unwrap();

        assert_eq!(cluster.name.as_deref(), Some("Cluster0"));
        assert_eq!(cluster.state_name, Some(ClusterState::Idle));
        assert_eq!(
            cluster.provider_settings.unwrap().instance_size_name.as_deref(),
            Some("M10")
        );
        assert_eq!(
            cluster.connection_strings.unwrap().standard_srv.as_deref(),
            Some("mongodb+srv://cluster0.example.net")
        );
    }
}
