//! Endpoint groups of the Atlas Administration API.
//!
//! Each group is a small handle borrowing the [`Client`](crate::Client) it was
//! obtained from. Methods validate their required arguments before any request
//! is sent, returning [`Error::Argument`](crate::Error::Argument) when one is
//! empty.

use std::borrow::Cow;

use crate::error::ArgError;

mod alerts;
mod auditing;
mod cluster_outage_simulation;
mod clusters;
mod database_users;
mod logs;
mod project_ip_access_list;
mod projects;

pub use alerts::AlertsService;
pub use auditing::AuditingService;
pub use cluster_outage_simulation::ClusterOutageSimulationService;
pub use clusters::ClustersService;
pub use database_users::DatabaseUsersService;
pub use logs::LogsService;
pub use project_ip_access_list::ProjectIpAccessListService;
pub use projects::ProjectsService;

const MUST_BE_SET: &str = "must be set";

/// Fails with an argument error named `name` when `value` is empty.
fn require(name: &str, value: &str) -> Result<(), ArgError> {
    if value.is_empty() {
        return Err(ArgError::new(name, MUST_BE_SET));
    }
    Ok(())
}

/// Percent-encodes a user supplied path segment.
fn escape(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}
