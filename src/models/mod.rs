mod alert;
mod auditing;
mod cluster;
mod cluster_outage_simulation;
mod database_user;
mod link;
mod list_options;
mod paginated;
mod project;
mod project_ip_access_list;

pub use alert::*;
pub use auditing::*;
pub use cluster::*;
pub use cluster_outage_simulation::*;
pub use database_user::*;
pub use link::*;
pub use list_options::*;
pub use paginated::*;
pub use project::*;
pub use project_ip_access_list::*;
