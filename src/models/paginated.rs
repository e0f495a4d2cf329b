use serde::{Deserialize, Serialize};

use crate::models::Link;

/// The envelope list endpoints wrap their results in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub total_count: u64,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Paginated {
            results: Vec::new(),
            links: Vec::new(),
            total_count: 0,
        }
    }
}
