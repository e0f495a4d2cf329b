use serde::{Deserialize, Serialize};
use url::form_urlencoded;

pub const REL_SELF: &str = "self";
pub const REL_NEXT: &str = "next";
pub const REL_PREVIOUS: &str = "previous";

/// A hypermedia reference embedded in API responses.
///
/// List responses use `self`, `next` and `previous` links for pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Link {
        Link {
            rel: rel.into(),
            href: href.into(),
        }
    }

    /// Returns the first value of the query parameter `name` in `href`.
    ///
    /// # Examples
    ///
    /// ```
    /// use atlas_admin::models::Link;
    ///
    /// let link = Link::new("next", "https://cloud.mongodb.com/api/atlas/v1.0/groups?pageNum=3");
    /// assert_eq!(link.query_param("pageNum").as_deref(), Some("3"));
    /// assert_eq!(link.query_param("itemsPerPage"), None);
    /// ```
    pub fn query_param(&self, name: &str) -> Option<String> {
        let (_, query) = self.href.split_once('?')?;
        let query = query.split_once('#').map_or(query, |(query, _)| query);

        form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}
