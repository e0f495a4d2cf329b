use serde::Serialize;

/// Pagination parameters accepted by list endpoints.
///
/// Unset and zero-valued fields are left out of the query string.
///
/// # Examples
///
/// ```
/// use atlas_admin::models::ListOptions;
///
/// let options = ListOptions::builder()
///     .page_num(2)
///     .items_per_page(50)
///     .build();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, typed_builder::TypedBuilder)]
#[builder(doc)]
#[serde(rename_all = "camelCase")]
pub struct ListOptions {
    /// The 1-based page to return
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "is_unset_or_zero")]
    pub page_num: Option<u32>,
    /// The number of items per page
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "is_unset_or_zero")]
    pub items_per_page: Option<u32>,
    /// Ask the server to fill in `totalCount`
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "is_unset_or_false")]
    pub include_count: Option<bool>,
}

/// Date range filter for log downloads, in seconds since the UNIX epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, typed_builder::TypedBuilder)]
#[builder(doc)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeOptions {
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "is_unset_or_zero")]
    pub start_date: Option<i64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "is_unset_or_zero")]
    pub end_date: Option<i64>,
}

// Query options leave zero values out, like unset ones.
pub(crate) fn is_unset_or_zero<N: Default + PartialEq>(value: &Option<N>) -> bool {
    value.as_ref().is_none_or(|value| *value == N::default())
}

pub(crate) fn is_unset_or_false(value: &Option<bool>) -> bool {
    !value.unwrap_or_default()
}

pub(crate) fn is_unset_or_empty(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

impl DateRangeOptions {
    /// Builds a range from two timestamps.
    pub fn between(start: chrono::DateTime<chrono::Utc>, end: chrono::DateTime<chrono::Utc>) -> Self {
        DateRangeOptions {
            start_date: Some(start.timestamp()),
            end_date: Some(end.timestamp()),
        }
    }
}
