use std::collections::BTreeMap;

use serde::Serialize;
use url::form_urlencoded;

use crate::error::Error;

type Params = BTreeMap<String, Vec<String>>;

/// Merges the query parameters encoded by `options` into `path`.
///
/// Parameters already present on `path` are kept unless `options` sets a
/// parameter with the same name, which then replaces them. Unset and zero-valued
/// options are left out. Parameters are emitted sorted by name.
///
/// # Examples
///
/// ```
/// use atlas_admin::{models::ListOptions, set_options};
///
/// let options = ListOptions::builder().page_num(2).items_per_page(50).build();
/// let path = set_options("groups/g1/accessList", Some(&options)).unwrap();
///
/// assert_eq!(path, "groups/g1/accessList?itemsPerPage=50&pageNum=2");
/// ```
pub fn set_options<O>(path: &str, options: Option<&O>) -> Result<String, Error>
where
    O: Serialize + ?Sized,
{
    let Some(options) = options else {
        return Ok(path.to_string());
    };

    let (base, query) = path.split_once('?').unwrap_or((path, ""));

    let mut params = parse(query);
    params.extend(parse(&serde_urlencoded::to_string(options)?));

    if params.is_empty() {
        return Ok(base.to_string());
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, values) in &params {
        for value in values {
            serializer.append_pair(name, value);
        }
    }

    Ok(format!("{base}?{}", serializer.finish()))
}

fn parse(query: &str) -> Params {
    let mut params = Params::new();
    for (name, value) in form_urlencoded::parse(query.as_bytes()) {
        params
            .entry(name.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    params
}
