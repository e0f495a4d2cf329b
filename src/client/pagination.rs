use crate::{
    client::Response,
    models::{Link, REL_NEXT, REL_SELF},
};

const PAGE_NUM_PARAM: &str = "pageNum";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PaginationError {
    #[error("response has no 'self' link")]
    MissingSelfLink,
    #[error("'self' link has no pageNum parameter: {0}")]
    MissingPageNum(String),
    #[error("'self' link has a non-integer pageNum parameter: {0}")]
    InvalidPageNum(String),
}

impl Response {
    /// Returns true when the response carries no `next` link.
    pub fn is_last_page(&self) -> bool {
        self.next_link().is_none()
    }

    /// The link to the following page, if there is one.
    pub fn next_link(&self) -> Option<&Link> {
        self.link(REL_NEXT)
    }

    /// Returns the page number encoded in the `self` link.
    pub fn current_page(&self) -> Result<u32, PaginationError> {
        let link = self.link(REL_SELF).ok_or(PaginationError::MissingSelfLink)?;

        let page_num = link
            .query_param(PAGE_NUM_PARAM)
            .ok_or_else(|| PaginationError::MissingPageNum(link.href.clone()))?;

        page_num
            .parse()
            .map_err(|_| PaginationError::InvalidPageNum(page_num))
    }

    fn link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.rel == rel)
    }
}
