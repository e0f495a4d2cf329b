use bytes::Bytes;
use reqwest::{Method, StatusCode, Url, header::HeaderMap};

use crate::models::Link;

/// The parts of an outgoing request that stay observable after it is sent.
#[derive(Debug, Clone)]
pub struct RequestHead {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

impl From<&reqwest::Request> for RequestHead {
    fn from(request: &reqwest::Request) -> Self {
        RequestHead {
            method: request.method().clone(),
            url: request.url().clone(),
            headers: request.headers().clone(),
        }
    }
}

/// The response to an API call.
///
/// The body has already been consumed by the time callers see this value. It
/// keeps the status line, the headers and the hypermedia links of the page.
#[derive(Debug, Clone)]
pub struct Response {
    request: RequestHead,
    status: StatusCode,
    headers: HeaderMap,
    pub(crate) links: Vec<Link>,
    pub(crate) raw: Option<Bytes>,
}

impl Response {
    pub(crate) fn new(request: RequestHead, response: &reqwest::Response) -> Response {
        Response {
            request,
            status: response.status(),
            headers: response.headers().clone(),
            links: Vec::new(),
            raw: None,
        }
    }

    /// The request this is a response to.
    pub fn request(&self) -> &RequestHead {
        &self.request
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Links found in the decoded response envelope, if any.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// The raw response body, present only when the client was built with
    /// [`ClientBuilder::with_raw`](crate::ClientBuilder::with_raw).
    pub fn raw(&self) -> Option<&Bytes> {
        self.raw.as_ref()
    }
}
