use mockall::mock;
use reqwest::Method;

use crate::{
    client::{Client, RequestHead, Response},
    http::HttpClient,
    models::Link,
};

pub const TEST_BASE_URL: &str = "https://cloud.mongodb.com/api/atlas/v1.0/";

mock! {
    pub Http {}

    impl HttpClient for Http {
        async fn execute(
            &self,
            request: reqwest::Request,
        ) -> Result<reqwest::Response, reqwest::Error>;
    }
}

pub fn test_client<H>(http: H) -> Client<H> {
    Client::builder(http).base_url(TEST_BASE_URL).build().unwrap()
}

pub fn json_response(status: u16, body: &str) -> reqwest::Response {
    reqwest::Response::from(
        http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body.to_string())
            .unwrap(),
    )
}

pub fn empty_response(status: u16) -> reqwest::Response {
    reqwest::Response::from(
        http::Response::builder()
            .status(status)
            .body(Vec::<u8>::new())
            .unwrap(),
    )
}

/// A transport failure, as produced by a request that could not be built.
pub fn transport_error() -> reqwest::Error {
    reqwest::Client::new().get("http://").build().unwrap_err()
}

pub fn response_for(method: Method, url: &str, status: u16) -> Response {
    let head = RequestHead {
        method,
        url: url.parse().unwrap(),
        headers: Default::default(),
    };
    Response::new(head, &empty_response(status))
}

pub fn response_with_links(links: Vec<Link>) -> Response {
    let mut response = response_for(Method::GET, TEST_BASE_URL, 200);
    response.links = links;
    response
}

pub fn body_json(request: &reqwest::Request) -> serde_json::Value {
    let bytes = request
        .body()
        .and_then(reqwest::Body::as_bytes)
        .unwrap_or_default();
    serde_json::from_slice(bytes).unwrap()
}
