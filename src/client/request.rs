use reqwest::{
    Body, Method, Url,
    header::{ACCEPT, CONTENT_TYPE, HeaderValue, USER_AGENT},
};
use serde::Serialize;

use crate::{
    client::Client,
    error::{ArgError, Error},
};

const MEDIA_TYPE_JSON: &str = "application/json";
const MEDIA_TYPE_GZIP: &str = "application/gzip";

impl<H> Client<H> {
    /// Resolves `path` against the base URL.
    ///
    /// `path` must be relative: a leading `/` would replace the base URL's path
    /// instead of extending it.
    pub fn resolve(&self, path: &str) -> Result<Url, Error> {
        if path.starts_with('/') {
            return Err(ArgError::new("path", "must be relative to the base URL").into());
        }

        Ok(self.base_url.join(path)?)
    }

    /// Builds a request without a body that expects a JSON response.
    pub fn new_request(&self, method: Method, path: &str) -> Result<reqwest::Request, Error> {
        self.build_request(method, path, MEDIA_TYPE_JSON, None)
    }

    /// Builds a request carrying `body` encoded as JSON, expecting a JSON
    /// response.
    pub fn new_request_with_body<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Request, Error>
    where
        B: Serialize + ?Sized,
    {
        // serde_json leaves <, > and & unescaped
        let body = serde_json::to_vec(body).map_err(Error::EncodeBody)?;
        self.build_request(method, path, MEDIA_TYPE_JSON, Some(body))
    }

    /// Builds a request without a body that expects a gzip payload, used by
    /// log downloads.
    pub fn new_gzip_request(&self, method: Method, path: &str) -> Result<reqwest::Request, Error> {
        self.build_request(method, path, MEDIA_TYPE_GZIP, None)
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        accept: &'static str,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Request, Error> {
        let url = self.resolve(path)?;
        let mut request = reqwest::Request::new(method, url);

        let headers = request.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static(accept));
        headers.insert(USER_AGENT, self.user_agent.clone());

        if let Some(body) = body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(MEDIA_TYPE_JSON));
            *request.body_mut() = Some(Body::from(body));
        }

        Ok(request)
    }
}
