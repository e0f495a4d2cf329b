/// The HTTP transport the client sends its requests through.
///
/// Authentication (digest or otherwise) and connection pooling are the
/// responsibility of the implementation. The client only builds requests and
/// interprets responses.
pub trait HttpClient {
    fn execute(
        &self,
        request: reqwest::Request,
    ) -> impl Future<Output = Result<reqwest::Response, reqwest::Error>>;
}

impl HttpClient for reqwest::Client {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, reqwest::Error> {
        reqwest::Client::execute(self, request).await
    }
}
