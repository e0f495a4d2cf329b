use bytes::Bytes;
use serde::{Deserialize, de::DeserializeOwned};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::{
    client::{Client, RequestHead, Response},
    context::Context,
    error::{Error, ErrorPayload, ErrorResponse},
    http::HttpClient,
    models::Link,
};

/// Where the body of a successful response goes.
pub enum Sink<'a> {
    /// Buffer the body so it can be decoded as JSON.
    Json,
    /// Stream the body, unmodified, into a writer.
    Writer(&'a mut (dyn AsyncWrite + Unpin + Send)),
    /// Drop the body unread.
    Discard,
}

/// What a [`Sink`] received.
#[derive(Debug)]
pub enum Delivered {
    Json(Bytes),
    Written(u64),
    Discarded,
}

#[derive(Deserialize)]
struct LinksProbe {
    #[serde(default)]
    links: Option<Vec<Link>>,
}

impl<H: HttpClient> Client<H> {
    /// Sends `request` and decodes the JSON response body into `T`.
    ///
    /// An empty body decodes to `T::default()`.
    pub async fn send<T>(&self, ctx: &Context, request: reqwest::Request) -> Result<(T, Response), Error>
    where
        T: DeserializeOwned + Default,
    {
        let (delivered, response) = self.dispatch(ctx, request, Sink::Json).await?;
        let body = match delivered {
            Delivered::Json(body) => body,
            Delivered::Written(_) | Delivered::Discarded => Bytes::new(),
        };

        match decode(&body) {
            Ok(value) => Ok((value, response)),
            Err(source) => Err(Error::Decode {
                source,
                response: Box::new(response),
            }),
        }
    }

    /// Sends `request` and streams the response body into `writer`.
    ///
    /// Returns the number of bytes written.
    pub async fn send_to_writer<W>(
        &self,
        ctx: &Context,
        request: reqwest::Request,
        writer: &mut W,
    ) -> Result<(u64, Response), Error>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let (delivered, response) = self.dispatch(ctx, request, Sink::Writer(writer)).await?;
        let written = match delivered {
            Delivered::Written(written) => written,
            Delivered::Json(_) | Delivered::Discarded => 0,
        };

        Ok((written, response))
    }

    /// Sends `request`, ignoring the body of a successful response.
    pub async fn send_and_discard(
        &self,
        ctx: &Context,
        request: reqwest::Request,
    ) -> Result<Response, Error> {
        let (_, response) = self.dispatch(ctx, request, Sink::Discard).await?;
        Ok(response)
    }

    /// Performs the round-trip for `request` and routes the body into `sink`.
    ///
    /// Non-2xx responses become [`Error::Response`]. When the round-trip fails
    /// while `ctx` is done, the cancellation cause is returned rather than the
    /// transport error.
    pub async fn dispatch(
        &self,
        ctx: &Context,
        request: reqwest::Request,
        sink: Sink<'_>,
    ) -> Result<(Delivered, Response), Error> {
        let head = RequestHead::from(&request);
        debug!(method = %head.method, url = %head.url, "Sending request");

        let http_response = match ctx.run(self.http.execute(request)).await {
            Ok(Ok(http_response)) => http_response,
            Ok(Err(err)) => return Err(ctx.err().map_or(Error::Transport(err), Error::Context)),
            Err(cause) => return Err(cause.into()),
        };

        if let Some(on_request_completed) = &self.on_request_completed {
            on_request_completed(&head, &http_response);
        }

        let mut response = Response::new(head, &http_response);
        debug!(
            method = %response.request().method,
            url = %response.request().url,
            status = %response.status(),
            "Received response"
        );

        if !response.status().is_success() {
            return Err(check_response(ctx, response, http_response).await);
        }

        match sink {
            Sink::Json => {
                let body = read_body(ctx, http_response).await?;

                if let Some(links) = probe_links(&body) {
                    response.links = links;
                }
                if self.with_raw {
                    response.raw = Some(body.clone());
                }

                Ok((Delivered::Json(body), response))
            }
            Sink::Writer(writer) => match copy_body(ctx, http_response, writer).await {
                Ok(written) => Ok((Delivered::Written(written), response)),
                Err(CopyError::Read(err)) => Err(err),
                Err(CopyError::Write(source)) => Err(Error::Copy {
                    source,
                    response: Box::new(response),
                }),
            },
            Sink::Discard => Ok((Delivered::Discarded, response)),
        }
    }
}

/// Turns a non-2xx response into an [`ErrorResponse`].
///
/// The body is decoded as an error payload. A body that is not a payload ends
/// up verbatim in the reason.
async fn check_response(ctx: &Context, response: Response, http_response: reqwest::Response) -> Error {
    let body = match ctx.run(http_response.bytes()).await {
        Ok(Ok(body)) => body,
        _ => Bytes::new(),
    };

    let payload = if body.is_empty() {
        ErrorPayload::default()
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|err| {
            debug!(error = %err, status = %response.status(), "Error response body is not an error payload");
            ErrorPayload {
                reason: Some(String::from_utf8_lossy(&body).into_owned()),
                ..Default::default()
            }
        })
    };

    ErrorResponse::new(response, payload).into()
}

async fn read_body(ctx: &Context, http_response: reqwest::Response) -> Result<Bytes, Error> {
    match ctx.run(http_response.bytes()).await? {
        Ok(body) => Ok(body),
        Err(err) => Err(transport_error(ctx, err)),
    }
}

enum CopyError {
    Read(Error),
    Write(std::io::Error),
}

async fn copy_body(
    ctx: &Context,
    mut http_response: reqwest::Response,
    writer: &mut (dyn AsyncWrite + Unpin + Send),
) -> Result<u64, CopyError> {
    let mut written = 0;

    loop {
        let chunk = match ctx.run(http_response.chunk()).await {
            Ok(Ok(Some(chunk))) => chunk,
            Ok(Ok(None)) => break,
            Ok(Err(err)) => return Err(CopyError::Read(transport_error(ctx, err))),
            Err(cause) => return Err(CopyError::Read(cause.into())),
        };

        writer.write_all(&chunk).await.map_err(CopyError::Write)?;
        written += chunk.len() as u64;
    }

    writer.flush().await.map_err(CopyError::Write)?;
    Ok(written)
}

fn transport_error(ctx: &Context, err: reqwest::Error) -> Error {
    ctx.err().map_or(Error::Transport(err), Error::Context)
}

fn decode<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, serde_json::Error> {
    let body = body.trim_ascii();
    if body.is_empty() || body == b"null" {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
}

fn probe_links(body: &[u8]) -> Option<Vec<Link>> {
    if body.trim_ascii_start().first() != Some(&b'{') {
        return None;
    }
    serde_json::from_slice::<LinksProbe>(body).ok()?.links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        context::ContextError,
        models::{Paginated, REL_NEXT, REL_SELF},
        test_utils::{MockHttp, empty_response, json_response, test_client, transport_error as failed},
    };
    use pretty_assertions::assert_eq;
    use reqwest::Method;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Record {
        name: String,
    }

    struct CancelOnSend(Context);

    impl HttpClient for CancelOnSend {
        async fn execute(&self, _request: reqwest::Request) -> Result<reqwest::Response, reqwest::Error> {
            self.0.cancel();
            Err(failed())
        }
    }

    struct Hang;

    impl HttpClient for Hang {
        async fn execute(&self, _request: reqwest::Request) -> Result<reqwest::Response, reqwest::Error> {
            std::future::pending().await
        }
    }

    struct FailingWriter;

    impl AsyncWrite for FailingWriter {
        fn poll_write(
            self: std::pin::Pin<&mut Self>,
            _cx: &mut std::task::Context<'_>,
            _buf: &[u8],
        ) -> std::task::Poll<std::io::Result<usize>> {
            std::task::Poll::Ready(Err(std::io::Error::other("disk full")))
        }

        fn poll_flush(
            self: std::pin::Pin<&mut Self>,
            _cx: &mut std::task::Context<'_>,
        ) -> std::task::Poll<std::io::Result<()>> {
            std::task::Poll::Ready(Ok(()))
        }

        fn poll_shutdown(
            self: std::pin::Pin<&mut Self>,
            _cx: &mut std::task::Context<'_>,
        ) -> std::task::Poll<std::io::Result<()>> {
            std::task::Poll::Ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn test_send_decodes_json() {
        // Arrange
        let mut mock_http = MockHttp::new();
        mock_http
            .expect_execute()
            .withf(|request| request.url().path() == "/api/atlas/v1.0/groups/g1")
            .times(1)
            .returning(|_| Ok(json_response(200, r#"{"name":"g1"}"#)));

        let client = test_client(mock_http);
        let request = client.new_request(Method::GET, "groups/g1").unwrap();

        // Act
        let (record, response): (Record, _) =
            client.send(&Context::background(), request).await.unwrap();

        // Assert
        assert_eq!(record.name, "g1");
        assert_eq!(response.status().as_u16(), 200);
        assert!(response.links().is_empty());
        assert!(response.raw().is_none());
    }

    #[tokio::test]
    async fn test_send_empty_body_is_default() {
        // Arrange
        let mut mock_http = MockHttp::new();
        mock_http
            .expect_execute()
            .times(1)
            .returning(|_| Ok(empty_response(202)));

        let client = test_client(mock_http);
        let request = client.new_request(Method::DELETE, "groups/g1").unwrap();

        // Act
        let (record, response): (Record, _) =
            client.send(&Context::background(), request).await.unwrap();

        // Assert
        assert_eq!(record, Record::default());
        assert_eq!(response.status().as_u16(), 202);
    }

    #[tokio::test]
    async fn test_send_null_body_is_default() {
        // Arrange
        let mut mock_http = MockHttp::new();
        mock_http
            .expect_execute()
            .times(1)
            .returning(|_| Ok(json_response(200, " null\n")));

        let client = test_client(mock_http);
        let request = client.new_request(Method::GET, "groups/g1").unwrap();

        // Act
        let (record, response): (Record, _) =
            client.send(&Context::background(), request).await.unwrap();

        // Assert
        assert_eq!(record, Record::default());
        assert_eq!(response.status().as_u16(), 200);
    }

    #[tokio::test]
    async fn test_send_decode_error_keeps_response() {
        // Arrange
        let mut mock_http = MockHttp::new();
        mock_http
            .expect_execute()
            .times(1)
            .returning(|_| Ok(json_response(200, r#"{"name":42}"#)));

        let client = test_client(mock_http);
        let request = client.new_request(Method::GET, "groups/g1").unwrap();

        // Act
        let result = client.send::<Record>(&Context::background(), request).await;

        // Assert
        let err = result.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert_eq!(err.response().unwrap().status().as_u16(), 200);
    }

    #[tokio::test]
    async fn test_links_are_propagated() {
        // Arrange
        let mut mock_http = MockHttp::new();
        mock_http.expect_execute().times(1).returning(|_| {
            Ok(json_response(
                200,
                r#"{"results":[{"name":"a"}],"links":[{"rel":"self","href":"?pageNum=1"},{"rel":"next","href":"?pageNum=2"}],"totalCount":2}"#,
            ))
        });

        let client = test_client(mock_http);
        let request = client.new_request(Method::GET, "groups").unwrap();

        // Act
        let (page, response): (Paginated<Record>, _) =
            client.send(&Context::background(), request).await.unwrap();

        // Assert
        assert_eq!(page.results, vec![Record { name: "a".to_string() }]);
        assert_eq!(page.total_count, 2);
        assert_eq!(response.links(), page.links.as_slice());
        assert_eq!(response.links()[0].rel, REL_SELF);
        assert_eq!(response.links()[1].rel, REL_NEXT);
        assert_eq!(response.current_page(), Ok(1));
        assert!(!response.is_last_page());
    }

    #[tokio::test]
    async fn test_with_raw_keeps_body() {
        // Arrange
        let mut mock_http = MockHttp::new();
        mock_http
            .expect_execute()
            .times(1)
            .returning(|_| Ok(json_response(200, r#"{"name":"g1"}"#)));

        let client = Client::builder(mock_http).with_raw().build().unwrap();
        let request = client.new_request(Method::GET, "groups/g1").unwrap();

        // Act
        let (_, response): (Record, _) = client.send(&Context::background(), request).await.unwrap();

        // Assert
        assert_eq!(response.raw().unwrap().as_ref(), br#"{"name":"g1"}"#);
    }

    #[tokio::test]
    async fn test_http_error_with_payload() {
        // Arrange
        let mut mock_http = MockHttp::new();
        mock_http.expect_execute().times(1).returning(|_| {
            Ok(json_response(
                404,
                r#"{"Error":404,"errorCode":"CLUSTER_NOT_FOUND","reason":"Not Found","detail":"no such cluster"}"#,
            ))
        });

        let client = test_client(mock_http);
        let request = client.new_request(Method::GET, "groups/g1/clusters/c1").unwrap();

        // Act
        let err = client
            .send::<Record>(&Context::background(), request)
            .await
            .unwrap_err();

        // Assert
        let error_response = err.as_error_response().unwrap();
        assert_eq!(error_response.status(), 404);
        assert_eq!(error_response.reason(), "Not Found");
        assert_eq!(error_response.detail(), "no such cluster");
        assert!(err.is_error_code("CLUSTER_NOT_FOUND"));

        let message = err.to_string();
        assert!(message.starts_with("GET https://cloud.mongodb.com/api/atlas/v1.0/groups/g1/clusters/c1: 404"));
        assert!(message.contains("Not Found"));
        assert!(message.contains("no such cluster"));
    }

    #[tokio::test]
    async fn test_http_error_with_raw_body() {
        // Arrange
        let mut mock_http = MockHttp::new();
        mock_http
            .expect_execute()
            .times(1)
            .returning(|_| Ok(json_response(500, "not json")));

        let client = test_client(mock_http);
        let request = client.new_request(Method::GET, "groups").unwrap();

        // Act
        let err = client
            .send_and_discard(&Context::background(), request)
            .await
            .unwrap_err();

        // Assert
        let error_response = err.as_error_response().unwrap();
        assert_eq!(error_response.status(), 500);
        assert_eq!(error_response.reason(), "not json");
        assert_eq!(error_response.detail(), "");
    }

    #[tokio::test]
    async fn test_every_2xx_is_success() {
        for status in [200, 201, 202, 204, 299] {
            // Arrange
            let mut mock_http = MockHttp::new();
            mock_http
                .expect_execute()
                .times(1)
                .returning(move |_| Ok(empty_response(status)));

            let client = test_client(mock_http);
            let request = client.new_request(Method::GET, "groups").unwrap();

            // Act
            let result = client.send_and_discard(&Context::background(), request).await;

            // Assert
            assert_eq!(result.unwrap().status().as_u16(), status);
        }
    }

    #[tokio::test]
    async fn test_non_2xx_is_error() {
        for status in [199, 300, 304, 400, 401, 409, 503] {
            // Arrange
            let mut mock_http = MockHttp::new();
            mock_http
                .expect_execute()
                .times(1)
                .returning(move |_| Ok(empty_response(status)));

            let client = test_client(mock_http);
            let request = client.new_request(Method::GET, "groups").unwrap();

            // Act
            let err = client
                .send_and_discard(&Context::background(), request)
                .await
                .unwrap_err();

            // Assert
            assert_eq!(err.as_error_response().unwrap().status(), status);
        }
    }

    #[tokio::test]
    async fn test_send_to_writer_copies_verbatim() {
        // Arrange
        let payload: &'static [u8] = &[0x1f, 0x8b, 0x08, 0x00, 0xff, 0x00];
        let mut mock_http = MockHttp::new();
        mock_http.expect_execute().times(1).returning(move |_| {
            Ok(reqwest::Response::from(
                http::Response::builder()
                    .status(200)
                    .header("content-type", "application/gzip")
                    .body(payload.to_vec())
                    .unwrap(),
            ))
        });

        let client = test_client(mock_http);
        let request = client
            .new_gzip_request(Method::GET, "groups/g1/clusters/h1/logs/mongodb.gz")
            .unwrap();
        let mut buffer = Vec::new();

        // Act
        let (written, response) = client
            .send_to_writer(&Context::background(), request, &mut buffer)
            .await
            .unwrap();

        // Assert
        assert_eq!(buffer, payload);
        assert_eq!(written, payload.len() as u64);
        assert_eq!(response.status().as_u16(), 200);
    }

    #[tokio::test]
    async fn test_send_to_writer_write_failure() {
        // Arrange
        let mut mock_http = MockHttp::new();
        mock_http
            .expect_execute()
            .times(1)
            .returning(|_| Ok(json_response(200, "log line")));

        let client = test_client(mock_http);
        let request = client.new_gzip_request(Method::GET, "logs").unwrap();

        // Act
        let err = client
            .send_to_writer(&Context::background(), request, &mut FailingWriter)
            .await
            .unwrap_err();

        // Assert
        assert!(matches!(err, Error::Copy { .. }));
        assert!(err.response().is_some());
    }

    #[tokio::test]
    async fn test_transport_error_is_returned() {
        // Arrange
        let mut mock_http = MockHttp::new();
        mock_http
            .expect_execute()
            .times(1)
            .returning(|_| Err(failed()));

        let client = test_client(mock_http);
        let request = client.new_request(Method::GET, "groups").unwrap();

        // Act
        let err = client
            .send_and_discard(&Context::background(), request)
            .await
            .unwrap_err();

        // Assert
        assert!(matches!(err, Error::Transport(_)));
    }

    #[tokio::test]
    async fn test_cancellation_preferred_over_transport_error() {
        // Arrange
        let ctx = Context::background().with_cancel();
        let client = test_client(CancelOnSend(ctx.clone()));
        let request = client.new_request(Method::GET, "groups").unwrap();

        // Act
        let err = client.send_and_discard(&ctx, request).await.unwrap_err();

        // Assert
        assert!(matches!(err, Error::Context(ContextError::Canceled)));
    }

    #[tokio::test]
    async fn test_canceled_context_preempts_request() {
        // Arrange
        let ctx = Context::background();
        let client = test_client(Hang);
        let request = client.new_request(Method::GET, "groups").unwrap();

        let canceler = ctx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            canceler.cancel();
        });

        // Act
        let err = client.send_and_discard(&ctx, request).await.unwrap_err();

        // Assert
        assert!(matches!(err, Error::Context(ContextError::Canceled)));
    }

    #[tokio::test]
    async fn test_deadline_preempts_request() {
        // Arrange
        let ctx = Context::background().with_timeout(std::time::Duration::from_millis(10));
        let client = test_client(Hang);
        let request = client.new_request(Method::GET, "groups").unwrap();

        // Act
        let err = client.send_and_discard(&ctx, request).await.unwrap_err();

        // Assert
        assert!(matches!(err, Error::Context(ContextError::DeadlineExceeded)));
    }

    #[tokio::test]
    async fn test_on_request_completed_runs_once() {
        // Arrange
        let mut mock_http = MockHttp::new();
        mock_http
            .expect_execute()
            .times(1)
            .returning(|_| Ok(json_response(404, "{}")));

        let calls = Arc::new(AtomicUsize::new(0));
        let observed = calls.clone();
        let client = Client::builder(mock_http)
            .on_request_completed(move |request, response| {
                assert_eq!(request.method, Method::POST);
                assert_eq!(request.url.path(), "/api/atlas/v1.0/groups");
                assert_eq!(response.status().as_u16(), 404);
                observed.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();
        let request = client
            .new_request_with_body(Method::POST, "groups", &serde_json::json!({"name": "p"}))
            .unwrap();

        // Act
        let result = client.send_and_discard(&Context::background(), request).await;

        // Assert
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_probe_links_ignores_non_objects() {
        assert_eq!(probe_links(b"[1,2,3]"), None);
        assert_eq!(probe_links(b""), None);
        assert_eq!(probe_links(br#"{"name":"x"}"#), None);
        assert_eq!(
            probe_links(br#" {"links":[{"rel":"self","href":"?pageNum=1"}]}"#),
            Some(vec![Link::new(REL_SELF, "?pageNum=1")])
        );
    }
}
