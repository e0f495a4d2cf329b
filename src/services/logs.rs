use reqwest::Method;
use tokio::io::AsyncWrite;

use crate::{
    client::{Client, Response, set_options},
    context::Context,
    error::Error,
    http::HttpClient,
    models::DateRangeOptions,
    services::{escape, require},
};

/// Endpoint downloading compressed host logs.
pub struct LogsService<'a, H> {
    client: &'a Client<H>,
}

impl<H> Client<H> {
    pub fn logs(&self) -> LogsService<'_, H> {
        LogsService { client: self }
    }
}

impl<H: HttpClient> LogsService<'_, H> {
    /// Streams the gzip compressed log `log_name` of `hostname` into `writer`.
    ///
    /// The payload is written as received, without decompression. Returns the
    /// number of bytes written.
    ///
    /// # Arguments
    ///
    /// * `log_name` - One of `mongodb.gz`, `mongos.gz`, `mongodb-audit-log.gz`
    ///   or `mongos-audit-log.gz`.
    /// * `options` - Restricts the download to a date range.
    pub async fn get<W>(
        &self,
        ctx: &Context,
        group_id: &str,
        hostname: &str,
        log_name: &str,
        writer: &mut W,
        options: Option<&DateRangeOptions>,
    ) -> Result<(u64, Response), Error>
    where
        W: AsyncWrite + Unpin + Send,
    {
        require("groupId", group_id)?;
        require("hostName", hostname)?;
        require("logName", log_name)?;

        let path = format!(
            "groups/{}/clusters/{}/logs/{}",
            escape(group_id),
            escape(hostname),
            escape(log_name)
        );
        let path = set_options(&path, options)?;

        let request = self.client.new_gzip_request(Method::GET, &path)?;
        self.client.send_to_writer(ctx, request, writer).await
    }
}
