use std::sync::Arc;

use reqwest::{Url, header::HeaderValue};

use crate::error::Error;

mod dispatch;
mod pagination;
mod query;
mod request;
mod response;

pub use dispatch::{Delivered, Sink};
pub use pagination::PaginationError;
pub use query::set_options;
pub use response::{RequestHead, Response};

/// The default endpoint of the Atlas Administration API.
pub const DEFAULT_BASE_URL: &str = "https://cloud.mongodb.com/api/atlas/v1.0/";

/// Callback invoked once per round-trip, after the response headers arrive and
/// before the body is read.
pub type OnRequestCompleted = Arc<dyn Fn(&RequestHead, &reqwest::Response) + Send + Sync>;

/// The user agent sent when none is configured, e.g. `atlas-admin/0.1.1 (linux;x86_64)`.
pub fn default_user_agent() -> String {
    format!(
        "{}/{} ({};{})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// The main entry point for interacting with the Atlas Administration API.
///
/// `Client` owns the HTTP transport and the settings every request shares.
/// Endpoint groups are reached through handles such as [`Client::clusters`]
/// or [`Client::database_users`], each borrowing the client.
///
/// # Examples
///
/// ```no_run
/// use atlas_admin::{Client, Context};
///
/// # async fn run() -> Result<(), atlas_admin::Error> {
/// let client = Client::new(reqwest::Client::new())?;
/// let ctx = Context::background();
///
/// let (clusters, _response) = client.clusters().list(&ctx, "5e2211c17a3e5a48f5497de3", None).await?;
/// for cluster in clusters {
///     println!("{}", cluster.name.unwrap_or_default());
/// }
/// # Ok(())
/// # }
/// ```
pub struct Client<H = reqwest::Client> {
    http: H,
    base_url: Url,
    user_agent: HeaderValue,
    on_request_completed: Option<OnRequestCompleted>,
    with_raw: bool,
}

impl<H> Client<H> {
    /// Creates a new client with the default settings.
    ///
    /// # Arguments
    ///
    /// * `http` - The transport used to send requests. It is responsible for
    ///   authenticating them.
    pub fn new(http: H) -> Result<Client<H>, Error> {
        ClientBuilder::new(http).build()
    }

    /// Starts configuring a client around `http`.
    pub fn builder(http: H) -> ClientBuilder<H> {
        ClientBuilder::new(http)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &HeaderValue {
        &self.user_agent
    }
}

/// Configures a [`Client`]. Options apply in the order they are called.
///
/// # Examples
///
/// ```
/// use atlas_admin::Client;
///
/// let client = Client::builder(reqwest::Client::new())
///     .base_url("https://cloud-qa.mongodb.com/api/atlas/v1.0/")
///     .user_agent("my-app/1.0")
///     .with_raw()
///     .build()
///     .unwrap();
///
/// assert!(client.user_agent().to_str().unwrap().starts_with("my-app/1.0 atlas-admin/"));
/// ```
pub struct ClientBuilder<H> {
    http: H,
    base_url: String,
    user_agent: String,
    on_request_completed: Option<OnRequestCompleted>,
    with_raw: bool,
}

impl<H> ClientBuilder<H> {
    pub fn new(http: H) -> ClientBuilder<H> {
        ClientBuilder {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: default_user_agent(),
            on_request_completed: None,
            with_raw: false,
        }
    }

    /// Overrides the API endpoint. The URL must end with a `/`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Prepends `user_agent` to the current user agent.
    pub fn user_agent(mut self, user_agent: impl AsRef<str>) -> Self {
        self.user_agent = format!("{} {}", user_agent.as_ref(), self.user_agent);
        self
    }

    /// Registers a callback invoked after every round-trip.
    pub fn on_request_completed<F>(mut self, callback: F) -> Self
    where
        F: Fn(&RequestHead, &reqwest::Response) + Send + Sync + 'static,
    {
        self.on_request_completed = Some(Arc::new(callback));
        self
    }

    /// Keeps the raw body of successful responses, see [`Response::raw`].
    pub fn with_raw(mut self) -> Self {
        self.with_raw = true;
        self
    }

    pub fn build(self) -> Result<Client<H>, Error> {
        let base_url = Url::parse(&self.base_url)?;
        if !base_url.path().ends_with('/') {
            return Err(Error::BaseUrlTrailingSlash(self.base_url));
        }

        let user_agent = HeaderValue::from_str(&self.user_agent)?;

        Ok(Client {
            http: self.http,
            base_url,
            user_agent,
            on_request_completed: self.on_request_completed,
            with_raw: self.with_raw,
        })
    }
}
