#![doc = include_str!("../README.md")]

mod client;
mod context;
mod error;
mod http;
pub mod models;
pub mod services;

#[cfg(test)]
mod test_utils;

pub use client::{
    Client, ClientBuilder, DEFAULT_BASE_URL, Delivered, OnRequestCompleted, PaginationError,
    RequestHead, Response, Sink, default_user_agent, set_options,
};
pub use context::{Context, ContextError};
pub use error::{ArgError, Error, ErrorResponse};
pub use http::HttpClient;
