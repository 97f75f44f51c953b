//! Terminal client for the ask endpoint.

mod http;

pub use http::{AskClient, ClientError, DEFAULT_SERVER_URL, DEFAULT_TIMEOUT};
