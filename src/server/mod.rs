//! HTTP server exposing the ask endpoint.

mod api;
mod error;
mod handlers;
#[allow(clippy::module_inception)]
mod server;

pub use api::{AskRequest, ErrorResponse, ROOT_MESSAGE};
pub use error::{ApiError, ServerError};
pub use handlers::{get_root, post_ask, AppState};
pub use server::{AskServer, ASK_PATH};
