//! # mediator-http
//!
//! Mediator-pattern HTTP handlers for axum.
//!
//! A mediator-style dispatch layer routes each request object to exactly one
//! handler based on its type. This crate supplies the HTTP-facing half of
//! that contract: a [`HttpRequest`] marker declaring that a request type
//! resolves to an HTTP action result, an immutable [`HandlerResponse`] value
//! object carrying the outcome of domain handling, and a generic
//! [`HttpHandler`] trait whose provided [`handle`](HttpHandler::handle)
//! method performs the fixed translation from response object to an axum
//! [`Response`](axum::response::Response).
//!
//! The crate owns no routing, no transport, and no validation rules: a
//! request arrives already deserialized, and the host framework renders the
//! returned action result onto the wire.
//!
//! ## Example
//!
//! ```rust
//! use mediator_http::prelude::*;
//!
//! #[derive(Debug)]
//! struct GetUser {
//!     id: u64,
//! }
//!
//! impl HttpRequest for GetUser {}
//!
//! #[derive(serde::Serialize)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! struct GetUserHandler;
//!
//! impl HttpHandler<GetUser> for GetUserHandler {
//!     async fn handle_request(
//!         &self,
//!         request: GetUser,
//!         _cancel: CancellationToken,
//!     ) -> HandlerResponse {
//!         match request.id {
//!             1 => {
//!                 let user = User { id: 1, name: "Alice".to_string() };
//!                 HandlerResponse::ok(user).unwrap_or_else(|_| HandlerResponse::not_found())
//!             }
//!             _ => HandlerResponse::not_found(),
//!         }
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let response = GetUserHandler
//!     .handle(Some(GetUser { id: 1 }), CancellationToken::new())
//!     .await;
//! assert_eq!(response.status(), axum::http::StatusCode::OK);
//! # }
//! ```

pub mod error;
pub mod handler;
pub mod request;
pub mod response;
pub mod validation;

pub use error::ResponseError;
pub use handler::HttpHandler;
pub use request::HttpRequest;
pub use response::{HandlerResponse, NOT_FOUND_MESSAGE};
pub use validation::ValidationFailure;

pub mod prelude {
    //! Single-import surface for handler implementations.

    pub use crate::error::ResponseError;
    pub use crate::handler::HttpHandler;
    pub use crate::request::HttpRequest;
    pub use crate::response::HandlerResponse;
    pub use crate::validation::ValidationFailure;

    pub use tokio_util::sync::CancellationToken;
}
