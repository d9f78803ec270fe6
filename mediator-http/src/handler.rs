//! Generic handler contract and the fixed translation entry point.
//!
//! [`HttpHandler`] uses RPITIT (Return Position Impl Trait In Traits) for
//! async trait methods without `async_trait`, available since Rust 1.75.
//! The domain-specific part lives in the abstract
//! [`handle_request`](HttpHandler::handle_request); the translation in the
//! provided [`handle`](HttpHandler::handle) is fixed and shared.

use std::future::Future;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tokio_util::sync::CancellationToken;

use crate::request::HttpRequest;
use crate::response::HandlerResponse;

/// Generic contract for handlers that resolve a request to an HTTP result.
///
/// A mediator-style dispatch layer (or an axum route closure) constructs the
/// handler and invokes [`handle`](Self::handle) with the already-deserialized
/// request and a cancellation token. Each invocation owns its request and
/// response; handlers share no per-request state, so concurrent invocations
/// need no coordination.
///
/// # Example
///
/// ```rust
/// use mediator_http::prelude::*;
///
/// #[derive(Debug)]
/// struct DeleteUser {
///     id: u64,
/// }
///
/// impl HttpRequest for DeleteUser {}
///
/// struct DeleteUserHandler;
///
/// impl HttpHandler<DeleteUser> for DeleteUserHandler {
///     async fn handle_request(
///         &self,
///         request: DeleteUser,
///         _cancel: CancellationToken,
///     ) -> HandlerResponse {
///         match request.id {
///             0 => HandlerResponse::not_found(),
///             _ => HandlerResponse::no_content(),
///         }
///     }
/// }
/// ```
pub trait HttpHandler<R>: Send + Sync
where
    R: HttpRequest,
{
    /// Domain-specific handling; produces the response to translate.
    ///
    /// Honoring `cancel` is this method's responsibility; the base handler
    /// forwards the token without interpreting it. Panics raised here are
    /// not caught and propagate to the host framework's error pipeline.
    fn handle_request(
        &self,
        request: R,
        cancel: CancellationToken,
    ) -> impl Future<Output = HandlerResponse> + Send;

    /// Entry point invoked by the dispatch layer.
    ///
    /// An absent request short-circuits to `404 Not Found` without touching
    /// the domain step. Otherwise the request is traced, handed to
    /// [`handle_request`](Self::handle_request), and the resulting
    /// [`HandlerResponse`] is rendered:
    ///
    /// - failed response: plain-text content result with the error message
    ///   and the recorded status;
    /// - succeeded with payload: `200 OK` with the payload as JSON body;
    /// - succeeded without payload: status-only result.
    fn handle(
        &self,
        request: Option<R>,
        cancel: CancellationToken,
    ) -> impl Future<Output = Response> + Send {
        async move {
            tracing::info!("handle");
            let Some(request) = request else {
                tracing::debug!("absent request, responding 404");
                return StatusCode::NOT_FOUND.into_response();
            };
            tracing::debug!(request = ?request, "beginning request");
            let response = self.handle_request(request, cancel).await;
            tracing::debug!(response = ?response, "got a response");
            response.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use axum::body::to_bytes;
    use serde::Serialize;

    use super::*;

    #[derive(Debug)]
    struct EchoRequest {
        id: u64,
    }

    impl HttpRequest for EchoRequest {}

    #[derive(Debug, Serialize)]
    struct Echo {
        id: u64,
    }

    struct EchoHandler {
        invoked: AtomicBool,
    }

    impl EchoHandler {
        fn new() -> Self {
            Self {
                invoked: AtomicBool::new(false),
            }
        }
    }

    impl HttpHandler<EchoRequest> for EchoHandler {
        async fn handle_request(
            &self,
            request: EchoRequest,
            _cancel: CancellationToken,
        ) -> HandlerResponse {
            self.invoked.store(true, Ordering::SeqCst);
            match request.id {
                0 => HandlerResponse::not_found(),
                id => HandlerResponse::ok(Echo { id }).unwrap(),
            }
        }
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_absent_request_skips_domain_step() {
        let handler = EchoHandler::new();
        let response = handler.handle(None, CancellationToken::new()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(!handler.invoked.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_succeeded_response_with_payload_renders_ok_json() {
        let handler = EchoHandler::new();
        let response = handler
            .handle(Some(EchoRequest { id: 1 }), CancellationToken::new())
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(handler.invoked.load(Ordering::SeqCst));
        assert_eq!(body_string(response).await, r#"{"id":1}"#);
    }

    #[tokio::test]
    async fn test_failed_response_renders_error_content() {
        let handler = EchoHandler::new();
        let response = handler
            .handle(Some(EchoRequest { id: 0 }), CancellationToken::new())
            .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, "Status Code: 404; Not Found");
    }

    struct StatusOnlyHandler;

    impl HttpHandler<EchoRequest> for StatusOnlyHandler {
        async fn handle_request(
            &self,
            _request: EchoRequest,
            _cancel: CancellationToken,
        ) -> HandlerResponse {
            HandlerResponse::no_content()
        }
    }

    #[tokio::test]
    async fn test_succeeded_response_without_payload_renders_status_only() {
        let response = StatusOnlyHandler
            .handle(Some(EchoRequest { id: 1 }), CancellationToken::new())
            .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(body_string(response).await, "");
    }

    struct CancelAwareHandler;

    impl HttpHandler<EchoRequest> for CancelAwareHandler {
        async fn handle_request(
            &self,
            _request: EchoRequest,
            cancel: CancellationToken,
        ) -> HandlerResponse {
            if cancel.is_cancelled() {
                return HandlerResponse::conflict("request cancelled").unwrap();
            }
            HandlerResponse::no_content()
        }
    }

    #[tokio::test]
    async fn test_cancellation_token_reaches_domain_step() {
        let token = CancellationToken::new();
        token.cancel();
        let response = CancelAwareHandler
            .handle(Some(EchoRequest { id: 1 }), token)
            .await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_string(response).await, "request cancelled");
    }
}
