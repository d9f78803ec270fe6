//! Request marker for HTTP-result-producing requests.

use std::fmt;

/// Marker for request types that resolve to an HTTP action result.
///
/// Implementing this trait declares that a type may be dispatched to an
/// [`HttpHandler`](crate::HttpHandler); the bound is what keeps arbitrary
/// types out of the generic handler contract. The trait itself carries no
/// behavior. [`Debug`](fmt::Debug) is required so the base handler can emit
/// its structured trace of the inbound request, and [`Send`] lets handler
/// futures move across runtime worker threads.
///
/// # Example
///
/// ```rust
/// use mediator_http::HttpRequest;
///
/// #[derive(Debug)]
/// struct DeleteUser {
///     id: u64,
/// }
///
/// impl HttpRequest for DeleteUser {}
/// ```
pub trait HttpRequest: fmt::Debug + Send {}
