//! Request timeout middleware.
//!
//! The wrapped service runs on its own local task. The middleware races that
//! task against the configured limit: whichever finishes first produces the
//! response, so a request yields exactly one response. When the limit wins,
//! the client receives a `408 REQUEST_TIMEOUT` envelope while the handler task
//! keeps running to completion and its result is dropped.

use std::rc::Rc;
use std::task::{Context, Poll};
use std::time::Duration;

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, ResponseError};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{error, warn};

use crate::domain::{Error as DomainError, ErrorCode, TraceId};
use crate::inbound::http::state::HttpState;

/// Default request limit.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Middleware bounding how long a request may take to produce a response.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use actix_web::App;
/// use shelter::middleware::Timeout;
///
/// let app = App::new().wrap(Timeout::new(Duration::from_secs(5)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Timeout {
    limit: Duration,
}

impl Timeout {
    /// Bound requests to `limit`.
    pub const fn new(limit: Duration) -> Self {
        Self { limit }
    }

    /// The configured limit.
    pub const fn limit(&self) -> Duration {
        self.limit
    }
}

impl Default for Timeout {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_TIMEOUT)
    }
}

impl<S, B> Transform<S, ServiceRequest> for Timeout
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = TimeoutMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TimeoutMiddleware {
            service: Rc::new(service),
            limit: self.limit,
        }))
    }
}

/// Service wrapper produced by [`Timeout`].
pub struct TimeoutMiddleware<S> {
    service: Rc<S>,
    limit: Duration,
}

impl<S, B> Service<ServiceRequest> for TimeoutMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let http_req = req.request().clone();
        let method = req.method().clone();
        let path = req.path().to_owned();
        let limit = self.limit;
        let fut = self.service.call(req);

        Box::pin(async move {
            let handler = match TraceId::current() {
                Some(trace_id) => actix_web::rt::spawn(TraceId::scope(trace_id, fut)),
                None => actix_web::rt::spawn(fut),
            };

            match actix_web::rt::time::timeout(limit, handler).await {
                Ok(Ok(outcome)) => outcome.map(ServiceResponse::map_into_left_body),
                Ok(Err(join_error)) => {
                    error!(%join_error, path = %path, "request handler task failed");
                    let response = HttpState::reject_request(
                        &http_req,
                        DomainError::internal(join_error.to_string()),
                    )
                    .error_response();
                    Ok(ServiceResponse::new(http_req, response).map_into_right_body())
                }
                Err(_elapsed) => {
                    warn!(
                        method = %method,
                        path = %path,
                        timeout_ms = limit.as_millis(),
                        "request timeout"
                    );
                    let response = HttpState::reject_request(
                        &http_req,
                        DomainError::request_timeout(ErrorCode::RequestTimeout.default_message()),
                    )
                    .error_response();
                    Ok(ServiceResponse::new(http_req, response).map_into_right_body())
                }
            }
        })
    }
}
