use std::any::Any;

use poem::error::{MethodNotAllowedError, NotFoundError, ResponseError};
use poem::http::StatusCode;
use poem::web::Json;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

use crate::error::ServiceError;
use crate::prelude::*;
use crate::web::models::ErrorResponse;

/// Renders every error as a JSON `{"error": "…"}` response.
pub struct ErrorMiddleware;

impl<E: Endpoint<Output = Response>> Middleware<E> for ErrorMiddleware {
    type Output = ErrorMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ErrorMiddlewareImpl { ep }
    }
}

pub struct ErrorMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint<Output = Response>> Endpoint for ErrorMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        match self.ep.call(request).await {
            Err(error) => {
                let (status, message) = describe(&error);
                if status.is_server_error() {
                    error!(?method, ?uri, %status, "{:#}", error);
                } else {
                    info!(?method, ?uri, %status, "{:#}", error);
                }
                Ok(Json(ErrorResponse { error: message })
                    .with_status(status)
                    .into_response())
            }
            result => result,
        }
    }
}

fn describe(error: &poem::Error) -> (StatusCode, String) {
    if let Some(error) = error.downcast_ref::<ServiceError>() {
        (error.status(), error.to_string())
    } else if error.is::<MethodNotAllowedError>() {
        let error = ServiceError::MethodNotAllowed;
        (error.status(), error.to_string())
    } else if error.is::<NotFoundError>() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if error.status().is_client_error() {
        (error.status(), error.to_string())
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
    }
}

/// Panic handler for [`poem::middleware::CatchPanic`], keeps the JSON error shape.
pub fn render_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let reason = panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic");
    error!(reason, "handler panicked");
    Json(ErrorResponse {
        error: "Internal server error".to_string(),
    })
    .with_status(StatusCode::INTERNAL_SERVER_ERROR)
    .into_response()
}
