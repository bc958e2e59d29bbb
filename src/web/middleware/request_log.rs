use poem::{Endpoint, Middleware, Request, Response, Result};

use crate::prelude::*;

/// Tags the Sentry scope with the request and logs its outcome.
pub struct RequestLogMiddleware;

impl<E: Endpoint<Output = Response>> Middleware<E> for RequestLogMiddleware {
    type Output = RequestLogMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RequestLogMiddlewareImpl { ep }
    }
}

pub struct RequestLogMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint<Output = Response>> Endpoint for RequestLogMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        sentry::configure_scope(|scope| {
            scope.set_tag("request.method", method.as_str());
            scope.set_tag("request.path", uri.path());
        });

        let start_instant = Instant::now();
        let response = self.ep.call(request).await;
        match &response {
            Ok(response) => {
                info!(
                    ?method,
                    ?uri,
                    status = %response.status(),
                    elapsed = %format_elapsed(start_instant)
                );
            }
            Err(error) => {
                error!(?method, ?uri, elapsed = %format_elapsed(start_instant), "{:#}", error);
            }
        }
        response
    }
}

fn format_elapsed(start_instant: Instant) -> String {
    humantime::format_duration(start_instant.elapsed()).to_string()
}
