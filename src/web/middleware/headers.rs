use poem::http::HeaderValue;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

/// Lets browsers call the API from any origin.
pub struct ResponseHeadersMiddleware;

impl<E: Endpoint> Middleware<E> for ResponseHeadersMiddleware {
    type Output = ResponseHeadersMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ResponseHeadersMiddlewareImpl { ep }
    }
}

pub struct ResponseHeadersMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint> Endpoint for ResponseHeadersMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let mut response = self.ep.call(request).await?.into_response();
        let headers = response.headers_mut();
        headers.remove("Server");
        headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
        headers.insert("X-Content-Type-Options", HeaderValue::from_static("nosniff"));
        Ok(response)
    }
}
