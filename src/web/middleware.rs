pub use self::error::{render_panic, ErrorMiddleware};
pub use self::headers::ResponseHeadersMiddleware;
pub use self::request_log::RequestLogMiddleware;

mod error;
mod headers;
mod request_log;
