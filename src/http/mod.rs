//! HTTP request descriptor, response buffering, and the transport port.

mod request;
mod response;
mod transport;

pub use request::{SesRequest, FORM_CONTENT_TYPE, SES_SERVICE};
pub use response::SesResponse;
pub use transport::{ReqwestTransport, Transport};
