//! Request and response types for the SES query API.

mod email;
mod parameters;
mod response;

pub use email::{Recipients, SendEmailRequest, DEFAULT_CHARSET};
pub use parameters::RequestParameters;
pub use response::SesResponse;
