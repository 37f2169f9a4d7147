pub mod domain;
pub mod error;

pub use domain::DomainResponse;
pub use error::ErrorResponse;
