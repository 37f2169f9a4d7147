//! Domain Insight Domain Layer
pub mod config;
pub mod domain_record;
pub mod errors;
pub mod record_type;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use domain_record::{DnsAnswer, DomainRecord};
pub use errors::DomainError;
pub use record_type::RecordType;
pub use validators::{is_valid_domain_name, validate_domain_name};
