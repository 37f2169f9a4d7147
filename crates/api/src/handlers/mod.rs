pub mod domain;
pub mod health;

pub use domain::get_domain;
pub use health::health_check;
