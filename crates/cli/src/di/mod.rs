pub mod lookups;
pub mod repositories;
pub mod use_cases;

pub use lookups::LookupServices;
pub use repositories::Repositories;
pub use use_cases::UseCases;
