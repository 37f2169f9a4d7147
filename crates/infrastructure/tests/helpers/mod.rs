pub mod builders;
pub mod dns_server_mock;
pub mod whois_server_mock;

pub use builders::*;
pub use dns_server_mock::MockDnsServer;
pub use whois_server_mock::MockWhoisServer;
