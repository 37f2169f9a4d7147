//! Domain Insight Infrastructure Layer
//!
//! Concrete adapters for the application ports: SQLite record store,
//! upstream DNS lookups over UDP/TCP and WHOIS over TCP port 43.
pub mod database;
pub mod dns;
pub mod repositories;
pub mod whois;
