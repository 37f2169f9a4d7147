//! Domain Insight Application Layer
//!
//! Ports for the external capabilities (DNS, WHOIS, record store) and the
//! use cases that orchestrate them.
pub mod ports;
pub mod use_cases;
