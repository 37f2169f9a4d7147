mod dns_lookup;
mod domain_record_repository;
mod whois_lookup;

pub use dns_lookup::DnsLookup;
pub use domain_record_repository::DomainRecordRepository;
pub use whois_lookup::WhoisLookup;
