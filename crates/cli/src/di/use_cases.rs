use domain_insight_application::use_cases::ResolveDomainUseCase;
use std::sync::Arc;

use super::{LookupServices, Repositories};

pub struct UseCases {
    pub resolve_domain: Arc<ResolveDomainUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, lookups: &LookupServices) -> Self {
        Self {
            resolve_domain: Arc::new(ResolveDomainUseCase::new(
                repos.domain_records.clone(),
                lookups.dns.clone(),
                lookups.whois.clone(),
            )),
        }
    }
}
