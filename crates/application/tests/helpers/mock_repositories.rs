#![allow(dead_code)]

use async_trait::async_trait;
use domain_insight_application::ports::{DnsLookup, DomainRecordRepository, WhoisLookup};
use domain_insight_domain::{DnsAnswer, DomainError, DomainRecord};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock DnsLookup
// ============================================================================

#[derive(Clone, Default)]
pub struct MockDnsLookup {
    answers: Arc<RwLock<HashMap<String, DnsAnswer>>>,
    should_fail: Arc<RwLock<bool>>,
    calls: Arc<AtomicUsize>,
}

impl MockDnsLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the answer returned for a domain
    pub async fn set_answer(&self, domain: &str, answer: DnsAnswer) {
        self.answers
            .write()
            .await
            .insert(domain.to_string(), answer);
    }

    /// Makes every query fail with a transport-style error
    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsLookup for MockDnsLookup {
    async fn query(&self, name: &str) -> Result<Option<DnsAnswer>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if *self.should_fail.read().await {
            return Err(DomainError::DnsLookupFailed(
                "Mock resolver failed".to_string(),
            ));
        }

        Ok(self.answers.read().await.get(name).cloned())
    }
}

// ============================================================================
// Mock WhoisLookup
// ============================================================================

#[derive(Clone, Default)]
pub struct MockWhoisLookup {
    texts: Arc<RwLock<HashMap<String, String>>>,
    should_fail: Arc<RwLock<bool>>,
    calls: Arc<AtomicUsize>,
}

impl MockWhoisLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_text(&self, domain: &str, text: &str) {
        self.texts
            .write()
            .await
            .insert(domain.to_string(), text.to_string());
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WhoisLookup for MockWhoisLookup {
    async fn query(&self, name: &str) -> Result<Option<String>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if *self.should_fail.read().await {
            return Err(DomainError::WhoisLookupFailed(
                "Mock whois server unreachable".to_string(),
            ));
        }

        Ok(self.texts.read().await.get(name).cloned())
    }
}

// ============================================================================
// Mock DomainRecordRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockDomainRecordRepository {
    records: Arc<RwLock<HashMap<String, DomainRecord>>>,
    fail_reads: Arc<RwLock<bool>>,
    fail_writes: Arc<RwLock<bool>>,
    reads: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
}

impl MockDomainRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock already holding the given records
    pub async fn with_records(records: Vec<DomainRecord>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.records.write().await;
            for record in records {
                map.insert(record.name().to_string(), record);
            }
        }
        repo
    }

    pub async fn set_fail_reads(&self, fail: bool) {
        *self.fail_reads.write().await = fail;
    }

    pub async fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.write().await = fail;
    }

    pub async fn stored(&self, name: &str) -> Option<DomainRecord> {
        self.records.read().await.get(name).cloned()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DomainRecordRepository for MockDomainRecordRepository {
    async fn get_by_name(&self, name: &str) -> Result<Option<DomainRecord>, DomainError> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        if *self.fail_reads.read().await {
            return Err(DomainError::DatabaseError("Mock read failure".to_string()));
        }

        Ok(self.records.read().await.get(name).cloned())
    }

    async fn upsert(&self, record: &DomainRecord) -> Result<(), DomainError> {
        self.writes.fetch_add(1, Ordering::SeqCst);

        if *self.fail_writes.read().await {
            return Err(DomainError::DatabaseError("Mock write failure".to_string()));
        }

        self.records
            .write()
            .await
            .insert(record.name().to_string(), record.clone());
        Ok(())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn umbler_record() -> DomainRecord {
    DomainRecord::new("test.com")
        .unwrap()
        .with_details("192.168.0.1", "Ns.umbler.com", 60, "umbler.corp")
}
