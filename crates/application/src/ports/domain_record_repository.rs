use async_trait::async_trait;
use domain_insight_domain::{DomainError, DomainRecord};

/// Repository interface for persisted domain records.
///
/// Records are keyed by name. Implementations must let a record written by
/// `upsert` be read back by `get_by_name` in the same process, and handle
/// their own concurrency control: concurrent upserts for one name resolve as
/// last-write-wins.
#[async_trait]
pub trait DomainRecordRepository: Send + Sync {
    /// Retrieves a record by its domain name.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(DomainRecord))` - If the record exists
    /// * `Ok(None)` - If no record with this name exists
    /// * `Err(DomainError)` - If retrieval fails
    async fn get_by_name(&self, name: &str) -> Result<Option<DomainRecord>, DomainError>;

    /// Inserts the record, or replaces every field of the existing record with
    /// the same name.
    ///
    /// # Errors
    ///
    /// * `DomainError::DatabaseError` - If a database error occurs
    async fn upsert(&self, record: &DomainRecord) -> Result<(), DomainError>;
}
