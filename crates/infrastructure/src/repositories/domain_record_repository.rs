use async_trait::async_trait;
use domain_insight_application::ports::DomainRecordRepository;
use domain_insight_domain::{DomainError, DomainRecord};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{debug, error, instrument};

type DomainRow = (
    String,
    Option<String>,
    Option<String>,
    Option<i64>,
    Option<String>,
    String,
);

pub struct SqliteDomainRecordRepository {
    pool: SqlitePool,
}

impl SqliteDomainRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: DomainRow) -> Result<DomainRecord, DomainError> {
        let (name, ip, hosted_at, ttl, whois, updated_at) = row;

        let mut record = DomainRecord::new(name.as_str()).map_err(|e| {
            DomainError::DatabaseError(format!("Stored domain '{}' is invalid: {}", name, e))
        })?;
        record.ip = ip.map(|s| Arc::from(s.as_str()));
        record.hosted_at = hosted_at.map(|s| Arc::from(s.as_str()));
        record.ttl = ttl.and_then(|t| u32::try_from(t).ok());
        record.whois = whois.map(|s| Arc::from(s.as_str()));
        record.updated_at = Some(updated_at);

        Ok(record)
    }
}

#[async_trait]
impl DomainRecordRepository for SqliteDomainRecordRepository {
    #[instrument(skip(self))]
    async fn get_by_name(&self, name: &str) -> Result<Option<DomainRecord>, DomainError> {
        let row = sqlx::query_as::<_, DomainRow>(
            "SELECT name, ip, hosted_at, ttl, whois, updated_at
             FROM domains WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query domain by name");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(Self::row_to_record).transpose()
    }

    #[instrument(skip(self, record), fields(domain = %record.name()))]
    async fn upsert(&self, record: &DomainRecord) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO domains (name, ip, hosted_at, ttl, whois, updated_at)
             VALUES (?, ?, ?, ?, ?, COALESCE(?, CURRENT_TIMESTAMP))
             ON CONFLICT(name) DO UPDATE SET
                ip = excluded.ip,
                hosted_at = excluded.hosted_at,
                ttl = excluded.ttl,
                whois = excluded.whois,
                updated_at = excluded.updated_at",
        )
        .bind(record.name())
        .bind(record.ip.as_deref())
        .bind(record.hosted_at.as_deref())
        .bind(record.ttl.map(i64::from))
        .bind(record.whois.as_deref())
        .bind(record.updated_at.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to upsert domain record");
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!("Domain record stored");
        Ok(())
    }
}
