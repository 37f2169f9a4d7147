use domain_insight_infrastructure::repositories::SqliteDomainRecordRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pool: SqlitePool,
    pub domain_records: Arc<SqliteDomainRecordRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            domain_records: Arc::new(SqliteDomainRecordRepository::new(pool.clone())),
            pool,
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
