//! Shared test utilities for tracy-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use chrono::NaiveDate;
    use tracy_core::validate::LedgerPolicy;

    use crate::service::TracyService;
    use crate::{IN_MEMORY, TracyDb};

    /// In-memory service with the default ledger policy.
    pub async fn test_service() -> TracyService {
        test_service_with(LedgerPolicy::default()).await
    }

    /// In-memory service with a specific ledger policy.
    pub async fn test_service_with(policy: LedgerPolicy) -> TracyService {
        let db = TracyDb::open_local(IN_MEMORY).await.unwrap();
        TracyService::from_db(db, policy)
    }

    /// Add customer "Acme" with project "Website" and return the project id.
    pub async fn seeded_project(svc: &TracyService) -> i64 {
        let acme = svc.add_customer("Acme").await.unwrap();
        svc.add_project(acme.id, "Website", date("2025-01-01"), 500.0)
            .await
            .unwrap()
            .id
    }

    pub async fn count_rows(svc: &TracyService, table: &str) -> i64 {
        let mut rows = svc
            .db()
            .conn()
            .query(&format!("SELECT COUNT(*) FROM {table}"), ())
            .await
            .unwrap();
        rows.next().await.unwrap().unwrap().get::<i64>(0).unwrap()
    }

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }
}
