//! PostgreSQL document-store implementation of the persistence layer.
//!
//! Each inquiry is stored as one JSONB document. `status` and `created_at`
//! are mirrored into plain columns so filtering and ordering do not need
//! to look inside the document.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::InquiryRepository;
use crate::config::DatabaseConfig;
use crate::domain::{InquiryFilter, InquiryId, InquiryStats, InquiryStatus, Page, TravelInquiry};
use crate::error::LeadsError;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS travel_inquiries (\
     id TEXT PRIMARY KEY, \
     status TEXT NOT NULL, \
     created_at TIMESTAMPTZ NOT NULL, \
     document JSONB NOT NULL)";

const CREATE_CREATED_AT_INDEX: &str = "CREATE INDEX IF NOT EXISTS travel_inquiries_created_at_idx \
     ON travel_inquiries (created_at DESC)";

/// Document fields matched by free-text search.
const SEARCH_FIELDS: [&str; 4] = ["first_name", "last_name", "email", "destinations"];

/// PostgreSQL-backed [`InquiryRepository`] using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresInquiryRepository {
    pool: PgPool,
}

impl PostgresInquiryRepository {
    /// Creates a repository over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the store described by `config` and makes sure the
    /// inquiry table exists.
    ///
    /// # Errors
    ///
    /// Returns a [`LeadsError::PersistenceError`] if the connection string
    /// is invalid, the store is unreachable, or the table cannot be created.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, LeadsError> {
        let mut options = PgConnectOptions::from_str(&config.url)?;
        if let Some(name) = &config.name {
            options = options.database(name);
        }
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect_with(options)
            .await?;

        let repository = Self::new(pool);
        repository.ensure_schema().await?;
        Ok(repository)
    }

    /// Creates the inquiry table and its index if they are missing.
    ///
    /// # Errors
    ///
    /// Returns a [`LeadsError::PersistenceError`] on database failure.
    pub async fn ensure_schema(&self) -> Result<(), LeadsError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_CREATED_AT_INDEX)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Closes every connection in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl InquiryRepository for PostgresInquiryRepository {
    async fn insert(&self, inquiry: &TravelInquiry) -> Result<(), LeadsError> {
        sqlx::query(
            "INSERT INTO travel_inquiries (id, status, created_at, document) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(inquiry.id.as_str())
        .bind(inquiry.status.as_str())
        .bind(inquiry.created_at)
        .bind(Json(inquiry))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &InquiryId) -> Result<TravelInquiry, LeadsError> {
        sqlx::query_scalar::<_, Json<TravelInquiry>>(
            "SELECT document FROM travel_inquiries WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?
        .map(|Json(inquiry)| inquiry)
        .ok_or_else(|| LeadsError::InquiryNotFound(id.to_string()))
    }

    async fn list(
        &self,
        filter: &InquiryFilter,
        page: Page,
    ) -> Result<Vec<TravelInquiry>, LeadsError> {
        let mut query = list_query(filter, page);
        let rows: Vec<Json<TravelInquiry>> =
            query.build_query_scalar().fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(|Json(inquiry)| inquiry).collect())
    }

    async fn stats(&self) -> Result<InquiryStats, LeadsError> {
        let (total, new, contacted, in_progress, booked) =
            sqlx::query_as::<_, (i64, i64, i64, i64, i64)>(
                "SELECT COUNT(*), \
                 COUNT(*) FILTER (WHERE status = 'new'), \
                 COUNT(*) FILTER (WHERE status = 'contacted'), \
                 COUNT(*) FILTER (WHERE status = 'in_progress'), \
                 COUNT(*) FILTER (WHERE status = 'booked') \
                 FROM travel_inquiries",
            )
            .fetch_one(&self.pool)
            .await?;

        let count = |n: i64| u64::try_from(n).unwrap_or_default();
        Ok(InquiryStats {
            total: count(total),
            new: count(new),
            contacted: count(contacted),
            in_progress: count(in_progress),
            booked: count(booked),
        })
    }

    async fn update_status(
        &self,
        id: &InquiryId,
        status: InquiryStatus,
        expected: Option<InquiryStatus>,
    ) -> Result<(), LeadsError> {
        let updated = sqlx::query_scalar::<_, String>(
            "UPDATE travel_inquiries \
             SET status = $2, document = jsonb_set(document, '{status}', to_jsonb($2::text)) \
             WHERE id = $1 AND ($3::text IS NULL OR status = $3) \
             RETURNING id",
        )
        .bind(id.as_str())
        .bind(status.as_str())
        .bind(expected.map(InquiryStatus::as_str))
        .fetch_optional(&self.pool)
        .await?;

        if updated.is_some() {
            return Ok(());
        }

        let current = sqlx::query_scalar::<_, String>(
            "SELECT status FROM travel_inquiries WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match (current, expected) {
            (Some(actual), Some(expected)) => Err(LeadsError::StatusConflict {
                expected,
                actual: actual.parse()?,
            }),
            _ => Err(LeadsError::InquiryNotFound(id.to_string())),
        }
    }

    async fn delete(&self, id: &InquiryId) -> Result<(), LeadsError> {
        let result = sqlx::query("DELETE FROM travel_inquiries WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(LeadsError::InquiryNotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Builds the filtered, paginated listing query.
fn list_query(filter: &InquiryFilter, page: Page) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new("SELECT document FROM travel_inquiries WHERE TRUE");

    if let Some(status) = filter.status {
        query.push(" AND status = ").push_bind(status.as_str());
    }

    if let Some(term) = &filter.search {
        let pattern = format!("%{}%", escape_like(term));
        query.push(" AND (");
        {
            let mut fields = query.separated(" OR ");
            for field in SEARCH_FIELDS {
                fields.push(format!("document->>'{field}' ILIKE "));
                fields.push_bind_unseparated(pattern.clone());
            }
        }
        query.push(")");
    }

    query
        .push(" ORDER BY created_at DESC OFFSET ")
        .push_bind(i64::from(page.skip))
        .push(" LIMIT ")
        .push_bind(i64::from(page.limit));
    query
}

/// Escapes `LIKE` wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
