use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;
use time::OffsetDateTime;

use crate::users::dto::{UpdateProfileRequest, UpdateSetupRequest};
use crate::users::repo_types::{PublicUser, User};

/// Faults surfaced by the user store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched the given id. Produced only by the id lookup and the
    /// profile update; the email lookup reports absence as `Ok(None)`.
    #[error("user not found")]
    NotFound,
    /// Any underlying storage fault, unique-constraint violations included.
    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

/// SQLite-backed store owning the users table and all of its SQL.
#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    /// Opens the store, creating the database file and the users table when
    /// missing. Table creation is idempotent.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let opts = SqliteConnectOptions::from_str(database_url)
            .context("parse database url")?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        // One connection is the whole pool: every operation goes through the
        // same shared handle, so writes serialize on it.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await
            .context("connect to user store")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id              INTEGER PRIMARY KEY AUTOINCREMENT,
                name            TEXT NOT NULL,
                email           TEXT NOT NULL UNIQUE,
                password        TEXT NOT NULL,
                designation     TEXT,
                company         TEXT,
                location        TEXT,
                phone           TEXT,
                about           TEXT,
                skills          TEXT,
                experience      TEXT,
                github          TEXT,
                linkedin        TEXT,
                setup_completed BOOLEAN NOT NULL DEFAULT 0,
                created_at      TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .context("create users table")?;

        Ok(Self { pool })
    }

    /// Closes the underlying pool. Operations issued afterwards fail with a
    /// storage fault.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    // ---- Operations ----

    /// Insert a new record; every optional field starts unset. A duplicate
    /// email fails the UNIQUE constraint and comes back as a plain storage
    /// fault, same as any other.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<i64, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (name, email, password, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Exact-match lookup returning the full stored row, password included.
    /// `None` means no such email and is not a fault.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, designation, company, location, phone,
                   about, skills, experience, github, linkedin, setup_completed, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Exact-match lookup on id, serving the projection without the password.
    pub async fn find_by_id(&self, id: i64) -> Result<PublicUser, StoreError> {
        sqlx::query_as::<_, PublicUser>(
            r#"
            SELECT id, name, email, designation, company, location, phone,
                   about, skills, experience, github, linkedin, setup_completed, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    /// Overwrite the nine optional fields and unconditionally mark setup as
    /// completed. Returns the matched-row count; the caller decides whether
    /// zero rows is an error.
    pub async fn update_setup(&self, req: &UpdateSetupRequest) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET designation = ?, company = ?, location = ?, phone = ?, about = ?,
                skills = ?, experience = ?, github = ?, linkedin = ?, setup_completed = 1
            WHERE id = ?
            "#,
        )
        .bind(req.designation.as_deref())
        .bind(req.company.as_deref())
        .bind(req.location.as_deref())
        .bind(req.phone.as_deref())
        .bind(req.about.as_deref())
        .bind(req.skills.as_deref())
        .bind(req.experience.as_deref())
        .bind(req.github.as_deref())
        .bind(req.linkedin.as_deref())
        .bind(req.user_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Overwrite name, email and the optional fields in a single statement
    /// and return the row it wrote; `setup_completed` is left untouched.
    pub async fn update_profile(
        &self,
        id: i64,
        req: &UpdateProfileRequest,
    ) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = ?, email = ?, designation = ?, company = ?, location = ?,
                phone = ?, about = ?, skills = ?, experience = ?, github = ?, linkedin = ?
            WHERE id = ?
            RETURNING id, name, email, password, designation, company, location, phone,
                      about, skills, experience, github, linkedin, setup_completed, created_at
            "#,
        )
        .bind(req.name.as_str())
        .bind(req.email.as_str())
        .bind(req.designation.as_deref())
        .bind(req.company.as_deref())
        .bind(req.location.as_deref())
        .bind(req.phone.as_deref())
        .bind(req.about.as_deref())
        .bind(req.skills.as_deref())
        .bind(req.experience.as_deref())
        .bind(req.github.as_deref())
        .bind(req.linkedin.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }
}
