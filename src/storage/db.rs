use std::time::Duration;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{ErrorCode, Result};

use crate::core::error::AppError;
use crate::storage::migrations;

/// A stored contact record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Surrogate primary key, assigned by SQLite, never reused
    pub id: i64,
    /// Telegram ID of the submitting user; not unique on its own
    pub user_id: i64,
    /// Verified email address or `@handle`
    pub contact: String,
}

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Create a new database connection pool
///
/// Initializes a pool with up to 10 connections, sets a busy timeout on
/// each connection, and applies schema migrations on the first one.
///
/// # Arguments
///
/// * `database_path` - Path to SQLite database file
pub fn create_pool(database_path: &str) -> anyhow::Result<DbPool> {
    let manager = SqliteConnectionManager::file(database_path)
        .with_init(|conn| conn.busy_timeout(Duration::from_secs(30)));
    let pool = Pool::builder()
        .max_size(10) // Maximum 10 connections in the pool
        .build(manager)?;

    let mut conn = pool.get()?;
    migrations::run_migrations(&mut conn)?;

    Ok(pool)
}

/// Get a connection from the pool
///
/// The connection is automatically returned to the pool when dropped.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, r2d2::Error> {
    pool.get()
}

/// Checks whether a (user, contact) pair is already stored.
///
/// Point lookup against the unique index; safe to call concurrently
/// with inserts.
pub fn contact_exists(conn: &DbConnection, user_id: i64, contact: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM contacts WHERE user_id = ?1 AND contact = ?2")?;
    let mut rows = stmt.query(&[&user_id as &dyn rusqlite::ToSql, &contact as &dyn rusqlite::ToSql])?;
    Ok(rows.next()?.is_some())
}

/// Inserts a new contact record.
///
/// # Errors
///
/// Returns `AppError::DuplicateContact` when the unique index on
/// (user_id, contact) rejects the insert. Callers must treat this
/// identically to a pre-flight duplicate.
pub fn save_contact(conn: &DbConnection, user_id: i64, contact: &str) -> Result<(), AppError> {
    let result = conn.execute(
        "INSERT INTO contacts (user_id, contact) VALUES (?1, ?2)",
        &[&user_id as &dyn rusqlite::ToSql, &contact as &dyn rusqlite::ToSql],
    );

    match result {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            Err(AppError::DuplicateContact)
        }
        Err(e) => Err(AppError::Database(e)),
    }
}

/// Inserts a contact only if the (user, contact) pair is not stored yet.
///
/// Single conditional statement (`INSERT OR IGNORE`), so two concurrent
/// submissions of the same pair cannot race: exactly one writes a row.
///
/// # Returns
///
/// `Ok(true)` if a new row was written, `Ok(false)` if the pair already
/// existed.
pub fn insert_contact_if_absent(conn: &DbConnection, user_id: i64, contact: &str) -> Result<bool> {
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO contacts (user_id, contact) VALUES (?1, ?2)",
        &[&user_id as &dyn rusqlite::ToSql, &contact as &dyn rusqlite::ToSql],
    )?;
    Ok(inserted > 0)
}

/// Returns all stored contacts for a user, oldest first.
pub fn get_contacts(conn: &DbConnection, user_id: i64) -> Result<Vec<Contact>> {
    let mut stmt = conn.prepare("SELECT id, user_id, contact FROM contacts WHERE user_id = ?1 ORDER BY id")?;
    let rows = stmt.query_map(&[&user_id as &dyn rusqlite::ToSql], |row| {
        Ok(Contact {
            id: row.get(0)?,
            user_id: row.get(1)?,
            contact: row.get(2)?,
        })
    })?;

    let mut contacts = Vec::new();
    for row in rows {
        contacts.push(row?);
    }
    Ok(contacts)
}
