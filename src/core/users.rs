use crate::config::Config;
use crate::core::password::{Md5Hasher, PasswordHasher};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{ADMIN_ROLE, UserRecord};
use crate::utils::time::now_iso;
use rusqlite::TransactionBehavior;
use std::path::PathBuf;

/// CRUD over `o_users`. Every operation opens its own connection and drops it
/// before returning, on success and on error alike.
pub struct UserStore<H: PasswordHasher = Md5Hasher> {
    database: PathBuf,
    hasher: H,
}

impl UserStore<Md5Hasher> {
    pub fn new(cfg: &Config) -> Self {
        Self::with_hasher(cfg, Md5Hasher)
    }
}

impl<H: PasswordHasher> UserStore<H> {
    pub fn with_hasher(cfg: &Config, hasher: H) -> Self {
        Self {
            database: PathBuf::from(&cfg.database),
            hasher,
        }
    }

    fn open(&self) -> AppResult<DbPool> {
        Ok(DbPool::new(&self.database)?)
    }

    pub fn list(&self) -> AppResult<Vec<UserRecord>> {
        let pool = self.open()?;
        Ok(queries::list_users(&pool.conn)?)
    }

    /// Create an admin account.
    ///
    /// The duplicate check and the insert share one `BEGIN IMMEDIATE`
    /// transaction, so no other SQLite writer can slip a row with the same
    /// username in between. The table itself carries no UNIQUE constraint and
    /// this tool does not alter a schema it does not own.
    pub fn add(&self, username: &str, password: &str) -> AppResult<UserRecord> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Username and password cannot be empty.".into(),
            ));
        }

        let hashed = self.hasher.hash(password);
        let created_at = now_iso();

        let mut pool = self.open()?;
        let inserted = {
            let tx = pool
                .conn
                .transaction_with_behavior(TransactionBehavior::Immediate)?;
            if queries::username_exists(&tx, username)? {
                // dropping tx rolls back
                None
            } else {
                let id = queries::insert_user(&tx, username, &hashed, ADMIN_ROLE, &created_at)?;
                tx.commit()?;
                Some(id)
            }
        };

        let Some(id) = inserted else {
            return Err(AppError::DuplicateUser(username.to_string()));
        };

        tracing::info!(id, username, "user added");
        queries::find_user(&pool.conn, id)?.ok_or(AppError::UserNotFound(id))
    }

    pub fn edit_password(&self, id: &str, new_password: &str) -> AppResult<()> {
        let id = id.trim();
        let new_password = new_password.trim();

        if id.is_empty() || new_password.is_empty() {
            return Err(AppError::Validation(
                "User ID and new password cannot be empty.".into(),
            ));
        }
        let id = parse_user_id(id)?;

        let hashed = self.hasher.hash(new_password);
        let updated_at = now_iso();

        let pool = self.open()?;
        let changed = queries::update_password(&pool.conn, id, &hashed, &updated_at)?;
        if changed == 0 {
            return Err(AppError::UserNotFound(id));
        }

        tracing::info!(id, "password updated");
        Ok(())
    }

    pub fn remove(&self, id: &str) -> AppResult<()> {
        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::Validation("User ID cannot be empty.".into()));
        }
        let id = parse_user_id(id)?;

        let pool = self.open()?;
        let removed = queries::delete_user(&pool.conn, id)?;
        if removed == 0 {
            return Err(AppError::UserNotFound(id));
        }

        tracing::info!(id, "user removed");
        Ok(())
    }
}

fn parse_user_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::Validation(format!("Invalid user ID '{}': expected a number.", raw)))
}
