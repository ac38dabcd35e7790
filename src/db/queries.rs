use crate::models::UserRecord;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Natural storage order: no ORDER BY on purpose, rows come back the way
/// SQLite walks the table.
pub fn list_users(conn: &Connection) -> Result<Vec<UserRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, username, password, role, created_at, updated_at
         FROM o_users",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<UserRecord> {
    Ok(UserRecord {
        id: row.get("id")?,
        username: row.get::<_, Option<String>>("username")?.unwrap_or_default(),
        password: row.get::<_, Option<String>>("password")?.unwrap_or_default(),
        role: row.get::<_, Option<String>>("role")?.unwrap_or_default(),
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Exact, case-sensitive match.
pub fn username_exists(conn: &Connection, username: &str) -> Result<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM o_users WHERE username = ?1",
            [username],
            |row| row.get::<_, i64>(0),
        )
        .optional()?;
    Ok(found.is_some())
}

pub fn find_user(conn: &Connection, id: i64) -> Result<Option<UserRecord>> {
    conn.query_row(
        "SELECT id, username, password, role, created_at, updated_at
         FROM o_users WHERE id = ?1",
        [id],
        map_row,
    )
    .optional()
}

/// Insert a new account. Returns the id assigned by SQLite.
pub fn insert_user(
    conn: &Connection,
    username: &str,
    password_hash: &str,
    role: &str,
    created_at: &str,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO o_users (username, password, role, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![username, password_hash, role, created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Returns the number of rows touched (0 when the id does not exist).
pub fn update_password(
    conn: &Connection,
    id: i64,
    password_hash: &str,
    updated_at: &str,
) -> Result<usize> {
    conn.execute(
        "UPDATE o_users SET password = ?1, updated_at = ?2 WHERE id = ?3",
        params![password_hash, updated_at, id],
    )
}

pub fn delete_user(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM o_users WHERE id = ?1", [id])
}
