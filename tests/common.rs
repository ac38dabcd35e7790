#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::Connection;
use std::path::PathBuf;
use tempfile::TempDir;

pub const USERS_SCHEMA: &str = "
    CREATE TABLE o_users (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        username    TEXT,
        password    TEXT,
        role        TEXT,
        email       TEXT,
        nickname    TEXT,
        avatar      TEXT,
        description TEXT,
        created_at  DATETIME,
        updated_at  DATETIME
    );
";

/// Scratch CasaOS layout: `<tmp>/db/user.db` plus the backup target next to it.
pub struct Store {
    pub dir: TempDir,
    pub db: PathBuf,
    pub backup: PathBuf,
}

impl Store {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = dir.path().join("db").join("user.db");
        let backup = dir.path().join("db").join("user_backup.db");
        std::fs::create_dir_all(db.parent().unwrap()).expect("create db dir");

        let conn = Connection::open(&db).expect("open db");
        conn.execute_batch(USERS_SCHEMA).expect("create schema");

        Self { dir, db, backup }
    }

    pub fn seed(&self, username: &str, password_hash: &str) {
        let conn = Connection::open(&self.db).expect("open db");
        conn.execute(
            "INSERT INTO o_users (username, password, role, created_at) VALUES (?1, ?2, 'admin', '2024-01-01T00:00:00')",
            [username, password_hash],
        )
        .expect("seed user");
    }

    pub fn users(&self) -> Vec<(i64, String, String, String)> {
        let conn = Connection::open(&self.db).expect("open db");
        let mut stmt = conn
            .prepare("SELECT id, username, password, role FROM o_users")
            .expect("prepare");
        stmt.query_map([], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)))
            .expect("query")
            .map(|r| r.expect("row"))
            .collect()
    }

    /// The binary pointed at this store, with a service manager that always
    /// succeeds and no sudo.
    pub fn cmd(&self) -> Command {
        self.cmd_with("true")
    }

    pub fn cmd_with(&self, service_manager: &str) -> Command {
        let mut cmd = casaos();
        cmd.args([
            "--db",
            self.db.to_str().unwrap(),
            "--backup",
            self.backup.to_str().unwrap(),
            "--service-manager",
            service_manager,
            "--no-sudo",
        ]);
        cmd
    }
}

pub fn casaos() -> Command {
    cargo_bin_cmd!("casaos-users")
}
