/// Role assigned to every account created by this tool.
pub const ADMIN_ROLE: &str = "admin";

/// One row of the CasaOS `o_users` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub role: String,
    pub created_at: Option<String>, // ISO 8601
    pub updated_at: Option<String>, // NULL until the first edit
}
