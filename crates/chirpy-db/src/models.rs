/// Database row types — these map directly to SQLite rows.
/// Ids are canonical UUID text, timestamps are Unix seconds.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChirpRow {
    pub id: String,
    pub body: String,
    pub user_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}
