use crate::models::{ChirpRow, UserRow};
use crate::Database;
use anyhow::Result;
use rusqlite::{OptionalExtension, Row};

impl Database {
    // -- Users --

    pub fn create_user(&self, id: &str, email: &str, now: i64) -> Result<UserRow> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (id, email, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
                rusqlite::params![id, email, now],
            )?;
            Ok(UserRow {
                id: id.to_string(),
                email: email.to_string(),
                created_at: now,
                updated_at: now,
            })
        })
    }

    /// Deletes every user. Their chirps go with them via `ON DELETE CASCADE`.
    /// Returns the number of users removed.
    pub fn delete_all_users(&self) -> Result<usize> {
        self.with_conn(|conn| Ok(conn.execute("DELETE FROM users", [])?))
    }

    // -- Chirps --

    pub fn create_chirp(&self, id: &str, body: &str, user_id: &str, now: i64) -> Result<ChirpRow> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO chirps (id, body, user_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)",
                rusqlite::params![id, body, user_id, now],
            )?;
            Ok(ChirpRow {
                id: id.to_string(),
                body: body.to_string(),
                user_id: user_id.to_string(),
                created_at: now,
                updated_at: now,
            })
        })
    }

    /// All chirps, oldest first. Ties on the second-resolution timestamp
    /// fall back to insertion order.
    pub fn list_chirps(&self) -> Result<Vec<ChirpRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, body, user_id, created_at, updated_at
                 FROM chirps
                 ORDER BY created_at ASC, rowid ASC",
            )?;

            let rows = stmt
                .query_map([], chirp_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }

    pub fn get_chirp(&self, id: &str) -> Result<Option<ChirpRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, body, user_id, created_at, updated_at FROM chirps WHERE id = ?1",
                    [id],
                    chirp_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }
}

fn chirp_from_row(row: &Row<'_>) -> rusqlite::Result<ChirpRow> {
    Ok(ChirpRow {
        id: row.get(0)?,
        body: row.get(1)?,
        user_id: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    fn stored_user(db: &Database, id: &str) -> Option<UserRow> {
        db.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, email, created_at, updated_at FROM users WHERE id = ?1",
                    [id],
                    |row| {
                        Ok(UserRow {
                            id: row.get(0)?,
                            email: row.get(1)?,
                            created_at: row.get(2)?,
                            updated_at: row.get(3)?,
                        })
                    },
                )
                .optional()?;
            Ok(row)
        })
        .unwrap()
    }

    #[test]
    fn create_user_persists_row() {
        let db = Database::open_in_memory().unwrap();
        let id = new_id();

        let created = db.create_user(&id, "walt@breakingbad.com", 1_700_000_000).unwrap();
        assert_eq!(created.created_at, created.updated_at);

        assert_eq!(stored_user(&db, &id), Some(created));
        assert!(stored_user(&db, &new_id()).is_none());
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let db = Database::open_in_memory().unwrap();
        db.create_user(&new_id(), "saul@bettercall.com", 1).unwrap();
        assert!(db.create_user(&new_id(), "saul@bettercall.com", 2).is_err());
    }

    #[test]
    fn chirp_requires_existing_user() {
        let db = Database::open_in_memory().unwrap();
        let result = db.create_chirp(&new_id(), "orphan", &new_id(), 1);
        assert!(result.is_err());
    }

    #[test]
    fn chirps_list_in_creation_order() {
        let db = Database::open_in_memory().unwrap();
        let user = new_id();
        db.create_user(&user, "jesse@pinkman.com", 10).unwrap();

        let late = db.create_chirp(&new_id(), "third", &user, 30).unwrap();
        let first = db.create_chirp(&new_id(), "first", &user, 10).unwrap();
        let tied = db.create_chirp(&new_id(), "second", &user, 10).unwrap();

        let bodies: Vec<String> = db.list_chirps().unwrap().into_iter().map(|c| c.body).collect();
        assert_eq!(bodies, vec![first.body, tied.body, late.body]);
    }

    #[test]
    fn get_chirp_by_id() {
        let db = Database::open_in_memory().unwrap();
        let user = new_id();
        db.create_user(&user, "skyler@white.com", 5).unwrap();
        let chirp = db.create_chirp(&new_id(), "hello", &user, 6).unwrap();

        assert_eq!(db.get_chirp(&chirp.id).unwrap(), Some(chirp));
        assert_eq!(db.get_chirp(&new_id()).unwrap(), None);
    }

    #[test]
    fn deleting_users_cascades_to_chirps() {
        let db = Database::open_in_memory().unwrap();
        let user = new_id();
        db.create_user(&user, "hank@dea.gov", 1).unwrap();
        db.create_chirp(&new_id(), "minerals", &user, 2).unwrap();
        db.create_chirp(&new_id(), "rocks", &user, 3).unwrap();

        assert_eq!(db.delete_all_users().unwrap(), 1);
        assert!(db.list_chirps().unwrap().is_empty());
        assert!(stored_user(&db, &user).is_none());
    }

    #[test]
    fn file_database_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chirpy.db");
        let id = new_id();

        {
            let db = Database::open(&path).unwrap();
            db.create_user(&id, "gus@pollos.com", 42).unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(stored_user(&db, &id).unwrap().email, "gus@pollos.com");
    }
}
