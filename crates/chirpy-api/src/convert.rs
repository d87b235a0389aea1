use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use chirpy_db::models::{ChirpRow, UserRow};
use chirpy_types::models::{Chirp, User};

pub fn user_from_row(row: UserRow) -> Result<User> {
    Ok(User {
        id: parse_id(&row.id, "user id", &row.id)?,
        created_at: parse_timestamp(row.created_at, "created_at", &row.id)?,
        updated_at: parse_timestamp(row.updated_at, "updated_at", &row.id)?,
        email: row.email,
    })
}

pub fn chirp_from_row(row: ChirpRow) -> Result<Chirp> {
    Ok(Chirp {
        id: parse_id(&row.id, "chirp id", &row.id)?,
        created_at: parse_timestamp(row.created_at, "created_at", &row.id)?,
        updated_at: parse_timestamp(row.updated_at, "updated_at", &row.id)?,
        user_id: parse_id(&row.user_id, "user_id", &row.id)?,
        body: row.body,
    })
}

fn parse_id(raw: &str, field: &str, row_id: &str) -> Result<Uuid> {
    raw.parse()
        .with_context(|| format!("Corrupt {} '{}' on row '{}'", field, raw, row_id))
}

fn parse_timestamp(secs: i64, field: &str, row_id: &str) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| anyhow!("Corrupt {} '{}' on row '{}'", field, secs, row_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_chirp_row() {
        let id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let chirp = chirp_from_row(ChirpRow {
            id: id.to_string(),
            body: "hi".into(),
            user_id: user_id.to_string(),
            created_at: 1_700_000_000,
            updated_at: 1_700_000_001,
        })
        .unwrap();

        assert_eq!(chirp.id, id);
        assert_eq!(chirp.user_id, user_id);
        assert_eq!(chirp.created_at.timestamp(), 1_700_000_000);
        assert_eq!(chirp.updated_at.timestamp(), 1_700_000_001);
        assert_eq!(chirp.body, "hi");
    }

    #[test]
    fn corrupt_id_is_an_error() {
        let result = user_from_row(UserRow {
            id: "not-a-uuid".into(),
            email: "a@b.c".into(),
            created_at: 0,
            updated_at: 0,
        });
        let err = result.unwrap_err().to_string();
        assert!(err.contains("not-a-uuid"), "{}", err);
    }

    #[test]
    fn corrupt_user_id_on_chirp_is_an_error() {
        let result = chirp_from_row(ChirpRow {
            id: Uuid::new_v4().to_string(),
            body: "hi".into(),
            user_id: "".into(),
            created_at: 0,
            updated_at: 0,
        });
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_timestamp_is_an_error() {
        let result = chirp_from_row(ChirpRow {
            id: Uuid::new_v4().to_string(),
            body: "hi".into(),
            user_id: Uuid::new_v4().to_string(),
            created_at: i64::MAX,
            updated_at: 0,
        });
        assert!(result.is_err());
    }
}
