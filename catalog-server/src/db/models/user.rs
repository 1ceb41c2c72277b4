//! User (credential) storage model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::client::UserInfo;
use shared::Role;

use super::serde_helpers;

pub const USER_TABLE: &str = "user";

/// User record as stored in SurrealDB
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub email: String,
    /// argon2 PHC string; never serialized into responses
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub hash_pass: String,
    #[serde(default)]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            password_hash::{PasswordHash, PasswordVerifier},
            Argon2,
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
            Argon2,
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }

    /// Public view of the user (id + email + role, no hash)
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            email: self.email.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_round_trip() {
        let hash = User::hash_password("secret123").expect("hashing should succeed");
        let user = User {
            id: None,
            email: "a@b.com".into(),
            hash_pass: hash,
            role: Role::User,
            created_at: Utc::now(),
        };
        assert!(user.verify_password("secret123").unwrap());
        assert!(!user.verify_password("wrong").unwrap());
    }

    #[test]
    fn info_never_carries_the_hash() {
        let user = User {
            id: Some(RecordId::from_table_key(USER_TABLE, "u1")),
            email: "a@b.com".into(),
            hash_pass: "$argon2id$fake".into(),
            role: Role::Admin,
            created_at: Utc::now(),
        };
        let info = user.to_info();
        assert_eq!(info.id, "user:u1");
        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("hashPass").is_none());
        assert_eq!(json["role"], "admin");
    }
}
