//! Role Model

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// User role (closed set)
///
/// Authorization is a pure check against this enum; there is no
/// permission list behind it. Unknown role strings fail to parse
/// instead of silently granting anything.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Whether this role may perform catalog mutations
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_as_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"user\"").unwrap(),
            Role::User
        );
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(serde_json::from_str::<Role>("\"superadmin\"").is_err());
    }

    #[test]
    fn only_admin_may_mutate() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::User.is_admin());
    }
}
