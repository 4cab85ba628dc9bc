use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::store::Entity;
use crate::user::errors::UserIdError;

/// Role given to every newly registered user.
pub const DEFAULT_ROLE: &str = "user";

/// Role allowed to delete accounts.
pub const ADMIN_ROLE: &str = "admin";

/// User aggregate entity.
///
/// The storage backend owns the record; values of this type are transient
/// copies. `password_hash` never leaves the service, see [`UserSummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a new active user with the default role.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();

        Self {
            id: UserId::new(),
            name,
            email,
            password_hash,
            role: DEFAULT_ROLE.to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the name unless `name` is empty.
    ///
    /// # Returns
    /// Whether the name changed
    pub fn rename(&mut self, name: String) -> bool {
        if name.is_empty() {
            return false;
        }

        self.name = name;
        true
    }

    /// Mark the record as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    ///
    /// # Returns
    /// UserId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Outward view of a user, without credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            is_active: user.is_active,
        }
    }
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            role: user.role,
            is_active: user.is_active,
        }
    }
}

/// Command to register a new user.
///
/// Fields are expected to be structurally valid already.
pub struct CreateUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserCommand {
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Email address, unique among users
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

/// Command to update an existing user.
///
/// An empty `name` leaves the stored name unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
    pub name: String,
}

/// Command to exchange credentials for an access token.
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            "John Doe".to_string(),
            "john@example.com".to_string(),
            "$argon2id$hash".to_string(),
        );

        assert_eq!(user.role, DEFAULT_ROLE);
        assert!(user.is_active);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_rename_ignores_empty_name() {
        let mut user = User::new(
            "John Doe".to_string(),
            "john@example.com".to_string(),
            "$argon2id$hash".to_string(),
        );

        assert!(!user.rename(String::new()));
        assert_eq!(user.name, "John Doe");

        assert!(user.rename("Jane Doe".to_string()));
        assert_eq!(user.name, "Jane Doe");
    }

    #[test]
    fn test_summary_omits_password_hash() {
        let user = User::new(
            "John Doe".to_string(),
            "john@example.com".to_string(),
            "$argon2id$secret_hash".to_string(),
        );

        let json = serde_json::to_string(&UserSummary::from(&user)).unwrap();

        assert!(!json.contains("secret_hash"));
        assert!(json.contains("\"is_active\":true"));
        assert!(json.contains(&user.id.to_string()));
    }

    #[test]
    fn test_user_id_from_string() {
        let id = UserId::new();

        assert_eq!(UserId::from_string(&id.to_string()), Ok(id));
        assert!(UserId::from_string("not-a-uuid").is_err());
    }
}
