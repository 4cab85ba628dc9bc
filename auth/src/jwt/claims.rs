use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    pub email: String,

    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, issued now and expiring after `ttl`.
    ///
    /// A zero or negative `ttl` produces claims that are already expired.
    /// An expiration past the range of `DateTime<Utc>` saturates at its bound.
    ///
    /// # Arguments
    /// * `subject_id` - Unique user identifier
    /// * `email` - User email address
    /// * `role` - User role
    /// * `ttl` - Time to live of the token
    pub fn for_user(
        subject_id: impl ToString,
        email: impl ToString,
        role: impl ToString,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();
        let expiration = now.checked_add_signed(ttl).unwrap_or(if ttl < Duration::zero() {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        });

        Self {
            sub: subject_id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if the claims are expired at `current_timestamp`.
    ///
    /// A token whose expiration equals the current second is already expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user("user-123", "test@example.com", "admin", Duration::hours(24));

        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_for_user_with_zero_ttl_is_expired() {
        let claims = Claims::for_user("user-123", "test@example.com", "user", Duration::zero());

        assert_eq!(claims.exp, claims.iat);
        assert!(claims.is_expired(claims.iat));
    }

    #[test]
    fn test_for_user_saturates_out_of_range_expiration() {
        let far = Claims::for_user("user-123", "test@example.com", "user", Duration::MAX);
        assert_eq!(far.exp, DateTime::<Utc>::MAX_UTC.timestamp());
        assert!(!far.is_expired(Utc::now().timestamp()));

        let past = Claims::for_user("user-123", "test@example.com", "user", Duration::MIN);
        assert_eq!(past.exp, DateTime::<Utc>::MIN_UTC.timestamp());
        assert!(past.is_expired(past.iat));
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: "user-123".to_string(),
            email: "test@example.com".to_string(),
            role: "user".to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001));
    }
}
