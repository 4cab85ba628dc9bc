//! Authentication primitives for the user service.
//!
//! - Password hashing and verification (Argon2id)
//! - Issuing and verifying time-bound JWT access tokens (HS256)
//!
//! Both types hold only immutable configuration and can be shared freely
//! between tasks.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::TokenManager;
//!
//! let tokens = TokenManager::new(b"secret_key_at_least_32_bytes_long!", 24);
//! let token = tokens.issue("user123", "alice@example.com", "user").unwrap();
//! let claims = tokens.verify(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! assert_eq!(claims.role, "user");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenManager;
pub use jwt::MAX_TTL_HOURS;
pub use password::PasswordError;
pub use password::PasswordHasher;
