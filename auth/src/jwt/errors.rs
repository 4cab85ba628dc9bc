use thiserror::Error;

/// Error type for JWT operations.
///
/// Verification failures are collapsed into a single `InvalidToken` variant so
/// that callers cannot tell a forged token from an expired or malformed one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Invalid or expired token")]
    InvalidToken,
}
