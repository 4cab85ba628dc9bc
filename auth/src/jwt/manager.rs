use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Largest time to live, in hours, a [`TokenManager`] applies (100 years).
pub const MAX_TTL_HOURS: i64 = 24 * 365 * 100;

/// Issues and verifies signed, time-bound access tokens.
///
/// Uses HS256 (HMAC with SHA-256). The secret and time to live are fixed at
/// construction, so a single instance can be shared between tasks without
/// locking.
pub struct TokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
    ttl: Duration,
}

impl TokenManager {
    /// Create a new token manager.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `ttl_hours` - Hours a token stays valid after issuance. Zero or a
    ///   negative value yields tokens that are expired as soon as they are issued.
    ///   The value is clamped to `[-MAX_TTL_HOURS, MAX_TTL_HOURS]`.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], ttl_hours: i64) -> Self {
        let algorithm = Algorithm::HS256;

        let mut validation = Validation::new(algorithm);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            validation,
            ttl: Duration::try_hours(ttl_hours.clamp(-MAX_TTL_HOURS, MAX_TTL_HOURS))
                .unwrap_or_else(Duration::zero),
        }
    }

    /// Time to live applied to every issued token.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for a user.
    ///
    /// # Arguments
    /// * `subject_id` - User identifier
    /// * `email` - User email address
    /// * `role` - User role
    ///
    /// # Returns
    /// Signed JWT string
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    pub fn issue(&self, subject_id: &str, email: &str, role: &str) -> Result<String, JwtError> {
        let claims = Claims::for_user(subject_id, email, role, self.ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::SigningFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// # Arguments
    /// * `token` - JWT string to verify
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `InvalidToken` - Signature mismatch, malformed token or expired token
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| JwtError::InvalidToken)?;

        // The library accepts `exp == now`; expiry is exclusive here.
        if token_data.claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::InvalidToken);
        }

        Ok(token_data.claims)
    }
}
