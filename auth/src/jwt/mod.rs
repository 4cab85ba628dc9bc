pub mod claims;
pub mod errors;
pub mod manager;

pub use claims::Claims;
pub use errors::JwtError;
pub use manager::TokenManager;
pub use manager::MAX_TTL_HOURS;
