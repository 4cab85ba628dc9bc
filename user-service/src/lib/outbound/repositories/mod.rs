pub mod memory;
pub mod postgres;
pub mod user;

pub use memory::InMemoryStore;
pub use memory::InMemoryUserRepository;
pub use postgres::PgEntity;
pub use postgres::PgStore;
pub use user::PostgresUserRepository;
