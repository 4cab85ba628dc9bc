pub mod auth;
pub mod store;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;
