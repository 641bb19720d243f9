pub mod model;
pub mod repo;
pub mod sqlite;

#[cfg(test)]
pub(crate) mod fixture;

pub use model::*;
pub use repo::*;
pub use sqlite::{Session, SqliteRepository};
