pub mod analytics;
pub mod error;
pub mod extract;
pub mod links;
pub mod movies;
pub mod ratings;
pub mod system;
pub mod tags;
pub mod types;

pub use analytics::*;
pub use error::*;
pub use extract::*;
pub use links::*;
pub use movies::*;
pub use ratings::*;
pub use system::*;
pub use tags::*;
pub use types::*;
