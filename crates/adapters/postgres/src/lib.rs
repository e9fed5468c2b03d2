//! refa-adapter-postgres - PostgreSQL 适配器

mod builder;
mod config;
mod deadline;
mod error;
mod health;
mod transaction;

pub use builder::*;
pub use config::*;
pub use deadline::*;
pub use error::*;
pub use health::*;
pub use transaction::*;
