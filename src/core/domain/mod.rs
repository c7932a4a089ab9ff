//! Domain types.

mod env;
mod record;
mod schema;

pub use env::RecordSet;
pub use record::{prefix, EnvRecord};
pub use schema::{Property, Schema};
