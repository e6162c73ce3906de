pub mod cs;
pub mod error;

pub use cs::{collections, selection};
pub use error::{Error, Result};
