pub mod collections;
pub mod selection;

// Re-export all modules
pub use collections::*;
pub use selection::*;
