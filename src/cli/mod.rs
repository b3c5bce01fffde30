// mod.rs - CLI module

pub mod args;
pub mod config;
pub mod merge;
pub mod validation;

// Re-export main types for convenience
pub use args::Args;
pub use config::Config;
pub use validation::{resolve_args, RunConfig};
pub use validation::{DEFAULT_ADAPTER, DEFAULT_LINEAGE, DEFAULT_MAX_MEMORY};
