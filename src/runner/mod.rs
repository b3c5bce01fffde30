// mod.rs - Workflow runner module

pub mod command;
pub mod dispatch;

// Re-export main types for convenience
pub use command::{SnakemakeCommand, SNAKEFILE, SNAKEMAKE};
pub use dispatch::dispatch;
