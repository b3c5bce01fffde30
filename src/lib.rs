// lib.rs - snakefront library root

//! # snakefront - Frontend for a Snakemake de novo transcriptome workflow
//!
//! This library resolves user options (sample table, adapter file, job count,
//! memory ceiling, BUSCO lineage) against an optional YAML config file with a
//! fixed precedence, validates the referenced files, and assembles a single
//! Snakemake invocation that runs the actual pipeline (Trimmomatic trimming,
//! Trinity assembly, BUSCO assessment).
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use snakefront::prelude::*;
//!
//! let args = Args {
//!     jobs: 4,
//!     input: Some("config/species_table.tsv".to_string()),
//!     configfile: None,
//!     adapter: None,
//!     maxmemory: None,
//!     lineage: None,
//!     dryrun: true,
//!     generate_config: false,
//! };
//!
//! let resolved = resolve_args(&args)?;
//! let command = SnakemakeCommand::build(&resolved);
//! let exit_code = dispatch(&command)?;
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod runner;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{resolve_args, Args, Config, RunConfig};
    pub use crate::cli::{DEFAULT_ADAPTER, DEFAULT_LINEAGE, DEFAULT_MAX_MEMORY};
    pub use crate::runner::{dispatch, SnakemakeCommand, SNAKEFILE, SNAKEMAKE};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, Config, RunConfig};
pub use runner::SnakemakeCommand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "snakefront v{} - Frontend for the Snakemake transcriptome workflow",
        VERSION
    )
}
