// command.rs - Snakemake command line assembly

use crate::cli::RunConfig;
use std::fmt;

/// Program the assembled command is handed to
pub const SNAKEMAKE: &str = "snakemake";
/// Workflow definition shipped with the pipeline
pub const SNAKEFILE: &str = "workflow/Snakefile_mod";

/// One fully assembled Snakemake invocation.
///
/// The arguments are kept as an explicit vector and passed to the spawn
/// primitive as-is, so path and flag values are never re-interpreted by a
/// shell.
#[derive(Debug, Clone, PartialEq)]
pub struct SnakemakeCommand {
    args: Vec<String>,
}

impl SnakemakeCommand {
    /// Assemble the invocation for a resolved run configuration
    pub fn build(config: &RunConfig) -> Self {
        let mut args: Vec<String> = vec![
            "--snakefile".to_string(),
            SNAKEFILE.to_string(),
            "--use-conda".to_string(),
            "--jobs".to_string(),
            config.jobs.to_string(),
        ];

        if config.dry_run {
            args.push("--dryrun".to_string());
            args.push("-p".to_string());
        }

        if let Some(configfile) = &config.configfile {
            args.push("--configfile".to_string());
            args.push(configfile.clone());
        }

        // The resolved values always overwrite the workflow config object,
        // whether or not a config file was forwarded.
        args.push("--config".to_string());
        args.push(format!("sample_info={}", config.sample_input));
        args.push(format!("adapter={}", config.adapter));
        args.push(format!("max_memory={}", config.max_memory));
        args.push(format!("lineage={}", config.lineage));

        Self { args }
    }

    /// Argument vector handed to the spawn primitive
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for SnakemakeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", SNAKEMAKE, self.args.join(" "))
    }
}
