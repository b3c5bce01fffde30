// validation.rs - Argument resolution and input validation

use crate::cli::args::Args;
use std::path::Path;

/// Default trimming clip for Trimmomatic and the Trinity assembly
pub const DEFAULT_ADAPTER: &str = "TruSeq3-PE.fa";
/// Default max memory per sample for the Trinity assembly
pub const DEFAULT_MAX_MEMORY: &str = "100G";
/// Default BUSCO lineage
pub const DEFAULT_LINEAGE: &str = "mollusca_odb10";

/// Fully resolved settings for one workflow launch.
///
/// Built once per invocation by [`resolve_args`]; every field is guaranteed
/// present (user-, config-, or default-supplied) by the time command
/// assembly sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub jobs: usize,
    pub sample_input: String,
    pub adapter: String,
    pub max_memory: String,
    pub lineage: String,
    pub dry_run: bool,
    pub configfile: Option<String>,
}

/// Resolve merged command line arguments into a [`RunConfig`].
///
/// Expects config-file values to have been merged into `args` already (see
/// `Args::with_config_file`); this step applies the fixed defaults with a
/// warning per substituted value and runs the file existence checks.
pub fn resolve_args(args: &Args) -> Result<RunConfig, String> {
    if args.jobs == 0 {
        return Err("--jobs must be a positive number of parallel jobs".to_string());
    }

    let sample_input = args
        .input
        .clone()
        .ok_or_else(|| "No sample table provided!".to_string())?;

    let adapter = match &args.adapter {
        Some(adapter) => adapter.clone(),
        None => {
            warn_default("adapter file", DEFAULT_ADAPTER, args.configfile.as_deref());
            DEFAULT_ADAPTER.to_string()
        }
    };

    let max_memory = match &args.maxmemory {
        Some(max_memory) => max_memory.clone(),
        None => {
            warn_default(
                "max RAM memory for the Trinity assembly",
                DEFAULT_MAX_MEMORY,
                args.configfile.as_deref(),
            );
            DEFAULT_MAX_MEMORY.to_string()
        }
    };

    let lineage = match &args.lineage {
        Some(lineage) => lineage.clone(),
        None => {
            warn_default("BUSCO lineage", DEFAULT_LINEAGE, args.configfile.as_deref());
            DEFAULT_LINEAGE.to_string()
        }
    };

    // Bare filenames are resolved by Trimmomatic's own adapter lookup and
    // are deliberately not checked here.
    if adapter.contains('/') && !Path::new(&adapter).exists() {
        return Err(format!("The adapter file {} could not be found", adapter));
    }

    Ok(RunConfig {
        jobs: args.jobs,
        sample_input,
        adapter,
        max_memory,
        lineage,
        dry_run: args.dryrun,
        configfile: args.configfile.clone(),
    })
}

fn warn_default(what: &str, default: &str, configfile: Option<&str>) {
    match configfile {
        Some(configfile) => println!(
            "⚠️  Warning! No {} found in {}. Default set to {}",
            what, configfile, default
        ),
        None => println!(
            "⚠️  Warning! No {} was provided. Default set to {}",
            what, default
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_input() -> Args {
        Args {
            jobs: 4,
            input: Some("samples.tsv".to_string()),
            configfile: None,
            adapter: None,
            maxmemory: None,
            lineage: None,
            dryrun: false,
            generate_config: false,
        }
    }

    #[test]
    fn test_defaults_applied_when_only_jobs_and_input_given() {
        let resolved = resolve_args(&args_with_input()).unwrap();
        assert_eq!(resolved.jobs, 4);
        assert_eq!(resolved.sample_input, "samples.tsv");
        assert_eq!(resolved.adapter, DEFAULT_ADAPTER);
        assert_eq!(resolved.max_memory, DEFAULT_MAX_MEMORY);
        assert_eq!(resolved.lineage, DEFAULT_LINEAGE);
        assert!(!resolved.dry_run);
    }

    #[test]
    fn test_missing_sample_table_is_fatal() {
        let mut args = args_with_input();
        args.input = None;

        let err = resolve_args(&args).unwrap_err();
        assert!(err.contains("No sample table provided!"));
    }

    #[test]
    fn test_zero_jobs_rejected() {
        let mut args = args_with_input();
        args.jobs = 0;

        assert!(resolve_args(&args).is_err());
    }

    #[test]
    fn test_explicit_values_kept() {
        let mut args = args_with_input();
        args.adapter = Some("NexteraPE-PE.fa".to_string());
        args.maxmemory = Some("64G".to_string());
        args.lineage = Some("metazoa_odb10".to_string());
        args.dryrun = true;

        let resolved = resolve_args(&args).unwrap();
        assert_eq!(resolved.adapter, "NexteraPE-PE.fa");
        assert_eq!(resolved.max_memory, "64G");
        assert_eq!(resolved.lineage, "metazoa_odb10");
        assert!(resolved.dry_run);
    }

    #[test]
    fn test_adapter_path_must_exist() {
        let mut args = args_with_input();
        args.adapter = Some("path/to/missing.fa".to_string());

        let err = resolve_args(&args).unwrap_err();
        assert!(err.contains("path/to/missing.fa"));
    }

    #[test]
    fn test_adapter_path_accepted_when_present() {
        let path = std::env::temp_dir().join("snakefront_adapter_check.fa");
        std::fs::write(&path, ">adapter\nAGATCGGAAGAG\n").unwrap();

        let mut args = args_with_input();
        args.adapter = Some(path.to_string_lossy().to_string());

        let resolved = resolve_args(&args).unwrap();
        assert_eq!(resolved.adapter, path.to_string_lossy());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_bare_adapter_filename_not_checked() {
        let mut args = args_with_input();
        args.adapter = Some("DefinitelyNotOnDisk.fa".to_string());

        // No path separator, so no existence check is run.
        assert!(resolve_args(&args).is_ok());
    }
}
