// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};
use std::path::Path;

impl Args {
    /// Merge with configuration from file.
    /// CLI arguments take precedence over config file values.
    ///
    /// A sample table taken from the config file must exist on disk; a table
    /// given on the command line is left for Snakemake to resolve.
    pub fn merge_with_config(mut self, config: &Config, config_path: &str) -> Result<Self, String> {
        if self.input.is_none() {
            if let Some(sample_info) = config.sample_info() {
                if !Path::new(sample_info).exists() {
                    return Err(format!(
                        "The sample table {} provided in {} does not exist",
                        sample_info, config_path
                    ));
                }
                self.input = Some(sample_info.to_string());
            }
        }

        if self.adapter.is_none() {
            self.adapter = config.adapter().map(String::from);
        }
        if self.maxmemory.is_none() {
            self.maxmemory = config.max_memory().map(String::from);
        }
        if self.lineage.is_none() {
            self.lineage = config.lineage().map(String::from);
        }

        Ok(self)
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        self.merge_with_config(&config, config_path)
    }
}
