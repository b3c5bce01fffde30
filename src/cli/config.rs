// config.rs - Workflow configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Optional defaults read from the workflow YAML config file.
///
/// Every key is optional; a key that is absent, null, or an empty string is
/// treated the same way ("not provided") so the fixed defaults apply.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input
    pub sample_info: Option<String>,

    // Trimming / assembly settings
    pub adapter: Option<String>,
    pub max_memory: Option<String>,
    pub lineage: Option<String>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(format!(
                "Configuration file not found: '{}'",
                path.display()
            ));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let body = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        let content = format!(
            "# snakefront workflow configuration\n# Generated: {}\n{}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            body
        );

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Sample table path, when set to a non-empty value
    pub fn sample_info(&self) -> Option<&str> {
        non_empty(&self.sample_info)
    }

    /// Adapter file, when set to a non-empty value
    pub fn adapter(&self) -> Option<&str> {
        non_empty(&self.adapter)
    }

    /// Max assembly memory, when set to a non-empty value
    pub fn max_memory(&self) -> Option<&str> {
        non_empty(&self.max_memory)
    }

    /// BUSCO lineage, when set to a non-empty value
    pub fn lineage(&self) -> Option<&str> {
        non_empty(&self.lineage)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# config.yaml - Configuration file for the snakefront workflow
# Command line arguments will override these settings

# Tab separated sample table: Species_name, Forward, Reverse
sample_info: "config/species_table.tsv"

# Trimming clip for Trimmomatic and the Trinity assembly
adapter: "TruSeq3-PE.fa"

# Max memory per sample for the Trinity de novo assembly
max_memory: "100G"

# BUSCO lineage for completeness assessment
lineage: "mollusca_odb10"
"#
        .to_string()
    }
}

// Empty YAML strings count as unset, matching the null/absent cases.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = serde_yaml::from_str(&Config::generate_sample()).unwrap();
        assert_eq!(config.sample_info(), Some("config/species_table.tsv"));
        assert_eq!(config.adapter(), Some("TruSeq3-PE.fa"));
        assert_eq!(config.max_memory(), Some("100G"));
        assert_eq!(config.lineage(), Some("mollusca_odb10"));
    }

    #[test]
    fn test_empty_and_null_values_count_as_unset() {
        let config: Config = serde_yaml::from_str(
            "sample_info: samples.tsv\nadapter: \"\"\nmax_memory:\n",
        )
        .unwrap();
        assert_eq!(config.sample_info(), Some("samples.tsv"));
        assert_eq!(config.adapter(), None);
        assert_eq!(config.max_memory(), None);
        assert_eq!(config.lineage(), None);
    }

    #[test]
    fn test_from_file_missing_path() {
        let err = Config::from_file("/nonexistent/dir/config.yaml").unwrap_err();
        assert!(err.contains("Configuration file not found"));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join("snakefront_config_round_trip.yaml");
        let config = Config {
            sample_info: Some("samples.tsv".to_string()),
            adapter: Some("adapters/custom.fa".to_string()),
            max_memory: Some("64G".to_string()),
            lineage: Some("metazoa_odb10".to_string()),
        };
        config.to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.sample_info(), Some("samples.tsv"));
        assert_eq!(loaded.adapter(), Some("adapters/custom.fa"));
        assert_eq!(loaded.max_memory(), Some("64G"));
        assert_eq!(loaded.lineage(), Some("metazoa_odb10"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_file_invalid_yaml() {
        let path = std::env::temp_dir().join("snakefront_config_invalid.yaml");
        std::fs::write(&path, "sample_info: [unclosed").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.contains("Failed to parse config file"));

        std::fs::remove_file(&path).ok();
    }
}
