//! Configuration loading and root folder resolution
//!
//! Bootstrap configuration comes from a TOML file. Every field has a built-in
//! default so a missing or partial file never prevents startup.
//!
//! # Root folder priority
//!
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`NAMEGUESS_ROOT_FOLDER`)
//! 3. TOML config file (`root_folder`)
//! 4. OS-dependent compiled default (fallback)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable overriding the data root folder
pub const ROOT_FOLDER_ENV: &str = "NAMEGUESS_ROOT_FOLDER";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Folder holding the name frequency files (optional)
    #[serde(default)]
    pub root_folder: Option<PathBuf>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Where and how name data is found
    #[serde(default)]
    pub data: DataConfig,

    /// Ranking parameters
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Name data source layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// File name prefix of national year files (`yob1990.txt`)
    #[serde(default = "default_national_prefix")]
    pub national_prefix: String,

    /// Sub-folder of the root holding per-state/territory files (`CA.TXT`)
    #[serde(default = "default_state_dir")]
    pub state_dir: String,

    /// Whether per-state files are loaded at all
    #[serde(default = "default_true")]
    pub load_states: bool,

    /// Remote base URL; when set, files are fetched over HTTP instead of disk
    #[serde(default)]
    pub base_url: Option<String>,

    /// Years fetched when `base_url` is set (inclusive range)
    #[serde(default = "default_first_year")]
    pub first_year: u16,

    #[serde(default = "default_last_year")]
    pub last_year: u16,

    /// State codes fetched when `base_url` is set
    #[serde(default)]
    pub states: Vec<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            national_prefix: default_national_prefix(),
            state_dir: default_state_dir(),
            load_states: true,
            base_url: None,
            first_year: default_first_year(),
            last_year: default_last_year(),
            states: Vec::new(),
        }
    }
}

/// Ranking parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of guesses returned by default
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Upper bound on candidates handed to the scorer
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,

    /// Weight of the rule-based score in the blend
    #[serde(default = "default_rule_weight")]
    pub rule_weight: f64,

    /// Weight of the secondary predictor score in the blend
    #[serde(default = "default_model_weight")]
    pub model_weight: f64,

    /// Amplitude of the symmetric confidence perturbation (0 disables it)
    #[serde(default = "default_confidence_noise")]
    pub confidence_noise: f64,

    /// Optional JSON model file for the secondary predictor
    #[serde(default)]
    pub model_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            max_candidates: default_max_candidates(),
            rule_weight: default_rule_weight(),
            model_weight: default_model_weight(),
            confidence_noise: default_confidence_noise(),
            model_path: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_national_prefix() -> String {
    "yob".to_string()
}

fn default_state_dir() -> String {
    "namesbystate".to_string()
}

fn default_true() -> bool {
    true
}

fn default_first_year() -> u16 {
    1950
}

fn default_last_year() -> u16 {
    2020
}

fn default_top_k() -> usize {
    5
}

fn default_max_candidates() -> usize {
    500
}

fn default_rule_weight() -> f64 {
    0.7
}

fn default_model_weight() -> f64 {
    0.3
}

fn default_confidence_noise() -> f64 {
    3.0
}

impl EngineConfig {
    /// Reject weight and size settings that would make ranking meaningless
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::Config("engine.top_k must be at least 1".to_string()));
        }
        if self.max_candidates == 0 {
            return Err(Error::Config(
                "engine.max_candidates must be at least 1".to_string(),
            ));
        }
        for (key, weight) in [
            ("engine.rule_weight", self.rule_weight),
            ("engine.model_weight", self.model_weight),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(Error::Config(format!(
                    "{} must be within 0.0-1.0, got {}",
                    key, weight
                )));
            }
        }
        if !(self.confidence_noise.is_finite() && self.confidence_noise >= 0.0) {
            return Err(Error::Config(format!(
                "engine.confidence_noise must be a finite non-negative number, got {}",
                self.confidence_noise
            )));
        }
        Ok(())
    }
}

/// Resolves the data root folder from CLI, environment, TOML, then OS default
pub struct RootFolderResolver {
    env_var: String,
}

impl RootFolderResolver {
    pub fn new() -> Self {
        Self {
            env_var: ROOT_FOLDER_ENV.to_string(),
        }
    }

    /// Use a different environment variable (tests, embedding applications)
    pub fn with_env_var(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
        }
    }

    pub fn resolve(&self, cli_arg: Option<&Path>, config: &TomlConfig) -> PathBuf {
        // Priority 1: Command-line argument
        if let Some(path) = cli_arg {
            debug!("Root folder from command line: {}", path.display());
            return path.to_path_buf();
        }

        // Priority 2: Environment variable
        if let Ok(path) = std::env::var(&self.env_var) {
            if !path.trim().is_empty() {
                debug!("Root folder from {}: {}", self.env_var, path);
                return PathBuf::from(path);
            }
        }

        // Priority 3: TOML config file
        if let Some(path) = &config.root_folder {
            debug!("Root folder from TOML config: {}", path.display());
            return path.clone();
        }

        // Priority 4: OS-dependent compiled default
        default_root_folder()
    }
}

impl Default for RootFolderResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Locate the configuration file for this platform
///
/// Linux checks `~/.config/nameguess/config.toml` then `/etc/nameguess/config.toml`.
pub fn find_config_file() -> Result<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("nameguess").join("config.toml"));

    if let Some(path) = user_config {
        if path.exists() {
            return Ok(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/nameguess/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(Error::Config("No config file found".to_string()))
}

/// Parse a TOML configuration file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
    let config: TomlConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))?;
    config.engine.validate()?;
    Ok(config)
}

/// Load configuration, degrading to defaults when no usable file exists
///
/// An explicit path that fails to parse is reported as an error; a missing
/// discovered file only produces a warning.
pub fn load_config_or_default(explicit: Option<&Path>) -> Result<TomlConfig> {
    if let Some(path) = explicit {
        return load_toml_config(path);
    }

    match find_config_file() {
        Ok(path) => {
            info!("Loading configuration from {}", path.display());
            load_toml_config(&path)
        }
        Err(_) => {
            warn!("No configuration file found, using built-in defaults");
            Ok(TomlConfig::default())
        }
    }
}

/// Write configuration atomically (temp file in the same folder, then rename)
pub fn write_toml_config(config: &TomlConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)
        .map_err(|e| Error::Config(format!("Serialize TOML failed: {}", e)))?;

    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, content)?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Get OS-dependent default root folder path
pub fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/nameguess (or /var/lib/nameguess for system-wide)
        dirs::data_local_dir()
            .map(|d| d.join("nameguess"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/nameguess"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("nameguess"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/nameguess"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("nameguess"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\nameguess"))
    } else {
        PathBuf::from("./nameguess_data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_defaults_are_valid() {
        let engine = EngineConfig::default();
        assert_eq!(engine.top_k, 5);
        assert!((engine.rule_weight - 0.7).abs() < f64::EPSILON);
        assert!((engine.model_weight - 0.3).abs() < f64::EPSILON);
        assert!(engine.validate().is_ok());
    }

    #[test]
    fn test_engine_rejects_out_of_range_weight() {
        let engine = EngineConfig {
            rule_weight: 1.5,
            ..EngineConfig::default()
        };
        assert!(matches!(engine.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_engine_rejects_non_finite_noise() {
        for text in [
            "[engine]\nconfidence_noise = inf\n",
            "[engine]\nconfidence_noise = nan\n",
            "[engine]\nconfidence_noise = -1.0\n",
        ] {
            let config: TomlConfig = toml::from_str(text).unwrap();
            assert!(
                matches!(config.engine.validate(), Err(Error::Config(_))),
                "{}",
                text
            );
        }

        let config: TomlConfig = toml::from_str("[engine]\nconfidence_noise = 0.0\n").unwrap();
        assert!(config.engine.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: TomlConfig = toml::from_str("[engine]\ntop_k = 3\n").unwrap();
        assert_eq!(config.engine.top_k, 3);
        assert_eq!(config.engine.max_candidates, 500);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.data.national_prefix, "yob");
        assert!(config.data.load_states);
    }
}
