//! Engine configuration
//!
//! TOML-friendly configuration with serde defaults, validation, and
//! `ANONIM_*` environment-variable overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Dry-run mode (recognize and link but return the original text)
    #[serde(default)]
    pub dry_run: bool,

    /// Path to a pattern library TOML file (built-in patterns when unset)
    pub pattern_library: Option<PathBuf>,

    /// Path to a gazetteer TOML file (built-in Polish gazetteer when unset)
    pub gazetteer_library: Option<PathBuf>,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            pattern_library: None,
            gazetteer_library: None,
            audit: AuditConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        for (label, path) in [
            ("Pattern library", &self.pattern_library),
            ("Gazetteer library", &self.gazetteer_library),
        ] {
            if let Some(path) = path {
                if !path.exists() {
                    anyhow::bail!("{label} file not found: {}", path.display());
                }
                if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                    anyhow::bail!("{label} must be a TOML file: {}", path.display());
                }
            }
        }

        self.audit.validate().context("Invalid audit configuration")?;

        Ok(())
    }

    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("ANONIM_DRY_RUN") {
            self.dry_run = val.parse().context("Invalid ANONIM_DRY_RUN value")?;
        }

        if let Ok(val) = std::env::var("ANONIM_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("ANONIM_GAZETTEER_LIBRARY") {
            self.gazetteer_library = Some(PathBuf::from(val));
        }

        self.audit.apply_env_overrides()?;

        Ok(())
    }
}

/// Audit logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_enabled() -> bool {
    true
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/anonymization.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_audit_enabled(),
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration.
    pub fn validate(&self) -> Result<()> {
        if self.enabled {
            if let Some(parent) = self.log_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!(
                            "Failed to create audit log directory: {}",
                            parent.display()
                        )
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("ANONIM_AUDIT_ENABLED") {
            self.enabled = val.parse().context("Invalid ANONIM_AUDIT_ENABLED value")?;
        }

        if let Ok(val) = std::env::var("ANONIM_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("ANONIM_AUDIT_JSON_FORMAT") {
            self.json_format = val
                .parse()
                .context("Invalid ANONIM_AUDIT_JSON_FORMAT value")?;
        }

        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy ("daily" or "hourly")
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}
