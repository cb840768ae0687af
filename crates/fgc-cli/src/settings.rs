use fgc_core::report::DEFAULT_REPORT_FILE;
use fgc_core::{CoverageConfig, FgcError, FgcResult, Money};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Settings file contents (YAML or JSON). Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub coverage_ceiling: Option<Money>,
    pub currency_symbol: Option<String>,
    pub report_path: Option<PathBuf>,
}

/// Effective settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub coverage: CoverageConfig,
    pub report_path: PathBuf,
}

impl Settings {
    /// Resolve settings with precedence flag > file > default, then validate.
    pub fn resolve(config_path: Option<&Path>, ceiling_flag: Option<Money>) -> FgcResult<Self> {
        let file = match config_path {
            Some(path) => load_file(path)?,
            None => SettingsFile::default(),
        };

        let defaults = CoverageConfig::default();
        let coverage = CoverageConfig {
            coverage_ceiling: ceiling_flag
                .or(file.coverage_ceiling)
                .unwrap_or(defaults.coverage_ceiling),
            currency_symbol: file.currency_symbol.unwrap_or(defaults.currency_symbol),
        };
        coverage.validate()?;

        let settings = Settings {
            coverage,
            report_path: file
                .report_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_FILE)),
        };
        debug!(
            ceiling = %settings.coverage.coverage_ceiling,
            report = %settings.report_path.display(),
            "settings resolved"
        );
        Ok(settings)
    }

    /// Like [`Settings::resolve`], but falls back to the defaults (keeping a
    /// valid ceiling flag) when the settings file cannot be used.
    pub fn resolve_or_default(config_path: Option<&Path>, ceiling_flag: Option<Money>) -> Self {
        Self::resolve(config_path, ceiling_flag).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring settings file");
            Self::resolve(None, ceiling_flag).unwrap_or_default()
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            coverage: CoverageConfig::default(),
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
        }
    }
}

fn load_file(path: &Path) -> FgcResult<SettingsFile> {
    let contents = fs::read_to_string(path).map_err(|e| FgcError::InvalidConfiguration {
        field: path.display().to_string(),
        reason: format!("cannot read settings file: {e}"),
    })?;
    if contents.trim().is_empty() {
        return Ok(SettingsFile::default());
    }
    // JSON is a subset of YAML, so one parser covers both.
    serde_yaml::from_str(&contents).map_err(|e| FgcError::InvalidConfiguration {
        field: path.display().to_string(),
        reason: format!("cannot parse settings file: {e}"),
    })
}
