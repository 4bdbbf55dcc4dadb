// Engine configuration - TOML file selecting lints and execution mode

use crate::engine::Linter;
use crate::error::{LintError, Result};
use crate::lint::{FilterOptions, Registry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Which lints to run
    pub filter: FilterOptions,
    pub execution: ExecutionConfig,
}

/// How lints are scheduled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Evaluate lints concurrently
    pub parallel: bool,
    /// Size of a dedicated worker pool; rayon's global pool when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_threads: Option<usize>,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            worker_threads: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| LintError::Config {
            message: format!("Failed to read config file {:?}: {}", path.as_ref(), e),
        })?;

        let config: EngineConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)?;

        fs::write(path.as_ref(), toml_str).map_err(|e| LintError::Config {
            message: format!("Failed to write config file {:?}: {}", path.as_ref(), e),
        })?;

        Ok(())
    }

    pub fn filter_options(&self) -> FilterOptions {
        self.filter.clone()
    }

    /// Build a linter over `registry` honoring the execution settings
    pub fn linter<'r>(&self, registry: &'r Registry) -> Result<Linter<'r>> {
        let linter = Linter::new()
            .with_registry(registry)
            .with_parallel(self.execution.parallel);

        match self.execution.worker_threads {
            Some(threads) if self.execution.parallel => linter.with_worker_threads(threads),
            _ => Ok(linter),
        }
    }
}
