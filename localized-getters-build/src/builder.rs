//! Builder that runs the generator and writes its output.

use anyhow::{Context, Result};
use localized_getters::{GetterConfig, LocalizedDateBehavior, TableSchema};
use std::fs;
use std::path::{Path, PathBuf};

/// Builder for configuring and running getter generation for one table.
pub struct GetterBuild<'t, T: TableSchema> {
    table: &'t T,
    config: GetterConfig,
    output_file: Option<PathBuf>,
}

impl<'t, T: TableSchema> GetterBuild<'t, T> {
    /// Create a new build with default parameters.
    pub fn new(table: &'t T) -> Self {
        Self {
            table,
            config: GetterConfig::default(),
            output_file: None,
        }
    }

    /// Replace all parameters.
    pub fn config(mut self, config: GetterConfig) -> Self {
        self.config = config;
        self
    }

    /// Load parameters from a TOML file, replacing the current ones.
    pub fn config_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        self.config = GetterConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load behavior parameters from {}", path.display()))?;
        Ok(self)
    }

    /// Set a single behavior parameter. Unknown names are ignored.
    pub fn parameter(mut self, name: &str, value: impl Into<String>) -> Self {
        self.config.set_parameter(name, value);
        self
    }

    /// Set the output file path for the generated methods.
    ///
    /// Default: `generated/<table>_localized_getters.php`
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Generate the methods without writing anything.
    pub fn generate(&self) -> Result<String> {
        let behavior = LocalizedDateBehavior::new(self.table, self.config.clone());
        behavior
            .object_methods()
            .with_context(|| format!("Failed to generate localized getters for table \"{}\"", self.table.name()))
    }

    /// Run the generator and write the output file.
    ///
    /// The file is only rewritten when its content changes. Returns the path
    /// that was written or checked.
    pub fn run(self) -> Result<PathBuf> {
        let code = self.generate()?;
        let output_file = self
            .output_file
            .unwrap_or_else(|| PathBuf::from(format!("generated/{}_localized_getters.php", self.table.name())));

        // Ensure output directory exists
        if let Some(parent) = output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        // Only write if content has changed (avoids unnecessary recompilation)
        let should_write = match fs::read_to_string(&output_file) {
            Ok(existing) => existing != code,
            Err(_) => true,
        };

        if should_write {
            fs::write(&output_file, &code).with_context(|| format!("Failed to write {}", output_file.display()))?;
            eprintln!(
                "localized-getters-build: Generated {} for table \"{}\"",
                output_file.display(),
                self.table.name()
            );
        } else {
            log::debug!("{} is up to date", output_file.display());
        }

        Ok(output_file)
    }
}
