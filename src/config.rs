use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use toml::Value;

use crate::args::Args;

pub const DEFAULT_DATABASE_PATH: &str = "prisma/dev.db";
pub const DEFAULT_OUTPUT_PATH: &str = "db_status.txt";
pub const DEFAULT_TABLE: &str = "Settings";
pub const DEFAULT_COLUMN: &str = "allowRegistration";

#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    pub database_path: PathBuf,
    pub output_path: PathBuf,
    pub table: String,
    pub column: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            table: DEFAULT_TABLE.to_string(),
            column: DEFAULT_COLUMN.to_string(),
        }
    }
}

impl CheckConfig {
    pub(crate) fn from_toml(config: Value) -> Result<Self> {
        let mut check_config = CheckConfig::default();

        let section = match config.get("check") {
            Some(section) => section,
            None => return Ok(check_config),
        };

        if !section.is_table() {
            bail!("Missing or invalid check settings");
        }

        if let Some(path) = optional_str(section, "database_path")? {
            check_config.database_path = PathBuf::from(path);
        }
        if let Some(path) = optional_str(section, "output_path")? {
            check_config.output_path = PathBuf::from(path);
        }
        if let Some(table) = optional_str(section, "table")? {
            check_config.table = table;
        }
        if let Some(column) = optional_str(section, "column")? {
            check_config.column = column;
        }

        check_config.validate()?;

        Ok(check_config)
    }

    pub fn with_overrides(mut self, args: &Args) -> Result<Self> {
        if let Some(database) = &args.database {
            self.database_path = database.clone();
        }
        if let Some(output) = &args.output {
            self.output_path = output.clone();
        }
        if let Some(table) = &args.table {
            self.table = table.clone();
        }
        if let Some(column) = &args.column {
            self.column = column.clone();
        }

        self.validate()?;

        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.table.is_empty() {
            bail!("Table name must not be empty");
        }
        if self.column.is_empty() {
            bail!("Column name must not be empty");
        }
        Ok(())
    }
}

fn optional_str(section: &Value, key: &str) -> Result<Option<String>> {
    match section.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| anyhow!("Missing or invalid {}", key)),
    }
}

/// Reads the config file, falling back to defaults when the implicit file is absent.
pub fn load_config(path: &Path, explicit: bool) -> Result<CheckConfig> {
    if !explicit && !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Ok(CheckConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config file {}", path.display()))?;
    let value = content.parse::<Value>()?;
    CheckConfig::from_toml(value)
}
