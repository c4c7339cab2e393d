//! Configuration for nutridesk.
//!
//! Stored as pretty-printed JSON in `config.json` inside the platform data
//! directory (see [`DataStorage`]). A missing file means defaults.
//!
//! ```json
//! {
//!   "database": { "file_name": "db.sqlite" },
//!   "examination_fields": [
//!     { "name": "weight_kg", "kind": "float", "may_be_empty": false },
//!     { "name": "complaints", "kind": "text", "may_be_empty": true }
//!   ]
//! }
//! ```
//!
//! `examination_fields` replaces the compiled-in examination form. It is
//! read once when the store is opened.

use super::data_storage::DataStorage;
use super::form_field::{FormField, FormSchema};
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Where the canonical database file lives.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// File name inside the data directory.
    pub file_name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            file_name: DB_FILE_NAME.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examination_fields: Option<Vec<FormField>>,
}

impl Config {
    /// Loads `config.json`, falling back to defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(&config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(config_file_path)
    }

    /// Canonical path of the database file.
    pub fn database_path(&self) -> Result<PathBuf> {
        DataStorage::new().get_path(&self.database.file_name)
    }

    /// The examination form to build the store with: the configured field
    /// list if present, the compiled-in one otherwise.
    pub fn form_schema(&self) -> Result<FormSchema> {
        match &self.examination_fields {
            Some(fields) => FormSchema::new(fields.clone()).map_err(|e| msg_error_anyhow!(Message::FormSchemaInvalid(e.to_string()))),
            None => Ok(FormSchema::default()),
        }
    }
}
