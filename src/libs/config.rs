//! Credential store for the Tracsis CLI.
//!
//! A single JSON file (`config.json`) in the platform application-data
//! directory holds the login credentials, the profile data captured during
//! `set-creds`, and the token snapshot from that login. The snapshot is
//! informational only: a new process always re-authenticates instead of
//! loading tokens back into a session.
//!
//! Every command that may talk to the backend reads this file first; only
//! the `set-creds` command ever writes it.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Credentials {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ProfileData {
    pub user_id: i64,
    pub user_code: String,
    pub user_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Secret {
    pub access_token: String,
    pub refresh_token: String,
}

/// The persisted credential record.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_data: Option<ProfileData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<Secret>,
}

impl Config {
    /// Loads the credential store. A missing or unparsable file is an
    /// error; commands treat it as fatal before any network activity.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Err(msg_error_anyhow!(Message::ConfigFileNotFound));
        }

        let config_str = fs::read_to_string(config_file_path)?;
        serde_json::from_str(&config_str).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))
    }

    /// Overwrites the store with pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Credential validity is a pure predicate on the loaded record:
    /// non-empty user and password, independent of any network state.
    pub fn has_credentials(&self) -> bool {
        !self.credentials.user.is_empty() && !self.credentials.password.is_empty()
    }

    /// Default actor for task queries, available after `set-creds`.
    pub fn user_id(&self) -> Option<i64> {
        self.profile_data.as_ref().map(|profile| profile.user_id)
    }
}
