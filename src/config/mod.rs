use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment overrides for the remote coordinates. The hosting
/// environment can supply the secrets without touching the config file.
const ENV_TOKEN: &str = "BITACORA_TOKEN";
const ENV_REPO_OWNER: &str = "BITACORA_REPO_OWNER";
const ENV_REPO_NAME: &str = "BITACORA_REPO_NAME";
const ENV_FILE_PATH: &str = "BITACORA_FILE_PATH";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// GitHub access token used for the contents API.
    #[serde(default)]
    pub token: String,

    /// Owner of the repository holding the handover workbook.
    #[serde(default)]
    pub repo_owner: String,

    /// Repository name.
    #[serde(default)]
    pub repo_name: String,

    /// Path of the workbook inside the repository.
    #[serde(default)]
    pub file_path: String,

    /// How long a fetched snapshot stays valid before the next view
    /// re-fetches it.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,

    /// External form application where new entries are registered.
    #[serde(default = "default_form_url")]
    pub form_url: String,
}

fn default_cache_ttl() -> u64 {
    60
}

fn default_form_url() -> String {
    "https://formulario-aseguramiento-angeltorres.streamlit.app/".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: String::new(),
            repo_owner: String::new(),
            repo_name: String::new(),
            file_path: String::new(),
            cache_ttl_secs: default_cache_ttl(),
            form_url: default_form_url(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("bitacora")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".bitacora")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bitacora.conf")
    }

    /// Return the default directory of the snapshot cache
    pub fn cache_dir() -> PathBuf {
        Self::config_dir().join("cache")
    }

    /// Load configuration from `path` (or the default location), then apply
    /// environment overrides. A missing file yields defaults; a malformed
    /// one is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?
        } else {
            Config::default()
        };

        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        for (var, field) in [
            (ENV_TOKEN, &mut self.token),
            (ENV_REPO_OWNER, &mut self.repo_owner),
            (ENV_REPO_NAME, &mut self.repo_name),
            (ENV_FILE_PATH, &mut self.file_path),
        ] {
            if let Ok(value) = env::var(var)
                && !value.trim().is_empty()
            {
                *field = value;
            }
        }
    }

    /// Names of required remote values that are still unset.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.token.trim().is_empty() {
            missing.push("token");
        }
        if self.repo_owner.trim().is_empty() {
            missing.push("repo_owner");
        }
        if self.repo_name.trim().is_empty() {
            missing.push("repo_name");
        }
        if self.file_path.trim().is_empty() {
            missing.push("file_path");
        }
        missing
    }

    /// Validate the remote coordinates, naming the first missing key.
    pub fn require_remote(&self) -> AppResult<()> {
        match self.missing_fields().first() {
            Some(field) => Err(AppError::MissingConfig((*field).to_string())),
            None => Ok(()),
        }
    }

    /// YAML rendering with the token masked, for `config --print`.
    pub fn redacted_yaml(&self) -> AppResult<String> {
        let mut shown = self.clone();
        if !shown.token.is_empty() {
            shown.token = "********".to_string();
        }
        serde_yaml::to_string(&shown).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize the configuration file skeleton and the cache directory.
    /// An existing config file is left untouched.
    pub fn init_all(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        if !path.exists() {
            let yaml = serde_yaml::to_string(&Config::default())
                .map_err(|e| AppError::ConfigSave(e.to_string()))?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(path)
    }
}
