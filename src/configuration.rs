//! Credentials and connection settings for the Filez service.
//!
//! A [`Configuration`] is validated when it is constructed, so a client
//! built from one always has an application key, a secret and a host.
//! Configurations can also be read from and written to a YAML file in the
//! per-user configuration directory.

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;
use url::Url;

pub const DEFAULT_APPLICATION_ID: &str = "filez";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.yml";
pub const CONFIG_DIR_ENV: &str = "FILEZ_CONFIG_DIR";
pub const DEFAULT_API_VERSION: &str = "v2";

const REDACTED: &str = "********";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load configuration data, because of: {cause}")]
    FailedToLoadData {
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("failed to write configuration data to file, because of: {cause}")]
    FailedToWriteData {
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("missing value for property {name:?}")]
    MissingRequiredPropertyValue { name: String },
    #[error("invalid service address {address:?}: {cause}")]
    InvalidAddress {
        address: String,
        cause: url::ParseError,
    },
}

fn default_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

/// Connection settings for one Filez deployment
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    app_key: String,
    #[serde(default)]
    app_secret: String,
    #[serde(default)]
    host: String,
    #[serde(default)]
    https: bool,
    #[serde(default = "default_version")]
    version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("app_key", &self.app_key)
            .field("app_secret", &REDACTED)
            .field("host", &self.host)
            .field("https", &self.https)
            .field("version", &self.version)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Configuration {
    /// Create a configuration with plain HTTP and the default API version.
    pub fn new(
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
        host: impl Into<String>,
    ) -> Result<Configuration, ConfigurationError> {
        Configuration::builder()
            .app_key(app_key)
            .app_secret(app_secret)
            .host(host)
            .build()
    }

    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    pub fn app_secret(&self) -> &str {
        &self.app_secret
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn https(&self) -> bool {
        self.https
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn timeout_secs(&self) -> Option<u64> {
        self.timeout_secs
    }

    /// The service root every endpoint path is appended to, e.g.
    /// `http://filez.example.com:3333/v2`.
    pub fn base_url(&self) -> String {
        let scheme = if self.https { "https" } else { "http" };
        format!("{}://{}/{}", scheme, self.host, self.version)
    }

    /// A copy of this configuration with the secret masked, for display.
    pub fn redacted(&self) -> Configuration {
        Configuration {
            app_secret: REDACTED.to_string(),
            ..self.clone()
        }
    }

    fn validate(self) -> Result<Configuration, ConfigurationError> {
        let required = [
            ("app_key", &self.app_key),
            ("app_secret", &self.app_secret),
            ("host", &self.host),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigurationError::MissingRequiredPropertyValue {
                    name: name.to_string(),
                });
            }
        }
        if self.version.trim().is_empty() {
            return Err(ConfigurationError::MissingRequiredPropertyValue {
                name: "version".to_string(),
            });
        }

        let base_url = self.base_url();
        Url::parse(&base_url).map_err(|cause| ConfigurationError::InvalidAddress {
            address: base_url.clone(),
            cause,
        })?;

        Ok(self)
    }

    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        // Check for FILEZ_CONFIG_DIR environment variable first
        if let Ok(config_dir_str) = std::env::var(CONFIG_DIR_ENV) {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
            return Ok(config_path);
        }

        match config_dir() {
            Some(mut default_config_file_path) => {
                default_config_file_path.push(DEFAULT_APPLICATION_ID);
                default_config_file_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
                Ok(default_config_file_path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    pub fn load_default() -> Result<Configuration, ConfigurationError> {
        let default_file_path = Configuration::get_default_configuration_file_path()?;
        Configuration::load_from_file(&default_file_path)
    }

    pub fn load_from_file(path: &Path) -> Result<Configuration, ConfigurationError> {
        debug!("Loading configuration from {}...", path.display());
        let content = fs::read_to_string(path).map_err(|cause| {
            ConfigurationError::FailedToLoadData {
                cause: Box::new(cause),
            }
        })?;
        Configuration::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Configuration, ConfigurationError> {
        let configuration: Configuration =
            serde_yaml::from_str(content).map_err(|cause| ConfigurationError::FailedToLoadData {
                cause: Box::new(cause),
            })?;
        configuration.validate()
    }

    pub fn write<W: Write>(&self, writer: W) -> Result<(), ConfigurationError> {
        serde_yaml::to_writer(writer, self)
            .map_err(|e| ConfigurationError::FailedToWriteData { cause: Box::new(e) })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigurationError> {
        // first check if the parent directory exists and try to create it if not
        match path.parent() {
            Some(parent) => {
                if fs::create_dir_all(parent).is_err() {
                    return Err(ConfigurationError::FailedToFindConfigurationDirectory);
                }
            }
            None => return Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }

        let file = File::create(path)
            .map_err(|e| ConfigurationError::FailedToWriteData { cause: Box::new(e) })?;
        debug!("Saving configuration to {}...", path.display());
        self.write(file)
    }

    pub fn save_to_default(&self) -> Result<(), ConfigurationError> {
        self.save(&Self::get_default_configuration_file_path()?)
    }
}

/// Builder for [`Configuration`]; `build` performs the validation.
#[derive(Debug, Clone)]
pub struct ConfigurationBuilder {
    app_key: String,
    app_secret: String,
    host: String,
    https: bool,
    version: String,
    timeout_secs: Option<u64>,
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationBuilder {
    pub fn new() -> ConfigurationBuilder {
        ConfigurationBuilder {
            app_key: String::new(),
            app_secret: String::new(),
            host: String::new(),
            https: false,
            version: default_version(),
            timeout_secs: None,
        }
    }

    pub fn app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = app_key.into();
        self
    }

    pub fn app_secret(mut self, app_secret: impl Into<String>) -> Self {
        self.app_secret = app_secret.into();
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn https(mut self, https: bool) -> Self {
        self.https = https;
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    pub fn build(self) -> Result<Configuration, ConfigurationError> {
        Configuration {
            app_key: self.app_key,
            app_secret: self.app_secret,
            host: self.host,
            https: self.https,
            version: self.version,
            timeout_secs: self.timeout_secs,
        }
        .validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_name(result: Result<Configuration, ConfigurationError>) -> String {
        match result {
            Err(ConfigurationError::MissingRequiredPropertyValue { name }) => name,
            other => panic!("expected a missing property error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_applies_defaults() {
        let configuration = Configuration::new("key", "secret", "filez.example.com:3333").unwrap();
        assert!(!configuration.https());
        assert_eq!(configuration.version(), "v2");
        assert_eq!(configuration.timeout_secs(), None);
        assert_eq!(configuration.base_url(), "http://filez.example.com:3333/v2");
    }

    #[test]
    fn test_missing_credentials_are_rejected() {
        assert_eq!(missing_name(Configuration::new("", "secret", "host")), "app_key");
        assert_eq!(missing_name(Configuration::new("key", "", "host")), "app_secret");
        assert_eq!(missing_name(Configuration::new("key", "secret", "  ")), "host");
    }

    #[test]
    fn test_https_and_version_shape_base_url() {
        let configuration = Configuration::builder()
            .app_key("key")
            .app_secret("secret")
            .host("filez.example.com")
            .https(true)
            .version("v3")
            .build()
            .unwrap();
        assert_eq!(configuration.base_url(), "https://filez.example.com/v3");
    }

    #[test]
    fn test_unparseable_host_is_rejected() {
        let result = Configuration::new("key", "secret", "bad host:port");
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_yaml_uses_defaults_and_validates() {
        let configuration = Configuration::from_yaml(
            "app_key: key\napp_secret: secret\nhost: filez.example.com:3333\n",
        )
        .unwrap();
        assert_eq!(configuration.version(), "v2");
        assert!(!configuration.https());

        let missing = Configuration::from_yaml("app_key: key\nhost: filez.example.com\n");
        assert_eq!(missing_name(missing), "app_secret");
    }

    #[test]
    fn test_debug_and_redacted_hide_secret() {
        let configuration = Configuration::new("key", "top-secret", "host").unwrap();
        assert!(!format!("{:?}", configuration).contains("top-secret"));
        assert_eq!(configuration.redacted().app_secret(), REDACTED);
        assert_eq!(configuration.redacted().app_key(), "key");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("nested").join(DEFAULT_CONFIGURATION_FILE_NAME);

        let configuration = Configuration::builder()
            .app_key("key")
            .app_secret("secret")
            .host("filez.example.com")
            .timeout_secs(30)
            .build()
            .unwrap();
        configuration.save(&path).unwrap();

        let loaded = Configuration::load_from_file(&path).unwrap();
        assert_eq!(loaded, configuration);
    }
}
