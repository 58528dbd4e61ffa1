use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up in the base directory
pub const CONFIG_FILE_NAME: &str = "pkgstars.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// GraphQL endpoint queried for repository statistics
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Pause between two consecutive lookups during a sweep
    #[serde(default = "default_request_delay", with = "humantime_serde")]
    pub request_delay: Duration,

    /// File the sweep results are written to
    #[serde(default = "default_output_file")]
    pub output_file: Utf8PathBuf,
}

fn default_api_url() -> String {
    crate::facts::hosting::DEFAULT_API_URL.to_string()
}

const fn default_request_delay() -> Duration {
    crate::facts::sweep::DEFAULT_REQUEST_DELAY
}

fn default_output_file() -> Utf8PathBuf {
    Utf8PathBuf::from("package_repo_stats.csv")
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `pkgstars.toml` in `base_dir` is used when present.
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading pkgstars configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
                Err(e) => return Err(e).into_app_err_with(|| format!("reading pkgstars configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("https://") || self.api_url.starts_with("http://")) {
            return Err(app_err!("api_url must be an http or https URL, got '{}'", self.api_url));
        }

        if self.output_file.as_str().is_empty() {
            return Err(app_err!("output_file must not be empty"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
