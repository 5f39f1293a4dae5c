use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{OUTPUT_DIR, REPOSITORY_URL};
use crate::error::ConfigError;

/// Effective feed configuration, loaded from `~/.config/pkgfeed/config.toml`.
///
/// Missing keys fall back to the built-in constants, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Package feed endpoint (http or https).
    pub repository_url: String,
    /// Relative directory for fetched output. Either separator style is accepted.
    pub output_dir: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            repository_url: REPOSITORY_URL.to_string(),
            output_dir: OUTPUT_DIR.to_string(),
        }
    }
}

impl FeedConfig {
    /// Check that the repository URL is an http(s) URL and the output dir is a
    /// non-empty relative path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.repository_url).map_err(|source| {
            ConfigError::InvalidUrl {
                value: self.repository_url.clone(),
                source,
            }
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::UnsupportedScheme {
                    value: self.repository_url.clone(),
                    scheme: other.to_string(),
                })
            }
        }

        let dir = self.output_dir.trim();
        if dir.is_empty() {
            return Err(ConfigError::EmptyOutputDir);
        }
        if is_absolute_like(dir) {
            return Err(ConfigError::AbsoluteOutputDir {
                value: self.output_dir.clone(),
            });
        }
        Ok(())
    }

    /// Output directory as a native relative path; `/` and `\` both split segments.
    pub fn output_dir_path(&self) -> PathBuf {
        self.output_dir
            .split(['/', '\\'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Rooted paths (`/x`, `\x`) and drive prefixes (`C:`) on any platform.
fn is_absolute_like(dir: &str) -> bool {
    if dir.starts_with('/') || dir.starts_with('\\') {
        return true;
    }
    let mut chars = dir.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), Some(':')) if c.is_ascii_alphabetic()
    )
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pkgfeed")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load and validate configuration from `path`. A missing file yields the defaults.
pub fn load_from_path(path: &Path) -> Result<FeedConfig> {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(FeedConfig::default());
        }
        Err(e) => return Err(e).with_context(|| format!("read config: {}", path.display())),
    };
    let cfg: FeedConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}

/// Write the default configuration to `path`, creating parent directories.
pub fn write_default(path: &Path) -> Result<FeedConfig> {
    let default_cfg = FeedConfig::default();
    let toml = toml::to_string_pretty(&default_cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
    tracing::info!("created default config at {}", path.display());
    Ok(default_cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FeedConfig> {
    let path = config_path()?;
    if !path.exists() {
        return write_default(&path);
    }
    load_from_path(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = FeedConfig::default();
        assert_eq!(cfg.repository_url, "https://www.nuget.org/v1/FeedService.svc");
        assert_eq!(cfg.output_dir, "output\\");
        assert!(cfg.is_default());
        cfg.validate().unwrap();
    }

    #[test]
    fn config_toml_roundtrip_keeps_backslash() {
        let cfg = FeedConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: FeedConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let cfg: FeedConfig = toml::from_str(r#"output_dir = "build/packages""#).unwrap();
        assert_eq!(cfg.repository_url, REPOSITORY_URL);
        assert_eq!(cfg.output_dir, "build/packages");
        assert!(!cfg.is_default());

        let empty: FeedConfig = toml::from_str("").unwrap();
        assert!(empty.is_default());
    }

    #[test]
    fn validate_rejects_bad_urls() {
        let cfg = FeedConfig {
            repository_url: "not a url".to_string(),
            ..FeedConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidUrl { .. })));

        let cfg = FeedConfig {
            repository_url: "ftp://mirror.example.com/feed".to_string(),
            ..FeedConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::UnsupportedScheme { scheme, .. }) => assert_eq!(scheme, "ftp"),
            other => panic!("expected UnsupportedScheme, got {other:?}"),
        }
    }

    #[test]
    fn validate_accepts_plain_http() {
        let cfg = FeedConfig {
            repository_url: "http://localhost:8080/api/v2".to_string(),
            ..FeedConfig::default()
        };
        cfg.validate().unwrap();
    }

    #[test]
    fn validate_rejects_bad_output_dirs() {
        for dir in ["", "   "] {
            let cfg = FeedConfig {
                output_dir: dir.to_string(),
                ..FeedConfig::default()
            };
            assert!(matches!(cfg.validate(), Err(ConfigError::EmptyOutputDir)));
        }
        for dir in ["/var/out", "\\out\\", "C:\\out", "d:/out"] {
            let cfg = FeedConfig {
                output_dir: dir.to_string(),
                ..FeedConfig::default()
            };
            assert!(
                matches!(cfg.validate(), Err(ConfigError::AbsoluteOutputDir { .. })),
                "{dir} should be rejected"
            );
        }
    }

    #[test]
    fn output_dir_path_normalizes_separators() {
        assert_eq!(FeedConfig::default().output_dir_path(), PathBuf::from("output"));
        let cfg = FeedConfig {
            output_dir: "build\\pkgs//nuget/".to_string(),
            ..FeedConfig::default()
        };
        assert_eq!(
            cfg.output_dir_path(),
            Path::new("build").join("pkgs").join("nuget")
        );
    }

    #[test]
    fn load_from_path_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_from_path(&dir.path().join("config.toml")).unwrap();
        assert!(cfg.is_default());
    }

    #[test]
    fn load_from_path_reads_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "repository_url = \"https://feed.example.com/v3/index.json\"\noutput_dir = 'out\\'\n",
        )
        .unwrap();
        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.repository_url, "https://feed.example.com/v3/index.json");
        assert_eq!(cfg.output_dir, "out\\");
    }

    #[test]
    fn load_from_path_rejects_malformed_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        fs::write(&path, "repository_url = [").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));

        fs::write(&path, "repository_url = \"file:///srv/feed\"").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn write_default_creates_parent_and_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let written = write_default(&path).unwrap();
        assert!(path.exists());
        assert_eq!(load_from_path(&path).unwrap(), written);
    }
}
