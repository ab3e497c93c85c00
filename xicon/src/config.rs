use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = "xicon.yaml";

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Source image.
    pub icon: Option<PathBuf>,
    /// Android resource directory the mipmaps are written to.
    pub res: Option<PathBuf>,
}

impl Config {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Default::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut config = Self::from_yaml(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        if let Some(root) = path.parent() {
            config.icon = config.icon.map(|icon| root.join(icon));
            config.res = config.res.map(|res| root.join(res));
        }
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        // an empty document deserializes to unit, not to an empty map
        if contents.trim().is_empty() {
            return Ok(Default::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_yaml() {
        let config = Config::from_yaml("icon: logos/logo_raw.png\nres: app/src/main/res\n").unwrap();
        assert_eq!(config.icon.as_deref(), Some(Path::new("logos/logo_raw.png")));
        assert_eq!(config.res.as_deref(), Some(Path::new("app/src/main/res")));
    }

    #[test]
    fn empty_yaml() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("icon: a.png").unwrap().res, None);
    }

    #[test]
    fn unknown_key() {
        assert!(Config::from_yaml("sizes: [48]").is_err());
    }

    #[test]
    fn missing_file_is_default() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::parse(tmp.path().join(DEFAULT_CONFIG)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn paths_relative_to_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG);
        std::fs::write(&path, "icon: logo.png\n").unwrap();
        let config = Config::parse(&path).unwrap();
        assert_eq!(config.icon, Some(tmp.path().join("logo.png")));
        assert_eq!(config.res, None);
    }
}
