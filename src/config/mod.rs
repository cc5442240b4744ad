// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a file (YAML or JSON)
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config = parse_config(&contents, is_yaml(path))?;
    config.validate()?;
    Ok(config)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn parse_config(contents: &str, yaml: bool) -> Result<Config> {
    let config = if yaml {
        serde_yaml::from_str(contents).context("Failed to parse YAML config")?
    } else {
        serde_json::from_str(contents).context("Failed to parse JSON config")?
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::Locale;

    #[test]
    fn yaml_with_default_locale() {
        let config = parse_config("base_url: http://localhost:8000\n", true).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.locale, Locale::Ru);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn json_with_english_locale() {
        let config =
            parse_config(r#"{"base_url":"https://mail.example.org","locale":"en"}"#, false)
                .unwrap();
        assert_eq!(config.locale, Locale::En);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_http_scheme() {
        let config = parse_config("base_url: ftp://localhost\n", true).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_query_in_base_url() {
        let config = parse_config("base_url: http://localhost:8000/?x=1\n", true).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unknown_locale() {
        assert!(parse_config("base_url: http://localhost\nlocale: de\n", true).is_err());
    }

    #[test]
    fn extension_selects_format() {
        assert!(is_yaml(Path::new("config.yaml")));
        assert!(is_yaml(Path::new("config.yml")));
        assert!(!is_yaml(Path::new("config.json")));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        assert!(load_config("does-not-exist.yaml").await.is_err());
    }
}
