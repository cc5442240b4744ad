// src/config/models.rs
use crate::health::Locale;
use anyhow::{bail, Result};
use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Where the backend lives; `/health` is resolved against it.
    pub base_url: Url,
    #[serde(default)]
    pub locale: Locale,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        match self.base_url.scheme() {
            "http" | "https" => {}
            other => bail!("Unsupported base_url scheme: {}", other),
        }

        if self.base_url.host_str().is_none() {
            bail!("base_url must include a host");
        }

        if self.base_url.query().is_some() || self.base_url.fragment().is_some() {
            bail!("base_url must not carry a query or fragment");
        }

        Ok(())
    }
}
