// src/config.rs
use std::env;

use anyhow::Context;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl Config {
    /// Read configuration from the environment. The API key has no default.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("GEMINI_API_KEY").context("GEMINI_API_KEY must be set")?;
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_base = env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            bind_addr,
            gemini: GeminiSettings {
                api_key,
                model,
                api_base,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations can't race a sibling test.
    #[test]
    fn from_env_requires_api_key_and_applies_defaults() {
        unsafe {
            env::remove_var("GEMINI_API_KEY");
            env::remove_var("GEMINI_MODEL");
            env::remove_var("GEMINI_API_BASE");
            env::remove_var("BIND_ADDR");
        }
        assert!(Config::from_env().is_err());

        unsafe {
            env::set_var("GEMINI_API_KEY", "test-key");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.gemini.api_key, "test-key");
        assert_eq!(config.gemini.model, DEFAULT_MODEL);
        assert_eq!(config.gemini.api_base, DEFAULT_API_BASE);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);

        unsafe {
            env::remove_var("GEMINI_API_KEY");
        }
    }
}
