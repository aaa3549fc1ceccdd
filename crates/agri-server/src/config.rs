//! Server Configuration

use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "dist";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Trunk output directory holding `index.html` and the wasm bundle
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            static_dir: DEFAULT_STATIC_DIR.into(),
        }
    }
}

impl ServerConfig {
    /// Read `BIND_ADDR` and `STATIC_DIR`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            bind_addr: var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: var("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.static_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_overrides() {
        let vars = HashMap::from([
            ("BIND_ADDR", "127.0.0.1:8080".to_string()),
            ("STATIC_DIR", "/srv/agri".to_string()),
        ]);
        let config = ServerConfig::from_lookup(|k| vars.get(k).cloned());
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.static_dir, PathBuf::from("/srv/agri"));
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = ServerConfig::from_lookup(|_| Some("  ".into()));
        assert_eq!(config, ServerConfig::default());
    }
}
