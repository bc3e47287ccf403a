use budget_domain::Language;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stores user-configurable display preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    /// Number of recent transactions shown on the dashboard.
    #[serde(default = "Config::default_recent_limit")]
    pub recent_limit: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for the config file. Defaults to the platform config dir.
    pub base_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "th-TH".into(),
            currency: "THB".into(),
            currency_symbol: Self::default_currency_symbol(),
            recent_limit: Self::default_recent_limit(),
            base_dir: None,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "฿".into()
    }

    pub fn default_recent_limit() -> usize {
        5
    }

    /// Label language derived from `locale`.
    pub fn language(&self) -> Language {
        Language::from_locale(&self.locale)
    }

    pub fn resolve_base_dir(&self) -> PathBuf {
        if let Some(path) = &self.base_dir {
            return path.clone();
        }

        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("family-budget")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_thai_baht() {
        let cfg = Config::default();
        assert_eq!(cfg.language(), Language::Thai);
        assert_eq!(cfg.currency_symbol, "฿");
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let cfg: Config =
            serde_json::from_str(r#"{"locale":"en-US","currency":"USD"}"#).unwrap();
        assert_eq!(cfg.language(), Language::English);
        assert_eq!(cfg.currency_symbol, "฿");
        assert_eq!(cfg.recent_limit, 5);
        assert_eq!(cfg.base_dir, None);
    }

    #[test]
    fn explicit_base_dir_wins() {
        let cfg = Config {
            base_dir: Some(PathBuf::from("/tmp/budget")),
            ..Config::default()
        };
        assert_eq!(cfg.resolve_base_dir(), PathBuf::from("/tmp/budget"));
    }
}
