use serde::{Deserialize, Serialize};

use crate::github::SortDirection;
use crate::stale::FilterMode;

/// Default look-back window in days when `days_range` is omitted.
pub const DEFAULT_DAYS_RANGE: u32 = 7;

/// Reminder configuration.
///
/// Example YAML:
/// ```yaml
/// repos:
///   - acme/widgets
///   - acme/gadgets
/// days_range: 7
/// filter_mode: sticky
/// sort_direction: desc
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Repositories to scan, "org/name", processed in this order
    #[serde(default)]
    pub repos: Vec<String>,

    /// Staleness window in days
    #[serde(default = "default_days_range")]
    pub days_range: u32,

    /// How open pull requests are selected for the report
    #[serde(default)]
    pub filter_mode: FilterMode,

    /// Order in which open pull requests are fetched and walked
    #[serde(default)]
    pub sort_direction: SortDirection,
}

fn default_days_range() -> u32 {
    DEFAULT_DAYS_RANGE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repos: Vec::new(),
            days_range: DEFAULT_DAYS_RANGE,
            filter_mode: FilterMode::default(),
            sort_direction: SortDirection::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
repos:
  - acme/widgets
  - acme/gadgets
days_range: 14
filter_mode: per-request
sort_direction: desc
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.repos, vec!["acme/widgets", "acme/gadgets"]);
        assert_eq!(config.days_range, 14);
        assert_eq!(config.filter_mode, FilterMode::PerRequest);
        assert_eq!(config.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn test_defaults_when_keys_missing() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.repos.is_empty());
        assert_eq!(config.days_range, DEFAULT_DAYS_RANGE);
        assert_eq!(config.filter_mode, FilterMode::Sticky);
        assert_eq!(config.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn test_repos_only() {
        let yaml = r#"
repos:
  - acme/widgets
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.repos.len(), 1);
        assert_eq!(config.days_range, 7);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let yaml = r#"
repos: []
reviewers: [alice]
"#;
        let result: Result<Config, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_days_range_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("days_range: -3");
        assert!(result.is_err());
    }
}
