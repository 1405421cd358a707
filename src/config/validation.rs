use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
///
/// Repository identifiers are not checked here: a malformed entry only
/// fails its own repository at run time.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.days_range == 0 {
        errors.push("days_range: must be a positive number of days".to_string());
    }

    // Going further back than chrono's date range panics on subtraction
    if i64::from(config.days_range) > MAX_DAYS_RANGE {
        errors.push(format!(
            "days_range: {} exceeds the maximum of {} days",
            config.days_range, MAX_DAYS_RANGE
        ));
    }

    for (i, repo) in config.repos.iter().enumerate() {
        if repo.trim().is_empty() {
            errors.push(format!("repos[{}]: must not be empty", i));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound for `days_range` (roughly 10k years)
const MAX_DAYS_RANGE: i64 = 3_650_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = Config {
            repos: vec!["acme/widgets".to_string()],
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_days_range() {
        let config = Config {
            days_range: 0,
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("days_range"));
    }

    #[test]
    fn test_huge_days_range() {
        let config = Config {
            days_range: u32::MAX,
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("exceeds"));
    }

    #[test]
    fn test_malformed_repo_is_not_a_startup_error() {
        let config = Config {
            repos: vec!["no-slash-here".to_string()],
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let config = Config {
            repos: vec!["acme/widgets".to_string(), "  ".to_string()],
            days_range: 0,
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[1].contains("repos[1]"));
    }
}
