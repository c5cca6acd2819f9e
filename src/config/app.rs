use anyhow::Result;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub enable_exercise_purge: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            enable_exercise_purge: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let enable_exercise_purge = env::var("ENABLE_EXERCISE_PURGE")
            .map(|value| parse_flag(&value))
            .unwrap_or(true);

        Ok(AppConfig {
            host,
            port,
            log_level,
            enable_exercise_purge,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["HOST", "PORT", "RUST_LOG", "ENABLE_EXERCISE_PURGE"] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.server_address(), "0.0.0.0:3000");
        assert!(config.enable_exercise_purge);
    }

    #[test]
    #[serial]
    fn test_reads_port_and_purge_flag() {
        clear_env();
        env::set_var("PORT", "8080");
        env::set_var("ENABLE_EXERCISE_PURGE", "false");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert!(!config.enable_exercise_purge);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_port_falls_back() {
        clear_env();
        env::set_var("PORT", "not-a-port");

        assert_eq!(AppConfig::from_env().unwrap().port, 3000);

        clear_env();
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("FALSE"));
        assert!(!parse_flag(" off "));
    }
}
