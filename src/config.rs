use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub payments_api_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let payments_api_url = env_map
            .get("PAYMENTS_API_URL")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("PAYMENTS_API_URL".to_string()))?;

        Ok(Config {
            port,
            payments_api_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_required_env() -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert(
            "PAYMENTS_API_URL".to_string(),
            "https://payments.example.com/tech_assessment".to_string(),
        );
        map
    }

    #[test]
    fn test_defaults_port_to_8080() {
        let config = Config::from_env_map(setup_required_env()).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_reads_explicit_port() {
        let mut env_map = setup_required_env();
        env_map.insert("PORT".to_string(), "9090".to_string());
        let config = Config::from_env_map(env_map).unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_missing_payments_api_url() {
        let result = Config::from_env_map(HashMap::new());
        match result {
            Err(ConfigError::MissingEnv(s)) => assert_eq!(s, "PAYMENTS_API_URL"),
            _ => panic!("Expected MissingEnv error"),
        }
    }

    #[test]
    fn test_invalid_port() {
        let mut env_map = setup_required_env();
        env_map.insert("PORT".to_string(), "not_a_number".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "PORT"),
            _ => panic!("Expected InvalidValue error"),
        }
    }
}
