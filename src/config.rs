use anyhow::Result;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub storage_dir: String,
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub company_name: String,
    pub seed_sample_data: bool,
    pub client_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_env_only()
    }

    /// Reads the process environment without touching `.env`.
    pub fn from_env_only() -> Result<Self> {
        Ok(Config {
            storage_dir: env::var("STORAGE_DIR").unwrap_or_else(|_| "./.dayflow".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            company_name: env::var("COMPANY_NAME").unwrap_or_else(|_| "Dayflow".to_string()),
            seed_sample_data: env::var("SEED_SAMPLE_DATA")
                .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "no"))
                .unwrap_or(true),
            client_base_url: env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        })
    }

    /// In-memory storage, seeded, bound to an ephemeral port.
    pub fn test_config() -> Self {
        Config {
            storage_dir: String::new(),
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            company_name: "Dayflow".to_string(),
            seed_sample_data: true,
            client_base_url: "http://localhost:3000".to_string(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
