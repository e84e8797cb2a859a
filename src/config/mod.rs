use crate::error::AppError;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("invalid APP_PORT: {}", e)))?;

        let uri =
            env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database = env::var("MONGODB_DATABASE").unwrap_or_else(|_| "person_db".to_string());

        Ok(Self {
            server: ServerConfig { port },
            mongodb: MongoConfig { uri, database },
        })
    }
}
