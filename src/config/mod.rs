use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub mongo_url: String,
    pub db_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub admin_password: String,
    pub jwt_expiry_hours: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        if let Ok(v) = env::var("MONGO_URL") {
            self.database.mongo_url = v;
        }
        if let Ok(v) = env::var("DB_NAME") {
            self.database.db_name = v;
        }

        if let Ok(v) = env::var("JWT_SECRET_KEY") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("ADMIN_PASSWORD") {
            self.security.admin_password = v;
        }
        if let Ok(v) = env::var("JWT_EXPIRY_HOURS") {
            self.security.jwt_expiry_hours = v.parse().unwrap_or(self.security.jwt_expiry_hours);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 3000 },
            database: DatabaseConfig {
                mongo_url: "mongodb://localhost:27017".to_string(),
                db_name: "portfolio".to_string(),
            },
            security: SecurityConfig {
                jwt_secret: "your-secret-key-change-in-production".to_string(),
                admin_password: "admin123".to_string(),
                jwt_expiry_hours: 24,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 3000 },
            database: DatabaseConfig {
                mongo_url: "mongodb://localhost:27017".to_string(),
                db_name: "portfolio".to_string(),
            },
            security: SecurityConfig {
                // Secrets must arrive through the environment in production;
                // the server refuses to start with these left empty.
                jwt_secret: String::new(),
                admin_password: String::new(),
                jwt_expiry_hours: 24,
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
