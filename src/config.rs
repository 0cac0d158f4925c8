use std::net::SocketAddr;

use anyhow::{Context, bail};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StoreBackend {
    Memory,
    Sqlite,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub store_backend: StoreBackend,
    pub database_url: String,
    pub jwt_secret: String,
    pub admin_email: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().context("PORT")?;

        let store_backend = match std::env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "sqlite".to_string())
            .to_lowercase()
            .as_str()
        {
            "memory" => StoreBackend::Memory,
            "sqlite" => StoreBackend::Sqlite,
            other => bail!("unknown STORE_BACKEND '{other}', expected 'memory' or 'sqlite'"),
        };

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://movies.db?mode=rwc".to_string());

        let jwt_secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| "my_secret_key".to_string());

        let admin_email =
            std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@gmail.com".to_string());
        let admin_password =
            std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string());

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            store_backend,
            database_url,
            jwt_secret,
            admin_email,
            admin_password,
        })
    }
}
