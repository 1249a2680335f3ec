#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_port: u16,
    pub db_pool_size: u32,
    pub app_host: String,
    pub app_port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            db_host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into()),
            db_user: std::env::var("DB_USER").unwrap_or_else(|_| "postgres".into()),
            db_password: std::env::var("DB_PASSWORD").unwrap_or_else(|_| "password".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "employee_db".into()),
            db_port: std::env::var("DB_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(5432),
            db_pool_size: std::env::var("DB_POOL_SIZE")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(5),
            app_host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            app_port: std::env::var("APP_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(8080),
        })
    }

    /// Connection URL for the pool. `DATABASE_URL` wins when set, otherwise
    /// the URL is composed from the individual `DB_*` settings.
    pub fn database_url(&self) -> String {
        std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            format!(
                "postgres://{}:{}@{}:{}/{}",
                self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
            )
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            db_host: "db.internal".into(),
            db_user: "svc".into(),
            db_password: "secret".into(),
            db_name: "employees".into(),
            db_port: 5433,
            db_pool_size: 5,
            app_host: "127.0.0.1".into(),
            app_port: 3000,
        }
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        assert_eq!(config().bind_addr(), "127.0.0.1:3000");
    }
}
