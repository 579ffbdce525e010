use sqlx::mysql::MySqlConnectOptions;

/// Connection settings for the word store. `DATABASE_URL` wins when set;
/// otherwise the URL is composed from the individual `DB_*` variables.
/// When neither `DATABASE_URL` nor `DB_HOST` is present the service runs
/// without a store and serves the embedded seed data.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: Option<String>,
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    pub fn from_env() -> Option<Self> {
        let url = env_nonempty("DATABASE_URL");
        let host = env_nonempty("DB_HOST");

        if url.is_none() && host.is_none() {
            return None;
        }

        Some(Self {
            url,
            host: host.unwrap_or_else(|| "localhost".to_string()),
            user: env_nonempty("DB_USER").unwrap_or_else(|| "root".to_string()),
            password: std::env::var("DB_PASSWORD").unwrap_or_default(),
            database: env_nonempty("DB_NAME").unwrap_or_else(|| "toeic_db".to_string()),
        })
    }

    pub fn connect_options(&self) -> Result<MySqlConnectOptions, sqlx::Error> {
        let options = match &self.url {
            Some(url) => url.parse::<MySqlConnectOptions>()?,
            None => {
                let mut options = MySqlConnectOptions::new()
                    .host(&self.host)
                    .username(&self.user)
                    .database(&self.database);
                if !self.password.is_empty() {
                    options = options.password(&self.password);
                }
                options
            }
        };

        // 4-byte-safe UTF-8 so CJK text and emoji round-trip intact.
        Ok(options.charset("utf8mb4"))
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
