use std::env;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_DATABASE_PATH: &str = "./database.sqlite";

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.is_empty())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url = Self::get_env("DATABASE_URL").unwrap_or_else(|| {
            let path = Self::get_env("TEST_DATABASE")
                .or_else(|| Self::get_env("DATABASE_PATH"))
                .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());
            sqlite_url(&path)
        });

        EnvConfig {
            port: Self::get_env("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            db_url,
        }
    }
}

/// `mode=rwc` makes sqlx create the file when it does not exist yet.
pub fn sqlite_url(path: &str) -> String {
    format!("sqlite://{}?mode=rwc", path)
}
