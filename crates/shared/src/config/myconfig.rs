use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
    pub cors_origin: String,
    pub seed_file: Option<PathBuf>,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; `init` reads the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let port = match lookup("PORT") {
            Some(port_str) => port_str
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            None => DEFAULT_PORT,
        };

        let db_min_conn = match lookup("DB_MIN_CONN") {
            Some(value) => value
                .parse::<u32>()
                .context("DB_MIN_CONN must be a valid u32 integer")?,
            None => 1,
        };

        let db_max_conn = match lookup("DB_MAX_CONN") {
            Some(value) => value
                .parse::<u32>()
                .context("DB_MAX_CONN must be a valid u32 integer")?,
            None => 5,
        };

        if db_max_conn == 0 || db_min_conn > db_max_conn {
            return Err(anyhow!(
                "DB_MIN_CONN ({}) must not exceed DB_MAX_CONN ({}), and DB_MAX_CONN must be positive",
                db_min_conn,
                db_max_conn
            ));
        }

        let cors_origin = lookup("CORS_ORIGIN")
            .filter(|origin| !origin.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        let seed_file = lookup("SEED_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            database_url,
            port,
            db_min_conn,
            db_max_conn,
            cors_origin,
            seed_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn applies_defaults_when_only_database_url_is_set() {
        let config =
            Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/shop")]))
                .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/shop");
        assert_eq!(config.port, 8000);
        assert_eq!(config.db_min_conn, 1);
        assert_eq!(config.db_max_conn, 5);
        assert_eq!(config.cors_origin, "http://localhost:3000");
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "9000")])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn rejects_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/shop"),
            ("PORT", "not-a-port"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn rejects_min_connections_above_max() {
        let result = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/shop"),
            ("DB_MIN_CONN", "10"),
            ("DB_MAX_CONN", "2"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/shop"),
            ("PORT", "9100"),
            ("CORS_ORIGIN", "https://shop.example.com"),
            ("SEED_FILE", "./seed.json"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9100);
        assert_eq!(config.cors_origin, "https://shop.example.com");
        assert_eq!(config.seed_file, Some(PathBuf::from("./seed.json")));
    }
}
