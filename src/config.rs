use crate::dotenv;
use crate::error::Error;

pub static DATABASE_URL: &str = "DATABASE_URL";
pub static HOST: &str = "HOST";
pub static PORT: &str = "PORT";
pub static DB_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";
pub static OPTION_COLUMN: &str = "OPTION_COLUMN";
pub static SUBMISSION_LOG: &str = "SUBMISSION_LOG";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Explicit name of the option column in `responses`. When unset the
    /// column is looked up in the live schema at startup.
    pub option_column: Option<String>,
    pub submission_log: String,
}

/// Loads `.env` when present. A missing file is fine, a malformed one is not.
pub fn load_dotenv() -> Result<(), Error> {
    allow_missing(dotenv::dotenv().map(|_| ()))
}

fn allow_missing(loaded: Result<(), dotenv::Error>) -> Result<(), Error> {
    match loaded {
        Err(e) if e.not_found() => Ok(()),
        other => other.map_err(Error::DotEnvError),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        Ok(Config {
            database_url: non_empty(DATABASE_URL).ok_or(Error::MissingConfig("DATABASE_URL"))?,
            host: non_empty(HOST).unwrap_or_else(|| "0.0.0.0".into()),
            port: non_empty(PORT).map(|v| v.parse::<u16>()).transpose()?.unwrap_or(4000),
            max_connections: non_empty(DB_MAX_CONNECTIONS).map(|v| v.parse::<u32>()).transpose()?.unwrap_or(5),
            option_column: non_empty(OPTION_COLUMN),
            submission_log: non_empty(SUBMISSION_LOG).unwrap_or_else(|| "logs/survey_responses.log".into()),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/survey")])).unwrap();
        assert_eq!(config.database_url, "postgres://localhost/survey");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4000);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.option_column, None);
        assert_eq!(config.submission_log, "logs/survey_responses.log");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/survey"),
            ("PORT", "8080"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("OPTION_COLUMN", "option_id"),
            ("SUBMISSION_LOG", "/var/log/survey.log"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.option_column.as_deref(), Some("option_id"));
        assert_eq!(config.submission_log, "/var/log/survey.log");
    }

    #[test]
    fn test_missing_database_url() {
        let err = Config::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap_err();
        assert!(matches!(err, Error::MissingConfig("DATABASE_URL")));
    }

    #[test]
    fn test_missing_dotenv_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = dotenv::from_path(dir.path().join(".env")).map(|_| ());
        assert!(allow_missing(loaded).is_ok());
    }

    #[test]
    fn test_malformed_dotenv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "WARD_SURVEY_BROKEN LINE\n").unwrap();
        let loaded = dotenv::from_path(&path).map(|_| ());
        assert!(matches!(allow_missing(loaded), Err(Error::DotEnvError(_))));
    }

    #[test]
    fn test_bad_port() {
        let err = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://db"), ("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, Error::ParseIntError(_)));
    }
}
