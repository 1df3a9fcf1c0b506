use std::{env, fs, ops::Deref, path::Path, sync::Arc};

use anyhow::Context as _;

use crate::{dao::SharedStorage, error::Error, handler::Engine};

pub const CONFIG_FILE: &str = "ledger.conf";
pub const SECRETS_FILE: &str = ".env";

#[derive(Debug)]
pub struct AppState<T>(Arc<T>);

impl<T> AppState<T> {
    pub fn new(state: T) -> AppState<T> {
        AppState(Arc::new(state))
    }
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> AppState<T> {
        AppState(Arc::clone(&self.0))
    }
}

impl<T> Deref for AppState<T> {
    type Target = Arc<T>;

    fn deref(&self) -> &Arc<T> {
        &self.0
    }
}

pub struct State {
    pub config: Config,
    pub engine: Engine,
}

impl State {
    pub fn new(config: Config, storage: SharedStorage) -> State {
        Self {
            config,
            engine: Engine::new(storage),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub max_connections: u32,
    pub json_limit: usize,
}

impl Config {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

pub fn get_configuration() -> Result<Config, Error> {
    let database_url = env::var("DATABASE_URL")?;
    let server_host = env::var("SERVER_HOST")?;
    let port: u16 = env::var("PORT")?.parse()?;
    let max_connections: u32 = env::var("MAX_CONNECTIONS")?.parse()?;
    let json_limit: usize = env::var("JSON_LIMIT")?.parse()?;
    let allowed_origins = split_list(&env::var("ALLOWED_ORIGINS")?);

    let config = Config {
        database_url,
        server_host,
        port,
        allowed_origins,
        max_connections,
        json_limit,
    };

    Ok(config)
}

/// Loads `ledger.conf` (required) and `.env` (optional, may override) from
/// the crate directory into the process environment.
pub fn set_configuration() -> Result<(), Error> {
    let directory = env!("CARGO_MANIFEST_DIR");
    let config_path = format!("{}/{}", directory, CONFIG_FILE);
    let secrets_path = format!("{}/{}", directory, SECRETS_FILE);

    let config_string = fs::read_to_string(&config_path)
        .with_context(|| format!("could not read {}", config_path))?;
    apply_params(parse_config_string(&config_string));

    if Path::new(&secrets_path).exists() {
        let secrets_string = fs::read_to_string(&secrets_path)?;
        apply_params(parse_config_string(&secrets_string));
    }

    Ok(())
}

fn apply_params(params: Vec<(String, String)>) {
    for (key, value) in params {
        env::set_var(key, value);
    }
}

/// `KEY=value` lines; blank lines and `#` comments are skipped, only the
/// first `=` splits.
pub fn parse_config_string(config: &str) -> Vec<(String, String)> {
    config
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_owned(), value.trim().to_owned()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_string() {
        let params = parse_config_string(
            "# server\nSERVER_HOST=127.0.0.1\n\nPORT = 8080\nDATABASE_URL=postgres://u:p@db/ledger?sslmode=disable\nbroken line\n",
        );

        assert_eq!(
            params,
            vec![
                (String::from("SERVER_HOST"), String::from("127.0.0.1")),
                (String::from("PORT"), String::from("8080")),
                (
                    String::from("DATABASE_URL"),
                    String::from("postgres://u:p@db/ledger?sslmode=disable")
                ),
            ]
        );
    }

    #[test]
    fn test_split_list_skips_blanks() {
        assert_eq!(
            split_list("http://a.test, http://b.test,,"),
            vec![String::from("http://a.test"), String::from("http://b.test")]
        );
    }

    #[test]
    fn test_allows_any_origin() {
        let mut config = Config {
            database_url: String::new(),
            server_host: String::from("127.0.0.1"),
            port: 8080,
            allowed_origins: vec![String::from("http://a.test")],
            max_connections: 5,
            json_limit: 4096,
        };
        assert!(!config.allows_any_origin());

        config.allowed_origins.push(String::from("*"));
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_shipped_config_file_parses() {
        let path = format!("{}/{}", env!("CARGO_MANIFEST_DIR"), CONFIG_FILE);
        let config = fs::read_to_string(path).unwrap();
        let keys: Vec<String> =
            parse_config_string(&config).into_iter().map(|(k, _)| k).collect();

        for key in [
            "SERVER_HOST",
            "PORT",
            "ALLOWED_ORIGINS",
            "MAX_CONNECTIONS",
            "JSON_LIMIT",
        ] {
            assert!(keys.iter().any(|k| k == key), "missing {}", key);
        }
    }
}
