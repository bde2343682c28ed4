use std::{env, fs, ops::Deref, sync::Arc};

use url::Url;

use crate::{error::Error, provider::EthRpc};

pub const DEFAULT_RPC_URL: &str = "https://polygon-rpc.com";

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

#[derive(Debug)]
pub struct State {
    pub config: Config,
    pub eth: EthRpc,
}

impl State {
    pub fn new(config: Config, eth: EthRpc) -> State {
        State { config, eth }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: Url,
    pub timeout: u64,
    pub server_host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub static_dir: String,
}

pub fn get_configuration() -> Result<Config, Error> {
    let rpc_url =
        env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_owned());
    let rpc_url = Url::parse(&rpc_url)?;

    let timeout: u64 = env::var("TIMEOUT")
        .unwrap_or_else(|_| String::from("30"))
        .parse()?;
    let server_host =
        env::var("SERVER_HOST").unwrap_or_else(|_| String::from("0.0.0.0"));
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| String::from("3000"))
        .parse()?;
    let allowed_origins = env::var("ALLOWED_ORIGINS")
        .unwrap_or_else(|_| String::from("*"))
        .split(',')
        .map(|item| item.to_owned())
        .collect::<Vec<String>>();
    let static_dir = format!(
        "{}/{}",
        env!("CARGO_MANIFEST_DIR"),
        env::var("STATIC_DIRECTORY").unwrap_or_else(|_| String::from("static"))
    );

    Ok(Config {
        rpc_url,
        timeout,
        server_host,
        port,
        allowed_origins,
        static_dir,
    })
}

/// Seeds the process environment from a `.env` file next to the manifest,
/// when one exists. Variables already set win over file entries.
pub fn set_configuration() -> Result<(), Error> {
    let config_file: &str = ".env";
    let directory = env!("CARGO_MANIFEST_DIR");
    let path = format!("{}/{}", directory, config_file);

    match fs::read_to_string(path) {
        Ok(config_string) => {
            parse_config_string(config_string);
            Ok(())
        },
        Err(_) => Ok(()),
    }
}

fn parse_config_string(config: String) {
    let params: Vec<Option<(&str, &str)>> = config
        .split('\n')
        .map(|s| s.find('=').map(|element| s.split_at(element)))
        .map(|value| value.map(|(k, v)| (k, &v[1..])))
        .collect();

    for (key, value) in params.into_iter().flatten() {
        if env::var(key).is_err() {
            env::set_var(key, value);
        }
    }
}
