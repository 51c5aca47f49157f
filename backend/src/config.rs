use std::env;
use std::path::PathBuf;

use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub public_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: load_port("PORT", 3000),
            data_dir: load_dir("QUICKPOLL_DATA_DIR", "./data"),
            public_dir: load_dir("QUICKPOLL_PUBLIC_DIR", "./public"),
        }
    }
}

fn load_port(key: &str, default: u16) -> u16 {
    match env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {value:?} ({e}), using default {default}");
            default
        }),
        Err(_) => default,
    }
}

fn load_dir(key: &str, default: &str) -> PathBuf {
    env::var(key).map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(default))
}
