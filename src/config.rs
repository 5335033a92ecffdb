//! Process configuration, read once at startup.

use std::net::SocketAddr;

use crate::error::Error;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Config {
    /// Reads `CHIRPY_ADDR` (default [`DEFAULT_ADDR`]).
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let raw = lookup("CHIRPY_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr = raw
            .parse()
            .map_err(|e| Error::Config(format!("CHIRPY_ADDR `{raw}`: {e}")))?;
        Ok(Self { addr })
    }
}
