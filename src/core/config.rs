use anyhow::{anyhow, Result};

pub const DEFAULT_PORT: u16 = 3001;

#[derive(Clone, Debug)]
pub struct MonitorConfig {
    pub port: u16,
}

impl MonitorConfig {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| anyhow!("PORT is not a valid port number: {}", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { port })
    }
}
