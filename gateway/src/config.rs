use std::{
  env,
  net::{IpAddr, Ipv4Addr, SocketAddr},
};

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_FILTER: &str = "menu_gateway=debug,tower_http=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub addr: SocketAddr,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
  }

  fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self> {
    let host = match host {
      Some(host) => host
        .parse()
        .with_context(|| format!("invalid HOST {host:?}"))?,
      None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
    };
    let port = match port {
      Some(port) => port
        .parse()
        .with_context(|| format!("invalid PORT {port:?}"))?,
      None => DEFAULT_PORT,
    };

    Ok(Self {
      addr: SocketAddr::new(host, port),
    })
  }
}
