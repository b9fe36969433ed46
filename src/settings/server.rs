// SPDX-License-Identifier: GPL-3.0-or-later
use serde::Deserialize;

use std::net;

#[derive(Debug, Deserialize, PartialEq)]
pub(crate) struct ServerSettings {
    /// The address to bind the server to. Defaults to `127.0.0.1`.
    #[serde(default = "ServerSettings::default_address")]
    address: net::IpAddr,

    /// The port to bind the server to. Defaults to `9000`.
    #[serde(default = "ServerSettings::default_port")]
    port: u16,
}

impl ServerSettings {
    fn default_address() -> net::IpAddr {
        net::IpAddr::from([127u8, 0u8, 0u8, 1u8])
    }

    fn default_port() -> u16 {
        9000u16
    }
}

impl From<ServerSettings> for net::SocketAddr {
    fn from(settings: ServerSettings) -> Self {
        match settings.address {
            net::IpAddr::V4(ip) => net::SocketAddr::from((ip, settings.port)),
            net::IpAddr::V6(ip) => net::SocketAddr::from((ip, settings.port)),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: Self::default_address(),
            port: Self::default_port(),
        }
    }
}
