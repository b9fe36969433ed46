// SPDX-License-Identifier: GPL-3.0-or-later
use anyhow::Context as _;
use structopt::StructOpt;
use tracing::{info, info_span, warn};
use tracing_futures::Instrument;
use tracing_subscriber::EnvFilter;

use std::fs;
use std::net::SocketAddr;

mod analysis;
mod image_buffer;
mod pipeline;
mod server;
mod settings;
mod source;
mod util;

use crate::settings::{Args, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::from_args();
    let config = if args.config_path.is_file() {
        let config_data = fs::read(&args.config_path).with_context(|| {
            format!(
                "Unable to read configuration from {}",
                args.config_path.display()
            )
        })?;
        toml::from_slice(&config_data).context("Error parsing configuration file")?
    } else {
        warn!(path = ?args.config_path, "No configuration file found, using defaults");
        Settings::default()
    };

    let context =
        server::Context::new(&config.fetch).context("Error creating image download client")?;
    let bind_address: SocketAddr = config.server.into();
    info!(address = ?bind_address, "Serving line count requests");
    warp::serve(server::routes(context))
        .bind(bind_address)
        .instrument(info_span!("warp_server"))
        .await;
    Ok(())
}
