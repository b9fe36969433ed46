// SPDX-License-Identifier: GPL-3.0-or-later
use serde::Deserialize;

mod cli;
mod fetch;
mod server;

pub(crate) use cli::Args;
pub(crate) use fetch::{FetchSettings, Timeout};
pub(crate) use server::ServerSettings;

#[derive(Debug, Default, Deserialize, PartialEq)]
pub(crate) struct Settings {
    /// Settings for the HTTP server answering count requests.
    #[serde(default)]
    pub(crate) server: ServerSettings,

    /// Settings for retrieving images from URLs and local paths.
    #[serde(default)]
    pub(crate) fetch: FetchSettings,
}
