// SPDX-License-Identifier: GPL-3.0-or-later
use anyhow::{bail, Context as _};
use bytes::Bytes;
use tracing::info;
use url::Url;

use std::path::PathBuf;

use crate::settings::FetchSettings;

/// Where an image reference from the query string points to.
///
/// An absolute `http`/`https` URL is fetched over the network; everything
/// else is treated as a path on the local filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ImageSource {
    Remote(Url),
    Local(PathBuf),
}

impl From<&str> for ImageSource {
    fn from(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Remote(url),
            _ => Self::Local(PathBuf::from(raw)),
        }
    }
}

impl ImageSource {
    /// Retrieve the raw image bytes this source refers to.
    pub(crate) async fn fetch(
        &self,
        client: &reqwest::Client,
        limits: &FetchSettings,
    ) -> anyhow::Result<Bytes> {
        match self {
            Self::Remote(url) => {
                info!(url = %url, "Attempting to download the image");
                let response = client
                    .get(url.clone())
                    .send()
                    .await
                    .context("Error downloading the image")?
                    .error_for_status()
                    .context("The image server returned an error status")?;
                let data = response
                    .bytes()
                    .await
                    .context("Error reading the downloaded image body")?;
                Self::check_size(data.len(), limits)?;
                info!("Image downloaded successfully");
                Ok(data)
            }
            Self::Local(path) => {
                if !path.is_file() {
                    bail!("The provided path is neither a valid URL nor a valid local file path");
                }
                info!(path = %path.display(), "Loading the image from a local file");
                let data = tokio::fs::read(path)
                    .await
                    .with_context(|| format!("Error reading the image from {}", path.display()))?;
                Self::check_size(data.len(), limits)?;
                info!("Image loaded successfully");
                Ok(Bytes::from(data))
            }
        }
    }

    fn check_size(length: usize, limits: &FetchSettings) -> anyhow::Result<()> {
        if length > limits.max_bytes {
            bail!(
                "The image is {} bytes, larger than the {} byte limit",
                length,
                limits.max_bytes
            );
        }
        Ok(())
    }
}
