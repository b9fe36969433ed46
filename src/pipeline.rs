// SPDX-License-Identifier: GPL-3.0-or-later
use anyhow::Context as _;
use bytes::Bytes;
use futures::future::FutureExt;
use tokio::task::spawn_blocking;
use tracing::debug;

use crate::analysis::LuminosityMap;
use crate::util::flatten_join_result;

/// Decode raw image bytes and count the vertical black lines crossing the
/// midline row.
///
/// Decoding and the two analysis passes are CPU-bound, so they run on a
/// blocking thread rather than stalling the request executor.
pub(crate) async fn count_from_bytes(image_data: Bytes) -> anyhow::Result<u32> {
    spawn_blocking(move || -> anyhow::Result<u32> {
        let decoded =
            image::load_from_memory(&image_data).context("Error decoding the image data")?;
        let grid = decoded.to_rgb8();
        debug!(
            width = grid.width(),
            height = grid.height(),
            "image decoded"
        );
        let map = LuminosityMap::from_grid(&grid);
        Ok(map.midline_runs())
    })
    .map(flatten_join_result)
    .await
}
