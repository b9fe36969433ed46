// SPDX-License-Identifier: GPL-3.0-or-later
use image::{ImageBuffer, Rgb};

/// Decoded pixel grids as handed from the decode boundary to the analysis
/// core. Row-major, 8 bits per channel.
pub(crate) type PixelGrid = ImageBuffer<Rgb<u8>, Vec<u8>>;
