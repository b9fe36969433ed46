// SPDX-License-Identifier: GPL-3.0-or-later
use image::Rgb;

use crate::image_buffer::PixelGrid;

use super::SizeMismatch;

// Luminosity method weights. These sum to 1.0, so a converted value can never
// exceed 254 (0.3 + 0.59 + 0.11 of 255 truncates down from 254.99…).
const RED_WEIGHT: f64 = 0.30;
const GREEN_WEIGHT: f64 = 0.59;
const BLUE_WEIGHT: f64 = 0.11;

/// A single-channel brightness image in row-major order.
///
/// The length of the backing buffer is always exactly `width * height`; both
/// constructors uphold that, so row offsets computed from the dimensions are
/// always in bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LuminosityMap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl LuminosityMap {
    /// Convert a decoded RGB pixel grid to grayscale.
    ///
    /// Each pixel becomes `0.30 * R + 0.59 * G + 0.11 * B`, truncated (not
    /// rounded) to a byte. The arithmetic is done in `f64`; `f32` accumulates
    /// enough error on an all-white pixel to land above 255 and round the
    /// wrong way.
    pub(crate) fn from_grid(grid: &PixelGrid) -> Self {
        let (width, height) = grid.dimensions();
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for row in 0..height {
            for column in 0..width {
                let Rgb([red, green, blue]) = *grid.get_pixel(column, row);
                let gray = f64::from(red) * RED_WEIGHT
                    + f64::from(green) * GREEN_WEIGHT
                    + f64::from(blue) * BLUE_WEIGHT;
                data.push(gray as u8);
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap an existing grayscale buffer, checking that its length matches
    /// the claimed dimensions.
    pub(crate) fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, SizeMismatch> {
        if data.len() != width as usize * height as usize {
            return Err(SizeMismatch {
                width,
                height,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
