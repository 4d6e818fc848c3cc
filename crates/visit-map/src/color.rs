//! Linear two-color scale

use serde::{Serialize, Serializer};
use std::fmt;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    fn channels(self) -> [f64; 3] {
        [self.0, self.1, self.2].map(|c| c as f64 / 255.0)
    }

    /// Channel floats in [0, 1] to bytes, truncating like `int(f * 255.9999999)`
    fn from_channels(c: [f64; 3]) -> Self {
        let byte = |f: f64| (f.clamp(0.0, 1.0) * 255.9999999).floor() as u8;
        Rgb(byte(c[0]), byte(c[1]), byte(c[2]))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Maps a value in `[vmin, vmax]` onto the line between `low` and `high`
///
/// Values outside the range clamp to the nearest end. When `vmin == vmax`
/// every value maps to `low`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    pub low: Rgb,
    pub high: Rgb,
    pub vmin: f64,
    pub vmax: f64,
}

impl ColorScale {
    pub fn new(low: Rgb, high: Rgb, vmin: f64, vmax: f64) -> Self {
        Self { low, high, vmin, vmax }
    }

    /// Yellow for the least visited, red for the most visited
    pub fn visits(min_count: u32, max_count: u32) -> Self {
        Self::new(Rgb::YELLOW, Rgb::RED, min_count as f64, max_count as f64)
    }

    pub fn color_at(&self, value: f64) -> Rgb {
        if value <= self.vmin || self.vmax <= self.vmin {
            return self.low;
        }
        if value >= self.vmax {
            return self.high;
        }

        let t = (value - self.vmin) / (self.vmax - self.vmin);
        let lo = self.low.channels();
        let hi = self.high.channels();
        Rgb::from_channels([0, 1, 2].map(|i| lo[i] + t * (hi[i] - lo[i])))
    }

    /// `n` evenly spaced values from `vmin` to `vmax`, both ends included
    pub fn samples(&self, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![self.vmin],
            _ => {
                let step = (self.vmax - self.vmin) / (n - 1) as f64;
                (0..n)
                    .map(|i| if i == n - 1 { self.vmax } else { self.vmin + step * i as f64 })
                    .collect()
            }
        }
    }
}
