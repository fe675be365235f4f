// Copyright 2025 the DistViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series color helpers.
//!
//! Multi-series distribution charts need one color per series; these
//! helpers keep that assignment deterministic across runs so re-rendered
//! reports stay comparable.

extern crate alloc;

use alloc::vec::Vec;

use peniko::color::palette::css;
use peniko::{Brush, Color};

/// Returns a categorical fill palette for `count` series.
///
/// Colors are taken from named CSS colors and repeat if `count` exceeds the
/// palette length.
pub fn series_fills(count: usize) -> Vec<Brush> {
    const PALETTE: [Color; 8] = [
        css::STEEL_BLUE,
        css::DARK_ORANGE,
        css::SEA_GREEN,
        css::INDIAN_RED,
        css::DARK_GOLDENROD,
        css::MEDIUM_PURPLE,
        css::TEAL,
        css::ORCHID,
    ];

    (0..count)
        .map(|i| Brush::Solid(PALETTE[i % PALETTE.len()]))
        .collect()
}

/// Derives a stable color from a hash value (e.g. of a series key).
///
/// Each channel is kept inside 32..224 so the result stays readable on
/// both white and black backgrounds.
pub fn hash_color(hash: u64) -> Color {
    // Spread low-entropy inputs (small integers, sequential ids) across
    // the byte lanes before slicing channels out.
    let mixed = hash.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let channel = |shift: u32| {
        let byte = (mixed >> shift) & 0xFF;
        #[allow(clippy::cast_possible_truncation, reason = "masked to one byte")]
        {
            32 + (byte % 192) as u8
        }
    };
    Color::from_rgb8(channel(40), channel(24), channel(8))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn fills_repeat_past_the_palette_length() {
        let fills = series_fills(11);
        assert_eq!(fills.len(), 11);
        assert_eq!(fills[0], fills[8]);
        assert_ne!(fills[0], fills[1]);
    }

    #[test]
    fn hash_colors_are_deterministic_and_spread() {
        assert_eq!(hash_color(42), hash_color(42));
        assert_ne!(hash_color(1), hash_color(2));
    }

    #[test]
    fn hash_color_channels_avoid_the_extremes() {
        for seed in 0..64_u64 {
            let rgba = hash_color(seed).to_rgba8();
            for c in [rgba.r, rgba.g, rgba.b] {
                assert!((32..224).contains(&c), "channel {c} out of range");
            }
        }
    }
}
