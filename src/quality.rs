//! Phred+33 quality scores mapped onto a red → green 256-color gradient.
//!
//! | score   | colour                                   |
//! |---------|------------------------------------------|
//! | < 10    | red shades `196 + min(score, 5)`         |
//! | 10..20  | orange → yellow ramp, clamped at the end |
//! | 20..30  | yellow-green ramp, clamped at the end    |
//! | 30..35  | bright green (82)                        |
//! | 35..40  | pure green (46)                          |
//! | >= 40   | cyan-green (48)                          |

use ansi_term::Colour;

/// ASCII offset of the Phred+33 encoding.
pub const PHRED_OFFSET: i32 = 33;

const LOW_RAMP: [u8; 10] = [208, 214, 220, 226, 227, 228, 229, 230, 190, 191];
const MEDIUM_RAMP: [u8; 10] = [192, 149, 150, 151, 152, 114, 115, 116, 84, 85];

enum Shade {
    /// `base + min(score - start, max)`
    Steps { base: u8, max: i32 },
    Ramp(&'static [u8]),
    Solid(u8),
}

/// `(upper bound exclusive, lower bound, shade)`, scanned in order.
const BANDS: [(i32, i32, Shade); 5] = [
    (10, 0, Shade::Steps { base: 196, max: 5 }),
    (20, 10, Shade::Ramp(&LOW_RAMP)),
    (30, 20, Shade::Ramp(&MEDIUM_RAMP)),
    (35, 30, Shade::Solid(82)),
    (40, 35, Shade::Solid(46)),
];

const EXCELLENT: u8 = 48;

/// Phred score of one quality character.
#[inline]
pub fn phred_score(c: char) -> i32 {
    u32::from(c) as i32 - PHRED_OFFSET
}

/// Colour for a Phred score. Total: out-of-range scores clamp to the nearest band.
pub fn quality_color(score: i32) -> Colour {
    for (upper, lower, shade) in &BANDS {
        if score < *upper {
            let offset = (score - lower).max(0);
            let code = match *shade {
                Shade::Steps { base, max } => base + offset.min(max) as u8,
                Shade::Ramp(ramp) => ramp[(offset as usize).min(ramp.len() - 1)],
                Shade::Solid(code) => code,
            };
            return Colour::Fixed(code);
        }
    }
    Colour::Fixed(EXCELLENT)
}
