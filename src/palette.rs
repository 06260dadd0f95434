//! Fixed 256-color palettes.

use ansi_term::{Colour, Style};

/// Header fields cycle through these by position.
pub const HEADER_PALETTE: [Colour; 8] = [
    Colour::Fixed(39),  // bright blue
    Colour::Fixed(208), // orange
    Colour::Fixed(170), // pink
    Colour::Fixed(114), // light green
    Colour::Fixed(220), // yellow
    Colour::Fixed(147), // light purple
    Colour::Fixed(87),  // cyan
    Colour::Fixed(203), // coral
];

/// `ESC[0m`, also used as the token for bases without a color.
pub const RESET: &str = "\x1b[0m";

#[inline]
pub fn dim() -> Style {
    Style::new().dimmed()
}

#[inline]
pub fn bold() -> Style {
    Style::new().bold()
}

/// Header color for field number `index`, wrapping around the palette.
#[inline]
pub fn header_colour(index: usize) -> Colour {
    HEADER_PALETTE[index % HEADER_PALETTE.len()]
}

/// Base color, case-insensitive. `None` for anything outside `ATGCN`.
#[inline]
pub fn base_colour(base: char) -> Option<Colour> {
    match base.to_ascii_uppercase() {
        'A' => Some(Colour::Fixed(46)),
        'T' => Some(Colour::Fixed(196)),
        'G' => Some(Colour::Fixed(226)),
        'C' => Some(Colour::Fixed(33)),
        'N' => Some(Colour::Fixed(240)),
        _ => None,
    }
}
