//! Terminal code points for the alternate character set
//!
//! These are curses `ACS_*` values: the VT100 line-drawing character OR'd
//! with `A_ALTCHARSET` (0x400000).

pub const A_ALTCHARSET: u32 = 0x0040_0000;

pub const ACS_CKBOARD: u32 = A_ALTCHARSET | 'a' as u32; // ▒
pub const ACS_LRCORNER: u32 = A_ALTCHARSET | 'j' as u32; // ┘
pub const ACS_URCORNER: u32 = A_ALTCHARSET | 'k' as u32; // ┐
pub const ACS_ULCORNER: u32 = A_ALTCHARSET | 'l' as u32; // ┌
pub const ACS_LLCORNER: u32 = A_ALTCHARSET | 'm' as u32; // └
pub const ACS_PLUS: u32 = A_ALTCHARSET | 'n' as u32; // ┼
pub const ACS_HLINE: u32 = A_ALTCHARSET | 'q' as u32; // ─
pub const ACS_LTEE: u32 = A_ALTCHARSET | 't' as u32; // ├
pub const ACS_RTEE: u32 = A_ALTCHARSET | 'u' as u32; // ┤
pub const ACS_BTEE: u32 = A_ALTCHARSET | 'v' as u32; // ┴
pub const ACS_TTEE: u32 = A_ALTCHARSET | 'w' as u32; // ┬
pub const ACS_VLINE: u32 = A_ALTCHARSET | 'x' as u32; // │

/// Block glyph shared by doors and water
pub const BLOCK_GLYPH: char = '▒';
