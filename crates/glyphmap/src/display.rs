//! Terminal output for resolved maps
//!
//! Prints each row of the map with the tile colors as xterm 256-color
//! foregrounds. Color index 0 is printed unstyled.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use gm_core::{Coord, GameMap, GlyphMode};

/// Whether the locale or terminal named by `lookup` handles UTF-8.
///
/// `lookup` maps an environment variable name to its value.
pub fn supports_unicode_with<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    let vars = ["LC_ALL", "LC_CTYPE", "LANG"];
    for var in vars {
        if let Some(val) = lookup(var) {
            let val = val.to_uppercase();
            if val.contains("UTF-8") || val.contains("UTF8") {
                return true;
            }
        }
    }

    if let Some(term) = lookup("TERM") {
        if matches!(term.as_str(), "xterm-256color" | "alacritty" | "kitty" | "iterm") {
            return true;
        }
    }

    false
}

/// Detect if the terminal supports Unicode/UTF-8.
pub fn supports_unicode() -> bool {
    supports_unicode_with(|var| std::env::var(var).ok())
}

/// Glyph set to draw with, given what the terminal can show
pub fn mode_for(requested: GlyphMode, unicode: bool) -> GlyphMode {
    if requested == GlyphMode::Fancy && !unicode {
        return GlyphMode::Classic;
    }
    requested
}

/// Downgrade to classic glyphs when the terminal can't show box drawing
pub fn effective_mode(requested: GlyphMode) -> GlyphMode {
    let mode = mode_for(requested, supports_unicode());
    if mode != requested {
        log::warn!("terminal does not advertise UTF-8, using classic glyphs");
    }
    mode
}

/// Write the map, one line per row, trailing blanks trimmed.
pub fn write_map<W: Write>(
    out: &mut W,
    map: &GameMap,
    mode: GlyphMode,
    color: bool,
) -> io::Result<()> {
    if !color {
        for row in map.render_rows(mode) {
            writeln!(out, "{}", row)?;
        }
        return out.flush();
    }

    let Some((min, max)) = map.bounds() else {
        return Ok(());
    };

    for row in min.row..=max.row {
        // stop at the last non-blank cell, like render_rows
        let last = (min.col..=max.col)
            .rev()
            .find(|&col| map.glyph_at(Coord::new(row, col), mode) != ' ')
            .unwrap_or(min.col - 1);

        for col in min.col..=last {
            let pos = Coord::new(row, col);
            let glyph = map.glyph_at(pos, mode);
            let tile_color = map.tile_at(pos).map(|t| t.color()).unwrap_or(0);

            if tile_color == 0 || glyph == ' ' {
                queue!(out, Print(glyph))?;
            } else {
                queue!(
                    out,
                    SetForegroundColor(Color::AnsiValue(tile_color)),
                    Print(glyph),
                    ResetColor
                )?;
            }
        }
        queue!(out, Print('\n'))?;
    }

    out.flush()
}
