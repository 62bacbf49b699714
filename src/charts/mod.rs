use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

use plotters::style::FontStyle;

use crate::error::PitchError;

pub mod bar;
pub mod radar;

pub const CHART_SIZE: (u32, u32) = (640, 480);
pub const FONT_FAMILY: &str = "sans-serif";
pub const SCORE_MAX: f64 = 100.0;

/// Sans fonts searched when no `--font` was given, in preference order.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/TTF/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/local/share/fonts/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static TEXT_ENABLED: AtomicBool = AtomicBool::new(false);
static SYSTEM_FONT_SEARCH: Once = Once::new();
static MISSING_FONT_WARNING: Once = Once::new();

/// Registers a TrueType font for chart titles and labels.
pub fn register_chart_font(path: &Path) -> Result<(), PitchError> {
    let bytes = std::fs::read(path)
        .map_err(|e| PitchError::io(format!("reading font {}", path.display()), e))?;
    // The registry requires 'static data; fonts are registered once per process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    plotters::style::register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| PitchError::Font(format!("{} is not a usable font", path.display())))?;
    TEXT_ENABLED.store(true, Ordering::SeqCst);
    tracing::debug!(font = %path.display(), "registered chart font");
    Ok(())
}

/// Paths from `candidates` that exist as regular files, in order.
pub fn existing_fonts<'a>(candidates: &[&'a str]) -> Vec<&'a Path> {
    candidates
        .iter()
        .map(|s| Path::new(*s))
        .filter(|p| p.is_file())
        .collect()
}

fn register_system_font() {
    for path in existing_fonts(SYSTEM_FONT_CANDIDATES) {
        match register_chart_font(path) {
            Ok(()) => return,
            Err(err) => tracing::debug!(error = %err, "skipping system font"),
        }
    }
}

/// True once a font is available. Falls back to the first usable system
/// font the first time it is asked; charts omit text only if none exists.
pub fn text_enabled() -> bool {
    if !TEXT_ENABLED.load(Ordering::SeqCst) {
        SYSTEM_FONT_SEARCH.call_once(register_system_font);
    }
    let enabled = TEXT_ENABLED.load(Ordering::SeqCst);
    if !enabled {
        MISSING_FONT_WARNING.call_once(|| {
            tracing::warn!(
                "no usable chart font found (use --font); charts are rendered without text"
            );
        });
    }
    enabled
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/fonts.rs"]
mod tests;
