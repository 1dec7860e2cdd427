//! Font registration for plotters' ab_glyph text backend.

use plotters::style::FontStyle;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info, warn};

use crate::ChartError;

/// Family name every text style in the chart uses.
pub const FONT_FAMILY: &str = "sans-serif";

/// Well-known TrueType fonts with Latin Extended coverage, tried in order.
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static REGISTERED: OnceLock<PathBuf> = OnceLock::new();

/// Registers the chart font once per process and returns the file it came from.
///
/// `preferred` is tried before [`FONT_CANDIDATES`]. Later calls return the first registered
/// font regardless of `preferred`.
pub fn register_font(preferred: Option<&Path>) -> Result<PathBuf, ChartError> {
    if let Some(path) = REGISTERED.get() {
        return Ok(path.clone());
    }

    let candidates: Vec<PathBuf> = preferred
        .map(Path::to_path_buf)
        .into_iter()
        .chain(FONT_CANDIDATES.iter().map(PathBuf::from))
        .collect();

    for path in &candidates {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                if preferred == Some(path.as_path()) {
                    warn!(path = %path.display(), error = %e, "Configured chart font unreadable");
                }
                continue;
            }
        };
        // plotters keeps a 'static reference; registration happens at most once per font file.
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        match plotters::style::register_font(FONT_FAMILY, FontStyle::Normal, bytes) {
            Ok(()) => {
                info!(path = %path.display(), "Chart font registered");
                return Ok(REGISTERED.get_or_init(|| path.clone()).clone());
            }
            Err(_) => debug!(path = %path.display(), "Not a usable TrueType font"),
        }
    }

    Err(ChartError::FontUnavailable(
        candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    ))
}
