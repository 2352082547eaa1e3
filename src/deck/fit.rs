//! Shrink-to-fit text sizing and contain-fit image placement.
//!
//! Text is measured with a fixed average glyph advance rather than real font
//! metrics, so the result is deterministic and independent of installed fonts.
//! The serializer additionally marks every text body as auto-fit, letting a
//! renderer with real metrics shrink further if it disagrees.

use super::model::{Rect, TextFit};
use crate::common::unit::emu_to_pt_f64;

/// Left and right text inset, in EMU.
pub const TEXT_INSET_X: i64 = 91_440;
/// Top and bottom text inset, in EMU.
pub const TEXT_INSET_Y: i64 = 45_720;

/// Bottom of the step ladder, in points. Below it the solver bisects.
pub const LADDER_FLOOR: f64 = 1.0;

/// Average glyph advance as a fraction of the font size.
const GLYPH_ADVANCE_EM: f64 = 0.55;
/// Baseline-to-baseline distance as a fraction of the font size.
const LINE_PITCH_EM: f64 = 1.2;

const COARSE_STEP: f64 = 0.5;
const FINE_STEP: f64 = 0.25;
/// Below this size the solver switches to the fine step.
const FINE_BELOW: f64 = 6.0;

/// Halvings tried under the ladder floor to find any size that fits.
const MAX_HALVINGS: u32 = 64;
/// Bisection rounds between the largest known fit and the smallest known miss.
const BISECT_ROUNDS: u32 = 32;

/// Find the largest size not above `requested` at which `paragraphs` fit in
/// `frame`.
///
/// `marker_indent` is the EMU width the writer reserves at the start of every
/// line for a bullet or a list number, see [`ListStyle::marker_indent`].
/// Sizes are tried in 0.5pt steps down to 6pt and 0.25pt steps down to
/// [`LADDER_FLOOR`]; text that still does not fit is solved for by bisection
/// below the floor. `overflow` is set only for frames with no room inside the
/// insets and the marker indent.
///
/// [`ListStyle::marker_indent`]: super::model::ListStyle::marker_indent
pub fn fit_text(paragraphs: &[String], frame: &Rect, requested: f64, marker_indent: i64) -> TextFit {
    if available_points(frame, marker_indent).is_none() {
        tracing::trace!(frame = ?frame, marker_indent, "no room for text inside the frame");
        return TextFit {
            effective_font_size: requested,
            line_count: 0,
            overflow: true,
        };
    }

    let mut size = requested;
    loop {
        if let Some(line_count) = measure(paragraphs, frame, size, marker_indent) {
            return fitted(size, line_count);
        }
        if size <= LADDER_FLOOR {
            break;
        }
        let step = if size > FINE_BELOW { COARSE_STEP } else { FINE_STEP };
        size = (size - step).max(LADDER_FLOOR);
    }

    // `miss` never fits, `best` always does.
    let mut miss = size;
    let mut best = None;
    for _ in 0..MAX_HALVINGS {
        let candidate = miss / 2.0;
        if let Some(line_count) = measure(paragraphs, frame, candidate, marker_indent) {
            best = Some((candidate, line_count));
            break;
        }
        miss = candidate;
    }
    let Some((mut best, mut line_count)) = best else {
        tracing::warn!(frame = ?frame, smallest = miss, "text does not fit at any size");
        return TextFit {
            effective_font_size: miss,
            line_count: line_count_at(paragraphs, frame, miss, marker_indent).unwrap_or(0),
            overflow: true,
        };
    };
    for _ in 0..BISECT_ROUNDS {
        let mid = (best + miss) / 2.0;
        match measure(paragraphs, frame, mid, marker_indent) {
            Some(lines) => {
                best = mid;
                line_count = lines;
            },
            None => miss = mid,
        }
    }

    tracing::debug!(size = best, lines = line_count, "text shrunk below the ladder floor");
    fitted(best, line_count)
}

fn fitted(effective_font_size: f64, line_count: usize) -> TextFit {
    TextFit {
        effective_font_size,
        line_count,
        overflow: false,
    }
}

/// Line count when the text fits at `size`, `None` otherwise.
fn measure(paragraphs: &[String], frame: &Rect, size: f64, marker_indent: i64) -> Option<usize> {
    let (_, avail_height) = available_points(frame, marker_indent)?;
    let lines = line_count_at(paragraphs, frame, size, marker_indent)?;
    (lines as f64 * LINE_PITCH_EM * size <= avail_height).then_some(lines)
}

/// Wrapped line count at `size`; `None` when not one glyph fits beside the marker.
fn line_count_at(paragraphs: &[String], frame: &Rect, size: f64, marker_indent: i64) -> Option<usize> {
    let (avail_width, _) = available_points(frame, marker_indent)?;
    let columns = (avail_width / (GLYPH_ADVANCE_EM * size)).floor() as usize;
    if columns == 0 {
        return None;
    }
    Some(paragraphs.iter().map(|p| wrapped_lines(p, columns)).sum())
}

/// Width beside the marker and height inside the insets, in points.
fn available_points(frame: &Rect, marker_indent: i64) -> Option<(f64, f64)> {
    let width = frame.width - 2 * TEXT_INSET_X - marker_indent;
    let height = frame.height - 2 * TEXT_INSET_Y;
    (width > 0 && height > 0).then(|| (emu_to_pt_f64(width), emu_to_pt_f64(height)))
}

/// Greedy word wrap of one paragraph into lines of `width` columns.
///
/// Explicit newlines start a new line; words longer than a line are broken.
/// An empty paragraph still occupies one line.
pub(crate) fn wrapped_lines(text: &str, width: usize) -> usize {
    debug_assert!(width > 0);
    let mut total = 0;
    for line in text.split('\n') {
        let mut lines = 1;
        let mut used = 0;
        for word in line.split_whitespace() {
            let len = word.chars().count();
            let needed = if used == 0 { len } else { used + 1 + len };
            if needed <= width {
                used = needed;
                continue;
            }
            if used > 0 {
                lines += 1;
            }
            if len > width {
                lines += (len - 1) / width;
                used = len - (len - 1) / width * width;
            } else {
                used = len;
            }
        }
        total += lines;
    }
    total
}

/// Largest rectangle with the image's aspect ratio that fits inside `frame`,
/// centred in it.
pub fn contain(frame: &Rect, (width_px, height_px): (u32, u32)) -> Rect {
    debug_assert!(width_px > 0 && height_px > 0);
    let scale = f64::min(
        frame.width as f64 / width_px as f64,
        frame.height as f64 / height_px as f64,
    );
    let width = ((width_px as f64 * scale).round() as i64).clamp(1, frame.width);
    let height = ((height_px as f64 * scale).round() as i64).clamp(1, frame.height);

    Rect::new(
        frame.x + (frame.width - width) / 2,
        frame.y + (frame.height - height) / 2,
        width,
        height,
    )
}
