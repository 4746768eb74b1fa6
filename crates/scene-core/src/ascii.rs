//! Brightness-to-glyph mapping shared by the GPU effect and host tests.
//!
//! A cell's brightness `b` selects glyph `floor((1 - b) * (n - 1))` of the
//! ramp, so bright cells get the sparse end of the ramp. `invert` mirrors the
//! index. Fully transparent samples (nothing drawn) count as brightness 1.

use crate::constants::LUMA_WEIGHTS;

/// Character grid covering a viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellGrid {
    pub cols: u32,
    pub rows: u32,
}

impl CellGrid {
    /// Cells are twice as tall as they are wide, like a monospace glyph.
    pub fn for_viewport(css_width: f32, css_height: f32, resolution: f32) -> Self {
        let cols = (css_width.max(0.0) * resolution).floor() as u32;
        let rows = (css_height.max(0.0) * resolution * 0.5).floor() as u32;
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }
}

/// Brightness of one RGBA sample in 0..1.
#[inline]
pub fn sample_brightness(rgba: [f32; 4]) -> f32 {
    if rgba[3] <= 0.0 {
        return 1.0;
    }
    (LUMA_WEIGHTS[0] * rgba[0] + LUMA_WEIGHTS[1] * rgba[1] + LUMA_WEIGHTS[2] * rgba[2])
        .clamp(0.0, 1.0)
}

/// Mean brightness of the samples taken inside one cell.
pub fn cell_brightness(samples: &[[f32; 4]]) -> f32 {
    if samples.is_empty() {
        return 1.0;
    }
    samples.iter().copied().map(sample_brightness).sum::<f32>() / samples.len() as f32
}

#[inline]
pub fn glyph_index(brightness: f32, glyph_count: usize, invert: bool) -> usize {
    if glyph_count == 0 {
        return 0;
    }
    let last = glyph_count - 1;
    let b = brightness.clamp(0.0, 1.0);
    let idx = (((1.0 - b) * last as f32).floor() as usize).min(last);
    if invert {
        last - idx
    } else {
        idx
    }
}

pub fn glyph_for(brightness: f32, ramp: &str, invert: bool) -> Option<char> {
    let n = ramp.chars().count();
    ramp.chars().nth(glyph_index(brightness, n, invert))
}

/// Render a brightness field (row-major, `grid.cols * grid.rows`) as text lines.
pub fn render_text(brightness: &[f32], grid: CellGrid, ramp: &str, invert: bool) -> String {
    let glyphs: Vec<char> = ramp.chars().collect();
    let mut out = String::with_capacity(((grid.cols + 1) * grid.rows) as usize);
    for row in brightness.chunks(grid.cols as usize).take(grid.rows as usize) {
        for &b in row {
            if let Some(&c) = glyphs.get(glyph_index(b, glyphs.len(), invert)) {
                out.push(c);
            }
        }
        out.push('\n');
    }
    out
}
