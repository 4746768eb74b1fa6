//! Extruded block-letter geometry.
//!
//! Glyphs come from a 5x7 bitmap font; every lit cell becomes a box of
//! `size / 7` per side extruded to `depth`. Faces between neighbouring lit
//! cells are culled so solid strokes stay cheap. The origin is the
//! baseline-left corner of the first glyph; text grows towards +x, +y and +z.

use crate::mesh::{MeshData, Vertex};

pub const GLYPH_COLS: usize = 5;
pub const GLYPH_ROWS: usize = 7;
/// Horizontal advance in cells, including one blank column.
pub const GLYPH_ADVANCE: usize = GLYPH_COLS + 1;

/// Seven rows, top first. Bit 4 is the leftmost column.
type Glyph = [u8; GLYPH_ROWS];

const BLANK: Glyph = [0; GLYPH_ROWS];

fn glyph(c: char) -> Option<Glyph> {
    let g = match c.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ' ' => BLANK,
        _ => return None,
    };
    Some(g)
}

#[inline]
fn lit(g: &Glyph, col: isize, row: isize) -> bool {
    if col < 0 || row < 0 || col >= GLYPH_COLS as isize || row >= GLYPH_ROWS as isize {
        return false;
    }
    g[row as usize] & (0x10 >> col) != 0
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Glyph height in world units.
    pub size: f32,
    /// Extrusion along +z.
    pub depth: f32,
    pub color: [f32; 4],
}

/// Build extruded geometry for `text`. Characters without a glyph advance
/// like a space.
pub fn build_text_mesh(text: &str, style: TextStyle) -> MeshData {
    let cell = style.size / GLYPH_ROWS as f32;
    let mut mesh = MeshData::default();
    for (i, c) in text.chars().enumerate() {
        let g = glyph(c).unwrap_or(BLANK);
        let x0 = (i * GLYPH_ADVANCE) as f32 * cell;
        for row in 0..GLYPH_ROWS as isize {
            for col in 0..GLYPH_COLS as isize {
                if !lit(&g, col, row) {
                    continue;
                }
                let min = [
                    x0 + col as f32 * cell,
                    (GLYPH_ROWS as isize - 1 - row) as f32 * cell,
                    0.0,
                ];
                let max = [min[0] + cell, min[1] + cell, style.depth];
                // rows grow downwards in the bitmap, so "up" is row - 1
                let open = [
                    !lit(&g, col - 1, row),
                    !lit(&g, col + 1, row),
                    !lit(&g, col, row + 1),
                    !lit(&g, col, row - 1),
                    true,
                    true,
                ];
                push_box(&mut mesh, min, max, open, style.color);
            }
        }
    }
    mesh
}

/// Width of `text` in world units at `size`, excluding the trailing gap.
pub fn text_width(text: &str, size: f32) -> f32 {
    let n = text.chars().count();
    if n == 0 {
        return 0.0;
    }
    let cells = n * GLYPH_ADVANCE - 1;
    cells as f32 * size / GLYPH_ROWS as f32
}

/// Faces in order -x, +x, -y, +y, -z, +z; `open[i]` keeps face i.
fn push_box(mesh: &mut MeshData, min: [f32; 3], max: [f32; 3], open: [bool; 6], color: [f32; 4]) {
    let [x0, y0, z0] = min;
    let [x1, y1, z1] = max;
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        ([-1.0, 0.0, 0.0], [[x0, y0, z0], [x0, y0, z1], [x0, y1, z1], [x0, y1, z0]]),
        ([1.0, 0.0, 0.0], [[x1, y0, z1], [x1, y0, z0], [x1, y1, z0], [x1, y1, z1]]),
        ([0.0, -1.0, 0.0], [[x0, y0, z0], [x1, y0, z0], [x1, y0, z1], [x0, y0, z1]]),
        ([0.0, 1.0, 0.0], [[x0, y1, z1], [x1, y1, z1], [x1, y1, z0], [x0, y1, z0]]),
        ([0.0, 0.0, -1.0], [[x1, y0, z0], [x0, y0, z0], [x0, y1, z0], [x1, y1, z0]]),
        ([0.0, 0.0, 1.0], [[x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1]]),
    ];
    for ((normal, corners), keep) in faces.into_iter().zip(open) {
        if !keep {
            continue;
        }
        let base = mesh.vertices.len() as u32;
        mesh.vertices.extend(corners.map(|position| Vertex {
            position,
            normal,
            color,
        }));
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const STYLE: TextStyle = TextStyle {
        size: 0.7,
        depth: 0.2,
        color: [1.0; 4],
    };

    #[test]
    fn dot_glyph_culls_shared_faces() {
        let m = build_text_mesh(".", STYLE);
        // '.' is a 2x2 block: 4 voxels, 24 faces, 8 shared faces culled
        assert_eq!(m.vertices.len(), 16 * 4);
        assert_eq!(m.indices.len(), 16 * 6);
    }

    #[test]
    fn dash_culls_inner_faces() {
        let m = build_text_mesh("-", STYLE);
        // five voxels in a row: 30 faces minus 4 shared pairs
        assert_eq!(m.vertices.len(), 22 * 4);
        assert_eq!(m.indices.len(), 22 * 6);
    }

    #[test]
    fn blank_and_unknown_characters_emit_nothing() {
        assert!(build_text_mesh("  ", STYLE).is_empty());
        assert!(build_text_mesh("~", STYLE).is_empty());
    }

    #[test]
    fn lowercase_matches_uppercase() {
        assert_eq!(build_text_mesh("xen", STYLE), build_text_mesh("XEN", STYLE));
    }

    #[test]
    fn bounds_match_size_depth_and_width() {
        let m = build_text_mesh("XENSILICO", STYLE);
        let (lo, hi) = m.bounds().unwrap();
        assert!((lo - Vec3::ZERO).length() < 1e-5);
        assert!((hi.y - 0.7).abs() < 1e-5);
        assert!((hi.z - 0.2).abs() < 1e-5);
        assert!((hi.x - text_width("XENSILICO", 0.7)).abs() < 1e-4);
    }

    #[test]
    fn face_winding_matches_normals() {
        let m = build_text_mesh("I", STYLE);
        for tri in m.indices.chunks_exact(3) {
            let p = |i: u32| Vec3::from_array(m.vertices[i as usize].position);
            let geometric = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
            let declared = Vec3::from_array(m.vertices[tri[0] as usize].normal);
            assert!(geometric.dot(declared) > 0.0);
        }
    }
}
