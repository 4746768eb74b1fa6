//! Glyph atlas for the ASCII pass, rasterized with the browser's 2D canvas.

use crate::constants::{ATLAS_CELL_H, ATLAS_CELL_W, ATLAS_FONT};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Single-channel coverage, one `ATLAS_CELL_W x ATLAS_CELL_H` slot per glyph.
pub(crate) struct GlyphAtlas {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) coverage: Vec<u8>,
}

pub(crate) fn rasterize(ramp: &str) -> anyhow::Result<GlyphAtlas> {
    let glyphs: Vec<char> = ramp.chars().collect();
    let width = ATLAS_CELL_W * glyphs.len().max(1) as u32;
    let height = ATLAS_CELL_H;

    let document = crate::dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    ctx.set_fill_style_str("#000");
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    ctx.set_fill_style_str("#fff");
    ctx.set_font(ATLAS_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let mut buf = [0u8; 4];
    for (i, c) in glyphs.iter().enumerate() {
        let x = (i as f64 + 0.5) * ATLAS_CELL_W as f64;
        let y = 0.5 * ATLAS_CELL_H as f64;
        ctx.fill_text(c.encode_utf8(&mut buf), x, y)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }

    let image = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let coverage = image.data().0.chunks_exact(4).map(|px| px[0]).collect();
    Ok(GlyphAtlas {
        width,
        height,
        coverage,
    })
}
