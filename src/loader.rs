use ascii_scene_core::{glb, MeshCache, MeshData};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

async fn load_mesh(url: &str) -> anyhow::Result<MeshData> {
    let bytes = fetch_bytes(url).await?;
    Ok(glb::load_glb(&bytes)?)
}

/// Start loading `asset` unless the cache already knows it.
///
/// The frame loop calls this every tick for the selected mesh; while the
/// entry is pending nothing is drawn.
pub fn ensure_requested(cache: &Rc<RefCell<MeshCache>>, asset: &str) {
    let Some(ticket) = cache.borrow_mut().request(asset) else {
        return;
    };
    log::info!("[loader] fetching {}", asset);
    let cache = cache.clone();
    let asset = asset.to_string();
    spawn_local(async move {
        let result = load_mesh(&asset).await.map_err(|e| {
            log::error!("[loader] {}: {:#}", asset, e);
            e.to_string()
        });
        if let Ok(mesh) = &result {
            log::info!(
                "[loader] {} ready ({} triangles)",
                asset,
                mesh.triangle_count()
            );
        }
        cache.borrow_mut().complete(&asset, ticket, result);
    });
}
