//! Character asset loading: fetch, parse, bind the head, publish.

use std::cell::RefCell;
use std::rc::Rc;

use app_core::{parse_glb, CharacterScene, HEAD_NODE_NAME, MODEL_DROP};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::constants::MODEL_URL;

/// Slot the frame loop reads the model out of once loading resolves.
pub type ModelSlot = Rc<RefCell<Option<CharacterScene>>>;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: {e:?}"))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {url}: not a Response: {e:?}"))?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: http {}", resp.status());
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("fetch {url}: {e:?}"))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("fetch {url}: {e:?}"))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch and parse the character, then publish it for the frame loop.
///
/// The rest of the scene keeps rendering until this resolves; on failure
/// the viewer simply runs without the model.
pub async fn load_character(slot: ModelSlot) {
    let bytes = match fetch_bytes(MODEL_URL).await {
        Ok(b) => b,
        Err(e) => {
            log::error!("model load error: {e}");
            return;
        }
    };
    let mut scene = match parse_glb(&bytes) {
        Ok(s) => s,
        Err(e) => {
            log::error!("model parse error: {e}");
            return;
        }
    };
    scene.root_offset = MODEL_DROP;
    scene.bind_head(HEAD_NODE_NAME);
    log::info!(
        "model loaded: {} nodes, {} meshes, head {}",
        scene.nodes.len(),
        scene.meshes.len(),
        if scene.head.is_some() { "bound" } else { "missing" }
    );
    *slot.borrow_mut() = Some(scene);
}
