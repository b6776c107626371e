use anyhow::*;
use web_sys::window;

/// Token the server renders into `<meta name="csrf-token">`.
pub fn csrf_token_from_document() -> Result<String, Error> {
    let token = window()
        .ok_or(anyhow!("window not found"))?
        .document()
        .ok_or(anyhow!("document not found"))?
        .query_selector(r#"meta[name="csrf-token"]"#)
        .map_err(|e| anyhow!("query csrf meta: {e:?}"))?
        .ok_or(anyhow!("csrf meta tag not found"))?
        .get_attribute("content")
        .unwrap_or_default();
    Ok(token)
}
