use wasm_bindgen::JsValue;

fn js_error(context: &str, err: JsValue) -> String {
    let detail = err
        .as_string()
        .or_else(|| js_sys::JSON::stringify(&err).ok().map(String::from))
        .unwrap_or_else(|| "unknown error".to_string());
    format!("{context}: {detail}")
}

pub async fn navigate_to(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    window
        .location()
        .set_href(url)
        .map_err(|err| js_error("failed to set location", err))?;
    // Yield once so the caller's spawn_local task completes after navigation is queued.
    wasm_bindgen_futures::JsFuture::from(js_sys::Promise::resolve(&JsValue::UNDEFINED))
        .await
        .map_err(|err| js_error("navigation task failed", err))?;
    Ok(())
}

pub fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}
