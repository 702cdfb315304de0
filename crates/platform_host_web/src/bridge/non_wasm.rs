fn unsupported() -> String {
    "Browser navigation is only available when compiled for wasm32".to_string()
}

pub async fn navigate_to(_url: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn viewport_size() -> Option<(f64, f64)> {
    None
}
