use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const KNOWN_APP_IDS: [&str; 5] = ["projects", "about", "contact", "misc", "spotify"];
const RESIZE_FLOOR_WIDTH: i32 = 400;
const RESIZE_FLOOR_HEIGHT: i32 = 300;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowDefaults {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    schema_version: u32,
    app_id: String,
    display_name: String,
    window_title: String,
    desktop_icon_label: String,
    taskbar_label: String,
    icon: String,
    show_on_desktop: bool,
    show_in_taskbar: bool,
    desktop_icon_slot: u8,
    window_defaults: WindowDefaults,
}

fn app_manifest_paths(root: &Path) -> Vec<PathBuf> {
    let app_crates = ["projects", "about", "contact"].iter().map(|name| {
        root.join("..")
            .join("apps")
            .join(name)
            .join("app.manifest.toml")
    });
    let builtin = ["misc", "spotify"].iter().map(|name| {
        root.join("builtin_apps")
            .join(name)
            .join("app.manifest.toml")
    });
    app_crates.chain(builtin).collect()
}

fn validate(manifest: &AppManifest, path: &Path) {
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }
    if !KNOWN_APP_IDS.contains(&manifest.app_id.as_str()) {
        panic!(
            "unknown app_id `{}` in {}: expected one of {:?}",
            manifest.app_id,
            path.display(),
            KNOWN_APP_IDS
        );
    }
    let defaults = &manifest.window_defaults;
    if defaults.width <= RESIZE_FLOOR_WIDTH || defaults.height <= RESIZE_FLOOR_HEIGHT {
        panic!(
            "window_defaults in {} must exceed {}x{}, found {}x{}",
            path.display(),
            RESIZE_FLOOR_WIDTH,
            RESIZE_FLOOR_HEIGHT,
            defaults.width,
            defaults.height
        );
    }
    if defaults.x < 0 || defaults.y < 0 {
        panic!(
            "window_defaults position in {} must be non-negative",
            path.display()
        );
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut manifests = Vec::<AppManifest>::new();
    let mut seen_ids = BTreeSet::new();
    let mut seen_slots = BTreeSet::new();

    for path in app_manifest_paths(&crate_root) {
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let manifest: AppManifest = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        validate(&manifest, &path);
        if !seen_ids.insert(manifest.app_id.clone()) {
            panic!("duplicate app_id `{}` in {}", manifest.app_id, path.display());
        }
        if manifest.show_on_desktop && !seen_slots.insert(manifest.desktop_icon_slot) {
            panic!(
                "desktop_icon_slot {} in {} is already taken",
                manifest.desktop_icon_slot,
                path.display()
            );
        }
        manifests.push(manifest);
    }

    manifests.sort_by(|a, b| {
        a.desktop_icon_slot
            .cmp(&b.desktop_icon_slot)
            .then_with(|| a.app_id.cmp(&b.app_id))
    });
    let json = serde_json::to_string_pretty(&manifests).expect("serialize app manifest catalog");
    let generated = format!(
        "/// Build-time generated app manifest catalog JSON.\n\
pub const APP_MANIFEST_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
