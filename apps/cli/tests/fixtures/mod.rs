use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};

#[must_use]
pub fn post() -> Value {
    json!({
        "id": 42,
        "description": "Harbour at dawn",
        "tags": [{ "value": "sea" }],
        "photo": {
            "thumbnails": {
                "medium": { "url": "/m.jpg", "width": 500, "height": 333 },
                "large": { "url": "/l.jpg", "width": 1200, "height": 800 },
            },
            "location": { "latitude": 1.5, "longitude": 2.5 },
        },
    })
}

#[must_use]
pub fn tags_page() -> Value {
    json!({
        "data": {
            "data": [{ "value": "sea" }, { "value": "sky" }],
            "current_page": 2,
            "prev_page_url": "/api/v1/tags?page=1",
            "next_page_url": null,
        }
    })
}

/// Writes `value` as JSON into `dir/name`.
///
/// # Panics
/// * If the file cannot be written.
pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, value.to_string()).expect("fixture file should be writable");
    path
}
