use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};
use shutter_mapper::domain::navigation::RouteState;
use shutter_mapper::{Collaborators, FixedClock, Registry, SharedNavigation, catalog};

/// The frozen "now" of every catalog test, in epoch milliseconds.
pub const NOW_MS: i64 = 1_500_000_000_000;

/// # Panics
/// * If `NOW_MS` is not a representable instant.
#[must_use]
pub fn instant() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(NOW_MS).single().expect("valid test instant")
}

/// A catalog registry plus a handle to steer its navigation state.
#[derive(Debug)]
pub struct Harness {
    pub registry: Registry,
    pub navigation: SharedNavigation,
}

#[must_use]
pub fn harness() -> Harness {
    let navigation = SharedNavigation::default();
    let collaborators = Collaborators::builder()
        .navigation(navigation.clone())
        .clock(FixedClock(instant()))
        .build();

    Harness { registry: catalog::build(&collaborators), navigation }
}

#[must_use]
pub fn harness_with_route(route: RouteState) -> Harness {
    let harness = harness();
    harness.navigation.replace(route);
    harness
}

#[must_use]
pub fn sample_post() -> Value {
    json!({
        "id": 42,
        "description": "Sunset over the lake",
        "created_at": "2017-08-19 15:30:00",
        "updated_at": "2017-08-20 09:00:00",
        "tags": [{ "value": "sunset" }, { "value": "lake" }],
        "photo": {
            "id": 7,
            "avg_color": "#334455",
            "exif": {
                "manufacturer": "Canon",
                "model": "EOS 5D",
                "exposure_time": "1/250",
                "aperture": "f/8",
                "iso": 100,
                "taken_at": "2017-08-19 15:30:00",
            },
            "thumbnails": {
                "medium": { "url": "/m.jpg", "width": 500, "height": 333 },
                "large": { "url": "/l.jpg", "width": 1200, "height": 800 },
            },
            "location": { "latitude": 49.84, "longitude": 24.03 },
        },
    })
}

#[must_use]
pub fn sample_photo() -> Value {
    json!({
        "id": 8,
        "avg_color": "#000000",
        "thumbnails": { "large": { "url": "/new.jpg", "width": 10, "height": 10 } },
    })
}

#[must_use]
pub fn envelope(data: Value) -> Value {
    json!({ "data": data })
}

/// A paginated envelope in the shape the listing endpoints return.
#[must_use]
pub fn page(items: Value, current_page: Value, prev: Option<&str>, next: Option<&str>) -> Value {
    json!({
        "data": {
            "data": items,
            "current_page": current_page,
            "prev_page_url": prev,
            "next_page_url": next,
        }
    })
}
