use crate::access::{plain_text, pluck, truthy};
use crate::collaborators::Collaborators;
use crate::registry::Registry;
use serde_json::{Value, json};
use shutter_domain::constants::{API_EXIF, API_THUMBNAIL, EXIF, THUMBNAIL};
use std::sync::Arc;

pub(super) fn register(registry: &mut Registry, collaborators: &Collaborators) {
    registry.register_projection(API_THUMBNAIL, THUMBNAIL, |_, thumbnail| {
        Ok(json!({
            "url": pluck(thumbnail, &["url"])?,
            "width": pluck(thumbnail, &["width"])?,
            "height": pluck(thumbnail, &["height"])?,
        }))
    });

    let dates = Arc::clone(collaborators.dates());
    registry.register_projection(API_EXIF, EXIF, move |_, exif| {
        let taken_at = pluck(exif, &["taken_at"])?;
        // Only present timestamps go through the formatter, numbers as their decimal text.
        let taken_at = if truthy(&taken_at) {
            Value::from(dates.format(&plain_text(&taken_at))?)
        } else {
            taken_at
        };

        Ok(json!({
            "manufacturer": pluck(exif, &["manufacturer"])?,
            "model": pluck(exif, &["model"])?,
            "exposureTime": pluck(exif, &["exposure_time"])?,
            "aperture": pluck(exif, &["aperture"])?,
            "iso": pluck(exif, &["iso"])?,
            "takenAt": taken_at,
        }))
    });
}
