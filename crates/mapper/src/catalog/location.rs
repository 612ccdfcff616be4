use crate::access::pluck;
use crate::registry::Registry;
use serde_json::{Value, json};
use shutter_domain::constants::{API_LOCATION, LOCATION};

/// Coordinates travel as `latitude/longitude` on the wire and `lat/lng` in views.
pub(super) fn register(registry: &mut Registry) {
    registry.register_projection(API_LOCATION, LOCATION, |_, location| {
        if location.is_null() {
            return Ok(Value::Null);
        }
        Ok(json!({
            "lat": pluck(location, &["latitude"])?,
            "lng": pluck(location, &["longitude"])?,
        }))
    });

    registry.register_projection(LOCATION, API_LOCATION, |_, location| {
        if location.is_null() {
            return Ok(Value::Null);
        }
        Ok(json!({
            "latitude": pluck(location, &["lat"])?,
            "longitude": pluck(location, &["lng"])?,
        }))
    });
}
