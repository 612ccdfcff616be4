use crate::access::pluck;
use crate::registry::Registry;
use serde_json::json;
use shutter_domain::constants::{API_SUBSCRIPTION, SUBSCRIPTION};

pub(super) fn register(registry: &mut Registry) {
    registry.register_projection(API_SUBSCRIPTION, SUBSCRIPTION, |_, subscription| {
        Ok(json!({
            "email": pluck(subscription, &["email"])?,
            "token": pluck(subscription, &["token"])?,
        }))
    });
}
