use crate::pagination::{PageItems, hydrate_page};
use crate::registry::Registry;
use shutter_domain::constants::{
    API_POST, API_RAW_POSTS, API_RAW_SUBSCRIPTIONS, API_RAW_TAGS, API_SUBSCRIPTION, API_TAG,
    COMPONENT, PHOTO, SUBSCRIPTION, TAG,
};

/// Paginated listings. Each envelope fills one list field plus the page state.
const LISTINGS: [(&str, PageItems<'static>); 3] = [
    (API_RAW_POSTS, PageItems { field: "photos", source: API_POST, target: PHOTO }),
    (
        API_RAW_SUBSCRIPTIONS,
        PageItems { field: "subscriptions", source: API_SUBSCRIPTION, target: SUBSCRIPTION },
    ),
    (API_RAW_TAGS, PageItems { field: "tags", source: API_TAG, target: TAG }),
];

pub(super) fn register(registry: &mut Registry) {
    for (envelope, items) in LISTINGS {
        registry.register_hydration(envelope, COMPONENT, move |registry, response, component| {
            hydrate_page(registry, response, component, items)
        });
    }
}
