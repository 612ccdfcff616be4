pub mod fixtures;

use fixtures::*;
use serde_json::{Value, json};
use shutter_mapper::domain::config::{MappingConfig, SiteConfig};
use shutter_mapper::domain::constants::*;
use shutter_mapper::domain::navigation::RouteState;
use shutter_mapper::{
    Collaborators, DateFormatter, FixedClock, MapperError, MapperResult, PhotoView, catalog,
};

#[derive(Debug)]
struct BrokenFormatter;

impl DateFormatter for BrokenFormatter {
    fn format(&self, _timestamp: &str) -> MapperResult<String> {
        Err(MapperError::collaborator("formatter offline"))
    }
}

#[derive(Debug)]
struct EchoFormatter;

impl DateFormatter for EchoFormatter {
    fn format(&self, timestamp: &str) -> MapperResult<String> {
        Ok(format!("at {timestamp}"))
    }
}

#[test]
fn post_to_photo_projects_every_field() {
    let harness =
        harness_with_route(RouteState::new().with_param("tag", "sea").with_query("page", "2"));

    let photo = harness.registry.map(&sample_post(), API_POST, PHOTO).unwrap();

    assert_eq!(
        photo,
        json!({
            "id": 42,
            "route": {
                "name": "photo",
                "params": { "id": 42 },
                "query": { "tag": "sea", "search_phrase": null, "page": "2" },
            },
            "description": "Sunset over the lake",
            "exif": {
                "manufacturer": "Canon",
                "model": "EOS 5D",
                "exposureTime": "1/250",
                "aperture": "f/8",
                "iso": 100,
                "takenAt": "19.08.2017 15:30",
            },
            "averageColor": "#334455",
            "thumbnail": { "url": "/m.jpg", "width": 500, "height": 333 },
            "original": { "url": "/l.jpg", "width": 1200, "height": 800 },
            "tags": ["sunset", "lake"],
            "location": { "lat": 49.84, "lng": 24.03 },
        })
    );
}

#[test]
fn null_post_maps_to_null_photo() {
    let harness = harness();
    assert_eq!(harness.registry.map(&Value::Null, API_POST, PHOTO).unwrap(), Value::Null);
}

#[test]
fn post_without_photo_tolerates_missing_branches() {
    let harness = harness();
    let photo = harness.registry.map(&json!({ "id": 1 }), API_POST, PHOTO).unwrap();

    assert_eq!(photo["description"], Value::Null);
    assert_eq!(photo["exif"]["takenAt"], Value::Null);
    assert_eq!(photo["thumbnail"], json!({ "url": null, "width": null, "height": null }));
    assert_eq!(photo["tags"], json!([]));
    assert_eq!(photo["location"], Value::Null);
}

#[test]
fn route_reads_the_navigation_state_of_each_call() {
    let harness = harness();
    let first = harness.registry.map(&sample_post(), API_POST, PHOTO).unwrap();
    assert_eq!(first["route"]["query"]["tag"], Value::Null);

    harness.navigation.replace(RouteState::new().with_query("search_phrase", "lake"));
    let second = harness.registry.map(&sample_post(), API_POST, PHOTO).unwrap();
    assert_eq!(second["route"]["query"]["search_phrase"], json!("lake"));
}

#[test]
fn photo_view_exposes_url_and_identity() {
    let harness = harness();
    let photo = harness.registry.map(&sample_post(), API_POST, PHOTO).unwrap();
    let view = PhotoView::new(&photo);

    assert_eq!(view.to_string(), "/l.jpg");
    assert!(view.is(&json!({ "id": 42 })));
    assert!(!view.is(&json!({ "id": 43 })));
}

#[test]
fn collaborator_failures_are_not_swallowed() {
    let collaborators = Collaborators::builder().dates(BrokenFormatter).build();
    let registry = catalog::build(&collaborators);

    let err = registry.map(&sample_post(), API_POST, PHOTO).unwrap_err();
    assert!(matches!(err, MapperError::Collaborator { .. }));

    // Without a timestamp the formatter is never consulted.
    let exif = registry.map(&json!({ "model": "X100" }), API_EXIF, EXIF).unwrap();
    assert_eq!(exif["takenAt"], Value::Null);
}

#[test]
fn numeric_timestamps_reach_the_formatter() {
    let registry = catalog::build(&Collaborators::builder().dates(EchoFormatter).build());

    let exif = registry.map(&json!({ "taken_at": 1_503_156_600 }), API_EXIF, EXIF).unwrap();
    assert_eq!(exif["takenAt"], json!("at 1503156600"));

    let exif = registry.map(&json!({ "taken_at": 0 }), API_EXIF, EXIF).unwrap();
    assert_eq!(exif["takenAt"], json!(0));
}

#[test]
fn map_image_builds_a_marker() {
    let harness = harness();
    let marker = harness.registry.map(&sample_post(), API_POST, MAP_IMAGE).unwrap();

    assert_eq!(
        marker,
        json!({
            "imageUrl": "/l.jpg",
            "linkUrl": "/photo/42",
            "title": "Sunset over the lake",
            "location": { "lat": 49.84, "lng": 24.03 },
        })
    );

    let empty = harness.registry.map(&Value::Null, API_POST, MAP_IMAGE).unwrap();
    assert_eq!(
        empty,
        json!({ "imageUrl": null, "linkUrl": null, "title": null, "location": null })
    );
}

#[test]
fn configured_sizes_and_prefix_are_used() {
    let mapping = MappingConfig {
        preview_size: "large".to_owned(),
        photo_link_prefix: "/p/".to_owned(),
        ..MappingConfig::default()
    };
    let registry = catalog::build(&Collaborators::builder().mapping(mapping).build());

    let photo = registry.map(&sample_post(), API_POST, PHOTO).unwrap();
    assert_eq!(photo["thumbnail"]["url"], json!("/l.jpg"));

    let marker = registry.map(&sample_post(), API_POST, MAP_IMAGE).unwrap();
    assert_eq!(marker["linkUrl"], json!("/p/42"));
}

#[test]
fn raw_post_unwraps_its_envelope() {
    let harness = harness();
    let direct = harness.registry.map(&sample_post(), API_POST, PHOTO).unwrap();
    let wrapped = harness.registry.map(&envelope(sample_post()), API_RAW_POST, PHOTO).unwrap();
    assert_eq!(direct, wrapped);

    let empty = harness.registry.map(&envelope(Value::Null), API_RAW_POST, PHOTO).unwrap();
    assert_eq!(empty, Value::Null);
}

#[test]
fn user_expiry_is_relative_to_the_clock() {
    let harness = harness();
    let user = harness
        .registry
        .map(&json!({ "id": 1, "name": "ann", "expires_in": 3600 }), API_USER, USER)
        .unwrap();
    assert_eq!(user, json!({ "id": 1, "name": "ann", "expires_at": NOW_MS + 3_600_000 }));

    let no_expiry =
        harness.registry.map(&json!({ "id": 2, "name": "bob" }), API_USER, USER).unwrap();
    assert_eq!(no_expiry["expires_at"], Value::Null);
}

#[test]
fn user_resolver_is_not_null_safe() {
    let harness = harness();
    let err = harness.registry.map(&Value::Null, API_USER, USER).unwrap_err();
    assert!(err.is_absent());

    let err = harness
        .registry
        .map(&json!({ "id": 1, "expires_in": "soon" }), API_USER, USER)
        .unwrap_err();
    assert!(matches!(err, MapperError::Malformed { .. }));
}

#[test]
fn tags_round_trip_through_both_directions() {
    let harness = harness();
    let tag = harness.registry.map(&json!({ "value": "sunset" }), API_TAG, TAG).unwrap();
    assert_eq!(tag, json!("sunset"));

    let wire = harness.registry.map(&tag, TAG, API_TAG).unwrap();
    assert_eq!(wire, json!({ "value": "sunset" }));
}

#[test]
fn locations_are_null_safe_and_renamed() {
    let harness = harness();
    assert_eq!(harness.registry.map(&Value::Null, API_LOCATION, LOCATION).unwrap(), Value::Null);
    assert_eq!(harness.registry.map(&Value::Null, LOCATION, API_LOCATION).unwrap(), Value::Null);

    let wire =
        harness.registry.map(&json!({ "lat": 1, "lng": 2 }), LOCATION, API_LOCATION).unwrap();
    assert_eq!(wire, json!({ "latitude": 1, "longitude": 2 }));
}

#[test]
fn subscriptions_project_email_and_token() {
    let harness = harness();
    let subscription = harness
        .registry
        .map(&json!({ "email": "a@b.c", "token": "t0k", "id": 9 }), API_SUBSCRIPTION, SUBSCRIPTION)
        .unwrap();
    assert_eq!(subscription, json!({ "email": "a@b.c", "token": "t0k" }));
}

#[test]
fn photo_modify_builds_outbound_payloads() {
    let harness = harness();
    let component = json!({
        "postId": 42,
        "photoId": 7,
        "description": "Edited",
        "tags": ["sunset", "lake"],
        "location": { "lat": 1.5, "lng": 2.5 },
    });

    let post = harness.registry.map(&component, COMPONENT_PHOTO_MODIFY, API_POST).unwrap();
    assert_eq!(
        post,
        json!({
            "id": 42,
            "photo": { "id": 7 },
            "description": "Edited",
            "tags": [{ "value": "sunset" }, { "value": "lake" }],
        })
    );

    let photo = harness.registry.map(&component, COMPONENT_PHOTO_MODIFY, API_PHOTO).unwrap();
    assert_eq!(photo, json!({ "location": { "latitude": 1.5, "longitude": 2.5 } }));
}

#[test]
fn photo_modify_requires_a_tag_list() {
    let harness = harness();
    let err = harness
        .registry
        .map(&json!({ "postId": 1 }), COMPONENT_PHOTO_MODIFY, API_POST)
        .unwrap_err();
    assert!(err.is_absent());

    let cleared = harness
        .registry
        .map(&json!({ "location": null }), COMPONENT_PHOTO_MODIFY, API_PHOTO)
        .unwrap();
    assert_eq!(cleared, json!({ "location": { "latitude": null, "longitude": null } }));
}

#[test]
fn linked_data_article_uses_site_metadata() {
    let site = SiteConfig {
        url: "https://photos.example/".to_owned(),
        name: "Example Photos".to_owned(),
        author: "Jane Doe".to_owned(),
        image: Some("https://photos.example/logo.png".to_owned()),
    };
    let collaborators =
        Collaborators::builder().site(site).clock(FixedClock(instant())).build();
    let registry = catalog::build(&collaborators);

    let article = registry.map(&sample_post(), API_POST, LINKED_DATA_ARTICLE).unwrap();
    assert_eq!(
        article,
        json!({
            "@context": "http://schema.org",
            "@type": "Article",
            "mainEntityOfPage": {
                "@type": "WebPage",
                "@id": "https://photos.example/photos?show=42",
            },
            "headline": "Sunset over the lake",
            "image": { "@type": "ImageObject", "url": "/l.jpg", "height": 800, "width": 1200 },
            "datePublished": "2017-08-19 15:30:00",
            "dateModified": "2017-08-20 09:00:00",
            "author": { "@type": "Person", "name": "Jane Doe" },
            "publisher": {
                "@type": "Organization",
                "name": "Example Photos",
                "logo": { "@type": "ImageObject", "url": "https://photos.example/logo.png" },
            },
            "description": "Sunset over the lake",
        })
    );

    assert_eq!(registry.map(&Value::Null, API_POST, LINKED_DATA_ARTICLE).unwrap(), Value::Null);
}

#[test]
fn malformed_payloads_propagate() {
    let harness = harness();

    let err = harness.registry.map(&json!({ "tags": "sunset" }), API_POST, PHOTO).unwrap_err();
    assert!(matches!(err, MapperError::Malformed { .. }));

    let err = harness.registry.map(&json!("post"), API_POST, PHOTO).unwrap_err();
    assert!(matches!(err, MapperError::Malformed { .. }));
}
