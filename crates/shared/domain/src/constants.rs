//! Well-known type tags.
//!
//! Tags are opaque names of logical shapes. `Api.*` tags describe payloads as the
//! backend sends or expects them, bare tags describe view models, `Component*`
//! tags describe presentation objects that hydration resolvers write into.

// Raw API payloads
pub const API_USER: &str = "Api.User";
pub const API_POST: &str = "Api.Post";
pub const API_PHOTO: &str = "Api.Photo";
pub const API_THUMBNAIL: &str = "Api.Thumbnail";
pub const API_EXIF: &str = "Api.Exif";
pub const API_TAG: &str = "Api.Tag";
pub const API_SUBSCRIPTION: &str = "Api.Subscription";
pub const API_LOCATION: &str = "Api.Location";

// Response envelopes (`{ data: ... }`)
pub const API_RAW_POST: &str = "Api.Raw.Post";
pub const API_RAW_PHOTO: &str = "Api.Raw.Photo";
pub const API_RAW_POSTS: &str = "Api.Raw.Posts";
pub const API_RAW_SUBSCRIPTIONS: &str = "Api.Raw.Subscriptions";
pub const API_RAW_TAGS: &str = "Api.Raw.Tags";

// View models
pub const USER: &str = "User";
pub const PHOTO: &str = "Photo";
pub const MAP_IMAGE: &str = "Map.Image";
pub const THUMBNAIL: &str = "Thumbnail";
pub const EXIF: &str = "Exif";
pub const TAG: &str = "Tag";
pub const SUBSCRIPTION: &str = "Subscription";
pub const LOCATION: &str = "Location";
pub const LINKED_DATA_ARTICLE: &str = "LinkedData.Article";

// Components
pub const COMPONENT: &str = "Component";
pub const COMPONENT_PHOTO_MODIFY: &str = "Component.PhotoModify";
