use serde_json::Value;
use std::fmt;

/// Read-only helpers over a mapped `Photo` view model.
///
/// `Display` renders the original-size image URL (empty when the photo has none) and
/// [`PhotoView::is`] compares photos by id.
#[derive(Debug, Clone, Copy)]
pub struct PhotoView<'a> {
    photo: &'a Value,
}

impl<'a> PhotoView<'a> {
    #[must_use]
    pub const fn new(photo: &'a Value) -> Self {
        Self { photo }
    }

    #[must_use]
    pub fn id(&self) -> Option<&'a Value> {
        id_of(self.photo)
    }

    /// URL of the original-size image.
    #[must_use]
    pub fn url(&self) -> Option<&'a str> {
        self.photo.pointer("/original/url").and_then(Value::as_str)
    }

    /// `true` when both values carry the same id. Two photos without an id are equal.
    #[must_use]
    pub fn is(&self, other: &Value) -> bool {
        self.id() == id_of(other)
    }
}

impl fmt::Display for PhotoView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url().unwrap_or_default())
    }
}

fn id_of(value: &Value) -> Option<&Value> {
    value.get("id").filter(|id| !id.is_null())
}
