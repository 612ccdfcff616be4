//! Pagination envelopes.
//!
//! Paginated listings arrive as `{ "data": { "data": [..items], "current_page": n,
//! "prev_page_url": .., "next_page_url": .. } }`. [`hydrate_page`] maps the items and
//! writes them, together with a [`PageState`], into a listing component.

use crate::access::{Navigate, ensure_object, kind_name, truthy};
use crate::error::{MapperError, MapperErrorExt, MapperResult};
use crate::registry::{Registry, map_each};
use serde::Serialize;
use serde_json::{Map, Value};

/// Navigation state of one page, written into listing components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub previous_page_exists: bool,
    pub next_page_exists: bool,
    pub current_page: i64,
    pub next_page: Option<i64>,
    pub previous_page: Option<i64>,
}

impl PageState {
    /// Derives the page state from the inner envelope body (`response.data`).
    ///
    /// `current_page` may be an integer, an integral float or a numeric string.
    /// Neighbour page numbers are only computed when the matching URL is non-empty.
    pub fn from_body(body: &Value) -> MapperResult<Self> {
        let previous_page_exists = truthy(body.field("prev_page_url")?);
        let next_page_exists = truthy(body.field("next_page_url")?);
        let current_page = page_number(body.field("current_page")?)?;

        Ok(Self {
            previous_page_exists,
            next_page_exists,
            current_page,
            next_page: next_page_exists.then(|| step(current_page, 1)).transpose()?,
            previous_page: previous_page_exists.then(|| step(current_page, -1)).transpose()?,
        })
    }

    /// Writes the five page fields into a component.
    pub fn write_into(&self, component: &mut Map<String, Value>) -> MapperResult<()> {
        match serde_json::to_value(self).context("Serializing page state")? {
            Value::Object(fields) => {
                component.extend(fields);
                Ok(())
            }
            other => Err(format!("page state serialized to a {}", kind_name(&other)).into()),
        }
    }
}

/// Which field a listing's items go into, and how each item is mapped.
#[derive(Debug, Clone, Copy)]
pub struct PageItems<'a> {
    pub field: &'a str,
    pub source: &'a str,
    pub target: &'a str,
}

/// Hydrates a listing component from a paginated envelope.
///
/// Everything is computed before the component is touched, so a failure leaves it
/// exactly as it was.
pub fn hydrate_page(
    registry: &Registry,
    response: &Value,
    component: &mut Value,
    items: PageItems<'_>,
) -> MapperResult<()> {
    let body = response.field("data")?;
    let mapped = map_each(registry, body.field("data")?.items()?, items.source, items.target)?;
    let state = PageState::from_body(body)?;

    let fields = ensure_object(component)?;
    fields.insert(items.field.to_owned(), mapped);
    state.write_into(fields)
}

/// 2^63, the first float above the `i64` range. `i64::MAX as f64` rounds up to it.
const PAGE_LIMIT: f64 = 9_223_372_036_854_775_808.0;

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn page_number(value: &Value) -> MapperResult<i64> {
    let parsed = match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|n| n.fract() == 0.0 && *n >= -PAGE_LIMIT && *n < PAGE_LIMIT)
                .map(|n| n as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        MapperError::malformed(format!("current_page must be a page number, found {value}"))
    })
}

fn step(page: i64, delta: i64) -> MapperResult<i64> {
    page.checked_add(delta)
        .ok_or_else(|| MapperError::malformed(format!("page {page} has no neighbour")))
}
