use crate::access::{plain_text, pluck};
use crate::collaborators::Collaborators;
use crate::error::MapperResult;
use crate::registry::Registry;
use serde_json::{Value, json};
use shutter_domain::config::{MappingConfig, SiteConfig};
use shutter_domain::constants::{API_POST, LINKED_DATA_ARTICLE};

const SCHEMA_CONTEXT: &str = "http://schema.org";

/// `Api.Post -> LinkedData.Article`: schema.org markup for server-rendered photo pages.
pub(super) fn register(registry: &mut Registry, collaborators: &Collaborators) {
    let site = collaborators.site().clone();
    let mapping = collaborators.mapping().clone();

    registry.register_projection(API_POST, LINKED_DATA_ARTICLE, move |_, post| {
        if post.is_null() {
            return Ok(Value::Null);
        }
        article(post, &site, &mapping)
    });
}

fn article(post: &Value, site: &SiteConfig, mapping: &MappingConfig) -> MapperResult<Value> {
    let image = pluck(post, &["photo", "thumbnails", mapping.original_size.as_str()])?;
    let description = pluck(post, &["description"])?;
    let page = format!(
        "{}/photos?show={}",
        site.url.trim_end_matches('/'),
        plain_text(&pluck(post, &["id"])?)
    );

    Ok(json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Article",
        "mainEntityOfPage": { "@type": "WebPage", "@id": page },
        "headline": description,
        "image": {
            "@type": "ImageObject",
            "url": pluck(&image, &["url"])?,
            "height": pluck(&image, &["height"])?,
            "width": pluck(&image, &["width"])?,
        },
        "datePublished": pluck(post, &["created_at"])?,
        "dateModified": pluck(post, &["updated_at"])?,
        "author": { "@type": "Person", "name": site.author },
        "publisher": {
            "@type": "Organization",
            "name": site.name,
            "logo": { "@type": "ImageObject", "url": site.image },
        },
        "description": description,
    }))
}
