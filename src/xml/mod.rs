//! The XML codec: both the metainfo (`<component>`) and catalog
//! (`<components>`) dialects, parsed over an `xmltree::Element` DOM the way
//! `component.rs`/`requirements.rs` already demonstrate with
//! `TryFrom<&xmltree::Element>` impls.

mod de;
mod ser;

use url::Url;

use crate::collection::Collection;
use crate::component::Component;
use crate::context::Context;
use crate::error::ParseError;

pub(crate) use de::{
    component_from_element_with_context, parse_external_release_document, parse_markup_blocks,
    relation_from_element, retained_locale,
};
pub(crate) use ser::{
    component_to_element, emit_component, emit_document, markup_blocks, sorted_locales,
    timestamp_to_unix,
};

/// Parses a single `Component` from its metainfo `<component>` root element,
/// using a default `Context` (no media base URL, current locale).
pub fn component_from_element(element: &xmltree::Element) -> Result<Component, ParseError> {
    component_from_element_with_context(element, &Context::default())
}

/// Parses a single `Component`, stamping `context`'s `origin`/`priority`/
/// `architecture` onto it wherever the element itself leaves them unset.
/// Used by [`crate::pool::Source`] so a caller's per-load `Context` reaches
/// standalone metainfo documents the same way catalog root attributes reach
/// catalog children.
pub fn component_from_element_with_context(
    element: &xmltree::Element,
    context: &Context,
) -> Result<Component, ParseError> {
    let mut component = de::component_from_element_with_context(element, context)?;
    if component.origin.is_none() {
        component.origin = context.origin_str().map(str::to_string);
    }
    if component.architecture.is_none() {
        component.architecture = context.arch().map(str::to_string);
    }
    if component.priority == 0 {
        component.priority = context.priority_value();
    }
    Ok(component)
}

/// Parses a catalog `<components>` document, using a default `Context`.
pub fn collection_from_element(element: &xmltree::Element) -> Result<Collection, ParseError> {
    collection_from_element_with_context(element, &Context::default())
}

/// Parses a catalog `<components>` document, applying the root's
/// `version`/`origin`/`architecture`/`priority` attributes to every child
/// component; `context` supplies the defaults a root attribute doesn't
/// override (and carries the preferred locale/format version through).
pub fn collection_from_element_with_context(
    element: &xmltree::Element,
    context: &Context,
) -> Result<Collection, ParseError> {
    if element.name != "components" {
        return Err(ParseError::schema(
            &element.name,
            "catalog root must be <components>",
        ));
    }
    let version = element
        .attributes
        .get("version")
        .cloned()
        .unwrap_or_default();
    let origin = element.attributes.get("origin").cloned().or_else(|| context.origin_str().map(str::to_string));
    let architecture = element.attributes.get("architecture").cloned().or_else(|| context.arch().map(str::to_string));
    let priority: i32 = element
        .attributes
        .get("priority")
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| context.priority_value());

    let mut child_context = context.clone();
    if let Some(baseurl) = element.attributes.get("media_baseurl") {
        child_context = child_context.media_baseurl(baseurl.clone());
    }

    let mut components = Vec::new();
    for child in element.children.iter().filter_map(|n| n.as_element()) {
        if child.name != "component" {
            continue;
        }
        let mut component = de::component_from_element_with_context(child, &child_context)?;
        if component.origin.is_none() {
            component.origin = origin.clone();
        }
        if component.architecture.is_none() {
            component.architecture = architecture.clone();
        }
        if component.priority == 0 {
            component.priority = priority;
        }
        components.push(component);
    }

    Ok(Collection {
        version,
        origin,
        components,
    })
}

/// Resolves `url` against `Context::media_baseurl` when `url` is a relative
/// reference (no scheme).
pub(crate) fn resolve_url(raw: &str, context: &Context) -> Result<Url, ParseError> {
    Url::parse(&context.resolve_url(raw)).map_err(ParseError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_component() {
        let xml = r#"<?xml version='1.0' encoding='UTF-8'?>
            <component>
                <id>com.example.foobar</id>
                <name>Foo Bar</name>
                <summary>A foo-ish bar</summary>
                <metadata_license>CC0-1.0</metadata_license>
            </component>"#;
        let element = xmltree::Element::parse(xml.as_bytes()).unwrap();
        let component = component_from_element(&element).unwrap();
        assert_eq!(component.id.0, "com.example.foobar");
        assert_eq!(component.name.default_value(), Some("Foo Bar"));
    }

    #[test]
    fn rejects_catalog_document_with_wrong_root() {
        let xml = r#"<component><id>a</id></component>"#;
        let element = xmltree::Element::parse(xml.as_bytes()).unwrap();
        assert!(collection_from_element(&element).is_err());
    }

    #[test]
    fn catalog_root_attributes_apply_to_children() {
        let xml = r#"<components version="0.14" origin="flathub">
            <component>
                <id>com.example.foobar</id>
                <name>Foo Bar</name>
            </component>
        </components>"#;
        let element = xmltree::Element::parse(xml.as_bytes()).unwrap();
        let collection = collection_from_element(&element).unwrap();
        assert_eq!(collection.version, "0.14");
        assert_eq!(collection.components[0].origin.as_deref(), Some("flathub"));
    }

    #[test]
    fn legacy_top_level_mimetypes_normalizes_to_a_single_provides_entry() {
        let xml = r#"<component>
            <id>com.example.foobar</id>
            <name>Foo Bar</name>
            <mimetypes>
                <mimetype>text/plain</mimetype>
            </mimetypes>
        </component>"#;
        let element = xmltree::Element::parse(xml.as_bytes()).unwrap();
        let component = component_from_element(&element).unwrap();
        let mimetype_provides: Vec<_> = component
            .provides
            .iter()
            .filter(|p| matches!(p, crate::enums::Provide::MimeType(_)))
            .collect();
        assert_eq!(mimetype_provides.len(), 1);

        let emitted = emit_component(&component, &Context::default());
        assert_eq!(emitted.matches("text/plain").count(), 1);
        assert!(!emitted.contains("<mimetypes>"));

        let reparsed_element = xmltree::Element::parse(emitted.as_bytes()).unwrap();
        let reparsed = component_from_element(&reparsed_element).unwrap();
        let reparsed_mimetypes: Vec<_> = reparsed
            .provides
            .iter()
            .filter(|p| matches!(p, crate::enums::Provide::MimeType(_)))
            .collect();
        assert_eq!(reparsed_mimetypes.len(), 1);
    }
}
