//! The YAML (DEP-11) codec: a multi-document stream, document 0 the
//! catalog header, every one after it a single component.

mod de;
mod ser;

use yaml_rust::{Yaml, YamlLoader};

use crate::collection::Collection;
use crate::component::Component;
use crate::context::Context;
use crate::error::ParseError;

pub(crate) use de::{component_from_yaml, header_from_yaml, CatalogHeader};
pub(crate) use ser::{component_to_yaml, emit_stream, header_to_yaml_string};

/// Parses a full DEP-11 YAML stream (header document + one document per
/// component) into a [`Collection`], using a default `Context`.
pub fn collection_from_str(data: &str) -> Result<Collection, ParseError> {
    collection_from_str_with_context(data, &Context::default())
}

/// Parses a full DEP-11 YAML stream, applying the header's
/// `Origin`/`MediaBaseUrl`/`Architecture`/`Priority` (falling back to
/// `context`'s own values when the header omits one) to every component
/// document that follows it.
pub fn collection_from_str_with_context(data: &str, context: &Context) -> Result<Collection, ParseError> {
    let docs = YamlLoader::load_from_str(data)?;
    let mut docs = docs.into_iter();

    let header = match docs.next() {
        Some(doc) => header_from_yaml(&doc),
        None => return Ok(Collection::default()),
    };

    let origin = header.origin.clone().or_else(|| context.origin_str().map(str::to_string));
    let architecture = header.architecture.clone().or_else(|| context.arch().map(str::to_string));
    let priority = if header.priority != 0 { header.priority } else { context.priority_value() };

    let mut child_context = context.clone();
    if let Some(baseurl) = &header.media_baseurl {
        child_context = child_context.media_baseurl(baseurl.clone());
    }

    let mut components = Vec::new();
    for doc in docs {
        if matches!(doc, Yaml::BadValue | Yaml::Null) {
            continue;
        }
        let mut component = component_from_yaml(&doc, &child_context)?;
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
        version: header.version,
        origin,
        components,
    })
}

/// Parses a single component document (no header), using a default
/// `Context`. Useful for tests and for callers that already split the
/// stream themselves.
pub fn component_from_str(data: &str) -> Result<Component, ParseError> {
    let mut docs = YamlLoader::load_from_str(data)?;
    if docs.is_empty() {
        return Err(ParseError::missing_tag("ID"));
    }
    component_from_yaml(&docs.remove(0), &Context::default())
}

/// Serializes `components` as a DEP-11 stream: a header document built
/// from `context`, followed by one document per component.
pub fn emit_collection(components: &[Component], context: &Context) -> String {
    emit_stream(components, context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_document_separation() {
        let yaml = "---\nFile: DEP-11\nVersion: \"1.0\"\nOrigin: test\nPriority: 5\n---\nType: desktop-application\nID: org.y\nName:\n  C: Y\n";
        let collection = collection_from_str(yaml).unwrap();
        assert_eq!(collection.components.len(), 1);
        let component = &collection.components[0];
        assert_eq!(component.origin.as_deref(), Some("test"));
        assert_eq!(component.priority, 5);
        assert_eq!(component.id.0, "org.y");
        assert_eq!(component.name.default_value(), Some("Y"));
    }

    #[test]
    fn stream_with_no_documents_is_an_empty_collection() {
        let collection = collection_from_str("").unwrap();
        assert!(collection.components.is_empty());
    }
}
