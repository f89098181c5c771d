//! Secondary indices over the pool's primary table: built lazily from the
//! primary table and invalidated by comparing a generation counter rather
//! than maintained incrementally on every insert (incremental maintenance
//! during a bulk load would make it quadratic).

use std::collections::HashMap;
use std::sync::Arc;

use crate::component::Component;
use crate::enums::ComponentKind;

/// A component as stored in the pool: the parsed value plus the Refine
/// step's hidden flag (invalid components stay in the table but drop out
/// of default queries).
#[derive(Debug)]
pub(crate) struct StoredComponent {
    pub component: Component,
    pub hidden: std::sync::atomic::AtomicBool,
}

impl StoredComponent {
    pub fn new(component: Component) -> Self {
        Self {
            component,
            hidden: std::sync::atomic::AtomicBool::new(false),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden.load(std::sync::atomic::Ordering::Relaxed)
    }
}

fn provide_key(provide: &crate::enums::Provide) -> (String, String) {
    use crate::enums::Provide;
    let (kind, item) = match provide {
        Provide::Library(v) => ("library", v.to_string_lossy().into_owned()),
        Provide::Binary(v) => ("binary", v.clone()),
        Provide::Font(v) => ("font", v.clone()),
        Provide::Modalias(v) => ("modalias", v.clone()),
        Provide::Firmware { item, .. } => ("firmware", item.clone()),
        Provide::Python2(v) => ("python2", v.clone()),
        Provide::Python3(v) => ("python3", v.clone()),
        Provide::DBus { name, .. } => ("dbus", name.clone()),
        Provide::Id(v) => ("id", v.clone()),
        Provide::Codec(v) => ("codec", v.clone()),
        Provide::MimeType(v) => ("mediatype", v.clone()),
    };
    (kind.to_string(), item)
}

fn launchable_key(launchable: &crate::enums::Launchable) -> (String, String) {
    use crate::enums::Launchable;
    let (kind, item) = match launchable {
        Launchable::DesktopId(v) => ("desktop-id", v.clone()),
        Launchable::Service(v) => ("service", v.clone()),
        Launchable::Url(v) => ("url", v.to_string()),
        Launchable::CockpitManifest(v) => ("cockpit-manifest", v.clone()),
        Launchable::Unknown(v) => ("unknown", v.clone()),
    };
    (kind.to_string(), item)
}

fn bundle_key(bundle: &crate::enums::Bundle) -> (String, String) {
    use crate::enums::Bundle;
    let (kind, item): (&str, String) = match bundle {
        Bundle::Limba(id) => ("limba", id.clone()),
        Bundle::Flatpak { id, .. } => ("flatpak", id.clone()),
        Bundle::Snap(id) => ("snap", id.clone()),
        Bundle::AppImage(id) => ("appimage", id.clone()),
        Bundle::Tarball(id) => ("tarball", id.clone()),
        Bundle::Unknown(kind, id) => (kind.as_str(), id.clone()),
    };
    (kind.to_string(), item)
}

/// The full set of secondary indices, rebuilt from scratch whenever the
/// primary table's generation has moved past the cache's.
#[derive(Default)]
pub(crate) struct PoolIndex {
    pub generation: u64,
    pub by_id: HashMap<String, Vec<Arc<StoredComponent>>>,
    pub by_kind: HashMap<ComponentKind, Vec<Arc<StoredComponent>>>,
    pub by_category: HashMap<String, Vec<Arc<StoredComponent>>>,
    pub by_provided: HashMap<(String, String), Vec<Arc<StoredComponent>>>,
    pub by_launchable: HashMap<(String, String), Vec<Arc<StoredComponent>>>,
    pub by_extends: HashMap<String, Vec<Arc<StoredComponent>>>,
    pub by_bundle_id: HashMap<(String, String), Vec<Arc<StoredComponent>>>,
    pub search_index: HashMap<String, Vec<Arc<StoredComponent>>>,
}

impl PoolIndex {
    pub fn rebuild(table: &HashMap<String, Arc<StoredComponent>>, generation: u64) -> Self {
        let mut index = PoolIndex {
            generation,
            ..Default::default()
        };

        // Primary-table iteration order is arbitrary (`HashMap`); sorting by
        // data id keeps every posting list deterministic for callers that
        // don't explicitly sort query results.
        let mut entries: Vec<&Arc<StoredComponent>> = table.values().collect();
        entries.sort_by_key(|stored| stored.component.data_id());

        for stored in entries {
            let component = &stored.component;
            index.by_id.entry(component.id.to_string()).or_default().push(stored.clone());
            index.by_kind.entry(component.kind).or_default().push(stored.clone());
            for category in &component.categories {
                index.by_category.entry(category.0.clone()).or_default().push(stored.clone());
            }
            for provide in &component.provides {
                index.by_provided.entry(provide_key(provide)).or_default().push(stored.clone());
            }
            for launchable in &component.launchables {
                index.by_launchable.entry(launchable_key(launchable)).or_default().push(stored.clone());
            }
            for parent in &component.extends {
                index.by_extends.entry(parent.to_string()).or_default().push(stored.clone());
            }
            for bundle in &component.bundles {
                index.by_bundle_id.entry(bundle_key(bundle)).or_default().push(stored.clone());
            }
            for token in crate::search::index_tokens(component) {
                index.search_index.entry(token).or_default().push(stored.clone());
            }
        }

        index
    }
}
