//! The in-memory component pool: merges many parsed sources keyed by data
//! id, resolves collisions by priority/merge/arch rules, maintains the
//! secondary indices in [`index`], and answers queries.

mod index;
mod merge;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::thread;
use std::time::Duration;

use crate::category::{Category, CategoryRegistry, StaticCategoryRegistry};
use crate::component::Component;
use crate::context::Context;
use crate::enums::{ComponentKind, MergeKind};
use crate::error::{Diagnostic, LoadReport, ParseError};
use crate::id::AppId;
use crate::release::ReleaseFetcher;

use index::{PoolIndex, StoredComponent};
use merge::apply_merge;

/// A single document to load into a [`Pool`]: raw bytes plus the [`Context`]
/// that should be applied to whatever it parses into.
#[derive(Clone, Debug)]
pub enum Source {
    /// A metainfo (`<component>`) or catalog (`<components>`) XML document.
    Xml {
        /// The raw document bytes.
        bytes: Vec<u8>,
        /// The `Context` its components inherit defaults from.
        context: Context,
    },
    /// A DEP-11 YAML stream (header document + one document per component).
    Yaml {
        /// The raw document bytes.
        bytes: Vec<u8>,
        /// The `Context` its components inherit defaults from.
        context: Context,
    },
}

impl Source {
    /// Builds an XML source from owned bytes.
    pub fn xml(bytes: impl Into<Vec<u8>>, context: Context) -> Self {
        Self::Xml { bytes: bytes.into(), context }
    }

    /// Builds a YAML source from owned bytes.
    pub fn yaml(bytes: impl Into<Vec<u8>>, context: Context) -> Self {
        Self::Yaml { bytes: bytes.into(), context }
    }

    /// Parses this source into zero or more components. Pure: never touches
    /// a `Pool`, so it may be called from any thread.
    pub fn parse(&self) -> Result<Vec<Component>, ParseError> {
        match self {
            Source::Xml { bytes, context } => {
                let element = xmltree::Element::parse(bytes.as_slice())?;
                if element.name == "components" {
                    Ok(crate::xml::collection_from_element_with_context(&element, context)?.components)
                } else {
                    Ok(vec![crate::xml::component_from_element_with_context(&element, context)?])
                }
            }
            Source::Yaml { bytes, context } => {
                let text = std::str::from_utf8(bytes)
                    .map_err(|_| ParseError::other("yaml", "document is not valid UTF-8"))?;
                Ok(crate::yaml::collection_from_str_with_context(text, context)?.components)
            }
        }
    }
}

/// Load-time behavior toggles. The data model and codec are unaffected by
/// these; they only govern which sources an external directory-scanner
/// collaborator would feed into [`Pool::load`] (scanning the filesystem
/// itself is outside this crate's scope).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolFlags {
    /// Load the distribution's packaged AppStream catalog.
    pub load_os_catalog: bool,
    /// Load metainfo files installed directly under `/usr/share/metainfo`.
    pub load_os_metainfo: bool,
    /// Synthesize components from legacy `.desktop` entries.
    pub load_desktop_entries: bool,
    /// Load catalogs shipped by bundle systems (Flatpak, Snap, …).
    pub load_bundle_catalogs: bool,
    /// Load sources even if an on-disk cache considers them stale.
    pub ignore_cache_age: bool,
    /// Resolve `extends` relationships into an addons list at load time.
    pub resolve_addons: bool,
    /// Prefer a metainfo file over a catalog entry for the same id.
    pub prefer_metainfo_over_catalog: bool,
    /// Watch source directories for changes after the initial load.
    pub monitor_source_directories: bool,
}

impl PoolFlags {
    /// Sets [`Self::load_os_catalog`].
    #[must_use]
    pub fn load_os_catalog(mut self, value: bool) -> Self {
        self.load_os_catalog = value;
        self
    }

    /// Sets [`Self::load_os_metainfo`].
    #[must_use]
    pub fn load_os_metainfo(mut self, value: bool) -> Self {
        self.load_os_metainfo = value;
        self
    }

    /// Sets [`Self::load_desktop_entries`].
    #[must_use]
    pub fn load_desktop_entries(mut self, value: bool) -> Self {
        self.load_desktop_entries = value;
        self
    }

    /// Sets [`Self::load_bundle_catalogs`].
    #[must_use]
    pub fn load_bundle_catalogs(mut self, value: bool) -> Self {
        self.load_bundle_catalogs = value;
        self
    }

    /// Sets [`Self::ignore_cache_age`].
    #[must_use]
    pub fn ignore_cache_age(mut self, value: bool) -> Self {
        self.ignore_cache_age = value;
        self
    }

    /// Sets [`Self::resolve_addons`].
    #[must_use]
    pub fn resolve_addons(mut self, value: bool) -> Self {
        self.resolve_addons = value;
        self
    }

    /// Sets [`Self::prefer_metainfo_over_catalog`].
    #[must_use]
    pub fn prefer_metainfo_over_catalog(mut self, value: bool) -> Self {
        self.prefer_metainfo_over_catalog = value;
        self
    }

    /// Sets [`Self::monitor_source_directories`].
    #[must_use]
    pub fn monitor_source_directories(mut self, value: bool) -> Self {
        self.monitor_source_directories = value;
        self
    }
}

/// A cheap, cloneable cooperative cancellation flag for [`Pool::load_async`].
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// Creates a token in the not-cancelled state.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Requests cancellation; observed by workers between sources.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// The outcome of an async load: a success flag plus the usual
/// [`LoadReport`]. A cancelled load reports `success: false` with an empty
/// report; its partial results are discarded rather than merged.
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
    /// Whether the load completed (`false` if it was cancelled).
    pub success: bool,
    /// How many components were inserted and what went wrong along the way.
    pub report: LoadReport,
}

/// A handle to an in-flight [`Pool::load_async`] call. Dropping it without
/// calling [`join`](LoadHandle::join) detaches the workers; they still run
/// to completion, their results simply go unmerged.
pub struct LoadHandle {
    pool: Pool,
    workers: Vec<thread::JoinHandle<Vec<Component>>>,
    cancel: CancellationToken,
}

impl LoadHandle {
    /// Blocks until every worker has finished parsing, then merges the
    /// collected components on the calling thread.
    pub fn join(self) -> LoadResult {
        let mut parsed = Vec::new();
        for worker in self.workers {
            if let Ok(components) = worker.join() {
                parsed.extend(components);
            }
        }

        if self.cancel.is_cancelled() {
            let mut state = self.pool.state.write().unwrap();
            state.last_error = Some("load cancelled".to_string());
            return LoadResult { success: false, report: LoadReport::default() };
        }

        let report = self.pool.merge_parsed(parsed);
        LoadResult { success: true, report }
    }
}

struct PoolState {
    table: HashMap<String, Arc<StoredComponent>>,
    generation: u64,
    host_arch: String,
    flags: PoolFlags,
    last_error: Option<String>,
    category_registry: Arc<dyn CategoryRegistry>,
    index_cache: Mutex<(u64, Arc<PoolIndex>)>,
    allow_net: bool,
    release_fetcher: Option<Arc<dyn ReleaseFetcher>>,
    fetch_timeout: Duration,
}

/// The in-memory pool: components keyed by data id, merged by priority/merge
/// rules, indexed for fast lookup. Cheap to clone; every clone shares the
/// same underlying state.
#[derive(Clone)]
pub struct Pool {
    state: Arc<RwLock<PoolState>>,
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl Pool {
    /// Creates an empty pool backed by the built-in freedesktop category
    /// registry and a host architecture detected from the build target.
    pub fn new() -> Self {
        Self::with_category_registry(Arc::new(StaticCategoryRegistry::default()))
    }

    /// Creates an empty pool using a caller-supplied category taxonomy as
    /// an injected collaborator.
    pub fn with_category_registry(registry: Arc<dyn CategoryRegistry>) -> Self {
        let state = PoolState {
            table: HashMap::new(),
            generation: 0,
            host_arch: std::env::consts::ARCH.to_string(),
            flags: PoolFlags::default(),
            last_error: None,
            category_registry: registry,
            index_cache: Mutex::new((0, Arc::new(PoolIndex::default()))),
            allow_net: false,
            release_fetcher: None,
            fetch_timeout: Duration::from_secs(30),
        };
        Self { state: Arc::new(RwLock::new(state)) }
    }

    /// Whether external release lists may be resolved over the network
    /// during the Refine step; opt-in per load. `false` by default; a
    /// [`Self::set_release_fetcher`] with `allow_net` still false leaves
    /// external lists unresolved.
    pub fn allow_net(&self) -> bool {
        self.state.read().unwrap().allow_net
    }

    /// Sets [`Self::allow_net`].
    pub fn set_allow_net(&self, allow: bool) {
        self.state.write().unwrap().allow_net = allow;
    }

    /// Installs the collaborator used to resolve `ReleaseList::External`
    /// entries (an HTTP client, a sibling-file reader, or a fake for
    /// tests). No fetch happens unless [`Self::allow_net`] is also true.
    pub fn set_release_fetcher(&self, fetcher: Arc<dyn ReleaseFetcher>) {
        self.state.write().unwrap().release_fetcher = Some(fetcher);
    }

    /// The per-fetch timeout passed to the installed `ReleaseFetcher`.
    /// Defaults to 30 seconds.
    pub fn fetch_timeout(&self) -> Duration {
        self.state.read().unwrap().fetch_timeout
    }

    /// Sets [`Self::fetch_timeout`].
    pub fn set_fetch_timeout(&self, timeout: Duration) {
        self.state.write().unwrap().fetch_timeout = timeout;
    }

    /// The architecture used by the equal-priority arch-preference tiebreak.
    pub fn host_arch(&self) -> String {
        self.state.read().unwrap().host_arch.clone()
    }

    /// Overrides the host architecture used by the arch-preference tiebreak.
    pub fn set_host_arch(&self, arch: impl Into<String>) {
        self.state.write().unwrap().host_arch = arch.into();
    }

    /// The load-time behavior toggles currently in effect.
    pub fn flags(&self) -> PoolFlags {
        self.state.read().unwrap().flags
    }

    /// Replaces the load-time behavior toggles.
    pub fn set_flags(&self, flags: PoolFlags) {
        self.state.write().unwrap().flags = flags;
    }

    /// The last load's error message, if any source failed to parse.
    pub fn last_error(&self) -> Option<String> {
        self.state.read().unwrap().last_error.clone()
    }

    /// Drops every component from the table. Outstanding query results
    /// (already-cloned `Component` values) remain valid.
    pub fn clear(&self) {
        let mut state = self.state.write().unwrap();
        state.table.clear();
        state.generation += 1;
        state.last_error = None;
    }

    /// Parses and merges `sources` in order, blocking until done.
    pub fn load(&self, sources: Vec<Source>) -> LoadReport {
        let mut parsed = Vec::new();
        for source in &sources {
            match source.parse() {
                Ok(components) => parsed.extend(components),
                Err(err) => {
                    log::warn!("failed to parse source: {err}");
                    self.state.write().unwrap().last_error = Some(err.to_string());
                }
            }
        }
        self.merge_parsed(parsed)
    }

    /// Parses `sources` across a worker pool (size = hardware concurrency
    /// by default) and returns immediately with a [`LoadHandle`]; merging
    /// happens when the caller calls [`LoadHandle::join`]. `cancel` is
    /// checked between sources within each worker.
    pub fn load_async(&self, sources: Vec<Source>, cancel: CancellationToken) -> LoadHandle {
        let worker_count = thread::available_parallelism().map(|n| n.get()).unwrap_or(1).max(1);
        let chunks = partition(sources, worker_count);

        let workers = chunks
            .into_iter()
            .map(|chunk| {
                let cancel = cancel.clone();
                thread::spawn(move || {
                    let mut components = Vec::new();
                    for source in &chunk {
                        if cancel.is_cancelled() {
                            break;
                        }
                        match source.parse() {
                            Ok(parsed) => components.extend(parsed),
                            Err(err) => log::warn!("failed to parse source: {err}"),
                        }
                    }
                    components
                })
            })
            .collect();

        LoadHandle { pool: self.clone(), workers, cancel }
    }

    /// Sorts `components` by `(priority desc, origin, data-id)` so merge
    /// outcomes are deterministic regardless of parse order, then applies
    /// each through [`insert_locked`] and runs the Refine step.
    fn merge_parsed(&self, mut components: Vec<Component>) -> LoadReport {
        components.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.origin.cmp(&b.origin))
                .then_with(|| a.data_id().cmp(&b.data_id()))
        });

        let mut report = LoadReport::default();
        let mut state = self.state.write().unwrap();
        for component in components {
            insert_locked(&mut state, component, &mut report);
        }
        refine_locked(&mut state, &mut report);
        report
    }

    /// Returns the up-to-date secondary indices, rebuilding them if the
    /// primary table has changed since the last build.
    fn index(&self) -> Arc<PoolIndex> {
        let state = self.state.read().unwrap();
        let mut cache = state.index_cache.lock().unwrap();
        if cache.0 != state.generation {
            *cache = (state.generation, Arc::new(PoolIndex::rebuild(&state.table, state.generation)));
        }
        cache.1.clone()
    }

    /// Every component with the given id (an id may appear under several
    /// origins/branches).
    pub fn by_id(&self, id: &AppId) -> Vec<Component> {
        materialize(self.index().by_id.get(&id.to_string()))
    }

    /// Every component of the given kind.
    pub fn by_kind(&self, kind: ComponentKind) -> Vec<Component> {
        materialize(self.index().by_kind.get(&kind))
    }

    /// Every component tagged with the given category.
    pub fn by_category(&self, category: &Category) -> Vec<Component> {
        materialize(self.index().by_category.get(&category.0))
    }

    /// Components declaring a `<provides>` entry of kind `kind` (e.g.
    /// `"library"`, `"binary"`, `"mediatype"`) whose value is `item`.
    pub fn by_provided(&self, kind: &str, item: &str) -> Vec<Component> {
        materialize(self.index().by_provided.get(&(kind.to_string(), item.to_string())))
    }

    /// Components launchable via a `<launchable>` entry of kind `kind`
    /// (e.g. `"desktop-id"`) whose value is `entry`.
    pub fn by_launchable(&self, kind: &str, entry: &str) -> Vec<Component> {
        materialize(self.index().by_launchable.get(&(kind.to_string(), entry.to_string())))
    }

    /// Addons that `extends` the given parent id.
    pub fn addons_of(&self, id: &AppId) -> Vec<Component> {
        materialize(self.index().by_extends.get(&id.to_string()))
    }

    /// Components shipped by the given bundle system (`"flatpak"`, `"snap"`,
    /// …) under the given bundle id.
    pub fn by_bundle_id(&self, kind: &str, id: &str) -> Vec<Component> {
        materialize(self.index().by_bundle_id.get(&(kind.to_string(), id.to_string())))
    }

    /// Free-text search: tokenizes `term`, scores every visible component,
    /// drops non-positive scores, sorts descending with ties broken by id.
    pub fn search(&self, term: &str) -> Vec<Component> {
        let index = self.index();
        let query = crate::search::tokenize(term);

        let mut candidates: HashMap<String, Component> = HashMap::new();
        for token in &query {
            if let Some(postings) = index.search_index.get(token) {
                for stored in postings {
                    if !stored.is_hidden() {
                        candidates.entry(stored.component.data_id()).or_insert_with(|| stored.component.clone());
                    }
                }
            }
        }

        let components: Vec<Component> = candidates.into_values().collect();
        crate::search::rank(components.iter(), term).into_iter().cloned().collect()
    }

    /// Every visible component, ordered by data id.
    pub fn all(&self) -> Vec<Component> {
        let state = self.state.read().unwrap();
        let mut components: Vec<Component> = state
            .table
            .values()
            .filter(|stored| !stored.is_hidden())
            .map(|stored| stored.component.clone())
            .collect();
        components.sort_by_key(|c| c.data_id());
        components
    }
}

fn materialize(stored: Option<&Vec<Arc<StoredComponent>>>) -> Vec<Component> {
    match stored {
        Some(list) => list.iter().filter(|s| !s.is_hidden()).map(|s| s.component.clone()).collect(),
        None => Vec::new(),
    }
}

fn partition<T>(items: Vec<T>, worker_count: usize) -> Vec<Vec<T>> {
    let mut chunks: Vec<Vec<T>> = (0..worker_count).map(|_| Vec::new()).collect();
    for (index, item) in items.into_iter().enumerate() {
        chunks[index % worker_count].push(item);
    }
    chunks.retain(|chunk| !chunk.is_empty());
    if chunks.is_empty() {
        chunks.push(Vec::new());
    }
    chunks
}

/// Inserts a component into the table: a `remove-component` directive
/// deletes the existing entry; any other merge directive folds the
/// incoming component onto the existing one via [`apply_merge`];
/// otherwise priority decides, with a three-step tiebreak ladder at equal
/// priority (stub-by-name, then arch preference, then a hard collision that
/// keeps the existing entry).
fn insert_locked(state: &mut PoolState, component: Component, report: &mut LoadReport) {
    let data_id = component.data_id();

    let Some(existing) = state.table.get(&data_id).cloned() else {
        state.table.insert(data_id, Arc::new(StoredComponent::new(component)));
        state.generation += 1;
        report.inserted += 1;
        return;
    };

    if component.merge == MergeKind::RemoveComponent {
        state.table.remove(&data_id);
        state.generation += 1;
        return;
    }

    if component.merge != MergeKind::None {
        let mut merged = existing.component.clone();
        apply_merge(&mut merged, &component, component.merge);
        state.table.insert(data_id, Arc::new(StoredComponent::new(merged)));
        state.generation += 1;
        report.inserted += 1;
        return;
    }

    let old_priority = existing.component.priority;
    let new_priority = component.priority;

    if new_priority > old_priority {
        state.table.insert(data_id, Arc::new(StoredComponent::new(component)));
        state.generation += 1;
        report.inserted += 1;
        return;
    }
    if new_priority < old_priority {
        return;
    }

    if existing.component.name.is_empty() && !component.name.is_empty() {
        let mut patched = existing.component.clone();
        patched.name = component.name.clone();
        if patched.kind == ComponentKind::default() && component.kind != ComponentKind::default() {
            patched.kind = component.kind;
        }
        state.table.insert(data_id, Arc::new(StoredComponent::new(patched)));
        state.generation += 1;
        report.inserted += 1;
        return;
    }

    let existing_arch = existing.component.architecture.as_deref().unwrap_or(crate::arch::ANY);
    let incoming_arch = component.architecture.as_deref().unwrap_or(crate::arch::ANY);
    let existing_matches_host = crate::arch::is_compatible_with_host(existing_arch, &state.host_arch);
    let incoming_matches_host = crate::arch::is_compatible_with_host(incoming_arch, &state.host_arch);

    if !existing_matches_host && incoming_matches_host {
        state.table.insert(data_id, Arc::new(StoredComponent::new(component)));
        state.generation += 1;
        report.inserted += 1;
        return;
    }

    report.push(Diagnostic::Collision {
        data_id,
        resolution: format!("kept existing entry at priority {old_priority}"),
    });
}

/// Runs after every source in a load has been inserted: validates required
/// fields, hiding (not removing) components that fail, and flags categories
/// the active registry doesn't recognize.
/// Addon resolution and media-base-URL resolution are both already done by
/// the time a component reaches the table (the XML/YAML codecs resolve
/// media URLs eagerly against their `Context`, and `addons_of` computes the
/// extends relationship lazily from the `by_extends` index), so this step
/// is limited to validation and category diagnostics.
fn refine_locked(state: &mut PoolState, report: &mut LoadReport) {
    for stored in state.table.values() {
        if !stored.component.is_valid() {
            if !stored.is_hidden() {
                stored.hidden.store(true, Ordering::Relaxed);
                report.push(Diagnostic::Validation {
                    data_id: stored.component.data_id(),
                    reason: "missing required id or name".to_string(),
                });
            }
            continue;
        }
        for category in &stored.component.categories {
            if !state.category_registry.is_known(&category.0) {
                report.push(Diagnostic::UnknownCategory { name: category.0.clone() });
            }
        }
    }

    resolve_external_releases_locked(state, report);
}

/// Resolves every still-unfetched `ReleaseList::External` through the
/// installed `ReleaseFetcher`, when `allow_net` is set. A failed fetch
/// marks the list `errored` and is reported as a non-fatal diagnostic
/// rather than failing the load.
fn resolve_external_releases_locked(state: &mut PoolState, report: &mut LoadReport) {
    if !state.allow_net {
        return;
    }
    let Some(fetcher) = state.release_fetcher.clone() else {
        return;
    };
    let timeout = state.fetch_timeout;

    let mut resolved_any = false;
    let pending: Vec<(String, url::Url)> = state
        .table
        .iter()
        .filter_map(|(data_id, stored)| {
            if stored.component.releases.needs_fetch() && !stored.component.releases.errored {
                stored.component.releases.external_url.clone().map(|url| (data_id.clone(), url))
            } else {
                None
            }
        })
        .collect();

    for (data_id, url) in pending {
        let Some(stored) = state.table.get(&data_id) else { continue };
        let mut component = stored.component.clone();
        match fetcher.fetch(&url, timeout) {
            Ok(bytes) => match crate::xml::parse_external_release_document(&bytes) {
                Ok(entries) => component.releases.entries = entries,
                Err(err) => {
                    component.releases.errored = true;
                    report.push(Diagnostic::ReleaseFetchFailed {
                        data_id: data_id.clone(),
                        reason: err.to_string(),
                    });
                }
            },
            Err(err) => {
                component.releases.errored = true;
                report.push(Diagnostic::ReleaseFetchFailed { data_id: data_id.clone(), reason: err.to_string() });
            }
        }
        let hidden = stored.is_hidden();
        let replacement = StoredComponent::new(component);
        if hidden {
            replacement.hidden.store(true, Ordering::Relaxed);
        }
        state.table.insert(data_id, Arc::new(replacement));
        resolved_any = true;
    }

    if resolved_any {
        state.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::ComponentBuilder;
    use crate::translatable::TranslatableString;

    fn xml_source(xml: &str, priority: i32, origin: &str) -> Source {
        Source::xml(xml.as_bytes().to_vec(), Context::new("C").origin(origin).priority(priority))
    }

    #[test]
    fn higher_priority_source_wins_without_collision() {
        let pool = Pool::new();
        let a = xml_source(
            r#"<component><id>org.x</id><name>A</name></component>"#,
            0,
            "a",
        );
        let b = xml_source(
            r#"<component><id>org.x</id><name>B</name></component>"#,
            10,
            "b",
        );
        let report = pool.load(vec![a, b]);

        let results = pool.by_id(&AppId::from("org.x"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name.default_value(), Some("B"));
        assert!(report.diagnostics.iter().all(|d| !matches!(d, Diagnostic::Collision { .. })));
    }

    #[test]
    fn equal_priority_collision_keeps_existing_and_warns() {
        let pool = Pool::new();
        let a = xml_source(r#"<component><id>org.x</id><name>A</name></component>"#, 0, "a");
        let b = xml_source(r#"<component><id>org.x</id><name>B</name></component>"#, 0, "b");
        let report = pool.load(vec![a, b]);

        let results = pool.by_id(&AppId::from("org.x"));
        assert_eq!(results.len(), 1);
        assert!(report.diagnostics.iter().any(|d| matches!(d, Diagnostic::Collision { .. })));
    }

    #[test]
    fn remove_component_merge_deletes_existing_entry() {
        let pool = Pool::new();
        let initial = ComponentBuilder::default()
            .id(AppId::from("org.x"))
            .name(TranslatableString::with_default("X"))
            .build();
        {
            let mut state = pool.state.write().unwrap();
            insert_locked(&mut state, initial, &mut LoadReport::default());
        }

        let mut removal = ComponentBuilder::default()
            .id(AppId::from("org.x"))
            .name(TranslatableString::with_default("X"))
            .build();
        removal.merge = MergeKind::RemoveComponent;
        pool.load(vec![]); // no-op, exercises the empty-batch path
        {
            let mut state = pool.state.write().unwrap();
            insert_locked(&mut state, removal, &mut LoadReport::default());
        }

        assert!(pool.by_id(&AppId::from("org.x")).is_empty());
    }

    #[test]
    fn invalid_component_is_hidden_from_default_queries() {
        let pool = Pool::new();
        let mut report = LoadReport::default();
        let invalid = Component { id: AppId::from(""), ..Default::default() };
        {
            let mut state = pool.state.write().unwrap();
            insert_locked(&mut state, invalid, &mut report);
            refine_locked(&mut state, &mut report);
        }
        assert!(pool.all().is_empty());
        assert!(report.diagnostics.iter().any(|d| matches!(d, Diagnostic::Validation { .. })));
    }

    #[test]
    fn search_ranks_by_score_and_ties_by_id() {
        let pool = Pool::new();
        let a = ComponentBuilder::default()
            .id(AppId::from("org.a"))
            .name(TranslatableString::with_default("Firefox"))
            .build();
        let b = ComponentBuilder::default()
            .id(AppId::from("org.b"))
            .name(TranslatableString::with_default("FireFTP"))
            .build();
        {
            let mut state = pool.state.write().unwrap();
            insert_locked(&mut state, a, &mut LoadReport::default());
            insert_locked(&mut state, b, &mut LoadReport::default());
        }

        let results = pool.search("fire");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, AppId::from("org.a"));
    }

    #[test]
    fn clear_empties_the_table() {
        let pool = Pool::new();
        let component = ComponentBuilder::default()
            .id(AppId::from("org.x"))
            .name(TranslatableString::with_default("X"))
            .build();
        {
            let mut state = pool.state.write().unwrap();
            insert_locked(&mut state, component, &mut LoadReport::default());
        }
        assert_eq!(pool.all().len(), 1);
        pool.clear();
        assert!(pool.all().is_empty());
    }

    struct FakeFetcher {
        body: Result<Vec<u8>, String>,
    }

    impl crate::release::ReleaseFetcher for FakeFetcher {
        fn fetch(&self, _url: &url::Url, _timeout: std::time::Duration) -> std::io::Result<Vec<u8>> {
            self.body
                .clone()
                .map_err(|reason| std::io::Error::new(std::io::ErrorKind::Other, reason))
        }
    }

    #[test]
    fn external_release_list_resolves_through_fetcher_when_net_allowed() {
        let pool = Pool::new();
        pool.set_allow_net(true);
        pool.set_release_fetcher(Arc::new(FakeFetcher {
            body: Ok(br#"<releases><release version="1.0"/></releases>"#.to_vec()),
        }));

        let xml = xml_source(
            r#"<component><id>org.x</id><name>X</name><releases type="external" url="https://example.com/r.xml"/></component>"#,
            0,
            "a",
        );
        pool.load(vec![xml]);

        let results = pool.by_id(&AppId::from("org.x"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].releases.entries.len(), 1);
        assert_eq!(results[0].releases.entries[0].version, "1.0");
        assert!(!results[0].releases.errored);
    }

    #[test]
    fn failed_fetch_marks_release_list_errored_without_failing_the_load() {
        let pool = Pool::new();
        pool.set_allow_net(true);
        pool.set_release_fetcher(Arc::new(FakeFetcher { body: Err("timed out".to_string()) }));

        let xml = xml_source(
            r#"<component><id>org.x</id><name>X</name><releases type="external" url="https://example.com/r.xml"/></component>"#,
            0,
            "a",
        );
        let report = pool.load(vec![xml]);

        let results = pool.by_id(&AppId::from("org.x"));
        assert_eq!(results.len(), 1);
        assert!(results[0].releases.errored);
        assert!(report.diagnostics.iter().any(|d| matches!(d, Diagnostic::ReleaseFetchFailed { .. })));
    }

    #[test]
    fn external_release_list_untouched_when_net_disallowed() {
        let pool = Pool::new();
        pool.set_release_fetcher(Arc::new(FakeFetcher {
            body: Ok(br#"<releases><release version="1.0"/></releases>"#.to_vec()),
        }));

        let xml = xml_source(
            r#"<component><id>org.x</id><name>X</name><releases type="external" url="https://example.com/r.xml"/></component>"#,
            0,
            "a",
        );
        pool.load(vec![xml]);

        let results = pool.by_id(&AppId::from("org.x"));
        assert!(results[0].releases.entries.is_empty());
        assert!(results[0].releases.needs_fetch());
    }
}
