//! `apply_merge`: combines an incoming component into an already-stored one
//! under `append`/`replace` field semantics: `append` unions list/set/map
//! fields and fills in empty scalars, `replace` overwrites every non-empty
//! field of the incoming component onto the existing one.

use crate::component::Component;
use crate::enums::MergeKind;
use crate::markup::Description;
use crate::translatable::{TranslatableList, TranslatableString};

fn union_append<T: PartialEq + Clone>(existing: &mut Vec<T>, incoming: &[T]) {
    for item in incoming {
        if !existing.contains(item) {
            existing.push(item.clone());
        }
    }
}

fn merge_locale_string(existing: &mut TranslatableString, incoming: &TranslatableString) {
    for (locale, text) in &incoming.0 {
        existing.0.entry(locale.clone()).or_insert_with(|| text.clone());
    }
}

fn merge_locale_list(existing: &mut TranslatableList, incoming: &TranslatableList) {
    for (locale, items) in &incoming.0 {
        existing.0.entry(locale.clone()).or_insert_with(|| items.clone());
    }
}

fn merge_description(existing: &mut Description, incoming: &Description) {
    for (locale, markup) in incoming {
        existing.entry(locale.clone()).or_insert_with(|| markup.clone());
    }
}

/// Applies `incoming` onto `existing` per `kind`'s field semantics. Called
/// only once the caller has confirmed `kind != MergeKind::RemoveComponent`
/// (that case is handled by the caller removing the table entry outright).
pub(crate) fn apply_merge(existing: &mut Component, incoming: &Component, kind: MergeKind) {
    match kind {
        MergeKind::Append => apply_append(existing, incoming),
        MergeKind::Replace => apply_replace(existing, incoming),
        MergeKind::None | MergeKind::RemoveComponent => {}
    }
}

fn apply_append(existing: &mut Component, incoming: &Component) {
    if existing.kind == Default::default() && incoming.kind != Default::default() {
        existing.kind = incoming.kind;
    }
    merge_locale_string(&mut existing.name, &incoming.name);
    match (&mut existing.summary, &incoming.summary) {
        (None, Some(s)) => existing.summary = Some(s.clone()),
        (Some(e), Some(i)) => merge_locale_string(e, i),
        _ => {}
    }
    merge_description(&mut existing.description, &incoming.description);

    if existing.project_license.is_none() {
        existing.project_license = incoming.project_license.clone();
    }
    if existing.metadata_license.is_none() {
        existing.metadata_license = incoming.metadata_license.clone();
    }
    if existing.project_group.is_none() {
        existing.project_group = incoming.project_group.clone();
    }
    if existing.developer.id.is_none() {
        existing.developer.id = incoming.developer.id.clone();
    }
    merge_locale_string(&mut existing.developer.name, &incoming.developer.name);

    existing.compulsory_for_desktop.extend(incoming.compulsory_for_desktop.iter().cloned());
    union_append(&mut existing.extends, &incoming.extends);
    union_append(&mut existing.suggests, &incoming.suggests);
    union_append(&mut existing.replaces, &incoming.replaces);
    union_append(&mut existing.tags, &incoming.tags);
    union_append(&mut existing.requires, &incoming.requires);
    union_append(&mut existing.recommends, &incoming.recommends);
    union_append(&mut existing.supports, &incoming.supports);
    union_append(&mut existing.icons, &incoming.icons);
    union_append(&mut existing.screenshots, &incoming.screenshots);
    union_append(&mut existing.urls, &incoming.urls);
    if existing.branding.is_default() {
        existing.branding = incoming.branding.clone();
    } else {
        union_append(&mut existing.branding.colors, &incoming.branding.colors);
    }
    if existing.update_contact.is_none() {
        existing.update_contact = incoming.update_contact.clone();
    }
    union_append(&mut existing.categories, &incoming.categories);
    union_append(&mut existing.launchables, &incoming.launchables);
    union_append(&mut existing.pkgnames, &incoming.pkgnames);
    if existing.source_pkgname.is_none() {
        existing.source_pkgname = incoming.source_pkgname.clone();
    }
    union_append(&mut existing.bundles, &incoming.bundles);
    union_append(&mut existing.releases.entries, &incoming.releases.entries);
    if existing.releases.external_url.is_none() {
        existing.releases.external_url = incoming.releases.external_url.clone();
    }
    union_append(&mut existing.languages, &incoming.languages);
    union_append(&mut existing.mimetypes, &incoming.mimetypes);
    union_append(&mut existing.kudos, &incoming.kudos);
    match (&mut existing.keywords, &incoming.keywords) {
        (None, Some(k)) => existing.keywords = Some(k.clone()),
        (Some(e), Some(i)) => merge_locale_list(e, i),
        _ => {}
    }
    union_append(&mut existing.content_ratings, &incoming.content_ratings);
    union_append(&mut existing.agreements, &incoming.agreements);
    union_append(&mut existing.reviews, &incoming.reviews);
    union_append(&mut existing.provides, &incoming.provides);
    union_append(&mut existing.translations, &incoming.translations);

    if existing.scope.is_none() {
        existing.scope = incoming.scope.clone();
    }
    if existing.bundle_kind.is_none() {
        existing.bundle_kind = incoming.bundle_kind.clone();
    }
    if existing.origin.is_none() {
        existing.origin = incoming.origin.clone();
    }
    if existing.branch.is_none() {
        existing.branch = incoming.branch.clone();
    }
    if existing.architecture.is_none() {
        existing.architecture = incoming.architecture.clone();
    }
    if existing.date_eol.is_none() {
        existing.date_eol = incoming.date_eol;
    }
    for (key, value) in &incoming.metadata {
        existing.metadata.entry(key.clone()).or_insert_with(|| value.clone());
    }
}

fn apply_replace(existing: &mut Component, incoming: &Component) {
    macro_rules! replace_if_non_empty {
        ($field:ident, $empty:expr) => {
            if !$empty(&incoming.$field) {
                existing.$field = incoming.$field.clone();
            }
        };
    }

    if incoming.kind != Default::default() {
        existing.kind = incoming.kind;
    }
    if !incoming.name.is_empty() {
        existing.name = incoming.name.clone();
    }
    replace_if_non_empty!(summary, |v: &Option<TranslatableString>| v.is_none());
    if !incoming.description.is_empty() {
        existing.description = incoming.description.clone();
    }
    replace_if_non_empty!(project_license, |v: &Option<crate::license::License>| v.is_none());
    replace_if_non_empty!(metadata_license, |v: &Option<crate::license::License>| v.is_none());
    replace_if_non_empty!(project_group, |v: &Option<String>| v.is_none());
    if !incoming.developer.is_empty() {
        existing.developer = incoming.developer.clone();
    }
    if !incoming.compulsory_for_desktop.is_empty() {
        existing.compulsory_for_desktop = incoming.compulsory_for_desktop.clone();
    }
    if !incoming.extends.is_empty() {
        existing.extends = incoming.extends.clone();
    }
    if !incoming.suggests.is_empty() {
        existing.suggests = incoming.suggests.clone();
    }
    if !incoming.replaces.is_empty() {
        existing.replaces = incoming.replaces.clone();
    }
    if !incoming.tags.is_empty() {
        existing.tags = incoming.tags.clone();
    }
    if !incoming.requires.is_empty() {
        existing.requires = incoming.requires.clone();
    }
    if !incoming.recommends.is_empty() {
        existing.recommends = incoming.recommends.clone();
    }
    if !incoming.supports.is_empty() {
        existing.supports = incoming.supports.clone();
    }
    if !incoming.icons.is_empty() {
        existing.icons = incoming.icons.clone();
    }
    if !incoming.screenshots.is_empty() {
        existing.screenshots = incoming.screenshots.clone();
    }
    if !incoming.urls.is_empty() {
        existing.urls = incoming.urls.clone();
    }
    if !incoming.branding.is_default() {
        existing.branding = incoming.branding.clone();
    }
    replace_if_non_empty!(update_contact, |v: &Option<String>| v.is_none());
    if !incoming.categories.is_empty() {
        existing.categories = incoming.categories.clone();
    }
    if !incoming.launchables.is_empty() {
        existing.launchables = incoming.launchables.clone();
    }
    if !incoming.pkgnames.is_empty() {
        existing.pkgnames = incoming.pkgnames.clone();
    }
    replace_if_non_empty!(source_pkgname, |v: &Option<String>| v.is_none());
    if !incoming.bundles.is_empty() {
        existing.bundles = incoming.bundles.clone();
    }
    if !incoming.releases.entries.is_empty() || incoming.releases.external_url.is_some() {
        existing.releases = incoming.releases.clone();
    }
    if !incoming.languages.is_empty() {
        existing.languages = incoming.languages.clone();
    }
    if !incoming.mimetypes.is_empty() {
        existing.mimetypes = incoming.mimetypes.clone();
    }
    if !incoming.kudos.is_empty() {
        existing.kudos = incoming.kudos.clone();
    }
    if incoming.keywords.is_some() {
        existing.keywords = incoming.keywords.clone();
    }
    if !incoming.content_ratings.is_empty() {
        existing.content_ratings = incoming.content_ratings.clone();
    }
    if !incoming.agreements.is_empty() {
        existing.agreements = incoming.agreements.clone();
    }
    if !incoming.reviews.is_empty() {
        existing.reviews = incoming.reviews.clone();
    }
    if !incoming.provides.is_empty() {
        existing.provides = incoming.provides.clone();
    }
    if !incoming.translations.is_empty() {
        existing.translations = incoming.translations.clone();
    }
    replace_if_non_empty!(scope, |v: &Option<String>| v.is_none());
    replace_if_non_empty!(bundle_kind, |v: &Option<String>| v.is_none());
    replace_if_non_empty!(origin, |v: &Option<String>| v.is_none());
    replace_if_non_empty!(branch, |v: &Option<String>| v.is_none());
    replace_if_non_empty!(architecture, |v: &Option<String>| v.is_none());
    if incoming.date_eol.is_some() {
        existing.date_eol = incoming.date_eol;
    }
    for (key, value) in &incoming.metadata {
        existing.metadata.insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::ComponentBuilder;
    use crate::category::Category;
    use crate::id::AppId;

    fn minimal(name: &str) -> Component {
        ComponentBuilder::default()
            .id(AppId::from("org.x"))
            .name(TranslatableString::with_default(name))
            .build()
    }

    #[test]
    fn append_keeps_existing_name_and_unions_categories() {
        let mut existing = minimal("X");
        existing.categories.push(Category::from("Office"));
        let mut incoming = minimal("Y");
        incoming.categories = vec![Category::from("Office"), Category::from("Utility")];

        apply_merge(&mut existing, &incoming, MergeKind::Append);

        assert_eq!(existing.name.default_value(), Some("X"));
        assert_eq!(existing.categories.len(), 2);
    }

    #[test]
    fn replace_overwrites_non_empty_fields() {
        let mut existing = minimal("X");
        let incoming = minimal("Y");

        apply_merge(&mut existing, &incoming, MergeKind::Replace);

        assert_eq!(existing.name.default_value(), Some("Y"));
    }

    #[test]
    fn append_leaves_priority_and_origin_semantics_to_the_caller() {
        let mut existing = minimal("X");
        existing.priority = 5;
        let mut incoming = minimal("Y");
        incoming.priority = 50;

        apply_merge(&mut existing, &incoming, MergeKind::Append);

        // `apply_merge` never touches `priority`: an append keeps the
        // target's priority unchanged.
        assert_eq!(existing.priority, 5);
    }
}
