//! Tokenization and scoring for free-text component search.
//!
//! Terms are lowercased, folded, split on punctuation/whitespace, and
//! short or greylisted terms dropped; hits then rank per-field against a
//! fixed weight table instead of a generic relevance score.

mod stem;

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

use crate::component::Component;
use crate::enums::Provide;

/// Per-token-kind score contributions.
const SCORE_ID: i32 = 1000;
const SCORE_NAME_EXACT: i32 = 800;
const SCORE_NAME_PREFIX: i32 = 500;
const SCORE_KEYWORD: i32 = 400;
const SCORE_SUMMARY: i32 = 100;
const SCORE_CATEGORY: i32 = 80;
const SCORE_DESCRIPTION: i32 = 50;
const SCORE_MISC: i32 = 20;

/// Stop-words dropped from every tokenization pass unless a caller supplies
/// its own list via [`tokenize_with_greylist`].
pub fn default_greylist() -> HashSet<String> {
    ["app", "application", "package", "program", "tool"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Lowercases, NFKC-folds, splits on `[\s\-_/.,:;]+`, drops tokens shorter
/// than 3 characters or present in `greylist`, then stems what's left.
pub fn tokenize_with_greylist(text: &str, greylist: &HashSet<String>) -> Vec<String> {
    let folded: String = text.nfkc().collect::<String>().to_lowercase();
    folded
        .split(|c: char| c.is_whitespace() || "-_/.,:;".contains(c))
        .filter(|word| word.chars().count() >= 3)
        .filter(|word| !greylist.contains(*word))
        .map(stem::stem)
        .collect()
}

/// [`tokenize_with_greylist`] against [`default_greylist`].
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with_greylist(text, &default_greylist())
}

struct Fields {
    id: Vec<String>,
    name: Vec<String>,
    keyword: Vec<String>,
    summary: Vec<String>,
    category: Vec<String>,
    description: Vec<String>,
    misc: Vec<String>,
}

fn fields_of(component: &Component) -> Fields {
    let greylist = default_greylist();
    let tok = |s: &str| tokenize_with_greylist(s, &greylist);

    let mut id = tok(&component.id.0);
    id.extend(component.id.0.split('.').flat_map(|part| tok(part)));

    let mut name = Vec::new();
    for value in component.name.0.values() {
        name.extend(tok(value));
    }

    let mut keyword = Vec::new();
    if let Some(keywords) = &component.keywords {
        for items in keywords.0.values() {
            for item in items {
                keyword.extend(tok(item));
            }
        }
    }

    let mut summary = Vec::new();
    if let Some(value) = &component.summary {
        for text in value.0.values() {
            summary.extend(tok(text));
        }
    }

    let category = component.categories.iter().flat_map(|c| tok(&c.0)).collect();

    let mut description = Vec::new();
    for markup in component.description.values() {
        description.extend(tok(&markup.to_plain_text()));
    }

    let mut misc = Vec::new();
    for provide in &component.provides {
        match provide {
            Provide::Binary(v) => misc.extend(tok(v)),
            Provide::Library(v) => misc.extend(tok(&v.to_string_lossy())),
            Provide::MimeType(v) => misc.extend(tok(v)),
            _ => {}
        }
    }
    for parent in &component.extends {
        misc.extend(tok(&parent.0));
    }

    Fields { id, name, keyword, summary, category, description, misc }
}

/// Every distinct token a component indexes under, used by the pool's
/// `search_index` posting lists to find candidate components quickly; final
/// scoring still runs through [`score`].
pub(crate) fn index_tokens(component: &Component) -> HashSet<String> {
    let fields = fields_of(component);
    fields
        .id
        .into_iter()
        .chain(fields.name)
        .chain(fields.keyword)
        .chain(fields.summary)
        .chain(fields.category)
        .chain(fields.description)
        .chain(fields.misc)
        .collect()
}

/// Scores `component` against an already-tokenized `query` using the
/// weight table above. Returns the summed score; callers drop results ≤ 0.
pub fn score(component: &Component, query: &[String]) -> i32 {
    let fields = fields_of(component);
    let id: HashSet<&str> = fields.id.iter().map(String::as_str).collect();
    let name: HashSet<&str> = fields.name.iter().map(String::as_str).collect();
    let keyword: HashSet<&str> = fields.keyword.iter().map(String::as_str).collect();
    let summary: HashSet<&str> = fields.summary.iter().map(String::as_str).collect();
    let category: HashSet<&str> = fields.category.iter().map(String::as_str).collect();
    let description: HashSet<&str> = fields.description.iter().map(String::as_str).collect();
    let misc: HashSet<&str> = fields.misc.iter().map(String::as_str).collect();

    let mut total = 0;
    for token in query {
        total += if id.contains(token.as_str()) {
            SCORE_ID
        } else if name.contains(token.as_str()) {
            SCORE_NAME_EXACT
        } else if name.iter().any(|n| n.starts_with(token.as_str())) {
            SCORE_NAME_PREFIX
        } else if keyword.contains(token.as_str()) {
            SCORE_KEYWORD
        } else if summary.contains(token.as_str()) {
            SCORE_SUMMARY
        } else if category.contains(token.as_str()) {
            SCORE_CATEGORY
        } else if description.contains(token.as_str()) {
            SCORE_DESCRIPTION
        } else if misc.contains(token.as_str()) {
            SCORE_MISC
        } else {
            0
        };
    }
    total
}

/// Ranks `components` against `term`: tokenizes the query, scores every
/// candidate, drops non-positive scores, sorts by descending score with
/// ties broken by id.
pub fn rank<'a>(components: impl IntoIterator<Item = &'a Component>, term: &str) -> Vec<&'a Component> {
    let query = tokenize(term);
    let mut scored: Vec<(i32, &Component)> = components
        .into_iter()
        .map(|c| (score(c, &query), c))
        .filter(|(s, _)| *s > 0)
        .collect();
    scored.sort_by(|(score_a, a), (score_b, b)| score_b.cmp(score_a).then_with(|| a.id.cmp(&b.id)));
    scored.into_iter().map(|(_, c)| c).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::ComponentBuilder;
    use crate::id::AppId;
    use crate::translatable::TranslatableString;

    fn sample() -> Component {
        ComponentBuilder::default()
            .id(AppId::from("org.gnome.gedit"))
            .name(TranslatableString::with_default("Text Editor"))
            .summary(TranslatableString::with_default("Edit text files"))
            .build()
    }

    #[test]
    fn tokenize_lowercases_and_drops_short_words() {
        let tokens = tokenize("GNOME Text Editor, a tool to edit text");
        assert!(tokens.contains(&"gnome".to_string()));
        assert!(tokens.contains(&"text".to_string()));
        assert!(!tokens.contains(&"to".to_string()));
        assert!(!tokens.contains(&"tool".to_string()));
    }

    #[test]
    fn exact_name_match_outscores_summary_match() {
        let component = sample();
        let name_score = score(&component, &tokenize("editor"));
        let summary_score = score(&component, &tokenize("files"));
        assert!(name_score > summary_score);
    }

    #[test]
    fn id_token_match_scores_highest() {
        let component = sample();
        let id_score = score(&component, &tokenize("gedit"));
        let name_score = score(&component, &tokenize("editor"));
        assert!(id_score > name_score);
    }

    #[test]
    fn rank_omits_non_matching_components() {
        let components = vec![sample()];
        let results = rank(components.iter(), "gedit");
        assert_eq!(results.len(), 1);

        let results = rank(components.iter(), "zzz_no_match_zzz");
        assert!(results.is_empty());
    }
}
