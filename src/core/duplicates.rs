//! Duplicate detection within one catalog.

use std::collections::BTreeMap;

use serde::Serialize;

use super::catalog::CatalogIndex;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathTranslation {
    pub path: String,
    pub translation: String,
}

/// Entry paths sharing the same last segment (e.g. `a.title` and `b.title`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateLeaves {
    pub leaf: String,
    pub translations: Vec<PathTranslation>,
}

/// Entry paths sharing the same translation text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateTranslation {
    pub translation: String,
    pub occurrences: usize,
    pub paths: Vec<String>,
}

pub fn last_segment(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

/// Group entry paths by their last segment. Groups are sorted by leaf.
pub fn find_duplicate_leaves(index: &CatalogIndex) -> Vec<DuplicateLeaves> {
    let mut groups: BTreeMap<&str, Vec<PathTranslation>> = BTreeMap::new();
    for path in index.sorted_keys() {
        groups
            .entry(last_segment(path))
            .or_default()
            .push(PathTranslation {
                path: path.clone(),
                translation: index.get_translation(path).unwrap_or_default().to_string(),
            });
    }

    groups
        .into_iter()
        .filter(|(_, translations)| translations.len() > 1)
        .map(|(leaf, translations)| DuplicateLeaves {
            leaf: leaf.to_string(),
            translations,
        })
        .collect()
}

/// Group entry paths by identical, non-empty translation text.
///
/// Sorted by ascending occurrence count, then by text.
pub fn find_duplicate_translations(index: &CatalogIndex) -> Vec<DuplicateTranslation> {
    let mut groups: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for path in index.sorted_keys() {
        let translation = index.get_translation(path).unwrap_or_default();
        if translation.is_empty() {
            continue;
        }
        groups.entry(translation).or_default().push(path.clone());
    }

    let mut duplicates: Vec<DuplicateTranslation> = groups
        .into_iter()
        .filter(|(_, paths)| paths.len() > 1)
        .map(|(translation, paths)| DuplicateTranslation {
            translation: translation.to_string(),
            occurrences: paths.len(),
            paths,
        })
        .collect();

    // stable: ties keep the text order from the BTreeMap
    duplicates.sort_by_key(|d| d.occurrences);
    duplicates
}
