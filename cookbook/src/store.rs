use std::collections::HashMap;

use parking_lot::RwLock;

use crate::Entry;

/// How many work items a single summary may pop before it is treated as cyclic.
pub const DEFAULT_EXPANSION_LIMIT: usize = 1_000_000;

/// The store of every registered entry, keyed by name.
///
/// Registration takes the write lock for the whole check-then-insert, and summaries hold the read
/// lock for their whole traversal. Entries are never mutated once inserted.
#[derive(Debug)]
pub struct Cookbook {
    pub(crate) entries: RwLock<HashMap<String, Entry>>,
    pub(crate) expansion_limit: Option<usize>,
}

impl Default for Cookbook {
    fn default() -> Self {
        Self::new()
    }
}

impl Cookbook {
    pub fn new() -> Self {
        Self::with_expansion_limit(Some(DEFAULT_EXPANSION_LIMIT))
    }

    /// `None` disables the cycle guard, so a recipe that requires itself never finishes summarizing.
    pub fn with_expansion_limit(expansion_limit: Option<usize>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            expansion_limit,
        }
    }

    pub fn expansion_limit(&self) -> Option<usize> {
        self.expansion_limit
    }

    pub fn get(&self, name: &str) -> Option<Entry> {
        self.entries.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Names of every registered recipe, sorted.
    pub fn recipe_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .read()
            .values()
            .filter_map(Entry::as_recipe)
            .map(|recipe| recipe.name.clone())
            .collect();
        names.sort();

        names
    }
}
