use std::collections::HashSet;

use tracing::instrument;

use crate::{
    Cookbook, CookbookError, Entry, EntryKind, Ingredient, NewEntry, Recipe, RequiredItem, Result,
};

impl Cookbook {
    /// Validates `new_entry` and adds it to the cookbook.
    ///
    /// Checks run in a fixed order and the first failure wins: the name must be new, then the
    /// payload must be valid for its type. Required items are not looked up, so a recipe can
    /// reference entries that will be registered later. On any error nothing is inserted.
    #[instrument(skip_all, fields(name = %new_entry.name, kind = %new_entry.kind), err(level = "debug"))]
    pub fn register(&self, new_entry: NewEntry) -> Result<()> {
        if new_entry.name.trim().is_empty() {
            return Err(CookbookError::BlankName);
        }

        let mut entries = self.entries.write();

        if entries.contains_key(&new_entry.name) {
            return Err(CookbookError::DuplicateName(new_entry.name));
        }

        let entry = build_entry(new_entry)?;
        let kind = entry.kind();

        tracing::info!(name = entry.name(), %kind, "Registered entry");
        entries.insert(entry.name().to_string(), entry);

        Ok(())
    }
}

fn build_entry(new_entry: NewEntry) -> Result<Entry> {
    let NewEntry {
        name,
        kind,
        cook_time,
        required_items,
    } = new_entry;

    match kind.parse::<EntryKind>()? {
        EntryKind::Ingredient => {
            let cook_time = cook_time
                .as_ref()
                .and_then(serde_json::Value::as_i64)
                .filter(|cook_time| *cook_time >= 0)
                .ok_or(CookbookError::InvalidCookTime)?;

            Ok(Entry::Ingredient(Ingredient { name, cook_time }))
        }
        EntryKind::Recipe => {
            let required_items = required_items.unwrap_or_default();
            ensure_unique_items(&required_items)?;

            Ok(Entry::Recipe(Recipe {
                name,
                required_items,
            }))
        }
    }
}

fn ensure_unique_items(required_items: &[RequiredItem]) -> Result<()> {
    let mut seen = HashSet::with_capacity(required_items.len());

    for item in required_items {
        if !seen.insert(item.name.as_str()) {
            return Err(CookbookError::DuplicateRequiredItem(item.name.clone()));
        }
    }

    Ok(())
}
