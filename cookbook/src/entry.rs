use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::CookbookError;

/// A named thing in the cookbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub cook_time: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub required_items: Vec<RequiredItem>,
}

/// A reference from a recipe to another entry, by name.
///
/// The referenced entry doesn't have to exist when the recipe is registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: i64,
}

impl RequiredItem {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Ingredient(ingredient) => &ingredient.name,
            Entry::Recipe(recipe) => &recipe.name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Ingredient(_) => EntryKind::Ingredient,
            Entry::Recipe(_) => EntryKind::Recipe,
        }
    }

    pub fn as_recipe(&self) -> Option<&Recipe> {
        match self {
            Entry::Recipe(recipe) => Some(recipe),
            Entry::Ingredient(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Ingredient,
    Recipe,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Ingredient => "ingredient",
            EntryKind::Recipe => "recipe",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = CookbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ingredient" => Ok(EntryKind::Ingredient),
            "recipe" => Ok(EntryKind::Recipe),
            other => Err(CookbookError::InvalidType(other.to_string())),
        }
    }
}

/// An unvalidated registration request, in the same shape it arrives over the wire.
///
/// `cook_time` is kept as raw JSON so that a float or a string can be reported as an invalid cook
/// time instead of failing to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_items: Option<Vec<RequiredItem>>,
}

impl NewEntry {
    pub fn ingredient(name: impl Into<String>, cook_time: i64) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Ingredient.to_string(),
            cook_time: Some(cook_time.into()),
            required_items: None,
        }
    }

    pub fn recipe<'a>(
        name: impl Into<String>,
        required_items: impl IntoIterator<Item = (&'a str, i64)>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Recipe.to_string(),
            cook_time: None,
            required_items: Some(
                required_items
                    .into_iter()
                    .map(|(name, quantity)| RequiredItem::new(name, quantity))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn entry_kind_from_str() {
        assert_eq!(
            "ingredient".parse::<EntryKind>().unwrap(),
            EntryKind::Ingredient
        );
        assert_eq!("recipe".parse::<EntryKind>().unwrap(), EntryKind::Recipe);

        assert_eq!(
            "Recipe".parse::<EntryKind>(),
            Err(CookbookError::InvalidType("Recipe".to_string()))
        );
    }

    #[test]
    fn entry_serializes_with_type_tag() {
        let entry = Entry::Ingredient(Ingredient {
            name: "Egg".to_string(),
            cook_time: 2,
        });

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "ingredient", "name": "Egg", "cookTime": 2 })
        );
    }

    #[test]
    fn new_entry_keeps_raw_cook_time() {
        let new_entry: NewEntry = serde_json::from_value(serde_json::json!({
            "name": "Egg",
            "type": "ingredient",
            "cookTime": 2.5,
        }))
        .unwrap();

        assert_eq!(new_entry.cook_time, Some(serde_json::json!(2.5)));
        assert_eq!(new_entry.required_items, None);
    }

    #[test]
    fn new_entry_requires_item_quantities() {
        let parsed = serde_json::from_value::<NewEntry>(serde_json::json!({
            "name": "Omelette",
            "type": "recipe",
            "requiredItems": [{ "name": "Egg" }],
        }));

        assert!(parsed.is_err());
    }
}
