use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Cookbook, CookbookError, Entry, Result};

/// A recipe flattened down to its base ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub name: String,
    pub cook_time: i64,
    pub ingredients: Vec<IngredientQuantity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    pub name: String,
    pub quantity: i64,
}

impl Cookbook {
    /// Expands the recipe called `name` until only ingredients are left.
    ///
    /// Quantities multiply along every path from the recipe down to an ingredient and add up across
    /// paths. Ingredients are listed in the order they are first reached, walking required items
    /// depth first in declaration order.
    ///
    /// The expansion uses an explicit stack, so nesting depth never grows the call stack. Nothing
    /// here detects cycles: a recipe that requires itself keeps expanding until the expansion limit
    /// is hit, or forever when the limit is disabled.
    #[instrument(skip(self), err(level = "debug"))]
    pub fn summarize(&self, name: &str) -> Result<Summary> {
        let entries = self.entries.read();

        let recipe = entries
            .get(name)
            .ok_or_else(|| CookbookError::NotFound(name.to_string()))?
            .as_recipe()
            .ok_or_else(|| CookbookError::NotARecipe(name.to_string()))?;

        let overflow = || CookbookError::QuantityOverflow(name.to_string());

        let mut cook_time: i64 = 0;
        let mut base_ingredients: IndexMap<&str, i64> = IndexMap::new();

        // Pushed in reverse so items pop in declaration order
        let mut work_list: Vec<(&str, i64)> = recipe
            .required_items
            .iter()
            .rev()
            .map(|item| (item.name.as_str(), item.quantity))
            .collect();
        let mut expanded: usize = 0;

        while let Some((item_name, multiplier)) = work_list.pop() {
            expanded += 1;
            if let Some(limit) = self.expansion_limit {
                if expanded > limit {
                    return Err(CookbookError::CyclicReference {
                        name: name.to_string(),
                        limit,
                    });
                }
            }

            match entries.get(item_name) {
                None => return Err(CookbookError::MissingIngredient(item_name.to_string())),
                Some(Entry::Ingredient(ingredient)) => {
                    cook_time = ingredient
                        .cook_time
                        .checked_mul(multiplier)
                        .and_then(|time| cook_time.checked_add(time))
                        .ok_or_else(overflow)?;

                    let quantity = base_ingredients
                        .entry(ingredient.name.as_str())
                        .or_insert(0);
                    *quantity = quantity.checked_add(multiplier).ok_or_else(overflow)?;
                }
                Some(Entry::Recipe(sub_recipe)) => {
                    for item in sub_recipe.required_items.iter().rev() {
                        let scaled = item.quantity.checked_mul(multiplier).ok_or_else(overflow)?;
                        work_list.push((item.name.as_str(), scaled));
                    }
                }
            }
        }

        tracing::debug!(expanded, cook_time, "Flattened recipe");

        Ok(Summary {
            name: recipe.name.clone(),
            cook_time,
            ingredients: base_ingredients
                .into_iter()
                .map(|(name, quantity)| IngredientQuantity {
                    name: name.to_string(),
                    quantity,
                })
                .collect(),
        })
    }
}
