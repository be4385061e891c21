use std::path::Path;

use color_eyre::eyre::eyre;
use cookbook::Cookbook;

use crate::{seed, Result};

pub(crate) fn validate(path: &Path) -> Result<()> {
    let cookbook = Cookbook::new();
    let registered = seed::load_into(&cookbook, path)?;

    println!("Loaded {registered} entries from {}", path.display());

    let recipe_names = cookbook.recipe_names();
    println!("Validating {} recipes", recipe_names.len());

    let mut failures = 0;
    for name in &recipe_names {
        match cookbook.summarize(name) {
            Ok(summary) => println!(
                "{name}: {} ingredients, cook time {}",
                summary.ingredients.len(),
                summary.cook_time
            ),
            Err(e) => {
                println!("{name}: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(eyre!(
            "{failures} of {} recipes failed to summarize",
            recipe_names.len()
        ));
    }

    println!("Recipes Valid! ✅");

    Ok(())
}

#[cfg(test)]
mod test {
    use cookbook::CookbookError;

    use super::*;
    use crate::seed::write_seed_file;

    #[test]
    fn valid_seed_passes() {
        let file = write_seed_file(
            r#"[
                { "name": "Egg", "type": "ingredient", "cookTime": 2 },
                { "name": "Omelette", "type": "recipe", "requiredItems": [{ "name": "Egg", "quantity": 3 }] },
                { "name": "Brunch", "type": "recipe", "requiredItems": [{ "name": "Omelette", "quantity": 2 }] }
            ]"#,
        );

        validate(file.path()).unwrap();
    }

    #[test]
    fn missing_reference_fails() {
        let file = write_seed_file(
            r#"[
                { "name": "Toast", "type": "recipe", "requiredItems": [{ "name": "Bread", "quantity": 1 }] }
            ]"#,
        );

        let err = validate(file.path()).unwrap_err();

        assert_eq!(err.to_string(), "1 of 1 recipes failed to summarize");
    }

    #[test]
    fn duplicate_entry_fails_while_loading() {
        let file = write_seed_file(
            r#"[
                { "name": "Egg", "type": "ingredient", "cookTime": 2 },
                { "name": "Egg", "type": "ingredient", "cookTime": 3 }
            ]"#,
        );

        let err = validate(file.path()).unwrap_err();

        assert_eq!(
            err.downcast_ref::<CookbookError>(),
            Some(&CookbookError::DuplicateName("Egg".to_string()))
        );
    }
}
