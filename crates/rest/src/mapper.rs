//! Domain mapper.
//!
//! Converts between the external DTOs and the stored document
//! representation (`serde_json::Value`). Documents that fail to map back
//! into a DTO are classified as fatal by the worker.

use hrs_types::{Ingredient, Recipe};
use serde_json::Value;

/// Maps a recipe DTO to its stored document.
pub fn recipe_to_document(recipe: &Recipe) -> Result<Value, serde_json::Error> {
    serde_json::to_value(recipe)
}

/// Maps a stored document back to a recipe DTO.
pub fn document_to_recipe(document: Value) -> Result<Recipe, serde_json::Error> {
    serde_json::from_value(document)
}

/// Maps an ingredient DTO to its stored document.
pub fn ingredient_to_document(ingredient: &Ingredient) -> Result<Value, serde_json::Error> {
    serde_json::to_value(ingredient)
}

/// Maps a stored document back to an ingredient DTO.
pub fn document_to_ingredient(document: Value) -> Result<Ingredient, serde_json::Error> {
    serde_json::from_value(document)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_recipe_round_trip() {
        let recipe = Recipe {
            id: "r-1".to_string(),
            name: "Tortilla".to_string(),
            description: "Spanish".to_string(),
            ingredients: vec!["i-1".to_string(), "i-2".to_string()],
            steps: vec!["peel".to_string(), "fry".to_string(), "mix".to_string()],
        };

        let document = recipe_to_document(&recipe).unwrap();
        assert_eq!(document["id"], "r-1");
        assert_eq!(document["steps"][2], "mix");

        let back = document_to_recipe(document).unwrap();
        assert_eq!(back, recipe);
    }

    #[test]
    fn test_corrupt_document_fails_to_map() {
        let document = json!({"id": "i-1", "quantity": "three"});
        assert!(document_to_ingredient(document).is_err());
    }
}
