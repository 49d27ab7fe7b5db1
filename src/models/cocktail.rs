use serde::{Deserialize, Serialize};

use crate::store::Resource;

use super::Ingredient;

/// A mixed drink as the backend reports it: the referenced ingredient
/// records embedded in recipe order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cocktail {
    pub id: i64,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
}

impl Cocktail {
    /// Ids of the referenced ingredients, in recipe order.
    pub fn ingredient_ids(&self) -> Vec<i64> {
        self.ingredients.iter().map(|i| i.id).collect()
    }

    /// Whether any referenced ingredient is alcoholic.
    pub fn is_alcoholic(&self) -> bool {
        self.ingredients.iter().any(Ingredient::is_alcoholic)
    }
}

impl Resource for Cocktail {
    const COLLECTION: &'static str = "cocktails";
    type Fields = NewCocktail;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Creation payload: a name plus ingredient references by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCocktail {
    pub name: String,
    pub ingredients: Vec<i64>,
}
