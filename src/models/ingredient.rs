use serde::{Deserialize, Serialize};

use crate::store::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub alcohol_percentage: f64,
}

impl Ingredient {
    /// Whether this ingredient contributes alcohol to a mix.
    pub fn is_alcoholic(&self) -> bool {
        self.alcohol_percentage > 0.0
    }
}

impl Resource for Ingredient {
    const COLLECTION: &'static str = "ingredients";
    type Fields = NewIngredient;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Creation payload for an ingredient. The backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIngredient {
    pub name: String,
    pub alcohol_percentage: f64,
}
