//! Wire types for the dispenser backend.
//!
//! - `Ingredient`: a pumpable liquid and its alcohol content
//! - `Cocktail`: a named recipe referencing ingredients in order
//! - `Slot`: one dispenser position and the ingredient loaded into it
//!
//! Each record type has a `New*` companion carrying the fields a POST
//! sends; ids are always assigned by the backend.

pub mod cocktail;
pub mod ingredient;
pub mod slot;

pub use cocktail::{Cocktail, NewCocktail};
pub use ingredient::{Ingredient, NewIngredient};
pub use slot::{NewSlot, Slot};
