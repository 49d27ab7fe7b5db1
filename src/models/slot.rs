use serde::{Deserialize, Serialize};

use crate::store::Resource;

/// One dispenser position: the slot index plus the ingredient currently
/// loaded into it, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub id: i64,
    pub ingredient_id: Option<i64>,
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        self.ingredient_id.is_none()
    }
}

impl Resource for Slot {
    const COLLECTION: &'static str = "slots";
    type Fields = NewSlot;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Creation payload for a slot; the backend assigns the slot index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSlot {
    pub ingredient_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slot_listing() {
        let json = r#"[{"id":0,"ingredient_id":3},{"id":1,"ingredient_id":null}]"#;
        let slots: Vec<Slot> = serde_json::from_str(json).unwrap();

        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].ingredient_id, Some(3));
        assert!(!slots[0].is_empty());
        assert!(slots[1].is_empty());
    }
}
