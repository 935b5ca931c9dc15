//! The user's declared on-hand ingredient inventory.
//!
//! Entries are keyed by exact ingredient name. Recipes assigned to meals draw
//! the ledger down and give back what they took when they are replaced; only
//! names the user declared are tracked, everything else a recipe mentions is
//! ignored.

use std::collections::BTreeMap;

use mealplan_types::{Ingredient, Recipe};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub amount: f64,
    pub unit: String,
}

/// Encodes as `{ "<name>": { "amount": .., "unit": .. } }`, ordered by name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientLedger {
    entries: BTreeMap<String, LedgerEntry>,
}

impl IngredientLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `ingredient` into the ledger.
    ///
    /// Same name and unit: amounts are summed. Same name, different unit: the
    /// new entry replaces the old one outright. Unknown name: inserted.
    pub fn add(&mut self, ingredient: Ingredient) {
        let Ingredient { name, amount, unit } = ingredient;
        match self.entries.get_mut(&name) {
            Some(entry) if entry.unit == unit => {
                entry.amount += amount;
                debug!(ingredient = %name, amount = entry.amount, "merged ledger entry");
            }
            Some(entry) => {
                debug!(
                    ingredient = %name,
                    old_unit = %entry.unit,
                    new_unit = %unit,
                    "unit mismatch, replacing ledger entry"
                );
                *entry = LedgerEntry { amount, unit };
            }
            None => {
                debug!(ingredient = %name, amount, unit = %unit, "added ledger entry");
                self.entries.insert(name, LedgerEntry { amount, unit });
            }
        }
    }

    /// Replace `old` with `new`. No-op (returns `false`) if `old.name` is absent.
    pub fn update(&mut self, old: &Ingredient, new: Ingredient) -> bool {
        if self.entries.remove(&old.name).is_none() {
            trace!(ingredient = %old.name, "update of unknown ledger entry ignored");
            return false;
        }
        self.add(new);
        true
    }

    pub fn remove(&mut self, name: &str) -> Option<LedgerEntry> {
        let removed = self.entries.remove(name);
        if removed.is_some() {
            debug!(ingredient = %name, "removed ledger entry");
        }
        removed
    }

    pub fn get(&self, name: &str) -> Option<&LedgerEntry> {
        self.entries.get(name)
    }

    /// Entries ordered by ingredient name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LedgerEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Give back everything `recipe` drew from the ledger.
    pub(crate) fn restore(&mut self, recipe: &Recipe) {
        self.adjust(recipe, 1.0);
    }

    /// Draw down every declared ingredient `recipe` needs.
    pub(crate) fn consume(&mut self, recipe: &Recipe) {
        self.adjust(recipe, -1.0);
    }

    // Units are not compared: a recipe ingredient counts against the ledger
    // entry of the same name whatever unit either side uses.
    fn adjust(&mut self, recipe: &Recipe, sign: f64) {
        for ingredient in &recipe.ingredients {
            if let Some(entry) = self.entries.get_mut(&ingredient.name) {
                entry.amount += sign * ingredient.amount;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    fn entry(amount: f64, unit: &str) -> LedgerEntry {
        LedgerEntry {
            amount,
            unit: unit.to_string(),
        }
    }

    #[test]
    fn add_inserts_then_merges_matching_unit() {
        let mut ledger = IngredientLedger::new();
        ledger.add(Ingredient::new("Spaghetti pasta", 1.0, "box"));
        assert_eq!(ledger.get("Spaghetti pasta"), Some(&entry(1.0, "box")));

        ledger.add(Ingredient::new("Spaghetti pasta", 2.0, "box"));
        assert_eq!(ledger.get("Spaghetti pasta"), Some(&entry(3.0, "box")));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn add_with_other_unit_replaces() {
        let mut ledger = IngredientLedger::new();
        ledger.add(Ingredient::new("Flour", 2.0, "cup"));
        ledger.add(Ingredient::new("Flour", 500.0, "g"));
        assert_eq!(ledger.get("Flour"), Some(&entry(500.0, "g")));
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut ledger = IngredientLedger::new();
        ledger.add(Ingredient::new("tomato", 1.0, "unit"));
        ledger.add(Ingredient::new("Tomato", 1.0, "unit"));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn update_replaces_existing_entry() {
        let mut ledger = IngredientLedger::new();
        let old = Ingredient::new("Spaghetti pasta", 1.0, "box");
        ledger.add(old.clone());

        assert!(ledger.update(&old, Ingredient::new("Spaghetti pasta", 2.0, "lb")));
        assert_eq!(ledger.get("Spaghetti pasta"), Some(&entry(2.0, "lb")));
    }

    #[test]
    fn update_can_rename_and_merge_into_existing() {
        let mut ledger = IngredientLedger::new();
        let old = Ingredient::new("Tomatos", 1.0, "unit");
        ledger.add(old.clone());
        ledger.add(Ingredient::new("Tomato", 2.0, "unit"));

        assert!(ledger.update(&old, Ingredient::new("Tomato", 1.0, "unit")));
        assert_eq!(ledger.get("Tomatos"), None);
        assert_eq!(ledger.get("Tomato"), Some(&entry(3.0, "unit")));
    }

    #[test]
    fn update_of_unknown_is_noop() {
        let mut ledger = IngredientLedger::new();
        assert!(!ledger.update(
            &Ingredient::new("Basil", 1.0, "bunch"),
            Ingredient::new("Basil", 2.0, "bunch"),
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn remove_is_noop_when_absent() {
        let mut ledger = IngredientLedger::new();
        ledger.add(Ingredient::new("Spaghetti pasta", 1.0, "box"));
        assert_eq!(ledger.remove("Basil"), None);
        assert_eq!(ledger.remove("Spaghetti pasta"), Some(entry(1.0, "box")));
        assert!(ledger.is_empty());
    }

    #[test]
    fn consume_and_restore_touch_only_declared_names() {
        let mut ledger = IngredientLedger::new();
        ledger.add(Ingredient::new("Tomato", 2.0, "unit"));
        let recipe = Recipe::new("Salad", "Greek")
            .with_ingredient(Ingredient::new("Tomato", 3.0, "unit"))
            .with_ingredient(Ingredient::new("Feta", 1.0, "block"));

        ledger.consume(&recipe);
        assert_eq!(ledger.get("Tomato"), Some(&entry(-1.0, "unit")));
        assert_eq!(ledger.get("Feta"), None);

        ledger.restore(&recipe);
        assert_eq!(ledger.get("Tomato"), Some(&entry(2.0, "unit")));
    }

    #[test]
    fn encodes_as_name_keyed_object() {
        let mut ledger = IngredientLedger::new();
        ledger.add(Ingredient::new("Tomato", 2.5, "unit"));
        insta::assert_json_snapshot!(ledger, @r#"
        {
          "Tomato": {
            "amount": 2.5,
            "unit": "unit"
          }
        }
        "#);
    }
}
