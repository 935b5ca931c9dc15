use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::DomainError;
use crate::recipe::{Ingredient, Nutrition, Recipe};

/// Flattened view of one assigned meal.
///
/// Steps are reduced to their description text. `nutrition` is omitted from
/// the encoding when the recipe carries none.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    pub name: String,
    pub cuisine: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl MealRecord {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            cuisine: recipe.cuisine.clone(),
            ingredients: recipe.ingredients.clone(),
            steps: recipe
                .steps
                .iter()
                .map(|step| step.description.clone())
                .collect(),
            nutrition: recipe.nutrition.clone(),
        }
    }
}

/// Meals of one day keyed by 1-based meal number.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayExport {
    meals: BTreeMap<u32, MealRecord>,
}

impl DayExport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record at `meal_number`.
    pub fn insert(&mut self, meal_number: u32, record: MealRecord) {
        self.meals.insert(meal_number, record);
    }

    pub fn get(&self, meal_number: u32) -> Option<&MealRecord> {
        self.meals.get(&meal_number)
    }

    /// Records in ascending meal-number order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &MealRecord)> {
        self.meals.iter().map(|(n, record)| (*n, record))
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

/// Ordinal-indexed export of a whole plan: day number → meal number → record.
///
/// This is the persistence and display contract. Numbers are positions in
/// traversal order at export time and carry no identity. Map keys encode as
/// JSON strings (`{"1": {"1": {...}}}`) and always iterate ascending.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanExport {
    days: BTreeMap<u32, DayExport>,
}

impl PlanExport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the day at `day_number`.
    pub fn insert(&mut self, day_number: u32, day: DayExport) {
        self.days.insert(day_number, day);
    }

    pub fn get(&self, day_number: u32) -> Option<&DayExport> {
        self.days.get(&day_number)
    }

    /// Days in ascending day-number order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &DayExport)> {
        self.days.iter().map(|(n, day)| (*n, day))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of meal records across all days.
    pub fn meal_count(&self) -> usize {
        self.days.values().map(DayExport::len).sum()
    }

    /// Stable content fingerprint.
    ///
    /// Lowercase hex of `SHA-256(canonical JSON)`. Both map levels are ordered,
    /// so equal exports always hash equally regardless of construction order.
    pub fn fingerprint(&self) -> Result<String, DomainError> {
        let bytes = serde_json::to_vec(self).map_err(DomainError::Encode)?;
        let hash: [u8; 32] = Sha256::digest(&bytes).into();
        Ok(hex::encode(hash))
    }
}
