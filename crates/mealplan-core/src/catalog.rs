//! Read interface to the recipe catalog, plus an in-memory implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use mealplan_types::{DomainError, Recipe};
use tracing::debug;

/// Resolves recipes by cuisine and name.
///
/// The plan never queries a catalog itself; callers resolve the recipe and
/// hand it to [`MealPlan::select_recipe_for_meal`](crate::MealPlan::select_recipe_for_meal).
pub trait RecipeCatalog {
    fn lookup(&self, cuisine: &str, name: &str) -> Option<Arc<Recipe>>;
}

/// In-memory catalog grouped by cuisine, then by recipe name.
#[derive(Clone, Debug, Default)]
pub struct SelectionMenu {
    items: BTreeMap<String, BTreeMap<String, Arc<Recipe>>>,
}

impl SelectionMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw catalog records. Later records win on name collisions.
    pub fn from_raw(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        let mut menu = Self::new();
        for recipe in recipes {
            menu.add_item(recipe);
        }
        debug!(recipes = menu.len(), "built selection menu");
        menu
    }

    /// Decode a JSON array of raw catalog records.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json).map_err(DomainError::Decode)?;
        Ok(Self::from_raw(recipes))
    }

    /// Insert or overwrite, creating the cuisine group if needed.
    pub fn add_item(&mut self, recipe: impl Into<Arc<Recipe>>) {
        let recipe = recipe.into();
        self.items
            .entry(recipe.cuisine.clone())
            .or_default()
            .insert(recipe.name.clone(), recipe);
    }

    pub fn remove_item(&mut self, cuisine: &str, name: &str) -> Option<Arc<Recipe>> {
        self.items.get_mut(cuisine)?.remove(name)
    }

    /// Overwrite a recipe, but only when its cuisine group already exists.
    pub fn update_item(&mut self, recipe: impl Into<Arc<Recipe>>) -> bool {
        let recipe = recipe.into();
        match self.items.get_mut(&recipe.cuisine) {
            Some(group) => {
                group.insert(recipe.name.clone(), recipe);
                true
            }
            None => false,
        }
    }

    pub fn cuisines(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Recipes of one cuisine ordered by name.
    pub fn recipes_in(&self, cuisine: &str) -> impl Iterator<Item = &Recipe> {
        self.items
            .get(cuisine)
            .into_iter()
            .flat_map(|group| group.values().map(Arc::as_ref))
    }

    pub fn len(&self) -> usize {
        self.items.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecipeCatalog for SelectionMenu {
    fn lookup(&self, cuisine: &str, name: &str) -> Option<Arc<Recipe>> {
        self.items.get(cuisine)?.get(name).cloned()
    }
}
