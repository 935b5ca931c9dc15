use std::sync::Arc;

use mealplan_types::{DayId, MealId, Recipe};
use tracing::{debug, trace, warn};

use crate::chain::Chain;
use crate::error::PlanError;

/// One ordered slot in a day.
#[derive(Clone, Debug)]
pub struct Meal {
    id: MealId,
    recipe: Option<Arc<Recipe>>,
}

impl Meal {
    pub fn id(&self) -> MealId {
        self.id
    }

    /// The assigned recipe, if the user picked one.
    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_deref()
    }

    pub(crate) fn shared_recipe(&self) -> Option<&Arc<Recipe>> {
        self.recipe.as_ref()
    }

    /// Swap in a new recipe, handing back the previous one.
    pub(crate) fn replace_recipe(&mut self, recipe: Option<Arc<Recipe>>) -> Option<Arc<Recipe>> {
        std::mem::replace(&mut self.recipe, recipe)
    }
}

/// One ordered slot in a plan, owning its meal sequence.
#[derive(Clone, Debug)]
pub struct Day {
    id: DayId,
    pub(crate) meals: Chain<MealId, Meal>,
}

impl Day {
    pub(crate) fn new(id: DayId, max_meals: usize) -> Self {
        Self {
            id,
            meals: Chain::with_capacity(max_meals),
        }
    }

    pub fn id(&self) -> DayId {
        self.id
    }

    /// Append an empty meal at the tail.
    ///
    /// Fails with [`PlanError::MealCapacityExceeded`] when the day is full;
    /// the day is left untouched.
    pub fn append_new_meal(&mut self) -> Result<MealId, PlanError> {
        self.append_meal_with(None)
    }

    /// Append a meal already holding `recipe`. Only valid on a day not yet
    /// linked into a plan, since the ledger is not consulted.
    pub(crate) fn append_meal_with(
        &mut self,
        recipe: Option<Arc<Recipe>>,
    ) -> Result<MealId, PlanError> {
        let id = MealId::new();
        let meal = Meal { id, recipe };
        if let Err(full) = self.meals.push_back(id, meal) {
            warn!(day_id = %self.id, max = full.capacity, "meal capacity reached");
            return Err(PlanError::MealCapacityExceeded {
                day: self.id,
                max: full.capacity,
            });
        }
        debug!(day_id = %self.id, meal_id = %id, "appended meal");
        Ok(id)
    }

    /// Remove a meal. Unknown id: no-op, returns `false`.
    pub fn remove_meal(&mut self, id: MealId) -> bool {
        match self.meals.remove(&id) {
            Some(_) => {
                debug!(day_id = %self.id, meal_id = %id, "removed meal");
                true
            }
            None => {
                trace!(day_id = %self.id, meal_id = %id, "remove of unknown meal ignored");
                false
            }
        }
    }

    /// Exchange two meals' positions. Unknown ids or `a == b`: no-op.
    pub fn swap_meals(&mut self, a: MealId, b: MealId) -> bool {
        let swapped = self.meals.swap(&a, &b);
        if swapped {
            debug!(day_id = %self.id, a = %a, b = %b, "swapped meals");
        } else {
            trace!(day_id = %self.id, a = %a, b = %b, "meal swap ignored");
        }
        swapped
    }

    /// Meals from first to last. Each call starts a fresh walk.
    pub fn meals(&self) -> impl Iterator<Item = &Meal> + '_ {
        self.meals.iter().map(|(_, meal)| meal)
    }

    pub fn meal(&self, id: MealId) -> Option<&Meal> {
        self.meals.get(&id)
    }

    pub(crate) fn meal_mut(&mut self, id: MealId) -> Option<&mut Meal> {
        self.meals.get_mut(&id)
    }

    pub fn first_meal(&self) -> Option<MealId> {
        self.meals.first()
    }

    pub fn last_meal(&self) -> Option<MealId> {
        self.meals.last()
    }

    pub fn next_meal(&self, id: MealId) -> Option<MealId> {
        self.meals.next_of(&id)
    }

    pub fn previous_meal(&self, id: MealId) -> Option<MealId> {
        self.meals.prev_of(&id)
    }

    pub fn meal_count(&self) -> usize {
        self.meals.len()
    }

    pub fn is_full(&self) -> bool {
        self.meals.is_full()
    }
}
