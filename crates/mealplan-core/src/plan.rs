//! The day sequence and the ledger it keeps in step with recipe assignments.
//!
//! Every public mutator moves the plan from one consistent structure to
//! another in a single step: it either applies fully, reports a capacity
//! error, or does nothing at all (unknown ids, self-swaps).

use std::sync::Arc;

use mealplan_types::{DayId, Ingredient, MealId, Recipe};
use tracing::{debug, trace, warn};

use crate::chain::Chain;
use crate::config::PlanLimits;
use crate::day::Day;
use crate::error::PlanError;
use crate::ledger::{IngredientLedger, LedgerEntry};

#[derive(Clone, Debug)]
pub struct MealPlan {
    pub(crate) days: Chain<DayId, Day>,
    ledger: IngredientLedger,
    limits: PlanLimits,
}

impl Default for MealPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl MealPlan {
    /// Empty plan with the default limits (7 days, 5 meals per day).
    pub fn new() -> Self {
        Self::with_limits(PlanLimits::default())
    }

    /// Empty plan with caller-supplied limits.
    ///
    /// Limits outside 1..=7 days or 1..=5 meals are clamped into range; use
    /// [`PlanLimits::validate`] beforehand to reject them instead.
    pub fn with_limits(limits: PlanLimits) -> Self {
        let clamped = limits.clamped();
        if clamped != limits {
            warn!(
                requested_days = limits.day_limit(),
                requested_meals = limits.meal_limit(),
                days = clamped.day_limit(),
                meals = clamped.meal_limit(),
                "plan limits clamped"
            );
        }
        let limits = clamped;
        Self {
            days: Chain::with_capacity(limits.day_limit()),
            ledger: IngredientLedger::new(),
            limits,
        }
    }

    pub fn limits(&self) -> PlanLimits {
        self.limits
    }

    // ── Day sequence ──

    /// Append an empty day at the tail.
    ///
    /// Fails with [`PlanError::DayCapacityExceeded`] when the plan is full;
    /// the plan is left untouched.
    pub fn append_new_day(&mut self) -> Result<DayId, PlanError> {
        let day = self.detached_day();
        self.push_day(day)
    }

    /// An empty day sized for this plan but not yet linked into it.
    pub(crate) fn detached_day(&self) -> Day {
        Day::new(DayId::new(), self.limits.meal_limit())
    }

    /// Link a detached day at the tail and draw its recipes from the ledger.
    pub(crate) fn push_day(&mut self, day: Day) -> Result<DayId, PlanError> {
        let id = day.id();
        let recipes: Vec<Arc<Recipe>> = day
            .meals()
            .filter_map(|meal| meal.shared_recipe().cloned())
            .collect();
        if let Err(full) = self.days.push_back(id, day) {
            warn!(max = full.capacity, "day capacity reached");
            return Err(PlanError::DayCapacityExceeded { max: full.capacity });
        }
        for recipe in &recipes {
            self.ledger.consume(recipe);
        }
        debug!(day_id = %id, days = self.days.len(), "appended day");
        Ok(id)
    }

    /// Remove a day and every meal it owns. Unknown id: no-op, returns `false`.
    ///
    /// The ledger is not touched; clear the day's recipes first to give their
    /// ingredients back.
    pub fn remove_day(&mut self, id: DayId) -> bool {
        match self.days.remove(&id) {
            Some(day) => {
                debug!(day_id = %id, meals = day.meal_count(), "removed day");
                true
            }
            None => {
                trace!(day_id = %id, "remove of unknown day ignored");
                false
            }
        }
    }

    /// Exchange two days' positions. Unknown ids or `a == b`: no-op.
    pub fn swap_days(&mut self, a: DayId, b: DayId) -> bool {
        let swapped = self.days.swap(&a, &b);
        if swapped {
            debug!(a = %a, b = %b, "swapped days");
        } else {
            trace!(a = %a, b = %b, "day swap ignored");
        }
        swapped
    }

    /// Days from first to last. Each call starts a fresh walk from the
    /// current head.
    pub fn days(&self) -> impl Iterator<Item = &Day> + '_ {
        self.days.iter().map(|(_, day)| day)
    }

    pub fn day(&self, id: DayId) -> Option<&Day> {
        self.days.get(&id)
    }

    /// Mutable access for meal-level operations (append, remove, swap).
    pub fn day_mut(&mut self, id: DayId) -> Option<&mut Day> {
        self.days.get_mut(&id)
    }

    pub fn first_day(&self) -> Option<DayId> {
        self.days.first()
    }

    pub fn last_day(&self) -> Option<DayId> {
        self.days.last()
    }

    pub fn next_day(&self, id: DayId) -> Option<DayId> {
        self.days.next_of(&id)
    }

    pub fn previous_day(&self, id: DayId) -> Option<DayId> {
        self.days.prev_of(&id)
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn is_full(&self) -> bool {
        self.days.is_full()
    }

    // ── Ledger ──

    pub fn add_user_ingredient(&mut self, ingredient: Ingredient) {
        self.ledger.add(ingredient);
    }

    pub fn update_user_ingredient(&mut self, old: &Ingredient, new: Ingredient) -> bool {
        self.ledger.update(old, new)
    }

    pub fn remove_user_ingredient(&mut self, name: &str) -> Option<LedgerEntry> {
        self.ledger.remove(name)
    }

    pub fn user_ingredient(&self, name: &str) -> Option<&LedgerEntry> {
        self.ledger.get(name)
    }

    pub fn user_ingredients(&self) -> &IngredientLedger {
        &self.ledger
    }

    // ── Recipe assignment ──

    /// Assign `recipe` to a meal, reconciling the ledger.
    ///
    /// The previous recipe's ingredients are given back before the new
    /// recipe's are drawn, so reassigning the same recipe leaves the ledger
    /// unchanged. Unknown day or meal: no-op, returns `false`.
    pub fn select_recipe_for_meal(
        &mut self,
        recipe: impl Into<Arc<Recipe>>,
        day_id: DayId,
        meal_id: MealId,
    ) -> bool {
        let recipe = recipe.into();
        let Some(meal) = self
            .days
            .get_mut(&day_id)
            .and_then(|day| day.meal_mut(meal_id))
        else {
            trace!(day_id = %day_id, meal_id = %meal_id, "recipe for unknown meal ignored");
            return false;
        };

        debug!(
            day_id = %day_id,
            meal_id = %meal_id,
            recipe = %recipe.name,
            "assigning recipe"
        );
        let previous = meal.replace_recipe(Some(Arc::clone(&recipe)));
        if let Some(previous) = previous {
            self.ledger.restore(&previous);
        }
        self.ledger.consume(&recipe);
        true
    }

    /// Unassign a meal's recipe and give its ingredients back to the ledger.
    ///
    /// Returns `false` for an unknown meal or a meal with no recipe.
    pub fn clear_recipe_for_meal(&mut self, day_id: DayId, meal_id: MealId) -> bool {
        let Some(meal) = self
            .days
            .get_mut(&day_id)
            .and_then(|day| day.meal_mut(meal_id))
        else {
            trace!(day_id = %day_id, meal_id = %meal_id, "clear for unknown meal ignored");
            return false;
        };

        match meal.replace_recipe(None) {
            Some(previous) => {
                debug!(day_id = %day_id, meal_id = %meal_id, recipe = %previous.name, "cleared recipe");
                self.ledger.restore(&previous);
                true
            }
            None => false,
        }
    }
}
