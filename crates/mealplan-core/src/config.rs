use mealplan_types::{MAX_DAYS, MAX_MEALS_PER_DAY};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Capacity limits applied to a plan.
///
/// Limits may be tightened below the hard maximums (7 days, 5 meals per day)
/// but never widened; [`PlanLimits::validate`] enforces that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanLimits {
    max_days: usize,
    max_meals_per_day: usize,
}

impl Default for PlanLimits {
    fn default() -> Self {
        Self {
            max_days: MAX_DAYS,
            max_meals_per_day: MAX_MEALS_PER_DAY,
        }
    }
}

impl PlanLimits {
    pub fn max_days(mut self, max_days: usize) -> Self {
        self.max_days = max_days;
        self
    }

    pub fn max_meals_per_day(mut self, max_meals_per_day: usize) -> Self {
        self.max_meals_per_day = max_meals_per_day;
        self
    }

    pub fn day_limit(&self) -> usize {
        self.max_days
    }

    pub fn meal_limit(&self) -> usize {
        self.max_meals_per_day
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(1..=MAX_DAYS).contains(&self.max_days) {
            return Err(ConfigError::DayLimitOutOfRange {
                requested: self.max_days,
                max: MAX_DAYS,
            });
        }
        if !(1..=MAX_MEALS_PER_DAY).contains(&self.max_meals_per_day) {
            return Err(ConfigError::MealLimitOutOfRange {
                requested: self.max_meals_per_day,
                max: MAX_MEALS_PER_DAY,
            });
        }
        Ok(self)
    }

    /// Pull both limits into 1..=7 days and 1..=5 meals.
    pub fn clamped(self) -> Self {
        Self {
            max_days: self.max_days.clamp(1, MAX_DAYS),
            max_meals_per_day: self.max_meals_per_day.clamp(1, MAX_MEALS_PER_DAY),
        }
    }

    /// Parse limits from a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let limits: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        limits.validate()
    }
}
