pub mod error;
pub mod export;
pub mod ids;
pub mod recipe;

pub use error::DomainError;
pub use export::{DayExport, MealRecord, PlanExport};
pub use ids::{DayId, MAX_DAYS, MAX_MEALS_PER_DAY, MealId};
pub use recipe::{Ingredient, Nutrition, Recipe, Step};
