//! Ordered meal plans with an ingredient ledger kept in step with recipe
//! assignments.
//!
//! A [`MealPlan`] owns an ordered sequence of [`Day`]s, each owning an ordered
//! sequence of [`Meal`]s. Both levels support O(1) append, remove and swap by
//! id while keeping traversal order; [`validate_plan`] audits the structure.
//! [`MealPlan::get_meal_plan_data`] flattens a plan into the ordinal-indexed
//! [`PlanExport`](mealplan_types::PlanExport) and [`MealPlan::restore`]
//! rebuilds one from it.

mod chain;

pub mod archive;
pub mod catalog;
pub mod config;
pub mod day;
pub mod error;
pub mod invariants;
pub mod ledger;
pub mod plan;
pub mod restore;
pub mod session;
pub mod snapshot;

pub use archive::SavedPlans;
pub use catalog::{RecipeCatalog, SelectionMenu};
pub use config::PlanLimits;
pub use day::{Day, Meal};
pub use error::{ConfigError, PlanError, PlanViolation, RestoreError, SequenceScope, SessionError};
pub use invariants::validate_plan;
pub use ledger::{IngredientLedger, LedgerEntry};
pub use plan::MealPlan;
pub use session::PlanSession;
