//! Structural audit of a plan.
//!
//! Mutators keep the plan consistent by construction; this module verifies it
//! from the outside. [`validate_plan`] walks the day sequence and every meal
//! sequence and collects every violation it finds, so a corrupt structure
//! reports all independent problems in one pass.
//!
//! Checks are grouped into two sub-modules, each exposing
//! `check(&Chain, SequenceScope, &mut Vec<PlanViolation>)`:
//! - [`sequence`]: head/tail boundaries, back links, cycles, and agreement
//!   between the id map and the nodes reachable from the head.
//! - [`capacity`]: member count within the configured limit and the hard
//!   maximum.

mod capacity;
mod sequence;

use crate::chain::{Chain, ChainKey};
use crate::error::{PlanViolation, SequenceScope};
use crate::plan::MealPlan;

/// Audit every sequence in `plan`. Empty means consistent.
pub fn validate_plan(plan: &MealPlan) -> Vec<PlanViolation> {
    let mut violations = Vec::new();
    check_chain(&plan.days, SequenceScope::Days, &mut violations);
    for day in plan.days() {
        check_chain(&day.meals, SequenceScope::Meals(day.id()), &mut violations);
    }
    violations
}

fn check_chain<K: ChainKey, T>(
    chain: &Chain<K, T>,
    scope: SequenceScope,
    violations: &mut Vec<PlanViolation>,
) {
    sequence::check(chain, scope, violations);
    capacity::check(chain, scope, violations);
}
