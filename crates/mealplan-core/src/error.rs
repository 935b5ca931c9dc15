use mealplan_types::{DayId, DomainError};
use uuid::Uuid;

/// Which sequence a [`PlanViolation`] was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceScope {
    /// The plan's day sequence.
    Days,
    /// The meal sequence owned by one day.
    Meals(DayId),
}

/// Describes a specific structural inconsistency found by
/// [`validate_plan`](crate::invariants::validate_plan).
///
/// Node ids are reported as raw uuids because the same checks run over both
/// day and meal sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanViolation {
    /// The first node has a previous link.
    HeadHasPrevious { scope: SequenceScope, node: Uuid },
    /// The last node has a next link.
    TailHasNext { scope: SequenceScope, node: Uuid },
    /// `a.next == b` but `b.previous != a`.
    BrokenBackLink {
        scope: SequenceScope,
        from: Uuid,
        to: Uuid,
    },
    /// Walking forward from the head never terminated within the slot count.
    Cycle { scope: SequenceScope },
    /// A link points at a vacant slot.
    VacantLink { scope: SequenceScope },
    /// The forward walk ended somewhere other than the recorded tail.
    TailMismatch { scope: SequenceScope },
    /// The id map and the walk disagree on how many nodes exist.
    MembershipMismatch {
        scope: SequenceScope,
        indexed: usize,
        reachable: usize,
    },
    /// The id map points at a vacant slot or at a node with another id.
    DanglingIndex { scope: SequenceScope, node: Uuid },
    /// More nodes than the configured limit.
    CapacityExceeded {
        scope: SequenceScope,
        len: usize,
        max: usize,
    },
}

/// Errors produced by structural mutations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("plan already holds the maximum of {max} days")]
    DayCapacityExceeded { max: usize },
    #[error("{day} already holds the maximum of {max} meals")]
    MealCapacityExceeded { day: DayId, max: usize },
}

/// Errors produced while rebuilding a plan from an export.
#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error("recipe '{name}' ({cuisine}) for day {day_number} meal {meal_number} is not in the catalog")]
    UnknownRecipe {
        day_number: u32,
        meal_number: u32,
        cuisine: String,
        name: String,
    },
    #[error("export does not fit the plan limits: {0}")]
    Capacity(#[from] PlanError),
}

/// Errors produced by [`PlanLimits`](crate::config::PlanLimits).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("day limit {requested} outside 1..={max}")]
    DayLimitOutOfRange { requested: usize, max: usize },
    #[error("meal limit {requested} outside 1..={max}")]
    MealLimitOutOfRange { requested: usize, max: usize },
    #[error("invalid limits document: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Errors produced by [`PlanSession`](crate::session::PlanSession).
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("recipe '{name}' ({cuisine}) is not in the catalog")]
    UnknownRecipe { cuisine: String, name: String },
    #[error("no draft to restore")]
    NoDraft,
    #[error(transparent)]
    Restore(#[from] RestoreError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl std::fmt::Display for SequenceScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Days => write!(f, "days"),
            Self::Meals(day) => write!(f, "meals of {day}"),
        }
    }
}

impl std::fmt::Display for PlanViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HeadHasPrevious { scope, node } => {
                write!(f, "{scope}: head {node} has a previous link")
            }
            Self::TailHasNext { scope, node } => {
                write!(f, "{scope}: tail {node} has a next link")
            }
            Self::BrokenBackLink { scope, from, to } => write!(
                f,
                "{scope}: {from} links forward to {to} but {to} does not link back"
            ),
            Self::Cycle { scope } => write!(f, "{scope}: forward walk does not terminate"),
            Self::VacantLink { scope } => write!(f, "{scope}: a link points at a vacant slot"),
            Self::TailMismatch { scope } => {
                write!(f, "{scope}: forward walk does not end at the recorded tail")
            }
            Self::MembershipMismatch {
                scope,
                indexed,
                reachable,
            } => write!(
                f,
                "{scope}: {indexed} ids indexed but {reachable} reachable from head"
            ),
            Self::DanglingIndex { scope, node } => {
                write!(f, "{scope}: id {node} indexes a vacant or foreign slot")
            }
            Self::CapacityExceeded { scope, len, max } => {
                write!(f, "{scope}: {len} members exceeds limit {max}")
            }
        }
    }
}
