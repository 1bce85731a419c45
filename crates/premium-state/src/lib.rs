//! Premium State - normalization and submission lifecycle
//!
//! Turns the raw contribution map from `/explain` into bounded, ordered,
//! sign-classified bars, and tracks the lifecycle of a single estimate
//! submission together with the result it produced.

pub mod machine;
pub mod normalize;

pub use machine::{Estimate, RequestState, RequestStateMachine, TransitionError};
pub use normalize::{normalize, Direction, NormalizeError, NormalizedContribution};
