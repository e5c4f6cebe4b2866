//! Comparators - a rare item against its pivot, or two rare items against each other

mod candidates;
mod incumbent;

pub use candidates::{compare_candidates, CandidateComparison, Winner};
pub use incumbent::{compare_to_incumbent, IncumbentComparison, RollStanding};
