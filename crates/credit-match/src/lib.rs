//! Credit-class matching engine.
//!
//! The engine is a pure function of the class catalog, the enrollment records
//! and a [`FinderQuery`](credit_model::FinderQuery):
//!
//! 1. [`build_profile`] indexes one student's enrollments into a
//!    [`StudentProfile`](credit_model::StudentProfile).
//! 2. [`available_classes`] narrows the catalog to the student's year, the
//!    eligible type/status and classes that neither repeat nor collide with an
//!    enrolled one.
//! 3. [`classify`] sorts the candidates into priority tiers with the
//!    [`RuleSet`] chosen by the query, and the first non-empty tier wins.
//! 4. [`find_credit_classes`] runs the steps above for every selected student.

mod availability;
mod classify;
mod finder;
mod profile;

pub use availability::{available_classes, candidate_pool, is_excluded};
pub use classify::{Classification, RuleSet, classify};
pub use finder::{FinderOutcome, StudentMatch, find_credit_classes, select_students};
pub use profile::build_profile;
