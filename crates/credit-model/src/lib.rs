//! Data model types for the Credit Class Finder.
//!
//! # Module Organization
//!
//! - [`class`]: catalog rows ([`ClassRecord`], [`ClassCatalog`]) and the missed-class descriptor
//! - [`enrollment`]: one row per enrolled class ([`EnrollmentRecord`])
//! - [`profile`]: per-student derived view ([`StudentProfile`], [`CoverageMap`])
//! - [`result`]: ranked output ([`Tier`], [`CreditClassOption`], [`ResultSection`])
//! - [`options`]: query and rule configuration ([`FinderQuery`], [`FinderOptions`])

pub mod class;
pub mod enrollment;
pub mod options;
pub mod profile;
pub mod result;

pub use class::{ClassCatalog, ClassRecord, Lesson, MissedClassDescriptor};
pub use enrollment::EnrollmentRecord;
pub use options::{DEFAULT_DURATION_MINUTES, FinderOptions, FinderQuery, StudentSelector};
pub use profile::{CoverageMap, StudentProfile};
pub use result::{CreditClassOption, MatchReport, ResultSection, StudentSummary, Tier};
