//! Display formatting and text outputs for credit-class results.
//!
//! [`build_report`] turns matcher outcomes into a [`MatchReport`] of
//! display-ready sections. The report is then rendered as the plain-text
//! export ([`format_results_for_export`]) or condensed into a message for
//! the family ([`message_template`]).
//!
//! [`MatchReport`]: credit_model::MatchReport

mod export;
mod message;
mod report;
mod text;
mod time;

pub use export::{RULE_WIDTH, format_results_for_export};
pub use message::{join_options, message_template};
pub use report::{build_report, dual_stream_note, format_option};
pub use text::title_case;
pub use time::{NOT_AVAILABLE, duration_minutes, format_time_range, parse_start_time};
