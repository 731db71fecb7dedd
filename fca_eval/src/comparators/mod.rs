//! # Comparators
//!
//! Pure observed-value vs expected-spec comparators invoked by the
//! rule-runner once per check per host.

pub mod file_permission;
pub mod string;

pub use file_permission::{check_mode, match_permission};
pub use string::{match_any, match_string};
