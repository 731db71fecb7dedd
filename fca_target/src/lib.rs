//! # FCA Target - host targeting predicates
//!
//! Decides whether a rule set applies to a host. Each matcher is a
//! pure predicate over caller-supplied host facts (the host identifier
//! or its collected addresses); nothing here touches the network or
//! the OS.

pub mod error;
pub mod glob;
pub mod ipcidr;
pub mod pcre;

pub use error::TargetError;
pub use ipcidr::HostAddrs;
