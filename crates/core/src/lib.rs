//! dropbox2slack_core - Functional core of the Dropbox to Slack relay.
//!
//! Everything in this crate is pure data and pure functions, plus the traits
//! that the imperative shell (`dropbox2slack`) implements for I/O.

pub mod dropbox;
pub mod slack;
pub mod storage;
