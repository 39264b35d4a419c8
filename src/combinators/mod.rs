//! Composition strategies for validators.
//!
//! Two field strategies exist side by side, on purpose:
//!
//! - [`Join`] — evaluate-all-pick-first: every rule runs, the first
//!   failing result in rule order is surfaced. The engine composes each
//!   path's rule list this way.
//! - [`Compose`] — short-circuit-on-first: stops invoking rules at the
//!   first failure.
//!
//! For side-effect-free validators the two are observably identical;
//! they differ only in whether later rules are invoked at all.
//!
//! Wrappers: [`WithEmpty`] (skip when the value is empty), [`WithMessage`]
//! (override the failure message), [`RecordRule`] (embed a record
//! validator in a rules table). [`ComposeRecords`] merges several record
//! validators into one.

pub mod compose;
pub mod join;
pub mod message;
pub mod record;
pub mod with_empty;

pub use compose::{Compose, ComposeRecords, compose, compose_records};
pub use join::{Join, join};
pub use message::{WithMessage, with_message};
pub use record::{RecordRule, record_rule};
pub use with_empty::{WithEmpty, with_empty};
