//! Validation-based audit of rule tables.
//!
//! First-match-wins makes some authoring mistakes silent: a rule declared
//! after a broader one for the same event is never reachable. The audit
//! walks a table and reports such rules using Stillwater's `Validation`, so
//! every finding is collected in a single pass instead of stopping at the
//! first.
//!
//! Auditing is opt-in. Shadowing is legal (it is how "default then
//! override" orderings are expressed) and never rejected at build time.
//!
//! # Example
//!
//! ```rust
//! use turnstile::rules::{RuleTable, TransitionRule};
//!
//! let table: RuleTable<String, String, ()> = RuleTable::new(vec![
//!     TransitionRule::any("reset".into(), "idle".into()),
//!     TransitionRule::fixed("busy".into(), "reset".into(), "draining".into()),
//! ]);
//!
//! assert!(table.audit().is_failure());
//! ```

mod checks;
mod findings;

pub use checks::AuditResult;
pub use findings::AuditFinding;
