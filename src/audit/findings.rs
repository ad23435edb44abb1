//! Findings reported by the rule-table audit.

use thiserror::Error;

/// A suspicious rule in a table.
///
/// Findings never stop a table from being built or used; the patterns they
/// describe are legal and sometimes intended.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuditFinding {
    /// The rule can never be selected because an earlier rule with the same
    /// event matches every state it matches.
    #[error("rule #{index} ({source_state} on '{event}') is shadowed by rule #{shadowed_by}")]
    ShadowedRule {
        index: usize,
        shadowed_by: usize,
        source_state: String,
        event: String,
    },

    /// The rule leaves a state marked as final.
    #[error("rule #{index} leaves final state '{state}' on '{event}'")]
    LeavesFinalState {
        index: usize,
        state: String,
        event: String,
    },
}

impl AuditFinding {
    /// Position of the offending rule in the table.
    pub fn index(&self) -> usize {
        match self {
            Self::ShadowedRule { index, .. } | Self::LeavesFinalState { index, .. } => *index,
        }
    }
}
