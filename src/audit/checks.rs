//! Rule-table audit using Validation.

use crate::audit::findings::AuditFinding;
use crate::core::{Event, State};
use crate::rules::{RuleTable, Source, TransitionRule};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of auditing a table: success, or every finding at once.
pub type AuditResult = Validation<(), NonEmptyVec<AuditFinding>>;

impl<S: State, Ev: Event, E> RuleTable<S, Ev, E> {
    /// Audit the table, accumulating ALL findings.
    ///
    /// Returns `Validation::Success(())` for a clean table (including an
    /// empty one).
    pub fn audit(&self) -> AuditResult {
        let rules = self.rules();
        let mut checks: Vec<AuditResult> = Vec::new();

        for (index, rule) in rules.iter().enumerate() {
            checks.push(check_shadowing(rules, index, rule));
            checks.push(check_final_source(index, rule));
        }

        if checks.is_empty() {
            return Validation::success(());
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

fn check_shadowing<S: State, Ev: Event, E>(
    rules: &[TransitionRule<S, Ev, E>],
    index: usize,
    rule: &TransitionRule<S, Ev, E>,
) -> AuditResult {
    // A rejecting guard does not fall through, so guarded rules shadow too.
    let shadowed_by = rules[..index]
        .iter()
        .position(|earlier| earlier.event == rule.event && earlier.source.covers(&rule.source));

    match shadowed_by {
        Some(shadowed_by) => Validation::fail(AuditFinding::ShadowedRule {
            index,
            shadowed_by,
            source_state: rule.source.describe().to_string(),
            event: rule.event.name().to_string(),
        }),
        None => Validation::success(()),
    }
}

fn check_final_source<S: State, Ev: Event, E>(
    index: usize,
    rule: &TransitionRule<S, Ev, E>,
) -> AuditResult {
    match &rule.source {
        Source::State(state) if state.is_final() => {
            Validation::fail(AuditFinding::LeavesFinalState {
                index,
                state: state.name().to_string(),
                event: rule.event.name().to_string(),
            })
        }
        _ => Validation::success(()),
    }
}
