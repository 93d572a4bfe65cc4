//! Trigger suspension: statement generation and batch application.
//!
//! Generation and application are split so callers can log, audit, or
//! dry-run the exact DDL before anything executes, and so the disable and
//! enable phases share one code path with only the target state differing.

use crate::error::{RunError, RunResult};
use pgc_core::{TableName, TriggerName};
use pgc_db::{Database, TriggerRef};
use std::fmt;
use std::sync::Arc;

/// Target state for a batch of trigger actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Enabled,
    Disabled,
}

impl TriggerState {
    /// The DDL keyword that transitions a trigger into this state
    pub fn keyword(self) -> &'static str {
        match self {
            TriggerState::Enabled => "ENABLE",
            TriggerState::Disabled => "DISABLE",
        }
    }

    /// The opposite state
    pub fn inverse(self) -> Self {
        match self {
            TriggerState::Enabled => TriggerState::Disabled,
            TriggerState::Disabled => TriggerState::Enabled,
        }
    }
}

impl fmt::Display for TriggerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerState::Enabled => write!(f, "enabled"),
            TriggerState::Disabled => write!(f, "disabled"),
        }
    }
}

/// A single reversible trigger transition, materialized as executable DDL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerAction {
    /// Table the trigger fires on
    pub table: TableName,

    /// Trigger name
    pub name: TriggerName,

    /// State this action transitions the trigger into
    pub target_state: TriggerState,
}

impl TriggerAction {
    /// Build the action that moves `trigger` into `target_state`.
    pub fn new(trigger: &TriggerRef, target_state: TriggerState) -> Self {
        Self {
            table: trigger.table.clone(),
            name: trigger.name.clone(),
            target_state,
        }
    }

    /// The exact DDL text executed for this action.
    pub fn statement(&self) -> String {
        format!(
            "ALTER TABLE {} {} TRIGGER {};",
            self.table,
            self.target_state.keyword(),
            self.name
        )
    }
}

/// Generates and applies trigger enable/disable batches.
pub struct TriggerGuard {
    db: Arc<dyn Database>,
}

impl TriggerGuard {
    /// Create a guard over the given database
    pub fn new(db: Arc<dyn Database>) -> Self {
        Self { db }
    }

    /// List the actions that transition every trigger owned by the current
    /// schema/user into `target_state`, ordered by (table, trigger name).
    pub async fn list_actions(&self, target_state: TriggerState) -> RunResult<Vec<TriggerAction>> {
        let mut triggers = self.db.triggers().await?;
        triggers.sort();

        Ok(triggers
            .iter()
            .map(|t| TriggerAction::new(t, target_state))
            .collect())
    }

    /// Apply a batch of actions in order.
    ///
    /// Stops at the first failing statement and reports it along with how
    /// many statements ran before the failure. Statements already applied
    /// are NOT reverted: the triggers end up in a mixed state that only an
    /// operator can resolve. An empty batch trivially succeeds.
    pub async fn apply(&self, actions: &[TriggerAction]) -> RunResult<usize> {
        let mut applied = 0;
        for action in actions {
            let statement = action.statement();
            if let Err(source) = self.db.execute(&statement).await {
                return Err(RunError::StatementFailed {
                    statement,
                    applied,
                    source,
                });
            }
            applied += 1;
        }
        Ok(applied)
    }

    /// List and apply in one step, returning the number of actions applied.
    pub async fn set_all(&self, target_state: TriggerState) -> RunResult<usize> {
        let actions = self.list_actions(target_state).await?;
        self.apply(&actions).await
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
