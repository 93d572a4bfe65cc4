//! Triggers command implementation

use anyhow::{Context, Result};
use pgc_run::{TriggerGuard, TriggerState};

use crate::cli::{GlobalArgs, TriggerTransition, TriggersArgs};
use crate::commands::common::{connect_dest, resolve_config};

/// Execute the triggers command
pub async fn execute(args: &TriggersArgs, global: &GlobalArgs) -> Result<()> {
    let config = resolve_config(global)?;
    let db = connect_dest(&config).await?;
    let guard = TriggerGuard::new(db);

    let target_state = match args.action {
        TriggerTransition::Disable => TriggerState::Disabled,
        TriggerTransition::Enable => TriggerState::Enabled,
    };

    let actions = guard
        .list_actions(target_state)
        .await
        .context("Failed to list triggers")?;

    if actions.is_empty() {
        println!("No triggers found for the current user.");
        return Ok(());
    }

    if args.dry_run {
        for action in &actions {
            println!("{}", action.statement());
        }
        println!();
        println!(
            "{} statement{} (dry run, nothing executed)",
            actions.len(),
            if actions.len() == 1 { "" } else { "s" }
        );
        return Ok(());
    }

    if global.verbose {
        for action in &actions {
            eprintln!("[verbose] {}", action.statement());
        }
    }

    let applied = guard
        .apply(&actions)
        .await
        .with_context(|| format!("Error while {} triggers", phase_label(target_state)))?;

    println!(
        "  \u{2713} {} trigger{} {}",
        applied,
        if applied == 1 { "" } else { "s" },
        target_state
    );

    Ok(())
}

fn phase_label(state: TriggerState) -> &'static str {
    match state {
        TriggerState::Disabled => "disabling",
        TriggerState::Enabled => "enabling",
    }
}
