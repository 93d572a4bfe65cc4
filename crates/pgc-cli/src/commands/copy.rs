//! Copy command implementation: the disable -> copy -> enable bracket.

use anyhow::{Context, Result};
use pgc_run::{DependencyPlan, DependencyResolver, TableCopier, TriggerGuard, TriggerState};
use std::sync::Arc;

use crate::cli::{CopyArgs, GlobalArgs};
use crate::commands::common::{connect_dest, connect_source, parse_table_name, resolve_config};

/// Execute the copy command.
///
/// Phase order is load-bearing: triggers are disabled before any row moves,
/// the dependency order is resolved against the live catalog, every table in
/// the plan (prerequisites first, the target last) is copied, and triggers
/// are re-enabled afterwards. A disable failure aborts the run before the
/// copy; an enable failure after a successful copy is reported but the
/// copied rows stay in place.
pub async fn execute(args: &CopyArgs, global: &GlobalArgs) -> Result<()> {
    let config = resolve_config(global)?;
    let table = parse_table_name(&args.table)?;

    let dest = connect_dest(&config).await?;
    let guard = TriggerGuard::new(Arc::clone(&dest));
    let resolver = DependencyResolver::new(Arc::clone(&dest));

    if args.dry_run {
        return dry_run(&guard, &resolver, &table).await;
    }

    // Disable triggers first. If this fails the run stops here: some
    // triggers may already be disabled, and starting the copy would risk
    // firing integrity checks mid-batch.
    let disable_actions = guard
        .list_actions(TriggerState::Disabled)
        .await
        .context("Failed to list triggers")?;
    if global.verbose {
        eprintln!(
            "[verbose] Disabling {} trigger(s) before copy",
            disable_actions.len()
        );
    }
    guard
        .apply(&disable_actions)
        .await
        .context("Error while disabling triggers")?;
    println!("  \u{2713} {} triggers disabled", disable_actions.len());

    let plan = resolver
        .resolve(&table)
        .await
        .context("Failed to resolve dependency order")?;
    print_plan(&plan);

    // Copy prerequisites first, then the target table itself.
    let source = connect_source(&config).await?;
    let copier = TableCopier::new(source, Arc::clone(&dest));

    let mut copy_result = Ok(());
    for t in &plan.copy_order() {
        println!("Copying table {t}...");
        match copier.copy_table(t).await {
            Ok(rows) => println!("  \u{2713} {t} [{rows} rows]"),
            Err(e) => {
                eprintln!("  \u{2717} {t} - {e}");
                copy_result = Err(e);
                break;
            }
        }
    }

    // Re-enable triggers even when the copy failed; rows already copied are
    // not undone either way.
    println!("Enabling triggers...");
    let enable_result = guard.set_all(TriggerState::Enabled).await;
    match &enable_result {
        Ok(applied) => println!("  \u{2713} {applied} triggers enabled"),
        Err(e) => eprintln!("Error while enabling triggers: {e}"),
    }

    copy_result.context("Copy phase failed")?;
    enable_result.context("Error while enabling triggers")?;
    Ok(())
}

/// Print everything the run would execute, without touching the database
/// beyond catalog reads.
async fn dry_run(
    guard: &TriggerGuard,
    resolver: &DependencyResolver,
    table: &pgc_core::TableName,
) -> Result<()> {
    let disable = guard
        .list_actions(TriggerState::Disabled)
        .await
        .context("Failed to list triggers")?;
    let plan = resolver
        .resolve(table)
        .await
        .context("Failed to resolve dependency order")?;
    let enable = guard
        .list_actions(TriggerState::Enabled)
        .await
        .context("Failed to list triggers")?;

    println!("-- disable triggers");
    for action in &disable {
        println!("{}", action.statement());
    }
    println!("-- copy order");
    for t in plan.copy_order() {
        println!("{t}");
    }
    println!("-- enable triggers");
    for action in &enable {
        println!("{}", action.statement());
    }

    Ok(())
}

fn print_plan(plan: &DependencyPlan) {
    if plan.is_empty() {
        println!("No tables to update.");
        return;
    }
    println!("There are {} tables to be updated:", plan.tables.len());
    for t in &plan.tables {
        println!("{t}");
    }
}
