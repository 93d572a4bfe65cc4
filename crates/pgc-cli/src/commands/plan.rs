//! Plan command implementation

use anyhow::{Context, Result};
use pgc_run::DependencyResolver;
use serde::Serialize;

use crate::cli::{GlobalArgs, PlanArgs, PlanOutput};
use crate::commands::common::{connect_dest, parse_table_name, resolve_config};

/// JSON envelope for `pgc plan --output json`
#[derive(Serialize)]
struct PlanJson<'a> {
    start: &'a str,
    tables: Vec<&'a str>,
}

/// Execute the plan command
pub async fn execute(args: &PlanArgs, global: &GlobalArgs) -> Result<()> {
    let config = resolve_config(global)?;
    let table = parse_table_name(&args.table)?;

    if global.verbose {
        eprintln!("[verbose] Resolving dependency order for {table}");
    }

    let db = connect_dest(&config).await?;
    let resolver = DependencyResolver::new(db);
    let plan = resolver
        .resolve(&table)
        .await
        .context("Failed to resolve dependency order")?;

    match args.output {
        PlanOutput::Json => {
            let json = PlanJson {
                start: plan.start.as_str(),
                tables: plan.tables.iter().map(|t| t.as_str()).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        PlanOutput::Text => {
            if plan.is_empty() {
                println!("No tables to update.");
                return Ok(());
            }

            println!(
                "There are {} tables to be updated before {}:",
                plan.tables.len(),
                plan.start
            );
            for t in &plan.tables {
                if args.deps {
                    let refs = plan.graph.direct_references(t);
                    if refs.is_empty() {
                        println!("{t}");
                    } else {
                        let names: Vec<&str> = refs.iter().map(|r| r.as_str()).collect();
                        println!("{t}  (references {})", names.join(", "));
                    }
                } else {
                    println!("{t}");
                }
            }
        }
    }

    Ok(())
}
