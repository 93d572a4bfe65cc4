use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_parse_plan() {
    let cli = Cli::try_parse_from(["pgc", "plan", "orders"]).unwrap();
    match cli.command {
        Commands::Plan(args) => {
            assert_eq!(args.table, "orders");
            assert_eq!(args.output, PlanOutput::Text);
            assert!(!args.deps);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_plan_json() {
    let cli = Cli::try_parse_from(["pgc", "plan", "orders", "--output", "json"]).unwrap();
    match cli.command {
        Commands::Plan(args) => assert_eq!(args.output, PlanOutput::Json),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_triggers_disable_dry_run() {
    let cli = Cli::try_parse_from(["pgc", "triggers", "disable", "--dry-run"]).unwrap();
    match cli.command {
        Commands::Triggers(args) => {
            assert_eq!(args.action, TriggerTransition::Disable);
            assert!(args.dry_run);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_copy_with_urls() {
    let cli = Cli::try_parse_from([
        "pgc",
        "copy",
        "orders",
        "--database-url",
        "postgres://dest/db",
        "--source-url",
        "postgres://src/db",
    ])
    .unwrap();

    assert_eq!(cli.global.database_url.as_deref(), Some("postgres://dest/db"));
    assert_eq!(cli.global.source_url.as_deref(), Some("postgres://src/db"));
    match cli.command {
        Commands::Copy(args) => {
            assert_eq!(args.table, "orders");
            assert!(!args.dry_run);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_missing_table_argument_is_rejected() {
    assert!(Cli::try_parse_from(["pgc", "plan"]).is_err());
    assert!(Cli::try_parse_from(["pgc", "copy"]).is_err());
}

#[test]
fn test_invalid_trigger_action_is_rejected() {
    assert!(Cli::try_parse_from(["pgc", "triggers", "pause"]).is_err());
}
