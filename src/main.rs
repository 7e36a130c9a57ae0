use chrono::Utc;
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info, warn};
use std::io::{IsTerminal, Read};
use std::sync::Arc;

mod cli;

use cli::{ClassifyArgs, Cli, Commands, RunArgs};
use qa_labels::classifier::classify;
use qa_labels::config::Config;
use qa_labels::domain::{Action, ActionKind, Comment, RunOutcome};
use qa_labels::reconciler::reconcile;
use qa_labels::runner::{QaRunner, RunOptions, RunReport};
use qa_labels::tracker::{GitHubClient, IssueRef, MemoryTracker};

fn setup_logging(cli: &Cli) -> bool {
    let mut builder = env_logger::Builder::new();

    // Without RUST_LOG or --verbose the config file's log-level decides, so
    // let everything through here and narrow with set_max_level afterwards.
    let explicit = if cli.is_verbose() {
        builder.parse_filters("debug");
        true
    } else if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
        true
    } else {
        builder.filter_level(LevelFilter::Trace);
        false
    };

    builder.format_timestamp(None).init();
    if !explicit {
        log::set_max_level(LevelFilter::Info);
    }
    explicit
}

fn apply_config_log_level(config: &Config) {
    let Some(level) = config.log_level.as_deref() else {
        return;
    };
    match level.parse::<LevelFilter>() {
        Ok(filter) => log::set_max_level(filter),
        Err(_) => warn!("Ignoring unrecognized log-level '{}'", level),
    }
}

fn in_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Surface a failure as a workflow error annotation when running in Actions.
fn report_failure(message: &str) {
    if in_github_actions() {
        println!("::error::{}", escape_workflow_data(message));
    }
}

/// Encode a workflow command message: `%`, CR and LF.
fn escape_workflow_data(message: &str) -> String {
    message.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Commands::Run(args) => handle_run_command(args, config).await,
        Commands::Classify(args) => handle_classify_command(args, config).await,
    }
}

async fn handle_run_command(args: &RunArgs, config: &Config) -> Result<()> {
    let settings = args.to_inputs().resolve(config).context("Invalid action inputs")?;

    println!(
        "{} {} v{}",
        "Starting".cyan(),
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    if settings.options.dry_run {
        println!("{}", "Dry run: labels will not be changed".yellow());
    }

    let client = GitHubClient::new(&settings.token, settings.github.clone()).context("Failed to create GitHub client")?;
    let runner = QaRunner::new(Arc::new(client), settings.options);

    let report = runner
        .run(&settings.issue)
        .await
        .context(format!("Failed to label {}", settings.issue))?;

    print_report(&report);

    match report.outcome {
        RunOutcome::Succeeded => {
            println!("{}", "Action completed successfully".green());
            Ok(())
        }
        RunOutcome::Failed(reason) => eyre::bail!(reason),
    }
}

fn print_report(report: &RunReport) {
    println!("{} {}", "Pull request:".green(), report.issue);
    println!("{} {}", "Last comment by:".green(), report.author);
    println!("{} {}", "Classification:".green(), report.classification);

    if report.actions.is_empty() {
        println!("  no label changes");
    }
    for action in &report.actions {
        print_action(action, report.applied);
    }
}

fn print_action(action: &Action, applied: bool) {
    let verb = match (action.kind, applied) {
        (ActionKind::Add, true) => "added".green(),
        (ActionKind::Remove, true) => "removed".red(),
        (ActionKind::Add, false) => "would add".green(),
        (ActionKind::Remove, false) => "would remove".red(),
    };
    println!("  {} {}", verb, action.label);
}

fn read_body(args: &ClassifyArgs) -> Result<String> {
    if let Some(body) = &args.body {
        return Ok(body.clone());
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!("{}", "Reading comment body from stdin (Ctrl-D to finish)".yellow());
    }
    let mut body = String::new();
    stdin.read_to_string(&mut body).context("Failed to read comment body from stdin")?;
    Ok(body)
}

async fn handle_classify_command(args: &ClassifyArgs, config: &Config) -> Result<()> {
    let body = read_body(args)?;
    let labels = config.labels.clone().merge(args.labels());
    let classification = classify(&body);
    info!("Classified comment as {:?}", classification);

    let (actions, final_labels) = if args.simulates() {
        let tracker = Arc::new(
            MemoryTracker::new(vec![Comment::new("local", body, Utc::now())]).with_labels(args.current_labels.clone()),
        );
        let runner = QaRunner::new(
            tracker.clone(),
            RunOptions {
                labels,
                policy: config.policy.clone(),
                dry_run: false,
            },
        );
        let report = runner
            .run(&IssueRef::new("local", "local", 1))
            .await
            .context("Simulated run failed")?;
        (report.actions, Some(tracker.labels()))
    } else {
        (reconcile(classification, &labels), None)
    };

    if args.json {
        let output = serde_json::json!({
            "classification": classification,
            "actions": actions,
            "labels": final_labels,
            "run_succeeds": config.policy.outcome(classification).is_success(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", "Classification:".green(), classification);
    if actions.is_empty() {
        println!("  no label changes");
    }
    for action in &actions {
        print_action(action, final_labels.is_some());
    }
    if let Some(final_labels) = final_labels {
        let joined = final_labels.into_iter().collect::<Vec<_>>().join(", ");
        println!("{} [{}]", "Resulting labels:".green(), joined);
    }
    if let RunOutcome::Failed(reason) = config.policy.outcome(classification) {
        println!("{} {}", "A run would fail:".red(), reason);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging before config so config loading is visible
    let explicit_filter = setup_logging(&cli);

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if !explicit_filter {
        apply_config_log_level(&config);
    }
    info!("Starting with config from: {:?}", cli.config);

    if let Err(e) = run_application(&cli, &config).await {
        report_failure(&format!("{:#}", e));
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_workflow_data() {
        assert_eq!(escape_workflow_data("plain reason"), "plain reason");
        assert_eq!(
            escape_workflow_data("100% failed\r\nsee log"),
            "100%25 failed%0D%0Asee log"
        );
    }

    #[test]
    fn test_escape_percent_before_newlines() {
        assert_eq!(escape_workflow_data("%0A\n"), "%250A%0A");
    }
}
