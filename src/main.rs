use chai_lessons::exercises::{run_delivery_fee, run_thermostat, DeviceStatus};
use chai_lessons::utils::logger;
use chai_lessons::{CliConfig, Command, LessonConfig, LessonError, LessonRunner};
use clap::Parser;
use std::io::{self, Write};

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: CliConfig) -> Result<(), LessonError> {
    let config = LessonConfig::load(cli.config.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Run {
            only,
            skip,
            summary,
            dry_run,
        } => {
            let execution_id = format!("run_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"));
            let runner = LessonRunner::with_catalogue(execution_id)
                .with_selection(config.selection_with(only, skip));
            tracing::info!("🆔 Execution ID: {}", runner.execution_id());

            if dry_run {
                for lesson in runner.planned()? {
                    writeln!(out, "would run: {} ({})", lesson.name(), lesson.title())?;
                }
                return Ok(());
            }

            let results = runner.execute_into(&mut out)?;
            if summary {
                let summary = LessonRunner::execution_summary(&results);
                writeln!(out)?;
                writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
            }
        }
        Command::List => {
            for lesson in chai_lessons::lessons::catalogue() {
                writeln!(out, "{:<14}{}", lesson.name(), lesson.title())?;
            }
        }
        Command::DeliveryFee { amount } => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            run_delivery_fee(&config.delivery, amount.as_deref(), &mut input, &mut out)?;
        }
        Command::Thermostat {
            status,
            temperature,
        } => {
            let status = status
                .as_deref()
                .map(str::parse::<DeviceStatus>)
                .transpose()?;
            let reading = config.reading_with(status, temperature);
            run_thermostat(&reading, config.alert_above(), &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
