//! CLI entrypoint for smartconv
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use smartconv_application::{
    AskAiUseCase, AskInput, AskProgressNotifier, ConvertUnitsUseCase, ListUnitsUseCase,
    NoProgress, UnitResolver,
};
use smartconv_domain::{ConversionRequest, OutputFormat};
use smartconv_infrastructure::{BuiltinUnitRegistry, ConfigLoader, FileConfig, GeminiLlmGateway};
use smartconv_presentation::{
    AssistantRepl, Cli, Command, OutputConfig, OutputFormatter, ReplConfig, SpinnerProgress,
    formatter_for,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = init_tracing(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting smartconv");

    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        warn!("Could not load .env: {}", e);
    }

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;

    let output = OutputConfig {
        format: config.output.format,
        color: config.output.color,
        precision: config.output.precision,
    };
    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let registry: Arc<dyn UnitResolver> = Arc::new(BuiltinUnitRegistry::new());
    let gateway = Arc::new(GeminiLlmGateway::new(config.ai.to_gemini_config())?);
    let behavior = config.behavior();
    debug!("Behavior: {:?}", behavior);

    let convert = ConvertUnitsUseCase::new(registry.clone());
    let list = ListUnitsUseCase::new(registry);
    let ask = AskAiUseCase::new(gateway, behavior.clone());
    let formatter = formatter_for(&output);

    let show_progress = !cli.quiet && output.format == OutputFormat::Text;

    let code = match cli.command() {
        Command::Convert { value, from, to } => {
            match convert.execute(ConversionRequest::new(value, from, to)) {
                Ok(conversion) => success(formatter.conversion(&conversion)),
                Err(e) => failure(formatter.conversion_error(&e)),
            }
        }
        Command::Ask { prompt } => {
            let progress: Box<dyn AskProgressNotifier> = if show_progress {
                Box::new(SpinnerProgress::new())
            } else {
                Box::new(NoProgress)
            };
            let input = AskInput::new(prompt.join(" "));
            match ask.execute_with_progress(input, progress.as_ref()).await {
                Ok(answer) => success(formatter.answer(&answer)),
                Err(e) => failure(formatter.ask_error(&e)),
            }
        }
        Command::Units { like } => match list.execute(like.as_deref()) {
            Ok(units) => success(formatter.units(&units)),
            Err(e) => failure(formatter.conversion_error(&e)),
        },
        Command::Models => match ask.available_models().await {
            Ok(models) => success(formatter.models(&models, &behavior.model)),
            Err(e) => failure(formatter.ask_error(&e)),
        },
        Command::Interactive => {
            let repl_config = ReplConfig {
                show_progress: config.repl.show_progress && !cli.quiet,
                history_file: config.repl.history_file.clone(),
            };
            let mut repl = AssistantRepl::new(convert, ask, list, behavior.model)
                .with_formatter(formatter)
                .with_config(repl_config);
            repl.run().await.context("Interactive session failed")?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}

/// Load, override from flags, and validate configuration.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(model) = &cli.model {
        config.ai.model = model.clone();
    }
    if let Some(seconds) = cli.timeout {
        config.ai.timeout_seconds = Some(seconds);
    }
    if let Some(format) = cli.output {
        config.output.format = format.into();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Initialize logging based on verbosity level, optionally teeing to a file.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize tracing: {e}"))?;

    Ok(guard)
}

fn success(output: String) -> ExitCode {
    println!("{}", output);
    ExitCode::SUCCESS
}

fn failure(output: String) -> ExitCode {
    eprintln!("{}", output);
    ExitCode::FAILURE
}
