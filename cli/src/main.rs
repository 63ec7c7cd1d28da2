//! CLI entrypoint for estate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use estate_application::{
    Acknowledgement, BrowseCatalogUseCase, BrowseError, GenerateDescriptionError,
    GenerateDescriptionUseCase, GenerationError, GenerationProgress, LeadSink, NoProgress,
    SubmitLeadError, SubmitLeadUseCase, TextGenerator,
};
use estate_domain::{InquiryForm, Severity, ValidationErrors};
use estate_infrastructure::{
    ConfigLoader, FileConfig, FixtureCatalog, GeminiTextGenerator, JsonlLeadLog, TracingLeadSink,
};
use estate_presentation::{
    Cli, Command, ConsoleFormatter, ContactArgs, DescribeArgs, InquireArgs, ListArgs,
    OutputConfig, ProgressReporter,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// How a command ended, mapped onto the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    NotFound,
    Invalid,
    ServiceFailed,
}

impl Outcome {
    /// 0 success, 1 not found, 2 invalid input, 3 service or setup failure
    fn code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::NotFound => 1,
            Outcome::Invalid => 2,
            Outcome::ServiceFailed => 3,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer)
        .init();

    match run(cli).await {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            Outcome::ServiceFailed.into()
        }
    }
}

async fn run(cli: Cli) -> Result<Outcome> {
    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(Outcome::Success);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(Outcome::Success);
    };

    let config = load_config(cli.config.as_deref(), cli.no_config)?;

    let output = OutputConfig::resolve(
        cli.output.map(Into::into),
        config.output.format,
        config.output.color,
    );
    if !output.color || output.is_json() {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let browse = BrowseCatalogUseCase::load(&FixtureCatalog::new()?)?;

    info!("Starting estate");

    let outcome = match command {
        Command::List(args) => list(&browse, &args, output),
        Command::Show { id } => show(&browse, &id, output),
        Command::Types => {
            let types = browse.property_types();
            if output.is_json() {
                println!("{}", ConsoleFormatter::format_json(&types));
            } else {
                print!("{}", ConsoleFormatter::format_types(&types));
            }
            Outcome::Success
        }
        Command::Describe(args) => describe(&config, &args, output, cli.quiet).await,
        Command::Inquire(args) => {
            let leads = SubmitLeadUseCase::new(lead_sink(&config)).with_catalog(browse.clone());
            inquire(&leads, &browse, &args, output)
        }
        Command::Contact(args) => {
            let leads = SubmitLeadUseCase::new(lead_sink(&config));
            contact(&leads, &args, output)
        }
    };

    debug!(?outcome, "Command finished");
    Ok(outcome)
}

fn load_config(path: Option<&Path>, no_config: bool) -> Result<FileConfig> {
    let config = if no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(path)
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!(
            "Invalid configuration: {}",
            issues
                .iter()
                .filter(|i| i.is_error())
                .map(|i| i.message.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        );
    }

    Ok(config)
}

fn lead_sink(config: &FileConfig) -> Arc<dyn LeadSink> {
    if let Some(path) = &config.leads.log_path {
        if let Some(log) = JsonlLeadLog::open(path) {
            debug!("Recording leads to {}", log.path().display());
            return Arc::new(log);
        }
        warn!("Falling back to log-only lead recording");
    }
    Arc::new(TracingLeadSink)
}

fn list(browse: &BrowseCatalogUseCase, args: &ListArgs, output: OutputConfig) -> Outcome {
    let criteria = args.criteria();
    let mut properties = browse.list(Some(&criteria));
    args.sort.apply(&mut properties);

    if output.is_json() {
        println!("{}", ConsoleFormatter::format_json(&properties));
    } else {
        print!("{}", ConsoleFormatter::format_listing(&properties));
    }
    Outcome::Success
}

fn show(browse: &BrowseCatalogUseCase, id: &str, output: OutputConfig) -> Outcome {
    match browse.show(id) {
        Ok(property) => {
            if output.is_json() {
                println!("{}", ConsoleFormatter::format_json(&property));
            } else {
                print!("{}", ConsoleFormatter::format_detail(&property));
            }
            Outcome::Success
        }
        Err(BrowseError::NotFound(id)) => {
            if output.is_json() {
                println!("{}", ConsoleFormatter::format_not_found_json(id.as_str()));
            } else {
                print!("{}", ConsoleFormatter::format_not_found(id.as_str()));
            }
            Outcome::NotFound
        }
        Err(e) => {
            error!("Catalog query failed: {}", e);
            Outcome::ServiceFailed
        }
    }
}

async fn describe(
    config: &FileConfig,
    args: &DescribeArgs,
    output: OutputConfig,
    quiet: bool,
) -> Outcome {
    let request = args.request();

    // Reject bad input before requiring a backend
    if let Err(errors) = GenerateDescriptionUseCase::validate(request.clone()) {
        return report_invalid(&errors, output);
    }

    let generator: Arc<dyn TextGenerator> =
        match GeminiTextGenerator::from_config(&config.providers.gemini, &config.generator.model) {
            Ok(generator) => Arc::new(generator),
            Err(e) => return report_service_error(&e, output),
        };

    let token = CancellationToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let use_case = GenerateDescriptionUseCase::new(generator)
        .with_params(config.generator.to_generation_params())
        .with_cancellation(token);

    let progress: Box<dyn GenerationProgress> = if quiet || output.is_json() {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    match use_case
        .execute_with_progress(request, progress.as_ref())
        .await
    {
        Ok(description) => {
            if output.is_json() {
                println!("{}", ConsoleFormatter::format_json(&description));
            } else {
                print!("{}", ConsoleFormatter::format_description(&description));
            }
            Outcome::Success
        }
        Err(GenerateDescriptionError::Invalid(errors)) => report_invalid(&errors, output),
        Err(GenerateDescriptionError::Service(e)) => report_service_error(&e, output),
    }
}

fn inquire(
    leads: &SubmitLeadUseCase,
    browse: &BrowseCatalogUseCase,
    args: &InquireArgs,
    output: OutputConfig,
) -> Outcome {
    let property_title = browse
        .show(&args.property_id)
        .map(|p| p.title)
        .unwrap_or_default();

    let form = InquiryForm {
        property_id: args.property_id.clone(),
        property_title,
        name: args.name.clone(),
        email: args.email.clone(),
        message: args.message.clone(),
    };

    report_submission(leads.submit_inquiry(form), output)
}

fn contact(leads: &SubmitLeadUseCase, args: &ContactArgs, output: OutputConfig) -> Outcome {
    report_submission(leads.submit_contact(args.form()), output)
}

fn report_submission(
    result: Result<Acknowledgement, SubmitLeadError>,
    output: OutputConfig,
) -> Outcome {
    match result {
        Ok(ack) => {
            if output.is_json() {
                println!("{}", ConsoleFormatter::format_json(&ack));
            } else {
                print!("{}", ConsoleFormatter::format_acknowledgement(&ack));
            }
            Outcome::Success
        }
        Err(SubmitLeadError::Invalid(errors)) => report_invalid(&errors, output),
    }
}

fn report_invalid(errors: &ValidationErrors, output: OutputConfig) -> Outcome {
    if output.is_json() {
        println!("{}", ConsoleFormatter::format_validation_errors_json(errors));
    } else {
        eprint!("{}", ConsoleFormatter::format_validation_errors(errors));
    }
    Outcome::Invalid
}

fn report_service_error(error: &GenerationError, output: OutputConfig) -> Outcome {
    if output.is_json() {
        println!("{}", ConsoleFormatter::format_service_error_json(error));
    } else {
        eprint!("{}", ConsoleFormatter::format_service_error(error));
    }
    Outcome::ServiceFailed
}
