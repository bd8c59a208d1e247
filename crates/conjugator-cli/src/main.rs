use anyhow::Result;
use clap::Parser;
use conjugator_acquire::{verbix, RunConfig};
use conjugator_model::{ExtractionRule, LanguageCode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "conjugator")]
#[command(about = "Conjugate a list of verbs into a sorted word list using the Verbix API")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
#[command(after_help = "Example:\n  conjugator -i sample-french.txt -l fra -o out_french.txt")]
struct Cli {
    /// 3-character language code. For language codes, see http://api.verbix.com/conjugator/html
    #[arg(short, long)]
    lang: String,

    /// Input file (list of infinitive verbs, one per line)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file the conjugated words are appended to
    #[arg(short, long, default_value = "out.txt")]
    output: PathBuf,

    /// Which table elements count as conjugated forms
    #[arg(long, default_value = "classified", value_enum)]
    rule: Rule,

    /// Conjugation API endpoint
    #[arg(long, default_value = verbix::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Table template the API renders into (also used for the connection check)
    #[arg(long, default_value = verbix::DEFAULT_TABLE_URL)]
    table_url: String,

    /// Skip the connection check before conjugating
    #[arg(long)]
    no_check: bool,

    /// Also write a JSON report of the run to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, PartialEq, clap::ValueEnum)]
enum Rule {
    /// Only spans classed "normal" or "irregular"
    Classified,
    /// Every span in the table, pronouns included
    AnySpan,
}

impl From<Rule> for ExtractionRule {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::Classified => ExtractionRule::Classified,
            Rule::AnySpan => ExtractionRule::AnySpan,
        }
    }
}

fn run_config(cli: Cli) -> RunConfig {
    RunConfig {
        language: LanguageCode::new(cli.lang),
        input: cli.input,
        output: cli.output,
        rule: cli.rule.into(),
        endpoint: cli.endpoint,
        table_url: cli.table_url,
        check_connection: !cli.no_check,
        report: cli.report,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTML-parsing and HTTP crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn,hyper_util=warn,reqwest=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn,hyper_util=warn,reqwest=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    // Verbix terms of use ask for this on every run.
    println!("\n{}\n", verbix::CITATION);

    let config = run_config(cli);

    tracing::info!(
        lang = %config.language,
        input = %config.input.display(),
        rule = ?config.rule,
        "Conjugating verbs"
    );
    conjugator_acquire::conjugate(&config).await?;

    tracing::info!("Output saved in {}", config.output.display());

    Ok(())
}
