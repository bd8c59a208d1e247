use anyhow::Result;
use conjugator_model::{ExtractionRule, LanguageCode, RunReport, SourceInfo};
use std::path::PathBuf;

pub mod batch;
pub mod input;
pub mod output;
pub mod verbix;

use verbix::VerbixClient;

/// Everything one conjugation run needs, as assembled by the CLI.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub language: LanguageCode,
    pub input: PathBuf,
    pub output: PathBuf,
    pub rule: ExtractionRule,
    pub endpoint: String,
    pub table_url: String,
    /// Verify Verbix is reachable before reading any verbs.
    pub check_connection: bool,
    /// Where to write the JSON run report, if anywhere.
    pub report: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(language: impl Into<LanguageCode>, input: impl Into<PathBuf>) -> Self {
        Self {
            language: language.into(),
            input: input.into(),
            output: PathBuf::from("out.txt"),
            rule: ExtractionRule::default(),
            endpoint: verbix::DEFAULT_ENDPOINT.to_string(),
            table_url: verbix::DEFAULT_TABLE_URL.to_string(),
            check_connection: true,
            report: None,
        }
    }
}

/// Conjugate every verb in the input file and append the words to the output.
///
/// Fails only on the fatal conditions: Verbix unreachable at start-up, the
/// input file unreadable, or the output/report file unwritable. Verbs that
/// cannot be conjugated are logged and recorded in the returned report.
pub async fn conjugate(config: &RunConfig) -> Result<RunReport> {
    let client = VerbixClient::new(&config.endpoint, &config.table_url)?;
    conjugate_with(&client, config).await
}

/// Same as [`conjugate`], talking to Verbix through an existing client.
///
/// The client's endpoint and table URL take precedence over the ones in
/// `config`.
pub async fn conjugate_with(client: &VerbixClient, config: &RunConfig) -> Result<RunReport> {
    if config.check_connection {
        client.check_connection().await?;
    }

    let verbs = input::read_verbs(&config.input)?;

    let fetched_at = chrono::Utc::now().to_rfc3339();
    let result = batch::conjugate_verbs(client, &verbs, &config.language, config.rule).await;

    output::append_words(&config.output, &result.words)?;

    let report = RunReport {
        source: SourceInfo {
            endpoint: client.endpoint().to_string(),
            table_url: client.table_url().to_string(),
            language: config.language.clone(),
            rule: config.rule,
            fetched_at,
        },
        output: config.output.display().to_string(),
        verbs: result.outcomes,
        total_words: result.words.len(),
    };

    tracing::info!(
        verbs = report.verbs.len(),
        conjugated = report.conjugated_count(),
        failed = report.failed_count(),
        words = report.total_words,
        "Conjugation finished"
    );

    if let Some(path) = &config.report {
        output::write_report(path, &report)?;
    }

    Ok(report)
}
