use anyhow::{Context, Result};
use conjugator_model::{RunReport, WordSet};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Append the words, one per line and in sorted order, to `path`.
///
/// The file is created if it does not exist. Existing content is kept and
/// the new words follow it; nothing is deduplicated against what was
/// already there.
pub fn append_words(path: impl AsRef<Path>, words: &WordSet) -> Result<()> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open output file {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    for word in words.iter() {
        writeln!(writer, "{word}")
            .with_context(|| format!("Failed to write output file {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write output file {}", path.display()))?;

    tracing::info!(path = %path.display(), words = words.len(), "Appended words");
    Ok(())
}

/// Write the run report as pretty JSON, replacing any previous report.
pub fn write_report(path: impl AsRef<Path>, report: &RunReport) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, &json)
        .with_context(|| format!("Failed to write report {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        verbs = report.verbs.len(),
        failed = report.failed_count(),
        "Wrote run report"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use conjugator_model::{ExtractionRule, LanguageCode, SourceInfo, Verb, VerbOutcome};

    #[test]
    fn test_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let words: WordSet = ["parlons", "je", "parle"].into_iter().collect();

        append_words(&path, &words).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "je\nparle\nparlons\n");
    }

    #[test]
    fn test_appends_after_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "alpha\n").unwrap();
        let words: WordSet = ["gamma", "beta"].into_iter().collect();

        append_words(&path, &words).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "alpha\nbeta\ngamma\n");
    }

    #[test]
    fn test_second_run_is_not_deduplicated_against_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let words: WordSet = ["mange", "je"].into_iter().collect();

        append_words(&path, &words).unwrap();
        append_words(&path, &words).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "je\nmange\nje\nmange\n"
        );
    }

    #[test]
    fn test_empty_set_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "alpha\n").unwrap();

        append_words(&path, &WordSet::new()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "alpha\n");
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        let err = append_words(&path, &WordSet::new()).unwrap_err();
        assert!(err.to_string().contains("Failed to open output file"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_failure_names_the_file() {
        let words: WordSet = ["je", "parle"].into_iter().collect();
        let err = append_words("/dev/full", &words).unwrap_err();
        assert!(err.to_string().contains("Failed to write output file /dev/full"));
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = RunReport {
            source: SourceInfo {
                endpoint: "http://localhost/conjugator/html".into(),
                table_url: "http://localhost/template.htm".into(),
                language: LanguageCode::from("fra"),
                rule: ExtractionRule::AnySpan,
                fetched_at: "2026-10-18T09:00:00+00:00".into(),
            },
            output: "out.txt".into(),
            verbs: vec![VerbOutcome::conjugated(Verb::from_line("parler"), 3)],
            total_words: 3,
        };

        write_report(&path, &report).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["source"]["rule"], "any-span");
        assert_eq!(json["verbs"][0]["words"], 3);
        assert_eq!(json["total_words"], 3);
    }
}
