use crate::{ConjugationError, ExtractionRule, LanguageCode, Verb};
use serde::{Deserialize, Serialize};

/// What happened to one verb during a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerbOutcome {
    pub verb: Verb,
    /// Distinct words extracted for this verb alone.
    pub words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerbOutcome {
    pub fn conjugated(verb: Verb, words: usize) -> Self {
        Self {
            verb,
            words,
            error: None,
        }
    }

    pub fn failed(verb: Verb, error: &ConjugationError) -> Self {
        Self {
            verb,
            words: 0,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Where the conjugations came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    pub endpoint: String,
    pub table_url: String,
    pub language: LanguageCode,
    pub rule: ExtractionRule,
    pub fetched_at: String,
}

/// Summary of a complete run, written as JSON on request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub source: SourceInfo,
    pub output: String,
    pub verbs: Vec<VerbOutcome>,
    /// Distinct words appended to the output file.
    pub total_words: usize,
}

impl RunReport {
    pub fn conjugated_count(&self) -> usize {
        self.verbs.iter().filter(|v| v.is_success()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.verbs.len() - self.conjugated_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RunReport {
        let failure = ConjugationError::NoWords {
            verb: "xyz".into(),
            language: "fra".into(),
        };
        RunReport {
            source: SourceInfo {
                endpoint: "http://api.verbix.com/conjugator/html".into(),
                table_url: "http://tools.verbix.com/webverbix/personal/template.htm".into(),
                language: LanguageCode::from("fra"),
                rule: ExtractionRule::Classified,
                fetched_at: "2026-10-18T09:00:00+00:00".into(),
            },
            output: "out.txt".into(),
            verbs: vec![
                VerbOutcome::conjugated(Verb::from_line("parler"), 42),
                VerbOutcome::failed(Verb::from_line("xyz"), &failure),
            ],
            total_words: 42,
        }
    }

    #[test]
    fn test_counts() {
        let report = sample();
        assert_eq!(report.conjugated_count(), 1);
        assert_eq!(report.failed_count(), 1);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["source"]["language"], "fra");
        assert_eq!(json["source"]["rule"], "classified");
        assert_eq!(json["verbs"][0]["verb"], "parler");
        assert!(json["verbs"][0].get("error").is_none());
        assert_eq!(
            json["verbs"][1]["error"],
            r#"Error conjugating verb "xyz" in language "fra""#
        );
    }
}
