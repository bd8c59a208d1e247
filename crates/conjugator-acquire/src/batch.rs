use anyhow::Result;
use conjugator_model::{ConjugationError, ExtractionRule, LanguageCode, Verb, VerbOutcome, WordSet};

/// Something that can produce the conjugation table HTML for a verb.
#[allow(async_fn_in_trait)]
pub trait ConjugationSource {
    async fn fetch(&self, language: &LanguageCode, verb: &Verb) -> Result<String>;
}

/// Words collected over a batch, plus what happened to each verb.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub words: WordSet,
    pub outcomes: Vec<VerbOutcome>,
}

/// Conjugate every verb in order, one at a time, merging the words.
///
/// A verb that fails to fetch or yields no words is logged and skipped;
/// it never stops the batch.
pub async fn conjugate_verbs<S: ConjugationSource>(
    source: &S,
    verbs: &[Verb],
    language: &LanguageCode,
    rule: ExtractionRule,
) -> BatchResult {
    let mut result = BatchResult::default();

    for verb in verbs {
        tracing::info!("Conjugating {verb}");
        if verb.is_empty() {
            tracing::warn!("Blank input line; requesting an empty verb");
        }

        match conjugate_one(source, verb, language, rule).await {
            Ok(words) => {
                tracing::debug!(verb = %verb, words = words.len(), "Conjugated");
                result
                    .outcomes
                    .push(VerbOutcome::conjugated(verb.clone(), words.len()));
                result.words.merge(words);
            }
            Err(err) => {
                tracing::error!("{err}");
                result.outcomes.push(VerbOutcome::failed(verb.clone(), &err));
            }
        }
    }

    result
}

async fn conjugate_one<S: ConjugationSource>(
    source: &S,
    verb: &Verb,
    language: &LanguageCode,
    rule: ExtractionRule,
) -> Result<WordSet, ConjugationError> {
    let html = source
        .fetch(language, verb)
        .await
        .map_err(|e| ConjugationError::Fetch {
            verb: verb.to_string(),
            language: language.to_string(),
            reason: format!("{e:#}"),
        })?;

    conjugator_extract::extract_words(&html, rule).ok_or_else(|| ConjugationError::NoWords {
        verb: verb.to_string(),
        language: language.to_string(),
    })
}
