use serde::{Deserialize, Serialize};

/// Which HTML elements of a conjugation table count as conjugation output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionRule {
    /// `span` elements carrying the class `normal` (regular forms) or
    /// `irregular` (irregular forms).
    #[default]
    Classified,
    /// Every `span` element, whatever its class. Also picks up pronouns
    /// and any other span-wrapped text in the table.
    AnySpan,
}

const CONJUGATION_CLASSES: &[&str] = &["normal", "irregular"];

impl ExtractionRule {
    /// Tag name that carries conjugated forms.
    pub fn tag(&self) -> &'static str {
        "span"
    }

    /// Classes an element must have one of. Empty means no class filter.
    pub fn classes(&self) -> &'static [&'static str] {
        match self {
            ExtractionRule::Classified => CONJUGATION_CLASSES,
            ExtractionRule::AnySpan => &[],
        }
    }

    /// Does an element with this tag name and these classes match?
    pub fn matches<'a>(&self, tag: &str, mut classes: impl Iterator<Item = &'a str>) -> bool {
        if !tag.eq_ignore_ascii_case(self.tag()) {
            return false;
        }
        let wanted = self.classes();
        wanted.is_empty() || classes.any(|c| wanted.contains(&c))
    }
}
