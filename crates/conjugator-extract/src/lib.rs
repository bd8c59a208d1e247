use conjugator_model::{ExtractionRule, WordSet};
use ego_tree::NodeRef;
use scraper::{Html, Node};
use std::ops::Deref;

/// Extract conjugated word forms from a conjugation table page.
///
/// Walks the parsed document in order and, for every element the `rule`
/// matches, splits that element's full text on whitespace into words.
/// A matching element is not descended into again, so nested matches are
/// not read twice.
///
/// Returns `None` when nothing on the page matched, or when the matching
/// elements held no words. Callers treat that as "this verb could not be
/// conjugated".
pub fn extract_words(html: &str, rule: ExtractionRule) -> Option<WordSet> {
    let document = Html::parse_document(html);

    let mut scan = Scan {
        rule,
        matched: 0,
        tokens: 0,
        words: WordSet::new(),
    };
    scan.walk(document.tree.root());

    tracing::debug!(
        rule = ?rule,
        elements = scan.matched,
        tokens = scan.tokens,
        words = scan.words.len(),
        "Scanned conjugation table"
    );

    if scan.words.is_empty() {
        None
    } else {
        Some(scan.words)
    }
}

struct Scan {
    rule: ExtractionRule,
    matched: usize,
    tokens: usize,
    words: WordSet,
}

impl Scan {
    fn walk(&mut self, node: NodeRef<'_, Node>) {
        if let Node::Element(elem) = node.value() {
            if self.rule.matches(elem.name(), elem.classes()) {
                self.matched += 1;
                let text = collect_all_text(node);
                self.tokens += self.words.insert_text(&text);
                return;
            }
        }
        for child in node.children() {
            self.walk(child);
        }
    }
}

/// Collect all text content under a node, recursively.
///
/// `<br>` becomes a newline so forms on separate visual lines stay
/// separate words.
fn collect_all_text(node: NodeRef<'_, Node>) -> String {
    let mut text = String::new();

    for child in node.children() {
        match child.value() {
            Node::Text(t) => text.push_str(t.deref()),
            Node::Element(elem) => {
                if elem.name() == "br" {
                    text.push('\n');
                } else {
                    text.push_str(&collect_all_text(child));
                }
            }
            _ => {}
        }
    }

    text
}
