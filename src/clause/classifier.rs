use anyhow::Result;
use regex::{Regex, RegexBuilder};

use crate::clause::taxonomy::{CLAUSE_RULES, HINDI_CLAUSE_RULES};
use crate::language::normalizer::HindiNormalizer;
use crate::models::ClauseType;

/// Assigns each clause one [`ClauseType`] by walking an ordered rule list;
/// the first matching rule wins and `General` is the fallback.
pub struct ClauseClassifier {
    rules: Vec<(ClauseType, Regex)>,
    /// Same order as `rules`; `None` for types without Hindi keywords.
    hindi_rules: Vec<(ClauseType, Option<Regex>)>,
}

impl ClauseClassifier {
    pub fn new() -> Result<Self> {
        let mut rules = Vec::with_capacity(CLAUSE_RULES.len());
        for (clause_type, fragments) in CLAUSE_RULES {
            rules.push((*clause_type, alternation(*fragments)?));
        }

        let mut hindi_rules = Vec::with_capacity(CLAUSE_RULES.len());
        for (clause_type, _) in CLAUSE_RULES {
            let hindi = HINDI_CLAUSE_RULES
                .iter()
                .find(|(t, _)| t == clause_type)
                .map(|(_, keywords)| {
                    let escaped: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
                    alternation(escaped.as_slice())
                })
                .transpose()?;
            hindi_rules.push((*clause_type, hindi));
        }

        Ok(Self { rules, hindi_rules })
    }

    pub fn classify(&self, clause_text: &str) -> ClauseType {
        self.rules
            .iter()
            .find(|(_, re)| re.is_match(clause_text))
            .map(|(clause_type, _)| *clause_type)
            .unwrap_or(ClauseType::General)
    }

    /// Classify a clause that may be written in Hindi: the English rules run
    /// over both the raw and the normalized text, the Hindi keywords over the
    /// raw text, with the same priority order.
    pub fn classify_multilingual(
        &self,
        clause_text: &str,
        normalizer: &HindiNormalizer,
    ) -> ClauseType {
        let normalized = normalizer.normalize(clause_text);

        for ((clause_type, english), (_, hindi)) in self.rules.iter().zip(&self.hindi_rules) {
            let hit = english.is_match(clause_text)
                || english.is_match(&normalized)
                || hindi.as_ref().is_some_and(|re| re.is_match(clause_text));
            if hit {
                return *clause_type;
            }
        }

        ClauseType::General
    }
}

fn alternation<S: AsRef<str>>(fragments: &[S]) -> Result<Regex> {
    let pattern = fragments
        .iter()
        .map(|f| format!("(?:{})", f.as_ref()))
        .collect::<Vec<_>>()
        .join("|");
    Ok(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
}
