use std::sync::Arc;

use tracing::debug;

use super::gazetteer;
use super::types::{EntityCategory, EntitySet};
use crate::text::Stopwords;

/// Named-entity recognition collaborator.
///
/// Implementations never fail: categories without matches are simply empty.
pub trait EntityExtractor: Send + Sync {
    fn extract(&self, text: &str) -> EntitySet;
}

impl<T: EntityExtractor + ?Sized> EntityExtractor for Arc<T> {
    fn extract(&self, text: &str) -> EntitySet {
        (**self).extract(text)
    }
}

/// Rule-based extractor over capitalization, a small gazetteer and date
/// patterns. No model files, deterministic output.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    stopwords: Arc<Stopwords>,
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new(Arc::new(Stopwords::english()))
    }
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    word: &'a str,
    /// Leading punctuation such as an opening quote or parenthesis.
    opens_clause: bool,
    /// Trailing punctuation that ends a capitalized span.
    closes_clause: bool,
    sentence_start: bool,
}

impl PatternExtractor {
    pub fn new(stopwords: Arc<Stopwords>) -> Self {
        Self { stopwords }
    }

    fn classify_span(&self, span: &[Token<'_>]) -> Option<(EntityCategory, String)> {
        let mut words: Vec<&str> = span.iter().map(|t| t.word).collect();

        while words
            .first()
            .is_some_and(|w| !is_acronym(w) && self.stopwords.contains(&w.to_lowercase()))
        {
            words.remove(0);
        }
        if words.is_empty() {
            return None;
        }

        if gazetteer::is_person_title(words[0]) {
            return person_after_title(&words).map(|name| (EntityCategory::Person, name));
        }

        let phrase = words.join(" ");
        if gazetteer::is_location(&phrase.replace('.', "")) {
            return Some((EntityCategory::Location, phrase));
        }

        if let [word] = words.as_slice() {
            // A lone capitalized word is only an entity when it is an acronym.
            return is_acronym(word).then(|| (EntityCategory::Organization, phrase));
        }

        if words.iter().any(|w| gazetteer::is_organization_head(w)) {
            return Some((EntityCategory::Organization, phrase));
        }

        if let Some(name) = person_after_title(&words) {
            return Some((EntityCategory::Person, name));
        }

        match words.len() {
            2..=3 => Some((EntityCategory::Person, phrase)),
            _ => Some((EntityCategory::Organization, phrase)),
        }
    }
}

impl EntityExtractor for PatternExtractor {
    fn extract(&self, text: &str) -> EntitySet {
        let tokens = tokenize(text);
        let mut consumed = vec![false; tokens.len()];
        let mut entities = EntitySet::new();

        for (start, len, date) in find_dates(&tokens) {
            consumed[start..start + len].fill(true);
            entities.insert(EntityCategory::Date, date);
        }

        let mut span: Vec<Token<'_>> = Vec::new();
        let mut spans: Vec<Vec<Token<'_>>> = Vec::new();

        for (token, used) in tokens.iter().zip(&consumed) {
            let joins = !used && is_capitalized(token.word);
            if !joins || token.opens_clause || token.sentence_start {
                if !span.is_empty() {
                    spans.push(std::mem::take(&mut span));
                }
            }
            if !joins {
                continue;
            }
            span.push(*token);
            if token.closes_clause {
                spans.push(std::mem::take(&mut span));
            }
        }
        if !span.is_empty() {
            spans.push(span);
        }

        for span in &spans {
            if let Some((category, name)) = self.classify_span(span) {
                entities.insert(category, name);
            }
        }

        debug!(
            tokens = tokens.len(),
            spans = spans.len(),
            entities = entities.len(),
            "Entity extraction complete"
        );

        entities
    }
}

/// Words following the first run of titles, e.g. "Prime Minister Jane Doe" → "Jane Doe".
fn person_after_title(words: &[&str]) -> Option<String> {
    let first_title = words.iter().position(|w| gazetteer::is_person_title(w))?;
    let name: Vec<&str> = words[first_title..]
        .iter()
        .copied()
        .skip_while(|w| gazetteer::is_person_title(w))
        .collect();
    (!name.is_empty()).then(|| name.join(" "))
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut sentence_start = true;

    for raw in text.split_whitespace() {
        let Some((start, end)) = alphanumeric_bounds(raw) else {
            // Free-standing punctuation (dashes, bullets) separates spans.
            if let Some(last) = tokens.last_mut() {
                last.closes_clause = true;
            }
            if raw.contains(['.', '!', '?']) {
                sentence_start = true;
            }
            continue;
        };

        let leading = &raw[..start];
        let trailing = &raw[end..];
        let core = &raw[start..end];
        let word = core
            .strip_suffix("'s")
            .or_else(|| core.strip_suffix("\u{2019}s"))
            .unwrap_or(core);

        let abbreviated =
            trailing.starts_with('.') && (gazetteer::is_abbreviation(word) || word.contains('.'));
        let ends_sentence = !abbreviated && trailing.contains(['.', '!', '?', ':', ';']);

        tokens.push(Token {
            word,
            opens_clause: !leading.is_empty(),
            closes_clause: ends_sentence || (!abbreviated && !trailing.is_empty()),
            sentence_start,
        });

        sentence_start = ends_sentence;
    }

    tokens
}

/// Byte range of `raw` between its first and last alphanumeric character.
fn alphanumeric_bounds(raw: &str) -> Option<(usize, usize)> {
    let start = raw.find(char::is_alphanumeric)?;
    let end = raw
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, c)| i + c.len_utf8())?;
    Some((start, end))
}

/// `(first token, token count, rendered date)` for every date in the text.
fn find_dates(tokens: &[Token<'_>]) -> Vec<(usize, usize, String)> {
    let mut dates = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let word = tokens[i].word;
        let next = move |offset: usize| tokens.get(i + offset).map(|t| t.word);

        if is_month_name(word) {
            match (next(1), next(2)) {
                (Some(day), Some(year)) if is_day(day) && is_year(year) => {
                    dates.push((i, 3, format!("{word} {day}, {year}")));
                    i += 3;
                    continue;
                }
                (Some(year), _) if is_year(year) => {
                    dates.push((i, 2, format!("{word} {year}")));
                    i += 2;
                    continue;
                }
                _ => {}
            }
        }

        if is_day(word) {
            if let (Some(month), Some(year)) = (next(1), next(2)) {
                if is_month_name(month) && is_year(year) {
                    dates.push((i, 3, format!("{word} {month} {year}")));
                    i += 3;
                    continue;
                }
            }
        }

        if is_year(word) {
            dates.push((i, 1, word.to_string()));
        }
        i += 1;
    }

    dates
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase) && !word.chars().any(|c| c.is_ascii_digit())
}

fn is_month_name(word: &str) -> bool {
    is_capitalized(word) && gazetteer::is_month(word)
}

fn is_acronym(word: &str) -> bool {
    (2..=6).contains(&word.len()) && word.chars().all(|c| c.is_ascii_uppercase())
}

fn is_year(word: &str) -> bool {
    word.len() == 4
        && word.chars().all(|c| c.is_ascii_digit())
        && word
            .parse::<u16>()
            .is_ok_and(|year| (1900..=2099).contains(&year))
}

fn is_day(word: &str) -> bool {
    word.len() <= 2
        && word.chars().all(|c| c.is_ascii_digit())
        && word.parse::<u8>().is_ok_and(|day| (1..=31).contains(&day))
}
