use std::sync::OnceLock;

use regex::Regex;

use crate::modules::catalog::domain::entities::TitleKind;
use crate::modules::catalog::infrastructure::models::TitleRecord;

// Both patterns are infallible; compiled once, shared by every scan.
fn phrase_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]*)""#).unwrap())
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z0-9']+").unwrap())
}

/// Term search over the `name` field.
///
/// Quoted input is phrase-matched (every phrase must appear verbatim,
/// case-insensitive); unquoted input is token-matched (at least one token
/// must equal a name token).
#[derive(Debug, Clone)]
pub struct TextCriteria {
    phrases: Vec<String>,
    tokens: Vec<String>,
}

impl TextCriteria {
    pub fn parse(terms: &str) -> TextCriteria {
        let phrases = phrase_regex()
            .captures_iter(terms)
            .map(|capture| capture[1].to_lowercase())
            .filter(|phrase| !phrase.is_empty())
            .collect();
        let unquoted = phrase_regex().replace_all(terms, " ");
        let tokens = token_regex()
            .find_iter(&unquoted)
            .map(|token| token.as_str().to_lowercase())
            .collect();
        TextCriteria { phrases, tokens }
    }

    pub fn matches(&self, name: Option<&str>) -> bool {
        let Some(name) = name else {
            return false;
        };
        let name = name.to_lowercase();

        if !self.phrases.iter().all(|phrase| name.contains(phrase)) {
            return false;
        }
        if self.tokens.is_empty() {
            return !self.phrases.is_empty();
        }
        let name_tokens: Vec<&str> = token_regex().find_iter(&name).map(|m| m.as_str()).collect();
        self.tokens
            .iter()
            .any(|token| name_tokens.iter().any(|name_token| name_token == token))
    }
}

/// A single filter predicate over stored title records.
#[derive(Debug, Clone)]
pub enum Criteria {
    /// Variant discriminator set membership.
    KindIn(Vec<TitleKind>),
    /// Back-reference equality: `parent.id == _`.
    ParentIdEq(String),
    /// Term search on `name`.
    Text(TextCriteria),
    /// Logical OR of predicates.
    AnyOf(Vec<Criteria>),
}

impl Criteria {
    pub fn matches(&self, record: &TitleRecord) -> bool {
        match self {
            Criteria::KindIn(kinds) => kinds.contains(&record.kind),
            Criteria::ParentIdEq(parent_id) => record.parent_id() == Some(parent_id.as_str()),
            Criteria::Text(text) => text.matches(record.name.as_deref()),
            Criteria::AnyOf(criteria) => criteria.iter().any(|c| c.matches(record)),
        }
    }
}

/// Fields excluded from fetched records.
#[derive(Debug, Clone, Default)]
pub struct Projection {
    pub exclude_parent: bool,
}

/// Composable store query: all criteria must hold, then the projection is
/// applied to each fetched record.
#[derive(Debug, Clone, Default)]
pub struct Query {
    criteria: Vec<Criteria>,
    projection: Projection,
}

impl Query {
    pub fn new() -> Query {
        Query::default()
    }

    /// Restrict to the given variants; an empty set means no restriction.
    pub fn kinds(mut self, kinds: &[TitleKind]) -> Query {
        if !kinds.is_empty() {
            self.criteria.push(Criteria::KindIn(kinds.to_vec()));
        }
        self
    }

    /// Restrict by search terms when given.
    pub fn matching(mut self, terms: Option<&str>) -> Query {
        if let Some(terms) = terms {
            self.criteria.push(Criteria::Text(TextCriteria::parse(terms)));
        }
        self
    }

    /// Restrict to children of the given title.
    pub fn by_parent(mut self, parent_id: &str) -> Query {
        self.criteria
            .push(Criteria::ParentIdEq(parent_id.to_owned()));
        self
    }

    pub fn any_of(mut self, criteria: Vec<Criteria>) -> Query {
        self.criteria.push(Criteria::AnyOf(criteria));
        self
    }

    /// Drop the parent reference from fetched records.
    pub fn exclude_parent(mut self) -> Query {
        self.projection.exclude_parent = true;
        self
    }

    pub fn matches(&self, record: &TitleRecord) -> bool {
        self.criteria.iter().all(|criteria| criteria.matches(record))
    }

    pub fn project(&self, mut record: TitleRecord) -> TitleRecord {
        if self.projection.exclude_parent {
            record.parent = None;
        }
        record
    }
}
