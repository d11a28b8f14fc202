//! `@media` rules and media queries.

use std::hash::{Hash, Hasher};

use crate::error::AstError;

use super::expression::Expression;
use super::stylesheet::TopLevelRule;
use super::SourceLocation;

/// Leading media query modifier. Modifiers require CSS 3.0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MediaModifier {
    #[default]
    None,
    Not,
    Only,
}

impl MediaModifier {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaModifier::None => "",
            MediaModifier::Not => "not",
            MediaModifier::Only => "only",
        }
    }
}

/// A `(feature: value)` or bare `(feature)` media expression (CSS 3.0).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MediaExpression {
    pub feature: String,
    pub value: Option<Expression>,
}

impl MediaExpression {
    pub fn new(feature: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
            value: None,
        }
    }

    pub fn with_value(feature: impl Into<String>, value: Expression) -> Self {
        Self {
            feature: feature.into(),
            value: Some(value),
        }
    }
}

/// One comma-alternative of a media query list, e.g.
/// `only screen and (min-width: 600px)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MediaQuery {
    modifier: MediaModifier,
    medium: Option<String>,
    expressions: Vec<MediaExpression>,
}

impl MediaQuery {
    pub fn new(modifier: MediaModifier, medium: Option<String>) -> Self {
        Self {
            modifier,
            medium,
            expressions: Vec::new(),
        }
    }

    pub fn medium(medium: impl Into<String>) -> Self {
        Self::new(MediaModifier::None, Some(medium.into()))
    }

    pub fn add_expression(&mut self, expression: MediaExpression) -> &mut Self {
        self.expressions.push(expression);
        self
    }

    pub fn modifier(&self) -> MediaModifier {
        self.modifier
    }

    pub fn medium_name(&self) -> Option<&str> {
        self.medium.as_deref()
    }

    pub fn expressions(&self) -> &[MediaExpression] {
        &self.expressions
    }

    /// True when the query uses any CSS 3.0-only construct.
    pub fn uses_css30_features(&self) -> bool {
        self.modifier != MediaModifier::None || !self.expressions.is_empty()
    }
}

/// `@media <queries> { <rules> }`
#[derive(Clone, Debug, Default, Eq)]
pub struct MediaRule {
    queries: Vec<MediaQuery>,
    rules: Vec<TopLevelRule>,
    location: Option<SourceLocation>,
}

impl MediaRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_query(&mut self, query: MediaQuery) -> &mut Self {
        self.queries.push(query);
        self
    }

    pub fn add_rule(&mut self, rule: TopLevelRule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    pub fn remove_rule(&mut self, index: usize) -> Result<TopLevelRule, AstError> {
        if index >= self.rules.len() {
            return Err(AstError::IndexOutOfBounds {
                index,
                len: self.rules.len(),
            });
        }
        Ok(self.rules.remove(index))
    }

    pub fn queries(&self) -> &[MediaQuery] {
        &self.queries
    }

    pub fn rules(&self) -> &[TopLevelRule] {
        &self.rules
    }

    pub fn all_rules(&self) -> Vec<TopLevelRule> {
        self.rules.clone()
    }

    pub fn source_location(&self) -> Option<SourceLocation> {
        self.location
    }

    pub fn set_source_location(&mut self, location: SourceLocation) {
        self.location = Some(location);
    }
}

impl PartialEq for MediaRule {
    fn eq(&self, other: &Self) -> bool {
        self.queries == other.queries && self.rules == other.rules
    }
}

impl Hash for MediaRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.queries.hash(state);
        self.rules.hash(state);
    }
}
