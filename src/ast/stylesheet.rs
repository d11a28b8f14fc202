//! The stylesheet root and its top-level rules.

use std::hash::{Hash, Hasher};

use crate::error::AstError;

use super::keyframes::KeyframesRule;
use super::media::{MediaQuery, MediaRule};
use super::page::{FontFaceRule, PageRule, UnknownRule, ViewportRule};
use super::style_rule::StyleRule;
use super::supports::SupportsRule;
use super::SourceLocation;

/// `@import "target" [media];`
#[derive(Clone, Debug, Eq)]
pub struct ImportRule {
    uri: String,
    queries: Vec<MediaQuery>,
    location: Option<SourceLocation>,
}

impl ImportRule {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            queries: Vec::new(),
            location: None,
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn add_query(&mut self, query: MediaQuery) -> &mut Self {
        self.queries.push(query);
        self
    }

    pub fn queries(&self) -> &[MediaQuery] {
        &self.queries
    }

    pub fn source_location(&self) -> Option<SourceLocation> {
        self.location
    }

    pub fn set_source_location(&mut self, location: SourceLocation) {
        self.location = Some(location);
    }
}

impl PartialEq for ImportRule {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri && self.queries == other.queries
    }
}

impl Hash for ImportRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uri.hash(state);
        self.queries.hash(state);
    }
}

/// `@namespace [prefix] "uri";` (CSS 3.0)
#[derive(Clone, Debug, Eq)]
pub struct NamespaceRule {
    prefix: Option<String>,
    uri: String,
    location: Option<SourceLocation>,
}

impl NamespaceRule {
    pub fn new(prefix: Option<String>, uri: impl Into<String>) -> Self {
        Self {
            prefix,
            uri: uri.into(),
            location: None,
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn source_location(&self) -> Option<SourceLocation> {
        self.location
    }

    pub fn set_source_location(&mut self, location: SourceLocation) {
        self.location = Some(location);
    }
}

impl PartialEq for NamespaceRule {
    fn eq(&self, other: &Self) -> bool {
        self.prefix == other.prefix && self.uri == other.uri
    }
}

impl Hash for NamespaceRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.prefix.hash(state);
        self.uri.hash(state);
    }
}

/// The closed set of rules that can appear directly in a stylesheet body
/// (excluding `@import` / `@namespace`, which the stylesheet stores
/// separately).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TopLevelRule {
    Style(StyleRule),
    Media(MediaRule),
    Page(PageRule),
    FontFace(FontFaceRule),
    Keyframes(KeyframesRule),
    Supports(SupportsRule),
    Viewport(ViewportRule),
    Unknown(UnknownRule),
}

impl TopLevelRule {
    pub fn source_location(&self) -> Option<SourceLocation> {
        match self {
            TopLevelRule::Style(r) => r.source_location(),
            TopLevelRule::Media(r) => r.source_location(),
            TopLevelRule::Page(r) => r.source_location(),
            TopLevelRule::FontFace(r) => r.source_location(),
            TopLevelRule::Keyframes(r) => r.source_location(),
            TopLevelRule::Supports(r) => r.source_location(),
            TopLevelRule::Viewport(r) => r.source_location(),
            TopLevelRule::Unknown(r) => r.source_location(),
        }
    }
}

/// The root entity: ordered imports, ordered namespaces, ordered rules.
///
/// Imports and namespaces are stored apart from the other top-level rules
/// because the grammar requires them to precede all other content; a single
/// freely-mutable list would let callers break that silently.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Stylesheet {
    imports: Vec<ImportRule>,
    namespaces: Vec<NamespaceRule>,
    rules: Vec<TopLevelRule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_import(&mut self, rule: ImportRule) -> &mut Self {
        self.imports.push(rule);
        self
    }

    pub fn add_namespace(&mut self, rule: NamespaceRule) -> &mut Self {
        self.namespaces.push(rule);
        self
    }

    pub fn add_rule(&mut self, rule: TopLevelRule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    pub fn remove_import(&mut self, index: usize) -> Result<ImportRule, AstError> {
        if index >= self.imports.len() {
            return Err(AstError::IndexOutOfBounds {
                index,
                len: self.imports.len(),
            });
        }
        Ok(self.imports.remove(index))
    }

    pub fn remove_namespace(&mut self, index: usize) -> Result<NamespaceRule, AstError> {
        if index >= self.namespaces.len() {
            return Err(AstError::IndexOutOfBounds {
                index,
                len: self.namespaces.len(),
            });
        }
        Ok(self.namespaces.remove(index))
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

    pub fn imports(&self) -> &[ImportRule] {
        &self.imports
    }

    pub fn namespaces(&self) -> &[NamespaceRule] {
        &self.namespaces
    }

    pub fn rules(&self) -> &[TopLevelRule] {
        &self.rules
    }

    /// Defensive snapshots for mutation-heavy callers.
    pub fn all_imports(&self) -> Vec<ImportRule> {
        self.imports.clone()
    }

    pub fn all_namespaces(&self) -> Vec<NamespaceRule> {
        self.namespaces.clone()
    }

    pub fn all_rules(&self) -> Vec<TopLevelRule> {
        self.rules.clone()
    }

    /// All style rules, in order, skipping the other rule kinds.
    pub fn style_rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter().filter_map(|r| match r {
            TopLevelRule::Style(s) => Some(s),
            _ => None,
        })
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.namespaces.is_empty() && self.rules.is_empty()
    }
}
