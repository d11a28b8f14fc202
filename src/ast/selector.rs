//! Selectors and their members.
//!
//! A [`Selector`] is one comma-alternative of a style rule: an ordered list
//! of members, where combinators appear between simple/compound members in
//! source order. `a > b.c` is `[Simple("a"), Combinator(Greater),
//! Simple("b"), Simple(".c")]`.

use crate::error::AstError;
use crate::grammar::CssVersion;

use super::expression::Expression;

/// Attribute match operators for `[attr op value]` members.
///
/// `^=`, `$=` and `*=` require CSS 3.0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeOperator {
    /// `=`
    Equals,
    /// `~=`
    Includes,
    /// `|=`
    DashMatch,
    /// `^=`
    BeginMatch,
    /// `$=`
    EndMatch,
    /// `*=`
    ContainsMatch,
}

impl AttributeOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeOperator::Equals => "=",
            AttributeOperator::Includes => "~=",
            AttributeOperator::DashMatch => "|=",
            AttributeOperator::BeginMatch => "^=",
            AttributeOperator::EndMatch => "$=",
            AttributeOperator::ContainsMatch => "*=",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "=" => Some(AttributeOperator::Equals),
            "~=" => Some(AttributeOperator::Includes),
            "|=" => Some(AttributeOperator::DashMatch),
            "^=" => Some(AttributeOperator::BeginMatch),
            "$=" => Some(AttributeOperator::EndMatch),
            "*=" => Some(AttributeOperator::ContainsMatch),
            _ => None,
        }
    }

    pub fn minimum_version(self) -> CssVersion {
        match self {
            AttributeOperator::Equals
            | AttributeOperator::Includes
            | AttributeOperator::DashMatch => CssVersion::Css21,
            AttributeOperator::BeginMatch
            | AttributeOperator::EndMatch
            | AttributeOperator::ContainsMatch => CssVersion::Css30,
        }
    }
}

/// Combinators between selector members.
///
/// The general-sibling combinator `~` requires CSS 3.0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// `+`
    Plus,
    /// `>`
    Greater,
    /// `~`
    Tilde,
    /// descendant whitespace
    Blank,
}

impl Combinator {
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::Plus => "+",
            Combinator::Greater => ">",
            Combinator::Tilde => "~",
            Combinator::Blank => " ",
        }
    }

    pub fn minimum_version(self) -> CssVersion {
        match self {
            Combinator::Tilde => CssVersion::Css30,
            _ => CssVersion::Css21,
        }
    }
}

/// One member of a selector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectorMember {
    /// Element name, `*`, `#id`, `.class`, or a bare pseudo like `:hover` /
    /// `::before`, stored as written (namespace-qualified names included).
    Simple(String),
    /// `[ns|attr op "value"]`
    Attribute {
        namespace_prefix: Option<String>,
        name: String,
        /// `None` for a bare existence test `[attr]`.
        operator: Option<(AttributeOperator, String)>,
    },
    Combinator(Combinator),
    /// `:lang(fr)`-style functional pseudo; the name keeps its leading
    /// `:` or `::` as parsed, so `::cue(v)` round-trips intact.
    FunctionalPseudo {
        name: String,
        expression: Option<Expression>,
    },
    /// `:not(...)` holding one or more nested selectors (CSS 3.0).
    Negation(Vec<Selector>),
}

impl SelectorMember {
    /// Build a negation member, rejecting an empty selector list.
    pub fn negation(selectors: Vec<Selector>) -> Result<Self, AstError> {
        if selectors.is_empty() {
            return Err(AstError::EmptyNegation);
        }
        Ok(SelectorMember::Negation(selectors))
    }
}

/// One comma-alternative of a style rule's selector list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    members: Vec<SelectorMember>,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: a selector with a single simple member.
    pub fn simple(text: impl Into<String>) -> Self {
        let mut sel = Self::new();
        sel.add_member(SelectorMember::Simple(text.into()));
        sel
    }

    pub fn add_member(&mut self, member: SelectorMember) -> &mut Self {
        self.members.push(member);
        self
    }

    pub fn remove_member(&mut self, index: usize) -> Result<SelectorMember, AstError> {
        if index >= self.members.len() {
            return Err(AstError::IndexOutOfBounds {
                index,
                len: self.members.len(),
            });
        }
        Ok(self.members.remove(index))
    }

    pub fn members(&self) -> &[SelectorMember] {
        &self.members
    }

    pub fn all_members(&self) -> Vec<SelectorMember> {
        self.members.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
