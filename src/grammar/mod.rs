//! Tokenizer and versioned grammars.
//!
//! This layer turns a character stream into a generic parse tree of
//! [`ParseNode`]s. Two grammar versions exist — [`CssVersion::Css21`] and
//! [`CssVersion::Css30`] — sharing one token model but differing in the
//! productions they accept.
//!
//! Node types are version-dependent: the same logical construct carries a
//! different raw tag under each grammar, so raw tags must never be compared
//! across versions. [`Css21Tag`] and [`Css30Tag`] are independent enums;
//! all callers resolve them to the unified [`NodeKind`] taxonomy through
//! [`NodeTag::kind`], and the grammar obtains tags through
//! [`NodeTag::for_kind`] — which returns `None` when a construct simply
//! does not exist in the selected version.

pub mod rules;
pub mod tokens;

pub use rules::{parse_declaration_list_tree, parse_stylesheet_tree};

use std::fmt;

use crate::ast::SourceLocation;

/// The grammar version governing which productions are accepted.
///
/// Ordered: `Css21 < Css30`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CssVersion {
    Css21,
    Css30,
}

impl fmt::Display for CssVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssVersion::Css21 => write!(f, "CSS 2.1"),
            CssVersion::Css30 => write!(f, "CSS 3.0"),
        }
    }
}

/// The unified logical node taxonomy, shared by both grammars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Charset,
    Import,
    Namespace,
    StyleRule,
    SelectorList,
    Selector,
    SimpleMember,
    Attribute,
    Combinator,
    FunctionalPseudo,
    Negation,
    DeclarationList,
    Declaration,
    Important,
    Expression,
    Term,
    Function,
    Uri,
    Operator,
    MathSum,
    MathProduct,
    MathUnit,
    MediaRule,
    MediaQuery,
    MediaModifier,
    MediaExpression,
    PageRule,
    FontFaceRule,
    KeyframesRule,
    KeyframesSelector,
    SupportsRule,
    SupportsNegation,
    SupportsNested,
    SupportsOperator,
    SupportsDeclaration,
    ViewportRule,
    UnknownRule,
}

/// Node tags of the CSS 2.1 grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Css21Tag {
    Root,
    Charset,
    Import,
    StyleRule,
    SelectorList,
    Selector,
    SimpleMember,
    Attribute,
    Combinator,
    FunctionalPseudo,
    DeclarationList,
    Declaration,
    Important,
    Expression,
    Term,
    Function,
    Uri,
    Operator,
    MediaRule,
    MediaQuery,
    PageRule,
    UnknownRule,
}

impl Css21Tag {
    pub fn kind(self) -> NodeKind {
        match self {
            Css21Tag::Root => NodeKind::Root,
            Css21Tag::Charset => NodeKind::Charset,
            Css21Tag::Import => NodeKind::Import,
            Css21Tag::StyleRule => NodeKind::StyleRule,
            Css21Tag::SelectorList => NodeKind::SelectorList,
            Css21Tag::Selector => NodeKind::Selector,
            Css21Tag::SimpleMember => NodeKind::SimpleMember,
            Css21Tag::Attribute => NodeKind::Attribute,
            Css21Tag::Combinator => NodeKind::Combinator,
            Css21Tag::FunctionalPseudo => NodeKind::FunctionalPseudo,
            Css21Tag::DeclarationList => NodeKind::DeclarationList,
            Css21Tag::Declaration => NodeKind::Declaration,
            Css21Tag::Important => NodeKind::Important,
            Css21Tag::Expression => NodeKind::Expression,
            Css21Tag::Term => NodeKind::Term,
            Css21Tag::Function => NodeKind::Function,
            Css21Tag::Uri => NodeKind::Uri,
            Css21Tag::Operator => NodeKind::Operator,
            Css21Tag::MediaRule => NodeKind::MediaRule,
            Css21Tag::MediaQuery => NodeKind::MediaQuery,
            Css21Tag::PageRule => NodeKind::PageRule,
            Css21Tag::UnknownRule => NodeKind::UnknownRule,
        }
    }

    fn for_kind(kind: NodeKind) -> Option<Css21Tag> {
        match kind {
            NodeKind::Root => Some(Css21Tag::Root),
            NodeKind::Charset => Some(Css21Tag::Charset),
            NodeKind::Import => Some(Css21Tag::Import),
            NodeKind::StyleRule => Some(Css21Tag::StyleRule),
            NodeKind::SelectorList => Some(Css21Tag::SelectorList),
            NodeKind::Selector => Some(Css21Tag::Selector),
            NodeKind::SimpleMember => Some(Css21Tag::SimpleMember),
            NodeKind::Attribute => Some(Css21Tag::Attribute),
            NodeKind::Combinator => Some(Css21Tag::Combinator),
            NodeKind::FunctionalPseudo => Some(Css21Tag::FunctionalPseudo),
            NodeKind::DeclarationList => Some(Css21Tag::DeclarationList),
            NodeKind::Declaration => Some(Css21Tag::Declaration),
            NodeKind::Important => Some(Css21Tag::Important),
            NodeKind::Expression => Some(Css21Tag::Expression),
            NodeKind::Term => Some(Css21Tag::Term),
            NodeKind::Function => Some(Css21Tag::Function),
            NodeKind::Uri => Some(Css21Tag::Uri),
            NodeKind::Operator => Some(Css21Tag::Operator),
            NodeKind::MediaRule => Some(Css21Tag::MediaRule),
            NodeKind::MediaQuery => Some(Css21Tag::MediaQuery),
            NodeKind::PageRule => Some(Css21Tag::PageRule),
            NodeKind::UnknownRule => Some(Css21Tag::UnknownRule),
            // Everything below only exists in CSS 3.0.
            NodeKind::Namespace
            | NodeKind::Negation
            | NodeKind::MathSum
            | NodeKind::MathProduct
            | NodeKind::MathUnit
            | NodeKind::MediaModifier
            | NodeKind::MediaExpression
            | NodeKind::FontFaceRule
            | NodeKind::KeyframesRule
            | NodeKind::KeyframesSelector
            | NodeKind::SupportsRule
            | NodeKind::SupportsNegation
            | NodeKind::SupportsNested
            | NodeKind::SupportsOperator
            | NodeKind::SupportsDeclaration
            | NodeKind::ViewportRule => None,
        }
    }
}

/// Node tags of the CSS 3.0 grammar.
///
/// Declared in a different order than [`Css21Tag`] on purpose: the raw
/// discriminants collide across versions, so nothing meaningful can be
/// learned by comparing them numerically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Css30Tag {
    Root,
    Charset,
    Import,
    Namespace,
    MediaRule,
    MediaQuery,
    MediaModifier,
    MediaExpression,
    PageRule,
    FontFaceRule,
    KeyframesRule,
    KeyframesSelector,
    SupportsRule,
    SupportsNegation,
    SupportsNested,
    SupportsOperator,
    SupportsDeclaration,
    ViewportRule,
    UnknownRule,
    StyleRule,
    SelectorList,
    Selector,
    SimpleMember,
    Attribute,
    Combinator,
    FunctionalPseudo,
    Negation,
    DeclarationList,
    Declaration,
    Important,
    Expression,
    Term,
    Function,
    Uri,
    Operator,
    MathSum,
    MathProduct,
    MathUnit,
}

impl Css30Tag {
    pub fn kind(self) -> NodeKind {
        match self {
            Css30Tag::Root => NodeKind::Root,
            Css30Tag::Charset => NodeKind::Charset,
            Css30Tag::Import => NodeKind::Import,
            Css30Tag::Namespace => NodeKind::Namespace,
            Css30Tag::MediaRule => NodeKind::MediaRule,
            Css30Tag::MediaQuery => NodeKind::MediaQuery,
            Css30Tag::MediaModifier => NodeKind::MediaModifier,
            Css30Tag::MediaExpression => NodeKind::MediaExpression,
            Css30Tag::PageRule => NodeKind::PageRule,
            Css30Tag::FontFaceRule => NodeKind::FontFaceRule,
            Css30Tag::KeyframesRule => NodeKind::KeyframesRule,
            Css30Tag::KeyframesSelector => NodeKind::KeyframesSelector,
            Css30Tag::SupportsRule => NodeKind::SupportsRule,
            Css30Tag::SupportsNegation => NodeKind::SupportsNegation,
            Css30Tag::SupportsNested => NodeKind::SupportsNested,
            Css30Tag::SupportsOperator => NodeKind::SupportsOperator,
            Css30Tag::SupportsDeclaration => NodeKind::SupportsDeclaration,
            Css30Tag::ViewportRule => NodeKind::ViewportRule,
            Css30Tag::UnknownRule => NodeKind::UnknownRule,
            Css30Tag::StyleRule => NodeKind::StyleRule,
            Css30Tag::SelectorList => NodeKind::SelectorList,
            Css30Tag::Selector => NodeKind::Selector,
            Css30Tag::SimpleMember => NodeKind::SimpleMember,
            Css30Tag::Attribute => NodeKind::Attribute,
            Css30Tag::Combinator => NodeKind::Combinator,
            Css30Tag::FunctionalPseudo => NodeKind::FunctionalPseudo,
            Css30Tag::Negation => NodeKind::Negation,
            Css30Tag::DeclarationList => NodeKind::DeclarationList,
            Css30Tag::Declaration => NodeKind::Declaration,
            Css30Tag::Important => NodeKind::Important,
            Css30Tag::Expression => NodeKind::Expression,
            Css30Tag::Term => NodeKind::Term,
            Css30Tag::Function => NodeKind::Function,
            Css30Tag::Uri => NodeKind::Uri,
            Css30Tag::Operator => NodeKind::Operator,
            Css30Tag::MathSum => NodeKind::MathSum,
            Css30Tag::MathProduct => NodeKind::MathProduct,
            Css30Tag::MathUnit => NodeKind::MathUnit,
        }
    }

    fn for_kind(kind: NodeKind) -> Option<Css30Tag> {
        Some(match kind {
            NodeKind::Root => Css30Tag::Root,
            NodeKind::Charset => Css30Tag::Charset,
            NodeKind::Import => Css30Tag::Import,
            NodeKind::Namespace => Css30Tag::Namespace,
            NodeKind::MediaRule => Css30Tag::MediaRule,
            NodeKind::MediaQuery => Css30Tag::MediaQuery,
            NodeKind::MediaModifier => Css30Tag::MediaModifier,
            NodeKind::MediaExpression => Css30Tag::MediaExpression,
            NodeKind::PageRule => Css30Tag::PageRule,
            NodeKind::FontFaceRule => Css30Tag::FontFaceRule,
            NodeKind::KeyframesRule => Css30Tag::KeyframesRule,
            NodeKind::KeyframesSelector => Css30Tag::KeyframesSelector,
            NodeKind::SupportsRule => Css30Tag::SupportsRule,
            NodeKind::SupportsNegation => Css30Tag::SupportsNegation,
            NodeKind::SupportsNested => Css30Tag::SupportsNested,
            NodeKind::SupportsOperator => Css30Tag::SupportsOperator,
            NodeKind::SupportsDeclaration => Css30Tag::SupportsDeclaration,
            NodeKind::ViewportRule => Css30Tag::ViewportRule,
            NodeKind::UnknownRule => Css30Tag::UnknownRule,
            NodeKind::StyleRule => Css30Tag::StyleRule,
            NodeKind::SelectorList => Css30Tag::SelectorList,
            NodeKind::Selector => Css30Tag::Selector,
            NodeKind::SimpleMember => Css30Tag::SimpleMember,
            NodeKind::Attribute => Css30Tag::Attribute,
            NodeKind::Combinator => Css30Tag::Combinator,
            NodeKind::FunctionalPseudo => Css30Tag::FunctionalPseudo,
            NodeKind::Negation => Css30Tag::Negation,
            NodeKind::DeclarationList => Css30Tag::DeclarationList,
            NodeKind::Declaration => Css30Tag::Declaration,
            NodeKind::Important => Css30Tag::Important,
            NodeKind::Expression => Css30Tag::Expression,
            NodeKind::Term => Css30Tag::Term,
            NodeKind::Function => Css30Tag::Function,
            NodeKind::Uri => Css30Tag::Uri,
            NodeKind::Operator => Css30Tag::Operator,
            NodeKind::MathSum => Css30Tag::MathSum,
            NodeKind::MathProduct => Css30Tag::MathProduct,
            NodeKind::MathUnit => Css30Tag::MathUnit,
        })
    }
}

/// A version-qualified node tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeTag {
    V21(Css21Tag),
    V30(Css30Tag),
}

impl NodeTag {
    /// Resolve the tag to the unified taxonomy. Total.
    pub fn kind(self) -> NodeKind {
        match self {
            NodeTag::V21(t) => t.kind(),
            NodeTag::V30(t) => t.kind(),
        }
    }

    /// Which grammar version this tag belongs to.
    pub fn version(self) -> CssVersion {
        match self {
            NodeTag::V21(_) => CssVersion::Css21,
            NodeTag::V30(_) => CssVersion::Css30,
        }
    }

    /// The tag for a logical kind under a grammar version, or `None` when
    /// the construct does not exist in that version.
    pub fn for_kind(version: CssVersion, kind: NodeKind) -> Option<NodeTag> {
        match version {
            CssVersion::Css21 => Css21Tag::for_kind(kind).map(NodeTag::V21),
            CssVersion::Css30 => Css30Tag::for_kind(kind).map(NodeTag::V30),
        }
    }
}

/// A generic, weakly-typed parse tree node: a tag, optional literal text,
/// ordered children, and the byte offset where the construct started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseNode {
    pub tag: NodeTag,
    pub text: Option<String>,
    pub children: Vec<ParseNode>,
    pub offset: usize,
}

impl ParseNode {
    pub fn new(tag: NodeTag, offset: usize) -> Self {
        Self {
            tag,
            text: None,
            children: Vec::new(),
            offset,
        }
    }

    pub fn with_text(tag: NodeTag, offset: usize, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: Some(text.into()),
            children: Vec::new(),
            offset,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.tag.kind()
    }

    pub fn push(&mut self, child: ParseNode) {
        self.children.push(child);
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// Maps byte offsets to 1-based line/column pairs.
///
/// Built once per parse from the decoded source; shared between the grammar
/// (error locations) and the builder (node locations).
#[derive(Debug)]
pub struct LineMap<'a> {
    src: &'a str,
    /// Byte offset of the start of each line.
    line_starts: Vec<usize>,
}

impl<'a> LineMap<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            src: source,
            line_starts,
        }
    }

    /// The 1-based line and column of a byte offset. Columns count
    /// characters, not bytes.
    pub fn location(&self, offset: usize) -> SourceLocation {
        let offset = offset.min(self.src.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let column = self.src[self.line_starts[line]..offset].chars().count();
        SourceLocation::new(line as u32 + 1, column as u32 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_resolve_through_kind_lookup() {
        let t21 = NodeTag::for_kind(CssVersion::Css21, NodeKind::Selector).unwrap();
        let t30 = NodeTag::for_kind(CssVersion::Css30, NodeKind::Selector).unwrap();
        assert_eq!(t21.kind(), NodeKind::Selector);
        assert_eq!(t30.kind(), NodeKind::Selector);
        assert_ne!(t21, t30);
    }

    #[test]
    fn css21_rejects_css30_only_constructs() {
        for kind in [
            NodeKind::Namespace,
            NodeKind::Negation,
            NodeKind::MathSum,
            NodeKind::SupportsRule,
            NodeKind::ViewportRule,
            NodeKind::KeyframesRule,
            NodeKind::MediaExpression,
        ] {
            assert!(NodeTag::for_kind(CssVersion::Css21, kind).is_none());
            assert!(NodeTag::for_kind(CssVersion::Css30, kind).is_some());
        }
    }

    #[test]
    fn line_map_is_one_based() {
        let map = LineMap::new("ab\ncd\n");
        assert_eq!(map.location(0), SourceLocation::new(1, 1));
        assert_eq!(map.location(1), SourceLocation::new(1, 2));
        assert_eq!(map.location(3), SourceLocation::new(2, 1));
        assert_eq!(map.location(6), SourceLocation::new(3, 1));
    }

    #[test]
    fn line_map_columns_count_characters() {
        // "é" is two bytes but one column.
        let map = LineMap::new("éa\nbé c");
        assert_eq!(map.location(2), SourceLocation::new(1, 2));
        assert_eq!(map.location(4), SourceLocation::new(2, 1));
        assert_eq!(map.location(8), SourceLocation::new(2, 4));
    }
}
