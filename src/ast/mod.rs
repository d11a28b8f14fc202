//! Typed CSS domain model.
//!
//! This module contains the object graph produced by parsing (or assembled
//! programmatically by callers):
//!
//! - [`Stylesheet`]: the root entity, holding imports, namespaces, and rules
//! - Rule types: [`StyleRule`], [`MediaRule`], [`PageRule`], [`FontFaceRule`],
//!   [`KeyframesRule`], [`SupportsRule`], [`ViewportRule`], [`UnknownRule`]
//! - Selector types: [`Selector`], [`SelectorMember`], [`Combinator`]
//! - Value types: [`Expression`], [`SimpleTerm`], [`MathExpression`]
//! - Declarations: [`Declaration`] and the shared [`DeclarationContainer`]
//!
//! Every entity is a plain value type with structural equality. Equality
//! ignores source locations and, for simple terms, compares the optimized
//! value, so `0px` and `0em` are equal after construction.

pub mod color;
pub mod declaration;
pub mod expression;
pub mod keyframes;
pub mod math;
pub mod media;
pub mod page;
pub mod selector;
pub mod style_rule;
pub mod stylesheet;
pub mod supports;

pub use color::{Hsl, Hsla, Rgb, Rgba};
pub use declaration::{Declaration, DeclarationContainer};
pub use expression::{CssUnit, Expression, ExpressionMember, ExpressionOperator, FunctionTerm, SimpleTerm, UriTerm};
pub use keyframes::{KeyframesBlock, KeyframesRule};
pub use math::{MathExpression, MathProduct, MathProductOperator, MathSumOperator, MathUnit};
pub use media::{MediaExpression, MediaModifier, MediaQuery, MediaRule};
pub use page::{FontFaceRule, PageRule, UnknownRule, ViewportRule};
pub use selector::{AttributeOperator, Combinator, Selector, SelectorMember};
pub use style_rule::StyleRule;
pub use stylesheet::{ImportRule, NamespaceRule, Stylesheet, TopLevelRule};
pub use supports::{SupportsConditionMember, SupportsOperator, SupportsRule};

use std::fmt;

/// Position of a construct in the original source text, 1-based.
///
/// Assigned once by the AST builder right after construction; never part of
/// structural equality, so a parsed stylesheet compares equal to an
/// identically shaped one assembled programmatically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
