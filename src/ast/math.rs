//! `calc()` math expressions.
//!
//! A math expression keeps the two-level precedence structure of `calc`:
//! a sum of products joined by `+`/`-`, where each product is a sequence of
//! units joined by `*`/`/`. The structure is preserved exactly so that
//! re-rendering reproduces operator placement, rather than flattening into
//! a single token list.

use super::expression::CssUnit;

/// Operator between products at the sum level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MathSumOperator {
    Plus,
    Minus,
}

impl MathSumOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            MathSumOperator::Plus => "+",
            MathSumOperator::Minus => "-",
        }
    }
}

/// Operator between units at the product level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MathProductOperator {
    Multiply,
    Divide,
}

impl MathProductOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            MathProductOperator::Multiply => "*",
            MathProductOperator::Divide => "/",
        }
    }
}

/// The leaf level of a product: a plain value with an optional unit, or a
/// parenthesized nested product.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MathUnit {
    Value {
        text: String,
        unit: Option<CssUnit>,
    },
    Nested(Box<MathProduct>),
}

impl MathUnit {
    pub fn value(text: impl Into<String>, unit: Option<CssUnit>) -> Self {
        MathUnit::Value {
            text: text.into(),
            unit,
        }
    }

    pub fn nested(product: MathProduct) -> Self {
        MathUnit::Nested(Box::new(product))
    }
}

/// A product: units interleaved with `*`/`/` operators.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MathProduct {
    units: Vec<MathUnit>,
    operators: Vec<MathProductOperator>,
}

impl MathProduct {
    pub fn new(unit: MathUnit) -> Self {
        Self {
            units: vec![unit],
            operators: Vec::new(),
        }
    }

    pub fn push(&mut self, op: MathProductOperator, unit: MathUnit) -> &mut Self {
        self.operators.push(op);
        self.units.push(unit);
        self
    }

    pub fn units(&self) -> &[MathUnit] {
        &self.units
    }

    pub fn operators(&self) -> &[MathProductOperator] {
        &self.operators
    }
}

/// A full `calc()` expression: products interleaved with `+`/`-` operators.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MathExpression {
    products: Vec<MathProduct>,
    operators: Vec<MathSumOperator>,
}

impl MathExpression {
    pub fn new(first: MathProduct) -> Self {
        Self {
            products: vec![first],
            operators: Vec::new(),
        }
    }

    pub fn push(&mut self, op: MathSumOperator, product: MathProduct) -> &mut Self {
        self.operators.push(op);
        self.products.push(product);
        self
    }

    pub fn products(&self) -> &[MathProduct] {
        &self.products
    }

    pub fn operators(&self) -> &[MathSumOperator] {
        &self.operators
    }
}
