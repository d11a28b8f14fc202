//! Property value expressions.
//!
//! An [`Expression`] is the right-hand side of a declaration: an ordered
//! sequence of members such as simple terms (`0px`, `"Arial"`, `#aabbcc`),
//! function terms (`counter(x)`), URI terms (`url(img.png)`), math terms
//! (`calc(...)`), and the operator tokens (`/`, `,`, `=`) used inside
//! multi-value shorthands.
//!
//! Simple terms eagerly compute an *optimized* value on construction:
//!
//! - `0<unit>` collapses to `0` for every recognized CSS unit (`0px` → `0`)
//! - six-digit hex colors with doubled pairs shorten (`#aabbcc` → `#abc`)
//!
//! Two simple terms are equal iff their optimized values are equal, so the
//! comparison stays stable across formatting changes.

use std::hash::{Hash, Hasher};

use crate::error::AstError;

use super::math::MathExpression;

/// The CSS units recognized by value optimization and `calc()` parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CssUnit {
    Em,
    Ex,
    Px,
    Rem,
    Vw,
    Vh,
    Vmin,
    Vmax,
    Cm,
    Mm,
    Q,
    In,
    Pt,
    Pc,
    Deg,
    Rad,
    Grad,
    Turn,
    S,
    Ms,
    Hz,
    Khz,
    Dpi,
    Dpcm,
    Dppx,
    Fr,
    Percent,
}

impl CssUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            CssUnit::Em => "em",
            CssUnit::Ex => "ex",
            CssUnit::Px => "px",
            CssUnit::Rem => "rem",
            CssUnit::Vw => "vw",
            CssUnit::Vh => "vh",
            CssUnit::Vmin => "vmin",
            CssUnit::Vmax => "vmax",
            CssUnit::Cm => "cm",
            CssUnit::Mm => "mm",
            CssUnit::Q => "q",
            CssUnit::In => "in",
            CssUnit::Pt => "pt",
            CssUnit::Pc => "pc",
            CssUnit::Deg => "deg",
            CssUnit::Rad => "rad",
            CssUnit::Grad => "grad",
            CssUnit::Turn => "turn",
            CssUnit::S => "s",
            CssUnit::Ms => "ms",
            CssUnit::Hz => "hz",
            CssUnit::Khz => "khz",
            CssUnit::Dpi => "dpi",
            CssUnit::Dpcm => "dpcm",
            CssUnit::Dppx => "dppx",
            CssUnit::Fr => "fr",
            CssUnit::Percent => "%",
        }
    }

    /// Look up a unit from its textual suffix, case-insensitively.
    ///
    /// Longer suffixes are matched first by the callers that strip units from
    /// dimension tokens (`ms` before `m`-anything, `rem` before `em`).
    pub fn from_suffix(s: &str) -> Option<CssUnit> {
        match s.to_ascii_lowercase().as_str() {
            "em" => Some(CssUnit::Em),
            "ex" => Some(CssUnit::Ex),
            "px" => Some(CssUnit::Px),
            "rem" => Some(CssUnit::Rem),
            "vw" => Some(CssUnit::Vw),
            "vh" => Some(CssUnit::Vh),
            "vmin" => Some(CssUnit::Vmin),
            "vmax" => Some(CssUnit::Vmax),
            "cm" => Some(CssUnit::Cm),
            "mm" => Some(CssUnit::Mm),
            "q" => Some(CssUnit::Q),
            "in" => Some(CssUnit::In),
            "pt" => Some(CssUnit::Pt),
            "pc" => Some(CssUnit::Pc),
            "deg" => Some(CssUnit::Deg),
            "rad" => Some(CssUnit::Rad),
            "grad" => Some(CssUnit::Grad),
            "turn" => Some(CssUnit::Turn),
            "s" => Some(CssUnit::S),
            "ms" => Some(CssUnit::Ms),
            "hz" => Some(CssUnit::Hz),
            "khz" => Some(CssUnit::Khz),
            "dpi" => Some(CssUnit::Dpi),
            "dpcm" => Some(CssUnit::Dpcm),
            "dppx" => Some(CssUnit::Dppx),
            "fr" => Some(CssUnit::Fr),
            "%" => Some(CssUnit::Percent),
            _ => None,
        }
    }
}

/// A raw value token plus its eagerly computed optimized form.
#[derive(Clone, Debug, Eq)]
pub struct SimpleTerm {
    value: String,
    optimized: String,
}

impl SimpleTerm {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let optimized = optimize_value(&value);
        Self { value, optimized }
    }

    /// The value exactly as written.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The normalized value (collapsed zero units, shortened hex colors).
    pub fn optimized_value(&self) -> &str {
        &self.optimized
    }
}

/// Equality compares optimized values only, so `0px` == `0em`.
impl PartialEq for SimpleTerm {
    fn eq(&self, other: &Self) -> bool {
        self.optimized == other.optimized
    }
}

impl Hash for SimpleTerm {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.optimized.hash(state);
    }
}

/// Compute the optimized rendering of a simple term value.
///
/// Idempotent: applying it to an already-optimized value is a no-op.
pub fn optimize_value(value: &str) -> String {
    if let Some(zero) = collapse_zero_unit(value) {
        return zero;
    }
    if let Some(hex) = shorten_hex_color(value) {
        return hex;
    }
    value.to_string()
}

/// `0px`, `0.0em`, `0%` and friends all collapse to plain `0`.
fn collapse_zero_unit(value: &str) -> Option<String> {
    let lower = value.to_ascii_lowercase();
    let suffix_start = lower
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.' || *c == '+' || *c == '-'))
        .map(|(i, _)| i)?;
    if suffix_start == 0 {
        return None;
    }
    let (number, suffix) = lower.split_at(suffix_start);
    CssUnit::from_suffix(suffix)?;
    let parsed: f64 = number.parse().ok()?;
    if parsed == 0.0 {
        Some("0".to_string())
    } else {
        None
    }
}

/// `#aabbcc` shortens to `#abc` when every byte pair is doubled.
fn shorten_hex_color(value: &str) -> Option<String> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let lower = hex.to_ascii_lowercase();
    let b = lower.as_bytes();
    if b[0] == b[1] && b[2] == b[3] && b[4] == b[5] {
        Some(format!(
            "#{}{}{}",
            b[0] as char, b[2] as char, b[4] as char
        ))
    } else {
        None
    }
}

/// A function call term: `name(` optional argument expression `)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionTerm {
    name: String,
    args: Option<Expression>,
}

impl FunctionTerm {
    /// A zero-argument function, rendered as `name()`.
    pub fn new(name: impl Into<String>) -> Result<Self, AstError> {
        Self::build(name.into(), None)
    }

    pub fn with_args(name: impl Into<String>, args: Expression) -> Result<Self, AstError> {
        Self::build(name.into(), Some(args))
    }

    fn build(name: String, args: Option<Expression>) -> Result<Self, AstError> {
        if name.is_empty() {
            return Err(AstError::EmptyFunctionName);
        }
        Ok(Self { name, args })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> Option<&Expression> {
        self.args.as_ref()
    }
}

/// A `url(...)` term. The stored value carries no quotes; quoting is a
/// writer-settings decision.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UriTerm {
    uri: String,
}

impl UriTerm {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// Operator tokens appearing between terms in shorthand expressions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpressionOperator {
    /// `/` as in `font: 12px/1.5 serif`
    Slash,
    /// `,` between alternatives (`font-family: a, b`)
    Comma,
    /// `=` inside legacy filter-style values
    Equals,
}

impl ExpressionOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            ExpressionOperator::Slash => "/",
            ExpressionOperator::Comma => ",",
            ExpressionOperator::Equals => "=",
        }
    }
}

/// One member of a value expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExpressionMember {
    Term(SimpleTerm),
    Function(FunctionTerm),
    Uri(UriTerm),
    Math(MathExpression),
    Operator(ExpressionOperator),
}

/// An ordered sequence of expression members.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Expression {
    members: Vec<ExpressionMember>,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: a one-member expression holding a simple term.
    pub fn simple(value: impl Into<String>) -> Self {
        let mut expr = Self::new();
        expr.add_member(ExpressionMember::Term(SimpleTerm::new(value)));
        expr
    }

    pub fn add_member(&mut self, member: ExpressionMember) -> &mut Self {
        self.members.push(member);
        self
    }

    pub fn add_term(&mut self, value: impl Into<String>) -> &mut Self {
        self.add_member(ExpressionMember::Term(SimpleTerm::new(value)))
    }

    pub fn remove_member(&mut self, index: usize) -> Result<ExpressionMember, AstError> {
        if index >= self.members.len() {
            return Err(AstError::IndexOutOfBounds {
                index,
                len: self.members.len(),
            });
        }
        Ok(self.members.remove(index))
    }

    pub fn members(&self) -> &[ExpressionMember] {
        &self.members
    }

    /// Defensive snapshot of all members.
    pub fn all_members(&self) -> Vec<ExpressionMember> {
        self.members.clone()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_units_collapse() {
        assert_eq!(optimize_value("0px"), "0");
        assert_eq!(optimize_value("0.0em"), "0");
        assert_eq!(optimize_value("0%"), "0");
        assert_eq!(optimize_value("0"), "0");
        assert_eq!(optimize_value("10px"), "10px");
        // Unknown unit stays untouched
        assert_eq!(optimize_value("0foo"), "0foo");
    }

    #[test]
    fn hex_colors_shorten() {
        assert_eq!(optimize_value("#aabbcc"), "#abc");
        assert_eq!(optimize_value("#AABBCC"), "#abc");
        assert_eq!(optimize_value("#aabbcd"), "#aabbcd");
        assert_eq!(optimize_value("#abc"), "#abc");
    }

    #[test]
    fn optimization_is_idempotent() {
        for v in ["0px", "#aabbcc", "12pt", "red"] {
            let once = optimize_value(v);
            assert_eq!(optimize_value(&once), once);
        }
    }

    #[test]
    fn term_equality_ignores_formatting() {
        assert_eq!(SimpleTerm::new("0px"), SimpleTerm::new("0em"));
        assert_eq!(SimpleTerm::new("#aabbcc"), SimpleTerm::new("#abc"));
        assert_ne!(SimpleTerm::new("1px"), SimpleTerm::new("1em"));
    }
}
