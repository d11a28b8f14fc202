//! Rendering the object model back to CSS text.
//!
//! Rendering is pure and recursive: every AST node implements [`WriteCss`]
//! and returns a `String`, so writing never mutates the model and the same
//! tree can be rendered under different settings. Constructs with a minimum
//! CSS version check `settings.version` first and fail with
//! [`WriterError::VersionMismatch`] when the output target is too old —
//! a CSS 2.1 render of a tree holding `~` or `@supports` is an error, not
//! silent misoutput.

use crate::ast::{
    Combinator, Declaration, DeclarationContainer, Expression, ExpressionMember,
    ExpressionOperator, FontFaceRule, FunctionTerm, Hsl, Hsla, ImportRule, KeyframesBlock,
    KeyframesRule, MathExpression, MathProduct, MathUnit, MediaExpression, MediaModifier,
    MediaQuery, MediaRule, NamespaceRule, PageRule, Rgb, Rgba, Selector, SelectorMember,
    SimpleTerm, StyleRule, Stylesheet, SupportsConditionMember, SupportsRule, TopLevelRule,
    UnknownRule, UriTerm, ViewportRule,
};
use crate::error::WriterError;
use crate::grammar::CssVersion;

/// Output configuration for [`WriteCss`].
#[derive(Clone, Debug)]
pub struct WriterSettings {
    /// The CSS version the output targets; newer constructs fail to render.
    pub version: CssVersion,
    /// Emit compact output: no newlines, no indentation, optimized term
    /// values, no spaces after commas.
    pub optimized_output: bool,
    /// Skip rules that render to nothing (e.g. an empty style rule).
    pub remove_unnecessary_code: bool,
    /// Wrap `url(...)` contents in double quotes.
    pub quote_urls: bool,
    pub write_namespace_rules: bool,
    pub write_media_rules: bool,
    pub write_supports_rules: bool,
    pub write_viewport_rules: bool,
    pub write_unknown_rules: bool,
    /// One level of indentation in pretty output.
    pub indent: String,
}

impl Default for WriterSettings {
    fn default() -> Self {
        Self {
            version: CssVersion::Css30,
            optimized_output: false,
            remove_unnecessary_code: false,
            quote_urls: false,
            write_namespace_rules: true,
            write_media_rules: true,
            write_supports_rules: true,
            write_viewport_rules: true,
            write_unknown_rules: true,
            indent: "  ".to_string(),
        }
    }
}

impl WriterSettings {
    pub fn with_version(mut self, version: CssVersion) -> Self {
        self.version = version;
        self
    }

    pub fn with_optimized_output(mut self, optimized: bool) -> Self {
        self.optimized_output = optimized;
        self
    }

    pub fn with_remove_unnecessary_code(mut self, remove: bool) -> Self {
        self.remove_unnecessary_code = remove;
        self
    }

    pub fn with_quote_urls(mut self, quote: bool) -> Self {
        self.quote_urls = quote;
        self
    }

    pub fn with_write_namespace_rules(mut self, write: bool) -> Self {
        self.write_namespace_rules = write;
        self
    }

    pub fn with_write_media_rules(mut self, write: bool) -> Self {
        self.write_media_rules = write;
        self
    }

    pub fn with_write_supports_rules(mut self, write: bool) -> Self {
        self.write_supports_rules = write;
        self
    }

    pub fn with_write_viewport_rules(mut self, write: bool) -> Self {
        self.write_viewport_rules = write;
        self
    }

    pub fn with_write_unknown_rules(mut self, write: bool) -> Self {
        self.write_unknown_rules = write;
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    fn indent_for(&self, level: usize) -> String {
        if self.optimized_output {
            String::new()
        } else {
            self.indent.repeat(level)
        }
    }

    fn newline(&self) -> &'static str {
        if self.optimized_output {
            ""
        } else {
            "\n"
        }
    }
}

/// Render an AST node as CSS under the given settings.
pub trait WriteCss {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError>;
}

fn require(
    settings: &WriterSettings,
    construct: &'static str,
    required: CssVersion,
) -> Result<(), WriterError> {
    if settings.version >= required {
        Ok(())
    } else {
        Err(WriterError::VersionMismatch {
            construct,
            required,
            requested: settings.version,
        })
    }
}

fn render_url(uri: &str, settings: &WriterSettings) -> String {
    if settings.quote_urls {
        format!("url(\"{uri}\")")
    } else {
        format!("url({uri})")
    }
}

impl WriteCss for SimpleTerm {
    fn write_css(&self, settings: &WriterSettings, _level: usize) -> Result<String, WriterError> {
        Ok(if settings.optimized_output {
            self.optimized_value().to_string()
        } else {
            self.value().to_string()
        })
    }
}

impl WriteCss for UriTerm {
    fn write_css(&self, settings: &WriterSettings, _level: usize) -> Result<String, WriterError> {
        Ok(render_url(self.uri(), settings))
    }
}

impl WriteCss for Rgb {
    fn write_css(&self, _settings: &WriterSettings, _level: usize) -> Result<String, WriterError> {
        Ok(self.as_css_string())
    }
}

impl WriteCss for Rgba {
    fn write_css(&self, settings: &WriterSettings, _level: usize) -> Result<String, WriterError> {
        require(settings, "rgba()", CssVersion::Css30)?;
        Ok(self.as_css_string())
    }
}

impl WriteCss for Hsl {
    fn write_css(&self, settings: &WriterSettings, _level: usize) -> Result<String, WriterError> {
        require(settings, "hsl()", CssVersion::Css30)?;
        Ok(self.as_css_string())
    }
}

impl WriteCss for Hsla {
    fn write_css(&self, settings: &WriterSettings, _level: usize) -> Result<String, WriterError> {
        require(settings, "hsla()", CssVersion::Css30)?;
        Ok(self.as_css_string())
    }
}

impl WriteCss for FunctionTerm {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        let args = match self.args() {
            Some(args) => args.write_css(settings, level)?,
            None => String::new(),
        };
        Ok(format!("{}({args})", self.name()))
    }
}

impl WriteCss for MathUnit {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        match self {
            MathUnit::Value { text, unit } => {
                let unit = unit.map(|u| u.as_str()).unwrap_or("");
                Ok(format!("{text}{unit}"))
            }
            MathUnit::Nested(product) => {
                Ok(format!("({})", product.write_css(settings, level)?))
            }
        }
    }
}

impl WriteCss for MathProduct {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        let mut out = String::new();
        for (i, unit) in self.units().iter().enumerate() {
            if i > 0 {
                let op = self.operators()[i - 1].as_str();
                if settings.optimized_output {
                    out.push_str(op);
                } else {
                    out.push_str(&format!(" {op} "));
                }
            }
            out.push_str(&unit.write_css(settings, level)?);
        }
        Ok(out)
    }
}

impl WriteCss for MathExpression {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        require(settings, "calc()", CssVersion::Css30)?;
        let mut out = String::from("calc(");
        for (i, product) in self.products().iter().enumerate() {
            if i > 0 {
                // `+` and `-` need surrounding whitespace to stay valid calc
                // syntax, so optimization never strips it.
                out.push_str(&format!(" {} ", self.operators()[i - 1].as_str()));
            }
            out.push_str(&product.write_css(settings, level)?);
        }
        out.push(')');
        Ok(out)
    }
}

impl WriteCss for Expression {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        let mut out = String::new();
        let mut after_term = false;
        for member in self.members() {
            match member {
                ExpressionMember::Operator(op) => {
                    out.push_str(op.as_str());
                    if *op == ExpressionOperator::Comma && !settings.optimized_output {
                        out.push(' ');
                    }
                    after_term = false;
                }
                other => {
                    if after_term {
                        out.push(' ');
                    }
                    let rendered = match other {
                        ExpressionMember::Term(t) => t.write_css(settings, level)?,
                        ExpressionMember::Function(f) => f.write_css(settings, level)?,
                        ExpressionMember::Uri(u) => u.write_css(settings, level)?,
                        ExpressionMember::Math(m) => m.write_css(settings, level)?,
                        ExpressionMember::Operator(_) => unreachable!("matched above"),
                    };
                    out.push_str(&rendered);
                    after_term = true;
                }
            }
        }
        Ok(out)
    }
}

impl WriteCss for Declaration {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        let value = self.expression().write_css(settings, level)?;
        let colon = if settings.optimized_output { ":" } else { ": " };
        let important = match (self.is_important(), settings.optimized_output) {
            (false, _) => "",
            (true, true) => "!important",
            (true, false) => " !important",
        };
        Ok(format!("{}{colon}{value}{important}", self.property()))
    }
}

/// Render a brace-delimited declaration block, opening brace included.
fn write_declaration_block(
    container: &DeclarationContainer,
    settings: &WriterSettings,
    level: usize,
) -> Result<String, WriterError> {
    if settings.optimized_output {
        let rendered: Vec<String> = container
            .declarations()
            .iter()
            .map(|d| d.write_css(settings, level))
            .collect::<Result<_, _>>()?;
        return Ok(format!("{{{}}}", rendered.join(";")));
    }
    let mut out = String::from("{\n");
    for declaration in container.declarations() {
        out.push_str(&settings.indent_for(level + 1));
        out.push_str(&declaration.write_css(settings, level + 1)?);
        out.push_str(";\n");
    }
    out.push_str(&settings.indent_for(level));
    out.push('}');
    Ok(out)
}

impl WriteCss for SelectorMember {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        match self {
            SelectorMember::Simple(text) => Ok(text.clone()),
            SelectorMember::Combinator(c) => {
                if *c == Combinator::Tilde {
                    require(settings, "the general-sibling combinator `~`", CssVersion::Css30)?;
                }
                Ok(match (c, settings.optimized_output) {
                    (Combinator::Blank, _) => " ".to_string(),
                    (c, true) => c.as_str().to_string(),
                    (c, false) => format!(" {} ", c.as_str()),
                })
            }
            SelectorMember::Attribute {
                namespace_prefix,
                name,
                operator,
            } => {
                let prefix = namespace_prefix
                    .as_deref()
                    .map(|p| format!("{p}|"))
                    .unwrap_or_default();
                match operator {
                    Some((op, value)) => {
                        if op.minimum_version() > CssVersion::Css21 {
                            require(settings, "a CSS 3.0 attribute operator", CssVersion::Css30)?;
                        }
                        Ok(format!("[{prefix}{name}{}{value}]", op.as_str()))
                    }
                    None => Ok(format!("[{prefix}{name}]")),
                }
            }
            SelectorMember::FunctionalPseudo { name, expression } => {
                let args = match expression {
                    Some(expression) => expression.write_css(settings, level)?,
                    None => String::new(),
                };
                // The name carries its own `:` / `::` prefix.
                Ok(format!("{name}({args})"))
            }
            SelectorMember::Negation(selectors) => {
                require(settings, ":not()", CssVersion::Css30)?;
                let separator = if settings.optimized_output { "," } else { ", " };
                let rendered: Vec<String> = selectors
                    .iter()
                    .map(|s| s.write_css(settings, level))
                    .collect::<Result<_, _>>()?;
                Ok(format!(":not({})", rendered.join(separator)))
            }
        }
    }
}

impl WriteCss for Selector {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        let mut out = String::new();
        for member in self.members() {
            out.push_str(&member.write_css(settings, level)?);
        }
        Ok(out)
    }
}

impl WriteCss for StyleRule {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        if settings.remove_unnecessary_code && self.declarations().is_empty() {
            return Ok(String::new());
        }
        let separator = if settings.optimized_output { "," } else { ", " };
        let selectors: Vec<String> = self
            .selectors()
            .iter()
            .map(|s| s.write_css(settings, level))
            .collect::<Result<_, _>>()?;
        let space = if settings.optimized_output { "" } else { " " };
        Ok(format!(
            "{}{space}{}",
            selectors.join(separator),
            write_declaration_block(self.declarations(), settings, level)?
        ))
    }
}

impl WriteCss for MediaExpression {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        require(settings, "a media feature expression", CssVersion::Css30)?;
        match &self.value {
            Some(value) => {
                let colon = if settings.optimized_output { ":" } else { ": " };
                Ok(format!(
                    "({}{colon}{})",
                    self.feature,
                    value.write_css(settings, level)?
                ))
            }
            None => Ok(format!("({})", self.feature)),
        }
    }
}

impl WriteCss for MediaQuery {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        if self.modifier() != MediaModifier::None {
            require(settings, "a media query modifier", CssVersion::Css30)?;
        }
        let mut parts: Vec<String> = Vec::new();
        if self.modifier() != MediaModifier::None {
            parts.push(self.modifier().as_str().to_string());
        }
        if let Some(medium) = self.medium_name() {
            parts.push(medium.to_string());
        }
        let mut out = parts.join(" ");
        for expression in self.expressions() {
            if !out.is_empty() {
                out.push_str(" and ");
            }
            out.push_str(&expression.write_css(settings, level)?);
        }
        Ok(out)
    }
}

impl WriteCss for MediaRule {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        let separator = if settings.optimized_output { "," } else { ", " };
        let queries: Vec<String> = self
            .queries()
            .iter()
            .map(|q| q.write_css(settings, level))
            .collect::<Result<_, _>>()?;
        let mut out = format!("@media {}", queries.join(separator));
        out.push_str(&render_rule_body(self.rules(), settings, level)?);
        Ok(out)
    }
}

/// The `{ nested rules }` body shared by `@media` and `@supports`.
fn render_rule_body(
    rules: &[TopLevelRule],
    settings: &WriterSettings,
    level: usize,
) -> Result<String, WriterError> {
    let space = if settings.optimized_output { "" } else { " " };
    let mut out = format!("{space}{{{}", settings.newline());
    for rule in rules {
        let rendered = rule.write_css(settings, level + 1)?;
        if rendered.is_empty() {
            continue;
        }
        out.push_str(&settings.indent_for(level + 1));
        out.push_str(&rendered);
        out.push_str(settings.newline());
    }
    out.push_str(&settings.indent_for(level));
    out.push('}');
    Ok(out)
}

impl WriteCss for PageRule {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        let pseudo = self.pseudo().unwrap_or("");
        let space = if settings.optimized_output { "" } else { " " };
        Ok(format!(
            "@page{}{pseudo}{space}{}",
            if pseudo.is_empty() { "" } else { " " },
            write_declaration_block(self.declarations(), settings, level)?
        ))
    }
}

impl WriteCss for FontFaceRule {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        require(settings, "@font-face", CssVersion::Css30)?;
        let space = if settings.optimized_output { "" } else { " " };
        Ok(format!(
            "@font-face{space}{}",
            write_declaration_block(self.declarations(), settings, level)?
        ))
    }
}

impl WriteCss for ViewportRule {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        require(settings, "@viewport", CssVersion::Css30)?;
        let space = if settings.optimized_output { "" } else { " " };
        Ok(format!(
            "@viewport{space}{}",
            write_declaration_block(self.declarations(), settings, level)?
        ))
    }
}

impl WriteCss for KeyframesBlock {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        let separator = if settings.optimized_output { "," } else { ", " };
        let space = if settings.optimized_output { "" } else { " " };
        Ok(format!(
            "{}{space}{}",
            self.selectors().join(separator),
            write_declaration_block(self.declarations(), settings, level)?
        ))
    }
}

impl WriteCss for KeyframesRule {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        require(settings, "@keyframes", CssVersion::Css30)?;
        let space = if settings.optimized_output { "" } else { " " };
        let mut out = format!(
            "{} {}{space}{{{}",
            self.declaration(),
            self.name(),
            settings.newline()
        );
        for block in self.blocks() {
            out.push_str(&settings.indent_for(level + 1));
            out.push_str(&block.write_css(settings, level + 1)?);
            out.push_str(settings.newline());
        }
        out.push_str(&settings.indent_for(level));
        out.push('}');
        Ok(out)
    }
}

impl WriteCss for SupportsConditionMember {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        match self {
            SupportsConditionMember::Declaration(declaration) => {
                Ok(format!("({})", declaration.write_css(settings, level)?))
            }
            SupportsConditionMember::Negation(inner) => {
                Ok(format!("not {}", inner.write_css(settings, level)?))
            }
            SupportsConditionMember::Nested(members) => {
                let rendered: Vec<String> = members
                    .iter()
                    .map(|m| m.write_css(settings, level))
                    .collect::<Result<_, _>>()?;
                Ok(format!("({})", rendered.join(" ")))
            }
            SupportsConditionMember::Operator(op) => Ok(op.as_str().to_string()),
        }
    }
}

impl WriteCss for SupportsRule {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        require(settings, "@supports", CssVersion::Css30)?;
        let condition: Vec<String> = self
            .condition()
            .iter()
            .map(|m| m.write_css(settings, level))
            .collect::<Result<_, _>>()?;
        let mut out = format!("@supports {}", condition.join(" "));
        out.push_str(&render_rule_body(self.rules(), settings, level)?);
        Ok(out)
    }
}

impl WriteCss for UnknownRule {
    fn write_css(&self, settings: &WriterSettings, _level: usize) -> Result<String, WriterError> {
        let mut out = self.name().to_string();
        if !self.parameter_text().is_empty() {
            out.push(' ');
            out.push_str(self.parameter_text());
        }
        if self.body_text().is_empty() {
            out.push(';');
        } else {
            let space = if settings.optimized_output { "" } else { " " };
            out.push_str(&format!("{space}{{{}}}", self.body_text()));
        }
        Ok(out)
    }
}

impl WriteCss for ImportRule {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        let mut out = format!("@import {}", render_url(self.uri(), settings));
        let separator = if settings.optimized_output { "," } else { ", " };
        let queries: Vec<String> = self
            .queries()
            .iter()
            .map(|q| q.write_css(settings, level))
            .collect::<Result<_, _>>()?;
        if !queries.is_empty() {
            out.push(' ');
            out.push_str(&queries.join(separator));
        }
        out.push(';');
        Ok(out)
    }
}

impl WriteCss for NamespaceRule {
    fn write_css(&self, _settings: &WriterSettings, _level: usize) -> Result<String, WriterError> {
        let prefix = self
            .prefix()
            .map(|p| format!("{p} "))
            .unwrap_or_default();
        Ok(format!("@namespace {prefix}\"{}\";", self.uri()))
    }
}

impl WriteCss for TopLevelRule {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        match self {
            TopLevelRule::Style(r) => r.write_css(settings, level),
            TopLevelRule::Media(r) => {
                if !settings.write_media_rules {
                    return Ok(String::new());
                }
                r.write_css(settings, level)
            }
            TopLevelRule::Page(r) => r.write_css(settings, level),
            TopLevelRule::FontFace(r) => r.write_css(settings, level),
            TopLevelRule::Keyframes(r) => r.write_css(settings, level),
            TopLevelRule::Supports(r) => {
                if !settings.write_supports_rules {
                    return Ok(String::new());
                }
                r.write_css(settings, level)
            }
            TopLevelRule::Viewport(r) => {
                if !settings.write_viewport_rules {
                    return Ok(String::new());
                }
                r.write_css(settings, level)
            }
            TopLevelRule::Unknown(r) => {
                if !settings.write_unknown_rules {
                    return Ok(String::new());
                }
                r.write_css(settings, level)
            }
        }
    }
}

impl WriteCss for Stylesheet {
    fn write_css(&self, settings: &WriterSettings, level: usize) -> Result<String, WriterError> {
        let mut out = String::new();
        for import in self.imports() {
            out.push_str(&import.write_css(settings, level)?);
            out.push_str(settings.newline());
        }
        if settings.write_namespace_rules {
            for namespace in self.namespaces() {
                require(settings, "@namespace", CssVersion::Css30)?;
                out.push_str(&namespace.write_css(settings, level)?);
                out.push_str(settings.newline());
            }
        }
        for rule in self.rules() {
            let rendered = rule.write_css(settings, level)?;
            if rendered.is_empty() {
                continue;
            }
            out.push_str(&rendered);
            out.push_str(settings.newline());
        }
        Ok(out)
    }
}

impl Stylesheet {
    /// Render the whole stylesheet with the given settings.
    pub fn to_css_string(&self, settings: &WriterSettings) -> Result<String, WriterError> {
        self.write_css(settings, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{MathProductOperator, MathSumOperator};

    #[test]
    fn optimized_output_drops_whitespace() {
        let mut rule = StyleRule::new();
        rule.add_selector(Selector::simple("a"));
        rule.add_declaration(
            Declaration::new("color", Expression::simple("#aabbcc")).unwrap(),
        );
        let pretty = rule.write_css(&WriterSettings::default(), 0).unwrap();
        assert_eq!(pretty, "a {\n  color: #aabbcc;\n}");
        let optimized = rule
            .write_css(&WriterSettings::default().with_optimized_output(true), 0)
            .unwrap();
        assert_eq!(optimized, "a{color:#abc}");
    }

    #[test]
    fn calc_keeps_sum_spacing_when_optimized() {
        let mut product = MathProduct::new(MathUnit::value("2", Some(crate::ast::CssUnit::Px)));
        product.push(MathProductOperator::Multiply, MathUnit::value("3", None));
        let mut math = MathExpression::new(MathProduct::new(MathUnit::value(
            "1",
            Some(crate::ast::CssUnit::Px),
        )));
        math.push(MathSumOperator::Plus, product);

        let pretty = math.write_css(&WriterSettings::default(), 0).unwrap();
        assert_eq!(pretty, "calc(1px + 2px * 3)");
        let optimized = math
            .write_css(&WriterSettings::default().with_optimized_output(true), 0)
            .unwrap();
        assert_eq!(optimized, "calc(1px + 2px*3)");
    }

    #[test]
    fn sibling_combinator_requires_css30() {
        let mut selector = Selector::simple("a");
        selector.add_member(SelectorMember::Combinator(Combinator::Tilde));
        selector.add_member(SelectorMember::Simple("b".to_string()));
        let css21 = WriterSettings::default().with_version(CssVersion::Css21);
        assert!(matches!(
            selector.write_css(&css21, 0),
            Err(WriterError::VersionMismatch { .. })
        ));
        assert_eq!(
            selector.write_css(&WriterSettings::default(), 0).unwrap(),
            "a ~ b"
        );
    }

    #[test]
    fn css3_color_functions_require_css30() {
        let css21 = WriterSettings::default().with_version(CssVersion::Css21);

        let rgb = Rgb::new("255", "0", "0").unwrap();
        assert_eq!(rgb.write_css(&css21, 0).unwrap(), "rgb(255,0,0)");

        let rgba = Rgba::new("255", "0", "0", "0.5").unwrap();
        assert!(matches!(
            rgba.write_css(&css21, 0),
            Err(WriterError::VersionMismatch { .. })
        ));
        assert_eq!(
            rgba.write_css(&WriterSettings::default(), 0).unwrap(),
            "rgba(255,0,0,0.5)"
        );
    }
}
