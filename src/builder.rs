//! Parse-tree to AST conversion.
//!
//! The grammar emits a generic [`ParseNode`] tree; this module turns it into
//! the typed object model. Conversion dispatches on [`NodeKind`], so the two
//! version-specific tag sets share one builder. Children with an unexpected
//! kind are skipped with a `log::warn!`, never a panic: the grammar already
//! reported every syntax problem, and a malformed subtree here means a bug
//! rather than bad input.

use log::warn;

use crate::ast::{
    AttributeOperator, Combinator, Declaration, DeclarationContainer, Expression,
    ExpressionMember, ExpressionOperator, FontFaceRule, FunctionTerm, ImportRule, KeyframesBlock,
    KeyframesRule, MathExpression, MathProduct, MathProductOperator, MathSumOperator, MathUnit,
    MediaExpression, MediaModifier, MediaQuery, MediaRule, NamespaceRule, PageRule, Selector,
    SelectorMember, StyleRule, Stylesheet, SupportsConditionMember, SupportsOperator,
    SupportsRule, TopLevelRule, UnknownRule, UriTerm, ViewportRule,
};
use crate::ast::CssUnit;
use crate::error::AstError;
use crate::grammar::{LineMap, NodeKind, ParseNode};

/// Build a [`Stylesheet`] from the grammar's root node.
pub(crate) fn build_stylesheet(root: &ParseNode, map: &LineMap<'_>) -> Result<Stylesheet, AstError> {
    let mut sheet = Stylesheet::new();
    for child in &root.children {
        match child.kind() {
            // The charset was already consumed by the source resolver.
            NodeKind::Charset => {}
            NodeKind::Import => {
                sheet.add_import(build_import(child, map));
            }
            NodeKind::Namespace => {
                sheet.add_namespace(build_namespace(child, map));
            }
            _ => {
                if let Some(rule) = build_top_level(child, map)? {
                    sheet.add_rule(rule);
                }
            }
        }
    }
    Ok(sheet)
}

/// Build a [`DeclarationContainer`] from a declaration-list root node.
pub(crate) fn build_declaration_list(root: &ParseNode, map: &LineMap<'_>) -> DeclarationContainer {
    let mut container = DeclarationContainer::new();
    fill_declarations(&mut container, root, map);
    container
}

fn build_top_level(node: &ParseNode, map: &LineMap<'_>) -> Result<Option<TopLevelRule>, AstError> {
    Ok(match node.kind() {
        NodeKind::StyleRule => Some(TopLevelRule::Style(build_style_rule(node, map))),
        NodeKind::MediaRule => Some(TopLevelRule::Media(build_media_rule(node, map)?)),
        NodeKind::PageRule => Some(TopLevelRule::Page(build_page_rule(node, map))),
        NodeKind::FontFaceRule => Some(TopLevelRule::FontFace(build_font_face_rule(node, map))),
        NodeKind::KeyframesRule => Some(TopLevelRule::Keyframes(build_keyframes_rule(node, map)?)),
        NodeKind::SupportsRule => Some(TopLevelRule::Supports(build_supports_rule(node, map)?)),
        NodeKind::ViewportRule => Some(TopLevelRule::Viewport(build_viewport_rule(node, map))),
        NodeKind::UnknownRule => Some(TopLevelRule::Unknown(build_unknown_rule(node, map))),
        kind => {
            warn!("skipping unexpected {kind:?} node at the rule level");
            None
        }
    })
}

fn build_import(node: &ParseNode, map: &LineMap<'_>) -> ImportRule {
    let mut rule = ImportRule::new(node.text());
    for child in &node.children {
        match child.kind() {
            NodeKind::MediaQuery => {
                rule.add_query(build_media_query(child));
            }
            kind => warn!("skipping unexpected {kind:?} node inside @import"),
        }
    }
    rule.set_source_location(map.location(node.offset));
    rule
}

fn build_namespace(node: &ParseNode, map: &LineMap<'_>) -> NamespaceRule {
    let prefix = node
        .children
        .iter()
        .find(|c| c.kind() == NodeKind::Term)
        .map(|c| c.text().to_string());
    let mut rule = NamespaceRule::new(prefix, node.text());
    rule.set_source_location(map.location(node.offset));
    rule
}

fn build_style_rule(node: &ParseNode, map: &LineMap<'_>) -> StyleRule {
    let mut rule = StyleRule::new();
    for child in &node.children {
        match child.kind() {
            NodeKind::SelectorList => {
                for selector in &child.children {
                    rule.add_selector(build_selector(selector));
                }
            }
            NodeKind::DeclarationList => {
                let mut container = DeclarationContainer::new();
                fill_declarations(&mut container, child, map);
                for declaration in container.all_declarations() {
                    rule.add_declaration(declaration);
                }
            }
            kind => warn!("skipping unexpected {kind:?} node inside a style rule"),
        }
    }
    rule.set_source_location(map.location(node.offset));
    rule
}

fn build_selector(node: &ParseNode) -> Selector {
    let mut selector = Selector::new();
    for child in &node.children {
        match child.kind() {
            NodeKind::SimpleMember => {
                selector.add_member(SelectorMember::Simple(child.text().to_string()));
            }
            NodeKind::Combinator => {
                let combinator = match child.text() {
                    "+" => Combinator::Plus,
                    ">" => Combinator::Greater,
                    "~" => Combinator::Tilde,
                    _ => Combinator::Blank,
                };
                selector.add_member(SelectorMember::Combinator(combinator));
            }
            NodeKind::FunctionalPseudo => {
                // Keeps the `:` / `::` prefix as parsed.
                let name = child.text().to_string();
                let expression = child
                    .children
                    .iter()
                    .find(|c| c.kind() == NodeKind::Expression)
                    .map(build_expression);
                selector.add_member(SelectorMember::FunctionalPseudo { name, expression });
            }
            NodeKind::Negation => {
                let inner: Vec<Selector> = child.children.iter().map(build_selector).collect();
                match SelectorMember::negation(inner) {
                    Ok(member) => {
                        selector.add_member(member);
                    }
                    Err(e) => warn!("skipping invalid negation: {e}"),
                }
            }
            NodeKind::Attribute => {
                selector.add_member(build_attribute(child));
            }
            kind => warn!("skipping unexpected {kind:?} node inside a selector"),
        }
    }
    selector
}

fn build_attribute(node: &ParseNode) -> SelectorMember {
    let mut namespace_prefix = None;
    let mut operator = None;
    let mut value = None;
    for child in &node.children {
        match child.kind() {
            NodeKind::SimpleMember => namespace_prefix = Some(child.text().to_string()),
            NodeKind::Operator => operator = AttributeOperator::from_str(child.text()),
            NodeKind::Term => value = Some(child.text().to_string()),
            kind => warn!("skipping unexpected {kind:?} node inside an attribute selector"),
        }
    }
    SelectorMember::Attribute {
        namespace_prefix,
        name: node.text().to_string(),
        operator: operator.zip(value),
    }
}

fn fill_declarations(container: &mut DeclarationContainer, list: &ParseNode, map: &LineMap<'_>) {
    for child in &list.children {
        match child.kind() {
            NodeKind::Declaration => {
                if let Some(declaration) = build_declaration(child, map) {
                    container.add(declaration);
                }
            }
            kind => warn!("skipping unexpected {kind:?} node inside a declaration list"),
        }
    }
}

fn build_declaration(node: &ParseNode, map: &LineMap<'_>) -> Option<Declaration> {
    let mut expression = Expression::new();
    let mut important = false;
    for child in &node.children {
        match child.kind() {
            NodeKind::Expression => expression = build_expression(child),
            NodeKind::Important => important = true,
            kind => warn!("skipping unexpected {kind:?} node inside a declaration"),
        }
    }
    match Declaration::with_importance(node.text(), expression, important) {
        Ok(mut declaration) => {
            declaration.set_source_location(map.location(node.offset));
            Some(declaration)
        }
        Err(e) => {
            warn!("skipping invalid declaration: {e}");
            None
        }
    }
}

fn build_expression(node: &ParseNode) -> Expression {
    let mut expression = Expression::new();
    for child in &node.children {
        match child.kind() {
            NodeKind::Term => {
                expression.add_term(child.text());
            }
            NodeKind::Operator => {
                let operator = match child.text() {
                    "/" => ExpressionOperator::Slash,
                    "," => ExpressionOperator::Comma,
                    "=" => ExpressionOperator::Equals,
                    other => {
                        warn!("skipping unknown expression operator `{other}`");
                        continue;
                    }
                };
                expression.add_member(ExpressionMember::Operator(operator));
            }
            NodeKind::Function => {
                let args = child
                    .children
                    .iter()
                    .find(|c| c.kind() == NodeKind::Expression)
                    .map(build_expression);
                let term = match args {
                    Some(args) => FunctionTerm::with_args(child.text(), args),
                    None => FunctionTerm::new(child.text()),
                };
                match term {
                    Ok(term) => {
                        expression.add_member(ExpressionMember::Function(term));
                    }
                    Err(e) => warn!("skipping invalid function term: {e}"),
                }
            }
            NodeKind::Uri => {
                expression.add_member(ExpressionMember::Uri(UriTerm::new(child.text())));
            }
            NodeKind::MathSum => {
                expression.add_member(ExpressionMember::Math(build_math(child)));
            }
            kind => warn!("skipping unexpected {kind:?} node inside an expression"),
        }
    }
    expression
}

fn build_math(node: &ParseNode) -> MathExpression {
    let mut expression: Option<MathExpression> = None;
    let mut pending = MathSumOperator::Plus;
    for child in &node.children {
        match child.kind() {
            NodeKind::MathProduct => {
                let product = build_math_product(child);
                match expression.as_mut() {
                    Some(expr) => {
                        expr.push(pending, product);
                    }
                    None => expression = Some(MathExpression::new(product)),
                }
            }
            NodeKind::Operator => {
                pending = match child.text() {
                    "-" => MathSumOperator::Minus,
                    _ => MathSumOperator::Plus,
                };
            }
            kind => warn!("skipping unexpected {kind:?} node inside calc()"),
        }
    }
    expression.unwrap_or_default()
}

fn build_math_product(node: &ParseNode) -> MathProduct {
    let mut product: Option<MathProduct> = None;
    let mut pending = MathProductOperator::Multiply;
    for child in &node.children {
        match child.kind() {
            NodeKind::MathUnit => {
                let unit = build_math_unit(child);
                match product.as_mut() {
                    Some(p) => {
                        p.push(pending, unit);
                    }
                    None => product = Some(MathProduct::new(unit)),
                }
            }
            NodeKind::Operator => {
                pending = match child.text() {
                    "/" => MathProductOperator::Divide,
                    _ => MathProductOperator::Multiply,
                };
            }
            kind => warn!("skipping unexpected {kind:?} node inside a calc() product"),
        }
    }
    product.unwrap_or_default()
}

fn build_math_unit(node: &ParseNode) -> MathUnit {
    if let Some(nested) = node
        .children
        .iter()
        .find(|c| c.kind() == NodeKind::MathProduct)
    {
        return MathUnit::nested(build_math_product(nested));
    }
    let (number, unit) = split_dimension(node.text());
    MathUnit::value(number, unit)
}

/// Split a dimension token like `2px` into its numeric text and unit.
/// Unrecognized suffixes stay attached to the text.
fn split_dimension(text: &str) -> (String, Option<CssUnit>) {
    let suffix_start = text
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-')))
        .map(|(i, _)| i);
    if let Some(at) = suffix_start {
        if at > 0 {
            if let Some(unit) = CssUnit::from_suffix(&text[at..]) {
                return (text[..at].to_string(), Some(unit));
            }
        }
    }
    (text.to_string(), None)
}

fn build_media_rule(node: &ParseNode, map: &LineMap<'_>) -> Result<MediaRule, AstError> {
    let mut rule = MediaRule::new();
    for child in &node.children {
        match child.kind() {
            NodeKind::MediaQuery => {
                rule.add_query(build_media_query(child));
            }
            _ => {
                if let Some(nested) = build_top_level(child, map)? {
                    rule.add_rule(nested);
                }
            }
        }
    }
    rule.set_source_location(map.location(node.offset));
    Ok(rule)
}

fn build_media_query(node: &ParseNode) -> MediaQuery {
    let modifier = node
        .children
        .iter()
        .find(|c| c.kind() == NodeKind::MediaModifier)
        .and_then(|c| {
            // A modifier node with no keyword text means no modifier.
            if c.text().is_empty() {
                None
            } else if c.text().eq_ignore_ascii_case("only") {
                Some(MediaModifier::Only)
            } else {
                Some(MediaModifier::Not)
            }
        })
        .unwrap_or(MediaModifier::None);
    let mut query = MediaQuery::new(modifier, node.text.clone());
    for child in &node.children {
        match child.kind() {
            NodeKind::MediaModifier => {}
            NodeKind::MediaExpression => {
                let value = child
                    .children
                    .iter()
                    .find(|c| c.kind() == NodeKind::Expression)
                    .map(build_expression);
                query.add_expression(match value {
                    Some(value) => MediaExpression::with_value(child.text(), value),
                    None => MediaExpression::new(child.text()),
                });
            }
            kind => warn!("skipping unexpected {kind:?} node inside a media query"),
        }
    }
    query
}

fn build_page_rule(node: &ParseNode, map: &LineMap<'_>) -> PageRule {
    let mut rule = PageRule::new(node.text.clone());
    for child in &node.children {
        match child.kind() {
            NodeKind::DeclarationList => {
                let mut container = DeclarationContainer::new();
                fill_declarations(&mut container, child, map);
                for declaration in container.all_declarations() {
                    rule.add_declaration(declaration);
                }
            }
            kind => warn!("skipping unexpected {kind:?} node inside @page"),
        }
    }
    rule.set_source_location(map.location(node.offset));
    rule
}

fn build_font_face_rule(node: &ParseNode, map: &LineMap<'_>) -> FontFaceRule {
    let mut rule = FontFaceRule::new();
    for child in &node.children {
        match child.kind() {
            NodeKind::DeclarationList => {
                let mut container = DeclarationContainer::new();
                fill_declarations(&mut container, child, map);
                for declaration in container.all_declarations() {
                    rule.add_declaration(declaration);
                }
            }
            kind => warn!("skipping unexpected {kind:?} node inside @font-face"),
        }
    }
    rule.set_source_location(map.location(node.offset));
    rule
}

fn build_viewport_rule(node: &ParseNode, map: &LineMap<'_>) -> ViewportRule {
    let mut rule = ViewportRule::new();
    for child in &node.children {
        match child.kind() {
            NodeKind::DeclarationList => {
                let mut container = DeclarationContainer::new();
                fill_declarations(&mut container, child, map);
                for declaration in container.all_declarations() {
                    rule.add_declaration(declaration);
                }
            }
            kind => warn!("skipping unexpected {kind:?} node inside @viewport"),
        }
    }
    rule.set_source_location(map.location(node.offset));
    rule
}

/// Keyframes children arrive flat: the animation-name term first, then an
/// alternation of selector nodes and the declarations belonging to them.
fn build_keyframes_rule(node: &ParseNode, map: &LineMap<'_>) -> Result<KeyframesRule, AstError> {
    let mut name = String::new();
    let mut name_taken = false;
    let mut blocks: Vec<KeyframesBlock> = Vec::new();
    let mut current: Option<KeyframesBlock> = None;

    for child in &node.children {
        match child.kind() {
            NodeKind::Term if !name_taken => {
                name = child.text().to_string();
                name_taken = true;
            }
            NodeKind::KeyframesSelector => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
                let selectors = child
                    .children
                    .iter()
                    .filter(|c| c.kind() == NodeKind::Term)
                    .map(|c| c.text().to_string())
                    .collect();
                current = Some(KeyframesBlock::new(selectors));
            }
            NodeKind::Declaration => match current.as_mut() {
                Some(block) => {
                    if let Some(declaration) = build_declaration(child, map) {
                        block.add_declaration(declaration);
                    }
                }
                None => return Err(AstError::KeyframesDeclarationBeforeSelector),
            },
            kind => warn!("skipping unexpected {kind:?} node inside @keyframes"),
        }
    }
    if let Some(block) = current.take() {
        blocks.push(block);
    }

    let mut rule = KeyframesRule::new(node.text(), name);
    for block in blocks {
        rule.add_block(block);
    }
    rule.set_source_location(map.location(node.offset));
    Ok(rule)
}

fn build_supports_rule(node: &ParseNode, map: &LineMap<'_>) -> Result<SupportsRule, AstError> {
    let mut rule = SupportsRule::new();
    for child in &node.children {
        match child.kind() {
            NodeKind::SupportsDeclaration
            | NodeKind::SupportsNegation
            | NodeKind::SupportsNested
            | NodeKind::SupportsOperator => {
                if let Some(member) = build_supports_member(child, map) {
                    rule.add_condition_member(member);
                }
            }
            _ => {
                if let Some(nested) = build_top_level(child, map)? {
                    rule.add_rule(nested);
                }
            }
        }
    }
    rule.set_source_location(map.location(node.offset));
    Ok(rule)
}

fn build_supports_member(node: &ParseNode, map: &LineMap<'_>) -> Option<SupportsConditionMember> {
    match node.kind() {
        NodeKind::SupportsDeclaration => {
            let declaration = node
                .children
                .iter()
                .find(|c| c.kind() == NodeKind::Declaration)
                .and_then(|c| build_declaration(c, map))?;
            Some(SupportsConditionMember::Declaration(declaration))
        }
        NodeKind::SupportsNegation => {
            let inner = node
                .children
                .first()
                .and_then(|c| build_supports_member(c, map))?;
            Some(SupportsConditionMember::Negation(Box::new(inner)))
        }
        NodeKind::SupportsNested => {
            let members = node
                .children
                .iter()
                .filter_map(|c| build_supports_member(c, map))
                .collect();
            Some(SupportsConditionMember::Nested(members))
        }
        NodeKind::SupportsOperator => {
            let operator = if node.text().eq_ignore_ascii_case("or") {
                SupportsOperator::Or
            } else {
                SupportsOperator::And
            };
            Some(SupportsConditionMember::Operator(operator))
        }
        kind => {
            warn!("skipping unexpected {kind:?} node inside a @supports condition");
            None
        }
    }
}

fn build_unknown_rule(node: &ParseNode, map: &LineMap<'_>) -> UnknownRule {
    let mut terms = node.children.iter().filter(|c| c.kind() == NodeKind::Term);
    let parameter_text = terms.next().map(|c| c.text().to_string()).unwrap_or_default();
    let body_text = terms.next().map(|c| c.text().to_string()).unwrap_or_default();
    let mut rule = UnknownRule::new(node.text(), parameter_text, body_text);
    rule.set_source_location(map.location(node.offset));
    rule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{CssVersion, NodeTag};

    fn tag(kind: NodeKind) -> NodeTag {
        NodeTag::for_kind(CssVersion::Css30, kind).unwrap()
    }

    #[test]
    fn keyframes_declaration_before_any_selector_fails_the_build() {
        let mut keyframes = ParseNode::with_text(tag(NodeKind::KeyframesRule), 0, "@keyframes");
        keyframes.push(ParseNode::with_text(tag(NodeKind::Term), 0, "fade"));
        keyframes.push(ParseNode::with_text(tag(NodeKind::Declaration), 0, "color"));
        let mut root = ParseNode::new(tag(NodeKind::Root), 0);
        root.push(keyframes);

        let map = LineMap::new("");
        assert_eq!(
            build_stylesheet(&root, &map),
            Err(AstError::KeyframesDeclarationBeforeSelector)
        );
    }
}
