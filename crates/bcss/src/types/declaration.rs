//! Declaration blocks, rules and flat stylesheets.
//!
//! A [`DeclarationBlock`] keeps declarations in insertion order and holds at
//! most one value per property: setting a property again overwrites it in
//! place. That keeps rendering deterministic, so two blocks built from the
//! same inputs always render to the same text.

use std::fmt;

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// Ordered declarations with unique property names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeclarationBlock {
    declarations: Vec<Declaration>,
}

impl DeclarationBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property`, replacing any earlier value for it.
    pub fn set(&mut self, property: impl Into<String>, value: impl ToString) {
        let property = property.into();
        let value = value.to_string();
        match self
            .declarations
            .iter_mut()
            .find(|decl| decl.property == property)
        {
            Some(existing) => existing.value = value,
            None => self.declarations.push(Declaration { property, value }),
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, property: impl Into<String>, value: impl ToString) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|decl| decl.property == property)
            .map(|decl| decl.value.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        let index = self
            .declarations
            .iter()
            .position(|decl| decl.property == property)?;
        Some(self.declarations.remove(index).value)
    }

    /// Overlay `other` onto this block; its values win.
    pub fn merge(&mut self, other: &DeclarationBlock) {
        for decl in &other.declarations {
            self.set(decl.property.clone(), &decl.value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Render as inline style text, e.g. `width: 50px; height: 50px;`.
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(Declaration::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for DeclarationBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromIterator<Declaration> for DeclarationBlock {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        let mut block = DeclarationBlock::new();
        for decl in iter {
            block.set(decl.property, decl.value);
        }
        block
    }
}

/// A selector with its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub block: DeclarationBlock,
}

impl Rule {
    pub fn new(selector: impl Into<String>, block: DeclarationBlock) -> Self {
        Self {
            selector: selector.into(),
            block,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.block.is_empty() {
            write!(f, "{} {{}}", self.selector)
        } else {
            write!(f, "{} {{ {} }}", self.selector, self.block)
        }
    }
}

/// A flat list of rules, at most one per selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSheet {
    rules: Vec<Rule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, replacing the block of an existing rule with the same
    /// selector.
    pub fn upsert(&mut self, rule: Rule) {
        match self
            .rules
            .iter_mut()
            .find(|existing| existing.selector == rule.selector)
        {
            Some(existing) => existing.block = rule.block,
            None => self.rules.push(rule),
        }
    }

    pub fn with_rule(mut self, selector: impl Into<String>, block: DeclarationBlock) -> Self {
        self.upsert(Rule::new(selector, block));
        self
    }

    pub fn rule(&self, selector: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.selector == selector)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn to_css(&self) -> String {
        self.rules
            .iter()
            .map(Rule::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromIterator<Rule> for StyleSheet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut sheet = StyleSheet::new();
        for rule in iter {
            sheet.upsert(rule);
        }
        sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_in_place() {
        let mut block = DeclarationBlock::new()
            .with("top", "0")
            .with("left", "0");
        block.set("top", "auto");

        assert_eq!(block.len(), 2);
        assert_eq!(block.to_css(), "top: auto; left: 0;");
    }

    #[test]
    fn test_merge_overlays_values() {
        let mut base = DeclarationBlock::new()
            .with("left", "50%")
            .with("transform", "translateX(-50%)");
        let overlay = DeclarationBlock::new()
            .with("left", "auto")
            .with("right", "0");
        base.merge(&overlay);

        assert_eq!(base.get("left"), Some("auto"));
        assert_eq!(base.get("right"), Some("0"));
        assert_eq!(base.get("transform"), Some("translateX(-50%)"));
    }

    #[test]
    fn test_remove() {
        let mut block = DeclarationBlock::new().with("color", "#000");
        assert_eq!(block.remove("color"), Some("#000".to_string()));
        assert_eq!(block.remove("color"), None);
        assert!(block.is_empty());
    }

    #[test]
    fn test_stylesheet_upsert_replaces_rule() {
        let mut sheet = StyleSheet::new()
            .with_rule(".a", DeclarationBlock::new().with("color", "red"));
        sheet.upsert(Rule::new(".a", DeclarationBlock::new().with("color", "blue")));

        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.to_css(), ".a { color: blue; }");
    }

    #[test]
    fn test_empty_rule_renders_braces() {
        let rule = Rule::new(".empty", DeclarationBlock::new());
        assert_eq!(rule.to_string(), ".empty {}");
    }
}
