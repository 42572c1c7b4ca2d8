//! Brand stylesheet — the brand-wrap container, its typography and the
//! primary button.

use std::fmt::{self, Write as _};

use serde::Serialize;

/// Amber accent used by the border, gradient and primary button.
pub const ACCENT: &str = "#f59e0b";
/// Muted grey of the subtitle.
pub const MUTED: &str = "#6b7280";

/// Selector of the header container.
pub const BRAND_WRAP: &str = ".brand-wrap";
/// Selector of primary action buttons.
pub const PRIMARY_BUTTON: &str = "button.primary";

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub property: &'static str,
    pub value: &'static str,
}

const fn decl(property: &'static str, value: &'static str) -> Declaration {
    Declaration { property, value }
}

/// Declarations for one selector, plus an optional `:hover` variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleRule {
    pub selector: &'static str,
    pub declarations: Vec<Declaration>,
    pub hover: Vec<Declaration>,
}

impl StyleRule {
    /// Look up the value of `property` in the base declarations.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&'static str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value)
    }
}

/// An ordered list of style rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stylesheet {
    rules: Vec<StyleRule>,
}

impl Stylesheet {
    /// The dashboard's brand theme.
    #[must_use]
    pub fn brand() -> Self {
        let rules = vec![
            StyleRule {
                selector: BRAND_WRAP,
                declarations: vec![
                    decl("display", "flex"),
                    decl("align-items", "center"),
                    decl("gap", "18px"),
                    decl("padding", "14px 18px"),
                    decl("margin", "8px 0"),
                    decl("border-radius", "16px"),
                    decl("border", "1px solid rgba(245,158,11,.25)"),
                    decl(
                        "background",
                        "radial-gradient(circle at 0% 0%, rgba(245,158,11,.10), transparent 40%)",
                    ),
                ],
                hover: Vec::new(),
            },
            StyleRule {
                selector: ".brand-wrap h1",
                declarations: vec![
                    decl("font-size", "28px"),
                    decl("line-height", "1.2"),
                    decl("margin", "0"),
                ],
                hover: Vec::new(),
            },
            StyleRule {
                selector: ".brand-wrap p",
                declarations: vec![decl("margin", "2px 0 0 0"), decl("color", MUTED)],
                hover: Vec::new(),
            },
            StyleRule {
                selector: PRIMARY_BUTTON,
                declarations: vec![
                    decl("background", ACCENT),
                    decl("color", "white"),
                    decl("border", "0"),
                    decl("border-radius", "12px"),
                    decl("padding", "8px 14px"),
                ],
                hover: vec![decl("filter", "brightness(.95)")],
            },
        ];
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Find the rule for `selector`.
    #[must_use]
    pub fn rule(&self, selector: &str) -> Option<&StyleRule> {
        self.rules.iter().find(|r| r.selector == selector)
    }

    /// Render to CSS text.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

fn write_block(f: &mut String, selector: &str, declarations: &[Declaration]) -> fmt::Result {
    writeln!(f, "{selector} {{")?;
    for d in declarations {
        writeln!(f, "  {}: {};", d.property, d.value)?;
    }
    writeln!(f, "}}")
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut css = String::new();
        for rule in &self.rules {
            write_block(&mut css, rule.selector, &rule.declarations)?;
            if !rule.hover.is_empty() {
                write_block(&mut css, &format!("{}:hover", rule.selector), &rule.hover)?;
            }
        }
        f.write_str(&css)
    }
}
