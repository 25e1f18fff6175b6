//! Lazily-evaluated element queries
//!
//! A [`Locator`] describes how to find a UI element; it is only evaluated in
//! the page at the moment an action or visibility probe runs, as a JavaScript
//! expression executed over CDP.

use std::fmt;

/// JS helper prepended to every generated script; an element counts as
/// visible when it has a nonzero box and is not display:none / hidden.
const VISIBLE_HELPER: &str = "const __visible = (el) => { \
     if (!el) return false; \
     const r = el.getBoundingClientRect(); \
     const s = window.getComputedStyle(el); \
     return r.width > 0 && r.height > 0 && s.display !== 'none' && s.visibility !== 'hidden'; \
     };";

/// A query describing how to find a UI element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// First element matching a CSS selector
    Css(String),
    /// Element with the given ARIA role and accessible name
    Role { role: String, name: String },
    /// Leaf element whose trimmed text content equals the given string
    Text(String),
    /// First button whose text content contains the given string
    ButtonText(String),
}

impl Locator {
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    pub fn role(role: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Role {
            role: role.into(),
            name: name.into(),
        }
    }

    pub fn exact_text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn button_text(text: impl Into<String>) -> Self {
        Self::ButtonText(text.into())
    }

    /// JS expression evaluating to the first matching element, or null
    fn find_expression(&self) -> String {
        match self {
            Self::Css(selector) => {
                format!("document.querySelector({})", js_string(selector))
            }
            Self::Role { role, name } => format!(
                "(Array.from(document.querySelectorAll({selector}))\
                 .find((el) => (el.getAttribute('aria-label') || el.textContent || '').trim() === {name}) || null)",
                selector = js_string(&format!("[role=\"{role}\"]")),
                name = js_string(name),
            ),
            Self::Text(text) => format!(
                "(Array.from(document.querySelectorAll('body *'))\
                 .find((el) => el.childElementCount === 0 && (el.textContent || '').trim() === {text}) || null)",
                text = js_string(text),
            ),
            Self::ButtonText(text) => format!(
                "(Array.from(document.querySelectorAll('button'))\
                 .find((el) => (el.textContent || '').includes({text})) || null)",
                text = js_string(text),
            ),
        }
    }

    /// Script returning true when a matching element is currently visible
    pub(crate) fn visible_probe(&self) -> String {
        format!(
            "(() => {{ {VISIBLE_HELPER} const el = {expr}; return __visible(el); }})()",
            expr = self.find_expression()
        )
    }

    /// Script that clicks a visible matching element; returns true on success
    pub(crate) fn click_script(&self) -> String {
        format!(
            "(() => {{ {VISIBLE_HELPER} const el = {expr}; \
             if (!__visible(el)) return false; el.click(); return true; }})()",
            expr = self.find_expression()
        )
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(selector) => write!(f, "css selector '{selector}'"),
            Self::Role { role, name } => write!(f, "{role} '{name}'"),
            Self::Text(text) => write!(f, "text '{text}'"),
            Self::ButtonText(text) => write!(f, "button with text '{text}'"),
        }
    }
}

/// Render a Rust string as a JS string literal (handles quotes and newlines)
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escaping() {
        assert_eq!(js_string("plain"), "\"plain\"");
        assert_eq!(js_string("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(js_string("a\\b"), "\"a\\\\b\"");
        assert_eq!(js_string("line\nbreak"), "\"line\\nbreak\"");
    }

    #[test]
    fn test_css_find_expression() {
        let locator = Locator::css("button:has(svg.lucide-globe)");
        assert_eq!(
            locator.find_expression(),
            "document.querySelector(\"button:has(svg.lucide-globe)\")"
        );
    }

    #[test]
    fn test_role_find_expression_uses_role_selector() {
        let locator = Locator::role("menuitem", "English");
        let expr = locator.find_expression();
        assert!(expr.contains("[role=\\\"menuitem\\\"]"));
        assert!(expr.contains("\"English\""));
        assert!(expr.contains("aria-label"));
    }

    #[test]
    fn test_text_locator_matches_leaf_elements_only() {
        let locator = Locator::exact_text("No products found");
        let expr = locator.find_expression();
        assert!(expr.contains("childElementCount === 0"));
        assert!(expr.contains("\"No products found\""));
    }

    #[test]
    fn test_button_text_find_expression() {
        let locator = Locator::button_text("Add to Cart");
        let expr = locator.find_expression();
        assert!(expr.contains("querySelectorAll('button')"));
        assert!(expr.contains(".includes(\"Add to Cart\")"));
    }

    #[test]
    fn test_probe_and_click_scripts_are_self_contained() {
        let locator = Locator::css("div.grid");
        let probe = locator.visible_probe();
        assert!(probe.starts_with("(() => {"));
        assert!(probe.contains("__visible"));

        let click = locator.click_script();
        assert!(click.contains("el.click()"));
        assert!(click.contains("return true"));
    }

    #[test]
    fn test_display_descriptions() {
        assert_eq!(
            Locator::css("div.grid").to_string(),
            "css selector 'div.grid'"
        );
        assert_eq!(
            Locator::role("menuitem", "English").to_string(),
            "menuitem 'English'"
        );
        assert_eq!(
            Locator::button_text("Add to Cart").to_string(),
            "button with text 'Add to Cart'"
        );
    }
}
