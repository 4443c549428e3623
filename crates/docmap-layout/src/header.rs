//! Site header chrome.
//!
//! The header hides itself while scrolling down a page with dynamic
//! search, and becomes transparent while the search hero is visible. The
//! style is computed from [`HeaderFlags`] by [`HeaderStyle::from_flags`];
//! nothing here observes scrolling directly.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Header height in pixels.
pub const HEADER_HEIGHT: i32 = 80;

/// Viewport width in pixels at or below which the mobile rule applies.
pub const MOBILE_BREAKPOINT: u32 = 640;

const BACKGROUND: &str = "#fff";
const TRANSPARENT: &str = "transparent";
const BORDER: &str = "1px solid #eaeaea";
const TRANSPARENT_BORDER: &str = "1px solid transparent";

/// Scroll and search state supplied by the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderFlags {
    /// The page scrolled past the hide threshold.
    pub hide_header: bool,
    /// The page has a search hero that the header search defers to.
    pub dynamic_search: bool,
    /// The header search box is hidden in favor of the hero.
    pub hide_header_search: bool,
    /// The page is scrolled to the top.
    pub is_top: bool,
}

impl Default for HeaderFlags {
    fn default() -> Self {
        Self {
            hide_header: false,
            dynamic_search: false,
            hide_header_search: true,
            is_top: false,
        }
    }
}

/// CSS `position` of the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Scrolls away with the page.
    Absolute,
    /// Pinned to the viewport.
    Fixed,
}

impl Position {
    fn as_css(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
        }
    }
}

/// Header style for one breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderRule {
    /// CSS position.
    pub position: Position,
    /// Vertical offset in pixels (negative when hidden).
    pub top: i32,
    /// Background color.
    pub background: &'static str,
    /// Bottom border, `None` for no border.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<&'static str>,
}

/// Header style for desktop and mobile viewports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeaderStyle {
    /// Rule for viewports wider than [`MOBILE_BREAKPOINT`].
    pub desktop: HeaderRule,
    /// Rule for viewports up to [`MOBILE_BREAKPOINT`].
    pub mobile: HeaderRule,
}

impl HeaderStyle {
    /// Compute the header style for the given flags.
    #[must_use]
    pub fn from_flags(flags: HeaderFlags) -> Self {
        let top = if flags.hide_header && flags.dynamic_search {
            -HEADER_HEIGHT
        } else {
            0
        };

        let hero_visible = flags.hide_header_search && flags.dynamic_search;
        let desktop = if hero_visible {
            HeaderRule {
                position: Position::Absolute,
                top,
                background: TRANSPARENT,
                border_bottom: None,
            }
        } else {
            HeaderRule {
                position: Position::Fixed,
                top,
                background: BACKGROUND,
                border_bottom: Some(BORDER),
            }
        };

        let transparent_on_mobile = flags.is_top && flags.dynamic_search;
        let mobile = HeaderRule {
            position: Position::Fixed,
            top,
            background: if transparent_on_mobile {
                TRANSPARENT
            } else {
                BACKGROUND
            },
            border_bottom: Some(if transparent_on_mobile {
                TRANSPARENT_BORDER
            } else {
                BORDER
            }),
        };

        Self { desktop, mobile }
    }

    /// Render the style as CSS for a `header` element.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        css.push_str("header {\n");
        let _ = writeln!(css, "  height: {HEADER_HEIGHT}px;");
        write_rule(&mut css, &self.desktop, "  ");
        css.push_str("  transition: all 0.2s ease;\n}\n");

        let _ = writeln!(css, "@media (max-width: {MOBILE_BREAKPOINT}px) {{");
        css.push_str("  header {\n");
        write_rule(&mut css, &self.mobile, "    ");
        css.push_str("  }\n}\n");
        css
    }
}

fn write_rule(css: &mut String, rule: &HeaderRule, indent: &str) {
    let _ = writeln!(css, "{indent}position: {};", rule.position.as_css());
    if rule.top == 0 {
        let _ = writeln!(css, "{indent}top: 0;");
    } else {
        let _ = writeln!(css, "{indent}top: {}px;", rule.top);
    }
    let _ = writeln!(css, "{indent}background: {};", rule.background);
    if let Some(border) = rule.border_bottom {
        let _ = writeln!(css, "{indent}border-bottom: {border};");
    }
}
