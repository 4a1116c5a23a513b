//! Opacity emulation and readback.
//!
//! [CSS Color Level 4 § 3.2](https://www.w3.org/TR/css-color-4/#transparency)
//!
//! "The opacity property... applies the whole element... a `<number>` in the
//! range [0,1]."
//!
//! Engines without the native channel emulate transparency through a legacy
//! filter token, `alpha(opacity=N)` with N in 0..=100. Full opacity is
//! encoded as the absence of the token, never as a literal 100, so clearing
//! opacity restores the element's pre-opacity filter string exactly.

use wallaby_common::warning::warn_once;
use wallaby_dom::{Document, NodeId};

use crate::engine::StyleEngine;

/// Fixed prefix of the legacy filter token (matched case-insensitively).
const ALPHA_PREFIX: &str = "alpha(opacity=";

impl StyleEngine {
    /// Set the element's opacity to `opacity` in `[0.0, 1.0]`.
    ///
    /// Toggles visibility at the transparency boundary: exactly 0 hides the
    /// element, anything else shows it, and a visibility already in the
    /// target state is left untouched. The channel itself is then written
    /// natively or encoded into the element's filter string, depending on
    /// the engine profile.
    pub fn set_opacity(&self, doc: &mut Document, id: NodeId, opacity: f64) {
        if !opacity.is_finite() {
            warn_once("Style", &format!("opacity value {opacity} is not finite, ignoring"));
            return;
        }
        {
            let Some(element) = doc.tree.as_element_mut(id) else {
                return;
            };
            let visibility = element.style.value("visibility").unwrap_or("").to_string();
            if opacity <= 0.0 {
                if visibility != "hidden" {
                    element.style.set_value("visibility", "hidden");
                }
            } else if visibility != "visible" {
                element.style.set_value("visibility", "visible");
            }
        }
        self.apply_opacity(doc, id, opacity);
    }

    /// Write the transparency channel without touching visibility.
    fn apply_opacity(&self, doc: &mut Document, id: NodeId, opacity: f64) {
        {
            let Some(element) = doc.tree.as_element_mut(id) else {
                return;
            };
            // Filter effects only render on elements that have layout;
            // forcing layout through zoom may alter rendering metrics on
            // legacy engines, a known trade-off of the emulation.
            let lacks_layout = element
                .current_style
                .as_ref()
                .is_none_or(|current| !current.has_layout);
            if lacks_layout {
                element.style.set_value("zoom", "1");
            }
            if self.profile().native_opacity {
                element.style.set_value("opacity", opacity.to_string());
                return;
            }
        }
        let scaled = (opacity * 100.0).clamp(0.0, 100.0).round();
        let token = if scaled >= 100.0 {
            String::new()
        } else {
            format!("{ALPHA_PREFIX}{scaled})")
        };
        let filter = self.effective_filter(doc, id).unwrap_or_default();
        let rewritten = match find_alpha_token(&filter) {
            Some(span) => format!("{}{}{}", &filter[..span.start], token, &filter[span.end..]),
            None => format!("{filter}{token}"),
        };
        let Some(element) = doc.tree.as_element_mut(id) else {
            return;
        };
        element.style.set_value("filter", rewritten);
    }

    /// Read the element's opacity as a number in `[0.0, 1.0]`.
    ///
    /// The native channel reads back directly (empty means fully opaque);
    /// the emulated channel parses the filter token and divides by 100. No
    /// token, no filter, or an unparseable channel all read as 1.
    pub fn get_opacity(&self, doc: &Document, id: NodeId) -> f64 {
        if self.profile().native_opacity {
            let channel = doc
                .tree
                .as_element(id)
                .and_then(|element| element.style.value("opacity").map(str::to_string))
                .filter(|value| !value.is_empty())
                .or_else(|| {
                    self.get_computed_style(doc, id, "opacity")
                        .filter(|value| !value.is_empty())
                });
            return channel
                .and_then(|value| value.parse::<f64>().ok())
                .unwrap_or(1.0);
        }
        match self.effective_filter(doc, id) {
            Some(filter) => {
                find_alpha_token(&filter).map_or(1.0, |span| span.operand / 100.0)
            }
            None => 1.0,
        }
    }

    /// The element's filter string: inline if declared, else resolved.
    fn effective_filter(&self, doc: &Document, id: NodeId) -> Option<String> {
        doc.tree
            .as_element(id)
            .and_then(|element| element.style.value("filter").map(str::to_string))
            .filter(|filter| !filter.is_empty())
            .or_else(|| {
                self.get_computed_style(doc, id, "filter")
                    .filter(|filter| !filter.is_empty())
            })
    }
}

/// A located `alpha(opacity=N)` token within a filter string.
struct AlphaToken {
    /// Byte offset of the token start.
    start: usize,
    /// Byte offset one past the closing parenthesis.
    end: usize,
    /// The numeric operand N.
    operand: f64,
}

/// Scan `filter` for the fixed alpha token pattern, case-insensitively.
fn find_alpha_token(filter: &str) -> Option<AlphaToken> {
    let lower = filter.to_ascii_lowercase();
    let mut from = 0;
    while let Some(found) = lower[from..].find(ALPHA_PREFIX) {
        let start = from + found;
        let digits_start = start + ALPHA_PREFIX.len();
        let digits_end = lower[digits_start..]
            .find(|ch: char| !ch.is_ascii_digit() && ch != '.')
            .map_or(lower.len(), |offset| digits_start + offset);
        if digits_end > digits_start && lower[digits_end..].starts_with(')') {
            if let Ok(operand) = filter[digits_start..digits_end].parse::<f64>() {
                return Some(AlphaToken {
                    start,
                    end: digits_end + 1,
                    operand,
                });
            }
        }
        from = digits_start;
    }
    None
}
