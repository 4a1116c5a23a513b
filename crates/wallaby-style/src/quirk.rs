//! Box-model quirk correction for engines with inconsistent reporting.
//!
//! [CSS Box Model Level 3 § 4](https://www.w3.org/TR/css-box-3/#box-model)
//!
//! Some engine families fold border and padding into the resolved `width`
//! and `height`, or report box-edge properties as non-numeric keywords. The
//! corrector recomputes the intended content dimension from the measured
//! offset dimension minus the border and padding on the two relevant sides,
//! and pins unparseable box-edge values to `0px`.

use serde::Serialize;
use wallaby_dom::{Document, NodeId};

use crate::engine::StyleEngine;
use crate::value::parse_leading_float;

/// Box-model reporting quirk family, selected once by feature detection as
/// part of the engine profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BoxQuirk {
    /// Standards-conformant reporting; reads pass through untouched.
    None,
    /// Presto-family: resolved width/height always report used values with
    /// box components folded in, so the content dimension is recomputed.
    UsedValueReporting,
    /// Trident-family: resolved box values may be non-numeric keywords
    /// (`auto`, `medium`); correction applies only when the result does not
    /// parse as a number.
    NonNumericComputed,
}

impl BoxQuirk {
    /// Correct `resolved` for the native `property` slot, if this quirk
    /// family calls for it. Returns `None` when the resolved value stands.
    pub(crate) fn correct(
        self,
        engine: &StyleEngine,
        doc: &Document,
        id: NodeId,
        property: &str,
        resolved: &str,
    ) -> Option<String> {
        match self {
            BoxQuirk::None => return None,
            BoxQuirk::UsedValueReporting => {}
            BoxQuirk::NonNumericComputed => {
                if parse_leading_float(resolved).is_some() {
                    return None;
                }
            }
        }

        if property == "width" || property == "height" {
            return Some(self.recompute_dimension(engine, doc, id, property)?);
        }
        // Presto reports box-edge properties in px already; leave those be.
        if self == BoxQuirk::UsedValueReporting && resolved.contains("px") {
            return None;
        }
        if is_box_edge_property(property) {
            return Some("0px".to_string());
        }
        None
    }

    /// Intended content dimension: measured offset dimension minus border
    /// and padding on the two relevant sides, with a px suffix.
    fn recompute_dimension(
        self,
        engine: &StyleEngine,
        doc: &Document,
        id: NodeId,
        property: &str,
    ) -> Option<String> {
        let element = doc.tree.as_element(id)?;
        let (sides, offset) = if property == "width" {
            (["left", "right"], element.offset_width)
        } else {
            (["top", "bottom"], element.offset_height)
        };
        let mut edges = 0.0;
        for side in sides {
            let border = engine.get_style(doc, id, &format!("border-{side}-width"));
            let padding = engine.get_style(doc, id, &format!("padding-{side}"));
            edges += parse_leading_float(&border).unwrap_or(0.0)
                + parse_leading_float(&padding).unwrap_or(0.0);
        }
        Some(format!("{}px", offset - edges))
    }
}

/// Whether a native (camelCase) slot belongs to the border-width, margin,
/// or padding family the zero-pixel fallback covers.
fn is_box_edge_property(property: &str) -> bool {
    (property.starts_with("border")
        && property.ends_with("Width")
        && property.len() > "borderWidth".len())
        || property.contains("margin")
        || property.contains("padding")
}
