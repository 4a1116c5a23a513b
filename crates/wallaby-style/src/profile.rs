//! Host rendering engine capability profile.
//!
//! Feature differences between engines (native transparency support, the
//! native name of the `float` property, box-model reporting behavior) are
//! detected once and captured here as a strategy object, instead of being
//! re-tested with scattered conditionals throughout the read/write paths.

use serde::Serialize;
use strum_macros::Display;

use crate::quirk::BoxQuirk;

/// Capabilities of the host rendering engine, fixed for the engine's
/// lifetime and injected into the style engine at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineProfile {
    /// Whether the engine supports the native `opacity` channel
    /// ([CSS Color Level 4 § 3.2](https://www.w3.org/TR/css-color-4/#transparency)).
    /// Without it, transparency is emulated through a legacy filter string.
    pub native_opacity: bool,
    /// The native name of the `float` property in style storage.
    pub float_alias: FloatAlias,
    /// The engine's box-model reporting quirk family.
    pub box_quirk: BoxQuirk,
}

impl EngineProfile {
    /// A standards-conformant engine: native opacity, `cssFloat`, no quirks.
    pub fn standard() -> Self {
        Self {
            native_opacity: true,
            float_alias: FloatAlias::CssFloat,
            box_quirk: BoxQuirk::None,
        }
    }

    /// A Trident-family legacy engine: filter-emulated opacity,
    /// `styleFloat`, non-numeric computed box values.
    pub fn legacy_explorer() -> Self {
        Self {
            native_opacity: false,
            float_alias: FloatAlias::StyleFloat,
            box_quirk: BoxQuirk::NonNumericComputed,
        }
    }

    /// A Presto-family engine: native opacity and `cssFloat`, but resolved
    /// width/height report used values including box components.
    pub fn presto() -> Self {
        Self {
            native_opacity: true,
            float_alias: FloatAlias::CssFloat,
            box_quirk: BoxQuirk::UsedValueReporting,
        }
    }
}

impl Default for EngineProfile {
    fn default() -> Self {
        Self::standard()
    }
}

/// Native storage name of the `float` property.
///
/// `float` is a reserved word in host scripting environments, so engines
/// store it under an alias; which one depends on the engine family. The
/// `Display` form is the exact native key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum FloatAlias {
    /// The standard alias (`cssFloat`).
    #[strum(serialize = "cssFloat")]
    CssFloat,
    /// The Trident-family alias (`styleFloat`).
    #[strum(serialize = "styleFloat")]
    StyleFloat,
}
