//! Bidirectional translation between semantic style properties and native
//! element style storage.
//!
//! # Scope
//!
//! This crate implements:
//! - **Style Dispatch Orchestrator** ([CSSOM § 6.4](https://drafts.csswg.org/cssom/#the-cssstyledeclaration-interface))
//!   - `set_style` / `get_style` / `set_styles` / `get_styles` by semantic name
//!   - Property aliasing (`float`, `opacity`) and handler invocation
//!   - Composite-value flattening into display strings
//!
//! - **Opacity Emulator** ([CSS Color Level 4 § 3.2](https://www.w3.org/TR/css-color-4/#transparency))
//!   - Native transparency channel, or legacy `alpha(opacity=N)` filter
//!     emulation with layout forcing
//!   - Visibility toggling at the transparency boundary
//!
//! - **Computed Style Resolver** ([CSS Cascading Level 4 § 4.5](https://www.w3.org/TR/css-cascade-4/#computed))
//!   - Legacy current-style snapshots and window-level view queries
//!   - Float-alias normalization
//!
//! - **Quirk Corrector** ([CSS Box Model Level 3 § 4](https://www.w3.org/TR/css-box-3/#box-model))
//!   - Offset-based width/height recomputation on quirky engine families
//!   - Zero-pixel pinning for unparseable box-edge values
//!
//! # Not owned here
//!
//! The catalogue of which properties exist is supplied externally through
//! the injected [`StyleRegistry`]; the cascade itself lives behind the
//! document's view. This layer has no error surface: every path returns a
//! best-effort value, and callers needing validation check the result
//! (an empty string reads as "unresolvable").

/// Style dispatch orchestration per [CSSOM § 6.4](https://drafts.csswg.org/cssom/#the-cssstyledeclaration-interface).
pub mod engine;
mod opacity;
/// Engine capability profile (feature detection strategy object).
pub mod profile;
/// Box-model quirk correction per [CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/).
pub mod quirk;
/// Per-property handlers and the injected registry.
pub mod registry;
mod resolver;
/// Structured style values and translation per [CSS Values Level 4](https://www.w3.org/TR/css-values-4/).
pub mod value;

pub use engine::{StyleEngine, StyleInput};
pub use profile::{EngineProfile, FloatAlias};
pub use quirk::BoxQuirk;
pub use registry::{
    HandlerKind, NativeValue, RegistryError, Serialized, StyleHandler, StyleRegistry,
};
pub use value::{StyleValue, translate};
