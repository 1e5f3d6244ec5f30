//! # lucide-view
//!
//! UI-facing icon views built on any [`FontProvider`].
//!
//! ## Architecture
//!
//! ```text
//! IconView (declarative)            IconLayerView (imperative)
//!   icon, size                        icon, icon_size, tint, bounds
//!     │ body(fonts)                     │ setters push into the layer
//!     ▼                                 ▼
//!   GlyphText                         TextLayer (font refreshed on render)
//! ```
//!
//! Both implement [`ViewBinding`], so a host toolkit can drive either
//! with the same render call.

pub mod binding;
pub mod geometry;
pub mod icon_view;
pub mod layer_view;
pub mod text;

#[cfg(test)]
mod testing;

pub use binding::ViewBinding;
pub use geometry::{Rect, Size};
pub use icon_view::IconView;
pub use layer_view::{Alignment, Appearance, IconLayerView, TextLayer, ThemedColor};
pub use lucide_core::{FontProvider, Icon};
pub use text::{GlyphText, IconText};
