//! # lucide-text
//!
//! `cosmic-text` host for the Lucide icon font: registers the font into
//! a `FontSystem`, hands out font handles, and rasterizes icons through
//! the swash cache.
//!
//! ## Architecture
//!
//! ```text
//! IconEngine (cosmic-text FontSystem + SwashCache)
//!     │
//!     ├── FontProvider: ensure_registered() / lookup()
//!     │
//!     └── Rasterizer: rasterize(icon, size, color) ──► Bitmap (LRU cached)
//!
//! shared::{font, styled_string, image}  ◄── process-wide engine
//! ```
//!
//! - **`engine`** — font registration, face lookup.
//! - **`raster`** — glyph layout and rasterization.
//! - **`shared`** — lazily created process-wide engine.

pub mod engine;
pub mod raster;
pub mod shared;

// Re-exports for ergonomic use.
pub use engine::IconEngine;
pub use lucide_core::{Bitmap, Color, FontProvider, Icon, IconFontConfig, Rasterizer};
