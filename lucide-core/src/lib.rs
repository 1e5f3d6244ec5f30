//! # lucide-core
//!
//! Host-independent half of the Lucide icon font helpers: the icon
//! table, styled strings, bitmaps, configuration, and the capability
//! traits a text stack implements to register and draw the font.
//!
//! ## Architecture
//!
//! ```text
//! Icon ──► format::styled_string() ──► StyledString
//!               │
//!               ▼
//!        FontProvider (host)  ◄── RegistrationGuard (once-only)
//!               │
//!               ▼
//!        Rasterizer (host) ──► Bitmap
//! ```
//!
//! - **`icon`** — icon identifiers and their code points.
//! - **`format`** — icon → styled string, host font harmonization.
//! - **`provider`** — `FontProvider` / `Rasterizer` capability traits.
//! - **`registration`** — once-only registration guard.
//! - **`config`** — icon font configuration and asset sources.

pub mod bitmap;
pub mod color;
pub mod config;
pub mod error;
pub mod format;
pub mod icon;
pub mod provider;
pub mod registration;
pub mod style;

// Re-exports for ergonomic use.
pub use bitmap::Bitmap;
pub use color::Color;
pub use config::{AssetSource, IconFontConfig};
pub use error::IconError;
pub use format::{
    attributes, attributes_for, harmonized_size, styled_string, styled_string_for,
    DEFAULT_BASELINE_OFFSET, DEFAULT_ICON_SIZE,
};
pub use icon::Icon;
pub use provider::{FontProvider, Rasterizer};
pub use registration::RegistrationGuard;
pub use style::{FontStyle, HostFont, IconFont, StyleAttributes, StyledString};
