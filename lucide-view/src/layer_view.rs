//! Imperative icon view backed by a retained text layer.
//!
//! Unlike [`IconView`](crate::icon_view::IconView), this view keeps its
//! layer between frames and pushes property changes into it: the glyph
//! string and tint apply immediately, while a size change only marks the
//! font stale until the next [`render`](IconLayerView::render).

use serde::{Deserialize, Serialize};

use lucide_core::{Color, FontProvider, Icon, IconFont, DEFAULT_ICON_SIZE};

use crate::binding::ViewBinding;
use crate::geometry::{Rect, Size};

/// Light or dark system appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

/// A color that resolves differently per appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemedColor {
    pub light: Color,
    pub dark: Color,
}

impl ThemedColor {
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    pub fn resolve(&self, appearance: Appearance) -> Color {
        match appearance {
            Appearance::Light => self.light,
            Appearance::Dark => self.dark,
        }
    }
}

impl Default for ThemedColor {
    /// Black on light backgrounds, white on dark ones.
    fn default() -> Self {
        Self::new(Color::BLACK, Color::WHITE)
    }
}

impl From<Color> for ThemedColor {
    fn from(color: Color) -> Self {
        Self::new(color, color)
    }
}

/// Horizontal text alignment inside the layer frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Retained text layer state, ready for a compositor to draw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextLayer {
    pub string: String,
    /// `None` until the first render.
    pub font: Option<IconFont>,
    pub font_size: f32,
    pub foreground: Color,
    pub alignment: Alignment,
    pub frame: Rect,
    pub contents_scale: f32,
}

impl Default for TextLayer {
    fn default() -> Self {
        Self {
            string: String::new(),
            font: None,
            font_size: DEFAULT_ICON_SIZE,
            foreground: Color::BLACK,
            alignment: Alignment::Center,
            frame: Rect::ZERO,
            contents_scale: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct IconLayerView {
    icon: Option<Icon>,
    icon_size: f32,
    tint: ThemedColor,
    appearance: Appearance,
    bounds: Rect,
    layer: TextLayer,
    font_stale: bool,
    needs_layout: bool,
}

impl IconLayerView {
    pub fn new(icon: Icon, icon_size: f32) -> Self {
        let mut view = Self::empty();
        view.icon_size = icon_size;
        view.layer.font_size = icon_size;
        view.set_icon(Some(icon));
        view
    }

    /// A view with no icon at the default size.
    pub fn empty() -> Self {
        let tint = ThemedColor::default();
        let appearance = Appearance::default();
        Self {
            icon: None,
            icon_size: DEFAULT_ICON_SIZE,
            tint,
            appearance,
            bounds: Rect::ZERO,
            layer: TextLayer {
                foreground: tint.resolve(appearance),
                ..TextLayer::default()
            },
            font_stale: true,
            needs_layout: false,
        }
    }

    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.layout(frame);
        self
    }

    pub fn icon(&self) -> Option<Icon> {
        self.icon
    }

    pub fn icon_size(&self) -> f32 {
        self.icon_size
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn layer(&self) -> &TextLayer {
        &self.layer
    }

    pub fn is_font_stale(&self) -> bool {
        self.font_stale
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Clear the layout flag, returning whether it was set.
    pub fn take_needs_layout(&mut self) -> bool {
        std::mem::take(&mut self.needs_layout)
    }

    pub fn set_icon(&mut self, icon: Option<Icon>) {
        self.icon = icon;
        self.layer.string = icon.map(|icon| icon.as_str().to_string()).unwrap_or_default();
    }

    pub fn set_icon_size(&mut self, size: f32) {
        if self.icon_size == size {
            return;
        }
        self.icon_size = size;
        self.layer.font_size = size;
        self.font_stale = true;
        self.needs_layout = true;
    }

    pub fn tint_color(&self) -> ThemedColor {
        self.tint
    }

    pub fn set_tint_color(&mut self, tint: impl Into<ThemedColor>) {
        self.tint = tint.into();
        self.layer.foreground = self.tint.resolve(self.appearance);
    }

    /// Re-resolve the tint after a light/dark switch. No-op when the
    /// appearance did not change.
    pub fn appearance_changed(&mut self, previous: Option<Appearance>, current: Appearance) {
        self.appearance = current;
        if previous == Some(current) {
            return;
        }
        log::debug!("Appearance changed to {current:?}, re-applying tint");
        self.layer.foreground = self.tint.resolve(current);
    }

    pub fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.layer.frame = bounds;
    }

    pub fn intrinsic_size(&self) -> Size {
        Size::square(self.icon_size)
    }

    pub fn set_contents_scale(&mut self, scale: f32) {
        self.layer.contents_scale = scale;
    }

    /// Refresh a stale font and return the layer.
    ///
    /// If the icon font is unavailable the unresolved font is still
    /// installed and the font stays stale, so the next render retries.
    pub fn render(&mut self, fonts: &mut dyn FontProvider) -> &TextLayer {
        if self.font_stale {
            let font = fonts.font(self.icon_size);
            self.font_stale = !font.is_resolved();
            self.layer.font = Some(font);
        }
        &self.layer
    }
}

impl Default for IconLayerView {
    fn default() -> Self {
        Self::empty()
    }
}

impl ViewBinding for IconLayerView {
    type Output = TextLayer;

    fn render(&mut self, fonts: &mut dyn FontProvider) -> TextLayer {
        IconLayerView::render(self, fonts).clone()
    }
}
