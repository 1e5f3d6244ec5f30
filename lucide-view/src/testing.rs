//! Test font host shared by the view tests.

use lucide_core::{FontProvider, FontStyle, IconFont};

/// Registers on first use (optionally failing a number of times) and
/// counts both registrations and font requests.
pub(crate) struct CountingFonts {
    pub fail_registrations: usize,
    pub registrations: usize,
    pub lookups: usize,
    registered: bool,
}

impl CountingFonts {
    pub fn new() -> Self {
        Self {
            fail_registrations: 0,
            registrations: 0,
            lookups: 0,
            registered: false,
        }
    }

    pub fn failing(times: usize) -> Self {
        Self {
            fail_registrations: times,
            ..Self::new()
        }
    }
}

impl FontProvider for CountingFonts {
    fn family(&self) -> &str {
        "lucide"
    }

    fn ensure_registered(&mut self) -> bool {
        if !self.registered {
            self.registrations += 1;
            if self.fail_registrations > 0 {
                self.fail_registrations -= 1;
            } else {
                self.registered = true;
            }
        }
        self.registered
    }

    fn lookup(&self, size: f32, style: FontStyle) -> Option<IconFont> {
        (self.registered && style == FontStyle::Normal)
            .then(|| IconFont::new("lucide", size, style))
    }

    fn font(&mut self, size: f32) -> IconFont {
        self.lookups += 1;
        match self.try_font(size) {
            Ok(font) => font,
            Err(_) => IconFont::unresolved("lucide", size),
        }
    }
}
