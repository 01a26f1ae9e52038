//! Font store resource.
//!
//! A non-send resource that stores loaded fonts keyed by string IDs.
//! [`DynamicText`](crate::components::dynamictext::DynamicText) refers to its
//! font by key. Fonts are either loaded from a file or borrowed from raylib's
//! built-in default font.
//!
//! Note: This is a non-send resource because Raylib fonts must be accessed
//! from the main thread only.

use raylib::ffi;
use raylib::prelude::{Font, WeakFont};
use rustc_hash::FxHashMap;

/// Key under which the wheel's message font is stored.
pub const MESSAGE_FONT: &str = "message";

/// A font owned by the store, or raylib's default font.
pub enum StoredFont {
    /// Loaded from a file; unloaded when dropped.
    Loaded(Font),
    /// Raylib's built-in font; owned by raylib itself.
    Builtin(WeakFont),
}

impl AsRef<ffi::Font> for StoredFont {
    fn as_ref(&self) -> &ffi::Font {
        match self {
            StoredFont::Loaded(font) => font.as_ref(),
            StoredFont::Builtin(font) => font.as_ref(),
        }
    }
}

/// Map of font keys to loaded fonts.
///
/// This is a non-send resource; use `NonSend<FontStore>` in system parameters.
// NonSend resource: insert with insert_non_send_resource and access via NonSend/NonSendMut
#[derive(Default)]
pub struct FontStore {
    fonts: FxHashMap<String, StoredFont>,
}

impl FontStore {
    /// Create an empty font store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a font with the given key.
    pub fn add(&mut self, id: impl Into<String>, font: StoredFont) {
        self.fonts.insert(id.into(), font);
    }

    /// Get a font by its key.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&StoredFont> {
        self.fonts.get(id.as_ref())
    }

    /// Get the number of loaded fonts.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
