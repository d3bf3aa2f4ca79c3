use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthChar;

use crate::attrs::FieldAttrs;
use crate::icon::{ClearIcon, IconScale};
use crate::listener::ClearedListener;

/// Payload handed to a text-changed observer.
///
/// `icon_visible` is the state already settled for the new text, so an
/// observer always sees visibility and text in agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChanged<'a> {
    pub text: &'a str,
    pub icon_visible: bool,
}

type TextObserver = Box<dyn FnMut(TextChanged<'_>)>;

/// A one-line text field with a tap-to-clear trailing icon.
///
/// The icon overlays the field's trailing edge whenever it holds text and
/// disappears when it is empty. A primary-button press on the icon clears the
/// field and notifies the registered [`ClearedListener`]; presses elsewhere
/// fall through to caret placement.
pub struct ClearField {
    buffer: String,
    cursor: usize, // char index into `buffer`
    icon: ClearIcon,
    icon_visible: bool,
    icon_scale: IconScale,
    trailing_padding: u16,
    placeholder: Option<String>,
    listener: Option<Box<dyn ClearedListener>>,
    text_observer: Option<TextObserver>,
}

impl fmt::Debug for ClearField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClearField")
            .field("buffer", &self.buffer)
            .field("cursor", &self.cursor)
            .field("icon", &self.icon)
            .field("icon_visible", &self.icon_visible)
            .field("icon_scale", &self.icon_scale)
            .field("trailing_padding", &self.trailing_padding)
            .field("listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for ClearField {
    fn default() -> Self {
        Self::new()
    }
}

impl ClearField {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            icon: ClearIcon::default(),
            icon_visible: false,
            icon_scale: IconScale::default(),
            trailing_padding: 0,
            placeholder: None,
            listener: None,
            text_observer: None,
        }
    }

    pub fn with_icon_scale(mut self, scale: IconScale) -> Self {
        self.icon_scale = scale;
        self
    }

    /// Supplies the clear decoration explicitly instead of the default ✕.
    pub fn with_icon(mut self, icon: ClearIcon) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.buffer = text.into();
        self.cursor = self.buffer.chars().count();
        self.icon_visible = !self.buffer.is_empty();
        self
    }

    pub fn with_trailing_padding(mut self, padding: u16) -> Self {
        self.trailing_padding = padding;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Builds a field from a declarative attribute set, the equivalent of
    /// inflating the widget from a layout description.
    pub fn from_attrs(attrs: &FieldAttrs) -> Self {
        let mut field = Self::new()
            .with_icon_scale(attrs.icon_scale)
            .with_trailing_padding(attrs.trailing_padding)
            .with_text(attrs.text.clone());
        field.placeholder = attrs.placeholder.clone();
        field
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn icon_visible(&self) -> bool {
        self.icon_visible
    }

    pub fn icon(&self) -> &ClearIcon {
        &self.icon
    }

    pub fn icon_scale(&self) -> IconScale {
        self.icon_scale
    }

    pub fn trailing_padding(&self) -> u16 {
        self.trailing_padding
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Caret position as a char index into the text.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the icon scale. The new size shows the next time the field is
    /// drawn, if the icon is visible.
    pub fn set_icon_scale(&mut self, scale: IconScale) {
        self.icon_scale = scale;
    }

    /// Registers the single clear-listener slot, dropping any previous
    /// listener. `None` unregisters.
    pub fn set_on_cleared(&mut self, listener: Option<Box<dyn ClearedListener>>) {
        self.listener = listener;
    }

    /// Registers an observer invoked after every text mutation, once icon
    /// visibility has settled for the new text.
    pub fn set_on_text_changed(&mut self, observer: Option<TextObserver>) {
        self.text_observer = observer;
    }

    /// Programmatic replace of the whole text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.buffer.chars().count();
        self.text_mutated();
    }

    /// Applies a key event to the editing buffer. Returns whether the event
    /// was handled.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.buffer.insert(at, ch);
                self.cursor += 1;
                self.text_mutated();
                true
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let at = self.byte_offset(self.cursor);
                self.buffer.remove(at);
                self.text_mutated();
                true
            }
            KeyCode::Delete => {
                if self.cursor >= self.char_count() {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.buffer.remove(at);
                self.text_mutated();
                true
            }
            KeyCode::Left => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                true
            }
            KeyCode::Right => {
                if self.cursor >= self.char_count() {
                    return false;
                }
                self.cursor += 1;
                true
            }
            KeyCode::Home => {
                let moved = self.cursor != 0;
                self.cursor = 0;
                moved
            }
            KeyCode::End => {
                let end = self.char_count();
                let moved = self.cursor != end;
                self.cursor = end;
                moved
            }
            _ => false,
        }
    }

    /// Routes a mouse event delivered to a field drawn at `area`, the field's
    /// content rectangle at the instant of the event.
    ///
    /// A primary-button press on the visible icon is consumed: the listener's
    /// `before_text_cleared` fires with the current text, the field empties,
    /// then `after_text_cleared` fires. Any other press inside the area
    /// places the caret and is not consumed.
    pub fn handle_mouse(&mut self, mouse: &MouseEvent, area: Rect) -> bool {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return false;
        }
        if !area.contains(Position::new(mouse.column, mouse.row)) {
            return false;
        }
        if self.icon_visible && mouse.column >= self.icon_hit_start(area) {
            self.clear_from_icon();
            return true;
        }
        self.place_caret(mouse.column - area.x);
        false
    }

    /// Leftmost column of the icon's hit span for a field drawn at `area`:
    /// right edge minus trailing padding minus the icon's intrinsic width.
    /// The span covers the intrinsic width whatever the current tier renders.
    pub fn icon_hit_start(&self, area: Rect) -> u16 {
        area.right()
            .saturating_sub(self.trailing_padding)
            .saturating_sub(self.icon.intrinsic_width())
    }

    fn clear_from_icon(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener.before_text_cleared(&self.buffer);
        }
        self.buffer.clear();
        self.cursor = 0;
        self.text_mutated();
        if let Some(listener) = self.listener.as_mut() {
            listener.after_text_cleared();
        }
    }

    fn place_caret(&mut self, column: u16) {
        let mut width = 0u16;
        let mut index = 0usize;
        for ch in self.buffer.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if column < width + w {
                break;
            }
            width += w;
            index += 1;
        }
        self.cursor = index;
    }

    // Invariant: `icon_visible` matches the buffer before any observer runs.
    fn text_mutated(&mut self) {
        self.icon_visible = !self.buffer.is_empty();
        if let Some(observer) = self.text_observer.as_mut() {
            observer(TextChanged {
                text: &self.buffer,
                icon_visible: self.icon_visible,
            });
        }
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(at, _)| at)
            .unwrap_or(self.buffer.len())
    }
}
