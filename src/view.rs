use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::field::ClearField;

/// Renders a [`ClearField`]: left-anchored text with the clear glyph overlaid
/// on the trailing edge while the field holds text.
///
/// No space is reserved for the glyph when it is absent; the decoration is a
/// pure overlay that appears and disappears with the text.
pub struct FieldView<'a> {
    block: Option<Block<'a>>,
    style: Style,
    icon_style: Style,
    placeholder_style: Style,
}

impl Default for FieldView<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FieldView<'a> {
    pub fn new() -> Self {
        Self {
            block: None,
            style: Style::default(),
            icon_style: Style::default().fg(Color::DarkGray),
            placeholder_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn icon_style(mut self, style: Style) -> Self {
        self.icon_style = style;
        self
    }

    pub fn placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    /// Screen position of the caret for a field drawn at `area` (the content
    /// rectangle, inside any block).
    pub fn cursor_position(field: &ClearField, area: Rect) -> (u16, u16) {
        let offset: u16 = field
            .text()
            .chars()
            .take(field.cursor())
            .map(|ch| ch.width().unwrap_or(0) as u16)
            .sum();
        let x = area
            .x
            .saturating_add(offset)
            .min(area.right().saturating_sub(1))
            .max(area.x);
        (x, area.y)
    }
}

impl StatefulWidget for FieldView<'_> {
    type State = ClearField;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ClearField) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if state.is_empty() {
            if let Some(placeholder) = state.placeholder() {
                buf.set_stringn(
                    inner.x,
                    inner.y,
                    placeholder,
                    inner.width as usize,
                    self.placeholder_style,
                );
            }
            return;
        }

        buf.set_stringn(inner.x, inner.y, state.text(), inner.width as usize, self.style);

        if state.icon_visible() {
            let width = state.icon().scaled_width(state.icon_scale());
            let x = inner
                .right()
                .saturating_sub(state.trailing_padding())
                .saturating_sub(width);
            if x >= inner.x {
                buf.set_stringn(
                    x,
                    inner.y,
                    state.icon().symbol(state.icon_scale()),
                    width as usize,
                    self.icon_style,
                );
            }
        }
    }
}
