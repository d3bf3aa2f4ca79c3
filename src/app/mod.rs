//! Demo runtime hosting a single [`ClearField`] in a terminal screen.
//!
//! The field sits under a title block, a status line toasts the clear
//! notifications, and mouse capture is enabled so icon taps reach the field.

mod status;
mod terminal;

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use status::StatusLine;
use terminal::TerminalGuard;

use crate::attrs::FieldAttrs;
use crate::field::ClearField;
use crate::listener::ClearedListener;
use crate::view::FieldView;

const HELP_TEXT: &str = "type to edit • click the ✕ to clear • Ctrl+Q quit";
const READY_STATUS: &str = "Ready. Click the ✕ to clear the field.";

#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub tick_rate: Duration,
    pub toast_duration: Duration,
    pub show_help: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            toast_duration: Duration::from_millis(2500),
            show_help: true,
        }
    }
}

enum Notice {
    BeforeClear(String),
    AfterClear,
}

// The hooks only send; effects are applied by the event loop on its own
// thread when it drains the channel.
struct NoticeHooks {
    sender: Sender<Notice>,
}

impl ClearedListener for NoticeHooks {
    fn before_text_cleared(&mut self, text: &str) {
        let _ = self.sender.send(Notice::BeforeClear(text.to_string()));
    }

    fn after_text_cleared(&mut self) {
        let _ = self.sender.send(Notice::AfterClear);
    }
}

/// Interactive demo host for the clearable field.
#[derive(Debug, Default)]
pub struct FieldDemo {
    attrs: FieldAttrs,
    title: Option<String>,
    options: DemoOptions,
}

impl FieldDemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_attrs(attrs: FieldAttrs) -> Self {
        Self {
            attrs,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: DemoOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(self) -> Result<()> {
        let FieldDemo {
            attrs,
            title,
            options,
        } = self;

        let (sender, receiver) = mpsc::channel();
        let mut field = ClearField::from_attrs(&attrs);
        field.set_on_cleared(Some(Box::new(NoticeHooks { sender })));

        let mut app = App::new(field, receiver, title, options);
        app.run()
    }
}

struct App {
    field: ClearField,
    notices: Receiver<Notice>,
    status: StatusLine,
    title: Option<String>,
    options: DemoOptions,
    field_area: Rect,
    should_quit: bool,
}

impl App {
    fn new(
        field: ClearField,
        notices: Receiver<Notice>,
        title: Option<String>,
        options: DemoOptions,
    ) -> Self {
        Self {
            field,
            notices,
            status: StatusLine::new(READY_STATUS),
            title,
            options,
            field_area: Rect::default(),
            should_quit: false,
        }
    }

    fn run(&mut self) -> Result<()> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            self.drain_notices();
            self.status.tick(self.options.toast_duration);
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(self.options.tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(_, _) => {}
                    Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
                }
            }
        }
        Ok(())
    }

    fn drain_notices(&mut self) {
        while let Ok(notice) = self.notices.try_recv() {
            match notice {
                Notice::BeforeClear(text) => {
                    self.status.toast(format!("About to clear text: {text}"));
                }
                Notice::AfterClear => self.status.toast("Text cleared!"),
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if matches!(key.code, KeyCode::Char('q' | 'Q' | 'c' | 'C')) {
                self.should_quit = true;
            }
            return;
        }
        if key.code == KeyCode::Esc {
            self.status.dismiss();
            return;
        }
        self.field.handle_key(&key);
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        self.field.handle_mouse(&mouse, self.field_area);
    }

    fn draw(&mut self, frame: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(frame.area());

        let title = self.title.as_deref().unwrap_or("clearfield demo");
        let block = Block::default().title(title).borders(Borders::ALL);
        self.field_area = block.inner(chunks[0]);
        frame.render_stateful_widget(FieldView::new().block(block), chunks[0], &mut self.field);
        frame.set_cursor_position(FieldView::cursor_position(&self.field, self.field_area));

        self.render_footer(frame, chunks[2]);
    }

    fn render_footer(&self, frame: &mut Frame<'_>, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        if self.options.show_help {
            let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::Yellow));
            frame.render_widget(help, rows[0]);
        }

        let status = Paragraph::new(format!("Status: {}", self.status.message()));
        frame.render_widget(status, rows[1]);
    }
}
