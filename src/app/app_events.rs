use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use std::io;

use super::app_state::App;
use super::mouse_events;
use crate::carousel::ScrollDirection;

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.tick();

        if event::poll(self.poll_timeout())? {
            let event = event::read()?;
            self.handle_event(event);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => {
                mouse_events::handle_mouse_event(self, mouse_event);
            }
            Event::Resize(width, height) => {
                self.resize(Rect::new(0, 0, width, height));
            }
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.activate_control(ScrollDirection::Left);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.activate_control(ScrollDirection::Right);
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                self.apply_coupon(index);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
