//! Pointer tracking.
//!
//! The field only cares about where the cursor is, so `Input` keeps the latest
//! cursor position in window pixels. Every cursor move overwrites the previous
//! value; the frame loop reads whatever is current when it starts. Turning
//! pixels into plane coordinates is the viewport's job.

use glam::Vec2;
use winit::event::WindowEvent;

/// Latest pointer state.
#[derive(Debug, Default)]
pub struct Input {
    mouse_position: Option<Vec2>,
    escape_pressed: bool,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mouse position in screen pixels, origin top-left.
    ///
    /// `None` until the cursor has entered the window at least once.
    pub fn mouse_position(&self) -> Option<Vec2> {
        self.mouse_position
    }

    pub fn escape_pressed(&self) -> bool {
        self.escape_pressed
    }

    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.mouse_position = Some(Vec2::new(x, y));
    }

    /// Process a winit window event.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.set_cursor(position.x as f32, position.y as f32);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                use winit::keyboard::{KeyCode, PhysicalKey};
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                    && event.state.is_pressed()
                {
                    self.escape_pressed = true;
                }
            }
            _ => {}
        }
    }
}
