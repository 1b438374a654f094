//! Rendering module
//!
//! The simulation never draws. [`frame_for`] maps a session onto a
//! [`Frame`] descriptor, and [`present`] replays it onto whatever
//! [`RenderAdapter`] the host provides (canvas, terminal, test recorder).

pub mod frame;

pub use frame::{
    Circle, Frame, GameScreen, ImageId, MenuScreen, Sprite, Text, TextAlign, colors, frame_for,
};

/// Drawing surface supplied by the host
pub trait RenderAdapter {
    /// Wipe the previous frame
    fn clear(&mut self, width: f32, height: f32);
    fn stroke_circle(&mut self, circle: &Circle);
    fn draw_image(&mut self, sprite: &Sprite);
    fn fill_text(&mut self, text: &Text);
}

/// Draw a frame: clear, then ball, paddle and blocks (or the two menu lines)
pub fn present<R: RenderAdapter + ?Sized>(frame: &Frame, adapter: &mut R) {
    match frame {
        Frame::Menu(menu) => {
            adapter.clear(menu.width, menu.height);
            adapter.fill_text(&menu.title);
            adapter.fill_text(&menu.prompt);
        }
        Frame::Game(screen) => {
            adapter.clear(screen.width, screen.height);
            adapter.stroke_circle(&screen.ball);
            adapter.draw_image(&screen.paddle);
            for block in &screen.blocks {
                adapter.draw_image(block);
            }
        }
    }
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Circle(Circle),
    Image(Sprite),
    Text(Text),
}

/// Adapter that records draw calls instead of rasterizing.
///
/// Like a real surface, clearing discards the previous frame, so
/// `commands` always holds the latest frame only.
#[derive(Debug, Clone, Default)]
pub struct RecordingAdapter {
    pub commands: Vec<DrawCommand>,
    /// Clears seen so far
    pub frames: u64,
}

impl RenderAdapter for RecordingAdapter {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
        self.frames += 1;
    }

    fn stroke_circle(&mut self, circle: &Circle) {
        self.commands.push(DrawCommand::Circle(*circle));
    }

    fn draw_image(&mut self, sprite: &Sprite) {
        self.commands.push(DrawCommand::Image(*sprite));
    }

    fn fill_text(&mut self, text: &Text) {
        self.commands.push(DrawCommand::Text(text.clone()));
    }
}
