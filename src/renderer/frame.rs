//! Render descriptors
//!
//! A [`Frame`] is a pure function of the session. Adapters turn it into
//! pixels; nothing here draws.

use serde::{Deserialize, Serialize};

use crate::consts::{MENU_PROMPT_Y, MENU_TITLE_Y};
use crate::sim::{Ball, Block, GamePhase, Paddle, Session};

pub const TITLE_INACTIVE: &str = "Block Breaker";
pub const TITLE_LOSE: &str = "You lost!";
pub const TITLE_WIN: &str = "You won!";
pub const PROMPT: &str = "Click the canvas to start the game";

/// Colors for game elements
pub mod colors {
    pub const TEXT: [f32; 4] = [0.16, 0.16, 0.16, 1.0]; // #292929
    pub const BALL_STROKE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Center,
}

/// A line of text anchored at (x, y) baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
    pub x: f32,
    pub y: f32,
    pub size_px: u32,
    pub bold: bool,
    pub align: TextAlign,
    pub color: [f32; 4],
}

/// Stroked circle outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: [f32; 4],
}

/// The two bitmap assets the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageId {
    Paddle,
    Block,
}

/// An image stretched over a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub image: ImageId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Static message screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuScreen {
    /// Phase the menu is shown for
    pub phase: GamePhase,
    pub width: f32,
    pub height: f32,
    pub title: Text,
    pub prompt: Text,
}

/// In-round snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameScreen {
    pub width: f32,
    pub height: f32,
    pub ball: Circle,
    pub paddle: Sprite,
    pub blocks: Vec<Sprite>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Frame {
    Menu(MenuScreen),
    Game(GameScreen),
}

/// Map the current session to what should be on screen
pub fn frame_for(session: &Session) -> Frame {
    let width = session.config().arena.width as f32;
    let height = session.config().arena.height as f32;

    let title = match session.phase {
        GamePhase::Active => {
            if let (Some(ball), Some(paddle)) = (&session.ball, &session.paddle) {
                return Frame::Game(GameScreen {
                    width,
                    height,
                    ball: ball_circle(ball),
                    paddle: paddle_sprite(paddle),
                    blocks: session.blocks.iter().map(block_sprite).collect(),
                });
            }
            TITLE_INACTIVE
        }
        GamePhase::Inactive => TITLE_INACTIVE,
        GamePhase::Lose => TITLE_LOSE,
        GamePhase::Win => TITLE_WIN,
    };

    Frame::Menu(menu_screen(session.phase, title, width, height))
}

fn menu_screen(phase: GamePhase, title: &str, width: f32, height: f32) -> MenuScreen {
    let center = width / 2.0;
    MenuScreen {
        phase,
        width,
        height,
        title: Text {
            content: title.to_string(),
            x: center,
            y: MENU_TITLE_Y,
            size_px: 22,
            bold: true,
            align: TextAlign::Center,
            color: colors::TEXT,
        },
        prompt: Text {
            content: PROMPT.to_string(),
            x: center,
            y: MENU_PROMPT_Y,
            size_px: 14,
            bold: false,
            align: TextAlign::Center,
            color: colors::TEXT,
        },
    }
}

fn ball_circle(ball: &Ball) -> Circle {
    Circle {
        x: ball.pos.x as f32,
        y: ball.pos.y as f32,
        radius: ball.radius as f32,
        color: colors::BALL_STROKE,
    }
}

fn paddle_sprite(paddle: &Paddle) -> Sprite {
    Sprite {
        image: ImageId::Paddle,
        x: paddle.pos.x,
        y: paddle.pos.y,
        width: paddle.width,
        height: paddle.height,
    }
}

fn block_sprite(block: &Block) -> Sprite {
    Sprite {
        image: ImageId::Block,
        x: block.pos.x,
        y: block.pos.y,
        width: block.width,
        height: block.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_menu_titles_follow_phase() {
        let mut session = Session::new(GameConfig::default(), 1);
        let title_of = |s: &Session| match frame_for(s) {
            Frame::Menu(menu) => menu.title.content,
            Frame::Game(_) => panic!("expected menu"),
        };

        assert_eq!(title_of(&session), TITLE_INACTIVE);
        session.phase = GamePhase::Lose;
        assert_eq!(title_of(&session), TITLE_LOSE);
        session.phase = GamePhase::Win;
        assert_eq!(title_of(&session), TITLE_WIN);
    }

    #[test]
    fn test_menu_layout() {
        let session = Session::new(GameConfig::default(), 1);
        let Frame::Menu(menu) = frame_for(&session) else {
            panic!("expected menu");
        };
        assert_eq!(menu.title.x, 150.0);
        assert_eq!(menu.title.y, 140.0);
        assert!(menu.title.bold);
        assert_eq!(menu.prompt.y, 165.0);
        assert_eq!(menu.prompt.content, PROMPT);
    }

    #[test]
    fn test_game_frame_mirrors_entities() {
        let mut session = Session::new(GameConfig::default(), 1);
        session.start();
        let Frame::Game(screen) = frame_for(&session) else {
            panic!("expected game screen");
        };
        let ball = session.ball.as_ref().expect("ball");
        assert_eq!(screen.ball.x, ball.pos.x as f32);
        assert_eq!(screen.ball.radius, 8.0);
        assert_eq!(screen.paddle.x, 100.0);
        assert_eq!(screen.paddle.image, ImageId::Paddle);
        assert_eq!(screen.blocks.len(), 12);
        assert_eq!(screen.blocks[1].x, 87.0);
    }

    #[test]
    fn test_frame_serializes_with_screen_tag() {
        let mut session = Session::new(GameConfig::default(), 1);
        let json = serde_json::to_value(frame_for(&session)).expect("serialize frame");
        assert_eq!(json["screen"], "menu");
        assert_eq!(json["phase"], "inactive");
        assert_eq!(json["title"]["content"], TITLE_INACTIVE);
        assert_eq!(json["title"]["align"], "Center");

        session.phase = GamePhase::Lose;
        let json = serde_json::to_value(frame_for(&session)).expect("serialize frame");
        assert_eq!(json["phase"], GamePhase::Lose.as_str());
        assert_eq!(json["title"]["content"], TITLE_LOSE);
    }
}
