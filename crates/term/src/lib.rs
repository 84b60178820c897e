//! Terminal game renderer.
//!
//! A small, game-oriented rendering layer: [`GameView`] turns a
//! [`Session`](crate::engine::Session) into a framebuffer of styled cells and
//! [`Screen`] puts that framebuffer on the terminal through
//! `crossterm`. No widget toolkit is involved; each board cell is two
//! terminal columns wide to keep blocks roughly square.

pub mod fb;
pub mod game_view;
pub mod screen;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style, Weight};
pub use game_view::{AnchorY, GameView, Viewport};
pub use screen::Screen;
