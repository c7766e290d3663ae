// Frontend module - SDL2 window, drawing and keyboard input
//
// This module contains:
// - canvas.rs: CanvasRenderer, draws sprite views as coloured boxes
// - keys.rs: Scancode bindings for the logical actions
// - hud.rs: Health bar, ammo counter, bitmap text and full-screen messages

pub mod canvas;
pub mod hud;
pub mod keys;

pub use canvas::CanvasRenderer;
