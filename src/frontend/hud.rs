//! Screen-space overlays
//!
//! Everything here draws in screen pixels, after the level. Text uses the
//! library's 5x7 bitmap font, one filled square per lit font pixel.

use blue_squirrel::font;
use blue_squirrel::player::Player;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const TEXT_COLOR: Color = Color::RGB(255, 255, 255);

/// Look of the player's health bar.
#[derive(Debug, Clone)]
pub struct HealthBarStyle {
    /// Screen pixels per point of health.
    pub pixels_per_point: f32,
    pub height: u32,
    pub background_color: Color,
    pub health_color: Color,
    /// Used below 30% health.
    pub low_health_color: Color,
}

impl Default for HealthBarStyle {
    fn default() -> Self {
        HealthBarStyle {
            pixels_per_point: 2.0,
            height: 20,
            background_color: Color::RGB(50, 50, 50),
            health_color: Color::RGB(0, 200, 0),
            low_health_color: Color::RGB(200, 0, 0),
        }
    }
}

/// Top-left HUD: health bar with the ammo count underneath.
pub struct Hud {
    style: HealthBarStyle,
    margin: i32,
}

impl Hud {
    pub fn new() -> Self {
        Hud {
            style: HealthBarStyle::default(),
            margin: 20,
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, player: &Player) -> Result<(), String> {
        let x = self.margin;
        let y = self.margin;
        let style = &self.style;

        let full_width = (player.max_health() * style.pixels_per_point).round() as u32;
        canvas.set_draw_color(style.background_color);
        canvas.fill_rect(Rect::new(x, y, full_width.max(1), style.height))?;

        let fill_width = (player.health() * style.pixels_per_point).round() as u32;
        if fill_width > 0 {
            let color = if player.health_percentage() < 0.3 {
                style.low_health_color
            } else {
                style.health_color
            };
            canvas.set_draw_color(color);
            canvas.fill_rect(Rect::new(x, y, fill_width, style.height))?;
        }

        let ammo_label = format!("AMMO {}", player.ammo_count());
        draw_text(canvas, &ammo_label, x, y + style.height as i32 + 10, TEXT_COLOR, 3)
    }
}

/// Draws `text` with its top-left corner at (`x`, `y`).
pub fn draw_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    for (dx, dy) in font::pixels(text, scale) {
        canvas.fill_rect(Rect::new(x + dx, y + dy, scale, scale))?;
    }

    Ok(())
}

/// Draws each line centred horizontally, the block centred vertically.
pub fn draw_centered_lines(
    canvas: &mut Canvas<Window>,
    lines: &[(&str, u32)],
    color: Color,
) -> Result<(), String> {
    let (width, height) = canvas.output_size()?;
    let line_gap = 20;
    let total_height: i32 = lines
        .iter()
        .map(|(_, scale)| (font::GLYPH_HEIGHT * scale) as i32 + line_gap)
        .sum::<i32>()
        - line_gap;

    let mut y = (height as i32 - total_height) / 2;
    for &(line, scale) in lines {
        let x = (width as i32 - font::text_width(line, scale) as i32) / 2;
        draw_text(canvas, line, x, y, color, scale)?;
        y += (font::GLYPH_HEIGHT * scale) as i32 + line_gap;
    }

    Ok(())
}

pub fn draw_main_menu(canvas: &mut Canvas<Window>) -> Result<(), String> {
    draw_centered_lines(
        canvas,
        &[
            ("OH NO MY BLUE FLYING SQUIRREL", 5),
            ("PRESS ENTER TO PLAY", 3),
            ("ESC TO QUIT", 2),
        ],
        TEXT_COLOR,
    )
}

pub fn draw_game_over(canvas: &mut Canvas<Window>) -> Result<(), String> {
    draw_centered_lines(
        canvas,
        &[("GAME OVER", 8), ("ESC TO QUIT", 2)],
        Color::RGB(220, 40, 40),
    )
}

pub fn draw_win(canvas: &mut Canvas<Window>) -> Result<(), String> {
    draw_centered_lines(
        canvas,
        &[("YOU WIN!", 8), ("ESC TO QUIT", 2)],
        Color::RGB(60, 230, 120),
    )
}
