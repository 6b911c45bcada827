//! Pause menu screen
//!
//! Pushed on top of the space map with `Escape`. Offers two options:
//! - Resume: pops the menu, the space map resumes
//! - Quit: closes the client
//!
//! `Escape` again closes the menu like Resume.

use crate::hud::{draw_text, TextStyle};
use crate::screen::{Screen, Transition};
use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Menu box width in pixels
    pub width: u32,

    /// Menu box height in pixels
    pub height: u32,

    pub background_color: Color,
    pub panel_color: Color,
    pub border_color: Color,
    pub title_color: Color,
    pub item_color: Color,
    pub selected_item_color: Color,
    pub highlight_color: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            width: 320,
            height: 200,
            background_color: Color::RGB(4, 8, 22),
            panel_color: Color::RGB(18, 24, 44),
            border_color: Color::RGB(70, 110, 170),
            title_color: Color::RGB(200, 220, 255),
            item_color: Color::RGB(150, 160, 180),
            selected_item_color: Color::RGB(255, 255, 255),
            highlight_color: Color::RGB(50, 80, 130),
        }
    }
}

/// Options in the pause menu, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseOption {
    Resume,
    Quit,
}

impl PauseOption {
    pub const ALL: [PauseOption; 2] = [PauseOption::Resume, PauseOption::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            PauseOption::Resume => "RESUME",
            PauseOption::Quit => "QUIT",
        }
    }
}

pub struct PauseMenuScreen {
    logical_size: (u32, u32),
    selected_index: usize,
    font_scale: u32,
    style: MenuStyle,
}

impl PauseMenuScreen {
    pub fn new(logical_size: (u32, u32), font_scale: u32) -> Self {
        PauseMenuScreen {
            logical_size,
            selected_index: 0,
            font_scale: font_scale.max(1),
            style: MenuStyle::default(),
        }
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        if self.selected_index == 0 {
            self.selected_index = PauseOption::ALL.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % PauseOption::ALL.len();
    }

    pub fn selected_option(&self) -> PauseOption {
        PauseOption::ALL[self.selected_index]
    }

    fn confirm<'a>(&self) -> Transition<'a> {
        match self.selected_option() {
            PauseOption::Resume => Transition::Pop,
            PauseOption::Quit => {
                info!("[PauseMenu] Quit selected");
                Transition::Quit
            }
        }
    }

    /// The menu box, centered on the logical target
    fn panel(&self) -> Rect {
        let (width, height) = self.logical_size;
        Rect::new(
            (width as i32 - self.style.width as i32) / 2,
            (height as i32 - self.style.height as i32) / 2,
            self.style.width,
            self.style.height,
        )
    }
}

impl<'a> Screen<'a> for PauseMenuScreen {
    fn enter(&mut self) {
        self.selected_index = 0;
    }

    fn on_event(&mut self, event: &Event) -> Transition<'a> {
        let Event::KeyDown {
            keycode: Some(keycode),
            ..
        } = event
        else {
            return Transition::None;
        };

        match *keycode {
            Keycode::Escape => Transition::Pop,
            Keycode::Up => {
                self.select_previous();
                Transition::None
            }
            Keycode::Down => {
                self.select_next();
                Transition::None
            }
            Keycode::Return | Keycode::Space => self.confirm(),
            _ => Transition::None,
        }
    }

    fn draw(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(self.style.background_color);
        canvas.clear();

        let panel = self.panel();
        canvas.set_draw_color(self.style.panel_color);
        canvas.fill_rect(panel)?;

        // Double border
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(panel)?;
        canvas.draw_rect(Rect::new(
            panel.x() + 2,
            panel.y() + 2,
            panel.width() - 4,
            panel.height() - 4,
        ))?;

        let title = TextStyle::hud(self.font_scale * 3).with_color(self.style.title_color);
        let (title_width, _) = title.measure("PAUSED");
        draw_text(
            canvas,
            "PAUSED",
            panel.x() + (panel.width() as i32 - title_width as i32) / 2,
            panel.y() + 30,
            &title,
        )?;

        let item_height = 24 * self.font_scale as i32;
        let item_top = panel.y() + 100;

        for (i, option) in PauseOption::ALL.iter().enumerate() {
            let y = item_top + i as i32 * item_height * 2;
            let selected = i == self.selected_index;

            if selected {
                canvas.set_draw_color(self.style.highlight_color);
                canvas.fill_rect(Rect::new(
                    panel.x() + 15,
                    y - 6,
                    panel.width() - 30,
                    item_height as u32 + 4,
                ))?;
            }

            let color = if selected {
                self.style.selected_item_color
            } else {
                self.style.item_color
            };
            let style = TextStyle::hud(self.font_scale * 2).with_color(color);
            draw_text(canvas, option.label(), panel.x() + 60, y, &style)?;
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "PauseMenu"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key(keycode: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn test_starts_on_resume() {
        let menu = PauseMenuScreen::new((820, 615), 1);
        assert_eq!(menu.selected_option(), PauseOption::Resume);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut menu = PauseMenuScreen::new((820, 615), 1);
        menu.select_previous();
        assert_eq!(menu.selected_option(), PauseOption::Quit);
        menu.select_next();
        assert_eq!(menu.selected_option(), PauseOption::Resume);
    }

    #[test]
    fn test_confirm_resume_pops() {
        let mut menu = PauseMenuScreen::new((820, 615), 1);
        assert!(matches!(menu.on_event(&key(Keycode::Return)), Transition::Pop));
    }

    #[test]
    fn test_confirm_quit_quits() {
        let mut menu = PauseMenuScreen::new((820, 615), 1);
        assert!(matches!(menu.on_event(&key(Keycode::Down)), Transition::None));
        assert!(matches!(menu.on_event(&key(Keycode::Space)), Transition::Quit));
    }

    #[test]
    fn test_escape_closes_menu() {
        let mut menu = PauseMenuScreen::new((820, 615), 1);
        assert!(matches!(menu.on_event(&key(Keycode::Escape)), Transition::Pop));
    }

    #[test]
    fn test_enter_resets_selection() {
        let mut menu = PauseMenuScreen::new((820, 615), 1);
        menu.select_next();
        Screen::enter(&mut menu);
        assert_eq!(menu.selected_option(), PauseOption::Resume);
    }

    #[test]
    fn test_panel_is_centered() {
        let menu = PauseMenuScreen::new((820, 615), 1);
        let panel = menu.panel();
        assert_eq!(panel, Rect::new(250, 207, 320, 200));
    }
}
