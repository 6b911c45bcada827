//! Space map HUD screen
//!
//! The main in-flight screen: header with resource counters, ship status
//! bars, minimap with pointer position, configuration selector and the
//! inventory bar along the bottom edge.
//!
//! Textures are loaded in `enter()`. A texture that fails to load is logged
//! and skipped when drawing; the layout falls back to the art's nominal size
//! so text and bars stay where they belong.
//!
//! # Keys
//!
//! - `Escape` - open the pause menu
//! - `F1` - toggle the bounding box overlay

use crate::game::formulas::{format_thousands, level_from_xp};
use crate::game::stats::{Gauge, PlayerStats, ShipStats};
use crate::hud::debug::{draw_bounding_box, Bounds};
use crate::hud::layout::{above, align_right, anchor_bottom_right, center_in, center_vertically, left_of};
use crate::hud::text::text_height;
use crate::hud::{draw_text, StatusBar, StatusBarStyle, TextStyle};
use crate::screen::{Screen, Transition};
use crate::screens::PauseMenuScreen;
use crate::texture_manager::TextureManager;
use log::{debug, error, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::VecDeque;
use std::path::Path;
use std::time::Duration;

const HEADER: &str = "header";
const AMOUNT_BG: &str = "ammo_rocket_amount_bg";
const HP_BG: &str = "hp_amount_bg";
const SHIELD_BG: &str = "shield_amount_bg";
const MINIMAP: &str = "mini-map";
const MINIMAP_HEADER: &str = "mini-map_header";
const CONFIG_LABEL: &str = "config_label";
const CONFIG_ACTIVE: &str = "config_active";
const CONFIG_INACTIVE: &str = "config_inactive";
const INVENTORY_RIGHT: &str = "inventory_right";
const INVENTORY_CENTER: &str = "inventory_center";
const INVENTORY_LEFT: &str = "inventory_left";
const INVENTORY_TRIANGLE: &str = "inventory_triangle";
const INVENTORY_CONTENT: &str = "inventory_content_bg";

/// (name, path under the asset root, nominal size)
const TEXTURES: [(&str, &str, (u32, u32)); 14] = [
    (HEADER, "ui/header.png", (820, 80)),
    (AMOUNT_BG, "ui/ammo_rocket_amount_bg.png", (90, 12)),
    (HP_BG, "ui/hit_points_amount_bg.png", (90, 12)),
    (SHIELD_BG, "ui/shield_amount_bg.png", (90, 12)),
    (MINIMAP, "ui/mini-map.jpg", (220, 150)),
    (MINIMAP_HEADER, "ui/mini-map_header.png", (225, 22)),
    (CONFIG_LABEL, "ui/configuration_label_bg.png", (110, 22)),
    (CONFIG_ACTIVE, "ui/configuration_active.png", (30, 22)),
    (CONFIG_INACTIVE, "ui/configuration_inactive.png", (30, 22)),
    (INVENTORY_RIGHT, "ui/inventory_right.jpg", (60, 55)),
    (INVENTORY_CENTER, "ui/inventory_center.jpg", (300, 55)),
    (INVENTORY_LEFT, "ui/inventory_left.png", (30, 55)),
    (INVENTORY_TRIANGLE, "ui/inventory_triangle.png", (20, 12)),
    (INVENTORY_CONTENT, "ui/inventory_content_bg.png", (200, 30)),
];

/// Status bar backgrounds are drawn translucent over the header
const AMOUNT_BG_ALPHA: u8 = 150;

/// Header text column layout
const COUNTER_TOP: i32 = 10;
const COUNTER_SPACING: i32 = 9;
const LABEL_COLUMN_X: i32 = 248;
const VALUE_COLUMN_RIGHT: i32 = 415;
const CREDITS_CENTER_X: i32 = 510;
const URIDIUM_CENTER_X: i32 = 580;
const CARGO_CENTER_X: i32 = 670;

const BACKGROUND_COLOR: Color = Color::RGB(4, 8, 22);

/// Nominal size of a HUD texture
fn nominal_size(name: &str) -> (u32, u32) {
    TEXTURES
        .iter()
        .find(|(texture, _, _)| *texture == name)
        .map(|(_, _, size)| *size)
        .unwrap_or((0, 0))
}

/// Where every HUD element goes on the logical render target
#[derive(Debug, Clone, PartialEq)]
pub struct HudLayout {
    pub header: Rect,
    pub hit_points: Rect,
    pub shield: Rect,
    pub ammo: Rect,
    pub rockets: Rect,
    pub minimap: Rect,
    pub minimap_header: Rect,
    pub config_inactive: Rect,
    pub config_active: Rect,
    pub config_label: Rect,
    pub inventory_right: Rect,
    pub inventory_center: Rect,
    pub inventory_left: Rect,
    pub inventory_triangle: Rect,
    pub inventory_content: Rect,
}

impl HudLayout {
    /// Lays the HUD out on a `logical` sized target
    ///
    /// `size_of` returns the pixel size of a loaded texture, `None` when it
    /// is missing (the nominal size is used instead).
    pub fn compute(
        (logical_width, logical_height): (u32, u32),
        size_of: impl Fn(&str) -> Option<(u32, u32)>,
    ) -> Self {
        let size = |name: &str| size_of(name).unwrap_or_else(|| nominal_size(name));
        let screen = Rect::new(0, 0, logical_width, logical_height);
        let at = |x: i32, y: i32, name: &str| {
            let (w, h) = size(name);
            Rect::new(x, y, w, h)
        };

        let minimap = anchor_bottom_right(screen, size(MINIMAP));

        // The header art overhangs the minimap by 5 pixels on the left
        let minimap_header = {
            let (w, h) = size(MINIMAP_HEADER);
            Rect::new(screen.right() - w as i32 + 5, minimap.top() - h as i32, w, h)
        };

        // Config widgets sit on the minimap header, right to left
        let config_inactive = {
            let (w, h) = size(CONFIG_INACTIVE);
            Rect::new(screen.right() - w as i32, minimap_header.top() - h as i32, w, h)
        };
        let config_active = {
            let (w, h) = size(CONFIG_ACTIVE);
            Rect::new(config_inactive.left() - w as i32, minimap_header.top() - h as i32, w, h)
        };
        let config_label = {
            let (w, h) = size(CONFIG_LABEL);
            Rect::new(config_active.left() - w as i32, minimap_header.top() - h as i32, w, h)
        };

        // Inventory bar grows left from the minimap along the bottom edge
        let inventory_right = {
            let (w, h) = size(INVENTORY_RIGHT);
            Rect::new(minimap.left() - w as i32, screen.bottom() - h as i32, w, h)
        };
        let inventory_center = left_of(inventory_right, size(INVENTORY_CENTER));
        let inventory_left = left_of(inventory_center, size(INVENTORY_LEFT));
        // Triangle marks the inventory's top-left corner
        let inventory_triangle = {
            let (w, h) = size(INVENTORY_TRIANGLE);
            let mut triangle = above(inventory_right, (w, h));
            triangle.offset(-(w as i32), 0);
            triangle
        };

        HudLayout {
            header: at(0, 0, HEADER),
            hit_points: at(514, 57, HP_BG),
            shield: at(514, 42, SHIELD_BG),
            ammo: at(686, 42, AMOUNT_BG),
            rockets: at(686, 57, AMOUNT_BG),
            minimap,
            minimap_header,
            config_inactive,
            config_active,
            config_label,
            inventory_right,
            inventory_center,
            inventory_left,
            inventory_triangle,
            inventory_content: at(370, 579, INVENTORY_CONTENT),
        }
    }

    /// Every element with its texture name, in draw order
    pub fn sprites(&self) -> [(&'static str, Rect); 15] {
        [
            (HEADER, self.header),
            (HP_BG, self.hit_points),
            (SHIELD_BG, self.shield),
            (AMOUNT_BG, self.ammo),
            (AMOUNT_BG, self.rockets),
            (MINIMAP, self.minimap),
            (MINIMAP_HEADER, self.minimap_header),
            (CONFIG_LABEL, self.config_label),
            (CONFIG_ACTIVE, self.config_active),
            (CONFIG_INACTIVE, self.config_inactive),
            (INVENTORY_RIGHT, self.inventory_right),
            (INVENTORY_CENTER, self.inventory_center),
            (INVENTORY_LEFT, self.inventory_left),
            (INVENTORY_TRIANGLE, self.inventory_triangle),
            (INVENTORY_CONTENT, self.inventory_content),
        ]
    }
}

/// Rolling frames-per-second estimate over the last second
#[derive(Debug, Default)]
pub struct FrameCounter {
    frames: VecDeque<Duration>,
    window: Duration,
}

impl FrameCounter {
    pub fn new() -> Self {
        FrameCounter::default()
    }

    /// Records one frame that took `delta`
    pub fn tick(&mut self, delta: Duration) {
        self.frames.push_back(delta);
        self.window += delta;

        while self.window > Duration::from_secs(1) && self.frames.len() > 1 {
            if let Some(oldest) = self.frames.pop_front() {
                self.window -= oldest;
            }
        }
    }

    pub fn fps(&self) -> f32 {
        if self.window.is_zero() {
            0.0
        } else {
            self.frames.len() as f32 / self.window.as_secs_f32()
        }
    }
}

pub struct SpaceMapScreen<'a> {
    textures: TextureManager<'a>,
    layout: HudLayout,
    logical_size: (u32, u32),
    player: PlayerStats,
    ship: ShipStats,
    pointer: (i32, i32),
    text: TextStyle,
    hit_points_bar: StatusBar,
    shield_bar: StatusBar,
    ammo_bar: StatusBar,
    rockets_bar: StatusBar,
    show_bounds: bool,
    frames: FrameCounter,
}

impl<'a> SpaceMapScreen<'a> {
    pub fn new(
        creator: &'a TextureCreator<WindowContext>,
        asset_root: &Path,
        logical_size: (u32, u32),
        font_scale: u32,
    ) -> Self {
        let bar = |fill_color: Color| {
            StatusBar::with_style(StatusBarStyle {
                fill_color,
                ..Default::default()
            })
        };

        SpaceMapScreen {
            textures: TextureManager::new(creator, asset_root),
            layout: HudLayout::compute(logical_size, |_| None),
            logical_size,
            player: PlayerStats::default(),
            ship: ShipStats::default(),
            pointer: (0, 0),
            text: TextStyle::hud(font_scale),
            hit_points_bar: bar(Color::RGBA(40, 190, 60, AMOUNT_BG_ALPHA)),
            shield_bar: bar(Color::RGBA(40, 120, 230, AMOUNT_BG_ALPHA)),
            ammo_bar: bar(Color::RGBA(220, 180, 40, AMOUNT_BG_ALPHA)),
            rockets_bar: bar(Color::RGBA(220, 110, 30, AMOUNT_BG_ALPHA)),
            show_bounds: false,
            frames: FrameCounter::new(),
        }
    }

    /// Starts with the bounding box overlay enabled
    pub fn with_bounds(mut self, show_bounds: bool) -> Self {
        self.show_bounds = show_bounds;
        self
    }

    fn draw_sprite(&self, canvas: &mut Canvas<Window>, name: &str, dest: Rect) -> Result<(), String> {
        match self.textures.get(name) {
            Ok(texture) => canvas.copy(texture, None, Some(dest)),
            // Missing art: leave the area empty
            Err(_) => Ok(()),
        }
    }

    fn draw_status(
        &self,
        canvas: &mut Canvas<Window>,
        bar: &StatusBar,
        gauge: Gauge,
        area: Rect,
    ) -> Result<(), String> {
        bar.render(canvas, area.x(), area.y(), gauge.percentage())?;

        let value = format_thousands(gauge.current());
        let (x, y) = center_in(area, self.text.measure(&value));
        draw_text(canvas, &value, x, y, &self.text)
    }

    fn draw_counters(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let line = text_height(self.text.scale) as i32 + COUNTER_SPACING;

        let rows = [
            ("EXPERIENCE", format_thousands(self.player.xp)),
            ("LEVEL", format_thousands(level_from_xp(self.player.xp))),
            ("HONOR", format_thousands(self.player.honor)),
            ("JACKPOT", format_thousands(self.player.jackpot)),
        ];

        for (i, (label, value)) in rows.iter().enumerate() {
            let y = COUNTER_TOP + i as i32 * line;
            draw_text(canvas, label, LABEL_COLUMN_X, y, &self.text)?;

            let (width, _) = self.text.measure(value);
            let (x, y) = align_right(VALUE_COLUMN_RIGHT, width, y);
            draw_text(canvas, value, x, y, &self.text)?;
        }

        let columns = [
            ("CREDITS", format_thousands(self.player.credits), CREDITS_CENTER_X),
            ("URIDIUM", format_thousands(self.player.uridium), URIDIUM_CENTER_X),
            ("CARGO BAY", format_thousands(self.ship.cargo.current()), CARGO_CENTER_X),
        ];

        for (label, value, center_x) in columns.iter() {
            for (row, text) in [label.to_string(), value.clone()].iter().enumerate() {
                let (width, _) = self.text.measure(text);
                let x = center_x - width as i32 / 2;
                draw_text(canvas, text, x, COUNTER_TOP + row as i32 * line, &self.text)?;
            }
        }

        Ok(())
    }

    fn draw_minimap_labels(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let header = self.layout.minimap_header;
        let label = "MAP";
        let (label_width, label_height) = self.text.measure(label);

        let (x, y) = center_vertically(header, label_height, header.x() + 6);
        draw_text(canvas, label, x, y, &self.text)?;

        let position = format!("POS {}/{}", self.pointer.0, self.pointer.1);
        let x = x + label_width as i32 + 4 * self.text.scale as i32 * 6;
        draw_text(canvas, &position, x, y, &self.text)
    }

    fn draw_config_labels(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        for (text, area) in [
            ("CONFIGURATION", self.layout.config_label),
            ("1", self.layout.config_active),
            ("2", self.layout.config_inactive),
        ] {
            let (x, y) = center_in(area, self.text.measure(text));
            draw_text(canvas, text, x, y, &self.text)?;
        }

        Ok(())
    }

    fn draw_bounds(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        for (_, rect) in self.layout.sprites() {
            draw_bounding_box(canvas, rect)?;
        }

        let fps = format!("{:.0} FPS", self.frames.fps());
        draw_text(canvas, &fps, 4, 4, &self.text.with_color(Color::RGB(255, 80, 80)))
    }
}

impl<'a> Screen<'a> for SpaceMapScreen<'a> {
    fn enter(&mut self) {
        info!("[SpaceMap] Loading textures");

        let entries: Vec<(&str, &str)> = TEXTURES.iter().map(|(name, path, _)| (*name, *path)).collect();
        let failures = self.textures.load_all(&entries);

        for name in [AMOUNT_BG, HP_BG, SHIELD_BG] {
            // Missing textures were already reported by load_all
            let _ = self.textures.set_alpha(name, AMOUNT_BG_ALPHA);
        }

        if failures.is_empty() {
            info!("[SpaceMap] Loaded {} textures", self.textures.len());
        } else {
            error!(
                "[SpaceMap] Failed to load {} of {} textures, drawing without them",
                failures.len(),
                TEXTURES.len()
            );
        }

        let textures = &self.textures;
        self.layout = HudLayout::compute(self.logical_size, |name| textures.size(name));

        if self.show_bounds {
            for (name, rect) in self.layout.sprites() {
                debug!("[SpaceMap] {}: {}", name, Bounds(rect));
            }
        }
    }

    fn pause(&mut self) {
        debug!("[SpaceMap] Paused");
    }

    fn resume(&mut self) {
        debug!("[SpaceMap] Resumed");
        self.frames = FrameCounter::new();
    }

    fn exit(&mut self) {
        self.textures.clear();
    }

    fn on_event(&mut self, event: &Event) -> Transition<'a> {
        match event {
            Event::MouseMotion { x, y, .. } => {
                self.pointer = (*x, *y);
                Transition::None
            }
            Event::KeyDown {
                keycode: Some(Keycode::Escape),
                repeat: false,
                ..
            } => Transition::Push(Box::new(PauseMenuScreen::new(
                self.logical_size,
                self.text.scale,
            ))),
            Event::KeyDown {
                keycode: Some(Keycode::F1),
                repeat: false,
                ..
            } => {
                self.show_bounds = !self.show_bounds;
                debug!("[SpaceMap] Bounding boxes: {}", self.show_bounds);
                Transition::None
            }
            _ => Transition::None,
        }
    }

    fn update(&mut self, delta: Duration) {
        self.frames.tick(delta);
    }

    fn draw(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(BACKGROUND_COLOR);
        canvas.clear();

        for (name, dest) in self.layout.sprites() {
            self.draw_sprite(canvas, name, dest)?;
        }

        self.draw_status(canvas, &self.hit_points_bar, self.ship.hit_points, self.layout.hit_points)?;
        self.draw_status(canvas, &self.shield_bar, self.ship.shield, self.layout.shield)?;
        self.draw_status(canvas, &self.ammo_bar, self.ship.ammo, self.layout.ammo)?;
        self.draw_status(canvas, &self.rockets_bar, self.ship.rockets, self.layout.rockets)?;

        // Text on top of the art
        self.draw_minimap_labels(canvas)?;
        self.draw_config_labels(canvas)?;
        self.draw_counters(canvas)?;

        if self.show_bounds {
            self.draw_bounds(canvas)?;
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "SpaceMap"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGICAL: (u32, u32) = (820, 615);

    fn nominal_layout() -> HudLayout {
        HudLayout::compute(LOGICAL, |_| None)
    }

    #[test]
    fn test_minimap_in_bottom_right_corner() {
        let layout = nominal_layout();
        assert_eq!(layout.minimap, Rect::new(600, 465, 220, 150));
    }

    #[test]
    fn test_minimap_header_sits_on_minimap() {
        let layout = nominal_layout();
        assert_eq!(layout.minimap_header.bottom(), layout.minimap.top());
        assert_eq!(layout.minimap_header.right(), 825);
    }

    #[test]
    fn test_config_widgets_chain_right_to_left() {
        let layout = nominal_layout();
        assert_eq!(layout.config_inactive.right(), 820);
        assert_eq!(layout.config_active.right(), layout.config_inactive.left());
        assert_eq!(layout.config_label.right(), layout.config_active.left());

        for rect in [layout.config_inactive, layout.config_active, layout.config_label] {
            assert_eq!(rect.bottom(), layout.minimap_header.top());
        }
    }

    #[test]
    fn test_inventory_bar_chain() {
        let layout = nominal_layout();
        assert_eq!(layout.inventory_right.right(), layout.minimap.left());
        assert_eq!(layout.inventory_right.bottom(), 615);
        assert_eq!(layout.inventory_center.right(), layout.inventory_right.left());
        assert_eq!(layout.inventory_left.right(), layout.inventory_center.left());
        assert_eq!(layout.inventory_left.top(), layout.inventory_right.top());

        assert_eq!(layout.inventory_triangle.right(), layout.inventory_right.left());
        assert_eq!(layout.inventory_triangle.bottom(), layout.inventory_right.top());
    }

    #[test]
    fn test_loaded_texture_sizes_override_nominal() {
        let layout = HudLayout::compute(LOGICAL, |name| (name == MINIMAP).then_some((200, 200)));
        assert_eq!(layout.minimap, Rect::new(620, 415, 200, 200));
        assert_eq!(layout.minimap_header.bottom(), 415);
    }

    #[test]
    fn test_status_bar_positions() {
        let layout = nominal_layout();
        assert_eq!((layout.shield.x(), layout.shield.y()), (514, 42));
        assert_eq!((layout.hit_points.x(), layout.hit_points.y()), (514, 57));
        assert_eq!((layout.ammo.x(), layout.ammo.y()), (686, 42));
        assert_eq!((layout.rockets.x(), layout.rockets.y()), (686, 57));
    }

    #[test]
    fn test_every_texture_has_a_nominal_size() {
        for (name, _, size) in TEXTURES {
            assert_eq!(nominal_size(name), size);
            assert!(size.0 > 0 && size.1 > 0, "{}", name);
        }
        assert_eq!(nominal_size("unknown"), (0, 0));
    }

    #[test]
    fn test_frame_counter() {
        let mut counter = FrameCounter::new();
        assert_eq!(counter.fps(), 0.0);

        for _ in 0..120 {
            counter.tick(Duration::from_millis(16));
        }
        let fps = counter.fps();
        assert!((fps - 62.5).abs() < 1.0, "fps = {}", fps);
    }

    #[test]
    fn test_frame_counter_keeps_one_slow_frame() {
        let mut counter = FrameCounter::new();
        counter.tick(Duration::from_secs(2));
        assert_eq!(counter.fps(), 0.5);
    }
}
