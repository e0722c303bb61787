//! In-memory playfield
//!
//! Animates each falling object linearly from just above the play area to its
//! bottom edge over the object's fall duration, the way the browser's CSS
//! animation does. Objects that finish the animation rest at the bottom until
//! the simulation removes them.

use std::collections::BTreeMap;

use glam::Vec2;

use crate::sim::{BoundsProvider, EntityHandle, EntitySpec, Presentation, Rect, Screen};

/// Basket size (px)
pub const BASKET_SIZE: Vec2 = Vec2::new(80.0, 60.0);
/// Gap between the basket and the bottom of the play area (px)
pub const BASKET_BOTTOM_MARGIN: f32 = 20.0;

#[derive(Debug, Clone)]
struct Falling {
    spec: EntitySpec,
    spawned_at_ms: u64,
    hidden: bool,
}

/// Headless presentation backend
#[derive(Debug, Clone)]
pub struct HeadlessField {
    viewport_width: f32,
    /// Play area size (px)
    area: Vec2,
    player_percent: f32,
    now_ms: u64,
    entities: BTreeMap<EntityHandle, Falling>,
    next_handle: u64,

    // HUD mirror
    pub score: u64,
    pub lives: i32,
    pub level: u32,
    pub screen: Screen,
    pub pulses: u32,
    pub final_score: Option<u64>,
}

impl HeadlessField {
    /// Play area filling the viewport width
    pub fn new(viewport_width: f32, area_height: f32) -> Self {
        Self {
            viewport_width,
            area: Vec2::new(viewport_width, area_height),
            player_percent: crate::consts::PLAYER_START_POSITION,
            now_ms: 0,
            entities: BTreeMap::new(),
            next_handle: 1,
            score: 0,
            lives: crate::consts::STARTING_LIVES,
            level: 1,
            screen: Screen::Start,
            pulses: 0,
            final_score: None,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Objects still attached (hidden ones included)
    pub fn attached_count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_hidden(&self, handle: EntityHandle) -> bool {
        self.entities.get(&handle).is_some_and(|f| f.hidden)
    }

    /// Top-left of an object at the current time
    fn position(&self, falling: &Falling) -> Vec2 {
        let elapsed_secs = self.now_ms.saturating_sub(falling.spawned_at_ms) as f32 / 1000.0;
        let progress = if falling.spec.fall_duration_secs > 0.0 {
            (elapsed_secs / falling.spec.fall_duration_secs).min(1.0)
        } else {
            1.0
        };
        let start_y = -falling.spec.size;
        let end_y = self.area.y;
        Vec2::new(falling.spec.x, start_y + (end_y - start_y) * progress)
    }
}

impl BoundsProvider for HeadlessField {
    fn player_bounds(&self) -> Rect {
        let center_x = self.area.x * self.player_percent / 100.0;
        let origin = Vec2::new(
            center_x - BASKET_SIZE.x / 2.0,
            self.area.y - BASKET_BOTTOM_MARGIN - BASKET_SIZE.y,
        );
        Rect::from_origin_size(origin, BASKET_SIZE)
    }

    fn entity_bounds(&self, handle: EntityHandle) -> Option<Rect> {
        let falling = self.entities.get(&handle)?;
        let origin = self.position(falling);
        Some(Rect::from_origin_size(origin, Vec2::splat(falling.spec.size)))
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn area_width(&self) -> f32 {
        self.area.x
    }
}

impl Presentation for HeadlessField {
    fn create_entity(&mut self, spec: EntitySpec) -> EntityHandle {
        let handle = EntityHandle(self.next_handle);
        self.next_handle += 1;
        self.entities.insert(
            handle,
            Falling {
                spec,
                spawned_at_ms: self.now_ms,
                hidden: false,
            },
        );
        handle
    }

    fn detach(&mut self, handle: EntityHandle) {
        self.entities.remove(&handle);
    }

    fn hide(&mut self, handle: EntityHandle) {
        if let Some(falling) = self.entities.get_mut(&handle) {
            falling.hidden = true;
        }
    }

    fn show_score(&mut self, score: u64) {
        self.score = score;
    }

    fn show_lives(&mut self, lives: i32) {
        self.lives = lives;
    }

    fn show_level(&mut self, level: u32) {
        self.level = level;
    }

    fn pulse_lives(&mut self) {
        self.pulses += 1;
    }

    fn show_final_score(&mut self, score: u64) {
        self.final_score = Some(score);
    }

    fn show_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    fn move_player(&mut self, percent: f32) {
        self.player_percent = percent;
    }

    fn sync_clock(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}
