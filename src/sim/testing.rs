//! Scripted presentation for unit tests: bounds are set by hand

use std::collections::BTreeMap;

use super::collision::Rect;
use super::presentation::{BoundsProvider, EntityHandle, EntitySpec, Presentation, Screen};

pub struct StubPresentation {
    pub viewport_width: f32,
    pub area_width: f32,
    pub player: Rect,
    /// Bounds of attached entities
    pub bounds: BTreeMap<EntityHandle, Rect>,
    pub created: Vec<(EntityHandle, EntitySpec)>,
    pub detached: Vec<EntityHandle>,
    pub hidden: Vec<EntityHandle>,
    pub pulses: u32,
    pub screen: Option<Screen>,
    pub shown_score: Option<u64>,
    pub shown_lives: Option<i32>,
    pub shown_level: Option<u32>,
    pub final_score: Option<u64>,
    next_handle: u64,
}

impl StubPresentation {
    /// Large-tier viewport with the basket near the bottom of a 600px area
    pub fn new() -> Self {
        Self {
            viewport_width: 1024.0,
            area_width: 1000.0,
            player: Rect::new(450.0, 500.0, 550.0, 560.0),
            bounds: BTreeMap::new(),
            created: Vec::new(),
            detached: Vec::new(),
            hidden: Vec::new(),
            pulses: 0,
            screen: None,
            shown_score: None,
            shown_lives: None,
            shown_level: None,
            final_score: None,
            next_handle: 1,
        }
    }

    /// Park an entity far above the basket
    pub fn park(&mut self, handle: EntityHandle) {
        self.bounds.insert(handle, Rect::new(0.0, -50.0, 50.0, 0.0));
    }

    /// Move an entity onto the basket
    pub fn overlap_player(&mut self, handle: EntityHandle) {
        self.bounds.insert(handle, Rect::new(480.0, 480.0, 530.0, 530.0));
    }

    /// Move an entity well left of the basket and below the miss threshold
    pub fn past_player(&mut self, handle: EntityHandle) {
        self.bounds.insert(handle, Rect::new(0.0, 470.0, 50.0, 520.0));
    }
}

impl BoundsProvider for StubPresentation {
    fn player_bounds(&self) -> Rect {
        self.player
    }

    fn entity_bounds(&self, handle: EntityHandle) -> Option<Rect> {
        self.bounds.get(&handle).copied()
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn area_width(&self) -> f32 {
        self.area_width
    }
}

impl Presentation for StubPresentation {
    fn create_entity(&mut self, spec: EntitySpec) -> EntityHandle {
        let handle = EntityHandle(self.next_handle);
        self.next_handle += 1;
        self.created.push((handle, spec));
        self.park(handle);
        handle
    }

    fn detach(&mut self, handle: EntityHandle) {
        self.bounds.remove(&handle);
        self.detached.push(handle);
    }

    fn hide(&mut self, handle: EntityHandle) {
        self.hidden.push(handle);
    }

    fn show_score(&mut self, score: u64) {
        self.shown_score = Some(score);
    }

    fn show_lives(&mut self, lives: i32) {
        self.shown_lives = Some(lives);
    }

    fn show_level(&mut self, level: u32) {
        self.shown_level = Some(level);
    }

    fn pulse_lives(&mut self) {
        self.pulses += 1;
    }

    fn show_final_score(&mut self, score: u64) {
        self.final_score = Some(score);
    }

    fn show_screen(&mut self, screen: Screen) {
        self.screen = Some(screen);
    }
}
