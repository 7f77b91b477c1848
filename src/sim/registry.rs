//! Scrolling and pruning of live obstacles and pits

use super::state::{Obstacle, Pit};

/// Something that scrolls left with the world
pub trait Scrolling {
    fn scroll(&mut self, dx: f32);
    /// Right edge in world x
    fn trailing_edge(&self) -> f32;
}

impl Scrolling for Obstacle {
    fn scroll(&mut self, dx: f32) {
        self.rect.pos.x -= dx;
    }

    fn trailing_edge(&self) -> f32 {
        self.rect.right()
    }
}

impl Scrolling for Pit {
    fn scroll(&mut self, dx: f32) {
        self.x -= dx;
    }

    fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }
}

/// Move every entry left by `speed`, then drop entries whose trailing edge
/// has passed x = 0. Returns how many were dropped.
///
/// Spawn order of the survivors is preserved and every entry is visited once.
pub fn scroll_and_prune<T: Scrolling>(items: &mut Vec<T>, speed: f32) -> u64 {
    let before = items.len();
    items.retain_mut(|item| {
        item.scroll(speed);
        item.trailing_edge() >= 0.0
    });
    (before - items.len()) as u64
}
