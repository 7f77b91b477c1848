//! Asset manifest
//!
//! The simulation only knows obstacle visuals by `AssetId`. The manifest maps
//! those ids (and the player sprite and crash sounds) to URLs for the
//! frontend to load. Anything missing or not yet loaded is drawn as a flat
//! placeholder; the simulation never waits on assets.

use serde::{Deserialize, Serialize};

use crate::sim::AssetId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub player: String,
    /// Indexed by `AssetId`
    pub obstacles: Vec<String>,
    /// One is picked at random per game over
    pub crash_sounds: Vec<String>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            player: "assets/player.png".to_string(),
            obstacles: vec!["assets/obstacle.jpg".to_string()],
            crash_sounds: vec![
                "assets/crash-1.mp3".to_string(),
                "assets/crash-2.mp3".to_string(),
                "assets/crash-3.mp3".to_string(),
            ],
        }
    }
}

impl AssetManifest {
    /// URL for an obstacle visual
    pub fn obstacle(&self, id: AssetId) -> Option<&str> {
        self.obstacles.get(id.0 as usize).map(String::as_str)
    }

    /// Number of obstacle variants, for `Tuning::obstacle_variants`
    pub fn obstacle_variants(&self) -> u16 {
        self.obstacles.len().min(u16::MAX as usize) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let manifest = AssetManifest {
            obstacles: vec!["a.png".into(), "b.png".into()],
            ..Default::default()
        };
        assert_eq!(manifest.obstacle(AssetId(1)), Some("b.png"));
        assert_eq!(manifest.obstacle(AssetId(2)), None);
        assert_eq!(manifest.obstacle_variants(), 2);
        // Every id the simulation can pick resolves
        for id in 0..manifest.obstacle_variants() {
            assert!(manifest.obstacle(AssetId(id)).is_some());
        }
    }
}
