use log::warn;
use macroquad::audio::{
    PlaySoundParams, Sound, load_sound_from_bytes, play_sound, play_sound_once, stop_sound,
};

use crate::assets;

/// Fire-and-forget sound cues. Every cue is optional: a missing or
/// undecodable asset leaves the slot `None` and the cue silent.
#[derive(Default)]
pub struct AudioManager {
    paddle_hit: Option<Sound>,
    brick_hit: Option<Sound>,
    theme: Option<Sound>,
    victory: Option<Sound>,
}

impl AudioManager {
    pub fn new() -> Self {
        Default::default()
    }

    // Load all sound assets from the embedded bundle
    pub async fn load_assets(&mut self) {
        self.paddle_hit = load_cue("paddle_hit.ogg").await;
        self.brick_hit = load_cue("brick_hit.ogg").await;
        self.theme = load_cue("theme.ogg").await;
        self.victory = load_cue("victory.ogg").await;
    }

    pub fn play_paddle_hit(&self) {
        if let Some(ref sound) = self.paddle_hit {
            play_sound_once(sound);
        }
    }

    pub fn play_brick_hit(&self) {
        if let Some(ref sound) = self.brick_hit {
            play_sound_once(sound);
        }
    }

    // Restart the looping background theme from the top
    pub fn play_theme(&self) {
        if let Some(ref sound) = self.theme {
            stop_sound(sound);
            play_sound(
                sound,
                PlaySoundParams {
                    looped: true,
                    volume: 1.0,
                },
            );
        }
    }

    pub fn stop_theme(&self) {
        if let Some(ref sound) = self.theme {
            stop_sound(sound);
        }
    }

    pub fn play_victory(&self) {
        if let Some(ref sound) = self.victory {
            play_sound_once(sound);
        }
    }
}

async fn load_cue(name: &str) -> Option<Sound> {
    let bytes = match assets::get_asset_bytes(name) {
        Some(bytes) => bytes,
        None => {
            warn!("Sound asset '{}' not bundled; cue will be silent", name);
            return None;
        }
    };
    load_sound_from_bytes(&bytes)
        .await
        .map_err(|e| warn!("Failed to decode sound '{}': {}", name, e))
        .ok()
}
