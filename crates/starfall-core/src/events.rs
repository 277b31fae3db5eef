//! Events emitted by the wave director for UI feedback.

use serde::{Deserialize, Serialize};

/// Wave-start announcement. One per wave, never for zone completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub wave_number: u32,
    pub total_waves: u32,
    pub is_boss_wave: bool,
    pub message: String,
}

impl Announcement {
    pub fn wave_start(wave_number: u32, total_waves: u32, boss_id: Option<&str>) -> Self {
        let message = match boss_id {
            Some(id) => format!("WARNING: {} APPROACHING", id.to_uppercase()),
            None => format!("WAVE {wave_number}/{total_waves}"),
        };
        Self {
            wave_number,
            total_waves,
            is_boss_wave: boss_id.is_some(),
            message,
        }
    }
}
