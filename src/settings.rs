//! Field settings
//!
//! Persisted separately from run state in LocalStorage; the field itself is
//! ephemeral and rebuilt at every start.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BALL_COUNT;
use crate::packing::BufferLayout;

/// Which per-ball field set a run uploads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FieldVariant {
    /// x, y, radius
    Flat,
    /// x, y, radius, vx, vy
    Drifting,
    /// x, y, z, radius, vx, vy, vz
    #[default]
    Volumetric,
}

impl FieldVariant {
    pub fn layout(&self) -> BufferLayout {
        match self {
            FieldVariant::Flat => BufferLayout::FLAT,
            FieldVariant::Drifting => BufferLayout::DRIFTING,
            FieldVariant::Volumetric => BufferLayout::VOLUMETRIC,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// How many balls the field spawns
    pub ball_count: usize,
    /// Per-ball field set and stride
    pub variant: FieldVariant,
    /// Fixed RNG seed; None seeds from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_count: DEFAULT_BALL_COUNT,
            variant: FieldVariant::default(),
            seed: None,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "metaballs_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
