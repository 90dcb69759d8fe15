//! Configuration for a game session.

use std::path::PathBuf;

/// Environment variable overriding the save file path.
pub const ENV_SAVE: &str = "OFFICE_ESCAPE_SAVE";
/// Environment variable overriding the player name.
pub const ENV_PLAYER: &str = "OFFICE_ESCAPE_PLAYER";
/// Environment variable enabling the starter kit (`1`, `true`, `yes`, `on`).
pub const ENV_STARTER_KIT: &str = "OFFICE_ESCAPE_STARTER_KIT";

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Player name.
    pub player_name: String,
    /// Save file location; `None` means the platform default.
    pub save_path: Option<PathBuf>,
    /// Save after every room change.
    pub autosave: bool,
    /// Hand the interview documents to a new player.
    pub starter_kit: bool,
    /// Multiplier on the metal detector guard's cadence (0.25-4.0).
    pub lookout_speed: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            save_path: None,
            autosave: true,
            starter_kit: false,
            lookout_speed: 1.0,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `OFFICE_ESCAPE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(ENV_SAVE).filter(|p| !p.is_empty()) {
            config.save_path = Some(PathBuf::from(path));
        }
        if let Some(name) = lookup(ENV_PLAYER).filter(|n| !n.trim().is_empty()) {
            config.player_name = name.trim().to_string();
        }
        if let Some(flag) = lookup(ENV_STARTER_KIT) {
            config.starter_kit = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }
        config
    }

    /// Set the player name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Set the save file location.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = Some(path.into());
        self
    }

    /// Turn autosave on or off.
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// Turn the starter kit on or off.
    pub fn with_starter_kit(mut self, starter_kit: bool) -> Self {
        self.starter_kit = starter_kit;
        self
    }

    /// Set the cadence multiplier (clamped to 0.25-4.0).
    pub fn with_lookout_speed(mut self, speed: f64) -> Self {
        self.lookout_speed = if speed.is_nan() { 1.0 } else { speed.clamp(0.25, 4.0) };
        self
    }
}
