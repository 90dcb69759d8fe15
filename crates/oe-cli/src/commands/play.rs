use oe_game::GameConfig;

use crate::tui::{self, PlayApp};

/// Play in the terminal UI.
pub fn run(config: GameConfig, fresh: bool) -> Result<(), String> {
    let session = super::open_session(config, fresh);
    let app = PlayApp::new(session).map_err(|e| format!("failed to start game: {e}"))?;
    tui::run(app)
}
