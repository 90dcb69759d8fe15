pub mod play;
pub mod reset;
pub mod rooms;
pub mod script;

use oe_game::{
    FileSaveStore, GameConfig, GameController, RecordingPresenter, SaveStore, TextSession,
};

use crate::GameArgs;

/// Environment defaults with command-line flags layered on top.
pub fn game_config(args: &GameArgs) -> GameConfig {
    let mut config = GameConfig::from_env();
    if let Some(path) = &args.save_file {
        config = config.with_save_path(path.clone());
    }
    if let Some(name) = &args.name {
        config = config.with_player_name(name.clone());
    }
    if let Some(speed) = args.guard_speed {
        config = config.with_lookout_speed(speed);
    }
    if args.no_save {
        config = config.with_autosave(false);
    }
    if args.starter_kit {
        config = config.with_starter_kit(true);
    }
    config
}

/// The save store a config points at.
pub fn save_store(config: &GameConfig) -> FileSaveStore {
    match &config.save_path {
        Some(path) => FileSaveStore::new(path),
        None => FileSaveStore::at_default_location(),
    }
}

/// A text session that resumes the save unless `fresh` is set.
pub fn open_session(config: GameConfig, fresh: bool) -> TextSession<FileSaveStore> {
    let store = save_store(&config);
    let resume = !fresh && store.exists();
    let game = if resume {
        GameController::load(config, store, RecordingPresenter::new())
    } else {
        GameController::new(config, store, RecordingPresenter::new())
    };
    TextSession::new(game)
}
