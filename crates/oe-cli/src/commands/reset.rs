use oe_game::{GameConfig, SaveStore};

/// Delete the save file, if there is one.
pub fn run(config: &GameConfig) -> Result<(), String> {
    let store = super::save_store(config);
    if !store.exists() {
        println!("  No save file at {}", store.path().display());
        return Ok(());
    }

    store.delete().map_err(|e| e.to_string())?;
    println!("  Deleted {}", store.path().display());
    Ok(())
}
