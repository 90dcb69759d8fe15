//! Save files.
//!
//! A save is plain text: the room name on the first line, then one item
//! name per line. Blank item lines are ignored on read; a blank first line
//! makes the save corrupt.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GameError, GameResult};

/// File name used in the data directory.
pub const SAVE_FILE_NAME: &str = "savegame.txt";

/// The contents of a save file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveData {
    /// Name of the room the player stood in.
    pub room: String,
    /// Names of the items the player carried.
    pub items: Vec<String>,
}

impl SaveData {
    /// Build from a room name and item names.
    pub fn new(room: impl Into<String>, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            room: room.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Render as save-file text.
    pub fn to_text(&self) -> String {
        let mut text = format!("{}\n", self.room);
        for item in &self.items {
            text.push_str(item);
            text.push('\n');
        }
        text
    }

    /// Parse save-file text.
    pub fn parse(text: &str) -> GameResult<Self> {
        let mut lines = text.lines().map(str::trim);
        let room = lines
            .next()
            .filter(|room| !room.is_empty())
            .ok_or_else(|| GameError::CorruptSave("no room on the first line".to_string()))?;
        Ok(Self::new(room, lines.filter(|line| !line.is_empty())))
    }
}

/// Where saves go.
pub trait SaveStore {
    /// Overwrite the save.
    fn save(&self, data: &SaveData) -> GameResult<()>;

    /// Read the save. `Ok(None)` means there is none.
    fn load(&self) -> GameResult<Option<SaveData>>;

    /// Whether a save exists.
    fn exists(&self) -> bool;

    /// Remove the save, if any.
    fn delete(&self) -> GameResult<()>;
}

/// The platform data directory's save file, or `./savegame.txt` when the
/// platform has none.
///
/// - Linux: `~/.local/share/office-escape/savegame.txt`
/// - macOS: `~/Library/Application Support/office-escape/savegame.txt`
/// - Windows: `%APPDATA%\office-escape\data\savegame.txt`
pub fn default_save_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "office-escape")
        .map(|dirs| dirs.data_dir().join(SAVE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(".").join(SAVE_FILE_NAME))
}

/// A save file on disk, written atomically.
#[derive(Debug, Clone)]
pub struct FileSaveStore {
    path: PathBuf,
}

impl FileSaveStore {
    /// Store at a specific path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store at [`default_save_path`].
    pub fn at_default_location() -> Self {
        Self::new(default_save_path())
    }

    /// The save file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> GameError {
        GameError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SaveStore for FileSaveStore {
    fn save(&self, data: &SaveData) -> GameResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let temp_path = self.path.with_extension("txt.tmp");

        fs::write(&temp_path, data.to_text()).map_err(|e| self.io_error(e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| self.io_error(e))?;

        tracing::debug!("Saved game to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> GameResult<Option<SaveData>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let data = SaveData::parse(&text)?;

        tracing::debug!("Loaded game from {}", self.path.display());
        Ok(Some(data))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn delete(&self) -> GameResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| self.io_error(e))?;
            tracing::debug!("Deleted save {}", self.path.display());
        }
        Ok(())
    }
}

/// A save slot held in memory, for tests and `--no-save` runs.
#[derive(Debug, Default)]
pub struct MemorySaveStore {
    slot: RefCell<Option<SaveData>>,
}

impl MemorySaveStore {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that already holds a save.
    pub fn with_save(data: SaveData) -> Self {
        Self {
            slot: RefCell::new(Some(data)),
        }
    }

    /// A copy of the current save.
    pub fn snapshot(&self) -> Option<SaveData> {
        self.slot.borrow().clone()
    }
}

impl SaveStore for MemorySaveStore {
    fn save(&self, data: &SaveData) -> GameResult<()> {
        *self.slot.borrow_mut() = Some(data.clone());
        Ok(())
    }

    fn load(&self) -> GameResult<Option<SaveData>> {
        Ok(self.slot.borrow().clone())
    }

    fn exists(&self) -> bool {
        self.slot.borrow().is_some()
    }

    fn delete(&self) -> GameResult<()> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}
