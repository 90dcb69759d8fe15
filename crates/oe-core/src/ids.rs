use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Stable identifier for every room in the office.
///
/// The lowercase name is what the save file stores on its first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomId {
    /// In front of the building.
    Outside,
    /// Where the ticket machine lives.
    Ticket,
    /// The queue and its guard.
    Queue,
    /// Metal detector.
    Security,
    /// Document verification.
    Documents,
    /// The interview.
    Interview,
    /// Approval.
    Approval,
    /// Freedom.
    Exit,
}

impl RoomId {
    /// All rooms in walking order.
    pub const ALL: [RoomId; 8] = [
        RoomId::Outside,
        RoomId::Ticket,
        RoomId::Queue,
        RoomId::Security,
        RoomId::Documents,
        RoomId::Interview,
        RoomId::Approval,
        RoomId::Exit,
    ];

    /// The room's stored name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Outside => "outside",
            Self::Ticket => "ticket",
            Self::Queue => "queue",
            Self::Security => "security",
            Self::Documents => "documents",
            Self::Interview => "interview",
            Self::Approval => "approval",
            Self::Exit => "exit",
        }
    }

    /// Resolve a room by exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoomId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CoreError::UnknownRoom(s.to_string()))
    }
}

/// Stable identifier for every puzzle. Globally unique across rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PuzzleId {
    /// Ticket machine quiz.
    Ticket,
    /// Bribing the queue guard.
    QueueGuard,
    /// Sneaking items past the metal detector.
    Security,
    /// The immigration interview.
    Interview,
}

impl PuzzleId {
    /// All puzzles.
    pub const ALL: [PuzzleId; 4] = [
        PuzzleId::Ticket,
        PuzzleId::QueueGuard,
        PuzzleId::Security,
        PuzzleId::Interview,
    ];

    /// The string form of this id.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ticket => "ticketPuzzle",
            Self::QueueGuard => "queueGuardPuzzle",
            Self::Security => "securityPuzzle",
            Self::Interview => "interviewPuzzle",
        }
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PuzzleId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CoreError::UnknownPuzzle(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_names_round_trip() {
        for id in RoomId::ALL {
            assert_eq!(RoomId::from_name(id.name()), Some(id));
        }
    }

    #[test]
    fn room_lookup_is_exact() {
        assert_eq!(RoomId::from_name("Queue"), None);
        assert_eq!(RoomId::from_name(" queue"), None);
        assert!("lobby".parse::<RoomId>().is_err());
    }

    #[test]
    fn puzzle_ids_parse() {
        assert_eq!("securityPuzzle".parse(), Ok(PuzzleId::Security));
        assert_eq!(
            "nope".parse::<PuzzleId>(),
            Err(CoreError::UnknownPuzzle("nope".into()))
        );
    }
}
