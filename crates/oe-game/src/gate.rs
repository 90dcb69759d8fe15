//! Room entry rules.
//!
//! One table answers both "may the player enter?" and "why not?", so the
//! two can never disagree.

use oe_core::{Player, PuzzleId, RoomId, catalog};
use tracing::debug;

use crate::graph::RoomGraph;

/// Something a room asks of the player before letting them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Carry an item.
    Carry {
        /// Item name.
        item: &'static str,
        /// How the requirement reads in a block message.
        phrase: &'static str,
    },
    /// Have solved a puzzle somewhere in the graph.
    Solved {
        /// Puzzle id.
        puzzle: PuzzleId,
        /// How the requirement reads in a block message.
        phrase: &'static str,
    },
}

impl Requirement {
    /// Whether the requirement currently holds.
    pub fn is_met(&self, player: &Player, graph: &RoomGraph) -> bool {
        match self {
            Requirement::Carry { item, .. } => player.has_item(item),
            Requirement::Solved { puzzle, .. } => graph.is_solved(*puzzle),
        }
    }

    /// How the requirement reads to the player.
    pub fn phrase(&self) -> &'static str {
        match self {
            Requirement::Carry { phrase, .. } | Requirement::Solved { phrase, .. } => *phrase,
        }
    }
}

/// The requirements guarding one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRule {
    /// The guarded room.
    pub room: RoomId,
    /// Every requirement must hold.
    pub requires: &'static [Requirement],
}

const BRIBE_GUARD: Requirement = Requirement::Solved {
    puzzle: PuzzleId::QueueGuard,
    phrase: "bribe the guard to skip the line",
};

const PASS_SECURITY: Requirement = Requirement::Solved {
    puzzle: PuzzleId::Security,
    phrase: "pass through security",
};

/// The office's entry rules.
pub const ENTRY_RULES: &[EntryRule] = &[
    EntryRule {
        room: RoomId::Queue,
        requires: &[Requirement::Carry {
            item: catalog::TICKET,
            phrase: "take a ticket from the machine",
        }],
    },
    EntryRule {
        room: RoomId::Security,
        requires: &[BRIBE_GUARD],
    },
    EntryRule {
        room: RoomId::Interview,
        requires: &[BRIBE_GUARD, PASS_SECURITY],
    },
];

/// Whether a move is allowed, and why not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDecision {
    /// The player may enter.
    pub allowed: bool,
    /// Set when `allowed` is false.
    pub reason: Option<String>,
}

impl EntryDecision {
    fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }
}

/// The rule guarding a room, if any.
pub fn rule_for(room: RoomId) -> Option<&'static EntryRule> {
    ENTRY_RULES.iter().find(|rule| rule.room == room)
}

/// Decide whether `player` may enter `room`. Pure.
pub fn check_entry(room: RoomId, player: &Player, graph: &RoomGraph) -> EntryDecision {
    let Some(rule) = rule_for(room) else {
        return EntryDecision::allow();
    };
    let unmet: Vec<&str> = rule
        .requires
        .iter()
        .filter(|req| !req.is_met(player, graph))
        .map(Requirement::phrase)
        .collect();
    if unmet.is_empty() {
        return EntryDecision::allow();
    }

    debug!(%room, ?unmet, "entry blocked");
    EntryDecision {
        allowed: false,
        reason: Some(format!("You need to {} first.", join_phrases(&unmet))),
    }
}

fn join_phrases(phrases: &[&str]) -> String {
    match phrases {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

/// Mark solved every puzzle that gates a room on the forward path up to
/// `room`. A save stores only the room, so reaching it proves these.
pub fn restore_implied_progress(graph: &mut RoomGraph, room: RoomId) -> Vec<PuzzleId> {
    let mut restored = Vec::new();
    for id in graph.forward_path_to(room) {
        let Some(rule) = rule_for(id) else { continue };
        for req in rule.requires {
            if let Requirement::Solved { puzzle, .. } = req
                && let Some(p) = graph.puzzle_mut(*puzzle)
                && !p.is_solved()
            {
                p.mark_solved();
                restored.push(*puzzle);
            }
        }
    }
    restored
}

#[cfg(test)]
mod tests {
    use super::*;
    use oe_core::Item;
    use proptest::prelude::*;

    fn player() -> Player {
        Player::new("Tester", RoomId::Queue)
    }

    #[test]
    fn unguarded_rooms_allow() {
        let graph = RoomGraph::office();
        for room in [RoomId::Outside, RoomId::Ticket, RoomId::Documents, RoomId::Exit] {
            assert!(check_entry(room, &player(), &graph).allowed);
        }
    }

    #[test]
    fn queue_needs_ticket() {
        let graph = RoomGraph::office();
        let mut p = player();
        let blocked = check_entry(RoomId::Queue, &p, &graph);
        assert!(!blocked.allowed);
        assert_eq!(
            blocked.reason.as_deref(),
            Some("You need to take a ticket from the machine first.")
        );

        p.inventory.add(Item::new(catalog::TICKET, ""));
        assert_eq!(check_entry(RoomId::Queue, &p, &graph), EntryDecision::allow());
    }

    #[test]
    fn security_needs_guard() {
        let mut graph = RoomGraph::office();
        let p = player();
        let blocked = check_entry(RoomId::Security, &p, &graph);
        assert_eq!(
            blocked.reason.as_deref(),
            Some("You need to bribe the guard to skip the line first.")
        );

        if let Some(guard) = graph.puzzle_mut(PuzzleId::QueueGuard) {
            guard.mark_solved();
        }
        let open = check_entry(RoomId::Security, &p, &graph);
        assert!(open.allowed);
        assert_eq!(open.reason, None);
    }

    #[test]
    fn interview_names_every_unmet_requirement() {
        let mut graph = RoomGraph::office();
        let p = player();
        assert_eq!(
            check_entry(RoomId::Interview, &p, &graph).reason.as_deref(),
            Some("You need to bribe the guard to skip the line and pass through security first.")
        );

        if let Some(guard) = graph.puzzle_mut(PuzzleId::QueueGuard) {
            guard.mark_solved();
        }
        assert_eq!(
            check_entry(RoomId::Interview, &p, &graph).reason.as_deref(),
            Some("You need to pass through security first.")
        );
    }

    #[test]
    fn check_is_pure() {
        let graph = RoomGraph::office();
        let p = player();
        let first = check_entry(RoomId::Security, &p, &graph);
        let second = check_entry(RoomId::Security, &p, &graph);
        assert_eq!(first, second);
    }

    #[test]
    fn implied_progress_up_to_room() {
        let mut graph = RoomGraph::office();
        assert!(restore_implied_progress(&mut graph, RoomId::Queue).is_empty());

        let restored = restore_implied_progress(&mut graph, RoomId::Documents);
        assert_eq!(restored, vec![PuzzleId::QueueGuard]);
        assert!(graph.is_solved(PuzzleId::QueueGuard));
        assert!(!graph.is_solved(PuzzleId::Security));

        let restored = restore_implied_progress(&mut graph, RoomId::Exit);
        assert_eq!(restored, vec![PuzzleId::Security]);
    }

    #[test]
    fn join_phrases_reads_naturally() {
        assert_eq!(join_phrases(&["a"]), "a");
        assert_eq!(join_phrases(&["a", "b"]), "a and b");
        assert_eq!(join_phrases(&["a", "b", "c"]), "a, b and c");
    }

    proptest! {
        #[test]
        fn decision_depends_only_on_state(
            room in 0..RoomId::ALL.len(),
            ticket in any::<bool>(),
            guard in any::<bool>(),
            security in any::<bool>(),
        ) {
            let room = RoomId::ALL[room];
            let mut graph = RoomGraph::office();
            let mut p = player();
            if ticket {
                p.inventory.add(Item::new(catalog::TICKET, ""));
            }
            for (solved, id) in [(guard, PuzzleId::QueueGuard), (security, PuzzleId::Security)] {
                if solved && let Some(puzzle) = graph.puzzle_mut(id) {
                    puzzle.mark_solved();
                }
            }

            let first = check_entry(room, &p, &graph);
            let second = check_entry(room, &p, &graph);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.allowed, first.reason.is_none());
        }
    }
}
