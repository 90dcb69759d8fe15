//! Game orchestration.

use std::time::Duration;

use oe_core::{
    Direction, InteractionResult, Item, Outcome, Player, PuzzleId, RoomId, ViewUpdate, catalog,
};
use oe_puzzle::{Puzzle, PuzzleAction, PuzzleContext, PuzzleResponse, TimingAction, preset};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::driver::LookoutSchedule;
use crate::error::GameResult;
use crate::gate::{check_entry, restore_implied_progress};
use crate::graph::RoomGraph;
use crate::presenter::Presenter;
use crate::room::{HotspotAction, Room};
use crate::save::{SaveData, SaveStore};
use crate::triggers::{ItemMove, item_move_trigger, post_solve_effects};

/// Animation played when the security guard turns away.
pub const ANIM_LOOKING_AWAY: &str = "guardLookingAway";
/// Animation played when the security guard turns back.
pub const ANIM_WATCHING: &str = "guardWatching";

/// What happened to a move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player is now in this room.
    Moved(RoomId),
    /// Nothing lies that way.
    NoExit,
    /// The destination refused entry.
    Blocked(String),
}

/// Input from a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A direction was pressed.
    Move(Direction),
    /// A hotspot was clicked.
    HotspotClicked(String),
    /// A hotspot was examined.
    HotspotExamined(String),
    /// Input for the open puzzle.
    PuzzleAction {
        /// Target puzzle.
        puzzle: PuzzleId,
        /// The action.
        action: PuzzleAction,
    },
    /// An item moved between the player and the room.
    ItemMoved {
        /// Item name.
        item: String,
        /// True when the item came from the room.
        from_room: bool,
    },
    /// The puzzle view was dismissed.
    ClosePuzzle,
    /// Time passed.
    Tick(Duration),
}

/// Owns the player and the rooms, turns front-end events into state
/// changes, and tells the presenter what to show.
pub struct GameController<S: SaveStore, P: Presenter> {
    graph: RoomGraph,
    player: Player,
    store: S,
    presenter: P,
    config: GameConfig,
    open_puzzle: Option<PuzzleId>,
    lookout: LookoutSchedule,
}

impl<S: SaveStore, P: Presenter> GameController<S, P> {
    /// Start a new game at the graph's start room.
    pub fn new(config: GameConfig, store: S, presenter: P) -> Self {
        let graph = RoomGraph::office();
        let mut player = Player::new(config.player_name.clone(), graph.start_room());
        if config.starter_kit {
            for name in preset::REQUIRED_DOCUMENTS {
                player.inventory.add(catalog::item_from_name(name));
            }
        }
        Self::assemble(graph, player, config, store, presenter)
    }

    /// Resume from the store's save, or start a new game when there is no
    /// usable save.
    pub fn load(config: GameConfig, store: S, presenter: P) -> Self {
        let data = match store.load() {
            Ok(data) => data,
            Err(e) => {
                warn!("could not load save, starting a new game: {e}");
                None
            }
        };
        let Some(data) = data else {
            return Self::new(config, store, presenter);
        };

        let mut graph = RoomGraph::office();
        let Some(room) = graph.find_by_name(&data.room).map(Room::id) else {
            warn!(room = %data.room, "save names an unknown room, starting a new game");
            return Self::new(config, store, presenter);
        };

        let mut player = Player::new(config.player_name.clone(), room);
        for name in &data.items {
            player.inventory.add(catalog::item_from_name(name));
            // A carried item is no longer where the world put it.
            for place in graph.rooms_mut() {
                place.inventory.remove(name);
            }
        }
        let restored = restore_implied_progress(&mut graph, room);
        info!(%room, items = data.items.len(), ?restored, "loaded save");
        Self::assemble(graph, player, config, store, presenter)
    }

    fn assemble(graph: RoomGraph, player: Player, config: GameConfig, store: S, presenter: P) -> Self {
        let lookout = LookoutSchedule::new(config.lookout_speed);
        Self {
            graph,
            player,
            store,
            presenter,
            config,
            open_puzzle: None,
            lookout,
        }
    }

    /// Show the starting view.
    pub fn start(&mut self) -> GameResult<()> {
        self.show_current_room()
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The rooms.
    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    /// The room the player stands in.
    pub fn current_room(&self) -> GameResult<&Room> {
        self.graph.room(self.player.location())
    }

    /// The puzzle whose view is open.
    pub fn open_puzzle(&self) -> Option<&Puzzle> {
        let id = self.open_puzzle?;
        self.current_room().ok()?.puzzle(id)
    }

    /// The front end.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The front end, mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// The save store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The security guard's schedule.
    pub fn lookout(&self) -> &LookoutSchedule {
        &self.lookout
    }

    /// Whether the player has walked out of the office.
    pub fn is_finished(&self) -> bool {
        self.player.location() == RoomId::Exit
    }

    /// Dispatch a front-end event.
    pub fn handle(&mut self, event: UiEvent) -> GameResult<()> {
        match event {
            UiEvent::Move(direction) => self.request_move(direction).map(|_| ()),
            UiEvent::HotspotClicked(id) => self.hotspot_clicked(&id).map(|_| ()),
            UiEvent::HotspotExamined(id) => self.hotspot_examined(&id).map(|_| ()),
            UiEvent::PuzzleAction { puzzle, action } => {
                self.puzzle_action(puzzle, action);
                Ok(())
            }
            UiEvent::ItemMoved { item, from_room } => {
                self.inventory_item_moved(&item, from_room).map(|_| ())
            }
            UiEvent::ClosePuzzle => {
                self.close_puzzle();
                Ok(())
            }
            UiEvent::Tick(dt) => {
                self.tick(dt);
                Ok(())
            }
        }
    }

    /// Try to walk through an exit.
    ///
    /// Fails only if the exit leads to a room the graph does not hold.
    pub fn request_move(&mut self, direction: Direction) -> GameResult<MoveOutcome> {
        let Some(destination) = self.current_room()?.exit(direction) else {
            self.presenter
                .show_transient_message(&format!("You cannot go {direction} from here."));
            return Ok(MoveOutcome::NoExit);
        };
        self.graph.room(destination)?;

        let decision = check_entry(destination, &self.player, &self.graph);
        if !decision.allowed {
            let reason = decision
                .reason
                .unwrap_or_else(|| "You cannot enter this room.".to_string());
            info!(%destination, %reason, "entry blocked");
            self.presenter.show_transient_message(&reason);
            return Ok(MoveOutcome::Blocked(reason));
        }

        self.close_puzzle();
        self.player.move_to(destination);
        info!(room = %destination, "entered room");
        self.show_current_room()?;
        self.presenter
            .show_transient_message(&format!("You move {direction}."));
        if self.is_finished() {
            self.presenter
                .show_transient_message("Congratulations! You escaped the office.");
        }
        self.autosave();
        Ok(MoveOutcome::Moved(destination))
    }

    /// Click a hotspot in the current room and apply the result.
    pub fn hotspot_clicked(&mut self, id: &str) -> GameResult<InteractionResult> {
        self.touch_hotspot(id, HotspotAction::Click)
    }

    /// Examine a hotspot in the current room.
    pub fn hotspot_examined(&mut self, id: &str) -> GameResult<InteractionResult> {
        self.touch_hotspot(id, HotspotAction::Examine)
    }

    fn touch_hotspot(&mut self, id: &str, action: HotspotAction) -> GameResult<InteractionResult> {
        let result = self.current_room()?.interact(id, action);
        debug!(hotspot = id, ?action, outcome = ?result.outcome, "hotspot");
        self.apply_result(result.clone());
        Ok(result)
    }

    /// Send an action to the open puzzle. Actions for a puzzle that is not
    /// open are answered with a message.
    pub fn puzzle_action(&mut self, id: PuzzleId, action: PuzzleAction) -> PuzzleResponse {
        if self.open_puzzle != Some(id) {
            let response = PuzzleResponse::open(InteractionResult::message("That puzzle isn't open."));
            self.apply_result(response.result.clone());
            return response;
        }

        let restarts_lookout = action == PuzzleAction::Timing(TimingAction::Reset);
        let ctx = PuzzleContext::new(&self.player.inventory);
        let Some(puzzle) = self
            .graph
            .room_mut(self.player.location())
            .ok()
            .and_then(|room| room.puzzle_mut(id))
        else {
            self.close_puzzle();
            return PuzzleResponse::closing(InteractionResult::none());
        };
        let response = puzzle.interact(action, &ctx);
        debug!(puzzle = %id, solved = response.solved, closed = response.closed, "puzzle action");

        if restarts_lookout && self.lookout.is_running() {
            self.lookout.start();
        }
        self.apply_result(response.result.clone());
        if response.closed {
            self.close_puzzle();
        }
        response
    }

    /// Move an item between the player and the current room, then run any
    /// item-move trigger. Returns whether the item moved.
    pub fn inventory_item_moved(&mut self, item: &str, from_room: bool) -> GameResult<bool> {
        let location = self.player.location();
        let room = self.graph.room_mut(location)?;
        let (moved, movement) = if from_room {
            (room.inventory.transfer_to(&mut self.player.inventory, item), ItemMove::Taken)
        } else {
            (self.player.inventory.transfer_to(&mut room.inventory, item), ItemMove::Dropped)
        };

        if !moved {
            let text = if from_room {
                format!("There is no {item} here.")
            } else {
                format!("You aren't carrying {item}.")
            };
            self.presenter.show_transient_message(&text);
            return Ok(false);
        }

        let verb = if from_room { "take" } else { "drop" };
        self.presenter
            .show_transient_message(&format!("You {verb} the {item}."));

        if let Some(trigger) = item_move_trigger(location, item, movement, &self.player.inventory) {
            info!(room = %location, item, granted = trigger.grant, "item trigger fired");
            self.player
                .inventory
                .add(catalog::item_from_name(trigger.grant));
            self.presenter.show_transient_message(trigger.message);
        }
        self.refresh_inventory()?;
        Ok(true)
    }

    /// Close the open puzzle view, if any, and halt its signal driver.
    pub fn close_puzzle(&mut self) {
        if let Some(id) = self.open_puzzle.take() {
            debug!(puzzle = %id, "puzzle closed");
            self.lookout.stop();
            self.presenter.hide_puzzle_overlay();
        }
    }

    /// Advance time. Drives the looking-away signal of an open timing
    /// challenge.
    pub fn tick(&mut self, dt: Duration) {
        let Some(id) = self.open_puzzle else { return };
        let Some(away) = self.lookout.advance(dt) else {
            return;
        };
        let timing = self
            .graph
            .room_mut(self.player.location())
            .ok()
            .and_then(|room| room.puzzle_mut(id))
            .and_then(Puzzle::as_timing_mut);
        if let Some(timing) = timing {
            timing.set_looking_away(away);
            let animation = if away { ANIM_LOOKING_AWAY } else { ANIM_WATCHING };
            self.presenter
                .apply_view_updates(&[ViewUpdate::PlayAnimation(animation.to_string())]);
        }
    }

    /// Write the current room and inventory to the store.
    pub fn save(&self) -> GameResult<()> {
        let data = SaveData::new(self.player.location().name(), self.player.inventory.names());
        self.store.save(&data)
    }

    fn autosave(&mut self) {
        if !self.config.autosave {
            return;
        }
        match self.save() {
            Ok(()) => self.presenter.show_save_indicator(),
            Err(e) => warn!("autosave failed, continuing without saving: {e}"),
        }
    }

    fn open_puzzle_view(&mut self, id: PuzzleId) {
        let Some(puzzle) = self
            .graph
            .room_mut(self.player.location())
            .ok()
            .and_then(|room| room.puzzle_mut(id))
        else {
            return;
        };
        if !puzzle.can_start(&self.player.inventory) {
            self.presenter
                .show_transient_message("You cannot start this puzzle right now.");
            return;
        }

        puzzle.on_open();
        let is_timing = matches!(puzzle, Puzzle::Timing(_));
        self.open_puzzle = Some(id);
        if is_timing {
            self.lookout.start();
        }
        debug!(puzzle = %id, "puzzle opened");
        self.presenter.show_puzzle_overlay(id);
    }

    fn apply_result(&mut self, result: InteractionResult) {
        let InteractionResult {
            outcome,
            view_updates,
        } = result;

        match outcome {
            Outcome::Message(text) => self.presenter.show_transient_message(&text),
            Outcome::Dialogue { lines } => {
                for line in &lines {
                    self.presenter.show_transient_message(line);
                }
            }
            Outcome::PuzzleTriggered { puzzle } => self.open_puzzle_view(puzzle),
            Outcome::PuzzleSolved {
                puzzle,
                item,
                dialogue,
            } => {
                info!(%puzzle, "puzzle solved");
                self.close_puzzle();
                for line in &dialogue {
                    self.presenter.show_transient_message(line);
                }
                for effect in post_solve_effects(puzzle) {
                    if self.player.inventory.remove(effect.consume).is_some() {
                        self.presenter.show_transient_message(effect.message);
                    }
                }
                if let Some(item) = item {
                    self.grant(item);
                }
                self.refresh_inventory_quietly();
            }
            Outcome::ItemObtained { item } => {
                self.grant(item);
                self.refresh_inventory_quietly();
            }
            Outcome::DoorUnlocked { next_room } => info!(%next_room, "door unlocked"),
            Outcome::None => {}
        }

        if !view_updates.is_empty() {
            if let Ok(room) = self.graph.room_mut(self.player.location()) {
                room.apply_view_updates(&view_updates);
            }
            self.presenter.apply_view_updates(&view_updates);
        }
    }

    fn grant(&mut self, item: Item) {
        self.presenter
            .show_transient_message(&format!("Item obtained: {}", item.name()));
        self.player.inventory.add(item);
    }

    fn show_current_room(&mut self) -> GameResult<()> {
        let room = self.graph.room(self.player.location())?;
        self.presenter.show_room(room);
        self.presenter
            .update_inventory(&self.player.inventory, &room.inventory);
        Ok(())
    }

    fn refresh_inventory(&mut self) -> GameResult<()> {
        let room = self.graph.room(self.player.location())?;
        self.presenter
            .update_inventory(&self.player.inventory, &room.inventory);
        Ok(())
    }

    fn refresh_inventory_quietly(&mut self) {
        if let Err(e) = self.refresh_inventory() {
            warn!("inventory refresh failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::{PresenterEvent, RecordingPresenter};
    use crate::save::MemorySaveStore;
    use oe_puzzle::{DialogueAction, QuizAction};

    type TestGame = GameController<MemorySaveStore, RecordingPresenter>;

    fn game() -> TestGame {
        GameController::new(
            GameConfig::default(),
            MemorySaveStore::new(),
            RecordingPresenter::new(),
        )
    }

    fn game_in(room: RoomId) -> TestGame {
        let mut game = game();
        game.player.move_to(room);
        game
    }

    fn give(game: &mut TestGame, name: &str) {
        game.player.inventory.add(catalog::item_from_name(name));
    }

    fn last_message(game: &TestGame) -> Option<String> {
        game.presenter().messages().last().map(|m| m.to_string())
    }

    #[test]
    fn start_shows_room_and_inventory() {
        let mut game = game();
        game.start().unwrap();
        let events = game.presenter().events();
        assert!(matches!(
            &events[0],
            PresenterEvent::RoomShown { room: RoomId::Outside, .. }
        ));
        assert_eq!(
            events[1],
            PresenterEvent::Inventory {
                player: vec![],
                room: vec!["bananaPeel".to_string()]
            }
        );
    }

    #[test]
    fn no_exit() {
        let mut game = game();
        let outcome = game.request_move(Direction::Backward).unwrap();
        assert_eq!(outcome, MoveOutcome::NoExit);
        assert_eq!(
            last_message(&game).as_deref(),
            Some("You cannot go backward from here.")
        );
    }

    #[test]
    fn move_autosaves() {
        let mut game = game();
        let outcome = game.request_move(Direction::Forward).unwrap();
        assert_eq!(outcome, MoveOutcome::Moved(RoomId::Ticket));
        assert_eq!(game.player().location(), RoomId::Ticket);
        assert_eq!(
            game.store().snapshot(),
            Some(SaveData::new("ticket", Vec::<String>::new()))
        );
        assert_eq!(game.presenter().events().last(), Some(&PresenterEvent::Saved));
    }

    #[test]
    fn autosave_can_be_disabled() {
        let mut game = GameController::new(
            GameConfig::default().with_autosave(false),
            MemorySaveStore::new(),
            RecordingPresenter::new(),
        );
        game.request_move(Direction::Forward).unwrap();
        assert!(!game.store().exists());
    }

    #[test]
    fn blocked_move_keeps_position() {
        let mut game = game_in(RoomId::Ticket);
        let outcome = game.request_move(Direction::Forward).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Blocked("You need to take a ticket from the machine first.".to_string())
        );
        assert_eq!(game.player().location(), RoomId::Ticket);
        assert!(!game.store().exists());
    }

    #[test]
    fn ticket_machine_flow() {
        let mut game = game_in(RoomId::Ticket);
        game.hotspot_clicked("ticketMachine").unwrap();
        assert_eq!(game.open_puzzle().map(Puzzle::id), Some(PuzzleId::Ticket));

        for (i, answer) in [2, 2, 3, 1, 1].into_iter().enumerate() {
            if i > 0 {
                game.puzzle_action(PuzzleId::Ticket, PuzzleAction::Quiz(QuizAction::Next));
            }
            game.puzzle_action(PuzzleId::Ticket, PuzzleAction::Quiz(QuizAction::Answer(answer)));
        }
        let response =
            game.puzzle_action(PuzzleId::Ticket, PuzzleAction::Quiz(QuizAction::Complete));
        assert!(response.solved);
        assert!(game.player().has_item(catalog::TICKET));
        assert!(game.open_puzzle().is_none());
        assert!(game.presenter().messages().contains(&"You got ticket number 12!"));

        game.hotspot_clicked("ticketMachine").unwrap();
        assert!(game.open_puzzle().is_none());
        assert_eq!(
            last_message(&game).as_deref(),
            Some("You cannot start this puzzle right now.")
        );
    }

    #[test]
    fn guard_bribe_consumes_popsicle() {
        let mut game = game_in(RoomId::Queue);
        give(&mut game, catalog::POPSICLE);
        game.hotspot_clicked("guard").unwrap();

        let select = |i| PuzzleAction::Dialogue(DialogueAction::SelectOption(i));
        game.puzzle_action(PuzzleId::QueueGuard, select(1));
        game.puzzle_action(PuzzleId::QueueGuard, select(2));
        let response = game.puzzle_action(PuzzleId::QueueGuard, select(0));

        assert!(response.solved);
        assert!(!game.player().has_item(catalog::POPSICLE));
        assert!(game.graph().is_solved(PuzzleId::QueueGuard));
        assert!(game
            .presenter()
            .messages()
            .contains(&"You gave the popsicle to the guard."));
        assert!(game.presenter().events().contains(&PresenterEvent::ViewUpdates(vec![
            ViewUpdate::EnableHotspot("nextRoom".to_string())
        ])));

        let outcome = game.request_move(Direction::Forward).unwrap();
        assert_eq!(outcome, MoveOutcome::Moved(RoomId::Security));
    }

    #[test]
    fn guard_conversation_restarts_on_reopen() {
        let mut game = game_in(RoomId::Queue);
        game.hotspot_clicked("guard").unwrap();
        game.puzzle_action(
            PuzzleId::QueueGuard,
            PuzzleAction::Dialogue(DialogueAction::SelectOption(0)),
        );
        game.close_puzzle();
        game.hotspot_clicked("guard").unwrap();
        let Some(Puzzle::Dialogue(guard)) = game.open_puzzle() else {
            panic!("guard dialogue should be open");
        };
        assert_eq!(guard.current_index(), 0);
    }

    #[test]
    fn banana_peel_slip() {
        let mut game = game_in(RoomId::Queue);
        give(&mut game, catalog::BANANA_PEEL);
        assert!(game.inventory_item_moved(catalog::BANANA_PEEL, false).unwrap());
        assert!(game.player().has_item(catalog::STOLEN_DOCUMENT));
        assert!(!game.player().has_item(catalog::BANANA_PEEL));
        assert!(game
            .current_room()
            .unwrap()
            .inventory
            .contains(catalog::BANANA_PEEL));

        // Picking it up and dropping it again does nothing more.
        game.inventory_item_moved(catalog::BANANA_PEEL, true).unwrap();
        let before = game.presenter().messages().len();
        game.inventory_item_moved(catalog::BANANA_PEEL, false).unwrap();
        assert_eq!(game.presenter().messages().len(), before + 1);
    }

    #[test]
    fn moving_missing_items() {
        let mut game = game();
        assert!(!game.inventory_item_moved(catalog::PASSPORT, true).unwrap());
        assert_eq!(last_message(&game).as_deref(), Some("There is no passport here."));
        assert!(!game.inventory_item_moved(catalog::PASSPORT, false).unwrap());
        assert_eq!(
            last_message(&game).as_deref(),
            Some("You aren't carrying passport.")
        );
    }

    #[test]
    fn security_driven_by_ticks() {
        let mut game = game_in(RoomId::Security);
        game.hotspot_clicked("metalDetector").unwrap();
        assert!(game.lookout().is_running());

        let throw = || PuzzleAction::Timing(TimingAction::ThrowItem);
        game.tick(Duration::from_secs(3));
        assert!(game.presenter().events().contains(&PresenterEvent::ViewUpdates(vec![
            ViewUpdate::PlayAnimation(ANIM_LOOKING_AWAY.to_string())
        ])));
        game.puzzle_action(PuzzleId::Security, throw());
        game.puzzle_action(PuzzleId::Security, throw());
        let response = game.puzzle_action(PuzzleId::Security, throw());

        assert!(response.solved);
        assert!(game.graph().is_solved(PuzzleId::Security));
        assert!(!game.lookout().is_running());
    }

    #[test]
    fn security_caught_while_watching() {
        let mut game = game_in(RoomId::Security);
        game.hotspot_clicked("metalDetector").unwrap();
        game.puzzle_action(PuzzleId::Security, PuzzleAction::Timing(TimingAction::ThrowItem));
        assert_eq!(
            last_message(&game).as_deref(),
            Some("CAUGHT! The guard saw you. Try again when they look away.")
        );

        game.tick(Duration::from_secs(3));
        game.puzzle_action(PuzzleId::Security, PuzzleAction::Timing(TimingAction::ThrowItem));
        assert_eq!(
            last_message(&game).as_deref(),
            Some("You've been caught! Try again.")
        );
    }

    #[test]
    fn closing_halts_driver() {
        let mut game = game_in(RoomId::Security);
        game.hotspot_clicked("metalDetector").unwrap();
        game.close_puzzle();
        assert!(!game.lookout().is_running());
        let before = game.presenter().events().len();
        game.tick(Duration::from_secs(3));
        assert_eq!(game.presenter().events().len(), before);
    }

    #[test]
    fn action_for_closed_puzzle() {
        let mut game = game_in(RoomId::Ticket);
        let response =
            game.puzzle_action(PuzzleId::Ticket, PuzzleAction::Quiz(QuizAction::Complete));
        assert_eq!(response.result.message_text(), Some("That puzzle isn't open."));
        assert!(!game.graph().is_solved(PuzzleId::Ticket));
    }

    #[test]
    fn starter_kit() {
        let game = GameController::new(
            GameConfig::default().with_starter_kit(true),
            MemorySaveStore::new(),
            RecordingPresenter::new(),
        );
        assert_eq!(game.player().inventory.len(), 5);
        assert!(game.player().has_item(catalog::STOLEN_DOCUMENT));
    }

    #[test]
    fn load_round_trip() {
        let store = MemorySaveStore::with_save(SaveData::new("ticket", ["ticketItem", "popsicle"]));
        let game = GameController::load(GameConfig::default(), store, RecordingPresenter::new());
        assert_eq!(game.player().location(), RoomId::Ticket);
        let mut names: Vec<_> = game.player().inventory.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["popsicle", "ticketItem"]);
        assert_eq!(
            game.player().inventory.get("popsicle").map(Item::description),
            Some("A refreshing popsicle, perfect for a hot day")
        );
    }

    #[test]
    fn load_takes_carried_items_out_of_rooms() {
        let store = MemorySaveStore::with_save(SaveData::new(
            "queue",
            ["ticketItem", "popsicle", "bananaPeel"],
        ));
        let game = GameController::load(GameConfig::default(), store, RecordingPresenter::new());
        for name in game.player().inventory.names() {
            for room in game.graph().rooms() {
                assert!(
                    !room.inventory.contains(name),
                    "{name} is carried and also lying in {}",
                    room.id()
                );
            }
        }
        assert!(game.graph().room(RoomId::Outside).unwrap().inventory.is_empty());
    }

    #[test]
    fn load_unknown_room_starts_fresh() {
        let store = MemorySaveStore::with_save(SaveData::new("lobby", ["passport"]));
        let game = GameController::load(GameConfig::default(), store, RecordingPresenter::new());
        assert_eq!(game.player().location(), RoomId::Outside);
        assert!(game.player().inventory.is_empty());
    }

    #[test]
    fn load_restores_implied_progress() {
        let store = MemorySaveStore::with_save(SaveData::new("documents", ["ticketItem"]));
        let mut game = GameController::load(GameConfig::default(), store, RecordingPresenter::new());
        assert!(game.graph().is_solved(PuzzleId::QueueGuard));
        assert_eq!(
            game.request_move(Direction::Backward).unwrap(),
            MoveOutcome::Moved(RoomId::Security)
        );
    }

    #[test]
    fn handle_dispatches_events() {
        let mut game = game();
        game.handle(UiEvent::ItemMoved {
            item: catalog::BANANA_PEEL.to_string(),
            from_room: true,
        })
        .unwrap();
        game.handle(UiEvent::Move(Direction::Forward)).unwrap();
        assert_eq!(game.player().location(), RoomId::Ticket);
        assert!(game.player().has_item(catalog::BANANA_PEEL));
        game.handle(UiEvent::HotspotExamined("ticketMachine".to_string()))
            .unwrap();
        assert!(last_message(&game).is_some_and(|m| m.starts_with("A ticket machine")));
    }
}
