//! The turn engine.
//!
//! `PursuitGame` owns the whole game context (graph, positions, turn,
//! result, history and the random picker) and is the only thing that
//! mutates it. Every entry point runs to completion before returning:
//! validate → commit → erode an edge → check for a winner → let the
//! automated side reply → erode again → check again.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::controls::Command;
use super::snapshot::GameSnapshot;
use crate::agents::{AgentKind, AttackAgent, EvadeAgent, MovePolicy};
use crate::core::{
    Agent, AgentState, ConfigError, Direction, GameConfig, GameMode, GameRng, IndexPicker,
    MoveRecord, Position, TurnState,
};
use crate::graph::{shortest_path, EdgeId, GridGraph, Path};
use crate::rules::{self, Automation, GameResult, ModeRoles};

/// Why a move intent was ignored. State is unchanged in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The game has already ended.
    GameOver,
    /// The intent came from an agent that may not move now.
    NotYourTurn,
    /// The step would leave the grid.
    OutOfBounds,
    /// No active edge connects the two cells.
    NoEdge,
}

/// What a move intent did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed.
    Ignored(Rejection),
    /// The move was committed.
    Moved {
        /// Where the moving agent ended up.
        to: Position,
        /// Where the automated side moved in response, if it moved.
        reply: Option<Position>,
        /// Result after the whole turn.
        result: GameResult,
    },
}

impl MoveOutcome {
    /// Was the intent committed?
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// A running pursuit game.
///
/// Generic over the random source so tests can script edge erosion.
pub struct PursuitGame<P: IndexPicker = GameRng> {
    config: GameConfig,
    mode: GameMode,
    graph: GridGraph,
    agents: AgentState,
    turn: TurnState,
    result: GameResult,
    turn_number: u32,
    history: Vector<MoveRecord>,
    fixed_start: Option<AgentState>,
    picker: P,
    attack: AttackAgent,
    evade: EvadeAgent,
}

impl PursuitGame<GameRng> {
    /// Start a game seeded from `config.seed`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        super::GameBuilder::new().config(config).build()
    }
}

impl<P: IndexPicker> PursuitGame<P> {
    /// Assemble a game and run the initial reset.
    ///
    /// The configuration must already be validated.
    pub(super) fn assemble(config: GameConfig, fixed_start: Option<AgentState>, picker: P) -> Self {
        let mut game = Self {
            mode: config.mode,
            graph: GridGraph::new(config.grid_size),
            agents: AgentState::new(Position::new(0, 0), Position::new(0, 0)),
            turn: TurnState::default(),
            result: GameResult::InProgress,
            turn_number: 1,
            history: Vector::new(),
            fixed_start,
            picker,
            attack: AttackAgent::default(),
            evade: EvadeAgent::default(),
            config,
        };
        game.reset();
        game
    }

    /// Replace the board after assembly and judge the starting position.
    pub(super) fn install_graph(&mut self, graph: GridGraph) {
        self.graph = graph;
        self.update_result();
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Role table entry for the current mode.
    #[must_use]
    pub fn roles(&self) -> &'static ModeRoles {
        ModeRoles::for_mode(self.mode)
    }

    #[must_use]
    pub fn graph(&self) -> &GridGraph {
        &self.graph
    }

    #[must_use]
    pub fn agents(&self) -> &AgentState {
        &self.agents
    }

    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The agent whose intents are accepted right now.
    #[must_use]
    pub fn current_actor(&self) -> Agent {
        match (self.roles().automated, self.turn) {
            (Some(automation), _) => automation.agent.opponent(),
            (None, TurnState::RedToMove) => Agent::Red,
            (None, TurnState::BlueToMove) => Agent::Blue,
        }
    }

    // === Queries ===

    /// Cells reachable in one step from `pos`.
    #[must_use]
    pub fn valid_moves(&self, pos: Position) -> SmallVec<[Position; 4]> {
        self.graph.neighbors(pos)
    }

    #[must_use]
    pub fn is_adjacent_via_active_edge(&self, a: Position, b: Position) -> bool {
        self.graph.is_adjacent_via_active_edge(a, b)
    }

    #[must_use]
    pub fn shortest_path(&self, a: Position, b: Position) -> Option<Path> {
        shortest_path(&self.graph, a, b)
    }

    /// Read-only view for renderers. Shares structure with the live game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            mode: self.mode,
            grid_size: self.graph.size(),
            edges: self.graph.edges().clone(),
            agents: self.agents,
            joined: self.agents.joined(),
            turn: self.turn,
            turn_number: self.turn_number,
            result: self.result,
            message: self.result.to_string(),
            history: self.history.clone(),
        }
    }

    // === Lifecycle ===

    /// Rebuild the board and place both agents for the current mode.
    pub fn reset(&mut self) {
        self.graph = GridGraph::new(self.config.grid_size);
        let gaps = self
            .graph
            .remove_interior_edges(self.config.initial_gaps, &mut self.picker);

        self.agents = match self.fixed_start {
            Some(start) => start,
            None => self.random_start(),
        };
        self.turn = TurnState::RedToMove;
        self.result = GameResult::InProgress;
        self.turn_number = 1;
        self.history = Vector::new();

        debug!(
            "Reset {} game: blue at {}, red at {}, {} interior gaps",
            self.mode, self.agents.blue, self.agents.red, gaps
        );
    }

    /// Switch mode and reset.
    pub fn set_mode(&mut self, mode: GameMode) {
        debug!("Mode changed from {} to {}", self.mode, mode);
        self.mode = mode;
        self.config.mode = mode;
        self.reset();
    }

    /// Advance to the next mode in the toggle cycle and reset.
    pub fn cycle_mode(&mut self) -> GameMode {
        let next = self.mode.next();
        self.set_mode(next);
        next
    }

    fn random_start(&mut self) -> AgentState {
        let size = self.graph.size();
        let last = size - 1;
        let rows = usize::try_from(size).unwrap_or(1).max(1);
        let blue_row = self.picker.pick_index(rows).min(rows - 1) as i32;
        let red_row = self.picker.pick_index(rows).min(rows - 1) as i32;

        if self.roles().blue_starts_left {
            AgentState::new(Position::new(0, blue_row), Position::new(last, red_row))
        } else {
            AgentState::new(Position::new(last, blue_row), Position::new(0, red_row))
        }
    }

    // === Moves ===

    /// Run a user command. Returns `None` for a reset.
    pub fn apply(&mut self, command: Command) -> Option<MoveOutcome> {
        match command {
            Command::Move { agent, direction } => Some(self.submit_move(agent, direction)),
            Command::Reset => {
                self.reset();
                None
            }
        }
    }

    /// Submit a one-step move intent for `agent`.
    ///
    /// Invalid intents are ignored and leave the game untouched.
    pub fn submit_move(&mut self, agent: Agent, direction: Direction) -> MoveOutcome {
        if self.result.is_terminal() {
            return self.ignore(agent, direction, Rejection::GameOver);
        }
        if agent != self.current_actor() {
            return self.ignore(agent, direction, Rejection::NotYourTurn);
        }

        let from = self.agents[agent];
        let to = from.step(direction);
        if !self.graph.contains(to) {
            return self.ignore(agent, direction, Rejection::OutOfBounds);
        }
        if !self.graph.is_adjacent_via_active_edge(from, to) {
            return self.ignore(agent, direction, Rejection::NoEdge);
        }

        let outcome = match self.roles().automated {
            Some(automation) => self.single_player_turn(automation, agent, to),
            None => self.two_player_turn(agent, to),
        };

        if outcome.is_moved() {
            self.turn_number += 1;
        }
        outcome
    }

    fn single_player_turn(&mut self, automation: Automation, agent: Agent, to: Position) -> MoveOutcome {
        let roles = self.roles();

        if to == self.agents[automation.agent] && roles.defers_collision {
            // The automated side flees before the human lands. It always has
            // the edge the human is stepping along, so it always gets away.
            let reply = self.automated_reply(automation, false);
            self.commit(agent, to, true);
            self.update_result();
            return MoveOutcome::Moved {
                to,
                reply,
                result: self.result,
            };
        }

        self.commit(agent, to, true);
        self.update_result();

        let mut reply = None;
        if !self.result.is_terminal() {
            reply = self.automated_reply(automation, true);
            self.update_result();
        }

        MoveOutcome::Moved {
            to,
            reply,
            result: self.result,
        }
    }

    fn two_player_turn(&mut self, agent: Agent, to: Position) -> MoveOutcome {
        self.commit(agent, to, true);
        self.turn = match agent {
            Agent::Red => TurnState::BlueToMove,
            Agent::Blue => TurnState::RedToMove,
        };
        self.update_result();

        MoveOutcome::Moved {
            to,
            reply: None,
            result: self.result,
        }
    }

    /// Let the automated side pick and make its move.
    ///
    /// With `erode` set, an edge is removed afterwards even if the agent had
    /// nowhere to go; the record then has `from == to`.
    fn automated_reply(&mut self, automation: Automation, erode: bool) -> Option<Position> {
        let own = self.agents[automation.agent];
        let target = self.agents[automation.agent.opponent()];

        let policy: &dyn MovePolicy = match automation.kind {
            AgentKind::Attack => &self.attack,
            AgentKind::Evade => &self.evade,
        };
        let choice = policy.choose_move(&self.graph, own, target);

        match choice {
            Some(next) => debug!("{} ({:?}) replies {} -> {}", automation.agent, automation.kind, own, next),
            None => debug!("{} ({:?}) has no move from {}", automation.agent, automation.kind, own),
        }

        self.commit(automation.agent, choice.unwrap_or(own), erode);
        choice
    }

    fn commit(&mut self, agent: Agent, to: Position, erode: bool) {
        let from = self.agents[agent];
        self.agents[agent] = to;

        let removed = if erode { self.erode() } else { None };
        let record = MoveRecord::new(self.turn_number, agent, from, to).with_removed_edge(removed);
        match record.direction() {
            Some(direction) => debug!("Turn {}: {} steps {} to {}", record.turn, agent, direction, to),
            None => debug!("Turn {}: {} stays at {}", record.turn, agent, to),
        }
        self.history.push_back(record);
    }

    /// Remove one random active edge, sparing the edge between the agents
    /// when they are one step apart.
    fn erode(&mut self) -> Option<EdgeId> {
        let AgentState { blue, red } = self.agents;
        let bridged = self.agents.adjacent();

        let removed = self
            .graph
            .remove_random_active_edge(&mut self.picker, |e| bridged && e.joins(blue, red));

        match removed {
            Some(id) => trace!("Eroded {} ({} active left)", id, self.graph.active_edge_count()),
            None => trace!("No eligible edge to erode"),
        }
        removed
    }

    fn update_result(&mut self) {
        if self.result.is_terminal() {
            return;
        }
        self.result = rules::evaluate(&self.graph, &self.agents, self.mode);
        if self.result.is_terminal() {
            info!("Game over after turn {}: {}", self.turn_number, self.result);
        }
    }

    fn ignore(&self, agent: Agent, direction: Direction, reason: Rejection) -> MoveOutcome {
        trace!("Ignored {} move {}: {:?}", agent, direction, reason);
        MoveOutcome::Ignored(reason)
    }
}
