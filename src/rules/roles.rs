//! Per-mode role table.
//!
//! Every mode-dependent decision (who pursues, which side is automated and
//! with which heuristic, where each side starts, whether a collision is
//! deferred) is looked up here instead of branching on the mode in place.

use crate::agents::AgentKind;
use crate::core::{Agent, GameMode};

/// An automated side and the heuristic it runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Automation {
    pub agent: Agent,
    pub kind: AgentKind,
}

/// Role assignment for one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeRoles {
    /// The side that wins by joining.
    pub pursuer: Agent,

    /// The computer-controlled side, if any.
    pub automated: Option<Automation>,

    /// Blue starts on column 0 (red on column N−1), or the reverse.
    pub blue_starts_left: bool,

    /// When blue steps onto red, red evades first and blue only follows if
    /// red actually left.
    pub defers_collision: bool,
}

const OFFENSE: ModeRoles = ModeRoles {
    pursuer: Agent::Blue,
    automated: Some(Automation {
        agent: Agent::Red,
        kind: AgentKind::Evade,
    }),
    blue_starts_left: true,
    defers_collision: true,
};

const DEFENSE: ModeRoles = ModeRoles {
    pursuer: Agent::Red,
    automated: Some(Automation {
        agent: Agent::Red,
        kind: AgentKind::Attack,
    }),
    blue_starts_left: false,
    defers_collision: false,
};

const TWO_PLAYER: ModeRoles = ModeRoles {
    pursuer: Agent::Blue,
    automated: None,
    blue_starts_left: true,
    defers_collision: false,
};

impl ModeRoles {
    /// Look up the roles for a mode.
    #[must_use]
    pub const fn for_mode(mode: GameMode) -> &'static ModeRoles {
        match mode {
            GameMode::Offense => &OFFENSE,
            GameMode::Defense => &DEFENSE,
            GameMode::TwoPlayer => &TWO_PLAYER,
        }
    }

    /// The side that wins by separation.
    #[must_use]
    pub const fn evader(&self) -> Agent {
        self.pursuer.opponent()
    }
}
