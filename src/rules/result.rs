//! Game results and outcome messages.

use serde::{Deserialize, Serialize};

use crate::core::Agent;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// Both agents reached the same cell.
    Joined,
    /// No active path connects the agents.
    Separated,
}

/// Result of a game. Terminal once it leaves `InProgress`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    #[default]
    InProgress,
    BlueWinsJoined,
    RedWinsJoined,
    BlueWinsSeparated,
    RedWinsSeparated,
}

impl GameResult {
    /// Build a terminal result.
    #[must_use]
    pub const fn finished(winner: Agent, reason: EndReason) -> Self {
        match (winner, reason) {
            (Agent::Blue, EndReason::Joined) => GameResult::BlueWinsJoined,
            (Agent::Red, EndReason::Joined) => GameResult::RedWinsJoined,
            (Agent::Blue, EndReason::Separated) => GameResult::BlueWinsSeparated,
            (Agent::Red, EndReason::Separated) => GameResult::RedWinsSeparated,
        }
    }

    /// Has the game ended?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// The winning agent, if the game has ended.
    #[must_use]
    pub const fn winner(self) -> Option<Agent> {
        match self {
            GameResult::InProgress => None,
            GameResult::BlueWinsJoined | GameResult::BlueWinsSeparated => Some(Agent::Blue),
            GameResult::RedWinsJoined | GameResult::RedWinsSeparated => Some(Agent::Red),
        }
    }

    /// Why the game ended, if it has.
    #[must_use]
    pub const fn reason(self) -> Option<EndReason> {
        match self {
            GameResult::InProgress => None,
            GameResult::BlueWinsJoined | GameResult::RedWinsJoined => Some(EndReason::Joined),
            GameResult::BlueWinsSeparated | GameResult::RedWinsSeparated => {
                Some(EndReason::Separated)
            }
        }
    }

    /// Check if an agent won.
    #[must_use]
    pub fn is_winner(self, agent: Agent) -> bool {
        self.winner() == Some(agent)
    }
}

/// Message shown when the game ends; empty while in progress.
impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (Some(winner), Some(reason)) = (self.winner(), self.reason()) else {
            return Ok(());
        };
        let how = match reason {
            EndReason::Joined => "joined",
            EndReason::Separated => "separated",
        };
        write!(f, "{winner} Wins - Points are {how}")
    }
}
