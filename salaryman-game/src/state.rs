use serde::{Deserialize, Serialize};

use crate::constants::{
    ATTR_MAX, ATTR_MIN, START_DAY, START_HEALTH, START_MONEY, START_ROMANCE, START_STRESS,
};
use crate::history::History;

/// The four player attributes tracked across a run.
///
/// Health, stress, and romance live on a 0..=100 scale; money is a signed,
/// unbounded balance. Display layers may clamp money for visualization, the
/// stored value never is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub health: i64,
    pub stress: i64,
    pub money: i64,
    pub romance: i64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            health: START_HEALTH,
            stress: START_STRESS,
            money: START_MONEY,
            romance: START_ROMANCE,
        }
    }
}

impl Stats {
    /// Clamp the bounded attributes back into range. Money stays signed.
    pub fn clamp(&mut self) {
        self.health = self.health.clamp(ATTR_MIN, ATTR_MAX);
        self.stress = self.stress.clamp(ATTR_MIN, ATTR_MAX);
        self.romance = self.romance.clamp(ATTR_MIN, ATTR_MAX);
    }

    /// Add a delta to each attribute. Callers clamp afterwards; `apply`
    /// itself never does.
    pub fn apply(&mut self, delta: &Effects) {
        self.health += delta.health;
        self.stress += delta.stress;
        self.money += delta.money;
        self.romance += delta.romance;
    }
}

/// Attribute deltas carried by actions and random events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Effects {
    #[serde(default)]
    pub health: i64,
    #[serde(default)]
    pub stress: i64,
    #[serde(default)]
    pub money: i64,
    #[serde(default)]
    pub romance: i64,
}

impl Effects {
    #[must_use]
    pub const fn new(health: i64, stress: i64, money: i64, romance: i64) -> Self {
        Self {
            health,
            stress,
            money,
            romance,
        }
    }
}

/// Why a run was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossCause {
    /// Health hit the floor.
    Exhaustion,
    /// Stress hit the ceiling.
    StressOverload,
}

impl LossCause {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            LossCause::Exhaustion => "exhaustion",
            LossCause::StressOverload => "stress_overload",
        }
    }
}

/// Three-valued outcome of the simulation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Ongoing,
    Lost {
        cause: LossCause,
    },
    Won,
}

impl GameStatus {
    /// Terminal statuses accept no further turns.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// Caller-owned state of one run: day counter, live attributes, the
/// append-only narrative log, the per-day snapshot ledger, and the status
/// flag. One instance per session; nothing here is shared between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub day: u32,
    pub stats: Stats,
    #[serde(default)]
    pub logs: Vec<String>,
    #[serde(default)]
    pub history: History,
    #[serde(default)]
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            day: START_DAY,
            stats: Stats::default(),
            logs: Vec::new(),
            history: History::default(),
            status: GameStatus::Ongoing,
        }
    }
}

impl GameState {
    /// Fresh state at the fixed start values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reinitialize to day 1 defaults, clearing the log and the history.
    /// Allowed regardless of the current status.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the run has reached a terminal status.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_match_start_values() {
        let stats = Stats::default();
        assert_eq!(stats.health, 80);
        assert_eq!(stats.stress, 20);
        assert_eq!(stats.money, 50_000);
        assert_eq!(stats.romance, 10);
    }

    #[test]
    fn clamp_bounds_health_stress_romance_only() {
        let mut stats = Stats {
            health: 140,
            stress: -30,
            money: -99_999,
            romance: 250,
        };
        stats.clamp();
        assert_eq!(stats.health, 100);
        assert_eq!(stats.stress, 0);
        assert_eq!(stats.romance, 100);
        assert_eq!(stats.money, -99_999, "money must stay unbounded");
    }

    #[test]
    fn apply_adds_without_clamping() {
        let mut stats = Stats::default();
        stats.apply(&Effects::new(40, -25, -60_000, 5));
        assert_eq!(stats.health, 120);
        assert_eq!(stats.stress, -5);
        assert_eq!(stats.money, -10_000);
        assert_eq!(stats.romance, 15);
        stats.clamp();
        assert_eq!(stats.health, 100);
        assert_eq!(stats.stress, 0);
        assert_eq!(stats.money, -10_000);
    }

    #[test]
    fn reset_restores_day_one_defaults() {
        let mut state = GameState::new();
        state.day = 17;
        state.stats.health = 3;
        state.logs.push(String::from("a rough stretch"));
        state.history.record(2, state.stats);
        state.status = GameStatus::Lost {
            cause: LossCause::Exhaustion,
        };

        state.reset();

        assert_eq!(state.day, 1);
        assert_eq!(state.stats, Stats::default());
        assert!(state.logs.is_empty());
        assert!(state.history.is_empty());
        assert_eq!(state.status, GameStatus::Ongoing);
    }

    #[test]
    fn status_terminal_classification() {
        assert!(!GameStatus::Ongoing.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(
            GameStatus::Lost {
                cause: LossCause::StressOverload
            }
            .is_terminal()
        );
    }

    #[test]
    fn loss_cause_keys_are_stable() {
        assert_eq!(LossCause::Exhaustion.key(), "exhaustion");
        assert_eq!(LossCause::StressOverload.key(), "stress_overload");
    }

    #[test]
    fn game_state_serde_roundtrip() {
        let mut state = GameState::new();
        state.day = 4;
        state.stats.money = -2_500;
        state.logs.push(String::from("You worked out."));
        state.history.record(2, state.stats);

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
