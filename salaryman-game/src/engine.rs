//! Turn resolution: action effects, random events, outcome evaluation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::actions::{ActionCatalog, ActionId};
use crate::constants::{
    DEBUG_ENV_VAR, EVENT_PREFIX, HEALTH_FLOOR, MSG_LOSS_EXHAUSTION, MSG_LOSS_STRESS, MSG_VICTORY,
    RUN_LENGTH_DAYS, STRESS_CEILING,
};
use crate::events::EventTable;
use crate::state::{GameState, GameStatus, LossCause, Stats};

#[cfg(debug_assertions)]
fn debug_log_enabled() -> bool {
    matches!(std::env::var(DEBUG_ENV_VAR), Ok(val) if val != "0")
}

#[cfg(not(debug_assertions))]
const fn debug_log_enabled() -> bool {
    false
}

/// Messages generated by a single turn. A turn produces at most an action
/// line, an event line, and an outcome line, so three fit inline.
pub type TurnMessages = SmallVec<[String; 3]>;

/// Caller-input errors; never retried, never mutating state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The supplied identifier is not one of the four recognized actions.
    #[error("unknown action id: {0}")]
    UnknownAction(String),
    /// A turn was attempted after the run already reached a terminal status.
    #[error("the run is already over")]
    GameAlreadyOver,
}

/// Everything a presentation layer needs to redraw after one resolved turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Day number after the turn resolved.
    pub day: u32,
    /// Post-clamp attribute values.
    pub stats: Stats,
    /// The narrative lines generated by this turn, in log order.
    pub messages: TurnMessages,
    /// Status after outcome evaluation.
    pub status: GameStatus,
}

/// Resolves turns against a caller-owned [`GameState`] using process-wide
/// immutable action and event tables. The engine itself holds no mutable
/// state, so one instance can serve any number of isolated sessions.
#[derive(Debug, Clone, Default)]
pub struct TurnEngine {
    actions: ActionCatalog,
    events: EventTable,
}

impl TurnEngine {
    #[must_use]
    pub const fn new(actions: ActionCatalog, events: EventTable) -> Self {
        Self { actions, events }
    }

    #[must_use]
    pub const fn actions(&self) -> &ActionCatalog {
        &self.actions
    }

    #[must_use]
    pub const fn events(&self) -> &EventTable {
        &self.events
    }

    /// Resolve one turn: apply the action's deltas, roll the event table,
    /// snapshot history, advance the day, and evaluate the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::GameAlreadyOver`] when the run has reached a
    /// terminal status; the state is left untouched.
    pub fn apply_action<R: Rng + ?Sized>(
        &self,
        state: &mut GameState,
        action: ActionId,
        rng: &mut R,
    ) -> Result<TurnResult, EngineError> {
        if state.status.is_terminal() {
            return Err(EngineError::GameAlreadyOver);
        }

        let mut messages = TurnMessages::new();

        let effect = self.actions.effect_for(action);
        state.logs.push(effect.message.clone());
        messages.push(effect.message.clone());
        state.stats.apply(&effect.delta);
        state.stats.clamp();

        if let Some(event) = self.events.roll_event(rng) {
            state.stats.apply(&event.delta);
            state.stats.clamp();
            let line = format!("{EVENT_PREFIX}{}", event.message);
            state.logs.push(line.clone());
            messages.push(line);
        }

        let new_day = state.day.saturating_add(1);
        state.history.record(new_day, state.stats);
        state.day = new_day;

        state.status = evaluate_outcome(&state.stats, state.day);
        if let Some(line) = outcome_message(state.status) {
            state.logs.push(line.to_string());
            messages.push(line.to_string());
        }

        if debug_log_enabled() {
            println!(
                "Day {}: {} -> health {} stress {} money {} romance {} ({:?})",
                state.day,
                action,
                state.stats.health,
                state.stats.stress,
                state.stats.money,
                state.stats.romance,
                state.status
            );
        }

        Ok(TurnResult {
            day: state.day,
            stats: state.stats,
            messages,
            status: state.status,
        })
    }

    /// String-identifier variant of [`Self::apply_action`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownAction`] for an unrecognized id, before
    /// any mutation, and [`EngineError::GameAlreadyOver`] as above.
    pub fn apply_action_id<R: Rng + ?Sized>(
        &self,
        state: &mut GameState,
        id: &str,
        rng: &mut R,
    ) -> Result<TurnResult, EngineError> {
        let action: ActionId = id.parse()?;
        self.apply_action(state, action, rng)
    }

    /// Reinitialize the run. Allowed regardless of the current status.
    pub fn reset(&self, state: &mut GameState) {
        state.reset();
    }
}

/// Fixed-order outcome check. Health exhaustion is tested before stress
/// overload, so it wins when both hold on the same day; the day threshold
/// comes last, so a fatal final day still loses.
#[must_use]
pub const fn evaluate_outcome(stats: &Stats, day: u32) -> GameStatus {
    if stats.health <= HEALTH_FLOOR {
        GameStatus::Lost {
            cause: LossCause::Exhaustion,
        }
    } else if stats.stress >= STRESS_CEILING {
        GameStatus::Lost {
            cause: LossCause::StressOverload,
        }
    } else if day > RUN_LENGTH_DAYS {
        GameStatus::Won
    } else {
        GameStatus::Ongoing
    }
}

const fn outcome_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Lost {
            cause: LossCause::Exhaustion,
        } => Some(MSG_LOSS_EXHAUSTION),
        GameStatus::Lost {
            cause: LossCause::StressOverload,
        } => Some(MSG_LOSS_STRESS),
        GameStatus::Won => Some(MSG_VICTORY),
        GameStatus::Ongoing => None,
    }
}
