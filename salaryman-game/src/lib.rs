//! Salaryman Game Engine
//!
//! Platform-agnostic core game logic for Salaryman, a turn-based simulation
//! of surviving thirty days of office life. This crate provides all game
//! mechanics without UI or platform-specific dependencies: the presentation
//! layer calls in to resolve a turn and reads state back to render it.

pub mod actions;
pub mod constants;
pub mod engine;
pub mod events;
pub mod history;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use actions::{ActionCatalog, ActionEffect, ActionId};
pub use engine::{EngineError, TurnEngine, TurnMessages, TurnResult, evaluate_outcome};
pub use events::{EventTable, RandomEvent};
pub use history::{DayRecord, History};
pub use session::GameSession;
pub use state::{Effects, GameState, GameStatus, LossCause, Stats};

/// Facade for hosts managing several runs: shared immutable tables, one
/// isolated [`GameSession`] per player. Sessions never share mutable state.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    engine: TurnEngine,
}

impl GameEngine {
    /// Create an engine over custom action and event tables.
    #[must_use]
    pub const fn new(actions: ActionCatalog, events: EventTable) -> Self {
        Self {
            engine: TurnEngine::new(actions, events),
        }
    }

    /// Start a new run seeded with the given value.
    #[must_use]
    pub fn new_game(&self, seed: u64) -> GameSession {
        GameSession::with_engine(self.engine.clone(), seed)
    }

    /// Fresh state at the fixed start values, for callers that thread their
    /// own random source through [`TurnEngine::apply_action`].
    #[must_use]
    pub fn new_state(&self) -> GameState {
        GameState::new()
    }

    /// Borrow the underlying turn engine.
    #[must_use]
    pub const fn turn_engine(&self) -> &TurnEngine {
        &self.engine
    }
}
