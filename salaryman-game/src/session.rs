//! Session wrapper binding the turn engine to a state and a seeded RNG.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::actions::ActionId;
use crate::engine::{EngineError, TurnEngine, TurnResult};
use crate::state::GameState;

/// High-level play surface: one mutable [`GameState`], the immutable tables,
/// and a deterministic random stream derived from a user-visible seed. Two
/// sessions with equal seeds and equal action sequences produce identical
/// states.
#[derive(Debug, Clone)]
pub struct GameSession {
    engine: TurnEngine,
    state: GameState,
    seed: u64,
    rng: ChaCha20Rng,
}

impl GameSession {
    /// Construct a fresh session over the default tables.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_engine(TurnEngine::default(), seed)
    }

    /// Construct a fresh session over custom tables.
    #[must_use]
    pub fn with_engine(engine: TurnEngine, seed: u64) -> Self {
        Self {
            engine,
            state: GameState::new(),
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Resolve one turn with the session's own random stream.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::GameAlreadyOver`] once the run is terminal.
    pub fn apply_action(&mut self, action: ActionId) -> Result<TurnResult, EngineError> {
        self.engine
            .apply_action(&mut self.state, action, &mut self.rng)
    }

    /// String-identifier variant of [`Self::apply_action`].
    ///
    /// # Errors
    ///
    /// Additionally returns [`EngineError::UnknownAction`] for an
    /// unrecognized id.
    pub fn apply_action_id(&mut self, id: &str) -> Result<TurnResult, EngineError> {
        self.engine.apply_action_id(&mut self.state, id, &mut self.rng)
    }

    /// Restart the run. The random stream is rewound as well, so a rerun
    /// with the same choices replays identically.
    pub fn reset(&mut self) {
        self.engine.reset(&mut self.state);
        self.rng = ChaCha20Rng::seed_from_u64(self.seed);
    }

    /// Deterministically reseed the session and rewind its stream.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = ChaCha20Rng::seed_from_u64(seed);
    }

    /// Seed this session's stream was derived from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Borrow the underlying immutable game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Borrow the engine tables backing this session.
    #[must_use]
    pub const fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// Apply a closure to the mutable game state.
    pub fn with_state_mut<R>(&mut self, f: impl FnOnce(&mut GameState) -> R) -> R {
        f(&mut self.state)
    }

    /// Consume the session, returning the underlying game state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}
