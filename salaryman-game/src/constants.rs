//! Centralized balance and tuning constants for Salaryman game logic.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Debug logging ------------------------------------------------------------
pub(crate) const DEBUG_ENV_VAR: &str = "SALARYMAN_DEBUG_LOGS";

// Run length ---------------------------------------------------------------
pub(crate) const START_DAY: u32 = 1;
pub(crate) const RUN_LENGTH_DAYS: u32 = 30;

// Attribute bounds ---------------------------------------------------------
pub(crate) const ATTR_MIN: i64 = 0;
pub(crate) const ATTR_MAX: i64 = 100;

// Starting attributes ------------------------------------------------------
pub(crate) const START_HEALTH: i64 = 80;
pub(crate) const START_STRESS: i64 = 20;
pub(crate) const START_MONEY: i64 = 50_000;
pub(crate) const START_ROMANCE: i64 = 10;

// Outcome thresholds -------------------------------------------------------
pub(crate) const HEALTH_FLOOR: i64 = 0;
pub(crate) const STRESS_CEILING: i64 = 100;

// Narrative text -----------------------------------------------------------
pub(crate) const EVENT_PREFIX: &str = "Event: ";
pub(crate) const MSG_LOSS_EXHAUSTION: &str = "You collapsed from exhaustion! Game over.";
pub(crate) const MSG_LOSS_STRESS: &str = "Your stress broke through the limit! Game over.";
pub(crate) const MSG_VICTORY: &str =
    "Congratulations! You survived thirty days of office life!";
