//! Random daily events: an ordered independent-probability table.
//!
//! Each day the engine walks the table in order, drawing one uniform sample
//! per event; the first event whose trial succeeds is applied and evaluation
//! stops, so at most one event fires per day. The random source is supplied
//! by the caller, which keeps every roll reproducible under a seeded or
//! scripted generator.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::state::Effects;

/// One probabilistic daily event: an independent Bernoulli trial, attribute
/// deltas, and the narrative line logged when it fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomEvent {
    pub probability: f64,
    #[serde(default)]
    pub delta: Effects,
    pub message: String,
}

impl RandomEvent {
    fn new(probability: f64, delta: Effects, message: &str) -> Self {
        Self {
            probability,
            delta,
            message: message.to_string(),
        }
    }
}

/// Ordered, immutable event table. Table order is priority order: earlier
/// events shadow later ones on the day they fire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventTable {
    events: Vec<RandomEvent>,
}

impl EventTable {
    /// A table with no events; useful for deterministic tests.
    #[must_use]
    pub const fn empty() -> Self {
        Self { events: Vec::new() }
    }

    /// Build a table from pre-parsed events, keeping their order.
    #[must_use]
    pub fn from_events(events: Vec<RandomEvent>) -> Self {
        Self { events }
    }

    /// Load an event table from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid events.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Events in priority order.
    #[must_use]
    pub fn events(&self) -> &[RandomEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Roll the table: one uniform `[0, 1)` draw per event in table order,
    /// returning the first event whose trial succeeds. Later events are not
    /// tested once one fires.
    pub fn roll_event<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&RandomEvent> {
        for event in &self.events {
            let roll: f64 = rng.random();
            if roll < event.probability {
                return Some(event);
            }
        }
        None
    }
}

impl Default for EventTable {
    fn default() -> Self {
        Self::from_events(vec![
            RandomEvent::new(
                0.10,
                Effects::new(0, -10, 5_000, 0),
                "Your boss praised you!",
            ),
            RandomEvent::new(
                0.10,
                Effects::new(-10, 10, 5_000, 0),
                "A sudden assignment kept you late at the office.",
            ),
            RandomEvent::new(
                0.10,
                Effects::new(-5, 5, -10_000, 0),
                "You felt unwell and went to the clinic.",
            ),
            RandomEvent::new(
                0.05,
                Effects::new(-5, -5, -10_000, 15),
                "You went on a blind date!",
            ),
            RandomEvent::new(
                0.07,
                Effects::new(-5, 8, 0, 0),
                "The team dinner ran long into the night.",
            ),
            RandomEvent::new(
                0.04,
                Effects::new(0, -5, 10_000, 0),
                "You found cash in an old coat pocket.",
            ),
            RandomEvent::new(
                0.03,
                Effects::new(0, 10, 0, -10),
                "Your crush left your message on read.",
            ),
        ])
    }
}
