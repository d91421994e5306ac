//! The daily action catalog: four deterministic activities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::engine::EngineError;
use crate::state::Effects;

/// The closed set of player-selectable daily actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionId {
    Exercise,
    WorkOvertime,
    DrinkWithFriends,
    RestAtHome,
}

impl ActionId {
    pub const ALL: [ActionId; 4] = [
        ActionId::Exercise,
        ActionId::WorkOvertime,
        ActionId::DrinkWithFriends,
        ActionId::RestAtHome,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ActionId::Exercise => "Exercise",
            ActionId::WorkOvertime => "WorkOvertime",
            ActionId::DrinkWithFriends => "DrinkWithFriends",
            ActionId::RestAtHome => "RestAtHome",
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Exercise" => Ok(ActionId::Exercise),
            "WorkOvertime" => Ok(ActionId::WorkOvertime),
            "DrinkWithFriends" => Ok(ActionId::DrinkWithFriends),
            "RestAtHome" => Ok(ActionId::RestAtHome),
            other => Err(EngineError::UnknownAction(other.to_string())),
        }
    }
}

impl From<ActionId> for String {
    fn from(value: ActionId) -> Self {
        value.as_str().to_string()
    }
}

/// Deterministic consequence of one action: four attribute deltas plus the
/// narrative line pushed onto the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEffect {
    #[serde(default)]
    pub delta: Effects,
    pub message: String,
}

impl ActionEffect {
    fn new(delta: Effects, message: &str) -> Self {
        Self {
            delta,
            message: message.to_string(),
        }
    }
}

/// Immutable table mapping every [`ActionId`] to its effect. The struct keeps
/// one field per action, so a missing entry is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCatalog {
    pub exercise: ActionEffect,
    pub work_overtime: ActionEffect,
    pub drink_with_friends: ActionEffect,
    pub rest_at_home: ActionEffect,
}

impl ActionCatalog {
    /// Total lookup; every recognized action has an effect.
    #[must_use]
    pub const fn effect_for(&self, action: ActionId) -> &ActionEffect {
        match action {
            ActionId::Exercise => &self.exercise,
            ActionId::WorkOvertime => &self.work_overtime,
            ActionId::DrinkWithFriends => &self.drink_with_friends,
            ActionId::RestAtHome => &self.rest_at_home,
        }
    }

    /// Load a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a valid catalog.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for ActionCatalog {
    fn default() -> Self {
        Self {
            exercise: ActionEffect::new(
                Effects::new(10, -5, -2, 0),
                "You worked out. Health went up and stress went down.",
            ),
            work_overtime: ActionEffect::new(
                Effects::new(-15, 15, 10_000, -5),
                "You worked overtime. Your pay went up, but health dropped and stress climbed.",
            ),
            drink_with_friends: ActionEffect::new(
                Effects::new(-5, -20, -15_000, 10),
                "You went drinking with friends. Stress faded and your dating odds improved, \
                 but it cost a lot.",
            ),
            rest_at_home: ActionEffect::new(
                Effects::new(20, -10, -5_000, -2),
                "You rested at home. Health recovered and stress eased.",
            ),
        }
    }
}
