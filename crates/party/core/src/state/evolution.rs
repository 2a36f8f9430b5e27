//! Evolution rules carried by a member.

use crate::env::StoneKind;

/// Level-gated evolution path.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelEvolution {
    /// Species the member turns into.
    pub target: String,

    /// Level at which the path fires.
    pub min_level: u32,

    /// Set when the path fires. Survives level dips and reloads; a path
    /// that has fired never fires again.
    #[cfg_attr(feature = "serde", serde(default))]
    pub triggered: bool,
}

impl LevelEvolution {
    pub fn new(target: impl Into<String>, min_level: u32) -> Self {
        Self {
            target: target.into(),
            min_level,
            triggered: false,
        }
    }
}

/// Stone-activated evolution path.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoneEvolution {
    /// Species the member turns into.
    pub target: String,

    /// Stone kind that activates the path.
    pub stone: StoneKind,
}

impl StoneEvolution {
    pub fn new(target: impl Into<String>, stone: StoneKind) -> Self {
        Self {
            target: target.into(),
            stone,
        }
    }
}

/// A condition/action pair attached to a member.
///
/// `Other` carries paths whose mechanics belong to the host (trades,
/// locations, timers); this core never drives them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvolutionRule {
    Level(LevelEvolution),
    Stone(StoneEvolution),
    Other(u16),
}

impl EvolutionRule {
    /// Whether the rule could fire at the given level.
    ///
    /// Stone paths carry no further conditions at this layer; their
    /// external requirements live with the external mechanics.
    pub fn is_satisfied(&self, level: u32) -> bool {
        match self {
            Self::Level(path) => !path.triggered && level >= path.min_level,
            Self::Stone(_) => true,
            Self::Other(_) => false,
        }
    }

    /// Species this rule evolves into, where this core knows it.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Level(path) => Some(&path.target),
            Self::Stone(path) => Some(&path.target),
            Self::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_paths_fire_once() {
        let mut path = LevelEvolution::new("Voltail", 16);
        assert!(!EvolutionRule::Level(path.clone()).is_satisfied(15));
        assert!(EvolutionRule::Level(path.clone()).is_satisfied(16));

        path.triggered = true;
        assert!(!EvolutionRule::Level(path).is_satisfied(40));
    }

    #[test]
    fn foreign_paths_never_fire_here() {
        assert!(!EvolutionRule::Other(3).is_satisfied(100));
        assert_eq!(EvolutionRule::Other(3).target(), None);
    }
}
