use std::fmt;

use crate::content::models::JourneyId;
use crate::content::models::ScenarioId;
use crate::content::models::WordId;

/// A resource at any level of the Journey → Scenario → Word tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceRef {
    Journey(JourneyId),
    Scenario(ScenarioId),
    Word(WordId),
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceRef::Journey(id) => write!(f, "journey {}", id),
            ResourceRef::Scenario(id) => write!(f, "scenario {}", id),
            ResourceRef::Word(id) => write!(f, "word {}", id),
        }
    }
}

impl From<JourneyId> for ResourceRef {
    fn from(id: JourneyId) -> Self {
        ResourceRef::Journey(id)
    }
}

impl From<ScenarioId> for ResourceRef {
    fn from(id: ScenarioId) -> Self {
        ResourceRef::Scenario(id)
    }
}

impl From<WordId> for ResourceRef {
    fn from(id: WordId) -> Self {
        ResourceRef::Word(id)
    }
}
