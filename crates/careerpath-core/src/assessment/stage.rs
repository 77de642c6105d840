use serde::{Deserialize, Serialize};
use std::fmt;

/// One discrete phase of the assessment flow.
///
/// Stages are ordered: a run only ever moves forward through
/// `Intro -> Skills -> Questions -> Results`. Only a reset goes back.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Intro,
    Skills,
    Questions,
    Results,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Intro => "intro",
            Stage::Skills => "skills",
            Stage::Questions => "questions",
            Stage::Results => "results",
        }
    }

    /// The stage that follows this one, or `None` for the terminal stage.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Intro => Some(Stage::Skills),
            Stage::Skills => Some(Stage::Questions),
            Stage::Questions => Some(Stage::Results),
            Stage::Results => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
