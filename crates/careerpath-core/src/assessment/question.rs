//! Question identifiers.
//!
//! A question id pairs a skill name with the skill's position in the
//! selection, rendered as `<skill>-<index>`. The index is what makes two
//! selections of the same skill name distinct questions.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionId {
    pub skill: String,
    pub index: usize,
}

impl QuestionId {
    pub fn new(skill: impl Into<String>, index: usize) -> Self {
        Self {
            skill: skill.into(),
            index,
        }
    }

    /// One question id per selected skill, in selection order.
    pub fn for_selection(skills: &[String]) -> Vec<QuestionId> {
        skills
            .iter()
            .enumerate()
            .map(|(index, skill)| QuestionId::new(skill.clone(), index))
            .collect()
    }

    /// Whether this id names the skill at its index in `skills`.
    pub fn matches(&self, skills: &[String]) -> bool {
        skills
            .get(self.index)
            .map(|skill| *skill == self.skill)
            .unwrap_or(false)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.skill, self.index)
    }
}

impl FromStr for QuestionId {
    type Err = ValidationError;

    /// Splits on the last `-`, so skill names may themselves contain dashes.
    /// The index is plain decimal: no sign and no leading zeros.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (skill, index) = s
            .rsplit_once('-')
            .ok_or_else(|| ValidationError::MalformedQuestionId(s.to_string()))?;
        let canonical = !index.is_empty()
            && index.bytes().all(|b| b.is_ascii_digit())
            && (index == "0" || !index.starts_with('0'));
        if skill.is_empty() || !canonical {
            return Err(ValidationError::MalformedQuestionId(s.to_string()));
        }
        let index = index
            .parse::<usize>()
            .map_err(|_| ValidationError::MalformedQuestionId(s.to_string()))?;
        Ok(QuestionId::new(skill, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let id: QuestionId = "React-2".parse().unwrap();
        assert_eq!(id, QuestionId::new("React", 2));
        assert_eq!(id.to_string(), "React-2");
    }

    #[test]
    fn skill_names_with_dashes() {
        let id: QuestionId = "Front-end-1".parse().unwrap();
        assert_eq!(id.skill, "Front-end");
        assert_eq!(id.index, 1);
    }

    #[test]
    fn rejects_malformed() {
        for raw in ["React", "React-", "-3", "React-x", "React-1.5", "", "-0"] {
            assert!(
                matches!(
                    raw.parse::<QuestionId>(),
                    Err(ValidationError::MalformedQuestionId(_))
                ),
                "expected '{raw}' to be rejected"
            );
        }
    }

    #[test]
    fn index_must_be_canonical() {
        for raw in ["A-+0", "A-00", "A-01", "A- 1", "A-1 "] {
            assert!(
                matches!(
                    raw.parse::<QuestionId>(),
                    Err(ValidationError::MalformedQuestionId(_))
                ),
                "expected '{raw}' to be rejected"
            );
        }
        assert_eq!("A-0".parse::<QuestionId>().unwrap(), QuestionId::new("A", 0));
        assert_eq!("A-10".parse::<QuestionId>().unwrap(), QuestionId::new("A", 10));
    }

    #[test]
    fn matches_by_position() {
        let skills = vec!["Go".to_string(), "Go".to_string()];
        assert!(QuestionId::new("Go", 0).matches(&skills));
        assert!(QuestionId::new("Go", 1).matches(&skills));
        assert!(!QuestionId::new("Go", 2).matches(&skills));
        assert!(!QuestionId::new("Rust", 0).matches(&skills));
    }

    #[test]
    fn ids_for_selection() {
        let skills = vec!["A".to_string(), "B".to_string()];
        let ids: Vec<String> = QuestionId::for_selection(&skills)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(ids, vec!["A-0", "B-1"]);
    }
}
