//! Skill scoring.
//!
//! Pure, deterministic functions that turn a skill selection and its ratings
//! into labelled rows and an aggregate profile for the results view. Nothing
//! here is cached or stored; results are re-derived on every request.
//!
//! ## Levels
//!
//! | Rating | Level |
//! |--------|-------|
//! | 0 ..= 25 | Beginner |
//! | 26 ..= 50 | Intermediate |
//! | 51 ..= 75 | Advanced |
//! | 76 ..= 100 | Expert |
//!
//! ## Keyword matching
//!
//! Category, demand and primary domain are decided by case-sensitive
//! substring matches against fixed keyword lists. `"javascript"` does not
//! match `"JavaScript"`, and `"UI"` matches inside `"GUI"`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::assessment::QuestionId;
use crate::error::ScoringError;

/// Skills containing any of these are classed as Programming.
pub const PROGRAMMING_KEYWORDS: [&str; 4] = ["JavaScript", "React", "TypeScript", "Python"];
/// Skills containing any of these (and none of the programming keywords)
/// are classed as Design.
pub const DESIGN_KEYWORDS: [&str; 3] = ["UI", "Design", "Figma"];
pub const VERY_HIGH_DEMAND_KEYWORDS: [&str; 2] = ["React", "TypeScript"];
pub const HIGH_DEMAND_KEYWORDS: [&str; 2] = ["JavaScript", "Python"];
/// Keywords that make Programming the primary domain of a whole selection.
pub const PRIMARY_DOMAIN_KEYWORDS: [&str; 3] = ["JavaScript", "React", "Python"];

fn contains_any(skill: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| skill.contains(k))
}

// ── Labels ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Level for a score on the 0-100 scale. Each upper bound is inclusive.
    pub fn from_score(score: f64) -> Self {
        if score <= 25.0 {
            SkillLevel::Beginner
        } else if score <= 50.0 {
            SkillLevel::Intermediate
        } else if score <= 75.0 {
            SkillLevel::Advanced
        } else {
            SkillLevel::Expert
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Programming,
    Design,
    Other,
}

impl SkillCategory {
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming",
            SkillCategory::Design => "Design",
            SkillCategory::Other => "Other",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Market demand tag for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Demand {
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Demand {
    pub fn label(self) -> &'static str {
        match self {
            Demand::Medium => "Medium",
            Demand::High => "High",
            Demand::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Per-skill scoring ────────────────────────────────────────────────

pub fn level_of(rating: u8) -> SkillLevel {
    SkillLevel::from_score(f64::from(rating))
}

pub fn category_of(skill_name: &str) -> SkillCategory {
    if contains_any(skill_name, &PROGRAMMING_KEYWORDS) {
        SkillCategory::Programming
    } else if contains_any(skill_name, &DESIGN_KEYWORDS) {
        SkillCategory::Design
    } else {
        SkillCategory::Other
    }
}

pub fn demand_of(skill_name: &str) -> Demand {
    if contains_any(skill_name, &VERY_HIGH_DEMAND_KEYWORDS) {
        Demand::VeryHigh
    } else if contains_any(skill_name, &HIGH_DEMAND_KEYWORDS) {
        Demand::High
    } else {
        Demand::Medium
    }
}

/// A skill enriched with its display labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSkill {
    pub skill_name: String,
    pub rating: u8,
    pub level: SkillLevel,
    pub category: SkillCategory,
    pub demand: Demand,
}

impl ScoredSkill {
    pub fn new(skill_name: impl Into<String>, rating: u8) -> Self {
        let skill_name = skill_name.into();
        Self {
            level: level_of(rating),
            category: category_of(&skill_name),
            demand: demand_of(&skill_name),
            skill_name,
            rating,
        }
    }
}

// ── Aggregates ───────────────────────────────────────────────────────

/// Arithmetic mean of `ratings`.
///
/// # Errors
/// Returns [`ScoringError::NoRatings`] for an empty slice.
pub fn average_rating(ratings: &[u8]) -> Result<f64, ScoringError> {
    if ratings.is_empty() {
        return Err(ScoringError::NoRatings);
    }
    let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
    Ok(f64::from(sum) / ratings.len() as f64)
}

/// Programming when any selected skill carries a primary-domain keyword,
/// Design otherwise.
pub fn primary_domain(skills: &[String]) -> SkillCategory {
    if skills
        .iter()
        .any(|s| contains_any(s, &PRIMARY_DOMAIN_KEYWORDS))
    {
        SkillCategory::Programming
    } else {
        SkillCategory::Design
    }
}

pub fn skill_count_message(count: usize) -> &'static str {
    if count < 3 {
        "Consider expanding your skill set"
    } else if count < 5 {
        "Good foundation to build upon"
    } else {
        "Strong diverse skill set"
    }
}

/// Summary statistics across every scored skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateProfile {
    pub average_rating: f64,
    pub overall_level: SkillLevel,
    pub primary_domain: SkillCategory,
    pub skill_count: usize,
    pub skill_count_message: String,
}

impl AggregateProfile {
    /// # Errors
    /// Returns [`ScoringError::NoRatings`] when `scored` is empty.
    pub fn compute(selected_skills: &[String], scored: &[ScoredSkill]) -> Result<Self, ScoringError> {
        let ratings: Vec<u8> = scored.iter().map(|s| s.rating).collect();
        let average = average_rating(&ratings)?;
        let skill_count = selected_skills.len();
        Ok(Self {
            average_rating: average,
            overall_level: SkillLevel::from_score(average),
            primary_domain: primary_domain(selected_skills),
            skill_count,
            skill_count_message: skill_count_message(skill_count).to_string(),
        })
    }
}

/// Payload handed to the presentation layer on entering results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResults {
    pub scored_skills: Vec<ScoredSkill>,
    pub aggregate: AggregateProfile,
}

/// Score every answered question, in selection order.
///
/// Answers whose key names no selected skill position are ignored.
///
/// # Errors
/// Returns [`ScoringError::NoRatings`] when no selected skill has a rating.
pub fn score_results(
    selected_skills: &[String],
    answers: &BTreeMap<String, u8>,
) -> Result<AssessmentResults, ScoringError> {
    let scored_skills: Vec<ScoredSkill> = QuestionId::for_selection(selected_skills)
        .into_iter()
        .filter_map(|id| {
            answers
                .get(&id.to_string())
                .map(|&rating| ScoredSkill::new(id.skill, rating))
        })
        .collect();
    let aggregate = AggregateProfile::compute(selected_skills, &scored_skills)?;
    Ok(AssessmentResults {
        scored_skills,
        aggregate,
    })
}
