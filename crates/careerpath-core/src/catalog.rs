//! Static recommendation catalog shown next to assessment results.
//!
//! The catalog is fixed sample data: career matches with their headline
//! skills, skills worth developing, and learning resource kinds. The only
//! part that depends on the user is which catalog skills they selected.

use serde::{Deserialize, Serialize};

use crate::scoring::Demand;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub title: String,
    /// 0-100
    pub match_score: u8,
    pub skills: Vec<String>,
    pub demand: Demand,
    pub salary_range: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillToDevelop {
    pub name: String,
    pub demand: Demand,
    pub reason: String,
}

/// A career match annotated with the user's overlapping skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    #[serde(flatten)]
    pub career: CareerMatch,
    pub matched_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub careers: Vec<CareerRecommendation>,
    pub skills_to_develop: Vec<SkillToDevelop>,
    pub learning_resources: Vec<String>,
}

fn career(
    title: &str,
    match_score: u8,
    skills: &[&str],
    demand: Demand,
    salary_range: &str,
) -> CareerMatch {
    CareerMatch {
        title: title.to_string(),
        match_score,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        demand,
        salary_range: salary_range.to_string(),
    }
}

fn skill(name: &str, demand: Demand, reason: &str) -> SkillToDevelop {
    SkillToDevelop {
        name: name.to_string(),
        demand,
        reason: reason.to_string(),
    }
}

/// Career matches, best match first.
pub fn career_matches() -> Vec<CareerMatch> {
    let mut careers = vec![
        career(
            "Frontend Developer",
            92,
            &["JavaScript", "React", "TypeScript"],
            Demand::High,
            "$80,000 - $120,000",
        ),
        career(
            "UX/UI Designer",
            88,
            &["UI/UX", "Figma", "Graphic Design"],
            Demand::High,
            "$75,000 - $110,000",
        ),
        career(
            "Data Analyst",
            85,
            &["SQL", "Data Analysis", "Python"],
            Demand::VeryHigh,
            "$85,000 - $130,000",
        ),
        career(
            "Digital Marketing Specialist",
            82,
            &["Social Media", "Content Writing", "SEO"],
            Demand::Medium,
            "$60,000 - $90,000",
        ),
    ];
    careers.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    careers
}

pub fn skills_to_develop() -> Vec<SkillToDevelop> {
    vec![
        skill(
            "React Native",
            Demand::High,
            "Extends your React skills to mobile development",
        ),
        skill(
            "AWS",
            Demand::VeryHigh,
            "Cloud skills are in high demand across all tech roles",
        ),
        skill(
            "UX Research",
            Demand::Medium,
            "Complements your design abilities with user insights",
        ),
        skill(
            "Data Visualization",
            Demand::High,
            "Enhance your ability to communicate data findings",
        ),
    ]
}

pub fn learning_resources() -> Vec<String> {
    ["Online Courses", "Books", "Tutorials", "Practice Projects"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Every distinct skill named by a career match, in catalog order.
pub fn catalog_skills() -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for career in career_matches() {
        for skill in career.skills {
            if !names.contains(&skill) {
                names.push(skill);
            }
        }
    }
    names
}

/// Build the recommendation view for a skill selection.
pub fn recommend(selected_skills: &[String]) -> Recommendations {
    let careers = career_matches()
        .into_iter()
        .map(|career| {
            let matched_skills = career
                .skills
                .iter()
                .filter(|s| selected_skills.contains(s))
                .cloned()
                .collect();
            CareerRecommendation {
                career,
                matched_skills,
            }
        })
        .collect();
    Recommendations {
        careers,
        skills_to_develop: skills_to_develop(),
        learning_resources: learning_resources(),
    }
}
