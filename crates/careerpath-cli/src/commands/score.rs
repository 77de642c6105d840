use std::collections::BTreeMap;

use careerpath_core::assessment::{MAX_RATING, MIN_RATING};
use careerpath_core::{score_results, QuestionId, ValidationError};
use clap::Args;

use super::print_json;

#[derive(Args)]
pub struct ScoreArgs {
    /// SKILL=RATING pairs, e.g. JavaScript=80 Figma=40
    #[arg(required = true, allow_hyphen_values = true)]
    pairs: Vec<String>,
    /// Print compact JSON
    #[arg(long)]
    compact: bool,
}

fn malformed(raw: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: "score pair".into(),
        message: format!("expected SKILL=RATING, got '{raw}'"),
    }
}

/// Parse `SKILL=RATING`. The last `=` separates the rating.
fn parse_pair(raw: &str) -> Result<(String, u8), ValidationError> {
    let (skill, rating) = raw
        .rsplit_once('=')
        .filter(|(skill, _)| !skill.is_empty())
        .ok_or_else(|| malformed(raw))?;
    let value: i64 = rating
        .trim()
        .parse()
        .map_err(|_| malformed(raw))?;
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: format!("rating for '{skill}'"),
            value,
            min: MIN_RATING,
            max: MAX_RATING,
        });
    }
    Ok((skill.to_string(), value as u8))
}

/// Build a selection and its answers from `SKILL=RATING` pairs.
fn build_inputs(pairs: &[String]) -> Result<(Vec<String>, BTreeMap<String, u8>), ValidationError> {
    let mut skills = Vec::with_capacity(pairs.len());
    let mut answers = BTreeMap::new();
    for (index, raw) in pairs.iter().enumerate() {
        let (skill, rating) = parse_pair(raw)?;
        answers.insert(QuestionId::new(skill.clone(), index).to_string(), rating);
        skills.push(skill);
    }
    Ok((skills, answers))
}

pub fn run(args: ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (skills, answers) = build_inputs(&args.pairs)?;
    let results = score_results(&skills, &answers)?;
    print_json(&results, !args.compact)
}
