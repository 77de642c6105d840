use careerpath_core::recommend;
use clap::Args;

use super::print_json;

#[derive(Args)]
pub struct CatalogArgs {
    /// Mark career matches that include these skills
    #[arg(long = "skill")]
    skills: Vec<String>,
    /// Print compact JSON
    #[arg(long)]
    compact: bool,
}

pub fn run(args: CatalogArgs) -> Result<(), Box<dyn std::error::Error>> {
    print_json(&recommend(&args.skills), !args.compact)
}
