use anyhow::Result;

use coshh_classify::triggers::{MEASURE_TRIGGERS, ROUTE_TRIGGERS};
use coshh_cli::generate::{GenerateReport, generate_form};

use crate::cli::GenerateArgs;

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateReport> {
    generate_form(&args.submission, &args.form, &args.ticks, &args.output)
}

/// Print the category-to-trigger-code tables.
pub fn run_measures() {
    println!("Control measures:");
    for (measure, codes) in MEASURE_TRIGGERS {
        println!("  {:<20} {}", measure.label(), format_codes(codes));
    }
    println!();
    println!("Exposure routes:");
    for (route, codes) in ROUTE_TRIGGERS {
        println!("  {:<20} {}", route.label(), format_codes(codes));
    }
}

fn format_codes(codes: &[u16]) -> String {
    codes
        .iter()
        .map(|code| format!("H{code}"))
        .collect::<Vec<_>>()
        .join(", ")
}
