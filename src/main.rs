use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::Path;

// Use library instead of local modules
use sar_narrative::{
    attachment_filename, CaseInput, NarrativeComposer, RiskEvaluator, RiskPolicy,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 {
        // Case-file mode: sar-narrative <case.json> [policy.json]
        let policy = match args.get(2) {
            Some(path) => RiskPolicy::from_file(path)?,
            None => RiskPolicy::default(),
        };
        run_case_file(Path::new(&args[1]), policy)?;
    } else {
        // Demo mode (default)
        run_demo()?;
    }

    Ok(())
}

fn run_case_file(case_path: &Path, policy: RiskPolicy) -> Result<()> {
    println!("🏦 SAR Narrative Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Load case file
    println!("\n📂 Loading case file {:?}...", case_path);
    let content = fs::read_to_string(case_path)
        .with_context(|| format!("Failed to read case file: {:?}", case_path))?;
    let input: CaseInput =
        serde_json::from_str(&content).context("Failed to parse case JSON")?;

    // 2. Validate into typed record
    let (record, meta) = input.into_parts()?;
    println!("✓ Case {} validated", meta.case_id);

    // 3. Evaluate + compose
    let evaluator = RiskEvaluator::with_policy(policy.clone());
    let eval = evaluator.evaluate(&record);
    let composer = NarrativeComposer::with_policy(policy);
    let (narrative, audit) = composer.compose(&record, &eval, &meta);

    println!(
        "✓ Regulator-ready SAR narrative generated (Risk Level: {})",
        eval.tier
    );

    // 4. Display
    println!("\n📄 Generated SAR Narrative");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}", narrative);

    println!("\n🧾 Audit Trail & Decisioning");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}", serde_json::to_string_pretty(&audit)?);

    // 5. Export attachment
    let out_path = attachment_filename(&meta.case_id);
    fs::write(&out_path, &narrative)
        .with_context(|| format!("Failed to write attachment: {}", out_path))?;
    println!("\n⬇️  Narrative saved to {}", out_path);

    Ok(())
}

fn run_demo() -> Result<()> {
    println!("🏦 SAR Narrative Generator - demo case");
    println!("   Usage: sar-narrative <case.json> [policy.json]");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let input = CaseInput {
        case_id: "SAR-2026-01452".to_string(),
        analyst: "Compliance Officer".to_string(),
        account_id: "ACC-998271".to_string(),
        amount: 250_000,
        transaction_type: "Cash Deposit".to_string(),
        location: "Foreign Jurisdiction A".to_string(),
        pattern: "Repeated".to_string(),
    };
    let (record, meta) = input.into_parts()?;

    let eval = RiskEvaluator::new().evaluate(&record);
    let (narrative, audit) = NarrativeComposer::new().compose(&record, &eval, &meta);

    println!("\n📄 Generated SAR Narrative (Risk Level: {})", eval.tier);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}", narrative);

    println!("\n🧾 Audit Trail & Decisioning");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}", serde_json::to_string_pretty(&audit)?);

    Ok(())
}
