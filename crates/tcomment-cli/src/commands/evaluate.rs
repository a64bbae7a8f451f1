//! Evaluate command implementation.
//!
//! Reports precision and recall of the translator against a goal file.

use std::path::PathBuf;

use anyhow::Result;

use tcomment_ops::{Counts, EvaluateRequest, OpsContext, TagKind, ThrowsMode, Verdict};

/// Arguments for the evaluate command.
#[derive(Debug)]
pub struct EvaluateArgs {
    pub goal: PathBuf,
    pub mode: Option<ThrowsMode>,
    pub workers: Option<usize>,
    pub all: bool,
    pub json: bool,
}

/// Execute the evaluate command.
pub async fn execute(ctx: &OpsContext, args: EvaluateArgs) -> Result<()> {
    let mut request = EvaluateRequest::new(&args.goal);
    if let Some(mode) = args.mode {
        request = request.with_throws_mode(mode);
    }
    if let Some(workers) = args.workers {
        request = request.with_workers(workers);
    }

    let response = ctx.evaluate(request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let stats = &response.stats;
    println!("📊 Evaluation: {}", response.goal.display());
    println!("   Methods: {}", response.method_count);
    println!("   Tags:    {}", response.tag_count);
    println!("   Mode:    {}", response.throws_mode);
    println!();
    println!(
        "{:<10} {:>8} {:>8} {:>8} {:>10} {:>8}",
        "tag", "correct", "wrong", "missing", "precision", "recall"
    );
    println!("{:-<57}", "");
    print_row(&TagKind::Param.to_string(), stats.counts(TagKind::Param));
    print_row(&TagKind::Throws.to_string(), stats.counts(TagKind::Throws));
    print_row("total", stats.overall());

    let listed: Vec<_> = stats
        .outcomes
        .iter()
        .filter(|o| args.all || o.verdict != Verdict::Correct)
        .collect();
    if !listed.is_empty() {
        println!();
        for outcome in listed {
            println!(
                "{} {} {}: {}",
                verdict_marker(outcome.verdict),
                outcome.kind,
                outcome.signature,
                outcome.comment
            );
            println!("      expected: {}", outcome.expected);
            if !outcome.actual.is_empty() {
                println!("      actual:   {}", outcome.actual);
            }
        }
    }

    Ok(())
}

fn print_row(label: &str, counts: Counts) {
    println!(
        "{:<10} {:>8} {:>8} {:>8} {:>10.3} {:>8.3}",
        label,
        counts.correct,
        counts.wrong,
        counts.missing,
        counts.precision(),
        counts.recall()
    );
}

fn verdict_marker(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Correct => "  ✅",
        Verdict::Wrong => "  ❌",
        Verdict::Missing => "  ⚪",
    }
}
