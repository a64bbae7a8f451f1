//! Translate command implementation.
//!
//! Loads documented methods, translates their tags and writes the resulting
//! specifications.

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use tcomment_ops::{render, OpsContext, OutputFormat, ThrowsMode, TranslateRequest};

/// Arguments for the translate command.
#[derive(Debug)]
pub struct TranslateArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub mode: Option<ThrowsMode>,
    pub workers: Option<usize>,
    pub stdout: bool,
}

/// Execute the translate command.
pub async fn execute(ctx: &OpsContext, args: TranslateArgs, quiet: bool) -> Result<()> {
    let mut request = TranslateRequest::new(&args.input).with_format(args.format);
    if let Some(output) = args.output {
        request = request.with_output(output);
    }
    if let Some(mode) = args.mode {
        request = request.with_throws_mode(mode);
    }
    if let Some(workers) = args.workers {
        request = request.with_workers(workers);
    }
    if args.stdout {
        request = request.without_write();
    }

    debug!(?request, "Translate request");
    let response = ctx.translate(request).await?;

    if args.stdout {
        println!("{}", render(&response.methods, response.format)?);
        return Ok(());
    }
    if quiet {
        return Ok(());
    }

    println!("📝 Translated: {}", args.input.display());
    println!("   Files:    {}", response.files.len());
    println!("   Methods:  {}", response.method_count());
    println!(
        "   Tags:     {} ({} with conditions)",
        response.tag_count(),
        response.inferred_count()
    );
    println!("   Mode:     {}", response.throws_mode);
    if let Some(path) = &response.output_path {
        println!("💾 Saved to: {}", path.display());
    }

    Ok(())
}
