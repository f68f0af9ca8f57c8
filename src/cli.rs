//! Command-line front end for the label dictionary.

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use log::{debug, info, warn};

use crate::annotate::annotate_with;
use crate::config::LabelDisplayConfig;
use crate::dictionary::CodeLabelDictionary;

#[derive(Debug, Parser)]
#[command(
    name = "clinical-labels",
    about = "Print human-readable labels for clinical variable codes"
)]
pub struct Cli {
    /// Fail on the first code without a label
    #[arg(long)]
    pub strict: bool,
    /// Print the whole label table as JSON
    #[arg(long, conflicts_with = "codes")]
    pub json: bool,
    /// Codes to label; lists the whole table when omitted
    pub codes: Vec<String>,
}

/// Execute a parsed command line, writing results to `out`
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let dictionary = CodeLabelDictionary::global();
    debug!("Loaded {} labels", dictionary.len());

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &dictionary.sorted_entries())
            .context("Failed to serialize label table")?;
        writeln!(out)?;
        return Ok(());
    }

    if cli.codes.is_empty() {
        for entry in dictionary.sorted_entries() {
            writeln!(out, "{entry}")?;
        }
        return Ok(());
    }

    let config = LabelDisplayConfig::default();
    let annotated = annotate_with(dictionary, &cli.codes, &config);

    if cli.strict
        && let Some(missing) = annotated.iter().find(|a| !a.is_known())
    {
        anyhow::bail!("No label for '{}'", missing.code);
    }

    let unknown = annotated.iter().filter(|a| !a.is_known()).count();
    for code in &annotated {
        writeln!(out, "{}\t{}", code.code, code.display(&config))?;
    }

    if unknown > 0 {
        warn!("{unknown} of {} codes have no label", annotated.len());
    } else {
        info!("Labelled {} codes", annotated.len());
    }

    Ok(())
}
