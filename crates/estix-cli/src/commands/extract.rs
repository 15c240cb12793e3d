//! Extract command - pull structured data from a single estimate PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use estix_core::models::config::EstixConfig;
use estix_core::{DocumentSource, Estimate, MitchellEstimateParser, PdfSource};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input estimate PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction warnings
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (one row per repair item)
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        EstixConfig::from_file(std::path::Path::new(path))?
    } else {
        EstixConfig::default()
    };

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    // Create progress bar
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Loading PDF...");
    pb.set_position(10);

    let data = fs::read(&args.input)?;
    let source = PdfSource::from_bytes(&data)?;
    debug!("PDF has {} pages", source.page_count());

    pb.set_message("Extracting text...");
    pb.set_position(40);

    let text = source.extract_text()?;
    if text.trim().len() < config.pdf.min_text_length {
        warn!(
            "Extracted only {} characters of text; result will likely be empty",
            text.trim().len()
        );
    }

    pb.set_message("Extracting estimate data...");
    pb.set_position(70);

    let parser = MitchellEstimateParser::new();
    let report = parser.parse(&text);

    pb.set_position(100);
    pb.finish_with_message("Done");

    // Surface warnings
    if (args.show_warnings || config.output.show_warnings) && !report.warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &report.warnings {
            eprintln!("  - {}", warning);
        }
    }

    // Format output
    let output = format_estimate(&report.estimate, args.format, &config)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_estimate(
    estimate: &Estimate,
    format: OutputFormat,
    config: &EstixConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            if config.output.pretty_json {
                Ok(serde_json::to_string_pretty(estimate)?)
            } else {
                Ok(serde_json::to_string(estimate)?)
            }
        }
        OutputFormat::Csv => format_csv(estimate),
        OutputFormat::Text => Ok(format_text(estimate)),
    }
}

fn format_csv(estimate: &Estimate) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["year", "make_model", "plate", "vin", "type", "desc", "part_num"])?;

    for item in &estimate.items {
        wtr.write_record([
            &estimate.vehicle.year,
            &estimate.vehicle.make_model,
            &estimate.vehicle.plate,
            &estimate.vehicle.vin,
            &item.job_type.to_string(),
            &item.desc,
            &item.part_num,
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(estimate: &Estimate) -> String {
    let mut output = String::new();

    output.push_str("Vehicle:\n");
    output.push_str(&format!(
        "  {} {}\n",
        estimate.vehicle.year, estimate.vehicle.make_model
    ));
    if !estimate.vehicle.plate.is_empty() {
        output.push_str(&format!("  Plate: {}\n", estimate.vehicle.plate));
    }
    if !estimate.vehicle.vin.is_empty() {
        output.push_str(&format!("  VIN:   {}\n", estimate.vehicle.vin));
    }
    output.push('\n');

    output.push_str(&format!("Repair items ({}):\n", estimate.items.len()));
    for item in &estimate.items {
        if item.part_num.is_empty() {
            output.push_str(&format!("  {:<8} {}\n", item.job_type.to_string(), item.desc));
        } else {
            output.push_str(&format!(
                "  {:<8} {} [{}]\n",
                item.job_type.to_string(),
                item.desc,
                item.part_num
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use estix_core::{JobType, RepairItem};

    fn sample() -> Estimate {
        Estimate {
            items: vec![RepairItem::new(JobType::Replace, "Bumper Cover", "71101-TVA-A00")],
            ..Default::default()
        }
    }

    #[test]
    fn test_format_text_lists_items() {
        let text = format_text(&sample());
        assert!(text.contains("Replace"));
        assert!(text.contains("Bumper Cover [71101-TVA-A00]"));
    }

    #[test]
    fn test_format_csv_has_header_and_row() {
        let csv = format_csv(&sample()).unwrap();
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("year,"));
        assert!(lines.next().unwrap().contains("Bumper Cover"));
    }
}
