use clap::Parser;
use std::path::PathBuf;

/// Finalize a container scan report and render it as CycloneDX or SPDX
#[derive(Parser, Debug)]
#[command(name = "diggity-bom")]
#[command(version)]
#[command(
    about = "Finalize container scan results and render them as CycloneDX and SPDX documents",
    long_about = None
)]
pub struct Args {
    /// Path to the JSON scan report
    #[arg(short, long, value_name = "SCAN_REPORT")]
    pub input: PathBuf,

    /// Output formats, comma separated: json, cyclonedx-xml, cyclonedx-json,
    /// spdx-json, spdx-tag-value (default: cyclonedx-xml)
    #[arg(short, long, value_name = "FORMATS")]
    pub output: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'f', long = "output-file", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Config file (defaults to ./diggity-bom.config.yml when present)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from(["diggity-bom", "-i", "scan.json"]).unwrap();

        assert_eq!(args.input, PathBuf::from("scan.json"));
        assert!(args.output.is_none());
        assert!(args.output_file.is_none());
        assert!(args.config.is_none());
        assert!(!args.quiet);
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "diggity-bom",
            "--input",
            "scan.json",
            "--output",
            "spdx,cyclonedx-json",
            "--output-file",
            "bom.out",
            "--config",
            "custom.yml",
            "--quiet",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(args.output.as_deref(), Some("spdx,cyclonedx-json"));
        assert_eq!(args.output_file, Some(PathBuf::from("bom.out")));
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
        assert!(args.quiet);
        assert!(args.verbose);
    }

    #[test]
    fn test_parse_missing_input_is_error() {
        assert!(Args::try_parse_from(["diggity-bom"]).is_err());
    }

    #[test]
    fn test_unknown_format_token_is_accepted() {
        let args = Args::try_parse_from(["diggity-bom", "-i", "scan.json", "-o", "table"]).unwrap();
        assert_eq!(args.output.as_deref(), Some("table"));
    }
}
