//! Command-line flags.

use clap::Parser;

use crate::display::OutputFormat;

/// Interactive in-memory product catalog.
#[derive(Debug, Default, Parser)]
#[command(name = "catalog", version, about)]
pub struct Args {
    /// Preload two sample products (Teclado, Mouse)
    #[arg(long)]
    pub seed: bool,

    /// Currency symbol shown before prices
    #[arg(long, value_name = "SYMBOL")]
    pub currency: Option<String>,

    /// Output format for list and show
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from(["catalog", "--seed", "--currency", "$", "--format", "json"])
            .unwrap();
        assert!(args.seed);
        assert_eq!(args.currency.as_deref(), Some("$"));
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_no_flags() {
        let args = Args::try_parse_from(["catalog"]).unwrap();
        assert!(!args.seed);
        assert!(args.currency.is_none());
        assert!(args.format.is_none());
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Args::try_parse_from(["catalog", "--format", "xml"]).is_err());
    }
}
