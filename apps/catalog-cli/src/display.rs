//! Text and JSON rendering of products.
//!
//! Text lines look like `[1] Teclado | R$ 99.90 | stock: 10`.

use std::str::FromStr;

use catalog_core::Product;
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Output format for listing and showing products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per product
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(other.to_string()),
        }
    }
}

/// Formats one product as a display line.
pub fn format_product(product: &Product, currency_symbol: &str) -> String {
    format!(
        "[{}] {} | {} {:.2} | stock: {}",
        product.id(),
        product.name(),
        currency_symbol,
        product.price(),
        product.stock()
    )
}

/// Renders a single product in the requested format.
pub fn render_product(
    product: &Product,
    format: OutputFormat,
    currency_symbol: &str,
) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(format_product(product, currency_symbol)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(product)?),
    }
}

/// Renders a list of products, one per line in text mode.
///
/// Returns `None` for an empty text listing so the caller can print its own
/// "nothing here" line. JSON always renders (as `[]` when empty).
pub fn render_list(
    products: &[Product],
    format: OutputFormat,
    currency_symbol: &str,
) -> CliResult<Option<String>> {
    match format {
        OutputFormat::Text if products.is_empty() => Ok(None),
        OutputFormat::Text => Ok(Some(
            products
                .iter()
                .map(|p| format_product(p, currency_symbol))
                .collect::<Vec<_>>()
                .join("\n"),
        )),
        OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(products)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::ProductRepository;

    fn sample() -> Vec<Product> {
        let mut repo = ProductRepository::new();
        repo.create("Teclado", 99.9, 10).unwrap();
        repo.create("Mouse", 59.5, 25).unwrap();
        repo.list_all()
    }

    #[test]
    fn test_format_product() {
        let products = sample();
        assert_eq!(
            format_product(&products[0], "R$"),
            "[1] Teclado | R$ 99.90 | stock: 10"
        );
        assert_eq!(
            format_product(&products[1], "$"),
            "[2] Mouse | $ 59.50 | stock: 25"
        );
    }

    #[test]
    fn test_render_list_text() {
        let text = render_list(&sample(), OutputFormat::Text, "R$")
            .unwrap()
            .unwrap();
        assert_eq!(
            text,
            "[1] Teclado | R$ 99.90 | stock: 10\n[2] Mouse | R$ 59.50 | stock: 25"
        );

        assert!(render_list(&[], OutputFormat::Text, "R$").unwrap().is_none());
    }

    #[test]
    fn test_render_list_json() {
        let json = render_list(&sample(), OutputFormat::Json, "R$")
            .unwrap()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "Teclado");
        assert_eq!(value[1]["stock"], 25);

        let empty = render_list(&[], OutputFormat::Json, "R$").unwrap().unwrap();
        assert_eq!(empty, "[]");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" TEXT ".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("xml".parse::<OutputFormat>(), Err("xml".to_string()));
    }
}
