//! Cart parser: read, validate, then build items
//!
//! Validation and item construction are two separate passes. A document with
//! any validation error never yields items; the caller gets the complete error
//! list instead.

use crate::error::{Error, Result};
use crate::ids::{IdGenerator, RandomIds};
use crate::total::{calc_total, Priced};
use crate::types::{CartItem, ParsedCart};
use cartparse_schemas::schema::{NAME_COLUMN, PRICE_COLUMN, QUANTITY_COLUMN};
use cartparse_schemas::{
    CartValidator, DocumentValidator, Tokenizer, ValidationConfig, ValidationError,
    ValidationErrors, ValidationHelpers,
};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Parses cart CSV documents into [`ParsedCart`]s
pub struct CartParser {
    validator: CartValidator,
    config: ValidationConfig,
    ids: Box<dyn IdGenerator>,
}

impl fmt::Debug for CartParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartParser")
            .field("validator", &self.validator)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for CartParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CartParser {
    /// Parser for comma-delimited documents with random item ids
    pub fn new() -> Self {
        Self {
            validator: CartValidator::new(),
            config: ValidationConfig::default(),
            ids: Box::new(RandomIds),
        }
    }

    /// Split cells on the ASCII byte `delimiter` instead of `,`
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.validator = self
            .validator
            .with_tokenizer(Tokenizer::with_delimiter(delimiter));
        self
    }

    /// Use `ids` to assign item identifiers
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Limit the number of errors reported by [`CartParser::validate`]
    pub fn with_validation_config(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }

    /// Read a whole document into memory
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Every rule violation in `text`, in discovery order
    pub fn validate(&self, text: &str) -> Vec<ValidationError> {
        self.validator.validate_with_config(text, &self.config)
    }

    /// Build one item from the cells of a data row.
    ///
    /// Expects a row that already passed validation; anything else is reported
    /// as [`Error::MalformedLine`].
    pub fn parse_line(&self, cells: &[String]) -> Result<CartItem> {
        let delimiter = char::from(self.validator.tokenizer().delimiter()).to_string();
        let malformed = |reason: String| Error::MalformedLine {
            line: cells.join(delimiter.as_str()),
            reason,
        };

        let schema = self.validator.schema();
        if cells.len() != schema.len() {
            return Err(malformed(format!(
                "expected {} cells but received {}",
                schema.len(),
                cells.len()
            )));
        }

        let name = cells[NAME_COLUMN].clone();
        let number = |index: usize| {
            let cell = &cells[index];
            ValidationHelpers::parse_decimal(cell)
                .ok_or_else(|| malformed(format!("{:?} is not a decimal number", cell)))
        };

        Ok(CartItem {
            id: self.ids.next_id(),
            name,
            price: number(PRICE_COLUMN)?,
            quantity: number(QUANTITY_COLUMN)?,
        })
    }

    /// Sum of `price * quantity` over `items`
    pub fn calc_total<T: Priced>(&self, items: &[T]) -> f64 {
        calc_total(items)
    }

    /// Read, validate and parse the document at `path`
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<ParsedCart> {
        let text = self.read_file(path.as_ref())?;
        debug!(bytes = text.len(), "Read cart document");
        self.parse_str(&text)
    }

    /// Validate and parse an in-memory document
    pub fn parse_str(&self, text: &str) -> Result<ParsedCart> {
        let errors = self.validate(text);
        if !errors.is_empty() {
            warn!(errors = errors.len(), "Cart document failed validation");
            return Err(Error::Validation(ValidationErrors::from(errors)));
        }

        let rows = self.validator.tokenizer().tokenize(text);
        let items = rows
            .iter()
            .skip(1)
            .map(|cells| self.parse_line(cells))
            .collect::<Result<Vec<_>>>()?;
        let total = self.calc_total(&items);

        info!(items = items.len(), total, "Parsed cart");
        Ok(ParsedCart { items, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::total::amounts_match;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_line() {
        let parser = CartParser::new();
        let item = parser
            .parse_line(&cells(&["Tvoluptatem", "10.32", "1"]))
            .unwrap();
        assert_eq!(item.name, "Tvoluptatem");
        assert_eq!(item.price, 10.32);
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.id.get_version_num(), 4);
    }

    #[test]
    fn test_parse_line_rejects_malformed_cells() {
        let parser = CartParser::new();
        let err = parser.parse_line(&cells(&["x", "1"])).unwrap_err();
        assert!(matches!(err, Error::MalformedLine { ref line, .. } if line == "x,1"));

        let err = parser.parse_line(&cells(&["x", "cheap", "1"])).unwrap_err();
        assert!(err.to_string().contains("\"cheap\" is not a decimal number"));
    }

    #[test]
    fn test_parse_str_builds_items_in_order() {
        let parser = CartParser::new().with_id_generator(SequentialIds::default());
        let cart = parser
            .parse_str("Product name,Price,Quantity\nMollis consequat,9.00,2\nTvoluptatem,10.32,1\n")
            .unwrap();

        let names: Vec<_> = cart.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Mollis consequat", "Tvoluptatem"]);
        assert_ne!(cart.items[0].id, cart.items[1].id);
        assert!(amounts_match(cart.total, 28.32, 1e-9));
    }

    #[test]
    fn test_parse_str_fails_without_partial_items() {
        let parser = CartParser::new();
        let err = parser
            .parse_str("Product name,Price,Quantity\nMollis consequat,9.00,2\n,1,1")
            .unwrap_err();

        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors[0], ValidationError::empty_string(2, 0, ""));
    }

    #[test]
    fn test_header_only_document_parses_to_empty_cart() {
        let cart = CartParser::new().parse_str("Product name,Price,Quantity").unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total, 0.0);
    }

    #[test]
    fn test_custom_delimiter() {
        let parser = CartParser::new().with_delimiter(b';');
        let cart = parser
            .parse_str("Product name;Price;Quantity\nMollis consequat;9.00;2")
            .unwrap();
        assert_eq!(cart.total, 18.0);
    }

    #[test]
    fn test_validation_limit_applies_to_validate() {
        let parser =
            CartParser::new().with_validation_config(ValidationConfig::default().with_max_errors(1));
        let errors = parser.validate("Name\n,,\n");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_read_file_missing() {
        let err = CartParser::new()
            .read_file("/definitely/not/here.csv")
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
