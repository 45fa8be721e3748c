//! Cart document validator
//!
//! Copyright (c) 2025 Cartparse Team
//! Licensed under the Apache-2.0 license

use crate::schema::{Schema, CART_SCHEMA};
use crate::tokenizer::{Row, Tokenizer};
use crate::validation::base::{DocumentValidator, ValidationHelpers};
use crate::validation::error::ValidationError;
use crate::validation::ValidationConfig;
use tracing::{debug, instrument, trace};

/// Validates CSV text against a fixed [`Schema`]
#[derive(Debug, Clone, Copy)]
pub struct CartValidator {
    schema: &'static Schema,
    tokenizer: Tokenizer,
}

impl Default for CartValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl CartValidator {
    /// Validator for the cart schema with the default tokenizer
    pub fn new() -> Self {
        Self {
            schema: &CART_SCHEMA,
            tokenizer: Tokenizer::default(),
        }
    }

    /// Use a custom tokenizer (e.g. a different delimiter)
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// The schema rows are checked against
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// The tokenizer used to split documents
    pub fn tokenizer(&self) -> Tokenizer {
        self.tokenizer
    }

    /// Run every rule over already tokenized rows
    pub fn validate_rows(&self, rows: &[Row]) -> Vec<ValidationError> {
        let mut errors = self.check_header(rows.first());

        for (index, row) in rows.iter().enumerate().skip(1) {
            errors.extend(self.check_row(index, row));
        }

        errors
    }

    /// Compare header cells with the schema names, one error per mismatching column
    fn check_header(&self, header: Option<&Row>) -> Vec<ValidationError> {
        self.schema
            .columns()
            .iter()
            .enumerate()
            .filter_map(|(index, column)| {
                let received = header.and_then(|cells| cells.get(index)).map(String::as_str);
                (received != Some(column.name))
                    .then(|| ValidationError::header(index, column.name, received))
            })
            .collect()
    }

    /// Row shape first; cell rules only when the shape is right
    fn check_row(&self, index: usize, row: &Row) -> Vec<ValidationError> {
        if row.len() != self.schema.len() {
            trace!(row = index, cells = row.len(), "Row shape mismatch");
            return vec![ValidationError::row_shape(index, self.schema.len(), row.len())];
        }

        self.schema
            .columns()
            .iter()
            .zip(row)
            .enumerate()
            .filter_map(|(column_index, (column, cell))| {
                ValidationHelpers::check_cell(column, index, column_index, cell)
            })
            .collect()
    }
}

impl DocumentValidator for CartValidator {
    #[instrument(skip(self, text, config), fields(bytes = text.len()))]
    fn validate_with_config(&self, text: &str, config: &ValidationConfig) -> Vec<ValidationError> {
        let rows = self.tokenizer.tokenize(text);
        let mut errors = self.validate_rows(&rows);

        if config.max_errors > 0 && errors.len() > config.max_errors {
            debug!(
                found = errors.len(),
                limit = config.max_errors,
                "Truncating validation errors"
            );
            errors.truncate(config.max_errors);
        }

        debug!(rows = rows.len(), errors = errors.len(), "Validation finished");
        errors
    }
}
