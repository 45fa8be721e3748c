//! Validation module for cart documents
//!
//! Rules run in a fixed order so that the error list is deterministic:
//!
//! - **Header**: one check per schema column, absent cells reported as `undefined`
//! - **Row shape**: a data row with the wrong cell count gets a single row error
//!   and no cell checks
//! - **Cells**: column rules applied left to right
//!
//! Copyright (c) 2025 Cartparse Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod cart;
pub mod error;

// Re-export commonly used types
pub use base::{DocumentValidator, ValidationHelpers};
pub use cart::CartValidator;
pub use error::{ErrorKind, ValidationError, ValidationErrors};

/// Convenience function to create the cart validator
///
/// # Examples
///
/// ```rust
/// use cartparse_schemas::validation::{create_cart_validator, DocumentValidator};
///
/// let validator = create_cart_validator();
/// let text = "Product name,Price,Quantity\nMollis consequat,9.00,2";
///
/// assert!(validator.validate(text).is_empty());
/// ```
pub fn create_cart_validator() -> CartValidator {
    CartValidator::new()
}

/// Limits applied while collecting errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Maximum number of errors to keep (0 = unlimited)
    pub max_errors: usize,
}

impl ValidationConfig {
    /// Collect every error
    pub fn exhaustive() -> Self {
        Self::default()
    }

    /// Set maximum number of errors to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_config_defaults() {
        let config = ValidationConfig::default();
        assert_eq!(config.max_errors, 0);
        assert_eq!(config, ValidationConfig::exhaustive());
    }

    #[test]
    fn test_validation_config_builder() {
        let config = ValidationConfig::exhaustive().with_max_errors(5);
        assert_eq!(config.max_errors, 5);
    }
}
