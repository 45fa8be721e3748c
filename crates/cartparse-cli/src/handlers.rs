//! Command handlers for CLI subcommands
//!
//! Each subcommand lives in its own module; the helpers here are shared
//! between them.

mod check;
mod completions;
mod config;
mod parse;
mod validate;

pub use check::handle_check;
pub use completions::handle_completions;
pub use config::handle_config;
pub use parse::handle_parse;
pub use validate::handle_validate;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use cartparse_core::CartParser;
use cartparse_schemas::{ErrorKind, ValidationError, ValidationErrors};
use std::path::Path;
use tracing::error;

/// Fail with [`Error::FileNotFound`] unless `path` exists
fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        error!("File not found: {}", path.display());
        Err(Error::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Parser using the delimiter from the command line, else from config
fn cart_parser(config: &Config, delimiter: Option<u8>) -> Result<CartParser> {
    let delimiter = match delimiter {
        Some(delimiter) => delimiter,
        None => config.parser.delimiter_byte()?,
    };
    Ok(CartParser::new().with_delimiter(delimiter))
}

/// Print the errors of a rejected document.
///
/// The detailed view is a table followed by a count per error kind. It is
/// shown when asked for or at `-v` and above; machine formats always get the
/// plain error list.
fn report_validation_errors(
    output: &mut OutputWriter,
    errors: &[ValidationError],
    detailed: bool,
) -> Result<()> {
    let detailed = detailed || output.verbosity() > 0;
    if !(detailed && output.is_human()) {
        return output.validation_errors(errors);
    }

    output.error(&format!("✗ Found {} error(s)", errors.len()))?;
    let rows = errors
        .iter()
        .map(|e| {
            vec![
                e.kind.to_string(),
                e.row.to_string(),
                e.column
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                e.message.clone(),
            ]
        })
        .collect();
    output.table(&["Type", "Row", "Column", "Message"], rows)?;

    output.section("Summary")?;
    let summary = ValidationErrors::from(errors.to_vec());
    for kind in [ErrorKind::Header, ErrorKind::Row, ErrorKind::Cell] {
        output.info(&format!("{} errors: {}", kind, summary.count_kind(kind)))?;
    }
    Ok(())
}
