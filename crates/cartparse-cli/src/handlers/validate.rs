//! Validate command handler

use super::{cart_parser, ensure_exists, report_validation_errors};
use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use cartparse_schemas::ValidationConfig;
use tracing::{debug, info, instrument, warn};

/// Handle the validate command
#[instrument(skip(config, output), fields(file = %args.csv.display()))]
pub fn handle_validate(
    args: ValidateArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::with_details("validate_command", &format!("file: {}", args.csv.display()));
    info!("Starting validation process");
    output.info(&format!("Validating cart document: {}", args.csv.display()))?;

    ensure_exists(&args.csv)?;

    let limits = args
        .max_errors
        .map(|max| ValidationConfig::default().with_max_errors(max))
        .unwrap_or_default();
    let parser = cart_parser(config, args.delimiter)?.with_validation_config(limits);

    let text = parser.read_file(&args.csv)?;
    debug!("File read successfully, {} bytes", text.len());

    let errors = {
        let _validation_timer = Timer::new("cart_validation");
        parser.validate(&text)
    };

    if errors.is_empty() {
        info!("Validation completed successfully");
        output.success(&format!("✓ {} is a valid cart document", args.csv.display()))?;
        if !output.is_human() {
            // machine formats always get the (empty) error list
            output.validation_errors(&errors)?;
        }
        return Ok(());
    }

    warn!("Validation failed with {} error(s)", errors.len());
    report_validation_errors(output, &errors, args.detailed)?;

    Err(Error::ValidationFailed {
        path: args.csv,
        count: errors.len(),
    })
}
