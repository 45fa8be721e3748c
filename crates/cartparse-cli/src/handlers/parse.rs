//! Parse command handler

use super::{cart_parser, ensure_exists, report_validation_errors};
use crate::cli::ParseArgs;
use crate::config::Config;
use crate::error::{Error, ErrorContext, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use std::fs;
use tracing::{info, instrument, warn};

/// Handle the parse command
#[instrument(skip(config, output), fields(file = %args.csv.display()))]
pub fn handle_parse(args: ParseArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("parse_command", &format!("file: {}", args.csv.display()));
    output.info(&format!("Parsing cart document: {}", args.csv.display()))?;

    ensure_exists(&args.csv)?;

    let cart = match cart_parser(config, args.delimiter)?.parse(&args.csv) {
        Ok(cart) => cart,
        Err(cartparse_core::Error::Validation(errors)) => {
            warn!("Cart document failed validation with {} error(s)", errors.len());
            let errors = errors.into_vec();
            report_validation_errors(output, &errors, false)?;
            return Err(Error::ValidationFailed {
                path: args.csv,
                count: errors.len(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    info!(items = cart.items.len(), total = cart.total, "Parsed cart document");
    output.cart(&cart)?;

    if let Some(path) = &args.save_to {
        let document = serde_json::to_string_pretty(&cart)?;
        fs::write(path, document)
            .with_context(|| format!("Failed to save cart to {}", path.display()))?;
        info!("Saved cart document to {}", path.display());
        output.success(&format!("✓ Saved cart document to {}", path.display()))?;
    }

    Ok(())
}
