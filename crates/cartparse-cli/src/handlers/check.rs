//! Check command handler

use super::{cart_parser, ensure_exists};
use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use cartparse_core::{check_document, compare_with_cart, CartDocument};
use tracing::{debug, info, instrument, warn};

/// Handle the check command
#[instrument(skip(config, output), fields(file = %args.document.display()))]
pub fn handle_check(args: CheckArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details(
        "check_command",
        &format!("file: {}", args.document.display()),
    );

    let tolerance = args.tolerance.unwrap_or(config.check.tolerance);
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(Error::invalid_args(format!(
            "--tolerance must be a non-negative number, got {}",
            tolerance
        )));
    }
    debug!(tolerance, "Using amount tolerance");

    output.info(&format!("Checking cart document: {}", args.document.display()))?;
    ensure_exists(&args.document)?;
    let document = CartDocument::from_file(&args.document)?;

    let mut report = check_document(&document, tolerance);

    if let Some(csv) = &args.against {
        output.info(&format!("Comparing with cart parsed from {}", csv.display()))?;
        ensure_exists(csv)?;
        let cart = cart_parser(config, None)?.parse(csv)?;

        for issue in compare_with_cart(&document, &cart, tolerance).issues {
            if !report.issues.contains(&issue) {
                report.issues.push(issue);
            }
        }
    }

    output.consistency_report(&report)?;

    if report.is_consistent() {
        info!("Cart document is consistent");
        Ok(())
    } else {
        warn!("Cart document has {} consistency issue(s)", report.len());
        Err(Error::Inconsistent {
            path: args.document,
            count: report.len(),
        })
    }
}
