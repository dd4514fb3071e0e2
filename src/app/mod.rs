//! Top-level runs shared by the binaries.
//!
//! Each run catches every error, logs it and turns it into the lines the
//! binary prints on stdout. Nothing here panics or exits the process.

use crate::adapters::{CalamineSource, LocalStorage};
use crate::config::{ConvertArgs, ReindexArgs};
use crate::core::{convert, reindex};
use crate::core::convert::SpreadsheetPipeline;
use crate::core::reindex::ReindexPipeline;
use crate::utils::error::PrepError;
use crate::utils::validation::Validate;
use crate::EtlEngine;

pub fn run_convert(args: &ConvertArgs) -> Vec<String> {
    let outcome = args.validate().and_then(|_| {
        let pipeline = SpreadsheetPipeline::new(
            CalamineSource::default(),
            LocalStorage::default(),
            args.input.clone(),
            args.output.clone(),
        );
        EtlEngine::new(pipeline).run()
    });

    match outcome {
        Ok(report) => {
            tracing::info!("Converted {} rows", report.rows);
            vec![report.success_message()]
        }
        Err(e) => {
            log_failure(&e);
            vec![convert::failure_message(&e, &args.input)]
        }
    }
}

pub fn run_reindex(args: &ReindexArgs) -> Vec<String> {
    let (input, output) = args.resolve();

    let outcome = args.validate().and_then(|_| {
        let pipeline = ReindexPipeline::new(LocalStorage::default(), input.clone(), output);
        EtlEngine::new(pipeline).run()
    });

    match outcome {
        Ok(report) => {
            if report.overwritten > 0 {
                tracing::info!("{} items shared an id with an earlier item", report.overwritten);
            }
            let mut lines = report.warning_lines();
            lines.extend(report.summary_lines());
            lines
        }
        Err(e) => {
            log_failure(&e);
            vec![reindex::failure_message(&e, &input)]
        }
    }
}

fn log_failure(e: &PrepError) {
    tracing::error!("Run failed: {} (Category: {:?})", e, e.category());
    tracing::debug!("Suggestion: {}", e.recovery_suggestion());
}
