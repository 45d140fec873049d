#![doc(test(attr(deny(warnings))))]

//! Budget Dashboard tracks debts, recurring installments and weekly spending
//! logs, and derives weekly budget summaries from them.

pub mod calendar;
pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod sync;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Dashboard tracing initialized.");
    });
}
