#![doc(test(attr(deny(warnings))))]

//! Bank Core offers the account domain model, per-user account management,
//! and durable ledger storage that power higher level banking front ends.
//!
//! The interactive command layer and the login/credential module are external
//! collaborators: this crate receives an already-authenticated username and
//! already-parsed arguments, and reports typed results for the caller to
//! translate into user-facing messages.

pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("bank_core=info".parse().unwrap());
        fmt().with_env_filter(filter).init();

        tracing::info!("Bank Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
