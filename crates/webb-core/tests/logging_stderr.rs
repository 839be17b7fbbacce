//! Stderr fallback installs the global subscriber. Own test binary: the
//! global dispatcher can only be set once per process.

use webb_core::logging;

#[test]
fn stderr_fallback_sets_global_subscriber() {
    assert!(!tracing::dispatcher::has_been_set());
    logging::init_logging_stderr();
    assert!(tracing::dispatcher::has_been_set());
    tracing::info!("stderr logging ready");
}
