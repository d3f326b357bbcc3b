//! Shared helpers for unit tests.

/// Route `log` output through env_logger; safe to call from every test
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
