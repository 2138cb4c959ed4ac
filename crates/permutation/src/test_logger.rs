/// Constructs a logger for tests. This logger will not print anything to the
/// console, but will instead write to a buffer that is shown for failed tests.
pub fn test_logger() {
    // Ignore double initialisations since tests are ran in parallel.
    let _ = env_logger::builder().is_test(true).try_init();
}
