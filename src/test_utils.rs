use std::fs;
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize logger only once per test binary.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Temp directory populated with empty files named `names`.
pub fn schedule_dir(names: &[&str]) -> TempDir {
    init_test_logging();
    let dir = TempDir::new().expect("Failed to create temp dir");
    for name in names {
        fs::write(dir.path().join(name), "test").expect("Failed to write fixture");
    }
    dir
}
