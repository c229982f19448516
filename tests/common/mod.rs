use std::fs;
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Schedule folder with the given documents, as the export tool leaves it.
pub fn schedule_dir(names: &[&str]) -> TempDir {
    init_logging();
    let dir = TempDir::new().expect("Failed to create temp dir");
    for name in names {
        fs::write(dir.path().join(name), b"%PDF-1.4").expect("Failed to write fixture");
    }
    dir
}
