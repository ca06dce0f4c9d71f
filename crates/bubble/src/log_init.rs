use log::{Level, LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

struct FileLogger {
    file_path: PathBuf,
    level: Level,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Append `debug` and above to the file at `path`.
///
/// Fails if the file cannot be opened or a logger is already installed.
pub fn init_logger(path: impl AsRef<Path>) -> Result<()> {
    let file_path = path.as_ref().to_path_buf();
    OpenOptions::new().create(true).append(true).open(&file_path)?;

    let logger = FileLogger {
        file_path,
        level: Level::Debug,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}
