use std::cell::RefCell;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Logger that keeps the records emitted on each thread, so that tests can inspect what they
/// logged.
struct CapturingLogger;

static LOGGER: CapturingLogger = CapturingLogger;

thread_local!(static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new()));

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), format!("{}", record.args())))
        });
    }

    fn flush(&self) {}
}

/// Runs `f` and returns the records it logged on the current thread.
pub(crate) fn capture_logs<F>(f: F) -> Vec<(Level, String)>
where
    F: FnOnce(),
{
    // Only the first call installs the logger.
    let _ = log::set_logger(&LOGGER);

    log::set_max_level(LevelFilter::Trace);

    RECORDS.with(|records| records.borrow_mut().clear());

    f();

    RECORDS.with(|records| records.borrow_mut().drain(..).collect())
}
