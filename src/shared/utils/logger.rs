use log::{debug, error, info, LevelFilter};
use std::sync::Once;
use std::time::Instant;

static INIT: Once = Once::new();

/// Per-target levels applied before `RUST_LOG`, which can override any of them
const TARGET_LEVELS: &[(&str, LevelFilter)] = &[
    ("cinedex_lib", LevelFilter::Debug),
    ("cinedex", LevelFilter::Debug),
    ("diesel", LevelFilter::Warn),
    ("reqwest", LevelFilter::Warn),
    ("hyper", LevelFilter::Warn),
    ("tokio", LevelFilter::Warn),
];

/// Install the env_logger backend. Later calls are no-ops.
pub fn init_logger() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(LevelFilter::Info);
        for (target, level) in TARGET_LEVELS {
            builder.filter_module(target, *level);
        }
        builder
            .parse_env("RUST_LOG")
            .format_timestamp_secs()
            .format_module_path(false)
            .init();

        info!("Logger ready");
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// One-line log helpers shared by the store, the catalog adapter and the
/// import workflow, so their lines read the same in the output
pub struct LogContext;

impl LogContext {
    /// `duration_ms` is `None` when the operation is starting
    pub fn db_operation(operation: &str, table: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(ms) => debug!("[db] {}.{} done in {}ms", table, operation, ms),
            None => debug!("[db] {}.{} started", table, operation),
        }
    }

    pub fn api_call(provider: &str, endpoint: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(ms) => info!("[api] {} {} -> {} ({}ms)", provider, endpoint, status, ms),
            None => debug!("[api] {} {} {}", provider, endpoint, status),
        }
    }

    pub fn import_progress(current: usize, total: usize, title: &str) {
        debug!("[import] {}/{} '{}'", current, total, title);
    }

    pub fn search_operation(term: &str, source: Option<&str>, hits: Option<usize>) {
        let source = source.unwrap_or("store");
        match hits {
            Some(hits) => info!("[search] '{}' on {}: {} hit(s)", term, source, hits),
            None => debug!("[search] '{}' on {} started", term, source),
        }
    }

    pub fn error_with_context(err: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, err);
    }

    pub fn performance_metric(operation: &str, duration_ms: u64, note: Option<&str>) {
        match note {
            Some(note) => info!("[perf] {} {}ms ({})", operation, duration_ms, note),
            None => info!("[perf] {} {}ms", operation, duration_ms),
        }
    }
}

/// Wall-clock timer reported through [`LogContext::performance_metric`]
pub struct TimedOperation {
    started: Instant,
    label: String,
}

impl TimedOperation {
    pub fn new(label: &str) -> Self {
        debug!("[perf] {} started", label);
        Self {
            started: Instant::now(),
            label: label.to_string(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Log the elapsed time and return it
    pub fn finish(self) -> u64 {
        let elapsed = self.elapsed_ms();
        LogContext::performance_metric(&self.label, elapsed, None);
        elapsed
    }
}
