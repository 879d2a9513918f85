use crate::common::*;

static LOGGER_HANDLE: once_lazy<std::sync::Mutex<Option<LoggerHandle>>> =
    once_lazy::new(|| std::sync::Mutex::new(None));

#[doc = "Custom log line: `[2024-01-01 09:00:00.000] [INFO] [src/main.rs:42] message`"]
pub fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}:{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.file().unwrap_or("<unknown>"),
        record.line().unwrap_or(0),
        record.args()
    )
}

#[doc = r#"
    전역 로거 설정.

    Log level comes from `RUST_LOG` (default `info`). Lines go to daily rotated
    files under `log_dir`, keeping the last 10, and are duplicated to stderr.
"#]
pub fn set_global_logger(log_dir: &str) {
    let log_spec: String = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let handle: LoggerHandle = Logger::try_with_str(&log_spec)
        .unwrap_or_else(|e| panic!("[set_global_logger] invalid log spec '{}': {:?}", log_spec, e))
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename("service_cost_chart"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .format_for_files(custom_format)
        .format_for_stderr(custom_format)
        .duplicate_to_stderr(Duplicate::Info)
        .start()
        .unwrap_or_else(|e| panic!("[set_global_logger] failed to start logger: {:?}", e));

    /* The handle must outlive main, otherwise the file writer is flushed and closed */
    if let Ok(mut slot) = LOGGER_HANDLE.lock() {
        *slot = Some(handle);
    }
}
