use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` 未設定時使用的過濾規則
pub fn default_filter(verbose: bool, level: Option<&str>) -> String {
    match level {
        Some(level) => format!("franchise_app={}", level),
        None if verbose => "franchise_app=debug,info".to_string(),
        None => "franchise_app=info".to_string(),
    }
}

pub fn init_logger(verbose: bool, level: Option<&str>, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, level)));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        // 部署環境交給日誌收集器，用 JSON
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false, None), "franchise_app=info");
        assert_eq!(default_filter(true, None), "franchise_app=debug,info");
        assert_eq!(default_filter(false, Some("trace")), "franchise_app=trace");
        // 明確的 level 優先於 verbose
        assert_eq!(default_filter(true, Some("warn")), "franchise_app=warn");
    }
}
