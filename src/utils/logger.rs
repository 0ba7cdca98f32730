use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// 函式庫與三個執行檔各自是獨立的 target
const LOG_TARGETS: [&str; 3] = ["wp_draft_dedup", "list_posts", "session_login"];

fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    let mut directives: Vec<String> = LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect();
    directives.push("warn".to_string());
    directives.join(",")
}

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

// 日誌一律寫到 stderr，stdout 留給報表輸出
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_cover_every_binary() {
        let directives = default_directives(false);
        assert_eq!(
            directives,
            "wp_draft_dedup=info,list_posts=info,session_login=info,warn"
        );
        assert!(EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn test_verbose_directives_enable_debug() {
        let directives = default_directives(true);
        assert!(directives.contains("list_posts=debug"));
        assert!(directives.contains("session_login=debug"));
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}
