//! Tests for tracing subscriber setup

#[cfg(test)]
mod tests {
    use tileboard::io::logging::{DEFAULT_FILTER, QUIET_FILTER, env_filter, init};

    // Tests the fallback filters when RUST_LOG is unset
    #[test]
    fn test_fallback_filters() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let verbose = env_filter(false).to_string();
        let quiet = env_filter(true).to_string();
        assert!(verbose.eq_ignore_ascii_case(DEFAULT_FILTER), "{verbose}");
        assert!(quiet.eq_ignore_ascii_case(QUIET_FILTER), "{quiet}");
    }

    // Tests a second install reports the existing subscriber
    #[test]
    fn test_init_only_once() {
        let _ = init(true);
        assert!(!init(true));
    }
}
