/// Application-level constants
pub const APP_NAME: &str = "Muraqib";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "muraqib=info"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_muraqib() {
        assert_eq!(APP_NAME, "Muraqib");
    }

    #[test]
    fn version_comes_from_cargo() {
        assert!(!APP_VERSION.is_empty());
    }

    #[test]
    fn default_filter_scopes_to_crate() {
        assert!(default_log_filter().starts_with("muraqib"));
    }
}
