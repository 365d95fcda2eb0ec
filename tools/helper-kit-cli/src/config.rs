//! Command defaults loaded via OrthoConfig.

use helper_kit::{DEFAULT_SALT_LENGTH, PaginationConfig};
use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Defaults applied when a command omits the corresponding flag.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HELPER_KIT")]
pub struct HelperKitSettings {
    /// Country code used by `phone`.
    pub country_code: Option<String>,
    /// Local prefix replaced by the country code in `phone`.
    pub replace_prefix: Option<String>,
    /// Salt length for `token-encode` and `token-decode`.
    pub salt_length: Option<usize>,
    /// Page size for `paginate`.
    pub page_size: Option<i64>,
    /// Largest page size `paginate` accepts.
    pub max_page_size: Option<i64>,
}

impl HelperKitSettings {
    /// Return the configured salt length, falling back to the default.
    #[must_use]
    pub fn salt_length(&self) -> usize {
        self.salt_length.unwrap_or(DEFAULT_SALT_LENGTH)
    }

    /// Return the configured pagination defaults.
    #[must_use]
    pub fn pagination(&self) -> PaginationConfig {
        let defaults = PaginationConfig::default();
        PaginationConfig {
            page_size: self.page_size.unwrap_or(defaults.page_size),
            max_page_size: self.max_page_size.unwrap_or(defaults.max_page_size),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings loading.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use helper_kit::{DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE};
    use rstest::rstest;

    const SETTINGS_VARS: [&str; 5] = [
        "HELPER_KIT_COUNTRY_CODE",
        "HELPER_KIT_REPLACE_PREFIX",
        "HELPER_KIT_SALT_LENGTH",
        "HELPER_KIT_PAGE_SIZE",
        "HELPER_KIT_MAX_PAGE_SIZE",
    ];

    fn load_from_empty_args() -> HelperKitSettings {
        HelperKitSettings::load_from_iter([OsString::from("helper-kit")])
            .expect("settings should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(SETTINGS_VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert!(settings.country_code.is_none());
        assert_eq!(settings.salt_length(), DEFAULT_SALT_LENGTH);
        assert_eq!(
            settings.pagination(),
            PaginationConfig {
                page_size: DEFAULT_PAGE_SIZE,
                max_page_size: DEFAULT_MAX_PAGE_SIZE,
            }
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("HELPER_KIT_COUNTRY_CODE", Some("62".to_owned())),
            ("HELPER_KIT_REPLACE_PREFIX", Some("0".to_owned())),
            ("HELPER_KIT_SALT_LENGTH", Some("8".to_owned())),
            ("HELPER_KIT_PAGE_SIZE", Some("25".to_owned())),
            ("HELPER_KIT_MAX_PAGE_SIZE", Some("50".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.country_code.as_deref(), Some("62"));
        assert_eq!(settings.replace_prefix.as_deref(), Some("0"));
        assert_eq!(settings.salt_length(), 8);
        assert_eq!(settings.pagination().page_size, 25);
        assert_eq!(settings.pagination().max_page_size, 50);
    }
}
