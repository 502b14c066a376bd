//! Locale code to output directory prefix.

/// Locale whose output is written at the output root without a prefix.
pub const DEFAULT_LOCALE: &str = "en";

/// Builds the output directory prefix for a locale.
///
/// The default locale (either `default_code` or [`DEFAULT_LOCALE`]) maps to the
/// empty string. Any other code is lower-cased, has its underscores replaced by
/// dashes and gets a trailing `/`.
///
/// # Examples
///
/// ```
/// use statici18n::core::locale::lang_prefix;
///
/// assert_eq!(lang_prefix("en", Some("en")), "");
/// assert_eq!(lang_prefix("pt_BR", None), "pt-br/");
/// assert_eq!(lang_prefix("de-Latn_DE-1996", None), "de-latn-de-1996/");
/// ```
pub fn lang_prefix(code: &str, default_code: Option<&str>) -> String {
    if default_code == Some(code) || code == DEFAULT_LOCALE {
        return String::new();
    }
    format!("{}/", code.to_lowercase().replace('_', "-"))
}
