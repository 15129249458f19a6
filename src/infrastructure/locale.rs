//! Device locale detection.
//!
//! Device locales order the language selector: languages the user reads come
//! first. Locales are read from the environment in GNU preference order:
//! `LANGUAGE` (a colon-separated list), then `LC_ALL`, `LC_MESSAGES`, `LANG`.

use std::env;

/// Detects the user's preferred locales, most preferred first.
///
/// Falls back to `["en"]` when nothing usable is set.
#[must_use]
pub fn detect_device_locales() -> Vec<String> {
    let language = env::var("LANGUAGE").ok();
    let lc_all = env::var("LC_ALL").ok();
    let lc_messages = env::var("LC_MESSAGES").ok();
    let lang = env::var("LANG").ok();
    detect_device_locales_from(
        language.as_deref(),
        &[lc_all.as_deref(), lc_messages.as_deref(), lang.as_deref()],
    )
}

fn detect_device_locales_from(language: Option<&str>, singles: &[Option<&str>]) -> Vec<String> {
    let mut locales: Vec<String> = Vec::new();

    let candidates = language
        .into_iter()
        .flat_map(|list| list.split(':'))
        .chain(singles.iter().flatten().copied());

    for raw in candidates {
        if let Some(locale) = normalize_locale(raw) {
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }
    }

    if locales.is_empty() {
        locales.push("en".to_string());
    }
    locales
}

/// Normalizes a POSIX-style locale (`pt_BR.UTF-8@euro`) into a tag (`pt-BR`).
///
/// Returns `None` for empty input; `C` and `POSIX` map to `en`.
#[must_use]
pub fn normalize_locale(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let raw = raw.split('@').next().unwrap_or(raw);
    let raw = raw.split('.').next().unwrap_or(raw).trim();
    if raw.is_empty() {
        return None;
    }

    if raw.eq_ignore_ascii_case("c") || raw.eq_ignore_ascii_case("posix") {
        return Some("en".to_string());
    }
    Some(raw.replace('_', "-"))
}

/// Language part of a locale tag (`"pt-BR"` → `"pt"`), lowercased.
#[must_use]
pub fn language_of(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase()
}
