//! Language selector derivation.

use crate::domain::{AvailableCatalog, Language, LanguageChoice};
use crate::infrastructure::locale::language_of;
use std::collections::BTreeSet;

/// Builds the language choices offered over `available` catalogs.
///
/// Distinct codes are ordered so that codes equal to the language of a device
/// locale come first, in locale preference order; the rest follow sorted by
/// code. Only the language part of a locale is compared, so a `pt-BR` device
/// promotes `pt` while a region-tagged `pt-BR` code sorts with the rest. Codes with a flag become individual [`LanguageChoice::One`] entries,
/// the others are grouped in a single trailing [`LanguageChoice::Others`].
/// [`LanguageChoice::All`] always leads.
///
/// # Example
///
/// ```rust
/// use catalogs::presenter::get_language_choices;
/// use catalogs::{AvailableCatalog, Language, LanguageChoice};
///
/// let catalog = |lang: &str| AvailableCatalog {
///     source_id: 0,
///     name: format!("source-{lang}"),
///     lang: lang.to_string(),
///     description: String::new(),
///     pkg_name: format!("ext.{lang}"),
///     version_name: "1.0".to_string(),
///     version_code: 1,
///     nsfw: false,
///     icon_url: None,
///     apk_name: None,
/// };
/// let available = [catalog("en"), catalog("en"), catalog("fr"), catalog("xx")];
///
/// let choices = get_language_choices(&available, &["en-US".to_string()]);
/// assert_eq!(choices, vec![
///     LanguageChoice::All,
///     LanguageChoice::One(Language::new("en")),
///     LanguageChoice::One(Language::new("fr")),
///     LanguageChoice::Others(vec![Language::new("xx")]),
/// ]);
/// ```
#[must_use]
pub fn get_language_choices(
    available: &[AvailableCatalog],
    device_locales: &[String],
) -> Vec<LanguageChoice> {
    let user_languages: Vec<String> = device_locales.iter().map(|l| language_of(l)).collect();
    let preference = |code: &str| {
        user_languages
            .iter()
            .position(|language| language == code)
            .unwrap_or(usize::MAX)
    };

    // BTreeSet yields codes already sorted; the stable sort keeps that order
    // among codes with equal preference.
    let mut codes: Vec<&str> = available
        .iter()
        .map(|catalog| catalog.lang.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    codes.sort_by_key(|code| preference(*code));

    let mut known = Vec::new();
    let mut unknown = Vec::new();
    for code in codes {
        let language = Language::new(code);
        if language.emoji().is_some() {
            known.push(LanguageChoice::One(language));
        } else {
            unknown.push(language);
        }
    }

    let mut choices = Vec::with_capacity(known.len() + 2);
    choices.push(LanguageChoice::All);
    choices.extend(known);
    if !unknown.is_empty() {
        choices.push(LanguageChoice::Others(unknown));
    }
    choices
}
