//! Line commands read from stdin by the binary.
//!
//! | input            | command                              |
//! |------------------|--------------------------------------|
//! | `all`            | show every available catalog         |
//! | `others`         | the grouped languages without a flag |
//! | `<code>`         | one language, e.g. `en` or `pt-BR`   |
//! | `reload`         | re-read the catalogs file            |
//! | `help`, `?`      | list commands                        |
//! | `q`, `quit`      | exit                                 |

use crate::domain::{Language, LanguageChoice};
use crate::presenter::CatalogsViewState;

/// Help text printed for [`Command::Help`].
pub const HELP: &str = "commands: all | others | <language code> | reload | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Choose(LanguageChoice),
    Reload,
    Help,
    Quit,
}

/// Parses one input line against the current state.
///
/// `others` resolves to the grouped choice currently offered by the selector,
/// so it filters on exactly the languages shown under it. Blank lines yield
/// `None`.
///
/// # Example
///
/// ```rust
/// use catalogs::input::{parse_command, Command};
/// use catalogs::presenter::CatalogsViewState;
/// use catalogs::{Language, LanguageChoice};
///
/// let state = CatalogsViewState::default();
/// assert_eq!(
///     parse_command(" fr ", &state),
///     Some(Command::Choose(LanguageChoice::One(Language::new("fr"))))
/// );
/// assert_eq!(parse_command("", &state), None);
/// ```
#[must_use]
pub fn parse_command(line: &str, state: &CatalogsViewState) -> Option<Command> {
    let word = line.trim();
    if word.is_empty() {
        return None;
    }

    let command = match word.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "reload" | "r" => Command::Reload,
        "help" | "?" => Command::Help,
        "all" => Command::Choose(LanguageChoice::All),
        "others" => Command::Choose(offered_others(state)),
        _ => Command::Choose(LanguageChoice::One(Language::new(word))),
    };
    Some(command)
}

fn offered_others(state: &CatalogsViewState) -> LanguageChoice {
    state
        .language_choices()
        .and_then(|selector| {
            selector
                .choices
                .iter()
                .find(|choice| matches!(choice, LanguageChoice::Others(_)))
                .cloned()
        })
        .unwrap_or_else(|| LanguageChoice::Others(Vec::new()))
}
