//! 语言与主题切换

use crate::message::Command;
use crate::model::App;

pub fn toggle_language(app: &mut App) -> Option<Command> {
    app.config.language = app.config.language.toggle();
    Some(Command::SaveSettings(app.config.clone()))
}

pub fn toggle_theme(app: &mut App) -> Option<Command> {
    app.config.theme = app.config.theme.toggle();
    Some(Command::SaveSettings(app.config.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cep_lookup_app::config::{Language, ThemeMode};

    #[test]
    fn toggles_are_saved() {
        let mut app = App::default();

        let cmd = toggle_language(&mut app);
        assert_eq!(app.config.language, Language::EnUs);
        assert!(matches!(cmd, Some(Command::SaveSettings(ref c)) if c.language == Language::EnUs));

        let cmd = toggle_theme(&mut app);
        assert_eq!(app.config.theme, ThemeMode::Light);
        assert!(matches!(cmd, Some(Command::SaveSettings(ref c)) if c.theme == ThemeMode::Light));
    }
}
