//! Update 层
//!
//! 根据消息修改 Model，并在需要 I/O 时返回 [`Command`]。
//! 本层不访问终端、文件或网络，因此可以直接做单元测试。

mod backend;
mod form;
mod modal;
mod settings;
mod table;

pub use backend::startup_failure;

use crate::message::{AppMessage, Command};
use crate::model::{App, Modal};

/// 处理消息，更新应用状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    // 下一次按键清除状态消息，状态栏恢复快捷键提示
    if msg.is_user_input() {
        app.clear_status();
    }

    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
            None
        }

        AppMessage::ToggleLanguage => settings::toggle_language(app),
        AppMessage::ToggleTheme => settings::toggle_theme(app),

        AppMessage::Form(form_msg) => form::update(app, form_msg),
        AppMessage::Table(table_msg) => table::update(app, table_msg),

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
            None
        }

        AppMessage::Backend(backend_msg) => {
            backend::update(app, backend_msg);
            None
        }

        AppMessage::ShowHelp => {
            app.modal.show(Modal::Help);
            None
        }

        AppMessage::Noop => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{BackendMessage, FormMessage, TableMessage};
    use crate::model::FocusPanel;

    #[test]
    fn quit_and_focus() {
        let mut app = App::default();
        assert!(update(&mut app, AppMessage::ToggleFocus).is_none());
        assert_eq!(app.focus, FocusPanel::Table);

        assert!(update(&mut app, AppMessage::Quit).is_none());
        assert!(app.should_quit);
    }

    #[test]
    fn help_opens_modal() {
        let mut app = App::default();
        update(&mut app, AppMessage::ShowHelp);
        assert_eq!(app.modal.active, Some(Modal::Help));
    }

    #[test]
    fn key_press_clears_status() {
        let mut app = App::default();
        app.set_status("Endereço adicionado");

        update(&mut app, AppMessage::Noop);
        assert!(app.status_message.is_some());

        update(&mut app, AppMessage::Table(TableMessage::SelectNext));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn backend_result_keeps_new_status() {
        let mut app = App::default();
        update(
            &mut app,
            AppMessage::Backend(BackendMessage::DeleteFinished {
                outcome: Ok(true),
                records: Vec::new(),
            }),
        );
        assert!(app.status_message.is_some());

        update(&mut app, AppMessage::Form(FormMessage::Input('0')));
        assert!(app.status_message.is_none());
    }
}
