//! 查询表单消息处理

use cep_lookup_core::utils::validation::validate_postal_code;

use crate::i18n::alerts;
use crate::message::{Command, FormMessage};
use crate::model::App;

pub fn update(app: &mut App, msg: FormMessage) -> Option<Command> {
    let form = &mut app.form;
    match msg {
        FormMessage::Input(c) => form.push_char(c),
        FormMessage::Backspace => form.pop_char(),
        FormMessage::ClearInput => form.clear_input(),
        FormMessage::NextCountry => form.next_country(),
        FormMessage::PrevCountry => form.prev_country(),
        FormMessage::NextField => form.field = form.field.toggle(),
        FormMessage::Submit => return submit(app),
    }
    None
}

/// Validates the field and, when it passes, marks the form busy and asks the
/// backend for exactly one lookup.
fn submit(app: &mut App) -> Option<Command> {
    if !app.form.can_submit() {
        return None;
    }

    let policy = app.config.validation_policy;
    if let Err(e) = validate_postal_code(&app.form.postal_code, app.form.country, policy) {
        log::debug!("Rejected postal code {:?}: {e}", app.form.postal_code);
        app.modal.alert(alerts::for_failure(e.failure_kind()));
        return None;
    }

    app.form.busy = true;
    Some(Command::Lookup(app.form.request()))
}
