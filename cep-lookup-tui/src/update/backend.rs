//! 后台结果处理

use cep_lookup_core::FailureKind;

use crate::i18n::{alerts, t};
use crate::message::BackendMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: BackendMessage) {
    match msg {
        BackendMessage::LookupFinished { outcome, records } => {
            app.form.busy = false;
            app.addresses.set_records(records);
            match outcome {
                Ok(record) => {
                    app.addresses.select_first();
                    app.set_status(format!(
                        "{}: {}, {}",
                        t().status_bar.added,
                        record.street,
                        record.postal_code
                    ));
                }
                Err(kind) => app.modal.alert(alerts::for_failure(kind)),
            }
        }

        BackendMessage::DeleteFinished { outcome, records } => {
            app.addresses.set_records(records);
            match outcome {
                Ok(true) => app.set_status(t().status_bar.removed),
                Ok(false) => {}
                Err(kind) => app.modal.alert(alerts::for_failure(kind)),
            }
        }

        BackendMessage::SettingsSaved { ok } => {
            let texts = &t().status_bar;
            app.set_status(if ok {
                texts.settings_saved
            } else {
                texts.settings_not_saved
            });
        }
    }
}

/// Alert for a failed startup load; a failed load leaves the list empty.
pub fn startup_failure(app: &mut App, kind: FailureKind) {
    log::warn!("Address list not loaded ({kind:?})");
    app.set_status(t().status_bar.load_failed);
}
