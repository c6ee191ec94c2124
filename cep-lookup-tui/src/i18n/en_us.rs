//! 英文翻译 (en-US)

use super::keys::{
    ColumnTexts, CommonTexts, FormTexts, HelpActionTexts, HelpTexts, HintTexts, ModalTexts,
    StatusBarTexts, TableTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "CEP Lookup",
        language_name: "English",
    },

    form: FormTexts {
        title: "Find address",
        country: "Country",
        postal_code: "Postal code",
        placeholder: "Type the postal code",
        submit: "Search",
        busy: "Searching...",
    },

    table: TableTexts {
        title: "Addresses",
        empty: "No address looked up yet.",
        columns: ColumnTexts {
            street: "Street",
            neighborhood: "Neighborhood",
            city: "City",
            region: "State",
            postal_code: "Postal code",
            consulted: "Looked up",
        },
    },

    modal: ModalTexts {
        alert_title: "Warning",
        alert_close: "Press Enter or Esc to close",
        help_title: "Help",
        help_close: "Press Esc to close the help",
    },

    status_bar: StatusBarTexts {
        persisted: "saved",
        sample: "sample",
        records: "addresses",
        added: "Address added",
        removed: "Address removed",
        load_failed: "Could not load the saved list",
        settings_saved: "Preferences saved",
        settings_not_saved: "Could not save the preferences",
    },

    hints: HintTexts {
        submit: "Search",
        country: "Country",
        switch_panel: "Switch panel",
        move_up_down: "Move",
        delete: "Delete",
        help: "Help",
        quit: "Quit",
    },

    help: HelpTexts {
        global: "Global shortcuts",
        form: "Form",
        table: "Address list",
        actions: HelpActionTexts {
            switch_panel: "Switch panel",
            switch_field: "Switch field",
            toggle_language: "Toggle language",
            toggle_theme: "Toggle theme",
            help: "Show help",
            quit: "Quit",
            change_country: "Change country",
            submit: "Look up address",
            clear_input: "Clear field",
            move_up_down: "Move selection",
            first_last: "First / last",
            delete: "Delete address",
        },
    },
};
