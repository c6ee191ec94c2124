//! 巴西葡萄牙语翻译 (pt-BR)

use super::keys::{
    ColumnTexts, CommonTexts, FormTexts, HelpActionTexts, HelpTexts, HintTexts, ModalTexts,
    StatusBarTexts, TableTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Consulta de CEP",
        language_name: "Português",
    },

    form: FormTexts {
        title: "Buscar endereço",
        country: "País",
        postal_code: "CEP",
        placeholder: "Digite o CEP",
        submit: "Buscar",
        busy: "Buscando...",
    },

    table: TableTexts {
        title: "Endereços",
        empty: "Nenhum endereço consultado ainda.",
        columns: ColumnTexts {
            street: "Logradouro",
            neighborhood: "Bairro",
            city: "Cidade",
            region: "UF",
            postal_code: "CEP",
            consulted: "Consultado",
        },
    },

    modal: ModalTexts {
        alert_title: "Atenção",
        alert_close: "Enter ou Esc para fechar",
        help_title: "Ajuda",
        help_close: "Esc para fechar a ajuda",
    },

    status_bar: StatusBarTexts {
        persisted: "salvo",
        sample: "exemplo",
        records: "endereços",
        added: "Endereço adicionado",
        removed: "Endereço removido",
        load_failed: "Não foi possível carregar a lista salva",
        settings_saved: "Preferências salvas",
        settings_not_saved: "Não foi possível salvar as preferências",
    },

    hints: HintTexts {
        submit: "Buscar",
        country: "País",
        switch_panel: "Alternar painel",
        move_up_down: "Mover",
        delete: "Excluir",
        help: "Ajuda",
        quit: "Sair",
    },

    help: HelpTexts {
        global: "Atalhos globais",
        form: "Formulário",
        table: "Lista de endereços",
        actions: HelpActionTexts {
            switch_panel: "Alternar painel",
            switch_field: "Alternar campo",
            toggle_language: "Alternar idioma",
            toggle_theme: "Alternar tema",
            help: "Mostrar ajuda",
            quit: "Sair",
            change_country: "Trocar país",
            submit: "Buscar endereço",
            clear_input: "Limpar campo",
            move_up_down: "Mover seleção",
            first_last: "Primeiro / último",
            delete: "Excluir endereço",
        },
    },
};
