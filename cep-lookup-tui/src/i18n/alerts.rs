//! 失败提示文本（固定 pt-BR）

use cep_lookup_core::FailureKind;

pub const INVALID_POSTAL_CODE: &str = "Por favor, insira um CEP válido no formato XXXXX-XXX.";
pub const ADDRESS_NOT_FOUND: &str = "CEP inválido.";
pub const LOOKUP_FAILED: &str = "Ocorreu um erro ao obter o endereço.";
pub const SAVE_FAILED: &str = "Não foi possível salvar a lista de endereços.";

/// Alert text shown for a failed operation.
pub fn for_failure(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::Validation => INVALID_POSTAL_CODE,
        FailureKind::NotFound => ADDRESS_NOT_FOUND,
        FailureKind::Transport => LOOKUP_FAILED,
        FailureKind::Storage => SAVE_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_its_own_text() {
        let texts = [
            for_failure(FailureKind::Validation),
            for_failure(FailureKind::NotFound),
            for_failure(FailureKind::Transport),
            for_failure(FailureKind::Storage),
        ];
        assert_eq!(texts[0], "Por favor, insira um CEP válido no formato XXXXX-XXX.");
        assert_eq!(texts[1], "CEP inválido.");
        assert_eq!(texts[2], "Ocorreu um erro ao obter o endereço.");
        assert_eq!(texts[3], "Não foi possível salvar a lista de endereços.");
    }
}
