//! ViaCEP API 类型定义

use serde::Deserialize;

/// `erro` 字段：旧版接口返回字符串 `"true"`，新版返回布尔值
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ViaCepErrorFlag {
    Bool(bool),
    Text(String),
}

impl ViaCepErrorFlag {
    pub fn is_set(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => s.eq_ignore_ascii_case("true"),
        }
    }
}

/// ViaCEP `/ws/{cep}/json/` 响应
///
/// Extra keys (`ibge`, `gia`, `siafi`, `estado`, ...) are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ViaCepResponse {
    pub cep: String,
    pub logradouro: String,
    pub complemento: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
    pub ddd: String,
    pub erro: Option<ViaCepErrorFlag>,
}

impl ViaCepResponse {
    pub fn is_error(&self) -> bool {
        self.erro.as_ref().is_some_and(ViaCepErrorFlag::is_set)
    }
}
