//! Public types shared by every provider.

use serde::{Deserialize, Serialize};

// ============ Country ============

/// Country whose postal-code service answers a lookup.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    /// Brazil (CEP, `NNNNN-NNN`).
    #[default]
    Br,
    /// United States (ZIP code).
    Us,
}

impl Country {
    /// All selectable countries, in selector order.
    pub fn all() -> &'static [Country] {
        &[Country::Br, Country::Us]
    }

    /// Two-letter lowercase code (`br`, `us`).
    pub fn code(self) -> &'static str {
        match self {
            Country::Br => "br",
            Country::Us => "us",
        }
    }

    /// Parses a country code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Country> {
        match code.trim().to_ascii_lowercase().as_str() {
            "br" => Some(Country::Br),
            "us" => Some(Country::Us),
            _ => None,
        }
    }

    /// Name shown in the country selector.
    pub fn display_name(self) -> &'static str {
        match self {
            Country::Br => "Brasil",
            Country::Us => "Estados Unidos",
        }
    }

    /// Next country in selector order (wraps around).
    #[must_use]
    pub fn next(self) -> Country {
        match self {
            Country::Br => Country::Us,
            Country::Us => Country::Br,
        }
    }

    /// Previous country in selector order (wraps around).
    #[must_use]
    pub fn prev(self) -> Country {
        // 只有两个选项时与 next 相同
        self.next()
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// ============ Address Types ============

/// A field of [`ProviderAddress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    /// Street (`logradouro`).
    Street,
    /// Neighborhood (`bairro`).
    Neighborhood,
    /// City (`localidade`).
    Locality,
    /// State code (`uf`).
    Region,
    /// Postal code (`cep`).
    PostalCode,
    /// Complement / unit (`complemento`).
    Complement,
    /// Telephone area code (`ddd`).
    AreaCode,
}

impl AddressField {
    /// Machine-readable key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Street => "street",
            Self::Neighborhood => "neighborhood",
            Self::Locality => "locality",
            Self::Region => "region",
            Self::PostalCode => "postalCode",
            Self::Complement => "complement",
            Self::AreaCode => "areaCode",
        }
    }
}

/// Structured address returned by a successful lookup.
///
/// Fields the service does not know are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAddress {
    pub street: String,
    pub neighborhood: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub complement: String,
    pub area_code: String,
}

impl ProviderAddress {
    /// Returns the value of a single field.
    pub fn field(&self, field: AddressField) -> &str {
        match field {
            AddressField::Street => &self.street,
            AddressField::Neighborhood => &self.neighborhood,
            AddressField::Locality => &self.locality,
            AddressField::Region => &self.region,
            AddressField::PostalCode => &self.postal_code,
            AddressField::Complement => &self.complement,
            AddressField::AreaCode => &self.area_code,
        }
    }

    /// Fields from `required` that are empty (after trimming whitespace).
    pub fn missing_fields(&self, required: &[AddressField]) -> Vec<AddressField> {
        required
            .iter()
            .copied()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }
}

// ============ Metadata ============

/// Static description of a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    /// Provider identifier (`viacep`, `zippopotam`).
    pub id: String,
    /// Human-readable provider name.
    pub name: String,
    /// Short description of the provider.
    pub description: String,
    /// Country the provider answers for.
    pub country: Country,
    /// Fields that must be filled for a response to count as a match.
    pub required_fields: Vec<AddressField>,
    /// Example of the accepted postal code format.
    pub postal_code_example: String,
}
