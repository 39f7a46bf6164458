//! Output schemas for generated headers

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use katgen_api::{Error, Field, Result};
use katgen_params::{aes, chacha20};

/// One member of the generated struct
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SchemaField {
    /// `const char *member;` holding the suite name
    Label { source: Field, member: String },
    /// `const uint8_t member[width];`
    FixedBytes {
        source: Field,
        member: String,
        width: usize,
    },
    /// `const uint32_t member;`
    #[cfg_attr(feature = "serde", serde(rename = "uint32"))]
    UInt32 { source: Field, member: String },
    /// `const uint8_t *member; const size_t len_member;`, backed by
    /// `aux_prefix_<index>[]` arrays
    VarBytes {
        source: Field,
        member: String,
        len_member: String,
        aux_prefix: String,
    },
}

impl SchemaField {
    pub fn source(&self) -> Field {
        match self {
            SchemaField::Label { source, .. }
            | SchemaField::FixedBytes { source, .. }
            | SchemaField::UInt32 { source, .. }
            | SchemaField::VarBytes { source, .. } => *source,
        }
    }

    pub fn is_fixed_size(&self) -> bool {
        !matches!(self, SchemaField::VarBytes { .. })
    }

    fn fixed_bytes(source: Field, member: &str, width: usize) -> Self {
        SchemaField::FixedBytes {
            source,
            member: member.into(),
            width,
        }
    }

    fn var_bytes(source: Field, member: &str, len_member: &str, aux_prefix: &str) -> Self {
        SchemaField::VarBytes {
            source,
            member: member.into(),
            len_member: len_member.into(),
            aux_prefix: aux_prefix.into(),
        }
    }

    /// C identifiers this field introduces
    fn identifiers(&self) -> Vec<&str> {
        match self {
            SchemaField::Label { member, .. }
            | SchemaField::FixedBytes { member, .. }
            | SchemaField::UInt32 { member, .. } => vec![member.as_str()],
            SchemaField::VarBytes {
                member, len_member, ..
            } => vec![member.as_str(), len_member.as_str()],
        }
    }
}

/// Layout and names of a generated header
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schema {
    /// Second line of the header comment
    pub title: String,
    pub guard: String,
    pub struct_name: String,
    pub array_name: String,
    pub count_name: String,
    pub fields: Vec<SchemaField>,
}

impl Schema {
    /// Layout consumed by the ChaCha20 cipher harness
    pub fn chacha20() -> Self {
        Self {
            title: chacha20::HEADER_TITLE.into(),
            guard: chacha20::INCLUDE_GUARD.into(),
            struct_name: chacha20::STRUCT_NAME.into(),
            array_name: chacha20::ARRAY_NAME.into(),
            count_name: chacha20::COUNT_NAME.into(),
            fields: vec![
                SchemaField::Label {
                    source: Field::SuiteName,
                    member: "suite_name".into(),
                },
                SchemaField::fixed_bytes(Field::Key, "key", chacha20::CHACHA20_KEY_SIZE),
                SchemaField::fixed_bytes(Field::Nonce, "nonce", chacha20::CHACHA20_NONCE_SIZE),
                SchemaField::UInt32 {
                    source: Field::Counter,
                    member: "count".into(),
                },
                SchemaField::var_bytes(Field::Plaintext, "plaintext", "plaintext_len", "plaintext"),
                SchemaField::var_bytes(
                    Field::Ciphertext,
                    "expected_ciphertext",
                    "ciphertext_len",
                    "ciphertext",
                ),
            ],
        }
    }

    /// Layout for AES-256 line-format vectors
    pub fn aes256() -> Self {
        Self {
            title: aes::HEADER_TITLE.into(),
            guard: aes::INCLUDE_GUARD.into(),
            struct_name: aes::STRUCT_NAME.into(),
            array_name: aes::ARRAY_NAME.into(),
            count_name: aes::COUNT_NAME.into(),
            fields: vec![
                SchemaField::fixed_bytes(Field::Key, "key", aes::AES256_KEY_SIZE),
                SchemaField::var_bytes(Field::Plaintext, "plaintext", "plaintext_len", "plaintext"),
                SchemaField::var_bytes(
                    Field::Ciphertext,
                    "expected_ciphertext",
                    "ciphertext_len",
                    "ciphertext",
                ),
            ],
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Result<Self> {
        match name {
            "chacha20" => Ok(Self::chacha20()),
            "aes256" => Ok(Self::aes256()),
            other => Err(Error::config(format!("unknown schema preset `{other}`"))),
        }
    }

    /// Check ordering, naming and field/source compatibility
    pub fn validate(&self) -> Result<()> {
        for (what, name) in [
            ("include guard", &self.guard),
            ("struct name", &self.struct_name),
            ("array name", &self.array_name),
            ("count name", &self.count_name),
        ] {
            if !is_c_identifier(name) {
                return Err(Error::config(format!("{what} `{name}` is not a C identifier")));
            }
        }
        if self.fields.is_empty() {
            return Err(Error::config("schema has no fields"));
        }

        if let Some(pos) = self.fields.iter().position(|f| !f.is_fixed_size()) {
            if let Some(late) = self.fields[pos..].iter().find(|f| f.is_fixed_size()) {
                return Err(Error::config(format!(
                    "fixed-size field {} follows a variable-length field",
                    late.source()
                )));
            }
        }

        let mut members = HashSet::new();
        let mut prefixes = HashSet::new();
        for field in &self.fields {
            let fits = match field {
                SchemaField::Label { source, .. } => *source == Field::SuiteName,
                SchemaField::UInt32 { source, .. } => *source == Field::Counter,
                SchemaField::FixedBytes { source, .. } | SchemaField::VarBytes { source, .. } => {
                    !matches!(source, Field::SuiteName | Field::Counter)
                }
            };
            if !fits {
                return Err(Error::config(format!(
                    "{} cannot be rendered as this member kind",
                    field.source()
                )));
            }
            for ident in field.identifiers() {
                if !is_c_identifier(ident) || !members.insert(ident) {
                    return Err(Error::config(format!("bad or duplicate member `{ident}`")));
                }
            }
            if let SchemaField::VarBytes { aux_prefix, .. } = field {
                if !is_c_identifier(aux_prefix) || !prefixes.insert(aux_prefix.as_str()) {
                    return Err(Error::config(format!("bad or duplicate array prefix `{aux_prefix}`")));
                }
            }
        }
        Ok(())
    }
}

fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
