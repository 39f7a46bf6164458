//! C header emission
//!
//! Output for the ChaCha20 schema and one record:
//!
//! ```c
//! typedef struct {
//!     const char *suite_name;
//!     const uint8_t key[32];
//!     const uint8_t nonce[12];
//!     const uint32_t count;
//!     const uint8_t *plaintext;
//!     const size_t plaintext_len;
//!     const uint8_t *expected_ciphertext;
//!     const size_t ciphertext_len;
//! } ChaCha20TestVector;
//!
//! static const uint8_t plaintext_0[] = {0x41, 0x6e};
//! static const uint8_t ciphertext_0[] = {0xa3, 0xfb};
//!
//! static const ChaCha20TestVector chacha20_test_vectors[] = {
//!     {
//!         "Cipher Test Vector #2",
//!         {0x00, ...},
//!         {0x00, ...},
//!         1,
//!         plaintext_0, sizeof(plaintext_0),
//!         ciphertext_0, sizeof(ciphertext_0)
//!     },
//! };
//!
//! static const size_t num_chacha20_test_vectors = 1;
//! ```
//!
//! ISO C has no zero-length arrays. An empty byte field is backed by a
//! `{0}` placeholder array and its length member is written as a literal
//! `0`. An empty record set still renders `[] = {\n};` for the main array,
//! which strict compilers reject; the `katgen` binary refuses to write one.

use katgen_api::{Emitter, FormatError, Result, VectorRecord};
use katgen_common::encode_literal;
use tracing::debug;

use crate::schema::{Schema, SchemaField};

const BANNER: &str = "/* This file is automatically generated. Do not edit. */";

/// Serializes records into a static-data C header
#[derive(Debug, Clone)]
pub struct StaticDataEmitter {
    schema: Schema,
}

impl StaticDataEmitter {
    pub fn new(schema: Schema) -> Result<Self> {
        schema.validate()?;
        Ok(Self { schema })
    }

    pub fn chacha20() -> Self {
        Self {
            schema: Schema::chacha20(),
        }
    }

    pub fn aes256() -> Self {
        Self {
            schema: Schema::aes256(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Every record must carry every schema field, at the declared width
    fn check(&self, records: &[VectorRecord]) -> Result<()> {
        for (index, record) in records.iter().enumerate() {
            for field in &self.schema.fields {
                let source = field.source();
                if !record.has(source) {
                    return Err(FormatError::MissingRecordField {
                        index,
                        field: source,
                    }
                    .into());
                }
                if let SchemaField::FixedBytes { width, .. } = field {
                    let actual = record.bytes(source).map_or(0, <[u8]>::len);
                    if actual != *width {
                        return Err(FormatError::WidthMismatch {
                            index,
                            field: source,
                            expected: *width,
                            actual,
                        }
                        .into());
                    }
                }
            }
        }
        Ok(())
    }

    fn struct_declaration(&self, lines: &mut Vec<String>) {
        lines.push("typedef struct {".into());
        for field in &self.schema.fields {
            match field {
                SchemaField::Label { member, .. } => {
                    lines.push(format!("    const char *{member};"));
                }
                SchemaField::FixedBytes { member, width, .. } => {
                    lines.push(format!("    const uint8_t {member}[{width}];"));
                }
                SchemaField::UInt32 { member, .. } => {
                    lines.push(format!("    const uint32_t {member};"));
                }
                SchemaField::VarBytes {
                    member, len_member, ..
                } => {
                    lines.push(format!("    const uint8_t *{member};"));
                    lines.push(format!("    const size_t {len_member};"));
                }
            }
        }
        lines.push(format!("}} {};\n", self.schema.struct_name));
    }

    fn auxiliary_arrays(&self, records: &[VectorRecord], lines: &mut Vec<String>) {
        for (index, record) in records.iter().enumerate() {
            for field in &self.schema.fields {
                if let SchemaField::VarBytes {
                    source, aux_prefix, ..
                } = field
                {
                    let bytes = record.bytes(*source).unwrap_or_default();
                    let body = if bytes.is_empty() {
                        "0".to_string()
                    } else {
                        encode_literal(bytes)
                    };
                    lines.push(format!(
                        "static const uint8_t {aux_prefix}_{index}[] = {{{body}}};"
                    ));
                }
            }
        }
    }

    /// Members of one struct literal, in schema order
    fn initializer(&self, index: usize, record: &VectorRecord) -> Vec<String> {
        self.schema
            .fields
            .iter()
            .map(|field| match field {
                SchemaField::Label { .. } => {
                    format!("\"{}\"", record.suite_name().unwrap_or_default())
                }
                SchemaField::FixedBytes { source, .. } => {
                    format!("{{{}}}", encode_literal(record.bytes(*source).unwrap_or_default()))
                }
                SchemaField::UInt32 { .. } => record.counter().unwrap_or_default().to_string(),
                SchemaField::VarBytes {
                    source, aux_prefix, ..
                } => match record.bytes(*source) {
                    Some(bytes) if !bytes.is_empty() => {
                        format!("{aux_prefix}_{index}, sizeof({aux_prefix}_{index})")
                    }
                    _ => format!("{aux_prefix}_{index}, 0"),
                },
            })
            .collect()
    }
}

impl Emitter for StaticDataEmitter {
    fn emit(&self, records: &[VectorRecord]) -> Result<String> {
        self.check(records)?;
        let schema = &self.schema;

        let mut lines: Vec<String> = vec![
            BANNER.into(),
            format!("/* {} */\n", schema.title),
            format!("#ifndef {}", schema.guard),
            format!("#define {}", schema.guard),
            "\n#include <stdint.h>".into(),
            "#include <stddef.h>\n".into(),
        ];

        self.struct_declaration(&mut lines);
        self.auxiliary_arrays(records, &mut lines);

        lines.push(format!(
            "\nstatic const {} {}[] = {{",
            schema.struct_name, schema.array_name
        ));
        for (index, record) in records.iter().enumerate() {
            lines.push("    {".into());
            lines.push(format!("        {}", self.initializer(index, record).join(",\n        ")));
            lines.push("    },".into());
        }
        lines.push("};".into());

        lines.push(format!(
            "\nstatic const size_t {} = {};\n",
            schema.count_name,
            records.len()
        ));
        lines.push(format!("#endif // {}", schema.guard));

        debug!(
            records = records.len(),
            schema = %schema.struct_name,
            "emitted static header"
        );

        let mut text = lines.join("\n");
        text.push('\n');
        Ok(text)
    }
}
