//! Extraction of cipher test vectors from C test-suite sources
//!
//! A corpus contains blocks introduced by `suite("<name>")`. Candidate
//! blocks (name contains the include marker, not the exclude marker) are
//! searched for five declarations:
//!
//! ```c
//! suite("Cipher Test Vector #2") {
//!     key256_t key = { 0x00, ..., 0x01 };
//!     nonce96_t nonce = { 0x00, ..., 0x02 };
//!     uint32_t count = 1;
//!     uint8_t data[] = { 0x41, 0x6e, ... };
//!     uint8_t ciphertext[] = { 0xa3, 0xfb, ... };
//!     ...
//! }
//! ```
//!
//! Each field is looked up independently. A block missing any of them is
//! skipped and reported in [`Extraction::skipped`]; the scan carries on.

pub mod block;
pub mod decl;
pub mod lexer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use katgen_api::{
    Error, Extraction, Field, FieldFailure, FieldKind, PartialFieldError, Result, SkippedSuite,
    VectorRecord, VectorSource,
};
use katgen_params::chacha20;
use tracing::{debug, info, warn};

use self::block::{scan_blocks, SuiteBlock};
use self::decl::{declarations, Declaration, FieldValue};

/// How one required field is declared in the corpus
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldSpec {
    pub field: Field,
    pub type_name: String,
    pub ident: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(
        field: Field,
        type_name: impl Into<String>,
        ident: impl Into<String>,
        kind: FieldKind,
    ) -> Self {
        Self {
            field,
            type_name: type_name.into(),
            ident: ident.into(),
            kind,
        }
    }

    /// The declarations used by ChaCha20 `tests.c` corpora
    pub fn chacha20() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new(
                Field::Key,
                chacha20::KEY_TYPE,
                chacha20::KEY_IDENT,
                FieldKind::FixedBytes {
                    width: chacha20::CHACHA20_KEY_SIZE,
                },
            ),
            FieldSpec::new(
                Field::Nonce,
                chacha20::NONCE_TYPE,
                chacha20::NONCE_IDENT,
                FieldKind::FixedBytes {
                    width: chacha20::CHACHA20_NONCE_SIZE,
                },
            ),
            FieldSpec::new(
                Field::Counter,
                chacha20::COUNTER_TYPE,
                chacha20::COUNTER_IDENT,
                FieldKind::UInt32,
            ),
            FieldSpec::new(
                Field::Plaintext,
                chacha20::BYTE_TYPE,
                chacha20::PLAINTEXT_IDENT,
                FieldKind::VarBytes,
            ),
            FieldSpec::new(
                Field::Ciphertext,
                chacha20::BYTE_TYPE,
                chacha20::CIPHERTEXT_IDENT,
                FieldKind::VarBytes,
            ),
        ]
    }
}

/// Name filter deciding which blocks are candidates
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SuiteFilter {
    /// Substring the name must contain
    pub include: String,
    /// Substring the name must not contain; empty disables the check
    pub exclude: String,
}

impl Default for SuiteFilter {
    fn default() -> Self {
        Self {
            include: chacha20::SUITE_INCLUDE.into(),
            exclude: chacha20::SUITE_EXCLUDE.into(),
        }
    }
}

impl SuiteFilter {
    pub fn accepts(&self, name: &str) -> bool {
        name.contains(&self.include) && (self.exclude.is_empty() || !name.contains(&self.exclude))
    }
}

/// Everything the extractor needs to know about a corpus dialect
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SuiteConfig {
    /// Identifier of the block-opening call
    pub marker: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub filter: SuiteFilter,
    pub fields: Vec<FieldSpec>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            marker: chacha20::SUITE_MARKER.into(),
            filter: SuiteFilter::default(),
            fields: FieldSpec::chacha20(),
        }
    }
}

impl SuiteConfig {
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_filter(mut self, include: impl Into<String>, exclude: impl Into<String>) -> Self {
        self.filter = SuiteFilter {
            include: include.into(),
            exclude: exclude.into(),
        };
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldSpec>) -> Self {
        self.fields = fields;
        self
    }

    /// Check that every required field has exactly one spec of a fitting kind
    pub fn validate(&self) -> Result<()> {
        if self.marker.is_empty() {
            return Err(Error::config("suite marker must not be empty"));
        }
        for field in Field::SUITE_REQUIRED {
            let mut specs = self.fields.iter().filter(|s| s.field == field);
            let spec = specs
                .next()
                .ok_or_else(|| Error::config(format!("no declaration spec for {field}")))?;
            if specs.next().is_some() {
                return Err(Error::config(format!("duplicate declaration spec for {field}")));
            }
            let fits = match field {
                Field::Counter => spec.kind == FieldKind::UInt32,
                _ => spec.kind != FieldKind::UInt32,
            };
            if !fits {
                return Err(Error::config(format!("{field} cannot be declared as {}", spec.kind)));
            }
        }
        if let Some(extra) = self.fields.iter().find(|s| !Field::SUITE_REQUIRED.contains(&s.field)) {
            return Err(Error::config(format!("{} is not a suite field", extra.field)));
        }
        Ok(())
    }
}

/// Fields found so far in one block
#[derive(Debug, Default)]
struct PartialVector {
    key: Option<Vec<u8>>,
    nonce: Option<Vec<u8>>,
    counter: Option<u32>,
    plaintext: Option<Vec<u8>>,
    ciphertext: Option<Vec<u8>>,
}

impl PartialVector {
    fn set(&mut self, field: Field, value: FieldValue) -> std::result::Result<(), FieldFailure> {
        match (field, value) {
            (Field::Counter, FieldValue::UInt32(v)) => self.counter = Some(v),
            (Field::Key, FieldValue::Bytes(b)) => self.key = Some(b),
            (Field::Nonce, FieldValue::Bytes(b)) => self.nonce = Some(b),
            (Field::Plaintext, FieldValue::Bytes(b)) => self.plaintext = Some(b),
            (Field::Ciphertext, FieldValue::Bytes(b)) => self.ciphertext = Some(b),
            (field, value) => {
                let found = match value {
                    FieldValue::Bytes(_) => "a byte array",
                    FieldValue::UInt32(_) => "an integer",
                };
                return Err(FieldFailure::Malformed(format!("{field} cannot hold {found}")));
            }
        }
        Ok(())
    }

    /// Turn into a record if every field is present
    fn complete(self, name: &str) -> std::result::Result<VectorRecord, Vec<PartialFieldError>> {
        match self {
            PartialVector {
                key: Some(key),
                nonce: Some(nonce),
                counter: Some(counter),
                plaintext: Some(plaintext),
                ciphertext: Some(ciphertext),
            } => {
                let (expected, actual) = (plaintext.len(), ciphertext.len());
                VectorRecord::suite(name, key, nonce, counter, plaintext, ciphertext).map_err(|_| {
                    vec![PartialFieldError::new(
                        Field::Ciphertext,
                        FieldFailure::WidthMismatch { expected, actual },
                    )]
                })
            }
            partial => Err(partial.absent()),
        }
    }

    fn absent(&self) -> Vec<PartialFieldError> {
        let present = [
            self.key.is_some(),
            self.nonce.is_some(),
            self.counter.is_some(),
            self.plaintext.is_some(),
            self.ciphertext.is_some(),
        ];
        Field::SUITE_REQUIRED
            .into_iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(field, _)| PartialFieldError::missing(field))
            .collect()
    }
}

/// Extractor for suite-block corpora
#[derive(Debug, Clone, Default)]
pub struct SuiteExtractor {
    config: SuiteConfig,
}

impl SuiteExtractor {
    pub fn new(config: SuiteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    fn extract_block(
        &self,
        src: &str,
        block: &SuiteBlock<'_, '_>,
    ) -> std::result::Result<VectorRecord, Vec<PartialFieldError>> {
        let decls = declarations(src, block.tokens);
        let mut partial = PartialVector::default();
        let mut failures = Vec::new();

        for spec in &self.config.fields {
            let found = find_field(spec, &decls).and_then(|value| partial.set(spec.field, value));
            if let Err(reason) = found {
                failures.push(PartialFieldError::new(spec.field, reason));
            }
        }
        debug!(
            suite = block.name,
            found = self.config.fields.len() - failures.len(),
            "scanned suite declarations"
        );

        if !failures.is_empty() {
            return Err(failures);
        }
        partial.complete(block.name)
    }
}

/// First declaration matching `spec`, read as its kind
fn find_field(spec: &FieldSpec, decls: &[Declaration<'_>]) -> std::result::Result<FieldValue, FieldFailure> {
    let decl = decls
        .iter()
        .find(|d| spec.matches(d))
        .ok_or(FieldFailure::Missing)?;
    spec.classify(decl)
}

impl VectorSource for SuiteExtractor {
    fn dialect(&self) -> &'static str {
        "c-suite"
    }

    fn extract(&self, text: &str) -> Result<Extraction> {
        let tokens = lexer::tokenize(text)?;
        let mut out = Extraction::new();

        for block in scan_blocks(&tokens, &self.config.marker) {
            if !self.config.filter.accepts(block.name) {
                debug!(suite = block.name, "not a candidate suite");
                continue;
            }
            info!(suite = block.name, "processing suite");

            match self.extract_block(text, &block) {
                Ok(record) => out.push(record),
                Err(failures) => {
                    let skipped = SkippedSuite {
                        name: block.name.to_string(),
                        failures,
                    };
                    warn!(%skipped, "skipping incomplete suite");
                    out.skip(skipped);
                }
            }
        }

        info!(
            records = out.count(),
            skipped = out.skipped().len(),
            "suite extraction finished"
        );
        Ok(out)
    }
}
