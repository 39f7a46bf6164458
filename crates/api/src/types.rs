//! The uniform record model shared by every parser and emitter
//!
//! Both input dialects produce [`VectorRecord`]s. A record can only be built
//! through its constructors, which check the invariants every downstream
//! consumer relies on (equal plaintext and ciphertext length, presence of
//! every field the originating parser requires).

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FormatError, PartialFieldError, Result};

/// Names of the fields a record can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    SuiteName,
    Key,
    Nonce,
    Counter,
    Plaintext,
    Ciphertext,
}

impl Field {
    /// The five fields a suite block must yield before it becomes a record
    pub const SUITE_REQUIRED: [Field; 5] = [
        Field::Key,
        Field::Nonce,
        Field::Counter,
        Field::Plaintext,
        Field::Ciphertext,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Field::SuiteName => "suite_name",
            Field::Key => "key",
            Field::Nonce => "nonce",
            Field::Counter => "counter",
            Field::Plaintext => "plaintext",
            Field::Ciphertext => "ciphertext",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape of a declared value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum FieldKind {
    /// A byte array whose length is fixed by the algorithm
    FixedBytes { width: usize },
    /// A byte array of any length
    VarBytes,
    /// A single unsigned 32-bit integer
    #[cfg_attr(feature = "serde", serde(rename = "uint32"))]
    UInt32,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::FixedBytes { width } => write!(f, "uint8_t[{width}]"),
            FieldKind::VarBytes => f.write_str("uint8_t[]"),
            FieldKind::UInt32 => f.write_str("uint32_t"),
        }
    }
}

/// One test case, in the form every emitter consumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorRecord {
    key: Vec<u8>,
    plaintext: Vec<u8>,
    ciphertext: Vec<u8>,
    nonce: Option<Vec<u8>>,
    counter: Option<u32>,
    suite_name: Option<String>,
}

impl VectorRecord {
    /// Build a record from a line-format file (key, plaintext, ciphertext only)
    pub fn block(key: Vec<u8>, plaintext: Vec<u8>, ciphertext: Vec<u8>) -> Result<Self> {
        check_lengths(&plaintext, &ciphertext)?;
        Ok(Self {
            key,
            plaintext,
            ciphertext,
            nonce: None,
            counter: None,
            suite_name: None,
        })
    }

    /// Build a record from a suite block
    pub fn suite(
        suite_name: impl Into<String>,
        key: Vec<u8>,
        nonce: Vec<u8>,
        counter: u32,
        plaintext: Vec<u8>,
        ciphertext: Vec<u8>,
    ) -> Result<Self> {
        check_lengths(&plaintext, &ciphertext)?;
        Ok(Self {
            key,
            plaintext,
            ciphertext,
            nonce: Some(nonce),
            counter: Some(counter),
            suite_name: Some(suite_name.into()),
        })
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn plaintext(&self) -> &[u8] {
        &self.plaintext
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    pub fn nonce(&self) -> Option<&[u8]> {
        self.nonce.as_deref()
    }

    pub fn counter(&self) -> Option<u32> {
        self.counter
    }

    pub fn suite_name(&self) -> Option<&str> {
        self.suite_name.as_deref()
    }

    /// Byte contents of a byte-valued field, if the record carries it
    pub fn bytes(&self, field: Field) -> Option<&[u8]> {
        match field {
            Field::Key => Some(&self.key),
            Field::Plaintext => Some(&self.plaintext),
            Field::Ciphertext => Some(&self.ciphertext),
            Field::Nonce => self.nonce(),
            Field::Counter | Field::SuiteName => None,
        }
    }

    /// Whether the record carries `field`
    pub fn has(&self, field: Field) -> bool {
        match field {
            Field::Key | Field::Plaintext | Field::Ciphertext => true,
            Field::Nonce => self.nonce.is_some(),
            Field::Counter => self.counter.is_some(),
            Field::SuiteName => self.suite_name.is_some(),
        }
    }
}

fn check_lengths(plaintext: &[u8], ciphertext: &[u8]) -> Result<()> {
    if plaintext.len() != ciphertext.len() {
        return Err(FormatError::LengthMismatch {
            context: "ciphertext",
            expected: plaintext.len(),
            actual: ciphertext.len(),
        }
        .into());
    }
    Ok(())
}

/// A candidate suite block that did not yield a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSuite {
    pub name: String,
    pub failures: Vec<PartialFieldError>,
}

impl fmt::Display for SkippedSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for (i, failure) in self.failures.iter().enumerate() {
            f.write_str(if i == 0 { " (" } else { "; " })?;
            write!(f, "{failure}")?;
        }
        if !self.failures.is_empty() {
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// Result of one parser pass over one input.
///
/// The record count travels with the records instead of living in shared
/// state; it is diagnostic only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    records: Vec<VectorRecord>,
    count: usize,
    skipped: Vec<SkippedSuite>,
}

impl Extraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: VectorRecord) {
        self.records.push(record);
        self.count += 1;
    }

    pub fn skip(&mut self, skipped: SkippedSuite) {
        self.skipped.push(skipped);
    }

    /// Append another extraction, keeping input order
    pub fn extend(&mut self, other: Extraction) {
        self.count += other.count;
        self.records.extend(other.records);
        self.skipped.extend(other.skipped);
    }

    pub fn records(&self) -> &[VectorRecord] {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn skipped(&self) -> &[SkippedSuite] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<VectorRecord> {
        self.records
    }
}
