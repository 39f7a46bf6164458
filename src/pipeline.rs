//! Format detection and multi-input transcoding runs

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::api::{Emitter, Error, Extraction, Result, SkippedSuite, VectorRecord, VectorSource};
use crate::config::TranscodeConfig;
use crate::emit::StaticDataEmitter;
use crate::params::aes::{KEY_HEADER, PLAINTEXT_HEADER};
use crate::parse::{LineFormatParser, LineMode, SuiteExtractor};

/// Input dialect of one source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Decide per source with [`detect_format`]
    #[default]
    Auto,
    /// `key = ...` header, one `plaintext ciphertext` pair per line
    VarPlaintext,
    /// `plaintext = ...` header, three lines per record
    VarKey,
    /// C source with `suite("...")` blocks
    Suite,
}

impl InputFormat {
    /// Replace [`InputFormat::Auto`] with the detected format of `text`
    pub fn resolve(self, text: &str) -> InputFormat {
        match self {
            InputFormat::Auto => detect_format(text),
            concrete => concrete,
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputFormat::Auto => "auto",
            InputFormat::VarPlaintext => "var-pt",
            InputFormat::VarKey => "var-key",
            InputFormat::Suite => "suite",
        })
    }
}

/// Guess the dialect from the first significant line
///
/// `key = ...` and `plaintext = ...` select the line formats; anything else
/// is treated as a suite corpus.
pub fn detect_format(text: &str) -> InputFormat {
    let first = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with("//"));

    let Some((name, _)) = first.and_then(|line| line.split_once('=')) else {
        return InputFormat::Suite;
    };
    let name = name.trim();
    if name.eq_ignore_ascii_case(KEY_HEADER) {
        InputFormat::VarPlaintext
    } else if name.eq_ignore_ascii_case(PLAINTEXT_HEADER) {
        InputFormat::VarKey
    } else {
        InputFormat::Suite
    }
}

/// Read a whole source file
pub fn load_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::resource(path, e))
}

/// What one source contributed to a run
#[derive(Debug, Clone)]
pub struct InputReport {
    pub path: PathBuf,
    pub format: InputFormat,
    pub count: usize,
    pub skipped: Vec<SkippedSuite>,
}

/// Whether a run produced anything worth emitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Produced(usize),
    Empty,
}

/// Records of a run, concatenated in input order, with per-input counts
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub inputs: Vec<InputReport>,
    records: Vec<VectorRecord>,
}

impl RunReport {
    pub fn records(&self) -> &[VectorRecord] {
        &self.records
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Skipped suites across all inputs
    pub fn skipped(&self) -> impl Iterator<Item = &SkippedSuite> {
        self.inputs.iter().flat_map(|input| input.skipped.iter())
    }

    pub fn outcome(&self) -> RunOutcome {
        match self.total() {
            0 => RunOutcome::Empty,
            n => RunOutcome::Produced(n),
        }
    }

    fn absorb(&mut self, path: PathBuf, format: InputFormat, extraction: Extraction) {
        let count = extraction.count();
        let skipped = extraction.skipped().to_vec();
        self.records.extend(extraction.into_records());
        self.inputs.push(InputReport {
            path,
            format,
            count,
            skipped,
        });
    }
}

const VAR_PLAINTEXT: LineFormatParser = LineFormatParser::new(LineMode::VarPlaintext);
const VAR_KEY: LineFormatParser = LineFormatParser::new(LineMode::VarKey);

/// Parses sources and renders their records with one configuration
#[derive(Debug, Clone)]
pub struct Pipeline {
    extractor: SuiteExtractor,
    emitter: StaticDataEmitter,
}

impl Pipeline {
    pub fn new(config: TranscodeConfig) -> Result<Self> {
        Ok(Self {
            extractor: config.extractor()?,
            emitter: config.emitter()?,
        })
    }

    pub fn emitter(&self) -> &StaticDataEmitter {
        &self.emitter
    }

    fn source(&self, format: InputFormat) -> &dyn VectorSource {
        match format {
            InputFormat::VarPlaintext => &VAR_PLAINTEXT,
            InputFormat::VarKey => &VAR_KEY,
            InputFormat::Suite | InputFormat::Auto => &self.extractor,
        }
    }

    /// Extract from in-memory text, returning the format actually used
    pub fn extract(&self, text: &str, format: InputFormat) -> Result<(InputFormat, Extraction)> {
        let format = format.resolve(text);
        let source = self.source(format);
        debug!(dialect = source.dialect(), "selected input dialect");
        Ok((format, source.extract(text)?))
    }

    /// Load and parse every source in order
    ///
    /// The first unreadable or malformed source aborts the run.
    pub fn run<P: AsRef<Path>>(&self, sources: &[P], format: InputFormat) -> Result<RunReport> {
        let mut report = RunReport::default();
        for path in sources {
            let path = path.as_ref();
            let text = load_source(path)?;
            let (format, extraction) = self.extract(&text, format)?;
            info!(
                path = %path.display(),
                %format,
                records = extraction.count(),
                skipped = extraction.skipped().len(),
                "processed input"
            );
            report.absorb(path.to_path_buf(), format, extraction);
        }
        Ok(report)
    }

    pub fn render(&self, report: &RunReport) -> Result<String> {
        self.emitter.emit(report.records())
    }

    /// Render and write the header to `dest`
    pub fn write(&self, report: &RunReport, dest: &Path) -> Result<()> {
        let text = self.render(report)?;
        fs::write(dest, text).map_err(|e| Error::resource(dest, e))?;
        info!(dest = %dest.display(), records = report.total(), "wrote header");
        Ok(())
    }
}
