use thiserror::Error;

/// Error returned when attempting to convert a byte into a `Residue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid residue byte: {0}")]
pub struct InvalidResidue(pub u8);

/// Failure of a substitution score lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The scorer has no entry for this residue combination.
    #[error("No substitution score for pair ({a}, {b})")]
    UnknownPair { a: char, b: char },
}

/// Failure of a numeric aggregation step.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NumericError {
    /// The computation produced NaN.
    #[error("Computation produced NaN")]
    NotANumber,
    /// An input to the computation was not finite.
    #[error("Non-finite input: {0}")]
    NonFinite(f64),
}

/// Errors in optimizer configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Population must contain at least one candidate
    #[error("Population size must be greater than 0")]
    EmptyPopulation,
    /// A numeric parameter is outside its valid range
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    /// The substitution scorer is not symmetric
    #[error("Asymmetric substitution scorer: score({a}, {b}) = {ab} but score({b}, {a}) = {ba}")]
    AsymmetricScorer { a: char, b: char, ab: f64, ba: f64 },
    /// JSON (de)serialization failed
    #[error("Configuration JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

/// Errors that can occur while building an engine.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// A required parameter is missing
    #[error("Missing required parameter: {0}")]
    MissingRequired(&'static str),
    /// No input sequences were supplied
    #[error("At least one input sequence is required")]
    NoSequences,
    /// Configuration failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors while reading or writing sequence files.
#[derive(Debug, Error)]
pub enum FastaError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Parse error
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
    /// The file contained no records
    #[error("No sequences found in FASTA input")]
    Empty,
    /// Alignment rows and record names disagree in count
    #[error("Name count ({names}) does not match sequence count ({sequences})")]
    CountMismatch { names: usize, sequences: usize },
}
