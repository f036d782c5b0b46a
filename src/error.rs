use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tessera operations
#[derive(Error, Diagnostic, Debug)]
pub enum TessError {
    #[error("IO error: {0}")]
    #[diagnostic(code(tessera::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tessera::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tessera::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(tessera::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid polygon: {vertices} vertices")]
    #[diagnostic(
        code(tessera::invalid_polygon),
        help("Polygons need at least 3 vertices")
    )]
    InvalidPolygon { vertices: usize },

    #[error("Invalid decision value: {value}")]
    #[diagnostic(
        code(tessera::invalid_decision),
        help("Decision functions must return a value in [0, 1]")
    )]
    InvalidDecisionValue { value: f64 },

    #[error("Tessellation stack is empty")]
    #[diagnostic(
        code(tessera::empty_stack),
        help("Add at least one pattern to the stack")
    )]
    EmptyPatternStack,

    #[error("Stack index {index} out of range (stack has {len} patterns)")]
    #[diagnostic(code(tessera::stack_index))]
    StackIndex { index: usize, len: usize },

    #[error("Sampler is not ready")]
    #[diagnostic(
        code(tessera::sampler_unavailable),
        help("Load a non-empty image before building")
    )]
    SamplerUnavailable,

    #[error("Build error: {message}")]
    #[diagnostic(code(tessera::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, TessError>;
