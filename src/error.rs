use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(modgraph::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum ModgraphError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(modgraph::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("IO error")]
    #[diagnostic(
        code(modgraph::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(modgraph::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Project '{referenced_by}' depends on unknown project '{path}'")]
    #[diagnostic(
        code(modgraph::unknown_project),
        help("Dependency targets must be project paths such as ':core' or ':libs:ui'")
    )]
    UnknownProject { path: String, referenced_by: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(modgraph::graph_error),
        help("This may be an internal error with graph processing")
    )]
    GraphError { message: String },

    #[error("Failed to run '{program}'")]
    #[diagnostic(
        code(modgraph::render_command_failed),
        help("Install Graphviz or pass --dot-program with the path to the dot binary")
    )]
    RenderCommandFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
