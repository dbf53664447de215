use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "oxont")]
/// Oxont command line toolkit to inspect OWL, DAML+OIL and RDFS ontologies
pub struct Args {
    /// Ontology language used to read the documents
    #[arg(long, global = true, value_enum, default_value_t = Language::Owl)]
    pub language: Language,
    /// Also accept resources that are not typed with the language vocabulary
    #[arg(long, global = true)]
    pub no_strict: bool,
    /// Document manager policy files, separated by ';'
    ///
    /// The first readable file is used.
    /// By default, "etc/ont-policy.rdf" and "ont-policy.rdf" are tried.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub policy: Option<String>,
    /// Format of the log events written to stderr
    ///
    /// The events to log are selected with the RUST_LOG environment variable.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the classes of an ontology
    Classes {
        #[command(flatten)]
        input: Input,
        /// Only list the named classes at the top of the class hierarchy
        #[arg(long)]
        roots: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the properties of an ontology with their domains and ranges
    Properties {
        #[command(flatten)]
        input: Input,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the individuals of an ontology with their classes
    Individuals {
        #[command(flatten)]
        input: Input,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Check that all the RDF lists of an ontology are well formed
    ///
    /// Fails if one of the lists is malformed.
    Lists {
        #[command(flatten)]
        input: Input,
    },
    /// Resolve and load the transitive closure of the ontology imports
    Imports {
        #[command(flatten)]
        input: Input,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print a SPARQL query results file as a table
    Results {
        /// File to read
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// The format of the file
        ///
        /// It can be an extension like "srj" or a MIME type like "application/sparql-results+json".
        ///
        /// By default, the format is guessed from the file extension.
        #[arg(long)]
        results_format: Option<String>,
    },
}

/// The ontology document to read.
#[derive(clap::Args)]
pub struct Input {
    /// Ontology document to read
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,
    /// The format of the document
    ///
    /// It can be an extension like "ttl" or a MIME type like "text/turtle".
    ///
    /// By default, the format is guessed from the file extension, ".owl" and ".daml" files being read as RDF/XML.
    #[arg(long)]
    pub input_format: Option<String>,
    /// Base IRI of the document
    #[arg(long, value_hint = ValueHint::Url)]
    pub base: Option<String>,
    /// Load the imported ontologies before running the command
    #[arg(long)]
    pub with_imports: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Language {
    Owl,
    OwlDl,
    OwlLite,
    Daml,
    Rdfs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
