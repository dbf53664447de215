use crate::facet::FacetKind;
use crate::profile::Role;
use oxiri::IriParseError;
use oxrdf::LanguageTagParseError;
use oxrdfio::RdfParseError;
use std::io;

/// Error returned by the ontology API.
#[derive(Debug, thiserror::Error)]
pub enum OntError {
    /// A node could not be viewed with the requested facet.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// The language profile of the model has no term for a requested role.
    #[error(transparent)]
    Profile(#[from] ProfileError),
    /// An RDF list operation failed.
    #[error(transparent)]
    List(#[from] ListError),
    /// A value found in or written to the graph is not acceptable.
    #[error("{0}")]
    InvalidValue(String),
    /// An ontology document could not be located or fetched.
    #[error(transparent)]
    Document(#[from] DocumentError),
    /// I/O error while reading or writing a document.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Syntax error in a parsed document.
    #[error(transparent)]
    Parse(#[from] RdfParseError),
    /// An invalid IRI.
    #[error(transparent)]
    Iri(#[from] IriParseError),
    /// An invalid language tag.
    #[error(transparent)]
    LanguageTag(#[from] LanguageTagParseError),
    /// The shared model state is not usable anymore.
    #[error(transparent)]
    Corruption(#[from] CorruptionError),
}

impl OntError {
    pub(crate) fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }
}

/// A node can't be seen through the requested facet.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Cannot convert node {node} to {facet}")]
pub struct ConversionError {
    node: String,
    facet: FacetKind,
}

impl ConversionError {
    pub(crate) fn new(node: impl ToString, facet: FacetKind) -> Self {
        Self {
            node: node.to_string(),
            facet,
        }
    }

    /// The facet that was requested.
    #[inline]
    pub fn facet(&self) -> FacetKind {
        self.facet
    }
}

/// The language profile does not support a vocabulary role.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{role} is not supported in the {profile} profile")]
pub struct ProfileError {
    role: Role,
    profile: &'static str,
}

impl ProfileError {
    pub(crate) fn new(role: Role, profile: &'static str) -> Self {
        Self { role, profile }
    }

    /// The unsupported role.
    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    /// The label of the profile that lacks the role.
    #[inline]
    pub fn profile(&self) -> &'static str {
        self.profile
    }
}

/// Errors raised while reading or modifying an RDF list.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ListError {
    /// The operation needs a non-empty list.
    #[error("{0}")]
    Empty(&'static str),
    /// The index is beyond the end of the list.
    #[error("Tried to access element {index} that is beyond the length of the list")]
    Index { index: usize },
    /// The list structure is malformed.
    #[error("{0}")]
    Invalid(String),
}

/// An ontology document could not be fetched.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DocumentError {
    /// The document IRI does not map to a readable location.
    #[error("Cannot resolve the location of the document <{0}>")]
    Unresolvable(String),
}

/// The shared model state got corrupted (e.g. a writer panicked while holding the lock).
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct CorruptionError(String);

impl CorruptionError {
    #[inline]
    pub(crate) fn msg(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}
