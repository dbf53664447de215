//! Language profiles: the tables mapping abstract ontology roles to the terms of a concrete language.

mod daml;
mod owl;
mod rdfs;
mod registry;

pub use daml::DamlOilProfile;
pub use owl::{OwlDlProfile, OwlLiteProfile, OwlProfile};
pub use rdfs::RdfsProfile;
pub use registry::{OntLanguage, ProfileRegistry, UnknownLanguageError};

use crate::error::ProfileError;
use crate::facet::FacetKind;
use crate::graph::OntGraph;
use oxrdf::{NamedNodeRef, NamedOrBlankNodeRef};
use std::fmt;

macro_rules! roles {
    ($($(#[$attr:meta])* $variant:ident => $name:literal,)*) => {
        /// An abstract vocabulary role that a [`Profile`] may map to a concrete term.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum Role {
            $($(#[$attr])* $variant,)*
        }

        impl Role {
            /// All the roles.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// The upper-case name of the role, like `SUB_CLASS_OF`.
            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

roles! {
    Class => "CLASS",
    Restriction => "RESTRICTION",
    Thing => "THING",
    Nothing => "NOTHING",
    Property => "PROPERTY",
    ObjectProperty => "OBJECT_PROPERTY",
    DatatypeProperty => "DATATYPE_PROPERTY",
    TransitiveProperty => "TRANSITIVE_PROPERTY",
    SymmetricProperty => "SYMMETRIC_PROPERTY",
    FunctionalProperty => "FUNCTIONAL_PROPERTY",
    InverseFunctionalProperty => "INVERSE_FUNCTIONAL_PROPERTY",
    AllDifferent => "ALL_DIFFERENT",
    Ontology => "ONTOLOGY",
    DeprecatedClass => "DEPRECATED_CLASS",
    DeprecatedProperty => "DEPRECATED_PROPERTY",
    AnnotationProperty => "ANNOTATION_PROPERTY",
    OntologyProperty => "ONTOLOGY_PROPERTY",
    DataRange => "DATARANGE",
    EquivalentProperty => "EQUIVALENT_PROPERTY",
    EquivalentClass => "EQUIVALENT_CLASS",
    DisjointWith => "DISJOINT_WITH",
    SameIndividualAs => "SAME_INDIVIDUAL_AS",
    SameAs => "SAME_AS",
    DifferentFrom => "DIFFERENT_FROM",
    DistinctMembers => "DISTINCT_MEMBERS",
    UnionOf => "UNION_OF",
    IntersectionOf => "INTERSECTION_OF",
    ComplementOf => "COMPLEMENT_OF",
    OneOf => "ONE_OF",
    OnProperty => "ON_PROPERTY",
    AllValuesFrom => "ALL_VALUES_FROM",
    HasValue => "HAS_VALUE",
    SomeValuesFrom => "SOME_VALUES_FROM",
    MinCardinality => "MIN_CARDINALITY",
    MaxCardinality => "MAX_CARDINALITY",
    Cardinality => "CARDINALITY",
    MinCardinalityQ => "MIN_CARDINALITY_Q",
    MaxCardinalityQ => "MAX_CARDINALITY_Q",
    CardinalityQ => "CARDINALITY_Q",
    HasClassQ => "HAS_CLASS_Q",
    InverseOf => "INVERSE_OF",
    Imports => "IMPORTS",
    VersionInfo => "VERSION_INFO",
    PriorVersion => "PRIOR_VERSION",
    BackwardCompatibleWith => "BACKWARD_COMPATIBLE_WITH",
    IncompatibleWith => "INCOMPATIBLE_WITH",
    SubClassOf => "SUB_CLASS_OF",
    SubPropertyOf => "SUB_PROPERTY_OF",
    Domain => "DOMAIN",
    Range => "RANGE",
    Label => "LABEL",
    Comment => "COMMENT",
    SeeAlso => "SEE_ALSO",
    IsDefinedBy => "IS_DEFINED_BY",
    First => "FIRST",
    Rest => "REST",
    /// The `rdf:type` of the cells of a list.
    List => "LIST",
    /// The empty list.
    Nil => "NIL",
}

impl fmt::Display for Role {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The vocabulary table and the semantic checks of an ontology language.
///
/// ```
/// use oxont::profile::{OwlProfile, Profile, RdfsProfile, Role};
/// use oxont::vocab::owl;
///
/// assert_eq!(OwlProfile.term(Role::UnionOf), Some(owl::UNION_OF));
/// assert_eq!(RdfsProfile.term(Role::UnionOf), None);
/// assert!(RdfsProfile.require(Role::UnionOf).is_err());
/// ```
pub trait Profile: Send + Sync + fmt::Debug {
    /// A human readable label like "OWL Full".
    fn label(&self) -> &'static str;

    /// The namespace of the language terms.
    fn namespace(&self) -> &'static str;

    /// The IRI identifying the language.
    fn language(&self) -> &'static str;

    /// The term the language uses for `role`, `None` if the language has none.
    fn term(&self, role: Role) -> Option<NamedNodeRef<'static>>;

    /// Same as [`term`](Self::term) but fails with a [`ProfileError`] when the role is not in the language.
    #[inline]
    fn require(&self, role: Role) -> Result<NamedNodeRef<'static>, ProfileError> {
        self.term(role)
            .ok_or_else(|| ProfileError::new(role, self.label()))
    }

    /// Pairs of terms that the language considers as synonyms.
    fn aliases(&self) -> &'static [(NamedNodeRef<'static>, NamedNodeRef<'static>)] {
        &[]
    }

    fn has_alias_for(&self, term: NamedNodeRef<'_>) -> bool {
        self.alias_for(term).is_some()
    }

    /// The first alias of `term`, if any.
    fn alias_for(&self, term: NamedNodeRef<'_>) -> Option<NamedNodeRef<'static>> {
        self.aliases_for(term).into_iter().next()
    }

    /// All the aliases of `term`. The alias table is read in both directions.
    fn aliases_for(&self, term: NamedNodeRef<'_>) -> Vec<NamedNodeRef<'static>> {
        self.aliases()
            .iter()
            .filter_map(|(a, b)| {
                if *a == term {
                    Some(*b)
                } else if *b == term {
                    Some(*a)
                } else {
                    None
                }
            })
            .collect()
    }

    /// The types of the first-class axioms of the language, like `owl:AllDifferent`.
    fn axiom_types(&self) -> &'static [NamedNodeRef<'static>];

    /// The built-in annotation properties.
    fn annotation_properties(&self) -> &'static [NamedNodeRef<'static>];

    /// The types a class description is declared with.
    fn class_description_types(&self) -> &'static [NamedNodeRef<'static>];

    /// Checks if the language defines a term for the role a facet is built upon.
    fn can_express(&self, facet: FacetKind) -> bool {
        facet.role().is_none_or(|role| self.term(role).is_some())
    }

    /// Checks if a cardinality value is allowed in this language.
    fn accepts_cardinality(&self, _value: u32) -> bool {
        true
    }

    /// The strict-mode semantic check of `node` against `facet`.
    fn check(&self, node: NamedOrBlankNodeRef<'_>, graph: &OntGraph, facet: FacetKind) -> bool;

    /// Checks if `node` may be viewed as `facet`.
    ///
    /// When `strict` is off, every facet the language can express is supported.
    fn is_supported(
        &self,
        node: NamedOrBlankNodeRef<'_>,
        graph: &OntGraph,
        facet: FacetKind,
        strict: bool,
    ) -> bool {
        self.can_express(facet) && (!strict || self.check(node, graph, facet))
    }
}

/// Checks if the resource is a term of one of the language namespaces (RDF, RDFS, XSD, OWL or DAML+OIL).
pub fn is_language_term(node: NamedOrBlankNodeRef<'_>) -> bool {
    let NamedOrBlankNodeRef::NamedNode(node) = node else {
        return false;
    };
    [
        crate::vocab::RDF_NAMESPACE,
        crate::vocab::RDFS_NAMESPACE,
        crate::vocab::XSD_NAMESPACE,
        crate::vocab::OWL_NAMESPACE,
        crate::vocab::DAML_OIL_NAMESPACE,
    ]
    .iter()
    .any(|ns| node.as_str().starts_with(ns))
}
