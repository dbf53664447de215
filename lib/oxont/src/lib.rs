//! OxOnt is an ontology API on top of [OxRDF](https://crates.io/crates/oxrdf) graphs.
//!
//! An [`OntModel`] wraps a graph and reads it through the vocabulary of an ontology language:
//! [OWL](https://www.w3.org/TR/owl-ref/) (full, DL and Lite), [DAML+OIL](https://www.w3.org/TR/daml+oil-reference) or [RDFS](https://www.w3.org/TR/rdf-schema/).
//! The language is described by a [`Profile`] that maps each [`Role`] to a term and tells which views a node supports.
//!
//! Views like [`OntClass`], [`OntProperty`] or [`Restriction`] are cheap handles on a node of the model.
//! They do not copy any data: every call reads or writes the shared graph.
//!
//! Imported ontologies are fetched by an [`OntDocumentManager`] and added to the model as read-only sub-graphs.
//!
//! Usage example:
//! ```
//! use oxont::{OntModel, OntModelSpec};
//! use oxrdfio::RdfFormat;
//!
//! let model = OntModel::new(OntModelSpec::OWL_MEM);
//! let file = r#"
//!     @prefix owl: <http://www.w3.org/2002/07/owl#> .
//!     @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!     <http://example.com/Animal> a owl:Class .
//!     <http://example.com/Dog> a owl:Class ; rdfs:subClassOf <http://example.com/Animal> .
//! "#;
//! model.load_from_reader(file.as_bytes(), RdfFormat::Turtle, None)?;
//!
//! let animal = model.get_ont_class("http://example.com/Animal")?.ok_or("no Animal")?;
//! let dog = model.get_ont_class("http://example.com/Dog")?.ok_or("no Dog")?;
//! assert!(dog.has_super_class(&animal, false)?);
//! assert_eq!(model.list_hierarchy_root_classes()?, vec![animal]);
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(html_favicon_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]

mod class;
mod document;
mod error;
mod facet;
mod graph;
mod individual;
mod list;
mod model;
pub mod profile;
mod property;
mod resource;
mod restriction;
pub mod results;
pub mod tools;
pub mod vocab;

pub use class::{ComplementClass, EnumeratedClass, IntersectionClass, OntClass, UnionClass};
pub use document::{DEFAULT_POLICY_PATH, OntDocumentManager};
pub use error::{
    ConversionError, CorruptionError, DocumentError, ListError, OntError, ProfileError,
};
pub use facet::{Facet, FacetKind};
pub use graph::OntGraph;
pub use individual::{AllDifferent, DataRange, Individual, Ontology};
pub use list::{ListIter, OntList};
pub use model::{OntModel, OntModelSpec};
pub use profile::{OntLanguage, Profile, Role};
pub use property::{
    AnnotationProperty, DatatypeProperty, FunctionalProperty, InverseFunctionalProperty,
    ObjectProperty, OntProperty, SymmetricProperty, TransitiveProperty,
};
pub use resource::{AsNode, OntResource};
pub use restriction::{
    AllValuesFromRestriction, CardinalityQRestriction, CardinalityRestriction,
    HasValueRestriction, MaxCardinalityQRestriction, MaxCardinalityRestriction,
    MinCardinalityQRestriction, MinCardinalityRestriction, QualifiedRestriction, Restriction,
    SomeValuesFromRestriction,
};
