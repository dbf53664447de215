//! Provides ready to use [`NamedNodeRef`]s for the ontology languages supported by the profiles.
//!
//! RDF, RDFS and XSD terms are the ones of [`oxrdf::vocab`].

pub use oxrdf::vocab::{rdf, rdfs, xsd};

/// The RDF namespace.
pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// The RDFS namespace.
pub const RDFS_NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// The XSD namespace.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";
/// The OWL namespace.
pub const OWL_NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";
/// The DAML+OIL (March 2001) namespace.
pub const DAML_OIL_NAMESPACE: &str = "http://www.daml.org/2001/03/daml+oil#";
/// The namespace of the ontology document manager policy vocabulary.
pub const ONT_MANAGER_NAMESPACE: &str = "http://jena.hpl.hp.com/schemas/2003/03/ont-manager#";

pub mod owl {
    //! [OWL](https://www.w3.org/TR/owl-ref/) vocabulary.
    use oxrdf::NamedNodeRef;

    /// The class of collections of pairwise different individuals.
    pub const ALL_DIFFERENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#AllDifferent");
    /// The property that determines the class that a universal property restriction refers to.
    pub const ALL_VALUES_FROM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#allValuesFrom");
    /// The class of annotation properties.
    pub const ANNOTATION_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#AnnotationProperty");
    /// The annotation property that indicates that a given ontology is backward compatible with another ontology.
    pub const BACKWARD_COMPATIBLE_WITH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#backwardCompatibleWith");
    /// The property that determines the cardinality of an exact cardinality restriction.
    pub const CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#cardinality");
    /// The class of OWL classes.
    pub const CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Class");
    /// The property that determines that a given class is the complement of another class.
    pub const COMPLEMENT_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#complementOf");
    /// The class of OWL data ranges.
    pub const DATA_RANGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DataRange");
    /// The class of data properties.
    pub const DATATYPE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DatatypeProperty");
    /// The class of deprecated classes.
    pub const DEPRECATED_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DeprecatedClass");
    /// The class of deprecated properties.
    pub const DEPRECATED_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DeprecatedProperty");
    /// The property that determines that two given individuals are different.
    pub const DIFFERENT_FROM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#differentFrom");
    /// The property that determines that two given classes are disjoint.
    pub const DISJOINT_WITH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#disjointWith");
    /// The property that determines the collection of pairwise different individuals in an AllDifferent axiom.
    pub const DISTINCT_MEMBERS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#distinctMembers");
    /// The property that determines that two given classes are equivalent.
    pub const EQUIVALENT_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#equivalentClass");
    /// The property that determines that two given properties are equivalent.
    pub const EQUIVALENT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#equivalentProperty");
    /// The class of functional properties.
    pub const FUNCTIONAL_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#FunctionalProperty");
    /// The property that determines the individual that a has-value restriction refers to.
    pub const HAS_VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#hasValue");
    /// The property that is used for importing other ontologies into a given ontology.
    pub const IMPORTS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#imports");
    /// The annotation property that indicates that a given ontology is incompatible with another ontology.
    pub const INCOMPATIBLE_WITH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#incompatibleWith");
    /// The property that determines the collection of classes or data ranges that build an intersection.
    pub const INTERSECTION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#intersectionOf");
    /// The class of inverse-functional properties.
    pub const INVERSE_FUNCTIONAL_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#InverseFunctionalProperty");
    /// The property that determines that two given properties are inverse.
    pub const INVERSE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#inverseOf");
    /// The property that determines the cardinality of a maximum cardinality restriction.
    pub const MAX_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#maxCardinality");
    /// The property that determines the cardinality of a minimum cardinality restriction.
    pub const MIN_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#minCardinality");
    /// This is the empty class.
    pub const NOTHING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Nothing");
    /// The class of object properties.
    pub const OBJECT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");
    /// The property that determines the collection of individuals or data values that build an enumeration.
    pub const ONE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#oneOf");
    /// The property that determines the property that a property restriction refers to.
    pub const ON_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#onProperty");
    /// The class of ontologies.
    pub const ONTOLOGY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Ontology");
    /// The class of ontology properties.
    pub const ONTOLOGY_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#OntologyProperty");
    /// The annotation property that indicates the predecessor ontology of a given ontology.
    pub const PRIOR_VERSION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#priorVersion");
    /// The class of property restrictions.
    pub const RESTRICTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Restriction");
    /// The property that determines that two given individuals are equal.
    pub const SAME_AS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#sameAs");
    /// The property that determines the class that an existential property restriction refers to.
    pub const SOME_VALUES_FROM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#someValuesFrom");
    /// The class of symmetric properties.
    pub const SYMMETRIC_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#SymmetricProperty");
    /// The class of OWL individuals.
    pub const THING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Thing");
    /// The class of transitive properties.
    pub const TRANSITIVE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#TransitiveProperty");
    /// The property that determines the collection of classes or data ranges that build a union.
    pub const UNION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#unionOf");
    /// The annotation property that provides version information for an ontology or another OWL construct.
    pub const VERSION_INFO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#versionInfo");
}

pub mod daml_oil {
    //! [DAML+OIL](https://www.w3.org/TR/daml+oil-reference) vocabulary.
    //!
    //! DAML+OIL redefines a few RDF and RDFS terms in its own namespace, they are listed here too.
    use oxrdf::NamedNodeRef;

    pub const CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#cardinality");
    pub const CARDINALITY_Q: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#cardinalityQ");
    pub const CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#Class");
    pub const COMMENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#comment");
    pub const COMPLEMENT_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#complementOf");
    pub const DATATYPE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#DatatypeProperty");
    pub const DIFFERENT_INDIVIDUAL_FROM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#differentIndividualFrom");
    pub const DISJOINT_WITH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#disjointWith");
    pub const DOMAIN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#domain");
    pub const EQUIVALENT_TO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#equivalentTo");
    pub const FIRST: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#first");
    pub const HAS_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#hasClass");
    pub const HAS_CLASS_Q: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#hasClassQ");
    pub const HAS_VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#hasValue");
    pub const IMPORTS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#imports");
    pub const INTERSECTION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#intersectionOf");
    pub const INVERSE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#inverseOf");
    pub const IS_DEFINED_BY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#isDefinedBy");
    pub const LABEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#label");
    pub const LIST: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#List");
    pub const LITERAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#Literal");
    pub const MAX_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#maxCardinality");
    pub const MAX_CARDINALITY_Q: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#maxCardinalityQ");
    pub const MIN_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#minCardinality");
    pub const MIN_CARDINALITY_Q: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#minCardinalityQ");
    pub const NIL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#nil");
    pub const NOTHING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#Nothing");
    pub const OBJECT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#ObjectProperty");
    pub const ONE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#oneOf");
    pub const ON_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#onProperty");
    pub const ONTOLOGY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#Ontology");
    pub const PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#Property");
    pub const RANGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#range");
    pub const REST: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#rest");
    pub const RESTRICTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#Restriction");
    pub const SAME_CLASS_AS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#sameClassAs");
    pub const SAME_INDIVIDUAL_AS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#sameIndividualAs");
    pub const SAME_PROPERTY_AS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#samePropertyAs");
    pub const SEE_ALSO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#seeAlso");
    pub const SUB_CLASS_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#subClassOf");
    pub const SUB_PROPERTY_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#subPropertyOf");
    pub const THING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#Thing");
    pub const TO_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#toClass");
    pub const TRANSITIVE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#TransitiveProperty");
    pub const TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#type");
    pub const UNAMBIGUOUS_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#UnambiguousProperty");
    pub const UNION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#unionOf");
    pub const UNIQUE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#UniqueProperty");
    pub const VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#value");
    pub const VERSION_INFO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.daml.org/2001/03/daml+oil#versionInfo");
}

pub mod ont_manager {
    //! Vocabulary of the ontology document manager policy files.
    use oxrdf::NamedNodeRef;

    /// The class of the descriptions of an ontology document.
    pub const ONTOLOGY_SPEC: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://jena.hpl.hp.com/schemas/2003/03/ont-manager#OntologySpec",
    );
    /// The public IRI of the document.
    pub const PUBLIC_URI: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://jena.hpl.hp.com/schemas/2003/03/ont-manager#publicURI",
    );
    /// A location to read the document from instead of its public IRI.
    pub const ALT_URL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://jena.hpl.hp.com/schemas/2003/03/ont-manager#altURL");
    /// The usual prefix of the document namespace.
    pub const PREFIX: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://jena.hpl.hp.com/schemas/2003/03/ont-manager#prefix");
    /// The ontology language the document is written in.
    pub const LANGUAGE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://jena.hpl.hp.com/schemas/2003/03/ont-manager#language",
    );
    /// The class of the global settings of the document manager.
    pub const DOCUMENT_MANAGER_POLICY: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://jena.hpl.hp.com/schemas/2003/03/ont-manager#DocumentManagerPolicy",
    );
    pub const PROCESS_IMPORTS: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://jena.hpl.hp.com/schemas/2003/03/ont-manager#processImports",
    );
    pub const CACHE_MODELS: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://jena.hpl.hp.com/schemas/2003/03/ont-manager#cacheModels",
    );
}
