use super::{Profile, Role, is_language_term};
use crate::facet::FacetKind;
use crate::graph::OntGraph;
use crate::vocab::{OWL_NAMESPACE, owl, rdf, rdfs};
use oxrdf::{NamedNodeRef, NamedOrBlankNodeRef, TermRef};

/// The OWL Full profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwlProfile;

/// The OWL DL profile: the OWL vocabulary with the separation between classes, properties and individuals.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwlDlProfile;

/// The OWL Lite profile.
///
/// It has no `unionOf`, `complementOf`, `oneOf`, `hasValue`, `disjointWith` or `DataRange`
/// and cardinalities are restricted to 0 and 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwlLiteProfile;

const AXIOM_TYPES: &[NamedNodeRef<'static>] = &[owl::ALL_DIFFERENT];
const ANNOTATION_PROPERTIES: &[NamedNodeRef<'static>] = &[
    owl::VERSION_INFO,
    rdfs::LABEL,
    rdfs::SEE_ALSO,
    rdfs::COMMENT,
    rdfs::IS_DEFINED_BY,
];
const CLASS_DESCRIPTION_TYPES: &[NamedNodeRef<'static>] = &[owl::CLASS, owl::RESTRICTION];

const CLASS_TYPES: &[NamedNodeRef<'static>] =
    &[owl::CLASS, owl::RESTRICTION, rdfs::CLASS, rdfs::DATATYPE];
const PROPERTY_TYPES: &[NamedNodeRef<'static>] = &[
    rdf::PROPERTY,
    owl::OBJECT_PROPERTY,
    owl::DATATYPE_PROPERTY,
    owl::ANNOTATION_PROPERTY,
    owl::TRANSITIVE_PROPERTY,
    owl::SYMMETRIC_PROPERTY,
    owl::INVERSE_FUNCTIONAL_PROPERTY,
    owl::FUNCTIONAL_PROPERTY,
];

fn owl_term(role: Role) -> Option<NamedNodeRef<'static>> {
    Some(match role {
        Role::Class => owl::CLASS,
        Role::Restriction => owl::RESTRICTION,
        Role::Thing => owl::THING,
        Role::Nothing => owl::NOTHING,
        Role::Property => rdf::PROPERTY,
        Role::ObjectProperty => owl::OBJECT_PROPERTY,
        Role::DatatypeProperty => owl::DATATYPE_PROPERTY,
        Role::TransitiveProperty => owl::TRANSITIVE_PROPERTY,
        Role::SymmetricProperty => owl::SYMMETRIC_PROPERTY,
        Role::FunctionalProperty => owl::FUNCTIONAL_PROPERTY,
        Role::InverseFunctionalProperty => owl::INVERSE_FUNCTIONAL_PROPERTY,
        Role::AllDifferent => owl::ALL_DIFFERENT,
        Role::Ontology => owl::ONTOLOGY,
        Role::DeprecatedClass => owl::DEPRECATED_CLASS,
        Role::DeprecatedProperty => owl::DEPRECATED_PROPERTY,
        Role::AnnotationProperty => owl::ANNOTATION_PROPERTY,
        Role::OntologyProperty => owl::ONTOLOGY_PROPERTY,
        Role::DataRange => owl::DATA_RANGE,
        Role::EquivalentProperty => owl::EQUIVALENT_PROPERTY,
        Role::EquivalentClass => owl::EQUIVALENT_CLASS,
        Role::DisjointWith => owl::DISJOINT_WITH,
        Role::SameIndividualAs | Role::SameAs => owl::SAME_AS,
        Role::DifferentFrom => owl::DIFFERENT_FROM,
        Role::DistinctMembers => owl::DISTINCT_MEMBERS,
        Role::UnionOf => owl::UNION_OF,
        Role::IntersectionOf => owl::INTERSECTION_OF,
        Role::ComplementOf => owl::COMPLEMENT_OF,
        Role::OneOf => owl::ONE_OF,
        Role::OnProperty => owl::ON_PROPERTY,
        Role::AllValuesFrom => owl::ALL_VALUES_FROM,
        Role::HasValue => owl::HAS_VALUE,
        Role::SomeValuesFrom => owl::SOME_VALUES_FROM,
        Role::MinCardinality => owl::MIN_CARDINALITY,
        Role::MaxCardinality => owl::MAX_CARDINALITY,
        Role::Cardinality => owl::CARDINALITY,
        Role::InverseOf => owl::INVERSE_OF,
        Role::Imports => owl::IMPORTS,
        Role::VersionInfo => owl::VERSION_INFO,
        Role::PriorVersion => owl::PRIOR_VERSION,
        Role::BackwardCompatibleWith => owl::BACKWARD_COMPATIBLE_WITH,
        Role::IncompatibleWith => owl::INCOMPATIBLE_WITH,
        Role::SubClassOf => rdfs::SUB_CLASS_OF,
        Role::SubPropertyOf => rdfs::SUB_PROPERTY_OF,
        Role::Domain => rdfs::DOMAIN,
        Role::Range => rdfs::RANGE,
        Role::Label => rdfs::LABEL,
        Role::Comment => rdfs::COMMENT,
        Role::SeeAlso => rdfs::SEE_ALSO,
        Role::IsDefinedBy => rdfs::IS_DEFINED_BY,
        Role::First => rdf::FIRST,
        Role::Rest => rdf::REST,
        Role::List => rdf::LIST,
        Role::Nil => rdf::NIL,
        Role::MinCardinalityQ | Role::MaxCardinalityQ | Role::CardinalityQ | Role::HasClassQ => {
            return None;
        }
    })
}

fn is_restriction_on(
    node: NamedOrBlankNodeRef<'_>,
    graph: &OntGraph,
    defining: NamedNodeRef<'_>,
) -> bool {
    graph.has_type(node, owl::RESTRICTION)
        && graph.contains_some(node, defining)
        && graph.contains_some(node, owl::ON_PROPERTY)
}

/// The OWL Full check table. Facets without a check are not supported.
fn owl_full_check(
    profile: &dyn Profile,
    node: NamedOrBlankNodeRef<'_>,
    graph: &OntGraph,
    facet: FacetKind,
) -> bool {
    match facet {
        FacetKind::OntResource | FacetKind::Individual => true,
        FacetKind::OntClass
        | FacetKind::EnumeratedClass
        | FacetKind::UnionClass
        | FacetKind::IntersectionClass
        | FacetKind::ComplementClass => {
            graph.has_any_type(node, CLASS_TYPES)
                || node == NamedOrBlankNodeRef::from(owl::THING)
                || node == NamedOrBlankNodeRef::from(owl::NOTHING)
                || graph.is_value_of(rdfs::DOMAIN, node)
                || graph.is_value_of(rdfs::RANGE, node)
                || graph.contains_some(node, owl::INTERSECTION_OF)
                || graph.contains_some(node, owl::UNION_OF)
                || graph.contains_some(node, owl::COMPLEMENT_OF)
        }
        FacetKind::Restriction => graph.has_type(node, owl::RESTRICTION),
        FacetKind::HasValueRestriction => is_restriction_on(node, graph, owl::HAS_VALUE),
        FacetKind::AllValuesFromRestriction => {
            is_restriction_on(node, graph, owl::ALL_VALUES_FROM)
        }
        FacetKind::SomeValuesFromRestriction => {
            is_restriction_on(node, graph, owl::SOME_VALUES_FROM)
        }
        FacetKind::CardinalityRestriction => is_restriction_on(node, graph, owl::CARDINALITY),
        FacetKind::MinCardinalityRestriction => {
            is_restriction_on(node, graph, owl::MIN_CARDINALITY)
        }
        FacetKind::MaxCardinalityRestriction => {
            is_restriction_on(node, graph, owl::MAX_CARDINALITY)
        }
        FacetKind::OntProperty => graph.has_any_type(node, PROPERTY_TYPES),
        FacetKind::ObjectProperty => graph.has_any_type(
            node,
            &[
                owl::OBJECT_PROPERTY,
                owl::TRANSITIVE_PROPERTY,
                owl::SYMMETRIC_PROPERTY,
                owl::INVERSE_FUNCTIONAL_PROPERTY,
            ],
        ),
        FacetKind::DatatypeProperty => graph.has_type(node, owl::DATATYPE_PROPERTY),
        FacetKind::AnnotationProperty => {
            profile
                .annotation_properties()
                .iter()
                .any(|p| node == NamedOrBlankNodeRef::from(*p))
                || graph.has_type(node, owl::ANNOTATION_PROPERTY)
        }
        FacetKind::FunctionalProperty => graph.has_type(node, owl::FUNCTIONAL_PROPERTY),
        FacetKind::InverseFunctionalProperty => {
            graph.has_type(node, owl::INVERSE_FUNCTIONAL_PROPERTY)
        }
        FacetKind::TransitiveProperty => {
            graph.has_type(node, owl::TRANSITIVE_PROPERTY)
                && !graph.has_type(node, owl::DATATYPE_PROPERTY)
        }
        FacetKind::SymmetricProperty => {
            graph.has_type(node, owl::SYMMETRIC_PROPERTY)
                && !graph.has_type(node, owl::DATATYPE_PROPERTY)
        }
        FacetKind::Ontology => graph.has_type(node, owl::ONTOLOGY),
        FacetKind::AllDifferent => graph.has_type(node, owl::ALL_DIFFERENT),
        FacetKind::DataRange => {
            matches!(node, NamedOrBlankNodeRef::BlankNode(_))
                && graph.has_type(node, owl::DATA_RANGE)
        }
        FacetKind::List => {
            node == NamedOrBlankNodeRef::from(rdf::NIL)
                || graph.has_type(node, rdf::LIST)
                || graph.contains_some(node, rdf::FIRST)
        }
        FacetKind::QualifiedRestriction
        | FacetKind::CardinalityQRestriction
        | FacetKind::MinCardinalityQRestriction
        | FacetKind::MaxCardinalityQRestriction => false,
    }
}

/// A node is used as an individual when it is typed with a class that is not a language term.
fn is_instance_of_user_class(node: NamedOrBlankNodeRef<'_>, graph: &OntGraph) -> bool {
    graph.types(node).iter().any(|t| match t.as_ref() {
        TermRef::NamedNode(t) => !is_language_term(t.into()),
        TermRef::BlankNode(_) => true,
        _ => false,
    })
}

/// OWL DL keeps classes, properties and individuals apart.
fn owl_dl_check(
    profile: &dyn Profile,
    node: NamedOrBlankNodeRef<'_>,
    graph: &OntGraph,
    facet: FacetKind,
) -> bool {
    if !owl_full_check(profile, node, graph, facet) {
        return false;
    }
    if facet.is_class() {
        !graph.has_any_type(node, PROPERTY_TYPES) && !is_instance_of_user_class(node, graph)
    } else if facet.is_property() {
        !graph.has_any_type(node, CLASS_TYPES)
    } else if facet == FacetKind::Individual {
        !graph.has_any_type(node, CLASS_TYPES) && !graph.has_any_type(node, PROPERTY_TYPES)
    } else {
        true
    }
}

fn has_lite_cardinality(
    node: NamedOrBlankNodeRef<'_>,
    graph: &OntGraph,
    property: NamedNodeRef<'_>,
) -> bool {
    graph.objects(node, property).iter().all(|value| {
        matches!(value.as_ref(), TermRef::Literal(l) if matches!(l.value().trim(), "0" | "1"))
    })
}

impl Profile for OwlProfile {
    fn label(&self) -> &'static str {
        "OWL Full"
    }

    fn namespace(&self) -> &'static str {
        OWL_NAMESPACE
    }

    fn language(&self) -> &'static str {
        "http://www.w3.org/2002/07/owl#"
    }

    fn term(&self, role: Role) -> Option<NamedNodeRef<'static>> {
        owl_term(role)
    }

    fn axiom_types(&self) -> &'static [NamedNodeRef<'static>] {
        AXIOM_TYPES
    }

    fn annotation_properties(&self) -> &'static [NamedNodeRef<'static>] {
        ANNOTATION_PROPERTIES
    }

    fn class_description_types(&self) -> &'static [NamedNodeRef<'static>] {
        CLASS_DESCRIPTION_TYPES
    }

    fn check(&self, node: NamedOrBlankNodeRef<'_>, graph: &OntGraph, facet: FacetKind) -> bool {
        owl_full_check(self, node, graph, facet)
    }
}

impl Profile for OwlDlProfile {
    fn label(&self) -> &'static str {
        "OWL DL"
    }

    fn namespace(&self) -> &'static str {
        OWL_NAMESPACE
    }

    fn language(&self) -> &'static str {
        "http://www.w3.org/TR/owl-features/#term_OWLDL"
    }

    fn term(&self, role: Role) -> Option<NamedNodeRef<'static>> {
        owl_term(role)
    }

    fn axiom_types(&self) -> &'static [NamedNodeRef<'static>] {
        AXIOM_TYPES
    }

    fn annotation_properties(&self) -> &'static [NamedNodeRef<'static>] {
        ANNOTATION_PROPERTIES
    }

    fn class_description_types(&self) -> &'static [NamedNodeRef<'static>] {
        CLASS_DESCRIPTION_TYPES
    }

    fn check(&self, node: NamedOrBlankNodeRef<'_>, graph: &OntGraph, facet: FacetKind) -> bool {
        owl_dl_check(self, node, graph, facet)
    }
}

impl Profile for OwlLiteProfile {
    fn label(&self) -> &'static str {
        "OWL Lite"
    }

    fn namespace(&self) -> &'static str {
        OWL_NAMESPACE
    }

    fn language(&self) -> &'static str {
        "http://www.w3.org/TR/owl-features/#term_OWLLite"
    }

    fn term(&self, role: Role) -> Option<NamedNodeRef<'static>> {
        match role {
            Role::UnionOf
            | Role::ComplementOf
            | Role::OneOf
            | Role::HasValue
            | Role::DisjointWith
            | Role::DataRange => None,
            _ => owl_term(role),
        }
    }

    fn axiom_types(&self) -> &'static [NamedNodeRef<'static>] {
        AXIOM_TYPES
    }

    fn annotation_properties(&self) -> &'static [NamedNodeRef<'static>] {
        ANNOTATION_PROPERTIES
    }

    fn class_description_types(&self) -> &'static [NamedNodeRef<'static>] {
        CLASS_DESCRIPTION_TYPES
    }

    fn accepts_cardinality(&self, value: u32) -> bool {
        value <= 1
    }

    fn check(&self, node: NamedOrBlankNodeRef<'_>, graph: &OntGraph, facet: FacetKind) -> bool {
        if !owl_dl_check(self, node, graph, facet) {
            return false;
        }
        match facet {
            FacetKind::CardinalityRestriction => {
                has_lite_cardinality(node, graph, owl::CARDINALITY)
            }
            FacetKind::MinCardinalityRestriction => {
                has_lite_cardinality(node, graph, owl::MIN_CARDINALITY)
            }
            FacetKind::MaxCardinalityRestriction => {
                has_lite_cardinality(node, graph, owl::MAX_CARDINALITY)
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{BlankNode, Literal, NamedNode, TripleRef};
    use oxrdf::vocab::xsd;

    #[test]
    fn lite_drops_boolean_class_terms() {
        assert_eq!(OwlProfile.term(Role::UnionOf), Some(owl::UNION_OF));
        assert_eq!(OwlLiteProfile.term(Role::UnionOf), None);
        assert_eq!(OwlLiteProfile.term(Role::IntersectionOf), Some(owl::INTERSECTION_OF));
        let error = OwlLiteProfile.require(Role::HasValue).unwrap_err();
        assert_eq!(error.to_string(), "HAS_VALUE is not supported in the OWL Lite profile");
    }

    #[test]
    fn owl_full_class_check() {
        let mut graph = OntGraph::default();
        let c = NamedNode::new_unchecked("http://example.com/C");
        let p = NamedNode::new_unchecked("http://example.com/p");
        assert!(!OwlProfile.check(c.as_ref().into(), &graph, FacetKind::OntClass));
        graph.insert(TripleRef::new(&p, rdfs::RANGE, &c));
        assert!(OwlProfile.check(c.as_ref().into(), &graph, FacetKind::OntClass));
        assert!(OwlProfile.check(owl::THING.into(), &graph, FacetKind::OntClass));
        assert!(!OwlProfile.is_supported(
            c.as_ref().into(),
            &graph,
            FacetKind::CardinalityQRestriction,
            false
        ));
        assert!(OwlProfile.is_supported(p.as_ref().into(), &graph, FacetKind::OntProperty, false));
        assert!(!OwlProfile.is_supported(p.as_ref().into(), &graph, FacetKind::OntProperty, true));
    }

    #[test]
    fn dl_separates_classes_and_properties() {
        let mut graph = OntGraph::default();
        let x = NamedNode::new_unchecked("http://example.com/x");
        graph.insert(TripleRef::new(&x, rdf::TYPE, owl::CLASS));
        graph.insert(TripleRef::new(&x, rdf::TYPE, owl::OBJECT_PROPERTY));
        assert!(OwlProfile.check(x.as_ref().into(), &graph, FacetKind::OntClass));
        assert!(!OwlDlProfile.check(x.as_ref().into(), &graph, FacetKind::OntClass));
        assert!(!OwlDlProfile.check(x.as_ref().into(), &graph, FacetKind::ObjectProperty));
        assert!(!OwlDlProfile.check(x.as_ref().into(), &graph, FacetKind::Individual));
    }

    #[test]
    fn lite_cardinalities() {
        let mut graph = OntGraph::default();
        let r = BlankNode::default();
        let p = NamedNode::new_unchecked("http://example.com/p");
        graph.insert(TripleRef::new(&r, rdf::TYPE, owl::RESTRICTION));
        graph.insert(TripleRef::new(&r, owl::ON_PROPERTY, &p));
        graph.insert(TripleRef::new(
            &r,
            owl::CARDINALITY,
            &Literal::new_typed_literal("2", xsd::NON_NEGATIVE_INTEGER),
        ));
        assert!(OwlDlProfile.check(r.as_ref().into(), &graph, FacetKind::CardinalityRestriction));
        assert!(!OwlLiteProfile.check(r.as_ref().into(), &graph, FacetKind::CardinalityRestriction));
        assert!(!OwlLiteProfile.accepts_cardinality(2));
    }
}
