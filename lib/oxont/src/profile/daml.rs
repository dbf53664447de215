use super::{Profile, Role};
use crate::facet::FacetKind;
use crate::graph::OntGraph;
use crate::vocab::{DAML_OIL_NAMESPACE, daml_oil, rdf, rdfs};
use oxrdf::{NamedNodeRef, NamedOrBlankNodeRef};

/// The DAML+OIL (March 2001) profile.
///
/// DAML+OIL redefines some RDF and RDFS terms, see [`aliases`](Profile::aliases).
/// Facets without a specific check are supported even in strict mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct DamlOilProfile;

const ALIASES: &[(NamedNodeRef<'static>, NamedNodeRef<'static>)] = &[
    (daml_oil::SUB_CLASS_OF, rdfs::SUB_CLASS_OF),
    (daml_oil::LITERAL, rdfs::LITERAL),
    (daml_oil::PROPERTY, rdf::PROPERTY),
    (daml_oil::TYPE, rdf::TYPE),
    (daml_oil::VALUE, rdf::VALUE),
    (daml_oil::SUB_PROPERTY_OF, rdfs::SUB_PROPERTY_OF),
    (daml_oil::DOMAIN, rdfs::DOMAIN),
    (daml_oil::RANGE, rdfs::RANGE),
    (daml_oil::LABEL, rdfs::LABEL),
    (daml_oil::COMMENT, rdfs::COMMENT),
    (daml_oil::SEE_ALSO, rdfs::SEE_ALSO),
    (daml_oil::IS_DEFINED_BY, rdfs::IS_DEFINED_BY),
];

const CLASS_DESCRIPTION_TYPES: &[NamedNodeRef<'static>] =
    &[daml_oil::CLASS, daml_oil::RESTRICTION];

fn is_restriction_on(
    node: NamedOrBlankNodeRef<'_>,
    graph: &OntGraph,
    defining: &[NamedNodeRef<'_>],
) -> bool {
    graph.has_type(node, daml_oil::RESTRICTION)
        && graph.contains_some(node, daml_oil::ON_PROPERTY)
        && defining.iter().all(|p| graph.contains_some(node, *p))
}

impl Profile for DamlOilProfile {
    fn label(&self) -> &'static str {
        "DAML+OIL"
    }

    fn namespace(&self) -> &'static str {
        DAML_OIL_NAMESPACE
    }

    fn language(&self) -> &'static str {
        DAML_OIL_NAMESPACE
    }

    fn term(&self, role: Role) -> Option<NamedNodeRef<'static>> {
        Some(match role {
            Role::Class => daml_oil::CLASS,
            Role::Restriction => daml_oil::RESTRICTION,
            Role::Thing => daml_oil::THING,
            Role::Nothing => daml_oil::NOTHING,
            Role::Property => daml_oil::PROPERTY,
            Role::ObjectProperty => daml_oil::OBJECT_PROPERTY,
            Role::DatatypeProperty => daml_oil::DATATYPE_PROPERTY,
            Role::TransitiveProperty => daml_oil::TRANSITIVE_PROPERTY,
            Role::FunctionalProperty => daml_oil::UNIQUE_PROPERTY,
            Role::InverseFunctionalProperty => daml_oil::UNAMBIGUOUS_PROPERTY,
            Role::Ontology => daml_oil::ONTOLOGY,
            Role::List => daml_oil::LIST,
            Role::Nil => daml_oil::NIL,
            Role::EquivalentProperty => daml_oil::SAME_PROPERTY_AS,
            Role::EquivalentClass => daml_oil::SAME_CLASS_AS,
            Role::DisjointWith => daml_oil::DISJOINT_WITH,
            Role::SameIndividualAs => daml_oil::SAME_INDIVIDUAL_AS,
            Role::SameAs => daml_oil::EQUIVALENT_TO,
            Role::DifferentFrom => daml_oil::DIFFERENT_INDIVIDUAL_FROM,
            Role::UnionOf => daml_oil::UNION_OF,
            Role::IntersectionOf => daml_oil::INTERSECTION_OF,
            Role::ComplementOf => daml_oil::COMPLEMENT_OF,
            Role::OneOf => daml_oil::ONE_OF,
            Role::OnProperty => daml_oil::ON_PROPERTY,
            Role::AllValuesFrom => daml_oil::TO_CLASS,
            Role::HasValue => daml_oil::HAS_VALUE,
            Role::SomeValuesFrom => daml_oil::HAS_CLASS,
            Role::MinCardinality => daml_oil::MIN_CARDINALITY,
            Role::MaxCardinality => daml_oil::MAX_CARDINALITY,
            Role::Cardinality => daml_oil::CARDINALITY,
            Role::MinCardinalityQ => daml_oil::MIN_CARDINALITY_Q,
            Role::MaxCardinalityQ => daml_oil::MAX_CARDINALITY_Q,
            Role::CardinalityQ => daml_oil::CARDINALITY_Q,
            Role::HasClassQ => daml_oil::HAS_CLASS_Q,
            Role::InverseOf => daml_oil::INVERSE_OF,
            Role::Imports => daml_oil::IMPORTS,
            Role::VersionInfo => daml_oil::VERSION_INFO,
            Role::SubClassOf => daml_oil::SUB_CLASS_OF,
            Role::SubPropertyOf => daml_oil::SUB_PROPERTY_OF,
            Role::Domain => daml_oil::DOMAIN,
            Role::Range => daml_oil::RANGE,
            Role::First => daml_oil::FIRST,
            Role::Rest => daml_oil::REST,
            Role::Label => rdfs::LABEL,
            Role::Comment => rdfs::COMMENT,
            Role::SeeAlso => rdfs::SEE_ALSO,
            Role::IsDefinedBy => rdfs::IS_DEFINED_BY,
            Role::SymmetricProperty
            | Role::AllDifferent
            | Role::DeprecatedClass
            | Role::DeprecatedProperty
            | Role::AnnotationProperty
            | Role::OntologyProperty
            | Role::DataRange
            | Role::DistinctMembers
            | Role::PriorVersion
            | Role::BackwardCompatibleWith
            | Role::IncompatibleWith => return None,
        })
    }

    fn aliases(&self) -> &'static [(NamedNodeRef<'static>, NamedNodeRef<'static>)] {
        ALIASES
    }

    fn axiom_types(&self) -> &'static [NamedNodeRef<'static>] {
        &[]
    }

    fn annotation_properties(&self) -> &'static [NamedNodeRef<'static>] {
        &[]
    }

    fn class_description_types(&self) -> &'static [NamedNodeRef<'static>] {
        CLASS_DESCRIPTION_TYPES
    }

    fn check(&self, node: NamedOrBlankNodeRef<'_>, graph: &OntGraph, facet: FacetKind) -> bool {
        match facet {
            FacetKind::OntClass => graph.has_any_type(node, CLASS_DESCRIPTION_TYPES),
            FacetKind::DatatypeProperty => graph.has_type(node, daml_oil::DATATYPE_PROPERTY),
            FacetKind::ObjectProperty => graph.has_type(node, daml_oil::OBJECT_PROPERTY),
            FacetKind::FunctionalProperty => graph.has_type(node, daml_oil::UNIQUE_PROPERTY),
            FacetKind::InverseFunctionalProperty => {
                graph.has_type(node, daml_oil::UNAMBIGUOUS_PROPERTY)
            }
            FacetKind::List => {
                node == NamedOrBlankNodeRef::from(daml_oil::NIL)
                    || graph.has_type(node, daml_oil::LIST)
            }
            FacetKind::Ontology => graph.has_type(node, daml_oil::ONTOLOGY),
            FacetKind::OntProperty => graph.has_any_type(
                node,
                &[
                    rdf::PROPERTY,
                    daml_oil::PROPERTY,
                    daml_oil::OBJECT_PROPERTY,
                    daml_oil::DATATYPE_PROPERTY,
                ],
            ),
            FacetKind::Restriction => graph.has_type(node, daml_oil::RESTRICTION),
            FacetKind::HasValueRestriction => {
                is_restriction_on(node, graph, &[daml_oil::HAS_VALUE])
            }
            FacetKind::AllValuesFromRestriction => {
                is_restriction_on(node, graph, &[daml_oil::TO_CLASS])
            }
            FacetKind::SomeValuesFromRestriction => {
                is_restriction_on(node, graph, &[daml_oil::HAS_CLASS])
            }
            FacetKind::CardinalityRestriction => {
                is_restriction_on(node, graph, &[daml_oil::CARDINALITY])
            }
            FacetKind::MinCardinalityRestriction => {
                is_restriction_on(node, graph, &[daml_oil::MIN_CARDINALITY])
            }
            FacetKind::MaxCardinalityRestriction => {
                is_restriction_on(node, graph, &[daml_oil::MAX_CARDINALITY])
            }
            FacetKind::QualifiedRestriction => {
                is_restriction_on(node, graph, &[daml_oil::HAS_CLASS_Q])
            }
            FacetKind::CardinalityQRestriction => {
                is_restriction_on(node, graph, &[daml_oil::HAS_CLASS_Q, daml_oil::CARDINALITY_Q])
            }
            FacetKind::MinCardinalityQRestriction => is_restriction_on(
                node,
                graph,
                &[daml_oil::HAS_CLASS_Q, daml_oil::MIN_CARDINALITY_Q],
            ),
            FacetKind::MaxCardinalityQRestriction => is_restriction_on(
                node,
                graph,
                &[daml_oil::HAS_CLASS_Q, daml_oil::MAX_CARDINALITY_Q],
            ),
            FacetKind::TransitiveProperty => {
                graph.has_type(node, daml_oil::TRANSITIVE_PROPERTY)
                    && !graph.has_type(node, daml_oil::DATATYPE_PROPERTY)
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{BlankNode, NamedNode, TripleRef};

    #[test]
    fn aliases_are_symmetric() {
        assert_eq!(
            DamlOilProfile.alias_for(daml_oil::SUB_CLASS_OF),
            Some(rdfs::SUB_CLASS_OF)
        );
        assert_eq!(
            DamlOilProfile.alias_for(rdfs::SUB_CLASS_OF),
            Some(daml_oil::SUB_CLASS_OF)
        );
        assert!(!DamlOilProfile.has_alias_for(daml_oil::CLASS));
    }

    #[test]
    fn unchecked_facets_are_supported() {
        let graph = OntGraph::default();
        let x = NamedNode::new_unchecked("http://example.com/x");
        assert!(DamlOilProfile.is_supported(x.as_ref().into(), &graph, FacetKind::Individual, true));
        assert!(!DamlOilProfile.is_supported(
            x.as_ref().into(),
            &graph,
            FacetKind::SymmetricProperty,
            false
        ));
        assert!(!DamlOilProfile.is_supported(x.as_ref().into(), &graph, FacetKind::OntClass, true));
    }

    #[test]
    fn qualified_restriction_check() {
        let mut graph = OntGraph::default();
        let r = BlankNode::default();
        let p = NamedNode::new_unchecked("http://example.com/p");
        let c = NamedNode::new_unchecked("http://example.com/C");
        graph.insert(TripleRef::new(&r, rdf::TYPE, daml_oil::RESTRICTION));
        graph.insert(TripleRef::new(&r, daml_oil::ON_PROPERTY, &p));
        graph.insert(TripleRef::new(&r, daml_oil::HAS_CLASS_Q, &c));
        let node = r.as_ref().into();
        assert!(DamlOilProfile.check(node, &graph, FacetKind::QualifiedRestriction));
        assert!(!DamlOilProfile.check(node, &graph, FacetKind::CardinalityQRestriction));
    }
}
