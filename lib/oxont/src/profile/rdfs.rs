use super::{Profile, Role};
use crate::facet::FacetKind;
use crate::graph::OntGraph;
use crate::vocab::{RDFS_NAMESPACE, rdf, rdfs};
use oxrdf::{NamedNodeRef, NamedOrBlankNodeRef};

/// The RDF Schema profile: classes, properties and their hierarchies, nothing more.
#[derive(Debug, Clone, Copy, Default)]
pub struct RdfsProfile;

const ANNOTATION_PROPERTIES: &[NamedNodeRef<'static>] = &[
    rdfs::LABEL,
    rdfs::SEE_ALSO,
    rdfs::COMMENT,
    rdfs::IS_DEFINED_BY,
];

impl Profile for RdfsProfile {
    fn label(&self) -> &'static str {
        "RDFS"
    }

    fn namespace(&self) -> &'static str {
        RDFS_NAMESPACE
    }

    fn language(&self) -> &'static str {
        RDFS_NAMESPACE
    }

    fn term(&self, role: Role) -> Option<NamedNodeRef<'static>> {
        Some(match role {
            Role::Class => rdfs::CLASS,
            Role::Property => rdf::PROPERTY,
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
            _ => return None,
        })
    }

    fn axiom_types(&self) -> &'static [NamedNodeRef<'static>] {
        &[]
    }

    fn annotation_properties(&self) -> &'static [NamedNodeRef<'static>] {
        ANNOTATION_PROPERTIES
    }

    fn class_description_types(&self) -> &'static [NamedNodeRef<'static>] {
        &[rdfs::CLASS]
    }

    fn check(&self, node: NamedOrBlankNodeRef<'_>, graph: &OntGraph, facet: FacetKind) -> bool {
        let is_class = |node: NamedOrBlankNodeRef<'_>| {
            graph.has_any_type(node, &[rdfs::CLASS, rdfs::DATATYPE])
                || node == NamedOrBlankNodeRef::from(rdfs::RESOURCE)
                || graph.is_value_of(rdfs::DOMAIN, node)
                || graph.is_value_of(rdfs::RANGE, node)
        };
        match facet {
            FacetKind::OntResource => true,
            FacetKind::OntClass => is_class(node),
            FacetKind::OntProperty => graph.has_type(node, rdf::PROPERTY),
            FacetKind::Individual => !is_class(node) && !graph.has_type(node, rdf::PROPERTY),
            FacetKind::List => {
                node == NamedOrBlankNodeRef::from(rdf::NIL)
                    || graph.has_type(node, rdf::LIST)
                    || graph.contains_some(node, rdf::FIRST)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{NamedNode, TripleRef};

    #[test]
    fn only_rdfs_terms() {
        assert_eq!(RdfsProfile.term(Role::SubClassOf), Some(rdfs::SUB_CLASS_OF));
        assert_eq!(RdfsProfile.term(Role::Restriction), None);
        assert!(!RdfsProfile.can_express(FacetKind::Restriction));
        assert!(RdfsProfile.can_express(FacetKind::Individual));
    }

    #[test]
    fn individuals_are_not_classes() {
        let mut graph = OntGraph::default();
        let c = NamedNode::new_unchecked("http://example.com/C");
        let i = NamedNode::new_unchecked("http://example.com/i");
        graph.insert(TripleRef::new(&c, rdf::TYPE, rdfs::CLASS));
        graph.insert(TripleRef::new(&i, rdf::TYPE, &c));
        assert!(RdfsProfile.check(c.as_ref().into(), &graph, FacetKind::OntClass));
        assert!(!RdfsProfile.check(c.as_ref().into(), &graph, FacetKind::Individual));
        assert!(RdfsProfile.check(i.as_ref().into(), &graph, FacetKind::Individual));
    }
}
