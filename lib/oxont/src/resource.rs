use crate::class::OntClass;
use crate::error::{ConversionError, OntError};
use crate::facet::Facet;
use crate::graph::{direct_downward, direct_upward, term_to_resource};
use crate::individual::{AllDifferent, DataRange, Individual, Ontology};
use crate::list::{
    OntList, build_list, list_remove_value, list_values, list_with, remove_list_cells,
};
use crate::model::{ModelState, OntModel};
use crate::profile::{Role, is_language_term};
use crate::property::{AnnotationProperty, DatatypeProperty, ObjectProperty, OntProperty};
use crate::vocab::rdf;
use oxrdf::{
    BlankNode, BlankNodeRef, Literal, NamedNode, NamedNodeRef, NamedOrBlankNode,
    NamedOrBlankNodeRef, Term, TermRef, TripleRef,
};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Something denoting an RDF resource: a named node, a blank node or an ontology resource view.
pub trait AsNode {
    fn as_node(&self) -> NamedOrBlankNodeRef<'_>;
}

impl<T: Facet> AsNode for T {
    #[inline]
    fn as_node(&self) -> NamedOrBlankNodeRef<'_> {
        self.resource().node.as_ref()
    }
}

impl AsNode for NamedNode {
    #[inline]
    fn as_node(&self) -> NamedOrBlankNodeRef<'_> {
        self.as_ref().into()
    }
}

impl AsNode for NamedNodeRef<'_> {
    #[inline]
    fn as_node(&self) -> NamedOrBlankNodeRef<'_> {
        (*self).into()
    }
}

impl AsNode for BlankNode {
    #[inline]
    fn as_node(&self) -> NamedOrBlankNodeRef<'_> {
        self.as_ref().into()
    }
}

impl AsNode for BlankNodeRef<'_> {
    #[inline]
    fn as_node(&self) -> NamedOrBlankNodeRef<'_> {
        (*self).into()
    }
}

impl AsNode for NamedOrBlankNode {
    #[inline]
    fn as_node(&self) -> NamedOrBlankNodeRef<'_> {
        self.as_ref()
    }
}

impl AsNode for NamedOrBlankNodeRef<'_> {
    #[inline]
    fn as_node(&self) -> NamedOrBlankNodeRef<'_> {
        *self
    }
}

/// A resource of an [`OntModel`], the root of all the ontology views.
///
/// It is a handle: it keeps the model alive and every operation reads or writes the model graph.
///
/// ```
/// use oxont::OntModel;
///
/// let model = OntModel::default();
/// let class = model.create_class(Some("http://example.com/Dog"))?;
/// class.add_label("dog", Some("en"))?;
/// class.add_label("chien", Some("fr"))?;
/// assert_eq!(class.label(Some("fr"))?.as_deref(), Some("chien"));
/// assert_eq!(class.list_labels(None)?.len(), 2);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone)]
pub struct OntResource {
    model: OntModel,
    node: NamedOrBlankNode,
}

impl OntResource {
    pub(crate) fn new(model: OntModel, node: NamedOrBlankNode) -> Self {
        Self { model, node }
    }

    /// The model the resource belongs to.
    #[inline]
    pub fn model(&self) -> &OntModel {
        &self.model
    }

    #[inline]
    pub fn node(&self) -> &NamedOrBlankNode {
        &self.node
    }

    /// The resource IRI, `None` for blank nodes.
    #[inline]
    pub fn iri(&self) -> Option<&str> {
        match &self.node {
            NamedOrBlankNode::NamedNode(node) => Some(node.as_str()),
            NamedOrBlankNode::BlankNode(_) => None,
        }
    }

    #[inline]
    pub fn is_anon(&self) -> bool {
        self.node.is_blank_node()
    }

    /// Views this resource as `T`.
    ///
    /// Fails with a [`ConversionError`] if the model profile does not allow the view.
    pub fn view<T: Facet>(&self) -> Result<T, OntError> {
        if self.model.read()?.can_wrap(self.node.as_ref(), T::KIND) {
            Ok(T::wrap(self.clone()))
        } else {
            Err(ConversionError::new(&self.node, T::KIND).into())
        }
    }

    /// Checks if the resource can be viewed as `T`.
    pub fn can_view<T: Facet>(&self) -> Result<bool, OntError> {
        Ok(self.model.read()?.can_wrap(self.node.as_ref(), T::KIND))
    }

    pub(crate) fn wrap_views<T: Facet>(
        &self,
        state: &ModelState,
        nodes: impl IntoIterator<Item = NamedOrBlankNode>,
    ) -> Vec<T> {
        self.model.views(state, nodes)
    }

    /// The resources that are values of the profile term of `role`. Empty if the role is not in the language.
    pub(crate) fn role_resources(&self, state: &ModelState, role: Role) -> Vec<NamedOrBlankNode> {
        let Some(property) = state.term(role) else {
            return Vec::new();
        };
        state
            .graph
            .objects(self.node.as_ref(), property)
            .iter()
            .filter_map(|t| term_to_resource(t.as_ref()))
            .collect()
    }

    /// The values of the role seen as `T`.
    pub(crate) fn role_views<T: Facet>(&self, role: Role) -> Result<Vec<T>, OntError> {
        let state = self.model.read()?;
        let nodes = self.role_resources(&state, role);
        Ok(self.wrap_views(&state, nodes))
    }

    pub(crate) fn role_view<T: Facet>(&self, role: Role) -> Result<Option<T>, OntError> {
        Ok(self.role_views(role)?.into_iter().next())
    }

    pub(crate) fn role_values(&self, role: Role) -> Result<Vec<Term>, OntError> {
        let state = self.model.read()?;
        Ok(match state.term(role) {
            Some(property) => state.graph.objects(self.node.as_ref(), property),
            None => Vec::new(),
        })
    }

    /// Replaces all the values of `role` with `value`.
    pub(crate) fn set_role<'a>(
        &self,
        role: Role,
        value: impl Into<TermRef<'a>>,
    ) -> Result<(), OntError> {
        let mut state = self.model.write()?;
        let property = state.require(role)?;
        state.graph.remove_values(self.node.as_ref(), property);
        state
            .graph
            .insert(TripleRef::new(&self.node, property, value.into()));
        Ok(())
    }

    pub(crate) fn add_role<'a>(
        &self,
        role: Role,
        value: impl Into<TermRef<'a>>,
    ) -> Result<(), OntError> {
        let mut state = self.model.write()?;
        let property = state.require(role)?;
        state
            .graph
            .insert(TripleRef::new(&self.node, property, value.into()));
        Ok(())
    }

    pub(crate) fn has_role<'a>(
        &self,
        role: Role,
        value: impl Into<TermRef<'a>>,
    ) -> Result<bool, OntError> {
        let state = self.model.read()?;
        Ok(state.term(role).is_some_and(|property| {
            state
                .graph
                .contains(TripleRef::new(&self.node, property, value.into()))
        }))
    }

    /// Checks if the resource has at least one value for `role`.
    pub(crate) fn has_any_role(&self, role: Role) -> Result<bool, OntError> {
        let state = self.model.read()?;
        Ok(state
            .term(role)
            .is_some_and(|property| state.graph.contains_some(self.node.as_ref(), property)))
    }

    /// Removes one value of `role`. Nothing happens if the role is not in the language.
    pub(crate) fn remove_role<'a>(
        &self,
        role: Role,
        value: impl Into<TermRef<'a>>,
    ) -> Result<(), OntError> {
        let mut state = self.model.write()?;
        if let Some(property) = state.term(role) {
            state
                .graph
                .remove(TripleRef::new(&self.node, property, value.into()));
        }
        Ok(())
    }

    /// Removes all the values of `role`.
    pub(crate) fn remove_all_role(&self, role: Role) -> Result<(), OntError> {
        let mut state = self.model.write()?;
        if let Some(property) = state.term(role) {
            state.graph.remove_values(self.node.as_ref(), property);
        }
        Ok(())
    }

    pub(crate) fn role_list(&self, role: Role) -> Result<Option<OntList>, OntError> {
        let state = self.model.read()?;
        Ok(self
            .role_resources(&state, role)
            .into_iter()
            .next()
            .map(|node| OntList::new(self.model.clone(), node)))
    }

    /// The values of the list held by `role`.
    pub(crate) fn role_list_values(&self, role: Role) -> Result<Vec<Term>, OntError> {
        let state = self.model.read()?;
        match self.role_resources(&state, role).into_iter().next() {
            Some(head) => list_values(&state, head.as_ref()),
            None => Ok(Vec::new()),
        }
    }

    pub(crate) fn role_list_views<T: Facet>(&self, role: Role) -> Result<Vec<T>, OntError> {
        let values = self.role_list_values(role)?;
        let state = self.model.read()?;
        let nodes = values
            .iter()
            .filter_map(|t| term_to_resource(t.as_ref()));
        Ok(self.wrap_views(&state, nodes))
    }

    /// Adds a value at the end of the list held by `role`, creating the list if needed.
    pub(crate) fn add_role_list_value(&self, role: Role, value: Term) -> Result<(), OntError> {
        let mut state = self.model.write()?;
        let property = state.require(role)?;
        let head = self.role_resources(&state, role).into_iter().next();
        let new_head = match &head {
            Some(head) => list_with(&mut state, head.as_ref(), value)?,
            None => build_list(&mut state, vec![value])?,
        };
        if head.as_ref() != Some(&new_head) {
            state.graph.remove_values(self.node.as_ref(), property);
            state
                .graph
                .insert(TripleRef::new(&self.node, property, &new_head));
        }
        Ok(())
    }

    pub(crate) fn remove_role_list_value(
        &self,
        role: Role,
        value: TermRef<'_>,
    ) -> Result<(), OntError> {
        let mut state = self.model.write()?;
        let Some(property) = state.term(role) else {
            return Ok(());
        };
        let Some(head) = self.role_resources(&state, role).into_iter().next() else {
            return Ok(());
        };
        let new_head = list_remove_value(&mut state, head.as_ref(), value)?;
        if new_head != head {
            state.graph.remove_values(self.node.as_ref(), property);
            state
                .graph
                .insert(TripleRef::new(&self.node, property, &new_head));
        }
        Ok(())
    }

    /// The resources having this resource as value of `role`.
    pub(crate) fn role_subjects(&self, state: &ModelState, role: Role) -> Vec<NamedOrBlankNode> {
        match state.term(role) {
            Some(property) => state.graph.subjects(property, &self.node),
            None => Vec::new(),
        }
    }

    /// Replaces the resources pointing to this one through `role` with `subject`.
    pub(crate) fn set_role_subject(
        &self,
        role: Role,
        subject: NamedOrBlankNodeRef<'_>,
    ) -> Result<(), OntError> {
        let mut state = self.model.write()?;
        let property = state.require(role)?;
        for previous in self.role_subjects(&state, role) {
            state
                .graph
                .remove(TripleRef::new(&previous, property, &self.node));
        }
        state
            .graph
            .insert(TripleRef::new(subject, property, &self.node));
        Ok(())
    }

    pub(crate) fn add_role_subject(
        &self,
        role: Role,
        subject: NamedOrBlankNodeRef<'_>,
    ) -> Result<(), OntError> {
        let mut state = self.model.write()?;
        let property = state.require(role)?;
        state
            .graph
            .insert(TripleRef::new(subject, property, &self.node));
        Ok(())
    }

    pub(crate) fn remove_role_subject(
        &self,
        role: Role,
        subject: NamedOrBlankNodeRef<'_>,
    ) -> Result<(), OntError> {
        let mut state = self.model.write()?;
        if let Some(property) = state.term(role) {
            state
                .graph
                .remove(TripleRef::new(subject, property, &self.node));
        }
        Ok(())
    }

    /// The other ends of the `role` relation, following it forward if `upward` is set and backward otherwise.
    ///
    /// With `direct`, a candidate is dropped when another candidate lies strictly between it and this resource.
    pub(crate) fn hierarchy_nodes(
        &self,
        state: &ModelState,
        role: Role,
        upward: bool,
        direct: bool,
    ) -> Vec<NamedOrBlankNode> {
        let Some(property) = state.term(role) else {
            return Vec::new();
        };
        let mut nodes = if upward {
            self.role_resources(state, role)
        } else {
            self.role_subjects(state, role)
        };
        nodes.retain(|n| *n != self.node);
        match (direct, upward) {
            (false, _) => nodes,
            (true, true) => direct_upward(&state.graph, nodes, property),
            (true, false) => direct_downward(&state.graph, nodes, property),
        }
    }

    pub(crate) fn hierarchy<T: Facet>(
        &self,
        role: Role,
        upward: bool,
        direct: bool,
    ) -> Result<Vec<T>, OntError> {
        let state = self.model.read()?;
        let nodes = self.hierarchy_nodes(&state, role, upward, direct);
        Ok(self.wrap_views(&state, nodes))
    }

    /// Checks if `other` is at the other end of the `role` relation.
    ///
    /// Without `direct` only the asserted triple is looked for.
    pub(crate) fn in_hierarchy(
        &self,
        other: NamedOrBlankNodeRef<'_>,
        role: Role,
        upward: bool,
        direct: bool,
    ) -> Result<bool, OntError> {
        let state = self.model.read()?;
        if direct {
            return Ok(self
                .hierarchy_nodes(&state, role, upward, true)
                .iter()
                .any(|n| n.as_ref() == other));
        }
        let Some(property) = state.term(role) else {
            return Ok(false);
        };
        Ok(if upward {
            state
                .graph
                .contains(TripleRef::new(&self.node, property, other))
        } else {
            state
                .graph
                .contains(TripleRef::new(other, property, &self.node))
        })
    }

    pub(crate) fn string_values(&self, role: Role) -> Result<Vec<String>, OntError> {
        Ok(self
            .role_values(role)?
            .into_iter()
            .filter_map(|t| match t {
                Term::Literal(l) => Some(l.value().to_owned()),
                _ => None,
            })
            .collect())
    }

    // sameAs

    pub fn set_same_as(&self, resource: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::SameAs, resource.as_node())
    }

    pub fn add_same_as(&self, resource: &impl AsNode) -> Result<(), OntError> {
        self.add_role(Role::SameAs, resource.as_node())
    }

    pub fn same_as(&self) -> Result<Option<OntResource>, OntError> {
        self.role_view(Role::SameAs)
    }

    pub fn list_same_as(&self) -> Result<Vec<OntResource>, OntError> {
        self.role_views(Role::SameAs)
    }

    pub fn is_same_as(&self, resource: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::SameAs, resource.as_node())
    }

    pub fn remove_same_as(&self, resource: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::SameAs, resource.as_node())
    }

    // differentFrom

    pub fn set_different_from(&self, resource: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::DifferentFrom, resource.as_node())
    }

    pub fn add_different_from(&self, resource: &impl AsNode) -> Result<(), OntError> {
        self.add_role(Role::DifferentFrom, resource.as_node())
    }

    pub fn different_from(&self) -> Result<Option<OntResource>, OntError> {
        self.role_view(Role::DifferentFrom)
    }

    pub fn list_different_from(&self) -> Result<Vec<OntResource>, OntError> {
        self.role_views(Role::DifferentFrom)
    }

    pub fn is_different_from(&self, resource: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::DifferentFrom, resource.as_node())
    }

    pub fn remove_different_from(&self, resource: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::DifferentFrom, resource.as_node())
    }

    // seeAlso

    pub fn set_see_also(&self, resource: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::SeeAlso, resource.as_node())
    }

    pub fn add_see_also(&self, resource: &impl AsNode) -> Result<(), OntError> {
        self.add_role(Role::SeeAlso, resource.as_node())
    }

    pub fn see_also(&self) -> Result<Option<OntResource>, OntError> {
        self.role_view(Role::SeeAlso)
    }

    pub fn list_see_also(&self) -> Result<Vec<OntResource>, OntError> {
        self.role_views(Role::SeeAlso)
    }

    pub fn has_see_also(&self, resource: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::SeeAlso, resource.as_node())
    }

    pub fn remove_see_also(&self, resource: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::SeeAlso, resource.as_node())
    }

    // isDefinedBy

    pub fn set_is_defined_by(&self, resource: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::IsDefinedBy, resource.as_node())
    }

    pub fn add_is_defined_by(&self, resource: &impl AsNode) -> Result<(), OntError> {
        self.add_role(Role::IsDefinedBy, resource.as_node())
    }

    pub fn is_defined_by(&self) -> Result<Option<OntResource>, OntError> {
        self.role_view(Role::IsDefinedBy)
    }

    pub fn list_is_defined_by(&self) -> Result<Vec<OntResource>, OntError> {
        self.role_views(Role::IsDefinedBy)
    }

    pub fn has_is_defined_by(&self, resource: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::IsDefinedBy, resource.as_node())
    }

    pub fn remove_is_defined_by(&self, resource: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::IsDefinedBy, resource.as_node())
    }

    // versionInfo

    pub fn set_version_info(&self, info: &str) -> Result<(), OntError> {
        self.set_role(Role::VersionInfo, &Literal::new_simple_literal(info))
    }

    pub fn add_version_info(&self, info: &str) -> Result<(), OntError> {
        self.add_role(Role::VersionInfo, &Literal::new_simple_literal(info))
    }

    pub fn version_info(&self) -> Result<Option<String>, OntError> {
        Ok(self.string_values(Role::VersionInfo)?.into_iter().next())
    }

    pub fn list_version_info(&self) -> Result<Vec<String>, OntError> {
        self.string_values(Role::VersionInfo)
    }

    pub fn has_version_info(&self, info: &str) -> Result<bool, OntError> {
        Ok(self.list_version_info()?.iter().any(|i| i == info))
    }

    pub fn remove_version_info(&self, info: &str) -> Result<(), OntError> {
        self.remove_role(Role::VersionInfo, &Literal::new_simple_literal(info))
    }

    // label and comment

    fn text_values(&self, role: Role, language: Option<&str>) -> Result<Vec<Literal>, OntError> {
        Ok(self
            .role_values(role)?
            .into_iter()
            .filter_map(|t| match t {
                Term::Literal(l) => Some(l),
                _ => None,
            })
            .filter(|l| language.is_none_or(|lang| language_matches(l.language(), lang)))
            .collect())
    }

    /// The best value for the language: an exact match first, then a value in a sub-language.
    fn text_value(&self, role: Role, language: Option<&str>) -> Result<Option<String>, OntError> {
        let values = self.text_values(role, language)?;
        let exact = language.and_then(|lang| {
            values
                .iter()
                .find(|l| l.language().is_some_and(|l| l.eq_ignore_ascii_case(lang)))
        });
        Ok(exact.or(values.first()).map(|l| l.value().to_owned()))
    }

    fn has_text(&self, role: Role, text: &str, language: Option<&str>) -> Result<bool, OntError> {
        Ok(self
            .role_values(role)?
            .iter()
            .any(|t| is_text(t, text, language)))
    }

    fn remove_text(&self, role: Role, text: &str, language: Option<&str>) -> Result<(), OntError> {
        let mut state = self.model.write()?;
        let Some(property) = state.term(role) else {
            return Ok(());
        };
        let matching = state
            .graph
            .objects(self.node.as_ref(), property)
            .into_iter()
            .filter(|t| is_text(t, text, language))
            .collect::<Vec<_>>();
        for value in &matching {
            state
                .graph
                .remove(TripleRef::new(&self.node, property, value));
        }
        Ok(())
    }

    pub fn set_label(&self, label: &str, language: Option<&str>) -> Result<(), OntError> {
        self.set_role(Role::Label, &text_literal(label, language)?)
    }

    pub fn add_label(&self, label: &str, language: Option<&str>) -> Result<(), OntError> {
        self.add_role(Role::Label, &text_literal(label, language)?)
    }

    /// The label for the given language. Any label if `language` is `None`.
    pub fn label(&self, language: Option<&str>) -> Result<Option<String>, OntError> {
        self.text_value(Role::Label, language)
    }

    pub fn list_labels(&self, language: Option<&str>) -> Result<Vec<Literal>, OntError> {
        self.text_values(Role::Label, language)
    }

    pub fn has_label(&self, label: &str, language: Option<&str>) -> Result<bool, OntError> {
        self.has_text(Role::Label, label, language)
    }

    pub fn remove_label(&self, label: &str, language: Option<&str>) -> Result<(), OntError> {
        self.remove_text(Role::Label, label, language)
    }

    pub fn set_comment(&self, comment: &str, language: Option<&str>) -> Result<(), OntError> {
        self.set_role(Role::Comment, &text_literal(comment, language)?)
    }

    pub fn add_comment(&self, comment: &str, language: Option<&str>) -> Result<(), OntError> {
        self.add_role(Role::Comment, &text_literal(comment, language)?)
    }

    pub fn comment(&self, language: Option<&str>) -> Result<Option<String>, OntError> {
        self.text_value(Role::Comment, language)
    }

    pub fn list_comments(&self, language: Option<&str>) -> Result<Vec<Literal>, OntError> {
        self.text_values(Role::Comment, language)
    }

    pub fn has_comment(&self, comment: &str, language: Option<&str>) -> Result<bool, OntError> {
        self.has_text(Role::Comment, comment, language)
    }

    pub fn remove_comment(&self, comment: &str, language: Option<&str>) -> Result<(), OntError> {
        self.remove_text(Role::Comment, comment, language)
    }

    // rdf:type

    pub fn set_rdf_type(&self, class: &impl AsNode) -> Result<(), OntError> {
        let mut state = self.model.write()?;
        state.graph.remove_values(self.node.as_ref(), rdf::TYPE);
        state
            .graph
            .insert(TripleRef::new(&self.node, rdf::TYPE, class.as_node()));
        Ok(())
    }

    pub fn add_rdf_type(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.model
            .write()?
            .graph
            .insert(TripleRef::new(&self.node, rdf::TYPE, class.as_node()));
        Ok(())
    }

    /// The types of the resource. If `direct` is set, a type that is a super-class of another type is skipped.
    pub fn list_rdf_types(&self, direct: bool) -> Result<Vec<OntResource>, OntError> {
        let state = self.model.read()?;
        let types = self.rdf_type_nodes(&state, direct);
        Ok(types
            .into_iter()
            .map(|node| self.model.resource(node))
            .collect())
    }

    pub(crate) fn rdf_type_nodes(&self, state: &ModelState, direct: bool) -> Vec<NamedOrBlankNode> {
        types_of(state, self.node.as_ref(), direct)
    }

    pub fn rdf_type(&self, direct: bool) -> Result<Option<OntResource>, OntError> {
        Ok(self.list_rdf_types(direct)?.into_iter().next())
    }

    pub fn has_rdf_type(&self, class: &impl AsNode, direct: bool) -> Result<bool, OntError> {
        let state = self.model.read()?;
        let class = class.as_node();
        Ok(self
            .rdf_type_nodes(&state, direct)
            .iter()
            .any(|t| t.as_ref() == class))
    }

    pub fn remove_rdf_type(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.model
            .write()?
            .graph
            .remove(TripleRef::new(&self.node, rdf::TYPE, class.as_node()));
        Ok(())
    }

    // generic property access

    /// Number of values of the property.
    pub fn cardinality(&self, property: NamedNodeRef<'_>) -> Result<usize, OntError> {
        Ok(self
            .model
            .read()?
            .graph
            .objects(self.node.as_ref(), property)
            .len())
    }

    /// Replaces all the values of the property.
    pub fn set_property_value(
        &self,
        property: NamedNodeRef<'_>,
        value: impl Into<Term>,
    ) -> Result<(), OntError> {
        let value = value.into();
        let mut state = self.model.write()?;
        state.graph.remove_values(self.node.as_ref(), property);
        state
            .graph
            .insert(TripleRef::new(&self.node, property, &value));
        Ok(())
    }

    pub fn add_property_value(
        &self,
        property: NamedNodeRef<'_>,
        value: impl Into<Term>,
    ) -> Result<(), OntError> {
        let value = value.into();
        self.model
            .write()?
            .graph
            .insert(TripleRef::new(&self.node, property, &value));
        Ok(())
    }

    pub fn property_value(&self, property: NamedNodeRef<'_>) -> Result<Option<Term>, OntError> {
        Ok(self
            .model
            .read()?
            .graph
            .object(self.node.as_ref(), property))
    }

    pub fn list_property_values(&self, property: NamedNodeRef<'_>) -> Result<Vec<Term>, OntError> {
        Ok(self
            .model
            .read()?
            .graph
            .objects(self.node.as_ref(), property))
    }

    pub fn has_property_value<'a>(
        &self,
        property: NamedNodeRef<'_>,
        value: impl Into<TermRef<'a>>,
    ) -> Result<bool, OntError> {
        Ok(self
            .model
            .read()?
            .graph
            .contains(TripleRef::new(self.node.as_ref(), property, value.into())))
    }

    /// Removes one value of the property.
    pub fn remove_property<'a>(
        &self,
        property: NamedNodeRef<'_>,
        value: impl Into<TermRef<'a>>,
    ) -> Result<(), OntError> {
        self.model
            .write()?
            .graph
            .remove(TripleRef::new(self.node.as_ref(), property, value.into()));
        Ok(())
    }

    /// Removes all the values of the property.
    pub fn remove_all(&self, property: NamedNodeRef<'_>) -> Result<(), OntError> {
        self.model
            .write()?
            .graph
            .remove_values(self.node.as_ref(), property);
        Ok(())
    }

    /// Removes every triple mentioning this resource, and the lists it owns
    /// (the values of `unionOf`, `intersectionOf`, `oneOf` and `distinctMembers`).
    pub fn remove(&self) -> Result<(), OntError> {
        let mut state = self.model.write()?;
        let lists = [
            Role::UnionOf,
            Role::IntersectionOf,
            Role::OneOf,
            Role::DistinctMembers,
        ]
        .into_iter()
        .flat_map(|role| self.role_resources(&state, role))
        .collect::<Vec<_>>();
        for list in lists {
            remove_list_cells(&mut state, list.as_ref());
        }
        state.graph.remove_subject(self.node.as_ref());
        state.graph.remove_object(self.node.as_ref());
        Ok(())
    }

    /// Checks if the resource is a term of a language vocabulary (RDF, RDFS, XSD, OWL or DAML+OIL).
    pub fn is_ont_language_term(&self) -> bool {
        is_language_term(self.node.as_ref())
    }

    // views

    pub fn as_class(&self) -> Result<OntClass, OntError> {
        self.view()
    }

    pub fn is_class(&self) -> Result<bool, OntError> {
        self.can_view::<OntClass>()
    }

    pub fn as_property(&self) -> Result<OntProperty, OntError> {
        self.view()
    }

    pub fn is_property(&self) -> Result<bool, OntError> {
        self.can_view::<OntProperty>()
    }

    pub fn as_object_property(&self) -> Result<ObjectProperty, OntError> {
        self.view()
    }

    pub fn is_object_property(&self) -> Result<bool, OntError> {
        self.can_view::<ObjectProperty>()
    }

    pub fn as_datatype_property(&self) -> Result<DatatypeProperty, OntError> {
        self.view()
    }

    pub fn is_datatype_property(&self) -> Result<bool, OntError> {
        self.can_view::<DatatypeProperty>()
    }

    pub fn as_annotation_property(&self) -> Result<AnnotationProperty, OntError> {
        self.view()
    }

    pub fn is_annotation_property(&self) -> Result<bool, OntError> {
        self.can_view::<AnnotationProperty>()
    }

    pub fn as_individual(&self) -> Result<Individual, OntError> {
        self.view()
    }

    pub fn is_individual(&self) -> Result<bool, OntError> {
        self.can_view::<Individual>()
    }

    pub fn as_ontology(&self) -> Result<Ontology, OntError> {
        self.view()
    }

    pub fn is_ontology(&self) -> Result<bool, OntError> {
        self.can_view::<Ontology>()
    }

    pub fn as_all_different(&self) -> Result<AllDifferent, OntError> {
        self.view()
    }

    pub fn is_all_different(&self) -> Result<bool, OntError> {
        self.can_view::<AllDifferent>()
    }

    pub fn as_data_range(&self) -> Result<DataRange, OntError> {
        self.view()
    }

    pub fn is_data_range(&self) -> Result<bool, OntError> {
        self.can_view::<DataRange>()
    }

    pub fn as_list(&self) -> Result<OntList, OntError> {
        self.view()
    }

    pub fn is_list(&self) -> Result<bool, OntError> {
        self.can_view::<OntList>()
    }
}

impl Facet for OntResource {
    const KIND: crate::facet::FacetKind = crate::facet::FacetKind::OntResource;

    #[inline]
    fn wrap(resource: OntResource) -> Self {
        resource
    }

    #[inline]
    fn resource(&self) -> &OntResource {
        self
    }
}

impl PartialEq for OntResource {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.model.ptr_eq(&other.model)
    }
}

impl Eq for OntResource {}

impl Hash for OntResource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state)
    }
}

impl fmt::Debug for OntResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OntResource").field(&self.node).finish()
    }
}

impl fmt::Display for OntResource {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node.fmt(f)
    }
}

impl From<OntResource> for NamedOrBlankNode {
    #[inline]
    fn from(resource: OntResource) -> Self {
        resource.node
    }
}

impl From<OntResource> for Term {
    #[inline]
    fn from(resource: OntResource) -> Self {
        resource.node.into()
    }
}

/// The types of `node`. With `direct`, the types that are super-classes of another type are dropped.
pub(crate) fn types_of(
    state: &ModelState,
    node: NamedOrBlankNodeRef<'_>,
    direct: bool,
) -> Vec<NamedOrBlankNode> {
    let types = state
        .graph
        .types(node)
        .iter()
        .filter_map(|t| term_to_resource(t.as_ref()))
        .collect::<Vec<_>>();
    match (direct, state.term(Role::SubClassOf)) {
        (true, Some(sub_class_of)) => direct_upward(&state.graph, types, sub_class_of),
        _ => types,
    }
}

fn text_literal(text: &str, language: Option<&str>) -> Result<Literal, OntError> {
    Ok(match language {
        Some(language) => Literal::new_language_tagged_literal(text, language)?,
        None => Literal::new_simple_literal(text),
    })
}

/// `en` matches `en` and `en-GB`.
fn language_matches(tag: Option<&str>, language: &str) -> bool {
    let Some(tag) = tag else {
        return language.is_empty();
    };
    tag.eq_ignore_ascii_case(language)
        || tag
            .get(..language.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(language))
            && tag[language.len()..].starts_with('-')
}

fn is_text(term: &Term, text: &str, language: Option<&str>) -> bool {
    matches!(term, Term::Literal(l) if l.value() == text && same_language(l.language(), language))
}

fn same_language(tag: Option<&str>, language: Option<&str>) -> bool {
    match (tag, language) {
        (None, None) => true,
        (Some(tag), Some(language)) => tag.eq_ignore_ascii_case(language),
        _ => false,
    }
}
