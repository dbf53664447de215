use crate::class::{
    ComplementClass, EnumeratedClass, IntersectionClass, OntClass, UnionClass,
};
use crate::document::OntDocumentManager;
use crate::error::{ConversionError, CorruptionError, OntError};
use crate::facet::{Facet, FacetKind, can_wrap};
use crate::graph::{OntGraph, subject_to_resource, term_to_named_node, term_to_resource};
use crate::individual::{AllDifferent, DataRange, Individual, Ontology};
use crate::list::{OntList, build_list, list_heads};
use crate::profile::{OntLanguage, Profile, Role};
use crate::property::{
    AnnotationProperty, DatatypeProperty, FunctionalProperty, InverseFunctionalProperty,
    ObjectProperty, OntProperty, PROPERTY_ROLES, SymmetricProperty, TransitiveProperty,
};
use crate::resource::{AsNode, OntResource};
use crate::restriction::{
    AllValuesFromRestriction, CardinalityQRestriction, CardinalityRestriction,
    HasValueRestriction, MaxCardinalityQRestriction, MaxCardinalityRestriction,
    MinCardinalityQRestriction, MinCardinalityRestriction, Restriction,
    SomeValuesFromRestriction, cardinality_literal, check_cardinality,
};
use crate::vocab::rdf;
use oxrdf::{
    BlankNode, Graph, NamedNode, NamedNodeRef, NamedOrBlankNode, NamedOrBlankNodeRef, Term,
    Triple, TripleRef,
};
use oxrdfio::{RdfFormat, RdfParser, RdfSerializer};
use std::fmt;
use std::io::{Read, Write};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The configuration of an [`OntModel`]: its language and whether strict checking is enabled.
///
/// ```
/// use oxont::{OntLanguage, OntModelSpec};
///
/// assert_eq!(OntModelSpec::OWL_LITE_MEM.language(), OntLanguage::OwlLite);
/// assert!(!OntModelSpec::RDFS_MEM.with_strict_mode(false).strict_mode());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OntModelSpec {
    language: OntLanguage,
    strict: bool,
}

impl OntModelSpec {
    /// In-memory OWL Full model.
    pub const OWL_MEM: Self = Self::new(OntLanguage::Owl);
    /// In-memory OWL DL model.
    pub const OWL_DL_MEM: Self = Self::new(OntLanguage::OwlDl);
    /// In-memory OWL Lite model.
    pub const OWL_LITE_MEM: Self = Self::new(OntLanguage::OwlLite);
    /// In-memory DAML+OIL model.
    pub const DAML_MEM: Self = Self::new(OntLanguage::DamlOil);
    /// In-memory RDFS model.
    pub const RDFS_MEM: Self = Self::new(OntLanguage::Rdfs);

    /// A spec for the given language, with strict checking enabled.
    #[inline]
    pub const fn new(language: OntLanguage) -> Self {
        Self {
            language,
            strict: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_strict_mode(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[inline]
    pub const fn language(&self) -> OntLanguage {
        self.language
    }

    #[inline]
    pub fn profile(&self) -> &'static dyn Profile {
        self.language.profile()
    }

    #[inline]
    pub const fn strict_mode(&self) -> bool {
        self.strict
    }
}

impl Default for OntModelSpec {
    #[inline]
    fn default() -> Self {
        Self::OWL_MEM
    }
}

impl From<OntLanguage> for OntModelSpec {
    #[inline]
    fn from(language: OntLanguage) -> Self {
        Self::new(language)
    }
}

/// The state shared by all the handles of a model.
pub(crate) struct ModelState {
    pub(crate) graph: OntGraph,
    pub(crate) profile: &'static dyn Profile,
    pub(crate) strict: bool,
    loaded_imports: Vec<String>,
}

impl ModelState {
    #[inline]
    pub(crate) fn term(&self, role: Role) -> Option<NamedNodeRef<'static>> {
        self.profile.term(role)
    }

    #[inline]
    pub(crate) fn require(&self, role: Role) -> Result<NamedNodeRef<'static>, OntError> {
        Ok(self.profile.require(role)?)
    }

    #[inline]
    pub(crate) fn can_wrap(&self, node: NamedOrBlankNodeRef<'_>, kind: FacetKind) -> bool {
        can_wrap(self, node, kind)
    }

    /// The distinct resources typed with the profile term of one of the roles.
    pub(crate) fn typed_with(&self, roles: &[Role]) -> Vec<NamedOrBlankNode> {
        let mut nodes = Vec::new();
        for class in roles.iter().filter_map(|r| self.term(*r)) {
            for node in self.graph.subjects(rdf::TYPE, class) {
                if !nodes.contains(&node) {
                    nodes.push(node);
                }
            }
        }
        nodes
    }
}

/// An ontology model: an RDF graph seen through the vocabulary of an ontology language.
///
/// The model is a cheap to clone handle, all clones share the same graph.
/// The resource views ([`OntClass`], [`OntProperty`]...) returned by the model keep a handle on it
/// and read and write the shared graph.
///
/// Usage example:
/// ```
/// use oxont::{OntModel, OntModelSpec};
///
/// let model = OntModel::new(OntModelSpec::OWL_MEM);
/// let animal = model.create_class(Some("http://example.com/Animal"))?;
/// let dog = model.create_class(Some("http://example.com/Dog"))?;
/// dog.add_super_class(&animal)?;
///
/// assert_eq!(model.list_classes()?.len(), 2);
/// assert_eq!(animal.list_sub_classes(true)?, vec![dog]);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone)]
pub struct OntModel {
    spec: OntModelSpec,
    inner: Arc<RwLock<ModelState>>,
}

impl fmt::Debug for OntModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OntModel")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

impl Default for OntModel {
    #[inline]
    fn default() -> Self {
        Self::new(OntModelSpec::OWL_MEM)
    }
}

impl OntModel {
    /// Creates an empty model.
    #[inline]
    pub fn new(spec: OntModelSpec) -> Self {
        Self::with_graph(spec, Graph::new())
    }

    /// Creates a model on top of an existing graph.
    pub fn with_graph(spec: OntModelSpec, graph: impl Into<OntGraph>) -> Self {
        Self {
            spec,
            inner: Arc::new(RwLock::new(ModelState {
                graph: graph.into(),
                profile: spec.profile(),
                strict: spec.strict_mode(),
                loaded_imports: Vec::new(),
            })),
        }
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, ModelState>, OntError> {
        self.inner.read().map_err(poison_corruption_error)
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, ModelState>, OntError> {
        self.inner.write().map_err(poison_corruption_error)
    }

    /// Checks if both handles share the same state.
    #[inline]
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn resource(&self, node: impl Into<NamedOrBlankNode>) -> OntResource {
        OntResource::new(self.clone(), node.into())
    }

    /// Wraps the nodes that support the view `T`.
    pub(crate) fn views<T: Facet>(
        &self,
        state: &ModelState,
        nodes: impl IntoIterator<Item = NamedOrBlankNode>,
    ) -> Vec<T> {
        nodes
            .into_iter()
            .filter(|n| state.can_wrap(n.as_ref(), T::KIND))
            .map(|n| T::wrap(self.resource(n)))
            .collect()
    }

    /// Wraps a node as `T`, failing if the view is not supported.
    pub(crate) fn checked_view<T: Facet>(
        &self,
        state: &ModelState,
        node: NamedOrBlankNode,
    ) -> Result<T, OntError> {
        if state.can_wrap(node.as_ref(), T::KIND) {
            Ok(T::wrap(self.resource(node)))
        } else {
            Err(ConversionError::new(node, T::KIND).into())
        }
    }

    /// The spec of the model, with its current strict mode.
    pub fn spec(&self) -> Result<OntModelSpec, OntError> {
        Ok(self.spec.with_strict_mode(self.read()?.strict))
    }

    /// The profile of the model language.
    #[inline]
    pub fn profile(&self) -> &'static dyn Profile {
        self.spec.profile()
    }

    pub fn strict_mode(&self) -> Result<bool, OntError> {
        Ok(self.read()?.strict)
    }

    /// Enables or disables the profile checks done when viewing a resource with a facet.
    pub fn set_strict_mode(&self, strict: bool) -> Result<(), OntError> {
        self.write()?.strict = strict;
        Ok(())
    }

    /// Number of triples in the base graph.
    pub fn len(&self) -> Result<usize, OntError> {
        Ok(self.read()?.graph.len())
    }

    pub fn is_empty(&self) -> Result<bool, OntError> {
        Ok(self.read()?.graph.is_empty())
    }

    /// Adds a triple to the base graph.
    pub fn insert<'a>(&self, triple: impl Into<TripleRef<'a>>) -> Result<bool, OntError> {
        Ok(self.write()?.graph.insert(triple))
    }

    /// Removes a triple from the base graph.
    pub fn remove<'a>(&self, triple: impl Into<TripleRef<'a>>) -> Result<bool, OntError> {
        Ok(self.write()?.graph.remove(triple))
    }

    /// Checks if the triple is in the base graph or in a sub-graph.
    pub fn contains<'a>(&self, triple: impl Into<TripleRef<'a>>) -> Result<bool, OntError> {
        Ok(self.read()?.graph.contains(triple))
    }

    /// The distinct triples of the base graph and of the sub-graphs.
    pub fn triples(&self) -> Result<Vec<Triple>, OntError> {
        Ok(self
            .read()?
            .graph
            .to_union_graph()
            .iter()
            .map(TripleRef::into_owned)
            .collect())
    }

    /// A copy of the base graph.
    pub fn base_graph(&self) -> Result<Graph, OntError> {
        Ok(self.read()?.graph.base().clone())
    }

    /// Loads an RDF document into the base graph.
    ///
    /// Blank nodes are renamed to avoid clashes with the ones already in the model.
    ///
    /// ```
    /// use oxont::{OntModel, OntModelSpec};
    /// use oxrdfio::RdfFormat;
    ///
    /// let model = OntModel::new(OntModelSpec::OWL_MEM);
    /// let file = "<http://example.com/C> a <http://www.w3.org/2002/07/owl#Class> .";
    /// model.load_from_reader(file.as_bytes(), RdfFormat::Turtle, None)?;
    /// assert!(model.get_ont_class("http://example.com/C")?.is_some());
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    pub fn load_from_reader(
        &self,
        reader: impl Read,
        format: RdfFormat,
        base_iri: Option<&str>,
    ) -> Result<(), OntError> {
        let mut parser = RdfParser::from_format(format);
        if let Some(base_iri) = base_iri {
            parser = parser.with_base_iri(base_iri)?;
        }
        let mut triples = Vec::new();
        for quad in parser
            .without_named_graphs()
            .rename_blank_nodes()
            .for_reader(reader)
        {
            triples.push(Triple::from(quad?));
        }
        let mut state = self.write()?;
        for triple in &triples {
            state.graph.insert(triple);
        }
        Ok(())
    }

    /// Writes the base graph, without the imported sub-graphs.
    pub fn dump_to_writer<W: Write>(&self, format: RdfFormat, writer: W) -> Result<W, OntError> {
        let state = self.read()?;
        let mut serializer = RdfSerializer::from_format(format).for_writer(writer);
        for triple in state.graph.base().iter() {
            serializer.serialize_triple(triple)?;
        }
        Ok(serializer.finish()?)
    }

    /// Writes the base graph and all the imported sub-graphs.
    pub fn dump_all_to_writer<W: Write>(
        &self,
        format: RdfFormat,
        writer: W,
    ) -> Result<W, OntError> {
        let union = self.read()?.graph.to_union_graph();
        let mut serializer = RdfSerializer::from_format(format).for_writer(writer);
        for triple in union.iter() {
            serializer.serialize_triple(triple)?;
        }
        Ok(serializer.finish()?)
    }

    fn find_by_type_as<T: Facet>(&self, types: &[Role]) -> Result<Vec<T>, OntError> {
        let state = self.read()?;
        let nodes = state.typed_with(types);
        Ok(self.views(&state, nodes))
    }

    fn find_by_defining_property_as<T: Facet>(&self, role: Role) -> Result<Vec<T>, OntError> {
        let state = self.read()?;
        let Some(property) = state.term(role) else {
            return Ok(Vec::new());
        };
        let nodes = state.graph.subjects_with(property);
        Ok(self.views(&state, nodes))
    }

    pub fn list_ontologies(&self) -> Result<Vec<Ontology>, OntError> {
        self.find_by_type_as(&[Role::Ontology])
    }

    /// The properties typed with the generic property class of the language (`rdf:Property`).
    pub fn list_ont_properties(&self) -> Result<Vec<OntProperty>, OntError> {
        self.find_by_type_as(&[Role::Property])
    }

    /// The properties typed with any property class of the language.
    pub fn list_all_ont_properties(&self) -> Result<Vec<OntProperty>, OntError> {
        self.find_by_type_as(PROPERTY_ROLES)
    }

    pub fn list_object_properties(&self) -> Result<Vec<ObjectProperty>, OntError> {
        self.find_by_type_as(&[
            Role::ObjectProperty,
            Role::TransitiveProperty,
            Role::SymmetricProperty,
            Role::InverseFunctionalProperty,
        ])
    }

    pub fn list_datatype_properties(&self) -> Result<Vec<DatatypeProperty>, OntError> {
        self.find_by_type_as(&[Role::DatatypeProperty])
    }

    pub fn list_functional_properties(&self) -> Result<Vec<FunctionalProperty>, OntError> {
        self.find_by_type_as(&[Role::FunctionalProperty])
    }

    pub fn list_transitive_properties(&self) -> Result<Vec<TransitiveProperty>, OntError> {
        self.find_by_type_as(&[Role::TransitiveProperty])
    }

    pub fn list_symmetric_properties(&self) -> Result<Vec<SymmetricProperty>, OntError> {
        self.find_by_type_as(&[Role::SymmetricProperty])
    }

    pub fn list_inverse_functional_properties(
        &self,
    ) -> Result<Vec<InverseFunctionalProperty>, OntError> {
        self.find_by_type_as(&[Role::InverseFunctionalProperty])
    }

    pub fn list_annotation_properties(&self) -> Result<Vec<AnnotationProperty>, OntError> {
        self.find_by_type_as(&[Role::AnnotationProperty])
    }

    /// The resources typed with a class that is not a term of a language vocabulary.
    pub fn list_individuals(&self) -> Result<Vec<Individual>, OntError> {
        let state = self.read()?;
        let mut nodes = Vec::new();
        for triple in state.graph.triples_for_predicate(rdf::TYPE) {
            let Some(class) = term_to_resource(triple.object.as_ref()) else {
                continue;
            };
            if crate::profile::is_language_term(class.as_ref()) {
                continue;
            }
            if let Some(node) = subject_to_resource(triple.subject.as_ref()) {
                if !nodes.contains(&node) {
                    nodes.push(node);
                }
            }
        }
        Ok(self.views(&state, nodes))
    }

    /// The instances of the given class.
    pub fn list_individuals_of(&self, class: &impl AsNode) -> Result<Vec<Individual>, OntError> {
        let state = self.read()?;
        let nodes = state.graph.subjects(rdf::TYPE, class.as_node());
        Ok(self.views(&state, nodes))
    }

    /// The classes and the class descriptions (restrictions, boolean combinations...).
    pub fn list_classes(&self) -> Result<Vec<OntClass>, OntError> {
        let state = self.read()?;
        let mut nodes = Vec::new();
        for class in state.profile.class_description_types() {
            for node in state.graph.subjects(rdf::TYPE, *class) {
                if !nodes.contains(&node) {
                    nodes.push(node);
                }
            }
        }
        Ok(self.views(&state, nodes))
    }

    pub fn list_named_classes(&self) -> Result<Vec<OntClass>, OntError> {
        Ok(self
            .list_classes()?
            .into_iter()
            .filter(|c| !c.is_anon())
            .collect())
    }

    /// The classes at the top of the class hierarchy.
    pub fn list_hierarchy_root_classes(&self) -> Result<Vec<OntClass>, OntError> {
        let mut roots = Vec::new();
        for class in self.list_classes()? {
            if class.is_hierarchy_root()? {
                roots.push(class);
            }
        }
        Ok(roots)
    }

    pub fn list_enumerated_classes(&self) -> Result<Vec<EnumeratedClass>, OntError> {
        self.find_by_defining_property_as(Role::OneOf)
    }

    pub fn list_union_classes(&self) -> Result<Vec<UnionClass>, OntError> {
        self.find_by_defining_property_as(Role::UnionOf)
    }

    pub fn list_intersection_classes(&self) -> Result<Vec<IntersectionClass>, OntError> {
        self.find_by_defining_property_as(Role::IntersectionOf)
    }

    pub fn list_complement_classes(&self) -> Result<Vec<ComplementClass>, OntError> {
        self.find_by_defining_property_as(Role::ComplementOf)
    }

    pub fn list_restrictions(&self) -> Result<Vec<Restriction>, OntError> {
        self.find_by_type_as(&[Role::Restriction])
    }

    pub fn list_all_different(&self) -> Result<Vec<AllDifferent>, OntError> {
        self.find_by_type_as(&[Role::AllDifferent])
    }

    pub fn list_data_ranges(&self) -> Result<Vec<DataRange>, OntError> {
        self.find_by_type_as(&[Role::DataRange])
    }

    /// Gets the resource with the given IRI seen as `T`.
    ///
    /// Returns `None` if the IRI does not occur in the model or if it does not support the view.
    pub fn get<T: Facet>(&self, iri: &str) -> Result<Option<T>, OntError> {
        let node = NamedOrBlankNode::from(NamedNode::new(iri)?);
        let state = self.read()?;
        if state.graph.mentions(node.as_ref()) && state.can_wrap(node.as_ref(), T::KIND) {
            Ok(Some(T::wrap(self.resource(node))))
        } else {
            Ok(None)
        }
    }

    pub fn get_ont_resource(&self, iri: &str) -> Result<Option<OntResource>, OntError> {
        self.get(iri)
    }

    pub fn get_ont_class(&self, iri: &str) -> Result<Option<OntClass>, OntError> {
        self.get(iri)
    }

    pub fn get_individual(&self, iri: &str) -> Result<Option<Individual>, OntError> {
        self.get(iri)
    }

    pub fn get_ont_property(&self, iri: &str) -> Result<Option<OntProperty>, OntError> {
        self.get(iri)
    }

    pub fn get_object_property(&self, iri: &str) -> Result<Option<ObjectProperty>, OntError> {
        self.get(iri)
    }

    pub fn get_datatype_property(&self, iri: &str) -> Result<Option<DatatypeProperty>, OntError> {
        self.get(iri)
    }

    pub fn get_annotation_property(
        &self,
        iri: &str,
    ) -> Result<Option<AnnotationProperty>, OntError> {
        self.get(iri)
    }

    pub fn get_ontology(&self, iri: &str) -> Result<Option<Ontology>, OntError> {
        self.get(iri)
    }

    pub fn get_restriction(&self, iri: &str) -> Result<Option<Restriction>, OntError> {
        self.get(iri)
    }

    /// Creates a resource typed with the profile terms of `types` and returns it seen as `T`.
    fn create_typed<T: Facet>(
        &self,
        iri: Option<&str>,
        types: &[Role],
        values: &[(Role, Term)],
    ) -> Result<T, OntError> {
        let node = new_node(iri)?;
        let mut state = self.write()?;
        let types = types
            .iter()
            .map(|r| state.require(*r))
            .collect::<Result<Vec<_>, _>>()?;
        let values = values
            .iter()
            .map(|(r, v)| Ok((state.require(*r)?, v)))
            .collect::<Result<Vec<_>, OntError>>()?;
        for class in types {
            state.graph.insert(TripleRef::new(&node, rdf::TYPE, class));
        }
        for (property, value) in values {
            state.graph.insert(TripleRef::new(&node, property, value));
        }
        self.checked_view(&state, node)
    }

    /// Creates a resource with the given `rdf:type` and returns it seen as `T`.
    pub fn create_ont_resource<T: Facet>(
        &self,
        rdf_type: NamedNodeRef<'_>,
        iri: Option<&str>,
    ) -> Result<T, OntError> {
        let node = new_node(iri)?;
        let mut state = self.write()?;
        state.graph.insert(TripleRef::new(&node, rdf::TYPE, rdf_type));
        self.checked_view(&state, node)
    }

    pub fn create_ontology(&self, iri: &str) -> Result<Ontology, OntError> {
        self.create_typed(Some(iri), &[Role::Ontology], &[])
    }

    /// Creates an instance of the given class.
    pub fn create_individual(
        &self,
        iri: Option<&str>,
        class: &impl AsNode,
    ) -> Result<Individual, OntError> {
        let node = new_node(iri)?;
        let mut state = self.write()?;
        state
            .graph
            .insert(TripleRef::new(&node, rdf::TYPE, class.as_node()));
        self.checked_view(&state, node)
    }

    pub fn create_ont_property(&self, iri: &str) -> Result<OntProperty, OntError> {
        self.create_typed(Some(iri), &[Role::Property], &[])
    }

    /// Creates an object property, also typed as functional if `functional` is set.
    pub fn create_object_property(
        &self,
        iri: &str,
        functional: bool,
    ) -> Result<ObjectProperty, OntError> {
        if functional {
            self.create_typed(
                Some(iri),
                &[Role::ObjectProperty, Role::FunctionalProperty],
                &[],
            )
        } else {
            self.create_typed(Some(iri), &[Role::ObjectProperty], &[])
        }
    }

    pub fn create_transitive_property(&self, iri: &str) -> Result<TransitiveProperty, OntError> {
        self.create_typed(
            Some(iri),
            &[Role::ObjectProperty, Role::TransitiveProperty],
            &[],
        )
    }

    pub fn create_symmetric_property(&self, iri: &str) -> Result<SymmetricProperty, OntError> {
        self.create_typed(
            Some(iri),
            &[Role::ObjectProperty, Role::SymmetricProperty],
            &[],
        )
    }

    pub fn create_inverse_functional_property(
        &self,
        iri: &str,
    ) -> Result<InverseFunctionalProperty, OntError> {
        self.create_typed(
            Some(iri),
            &[Role::ObjectProperty, Role::InverseFunctionalProperty],
            &[],
        )
    }

    /// Creates a datatype property, also typed as functional if `functional` is set.
    pub fn create_datatype_property(
        &self,
        iri: &str,
        functional: bool,
    ) -> Result<DatatypeProperty, OntError> {
        if functional {
            self.create_typed(
                Some(iri),
                &[Role::DatatypeProperty, Role::FunctionalProperty],
                &[],
            )
        } else {
            self.create_typed(Some(iri), &[Role::DatatypeProperty], &[])
        }
    }

    pub fn create_annotation_property(&self, iri: &str) -> Result<AnnotationProperty, OntError> {
        self.create_typed(Some(iri), &[Role::AnnotationProperty], &[])
    }

    /// Creates a class, anonymous if `iri` is `None`.
    pub fn create_class(&self, iri: Option<&str>) -> Result<OntClass, OntError> {
        self.create_typed(iri, &[Role::Class], &[])
    }

    pub fn create_complement_class(
        &self,
        iri: Option<&str>,
        class: &impl AsNode,
    ) -> Result<ComplementClass, OntError> {
        self.create_typed(
            iri,
            &[Role::Class],
            &[(Role::ComplementOf, class.as_node().into_owned().into())],
        )
    }

    /// Creates a class enumerating the members of a list, an empty list if `members` is `None`.
    pub fn create_enumerated_class(
        &self,
        iri: Option<&str>,
        members: Option<&OntList>,
    ) -> Result<EnumeratedClass, OntError> {
        let members = self.list_or_nil(members)?;
        self.create_typed(iri, &[Role::Class], &[(Role::OneOf, members)])
    }

    pub fn create_union_class(
        &self,
        iri: Option<&str>,
        members: &OntList,
    ) -> Result<UnionClass, OntError> {
        self.create_typed(
            iri,
            &[Role::Class],
            &[(Role::UnionOf, members.node().clone().into())],
        )
    }

    pub fn create_intersection_class(
        &self,
        iri: Option<&str>,
        members: &OntList,
    ) -> Result<IntersectionClass, OntError> {
        self.create_typed(
            iri,
            &[Role::Class],
            &[(Role::IntersectionOf, members.node().clone().into())],
        )
    }

    /// Creates a restriction, with its `onProperty` set if `property` is given.
    pub fn create_restriction(
        &self,
        iri: Option<&str>,
        property: Option<&impl AsNode>,
    ) -> Result<Restriction, OntError> {
        let values = property
            .map(|p| vec![(Role::OnProperty, Term::from(p.as_node().into_owned()))])
            .unwrap_or_default();
        self.create_typed(iri, &[Role::Restriction], &values)
    }

    fn create_restriction_with<T: Facet>(
        &self,
        iri: Option<&str>,
        property: &impl AsNode,
        values: &[(Role, Term)],
    ) -> Result<T, OntError> {
        let mut all = vec![(Role::OnProperty, property.as_node().into_owned().into())];
        all.extend_from_slice(values);
        self.create_typed(iri, &[Role::Restriction], &all)
    }

    pub fn create_has_value_restriction(
        &self,
        iri: Option<&str>,
        property: &impl AsNode,
        value: impl Into<Term>,
    ) -> Result<HasValueRestriction, OntError> {
        self.create_restriction_with(iri, property, &[(Role::HasValue, value.into())])
    }

    pub fn create_some_values_from_restriction(
        &self,
        iri: Option<&str>,
        property: &impl AsNode,
        class: &impl AsNode,
    ) -> Result<SomeValuesFromRestriction, OntError> {
        self.create_restriction_with(
            iri,
            property,
            &[(Role::SomeValuesFrom, class.as_node().into_owned().into())],
        )
    }

    pub fn create_all_values_from_restriction(
        &self,
        iri: Option<&str>,
        property: &impl AsNode,
        class: &impl AsNode,
    ) -> Result<AllValuesFromRestriction, OntError> {
        self.create_restriction_with(
            iri,
            property,
            &[(Role::AllValuesFrom, class.as_node().into_owned().into())],
        )
    }

    fn cardinality(&self, value: u32) -> Result<Term, OntError> {
        check_cardinality(self.profile(), value)?;
        Ok(cardinality_literal(value).into())
    }

    pub fn create_cardinality_restriction(
        &self,
        iri: Option<&str>,
        property: &impl AsNode,
        cardinality: u32,
    ) -> Result<CardinalityRestriction, OntError> {
        let cardinality = self.cardinality(cardinality)?;
        self.create_restriction_with(iri, property, &[(Role::Cardinality, cardinality)])
    }

    pub fn create_min_cardinality_restriction(
        &self,
        iri: Option<&str>,
        property: &impl AsNode,
        cardinality: u32,
    ) -> Result<MinCardinalityRestriction, OntError> {
        let cardinality = self.cardinality(cardinality)?;
        self.create_restriction_with(iri, property, &[(Role::MinCardinality, cardinality)])
    }

    pub fn create_max_cardinality_restriction(
        &self,
        iri: Option<&str>,
        property: &impl AsNode,
        cardinality: u32,
    ) -> Result<MaxCardinalityRestriction, OntError> {
        let cardinality = self.cardinality(cardinality)?;
        self.create_restriction_with(iri, property, &[(Role::MaxCardinality, cardinality)])
    }

    /// Creates a qualified cardinality restriction (DAML+OIL `cardinalityQ`).
    pub fn create_cardinality_q_restriction(
        &self,
        iri: Option<&str>,
        property: &impl AsNode,
        cardinality: u32,
        class: &impl AsNode,
    ) -> Result<CardinalityQRestriction, OntError> {
        let cardinality = self.cardinality(cardinality)?;
        self.create_restriction_with(
            iri,
            property,
            &[
                (Role::CardinalityQ, cardinality),
                (Role::HasClassQ, class.as_node().into_owned().into()),
            ],
        )
    }

    pub fn create_min_cardinality_q_restriction(
        &self,
        iri: Option<&str>,
        property: &impl AsNode,
        cardinality: u32,
        class: &impl AsNode,
    ) -> Result<MinCardinalityQRestriction, OntError> {
        let cardinality = self.cardinality(cardinality)?;
        self.create_restriction_with(
            iri,
            property,
            &[
                (Role::MinCardinalityQ, cardinality),
                (Role::HasClassQ, class.as_node().into_owned().into()),
            ],
        )
    }

    pub fn create_max_cardinality_q_restriction(
        &self,
        iri: Option<&str>,
        property: &impl AsNode,
        cardinality: u32,
        class: &impl AsNode,
    ) -> Result<MaxCardinalityQRestriction, OntError> {
        let cardinality = self.cardinality(cardinality)?;
        self.create_restriction_with(
            iri,
            property,
            &[
                (Role::MaxCardinalityQ, cardinality),
                (Role::HasClassQ, class.as_node().into_owned().into()),
            ],
        )
    }

    /// Creates an anonymous data range enumerating the given literals.
    pub fn create_data_range(&self, members: Option<&OntList>) -> Result<DataRange, OntError> {
        let members = self.list_or_nil(members)?;
        self.create_typed(None, &[Role::DataRange], &[(Role::OneOf, members)])
    }

    /// Creates an anonymous `owl:AllDifferent` axiom.
    pub fn create_all_different(
        &self,
        members: Option<&OntList>,
    ) -> Result<AllDifferent, OntError> {
        let members = self.list_or_nil(members)?;
        self.create_typed(None, &[Role::AllDifferent], &[(Role::DistinctMembers, members)])
    }

    /// Creates a list holding the given values. An empty list is the profile `NIL`.
    pub fn create_list<T: Into<Term>>(
        &self,
        values: impl IntoIterator<Item = T>,
    ) -> Result<OntList, OntError> {
        let values = values.into_iter().map(Into::into).collect::<Vec<_>>();
        let node = build_list(&mut *self.write()?, values)?;
        Ok(OntList::new(self.clone(), node))
    }

    /// The lists of the model, identified by the cells that are not the rest of another cell.
    pub fn list_lists(&self) -> Result<Vec<OntList>, OntError> {
        let state = self.read()?;
        Ok(list_heads(&state)?
            .into_iter()
            .map(|head| OntList::new(self.clone(), head))
            .collect())
    }

    fn list_or_nil(&self, list: Option<&OntList>) -> Result<Term, OntError> {
        Ok(match list {
            Some(list) => list.node().clone().into(),
            None => self.read()?.require(Role::Nil)?.into_owned().into(),
        })
    }

    /// Loads the transitive closure of the imports of the ontologies in this model.
    pub fn load_imports(&self, manager: &OntDocumentManager) -> Result<(), OntError> {
        manager.load_imports(self)
    }

    /// The IRIs of the ontologies imported by the ontologies of the model.
    ///
    /// Only the base graph is looked at unless `closure` is set,
    /// then the imports declared in the loaded imports are returned too.
    pub fn list_imported_ontology_uris(&self, closure: bool) -> Result<Vec<String>, OntError> {
        let state = self.read()?;
        let Some(imports) = state.term(Role::Imports) else {
            return Ok(Vec::new());
        };
        let mut uris = Vec::<String>::new();
        for triple in state.graph.triples_for_predicate(imports) {
            if !closure && !state.graph.is_in_base(&triple) {
                continue;
            }
            if let Some(uri) = term_to_named_node(triple.object.as_ref()) {
                if !uris.iter().any(|u| u == uri.as_str()) {
                    uris.push(uri.into_string());
                }
            }
        }
        Ok(uris)
    }

    pub fn has_loaded_import(&self, uri: &str) -> Result<bool, OntError> {
        Ok(self.read()?.loaded_imports.iter().any(|u| u == uri))
    }

    /// Records that a document has been imported.
    pub fn add_loaded_import(&self, uri: &str) -> Result<(), OntError> {
        let mut state = self.write()?;
        if !state.loaded_imports.iter().any(|u| u == uri) {
            state.loaded_imports.push(uri.to_owned());
        }
        Ok(())
    }

    pub fn remove_loaded_import(&self, uri: &str) -> Result<(), OntError> {
        self.write()?.loaded_imports.retain(|u| u != uri);
        Ok(())
    }

    pub fn list_loaded_imports(&self) -> Result<Vec<String>, OntError> {
        Ok(self.read()?.loaded_imports.clone())
    }

    /// Adds a read-only sub-graph to the model.
    pub fn add_sub_graph(&self, name: &str, graph: Graph) -> Result<(), OntError> {
        self.write()?.graph.add_sub_graph(name, graph);
        Ok(())
    }

    pub fn remove_sub_graph(&self, name: &str) -> Result<Option<Graph>, OntError> {
        Ok(self.write()?.graph.remove_sub_graph(name))
    }

    pub fn count_sub_graphs(&self) -> Result<usize, OntError> {
        Ok(self.read()?.graph.sub_graph_count())
    }

    pub fn list_sub_graph_names(&self) -> Result<Vec<String>, OntError> {
        Ok(self
            .read()?
            .graph
            .sub_graph_names()
            .map(str::to_owned)
            .collect())
    }

    /// Checks if the triple is asserted in the base graph and not only in an import.
    pub fn is_in_base_model<'a>(&self, triple: impl Into<TripleRef<'a>>) -> Result<bool, OntError> {
        Ok(self.read()?.graph.is_in_base(triple))
    }
}

/// A named node for `iri` or a fresh blank node.
pub(crate) fn new_node(iri: Option<&str>) -> Result<NamedOrBlankNode, OntError> {
    Ok(match iri {
        Some(iri) => NamedNode::new(iri)?.into(),
        None => BlankNode::default().into(),
    })
}

fn poison_corruption_error<T>(_: PoisonError<T>) -> OntError {
    CorruptionError::msg("Poisoned lock").into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::owl;

    #[test]
    fn listing_is_profile_filtered() -> Result<(), OntError> {
        let model = OntModel::new(OntModelSpec::OWL_MEM);
        model.create_class(Some("http://example.com/A"))?;
        let p = model.create_object_property("http://example.com/p", false)?;
        model.create_some_values_from_restriction(None, &p, &owl::THING)?;
        assert_eq!(model.list_classes()?.len(), 2);
        assert_eq!(model.list_named_classes()?.len(), 1);
        assert_eq!(model.list_restrictions()?.len(), 1);
        assert_eq!(model.list_object_properties()?.len(), 1);
        assert_eq!(model.list_all_ont_properties()?.len(), 1);
        assert!(model.list_ont_properties()?.is_empty());
        assert!(model.list_all_different()?.is_empty());
        Ok(())
    }

    #[test]
    fn creation_fails_on_missing_roles() -> Result<(), OntError> {
        let model = OntModel::new(OntModelSpec::RDFS_MEM);
        let class = model.create_class(Some("http://example.com/A"))?;
        let error = model.create_restriction(None, Some(&class)).unwrap_err();
        assert!(matches!(error, OntError::Profile(e) if e.role() == Role::Restriction));
        assert!(model.list_restrictions()?.is_empty());
        assert!(model.list_union_classes()?.is_empty());
        Ok(())
    }

    #[test]
    fn lite_rejects_large_cardinalities() -> Result<(), OntError> {
        let model = OntModel::new(OntModelSpec::OWL_LITE_MEM);
        let p = model.create_object_property("http://example.com/p", false)?;
        assert!(model.create_cardinality_restriction(None, &p, 1).is_ok());
        assert!(matches!(
            model.create_cardinality_restriction(None, &p, 2),
            Err(OntError::InvalidValue(_))
        ));
        Ok(())
    }

    #[test]
    fn get_requires_the_node_in_the_graph() -> Result<(), OntError> {
        let model = OntModel::default();
        assert!(model.get_ont_class("http://example.com/A")?.is_none());
        model.create_class(Some("http://example.com/A"))?;
        assert!(model.get_ont_class("http://example.com/A")?.is_some());
        assert!(model.get_ont_property("http://example.com/A")?.is_none());
        model.set_strict_mode(false)?;
        assert!(model.get_ont_property("http://example.com/A")?.is_some());
        Ok(())
    }

    #[test]
    fn spec_follows_strict_mode() -> Result<(), OntError> {
        let model = OntModel::new(OntModelSpec::OWL_DL_MEM);
        assert_eq!(model.spec()?, OntModelSpec::OWL_DL_MEM);
        model.set_strict_mode(false)?;
        assert!(!model.strict_mode()?);
        assert_eq!(
            model.spec()?,
            OntModelSpec::OWL_DL_MEM.with_strict_mode(false)
        );
        assert_eq!(model.spec()?.language(), OntLanguage::OwlDl);
        Ok(())
    }

    #[test]
    fn imports_of_base_and_closure() -> Result<(), OntError> {
        let model = OntModel::default();
        let ontology = model.create_ontology("http://example.com/o")?;
        ontology.add_import(&NamedNodeRef::new("http://example.com/a")?)?;
        let mut imported = Graph::new();
        let a = NamedNodeRef::new("http://example.com/a")?;
        imported.insert(TripleRef::new(a, owl::IMPORTS, NamedNodeRef::new("http://example.com/b")?));
        model.add_sub_graph("http://example.com/a", imported)?;
        assert_eq!(model.list_imported_ontology_uris(false)?, vec!["http://example.com/a"]);
        assert_eq!(model.list_imported_ontology_uris(true)?.len(), 2);
        assert_eq!(model.count_sub_graphs()?, 1);
        Ok(())
    }
}
