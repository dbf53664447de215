use crate::error::OntError;
use crate::facet::facet;
use crate::graph::term_to_resource;
use crate::individual::Individual;
use crate::list::OntList;
use crate::model::ModelState;
use crate::profile::{Role, is_language_term};
use crate::property::{OntProperty, PROPERTY_ROLES};
use crate::resource::{AsNode, OntResource, types_of};
use crate::restriction::Restriction;
use crate::vocab::{rdf, rdfs};
use oxrdf::{NamedOrBlankNodeRef, Term, TripleRef};

facet! {
    /// A class or a class description of an ontology.
    ///
    /// ```
    /// use oxont::OntModel;
    ///
    /// let model = OntModel::default();
    /// let animal = model.create_class(Some("http://example.com/Animal"))?;
    /// let dog = model.create_class(Some("http://example.com/Dog"))?;
    /// let puppy = model.create_class(Some("http://example.com/Puppy"))?;
    /// dog.add_super_class(&animal)?;
    /// puppy.add_super_class(&dog)?;
    /// puppy.add_super_class(&animal)?;
    ///
    /// assert_eq!(puppy.list_super_classes(false)?.len(), 2);
    /// assert_eq!(puppy.list_super_classes(true)?, vec![dog]);
    /// assert!(animal.is_hierarchy_root()?);
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    OntClass(OntResource) => OntClass
}

impl OntClass {
    // super-classes

    pub fn set_super_class(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::SubClassOf, class.as_node())
    }

    pub fn add_super_class(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.add_role(Role::SubClassOf, class.as_node())
    }

    pub fn super_class(&self) -> Result<Option<OntClass>, OntError> {
        Ok(self.list_super_classes(false)?.into_iter().next())
    }

    /// The asserted super-classes, only the nearest ones if `direct` is set.
    pub fn list_super_classes(&self, direct: bool) -> Result<Vec<OntClass>, OntError> {
        self.hierarchy(Role::SubClassOf, true, direct)
    }

    pub fn has_super_class(&self, class: &impl AsNode, direct: bool) -> Result<bool, OntError> {
        self.in_hierarchy(class.as_node(), Role::SubClassOf, true, direct)
    }

    pub fn remove_super_class(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::SubClassOf, class.as_node())
    }

    // sub-classes

    /// Makes `class` the only sub-class of this class.
    pub fn set_sub_class(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.set_role_subject(Role::SubClassOf, class.as_node())
    }

    pub fn add_sub_class(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.add_role_subject(Role::SubClassOf, class.as_node())
    }

    pub fn sub_class(&self) -> Result<Option<OntClass>, OntError> {
        Ok(self.list_sub_classes(false)?.into_iter().next())
    }

    pub fn list_sub_classes(&self, direct: bool) -> Result<Vec<OntClass>, OntError> {
        self.hierarchy(Role::SubClassOf, false, direct)
    }

    pub fn has_sub_class(&self, class: &impl AsNode, direct: bool) -> Result<bool, OntError> {
        self.in_hierarchy(class.as_node(), Role::SubClassOf, false, direct)
    }

    pub fn remove_sub_class(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.remove_role_subject(Role::SubClassOf, class.as_node())
    }

    // equivalent classes

    pub fn set_equivalent_class(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::EquivalentClass, class.as_node())
    }

    pub fn add_equivalent_class(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.add_role(Role::EquivalentClass, class.as_node())
    }

    pub fn equivalent_class(&self) -> Result<Option<OntClass>, OntError> {
        self.role_view(Role::EquivalentClass)
    }

    pub fn list_equivalent_classes(&self) -> Result<Vec<OntClass>, OntError> {
        self.role_views(Role::EquivalentClass)
    }

    pub fn has_equivalent_class(&self, class: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::EquivalentClass, class.as_node())
    }

    pub fn remove_equivalent_class(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::EquivalentClass, class.as_node())
    }

    // disjoint classes

    pub fn set_disjoint_with(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::DisjointWith, class.as_node())
    }

    pub fn add_disjoint_with(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.add_role(Role::DisjointWith, class.as_node())
    }

    pub fn disjoint_with(&self) -> Result<Option<OntClass>, OntError> {
        self.role_view(Role::DisjointWith)
    }

    pub fn list_disjoint_with(&self) -> Result<Vec<OntClass>, OntError> {
        self.role_views(Role::DisjointWith)
    }

    pub fn is_disjoint_with(&self, class: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::DisjointWith, class.as_node())
    }

    pub fn remove_disjoint_with(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::DisjointWith, class.as_node())
    }

    // properties

    /// The properties whose domain covers this class.
    ///
    /// A property without a specific domain is global: it is declared on every class,
    /// and directly declared on the hierarchy roots.
    pub fn list_declared_properties(&self, direct: bool) -> Result<Vec<OntProperty>, OntError> {
        let state = self.model().read()?;
        let properties = state
            .typed_with(PROPERTY_ROLES)
            .into_iter()
            .filter(|p| declares(&state, self.node().as_ref(), p.as_ref(), direct));
        Ok(self.wrap_views(&state, properties))
    }

    pub fn has_declared_property(
        &self,
        property: &impl AsNode,
        direct: bool,
    ) -> Result<bool, OntError> {
        let state = self.model().read()?;
        Ok(declares(
            &state,
            self.node().as_ref(),
            property.as_node(),
            direct,
        ))
    }

    // instances

    /// The resources typed with this class. With `direct`, only the resources having this class as a direct type.
    pub fn list_instances(&self, direct: bool) -> Result<Vec<Individual>, OntError> {
        let state = self.model().read()?;
        let mut nodes = state.graph.subjects(rdf::TYPE, self.node());
        if direct {
            nodes.retain(|n| types_of(&state, n.as_ref(), true).contains(self.node()));
        }
        Ok(self.wrap_views(&state, nodes))
    }

    /// Creates an instance of this class, anonymous if `iri` is `None`.
    pub fn create_individual(&self, iri: Option<&str>) -> Result<Individual, OntError> {
        self.model().create_individual(iri, self)
    }

    /// Removes the `rdf:type` link between the individual and this class.
    pub fn drop_individual(&self, individual: &impl AsNode) -> Result<(), OntError> {
        self.model().remove(TripleRef::new(
            individual.as_node(),
            rdf::TYPE,
            self.node(),
        ))?;
        Ok(())
    }

    /// Checks if the class is at the top of the class hierarchy.
    ///
    /// It is when it has no asserted super-class other than itself and the top classes.
    /// The bottom class is never a root.
    pub fn is_hierarchy_root(&self) -> Result<bool, OntError> {
        Ok(is_root(&*self.model().read()?, self.node().as_ref()))
    }

    // class descriptions

    pub fn as_enumerated_class(&self) -> Result<EnumeratedClass, OntError> {
        self.view()
    }

    pub fn is_enumerated_class(&self) -> Result<bool, OntError> {
        self.can_view::<EnumeratedClass>()
    }

    /// Turns this class into the enumeration of the members of the list.
    pub fn convert_to_enumerated_class(
        &self,
        members: &OntList,
    ) -> Result<EnumeratedClass, OntError> {
        self.set_role(Role::OneOf, members.node())?;
        self.view()
    }

    pub fn as_union_class(&self) -> Result<UnionClass, OntError> {
        self.view()
    }

    pub fn is_union_class(&self) -> Result<bool, OntError> {
        self.can_view::<UnionClass>()
    }

    pub fn convert_to_union_class(&self, members: &OntList) -> Result<UnionClass, OntError> {
        self.set_role(Role::UnionOf, members.node())?;
        self.view()
    }

    pub fn as_intersection_class(&self) -> Result<IntersectionClass, OntError> {
        self.view()
    }

    pub fn is_intersection_class(&self) -> Result<bool, OntError> {
        self.can_view::<IntersectionClass>()
    }

    pub fn convert_to_intersection_class(
        &self,
        members: &OntList,
    ) -> Result<IntersectionClass, OntError> {
        self.set_role(Role::IntersectionOf, members.node())?;
        self.view()
    }

    pub fn as_complement_class(&self) -> Result<ComplementClass, OntError> {
        self.view()
    }

    pub fn is_complement_class(&self) -> Result<bool, OntError> {
        self.can_view::<ComplementClass>()
    }

    pub fn convert_to_complement_class(
        &self,
        class: &impl AsNode,
    ) -> Result<ComplementClass, OntError> {
        self.set_role(Role::ComplementOf, class.as_node())?;
        self.view()
    }

    pub fn as_restriction(&self) -> Result<Restriction, OntError> {
        self.view()
    }

    pub fn is_restriction(&self) -> Result<bool, OntError> {
        self.can_view::<Restriction>()
    }

    /// Turns this class into a restriction on the given property.
    pub fn convert_to_restriction(&self, property: &impl AsNode) -> Result<Restriction, OntError> {
        {
            let mut state = self.model().write()?;
            let restriction = state.require(Role::Restriction)?;
            let on_property = state.require(Role::OnProperty)?;
            state
                .graph
                .insert(TripleRef::new(self.node(), rdf::TYPE, restriction));
            state.graph.remove_values(self.node().as_ref(), on_property);
            state.graph.insert(TripleRef::new(
                self.node(),
                on_property,
                property.as_node(),
            ));
        }
        self.view()
    }
}

/// Checks if `node` is the top class of the language or `rdfs:Resource`.
pub(crate) fn is_top(state: &ModelState, node: NamedOrBlankNodeRef<'_>) -> bool {
    node == NamedOrBlankNodeRef::from(rdfs::RESOURCE)
        || state
            .term(Role::Thing)
            .is_some_and(|thing| node == NamedOrBlankNodeRef::from(thing))
}

pub(crate) fn is_root(state: &ModelState, node: NamedOrBlankNodeRef<'_>) -> bool {
    if state
        .term(Role::Nothing)
        .is_some_and(|nothing| node == NamedOrBlankNodeRef::from(nothing))
    {
        return false;
    }
    let Some(sub_class_of) = state.term(Role::SubClassOf) else {
        return true;
    };
    state.graph.objects(node, sub_class_of).iter().all(|t| {
        term_to_resource(t.as_ref())
            .is_none_or(|s| s.as_ref() == node || is_top(state, s.as_ref()))
    })
}

/// Checks if `property` is declared on `class` through its domain.
pub(crate) fn declares(
    state: &ModelState,
    class: NamedOrBlankNodeRef<'_>,
    property: NamedOrBlankNodeRef<'_>,
    direct: bool,
) -> bool {
    if is_language_term(property) {
        return false;
    }
    let domains = match state.term(Role::Domain) {
        Some(domain) => state
            .graph
            .objects(property, domain)
            .iter()
            .filter_map(|t| term_to_resource(t.as_ref()))
            .collect(),
        None => Vec::new(),
    };
    let sub_class_of = state.term(Role::SubClassOf);
    let mut global = true;
    let mut seen_direct = false;
    for domain in &domains {
        if is_top(state, domain.as_ref()) {
            continue;
        }
        global = false;
        if domain.as_ref() == class {
            seen_direct = true;
        } else if !sub_class_of
            .is_some_and(|sub_class_of| state.graph.reaches(class, domain.as_ref(), sub_class_of))
        {
            // every domain must contain the class
            return false;
        }
    }
    if direct {
        seen_direct || (global && is_root(state, class))
    } else {
        true
    }
}

facet! {
    /// A class defined by the enumeration of its members (`owl:oneOf`).
    EnumeratedClass(OntClass) => EnumeratedClass
}

impl EnumeratedClass {
    pub fn set_one_of(&self, members: &OntList) -> Result<(), OntError> {
        self.set_role(Role::OneOf, members.node())
    }

    /// Adds a member at the end of the enumeration.
    pub fn add_one_of(&self, member: &impl AsNode) -> Result<(), OntError> {
        self.add_role_list_value(Role::OneOf, member.as_node().into_owned().into())
    }

    pub fn add_one_of_all<T: AsNode>(
        &self,
        members: impl IntoIterator<Item = T>,
    ) -> Result<(), OntError> {
        for member in members {
            self.add_one_of(&member)?;
        }
        Ok(())
    }

    pub fn one_of(&self) -> Result<Option<OntList>, OntError> {
        self.role_list(Role::OneOf)
    }

    pub fn list_one_of(&self) -> Result<Vec<OntResource>, OntError> {
        self.role_list_views(Role::OneOf)
    }

    pub fn has_one_of(&self, member: &impl AsNode) -> Result<bool, OntError> {
        let member = Term::from(member.as_node());
        Ok(self.role_list_values(Role::OneOf)?.contains(&member))
    }

    pub fn remove_one_of(&self, member: &impl AsNode) -> Result<(), OntError> {
        self.remove_role_list_value(Role::OneOf, member.as_node().into())
    }
}

/// Operations on the list of operands of a boolean class description.
macro_rules! operands {
    ($name:ident, $role:expr) => {
        impl $name {
            pub fn set_operands(&self, operands: &OntList) -> Result<(), OntError> {
                self.set_role($role, operands.node())
            }

            /// Adds an operand at the end of the operand list.
            pub fn add_operand(&self, operand: &impl AsNode) -> Result<(), OntError> {
                self.add_role_list_value($role, operand.as_node().into_owned().into())
            }

            pub fn add_operands<T: AsNode>(
                &self,
                operands: impl IntoIterator<Item = T>,
            ) -> Result<(), OntError> {
                for operand in operands {
                    self.add_operand(&operand)?;
                }
                Ok(())
            }

            pub fn operands(&self) -> Result<Option<OntList>, OntError> {
                self.role_list($role)
            }

            pub fn list_operands(&self) -> Result<Vec<OntClass>, OntError> {
                self.role_list_views($role)
            }

            pub fn has_operand(&self, operand: &impl AsNode) -> Result<bool, OntError> {
                let operand = Term::from(operand.as_node());
                Ok(self.role_list_values($role)?.contains(&operand))
            }

            pub fn remove_operand(&self, operand: &impl AsNode) -> Result<(), OntError> {
                self.remove_role_list_value($role, operand.as_node().into())
            }
        }
    };
}

facet! {
    /// A class defined as the union of other classes.
    UnionClass(OntClass) => UnionClass
}

operands!(UnionClass, Role::UnionOf);

facet! {
    /// A class defined as the intersection of other classes.
    IntersectionClass(OntClass) => IntersectionClass
}

operands!(IntersectionClass, Role::IntersectionOf);

facet! {
    /// A class defined as the complement of another class.
    ComplementClass(OntClass) => ComplementClass
}

impl ComplementClass {
    pub fn set_operand(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::ComplementOf, class.as_node())
    }

    pub fn operand(&self) -> Result<Option<OntClass>, OntError> {
        self.role_view(Role::ComplementOf)
    }

    pub fn remove_operand(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::ComplementOf, class.as_node())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OntModel, OntModelSpec};
    use crate::vocab::owl;

    fn ex(name: &str) -> String {
        format!("http://example.com/{name}")
    }

    #[test]
    fn sub_and_super_classes() -> Result<(), OntError> {
        let model = OntModel::default();
        let a = model.create_class(Some(&ex("A")))?;
        let b = model.create_class(Some(&ex("B")))?;
        let c = model.create_class(Some(&ex("C")))?;
        a.add_sub_class(&b)?;
        b.add_sub_class(&c)?;
        a.add_sub_class(&c)?;
        assert_eq!(a.list_sub_classes(false)?.len(), 2);
        assert_eq!(a.list_sub_classes(true)?, vec![b.clone()]);
        assert!(a.has_sub_class(&c, false)?);
        assert!(!a.has_sub_class(&c, true)?);
        assert!(c.has_super_class(&b, true)?);
        assert!(c.super_class()?.is_some());
        a.set_sub_class(&b)?;
        assert_eq!(a.list_sub_classes(false)?, vec![b.clone()]);
        c.remove_super_class(&b)?;
        assert!(c.list_super_classes(false)?.is_empty());
        Ok(())
    }

    #[test]
    fn equivalent_classes_are_kept_as_direct() -> Result<(), OntError> {
        let model = OntModel::default();
        let a = model.create_class(Some(&ex("A")))?;
        let b = model.create_class(Some(&ex("B")))?;
        let c = model.create_class(Some(&ex("C")))?;
        a.add_super_class(&b)?;
        a.add_super_class(&c)?;
        b.add_super_class(&c)?;
        c.add_super_class(&b)?;
        assert_eq!(a.list_super_classes(true)?.len(), 2);
        a.add_equivalent_class(&b)?;
        assert!(a.has_equivalent_class(&b)?);
        a.set_disjoint_with(&c)?;
        assert_eq!(a.list_disjoint_with()?, vec![c]);
        Ok(())
    }

    #[test]
    fn hierarchy_roots() -> Result<(), OntError> {
        let model = OntModel::default();
        let a = model.create_class(Some(&ex("A")))?;
        let b = model.create_class(Some(&ex("B")))?;
        b.add_super_class(&a)?;
        a.add_super_class(&owl::THING)?;
        a.add_super_class(&a)?;
        assert!(a.is_hierarchy_root()?);
        assert!(!b.is_hierarchy_root()?);
        let nothing = model.resource(owl::NOTHING).as_class()?;
        assert!(!nothing.is_hierarchy_root()?);
        assert_eq!(model.list_hierarchy_root_classes()?, vec![a]);
        Ok(())
    }

    #[test]
    fn declared_properties() -> Result<(), OntError> {
        let model = OntModel::default();
        let animal = model.create_class(Some(&ex("Animal")))?;
        let dog = model.create_class(Some(&ex("Dog")))?;
        dog.add_super_class(&animal)?;
        let name = model.create_datatype_property(&ex("name"), false)?;
        let barks = model.create_datatype_property(&ex("barks"), false)?;
        let legs = model.create_datatype_property(&ex("legs"), false)?;
        barks.add_domain(&dog)?;
        legs.add_domain(&animal)?;

        let direct = dog.list_declared_properties(true)?;
        assert_eq!(direct.len(), 1);
        assert!(dog.has_declared_property(&barks, true)?);
        assert!(!dog.has_declared_property(&name, true)?);
        assert!(animal.has_declared_property(&name, true)?);
        assert!(dog.has_declared_property(&legs, false)?);
        assert!(!animal.has_declared_property(&barks, false)?);
        assert_eq!(dog.list_declared_properties(false)?.len(), 3);
        Ok(())
    }

    #[test]
    fn every_domain_must_contain_the_class() -> Result<(), OntError> {
        let model = OntModel::default();
        let animal = model.create_class(Some(&ex("Animal")))?;
        let dog = model.create_class(Some(&ex("Dog")))?;
        let cat = model.create_class(Some(&ex("Cat")))?;
        let puppy = model.create_class(Some(&ex("Puppy")))?;
        puppy.add_super_class(&dog)?;
        puppy.add_super_class(&cat)?;
        let purrs = model.create_datatype_property(&ex("purrs"), false)?;
        purrs.add_domain(&dog)?;
        purrs.add_domain(&cat)?;
        let eats = model.create_object_property(&ex("eats"), false)?;
        eats.add_domain(&animal)?;
        eats.add_domain(&owl::THING)?;

        assert!(!dog.has_declared_property(&purrs, true)?);
        assert!(!dog.has_declared_property(&purrs, false)?);
        assert!(!cat.has_declared_property(&purrs, false)?);
        assert!(puppy.has_declared_property(&purrs, false)?);
        assert!(!puppy.has_declared_property(&purrs, true)?);
        assert_eq!(purrs.list_declaring_classes(false)?, vec![puppy.clone()]);
        assert!(purrs.list_declaring_classes(true)?.is_empty());

        assert!(animal.has_declared_property(&eats, true)?);
        assert!(!puppy.has_declared_property(&eats, false)?);
        assert_eq!(eats.list_declaring_classes(true)?, vec![animal]);
        Ok(())
    }

    #[test]
    fn instances() -> Result<(), OntError> {
        let model = OntModel::default();
        let animal = model.create_class(Some(&ex("Animal")))?;
        let dog = model.create_class(Some(&ex("Dog")))?;
        dog.add_super_class(&animal)?;
        let rex = dog.create_individual(Some(&ex("rex")))?;
        rex.add_rdf_type(&animal)?;
        animal.create_individual(None)?;
        assert_eq!(animal.list_instances(false)?.len(), 2);
        assert_eq!(animal.list_instances(true)?.len(), 1);
        assert_eq!(dog.list_instances(true)?, vec![rex.clone()]);
        dog.drop_individual(&rex)?;
        assert!(dog.list_instances(false)?.is_empty());
        Ok(())
    }

    #[test]
    fn boolean_classes() -> Result<(), OntError> {
        let model = OntModel::default();
        let a = model.create_class(Some(&ex("A")))?;
        let b = model.create_class(Some(&ex("B")))?;
        let c = model.create_class(Some(&ex("C")))?;
        let members = model.create_list([a.node().clone(), b.node().clone()])?;
        let union = model.create_union_class(None, &members)?;
        assert_eq!(union.list_operands()?, vec![a.clone(), b.clone()]);
        union.add_operand(&c)?;
        assert!(union.has_operand(&c)?);
        union.remove_operand(&a)?;
        assert_eq!(union.list_operands()?, vec![b.clone(), c.clone()]);
        assert!(union.is_union_class()?);
        assert!(!union.is_intersection_class()?);

        let enumerated = model.create_enumerated_class(None, None)?;
        let x = a.create_individual(Some(&ex("x")))?;
        enumerated.add_one_of(&x)?;
        assert_eq!(enumerated.list_one_of()?, vec![OntResource::from(x.clone())]);
        assert!(enumerated.has_one_of(&x)?);

        let complement = model.create_complement_class(None, &a)?;
        assert_eq!(complement.operand()?, Some(a.clone()));
        let converted = c.convert_to_complement_class(&b)?;
        assert_eq!(converted.operand()?, Some(b));
        Ok(())
    }

    #[test]
    fn boolean_classes_need_the_profile_role() -> Result<(), OntError> {
        let model = OntModel::new(OntModelSpec::OWL_LITE_MEM);
        let a = model.create_class(Some(&ex("A")))?;
        assert!(!a.is_union_class()?);
        assert!(matches!(
            a.convert_to_complement_class(&a),
            Err(OntError::Profile(_))
        ));
        let p = model.create_object_property(&ex("p"), false)?;
        let r = a.convert_to_restriction(&p)?;
        assert_eq!(r.on_property()?.map(OntResource::from), Some(p.into()));
        Ok(())
    }
}
