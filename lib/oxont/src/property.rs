use crate::class::{OntClass, declares};
use crate::error::OntError;
use crate::facet::{Facet, facet};
use crate::profile::Role;
use crate::resource::{AsNode, OntResource};
use crate::restriction::Restriction;
use crate::vocab::rdf;
use oxrdf::TripleRef;

/// The roles of all the property classes of a language.
pub(crate) const PROPERTY_ROLES: &[Role] = &[
    Role::Property,
    Role::ObjectProperty,
    Role::DatatypeProperty,
    Role::FunctionalProperty,
    Role::InverseFunctionalProperty,
    Role::SymmetricProperty,
    Role::TransitiveProperty,
    Role::AnnotationProperty,
];

facet! {
    /// A property of an ontology.
    ///
    /// ```
    /// use oxont::OntModel;
    ///
    /// let model = OntModel::default();
    /// let parent = model.create_object_property("http://example.com/hasParent", false)?;
    /// let child = model.create_object_property("http://example.com/hasChild", false)?;
    /// child.add_inverse_of(&parent)?;
    ///
    /// assert!(child.is_inverse_of(&parent)?);
    /// assert_eq!(parent.inverse()?, Some((*child).clone()));
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    OntProperty(OntResource) => OntProperty
}

impl OntProperty {
    // super-properties

    pub fn set_super_property(&self, property: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::SubPropertyOf, property.as_node())
    }

    pub fn add_super_property(&self, property: &impl AsNode) -> Result<(), OntError> {
        self.add_role(Role::SubPropertyOf, property.as_node())
    }

    pub fn super_property(&self) -> Result<Option<OntProperty>, OntError> {
        Ok(self.list_super_properties(false)?.into_iter().next())
    }

    pub fn list_super_properties(&self, direct: bool) -> Result<Vec<OntProperty>, OntError> {
        self.hierarchy(Role::SubPropertyOf, true, direct)
    }

    pub fn has_super_property(
        &self,
        property: &impl AsNode,
        direct: bool,
    ) -> Result<bool, OntError> {
        self.in_hierarchy(property.as_node(), Role::SubPropertyOf, true, direct)
    }

    pub fn remove_super_property(&self, property: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::SubPropertyOf, property.as_node())
    }

    // sub-properties

    pub fn set_sub_property(&self, property: &impl AsNode) -> Result<(), OntError> {
        self.set_role_subject(Role::SubPropertyOf, property.as_node())
    }

    pub fn add_sub_property(&self, property: &impl AsNode) -> Result<(), OntError> {
        self.add_role_subject(Role::SubPropertyOf, property.as_node())
    }

    pub fn sub_property(&self) -> Result<Option<OntProperty>, OntError> {
        Ok(self.list_sub_properties(false)?.into_iter().next())
    }

    pub fn list_sub_properties(&self, direct: bool) -> Result<Vec<OntProperty>, OntError> {
        self.hierarchy(Role::SubPropertyOf, false, direct)
    }

    pub fn has_sub_property(&self, property: &impl AsNode, direct: bool) -> Result<bool, OntError> {
        self.in_hierarchy(property.as_node(), Role::SubPropertyOf, false, direct)
    }

    pub fn remove_sub_property(&self, property: &impl AsNode) -> Result<(), OntError> {
        self.remove_role_subject(Role::SubPropertyOf, property.as_node())
    }

    // domain and range

    pub fn set_domain(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::Domain, class.as_node())
    }

    pub fn add_domain(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.add_role(Role::Domain, class.as_node())
    }

    pub fn domain(&self) -> Result<Option<OntResource>, OntError> {
        self.role_view(Role::Domain)
    }

    pub fn list_domain(&self) -> Result<Vec<OntResource>, OntError> {
        self.role_views(Role::Domain)
    }

    pub fn has_domain(&self, class: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::Domain, class.as_node())
    }

    pub fn remove_domain(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::Domain, class.as_node())
    }

    /// Sets the range, a class or a datatype.
    pub fn set_range(&self, range: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::Range, range.as_node())
    }

    pub fn add_range(&self, range: &impl AsNode) -> Result<(), OntError> {
        self.add_role(Role::Range, range.as_node())
    }

    pub fn range(&self) -> Result<Option<OntResource>, OntError> {
        self.role_view(Role::Range)
    }

    pub fn list_range(&self) -> Result<Vec<OntResource>, OntError> {
        self.role_views(Role::Range)
    }

    pub fn has_range(&self, range: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::Range, range.as_node())
    }

    pub fn remove_range(&self, range: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::Range, range.as_node())
    }

    // equivalent properties

    pub fn set_equivalent_property(&self, property: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::EquivalentProperty, property.as_node())
    }

    pub fn add_equivalent_property(&self, property: &impl AsNode) -> Result<(), OntError> {
        self.add_role(Role::EquivalentProperty, property.as_node())
    }

    pub fn equivalent_property(&self) -> Result<Option<OntProperty>, OntError> {
        self.role_view(Role::EquivalentProperty)
    }

    pub fn list_equivalent_properties(&self) -> Result<Vec<OntProperty>, OntError> {
        self.role_views(Role::EquivalentProperty)
    }

    pub fn has_equivalent_property(&self, property: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::EquivalentProperty, property.as_node())
    }

    pub fn remove_equivalent_property(&self, property: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::EquivalentProperty, property.as_node())
    }

    // inverses

    pub fn set_inverse_of(&self, property: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::InverseOf, property.as_node())
    }

    pub fn add_inverse_of(&self, property: &impl AsNode) -> Result<(), OntError> {
        self.add_role(Role::InverseOf, property.as_node())
    }

    /// The property this one declares to be the inverse of.
    pub fn inverse_of(&self) -> Result<Option<OntProperty>, OntError> {
        self.role_view(Role::InverseOf)
    }

    pub fn list_inverse_of(&self) -> Result<Vec<OntProperty>, OntError> {
        self.role_views(Role::InverseOf)
    }

    pub fn is_inverse_of(&self, property: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::InverseOf, property.as_node())
    }

    pub fn remove_inverse_of(&self, property: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::InverseOf, property.as_node())
    }

    /// A property that declares itself the inverse of this one.
    pub fn inverse(&self) -> Result<Option<OntProperty>, OntError> {
        Ok(self.list_inverse()?.into_iter().next())
    }

    /// The properties that declare themselves the inverse of this one.
    pub fn list_inverse(&self) -> Result<Vec<OntProperty>, OntError> {
        let state = self.model().read()?;
        let nodes = self.role_subjects(&state, Role::InverseOf);
        Ok(self.wrap_views(&state, nodes))
    }

    pub fn has_inverse(&self) -> Result<bool, OntError> {
        Ok(!self.list_inverse()?.is_empty())
    }

    // frames

    /// The classes that have this property among their declared properties.
    pub fn list_declaring_classes(&self, direct: bool) -> Result<Vec<OntClass>, OntError> {
        let classes = self.model().list_classes()?;
        let state = self.model().read()?;
        Ok(classes
            .into_iter()
            .filter(|c| declares(&state, c.node().as_ref(), self.node().as_ref(), direct))
            .collect())
    }

    /// The restrictions whose `onProperty` is this property.
    pub fn list_referring_restrictions(&self) -> Result<Vec<Restriction>, OntError> {
        let state = self.model().read()?;
        let nodes = self.role_subjects(&state, Role::OnProperty);
        Ok(self.wrap_views(&state, nodes))
    }

    // property kinds

    /// Adds the `rdf:type` of `T` to the property and views it as `T`.
    fn convert_to<T: Facet>(&self, role: Role) -> Result<T, OntError> {
        {
            let mut state = self.model().write()?;
            let class = state.require(role)?;
            state
                .graph
                .insert(TripleRef::new(self.node(), rdf::TYPE, class));
        }
        self.view()
    }

    pub fn as_functional_property(&self) -> Result<FunctionalProperty, OntError> {
        self.view()
    }

    pub fn is_functional_property(&self) -> Result<bool, OntError> {
        self.can_view::<FunctionalProperty>()
    }

    pub fn convert_to_functional_property(&self) -> Result<FunctionalProperty, OntError> {
        self.convert_to(Role::FunctionalProperty)
    }

    pub fn is_datatype_property(&self) -> Result<bool, OntError> {
        self.can_view::<DatatypeProperty>()
    }

    pub fn convert_to_datatype_property(&self) -> Result<DatatypeProperty, OntError> {
        self.convert_to(Role::DatatypeProperty)
    }

    pub fn is_object_property(&self) -> Result<bool, OntError> {
        self.can_view::<ObjectProperty>()
    }

    pub fn convert_to_object_property(&self) -> Result<ObjectProperty, OntError> {
        self.convert_to(Role::ObjectProperty)
    }

    pub fn as_transitive_property(&self) -> Result<TransitiveProperty, OntError> {
        self.view()
    }

    pub fn is_transitive_property(&self) -> Result<bool, OntError> {
        self.can_view::<TransitiveProperty>()
    }

    pub fn convert_to_transitive_property(&self) -> Result<TransitiveProperty, OntError> {
        self.convert_to(Role::TransitiveProperty)
    }

    pub fn as_inverse_functional_property(&self) -> Result<InverseFunctionalProperty, OntError> {
        self.view()
    }

    pub fn is_inverse_functional_property(&self) -> Result<bool, OntError> {
        self.can_view::<InverseFunctionalProperty>()
    }

    pub fn convert_to_inverse_functional_property(
        &self,
    ) -> Result<InverseFunctionalProperty, OntError> {
        self.convert_to(Role::InverseFunctionalProperty)
    }

    pub fn as_symmetric_property(&self) -> Result<SymmetricProperty, OntError> {
        self.view()
    }

    pub fn is_symmetric_property(&self) -> Result<bool, OntError> {
        self.can_view::<SymmetricProperty>()
    }

    pub fn convert_to_symmetric_property(&self) -> Result<SymmetricProperty, OntError> {
        self.convert_to(Role::SymmetricProperty)
    }
}

facet! {
    /// A property relating individuals to individuals.
    ObjectProperty(OntProperty) => ObjectProperty
}

facet! {
    /// A property relating individuals to data values.
    DatatypeProperty(OntProperty) => DatatypeProperty
}

facet! {
    AnnotationProperty(OntProperty) => AnnotationProperty
}

facet! {
    /// A property with at most one value for each subject.
    FunctionalProperty(OntProperty) => FunctionalProperty
}

facet! {
    /// A property with at most one subject for each value.
    InverseFunctionalProperty(ObjectProperty) => InverseFunctionalProperty
}

facet! {
    TransitiveProperty(ObjectProperty) => TransitiveProperty
}

facet! {
    SymmetricProperty(ObjectProperty) => SymmetricProperty
}
