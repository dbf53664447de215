use crate::class::OntClass;
use crate::error::OntError;
use crate::facet::facet;
use crate::list::OntList;
use crate::profile::Role;
use crate::resource::{AsNode, OntResource, types_of};
use oxrdf::{Literal, Term, TermRef};

facet! {
    /// An instance of a class.
    ///
    /// ```
    /// use oxont::OntModel;
    ///
    /// let model = OntModel::default();
    /// let animal = model.create_class(Some("http://example.com/Animal"))?;
    /// let dog = model.create_class(Some("http://example.com/Dog"))?;
    /// dog.add_super_class(&animal)?;
    /// let rex = model.create_individual(Some("http://example.com/rex"), &dog)?;
    /// rex.add_ont_class(&animal)?;
    ///
    /// assert_eq!(rex.list_ont_classes(false)?.len(), 2);
    /// assert_eq!(rex.list_ont_classes(true)?, vec![dog]);
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    Individual(OntResource) => Individual
}

impl Individual {
    pub fn set_ont_class(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.set_rdf_type(class)
    }

    pub fn add_ont_class(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.add_rdf_type(class)
    }

    pub fn ont_class(&self, direct: bool) -> Result<Option<OntClass>, OntError> {
        Ok(self.list_ont_classes(direct)?.into_iter().next())
    }

    /// The types of the individual that are classes.
    ///
    /// If `direct` is set, a type that is a super-class of another type is skipped.
    pub fn list_ont_classes(&self, direct: bool) -> Result<Vec<OntClass>, OntError> {
        let state = self.model().read()?;
        let types = types_of(&state, self.node().as_ref(), direct);
        Ok(self.wrap_views(&state, types))
    }

    pub fn has_ont_class(&self, class: &impl AsNode, direct: bool) -> Result<bool, OntError> {
        self.has_rdf_type(class, direct)
    }

    pub fn remove_ont_class(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.remove_rdf_type(class)
    }
}

facet! {
    /// The header of an ontology document, holding its imports and version links.
    Ontology(OntResource) => Ontology
}

impl Ontology {
    // imports

    pub fn set_import(&self, ontology: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::Imports, ontology.as_node())
    }

    pub fn add_import(&self, ontology: &impl AsNode) -> Result<(), OntError> {
        self.add_role(Role::Imports, ontology.as_node())
    }

    pub fn import(&self) -> Result<Option<OntResource>, OntError> {
        self.role_view(Role::Imports)
    }

    pub fn list_imports(&self) -> Result<Vec<OntResource>, OntError> {
        self.role_views(Role::Imports)
    }

    /// Checks if this ontology imports the given one.
    pub fn imports(&self, ontology: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::Imports, ontology.as_node())
    }

    pub fn remove_import(&self, ontology: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::Imports, ontology.as_node())
    }

    // prior versions

    pub fn set_prior_version(&self, ontology: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::PriorVersion, ontology.as_node())
    }

    pub fn add_prior_version(&self, ontology: &impl AsNode) -> Result<(), OntError> {
        self.add_role(Role::PriorVersion, ontology.as_node())
    }

    pub fn prior_version(&self) -> Result<Option<OntResource>, OntError> {
        self.role_view(Role::PriorVersion)
    }

    pub fn list_prior_versions(&self) -> Result<Vec<OntResource>, OntError> {
        self.role_views(Role::PriorVersion)
    }

    pub fn has_prior_version(&self, ontology: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::PriorVersion, ontology.as_node())
    }

    pub fn remove_prior_version(&self, ontology: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::PriorVersion, ontology.as_node())
    }

    // backward compatibility

    pub fn set_backward_compatible_with(&self, ontology: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::BackwardCompatibleWith, ontology.as_node())
    }

    pub fn add_backward_compatible_with(&self, ontology: &impl AsNode) -> Result<(), OntError> {
        self.add_role(Role::BackwardCompatibleWith, ontology.as_node())
    }

    pub fn backward_compatible_with(&self) -> Result<Option<OntResource>, OntError> {
        self.role_view(Role::BackwardCompatibleWith)
    }

    pub fn list_backward_compatible_with(&self) -> Result<Vec<OntResource>, OntError> {
        self.role_views(Role::BackwardCompatibleWith)
    }

    pub fn is_backward_compatible_with(&self, ontology: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::BackwardCompatibleWith, ontology.as_node())
    }

    pub fn remove_backward_compatible_with(
        &self,
        ontology: &impl AsNode,
    ) -> Result<(), OntError> {
        self.remove_role(Role::BackwardCompatibleWith, ontology.as_node())
    }

    // incompatibility

    pub fn set_incompatible_with(&self, ontology: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::IncompatibleWith, ontology.as_node())
    }

    pub fn add_incompatible_with(&self, ontology: &impl AsNode) -> Result<(), OntError> {
        self.add_role(Role::IncompatibleWith, ontology.as_node())
    }

    pub fn incompatible_with(&self) -> Result<Option<OntResource>, OntError> {
        self.role_view(Role::IncompatibleWith)
    }

    pub fn list_incompatible_with(&self) -> Result<Vec<OntResource>, OntError> {
        self.role_views(Role::IncompatibleWith)
    }

    pub fn is_incompatible_with(&self, ontology: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::IncompatibleWith, ontology.as_node())
    }

    pub fn remove_incompatible_with(&self, ontology: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::IncompatibleWith, ontology.as_node())
    }
}

facet! {
    /// An axiom stating that the members of a list are pairwise different (`owl:AllDifferent`).
    AllDifferent(OntResource) => AllDifferent
}

impl AllDifferent {
    pub fn set_distinct_members(&self, members: &OntList) -> Result<(), OntError> {
        self.set_role(Role::DistinctMembers, members.node())
    }

    /// Adds a member at the end of the list of distinct members.
    pub fn add_distinct_member(&self, member: &impl AsNode) -> Result<(), OntError> {
        self.add_role_list_value(Role::DistinctMembers, member.as_node().into_owned().into())
    }

    pub fn add_distinct_members<T: AsNode>(
        &self,
        members: impl IntoIterator<Item = T>,
    ) -> Result<(), OntError> {
        for member in members {
            self.add_distinct_member(&member)?;
        }
        Ok(())
    }

    pub fn distinct_members(&self) -> Result<Option<OntList>, OntError> {
        self.role_list(Role::DistinctMembers)
    }

    pub fn list_distinct_members(&self) -> Result<Vec<OntResource>, OntError> {
        self.role_list_views(Role::DistinctMembers)
    }

    pub fn has_distinct_member(&self, member: &impl AsNode) -> Result<bool, OntError> {
        let member = Term::from(member.as_node());
        Ok(self
            .role_list_values(Role::DistinctMembers)?
            .contains(&member))
    }

    pub fn remove_distinct_member(&self, member: &impl AsNode) -> Result<(), OntError> {
        self.remove_role_list_value(Role::DistinctMembers, member.as_node().into())
    }
}

facet! {
    /// An enumeration of data values (`owl:DataRange`).
    DataRange(OntResource) => DataRange
}

impl DataRange {
    pub fn set_one_of(&self, members: &OntList) -> Result<(), OntError> {
        self.set_role(Role::OneOf, members.node())
    }

    pub fn add_one_of(&self, member: impl Into<Literal>) -> Result<(), OntError> {
        self.add_role_list_value(Role::OneOf, member.into().into())
    }

    pub fn add_one_of_all<T: Into<Literal>>(
        &self,
        members: impl IntoIterator<Item = T>,
    ) -> Result<(), OntError> {
        for member in members {
            self.add_one_of(member)?;
        }
        Ok(())
    }

    pub fn one_of(&self) -> Result<Option<OntList>, OntError> {
        self.role_list(Role::OneOf)
    }

    /// The literals of the enumeration. Other list members are skipped.
    pub fn list_one_of(&self) -> Result<Vec<Literal>, OntError> {
        Ok(self
            .role_list_values(Role::OneOf)?
            .into_iter()
            .filter_map(|t| match t {
                Term::Literal(l) => Some(l),
                _ => None,
            })
            .collect())
    }

    pub fn has_one_of<'a>(&self, member: impl Into<TermRef<'a>>) -> Result<bool, OntError> {
        let member = member.into();
        Ok(self
            .role_list_values(Role::OneOf)?
            .iter()
            .any(|t| t.as_ref() == member))
    }

    pub fn remove_one_of<'a>(&self, member: impl Into<TermRef<'a>>) -> Result<(), OntError> {
        self.remove_role_list_value(Role::OneOf, member.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OntModel, OntModelSpec};
    use oxrdf::NamedNodeRef;

    #[test]
    fn individual_classes() -> Result<(), OntError> {
        let model = OntModel::default();
        let animal = model.create_class(Some("http://example.com/Animal"))?;
        let dog = model.create_class(Some("http://example.com/Dog"))?;
        let cat = model.create_class(Some("http://example.com/Cat"))?;
        let rex = dog.create_individual(Some("http://example.com/rex"))?;
        assert_eq!(rex.ont_class(true)?, Some(dog.clone()));
        rex.set_ont_class(&cat)?;
        assert!(!rex.has_ont_class(&dog, false)?);
        rex.add_ont_class(&animal)?;
        assert_eq!(rex.list_ont_classes(false)?.len(), 2);
        rex.remove_ont_class(&animal)?;
        assert_eq!(rex.list_ont_classes(false)?, vec![cat]);
        Ok(())
    }

    #[test]
    fn ontology_links() -> Result<(), OntError> {
        let model = OntModel::default();
        let ontology = model.create_ontology("http://example.com/o/2")?;
        let v1 = NamedNodeRef::new("http://example.com/o/1")?;
        let other = NamedNodeRef::new("http://example.com/other")?;
        ontology.add_import(&other)?;
        ontology.add_prior_version(&v1)?;
        ontology.add_backward_compatible_with(&v1)?;
        ontology.set_incompatible_with(&other)?;
        assert!(ontology.imports(&other)?);
        assert_eq!(ontology.list_imports()?.len(), 1);
        let prior = ontology.prior_version()?.and_then(|v| v.iri().map(str::to_owned));
        assert_eq!(prior.as_deref(), Some(v1.as_str()));
        assert!(ontology.is_backward_compatible_with(&v1)?);
        assert!(ontology.is_incompatible_with(&other)?);
        ontology.remove_import(&other)?;
        assert!(ontology.import()?.is_none());
        Ok(())
    }

    #[test]
    fn ontology_in_daml() -> Result<(), OntError> {
        let model = OntModel::new(OntModelSpec::DAML_MEM);
        let ontology = model.create_ontology("http://example.com/o")?;
        ontology.add_import(&NamedNodeRef::new("http://example.com/a")?)?;
        assert_eq!(model.list_imported_ontology_uris(false)?, vec!["http://example.com/a"]);
        Ok(())
    }

    #[test]
    fn all_different_members() -> Result<(), OntError> {
        let model = OntModel::default();
        let dog = model.create_class(Some("http://example.com/Dog"))?;
        let rex = dog.create_individual(Some("http://example.com/rex"))?;
        let fido = dog.create_individual(Some("http://example.com/fido"))?;
        let axiom = model.create_all_different(None)?;
        axiom.add_distinct_members([rex.clone(), fido.clone()])?;
        assert!(axiom.has_distinct_member(&fido)?);
        assert_eq!(axiom.distinct_members()?.map(|l| l.len()).transpose()?, Some(2));
        axiom.remove_distinct_member(&rex)?;
        assert_eq!(axiom.list_distinct_members()?, vec![OntResource::from(fido)]);
        assert!(model.list_all_different()?.contains(&axiom));
        Ok(())
    }

    #[test]
    fn data_range_literals() -> Result<(), OntError> {
        let model = OntModel::default();
        let range = model.create_data_range(None)?;
        range.add_one_of_all(["red", "green"])?;
        range.add_one_of(1)?;
        assert_eq!(range.list_one_of()?.len(), 3);
        assert!(range.has_one_of(&Literal::from("green"))?);
        range.remove_one_of(&Literal::from("red"))?;
        assert_eq!(
            range.list_one_of()?,
            vec![Literal::from("green"), Literal::from(1)]
        );
        assert!(OntModel::new(OntModelSpec::OWL_LITE_MEM).create_data_range(None).is_err());
        Ok(())
    }
}
