use crate::class::OntClass;
use crate::error::OntError;
use crate::facet::facet;
use crate::profile::{Profile, Role};
use crate::property::OntProperty;
use crate::resource::{AsNode, OntResource};
use crate::vocab::xsd;
use oxrdf::{Literal, Term, TermRef};

facet! {
    /// A class defined by a constraint on the values of a property (`owl:Restriction`).
    ///
    /// ```
    /// use oxont::OntModel;
    ///
    /// let model = OntModel::default();
    /// let dog = model.create_class(Some("http://example.com/Dog"))?;
    /// let owns = model.create_object_property("http://example.com/owns", false)?;
    /// let r = model.create_some_values_from_restriction(None, &owns, &dog)?;
    ///
    /// assert!(r.is_some_values_from_restriction()?);
    /// assert!(!r.is_all_values_from_restriction()?);
    /// assert_eq!(r.on_property()?, Some((*owns).clone()));
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    Restriction(OntClass) => Restriction
}

/// The literal holding a cardinality.
pub(crate) fn cardinality_literal(value: u32) -> Literal {
    Literal::new_typed_literal(value.to_string(), xsd::NON_NEGATIVE_INTEGER)
}

/// Fails if the language does not allow the cardinality.
pub(crate) fn check_cardinality(profile: &dyn Profile, value: u32) -> Result<(), OntError> {
    if profile.accepts_cardinality(value) {
        Ok(())
    } else {
        Err(OntError::invalid_value(format!(
            "The cardinality {value} is not allowed in the {} profile",
            profile.label()
        )))
    }
}

fn parse_cardinality(value: &Term) -> Result<u32, OntError> {
    let Term::Literal(literal) = value else {
        return Err(OntError::invalid_value(format!(
            "The cardinality {value} is not a literal"
        )));
    };
    literal.value().trim().parse().map_err(|_| {
        OntError::invalid_value(format!("The cardinality {literal} is not a non-negative integer"))
    })
}

impl OntResource {
    fn cardinality_of(&self, role: Role) -> Result<Option<u32>, OntError> {
        self.role_values(role)?
            .first()
            .map(parse_cardinality)
            .transpose()
    }

    fn set_cardinality_of(&self, role: Role, value: u32) -> Result<(), OntError> {
        check_cardinality(self.model().profile(), value)?;
        self.set_role(role, cardinality_literal(value).as_ref())
    }

    fn has_cardinality_of(&self, role: Role, value: u32) -> Result<bool, OntError> {
        Ok(self
            .role_values(role)?
            .iter()
            .any(|v| parse_cardinality(v).is_ok_and(|v| v == value)))
    }

    /// Removes the values of `role` denoting `value`, whatever their datatype.
    fn remove_cardinality_of(&self, role: Role, value: u32) -> Result<(), OntError> {
        for term in self.role_values(role)? {
            if parse_cardinality(&term).is_ok_and(|v| v == value) {
                self.remove_role(role, &term)?;
            }
        }
        Ok(())
    }
}

impl Restriction {
    pub fn set_on_property(&self, property: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::OnProperty, property.as_node())
    }

    /// The restricted property.
    pub fn on_property(&self) -> Result<Option<OntProperty>, OntError> {
        self.role_view(Role::OnProperty)
    }

    pub fn is_on_property(&self, property: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::OnProperty, property.as_node())
    }

    pub fn remove_on_property(&self, property: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::OnProperty, property.as_node())
    }

    pub fn as_all_values_from_restriction(&self) -> Result<AllValuesFromRestriction, OntError> {
        self.view()
    }

    pub fn is_all_values_from_restriction(&self) -> Result<bool, OntError> {
        self.can_view::<AllValuesFromRestriction>()
    }

    pub fn convert_to_all_values_from_restriction(
        &self,
        class: &impl AsNode,
    ) -> Result<AllValuesFromRestriction, OntError> {
        self.set_role(Role::AllValuesFrom, class.as_node())?;
        self.view()
    }

    pub fn as_some_values_from_restriction(&self) -> Result<SomeValuesFromRestriction, OntError> {
        self.view()
    }

    pub fn is_some_values_from_restriction(&self) -> Result<bool, OntError> {
        self.can_view::<SomeValuesFromRestriction>()
    }

    pub fn convert_to_some_values_from_restriction(
        &self,
        class: &impl AsNode,
    ) -> Result<SomeValuesFromRestriction, OntError> {
        self.set_role(Role::SomeValuesFrom, class.as_node())?;
        self.view()
    }

    pub fn as_has_value_restriction(&self) -> Result<HasValueRestriction, OntError> {
        self.view()
    }

    pub fn is_has_value_restriction(&self) -> Result<bool, OntError> {
        self.can_view::<HasValueRestriction>()
    }

    pub fn convert_to_has_value_restriction(
        &self,
        value: impl Into<Term>,
    ) -> Result<HasValueRestriction, OntError> {
        let value = value.into();
        self.set_role(Role::HasValue, &value)?;
        self.view()
    }

    pub fn as_cardinality_restriction(&self) -> Result<CardinalityRestriction, OntError> {
        self.view()
    }

    pub fn is_cardinality_restriction(&self) -> Result<bool, OntError> {
        self.can_view::<CardinalityRestriction>()
    }

    pub fn convert_to_cardinality_restriction(
        &self,
        cardinality: u32,
    ) -> Result<CardinalityRestriction, OntError> {
        self.set_cardinality_of(Role::Cardinality, cardinality)?;
        self.view()
    }

    pub fn as_min_cardinality_restriction(&self) -> Result<MinCardinalityRestriction, OntError> {
        self.view()
    }

    pub fn is_min_cardinality_restriction(&self) -> Result<bool, OntError> {
        self.can_view::<MinCardinalityRestriction>()
    }

    pub fn convert_to_min_cardinality_restriction(
        &self,
        cardinality: u32,
    ) -> Result<MinCardinalityRestriction, OntError> {
        self.set_cardinality_of(Role::MinCardinality, cardinality)?;
        self.view()
    }

    pub fn as_max_cardinality_restriction(&self) -> Result<MaxCardinalityRestriction, OntError> {
        self.view()
    }

    pub fn is_max_cardinality_restriction(&self) -> Result<bool, OntError> {
        self.can_view::<MaxCardinalityRestriction>()
    }

    pub fn convert_to_max_cardinality_restriction(
        &self,
        cardinality: u32,
    ) -> Result<MaxCardinalityRestriction, OntError> {
        self.set_cardinality_of(Role::MaxCardinality, cardinality)?;
        self.view()
    }

    pub fn as_qualified_restriction(&self) -> Result<QualifiedRestriction, OntError> {
        self.view()
    }

    pub fn is_qualified_restriction(&self) -> Result<bool, OntError> {
        self.can_view::<QualifiedRestriction>()
    }

    pub fn convert_to_qualified_restriction(
        &self,
        class: &impl AsNode,
    ) -> Result<QualifiedRestriction, OntError> {
        self.set_role(Role::HasClassQ, class.as_node())?;
        self.view()
    }

    pub fn as_cardinality_q_restriction(&self) -> Result<CardinalityQRestriction, OntError> {
        self.view()
    }

    pub fn is_cardinality_q_restriction(&self) -> Result<bool, OntError> {
        self.can_view::<CardinalityQRestriction>()
    }

    pub fn convert_to_cardinality_q_restriction(
        &self,
        cardinality: u32,
        class: &impl AsNode,
    ) -> Result<CardinalityQRestriction, OntError> {
        self.set_cardinality_of(Role::CardinalityQ, cardinality)?;
        self.set_role(Role::HasClassQ, class.as_node())?;
        self.view()
    }

    pub fn as_min_cardinality_q_restriction(
        &self,
    ) -> Result<MinCardinalityQRestriction, OntError> {
        self.view()
    }

    pub fn is_min_cardinality_q_restriction(&self) -> Result<bool, OntError> {
        self.can_view::<MinCardinalityQRestriction>()
    }

    pub fn convert_to_min_cardinality_q_restriction(
        &self,
        cardinality: u32,
        class: &impl AsNode,
    ) -> Result<MinCardinalityQRestriction, OntError> {
        self.set_cardinality_of(Role::MinCardinalityQ, cardinality)?;
        self.set_role(Role::HasClassQ, class.as_node())?;
        self.view()
    }

    pub fn as_max_cardinality_q_restriction(
        &self,
    ) -> Result<MaxCardinalityQRestriction, OntError> {
        self.view()
    }

    pub fn is_max_cardinality_q_restriction(&self) -> Result<bool, OntError> {
        self.can_view::<MaxCardinalityQRestriction>()
    }

    pub fn convert_to_max_cardinality_q_restriction(
        &self,
        cardinality: u32,
        class: &impl AsNode,
    ) -> Result<MaxCardinalityQRestriction, OntError> {
        self.set_cardinality_of(Role::MaxCardinalityQ, cardinality)?;
        self.set_role(Role::HasClassQ, class.as_node())?;
        self.view()
    }
}

facet! {
    /// A restriction requiring a property to have a given value (`owl:hasValue`).
    HasValueRestriction(Restriction) => HasValueRestriction
}

impl HasValueRestriction {
    pub fn set_has_value(&self, value: impl Into<Term>) -> Result<(), OntError> {
        let value = value.into();
        self.set_role(Role::HasValue, &value)
    }

    /// The required value, an individual or a literal.
    pub fn has_value(&self) -> Result<Option<Term>, OntError> {
        Ok(self.role_values(Role::HasValue)?.into_iter().next())
    }

    pub fn has_has_value<'a>(&self, value: impl Into<TermRef<'a>>) -> Result<bool, OntError> {
        self.has_role(Role::HasValue, value)
    }

    pub fn remove_has_value<'a>(&self, value: impl Into<TermRef<'a>>) -> Result<(), OntError> {
        self.remove_role(Role::HasValue, value)
    }
}

facet! {
    /// A restriction on all the values of a property (`owl:allValuesFrom`, `daml:toClass`).
    AllValuesFromRestriction(Restriction) => AllValuesFromRestriction
}

impl AllValuesFromRestriction {
    pub fn set_all_values_from(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::AllValuesFrom, class.as_node())
    }

    /// The class or datatype all the values belong to.
    pub fn all_values_from(&self) -> Result<Option<OntResource>, OntError> {
        self.role_view(Role::AllValuesFrom)
    }

    pub fn has_all_values_from(&self, class: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::AllValuesFrom, class.as_node())
    }

    pub fn remove_all_values_from(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::AllValuesFrom, class.as_node())
    }
}

facet! {
    /// A restriction requiring at least one value of a property in a class (`owl:someValuesFrom`, `daml:hasClass`).
    SomeValuesFromRestriction(Restriction) => SomeValuesFromRestriction
}

impl SomeValuesFromRestriction {
    pub fn set_some_values_from(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::SomeValuesFrom, class.as_node())
    }

    pub fn some_values_from(&self) -> Result<Option<OntResource>, OntError> {
        self.role_view(Role::SomeValuesFrom)
    }

    pub fn has_some_values_from(&self, class: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::SomeValuesFrom, class.as_node())
    }

    pub fn remove_some_values_from(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::SomeValuesFrom, class.as_node())
    }
}

/// Generates the accessors of a cardinality value.
macro_rules! cardinality_accessors {
    ($name:ident, $role:ident, $get:ident, $set:ident, $has:ident, $remove:ident) => {
        impl $name {
            /// Sets the cardinality. OWL Lite only allows 0 and 1.
            pub fn $set(&self, cardinality: u32) -> Result<(), OntError> {
                self.set_cardinality_of(Role::$role, cardinality)
            }

            /// The cardinality, an error if the value is not a non-negative integer.
            pub fn $get(&self) -> Result<Option<u32>, OntError> {
                self.cardinality_of(Role::$role)
            }

            pub fn $has(&self, cardinality: u32) -> Result<bool, OntError> {
                self.has_cardinality_of(Role::$role, cardinality)
            }

            pub fn $remove(&self, cardinality: u32) -> Result<(), OntError> {
                self.remove_cardinality_of(Role::$role, cardinality)
            }
        }
    };
}

facet! {
    /// A restriction on the exact number of values of a property.
    CardinalityRestriction(Restriction) => CardinalityRestriction
}

cardinality_accessors!(
    CardinalityRestriction,
    Cardinality,
    cardinality,
    set_cardinality,
    has_cardinality,
    remove_cardinality
);

facet! {
    MinCardinalityRestriction(Restriction) => MinCardinalityRestriction
}

cardinality_accessors!(
    MinCardinalityRestriction,
    MinCardinality,
    min_cardinality,
    set_min_cardinality,
    has_min_cardinality,
    remove_min_cardinality
);

facet! {
    MaxCardinalityRestriction(Restriction) => MaxCardinalityRestriction
}

cardinality_accessors!(
    MaxCardinalityRestriction,
    MaxCardinality,
    max_cardinality,
    set_max_cardinality,
    has_max_cardinality,
    remove_max_cardinality
);

facet! {
    /// A DAML+OIL restriction whose cardinality only counts the values in a class (`daml:hasClassQ`).
    QualifiedRestriction(Restriction) => QualifiedRestriction
}

impl QualifiedRestriction {
    pub fn set_has_class_q(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.set_role(Role::HasClassQ, class.as_node())
    }

    /// The class qualifying the counted values.
    pub fn has_class_q(&self) -> Result<Option<OntClass>, OntError> {
        self.role_view(Role::HasClassQ)
    }

    pub fn has_has_class_q(&self, class: &impl AsNode) -> Result<bool, OntError> {
        self.has_role(Role::HasClassQ, class.as_node())
    }

    pub fn remove_has_class_q(&self, class: &impl AsNode) -> Result<(), OntError> {
        self.remove_role(Role::HasClassQ, class.as_node())
    }
}

facet! {
    CardinalityQRestriction(QualifiedRestriction) => CardinalityQRestriction
}

cardinality_accessors!(
    CardinalityQRestriction,
    CardinalityQ,
    cardinality_q,
    set_cardinality_q,
    has_cardinality_q,
    remove_cardinality_q
);

facet! {
    MinCardinalityQRestriction(QualifiedRestriction) => MinCardinalityQRestriction
}

cardinality_accessors!(
    MinCardinalityQRestriction,
    MinCardinalityQ,
    min_cardinality_q,
    set_min_cardinality_q,
    has_min_cardinality_q,
    remove_min_cardinality_q
);

facet! {
    MaxCardinalityQRestriction(QualifiedRestriction) => MaxCardinalityQRestriction
}

cardinality_accessors!(
    MaxCardinalityQRestriction,
    MaxCardinalityQ,
    max_cardinality_q,
    set_max_cardinality_q,
    has_max_cardinality_q,
    remove_max_cardinality_q
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OntModel, OntModelSpec};
    use oxrdf::{NamedNode, TripleRef};

    fn ex(name: &str) -> String {
        format!("http://example.com/{name}")
    }

    #[test]
    fn values_restrictions() -> Result<(), OntError> {
        let model = OntModel::default();
        let dog = model.create_class(Some(&ex("Dog")))?;
        let owns = model.create_object_property(&ex("owns"), false)?;
        let all = model.create_all_values_from_restriction(None, &owns, &dog)?;
        assert_eq!(all.all_values_from()?, Some(OntResource::from(dog.clone())));
        assert!(all.has_all_values_from(&dog)?);
        assert!(all.is_on_property(&owns)?);

        let rex = dog.create_individual(Some(&ex("rex")))?;
        let has_rex = model.create_has_value_restriction(None, &owns, rex.node().clone())?;
        assert_eq!(has_rex.has_value()?, Some(Term::from(rex.node().clone())));
        assert!(has_rex.has_has_value(rex.node())?);
        has_rex.set_has_value(Literal::from("rex"))?;
        assert!(!has_rex.has_has_value(rex.node())?);
        assert!(has_rex.has_value()?.is_some_and(|v| v.is_literal()));

        all.remove_on_property(&owns)?;
        assert!(all.on_property()?.is_none());
        assert!(!all.is_all_values_from_restriction()?);
        assert!(all.is_restriction()?);
        Ok(())
    }

    #[test]
    fn cardinalities() -> Result<(), OntError> {
        let model = OntModel::default();
        let owns = model.create_object_property(&ex("owns"), false)?;
        let r = model.create_max_cardinality_restriction(None, &owns, 3)?;
        assert_eq!(r.max_cardinality()?, Some(3));
        assert!(r.has_max_cardinality(3)?);
        r.set_max_cardinality(4)?;
        assert_eq!(r.max_cardinality()?, Some(4));
        r.remove_max_cardinality(4)?;
        assert_eq!(r.max_cardinality()?, None);

        let c = r.convert_to_cardinality_restriction(2)?;
        assert_eq!(c.cardinality()?, Some(2));
        model.remove(TripleRef::new(
            c.node(),
            crate::vocab::owl::CARDINALITY,
            &cardinality_literal(2),
        ))?;
        model.insert(TripleRef::new(
            c.node(),
            crate::vocab::owl::CARDINALITY,
            &Literal::from("many"),
        ))?;
        assert!(matches!(c.cardinality(), Err(OntError::InvalidValue(_))));
        Ok(())
    }

    #[test]
    fn lite_cardinalities() -> Result<(), OntError> {
        let model = OntModel::new(OntModelSpec::OWL_LITE_MEM);
        let owns = model.create_object_property(&ex("owns"), false)?;
        let r = model.create_min_cardinality_restriction(None, &owns, 1)?;
        assert!(matches!(r.set_min_cardinality(2), Err(OntError::InvalidValue(_))));
        assert_eq!(r.min_cardinality()?, Some(1));
        assert!(r.convert_to_has_value_restriction(Literal::from(1)).is_err());
        Ok(())
    }

    #[test]
    fn qualified_restrictions() -> Result<(), OntError> {
        let model = OntModel::new(OntModelSpec::DAML_MEM);
        let dog = model.create_class(Some(&ex("Dog")))?;
        let owns = model.create_object_property(&ex("owns"), false)?;
        let r = model.create_cardinality_q_restriction(None, &owns, 2, &dog)?;
        assert_eq!(r.cardinality_q()?, Some(2));
        assert_eq!(r.has_class_q()?, Some(dog.clone()));
        assert!(r.is_qualified_restriction()?);
        assert!(!r.is_min_cardinality_q_restriction()?);
        let min = r.convert_to_min_cardinality_q_restriction(1, &dog)?;
        assert!(min.has_min_cardinality_q(1)?);

        let owl = OntModel::default();
        let p = owl.create_object_property(&ex("p"), false)?;
        let c = owl.create_class(None)?;
        assert!(matches!(
            owl.create_cardinality_q_restriction(None, &p, 1, &c),
            Err(OntError::Profile(_))
        ));
        Ok(())
    }

    #[test]
    fn restriction_from_plain_class() -> Result<(), OntError> {
        let model = OntModel::default();
        let a = model.create_class(Some(&ex("A")))?;
        let p = model.create_ont_property(&ex("p"))?;
        let r = a.convert_to_restriction(&p)?;
        let some = r.convert_to_some_values_from_restriction(&NamedNode::new(ex("B"))?)?;
        assert!(some.is_some_values_from_restriction()?);
        assert_eq!(
            some.some_values_from()?.and_then(|c| c.iri().map(str::to_owned)),
            Some(ex("B"))
        );
        Ok(())
    }
}
