//! The views an ontology resource can be seen through.

use crate::model::ModelState;
use crate::profile::Role;
use crate::resource::OntResource;
use oxrdf::NamedOrBlankNodeRef;
use std::fmt;

/// A kind of view on an ontology resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FacetKind {
    OntResource,
    OntClass,
    EnumeratedClass,
    UnionClass,
    IntersectionClass,
    ComplementClass,
    Restriction,
    HasValueRestriction,
    AllValuesFromRestriction,
    SomeValuesFromRestriction,
    CardinalityRestriction,
    MinCardinalityRestriction,
    MaxCardinalityRestriction,
    QualifiedRestriction,
    CardinalityQRestriction,
    MinCardinalityQRestriction,
    MaxCardinalityQRestriction,
    OntProperty,
    ObjectProperty,
    DatatypeProperty,
    AnnotationProperty,
    FunctionalProperty,
    InverseFunctionalProperty,
    TransitiveProperty,
    SymmetricProperty,
    Individual,
    Ontology,
    AllDifferent,
    DataRange,
    List,
}

impl FacetKind {
    /// The role a profile must define for the view to exist in its language.
    pub const fn role(self) -> Option<Role> {
        Some(match self {
            Self::OntResource | Self::Individual => return None,
            Self::OntClass => Role::Class,
            Self::EnumeratedClass => Role::OneOf,
            Self::UnionClass => Role::UnionOf,
            Self::IntersectionClass => Role::IntersectionOf,
            Self::ComplementClass => Role::ComplementOf,
            Self::Restriction => Role::Restriction,
            Self::HasValueRestriction => Role::HasValue,
            Self::AllValuesFromRestriction => Role::AllValuesFrom,
            Self::SomeValuesFromRestriction => Role::SomeValuesFrom,
            Self::CardinalityRestriction => Role::Cardinality,
            Self::MinCardinalityRestriction => Role::MinCardinality,
            Self::MaxCardinalityRestriction => Role::MaxCardinality,
            Self::QualifiedRestriction => Role::HasClassQ,
            Self::CardinalityQRestriction => Role::CardinalityQ,
            Self::MinCardinalityQRestriction => Role::MinCardinalityQ,
            Self::MaxCardinalityQRestriction => Role::MaxCardinalityQ,
            Self::OntProperty => Role::Property,
            Self::ObjectProperty => Role::ObjectProperty,
            Self::DatatypeProperty => Role::DatatypeProperty,
            Self::AnnotationProperty => Role::AnnotationProperty,
            Self::FunctionalProperty => Role::FunctionalProperty,
            Self::InverseFunctionalProperty => Role::InverseFunctionalProperty,
            Self::TransitiveProperty => Role::TransitiveProperty,
            Self::SymmetricProperty => Role::SymmetricProperty,
            Self::Ontology => Role::Ontology,
            Self::AllDifferent => Role::AllDifferent,
            Self::DataRange => Role::DataRange,
            Self::List => Role::List,
        })
    }

    /// Checks if the view is a class or a class description.
    pub const fn is_class(self) -> bool {
        matches!(
            self,
            Self::OntClass
                | Self::EnumeratedClass
                | Self::UnionClass
                | Self::IntersectionClass
                | Self::ComplementClass
                | Self::Restriction
                | Self::HasValueRestriction
                | Self::AllValuesFromRestriction
                | Self::SomeValuesFromRestriction
                | Self::CardinalityRestriction
                | Self::MinCardinalityRestriction
                | Self::MaxCardinalityRestriction
                | Self::QualifiedRestriction
                | Self::CardinalityQRestriction
                | Self::MinCardinalityQRestriction
                | Self::MaxCardinalityQRestriction
        )
    }

    /// Checks if the view is a property.
    pub const fn is_property(self) -> bool {
        matches!(
            self,
            Self::OntProperty
                | Self::ObjectProperty
                | Self::DatatypeProperty
                | Self::AnnotationProperty
                | Self::FunctionalProperty
                | Self::InverseFunctionalProperty
                | Self::TransitiveProperty
                | Self::SymmetricProperty
        )
    }
}

impl fmt::Display for FacetKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A typed view on an [`OntResource`].
///
/// Use [`OntResource::view`] to get a view and [`OntResource::can_view`] to test if it exists.
pub trait Facet: Clone + Sized {
    /// The kind of this view.
    const KIND: FacetKind;

    /// Wraps a resource without any check.
    #[doc(hidden)]
    fn wrap(resource: OntResource) -> Self;

    /// The viewed resource.
    fn resource(&self) -> &OntResource;

    /// Drops the view.
    #[inline]
    fn into_resource(self) -> OntResource {
        self.resource().clone()
    }
}

/// Checks if `node` can be seen through the `kind` view in the given model state.
pub(crate) fn can_wrap(state: &ModelState, node: NamedOrBlankNodeRef<'_>, kind: FacetKind) -> bool {
    match kind {
        FacetKind::OntResource => true,
        FacetKind::EnumeratedClass
        | FacetKind::UnionClass
        | FacetKind::IntersectionClass
        | FacetKind::ComplementClass => {
            let Some(defining) = kind.role().and_then(|role| state.profile.term(role)) else {
                return false;
            };
            can_wrap(state, node, FacetKind::OntClass) && state.graph.contains_some(node, defining)
        }
        _ => state
            .profile
            .is_supported(node, &state.graph, kind, state.strict),
    }
}

/// Declares a view type wrapping its parent view.
macro_rules! facet {
    ($(#[$attr:meta])* $name:ident($parent:ty) => $kind:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name($parent);

        impl std::ops::Deref for $name {
            type Target = $parent;

            #[inline]
            fn deref(&self) -> &$parent {
                &self.0
            }
        }

        impl $crate::facet::Facet for $name {
            const KIND: $crate::facet::FacetKind = $crate::facet::FacetKind::$kind;

            #[inline]
            fn wrap(resource: $crate::resource::OntResource) -> Self {
                Self(<$parent as $crate::facet::Facet>::wrap(resource))
            }

            #[inline]
            fn resource(&self) -> &$crate::resource::OntResource {
                $crate::facet::Facet::resource(&self.0)
            }
        }

        impl From<$name> for $crate::resource::OntResource {
            #[inline]
            fn from(value: $name) -> Self {
                $crate::facet::Facet::into_resource(value)
            }
        }

        impl std::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt($crate::facet::Facet::resource(self), f)
            }
        }
    };
}

pub(crate) use facet;
