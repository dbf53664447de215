use super::{DamlOilProfile, OwlDlProfile, OwlLiteProfile, OwlProfile, Profile, RdfsProfile};
use std::fmt;
use std::str::FromStr;

static OWL: OwlProfile = OwlProfile;
static OWL_DL: OwlDlProfile = OwlDlProfile;
static OWL_LITE: OwlLiteProfile = OwlLiteProfile;
static DAML_OIL: DamlOilProfile = DamlOilProfile;
static RDFS: RdfsProfile = RdfsProfile;

/// The ontology languages with a built-in [`Profile`].
///
/// ```
/// use oxont::profile::OntLanguage;
///
/// let language: OntLanguage = "owl-lite".parse()?;
/// assert_eq!(language.profile().label(), "OWL Lite");
/// assert_eq!(
///     OntLanguage::from_iri("http://www.w3.org/TR/owl-features/#term_OWLLite"),
///     Some(language)
/// );
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OntLanguage {
    /// OWL Full.
    #[default]
    Owl,
    OwlDl,
    OwlLite,
    DamlOil,
    Rdfs,
}

impl OntLanguage {
    pub const ALL: [Self; 5] = [
        Self::Owl,
        Self::OwlDl,
        Self::OwlLite,
        Self::DamlOil,
        Self::Rdfs,
    ];

    /// The IRI identifying the language.
    #[inline]
    pub fn iri(self) -> &'static str {
        self.profile().language()
    }

    /// The short name used on the command line and in configuration files.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Owl => "owl",
            Self::OwlDl => "owl-dl",
            Self::OwlLite => "owl-lite",
            Self::DamlOil => "daml",
            Self::Rdfs => "rdfs",
        }
    }

    /// The profile of the language.
    #[inline]
    pub fn profile(self) -> &'static dyn Profile {
        match self {
            Self::Owl => &OWL,
            Self::OwlDl => &OWL_DL,
            Self::OwlLite => &OWL_LITE,
            Self::DamlOil => &DAML_OIL,
            Self::Rdfs => &RDFS,
        }
    }

    /// Looks up a language from its IRI.
    pub fn from_iri(iri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.iri() == iri)
    }
}

impl fmt::Display for OntLanguage {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OntLanguage {
    type Err = UnknownLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s) || l.iri() == s)
            .ok_or_else(|| UnknownLanguageError(s.to_owned()))
    }
}

/// An unknown ontology language name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown ontology language {0}, expecting one of owl, owl-dl, owl-lite, daml or rdfs")]
pub struct UnknownLanguageError(String);

/// Maps language IRIs to their profile.
///
/// The built-in languages are registered by default.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<(String, &'static dyn Profile)>,
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self {
            profiles: OntLanguage::ALL
                .into_iter()
                .map(|l| (l.iri().to_owned(), l.profile()))
                .collect(),
        }
    }
}

impl ProfileRegistry {
    /// Registers a profile for a language IRI, replacing the existing one.
    pub fn register(&mut self, language: impl Into<String>, profile: &'static dyn Profile) {
        let language = language.into();
        if let Some(entry) = self.profiles.iter_mut().find(|(l, _)| *l == language) {
            entry.1 = profile;
        } else {
            self.profiles.push((language, profile));
        }
    }

    /// The profile registered for a language IRI.
    pub fn get(&self, language: &str) -> Option<&'static dyn Profile> {
        self.profiles
            .iter()
            .find(|(l, _)| l == language)
            .map(|(_, p)| *p)
    }

    /// The registered language IRIs.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|(l, _)| l.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_languages_are_registered() {
        let registry = ProfileRegistry::default();
        for language in OntLanguage::ALL {
            assert_eq!(
                registry.get(language.iri()).map(|p| p.label()),
                Some(language.profile().label())
            );
        }
        assert_eq!(registry.languages().count(), 5);
    }

    #[test]
    fn daml_and_rdfs_keep_their_namespace_as_iri() {
        assert_eq!(
            OntLanguage::DamlOil.iri(),
            "http://www.daml.org/2001/03/daml+oil#"
        );
        assert_eq!("RDFS".parse::<OntLanguage>().ok(), Some(OntLanguage::Rdfs));
        assert!("owl2".parse::<OntLanguage>().is_err());
    }
}
