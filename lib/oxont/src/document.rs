//! Location and caching of ontology documents, and loading of `owl:imports` closures.

use crate::error::{CorruptionError, DocumentError, OntError};
use crate::graph::term_to_named_node;
use crate::model::OntModel;
use crate::profile::{Profile, Role};
use crate::vocab::{ont_manager, rdf};
use oxiri::Iri;
use oxrdf::{Graph, NamedNodeRef, SubjectRef, TermRef, Triple};
use oxrdfio::{RdfFormat, RdfParser};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// The policy files looked for by [`OntDocumentManager::from_search_path`], separated by `;`.
pub const DEFAULT_POLICY_PATH: &str = "file:etc/ont-policy.rdf;file:ont-policy.rdf";

/// Finds, reads and caches the documents of ontologies.
///
/// A document is identified by its public IRI.
/// An alternative location (a local file) can be registered for it with [`add_alt_entry`](Self::add_alt_entry),
/// documents without a local location can't be read.
///
/// ```
/// use oxont::OntDocumentManager;
///
/// let mut manager = OntDocumentManager::new();
/// manager.add_alt_entry("http://example.com/animals", "file:ontologies/animals.owl");
/// manager.add_prefix_mapping("http://example.com/animals#", "animals");
///
/// assert_eq!(
///     manager.do_alt_url_mapping("http://example.com/animals"),
///     "file:ontologies/animals.owl"
/// );
/// assert_eq!(manager.do_alt_url_mapping("http://example.com/plants"), "http://example.com/plants");
/// assert_eq!(manager.uri_for_prefix("animals"), Some("http://example.com/animals#"));
/// ```
#[derive(Debug)]
pub struct OntDocumentManager {
    alt_locations: FxHashMap<String, String>,
    prefixes: FxHashMap<String, String>,
    uris: FxHashMap<String, String>,
    languages: FxHashMap<String, String>,
    ignored_imports: FxHashSet<String>,
    process_imports: bool,
    cache_models: bool,
    cache: Mutex<FxHashMap<String, Graph>>,
}

impl Default for OntDocumentManager {
    fn default() -> Self {
        Self {
            alt_locations: FxHashMap::default(),
            prefixes: FxHashMap::default(),
            uris: FxHashMap::default(),
            languages: FxHashMap::default(),
            ignored_imports: FxHashSet::default(),
            process_imports: true,
            cache_models: true,
            cache: Mutex::default(),
        }
    }
}

impl OntDocumentManager {
    /// A manager without any mapping that processes imports and caches the documents it reads.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a manager configured by the policy file at `path`.
    pub fn from_policy_path(path: impl AsRef<Path>) -> Result<Self, OntError> {
        let path = path.as_ref();
        let graph = parse_file(path, guess_format(path), None)?;
        info!(path = %path.display(), "loaded the document manager policy");
        let mut manager = Self::new();
        manager.load_policy(&graph);
        Ok(manager)
    }

    /// Builds a manager configured by the first readable policy file of the `;` separated list `path`.
    ///
    /// The manager has the default configuration if no file is readable.
    pub fn from_search_path(path: &str) -> Self {
        for candidate in path.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            let Some(location) = local_path(candidate) else {
                continue;
            };
            if !location.is_file() {
                continue;
            }
            match Self::from_policy_path(&location) {
                Ok(manager) => return manager,
                Err(error) => {
                    warn!(path = %location.display(), %error, "ignoring an unreadable policy file");
                }
            }
        }
        debug!(path, "no policy file found");
        Self::new()
    }

    /// Adds the settings described by a policy graph.
    ///
    /// Each `OntologySpec` must have a `publicURI` and may have an `altURL`, a `prefix` and a `language`.
    /// `DocumentManagerPolicy` nodes set the `processImports` and `cacheModels` flags.
    pub fn load_policy(&mut self, graph: &Graph) {
        for spec in graph.subjects_for_predicate_object(rdf::TYPE, ont_manager::ONTOLOGY_SPEC) {
            let Some(public_uri) = object_iri(graph, spec, ont_manager::PUBLIC_URI) else {
                warn!(node = %spec, "ontology specification without public URI, ignored");
                continue;
            };
            if let Some(alt) = object_iri(graph, spec, ont_manager::ALT_URL) {
                self.add_alt_entry(&public_uri, &alt);
            }
            if let Some(TermRef::Literal(prefix)) =
                graph.object_for_subject_predicate(spec, ont_manager::PREFIX)
            {
                self.add_prefix_mapping(&public_uri, prefix.value());
            }
            if let Some(language) = object_iri(graph, spec, ont_manager::LANGUAGE) {
                self.add_language_entry(&public_uri, &language);
            }
        }
        for policy in
            graph.subjects_for_predicate_object(rdf::TYPE, ont_manager::DOCUMENT_MANAGER_POLICY)
        {
            if let Some(value) = object_bool(graph, policy, ont_manager::PROCESS_IMPORTS) {
                self.process_imports = value;
            }
            if let Some(value) = object_bool(graph, policy, ont_manager::CACHE_MODELS) {
                self.cache_models = value;
            }
        }
    }

    // alternative locations

    /// Registers a location to read the document `uri` from.
    pub fn add_alt_entry(&mut self, uri: &str, location: &str) {
        self.alt_locations
            .insert(uri.to_owned(), location.to_owned());
    }

    /// The location to read the document `uri` from, `uri` itself if no alternative is known.
    pub fn do_alt_url_mapping<'a>(&'a self, uri: &'a str) -> &'a str {
        self.alt_locations.get(uri).map_or(uri, String::as_str)
    }

    /// The public IRIs of the documents with an alternative location.
    pub fn list_documents(&self) -> Vec<&str> {
        let mut documents = self
            .alt_locations
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>();
        documents.sort_unstable();
        documents
    }

    // prefixes and languages

    pub fn add_prefix_mapping(&mut self, uri: &str, prefix: &str) {
        self.prefixes.insert(uri.to_owned(), prefix.to_owned());
        self.uris.insert(prefix.to_owned(), uri.to_owned());
    }

    pub fn prefix_for_uri(&self, uri: &str) -> Option<&str> {
        self.prefixes.get(uri).map(String::as_str)
    }

    pub fn uri_for_prefix(&self, prefix: &str) -> Option<&str> {
        self.uris.get(prefix).map(String::as_str)
    }

    /// Records the IRI of the language the document `uri` is written in.
    pub fn add_language_entry(&mut self, uri: &str, language: &str) {
        self.languages.insert(uri.to_owned(), language.to_owned());
    }

    pub fn language(&self, uri: &str) -> Option<&str> {
        self.languages.get(uri).map(String::as_str)
    }

    /// Drops everything known about the document `uri`.
    pub fn forget(&mut self, uri: &str) -> Result<(), OntError> {
        self.alt_locations.remove(uri);
        if let Some(prefix) = self.prefixes.remove(uri) {
            self.uris.remove(&prefix);
        }
        self.languages.remove(uri);
        self.cache()?.remove(uri);
        Ok(())
    }

    // imports

    /// Makes the import closure skip the document `uri`.
    pub fn add_ignore_import(&mut self, uri: &str) {
        self.ignored_imports.insert(uri.to_owned());
    }

    pub fn remove_ignore_import(&mut self, uri: &str) {
        self.ignored_imports.remove(uri);
    }

    pub fn is_ignored_import(&self, uri: &str) -> bool {
        self.ignored_imports.contains(uri)
    }

    pub fn list_ignored_imports(&self) -> Vec<&str> {
        let mut uris = self
            .ignored_imports
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>();
        uris.sort_unstable();
        uris
    }

    #[inline]
    pub fn process_imports(&self) -> bool {
        self.process_imports
    }

    /// Enables or disables the loading of imports. It is enabled by default.
    #[inline]
    pub fn set_process_imports(&mut self, process_imports: bool) {
        self.process_imports = process_imports;
    }

    // cache

    #[inline]
    pub fn cache_models(&self) -> bool {
        self.cache_models
    }

    /// Enables or disables the caching of the documents read. It is enabled by default.
    #[inline]
    pub fn set_cache_models(&mut self, cache_models: bool) {
        self.cache_models = cache_models;
    }

    /// Caches the content of the document `uri`. Nothing happens if caching is disabled.
    pub fn add_model(&self, uri: &str, graph: Graph) -> Result<(), OntError> {
        if self.cache_models {
            self.cache()?.insert(uri.to_owned(), graph);
        }
        Ok(())
    }

    /// The cached content of the document `uri`.
    pub fn model(&self, uri: &str) -> Result<Option<Graph>, OntError> {
        Ok(self.cache()?.get(uri).cloned())
    }

    pub fn clear_cache(&self) -> Result<(), OntError> {
        self.cache()?.clear();
        Ok(())
    }

    fn cache(&self) -> Result<MutexGuard<'_, FxHashMap<String, Graph>>, OntError> {
        self.cache
            .lock()
            .map_err(|_| CorruptionError::msg("Poisoned document cache").into())
    }

    // reading

    /// Reads the document `uri` from its location.
    ///
    /// The location must be a local path or a `file:` IRI.
    /// The serialization is guessed from the file extension, RDF/XML is the default.
    pub fn read_graph(&self, uri: &str) -> Result<Graph, OntError> {
        let location = self.do_alt_url_mapping(uri);
        let path =
            local_path(location).ok_or_else(|| DocumentError::Unresolvable(uri.to_owned()))?;
        let base_iri = Iri::parse(uri).is_ok().then_some(uri);
        parse_file(&path, guess_format(&path), base_iri)
    }

    /// The content of the document `uri`, from the cache if possible.
    pub fn document(&self, uri: &str) -> Result<Graph, OntError> {
        if let Some(graph) = self.model(uri)? {
            debug!(uri, "document found in cache");
            return Ok(graph);
        }
        let graph = self.read_graph(uri)?;
        self.add_model(uri, graph.clone())?;
        Ok(graph)
    }

    /// Adds the closure of the imports of `model` as sub-graphs.
    ///
    /// Documents are loaded breadth-first, each of them once.
    /// Documents that can't be read are skipped with a warning.
    pub fn load_imports(&self, model: &OntModel) -> Result<(), OntError> {
        if !self.process_imports {
            return Ok(());
        }
        let profile = model.profile();
        let base = base_ontologies(model)?;
        let mut queue = VecDeque::from(model.list_imported_ontology_uris(true)?);
        while let Some(uri) = queue.pop_front() {
            if base.contains(&uri) || model.has_loaded_import(&uri)? {
                continue;
            }
            if self.is_ignored_import(&uri) {
                debug!(%uri, "import ignored");
                continue;
            }
            model.add_loaded_import(&uri)?;
            let graph = match self.document(&uri) {
                Ok(graph) => graph,
                Err(error) => {
                    warn!(%uri, %error, "cannot load import");
                    continue;
                }
            };
            info!(%uri, triples = graph.len(), "import loaded");
            queue.extend(imports_of(&graph, profile));
            model.add_sub_graph(&uri, graph)?;
        }
        Ok(())
    }
}

/// The named ontologies described or importing others in the base graph of the model.
fn base_ontologies(model: &OntModel) -> Result<Vec<String>, OntError> {
    let state = model.read()?;
    let base = state.graph.base();
    let mut subjects = Vec::new();
    if let Some(ontology) = state.term(Role::Ontology) {
        subjects.extend(base.subjects_for_predicate_object(rdf::TYPE, ontology));
    }
    if let Some(imports) = state.term(Role::Imports) {
        subjects.extend(base.triples_for_predicate(imports).map(|t| t.subject));
    }
    let mut uris = Vec::<String>::new();
    for subject in subjects {
        if let SubjectRef::NamedNode(node) = subject {
            if !uris.iter().any(|u| u == node.as_str()) {
                uris.push(node.as_str().to_owned());
            }
        }
    }
    Ok(uris)
}

/// The IRIs of the documents imported by the graph.
fn imports_of(graph: &Graph, profile: &dyn Profile) -> Vec<String> {
    let Some(imports) = profile.term(Role::Imports) else {
        return Vec::new();
    };
    graph
        .triples_for_predicate(imports)
        .filter_map(|t| term_to_named_node(t.object))
        .map(|n| n.into_string())
        .collect()
}

fn object_iri(
    graph: &Graph,
    subject: SubjectRef<'_>,
    predicate: NamedNodeRef<'_>,
) -> Option<String> {
    graph
        .object_for_subject_predicate(subject, predicate)
        .and_then(term_to_named_node)
        .map(|n| n.into_string())
}

fn object_bool(
    graph: &Graph,
    subject: SubjectRef<'_>,
    predicate: NamedNodeRef<'_>,
) -> Option<bool> {
    let Some(TermRef::Literal(value)) =
        graph.object_for_subject_predicate(subject, predicate)
    else {
        return None;
    };
    match value.value().trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        other => {
            warn!(value = other, %predicate, "invalid boolean in policy");
            None
        }
    }
}

/// The local file a location denotes: a path or a `file:` IRI.
fn local_path(location: &str) -> Option<PathBuf> {
    if let Some(rest) = location.strip_prefix("file://") {
        // only local authorities
        let path = rest.strip_prefix("localhost").unwrap_or(rest);
        return path.starts_with('/').then(|| PathBuf::from(path));
    }
    if let Some(path) = location.strip_prefix("file:") {
        return Some(PathBuf::from(path));
    }
    if has_scheme(location) {
        return None;
    }
    Some(PathBuf::from(location))
}

/// Checks for an IRI scheme. Single letters are Windows drives.
fn has_scheme(location: &str) -> bool {
    let Some((scheme, _)) = location.split_once(':') else {
        return false;
    };
    scheme.len() > 1
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn guess_format(path: &Path) -> RdfFormat {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("owl" | "daml" | "rdfs" | "xml") | None => RdfFormat::RdfXml,
        Some(extension) => RdfFormat::from_extension(extension).unwrap_or(RdfFormat::RdfXml),
    }
}

fn parse_file(path: &Path, format: RdfFormat, base_iri: Option<&str>) -> Result<Graph, OntError> {
    let file = File::open(path)?;
    let mut parser = RdfParser::from_format(format);
    if let Some(base_iri) = base_iri {
        parser = parser.with_base_iri(base_iri)?;
    }
    let mut graph = Graph::new();
    for quad in parser
        .without_named_graphs()
        .rename_blank_nodes()
        .for_reader(BufReader::new(file))
    {
        graph.insert(&Triple::from(quad?));
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OntModelSpec;
    use std::fs;
    use tempfile::TempDir;

    const A: &str = "http://example.com/a";
    const B: &str = "http://example.com/b";

    fn write(dir: &TempDir, name: &str, content: &str) -> Result<String, OntError> {
        let path = dir.path().join(name);
        fs::write(&path, content)?;
        Ok(format!("file:{}", path.display()))
    }

    /// Two documents importing each other and a model importing the first one.
    fn setup() -> Result<(TempDir, OntDocumentManager, OntModel), OntError> {
        let dir = TempDir::new()?;
        let mut manager = OntDocumentManager::new();
        let a = write(
            &dir,
            "a.ttl",
            "@prefix owl: <http://www.w3.org/2002/07/owl#> .
            <http://example.com/a> a owl:Ontology ; owl:imports <http://example.com/b> .
            <http://example.com/A> a owl:Class .",
        )?;
        let b = write(
            &dir,
            "b.nt",
            "<http://example.com/b> <http://www.w3.org/2002/07/owl#imports> <http://example.com/a> .
            <http://example.com/B> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#Class> .",
        )?;
        manager.add_alt_entry(A, &a);
        manager.add_alt_entry(B, &b);
        let model = OntModel::new(OntModelSpec::OWL_MEM);
        model
            .create_ontology("http://example.com/main")?
            .add_import(&NamedNodeRef::new(A)?)?;
        Ok((dir, manager, model))
    }

    #[test]
    fn import_closure_with_cycle() -> Result<(), OntError> {
        let (_dir, manager, model) = setup()?;
        model.load_imports(&manager)?;
        assert_eq!(model.list_loaded_imports()?, vec![A, B]);
        assert_eq!(model.count_sub_graphs()?, 2);
        assert!(model.get_ont_class("http://example.com/B")?.is_some());
        assert_eq!(model.list_imported_ontology_uris(true)?.len(), 2);
        assert!(manager.model(B)?.is_some());
        Ok(())
    }

    #[test]
    fn imports_of_the_base_ontology_are_not_loaded() -> Result<(), OntError> {
        let (dir, mut manager, model) = setup()?;
        let c = write(
            &dir,
            "c.ttl",
            "<http://example.com/c> <http://www.w3.org/2002/07/owl#imports> <http://example.com/main> .",
        )?;
        let main = write(
            &dir,
            "main.ttl",
            "<http://example.com/Main> a <http://www.w3.org/2002/07/owl#Class> .",
        )?;
        manager.add_alt_entry("http://example.com/c", &c);
        manager.add_alt_entry("http://example.com/main", &main);
        model
            .get_ontology("http://example.com/main")?
            .ok_or_else(|| OntError::InvalidValue("no main ontology".into()))?
            .add_import(&NamedNodeRef::new("http://example.com/c")?)?;
        model.load_imports(&manager)?;
        let mut loaded = model.list_loaded_imports()?;
        loaded.sort();
        assert_eq!(loaded, vec![A, B, "http://example.com/c"]);
        assert_eq!(model.count_sub_graphs()?, 3);
        assert!(model.get_ont_class("http://example.com/Main")?.is_none());
        Ok(())
    }

    #[test]
    fn ignored_and_disabled_imports() -> Result<(), OntError> {
        let (_dir, mut manager, model) = setup()?;
        manager.add_ignore_import(B);
        model.load_imports(&manager)?;
        assert_eq!(model.list_loaded_imports()?, vec![A]);

        let (_dir, mut manager, model) = setup()?;
        manager.set_process_imports(false);
        model.load_imports(&manager)?;
        assert_eq!(model.count_sub_graphs()?, 0);
        Ok(())
    }

    #[test]
    fn unreadable_imports_are_skipped() -> Result<(), OntError> {
        let manager = OntDocumentManager::new();
        let model = OntModel::default();
        model
            .create_ontology("http://example.com/main")?
            .add_import(&NamedNodeRef::new("http://example.com/remote")?)?;
        model.load_imports(&manager)?;
        assert_eq!(model.count_sub_graphs()?, 0);
        assert!(matches!(
            manager.read_graph("http://example.com/remote"),
            Err(OntError::Document(DocumentError::Unresolvable(_)))
        ));
        Ok(())
    }

    #[test]
    fn cache_can_be_disabled_and_cleared() -> Result<(), OntError> {
        let (_dir, mut manager, _) = setup()?;
        manager.document(A)?;
        assert!(manager.model(A)?.is_some());
        manager.clear_cache()?;
        assert!(manager.model(A)?.is_none());
        manager.set_cache_models(false);
        manager.document(A)?;
        assert!(manager.model(A)?.is_none());
        Ok(())
    }

    #[test]
    fn policy_file() -> Result<(), OntError> {
        let dir = TempDir::new()?;
        let policy = dir.path().join("ont-policy.ttl");
        fs::write(
            &policy,
            "@prefix m: <http://jena.hpl.hp.com/schemas/2003/03/ont-manager#> .
            [] a m:DocumentManagerPolicy ; m:processImports false ; m:cacheModels \"true\" .
            [] a m:OntologySpec ;
                m:publicURI <http://example.com/a> ;
                m:altURL <file:local/a.owl> ;
                m:prefix \"a\" ;
                m:language <http://www.w3.org/2002/07/owl#> .
            [] a m:OntologySpec ; m:prefix \"orphan\" .",
        )?;
        let manager = OntDocumentManager::from_policy_path(&policy)?;
        assert!(!manager.process_imports());
        assert!(manager.cache_models());
        assert_eq!(manager.do_alt_url_mapping(A), "file:local/a.owl");
        assert_eq!(manager.prefix_for_uri(A), Some("a"));
        assert_eq!(manager.language(A), Some("http://www.w3.org/2002/07/owl#"));
        assert_eq!(manager.uri_for_prefix("orphan"), None);
        assert_eq!(manager.list_documents(), vec![A]);
        Ok(())
    }

    #[test]
    fn search_path_falls_back_to_defaults() {
        let manager = OntDocumentManager::from_search_path("file:does/not/exist.rdf;");
        assert!(manager.process_imports());
        assert!(manager.list_documents().is_empty());
    }

    #[test]
    fn locations() {
        assert_eq!(local_path("file:///tmp/a.owl"), Some(PathBuf::from("/tmp/a.owl")));
        assert_eq!(local_path("file://localhost/tmp/a.owl"), Some(PathBuf::from("/tmp/a.owl")));
        assert_eq!(local_path("file://host/a.owl"), None);
        assert_eq!(local_path("file:a.owl"), Some(PathBuf::from("a.owl")));
        assert_eq!(local_path("C:\\a.owl"), Some(PathBuf::from("C:\\a.owl")));
        assert_eq!(local_path("https://example.com/a.owl"), None);
        assert_eq!(guess_format(Path::new("a.OWL")), RdfFormat::RdfXml);
        assert_eq!(guess_format(Path::new("a.ttl")), RdfFormat::Turtle);
        assert_eq!(guess_format(Path::new("a")), RdfFormat::RdfXml);
    }
}
