//! The graph an ontology model is built on.

use oxrdf::vocab::rdf;
use oxrdf::{
    Graph, NamedNode, NamedNodeRef, NamedOrBlankNode, NamedOrBlankNodeRef, SubjectRef, Term,
    TermRef, Triple, TripleRef,
};
use rustc_hash::FxHashSet;
use std::hash::Hash;
use std::iter::once;

/// A writable base graph together with read-only sub-graphs (usually imported ontologies).
///
/// Reads see the union of all the graphs, writes only ever touch the base graph.
///
/// ```
/// use oxont::OntGraph;
/// use oxrdf::{Graph, NamedNodeRef, TripleRef};
///
/// let ex = NamedNodeRef::new("http://example.com/a")?;
/// let mut import = Graph::new();
/// import.insert(TripleRef::new(ex, ex, ex));
///
/// let mut graph = OntGraph::default();
/// graph.add_sub_graph("http://example.com/import", import);
/// assert!(graph.contains(TripleRef::new(ex, ex, ex)));
/// assert!(!graph.is_in_base(TripleRef::new(ex, ex, ex)));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct OntGraph {
    base: Graph,
    sub_graphs: Vec<(String, Graph)>,
}

impl OntGraph {
    /// Wraps an existing graph as base graph.
    #[inline]
    pub fn new(base: Graph) -> Self {
        Self {
            base,
            sub_graphs: Vec::new(),
        }
    }

    /// The writable base graph.
    #[inline]
    pub fn base(&self) -> &Graph {
        &self.base
    }

    fn graphs(&self) -> impl Iterator<Item = &Graph> {
        once(&self.base).chain(self.sub_graphs.iter().map(|(_, g)| g))
    }

    /// Number of triples in the base graph.
    #[inline]
    pub fn len(&self) -> usize {
        self.base.len()
    }

    /// Checks if the base graph is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Iterates over the triples of all the graphs. A triple asserted in several graphs is returned several times.
    pub fn iter(&self) -> impl Iterator<Item = TripleRef<'_>> {
        self.graphs().flat_map(Graph::iter)
    }

    pub fn contains<'a>(&self, triple: impl Into<TripleRef<'a>>) -> bool {
        let triple = triple.into();
        self.graphs().any(|g| g.contains(triple))
    }

    /// Checks if the base graph contains the triple.
    pub fn is_in_base<'a>(&self, triple: impl Into<TripleRef<'a>>) -> bool {
        self.base.contains(triple)
    }

    /// Checks if `subject` has at least one value for `predicate`.
    pub fn contains_some(
        &self,
        subject: NamedOrBlankNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
    ) -> bool {
        self.graphs()
            .any(|g| g.object_for_subject_predicate(subject, predicate).is_some())
    }

    /// Checks if some resource has `object` as value for `predicate`.
    pub fn is_value_of<'a>(
        &self,
        predicate: NamedNodeRef<'_>,
        object: impl Into<TermRef<'a>>,
    ) -> bool {
        let object = object.into();
        self.graphs()
            .any(|g| g.subject_for_predicate_object(predicate, object).is_some())
    }

    /// Checks if the resource occurs in a triple, as subject or as object.
    pub fn mentions(&self, node: NamedOrBlankNodeRef<'_>) -> bool {
        self.graphs().any(|g| {
            g.triples_for_subject(node).next().is_some()
                || g.triples_for_object(node).next().is_some()
        })
    }

    /// Checks if the resource is the subject of a triple.
    pub fn has_statements(&self, node: NamedOrBlankNodeRef<'_>) -> bool {
        self.graphs()
            .any(|g| g.triples_for_subject(node).next().is_some())
    }

    pub fn object(
        &self,
        subject: NamedOrBlankNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
    ) -> Option<Term> {
        self.graphs().find_map(|g| {
            g.object_for_subject_predicate(subject, predicate)
                .map(TermRef::into_owned)
        })
    }

    /// The distinct values of `predicate` for `subject`.
    pub fn objects(
        &self,
        subject: NamedOrBlankNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
    ) -> Vec<Term> {
        distinct(self.graphs().flat_map(|g| {
            g.objects_for_subject_predicate(subject, predicate)
                .map(TermRef::into_owned)
        }))
    }

    /// The distinct resources having `object` as value of `predicate`.
    pub fn subjects<'a>(
        &self,
        predicate: NamedNodeRef<'_>,
        object: impl Into<TermRef<'a>>,
    ) -> Vec<NamedOrBlankNode> {
        let object = object.into();
        distinct(self.graphs().flat_map(|g| {
            g.subjects_for_predicate_object(predicate, object)
                .filter_map(subject_to_resource)
        }))
    }

    /// The distinct resources having at least one value for `predicate`.
    pub fn subjects_with(&self, predicate: NamedNodeRef<'_>) -> Vec<NamedOrBlankNode> {
        distinct(self.graphs().flat_map(|g| {
            g.triples_for_predicate(predicate)
                .filter_map(|t| subject_to_resource(t.subject))
        }))
    }

    /// The distinct triples of the given predicate.
    pub fn triples_for_predicate(&self, predicate: NamedNodeRef<'_>) -> Vec<Triple> {
        distinct(
            self.graphs()
                .flat_map(|g| g.triples_for_predicate(predicate).map(TripleRef::into_owned)),
        )
    }

    /// The distinct triples having the resource as subject.
    pub fn triples_for_subject(&self, subject: NamedOrBlankNodeRef<'_>) -> Vec<Triple> {
        distinct(
            self.graphs()
                .flat_map(|g| g.triples_for_subject(subject).map(TripleRef::into_owned)),
        )
    }

    /// The distinct triples having the term as object.
    pub fn triples_for_object<'a>(&self, object: impl Into<TermRef<'a>>) -> Vec<Triple> {
        let object = object.into();
        distinct(
            self.graphs()
                .flat_map(|g| g.triples_for_object(object).map(TripleRef::into_owned)),
        )
    }

    pub fn has_type(&self, node: NamedOrBlankNodeRef<'_>, class: NamedNodeRef<'_>) -> bool {
        self.contains(TripleRef::new(node, rdf::TYPE, class))
    }

    /// Checks if the resource has one of the given `rdf:type`s.
    pub fn has_any_type(
        &self,
        node: NamedOrBlankNodeRef<'_>,
        classes: &[NamedNodeRef<'_>],
    ) -> bool {
        classes.iter().any(|c| self.has_type(node, *c))
    }

    /// The distinct `rdf:type` values of the resource.
    pub fn types(&self, node: NamedOrBlankNodeRef<'_>) -> Vec<Term> {
        self.objects(node, rdf::TYPE)
    }

    /// Adds a triple to the base graph. Returns `true` if it was not already in the base graph.
    pub fn insert<'a>(&mut self, triple: impl Into<TripleRef<'a>>) -> bool {
        self.base.insert(triple)
    }

    /// Removes a triple from the base graph. Returns `true` if it was in the base graph.
    pub fn remove<'a>(&mut self, triple: impl Into<TripleRef<'a>>) -> bool {
        self.base.remove(triple)
    }

    /// Removes all the values of `predicate` for `subject` from the base graph and returns them.
    pub fn remove_values(
        &mut self,
        subject: NamedOrBlankNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
    ) -> Vec<Term> {
        let values = self
            .base
            .objects_for_subject_predicate(subject, predicate)
            .map(TermRef::into_owned)
            .collect::<Vec<_>>();
        for value in &values {
            self.base.remove(TripleRef::new(subject, predicate, value));
        }
        values
    }

    /// Removes all the triples having the resource as subject from the base graph.
    pub fn remove_subject(&mut self, subject: NamedOrBlankNodeRef<'_>) {
        let triples = self
            .base
            .triples_for_subject(subject)
            .map(TripleRef::into_owned)
            .collect::<Vec<_>>();
        for triple in &triples {
            self.base.remove(triple);
        }
    }

    /// Removes all the triples having the term as object from the base graph.
    pub fn remove_object<'a>(&mut self, object: impl Into<TermRef<'a>>) {
        let object = object.into();
        let triples = self
            .base
            .triples_for_object(object)
            .map(TripleRef::into_owned)
            .collect::<Vec<_>>();
        for triple in &triples {
            self.base.remove(triple);
        }
    }

    /// Adds a read-only sub-graph. A sub-graph with the same name is replaced.
    pub fn add_sub_graph(&mut self, name: impl Into<String>, graph: Graph) {
        let name = name.into();
        if let Some((_, existing)) = self.sub_graphs.iter_mut().find(|(n, _)| *n == name) {
            *existing = graph;
        } else {
            self.sub_graphs.push((name, graph));
        }
    }

    /// Removes a sub-graph and returns it.
    pub fn remove_sub_graph(&mut self, name: &str) -> Option<Graph> {
        let position = self.sub_graphs.iter().position(|(n, _)| n == name)?;
        Some(self.sub_graphs.remove(position).1)
    }

    pub fn has_sub_graph(&self, name: &str) -> bool {
        self.sub_graphs.iter().any(|(n, _)| n == name)
    }

    pub fn sub_graph_names(&self) -> impl Iterator<Item = &str> {
        self.sub_graphs.iter().map(|(n, _)| n.as_str())
    }

    pub fn sub_graph_count(&self) -> usize {
        self.sub_graphs.len()
    }

    /// Checks if `to` can be reached from `from` by following `predicate` zero or more times.
    pub fn reaches(
        &self,
        from: NamedOrBlankNodeRef<'_>,
        to: NamedOrBlankNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
    ) -> bool {
        if from == to {
            return true;
        }
        let mut seen = FxHashSet::default();
        let mut queue = vec![from.into_owned()];
        while let Some(current) = queue.pop() {
            for next in self.objects(current.as_ref(), predicate) {
                let Some(next) = term_to_resource(next.as_ref()) else {
                    continue;
                };
                if next.as_ref() == to {
                    return true;
                }
                if seen.insert(next.clone()) {
                    queue.push(next);
                }
            }
        }
        false
    }

    /// Copies the union of all graphs into a single graph.
    pub fn to_union_graph(&self) -> Graph {
        self.iter().collect()
    }
}

impl From<Graph> for OntGraph {
    #[inline]
    fn from(graph: Graph) -> Self {
        Self::new(graph)
    }
}

pub(crate) fn subject_to_resource(subject: SubjectRef<'_>) -> Option<NamedOrBlankNode> {
    if let SubjectRef::NamedNode(node) = subject {
        Some(node.into_owned().into())
    } else if let SubjectRef::BlankNode(node) = subject {
        Some(node.into_owned().into())
    } else {
        None
    }
}

/// The resource a term denotes, `None` for literals.
pub(crate) fn term_to_resource(term: TermRef<'_>) -> Option<NamedOrBlankNode> {
    match term {
        TermRef::NamedNode(node) => Some(node.into_owned().into()),
        TermRef::BlankNode(node) => Some(node.into_owned().into()),
        _ => None,
    }
}

pub(crate) fn term_to_named_node(term: TermRef<'_>) -> Option<NamedNode> {
    if let TermRef::NamedNode(node) = term {
        Some(node.into_owned())
    } else {
        None
    }
}

/// Keeps the upper bounds `c` such that no other candidate lies strictly between the origin and `c`.
///
/// Candidates that reach each other are equivalent and are all kept.
pub(crate) fn direct_upward(
    graph: &OntGraph,
    candidates: Vec<NamedOrBlankNode>,
    predicate: NamedNodeRef<'_>,
) -> Vec<NamedOrBlankNode> {
    let keep = candidates
        .iter()
        .map(|c| {
            !candidates.iter().any(|d| {
                d != c
                    && graph.reaches(d.as_ref(), c.as_ref(), predicate)
                    && !graph.reaches(c.as_ref(), d.as_ref(), predicate)
            })
        })
        .collect::<Vec<_>>();
    candidates
        .into_iter()
        .zip(keep)
        .filter_map(|(c, keep)| keep.then_some(c))
        .collect()
}

/// Same as [`direct_upward`] for lower bounds.
pub(crate) fn direct_downward(
    graph: &OntGraph,
    candidates: Vec<NamedOrBlankNode>,
    predicate: NamedNodeRef<'_>,
) -> Vec<NamedOrBlankNode> {
    let keep = candidates
        .iter()
        .map(|c| {
            !candidates.iter().any(|d| {
                d != c
                    && graph.reaches(c.as_ref(), d.as_ref(), predicate)
                    && !graph.reaches(d.as_ref(), c.as_ref(), predicate)
            })
        })
        .collect::<Vec<_>>();
    candidates
        .into_iter()
        .zip(keep)
        .filter_map(|(c, keep)| keep.then_some(c))
        .collect()
}

fn distinct<T: Eq + Hash + Clone>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut seen = FxHashSet::default();
    values.filter(|v| seen.insert(v.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::BlankNode;

    fn ex(name: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://example.com/{name}"))
    }

    #[test]
    fn reads_see_sub_graphs_and_writes_do_not() {
        let (a, p, b) = (ex("a"), ex("p"), ex("b"));
        let mut import = Graph::new();
        import.insert(TripleRef::new(&a, &p, &b));
        let mut graph = OntGraph::default();
        graph.add_sub_graph("import", import);
        graph.insert(TripleRef::new(&a, &p, &a));

        assert_eq!(graph.objects(a.as_ref().into(), p.as_ref()).len(), 2);
        assert_eq!(graph.len(), 1);

        graph.remove(TripleRef::new(&a, &p, &b));
        assert!(graph.contains(TripleRef::new(&a, &p, &b)));
        assert_eq!(graph.remove_sub_graph("import").map(|g| g.len()), Some(1));
        assert!(!graph.contains(TripleRef::new(&a, &p, &b)));
    }

    #[test]
    fn duplicated_values_are_returned_once() {
        let (a, p, b) = (ex("a"), ex("p"), ex("b"));
        let mut import = Graph::new();
        import.insert(TripleRef::new(&a, &p, &b));
        let mut graph = OntGraph::new(import.clone());
        graph.add_sub_graph("import", import);
        assert_eq!(graph.objects(a.as_ref().into(), p.as_ref()), vec![Term::from(b.clone())]);
        assert_eq!(graph.subjects(p.as_ref(), &b), vec![NamedOrBlankNode::from(a)]);
    }

    #[test]
    fn direct_bounds_skip_intermediate_nodes() {
        let (a, b, c) = (ex("a"), ex("b"), ex("c"));
        let sub = oxrdf::vocab::rdfs::SUB_CLASS_OF;
        let mut graph = OntGraph::default();
        graph.insert(TripleRef::new(&a, sub, &b));
        graph.insert(TripleRef::new(&b, sub, &c));
        graph.insert(TripleRef::new(&a, sub, &c));
        assert!(graph.reaches(a.as_ref().into(), c.as_ref().into(), sub));
        assert!(!graph.reaches(c.as_ref().into(), a.as_ref().into(), sub));

        let supers = graph.subjects_with(sub);
        assert_eq!(supers.len(), 2);
        let candidates = vec![NamedOrBlankNode::from(b.clone()), NamedOrBlankNode::from(c.clone())];
        assert_eq!(
            direct_upward(&graph, candidates.clone(), sub),
            vec![NamedOrBlankNode::from(b.clone())]
        );
        assert_eq!(
            direct_downward(&graph, candidates, sub),
            vec![NamedOrBlankNode::from(c)]
        );
    }

    #[test]
    fn remove_values_only_touches_one_predicate() {
        let (p, q) = (ex("p"), ex("q"));
        let s = BlankNode::default();
        let mut graph = OntGraph::default();
        graph.insert(TripleRef::new(&s, &p, &ex("x")));
        graph.insert(TripleRef::new(&s, &p, &ex("y")));
        graph.insert(TripleRef::new(&s, &q, &ex("z")));
        assert_eq!(graph.remove_values(s.as_ref().into(), p.as_ref()).len(), 2);
        assert_eq!(graph.len(), 1);
        graph.remove_subject(s.as_ref().into());
        assert!(graph.is_empty());
    }
}
