//! Algorithms over the class hierarchy and the graph of a model.

use crate::class::OntClass;
use crate::error::OntError;
use crate::facet::Facet;
use crate::graph::term_to_resource;
use crate::model::{ModelState, OntModel};
use crate::profile::Role;
use crate::resource::AsNode;
use oxrdf::{NamedNodeRef, NamedOrBlankNode, NamedOrBlankNodeRef, TermRef, Triple};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// The lowest common named super-class of `u` and `v`, the top class of the language if there is none.
///
/// A class is a super-class of itself. Anonymous classes are traversed but never returned.
///
/// ```
/// use oxont::OntModel;
/// use oxont::tools::lowest_common_ancestor;
///
/// let model = OntModel::default();
/// let animal = model.create_class(Some("http://example.com/Animal"))?;
/// let dog = model.create_class(Some("http://example.com/Dog"))?;
/// let cat = model.create_class(Some("http://example.com/Cat"))?;
/// dog.add_super_class(&animal)?;
/// cat.add_super_class(&animal)?;
///
/// assert_eq!(lowest_common_ancestor(&model, &dog, &cat)?, animal);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn lowest_common_ancestor(
    model: &OntModel,
    u: &OntClass,
    v: &OntClass,
) -> Result<OntClass, OntError> {
    let state = model.read()?;
    let thing = state.require(Role::Thing)?;
    let thing_node = NamedOrBlankNodeRef::from(thing);
    if u.as_node() == thing_node || v.as_node() == thing_node {
        return Ok(class(model, thing.into_owned().into()));
    }
    let Some(sub_class_of) = state.term(Role::SubClassOf) else {
        return Ok(class(model, thing.into_owned().into()));
    };
    let u_ancestors = ancestors(&state, u.as_node(), sub_class_of);
    let v_ancestors = ancestors(&state, v.as_node(), sub_class_of)
        .into_iter()
        .collect::<FxHashSet<_>>();
    let common = u_ancestors
        .into_iter()
        .filter(|c| v_ancestors.contains(c) && matches!(c, NamedOrBlankNode::NamedNode(_)))
        .collect::<Vec<_>>();
    // The lowest ones are the ones no other common ancestor is below.
    let lowest = common.iter().find(|c| {
        !common.iter().any(|other| {
            other != *c && state.graph.reaches(other.as_ref(), c.as_ref(), sub_class_of)
                && !state.graph.reaches(c.as_ref(), other.as_ref(), sub_class_of)
        })
    });
    Ok(class(
        model,
        lowest
            .cloned()
            .unwrap_or_else(|| thing.into_owned().into()),
    ))
}

/// The classes reachable from `node` through `sub_class_of`, `node` included, in breadth-first order.
fn ancestors(
    state: &ModelState,
    node: NamedOrBlankNodeRef<'_>,
    sub_class_of: NamedNodeRef<'_>,
) -> Vec<NamedOrBlankNode> {
    let mut seen = vec![node.into_owned()];
    let mut queue = VecDeque::from([node.into_owned()]);
    while let Some(current) = queue.pop_front() {
        for parent in state.graph.objects(current.as_ref(), sub_class_of) {
            let Some(parent) = term_to_resource(parent.as_ref()) else {
                continue;
            };
            if !seen.contains(&parent) {
                seen.push(parent.clone());
                queue.push_back(parent);
            }
        }
    }
    seen
}

fn class(model: &OntModel, node: NamedOrBlankNode) -> OntClass {
    OntClass::wrap(model.resource(node))
}

/// The named classes at the top of the class hierarchy.
///
/// Anonymous root classes are replaced by their direct sub-classes until only named classes remain.
/// A named class is a root if all its super-classes are anonymous or the top class.
pub fn named_hierarchy_roots(model: &OntModel) -> Result<Vec<OntClass>, OntError> {
    let thing = model.read()?.term(Role::Thing);
    let mut named = Vec::new();
    let mut anonymous = VecDeque::new();
    let mut expanded = FxHashSet::default();
    partition_by_named(
        model.list_hierarchy_root_classes()?,
        thing,
        &mut named,
        &mut anonymous,
    )?;
    while let Some(class) = anonymous.pop_front() {
        if !expanded.insert(class.node().clone()) {
            continue;
        }
        partition_by_named(
            class.list_sub_classes(true)?,
            thing,
            &mut named,
            &mut anonymous,
        )?;
    }
    Ok(named)
}

fn partition_by_named(
    classes: Vec<OntClass>,
    thing: Option<NamedNodeRef<'static>>,
    named: &mut Vec<OntClass>,
    anonymous: &mut VecDeque<OntClass>,
) -> Result<(), OntError> {
    for class in classes {
        if named.contains(&class) {
            continue;
        }
        let mut is_root = true;
        for parent in class.list_super_classes(false)? {
            if !(parent.is_anon()
                || parent == class
                || thing.is_some_and(|t| parent.as_node() == NamedOrBlankNodeRef::from(t)))
            {
                is_root = false;
                break;
            }
        }
        if is_root {
            if class.is_anon() {
                anonymous.push_back(class);
            } else {
                named.push(class);
            }
        }
    }
    Ok(())
}

/// Finds the shortest path of triples from `start` to `end`, following only the triples accepted by `filter`.
///
/// The path starts with a triple whose subject is `start` and ends with a triple whose object is `end`.
/// Each triple subject is the object of the previous one and no node is passed through twice.
///
/// ```
/// use oxont::OntModel;
/// use oxont::tools::{find_shortest_path, on_predicates};
/// use oxont::vocab::rdfs;
///
/// let model = OntModel::default();
/// let animal = model.create_class(Some("http://example.com/Animal"))?;
/// let dog = model.create_class(Some("http://example.com/Dog"))?;
/// let puppy = model.create_class(Some("http://example.com/Puppy"))?;
/// dog.add_super_class(&animal)?;
/// puppy.add_super_class(&dog)?;
///
/// let filter = on_predicates(&[rdfs::SUB_CLASS_OF]);
/// let path = find_shortest_path(&model, &puppy, animal.node(), filter)?;
/// assert_eq!(path.map(|p| p.len()), Some(2));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn find_shortest_path<'a>(
    model: &OntModel,
    start: &impl AsNode,
    end: impl Into<TermRef<'a>>,
    filter: impl Fn(&Triple) -> bool,
) -> Result<Option<Vec<Triple>>, OntError> {
    let end = end.into();
    let state = model.read()?;
    let mut queue = state
        .graph
        .triples_for_subject(start.as_node())
        .into_iter()
        .filter(|t| filter(t))
        .map(|t| vec![t])
        .collect::<VecDeque<_>>();
    let mut seen = FxHashSet::default();
    while let Some(path) = queue.pop_front() {
        let Some(last) = path.last() else {
            continue;
        };
        if last.object.as_ref() == end {
            return Ok(Some(path));
        }
        let Some(terminus) = term_to_resource(last.object.as_ref()) else {
            continue;
        };
        if !seen.insert(terminus.clone()) {
            continue;
        }
        for link in state.graph.triples_for_subject(terminus.as_ref()) {
            let looping = term_to_resource(link.object.as_ref()).is_some_and(|o| seen.contains(&o));
            if filter(&link) && !looping {
                let mut next = path.clone();
                next.push(link);
                queue.push_back(next);
            }
        }
    }
    Ok(None)
}

/// A path filter accepting the triples with one of the given predicates.
pub fn on_predicates<'a>(predicates: &'a [NamedNodeRef<'a>]) -> impl Fn(&Triple) -> bool + 'a {
    move |triple| predicates.iter().any(|p| triple.predicate == *p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OntModelSpec;
    use crate::vocab::{owl, rdf, rdfs};

    fn ex(name: &str) -> String {
        format!("http://example.com/{name}")
    }

    /// A ⊒ B ⊒ D, A ⊒ C, X alone, E below an anonymous restriction.
    fn hierarchy() -> Result<OntModel, OntError> {
        let model = OntModel::new(OntModelSpec::OWL_MEM);
        let a = model.create_class(Some(&ex("A")))?;
        let b = model.create_class(Some(&ex("B")))?;
        let c = model.create_class(Some(&ex("C")))?;
        let d = model.create_class(Some(&ex("D")))?;
        model.create_class(Some(&ex("X")))?;
        b.add_super_class(&a)?;
        c.add_super_class(&a)?;
        d.add_super_class(&b)?;
        let p = model.create_object_property(&ex("p"), false)?;
        let r = model.create_some_values_from_restriction(None, &p, &owl::THING)?;
        let e = model.create_class(Some(&ex("E")))?;
        e.add_super_class(&r)?;
        Ok(model)
    }

    fn get(model: &OntModel, name: &str) -> Result<OntClass, OntError> {
        model
            .get_ont_class(&ex(name))?
            .ok_or_else(|| OntError::invalid_value(name))
    }

    #[test]
    fn lca() -> Result<(), OntError> {
        let model = hierarchy()?;
        let [a, b, c, d, x] = ["A", "B", "C", "D", "X"].map(|n| get(&model, n));
        let (a, b, c, d, x) = (a?, b?, c?, d?, x?);
        assert_eq!(lowest_common_ancestor(&model, &d, &c)?, a);
        assert_eq!(lowest_common_ancestor(&model, &b, &d)?, b);
        assert_eq!(lowest_common_ancestor(&model, &d, &d)?, d);
        assert_eq!(
            lowest_common_ancestor(&model, &x, &d)?.iri(),
            Some(owl::THING.as_str())
        );
        Ok(())
    }

    #[test]
    fn lca_ignores_anonymous_ancestors() -> Result<(), OntError> {
        let model = hierarchy()?;
        let e = get(&model, "E")?;
        let f = model.create_class(Some(&ex("F")))?;
        for parent in e.list_super_classes(false)? {
            f.add_super_class(&parent)?;
        }
        assert_eq!(
            lowest_common_ancestor(&model, &e, &f)?.iri(),
            Some(owl::THING.as_str())
        );
        Ok(())
    }

    #[test]
    fn named_roots() -> Result<(), OntError> {
        let model = hierarchy()?;
        let mut roots = named_hierarchy_roots(&model)?
            .into_iter()
            .filter_map(|c| c.iri().map(str::to_owned))
            .collect::<Vec<_>>();
        roots.sort();
        assert_eq!(roots, vec![ex("A"), ex("E"), ex("X")]);
        Ok(())
    }

    #[test]
    fn shortest_path() -> Result<(), OntError> {
        let model = hierarchy()?;
        let d = get(&model, "D")?;
        let a = get(&model, "A")?;
        let path = find_shortest_path(&model, &d, a.node(), on_predicates(&[rdfs::SUB_CLASS_OF]))?;
        let path = path.ok_or_else(|| OntError::invalid_value("no path"))?;
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].object, b_node());
        assert!(find_shortest_path(&model, &a, d.node(), |_| true)?.is_none());
        let typed = find_shortest_path(&model, &d, owl::CLASS, on_predicates(&[rdf::TYPE]))?;
        assert_eq!(typed.map(|p| p.len()), Some(1));
        Ok(())
    }

    fn b_node() -> oxrdf::Term {
        oxrdf::NamedNode::new_unchecked(ex("B")).into()
    }
}
