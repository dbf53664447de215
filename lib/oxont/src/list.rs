use crate::error::{ListError, OntError};
use crate::facet::{Facet, FacetKind};
use crate::graph::term_to_resource;
use crate::model::{ModelState, OntModel};
use crate::profile::Role;
use crate::resource::OntResource;
use crate::vocab::rdf;
use oxrdf::{
    BlankNode, NamedNodeRef, NamedOrBlankNode, NamedOrBlankNodeRef, Term, TermRef, TripleRef,
};
use rustc_hash::FxHashSet;
use std::fmt;
use std::ops::Deref;

/// The list terms of a profile.
#[derive(Clone, Copy)]
struct ListTerms {
    first: NamedNodeRef<'static>,
    rest: NamedNodeRef<'static>,
    nil: NamedNodeRef<'static>,
    list_type: NamedNodeRef<'static>,
}

impl ListTerms {
    fn of(state: &ModelState) -> Result<Self, OntError> {
        Ok(Self {
            first: state.require(Role::First)?,
            rest: state.require(Role::Rest)?,
            nil: state.require(Role::Nil)?,
            list_type: state.require(Role::List)?,
        })
    }

    fn is_nil(self, node: NamedOrBlankNodeRef<'_>) -> bool {
        node == NamedOrBlankNodeRef::from(self.nil)
    }
}

/// An RDF list, read and written with the list vocabulary of the model profile.
///
/// A list is identified by its head cell.
/// Operations that change the head (like [`cons`](Self::cons) or [`remove`](Self::remove)) return the new list.
///
/// ```
/// use oxont::OntModel;
/// use oxrdf::Literal;
///
/// let model = OntModel::default();
/// let list = model.create_list([Literal::from(1), Literal::from(2)])?;
/// let list = list.cons(Literal::from(0))?;
/// assert_eq!(list.len()?, 3);
/// assert_eq!(list.get(2)?, Literal::from(2).into());
/// assert!(list.is_valid()?);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OntList {
    resource: OntResource,
    strict: bool,
}

impl OntList {
    pub(crate) fn new(model: OntModel, node: NamedOrBlankNode) -> Self {
        Self {
            resource: OntResource::new(model, node),
            strict: false,
        }
    }

    fn sibling(&self, node: NamedOrBlankNode) -> Self {
        Self {
            resource: OntResource::new(self.model().clone(), node),
            strict: self.strict,
        }
    }

    /// The list terms, after a validity check if the list is strict.
    fn terms(&self, state: &ModelState) -> Result<ListTerms, OntError> {
        let terms = ListTerms::of(state)?;
        if self.strict {
            check_valid(state, terms, self.node().as_ref())?;
        }
        Ok(terms)
    }

    /// Enables the validity check before every operation.
    #[inline]
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Number of values in the list.
    pub fn len(&self) -> Result<usize, OntError> {
        let state = self.model().read()?;
        let terms = self.terms(&state)?;
        Ok(cells(&state, terms, self.node().as_ref())?.len())
    }

    /// Checks if this is the empty list (`rdf:nil`).
    pub fn is_empty(&self) -> Result<bool, OntError> {
        let state = self.model().read()?;
        let terms = self.terms(&state)?;
        Ok(terms.is_nil(self.node().as_ref()))
    }

    fn check_not_nil(&self, terms: ListTerms, msg: &'static str) -> Result<(), OntError> {
        if terms.is_nil(self.node().as_ref()) {
            Err(ListError::Empty(msg).into())
        } else {
            Ok(())
        }
    }

    /// The first value of the list.
    pub fn head(&self) -> Result<Term, OntError> {
        let state = self.model().read()?;
        let terms = self.terms(&state)?;
        self.check_not_nil(terms, "Tried to get the head of an empty list")?;
        required(&state, self.node().as_ref(), terms.first)
    }

    /// Replaces the first value of the list and returns the previous one.
    pub fn set_head(&self, value: impl Into<Term>) -> Result<Term, OntError> {
        let value = value.into();
        let mut state = self.model().write()?;
        let terms = self.terms(&state)?;
        self.check_not_nil(terms, "Tried to set the head of an empty list")?;
        let previous = required(&state, self.node().as_ref(), terms.first)?;
        state.graph.remove_values(self.node().as_ref(), terms.first);
        state
            .graph
            .insert(TripleRef::new(self.node(), terms.first, &value));
        Ok(previous)
    }

    /// The list without its first value.
    pub fn tail(&self) -> Result<Self, OntError> {
        let state = self.model().read()?;
        let terms = self.terms(&state)?;
        self.check_not_nil(terms, "Tried to get the tail of an empty list")?;
        Ok(self.sibling(required_cell(&state, self.node().as_ref(), terms.rest)?))
    }

    /// Links the head cell to another tail and returns the previous tail, which stays in the graph.
    pub fn set_tail(&self, tail: &Self) -> Result<Self, OntError> {
        let mut state = self.model().write()?;
        let terms = self.terms(&state)?;
        self.check_not_nil(terms, "Tried to set the tail of an empty list")?;
        let previous = required_cell(&state, self.node().as_ref(), terms.rest)?;
        state.graph.remove_values(self.node().as_ref(), terms.rest);
        state
            .graph
            .insert(TripleRef::new(self.node(), terms.rest, tail.node()));
        Ok(self.sibling(previous))
    }

    /// The value at position `index`, starting from 0.
    pub fn get(&self, index: usize) -> Result<Term, OntError> {
        let state = self.model().read()?;
        let terms = self.terms(&state)?;
        let (_, value) = cells(&state, terms, self.node().as_ref())?
            .into_iter()
            .nth(index)
            .ok_or(ListError::Index { index })?;
        Ok(value)
    }

    /// Replaces the value at position `index` and returns the previous one.
    pub fn replace(&self, index: usize, value: impl Into<Term>) -> Result<Term, OntError> {
        let value = value.into();
        let mut state = self.model().write()?;
        let terms = self.terms(&state)?;
        let (cell, previous) = cells(&state, terms, self.node().as_ref())?
            .into_iter()
            .nth(index)
            .ok_or(ListError::Index { index })?;
        state.graph.remove_values(cell.as_ref(), terms.first);
        state
            .graph
            .insert(TripleRef::new(&cell, terms.first, &value));
        Ok(previous)
    }

    pub fn contains<'a>(&self, value: impl Into<TermRef<'a>>) -> Result<bool, OntError> {
        Ok(self.index_of(value)?.is_some())
    }

    /// The position of the first occurrence of the value.
    pub fn index_of<'a>(&self, value: impl Into<TermRef<'a>>) -> Result<Option<usize>, OntError> {
        self.index_of_from(value, 0)
    }

    /// The position of the first occurrence of the value at or after `start`.
    pub fn index_of_from<'a>(
        &self,
        value: impl Into<TermRef<'a>>,
        start: usize,
    ) -> Result<Option<usize>, OntError> {
        let value = value.into();
        let state = self.model().read()?;
        let terms = self.terms(&state)?;
        Ok(cells(&state, terms, self.node().as_ref())?
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, (_, v))| v.as_ref() == value)
            .map(|(i, _)| i))
    }

    /// A new list with `value` as head and this list as tail.
    pub fn cons(&self, value: impl Into<Term>) -> Result<Self, OntError> {
        let value = value.into();
        let mut state = self.model().write()?;
        let terms = self.terms(&state)?;
        let cell = new_cell(&mut state, terms, value.as_ref(), self.node().as_ref());
        Ok(self.sibling(cell.into()))
    }

    /// Adds a value at the end of the list.
    ///
    /// The empty list can't be updated in place, use [`with`](Self::with) to get a new list instead.
    pub fn add(&self, value: impl Into<Term>) -> Result<(), OntError> {
        let value = value.into();
        let mut state = self.model().write()?;
        let terms = self.terms(&state)?;
        self.check_not_nil(terms, "Attempt to add() to the empty list")?;
        append_cell(&mut state, terms, self.node().as_ref(), value.as_ref())?;
        Ok(())
    }

    /// Adds a value at the end of the list and returns the list, a new one if this list is empty.
    pub fn with(&self, value: impl Into<Term>) -> Result<Self, OntError> {
        let value = value.into();
        let mut state = self.model().write()?;
        self.terms(&state)?;
        let head = list_with(&mut state, self.node().as_ref(), value)?;
        Ok(self.sibling(head))
    }

    /// A copy of this list followed by `list`. `list` is shared, not copied.
    pub fn append(&self, list: &Self) -> Result<Self, OntError> {
        let mut state = self.model().write()?;
        let terms = self.terms(&state)?;
        if terms.is_nil(self.node().as_ref()) {
            return Ok(list.clone());
        }
        let values = cell_values(&state, terms, self.node().as_ref())?;
        let head = build_cells(&mut state, terms, values, list.node().as_ref());
        Ok(self.sibling(head))
    }

    /// A copy of this list followed by the values.
    pub fn append_values<T: Into<Term>>(
        &self,
        values: impl IntoIterator<Item = T>,
    ) -> Result<Self, OntError> {
        let mut state = self.model().write()?;
        let terms = self.terms(&state)?;
        let mut all = cell_values(&state, terms, self.node().as_ref())?;
        all.extend(values.into_iter().map(Into::into));
        let head = build_cells(&mut state, terms, all, terms.nil.into());
        Ok(self.sibling(head))
    }

    /// Links the last cell of this list to `list`, in place.
    pub fn concatenate(&self, list: &Self) -> Result<(), OntError> {
        let mut state = self.model().write()?;
        let terms = self.terms(&state)?;
        self.check_not_nil(terms, "Tried to concatenate onto the empty list")?;
        let last = last_cell(&state, terms, self.node().as_ref())?;
        state.graph.remove_values(last.as_ref(), terms.rest);
        state
            .graph
            .insert(TripleRef::new(&last, terms.rest, list.node()));
        Ok(())
    }

    /// Adds the values at the end of this list, in place.
    pub fn concatenate_values<T: Into<Term>>(
        &self,
        values: impl IntoIterator<Item = T>,
    ) -> Result<(), OntError> {
        let mut state = self.model().write()?;
        let terms = self.terms(&state)?;
        self.check_not_nil(terms, "Tried to concatenate onto the empty list")?;
        let values = values.into_iter().map(Into::into).collect();
        let tail = build_cells(&mut state, terms, values, terms.nil.into());
        let last = last_cell(&state, terms, self.node().as_ref())?;
        state.graph.remove_values(last.as_ref(), terms.rest);
        state.graph.insert(TripleRef::new(&last, terms.rest, &tail));
        Ok(())
    }

    /// A new list with the same values.
    pub fn copy(&self) -> Result<Self, OntError> {
        let mut state = self.model().write()?;
        let terms = self.terms(&state)?;
        let values = cell_values(&state, terms, self.node().as_ref())?;
        let head = build_cells(&mut state, terms, values, terms.nil.into());
        Ok(self.sibling(head))
    }

    /// Calls `f` on each value.
    pub fn for_each(&self, mut f: impl FnMut(&Term)) -> Result<(), OntError> {
        for value in self.to_vec()? {
            f(&value);
        }
        Ok(())
    }

    /// Folds the values from the head.
    pub fn fold<A>(&self, init: A, mut f: impl FnMut(A, &Term) -> A) -> Result<A, OntError> {
        let mut accumulator = init;
        for value in self.to_vec()? {
            accumulator = f(accumulator, &value);
        }
        Ok(accumulator)
    }

    /// Iterates over the values. Each step reads the model, a malformed cell ends the iteration with an error.
    pub fn iter(&self) -> ListIter {
        ListIter {
            model: self.model().clone(),
            current: Some(self.node().clone()),
            seen: FxHashSet::default(),
        }
    }

    pub fn to_vec(&self) -> Result<Vec<Term>, OntError> {
        let state = self.model().read()?;
        let terms = self.terms(&state)?;
        cell_values(&state, terms, self.node().as_ref())
    }

    /// Removes the head cell from the graph and returns the tail.
    pub fn remove_head(&self) -> Result<Self, OntError> {
        let mut state = self.model().write()?;
        let terms = self.terms(&state)?;
        self.check_not_nil(terms, "Attempted to delete the head of a nil list")?;
        let tail = required_cell(&state, self.node().as_ref(), terms.rest)?;
        state.graph.remove_subject(self.node().as_ref());
        Ok(self.sibling(tail))
    }

    /// Removes the first occurrence of the value and returns the resulting list.
    ///
    /// The result is this list except when the head is removed.
    pub fn remove<'a>(&self, value: impl Into<TermRef<'a>>) -> Result<Self, OntError> {
        let mut state = self.model().write()?;
        self.terms(&state)?;
        let head = list_remove_value(&mut state, self.node().as_ref(), value.into())?;
        Ok(self.sibling(head))
    }

    /// Removes all the cells of the list from the graph. The values themselves are kept.
    pub fn remove_all(&self) -> Result<(), OntError> {
        let mut state = self.model().write()?;
        self.terms(&state)?;
        remove_list_cells(&mut state, self.node().as_ref());
        Ok(())
    }

    /// Checks if both lists hold the same values in the same order.
    pub fn same_list_as(&self, other: &Self) -> Result<bool, OntError> {
        let state = self.model().read()?;
        let terms = self.terms(&state)?;
        if !self.model().ptr_eq(other.model()) {
            let other_state = other.model().read()?;
            let other_terms = ListTerms::of(&other_state)?;
            return Ok(cell_values(&state, terms, self.node().as_ref())?
                == cell_values(&other_state, other_terms, other.node().as_ref())?);
        }
        Ok(cell_values(&state, terms, self.node().as_ref())?
            == cell_values(&state, terms, other.node().as_ref())?)
    }

    /// Checks the list structure, see [`check_valid`](Self::check_valid).
    pub fn is_valid(&self) -> Result<bool, OntError> {
        match self.check_valid() {
            Ok(()) => Ok(true),
            Err(OntError::List(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Walks the whole list and fails with a [`ListError::Invalid`] if a cell does not have exactly one first value
    /// and one rest, if a cell is visited twice, or if a cell lacks the list type when the profile does not use `rdf:List`.
    pub fn check_valid(&self) -> Result<(), OntError> {
        let state = self.model().read()?;
        let terms = ListTerms::of(&state)?;
        check_valid(&state, terms, self.node().as_ref())
    }
}

impl Deref for OntList {
    type Target = OntResource;

    #[inline]
    fn deref(&self) -> &OntResource {
        &self.resource
    }
}

impl Facet for OntList {
    const KIND: FacetKind = FacetKind::List;

    #[inline]
    fn wrap(resource: OntResource) -> Self {
        Self {
            resource,
            strict: false,
        }
    }

    #[inline]
    fn resource(&self) -> &OntResource {
        &self.resource
    }
}

impl From<OntList> for OntResource {
    #[inline]
    fn from(list: OntList) -> Self {
        list.resource
    }
}

impl fmt::Debug for OntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OntList")
            .field("node", self.node())
            .field("strict", &self.strict)
            .finish()
    }
}

impl fmt::Display for OntList {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.resource.fmt(f)
    }
}

impl IntoIterator for &OntList {
    type Item = Result<Term, OntError>;
    type IntoIter = ListIter;

    #[inline]
    fn into_iter(self) -> ListIter {
        self.iter()
    }
}

/// An iterator over the values of an [`OntList`].
#[must_use]
pub struct ListIter {
    model: OntModel,
    current: Option<NamedOrBlankNode>,
    seen: FxHashSet<NamedOrBlankNode>,
}

impl ListIter {
    fn step(&mut self, cell: NamedOrBlankNode) -> Result<Option<Term>, OntError> {
        let state = self.model.read()?;
        let terms = ListTerms::of(&state)?;
        if terms.is_nil(cell.as_ref()) {
            return Ok(None);
        }
        if !self.seen.insert(cell.clone()) {
            return Err(cycle_error(&cell).into());
        }
        let value = required(&state, cell.as_ref(), terms.first)?;
        self.current = Some(required_cell(&state, cell.as_ref(), terms.rest)?);
        Ok(Some(value))
    }
}

impl Iterator for ListIter {
    type Item = Result<Term, OntError>;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.current.take()?;
        self.step(cell).transpose()
    }
}

/// Builds a list holding `values` and returns its head, `NIL` if there are no values.
pub(crate) fn build_list(
    state: &mut ModelState,
    values: Vec<Term>,
) -> Result<NamedOrBlankNode, OntError> {
    let terms = ListTerms::of(state)?;
    Ok(build_cells(state, terms, values, terms.nil.into()))
}

/// The values of the list starting at `head`.
pub(crate) fn list_values(
    state: &ModelState,
    head: NamedOrBlankNodeRef<'_>,
) -> Result<Vec<Term>, OntError> {
    cell_values(state, ListTerms::of(state)?, head)
}

/// The cells holding a value that are not the rest of another cell.
pub(crate) fn list_heads(state: &ModelState) -> Result<Vec<NamedOrBlankNode>, OntError> {
    let terms = ListTerms::of(state)?;
    let mut heads = state.graph.subjects_with(terms.first);
    heads.retain(|cell| !state.graph.is_value_of(terms.rest, cell.as_ref()));
    Ok(heads)
}

/// Adds a value at the end of the list and returns its head, a new head if the list was `NIL`.
pub(crate) fn list_with(
    state: &mut ModelState,
    head: NamedOrBlankNodeRef<'_>,
    value: Term,
) -> Result<NamedOrBlankNode, OntError> {
    let terms = ListTerms::of(state)?;
    if terms.is_nil(head) {
        return Ok(new_cell(state, terms, value.as_ref(), terms.nil.into()).into());
    }
    append_cell(state, terms, head, value.as_ref())?;
    Ok(head.into_owned())
}

/// Removes the first cell holding `value` and returns the head of the resulting list.
pub(crate) fn list_remove_value(
    state: &mut ModelState,
    head: NamedOrBlankNodeRef<'_>,
    value: TermRef<'_>,
) -> Result<NamedOrBlankNode, OntError> {
    let terms = ListTerms::of(state)?;
    let cells = cells(state, terms, head)?;
    let Some(position) = cells.iter().position(|(_, v)| v.as_ref() == value) else {
        return Ok(head.into_owned());
    };
    let cell = &cells[position].0;
    let tail = required_cell(state, cell.as_ref(), terms.rest)?;
    state.graph.remove_subject(cell.as_ref());
    if position == 0 {
        return Ok(tail);
    }
    let previous = &cells[position - 1].0;
    state.graph.remove_values(previous.as_ref(), terms.rest);
    state
        .graph
        .insert(TripleRef::new(previous, terms.rest, &tail));
    Ok(head.into_owned())
}

/// Removes the cells of the list from the base graph, as far as the list is well formed.
pub(crate) fn remove_list_cells(state: &mut ModelState, head: NamedOrBlankNodeRef<'_>) {
    let (Some(rest), Some(nil)) = (state.term(Role::Rest), state.term(Role::Nil)) else {
        return;
    };
    let mut seen = FxHashSet::default();
    let mut current = Some(head.into_owned());
    while let Some(cell) = current.take() {
        if cell.as_ref() == NamedOrBlankNodeRef::from(nil) || !seen.insert(cell.clone()) {
            break;
        }
        current = state
            .graph
            .object(cell.as_ref(), rest)
            .and_then(|t| term_to_resource(t.as_ref()));
        state.graph.remove_subject(cell.as_ref());
    }
}

fn new_cell(
    state: &mut ModelState,
    terms: ListTerms,
    value: TermRef<'_>,
    rest: NamedOrBlankNodeRef<'_>,
) -> BlankNode {
    let cell = BlankNode::default();
    state
        .graph
        .insert(TripleRef::new(&cell, rdf::TYPE, terms.list_type));
    state.graph.insert(TripleRef::new(&cell, terms.first, value));
    state.graph.insert(TripleRef::new(&cell, terms.rest, rest));
    cell
}

fn build_cells(
    state: &mut ModelState,
    terms: ListTerms,
    values: Vec<Term>,
    tail: NamedOrBlankNodeRef<'_>,
) -> NamedOrBlankNode {
    let mut head = tail.into_owned();
    for value in values.iter().rev() {
        head = new_cell(state, terms, value.as_ref(), head.as_ref()).into();
    }
    head
}

fn append_cell(
    state: &mut ModelState,
    terms: ListTerms,
    head: NamedOrBlankNodeRef<'_>,
    value: TermRef<'_>,
) -> Result<(), OntError> {
    let last = last_cell(state, terms, head)?;
    let cell = new_cell(state, terms, value, terms.nil.into());
    state.graph.remove_values(last.as_ref(), terms.rest);
    state.graph.insert(TripleRef::new(&last, terms.rest, &cell));
    Ok(())
}

fn last_cell(
    state: &ModelState,
    terms: ListTerms,
    head: NamedOrBlankNodeRef<'_>,
) -> Result<NamedOrBlankNode, OntError> {
    cells(state, terms, head)?
        .pop()
        .map(|(cell, _)| cell)
        .ok_or_else(|| {
            ListError::Invalid(
                "Could not find last element of list (suggests list is not valid)".into(),
            )
            .into()
        })
}

/// The cells of the list with their values, until `NIL`.
fn cells(
    state: &ModelState,
    terms: ListTerms,
    head: NamedOrBlankNodeRef<'_>,
) -> Result<Vec<(NamedOrBlankNode, Term)>, OntError> {
    let mut cells = Vec::new();
    let mut seen = FxHashSet::default();
    let mut current = head.into_owned();
    while !terms.is_nil(current.as_ref()) {
        if !seen.insert(current.clone()) {
            return Err(cycle_error(&current).into());
        }
        let value = required(state, current.as_ref(), terms.first)?;
        let next = required_cell(state, current.as_ref(), terms.rest)?;
        cells.push((current, value));
        current = next;
    }
    Ok(cells)
}

fn cell_values(
    state: &ModelState,
    terms: ListTerms,
    head: NamedOrBlankNodeRef<'_>,
) -> Result<Vec<Term>, OntError> {
    Ok(cells(state, terms, head)?
        .into_iter()
        .map(|(_, value)| value)
        .collect())
}

fn required(
    state: &ModelState,
    cell: NamedOrBlankNodeRef<'_>,
    property: NamedNodeRef<'_>,
) -> Result<Term, OntError> {
    state
        .graph
        .object(cell, property)
        .ok_or_else(|| missing_property_error(cell, property).into())
}

fn required_cell(
    state: &ModelState,
    cell: NamedOrBlankNodeRef<'_>,
    property: NamedNodeRef<'_>,
) -> Result<NamedOrBlankNode, OntError> {
    term_to_resource(required(state, cell, property)?.as_ref()).ok_or_else(|| {
        ListError::Invalid(format!(
            "List node {cell} is not valid: the value of {property} is a literal"
        ))
        .into()
    })
}

fn check_valid(
    state: &ModelState,
    terms: ListTerms,
    head: NamedOrBlankNodeRef<'_>,
) -> Result<(), OntError> {
    let mut seen = FxHashSet::default();
    let mut current = head.into_owned();
    while !terms.is_nil(current.as_ref()) {
        if !seen.insert(current.clone()) {
            return Err(cycle_error(&current).into());
        }
        for property in [terms.first, terms.rest] {
            match state.graph.objects(current.as_ref(), property).len() {
                0 => return Err(missing_property_error(current.as_ref(), property).into()),
                1 => (),
                _ => {
                    return Err(ListError::Invalid(format!(
                        "List node {current} is not valid: it has more than one value for {property}"
                    ))
                    .into());
                }
            }
        }
        if terms.list_type != rdf::LIST && !state.graph.has_type(current.as_ref(), terms.list_type)
        {
            return Err(ListError::Invalid(format!(
                "List node {current} is not valid: it should have type {}",
                terms.list_type
            ))
            .into());
        }
        current = required_cell(state, current.as_ref(), terms.rest)?;
    }
    Ok(())
}

fn missing_property_error(cell: NamedOrBlankNodeRef<'_>, property: NamedNodeRef<'_>) -> ListError {
    ListError::Invalid(format!(
        "List node {cell} is not valid: it should have property {property}"
    ))
}

fn cycle_error(cell: &NamedOrBlankNode) -> ListError {
    ListError::Invalid(format!("List node {cell} is not valid: the list has a cycle"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OntModelSpec;
    use oxrdf::{Literal, NamedNode};

    fn literals(values: &[i32]) -> Vec<Term> {
        values.iter().map(|v| Literal::from(*v).into()).collect()
    }

    #[test]
    fn empty_list_is_nil() -> Result<(), OntError> {
        let model = OntModel::default();
        let list = model.create_list(Vec::<Term>::new())?;
        assert!(list.is_empty()?);
        assert_eq!(list.node(), &NamedOrBlankNode::from(rdf::NIL));
        assert!(matches!(list.head(), Err(OntError::List(ListError::Empty(_)))));
        assert!(matches!(list.add(Literal::from(1)), Err(OntError::List(ListError::Empty(_)))));
        let list = list.with(Literal::from(1))?;
        assert_eq!(list.to_vec()?, literals(&[1]));
        Ok(())
    }

    #[test]
    fn element_access() -> Result<(), OntError> {
        let model = OntModel::default();
        let list = model.create_list(literals(&[1, 2, 3, 2]))?;
        assert_eq!(list.len()?, 4);
        assert_eq!(list.head()?, Literal::from(1).into());
        assert_eq!(list.tail()?.to_vec()?, literals(&[2, 3, 2]));
        assert_eq!(list.index_of(&Literal::from(2))?, Some(1));
        assert_eq!(list.index_of_from(&Literal::from(2), 2)?, Some(3));
        assert!(!list.contains(&Literal::from(5))?);
        assert!(matches!(list.get(4), Err(OntError::List(ListError::Index { index: 4 }))));
        assert_eq!(list.replace(2, Literal::from(7))?, Literal::from(3).into());
        assert_eq!(list.set_head(Literal::from(0))?, Literal::from(1).into());
        assert_eq!(list.to_vec()?, literals(&[0, 2, 7, 2]));
        Ok(())
    }

    #[test]
    fn building_and_combining() -> Result<(), OntError> {
        let model = OntModel::default();
        let a = model.create_list(literals(&[1, 2]))?;
        let b = model.create_list(literals(&[3]))?;
        let appended = a.append(&b)?;
        assert_eq!(appended.to_vec()?, literals(&[1, 2, 3]));
        assert_eq!(a.to_vec()?, literals(&[1, 2]));
        a.concatenate(&b)?;
        assert_eq!(a.to_vec()?, literals(&[1, 2, 3]));
        a.concatenate_values(literals(&[4]))?;
        a.add(Literal::from(5))?;
        assert_eq!(a.len()?, 5);
        let copy = a.copy()?;
        assert_ne!(copy.node(), a.node());
        assert!(copy.same_list_as(&a)?);
        // the cells of b were linked in place
        assert_eq!(b.to_vec()?, literals(&[3, 4, 5]));
        assert_eq!(
            b.cons(Literal::from(0))?.to_vec()?,
            literals(&[0, 3, 4, 5])
        );
        assert_eq!(a.fold(0, |n, _| n + 1)?, 5);
        Ok(())
    }

    #[test]
    fn removal() -> Result<(), OntError> {
        let model = OntModel::default();
        let list = model.create_list(literals(&[1, 2, 3]))?;
        let same = list.remove(&Literal::from(2))?;
        assert_eq!(same, list);
        assert_eq!(list.to_vec()?, literals(&[1, 3]));
        let tail = list.remove(&Literal::from(1))?;
        assert_eq!(tail.to_vec()?, literals(&[3]));
        let nil = tail.remove_head()?;
        assert!(nil.is_empty()?);
        assert!(model.is_empty()?);
        let list = model.create_list(literals(&[1, 2]))?;
        list.remove_all()?;
        assert!(model.is_empty()?);
        Ok(())
    }

    #[test]
    fn validity() -> Result<(), OntError> {
        let model = OntModel::default();
        let list = model.create_list(literals(&[1, 2]))?;
        assert!(list.is_valid()?);
        let second = list.tail()?;
        model.insert(TripleRef::new(second.node(), rdf::FIRST, &Literal::from(3)))?;
        assert!(!list.is_valid()?);
        assert!(list.len().is_ok());
        let mut strict = list.clone();
        strict.set_strict(true);
        assert!(matches!(strict.len(), Err(OntError::List(ListError::Invalid(_)))));

        let cyclic = model.create_list(literals(&[1]))?;
        model.remove(TripleRef::new(cyclic.node(), rdf::REST, rdf::NIL))?;
        model.insert(TripleRef::new(cyclic.node(), rdf::REST, cyclic.node()))?;
        assert!(!cyclic.is_valid()?);
        assert!(cyclic.iter().nth(1).is_some_and(|r| r.is_err()));
        Ok(())
    }

    #[test]
    fn daml_cells_must_be_typed() -> Result<(), OntError> {
        let model = OntModel::new(OntModelSpec::DAML_MEM);
        let value = NamedNode::new("http://example.com/a")?;
        let list = model.create_list([value])?;
        assert!(list.is_valid()?);
        model.remove(TripleRef::new(
            list.node(),
            rdf::TYPE,
            crate::vocab::daml_oil::LIST,
        ))?;
        assert!(!list.is_valid()?);
        Ok(())
    }

    #[test]
    fn iteration() -> Result<(), OntError> {
        let model = OntModel::default();
        let list = model.create_list(literals(&[1, 2]))?;
        let values = list.iter().collect::<Result<Vec<_>, _>>()?;
        assert_eq!(values, literals(&[1, 2]));
        let mut count = 0;
        list.for_each(|_| count += 1)?;
        assert_eq!(count, 2);
        Ok(())
    }

    #[test]
    fn model_lists_are_found_by_head() -> Result<(), OntError> {
        let model = OntModel::default();
        let first = model.create_list(literals(&[1, 2, 3]))?;
        let second = model.create_list(literals(&[4]))?;
        model.create_list(Vec::<Term>::new())?;
        let mut lists = model.list_lists()?;
        assert_eq!(lists.len(), 2);
        lists.retain(|l| *l == first || *l == second);
        assert_eq!(lists.len(), 2);
        Ok(())
    }
}
