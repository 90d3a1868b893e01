use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::{mem, slice, vec};

use log::debug;

use crate::error::{Error, Result, check_index, check_position, check_range};
use crate::sub_list::SubList;
use crate::traits::Sequence;

/// Growable array of nullable elements.
#[derive(Clone)]
pub struct ArrayList<T> {
    // Invariant: `elements.len()` is the list length; capacity is only a growth reserve.
    elements: Vec<Option<T>>,
}

impl<T> ArrayList<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Makes room for at least `additional` more elements without reallocating.
    pub fn reserve(&mut self, additional: usize) {
        let before = self.elements.capacity();
        self.elements.reserve(additional);
        if self.elements.capacity() != before {
            debug!(
                "array list capacity grown from {before} to {}",
                self.elements.capacity()
            );
        }
    }

    /// Drops the growth reserve.
    pub fn shrink_to_fit(&mut self) {
        let before = self.elements.capacity();
        self.elements.shrink_to_fit();
        if self.elements.capacity() != before {
            debug!(
                "array list capacity trimmed from {before} to {}",
                self.elements.capacity()
            );
        }
    }

    pub fn as_slice(&self) -> &[Option<T>] {
        &self.elements
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.elements.iter())
    }

    /// Live window over `from..to`.
    pub fn subrange(&mut self, from: usize, to: usize) -> Result<SubList<'_, T>> {
        check_range(from, to, self.elements.len())?;
        Ok(SubList::new(self, from, to - from))
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence for ArrayList<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn get(&self, index: usize) -> Result<Option<&T>> {
        check_index(index, self.elements.len())?;
        Ok(self.elements[index].as_ref())
    }

    fn set(&mut self, index: usize, elem: Option<T>) -> Result<Option<T>> {
        check_index(index, self.elements.len())?;
        Ok(mem::replace(&mut self.elements[index], elem))
    }

    fn insert(&mut self, index: usize, elem: Option<T>) -> Result<()> {
        check_position(index, self.elements.len())?;
        self.elements.insert(index, elem);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<Option<T>> {
        check_index(index, self.elements.len())?;
        Ok(self.elements.remove(index))
    }

    fn push(&mut self, elem: Option<T>) -> Result<()> {
        self.elements.push(elem);
        Ok(())
    }

    fn insert_all<'e>(
        &mut self,
        index: usize,
        elems: impl Into<Option<&'e [Option<T>]>>,
    ) -> Result<bool>
    where
        T: Clone + 'e,
    {
        let elems = elems.into().ok_or(Error::NullArgument("elements"))?;
        check_position(index, self.elements.len())?;
        self.elements.splice(index..index, elems.iter().cloned());
        Ok(!elems.is_empty())
    }

    fn index_of(&self, elem: Option<&T>) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        Ok(self.elements.iter().position(|e| e.as_ref() == elem))
    }

    fn last_index_of(&self, elem: Option<&T>) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        Ok(self.elements.iter().rposition(|e| e.as_ref() == elem))
    }

    fn remove_all<'e>(&mut self, elems: impl Into<Option<&'e [Option<T>]>>) -> Result<bool>
    where
        T: PartialEq + 'e,
    {
        let elems = elems.into().ok_or(Error::NullArgument("elements"))?;
        let before = self.elements.len();
        self.elements.retain(|e| !elems.contains(e));
        Ok(self.elements.len() != before)
    }

    fn retain_all<'e>(&mut self, elems: impl Into<Option<&'e [Option<T>]>>) -> Result<bool>
    where
        T: PartialEq + 'e,
    {
        let elems = elems.into().ok_or(Error::NullArgument("elements"))?;
        let before = self.elements.len();
        self.elements.retain(|e| elems.contains(e));
        Ok(self.elements.len() != before)
    }

    fn clear(&mut self) -> Result<()> {
        self.elements.clear();
        Ok(())
    }

    fn to_vec(&self) -> Result<Vec<Option<T>>>
    where
        T: Clone,
    {
        Ok(self.elements.clone())
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: PartialEq> PartialEq<SubList<'_, T>> for ArrayList<T> {
    fn eq(&self, other: &SubList<'_, T>) -> bool {
        self.sequence_eq(other)
    }
}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<T> From<Vec<Option<T>>> for ArrayList<T> {
    fn from(elements: Vec<Option<T>>) -> Self {
        Self { elements }
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayList<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().map(Some).collect()
    }
}

impl<T> FromIterator<Option<T>> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<Option<T>> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = Option<T>>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = Option<T>;
    type IntoIter = vec::IntoIter<Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Read-only traversal; see [`Sequence::cursor`] for the mutating one.
pub struct Iter<'a, T>(slice::Iter<'a, Option<T>>);

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
