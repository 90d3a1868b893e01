use std::fmt::{self, Debug, Formatter};

use log::{debug, trace};

use crate::array_list::ArrayList;
use crate::error::{Result, check_index, check_position, check_range};
use crate::traits::Sequence;

/// Live window over a slice of an [`ArrayList`].
///
/// Every index is bounds-checked against the window's own length and then
/// shifted by `offset` into the backing list. The length is only updated by
/// structural edits made through this very window: once a nested window
/// inserts or removes elements, the outer one keeps its old length and reads
/// whatever the backing list now holds at the shifted indices.
pub struct SubList<'a, T> {
    root: &'a mut ArrayList<T>,
    offset: usize,
    len: usize,
}

impl<'a, T> SubList<'a, T> {
    pub(crate) fn new(root: &'a mut ArrayList<T>, offset: usize, len: usize) -> Self {
        trace!(
            "sub list over {offset}..{} of a list of length {}",
            offset + len,
            root.len()
        );
        Self { root, offset, len }
    }

    /// Index of this window's first element in the backing list.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Window over `from..to` of this window, backed by the same list.
    pub fn subrange(&mut self, from: usize, to: usize) -> Result<SubList<'_, T>> {
        check_range(from, to, self.len)?;
        Ok(SubList::new(&mut *self.root, self.offset + from, to - from))
    }
}

impl<T> Sequence for SubList<'_, T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<Option<&T>> {
        check_index(index, self.len)?;
        self.root.get(self.offset + index)
    }

    fn set(&mut self, index: usize, elem: Option<T>) -> Result<Option<T>> {
        check_index(index, self.len)?;
        self.root.set(self.offset + index, elem)
    }

    fn insert(&mut self, index: usize, elem: Option<T>) -> Result<()> {
        check_position(index, self.len)?;
        self.root.insert(self.offset + index, elem)?;
        self.len += 1;
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<Option<T>> {
        check_index(index, self.len)?;
        let removed = self.root.remove(self.offset + index)?;
        self.len -= 1;
        Ok(removed)
    }

    fn clear(&mut self) -> Result<()> {
        debug!(
            "clearing {} elements at offset {} of the backing list",
            self.len, self.offset
        );
        while let Some(last) = self.len.checked_sub(1) {
            self.remove(last)?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for SubList<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.len).map(|index| self.get(index).ok().flatten()))
            .finish()
    }
}

impl<T: PartialEq> PartialEq<SubList<'_, T>> for SubList<'_, T> {
    fn eq(&self, other: &SubList<'_, T>) -> bool {
        self.sequence_eq(other)
    }
}

impl<T: PartialEq> PartialEq<ArrayList<T>> for SubList<'_, T> {
    fn eq(&self, other: &ArrayList<T>) -> bool {
        self.sequence_eq(other)
    }
}
