use std::borrow::Cow;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::cursor::Cursor;
use crate::error::{Error, Result, check_position};

/// Index-addressable, order-preserving sequence of nullable elements.
///
/// - A slot holds `Some(elem)` or `None` (the null element); `None == None`.
/// - Element indices are valid in `0..len`, insertion positions in `0..=len`.
/// - Everything besides the five required methods is expressed in terms of
///   them, so a window over another sequence gets the whole surface for free.
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Result<Option<&Self::Item>>;

    /// Replaces the element at `index` and returns the previous one.
    fn set(&mut self, index: usize, elem: Option<Self::Item>) -> Result<Option<Self::Item>>;

    /// Shifts the elements at `index..` right by one.
    fn insert(&mut self, index: usize, elem: Option<Self::Item>) -> Result<()>;

    /// Shifts the elements at `index + 1..` left by one.
    fn remove(&mut self, index: usize) -> Result<Option<Self::Item>>;

    fn push(&mut self, elem: Option<Self::Item>) -> Result<()> {
        let len = self.len();
        self.insert(len, elem)
    }

    /// Inserts `elems` in order starting at `index`. Returns whether the
    /// sequence changed.
    fn insert_all<'e>(
        &mut self,
        index: usize,
        elems: impl Into<Option<&'e [Option<Self::Item>]>>,
    ) -> Result<bool>
    where
        Self::Item: Clone + 'e,
    {
        let elems = elems.into().ok_or(Error::NullArgument("elements"))?;
        check_position(index, self.len())?;
        for (k, elem) in elems.iter().enumerate() {
            self.insert(index + k, elem.clone())?;
        }
        Ok(!elems.is_empty())
    }

    fn push_all<'e>(&mut self, elems: impl Into<Option<&'e [Option<Self::Item>]>>) -> Result<bool>
    where
        Self::Item: Clone + 'e,
    {
        let len = self.len();
        self.insert_all(len, elems)
    }

    fn index_of(&self, elem: Option<&Self::Item>) -> Result<Option<usize>>
    where
        Self::Item: PartialEq,
    {
        for index in 0..self.len() {
            if self.get(index)? == elem {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    fn last_index_of(&self, elem: Option<&Self::Item>) -> Result<Option<usize>>
    where
        Self::Item: PartialEq,
    {
        for index in (0..self.len()).rev() {
            if self.get(index)? == elem {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    fn contains(&self, elem: Option<&Self::Item>) -> Result<bool>
    where
        Self::Item: PartialEq,
    {
        Ok(self.index_of(elem)?.is_some())
    }

    fn contains_all<'e>(&self, elems: impl Into<Option<&'e [Option<Self::Item>]>>) -> Result<bool>
    where
        Self::Item: PartialEq + 'e,
    {
        let elems = elems.into().ok_or(Error::NullArgument("elements"))?;
        for elem in elems {
            if !self.contains(elem.as_ref())? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Removes the first element equal to `elem`.
    fn remove_item(&mut self, elem: Option<&Self::Item>) -> Result<bool>
    where
        Self::Item: PartialEq,
    {
        match self.index_of(elem)? {
            Some(index) => {
                self.remove(index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes every element contained in `elems`.
    fn remove_all<'e>(&mut self, elems: impl Into<Option<&'e [Option<Self::Item>]>>) -> Result<bool>
    where
        Self::Item: PartialEq + 'e,
    {
        let elems = elems.into().ok_or(Error::NullArgument("elements"))?;
        filter_in_place(self, elems, false)
    }

    /// Removes every element not contained in `elems`.
    fn retain_all<'e>(&mut self, elems: impl Into<Option<&'e [Option<Self::Item>]>>) -> Result<bool>
    where
        Self::Item: PartialEq + 'e,
    {
        let elems = elems.into().ok_or(Error::NullArgument("elements"))?;
        filter_in_place(self, elems, true)
    }

    /// Removes elements back to front.
    fn clear(&mut self) -> Result<()> {
        while let Some(last) = self.len().checked_sub(1) {
            self.remove(last)?;
        }
        Ok(())
    }

    fn to_vec(&self) -> Result<Vec<Option<Self::Item>>>
    where
        Self::Item: Clone,
    {
        (0..self.len())
            .map(|index| self.get(index).map(|elem| elem.cloned()))
            .collect()
    }

    /// Copies the elements into `buffer` if it is large enough, clearing the
    /// slot right after the copied region. Otherwise a fresh vector is
    /// allocated and `buffer` is left untouched.
    fn to_array_into<'b>(
        &self,
        buffer: Option<&'b mut [Option<Self::Item>]>,
    ) -> Result<Cow<'b, [Option<Self::Item>]>>
    where
        Self::Item: Clone + 'b,
    {
        let buffer = buffer.ok_or(Error::NullArgument("buffer"))?;
        let len = self.len();
        if buffer.len() < len {
            return Ok(Cow::Owned(self.to_vec()?));
        }
        for (index, slot) in buffer.iter_mut().take(len).enumerate() {
            *slot = self.get(index)?.cloned();
        }
        if let Some(slot) = buffer.get_mut(len) {
            *slot = None;
        }
        let buffer: &'b [Option<Self::Item>] = buffer;
        Ok(Cow::Borrowed(buffer))
    }

    /// Order-sensitive hash: `h = 31 * h + element_hash(e)`, starting at 1.
    fn hash_code(&self) -> Result<i32>
    where
        Self::Item: Hash,
    {
        let mut hash = 1_i32;
        for index in 0..self.len() {
            hash = hash
                .wrapping_mul(31)
                .wrapping_add(element_hash(self.get(index)?));
        }
        Ok(hash)
    }

    /// Pairwise, null-aware comparison. A read failure on either side counts
    /// as a mismatch.
    fn sequence_eq<S>(&self, other: &S) -> bool
    where
        S: Sequence<Item = Self::Item> + ?Sized,
        Self::Item: PartialEq,
    {
        self.len() == other.len()
            && (0..self.len()).all(|index| match (self.get(index), other.get(index)) {
                (Ok(a), Ok(b)) => a == b,
                _ => false,
            })
    }

    fn cursor(&mut self) -> Cursor<'_, Self> {
        Cursor::new(self, 0)
    }

    fn cursor_at(&mut self, index: usize) -> Result<Cursor<'_, Self>> {
        check_position(index, self.len())?;
        Ok(Cursor::new(self, index))
    }
}

/// Hash of a single slot; the null element hashes to 0.
pub fn element_hash<T: Hash + ?Sized>(elem: Option<&T>) -> i32 {
    elem.map_or(0, |elem| {
        let mut hasher = DefaultHasher::new();
        elem.hash(&mut hasher);
        hasher.finish() as i32
    })
}

fn filter_in_place<S>(seq: &mut S, elems: &[Option<S::Item>], keep_matches: bool) -> Result<bool>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    let mut changed = false;
    let mut index = 0;
    while index < seq.len() {
        let current = seq.get(index)?;
        let hit = elems.iter().any(|elem| elem.as_ref() == current);
        if hit == keep_matches {
            index += 1;
        } else {
            seq.remove(index)?;
            changed = true;
        }
    }
    Ok(changed)
}
