use crate::error::{Error, Result};
use crate::traits::Sequence;

/// Bidirectional cursor that can edit the sequence it walks.
///
/// The cursor sits in a gap: `next_index()` is the element `next` would
/// return, `previous_index()` the one `previous` would. `remove` and `set`
/// act on the element returned by the last `next`/`previous`, and are
/// refused after `remove` or `add` until the cursor moves again.
pub struct Cursor<'a, S: Sequence + ?Sized> {
    seq: &'a mut S,
    // Invariant: `position <= seq.len()`
    position: usize,
    // Invariant: `Some` only while no `remove`/`add` followed the last move
    last_returned: Option<usize>,
}

impl<'a, S: Sequence + ?Sized> Cursor<'a, S> {
    pub(crate) fn new(seq: &'a mut S, position: usize) -> Self {
        debug_assert!(position <= seq.len());
        Self {
            seq,
            position,
            last_returned: None,
        }
    }

    pub fn has_next(&self) -> bool {
        self.position < self.seq.len()
    }

    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Option<&S::Item>> {
        if !self.has_next() {
            return Err(Error::NoSuchElement);
        }
        let index = self.position;
        let elem = self.seq.get(index)?;
        self.last_returned = Some(index);
        self.position = index + 1;
        Ok(elem)
    }

    pub fn previous(&mut self) -> Result<Option<&S::Item>> {
        if !self.has_previous() {
            return Err(Error::NoSuchElement);
        }
        let index = self.position - 1;
        let elem = self.seq.get(index)?;
        self.last_returned = Some(index);
        self.position = index;
        Ok(elem)
    }

    pub fn next_index(&self) -> usize {
        self.position
    }

    /// `None` at the front of the sequence.
    pub fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    /// Removes the element returned by the last `next`/`previous`.
    pub fn remove(&mut self) -> Result<Option<S::Item>> {
        let index = self.last_returned.ok_or(Error::IllegalState("remove"))?;
        let removed = self.seq.remove(index)?;
        if index < self.position {
            self.position -= 1;
        }
        self.last_returned = None;
        Ok(removed)
    }

    /// Replaces the element returned by the last `next`/`previous`. May be
    /// repeated until the cursor moves or edits structurally.
    pub fn set(&mut self, elem: Option<S::Item>) -> Result<Option<S::Item>> {
        let index = self.last_returned.ok_or(Error::IllegalState("set"))?;
        self.seq.set(index, elem)
    }

    /// Inserts before the element `next` would return.
    pub fn add(&mut self, elem: Option<S::Item>) -> Result<()> {
        self.seq.insert(self.position, elem)?;
        self.position += 1;
        self.last_returned = None;
        Ok(())
    }
}
