/// Growable circular buffer. Logical index 0 is the front (oldest element).
///
/// `len <= slots.len()` and `start < slots.len()` hold after every operation;
/// all index arithmetic goes through [`Ring::slot`].
#[derive(Clone, Debug)]
pub struct Ring<T> {
    slots: Box<[T]>,
    start: usize,
    len: usize,
}

impl<T: Copy + Default> Ring<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Ring { slots: vec![T::default(); capacity].into_boxed_slice(), start: 0, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, i: usize) -> Option<T> {
        if i < self.len {
            Some(self.slots[self.slot(i)])
        } else {
            None
        }
    }

    pub fn front(&self) -> Option<T> {
        self.get(0)
    }

    pub fn back(&self) -> Option<T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Appends at the back, doubling the backing store when it is full.
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        let slot = self.slot(self.len);
        self.slots[slot] = value;
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let value = self.front()?;
        self.start = self.slot(1);
        self.len -= 1;
        Some(value)
    }

    pub fn clear(&mut self) {
        self.start = 0;
        self.len = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len).map(move |i| self.slots[self.slot(i)])
    }

    fn slot(&self, i: usize) -> usize {
        (self.start + i) % self.slots.len()
    }

    /// Copies the live elements in logical order into a store twice as large,
    /// so the front lands on slot 0.
    fn grow(&mut self) {
        let mut slots = vec![T::default(); self.capacity() * 2];
        for (dst, value) in slots.iter_mut().zip(self.iter()) {
            *dst = value;
        }
        self.slots = slots.into_boxed_slice();
        self.start = 0;
    }
}
