use crate::attribute::Attribute;
use std::fmt;
use std::marker::PhantomData;

/// Inclusion set over one attribute catalogue.
///
/// Membership is a bit per catalogue position, so lookups never allocate and
/// iteration always follows catalogue order.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AttributeSet<A: Attribute> {
    bits: u64,
    _kind: PhantomData<A>,
}

impl<A: Attribute> AttributeSet<A> {
    pub fn empty() -> Self {
        Self {
            bits: 0,
            _kind: PhantomData,
        }
    }

    pub fn all() -> Self {
        Self::of(A::ALL)
    }

    pub fn of(attrs: &[A]) -> Self {
        attrs.iter().copied().collect()
    }

    pub fn contains(&self, attr: A) -> bool {
        self.bits & bit(attr) != 0
    }

    pub fn insert(&mut self, attr: A) {
        self.bits |= bit(attr);
    }

    pub fn remove(&mut self, attr: A) {
        self.bits &= !bit(attr);
    }

    pub fn with(mut self, attr: A) -> Self {
        self.insert(attr);
        self
    }

    pub fn without(mut self, attr: A) -> Self {
        self.remove(attr);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = A> + '_ {
        A::ALL.iter().copied().filter(|attr| self.contains(*attr))
    }
}

fn bit<A: Attribute>(attr: A) -> u64 {
    1 << attr.index()
}

impl<A: Attribute> Default for AttributeSet<A> {
    fn default() -> Self {
        A::default_includes()
    }
}

impl<A: Attribute> FromIterator<A> for AttributeSet<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let mut set = Self::empty();
        for attr in iter {
            set.insert(attr);
        }
        set
    }
}

impl<A: Attribute + fmt::Debug> fmt::Debug for AttributeSet<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
