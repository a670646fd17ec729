use core::fmt;
use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

/// A concatenation of borrowed string fragments with inline storage.
#[derive(Default, Clone)]
pub struct Concat<'a, const N: usize> {
    parts: ArrayVec<&'a str, N>,
}

impl<'a, const N: usize> Concat<'a, N> {
    /// An empty concatenation.
    pub const fn empty() -> Self {
        Self {
            parts: ArrayVec::new_const(),
        }
    }

    /// Push a fragment onto the composite string. Empty fragments are
    /// dropped.
    pub fn push(&mut self, string: &'a str) {
        if !string.is_empty() {
            self.parts.push(string);
        }
    }

    /// The fragments making up the composite string.
    pub fn as_slice(&self) -> &[&'a str] {
        &self.parts
    }

    /// Iterate over characters of the composite string.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.parts.iter().flat_map(|s| s.chars())
    }

    /// Test if the composite string is empty.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl<'a, const N: usize> FromIterator<&'a str> for Concat<'a, N> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut this = Self::empty();

        for string in iter {
            this.push(string);
        }

        this
    }
}

impl<'a, const A: usize, const B: usize> PartialEq<Concat<'a, A>> for Concat<'_, B> {
    fn eq(&self, other: &Concat<'a, A>) -> bool {
        self.chars().eq(other.chars())
    }
}

impl<const N: usize> Eq for Concat<'_, N> {}

impl<const N: usize> Hash for Concat<'_, N> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        for c in self.chars() {
            c.hash(state);
        }
    }
}

impl<const N: usize> fmt::Display for Concat<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for string in &self.parts {
            string.fmt(f)?;
        }

        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Concat<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;

        for string in &self.parts {
            write!(f, "{string}")?;
        }

        write!(f, "\"")
    }
}
