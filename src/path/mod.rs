// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use crate::error::ParseError;

mod scanner;
mod tokenizer;

/// Separates two segments of a path (`a.b`).
pub const PATH_DELIMITER: char = '.';
/// Wrap an index segment (`[3]`).
pub const INDEX_BRACKETS: (char, char) = ('[', ']');

/// One parsed unit of a path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Dictionary key, always matching `[A-Za-z_][A-Za-z0-9_]*`.
    Key(String),
    /// Tuple index.
    Index(usize),
}

impl Segment {
    pub fn is_key(&self) -> bool {
        matches!(self, Segment::Key(_))
    }

    pub fn as_key(&self) -> Option<&str> {
        match self {
            Segment::Key(k) => Some(k),
            Segment::Index(_) => None,
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Index(n) => Some(*n),
            Segment::Key(_) => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(k) => f.write_str(k),
            Segment::Index(n) => write!(f, "{}{}{}", INDEX_BRACKETS.0, n, INDEX_BRACKETS.1),
        }
    }
}

/// A tokenized parameter path: an owned, forward-only chain of segments.
///
/// An empty path string addresses the tree root and tokenizes to `None`, so a
/// `Path` always holds at least one segment. Every walk over the chain (drop,
/// clone, comparison, rendering) is iterative, so its length is bounded by
/// memory only.
///
/// # Examples
/// ```
/// use param_tree::path::{Path, Segment};
///
/// let path = Path::parse("[0]._one.a[3][43].four").unwrap().unwrap();
/// assert_eq!(path.len(), 6);
/// assert_eq!(path.segment(), &Segment::Index(0));
/// assert_eq!(path.to_string(), "[0]._one.a[3][43].four");
/// ```
pub struct Path {
    head: Segment,
    next: Option<Box<Path>>,
}

impl Path {
    /// Links `segments` front to back, `None` when there are none.
    pub(crate) fn from_segments(segments: Vec<Segment>) -> Option<Path> {
        let mut chain: Option<Path> = None;
        for head in segments.into_iter().rev() {
            chain = Some(Path {
                head,
                next: chain.map(Box::new),
            });
        }
        chain
    }

    /// Tokenizes a path string. See [`tokenize`].
    pub fn parse(input: &str) -> Result<Option<Path>, ParseError> {
        tokenize(input)
    }

    /// First segment of this chain.
    pub fn segment(&self) -> &Segment {
        &self.head
    }

    /// The rest of the chain, `None` for the last segment.
    pub fn next(&self) -> Option<&Path> {
        self.next.as_deref()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { cur: Some(self) }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.iter().enumerate() {
            if i > 0 && seg.is_key() {
                write!(f, "{}", PATH_DELIMITER)?;
            }
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

impl Drop for Path {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl Clone for Path {
    fn clone(&self) -> Self {
        Path {
            head: self.head.clone(),
            next: Path::from_segments(self.iter().skip(1).cloned().collect()).map(Box::new),
        }
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Path {}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Path").field(&self.iter().collect::<Vec<_>>()).finish()
    }
}

pub struct Iter<'a> {
    cur: Option<&'a Path>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Segment;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cur?;
        self.cur = node.next();
        Some(&node.head)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Tokenizes a path string into a chain of segments.
///
/// Returns `Ok(None)` for the empty string, which addresses the root. Any
/// grammar error discards the whole chain; the error carries the tokens that
/// were parsed before the failure.
pub fn tokenize(input: &str) -> Result<Option<Path>, ParseError> {
    tokenizer::tokenize(input)
}

#[cfg(test)]
mod tests;
