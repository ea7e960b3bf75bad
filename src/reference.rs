use {
    crate::PageId,
    std::{ops::Index, slice, sync::Arc},
};

/// Distance to the next use of a page.
///
/// Ordered so that pages used later compare greater, and a page that is
/// never used again compares greater than any page that is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NextUse {
    /// Page is referenced again at the given index.
    At(usize),

    /// Page is not referenced again.
    Never,
}

/// Ordered, immutable sequence of page references driving a simulation.
///
/// The pages are shared, so cloning a reference string is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceString<P: PageId> {
    pages: Arc<[P]>,
}

impl<P: PageId> ReferenceString<P> {
    /// Creates a reference string from pages, in access order.
    pub fn new(pages: Vec<P>) -> Self {
        Self {
            pages: pages.into(),
        }
    }

    /// Number of references.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether there are no references at all.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page referenced at the given position.
    pub fn get(&self, index: usize) -> Option<&P> {
        self.pages.get(index)
    }

    /// Iterates over the references in access order.
    pub fn iter(&self) -> slice::Iter<'_, P> {
        self.pages.iter()
    }

    /// Pages as a slice.
    pub fn as_slice(&self) -> &[P] {
        &self.pages
    }

    /// Finds the next reference to `page` strictly after position `after`.
    ///
    /// The returned index is absolute, i.e. an index into the whole
    /// reference string.
    pub fn next_use(&self, page: &P, after: usize) -> NextUse {
        let start = after.saturating_add(1);
        self.pages
            .get(start..)
            .and_then(|rest| rest.iter().position(|p| p == page))
            .map_or(NextUse::Never, |offset| NextUse::At(start + offset))
    }
}

impl<P: PageId> Index<usize> for ReferenceString<P> {
    type Output = P;

    fn index(&self, index: usize) -> &P {
        &self.pages[index]
    }
}

impl<P: PageId> From<Vec<P>> for ReferenceString<P> {
    fn from(pages: Vec<P>) -> Self {
        Self::new(pages)
    }
}

impl<P: PageId> FromIterator<P> for ReferenceString<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Splits whitespace-delimited text into page tokens.
///
/// Blank input produces an empty reference string, which simulators reject
/// when started.
impl From<&str> for ReferenceString<String> {
    fn from(input: &str) -> Self {
        input.split_whitespace().map(str::to_owned).collect()
    }
}

impl<'a, P: PageId> IntoIterator for &'a ReferenceString<P> {
    type Item = &'a P;
    type IntoIter = slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_whitespace() {
        let refs = ReferenceString::from("  7 0\t1\n2  ");
        assert_eq!(refs.len(), 4);
        assert_eq!(refs.as_slice(), ["7", "0", "1", "2"]);

        let blank = ReferenceString::from(" \t ");
        assert!(blank.is_empty());
    }

    #[test]
    fn tokens_are_opaque() {
        let refs = ReferenceString::from("a bb 10 a");
        assert_eq!(refs[1], "bb");
        assert_eq!(refs[2], "10");
        assert_eq!(refs.next_use(&"a".to_string(), 0), NextUse::At(3));
        assert_eq!(refs.get(3).map(String::as_str), Some("a"));
        assert_eq!(refs.get(4), None);
    }

    #[test]
    fn next_use_lookahead() {
        let refs = ReferenceString::new(vec![7, 0, 1, 2, 0, 3, 0, 4]);

        // Position itself is never counted.
        assert_eq!(refs.next_use(&0, 1), NextUse::At(4));
        assert_eq!(refs.next_use(&0, 4), NextUse::At(6));
        assert_eq!(refs.next_use(&0, 6), NextUse::Never);
        assert_eq!(refs.next_use(&7, 0), NextUse::Never);
        assert_eq!(refs.next_use(&4, 6), NextUse::At(7));

        // Looking past the end is fine.
        assert_eq!(refs.next_use(&4, 7), NextUse::Never);
        assert_eq!(refs.next_use(&4, 100), NextUse::Never);
        assert_eq!(refs.next_use(&4, usize::MAX), NextUse::Never);
    }

    #[test]
    fn never_is_furthest() {
        assert!(NextUse::Never > NextUse::At(usize::MAX));
        assert!(NextUse::At(5) > NextUse::At(3));
    }
}
