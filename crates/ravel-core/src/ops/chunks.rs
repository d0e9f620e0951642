use crate::View;

/// Partitions the source into consecutive groups of `size` elements.
/// The last group may be shorter.
#[derive(Debug, Clone)]
pub struct Chunks<V> {
    src: V,
    size: usize,
}

impl<V> Chunks<V> {
    pub fn new(src: V, size: usize) -> Self {
        assert!(size != 0, "chunk size must be non-zero");
        Self { src, size }
    }

    /// Undoes the chunking, yielding the source.
    pub fn join(self) -> V {
        self.src
    }
}

impl<V: View> View for Chunks<V> {
    type Item = Window<V>;

    fn len(&self) -> usize {
        (self.src.len() + self.size - 1) / self.size
    }

    fn get(&self, index: usize) -> Window<V> {
        assert!(index < self.len(), "chunk {index} out of range");
        let start = index * self.size;
        let end = (start + self.size).min(self.src.len());
        Window::new(self.src.clone(), start, end - start)
    }
}

/// A contiguous sub-range of a source view.
#[derive(Debug, Clone)]
pub struct Window<V> {
    src: V,
    start: usize,
    len: usize,
}

impl<V> Window<V> {
    fn new(src: V, start: usize, len: usize) -> Self {
        Self { src, start, len }
    }
}

impl<V: View> View for Window<V> {
    type Item = V::Item;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> V::Item {
        assert!(index < self.len, "index {index} out of range {}", self.len);
        self.src.get(self.start + index)
    }
}
