use crate::View;

/// Removes one level of nesting, concatenating the source's items in
/// row-major order.
///
/// The inner width is probed from item 0 at construction. Items of a
/// different length are a precondition violation and silently misindex;
/// [`crate::transpose`] validates uniformity before flattening.
#[derive(Debug, Clone)]
pub struct Flatten<V> {
    src: V,
    width: usize,
}

impl<V> Flatten<V>
where
    V: View,
    V::Item: View,
{
    pub fn new(src: V) -> Self {
        let width = if src.is_empty() { 0 } else { src.get(0).len() };
        Self { src, width }
    }
}

impl<V> View for Flatten<V>
where
    V: View,
    V::Item: View,
{
    type Item = <V::Item as View>::Item;

    fn len(&self) -> usize {
        self.src.len() * self.width
    }

    fn get(&self, index: usize) -> Self::Item {
        self.src.get(index / self.width).get(index % self.width)
    }
}

#[cfg(test)]
mod tests {
    use crate::{SliceView, View};

    #[test]
    fn test_flatten_row_major() {
        let data = vec![1, 2, 3, 4, 5, 6];
        let v = SliceView::new(&data).chunks(3).flatten();
        assert_eq!(v.len(), 6);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), data);
    }

    #[test]
    fn test_flatten_empty() {
        let data: Vec<i32> = vec![];
        let v = SliceView::new(&data).chunks(1).flatten();
        assert!(v.is_empty());
    }
}
