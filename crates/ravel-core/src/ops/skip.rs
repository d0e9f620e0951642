use derive_new::new;

use crate::View;

/// Drops the first `count` elements of the source.
#[derive(new, Debug, Clone)]
pub struct Skip<V> {
    src: V,
    count: usize,
}

impl<V: View> View for Skip<V> {
    type Item = V::Item;

    fn len(&self) -> usize {
        self.src.len().saturating_sub(self.count)
    }

    fn get(&self, index: usize) -> V::Item {
        self.src.get(self.count + index)
    }
}
