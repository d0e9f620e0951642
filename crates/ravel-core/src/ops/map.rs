use derive_new::new;

use crate::View;

/// Applies `f` to each element of the source on access.
#[derive(new, Clone)]
pub struct Map<V, F> {
    src: V,
    f: F,
}

impl<V: std::fmt::Debug, F> std::fmt::Debug for Map<V, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map").field("src", &self.src).finish()
    }
}

impl<V, F, B> View for Map<V, F>
where
    V: View,
    F: Fn(V::Item) -> B + Clone,
{
    type Item = B;

    fn len(&self) -> usize {
        self.src.len()
    }

    fn get(&self, index: usize) -> B {
        (self.f)(self.src.get(index))
    }
}

#[cfg(test)]
mod tests {
    use crate::{SliceView, View};

    #[test]
    fn test_map() {
        let data = vec![1, 2, 3, 4, 5];
        let v = SliceView::new(&data).map(|x| 2 * x);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![2, 4, 6, 8, 10]);
    }
}
