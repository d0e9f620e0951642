use crate::{Enforcer, Flatten, InvariantError, Skip, StepBy, View};

/// One column of a transposed matrix: the flattened source, shifted to
/// the column's first element, then strided by the source width.
pub type Column<V> = StepBy<Skip<Flatten<V>>>;

/// Columns of a rectangular sequence of rows.
///
/// `Transpose` holds only the flattened source and the two extents; no
/// element is read or copied at construction. Column `i` reads
/// `flat[i], flat[i + W], .., flat[i + (H-1)W]`, which is exactly
/// column `i` of the conceptual `H x W` matrix, in original row order.
#[derive(Debug, Clone)]
pub struct Transpose<V> {
    flat: Flatten<V>,
    height: usize,
    width: usize,
}

impl<V> Transpose<V>
where
    V: View,
    V::Item: View,
{
    pub(crate) fn raw(flat: Flatten<V>, height: usize, width: usize) -> Self {
        Self {
            flat,
            height,
            width,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

/// Swaps the outer and inner dimensions of a rectangular
/// sequence-of-sequences, lazily and without copying.
///
/// The extents are probed from `rows.len()` and row 0's length; every
/// other row length is then checked against row 0, so construction is
/// O(rows) metadata probes and zero element reads. Fails with
/// [`InvariantError::EmptyInput`] when there are no rows,
/// [`InvariantError::ZeroDim`] when rows are zero-length, and
/// [`InvariantError::RaggedRows`] when row lengths differ.
pub fn transpose<V>(rows: V) -> Result<Transpose<V>, InvariantError>
where
    V: View,
    V::Item: View,
{
    let height = rows.len();
    let width = Enforcer::check_uniform_rows(&rows)?;
    log::debug!("transpose: {height}x{width} -> {width}x{height}");
    Ok(Transpose::raw(rows.flatten(), height, width))
}

impl<V> View for Transpose<V>
where
    V: View,
    V::Item: View,
{
    type Item = Column<V>;

    fn len(&self) -> usize {
        self.width
    }

    fn get(&self, index: usize) -> Column<V> {
        assert!(index < self.width, "column {index} out of range");
        self.flat.clone().skip(index).step_by(self.width)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Borrow;
    use std::cell::Cell;

    use proptest::prelude::*;
    use proptest::strategy::BoxedStrategy;
    use test_strategy::proptest;

    use crate::{transpose, InvariantError, Shape, SliceView, View};

    fn collect2<V, T>(v: &V) -> Vec<Vec<T>>
    where
        T: Copy,
        V: View,
        V::Item: View,
        <V::Item as View>::Item: Borrow<T>,
    {
        v.iter()
            .map(|row| row.iter().map(|x| *x.borrow()).collect())
            .collect()
    }

    #[test]
    fn test_2x3() {
        let data = vec![1, 2, 3, 4, 5, 6];
        let rows = SliceView::new(&data).chunks(3);
        let t = transpose(rows).unwrap();
        assert_eq!(t.height(), 2);
        assert_eq!(t.width(), 3);
        assert_eq!(collect2::<_, i32>(&t), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    }

    #[test]
    fn test_3x2() {
        let data = vec![1, 2, 3, 4, 5, 6];
        let rows = SliceView::new(&data).chunks(2);
        let t = transpose(rows).unwrap();
        assert_eq!(collect2::<_, i32>(&t), vec![vec![1, 3, 5], vec![2, 4, 6]]);
    }

    #[test]
    fn test_single_row() {
        let data = vec![7, 8, 9];
        let t = transpose(SliceView::new(&data).chunks(3)).unwrap();
        assert_eq!(collect2::<_, i32>(&t), vec![vec![7], vec![8], vec![9]]);
    }

    #[test]
    fn test_empty_input() {
        let data: Vec<i32> = vec![];
        let rows = SliceView::new(&data).chunks(1);
        assert_eq!(transpose(rows).unwrap_err(), InvariantError::EmptyInput);
    }

    #[test]
    fn test_zero_width() {
        static EMPTY: [i32; 0] = [];
        let outer = vec![0, 0];
        let rows = SliceView::new(&outer).map(|_| SliceView::new(&EMPTY));
        assert_eq!(
            transpose(rows).unwrap_err(),
            InvariantError::ZeroDim { axis: 1 }
        );
    }

    #[test]
    fn test_ragged_rows() {
        let data = vec![1, 2, 3, 4, 5];
        let rows = SliceView::new(&data).chunks(3);
        assert_eq!(
            transpose(rows).unwrap_err(),
            InvariantError::RaggedRows {
                index: 1,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_construction_reads_no_elements() {
        let data = vec![1, 2, 3, 4, 5, 6];
        let reads = Cell::new(0usize);
        let counted = SliceView::new(&data).map(|x| {
            reads.set(reads.get() + 1);
            *x
        });
        let t = transpose(counted.chunks(3)).unwrap();
        assert_eq!(reads.get(), 0);

        let _ = collect2::<_, i32>(&t);
        assert_eq!(reads.get(), 6);
    }

    #[derive(Debug)]
    struct TransposeProblem {
        shape: Shape,
        data: Vec<i32>,
    }

    impl Arbitrary for TransposeProblem {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_args: ()) -> Self::Strategy {
            Shape::arbitrary_with(vec![1..9, 1..9])
                .prop_map(|shape| {
                    let data = (0..shape.numel() as i32).collect();
                    TransposeProblem { shape, data }
                })
                .boxed()
        }
    }

    #[proptest(cases = 32)]
    fn test_column_law(prob: TransposeProblem) {
        let TransposeProblem { shape, data } = prob;
        let (h, w) = (shape[0], shape[1]);
        let rows = SliceView::new(&data).chunks(w);
        let t = transpose(rows.clone()).unwrap();
        let rows = collect2::<_, i32>(&rows);
        for (i, column) in t.iter().enumerate() {
            let expected: Vec<i32> = (0..h).map(|j| rows[j][i]).collect();
            assert_eq!(column.iter().copied().collect::<Vec<_>>(), expected);
        }
    }

    #[proptest(cases = 32)]
    fn test_involution(prob: TransposeProblem) {
        let TransposeProblem { shape, data } = prob;
        let w = shape[1];
        let rows = SliceView::new(&data).chunks(w);
        let twice = transpose(transpose(rows.clone()).unwrap()).unwrap();
        assert_eq!(collect2::<_, i32>(&twice), collect2::<_, i32>(&rows));
        // Re-flattening reproduces the original flat order.
        let flat: Vec<i32> = twice.flatten().iter().copied().collect();
        assert_eq!(flat, data);
    }
}
