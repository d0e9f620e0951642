use crate::View;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("Empty input has no defined transpose.")]
    EmptyInput,
    #[error("Zero-sized dimension at axis {axis}.")]
    ZeroDim { axis: usize },
    #[error("Ragged rows. Row {index} has length {actual}, expected {expected}.")]
    RaggedRows {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

/// # Enforcer
///
/// Enforcer enforces common invariants on views.
///
/// Checks run at combinator construction, never during iteration, and
/// touch only `len()` metadata, never elements.
pub struct Enforcer;

impl Enforcer {
    pub fn check_nonempty<V: View>(view: &V) -> Result<(), InvariantError> {
        if view.is_empty() {
            return Err(InvariantError::EmptyInput);
        }
        Ok(())
    }

    pub fn check_extent(axis: usize, extent: usize) -> Result<(), InvariantError> {
        if extent == 0 {
            return Err(InvariantError::ZeroDim { axis });
        }
        Ok(())
    }

    /// Probes the width from row 0 and checks every other row against it.
    pub fn check_uniform_rows<V>(rows: &V) -> Result<usize, InvariantError>
    where
        V: View,
        V::Item: View,
    {
        Self::check_nonempty(rows)?;
        let expected = rows.get(0).len();
        Self::check_extent(1, expected)?;
        for index in 1..rows.len() {
            let actual = rows.get(index).len();
            if actual != expected {
                return Err(InvariantError::RaggedRows {
                    index,
                    expected,
                    actual,
                });
            }
        }
        Ok(expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SliceView;

    #[test]
    fn test_check_uniform_rows() {
        let data = vec![1, 2, 3, 4, 5, 6];
        let rows = SliceView::new(&data).chunks(3);
        assert_eq!(Enforcer::check_uniform_rows(&rows), Ok(3));

        let ragged = SliceView::new(&data).chunks(4);
        assert_eq!(
            Enforcer::check_uniform_rows(&ragged),
            Err(InvariantError::RaggedRows {
                index: 1,
                expected: 4,
                actual: 2
            })
        );
    }

    #[test]
    fn test_check_nonempty() {
        let empty: &[i32] = &[];
        assert_eq!(
            Enforcer::check_nonempty(&SliceView::new(empty)),
            Err(InvariantError::EmptyInput)
        );
    }
}
