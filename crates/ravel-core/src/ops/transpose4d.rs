use crate::{
    shape, Chunks, Enforcer, Flatten, InvariantError, Shape, Skip, StepBy, Strides, Transpose, View,
};

type Flat3<V> = Flatten<Flatten<Flatten<V>>>;

/// One depth slice of a transposed tensor: `Height` rows of `Width`
/// cells, each cell the `Batch` values of one channel at that position.
pub type DepthSlice<V> = Chunks<Transpose<Chunks<StepBy<Skip<Flat3<V>>>>>>;

/// `(Batch, Height, Width, Depth)` reordered to
/// `(Depth, Height, Width, Batch)`.
///
/// Built by repeated application of the 2-D [`transpose`]: each depth
/// slice is the flat source shifted to channel `d`, strided by `Depth`,
/// re-chunked into `Batch` channel-planes, transposed, and re-chunked
/// into `Height` rows. No bespoke 4-D indexing scheme is involved, and
/// no element is read until a slice is iterated.
///
/// [`transpose`]: crate::transpose
#[derive(Debug, Clone)]
pub struct Transpose4<V> {
    flat: Flat3<V>,
    src_shape: Shape,
}

const PERMUTATION: [usize; 4] = [3, 1, 2, 0];

impl<V> Transpose4<V> {
    /// The transposed shape, `[DxHxWxB]`.
    pub fn shape(&self) -> Shape {
        self.src_shape.permute(&PERMUTATION)
    }

    /// The probed source shape, `[BxHxWxD]`.
    pub fn src_shape(&self) -> &Shape {
        &self.src_shape
    }

    /// Row-major strides of the source layout.
    pub fn src_strides(&self) -> Strides {
        Strides::from(&self.src_shape)
    }
}

/// Reorders a 4-level nested sequence of conceptual shape
/// `(Batch, Height, Width, Depth)` into `(Depth, Height, Width, Batch)`.
///
/// Extents are probed from element 0 at each level, exactly as
/// [`transpose`] probes its width; uniformity below those first
/// elements is a caller-enforced precondition. An empty batch fails
/// with [`InvariantError::EmptyInput`]; a zero extent at any inner
/// level fails with [`InvariantError::ZeroDim`] naming the axis.
///
/// [`transpose`]: crate::transpose
pub fn transpose4d<V>(batch: V) -> Result<Transpose4<V>, InvariantError>
where
    V: View,
    V::Item: View,
    <V::Item as View>::Item: View,
    <<V::Item as View>::Item as View>::Item: View,
{
    Enforcer::check_nonempty(&batch)?;
    let image = batch.get(0);
    Enforcer::check_extent(1, image.len())?;
    let row = image.get(0);
    Enforcer::check_extent(2, row.len())?;
    let pixel = row.get(0);
    Enforcer::check_extent(3, pixel.len())?;

    let src_shape = shape![batch.len(), image.len(), row.len(), pixel.len()];
    let flat = batch.flatten().flatten().flatten();
    debug_assert_eq!(flat.len(), src_shape.numel());
    log::debug!(
        "transpose4d: {:?} -> {:?}",
        src_shape,
        src_shape.permute(&PERMUTATION)
    );
    Ok(Transpose4 { flat, src_shape })
}

impl<V> View for Transpose4<V>
where
    V: View,
    V::Item: View,
    <V::Item as View>::Item: View,
    <<V::Item as View>::Item as View>::Item: View,
{
    type Item = DepthSlice<V>;

    fn len(&self) -> usize {
        self.src_shape[3]
    }

    fn get(&self, index: usize) -> DepthSlice<V> {
        let (batch, height, width, depth) = (
            self.src_shape[0],
            self.src_shape[1],
            self.src_shape[2],
            self.src_shape[3],
        );
        assert!(index < depth, "depth slice {index} out of range");
        let plane = height * width;
        // Channel d of every pixel, in (Batch, Height, Width) order.
        let sliced = self.flat.clone().skip(index).step_by(depth);
        // One group per image's channel-d plane; rectangular by
        // construction, so the 2-D validation is already discharged.
        let grouped = sliced.chunks(plane);
        let columns = Transpose::raw(grouped.flatten(), batch, plane);
        columns.chunks(width)
    }
}
