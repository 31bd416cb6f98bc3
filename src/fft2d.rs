//! Separable 2-D FFT: a 1-D transform of every row, then of every column.

use tracing::{debug, warn};

use crate::config::PaddingPolicy;
use crate::fft::{fft1d, output_len};
use crate::matrix::{ComplexMatrix, ComplexSequence};
use crate::Error;

/// Forward 2-D FFT of `matrix`.
///
/// The row pass transforms each of the `width` rows (length `height`); the
/// column pass then gathers position `y` from every transformed row and
/// transforms that length-`width` sequence. Row `y` of the result is the
/// transformed column `y`, so with `X[u][v]` the DFT indexed like the input
/// (`u` along the row-index axis, `v` along the rows), `result.get(a, b)`
/// is `X[b][a]`. A `w × h` input gives `h` rows of length `w`.
///
/// With [`PaddingPolicy::PadOnce`] both dimensions are rounded up to powers
/// of two first; with the other policies they are kept. Under
/// [`PaddingPolicy::Legacy`] non-power-of-two dimensions give an approximate
/// spectrum.
pub fn fft2d(matrix: &ComplexMatrix, policy: PaddingPolicy) -> Result<ComplexMatrix, Error> {
    let (width, height) = (matrix.width(), matrix.height());
    let (out_width, out_height) = (output_len(width, policy)?, output_len(height, policy)?);
    if policy == PaddingPolicy::Legacy && !(width.is_power_of_two() && height.is_power_of_two()) {
        warn!(width, height, "legacy transform of non-power-of-two matrix is not an exact DFT");
    }

    let row_transformed = ComplexMatrix::from_rows(
        matrix
            .rows()
            .iter()
            .map(|row| fft1d(row, policy))
            .collect::<Result<_, _>>()?,
    )?;
    debug!(width, height, out_height, %policy, "row pass done");

    let col_transformed: Vec<ComplexSequence> = (0..out_height)
        .map(|y| fft1d(&row_transformed.column(y), policy))
        .collect::<Result<_, _>>()?;
    debug!(columns = out_height, out_width, "column pass done");

    ComplexMatrix::from_rows(col_transformed)
}
