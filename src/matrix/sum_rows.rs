use crate::error::{Result, check_len, grid_len};

/// Sum each row of an `n × m` matrix into `vector`.
///
/// Strictly sequential: one thread, columns summed left to right, so the
/// result is bit-exact for a given input. This is the serial baseline the
/// parallel kernels are compared against.
///
/// # Arguments
///
/// * `n` - Rows of `matrix`, length of `vector`
/// * `m` - Columns of `matrix`
/// * `matrix` - Input (n × m), row-major
/// * `vector` - Output row sums, overwritten
///
/// # Example
///
/// ```
/// use parloop::matrix::sum_rows::sum_rows;
///
/// let matrix = vec![1.0, 2.0, 3.0,   // 2×3 matrix
///                   4.0, 5.0, 6.0];
/// let mut vector = vec![0.0; 2];
///
/// sum_rows(2, 3, &matrix, &mut vector).unwrap();
///
/// assert_eq!(vector, vec![6.0, 15.0]);
/// ```
pub fn sum_rows(n: usize, m: usize, matrix: &[f64], vector: &mut [f64]) -> Result<()> {
    check_len("matrix", grid_len(n, m)?, matrix.len())?;
    check_len("vector", n, vector.len())?;

    for i in 0..n {
        let mut sum = 0.0;
        for j in 0..m {
            sum += matrix[i * m + j];
        }
        vector[i] = sum;
    }
    Ok(())
}
