use crate::error::VoxFlatError;

/// Validates permutation axes.
pub fn validate_permutation(rank: usize, dims: &[usize]) -> Result<(), VoxFlatError> {
    if dims.len() != rank {
        return Err(VoxFlatError::RankMismatch {
            expected: rank,
            actual: dims.len(),
        });
    }
    let mut seen = vec![false; rank];
    for &axis in dims {
        if axis >= rank {
            return Err(VoxFlatError::IndexOutOfBounds {
                index: vec![axis],
                shape: vec![rank], // Represent shape as rank
            });
        }
        if seen[axis] {
            return Err(VoxFlatError::InvalidPermutation {
                dims: dims.to_vec(),
                rank,
            });
        }
        seen[axis] = true;
    }
    Ok(())
}

/// Calculates the new shape after permutation.
pub fn permute_shape(shape: &[usize], dims: &[usize]) -> Vec<usize> {
    dims.iter().map(|&axis| shape[axis]).collect()
}

/// Calculates the new strides after permutation.
pub fn permute_strides(strides: &[usize], dims: &[usize]) -> Vec<usize> {
    dims.iter().map(|&axis| strides[axis]).collect()
}
