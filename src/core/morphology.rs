//! Grayscale morphological kernels over 3D voxel buffers.
//!
//! Dilation takes the maximum over the structuring neighborhood, so
//! foreground regions grow by one voxel shell per iteration; binary masks
//! fall out as the 0/1 special case. Border voxels use the in-bounds part
//! of the neighborhood.
use ndarray::{Array3, Zip};

use crate::core::params::DilateParams;
use crate::error::Result;
use crate::types::Connectivity;

const FACE_OFFSETS: [(i64, i64, i64); 6] = [
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
];

/// Dilate `src` according to `params`, returning a new buffer.
pub fn dilate(src: &Array3<f32>, params: &DilateParams) -> Result<Array3<f32>> {
    params.validate()?;
    let mut current = src.clone();
    for _ in 0..params.iterations {
        current = dilate_once(&current, params.connectivity);
    }
    Ok(current)
}

fn dilate_once(src: &Array3<f32>, connectivity: Connectivity) -> Array3<f32> {
    let (nx, ny, nz) = src.dim();
    let mut dest = Array3::<f32>::zeros(src.raw_dim());
    Zip::indexed(&mut dest).par_for_each(|(x, y, z), out| {
        let mut max = src[[x, y, z]];
        match connectivity {
            Connectivity::Faces6 => {
                for (dx, dy, dz) in FACE_OFFSETS {
                    if let Some(value) = neighbor(src, (nx, ny, nz), (x, y, z), (dx, dy, dz)) {
                        max = max.max(value);
                    }
                }
            }
            Connectivity::Full26 => {
                for dx in -1..=1 {
                    for dy in -1..=1 {
                        for dz in -1..=1 {
                            if dx == 0 && dy == 0 && dz == 0 {
                                continue;
                            }
                            if let Some(value) =
                                neighbor(src, (nx, ny, nz), (x, y, z), (dx, dy, dz))
                            {
                                max = max.max(value);
                            }
                        }
                    }
                }
            }
        }
        *out = max;
    });
    dest
}

#[inline]
fn neighbor(
    src: &Array3<f32>,
    dims: (usize, usize, usize),
    at: (usize, usize, usize),
    offset: (i64, i64, i64),
) -> Option<f32> {
    let x = at.0 as i64 + offset.0;
    let y = at.1 as i64 + offset.1;
    let z = at.2 as i64 + offset.2;
    if x < 0 || y < 0 || z < 0 {
        return None;
    }
    let (x, y, z) = (x as usize, y as usize, z as usize);
    if x >= dims.0 || y >= dims.1 || z >= dims.2 {
        return None;
    }
    Some(src[[x, y, z]])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_voxel() -> Array3<f32> {
        let mut src = Array3::<f32>::zeros((5, 5, 5));
        src[[2, 2, 2]] = 1.0;
        src
    }

    fn count_nonzero(arr: &Array3<f32>) -> usize {
        arr.iter().filter(|v| **v > 0.0).count()
    }

    #[test]
    fn faces6_grows_a_cross() {
        let params = DilateParams {
            iterations: 1,
            connectivity: Connectivity::Faces6,
        };
        let out = dilate(&single_voxel(), &params).unwrap();
        // Center plus six face neighbors.
        assert_eq!(count_nonzero(&out), 7);
        assert_eq!(out[[2, 2, 2]], 1.0);
        assert_eq!(out[[1, 2, 2]], 1.0);
        assert_eq!(out[[2, 3, 2]], 1.0);
        assert_eq!(out[[1, 1, 2]], 0.0);
    }

    #[test]
    fn full26_grows_a_cube() {
        let params = DilateParams {
            iterations: 1,
            connectivity: Connectivity::Full26,
        };
        let out = dilate(&single_voxel(), &params).unwrap();
        assert_eq!(count_nonzero(&out), 27);
        assert_eq!(out[[1, 1, 1]], 1.0);
        assert_eq!(out[[3, 3, 3]], 1.0);
        assert_eq!(out[[0, 2, 2]], 0.0);
    }

    #[test]
    fn iterations_compound() {
        let params = DilateParams {
            iterations: 2,
            connectivity: Connectivity::Full26,
        };
        let out = dilate(&single_voxel(), &params).unwrap();
        // Two passes reach the full 5x5x5 cube.
        assert_eq!(count_nonzero(&out), 125);
    }

    #[test]
    fn grayscale_takes_neighborhood_max() {
        let mut src = Array3::<f32>::zeros((3, 3, 3));
        src[[0, 0, 0]] = 2.0;
        src[[2, 2, 2]] = 5.0;
        let params = DilateParams {
            iterations: 1,
            connectivity: Connectivity::Full26,
        };
        let out = dilate(&src, &params).unwrap();
        assert_eq!(out[[1, 1, 1]], 5.0);
        assert_eq!(out[[1, 2, 2]], 5.0);
        // (0,1,1) is out of reach of the 5.0 voxel but adjacent to the 2.0 one.
        assert_eq!(out[[0, 1, 1]], 2.0);
    }

    #[test]
    fn border_voxels_clamp_to_bounds() {
        let mut src = Array3::<f32>::zeros((2, 2, 2));
        src[[0, 0, 0]] = 1.0;
        let out = dilate(&src, &DilateParams::default()).unwrap();
        assert_eq!(count_nonzero(&out), 8);
    }
}
