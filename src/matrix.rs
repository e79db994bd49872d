//! A minimal dense matrix used for layer weights and gradients.

use rand::Rng;
use rand::distributions::IndependentSample;
use std::ops::{AddAssign, Index, IndexMut};
use std::slice;

/// A dense matrix of `f64`, stored column-major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mat {
    rows: usize,
    cols: usize,
    data: Vec<f64>, // column-major array
}

impl Mat {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Mat {
            rows: rows,
            cols: cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Draws every element from `distribution`, scaled by `scale`.
    pub fn random<D, R>(distribution: D,
                        scale: f64,
                        rows: usize,
                        cols: usize,
                        rng: &mut R)
                        -> Self
        where D: IndependentSample<f64>,
              R: Rng
    {
        let mut data = Vec::with_capacity(rows * cols);
        for _ in 0..(rows * cols) {
            data.push(scale * distribution.ind_sample(rng));
        }
        Mat {
            rows: rows,
            cols: cols,
            data: data,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn same_shape(&self, other: &Mat) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Computes `y += A·x`.
    pub fn mat_vec(&self, x: &[f64], y: &mut [f64]) {
        assert_eq!(x.len(), self.cols);
        assert_eq!(y.len(), self.rows);
        for (j, &xj) in x.iter().enumerate() {
            let col = &self.data[j * self.rows..(j + 1) * self.rows];
            for (yi, &aij) in y.iter_mut().zip(col.iter()) {
                *yi += aij * xj;
            }
        }
    }

    /// Computes `y += Aᵀ·x`.
    pub fn mat_vec_t(&self, x: &[f64], y: &mut [f64]) {
        assert_eq!(x.len(), self.rows);
        assert_eq!(y.len(), self.cols);
        for (j, yj) in y.iter_mut().enumerate() {
            let col = &self.data[j * self.rows..(j + 1) * self.rows];
            let mut acc = 0.0;
            for (&aij, &xi) in col.iter().zip(x.iter()) {
                acc += aij * xi;
            }
            *yj += acc;
        }
    }

    /// Computes the rank-one update `A += alpha·x·yᵀ`.
    pub fn rank_one(&mut self, alpha: f64, x: &[f64], y: &[f64]) {
        assert_eq!(x.len(), self.rows);
        assert_eq!(y.len(), self.cols);
        for (j, &yj) in y.iter().enumerate() {
            let col = &mut self.data[j * self.rows..(j + 1) * self.rows];
            for (aij, &xi) in col.iter_mut().zip(x.iter()) {
                *aij += alpha * xi * yj;
            }
        }
    }

    /// Multiplies every element in place.
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.data {
            *v *= factor;
        }
    }

    pub fn zero_out(&mut self) {
        for v in &mut self.data {
            *v = 0.0;
        }
    }

    /// True when every element is a finite number.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    pub fn iter(&self) -> slice::Iter<f64> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<f64> {
        self.data.iter_mut()
    }
}

impl Index<(usize, usize)> for Mat {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[col * self.rows + row]
    }
}

impl IndexMut<(usize, usize)> for Mat {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[col * self.rows + row]
    }
}

impl<'a> AddAssign<&'a Mat> for Mat {
    fn add_assign(&mut self, other: &Mat) {
        assert!(self.same_shape(other));
        for (l, r) in self.data.iter_mut().zip(other.data.iter()) {
            *l += *r;
        }
    }
}
