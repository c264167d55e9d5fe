//! Principal component analysis of 3D point clouds.
//!
//! The accumulator collects points, computes their centroid and raw scatter
//! matrix, and hands the scatter matrix to an [`EigenSolver`]. The solver is
//! an injected capability: the kernel consumes an eigen-decomposition, it
//! does not implement one.

use crate::error::{PcaError, Result};
use crate::math::{Matrix3, Point3, Vector3};

/// The result of a symmetric eigen-decomposition.
///
/// `eigenvectors` holds one eigenvector per column; `eigenvalues` is the
/// diagonal of the eigenvalue matrix `D`. Column `i` pairs with value `i`.
/// The ordering is solver-defined and in particular not guaranteed to be
/// sorted by magnitude; callers that need the dominant axis first must sort.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenDecomposition {
    pub eigenvectors: Matrix3,
    pub eigenvalues: Vector3,
}

/// A symmetric 3x3 eigen-decomposition capability.
pub trait EigenSolver {
    /// Decomposes the symmetric matrix `m` into eigenvectors and eigenvalues.
    fn symmetric_eigen(&self, m: &Matrix3) -> EigenDecomposition;
}

/// The default solver, backed by [`nalgebra::linalg::SymmetricEigen`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NalgebraEigenSolver;

impl EigenSolver for NalgebraEigenSolver {
    fn symmetric_eigen(&self, m: &Matrix3) -> EigenDecomposition {
        let eigen = nalgebra::linalg::SymmetricEigen::new(*m);
        EigenDecomposition {
            eigenvectors: eigen.eigenvectors,
            eigenvalues: eigen.eigenvalues,
        }
    }
}

/// Accumulates 3D points and extracts their principal axes.
///
/// Points are collected with [`add`](Self::add); [`apply_pca`](Self::apply_pca)
/// computes the centroid, the scatter matrix and its eigen-decomposition.
/// Re-running `apply_pca` recomputes from the points collected so far.
#[derive(Debug, Clone, Default)]
pub struct Pca {
    points: Vec<Point3>,
    centroid: Option<Point3>,
    decomposition: Option<EigenDecomposition>,
}

impl Pca {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a point to the set.
    pub fn add(&mut self, point: Point3) {
        self.points.push(point);
    }

    /// Returns the number of collected points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no points have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Runs the analysis with the default [`NalgebraEigenSolver`].
    ///
    /// # Errors
    ///
    /// Returns [`PcaError::TooFewPoints`] for fewer than 3 points; any prior
    /// decomposition is left untouched in that case.
    pub fn apply_pca(&mut self) -> Result<()> {
        self.apply_pca_with(&NalgebraEigenSolver)
    }

    /// Runs the analysis with the given eigen-solver.
    ///
    /// Computes the centroid as the arithmetic mean and the scatter matrix
    /// as `Σ (p - centroid)(p - centroid)ᵗ` over all points. The scatter is
    /// not divided by the point count; it is the raw sum, not a normalized
    /// covariance.
    ///
    /// # Errors
    ///
    /// Returns [`PcaError::TooFewPoints`] for fewer than 3 points; any prior
    /// decomposition is left untouched in that case.
    pub fn apply_pca_with(&mut self, solver: &dyn EigenSolver) -> Result<()> {
        if self.points.len() < 3 {
            tracing::warn!(
                target: "geokern",
                count = self.points.len(),
                "need at least 3 points for PCA"
            );
            return Err(PcaError::TooFewPoints {
                count: self.points.len(),
            }
            .into());
        }

        let mut centroid = Vector3::zeros();
        for p in &self.points {
            centroid += p.coords;
        }
        let centroid = centroid / self.points.len() as f32;

        let mut scatter = Matrix3::zeros();
        for p in &self.points {
            let d = p.coords - centroid;
            scatter += d * d.transpose();
        }

        self.centroid = Some(Point3::from(centroid));
        self.decomposition = Some(solver.symmetric_eigen(&scatter));
        tracing::debug!(
            target: "geokern",
            points = self.points.len(),
            "eigen-decomposed scatter matrix"
        );
        Ok(())
    }

    /// Returns the centroid of the analyzed point set,
    /// or `None` before a successful [`apply_pca`](Self::apply_pca).
    #[must_use]
    pub fn centroid(&self) -> Option<Point3> {
        self.centroid
    }

    /// Returns the eigen-decomposition of the scatter matrix,
    /// or `None` before a successful [`apply_pca`](Self::apply_pca).
    #[must_use]
    pub fn decomposition(&self) -> Option<&EigenDecomposition> {
        self.decomposition.as_ref()
    }

    /// Returns eigenvalue `index` (0..3) in solver-defined order,
    /// or `None` before a successful [`apply_pca`](Self::apply_pca).
    #[must_use]
    pub fn eigen_value(&self, index: usize) -> Option<f32> {
        self.decomposition
            .as_ref()
            .filter(|_| index < 3)
            .map(|d| d.eigenvalues[index])
    }

    /// Returns eigenvector `index` (0..3) in solver-defined order,
    /// or `None` before a successful [`apply_pca`](Self::apply_pca).
    #[must_use]
    pub fn eigen_vector(&self, index: usize) -> Option<Vector3> {
        self.decomposition
            .as_ref()
            .filter(|_| index < 3)
            .map(|d| d.eigenvectors.column(index).into_owned())
    }

    /// Reconstructs `V · D · Vᵗ` from the decomposition.
    ///
    /// The result equals the original scatter matrix within tolerance; this
    /// round-trip is the primary correctness check for the decomposition.
    #[must_use]
    pub fn vdv(&self) -> Option<Matrix3> {
        self.decomposition.as_ref().map(|d| {
            d.eigenvectors * Matrix3::from_diagonal(&d.eigenvalues) * d.eigenvectors.transpose()
        })
    }

    /// Discards all points and any decomposition state.
    pub fn clear(&mut self) {
        self.points.clear();
        self.centroid = None;
        self.decomposition = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeokernError;
    use crate::math::random::SeededRandom;
    use rand::Rng;

    fn sample_cloud() -> Vec<Point3> {
        // elongated along x so the dominant axis is known
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.2, 0.1),
            Point3::new(4.0, -0.1, 0.2),
            Point3::new(6.0, 0.1, -0.2),
            Point3::new(8.0, -0.2, 0.0),
            Point3::new(10.0, 0.0, -0.1),
        ]
    }

    fn scatter_of(points: &[Point3]) -> Matrix3 {
        let mut centroid = Vector3::zeros();
        for p in points {
            centroid += p.coords;
        }
        let centroid = centroid / points.len() as f32;
        let mut scatter = Matrix3::zeros();
        for p in points {
            let d = p.coords - centroid;
            scatter += d * d.transpose();
        }
        scatter
    }

    #[test]
    fn too_few_points_is_an_error_and_leaves_state_unset() {
        let mut pca = Pca::new();
        pca.add(Point3::new(0.0, 0.0, 0.0));
        pca.add(Point3::new(1.0, 0.0, 0.0));
        assert!(matches!(
            pca.apply_pca(),
            Err(GeokernError::Pca(PcaError::TooFewPoints { count: 2 }))
        ));
        assert!(pca.decomposition().is_none());
        assert!(pca.centroid().is_none());
        assert!(pca.eigen_value(0).is_none());
        assert!(pca.eigen_vector(0).is_none());
        assert!(pca.vdv().is_none());
    }

    #[test]
    fn failed_run_leaves_prior_decomposition_untouched() {
        let mut pca = Pca::new();
        for p in sample_cloud() {
            pca.add(p);
        }
        pca.apply_pca().unwrap();
        let before = *pca.decomposition().unwrap();

        // an undersized accumulator may not clobber earlier results
        let mut undersized = Pca::new();
        undersized.add(Point3::new(0.0, 0.0, 0.0));
        assert!(undersized.apply_pca().is_err());
        assert!(undersized.decomposition().is_none());

        assert_eq!(*pca.decomposition().unwrap(), before);
    }

    #[test]
    fn centroid_is_arithmetic_mean() {
        let mut pca = Pca::new();
        pca.add(Point3::new(0.0, 0.0, 0.0));
        pca.add(Point3::new(3.0, 0.0, 0.0));
        pca.add(Point3::new(0.0, 3.0, 3.0));
        pca.apply_pca().unwrap();
        let centroid = pca.centroid().unwrap();
        assert!((centroid - Point3::new(1.0, 1.0, 1.0)).norm() < 1e-5, "{centroid}");
    }

    #[test]
    fn vdv_reconstructs_scatter_matrix() {
        let points = sample_cloud();
        let mut pca = Pca::new();
        for p in &points {
            pca.add(*p);
        }
        pca.apply_pca().unwrap();

        let reconstructed = pca.vdv().unwrap();
        let expected = scatter_of(&points);
        assert!(
            (reconstructed - expected).abs().max() < 1e-3,
            "V·D·Vᵗ = {reconstructed}, scatter = {expected}"
        );
    }

    #[test]
    fn vdv_reconstructs_scatter_for_random_clouds() {
        let mut rng = SeededRandom::new(11);
        for _ in 0..10 {
            let points: Vec<Point3> = (0..12)
                .map(|_| {
                    Point3::new(
                        rng.gen_range(-1.0..1.0),
                        rng.gen_range(-1.0..1.0),
                        rng.gen_range(-1.0..1.0),
                    )
                })
                .collect();
            let mut pca = Pca::new();
            for p in &points {
                pca.add(*p);
            }
            pca.apply_pca().unwrap();
            let diff = (pca.vdv().unwrap() - scatter_of(&points)).abs().max();
            assert!(diff < 1e-3, "diff = {diff}");
        }
    }

    #[test]
    fn dominant_axis_of_elongated_cloud() {
        let mut pca = Pca::new();
        for p in sample_cloud() {
            pca.add(p);
        }
        pca.apply_pca().unwrap();

        // ordering is solver-defined, so look for the largest value ourselves
        let dominant = (0..3)
            .max_by(|&a, &b| {
                pca.eigen_value(a)
                    .unwrap()
                    .total_cmp(&pca.eigen_value(b).unwrap())
            })
            .unwrap();
        let axis = pca.eigen_vector(dominant).unwrap();
        assert!(
            axis.normalize().dot(&Vector3::x()).abs() > 0.99,
            "dominant axis = {axis}"
        );
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut pca = Pca::new();
        for p in sample_cloud() {
            pca.add(p);
        }
        pca.apply_pca().unwrap();
        let first = pca.vdv().unwrap();
        pca.apply_pca().unwrap();
        let second = pca.vdv().unwrap();
        assert!((first - second).abs().max() < 1e-6);
    }

    #[test]
    fn clear_resets_everything() {
        let mut pca = Pca::new();
        for p in sample_cloud() {
            pca.add(p);
        }
        pca.apply_pca().unwrap();
        pca.clear();
        assert!(pca.is_empty());
        assert_eq!(pca.len(), 0);
        assert!(pca.decomposition().is_none());
        assert!(pca.centroid().is_none());
        assert!(pca.vdv().is_none());
    }

    #[test]
    fn out_of_range_index_is_none() {
        let mut pca = Pca::new();
        for p in sample_cloud() {
            pca.add(p);
        }
        pca.apply_pca().unwrap();
        assert!(pca.eigen_value(3).is_none());
        assert!(pca.eigen_vector(3).is_none());
    }

    // a solver stub proving the capability is actually consulted
    struct DiagonalSolver;

    impl EigenSolver for DiagonalSolver {
        fn symmetric_eigen(&self, m: &Matrix3) -> EigenDecomposition {
            EigenDecomposition {
                eigenvectors: Matrix3::identity(),
                eigenvalues: m.diagonal(),
            }
        }
    }

    #[test]
    fn injected_solver_is_used() {
        let mut pca = Pca::new();
        for p in sample_cloud() {
            pca.add(p);
        }
        pca.apply_pca_with(&DiagonalSolver).unwrap();
        assert_eq!(pca.eigen_vector(0).unwrap(), Vector3::x());
        let expected = scatter_of(&sample_cloud());
        assert!((pca.eigen_value(0).unwrap() - expected[(0, 0)]).abs() < 1e-4);
    }
}
