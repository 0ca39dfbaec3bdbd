use std::path::Path;

use mg_sampler::{TensorSampler, UniformSampler};
use mg_tensor::{ComputeBackend, CpuBackend, Tensor};
use rand::RngCore;
use tracing::{debug, info};

use crate::artifact::{write_raw, ArtifactPaths};
use crate::config::GenConfig;
use crate::error::Result;

/// A sampled input and the Mish of every element.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldenPair {
    pub input: Tensor,
    pub golden: Tensor,
}

/// Samples an input tensor, computes its golden Mish output, and writes both.
pub struct GoldenGenerator {
    config: GenConfig,
    sampler: Box<dyn TensorSampler>,
    backend: Box<dyn ComputeBackend>,
}

impl GoldenGenerator {
    /// Generator with a uniform sampler over the configured range and the CPU backend.
    pub fn new(config: GenConfig) -> Result<Self> {
        let sampler = UniformSampler::new(config.low, config.high)?;
        Ok(Self::with_parts(
            config,
            Box::new(sampler),
            Box::new(CpuBackend::new()),
        ))
    }

    pub fn with_parts(
        config: GenConfig,
        sampler: Box<dyn TensorSampler>,
        backend: Box<dyn ComputeBackend>,
    ) -> Self {
        Self {
            config,
            sampler,
            backend,
        }
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Draw a fresh input and compute its golden output.
    pub fn generate(&self, rng: &mut dyn RngCore) -> Result<GoldenPair> {
        let input = self.sampler.sample(rng, &self.config.shape)?;
        debug!(
            sampler = self.sampler.name(),
            shape = %input.shape(),
            low = self.config.low,
            high = self.config.high,
            "sampled input"
        );

        let golden = input.mish(self.backend.as_ref(), self.config.mish_path)?;
        debug!(backend = self.backend.name(), path = ?self.config.mish_path, "computed golden");

        Ok(GoldenPair { input, golden })
    }

    /// Write both tensors as raw buffers, input first.
    pub fn write(&self, pair: &GoldenPair, paths: &ArtifactPaths) -> Result<()> {
        write_raw(&paths.input, &pair.input)?;
        write_raw(&paths.golden, &pair.golden)?;
        Ok(())
    }

    /// Generate one pair and write it under `root`.
    pub fn run(&self, root: &Path, rng: &mut dyn RngCore) -> Result<()> {
        let pair = self.generate(rng)?;
        let paths = self.config.artifact_paths(root);
        self.write(&pair, &paths)?;
        info!(
            elements = pair.input.numel(),
            input = %paths.input.display(),
            golden = %paths.golden.display(),
            "golden data generated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::read_raw;
    use crate::error::GoldenError;
    use mg_sampler::rng_from_seed;
    use mg_tensor::{f16, DType, MishPath, Shape};
    use std::fs;

    fn mish_f64(x: f64) -> f64 {
        x * (1.0 + x.exp()).ln().tanh()
    }

    /// Mirror the artifact layout the operator test expects.
    fn artifact_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("AclNNInvocation/input")).unwrap();
        fs::create_dir_all(dir.path().join("AclNNInvocation/output")).unwrap();
        dir
    }

    #[test]
    fn test_generate_shapes_and_range() {
        let g = GoldenGenerator::new(GenConfig::default()).unwrap();
        let pair = g.generate(&mut rng_from_seed(0)).unwrap();

        assert_eq!(pair.input.shape().dims(), &[8, 2048]);
        assert_eq!(pair.input.numel(), 16384);
        assert_eq!(pair.golden.shape(), pair.input.shape());
        assert_eq!(pair.golden.dtype(), DType::F16);

        let ten = f16::from_f32(10.0);
        assert!(pair
            .input
            .data_f16()
            .iter()
            .all(|&v| v >= f16::ONE && v < ten));
    }

    #[test]
    fn test_golden_is_mish_of_input() {
        let g = GoldenGenerator::new(GenConfig::default()).unwrap();
        let pair = g.generate(&mut rng_from_seed(42)).unwrap();
        let xs = pair.input.data_f16();
        let ys = pair.golden.data_f16();

        for (x, y) in xs.iter().zip(ys.iter()) {
            let want = mish_f64(x.to_f64());
            let tol = (want.abs() * 2e-3).max(1e-3);
            assert!(
                (y.to_f64() - want).abs() <= tol,
                "mish({}) = {}, want {}",
                x,
                y,
                want
            );
        }
    }

    #[test]
    fn test_pinned_seed_is_bit_exact() {
        let g = GoldenGenerator::new(GenConfig::default()).unwrap();
        let a = g.generate(&mut rng_from_seed(0)).unwrap();
        let b = g.generate(&mut rng_from_seed(0)).unwrap();
        assert_eq!(a.input.to_le_bytes(), b.input.to_le_bytes());
        assert_eq!(a.golden.to_le_bytes(), b.golden.to_le_bytes());
    }

    #[test]
    fn test_run_writes_both_artifacts() {
        let root = artifact_root();
        let g = GoldenGenerator::new(GenConfig::default()).unwrap();
        g.run(root.path(), &mut rng_from_seed(5)).unwrap();

        let paths = g.config().artifact_paths(root.path());
        assert_eq!(fs::metadata(&paths.input).unwrap().len(), 32768);
        assert_eq!(fs::metadata(&paths.golden).unwrap().len(), 32768);

        let expected = g.generate(&mut rng_from_seed(5)).unwrap();
        let shape = Shape::new(vec![8, 2048]);
        let input = read_raw(&paths.input, shape.clone(), DType::F16).unwrap();
        let golden = read_raw(&paths.golden, shape, DType::F16).unwrap();
        assert_eq!(input, expected.input);
        assert_eq!(golden, expected.golden);
    }

    #[test]
    fn test_rerun_overwrites_with_same_size() {
        let root = artifact_root();
        let g = GoldenGenerator::new(GenConfig::default()).unwrap();
        let paths = g.config().artifact_paths(root.path());

        g.run(root.path(), &mut rng_from_seed(1)).unwrap();
        let first = fs::read(&paths.input).unwrap();
        g.run(root.path(), &mut rng_from_seed(2)).unwrap();
        let second = fs::read(&paths.input).unwrap();

        assert_eq!(first.len(), second.len());
        assert_ne!(first, second);
        assert_eq!(fs::metadata(&paths.golden).unwrap().len(), 32768);
    }

    #[test]
    fn test_run_without_output_dir_fails() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("AclNNInvocation/input")).unwrap();

        let g = GoldenGenerator::new(GenConfig::default()).unwrap();
        let err = g.run(root.path(), &mut rng_from_seed(0)).unwrap_err();
        assert!(matches!(err, GoldenError::Io { .. }));
        assert!(!root.path().join("AclNNInvocation/output").exists());
    }

    #[test]
    fn test_widened_path_agrees_with_stepwise() {
        let stepwise = GoldenGenerator::new(GenConfig::default()).unwrap();
        let widened = GoldenGenerator::new(GenConfig {
            mish_path: MishPath::Widened,
            ..GenConfig::default()
        })
        .unwrap();

        let a = stepwise.generate(&mut rng_from_seed(9)).unwrap();
        let b = widened.generate(&mut rng_from_seed(9)).unwrap();
        assert_eq!(a.input, b.input);

        let ya = a.golden.data_f16();
        let yb = b.golden.data_f16();
        for (p, q) in ya.iter().zip(yb.iter()) {
            let tol = (q.to_f64().abs() * 3e-3).max(1.5e-3);
            assert!((p.to_f64() - q.to_f64()).abs() <= tol);
        }
    }

    #[test]
    fn test_custom_shape() {
        let g = GoldenGenerator::new(GenConfig {
            shape: Shape::new(vec![3, 5]),
            ..GenConfig::default()
        })
        .unwrap();
        let pair = g.generate(&mut rng_from_seed(0)).unwrap();
        assert_eq!(pair.golden.shape().dims(), &[3, 5]);
        assert_eq!(pair.golden.nbytes(), 30);
    }

    #[test]
    fn test_invalid_range_rejected() {
        let err = GoldenGenerator::new(GenConfig {
            low: 5.0,
            high: 5.0,
            ..GenConfig::default()
        })
        .err()
        .unwrap();
        assert!(matches!(err, GoldenError::Sampler(_)));
    }
}
