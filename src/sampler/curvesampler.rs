use log::{
    debug,
    info,
    warn
};
use rand::rngs::StdRng;
use rand::{
    Rng,
    SeedableRng
};
use rand_distr::StandardNormal;

use crate::configuration::SamplerConfiguration;
use crate::math::curve::curve::Curve;
use crate::math::curve::point2d::Point2D;
use crate::math::curve::polynomialcurve::PolynomialCurve;
use crate::math::curve::polynomialdegree::PolynomialDegree;
use crate::sampler::dataset::Dataset;
use crate::sampler::samplererror::SamplerError;

/// Step used by `increase_noise_level` / `decrease_noise_level`.
pub const NOISE_STEP: f64 = 0.01;

/// Pick radius a front end passes to `remove_nearest` for a click.
pub const DEFAULT_TOLERANCE: f64 = 0.05;

pub const MIN_NOISE_LEVEL: f64 = 0.0;
pub const MAX_NOISE_LEVEL: f64 = 1.0;

/// Synthetic data source for degree 0-2 polynomial regression.
///
/// Samples lie near a randomly drawn polynomial over `x_range`, carry
/// additive Gaussian noise with standard deviation `noise_level`, and are
/// clipped into `y_range`. The curve is cached: `generate` replaces it, a
/// degree change clears it, and `add_random_point` derives one lazily when
/// none is cached.
///
/// Every method leaves the sampler either untouched or fully updated.
pub struct CurveSampler<R: Rng = StdRng> {
    config: SamplerConfiguration,
    rng: R,
    dataset: Dataset,
    curve: Option<PolynomialCurve>
}

impl CurveSampler<StdRng> {
    /// Builds a sampler whose random source is seeded from `config.seed()`,
    /// or from OS entropy when no seed is configured.
    pub fn new(config: SamplerConfiguration) -> Result<CurveSampler<StdRng>, SamplerError> {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng()
        };
        CurveSampler::with_rng(config, rng)
    }
}

impl<R: Rng> CurveSampler<R> {
    /// Builds a sampler drawing from the given random source.
    ///
    /// The degree must lie in 0..=2; the noise level is clamped into
    /// [0, 1]. `data_size` is only checked by `generate`.
    pub fn with_rng(mut config: SamplerConfiguration, rng: R) -> Result<CurveSampler<R>, SamplerError> {
        config.degree()?;
        if !config.noise_level().is_finite() {
            return Err(SamplerError::config(format!(
                "noise level must be finite, got {}", config.noise_level()
            )));
        }
        let noise_level = config.noise_level().clamp(MIN_NOISE_LEVEL, MAX_NOISE_LEVEL);
        config.set_noise_level(noise_level);

        Ok(CurveSampler {
            config,
            rng,
            dataset: Dataset::new(),
            curve: None
        })
    }

    pub fn config(&self) -> &SamplerConfiguration {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Cached curve, `None` while unset.
    pub fn curve(&self) -> Option<&PolynomialCurve> {
        self.curve.as_ref()
    }

    pub fn x_values(&self) -> &[f64] {
        self.dataset.x_values()
    }

    pub fn y_values(&self) -> &[f64] {
        self.dataset.y_values()
    }

    pub fn noise_values(&self) -> &[f64] {
        self.dataset.noise_values()
    }

    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    fn degree(&self) -> PolynomialDegree {
        PolynomialDegree::clamped(self.config.polynomial_degree())
    }

    fn draw_noise(&mut self) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        z * self.config.noise_level()
    }

    fn current_curve(&mut self) -> PolynomialCurve {
        let degree = self.degree();
        match self.curve {
            Some(curve) if curve.degree() == degree => curve,
            _ => {
                let curve = PolynomialCurve::random(
                    degree,
                    self.config.x_range(),
                    self.config.y_range(),
                    &mut self.rng);
                debug!("derived {} curve: {}", degree, curve);
                self.curve = Some(curve);
                curve
            }
        }
    }

    /// Replaces the dataset with `data_size` fresh samples of a fresh curve.
    ///
    /// Fails without touching the dataset when `data_size` is zero or the
    /// degree is outside 0..=2.
    pub fn generate(&mut self) -> Result<(), SamplerError> {
        self.config.validate()?;
        let degree = self.config.degree()?;
        let data_size = self.config.data_size();
        let x_range = *self.config.x_range();
        let y_range = *self.config.y_range();

        info!("generating {} datapoints", data_size);
        info!("polynomial degree: {} ({})", degree.as_i32(), degree);
        info!("noise level: {:.3}", self.config.noise_level());
        info!("x range: {}, y range: {}", x_range, y_range);
        if let Some(seed) = self.config.seed() {
            info!("seed: {}", seed);
        }

        let x_values: Vec<f64> = (0..data_size).map(|_| x_range.sample(&mut self.rng)).collect();
        let noise_values: Vec<f64> = (0..data_size).map(|_| self.draw_noise()).collect();
        let curve = PolynomialCurve::random(degree, &x_range, &y_range, &mut self.rng);
        let y_values: Vec<f64> = x_values
            .iter()
            .zip(noise_values.iter())
            .map(|(&x, &noise)| y_range.clip(curve.value(x) + noise))
            .collect();

        let dataset = Dataset::from_columns(x_values, y_values, noise_values)?;
        info!("generated {} function: {}", degree, curve);
        if let Some(stats) = dataset.stats(&y_range) {
            info!("x: min={:.3}, max={:.3}, mean={:.3}", stats.x_min, stats.x_max, stats.x_mean);
            info!("y: min={:.3}, max={:.3}, mean={:.3}", stats.y_min, stats.y_max, stats.y_mean);
            info!("points clipped: {}", stats.clipped);
        }

        self.curve = Some(curve);
        self.dataset = dataset;
        Ok(())
    }

    /// Appends one sample following the cached curve, deriving a curve
    /// first if none is cached. Returns the stored point.
    pub fn add_random_point(&mut self) -> Point2D {
        let x = self.config.x_range().sample(&mut self.rng);
        let noise = self.draw_noise();
        let curve = self.current_curve();
        let y = self.config.y_range().clip(curve.value(x) + noise);

        self.dataset.push(x, y, noise);
        let point = Point2D::new(x, y);
        debug!("added random point {}", point);
        point
    }

    fn sync_data_size(&mut self) {
        self.config.set_data_size(self.dataset.len());
    }

    /// Appends `(x, y)` after clipping each coordinate to its range, then
    /// sets `data_size` to the new length. Returns the stored point.
    pub fn add_explicit_point(&mut self, x: f64, y: f64, noise: f64) -> Point2D {
        let x = self.config.x_range().clip(x);
        let y = self.config.y_range().clip(y);

        self.dataset.push(x, y, noise);
        self.sync_data_size();
        let point = Point2D::new(x, y);
        debug!("added point {}", point);
        point
    }

    /// Removes the sample closest to `(x, y)` if it lies within `tolerance`,
    /// then sets `data_size` to the new length.
    pub fn remove_nearest(&mut self, x: f64, y: f64, tolerance: f64) -> bool {
        match self.dataset.nearest(&Point2D::new(x, y)) {
            None => {
                warn!("no point to remove");
                false
            }
            Some((index, distance)) if distance <= tolerance => {
                match self.dataset.remove(index) {
                    Some((removed_x, removed_y, _)) => {
                        self.sync_data_size();
                        debug!("removed point ({:.3}, {:.3})", removed_x, removed_y);
                        true
                    }
                    None => false
                }
            }
            Some((_, distance)) => {
                warn!("no point within {} of ({:.3}, {:.3}), nearest is {:.3} away",
                      tolerance, x, y, distance);
                false
            }
        }
    }

    /// Removes the earliest inserted surviving sample.
    pub fn remove_oldest(&mut self) -> bool {
        match self.dataset.remove(0) {
            Some((x, y, noise)) => {
                debug!("removed oldest point ({:.3}, {:.3}, noise: {:.3})", x, y, noise);
                true
            }
            None => {
                warn!("no point to remove");
                false
            }
        }
    }

    /// Moves the degree by `delta`, clamped to 0..=2. A change clears the
    /// cached curve.
    pub fn set_polynomial_degree(&mut self, delta: i32) -> bool {
        let current = self.config.polynomial_degree();
        let target = current
            .saturating_add(delta)
            .clamp(PolynomialDegree::MIN, PolynomialDegree::MAX);
        if target == current {
            warn!("polynomial degree already at bound ({})", current);
            return false;
        }

        self.config.set_polynomial_degree(target);
        self.curve = None;
        info!("polynomial degree set to {}", target);
        true
    }

    /// Moves the noise level by `delta`, clamped to [0, 1]. Existing
    /// samples are left as they are.
    pub fn set_noise_level(&mut self, delta: f64) -> bool {
        let current = self.config.noise_level();
        let target = (current + delta).clamp(MIN_NOISE_LEVEL, MAX_NOISE_LEVEL);
        if !target.is_finite() || target == current {
            warn!("noise level already at bound ({:.3})", current);
            return false;
        }

        self.config.set_noise_level(target);
        info!("noise level set to {:.3}", target);
        true
    }

    pub fn increase_poly_degree(&mut self) -> bool {
        self.set_polynomial_degree(1)
    }

    pub fn decrease_poly_degree(&mut self) -> bool {
        self.set_polynomial_degree(-1)
    }

    pub fn increase_noise_level(&mut self) -> bool {
        self.set_noise_level(NOISE_STEP)
    }

    pub fn decrease_noise_level(&mut self) -> bool {
        self.set_noise_level(-NOISE_STEP)
    }

    /// Grows the dataset by `delta` random points, or shrinks it by
    /// removing the oldest ones, then sets `data_size` to the resulting
    /// length. Returns whether the dataset changed.
    pub fn step_data_size(&mut self, delta: i64) -> bool {
        if delta == 0 {
            return false;
        }

        let mut changed = false;
        if delta > 0 {
            for _ in 0..delta {
                self.add_random_point();
            }
            changed = true;
        } else {
            for _ in 0..delta.unsigned_abs() {
                if !self.remove_oldest() {
                    break;
                }
                changed = true;
            }
        }

        self.sync_data_size();
        info!("data size set to {}", self.dataset.len());
        changed
    }
}

impl<R: Rng + SeedableRng> CurveSampler<R> {
    /// Restarts the random source from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }
}
