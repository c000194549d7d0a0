use std::io::Write;

use crate::math::curve::point2d::Point2D;
use crate::math::interval::Interval;
use crate::sampler::samplererror::SamplerError;

/// Paired samples in insertion order.
///
/// The three columns always have the same length. `noise_values` keeps the
/// noise drawn for each point; it takes no further part in the math.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    x_values: Vec<f64>,
    y_values: Vec<f64>,
    noise_values: Vec<f64>
}

/// Summary of a dataset, relative to the output range it was clipped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetStats {
    pub x_min: f64,
    pub x_max: f64,
    pub x_mean: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub y_mean: f64,
    pub clipped: usize
}

impl Dataset {
    pub fn new() -> Dataset {
        Dataset::default()
    }

    pub fn from_columns(x_values: Vec<f64>,
                        y_values: Vec<f64>,
                        noise_values: Vec<f64>) -> Result<Dataset, SamplerError> {
        if x_values.len() != y_values.len() || x_values.len() != noise_values.len() {
            return Err(SamplerError::config(format!(
                "column lengths differ: x={}, y={}, noise={}",
                x_values.len(), y_values.len(), noise_values.len()
            )));
        }
        Ok(Dataset { x_values, y_values, noise_values })
    }

    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    pub fn noise_values(&self) -> &[f64] {
        &self.noise_values
    }

    pub fn points(&self) -> Vec<Point2D> {
        self.x_values
            .iter()
            .zip(self.y_values.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect()
    }

    pub fn push(&mut self, x: f64, y: f64, noise: f64) {
        self.x_values.push(x);
        self.y_values.push(y);
        self.noise_values.push(noise);
    }

    /// Removes the sample at `index`, shifting later samples down.
    /// Returns the removed `(x, y, noise)` triple.
    pub fn remove(&mut self, index: usize) -> Option<(f64, f64, f64)> {
        if index >= self.len() {
            return None;
        }
        Some((
            self.x_values.remove(index),
            self.y_values.remove(index),
            self.noise_values.remove(index)
        ))
    }

    /// Index of and distance to the sample closest to `target`.
    ///
    /// On exactly equal distances the earliest inserted sample wins.
    pub fn nearest(&self, target: &Point2D) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        let columns = self.x_values.iter().zip(self.y_values.iter());
        for (index, (&x, &y)) in columns.enumerate() {
            let distance = Point2D::new(x, y).distance(target);
            match best {
                Some((_, best_distance)) if best_distance <= distance => {}
                _ => best = Some((index, distance))
            }
        }
        best
    }

    pub fn stats(&self, y_range: &Interval) -> Option<DatasetStats> {
        if self.is_empty() {
            return None;
        }
        let (x_min, x_max, x_mean) = summarize(&self.x_values);
        let (y_min, y_max, y_mean) = summarize(&self.y_values);
        let clipped = self.y_values.iter().filter(|&&y| y_range.on_bound(y)).count();
        Some(DatasetStats { x_min, x_max, x_mean, y_min, y_max, y_mean, clipped })
    }

    /// Writes an `x,y` header followed by one row per sample.
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> Result<(), SamplerError> {
        writeln!(writer, "x,y")?;
        for (x, y) in self.x_values.iter().zip(self.y_values.iter()) {
            writeln!(writer, "{},{}", x, y)?;
        }
        Ok(())
    }
}

fn summarize(values: &[f64]) -> (f64, f64, f64) {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    (min, max, mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        Dataset::from_columns(
            vec![0.1, 0.5, 0.9],
            vec![0.2, 0.0, 1.0],
            vec![0.01, -0.3, 0.4]).unwrap()
    }

    #[test]
    fn rejects_mismatched_columns() {
        let result = Dataset::from_columns(vec![0.0], vec![], vec![0.0]);
        assert!(matches!(result, Err(SamplerError::ConfigError(_))));
    }

    #[test]
    fn remove_shifts_later_samples() {
        let mut dataset = sample_dataset();
        assert_eq!(dataset.remove(1), Some((0.5, 0.0, -0.3)));
        assert_eq!(dataset.x_values(), &[0.1, 0.9]);
        assert_eq!(dataset.y_values(), &[0.2, 1.0]);
        assert_eq!(dataset.noise_values(), &[0.01, 0.4]);
        assert_eq!(dataset.remove(5), None);
    }

    #[test]
    fn nearest_prefers_first_on_ties() {
        let dataset = Dataset::from_columns(
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0]).unwrap();
        let (index, distance) = dataset.nearest(&Point2D::new(0.5, 0.0)).unwrap();
        assert_eq!(index, 0);
        assert_eq!(distance, 0.5);
        assert!(Dataset::new().nearest(&Point2D::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn nearest_scans_every_sample() {
        let dataset = sample_dataset();
        assert_eq!(dataset.nearest(&Point2D::new(0.95, 1.1)).map(|(index, _)| index), Some(2));
        let (index, distance) = dataset.nearest(&Point2D::new(0.5, 0.0)).unwrap();
        assert_eq!(index, 1);
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn stats_count_bound_hits() {
        let stats = sample_dataset().stats(&Interval::unit()).unwrap();
        assert_eq!(stats.clipped, 2);
        assert_eq!(stats.x_min, 0.1);
        assert_eq!(stats.x_max, 0.9);
        assert!((stats.y_mean - 0.4).abs() < 1e-12);
        assert!(Dataset::new().stats(&Interval::unit()).is_none());
    }

    #[test]
    fn csv_rows_follow_insertion_order() {
        let mut buffer = Vec::new();
        sample_dataset().write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "x,y\n0.1,0.2\n0.5,0\n0.9,1\n");
    }
}
