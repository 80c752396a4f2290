//! Random planar point clouds with replay tokens.
//!
//! Model
//! - `count` points with coordinates drawn uniformly from `[1, count * scale]`.
//!   On the integer grid (default) repeats are possible but rare for large
//!   `scale`; small scales are a cheap way to force duplicates in tests.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so draw `k` of a run can be regenerated without replaying draws `0..k`.
//!
//! Code cross-refs: `engine::solve`, `brute::closest_pair_brute`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    /// Coordinate range factor: coordinates lie in `[1, count * scale]`.
    pub scale: u64,
    /// Round coordinates to integers.
    pub integer_grid: bool,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            scale: 100,
            integer_grid: true,
        }
    }
}

impl CloudCfg {
    #[inline]
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    fn upper(&self) -> u64 {
        (self.count as u64).saturating_mul(self.scale.max(1)).max(1)
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a cloud for `tok`.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    draw_cloud_with(cfg, &mut tok.to_std_rng())
}

/// Draw a cloud from a caller-provided RNG.
pub fn draw_cloud_with<R: Rng>(cfg: CloudCfg, rng: &mut R) -> Vec<Point> {
    let hi = cfg.upper();
    (0..cfg.count)
        .map(|_| {
            if cfg.integer_grid {
                Point::new(rng.gen_range(1..=hi) as f64, rng.gen_range(1..=hi) as f64)
            } else {
                let hi = hi as f64;
                Point::new(rng.gen_range(1.0..=hi), rng.gen_range(1.0..=hi))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = CloudCfg::with_count(64);
        let tok = ReplayToken::new(42, 7);
        assert_eq!(draw_cloud(cfg, tok), draw_cloud(cfg, tok));
        assert_ne!(draw_cloud(cfg, tok), draw_cloud(cfg, ReplayToken::new(42, 8)));
    }

    #[test]
    fn coordinates_in_range() {
        let cfg = CloudCfg {
            count: 50,
            scale: 2,
            integer_grid: true,
        };
        let pts = draw_cloud(cfg, ReplayToken::new(1, 0));
        assert_eq!(pts.len(), 50);
        for p in &pts {
            assert!((1.0..=100.0).contains(&p.x) && (1.0..=100.0).contains(&p.y));
            assert_eq!(p.x.fract(), 0.0);
        }

        let cont = CloudCfg {
            integer_grid: false,
            ..cfg
        };
        let pts = draw_cloud(cont, ReplayToken::new(1, 0));
        assert!(pts.iter().all(|p| (1.0..=100.0).contains(&p.y)));
    }
}
