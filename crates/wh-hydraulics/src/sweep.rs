//! Friction factor sweeps across a range of Reynolds numbers.
//!
//! Each point is an independent guarded calculation, so the sweep is evaluated
//! in parallel.

use crate::calculator::Calculator;
use crate::common::require_finite;
use crate::error::{HydraulicsError, HydraulicsResult};
use crate::regime::FlowRegime;
use rayon::prelude::*;

/// Spacing of sweep points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SweepSpacing {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Reynolds number range to evaluate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReynoldsSweep {
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    pub spacing: SweepSpacing,
}

impl ReynoldsSweep {
    pub fn new(
        start: f64,
        end: f64,
        num_points: usize,
        spacing: SweepSpacing,
    ) -> HydraulicsResult<Self> {
        let start = require_finite(start, "sweep start")?;
        let end = require_finite(end, "sweep end")?;

        if num_points < 2 {
            return Err(HydraulicsError::InvalidArgument {
                what: "sweep must have at least 2 points",
                value: num_points as f64,
            });
        }

        if (start - end).abs() < 1e-12 {
            return Err(HydraulicsError::InvalidArgument {
                what: "sweep start and end must differ",
                value: end,
            });
        }

        Ok(Self {
            start,
            end,
            num_points,
            spacing,
        })
    }

    /// All points of the sweep, endpoints exact.
    pub fn points(&self) -> Vec<f64> {
        match self.spacing {
            SweepSpacing::Linear => self.linear_points(),
            SweepSpacing::Logarithmic => self.logarithmic_points(),
        }
    }

    fn linear_points(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        points[self.num_points - 1] = self.end;
        points
    }

    fn logarithmic_points(&self) -> Vec<f64> {
        // Needs both bounds positive
        if self.start <= 0.0 || self.end <= 0.0 {
            return self.linear_points();
        }
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        points[0] = self.start;
        points[self.num_points - 1] = self.end;
        points
    }
}

/// One row of a friction sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPoint {
    pub reynolds: f64,
    pub regime: FlowRegime,
    /// Guarded Fanning friction factor (NaN if recovered from a fault)
    pub fanning: f64,
}

/// Evaluate the friction factor at every point of `sweep`.
///
/// Fails on the first propagated error (argument error or non-convergence).
pub fn friction_sweep(
    calculator: &Calculator,
    sweep: &ReynoldsSweep,
    hydraulic_diameter: f64,
    roughness: f64,
) -> HydraulicsResult<Vec<SweepPoint>> {
    sweep
        .points()
        .into_par_iter()
        .map(|reynolds| -> HydraulicsResult<SweepPoint> {
            let fanning = calculator.friction_factor(hydraulic_diameter, reynolds, roughness)?;
            Ok(SweepPoint {
                reynolds,
                regime: FlowRegime::from_reynolds(reynolds),
                fanning,
            })
        })
        .collect()
}
