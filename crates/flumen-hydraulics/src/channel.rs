//! Rectangular open-channel geometry and Manning's equation.

use crate::error::{HydraulicsError, HydraulicsResult};

/// A prismatic rectangular open channel.
///
/// Carries the three parameters Manning's equation needs: the channel
/// bottom width `B`, Manning's roughness coefficient `n`, and the
/// longitudinal bed slope `So`. Depth is not part of the geometry; it
/// is supplied per query so a single channel can be evaluated across
/// candidate depths during a solve.
///
/// # Example
///
/// ```rust
/// use flumen_hydraulics::RectangularChannel;
///
/// // 10 m wide earthen channel on a very mild slope
/// let channel = RectangularChannel::new(10.0, 0.03, 1e-5).unwrap();
///
/// // Capacity grows with depth
/// assert!(channel.discharge_capacity(2.0) > channel.discharge_capacity(1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularChannel {
    /// Bottom width `B` in metres.
    bottom_width: f64,
    /// Manning's roughness coefficient `n`.
    roughness: f64,
    /// Longitudinal bed slope `So` (dimensionless).
    slope: f64,
}

impl RectangularChannel {
    /// Creates a new rectangular channel.
    ///
    /// # Arguments
    ///
    /// * `bottom_width` - Channel bottom width in metres (positive)
    /// * `roughness` - Manning's `n` (positive)
    /// * `slope` - Bed slope (non-negative)
    ///
    /// # Errors
    ///
    /// Returns [`HydraulicsError::InvalidGeometry`] if any parameter is
    /// out of range.
    pub fn new(bottom_width: f64, roughness: f64, slope: f64) -> HydraulicsResult<Self> {
        if !bottom_width.is_finite() || bottom_width <= 0.0 {
            return Err(HydraulicsError::invalid_geometry(format!(
                "bottom width must be positive, got {bottom_width}"
            )));
        }
        if !roughness.is_finite() || roughness <= 0.0 {
            return Err(HydraulicsError::invalid_geometry(format!(
                "Manning's n must be positive, got {roughness}"
            )));
        }
        if !slope.is_finite() || slope < 0.0 {
            return Err(HydraulicsError::invalid_geometry(format!(
                "bed slope must be non-negative, got {slope}"
            )));
        }

        Ok(Self {
            bottom_width,
            roughness,
            slope,
        })
    }

    /// Channel bottom width `B` in metres.
    pub fn bottom_width(&self) -> f64 {
        self.bottom_width
    }

    /// Manning's roughness coefficient `n`.
    pub fn roughness(&self) -> f64 {
        self.roughness
    }

    /// Longitudinal bed slope `So`.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Flow cross-section area `A = B*y` at depth `y`.
    pub fn flow_area(&self, depth: f64) -> f64 {
        self.bottom_width * depth
    }

    /// Wetted perimeter `P = B + 2y` at depth `y`.
    pub fn wetted_perimeter(&self, depth: f64) -> f64 {
        self.bottom_width + 2.0 * depth
    }

    /// Hydraulic radius `R = A/P` at depth `y`.
    pub fn hydraulic_radius(&self, depth: f64) -> f64 {
        self.flow_area(depth) / self.wetted_perimeter(depth)
    }

    /// Uniform-flow discharge capacity at depth `y` (SI Manning).
    ///
    /// ```text
    /// Q = (1/n) * A * R^(2/3) * sqrt(So)
    /// ```
    pub fn discharge_capacity(&self, depth: f64) -> f64 {
        let area = self.flow_area(depth);
        let radius = self.hydraulic_radius(depth);
        area * radius.powf(2.0 / 3.0) * self.slope.sqrt() / self.roughness
    }
}
