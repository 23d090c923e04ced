use uom::si::f64::{HeatTransfer, ThermalConductance};

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};

use super::Surfaces;

/// Overall heat-transfer coefficients (U-values) of the zone envelope.
///
/// Both coefficients are guaranteed to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    wall: HeatTransfer,
    window: HeatTransfer,
}

impl Envelope {
    /// Constructs a validated envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if either U-value is negative or `NaN`.
    pub fn new(wall: HeatTransfer, window: HeatTransfer) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            NonNegative::new(wall)?,
            NonNegative::new(window)?,
        ))
    }

    /// Constructs an envelope from pre-validated U-values.
    #[must_use]
    pub fn from_constrained(
        wall: Constrained<HeatTransfer, NonNegative>,
        window: Constrained<HeatTransfer, NonNegative>,
    ) -> Self {
        Self::new_unchecked(wall.into_inner(), window.into_inner())
    }

    /// Constructs an envelope without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure both U-values are non-negative.
    #[must_use]
    pub fn new_unchecked(wall: HeatTransfer, window: HeatTransfer) -> Self {
        Self { wall, window }
    }

    /// U-value of the opaque walls.
    #[must_use]
    pub fn wall(&self) -> HeatTransfer {
        self.wall
    }

    /// U-value of the windows.
    #[must_use]
    pub fn window(&self) -> HeatTransfer {
        self.window
    }

    /// Returns the envelope conductance `UA = U_wall·A_wall + U_window·A_window`.
    #[must_use]
    pub fn conductance(&self, surfaces: &Surfaces) -> ThermalConductance {
        let walls: ThermalConductance = self.wall * surfaces.wall;
        let windows: ThermalConductance = self.window * surfaces.window;
        walls + windows
    }
}
