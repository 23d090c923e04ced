use uom::si::{
    f64::{Area, Length, Ratio, Volume},
    ratio::ratio,
};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive, UnitInterval};

/// Rectangular zone geometry.
///
/// Length, width, and height are guaranteed to be strictly positive.
/// The envelope is split into walls and windows by a fixed wall fraction,
/// [`ZoneGeometry::DEFAULT_WALL_FRACTION`] unless overridden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneGeometry {
    length: Length,
    width: Length,
    height: Length,
    wall_fraction: Ratio,
}

/// Surfaces derived from a [`ZoneGeometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surfaces {
    /// Floor area, `length × width`.
    pub floor: Area,

    /// Total enclosing surface: four walls plus the floor-equivalent roof.
    pub envelope: Area,

    /// Opaque wall share of the envelope.
    pub wall: Area,

    /// Glazed share of the envelope, `envelope - wall`.
    pub window: Area,
}

impl ZoneGeometry {
    /// Fraction of the envelope treated as opaque wall.
    ///
    /// This is a modeling simplification, not derived physics; override it
    /// with [`ZoneGeometry::with_wall_fraction`].
    pub const DEFAULT_WALL_FRACTION: f64 = 0.9;

    /// Constructs a validated geometry with the default wall fraction.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is not strictly positive.
    pub fn new(length: Length, width: Length, height: Length) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            StrictlyPositive::new(length)?,
            StrictlyPositive::new(width)?,
            StrictlyPositive::new(height)?,
        ))
    }

    /// Constructs a geometry from pre-validated dimensions.
    #[must_use]
    pub fn from_constrained(
        length: Constrained<Length, StrictlyPositive>,
        width: Constrained<Length, StrictlyPositive>,
        height: Constrained<Length, StrictlyPositive>,
    ) -> Self {
        Self::new_unchecked(length.into_inner(), width.into_inner(), height.into_inner())
    }

    /// Constructs a geometry without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure all dimensions are strictly positive.
    #[must_use]
    pub fn new_unchecked(length: Length, width: Length, height: Length) -> Self {
        Self {
            length,
            width,
            height,
            wall_fraction: Ratio::new::<ratio>(Self::DEFAULT_WALL_FRACTION),
        }
    }

    /// Returns this geometry with a different wall-to-envelope fraction.
    #[must_use]
    pub fn with_wall_fraction(self, wall_fraction: Constrained<Ratio, UnitInterval>) -> Self {
        Self {
            wall_fraction: wall_fraction.into_inner(),
            ..self
        }
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    #[must_use]
    pub fn width(&self) -> Length {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> Length {
        self.height
    }

    #[must_use]
    pub fn wall_fraction(&self) -> Ratio {
        self.wall_fraction
    }

    /// Returns the floor area.
    #[must_use]
    pub fn floor_area(&self) -> Area {
        self.length * self.width
    }

    /// Returns the enclosed air volume.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.floor_area() * self.height
    }

    /// Resolves the floor, envelope, wall, and window surfaces.
    #[must_use]
    pub fn surfaces(&self) -> Surfaces {
        let floor = self.floor_area();
        let perimeter: Length = (self.length + self.width) * 2.0;
        let envelope: Area = perimeter * self.height + floor;
        let wall: Area = self.wall_fraction * envelope;

        Surfaces {
            floor,
            envelope,
            wall,
            window: envelope - wall,
        }
    }
}
