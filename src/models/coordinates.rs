//! Geographic coordinates model.

/// A latitude/longitude pair in degrees.
///
/// No range validation is applied here. Out-of-range values are carried
/// through as parsed and folded back onto the globe by the sun calculator.
/// A `Coordinates` value only exists once both halves are known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Degrees north of the equator (negative for south).
    pub latitude: f64,
    /// Degrees east of Greenwich (negative for west).
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a new coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Combines separately tracked halves, returning `None` if either is absent.
    ///
    /// # Example
    ///
    /// ```
    /// use sun_events::models::Coordinates;
    ///
    /// assert!(Coordinates::from_parts(Some(1.0), None).is_none());
    /// let coords = Coordinates::from_parts(Some(51.5), Some(-0.1)).unwrap();
    /// assert_eq!(coords.latitude, 51.5);
    /// ```
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        Some(Self::new(latitude?, longitude?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_requires_both_halves() {
        assert!(Coordinates::from_parts(None, None).is_none());
        assert!(Coordinates::from_parts(Some(10.0), None).is_none());
        assert!(Coordinates::from_parts(None, Some(10.0)).is_none());
    }

    #[test]
    fn test_from_parts_keeps_out_of_range_values() {
        let coords = Coordinates::from_parts(Some(123.0), Some(-400.0)).unwrap();
        assert_eq!(coords, Coordinates::new(123.0, -400.0));
    }
}
