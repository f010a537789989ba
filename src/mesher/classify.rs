use crate::math::Point3;
use crate::solid::Solid;

/// Samples taken along each axis when classifying a cell.
pub(crate) const SAMPLES_PER_AXIS: u32 = 5;

/// Result of sampling a solid's predicate over one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Classification {
    /// Every sample was inside the solid.
    Inside,
    /// Every sample was outside the solid.
    Outside,
    /// Both inside and outside samples were seen.
    Mixed,
}

/// Classifies the box `min..max` by sampling `solid.inside` on a fixed
/// 5x5x5 grid spanning it, corners and center included.
///
/// Sampling can miss features thinner than the grid pitch at the
/// current cell size; that is an accepted approximation of the method,
/// bounded by the subdivision tolerance, not an error.
pub(crate) fn classify_span(solid: &Solid, min: &Point3, max: &Point3) -> Classification {
    let step = (max - min) / f64::from(SAMPLES_PER_AXIS - 1);

    let mut all_inside = true;
    let mut all_outside = true;
    for ix in 0..SAMPLES_PER_AXIS {
        for iy in 0..SAMPLES_PER_AXIS {
            for iz in 0..SAMPLES_PER_AXIS {
                let sample = Point3::new(
                    min.x + step.x * f64::from(ix),
                    min.y + step.y * f64::from(iy),
                    min.z + step.z * f64::from(iz),
                );
                if solid.inside(&sample) {
                    all_outside = false;
                } else {
                    all_inside = false;
                }
                if !all_inside && !all_outside {
                    return Classification::Mixed;
                }
            }
        }
    }

    if all_inside {
        Classification::Inside
    } else {
        Classification::Outside
    }
}
