//! world-space units and rectangle tests
use euclid::Rect;
use num_traits::Num;

pub mod worldtypes {
    /// world units; origin at the level's upper left, y grows downward
    pub struct WorldSpace;
    pub type Float = f64;
    pub type WorldPoint = euclid::Point2D<Float, WorldSpace>;
    pub type WorldVector = euclid::Vector2D<Float, WorldSpace>;
    pub type WorldSize = euclid::Size2D<Float, WorldSpace>;
    pub type WorldRect = euclid::Rect<Float, WorldSpace>;
}
use self::worldtypes::Float;

/// Separation left between a resolved hitbox and the block it hit, so the
/// pair does not report overlap again on the next frame.
pub const SKIN: Float = 0.01;

/// Closed-boundary AABB overlap: edge contact counts. Symmetric.
pub fn overlaps<T, U>(a: &Rect<T, U>, b: &Rect<T, U>) -> bool
where
    T: Num + PartialOrd + Copy,
{
    a.max_y() >= b.min_y()
        && a.min_y() <= b.max_y()
        && a.min_x() <= b.max_x()
        && a.max_x() >= b.min_x()
}

/// One-way overlap for platforms: both vertical comparisons test A's
/// bottom edge, so it fires only while A's feet are inside B's band. A
/// body rising from below or passing through sideways never triggers it.
pub fn platform_overlaps<T, U>(a: &Rect<T, U>, b: &Rect<T, U>) -> bool
where
    T: Num + PartialOrd + Copy,
{
    a.max_y() >= b.min_y()
        && a.max_y() <= b.max_y()
        && a.min_x() <= b.max_x()
        && a.max_x() >= b.min_x()
}

#[cfg(test)]
mod physics_test {
    use super::worldtypes::*;
    use super::*;
    use euclid::rect;

    fn r(x: Float, y: Float, w: Float, h: Float) -> WorldRect {
        rect(x, y, w, h)
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (r(0.0, 0.0, 10.0, 10.0), r(5.0, 5.0, 10.0, 10.0)),
            (r(0.0, 0.0, 10.0, 10.0), r(10.0, 10.0, 4.0, 4.0)),
            (r(0.0, 0.0, 10.0, 10.0), r(20.0, 0.0, 4.0, 4.0)),
            (r(3.0, 3.0, 2.0, 2.0), r(0.0, 0.0, 10.0, 10.0)),
        ];
        for (a, b) in &cases {
            assert_eq!(overlaps(a, b), overlaps(b, a), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn overlap_counts_edge_contact() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        // corner touch
        assert!(overlaps(&a, &r(10.0, 10.0, 5.0, 5.0)));
        // fully separate
        assert!(!overlaps(&a, &r(10.01, 0.0, 5.0, 5.0)));
        assert!(!overlaps(&a, &r(0.0, 10.01, 5.0, 5.0)));
    }

    #[test]
    fn platform_fires_only_inside_band() {
        let platform = r(0.0, 400.0, 100.0, 4.0);
        // bottom edge inside [400, 404]
        assert!(platform_overlaps(&r(10.0, 380.0, 14.0, 22.0), &platform));
        assert!(platform_overlaps(&r(10.0, 377.0, 14.0, 27.0), &platform));
        // entirely above
        assert!(!platform_overlaps(&r(10.0, 300.0, 14.0, 27.0), &platform));
        // bottom already below the band (rising from underneath)
        assert!(!platform_overlaps(&r(10.0, 390.0, 14.0, 27.0), &platform));
    }

    #[test]
    fn platform_ignores_sideways_passage() {
        let platform = r(50.0, 400.0, 16.0, 4.0);
        // feet below the band while walking past
        let walker = r(10.0, 380.0, 14.0, 40.0);
        assert!(!platform_overlaps(&walker, &platform));
        // out of horizontal range entirely
        assert!(!platform_overlaps(&r(100.0, 398.0, 14.0, 4.0), &platform));
    }

    #[test]
    fn predicates_work_on_integer_rects() {
        let a: Rect<i32, WorldSpace> = rect(0, 0, 16, 16);
        let b: Rect<i32, WorldSpace> = rect(16, 16, 16, 16);
        assert!(overlaps(&a, &b));
        assert!(platform_overlaps(&a, &b));
    }
}
