//! AABB collision tests between court entities
//!
//! Every collideable entity exposes its `Body`; two bodies collide when both
//! are enabled and their boxes overlap on both axes. Touching edges do not
//! count as a collision.

use super::geom::Body;

/// Anything that takes part in collision tests
pub trait Collideable {
    fn body(&self) -> &Body;

    /// Test this entity against another
    fn collides(&self, other: &dyn Collideable) -> bool {
        collides(self.body(), other.body())
    }
}

impl Collideable for Body {
    fn body(&self) -> &Body {
        self
    }
}

/// Check whether two bodies overlap
///
/// Disabled bodies never collide, wherever they are.
#[inline]
pub fn collides(a: &Body, b: &Body) -> bool {
    if !a.enabled || !b.enabled {
        return false;
    }
    let (ac, bc) = (a.center(), b.center());
    let (ae, be) = (a.extent(), b.extent());
    let x = (ac.x - bc.x).abs() < ae.x + be.x;
    let y = (ac.y - bc.y).abs() < ae.y + be.y;
    x && y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap() {
        let a = Body::new(0.0, 0.0, 10.0, 10.0);
        let b = Body::new(5.0, 5.0, 10.0, 10.0);
        assert!(collides(&a, &b));
        assert!(a.collides(&b));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Body::new(0.0, 0.0, 10.0, 10.0);
        let right = Body::new(10.0, 0.0, 10.0, 10.0);
        let below = Body::new(0.0, 10.0, 10.0, 10.0);
        assert!(!collides(&a, &right));
        assert!(!collides(&a, &below));
    }

    #[test]
    fn test_overlap_needs_both_axes() {
        let a = Body::new(0.0, 0.0, 10.0, 10.0);
        let b = Body::new(5.0, 50.0, 10.0, 10.0);
        assert!(!collides(&a, &b));
    }

    #[test]
    fn test_disabled_never_collides() {
        let a = Body::new(0.0, 0.0, 10.0, 10.0);
        let mut b = a.clone();
        b.enabled = false;
        assert!(!collides(&a, &b));
        assert!(!collides(&b, &a));
    }

    fn body_strategy() -> impl Strategy<Value = Body> {
        (
            -500.0f32..500.0,
            -500.0f32..500.0,
            0.5f32..200.0,
            0.5f32..200.0,
            any::<bool>(),
        )
            .prop_map(|(x, y, w, h, enabled)| {
                let mut body = Body::new(x, y, w, h);
                body.enabled = enabled;
                body
            })
    }

    proptest! {
        #[test]
        fn prop_collides_is_symmetric(a in body_strategy(), b in body_strategy()) {
            prop_assert_eq!(collides(&a, &b), collides(&b, &a));
        }

        #[test]
        fn prop_disabled_body_never_collides(a in body_strategy(), b in body_strategy()) {
            let mut b = b;
            b.enabled = false;
            prop_assert!(!collides(&a, &b));
        }
    }
}
