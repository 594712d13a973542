use derive_more::{Add, AddAssign, Display, From, Into, Sub, Sum};

/// A distance in canvas pixels. All widths, sizes, and offsets in the
/// public API are expressed in `Px`.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, Sum, From, Into, Display,
)]
pub struct Px(pub f32);

impl std::ops::Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        assert_eq!(Px(3.0) + Px(4.5), Px(7.5));
        assert_eq!(Px(10.0) - Px(4.0), Px(6.0));
        assert_eq!(Px(20.0) * 1.8, Px(36.0));
        assert_eq!(Px(36.0) / 2.0, Px(18.0));
        let total: Px = [Px(1.0), Px(2.0), Px(3.0)].into_iter().sum();
        assert_eq!(total, Px(6.0));
    }
}
