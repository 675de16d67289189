//! Operator sugar for composing specifications.
//!
//! Wrap any specification in [`Spec`] to combine it with `&`, `|` and `!`:
//!
//! ```ignore
//! let spec = Spec(ColorSpec(Color::Green)) & (Spec(SizeSpec(Size::Large)) | !Spec(SizeSpec(Size::Small)));
//! ```

use std::ops::{BitAnd, BitOr};

use crate::specification::{And, Not, Or, Specification};

/// Newtype that gives a specification the `&`, `|` and `!` operators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spec<S>(pub S);

impl<S> Spec<S> {
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<T, S: Specification<T>> Specification<T> for Spec<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.0.is_satisfied(item)
    }
}

impl<A, B> BitAnd<Spec<B>> for Spec<A> {
    type Output = Spec<And<A, B>>;

    fn bitand(self, rhs: Spec<B>) -> Self::Output {
        Spec(And::new(self.0, rhs.0))
    }
}

impl<A, B> BitOr<Spec<B>> for Spec<A> {
    type Output = Spec<Or<A, B>>;

    fn bitor(self, rhs: Spec<B>) -> Self::Output {
        Spec(Or::new(self.0, rhs.0))
    }
}

impl<S> std::ops::Not for Spec<S> {
    type Output = Spec<Not<S>>;

    fn not(self) -> Self::Output {
        Spec(Not::new(self.0))
    }
}
