//! # Specifications
//!
//! A [`Specification`] is a pure predicate over a single item. Specifications
//! compose: [`And`], [`Or`] and [`Not`] build larger predicates out of smaller
//! ones, and [`AllOf`] / [`AnyOf`] do the same for a runtime-sized list.
//!
//! ## Ownership
//!
//! Composites **own** their children. `And<A, B>` stores `A` and `B` by value,
//! `AllOf<T>` stores boxed children. A composite therefore cannot outlive the
//! predicates it is made of. When the same child must appear in several trees,
//! wrap it in an `Arc` (which is itself a specification) and clone the handle.
//!
//! ```ignore
//! let green = ColorSpec(Color::Green);
//! let large = SizeSpec(Size::Large);
//!
//! let green_and_large = green.and(large);
//! let not_green = ColorSpec(Color::Green).not();
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

/// A predicate over a single item of type `T`.
///
/// Implementations must be pure: evaluating the same specification on the
/// same item always yields the same answer.
pub trait Specification<T> {
    /// Returns `true` if `item` satisfies this specification.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Conjunction with `other`. `other` is not evaluated when `self` fails.
    fn and<S>(self, other: S) -> And<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        And::new(self, other)
    }

    /// Disjunction with `other`. `other` is not evaluated when `self` holds.
    fn or<S>(self, other: S) -> Or<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        Or::new(self, other)
    }

    /// Negation.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }

    /// Erase the concrete type, keeping ownership.
    fn boxed(self) -> BoxedSpec<T>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

/// An owned, type-erased specification.
///
/// Used wherever the shape of a specification tree is only known at runtime
/// (for example, a parsed query).
pub type BoxedSpec<T> = Box<dyn Specification<T> + Send + Sync>;

impl<T, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

/// Satisfied when both children are.
#[derive(Debug, Clone)]
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<A, B> And<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A: Specification<T>, B: Specification<T>> Specification<T> for And<A, B> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

/// Satisfied when either child is.
#[derive(Debug, Clone)]
pub struct Or<A, B> {
    first: A,
    second: B,
}

impl<A, B> Or<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A: Specification<T>, B: Specification<T>> Specification<T> for Or<A, B> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) || self.second.is_satisfied(item)
    }
}

/// Inverts its child.
#[derive(Debug, Clone)]
pub struct Not<S> {
    inner: S,
}

impl<S> Not<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<T, S: Specification<T>> Specification<T> for Not<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }
}

/// Satisfied when every child is. An empty list is always satisfied.
pub struct AllOf<T> {
    specs: Vec<BoxedSpec<T>>,
}

impl<T> AllOf<T> {
    pub fn new(specs: Vec<BoxedSpec<T>>) -> Self {
        Self { specs }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T> Specification<T> for AllOf<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied(item))
    }
}

/// Satisfied when at least one child is. An empty list is never satisfied.
pub struct AnyOf<T> {
    specs: Vec<BoxedSpec<T>>,
}

impl<T> AnyOf<T> {
    pub fn new(specs: Vec<BoxedSpec<T>>) -> Self {
        Self { specs }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T> Specification<T> for AnyOf<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().any(|spec| spec.is_satisfied(item))
    }
}

/// Matches every item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysTrue;

impl<T> Specification<T> for AlwaysTrue {
    fn is_satisfied(&self, _item: &T) -> bool {
        true
    }
}

/// Matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysFalse;

impl<T> Specification<T> for AlwaysFalse {
    fn is_satisfied(&self, _item: &T) -> bool {
        false
    }
}

/// Adapts a closure into a specification.
pub struct Predicate<T, F> {
    func: F,
    _item: PhantomData<fn(&T)>,
}

impl<T, F> Specification<T> for Predicate<T, F>
where
    F: Fn(&T) -> bool,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (self.func)(item)
    }
}

/// Build a specification from a closure.
pub fn predicate<T, F>(func: F) -> Predicate<T, F>
where
    F: Fn(&T) -> bool,
{
    Predicate {
        func,
        _item: PhantomData,
    }
}

/// Evaluates a specification on one part of a larger item.
pub struct Projected<S, F, U> {
    inner: S,
    project: F,
    _part: PhantomData<fn(&U)>,
}

impl<T, U, S, F> Specification<T> for Projected<S, F, U>
where
    S: Specification<U>,
    F: Fn(&T) -> &U,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.inner.is_satisfied((self.project)(item))
    }
}

/// Lift a specification over `U` to one over `T` through `project`.
pub fn project<T, U, S, F>(inner: S, project: F) -> Projected<S, F, U>
where
    S: Specification<U>,
    F: Fn(&T) -> &U,
{
    Projected {
        inner,
        project,
        _part: PhantomData,
    }
}

pub fn all_of<T>(specs: Vec<BoxedSpec<T>>) -> AllOf<T> {
    AllOf::new(specs)
}

pub fn any_of<T>(specs: Vec<BoxedSpec<T>>) -> AnyOf<T> {
    AnyOf::new(specs)
}
