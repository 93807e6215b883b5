//! Positional argument application.

/// A callable that can be applied to the argument tuple `Args`.
///
/// Implemented for every `FnOnce` of arity 0 through 8, with the arguments
/// given as a tuple: `()`, `(a,)`, `(a, b)`, and so on.
///
/// # Examples
///
/// ```
/// use caught::Invoke;
///
/// let add = |a: i32, b: i32| a + b;
/// assert_eq!(add.invoke((2, 3)), 5);
/// ```
pub trait Invoke<Args> {
    /// What the callable returns.
    type Output;

    /// Call `self` with `args` spread as positional arguments.
    fn invoke(self, args: Args) -> Self::Output;
}

macro_rules! impl_invoke {
    ($($arg:ident),*) => {
        impl<Func, Ret, $($arg),*> Invoke<($($arg,)*)> for Func
        where
            Func: FnOnce($($arg),*) -> Ret,
        {
            type Output = Ret;

            #[inline]
            #[allow(non_snake_case)]
            fn invoke(self, ($($arg,)*): ($($arg,)*)) -> Ret {
                self($($arg),*)
            }
        }
    };
}

impl_invoke!();
impl_invoke!(A1);
impl_invoke!(A1, A2);
impl_invoke!(A1, A2, A3);
impl_invoke!(A1, A2, A3, A4);
impl_invoke!(A1, A2, A3, A4, A5);
impl_invoke!(A1, A2, A3, A4, A5, A6);
impl_invoke!(A1, A2, A3, A4, A5, A6, A7);
impl_invoke!(A1, A2, A3, A4, A5, A6, A7, A8);
