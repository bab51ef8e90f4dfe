use alloc::{boxed::Box, rc::Rc, string::String, sync::Arc, vec::Vec};
use core::cmp::Reverse;

/// Distinguishes real values from absence markers.
///
/// A heap only ever stores present values: inserting a value for which
/// [`is_absent`](Presence::is_absent) returns `true` fails with
/// [`HeapError::InvalidValue`](crate::HeapError::InvalidValue), and batch
/// insertion skips it.
///
/// Most types are never absent and can opt in with an empty implementation:
///
/// ```
/// use heapwise::Presence;
///
/// struct Job {
///     priority: u8,
/// }
///
/// impl Presence for Job {}
/// ```
pub trait Presence {
    /// Whether this value stands for "no value".
    fn is_absent(&self) -> bool {
        false
    }
}

macro_rules! always_present {
    // end of recursion
    () => {};

    ($({$($g:tt)+})? $t:ty $(, $($rest:tt)*)?) => {
        impl$(<$($g)+>)? Presence for $t {}

        $(always_present!($($rest)*);)?
    };
}

always_present! {
    (),
    bool, char,
    i8, u8,
    i16, u16,
    i32, u32,
    i64, u64,
    i128, u128,
    isize, usize,
    str, String,
    {T} [T], {T, const N: usize} [T; N], {T} Vec<T>,
}

impl Presence for f32 {
    fn is_absent(&self) -> bool {
        self.is_nan()
    }
}

impl Presence for f64 {
    fn is_absent(&self) -> bool {
        self.is_nan()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_absent(&self) -> bool {
        self.as_ref().map_or(true, Presence::is_absent)
    }
}

macro_rules! delegate_presence {
    ($({$($g:tt)+} $t:ty),* $(,)?) => {
        $(
            impl<$($g)+> Presence for $t {
                fn is_absent(&self) -> bool {
                    T::is_absent(self)
                }
            }
        )*
    };
}

delegate_presence! {
    {T: ?Sized + Presence} &T,
    {T: ?Sized + Presence} &mut T,
    {T: ?Sized + Presence} Box<T>,
    {T: ?Sized + Presence} Rc<T>,
    {T: ?Sized + Presence} Arc<T>,
}

impl<T: Presence> Presence for Reverse<T> {
    fn is_absent(&self) -> bool {
        self.0.is_absent()
    }
}
