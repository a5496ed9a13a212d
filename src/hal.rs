//! Hardware seams that embedded-hal 1.0 does not cover.

/// Monotonic time source.
///
/// Step scheduling reads microseconds; button debouncing reads milliseconds.
/// Both must come from the same counter.
pub trait Clock {
    /// Microseconds since an arbitrary fixed origin.
    fn now_us(&self) -> u64;

    /// Milliseconds since the same origin, truncated to 32 bits.
    #[inline]
    fn now_ms(&self) -> u32 {
        (self.now_us() / 1000) as u32
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}
