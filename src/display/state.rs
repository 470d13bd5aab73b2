//! Display type-state markers.
//!
//! A character display must run its power-up sequence before it accepts
//! text. The type system enforces that ordering.

/// Display has not run its power-up sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uninitialized;

/// Display is initialised and accepts text.
#[derive(Debug, Clone, Copy)]
pub struct Ready;

/// Trait for display states.
pub trait DisplayState: private::Sealed {
    /// State name for debugging.
    fn name() -> &'static str;
}

impl DisplayState for Uninitialized {
    fn name() -> &'static str {
        "Uninitialized"
    }
}

impl DisplayState for Ready {
    fn name() -> &'static str {
        "Ready"
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Uninitialized {}
    impl Sealed for super::Ready {}
}
