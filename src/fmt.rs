//! Logging shims.
//!
//! With the `defmt` feature enabled these forward to the matching `defmt`
//! macro. Without it the arguments are evaluated by reference and dropped so
//! call sites compile identically in both configurations. The module is
//! declared first with `#[macro_use]` so every other module sees them.

#![allow(unused_macros)]

#[cfg(feature = "defmt")]
macro_rules! trace {
    ($($arg:tt)*) => {
        defmt::trace!($($arg)*)
    };
}

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($($arg:tt)*) => {
        defmt::debug!($($arg)*)
    };
}

#[cfg(feature = "defmt")]
macro_rules! warn {
    ($($arg:tt)*) => {
        defmt::warn!($($arg)*)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! trace {
    ($($arg:expr),* $(,)?) => {{
        let _ = ($(&$arg),*);
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => {{
        let _ = ($(&$arg),*);
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! warn {
    ($($arg:expr),* $(,)?) => {{
        let _ = ($(&$arg),*);
    }};
}
