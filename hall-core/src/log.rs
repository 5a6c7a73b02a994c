//! Logging-Makros
//!
//! Leiten an `defmt` weiter, wenn das Feature `defmt` aktiv ist.
//! Ohne Feature werden die Argumente nur ausgewertet (keine Ausgabe),
//! damit Host-Tests keinen Logger brauchen.

macro_rules! debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($fmt $(, $arg)*);
        #[cfg(not(feature = "defmt"))]
        {
            $( let _ = &$arg; )*
        }
    }};
}

macro_rules! error {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::error!($fmt $(, $arg)*);
        #[cfg(not(feature = "defmt"))]
        {
            $( let _ = &$arg; )*
        }
    }};
}

pub(crate) use debug;
pub(crate) use error;
