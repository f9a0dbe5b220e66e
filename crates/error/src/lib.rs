//! Simulator error handling infrastructure.
//!
//! Provides the `define_sim_error!` macro for consistent error type
//! definitions across the workspace. Every subsystem declares its errors
//! with a one-byte subsystem identifier; variant codes compose into a
//! `u16` that is stable across releases and greppable in logs.
//!
//! ## Usage
//! ```
//! use vmsim_error::define_sim_error;
//!
//! define_sim_error! {
//!     pub enum StoreError(0x01) {
//!         OutOfMemory = 0x01 => "Physical memory exhausted",
//!     }
//! }
//!
//! assert_eq!(StoreError::OutOfMemory.code(), 0x0101);
//! ```

#![no_std]

/// Define a simulator error type with consistent code/name/Display handling.
///
/// Variants are plain (no payload); lookup misses in the simulator are
/// expressed as `Option`, not as error variants, so nothing here needs to
/// carry an inner error.
#[macro_export]
macro_rules! define_sim_error {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($subsystem:literal) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $code:literal => $desc:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Subsystem identifier for this error type.
            pub const SUBSYSTEM: u8 = $subsystem;

            /// Numeric error code: subsystem in the high byte, variant in the low.
            pub const fn code(&self) -> u16 {
                match self {
                    $(
                        Self::$variant => (($subsystem as u16) << 8) | $code,
                    )*
                }
            }

            /// Short error description for logging.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $desc,
                    )*
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "E{:04X}: {}", self.code(), self.name())
            }
        }

        impl core::error::Error for $name {}
    };
}
