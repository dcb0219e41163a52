//! Newtype IDs for type-safe references.
//!
//! Use the `define_id!` macro to create ID wrappers that cannot be mixed up
//! with each other, e.g. a cart line id passed where a confirmation ticket is
//! expected.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `u64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_u64()`, `next()`
/// - `From<u64>` and `Into<u64>` implementations
/// - `FromStr` so ids can travel through form fields and paths
///
/// # Example
///
/// ```rust
/// # use skyray_core::define_id;
/// define_id!(LineId);
/// define_id!(OtherId);
///
/// let line = LineId::new(1);
/// assert_eq!(line.next(), LineId::new(2));
///
/// // These are different types, so this won't compile:
/// // let _: LineId = OtherId::new(1);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Default,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new ID from a u64 value.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the underlying u64 value.
            #[must_use]
            pub const fn as_u64(&self) -> u64 {
                self.0
            }

            /// The id that follows this one in a monotonic sequence.
            #[must_use]
            pub const fn next(&self) -> Self {
                Self(self.0.saturating_add(1))
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.parse::<u64>().map(Self)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(CartLineId);
define_id!(Ticket);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_next_is_monotonic() {
        let id = CartLineId::new(41);
        assert_eq!(id.next(), CartLineId::new(42));
        assert!(id.next() > id);
    }

    #[test]
    fn test_next_saturates() {
        let id = Ticket::new(u64::MAX);
        assert_eq!(id.next(), id);
    }

    #[test]
    fn test_from_str_and_display() {
        let id: CartLineId = "17".parse().unwrap();
        assert_eq!(id.as_u64(), 17);
        assert_eq!(id.to_string(), "17");
        assert!("seventeen".parse::<CartLineId>().is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Ticket::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
