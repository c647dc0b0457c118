//! Macro for implementing label conversions on small domain enums
//!
//! Shift designations, performance bands, metric types and mapping statuses
//! all travel as short human-readable labels ("Day", "Excellent", ...). This
//! macro gives each of them a `label()` accessor, `Display`, and a
//! case-insensitive, whitespace-tolerant `FromStr`.
//!
//! # Example
//!
//! ```rust
//! use shiftpulse_domain::impl_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Crew {
//!     Early,
//!     Late,
//! }
//!
//! impl_label_conversions!(Crew {
//!     Early => "Early",
//!     Late => "Late",
//! });
//!
//! assert_eq!(Crew::Early.to_string(), "Early");
//! assert_eq!(" late ".parse::<Crew>(), Ok(Crew::Late));
//! ```

/// Implements `label()`, `Display` and `FromStr` for label enums
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $label` - Mapping of enum variants to their display label
///
/// Parsing trims the input and compares labels ignoring ASCII case. The error
/// names the enum and echoes the rejected input.
#[macro_export]
macro_rules! impl_label_conversions {
    ($enum_name:ident { $($variant:ident => $label:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Display label for this variant.
            #[must_use]
            pub const fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                $(
                    if needle.eq_ignore_ascii_case($label) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
