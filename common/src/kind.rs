//! Macros for defining kind enums.

/// Macro for defining a closed kind enum with an exact wire representation
/// of every variant.
///
/// The defined enum is (de)serialized, displayed and parsed as the string
/// literal given to each variant. The calling crate must depend on [`serde`]
/// and [`strum`] directly.
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube = "cube",
///
///         #[doc = "A sphere"]
///         Sphere = "sphere",
///     }
/// }
///
/// assert_eq!(Kind::Cube.as_str(), "cube");
/// assert_eq!("sphere".parse::<Kind>(), Ok(Kind::Sphere));
/// ```
///
/// [`serde`]: https://docs.rs/serde
/// [`strum`]: https://docs.rs/strum
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::serde::Deserialize,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            PartialEq,
            $crate::private::serde::Serialize,
        )]
        #[doc = $doc]
        pub enum $name {
            $(
                #[doc = $variant_doc]
                #[serde(rename = $value)]
                #[strum(serialize = $value)]
                $variant,
            )*
        }

        impl $name {
            /// All the variants, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Returns the wire representation of this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $value,
                    )*
                }
            }
        }
    };
}

#[cfg(test)]
mod spec {
    define_kind! {
        #[doc = "Audience."]
        enum Audience {
            #[doc = "Everybody."]
            All = "all",

            #[doc = "Job seekers only."]
            JobSeeker = "job-seeker",

            #[doc = "Recruiters only."]
            Recruiters = "recruiters",
        }
    }

    #[test]
    fn uses_exact_wire_values() {
        assert_eq!(Audience::JobSeeker.as_str(), "job-seeker");
        assert_eq!(Audience::JobSeeker.to_string(), "job-seeker");
        assert_eq!("recruiters".parse::<Audience>(), Ok(Audience::Recruiters));
        assert!("JobSeeker".parse::<Audience>().is_err());
    }

    #[test]
    fn lists_all_variants() {
        assert_eq!(
            Audience::ALL,
            &[Audience::All, Audience::JobSeeker, Audience::Recruiters],
        );
    }
}
