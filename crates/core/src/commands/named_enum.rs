/// An enum with a fixed set of upper snake case constant names.
///
/// Implemented through [`named_enum!`](crate::named_enum).
pub trait NamedEnum: Copy + Sized + 'static {
    fn values() -> &'static [Self];

    fn name(self) -> &'static str;

    /// Case-insensitive lookup by constant name.
    fn parse(value: &str) -> Option<Self> {
        Self::values()
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(value))
    }

    /// Like [`NamedEnum::parse`], but underscores are ignored on both sides,
    /// so `redwool` matches `RED_WOOL`.
    fn parse_stripped(value: &str) -> Option<Self> {
        let value = value.replace('_', "");
        Self::values()
            .iter()
            .copied()
            .find(|v| v.name().replace('_', "").eq_ignore_ascii_case(&value))
    }

    fn names() -> Vec<&'static str> {
        Self::values().iter().map(|v| v.name()).collect()
    }
}

/// Declares an enum together with its [`NamedEnum`] implementation.
///
/// ```
/// eldoutils_core::named_enum! {
///     pub enum Mode {
///         Survival => "SURVIVAL",
///         Creative => "CREATIVE",
///     }
/// }
/// ```
#[macro_export]
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::commands::NamedEnum for $name {
            fn values() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }
    };
}

#[cfg(test)]
pub(crate) mod tests {
    use super::NamedEnum;

    crate::named_enum! {
        pub(crate) enum Wool {
            Red => "RED_WOOL",
            LightBlue => "LIGHT_BLUE_WOOL",
            White => "WHITE_WOOL",
        }
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Wool::parse("red_wool"), Some(Wool::Red));
        assert_eq!(Wool::parse("redwool"), None);
    }

    #[test]
    fn parse_stripped_ignores_underscores() {
        assert_eq!(Wool::parse_stripped("redwool"), Some(Wool::Red));
        assert_eq!(Wool::parse_stripped("LIGHTBLUEWOOL"), Some(Wool::LightBlue));
        assert_eq!(Wool::parse_stripped("blue"), None);
    }

    #[test]
    fn names_follow_declaration_order() {
        assert_eq!(
            Wool::names(),
            ["RED_WOOL", "LIGHT_BLUE_WOOL", "WHITE_WOOL"]
        );
    }
}
