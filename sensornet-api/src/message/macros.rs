/// Declares a closed, byte-tagged wire enumeration.
///
/// Every variant carries its wire tag and its protocol label. The optional
/// `aliases` block maps deprecated labels onto canonical variants, so a
/// deprecated name resolves to the same value instead of a second variant.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($unknown:ident) {
            $( $(#[$vmeta:meta])* $variant:ident = $tag:literal => $label:literal, )+
        }
        aliases { $( $alias:literal => $target:ident, )* }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[repr(u8)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $tag, )+
        }

        impl $name {
            /// Canonical variants in tag order
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Deprecated labels and the canonical variant each one resolves to
            pub const ALIASES: &'static [(&'static str, Self)] = &[ $( ($alias, Self::$target), )* ];

            /// Creates the variant for a wire tag
            pub fn from_u8(value: u8) -> $crate::message::Result<Self> {
                match value {
                    $( $tag => Ok(Self::$variant), )+
                    other => Err($crate::message::MessageError::$unknown(other)),
                }
            }

            pub const fn as_u8(self) -> u8 {
                self as u8
            }

            /// Returns the protocol label
            pub const fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }

            /// Looks a variant up by protocol label, deprecated labels included
            pub fn from_name(name: &str) -> $crate::message::Result<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.name() == name)
                    .or_else(|| {
                        Self::ALIASES
                            .iter()
                            .find(|(alias, _)| *alias == name)
                            .map(|(_, variant)| *variant)
                    })
                    .ok_or_else(|| $crate::message::MessageError::UnknownName(name.into()))
            }
        }

        impl TryFrom<u8> for $name {
            type Error = $crate::message::MessageError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                Self::from_u8(value)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.as_u8()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::message::MessageError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s)
            }
        }
    };
}
