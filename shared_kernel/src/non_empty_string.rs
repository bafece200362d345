use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("value cannot be empty")]
pub struct NonEmptyStringError;

/// Declares a string newtype that can only be built from a non-empty value.
/// The value itself is kept as given, whitespace included.
#[macro_export]
macro_rules! non_empty_string {
    ($TypeName: ident) => {
        #[derive(
            Clone,
            Debug,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $TypeName(String);

        impl $TypeName {
            pub fn inner(&self) -> String {
                self.0.clone()
            }
        }

        impl PartialEq<str> for $TypeName {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl std::fmt::Display for $TypeName {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl AsRef<str> for $TypeName {
            fn as_ref(&self) -> &str {
                self.0.as_ref()
            }
        }

        impl std::borrow::Borrow<str> for $TypeName {
            fn borrow(&self) -> &str {
                self.0.as_ref()
            }
        }

        impl From<$TypeName> for String {
            fn from(value: $TypeName) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $TypeName {
            type Error = $crate::NonEmptyStringError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                if value.is_empty() {
                    return Err($crate::NonEmptyStringError);
                }
                Ok($TypeName(value))
            }
        }

        impl TryFrom<&str> for $TypeName {
            type Error = $crate::NonEmptyStringError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                $TypeName::try_from(value.to_owned())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::NonEmptyStringError;
    use rstest::rstest;

    non_empty_string!(Key);

    #[test]
    fn test_empty_value_is_rejected() {
        assert_eq!(Key::try_from(""), Err(NonEmptyStringError));
        assert_eq!(Key::try_from(String::new()), Err(NonEmptyStringError));
    }

    #[rstest]
    #[case(" ")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_whitespace_values_are_accepted(#[case] input: &str) {
        let key = Key::try_from(input).unwrap();
        assert_eq!(key.as_ref(), input);
    }

    #[test]
    fn test_value_is_kept_verbatim() {
        let key = Key::try_from(" ab-12 ").unwrap();
        assert_eq!(key.as_ref(), " ab-12 ");
        assert_eq!(key.to_string(), " ab-12 ");
    }

    #[test]
    fn test_deserializing_goes_through_validation() {
        let json = serde_json::to_string("").unwrap();
        assert!(serde_json::from_str::<Key>(&json).is_err());
        let key: Key = serde_json::from_str("\"XY-1\"").unwrap();
        assert_eq!(&key, "XY-1");
    }
}
