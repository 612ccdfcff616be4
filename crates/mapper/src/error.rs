use crate::key::ResolverKey;
use crate::resolver::ResolverKind;
use std::borrow::Cow;

pub type MapperResult<T> = Result<T, MapperError>;

/// Failures raised while dispatching or running resolvers.
#[shutter_derive::shutter_error]
pub enum MapperError {
    /// No resolver is registered for the requested pair.
    #[error("No resolver registered for {key}{}", format_context(.context))]
    UnresolvedMapping { key: ResolverKey, context: Option<Cow<'static, str>> },

    /// The resolver exists but cannot be driven by the requested operation.
    #[error("Resolver for {key} is a {actual} resolver{}", format_context(.context))]
    KindMismatch { key: ResolverKey, actual: ResolverKind, context: Option<Cow<'static, str>> },

    /// Navigation stepped through a missing or null value.
    #[error("Cannot read `{path}` of an absent value{}", format_context(.context))]
    AbsentField { path: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A value is present but has the wrong shape.
    #[error("Malformed payload{}: {message}", format_context(.context))]
    Malformed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A collaborator (date formatter, navigation, clock) failed.
    #[error("Collaborator failure{}: {message}", format_context(.context))]
    Collaborator { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// JSON (de)serialization failure.
    #[error("Serialization error{}: {source}", format_context(.context))]
    Serialization { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal mapper error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl MapperError {
    pub fn malformed(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Malformed { message: message.into(), context: None }
    }

    pub fn absent(path: impl Into<Cow<'static, str>>) -> Self {
        Self::AbsentField { path: path.into(), context: None }
    }

    pub fn collaborator(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Collaborator { message: message.into(), context: None }
    }

    /// `true` only for errors the Safe Accessor is allowed to swallow.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::AbsentField { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_pair_and_context() {
        let err: MapperResult<()> = Err(MapperError::UnresolvedMapping {
            key: ResolverKey::new("Api.Post", "Nothing"),
            context: None,
        });
        let err = err.context("Mapping post").unwrap_err();
        assert_eq!(
            err.to_string(),
            "No resolver registered for Api.Post -> Nothing (Mapping post)"
        );
    }

    #[test]
    fn serde_errors_convert_with_question_mark() {
        fn parse() -> MapperResult<serde_json::Value> {
            Ok(serde_json::from_str("{ nope")?)
        }
        assert!(matches!(parse(), Err(MapperError::Serialization { .. })));
    }

    #[test]
    fn only_absent_fields_are_recoverable() {
        assert!(MapperError::absent("photo.location").is_absent());
        assert!(!MapperError::malformed("expected array").is_absent());
        assert!(!MapperError::from("boom").is_absent());
    }
}
