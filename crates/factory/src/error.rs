use std::borrow::Cow;

/// Errors reported by [`Factory`](crate::Factory) operations.
///
/// A missing key is not an error for `create_unique`/`create_shared`; only the
/// `try_create_*` helpers surface it as [`FactoryError::UnknownKey`].
#[fabrik_derive::fabrik_error]
pub enum FactoryError {
    /// Registration was refused because the key is already bound and the
    /// factory runs with [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
    #[error("Duplicate key{}: {message}", format_context(.context))]
    DuplicateKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// No creator is bound to the requested key.
    #[error("Unknown key{}: {message}", format_context(.context))]
    UnknownKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context_when_present() {
        let err: Result<(), FactoryError> = Err(FactoryError::UnknownKey {
            message: "\"triangle\"".into(),
            context: None,
        });
        assert_eq!(err.as_ref().unwrap_err().to_string(), "Unknown key: \"triangle\"");

        let err = err.context("building toolbar");
        assert_eq!(err.unwrap_err().to_string(), "Unknown key (building toolbar): \"triangle\"");
    }

    #[test]
    fn context_is_replaced_on_every_variant() {
        let err: Result<(), FactoryError> = Err(FactoryError::DuplicateKey {
            message: "\"circle\" is already bound to Circle".into(),
            context: Some("first pass".into()),
        });

        let Err(FactoryError::DuplicateKey { context, .. }) = err.context("second pass") else {
            panic!("expected a duplicate key error");
        };
        assert_eq!(context.as_deref(), Some("second pass"));
    }
}
