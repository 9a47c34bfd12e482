//! Component-type descriptors registered with the resolver.

use std::fmt;

/// Stable handle assigned to a component type at registration time.
///
/// The handle is the cache key for resolved display names; the code that
/// registered a component releases its handle when the component is
/// destroyed, so the registry never extends a component's lifetime.
pub type ComponentId = u64;

/// Failure raised by a computed display-name producer.
///
/// Resolution absorbs this error completely: a failing producer degrades to
/// the `Unknown` sentinel and nothing propagates to the caller.
#[derive(Debug, Clone)]
pub struct ProducerError {
    pub message: String,
}

impl ProducerError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ProducerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "display name producer failed: {}", self.message)
    }
}

impl std::error::Error for ProducerError {}

/// Callable that computes a display name on demand.
pub type NameProducer = Box<dyn Fn() -> Result<String, ProducerError> + Send>;

/// Declared display name of a component type.
pub enum DisplayName {
    /// A fixed string supplied at declaration time.
    Literal(String),
    /// A producer invoked at most once, on first resolution.
    Computed(NameProducer),
}

impl fmt::Debug for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(name) => f.debug_tuple("Literal").field(name).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Descriptor for a component-like value.
///
/// Carries the two optional attributes inspection tooling reads from a
/// component constructor: an explicit `display_name` and the intrinsic
/// `name`. Either may be absent; an empty `display_name` literal counts as
/// absent and falls back to `name`.
#[derive(Debug, Default)]
pub struct ComponentType {
    pub display_name: Option<DisplayName>,
    pub name: Option<String>,
}

impl ComponentType {
    /// Descriptor carrying only the intrinsic `name` attribute.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            display_name: None,
            name: Some(name.into()),
        }
    }

    /// Descriptor declaring an explicit display name.
    #[must_use]
    pub fn with_display_name(name: impl Into<String>) -> Self {
        Self {
            display_name: Some(DisplayName::Literal(name.into())),
            name: None,
        }
    }

    /// Descriptor whose display name is computed on first resolution.
    #[must_use]
    pub fn with_computed_display_name(producer: NameProducer) -> Self {
        Self {
            display_name: Some(DisplayName::Computed(producer)),
            name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_formatting_elides_producers() {
        let literal = DisplayName::Literal("Widget".into());
        assert_eq!(format!("{literal:?}"), "Literal(\"Widget\")");

        let computed = DisplayName::Computed(Box::new(|| Ok("Widget".to_string())));
        assert_eq!(format!("{computed:?}"), "Computed(..)");
    }

    #[test]
    fn producer_error_reports_its_message() {
        let error = ProducerError::new("missing module context");
        assert_eq!(
            error.to_string(),
            "display name producer failed: missing module context"
        );
    }
}
