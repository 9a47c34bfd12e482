//! Component registration and display-name resolution.

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::cleanup::cleaned_display_name;
use crate::component::{ComponentId, ComponentType, DisplayName};
use crate::report::{self, NameOrigin};

/// Sentinel returned when no usable display name exists.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Handle-keyed store of component descriptors and their resolved names.
///
/// Handles are assigned at registration and never reused. Resolved names are
/// cached insert-only; an entry leaves the cache only when the handle is
/// released, so the cache never outlives the registration it belongs to.
#[derive(Default)]
pub struct ComponentRegistry {
    components: HashMap<ComponentId, ComponentType>,
    resolved: HashMap<ComponentId, String>,
    next_id: ComponentId,
}

impl ComponentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component type and return its stable handle.
    pub fn register(&mut self, component: ComponentType) -> ComponentId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.components.insert(id, component);
        id
    }

    /// Drop the descriptor and any cached name for `id`.
    ///
    /// Returns whether a component was registered under the handle.
    pub fn release(&mut self, id: ComponentId) -> bool {
        let removed = self.components.remove(&id).is_some();
        self.resolved.remove(&id);
        removed
    }

    #[must_use]
    pub fn contains(&self, id: ComponentId) -> bool {
        self.components.contains_key(&id)
    }

    #[must_use]
    pub fn descriptor(&self, id: ComponentId) -> Option<&ComponentType> {
        self.components.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of display names resolved so far.
    #[must_use]
    pub fn resolved_len(&self) -> usize {
        self.resolved.len()
    }

    /// Resolve the display name for `id`, computing and caching it on first
    /// use.
    ///
    /// Later lookups return the cached string without recomputation; a
    /// computed producer is never invoked twice for the same handle. The
    /// operation cannot fail: missing attributes and failing producers
    /// degrade to [`UNKNOWN_NAME`]. Handles that were never registered (or
    /// were already released) resolve to [`UNKNOWN_NAME`] without caching,
    /// since an entry under a dead handle would resurrect an association the
    /// registry no longer owns.
    pub fn display_name(&mut self, id: ComponentId) -> &str {
        if !self.resolved.contains_key(&id) {
            let Some(component) = self.components.get(&id) else {
                tracing::debug!(
                    component = id,
                    "display name requested for an unregistered handle"
                );
                return UNKNOWN_NAME;
            };
            let (raw, origin) = candidate_name(component);
            let resolved = match raw.as_deref() {
                Some(name) => cleaned_display_name(name).to_string(),
                None => UNKNOWN_NAME.to_string(),
            };
            tracing::debug!(
                component = id,
                name = %resolved,
                origin = ?origin,
                "resolved display name"
            );
            report::record_resolution(id, raw, &resolved, origin);
            self.resolved.insert(id, resolved);
        }
        self.resolved.get(&id).map_or(UNKNOWN_NAME, String::as_str)
    }
}

/// Pick the name candidate for a descriptor.
///
/// An explicit `display_name` wins; an empty literal counts as absent and
/// falls back to the intrinsic `name`. A computed producer is always the
/// chosen candidate when present: its failure is absorbed and does NOT fall
/// back to `name`, it degrades straight to the sentinel.
fn candidate_name(component: &ComponentType) -> (Option<String>, NameOrigin) {
    let (candidate, origin) = match &component.display_name {
        Some(DisplayName::Literal(name)) if !name.is_empty() => {
            (Some(name.clone()), NameOrigin::DisplayName)
        }
        Some(DisplayName::Computed(producer)) => match producer() {
            Ok(name) => (Some(name), NameOrigin::ComputedDisplayName),
            Err(error) => {
                tracing::debug!(%error, "display name producer failed");
                (None, NameOrigin::Unknown)
            }
        },
        _ => match &component.name {
            Some(name) if !name.is_empty() => (Some(name.clone()), NameOrigin::TypeName),
            _ => (None, NameOrigin::Unknown),
        },
    };
    match candidate {
        Some(name) if !name.is_empty() => (Some(name), origin),
        _ => (None, NameOrigin::Unknown),
    }
}

static COMPONENTS: Lazy<Mutex<ComponentRegistry>> =
    Lazy::new(|| Mutex::new(ComponentRegistry::new()));

/// Register a component type with the process-wide registry.
pub fn register_component(component: ComponentType) -> ComponentId {
    let mut guard = COMPONENTS.lock().expect("component registry mutex poisoned");
    guard.register(component)
}

/// Release a handle from the process-wide registry.
pub fn release_component(id: ComponentId) -> bool {
    let mut guard = COMPONENTS.lock().expect("component registry mutex poisoned");
    guard.release(id)
}

/// Resolve a display name through the process-wide registry.
///
/// The registry mutex makes the read-check-write region per handle atomic,
/// so concurrent callers never invoke a producer twice for the same handle.
pub fn display_name(id: ComponentId) -> String {
    let mut guard = COMPONENTS.lock().expect("component registry mutex poisoned");
    guard.display_name(id).to_string()
}

/// Number of live registrations in the process-wide registry.
#[must_use]
pub fn component_count() -> usize {
    let guard = COMPONENTS.lock().expect("component registry mutex poisoned");
    guard.len()
}
