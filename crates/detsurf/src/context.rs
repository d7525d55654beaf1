//! Geometry context and context-dependent placement.

use std::any::Any;
use std::sync::Arc;

use crate::transform::Transform3;

/// Opaque conditions payload used to evaluate placements (e.g. alignment).
///
/// The default context is empty and yields nominal placements.
#[derive(Clone, Default)]
pub struct GeometryContext {
    payload: Option<Arc<dyn Any + Send + Sync>>,
}

impl GeometryContext {
    /// Context carrying `payload`.
    pub fn new<T: Any + Send + Sync>(payload: T) -> Self {
        Self {
            payload: Some(Arc::new(payload)),
        }
    }

    /// Payload downcast to `T`, if present and of that type.
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.as_deref()?.downcast_ref::<T>()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_none()
    }
}

impl std::fmt::Debug for GeometryContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeometryContext")
            .field("has_payload", &self.payload.is_some())
            .finish()
    }
}

/// Physical element a surface may be attached to.
///
/// When present, the element owns the placement and resolves it against the
/// context; the surface's nominal transform is then ignored.
pub trait DetectorElement: Send + Sync {
    fn transform(&self, gctx: &GeometryContext) -> Transform3;
}
