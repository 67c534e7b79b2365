// File: crates/stepline-core/src/error.rs
// Summary: Error type shared by range resolution, tick planning and the chart controller.

use thiserror::Error;

use crate::types::AxisRole;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A binding names a drawing target the host does not provide.
    #[error("drawing target '{target}' is not available")]
    MissingTarget { target: String },

    /// The axis has no explicit bounds and no qualifying data.
    #[error("axis {axis} has no resolvable domain")]
    UnresolvableDomain { axis: AxisRole },

    #[error("invalid tick policy: {reason}")]
    InvalidTickPolicy { reason: String },

    #[error("axis group must be 1 or 2, got {0}")]
    InvalidGroup(u8),

    /// Failure reported by the host while presenting a scene.
    #[error(transparent)]
    Host(#[from] anyhow::Error),
}

impl ChartError {
    pub(crate) fn tick_policy(reason: impl Into<String>) -> Self {
        Self::InvalidTickPolicy { reason: reason.into() }
    }
}
