use thiserror::Error;

use crate::models::tower::RescaleError;

/// Errors that can occur while running a pipeline step.
///
/// Collaborator failures keep their original error as a boxed source so the
/// caller can report the full chain. The step performs no retries; every
/// failure is surfaced immediately.
#[derive(Debug, Error)]
pub enum StepError {
    /// Reading the previous step's persisted state failed.
    #[error("model archive read failed: {context}")]
    Archive {
        /// What was being read.
        context: String,

        /// Underlying archive error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Writing the step's derived configuration failed.
    #[error("options write failed: {context}")]
    OptionsWrite {
        /// What was being written.
        context: String,

        /// Underlying store error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The tower profile could not be rescaled.
    #[error(transparent)]
    Rescale(#[from] RescaleError),

    /// The external solver failed.
    #[error("solver invocation failed")]
    Solver {
        /// Underlying solver error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StepError {
    /// Creates an archive read failure with context.
    pub(super) fn archive(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Archive {
            context: context.into(),
            source: Box::new(err),
        }
    }

    /// Creates an options write failure with context.
    pub(super) fn options_write(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::OptionsWrite {
            context: context.into(),
            source: Box::new(err),
        }
    }

    /// Creates a solver invocation failure.
    pub(super) fn solver(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Solver {
            source: Box::new(err),
        }
    }
}
