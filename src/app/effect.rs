//! Side effects returned by the reducer, executed by EffectRunner.

use crate::domain::{DataSourceId, RedshiftDataSourceInput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Render,

    /// Invokes the submission handler exactly once with the payload.
    SubmitDataSource {
        payload: Box<RedshiftDataSourceInput>,
    },

    LoadExisting {
        id: DataSourceId,
    },
}

impl Effect {
    pub fn is_render(&self) -> bool {
        matches!(self, Effect::Render)
    }
}
