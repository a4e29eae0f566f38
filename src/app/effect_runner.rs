//! Executes side effects returned by the reducer.
//!
//! The submission handler runs on its own task and always reports back with
//! exactly one `SubmissionSucceeded` or `SubmissionFailed`, even if it panics,
//! so the form can never stay stuck in `Submitting`.

use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::ports::{DataSourceStore, Renderer, SubmissionHandler, SubmitError};
use crate::app::state::AppState;
use crate::domain::{DataSourceId, RedshiftDataSourceInput};

pub struct EffectRunner {
    submission_handler: Arc<dyn SubmissionHandler>,
    data_source_store: Arc<dyn DataSourceStore>,
    action_tx: mpsc::Sender<Action>,
}

impl EffectRunner {
    pub fn new(
        submission_handler: Arc<dyn SubmissionHandler>,
        data_source_store: Arc<dyn DataSourceStore>,
        action_tx: mpsc::Sender<Action>,
    ) -> Self {
        Self {
            submission_handler,
            data_source_store,
            action_tx,
        }
    }

    pub async fn run(
        &self,
        effects: Vec<Effect>,
        renderer: &mut impl Renderer,
        state: &mut AppState,
    ) -> Result<()> {
        for effect in effects {
            self.run_single(effect, renderer, state).await?;
        }
        Ok(())
    }

    async fn run_single(
        &self,
        effect: Effect,
        renderer: &mut impl Renderer,
        state: &mut AppState,
    ) -> Result<()> {
        match effect {
            Effect::Render => renderer.draw(state),
            Effect::SubmitDataSource { payload } => {
                self.spawn_submission(*payload);
                Ok(())
            }
            Effect::LoadExisting { id } => {
                self.load_existing(&id).await;
                Ok(())
            }
        }
    }

    fn spawn_submission(&self, payload: RedshiftDataSourceInput) -> JoinHandle<()> {
        let handler = Arc::clone(&self.submission_handler);
        let action_tx = self.action_tx.clone();

        tokio::spawn(async move {
            let submission = tokio::spawn(async move { handler.submit(payload).await });
            let action = match submission.await {
                Ok(Ok(())) => Action::SubmissionSucceeded,
                Ok(Err(err)) => Action::SubmissionFailed(err.to_string()),
                Err(join_err) => {
                    tracing::error!(error = %join_err, "submission handler task failed");
                    Action::SubmissionFailed(SubmitError::Aborted(join_err.to_string()).to_string())
                }
            };
            let _ = action_tx.send(action).await;
        })
    }

    async fn load_existing(&self, id: &DataSourceId) {
        let action = match self.data_source_store.find_by_id(id) {
            Ok(found) => Action::ExistingLoaded(found.map(Box::new)),
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "failed to load existing data source");
                Action::ExistingLoadFailed(err.to_string())
            }
        };
        let _ = self.action_tx.send(action).await;
    }
}
