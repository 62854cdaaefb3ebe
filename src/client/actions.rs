use hcloud_schema::{Action, ActionGetResponse, ActionStatus};
use log::{debug, info};

use super::{Client, HttpBackend};
use crate::error::{HcloudError, HcloudResult};

impl<B: HttpBackend> Client<B> {
    pub async fn get_action(&self, id: i64) -> HcloudResult<Action> {
        let resp: ActionGetResponse = self.get(&format!("/actions/{}", id), &[]).await?;
        Ok(resp.action)
    }

    /// Polls the action every `poll_interval` until it leaves the `running`
    /// state. An action that ended in `error` is returned as
    /// [`HcloudError::ActionFailed`].
    pub async fn wait_for_action(&self, action: &Action) -> HcloudResult<Action> {
        let mut current = action.clone();
        loop {
            match current.status {
                ActionStatus::Success => {
                    info!("Action {} ({}) succeeded", current.id, current.command);
                    return Ok(current);
                }
                ActionStatus::Error => {
                    let (code, message) = match current.error {
                        Some(err) => (err.code, err.message),
                        None => ("unknown".to_string(), "no error details".to_string()),
                    };
                    return Err(HcloudError::ActionFailed {
                        id: current.id,
                        command: current.command,
                        code,
                        message,
                    });
                }
                ActionStatus::Running => {
                    debug!(
                        "Action {} ({}) is at {}%",
                        current.id, current.command, current.progress
                    );
                    tokio::time::sleep(self.poll_interval).await;
                    current = self.get_action(current.id).await?;
                }
            }
        }
    }
}
