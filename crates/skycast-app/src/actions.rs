//! Side-effect execution for update actions
//!
//! The update function never performs I/O; it returns actions, and this
//! module runs them. Fetches are detached tokio tasks whose completion
//! comes back through the message channel tagged with the request id.

use tokio::sync::mpsc;
use tracing::{debug, error};

use skycast_api::WeatherProvider;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::telemetry::SharedTelemetry;

/// Execute an action produced by `update`.
pub fn handle_action<P>(
    action: UpdateAction,
    provider: P,
    telemetry: SharedTelemetry,
    msg_tx: mpsc::Sender<Message>,
) where
    P: WeatherProvider + Clone + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchWeather { city, request_id } => {
            telemetry.city_selected(&city);

            tokio::spawn(async move {
                debug!("Fetch task started for '{city}' (request {request_id})");
                let message = match provider.fetch_current(&city).await {
                    Ok(snapshot) => Message::FetchSucceeded {
                        request_id,
                        snapshot: Box::new(snapshot),
                    },
                    Err(e) => Message::FetchFailed {
                        request_id,
                        city,
                        message: e.to_string(),
                    },
                };

                if msg_tx.send(message).await.is_err() {
                    error!("Message channel closed before fetch completion could be delivered");
                }
            });
        }
    }
}
