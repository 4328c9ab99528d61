//! Message processing - drives the TEA update loop

use tokio::sync::mpsc;

use skycast_api::WeatherProvider;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use crate::telemetry::SharedTelemetry;

/// Process a message through the TEA update function, following the chain
/// of follow-up messages and dispatching any side effects.
pub fn process_message<P>(
    state: &mut AppState,
    message: Message,
    provider: &P,
    telemetry: &SharedTelemetry,
    msg_tx: &mpsc::Sender<Message>,
) where
    P: WeatherProvider + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, provider.clone(), telemetry.clone(), msg_tx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
