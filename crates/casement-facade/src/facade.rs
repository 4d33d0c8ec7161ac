//! The facade owner: dispatcher, URL router and their subscriptions.

use std::sync::Arc;

use casement_common::{DisposableStore, LaunchArgs};
use tracing::{debug, info, warn};

use crate::commands::{CommandMessage, CommandReply};
use crate::dispatcher::{Collaborators, CommandDispatcher};
use crate::router::{UrlRouter, UrlRoutes};

pub struct WindowsFacade {
    dispatcher: CommandDispatcher,
    router: Arc<UrlRouter>,
    subscriptions: DisposableStore,
}

impl WindowsFacade {
    /// Build the facade and subscribe the URL pipelines to `collaborators.urls`.
    pub fn new(collaborators: Collaborators, launch_args: LaunchArgs, routes: UrlRoutes) -> Self {
        let router = Arc::new(UrlRouter::new(
            Arc::clone(&collaborators.windows),
            launch_args.clone(),
            routes,
        ));

        let mut subscriptions = DisposableStore::new();
        router.attach(collaborators.urls.as_ref(), &mut subscriptions);
        debug!(subscriptions = subscriptions.len(), "url pipelines attached");

        Self {
            dispatcher: CommandDispatcher::new(collaborators, launch_args),
            router,
            subscriptions,
        }
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    pub fn router(&self) -> &UrlRouter {
        &self.router
    }

    /// Parse, dispatch and answer one serialized command. Always returns
    /// exactly one reply.
    pub async fn handle_message(&self, raw: &str) -> CommandReply {
        let message = match CommandMessage::from_json(raw) {
            Ok(message) => message,
            Err((id, e)) => {
                warn!(id, error = %e, "command message rejected");
                return CommandReply::error(id, &e);
            }
        };

        let command = message.command.command_name();
        match self.dispatcher.execute(message.command).await {
            Ok(value) => CommandReply::ok(message.id, value),
            Err(e) => {
                warn!(id = message.id, command, error = %e, "command failed");
                CommandReply::error(message.id, &e)
            }
        }
    }

    /// Release the URL subscriptions. Later calls do nothing.
    pub fn dispose(&mut self) {
        if self.subscriptions.is_disposed() {
            return;
        }
        info!(subscriptions = self.subscriptions.len(), "disposing windows facade");
        self.subscriptions.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.subscriptions.is_disposed()
    }

    /// Live subscriptions held by the facade.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }
}
