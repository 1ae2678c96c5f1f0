//! App core for ZoomKeeper.
//!
//! Wires the two controllers through a mailbox pair for an in-process
//! session: the demo binary and the end-to-end tests run both execution
//! contexts in one process and pump messages between them. In a real
//! deployment each controller lives alone in its own context and the
//! bridge maps onto the browser's own message channel.

use std::time::Duration;

use url::Url;

use crate::bridge::{mailbox, Inbox, Outbox};
use crate::controllers::client_controller::{
    ClientController, ClientControllerTrait, ClientPageTrait,
};
use crate::controllers::host_controller::{
    HostConfig, HostController, HostControllerTrait, HostPageTrait,
};
use crate::types::errors::NavError;

/// Central struct holding both controllers and the channel between them.
///
/// The client controller is created per iframe load (a navigation destroys
/// the old document and its controller with it); the host controller lives
/// for the whole session.
pub struct App {
    pub host: HostController,
    pub client: Option<ClientController>,
    to_host: Outbox,
    host_inbox: Inbox,
    client_inbox: Option<Inbox>,
}

impl App {
    /// Bootstraps the host controller against `page` and prepares the
    /// client-to-host mailbox.
    pub fn new(page: &mut dyn HostPageTrait, config: &HostConfig) -> Self {
        let (to_host, host_inbox) = mailbox();
        let host = HostController::bootstrap(page, config);
        Self {
            host,
            client: None,
            to_host,
            host_inbox,
            client_inbox: None,
        }
    }

    /// A fresh document finished appearing in the iframe: builds its client
    /// controller and rewires the host-to-client mailbox. Any previous
    /// client (and messages still queued for it) is discarded.
    pub fn load_client(&mut self, base: Url, debounce_delay: Duration) {
        let (to_client, client_inbox) = mailbox();
        self.host.attach_client(to_client);
        self.client_inbox = Some(client_inbox);
        self.client = Some(ClientController::new(
            self.to_host.clone(),
            base,
            debounce_delay,
        ));
    }

    /// Drains both mailboxes until no message is left in flight. Handlers
    /// are latest-value-wins, so drain order between the two directions
    /// does not matter.
    pub fn pump(
        &mut self,
        host_page: &mut dyn HostPageTrait,
        client_page: &mut dyn ClientPageTrait,
    ) -> Result<(), NavError> {
        loop {
            let mut progressed = false;
            while let Some(msg) = self.host_inbox.try_recv() {
                self.host.on_message(host_page, &msg)?;
                progressed = true;
            }
            if let (Some(client), Some(inbox)) = (&mut self.client, &mut self.client_inbox) {
                while let Some(msg) = inbox.try_recv() {
                    client.on_message(client_page, &msg);
                    progressed = true;
                }
            }
            if !progressed {
                return Ok(());
            }
        }
    }
}
