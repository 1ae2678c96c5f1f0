//! Client controller: runs inside the embedded document.
//!
//! Never touches the host's address bar; it reports its own navigation,
//! title, and scroll state through the mailbox and enforces navigation
//! scoping on link clicks. DOM access goes through [`ClientPageTrait`] so
//! the controller stays testable outside a browser.
//!
//! Navigation through the history API is not observed; only load and
//! hash-change style navigation reports (known gap inherited from the
//! event set this listens to).

use std::time::{Duration, Instant};

use serde_json::Value;
use url::Url;

use crate::bridge::Outbox;
use crate::services::scroll_debouncer::ScrollDebouncer;
use crate::types::errors::NavError;
use crate::types::link::{LinkClass, LinkDisposition};
use crate::types::message::{NavigationReport, RestoreCommand, ScrollReport};

/// DOM surface the client controller needs from the embedded document.
pub trait ClientPageTrait {
    /// Current absolute location of the document.
    fn location(&self) -> Url;
    /// Current document title.
    fn title(&self) -> String;
    /// Sets the vertical scroll offset.
    fn scroll_to(&mut self, offset_y: u32);
    /// Opens `url` in a new top-level browsing context, bypassing the iframe.
    fn open_in_new_window(&mut self, url: &Url);
}

/// Trait defining the client controller's event-handler interface.
pub trait ClientControllerTrait {
    fn on_document_ready(&mut self, page: &mut dyn ClientPageTrait);
    fn on_hash_change(&mut self, page: &mut dyn ClientPageTrait);
    fn on_title_mutation(&mut self, page: &mut dyn ClientPageTrait);
    fn on_link_activation(
        &mut self,
        page: &mut dyn ClientPageTrait,
        href: &str,
    ) -> Result<LinkDisposition, NavError>;
    fn on_scroll(&mut self, offset_y: u32, now: Instant);
    fn poll_scroll(&mut self, now: Instant);
    fn on_message(&mut self, page: &mut dyn ClientPageTrait, msg: &Value);
}

/// Client-side half of the synchronization protocol.
///
/// One instance per iframe load. The base URL is captured at construction,
/// before any navigation can move the document.
pub struct ClientController {
    outbox: Outbox,
    base: Url,
    debouncer: ScrollDebouncer,
    load_complete: bool,
    restored: bool,
    pending_restore: Option<u32>,
}

impl ClientController {
    pub fn new(outbox: Outbox, base: Url, debounce_delay: Duration) -> Self {
        Self {
            outbox,
            base,
            debouncer: ScrollDebouncer::new(debounce_delay),
            load_complete: false,
            restored: false,
            pending_restore: None,
        }
    }

    /// When the pending scroll offset becomes reportable, if one exists.
    /// The embedding layer sleeps until this instant and calls
    /// [`ClientControllerTrait::poll_scroll`].
    pub fn scroll_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    fn report_navigation(&self, page: &dyn ClientPageTrait) {
        let report = NavigationReport {
            page: page.location().to_string(),
            title: Some(page.title()),
        };
        self.outbox.post(report.to_value());
    }

    /// Applies a restore at most once per client lifetime, deferred until
    /// the document's own load event has fired so layout cannot overwrite
    /// the offset afterwards.
    fn apply_restore(&mut self, page: &mut dyn ClientPageTrait, offset_y: u32) {
        if self.restored {
            return;
        }
        if !self.load_complete {
            self.pending_restore = Some(offset_y);
            return;
        }
        page.scroll_to(offset_y);
        self.restored = true;
    }
}

impl ClientControllerTrait for ClientController {
    fn on_document_ready(&mut self, page: &mut dyn ClientPageTrait) {
        self.load_complete = true;
        self.report_navigation(page);
        if let Some(offset_y) = self.pending_restore.take() {
            self.apply_restore(page, offset_y);
        }
    }

    fn on_hash_change(&mut self, page: &mut dyn ClientPageTrait) {
        self.report_navigation(page);
    }

    /// Title changed without a navigation; the report carries the unchanged
    /// location and the new title so the host can mirror it.
    fn on_title_mutation(&mut self, page: &mut dyn ClientPageTrait) {
        self.report_navigation(page);
    }

    fn on_link_activation(
        &mut self,
        page: &mut dyn ClientPageTrait,
        href: &str,
    ) -> Result<LinkDisposition, NavError> {
        let target = self.base.join(href)?;
        match LinkClass::of(&self.base, &target) {
            LinkClass::External => {
                // Must leave the iframe entirely; opened directly from the
                // client, no host round trip.
                page.open_in_new_window(&target);
                Ok(LinkDisposition::Suppressed)
            }
            LinkClass::NonHtml => {
                // The browser handles the target itself (download, viewer);
                // the host is only notified.
                let report = NavigationReport {
                    page: target.to_string(),
                    title: None,
                };
                self.outbox.post(report.to_value());
                Ok(LinkDisposition::Default)
            }
            LinkClass::InScopeHtml => Ok(LinkDisposition::Default),
        }
    }

    fn on_scroll(&mut self, offset_y: u32, now: Instant) {
        self.debouncer.record(offset_y, now);
    }

    fn poll_scroll(&mut self, now: Instant) {
        if let Some(offset_y) = self.debouncer.fire(now) {
            self.outbox.post(ScrollReport { scroll_y: offset_y }.to_value());
        }
    }

    fn on_message(&mut self, page: &mut dyn ClientPageTrait, msg: &Value) {
        if let Some(cmd) = RestoreCommand::from_value(msg) {
            self.apply_restore(page, cmd.restore_scroll_y);
        }
    }
}
