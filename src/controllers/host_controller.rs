//! Host controller: runs in the top-level page.
//!
//! Owns the iframe's source and the visible address bar. In-scope client
//! navigation is folded into the `page`/`scroll` query parameters through
//! non-navigating history replacement, so the bar tracks the embedded
//! document without ever causing a top-level reload. After a real reload it
//! replays the saved scroll offset into the freshly loaded client.

use serde_json::Value;
use url::Url;

use crate::bridge::Outbox;
use crate::services::address_bar::AddressBarState;
use crate::services::path_translator::relative_path;
use crate::types::errors::NavError;
use crate::types::message::{NavigationReport, RestoreCommand, ScrollReport};

/// Bootstrap configuration, read once from the hosting markup.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Embedded document to load when no `page` parameter is present.
    pub default_src: String,
}

/// Lifecycle of the host controller. Bootstrapping happens inside
/// [`HostController::bootstrap`]; the constructed controller is already in
/// one of these two terminal phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPhase {
    /// Iframe mounted; processing messages for the life of the page.
    Active,
    /// Not a local-file context: redirected to the default source instead
    /// of constructing an iframe. All messages are ignored.
    Redirected,
}

/// Browser surface the host controller needs from the top-level document.
pub trait HostPageTrait {
    /// Current location of the host document, query string included.
    fn location(&self) -> Url;
    /// Title of the host document before any mirroring.
    fn original_title(&self) -> String;
    /// Sets the visible document title.
    fn set_title(&mut self, title: &str);
    /// Rewrites the address bar's query string via history replacement.
    /// Never pushes an entry, never triggers a load.
    fn replace_query(&mut self, query: &str);
    /// Collaborator contract: mount the iframe with the given source and
    /// lay it out to fill the viewport.
    fn mount_iframe(&mut self, src: &str);
    /// Real top-level navigation (full reload is intentional here).
    fn navigate(&mut self, url: &str);
    /// Whether the browser's navigation-type signal says this page load
    /// was a reload.
    fn was_reload(&self) -> bool;
}

/// Trait defining the host controller's message-handling interface.
pub trait HostControllerTrait {
    /// Wires the outbox toward the client once the iframe exists. Messages
    /// that need the client before this call are dropped, not queued.
    fn attach_client(&mut self, outbox: Outbox);
    fn on_message(&mut self, page: &mut dyn HostPageTrait, msg: &Value) -> Result<(), NavError>;
}

/// Host-side half of the synchronization protocol.
pub struct HostController {
    base: Url,
    original_title: String,
    phase: HostPhase,
    /// `page` parameter exactly as decoded at bootstrap; a matching
    /// navigation report while a scroll value is pending means the client
    /// just came back from a reload.
    bootstrap_page: Option<String>,
    pending_scroll: Option<u32>,
    /// Mirror of the query parameters currently in the address bar.
    state: AddressBarState,
    client: Option<Outbox>,
}

impl HostController {
    /// Reads the `page` and `scroll` parameters, mounts the iframe, and
    /// enters [`HostPhase::Active`].
    ///
    /// The whole zoom-retention mechanism is a workaround for pages opened
    /// without a network origin; anywhere else browser zoom survives on its
    /// own, so a non-`file:` context short-circuits into a plain top-level
    /// redirect to the default source.
    pub fn bootstrap(page: &mut dyn HostPageTrait, config: &HostConfig) -> Self {
        let base = page.location();
        let original_title = page.original_title();

        if base.scheme() != "file" {
            page.navigate(&config.default_src);
            return Self {
                base,
                original_title,
                phase: HostPhase::Redirected,
                bootstrap_page: None,
                pending_scroll: None,
                state: AddressBarState::default(),
                client: None,
            };
        }

        let state = AddressBarState::parse(base.query());
        let src = state
            .page
            .clone()
            .unwrap_or_else(|| config.default_src.clone());
        page.mount_iframe(&src);

        // A saved scroll offset is only replayed into a reloaded page;
        // on a fresh navigation any leftover parameter is stale.
        let pending_scroll = if page.was_reload() { state.scroll } else { None };

        Self {
            base,
            original_title,
            phase: HostPhase::Active,
            bootstrap_page: state.page.clone(),
            pending_scroll,
            state,
            client: None,
        }
    }

    pub fn phase(&self) -> HostPhase {
        self.phase
    }

    /// Current mirror of the address-bar query parameters.
    pub fn address_bar(&self) -> &AddressBarState {
        &self.state
    }

    fn post_to_client(&self, msg: Value) {
        if let Some(client) = &self.client {
            client.post(msg);
        }
    }

    fn handle_navigation(
        &mut self,
        page: &mut dyn HostPageTrait,
        report: NavigationReport,
    ) -> Result<(), NavError> {
        let target = self.base.join(&report.page)?;
        let rel = relative_path(&self.base, &target);

        // The client reporting the exact page we bootstrapped with, while a
        // saved scroll value is pending, means it just finished loading
        // after a reload: replay the offset instead of touching `page`.
        if self.bootstrap_page.as_deref() == Some(rel.as_str()) {
            if let Some(saved) = self.pending_scroll.take() {
                self.post_to_client(
                    RestoreCommand {
                        restore_scroll_y: saved,
                    }
                    .to_value(),
                );
                self.state.scroll = None;
                page.replace_query(&self.state.encode());
                return Ok(());
            }
        }

        page.set_title(report.title.as_deref().unwrap_or(&self.original_title));
        self.state.page = Some(rel);
        self.state.scroll = None;
        page.replace_query(&self.state.encode());
        Ok(())
    }

    fn handle_scroll(&mut self, page: &mut dyn HostPageTrait, report: ScrollReport) {
        self.state.scroll = Some(report.scroll_y);
        page.replace_query(&self.state.encode());
    }
}

impl HostControllerTrait for HostController {
    fn attach_client(&mut self, outbox: Outbox) {
        self.client = Some(outbox);
    }

    /// Duck-typed dispatch: fields are read optionally, an unrecognized
    /// shape falls through without effect.
    fn on_message(&mut self, page: &mut dyn HostPageTrait, msg: &Value) -> Result<(), NavError> {
        if self.phase != HostPhase::Active {
            return Ok(());
        }
        if let Some(report) = NavigationReport::from_value(msg) {
            return self.handle_navigation(page, report);
        }
        if let Some(report) = ScrollReport::from_value(msg) {
            self.handle_scroll(page, report);
        }
        Ok(())
    }
}
