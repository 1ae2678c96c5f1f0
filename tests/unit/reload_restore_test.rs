//! End-to-end session tests through `App`: both controllers wired over the
//! mailbox pair, exercising the full reload round trip and a fresh session.

use std::time::{Duration, Instant};

use url::Url;
use zoomkeeper::app::App;
use zoomkeeper::controllers::client_controller::{ClientControllerTrait, ClientPageTrait};
use zoomkeeper::controllers::host_controller::{HostConfig, HostPageTrait};

const DELAY: Duration = Duration::from_millis(200);

struct HostPage {
    location: Url,
    title: String,
    iframe_src: Option<String>,
    reload: bool,
}

impl HostPage {
    fn new(location: &str, reload: bool) -> Self {
        Self {
            location: Url::parse(location).unwrap(),
            title: "ZoomKeeper".to_string(),
            iframe_src: None,
            reload,
        }
    }
}

impl HostPageTrait for HostPage {
    fn location(&self) -> Url {
        self.location.clone()
    }
    fn original_title(&self) -> String {
        "ZoomKeeper".to_string()
    }
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
    fn replace_query(&mut self, query: &str) {
        self.location
            .set_query(if query.is_empty() { None } else { Some(query) });
    }
    fn mount_iframe(&mut self, src: &str) {
        self.iframe_src = Some(src.to_string());
    }
    fn navigate(&mut self, _url: &str) {}
    fn was_reload(&self) -> bool {
        self.reload
    }
}

struct ClientPage {
    location: Url,
    title: String,
    scroll_y: u32,
}

impl ClientPage {
    fn new(location: &str, title: &str) -> Self {
        Self {
            location: Url::parse(location).unwrap(),
            title: title.to_string(),
            scroll_y: 0,
        }
    }
}

impl ClientPageTrait for ClientPage {
    fn location(&self) -> Url {
        self.location.clone()
    }
    fn title(&self) -> String {
        self.title.clone()
    }
    fn scroll_to(&mut self, offset_y: u32) {
        self.scroll_y = offset_y;
    }
    fn open_in_new_window(&mut self, _url: &Url) {}
}

fn config() -> HostConfig {
    HostConfig {
        default_src: "index.html".to_string(),
    }
}

#[test]
fn test_fresh_session_mirrors_navigation_and_scroll() {
    let mut host_page = HostPage::new("file:///docs/zoomkeeper.html", false);
    let mut app = App::new(&mut host_page, &config());
    assert_eq!(host_page.iframe_src.as_deref(), Some("index.html"));

    let mut client_page = ClientPage::new("file:///docs/index.html", "Manual — Home");
    app.load_client(client_page.location(), DELAY);
    app.client
        .as_mut()
        .unwrap()
        .on_document_ready(&mut client_page);
    app.pump(&mut host_page, &mut client_page).unwrap();

    assert_eq!(host_page.location.query(), Some("page=index.html"));
    assert_eq!(host_page.title, "Manual — Home");

    // Scroll burst collapses into one report that lands in the bar.
    let t0 = Instant::now();
    let client = app.client.as_mut().unwrap();
    client.on_scroll(300, t0);
    client.on_scroll(450, t0 + Duration::from_millis(50));
    client.poll_scroll(t0 + Duration::from_millis(50) + DELAY);
    app.pump(&mut host_page, &mut client_page).unwrap();

    assert_eq!(
        host_page.location.query(),
        Some("page=index.html&scroll=450")
    );
}

#[test]
fn test_reload_round_trip_restores_scroll_and_strips_param() {
    // Host reloaded with a saved page and scroll offset in the bar.
    let mut host_page = HostPage::new(
        "file:///docs/zoomkeeper.html?page=sub%2Fdoc.html&scroll=450",
        true,
    );
    let mut app = App::new(&mut host_page, &config());
    assert_eq!(host_page.iframe_src.as_deref(), Some("sub/doc.html"));

    // The iframe loads the saved page and its controller reports in.
    let mut client_page = ClientPage::new("file:///docs/sub/doc.html", "Chapter 1");
    app.load_client(client_page.location(), DELAY);
    app.client
        .as_mut()
        .unwrap()
        .on_document_ready(&mut client_page);
    app.pump(&mut host_page, &mut client_page).unwrap();

    // The saved offset was replayed exactly once and the bar is clean.
    assert_eq!(client_page.scroll_y, 450);
    assert_eq!(host_page.location.query(), Some("page=sub%2Fdoc.html"));
    assert_eq!(app.host.address_bar().encode(), "page=sub%2Fdoc.html");
}

#[test]
fn test_hash_navigation_updates_fragment_in_bar() {
    let mut host_page = HostPage::new("file:///docs/zoomkeeper.html", false);
    let mut app = App::new(&mut host_page, &config());

    let mut client_page = ClientPage::new("file:///docs/index.html", "Manual — Home");
    app.load_client(client_page.location(), DELAY);
    app.client
        .as_mut()
        .unwrap()
        .on_document_ready(&mut client_page);
    app.pump(&mut host_page, &mut client_page).unwrap();

    client_page.location = Url::parse("file:///docs/index.html#usage").unwrap();
    app.client.as_mut().unwrap().on_hash_change(&mut client_page);
    app.pump(&mut host_page, &mut client_page).unwrap();

    assert_eq!(
        host_page.location.query(),
        Some("page=index.html%23usage")
    );
}
