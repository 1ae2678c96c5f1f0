//! ZoomKeeper — retain browser zoom level across local-file navigation.
//!
//! Entry point: runs a console demo that walks the full synchronization
//! scenario against simulated host and client pages. The real DOM glue
//! (mounting the iframe, wiring browser events to the controllers) lives in
//! the embedding layer, not here.

use std::time::{Duration, Instant};

use url::Url;
use zoomkeeper::app::App;
use zoomkeeper::controllers::client_controller::{ClientControllerTrait, ClientPageTrait};
use zoomkeeper::controllers::host_controller::{HostConfig, HostPageTrait};
use zoomkeeper::services::scroll_debouncer::DEFAULT_DEBOUNCE;
use zoomkeeper::services::title_watcher::TitleWatcher;
use zoomkeeper::types::link::LinkDisposition;

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               ZoomKeeper v{} — Demo Mode                  ║", env!("CARGO_PKG_VERSION"));
    println!("║   Keep browser zoom while navigating embedded local files  ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_fresh_session();
    demo_reload_restore();
    demo_link_scoping();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ Full synchronization scenario demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

// ─── Simulated browser surfaces ───

struct SimHostPage {
    location: Url,
    title: String,
    iframe_src: Option<String>,
    reload: bool,
}

impl SimHostPage {
    fn new(location: &str, reload: bool) -> Self {
        Self {
            location: Url::parse(location).expect("demo host location"),
            title: "ZoomKeeper".to_string(),
            iframe_src: None,
            reload,
        }
    }
}

impl HostPageTrait for SimHostPage {
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
        self.location.set_query(if query.is_empty() { None } else { Some(query) });
        println!("  [bar]    {}", self.location);
    }
    fn mount_iframe(&mut self, src: &str) {
        println!("  [iframe] mounted with src {}", src);
        self.iframe_src = Some(src.to_string());
    }
    fn navigate(&mut self, url: &str) {
        println!("  [top]    full navigation to {}", url);
    }
    fn was_reload(&self) -> bool {
        self.reload
    }
}

struct SimClientPage {
    location: Url,
    title: String,
    scroll_y: u32,
}

impl SimClientPage {
    fn new(location: &str, title: &str) -> Self {
        Self {
            location: Url::parse(location).expect("demo client location"),
            title: title.to_string(),
            scroll_y: 0,
        }
    }
}

impl ClientPageTrait for SimClientPage {
    fn location(&self) -> Url {
        self.location.clone()
    }
    fn title(&self) -> String {
        self.title.clone()
    }
    fn scroll_to(&mut self, offset_y: u32) {
        self.scroll_y = offset_y;
        println!("  [client] scrolled to {}", offset_y);
    }
    fn open_in_new_window(&mut self, url: &Url) {
        println!("  [client] opened {} in a new window", url);
    }
}

// ─── Scenarios ───

/// First visit: bootstrap with no parameters, navigate into a subpage,
/// watch a title change, scroll.
fn demo_fresh_session() {
    section("Fresh session: navigation, title, scroll");

    let config = HostConfig {
        default_src: "index.html".to_string(),
    };
    let mut host_page = SimHostPage::new("file:///docs/zoomkeeper.html", false);
    let mut app = App::new(&mut host_page, &config);

    // index.html loads in the iframe.
    let mut client_page = SimClientPage::new("file:///docs/index.html", "Manual — Home");
    app.load_client(client_page.location(), DEFAULT_DEBOUNCE);
    let client = app.client.as_mut().expect("client just loaded");
    client.on_document_ready(&mut client_page);
    app.pump(&mut host_page, &mut client_page).expect("pump");

    // User clicks an in-scope link; the iframe navigates and the new
    // document reports itself.
    let disposition = app
        .client
        .as_mut()
        .expect("client")
        .on_link_activation(&mut client_page, "sub/doc.html")
        .expect("resolvable link");
    assert_eq!(disposition, LinkDisposition::Default);
    let mut client_page = SimClientPage::new("file:///docs/sub/doc.html", "Manual — Chapter 1");
    app.load_client(client_page.location(), DEFAULT_DEBOUNCE);
    app.client
        .as_mut()
        .expect("client")
        .on_document_ready(&mut client_page);
    app.pump(&mut host_page, &mut client_page).expect("pump");

    // The embedded document retitles itself; a polling watcher forwards it.
    let mut watcher = TitleWatcher::new();
    watcher.check(&client_page.title());
    client_page.title = "Manual — Chapter 1 (rev 2)".to_string();
    if watcher.check(&client_page.title()).is_some() {
        app.client
            .as_mut()
            .expect("client")
            .on_title_mutation(&mut client_page);
    }
    app.pump(&mut host_page, &mut client_page).expect("pump");
    println!("  [host]   title is now {:?}", host_page.title);

    // A burst of scroll events collapses into one report.
    let t0 = Instant::now();
    let client = app.client.as_mut().expect("client");
    for (ms, y) in [(0u64, 120u32), (50, 300), (100, 450)] {
        client.on_scroll(y, t0 + Duration::from_millis(ms));
    }
    client.poll_scroll(t0 + Duration::from_millis(100) + DEFAULT_DEBOUNCE);
    app.pump(&mut host_page, &mut client_page).expect("pump");
    println!();
}

/// Reload with `?page=...&scroll=...`: the saved offset is replayed once
/// into the fresh client, then stripped from the bar.
fn demo_reload_restore() {
    section("Reload: scroll restore round trip");

    let config = HostConfig {
        default_src: "index.html".to_string(),
    };
    let mut host_page = SimHostPage::new(
        "file:///docs/zoomkeeper.html?page=sub%2Fdoc.html&scroll=450",
        true,
    );
    let mut app = App::new(&mut host_page, &config);

    let mut client_page = SimClientPage::new("file:///docs/sub/doc.html", "Manual — Chapter 1");
    app.load_client(client_page.location(), DEFAULT_DEBOUNCE);
    app.client
        .as_mut()
        .expect("client")
        .on_document_ready(&mut client_page);
    app.pump(&mut host_page, &mut client_page).expect("pump");
    assert_eq!(client_page.scroll_y, 450);
    println!();
}

/// External and non-HTML links leave the iframe's scope.
fn demo_link_scoping() {
    section("Link scoping: external and non-HTML targets");

    let config = HostConfig {
        default_src: "index.html".to_string(),
    };
    let mut host_page = SimHostPage::new("file:///docs/zoomkeeper.html", false);
    let mut app = App::new(&mut host_page, &config);

    let mut client_page = SimClientPage::new("file:///docs/index.html", "Manual — Home");
    app.load_client(client_page.location(), DEFAULT_DEBOUNCE);
    let client = app.client.as_mut().expect("client");
    client.on_document_ready(&mut client_page);

    let external = client
        .on_link_activation(&mut client_page, "https://example.com/elsewhere")
        .expect("resolvable link");
    assert_eq!(external, LinkDisposition::Suppressed);

    let non_html = client
        .on_link_activation(&mut client_page, "manual.pdf")
        .expect("resolvable link");
    assert_eq!(non_html, LinkDisposition::Default);
    app.pump(&mut host_page, &mut client_page).expect("pump");
    println!();
}
