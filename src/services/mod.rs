// ZoomKeeper services
// Pure helpers used by the controllers: path translation, address-bar
// query codec, scroll debouncing, title change observation.

pub mod address_bar;
pub mod path_translator;
pub mod scroll_debouncer;
pub mod title_watcher;
