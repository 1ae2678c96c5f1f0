// ZoomKeeper controllers
// One reactive handler set per execution context: the client controller runs
// inside the embedded document, the host controller in the top-level page.
// They communicate only through the bridge mailbox.

pub mod client_controller;
pub mod host_controller;
