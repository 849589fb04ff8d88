use dioxus::prelude::*;

use crate::context::ExportState;
use crate::pages::Workbench;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Card previews with the export controls
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Workbench {},
}

/// Root application component.
///
/// Provides global styles, the export session context, and routing.
#[component]
pub fn App() -> Element {
    let session = crate::get_session();
    let export_state: Signal<ExportState> = use_signal(ExportState::default);

    use_context_provider(|| session);
    use_context_provider(|| export_state);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
