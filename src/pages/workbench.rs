//! Workbench page - card previews and export controls.
//!
//! Every region that the exporter writes is shown here exactly as it is
//! laid out on the exported sheet.

use dioxus::prelude::*;

use crate::components::{ExportControls, RegionView};
use crate::context::use_session;

#[component]
pub fn Workbench() -> Element {
    let Some(session) = use_session() else {
        return rsx! {
            main { class: "workbench",
                p { class: "export-error", "No catalog loaded" }
            }
        };
    };

    let regions = session.controller.regions().clone();

    rsx! {
        main { class: "workbench",
            header { class: "workbench__header",
                h1 { class: "page-title", "Aspect Cards" }
                ExportControls {}
            }

            RegionView { title: "Preview", region: regions.preview.clone() }
            RegionView { title: "Instincts", region: regions.combined.clone() }
            RegionView { title: "Instincts (split)", region: regions.split.clone() }
            if let Some(arts) = regions.arts.clone() {
                RegionView { title: "Nature Arts", region: arts }
            }
        }
    }
}
