//! One export region laid out as on the exported sheet.

use aspectcards_core::layout::ExportRegion;
use aspectcards_core::SvgDocument;
use dioxus::prelude::*;

#[component]
pub fn RegionView(
    region: ExportRegion,
    /// Heading shown above the sheet
    title: String,
) -> Element {
    let SvgDocument { width, height, markup } = SvgDocument::region(&region);
    let file_name = region.file_name.clone();
    let count = region.children.len();

    rsx! {
        section { class: "region",
            header { class: "region__header",
                h2 { class: "section-header", "{title}" }
                span { class: "region__meta", "{file_name} · {count} cards · {width}x{height}" }
            }
            div {
                class: "region__sheet",
                id: "region-{region.id}",
                dangerous_inner_html: "{markup}",
            }
        }
    }
}
