use maud::{html, Markup};

pub mod error;

pub use error::error_panel;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// A single headline number; `id` is filled in by the page script.
pub fn stat_tile(label: &str, id: &str) -> Markup {
    html! {
        div class="card" {
            div { (label) }
            div class="stat-value" id=(id) { "–" }
        }
    }
}
