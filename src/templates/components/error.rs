use maud::{html, Markup};

/// Placeholder the page script writes API errors into.
pub fn error_panel(id: &str) -> Markup {
    html! {
        p class="error" id=(id) role="alert" {}
    }
}
