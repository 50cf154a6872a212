use maud::{html, Markup};

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

/// User-facing failure banner, shown once on the page after the action that
/// produced it.
pub fn error_banner(message: &str) -> Markup {
    html! {
        div class="error" { (message) }
    }
}
