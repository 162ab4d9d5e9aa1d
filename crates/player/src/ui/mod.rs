use dioxus::prelude::*;

pub mod presentation;

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the composition root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl ShellKind {
    /// Parse `desktop` / `mobile`, case-insensitively
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "desktop" => Some(Self::Desktop),
            "mobile" => Some(Self::Mobile),
            _ => None,
        }
    }

    /// Narrow viewports get the mobile layout
    pub fn for_width(width: f64) -> Self {
        if width < 768.0 {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let shell = use_context::<ShellKind>();

    // Must be created inside an active Dioxus runtime.
    use_context_provider(presentation::state::CatalogState::new);
    use_context_provider(presentation::state::ReportState::new);

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/main.css"),
        }

        {
            match shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell {
                        presentation::views::CatalogPage {}
                    }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell {
                        presentation::views::CatalogPage {}
                    }
                },
            }
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div { class: "shell shell-desktop",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        div { class: "shell shell-mobile",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_parses_known_names() {
        assert_eq!(ShellKind::parse(" Mobile "), Some(ShellKind::Mobile));
        assert_eq!(ShellKind::parse("desktop"), Some(ShellKind::Desktop));
        assert_eq!(ShellKind::parse("tablet"), None);
    }

    #[test]
    fn shell_follows_viewport_width() {
        assert_eq!(ShellKind::for_width(375.0), ShellKind::Mobile);
        assert_eq!(ShellKind::for_width(1280.0), ShellKind::Desktop);
    }
}
