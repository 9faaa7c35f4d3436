use dioxus::prelude::*;

use crate::utils::format::{copyright_line, current_year};

pub const DEFAULT_MESSAGE: &str = "";

pub struct FooterLink {
    pub key: &'static str,
    pub title: &'static str,
    pub href: &'static str,
    pub blank_target: bool,
}

impl FooterLink {
    pub fn target(&self) -> &'static str {
        if self.blank_target {
            "_blank"
        } else {
            "_self"
        }
    }
}

pub const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink {
        key: "smartbi",
        title: "SmartBI",
        href: "https://pro.ant.design",
        blank_target: true,
    },
    FooterLink {
        key: "github",
        title: "GitHub",
        href: "https://github.com/ant-design/ant-design-pro",
        blank_target: true,
    },
    FooterLink {
        key: "site",
        title: "SmartBI",
        href: "https://ant.design",
        blank_target: true,
    },
];

#[allow(non_snake_case)]
#[component]
pub fn Footer() -> Element {
    let copyright = copyright_line(current_year(), DEFAULT_MESSAGE);

    rsx! {
        footer { class: "py-6 text-center text-xs text-slate-500 space-y-2",
            div { class: "flex items-center justify-center gap-4",
                for link in FOOTER_LINKS {
                    a {
                        key: "{link.key}",
                        class: "hover:text-slate-300",
                        href: "{link.href}",
                        target: link.target(),
                        rel: "noopener noreferrer",
                        "{link.title}"
                    }
                }
            }
            div { "© {copyright}" }
        }
    }
}
