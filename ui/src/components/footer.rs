// File: src/components/footer.rs
use crate::app_state_mut::AppStateMut;
use crate::components::navbar::CONSULT_PHONE;
use crate::components::pico::Container;
use crate::components::pico::Grid;
use dioxus::prelude::*;

const KARAJ_PHONE: &str = "026-32761563";
const WHATSAPP: &str = "0990 082 3122";
const CONTACT_EMAIL: &str = "info@rastinax.com";

#[component]
pub fn Footer() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let footer = &app_state_mut.locale().footer;

    rsx! {
        footer {
            class: "site-footer",
            Container {
                Grid {
                    div {
                        strong { "RASTINAX" }
                        p { class: "muted", "{footer.desc}" }
                    }
                    div {
                        h5 { "{footer.contact}" }
                        dl {
                            dt { "{footer.addr_tehran_label}" }
                            dd { "{footer.addr_tehran}" }
                            dt { "{footer.addr_karaj_label}" }
                            dd { "{footer.addr_karaj}" }
                        }
                    }
                    div {
                        h5 { "{footer.links}" }
                        dl {
                            dt { "{footer.phone_karaj_label}" }
                            dd { dir: "ltr", "{KARAJ_PHONE}" }
                            dt { "{footer.consult_label}" }
                            dd { dir: "ltr", "{CONSULT_PHONE}" }
                            dt { "{footer.whatsapp_label}" }
                            dd { dir: "ltr", "{WHATSAPP}" }
                            dt { "✉" }
                            dd { a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" } }
                        }
                    }
                }
                div {
                    class: "footer-bottom",
                    small { "{footer.copy}" }
                    small {
                        a { href: "#", "{footer.privacy}" }
                        " · "
                        a { href: "#", "{footer.terms}" }
                    }
                }
            }
        }
    }
}
