use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Height of the fixed header; sections land just below it.
pub const HEADER_OFFSET_PX: f64 = 90.0;

pub fn section_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn target_top(offset_top: i32) -> f64 {
    f64::from(offset_top) - HEADER_OFFSET_PX
}

/// Smooth-scrolls to the element named by an `#id` href. False when there is nothing to scroll to.
pub fn scroll_to_section(href: &str) -> bool {
    let Some(id) = section_id(href) else {
        return false;
    };
    let Some(window) = web_sys::window() else {
        return false;
    };
    let section = window
        .document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    match section {
        Some(section) => {
            let options = ScrollToOptions::new();
            options.set_top(target_top(section.offset_top()));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
            true
        }
        None => {
            log::warn!("No section for anchor {}", href);
            false
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that scrolls instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(&href);
            if let Some(on_navigate) = &on_navigate {
                on_navigate.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hash_links_have_targets() {
        assert_eq!(section_id("#services"), Some("services"));
        assert_eq!(section_id("#"), None);
        assert_eq!(section_id("/privacy"), None);
    }

    #[test]
    fn target_sits_below_header() {
        assert_eq!(target_top(1000), 910.0);
        assert_eq!(target_top(40), -50.0);
    }
}
