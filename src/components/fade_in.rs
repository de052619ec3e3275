use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn fade_style(revealed: bool) -> &'static str {
    if revealed {
        "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;"
    } else {
        "opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease, transform 0.6s ease;"
    }
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Reveals its children the first time they scroll into view.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let on_visible = revealed.clone();
                let observed = node.cast::<Element>().and_then(move |element| {
                    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if entry.is_intersecting() {
                                    on_visible.set(true);
                                    observer.unobserve(&entry.target());
                                }
                            }
                        },
                    );

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(THRESHOLD));
                    options.set_root_margin(ROOT_MARGIN);

                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                        Ok(observer) => {
                            observer.observe(&element);
                            Some((observer, callback))
                        }
                        Err(e) => {
                            log::warn!("IntersectionObserver unavailable: {:?}", e);
                            None
                        }
                    }
                });

                if observed.is_none() {
                    revealed.set(true);
                }

                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={fade_style(*revealed)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_revealed() {
        assert!(fade_style(false).starts_with("opacity: 0"));
        assert!(fade_style(true).starts_with("opacity: 1"));
    }
}
