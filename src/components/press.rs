use web_sys::MouseEvent;
use yew::prelude::*;

pub fn press_style(pressed: bool) -> &'static str {
    if pressed {
        "transform: translateY(1px);"
    } else {
        ""
    }
}

#[derive(Properties, PartialEq)]
pub struct PressButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// `.btn` that sinks a pixel while held down.
#[function_component(PressButton)]
pub fn press_button(props: &PressButtonProps) -> Html {
    let pressed = use_state(|| false);

    let press = {
        let pressed = pressed.clone();
        Callback::from(move |_: MouseEvent| pressed.set(true))
    };
    let release = {
        let pressed = pressed.clone();
        Callback::from(move |_: MouseEvent| pressed.set(false))
    };

    let onclick = props.onclick.clone().unwrap_or_else(|| Callback::from(|_: MouseEvent| ()));

    html! {
        <button
            type={props.button_type.clone()}
            class={classes!("btn", props.class.clone())}
            style={press_style(*pressed)}
            disabled={props.disabled}
            onmousedown={press}
            onmouseup={release.clone()}
            onmouseleave={release}
            {onclick}
        >
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pressed_buttons_move() {
        assert_eq!(press_style(false), "");
        assert!(press_style(true).contains("translateY(1px)"));
    }
}
