use web_sys::MouseEvent;
use yew::prelude::*;

pub fn whatsapp_url(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(message))
}

pub fn open_whatsapp(phone: &str, message: &str) {
    let url = whatsapp_url(phone, message);
    if let Some(window) = web_sys::window() {
        if window.open_with_url_and_target(&url, "_blank").is_err() {
            log::warn!("Could not open WhatsApp chat");
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct WhatsAppButtonProps {
    pub phone: AttrValue,
    pub message: AttrValue,
}

#[function_component(WhatsAppButton)]
pub fn whatsapp_button(props: &WhatsAppButtonProps) -> Html {
    let onclick = {
        let phone = props.phone.clone();
        let message = props.message.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open_whatsapp(&phone, &message);
        })
    };

    html! {
        <a
            class="whatsapp-float"
            href={whatsapp_url(&props.phone, &props.message)}
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Chat on WhatsApp"
            {onclick}
        >
            {"💬"}
        </a>
    }
}
