use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod consultation {
    pub mod field;
    pub mod validation;
    pub mod request;
    pub mod transport;
    pub mod form;
}
mod components {
    pub mod header;
    pub mod modal;
    pub mod smooth_scroll;
    pub mod press;
    pub mod fade_in;
    pub mod typing;
    pub mod whatsapp;
}
mod pages {
    pub mod landing;
    pub mod consultation;
}

use components::header::{header_style, menu_after, menu_icon, MenuEvent};
use components::smooth_scroll::AnchorLink;
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown route, showing landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#services", "Services"),
    ("#coaches", "Coaches"),
    ("#consultation", "Book Consultation"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let controls_ref = use_node_ref();
    let (_, scroll_y) = use_window_scroll();

    // Clicking anywhere outside the toggle and menu, logo included, closes it
    {
        let menu_open = menu_open.clone();
        use_click_away(controls_ref.clone(), move |_: Event| {
            menu_open.set(menu_after(true, MenuEvent::ClickedOutside));
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(menu_after(*menu_open, MenuEvent::Toggle));
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| {
            menu_open.set(menu_after(*menu_open, MenuEvent::LinkClicked));
        })
    };

    let menu_class = if *menu_open {
        "nav__menu show"
    } else {
        "nav__menu"
    };

    html! {
        <nav class="header" style={header_style(scroll_y)}>
            <style>
                {r#"
                    .header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 800;
                        backdrop-filter: blur(10px);
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .nav__content {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 1.25rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav__logo {
                        font-weight: 700;
                        font-size: 1.25rem;
                        color: #13343b;
                        text-decoration: none;
                    }
                    .nav__controls {
                        display: flex;
                        align-items: center;
                    }
                    .nav__menu {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav__link {
                        color: #13343b;
                        text-decoration: none;
                    }
                    .nav__toggle {
                        display: none;
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    @media (max-width: 768px) {
                        .nav__toggle {
                            display: block;
                        }
                        .nav__menu {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1rem 1.5rem;
                            background: rgba(252, 252, 249, 0.98);
                        }
                        .nav__menu.show {
                            display: flex;
                        }
                    }
                "#}
            </style>
            <div class="nav__content">
                <AnchorLink href="#home" class={classes!("nav__logo")} on_navigate={close_menu.clone()}>
                    {"MasterMind Body Global"}
                </AnchorLink>

                <div ref={controls_ref} class="nav__controls">
                    <button id="nav-toggle" class="nav__toggle" aria-label="Toggle menu" onclick={toggle_menu}>
                        { menu_icon(*menu_open) }
                    </button>
                    <div id="nav-menu" class={menu_class}>
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <AnchorLink href={*href} class={classes!("nav__link")} on_navigate={close_menu.clone()}>
                                {*label}
                            </AnchorLink>
                        }) }
                    </div>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
