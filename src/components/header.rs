/// Past this many pixels of scroll the header turns opaque and gains a shadow.
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

pub fn header_style(scroll_y: f64) -> &'static str {
    if scroll_y > SCROLL_THRESHOLD_PX {
        "background: rgba(252, 252, 249, 0.98); box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);"
    } else {
        "background: rgba(252, 252, 249, 0.95); box-shadow: none;"
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    LinkClicked,
    ClickedOutside,
}

/// Mobile menu open state after an event.
pub fn menu_after(open: bool, event: MenuEvent) -> bool {
    match event {
        MenuEvent::Toggle => !open,
        MenuEvent::LinkClicked | MenuEvent::ClickedOutside => false,
    }
}

pub fn menu_icon(open: bool) -> &'static str {
    if open {
        "✕"
    } else {
        "☰"
    }
}
