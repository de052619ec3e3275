use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const START_DELAY_MS: u32 = 500;
pub const CHAR_INTERVAL_MS: u32 = 100;
pub const CURSOR_LINGER_MS: u32 = 1_000;
/// Narrower viewports get the plain title.
pub const MIN_VIEWPORT_PX: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Waiting,
    Typing(usize),
    Done,
}

impl TypingPhase {
    /// Delay and phase of the next tick, or None once finished.
    pub fn next(self, len: usize) -> Option<(u32, TypingPhase)> {
        match self {
            TypingPhase::Done => None,
            TypingPhase::Waiting if len == 0 => Some((0, TypingPhase::Done)),
            TypingPhase::Waiting => Some((START_DELAY_MS, TypingPhase::Typing(1))),
            TypingPhase::Typing(n) if n < len => Some((CHAR_INTERVAL_MS, TypingPhase::Typing(n + 1))),
            TypingPhase::Typing(_) => Some((CHAR_INTERVAL_MS + CURSOR_LINGER_MS, TypingPhase::Done)),
        }
    }

    pub fn visible_text(&self, text: &str) -> String {
        match self {
            TypingPhase::Waiting => String::new(),
            TypingPhase::Typing(n) => text.chars().take(*n).collect(),
            TypingPhase::Done => text.to_string(),
        }
    }

    pub fn shows_cursor(&self) -> bool {
        *self != TypingPhase::Done
    }
}

fn wide_viewport() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map_or(false, |w| w > MIN_VIEWPORT_PX)
}

#[derive(Properties, PartialEq)]
pub struct TypingTitleProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub enabled: bool,
}

#[function_component(TypingTitle)]
pub fn typing_title(props: &TypingTitleProps) -> Html {
    let enabled = props.enabled;
    let phase = use_state(move || {
        if enabled && wide_viewport() {
            TypingPhase::Waiting
        } else {
            TypingPhase::Done
        }
    });

    {
        let phase_setter = phase.setter();
        let len = props.text.chars().count();
        use_effect_with_deps(
            move |phase| {
                let tick = phase
                    .next(len)
                    .map(|(delay, next)| Timeout::new(delay, move || phase_setter.set(next)));
                move || drop(tick)
            },
            *phase,
        );
    }

    let style = if phase.shows_cursor() {
        "border-right: 2px solid #21808d;"
    } else {
        ""
    };

    html! {
        <h1 class="hero__title" {style}>{ phase.visible_text(&props.text) }</h1>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_one_character_per_tick() {
        let text = "Hi!";
        let mut phase = TypingPhase::Waiting;
        let mut delays = Vec::new();
        let mut seen = Vec::new();
        while let Some((delay, next)) = phase.next(text.chars().count()) {
            delays.push(delay);
            phase = next;
            seen.push(phase.visible_text(text));
        }
        assert_eq!(delays, [500, 100, 100, 1100]);
        assert_eq!(seen, ["H", "Hi", "Hi!", "Hi!"]);
        assert!(!phase.shows_cursor());
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(TypingPhase::Typing(2).visible_text("Körper"), "Kö");
    }

    #[test]
    fn empty_title_finishes_immediately() {
        assert_eq!(TypingPhase::Waiting.next(0), Some((0, TypingPhase::Done)));
    }
}
