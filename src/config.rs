use std::rc::Rc;

use crate::consultation::transport::{HttpTransport, SimulatedTransport, Transport};

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Set at build time to post bookings to a real backend instead of simulating.
const CONSULTATION_ENDPOINT: Option<&str> = option_env!("CONSULTATION_ENDPOINT");

/// Types the hero title in character by character on wide screens.
pub const HERO_TYPING_EFFECT: bool = false;

pub const WHATSAPP_NUMBER: &str = "447700900123";

pub fn consultation_transport() -> Transport {
    match CONSULTATION_ENDPOINT {
        Some(path) if !path.is_empty() => {
            let endpoint = format!("{}{}", get_backend_url(), path);
            log::info!("Consultation bookings go to {}", endpoint);
            Transport(Rc::new(HttpTransport::new(endpoint)))
        }
        _ => Transport(Rc::new(SimulatedTransport::default())),
    }
}
