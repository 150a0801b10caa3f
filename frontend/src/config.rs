use log::Level;

pub const BRAND_NAME: &str = "Harsh Chauhan";
pub const BRAND_INITIALS: &str = "HC";
pub const BRAND_TITLE: &str = "God of SEO";

/// WhatsApp number used by the hero, framework, case studies and floating button.
pub const WHATSAPP_PRIMARY: &str = "917088717909";
/// WhatsApp number used by the mobile menu and footer consultation link.
pub const WHATSAPP_CONSULT: &str = "917379340224";
pub const WHATSAPP_MESSAGE: &str = "Hi Harsh! I'm interested in your SEO services.";

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/harsh-chauhan-digital";
pub const CONTACT_EMAIL: &str = "harshchauhan.official7@gmail.com";

/// How long the contact form pretends to submit.
pub const SUBMIT_DELAY_MS: u32 = 1_000;
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Scroll offset after which the header gets its solid background.
pub const HEADER_SCROLL_THRESHOLD: f64 = 20.0;

/// `https://wa.me/<number>`, with the prefilled message when given.
pub fn whatsapp_url(number: &str, message: Option<&str>) -> String {
    match message {
        Some(text) => format!("https://wa.me/{}?text={}", number, urlencoding::encode(text)),
        None => format!("https://wa.me/{}", number),
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_url_encodes_message() {
        assert_eq!(
            whatsapp_url(WHATSAPP_PRIMARY, Some(WHATSAPP_MESSAGE)),
            "https://wa.me/917088717909?text=Hi%20Harsh%21%20I%27m%20interested%20in%20your%20SEO%20services."
        );
        assert_eq!(whatsapp_url(WHATSAPP_CONSULT, None), "https://wa.me/917379340224");
    }
}
