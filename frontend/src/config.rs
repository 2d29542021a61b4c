
#[cfg(debug_assertions)]
pub fn get_auth_url() -> &'static str {
    match option_env!("CENTRA_AUTH_URL") {
        Some(url) => url,
        None => "http://localhost:54321", // Local auth stack
    }
}

#[cfg(not(debug_assertions))]
pub fn get_auth_url() -> &'static str {
    match option_env!("CENTRA_AUTH_URL") {
        Some(url) => url,
        None => "https://auth.centra.world",
    }
}

pub fn get_auth_anon_key() -> &'static str {
    option_env!("CENTRA_AUTH_ANON_KEY").unwrap_or("")
}

// OAuth provider used by the login button
pub const AUTH_PROVIDER: &str = "discord";

pub const SESSION_STORAGE_KEY: &str = "centra-auth-session";

pub const LOGIN_PATH: &str = "/auth/login";
pub const CALLBACK_PATH: &str = "/auth/callback";
pub const COMMUNITY_PATH: &str = "/community";

// Carousel drag thresholds in CSS pixels
pub const POINTER_DRAG_THRESHOLD: f64 = 100.0;
pub const TOUCH_DRAG_THRESHOLD: f64 = 80.0;

// Tailwind's `lg` breakpoint
pub const WIDE_VIEWPORT_MIN_WIDTH: f64 = 1024.0;

pub const POPUP_DELAY_MS: u32 = 30_000;
pub const TOAST_LIFETIME_MS: u32 = 5_000;

pub const CTA_SCROLL_THRESHOLD: i32 = 600;
