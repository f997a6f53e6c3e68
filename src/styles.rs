//! Global stylesheets, embedded at build time

use app_mount::Stylesheet;

pub const MAIN: Stylesheet = Stylesheet::inline("main", include_str!("../assets/main.css"));
pub const RESET: Stylesheet = Stylesheet::inline("reset", include_str!("../assets/reset.css"));
pub const COLORS: Stylesheet = Stylesheet::inline("colors", include_str!("../assets/colors.css"));

/// The application's stylesheets in load order.
pub fn stylesheets() -> [Stylesheet; 3] {
    [MAIN, RESET, COLORS]
}
