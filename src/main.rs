use app_mount::{bootstrap, report, Result};
use app_shell::{
    config::{self, CONFIG_SCRIPT_ID},
    host::{BrowserDocument, LeptosRoot},
    logging, App,
};

fn main() {
    logging::init();

    // Fatal: reported once, never retried
    if let Err(err) = run() {
        report(&err);
    }
}

fn run() -> Result<()> {
    let document = BrowserDocument::from_window()?;
    let overrides = document.text_of(CONFIG_SCRIPT_ID);
    let config = config::resolve(config::base(), overrides.as_deref());

    let handle = bootstrap(&document, config, LeptosRoot(App))?;
    tracing::debug!(
        anchor = %handle.anchor(),
        styles = handle.styles_registered(),
        "Bootstrap complete"
    );
    Ok(())
}
