//! A scripted gallery session against the recording driver.
//!
//! Run with: `cargo run --example postcard_gallery`

use serde_json::json;
use soneto::{MockDriver, Soneto, SonetoResult};

fn main() -> SonetoResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let mut soneto = Soneto::new(MockDriver::new());

    // A real host would load YAML documents from its selectors directory;
    // here the entries go in programmatically so the example is standalone.
    soneto.load_selectors(&[])?;
    let registry = soneto.registry_mut();
    registry.insert("logo image", "//img[@src='logo.gif']");
    registry.insert("login field", "//input[@id='login']");
    registry.insert("send button", "//button[@id='send']");
    registry.insert(
        "number of photos",
        "this.page().findElement('photos').select('a').length;",
    );

    soneto.open(&["http://gallery.test/", "http://gallery.test/postcards"])?;
    soneto.wait_for_present(&["logo image", "login field"])?;
    soneto.type_text(&[("login field", "alice")])?;
    soneto.click_and_wait(&["send button"])?;
    soneto.assert_eval(&[("number of photos", json!(12))])?;

    println!("recorded driver calls:");
    for call in soneto.driver().calls() {
        println!("  {call:?}");
    }
    Ok(())
}
