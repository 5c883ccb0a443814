pub mod panel;

pub use panel::MessagePanel;

use sftpwatch_client::{Result, StatusClient};

/// Fetch the status text once and append it to the panel.
///
/// One linear chain: a single request, and on success a single append of
/// the body verbatim. On failure the error is returned and the panel is
/// left untouched. Intended to be called once at startup; the effect of
/// calling it again on the same panel is unspecified.
pub async fn run(client: &StatusClient, panel: &mut MessagePanel) -> Result<()> {
    let text = client.test().await?;
    panel.append(&text);
    Ok(())
}
