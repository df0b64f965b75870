// The whole program as one call: credentials, session, scream, post.
// Every step returns its error to the caller; only `main` decides to exit.

use crate::api::ApiClient;
use crate::config::Credentials;
use crate::error::Result;
use crate::scream::scream;

/// Resolve credentials through `lookup`, log in, and publish one scream.
/// Returns the text that was posted.
///
/// Credentials are checked before the first request, so a missing variable
/// never reaches the network.
pub fn run<F>(lookup: F, api: &ApiClient) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let credentials = Credentials::from_lookup(lookup)?;
    let session = api.authenticate(&credentials)?;

    let text = scream();
    tracing::info!(scream = %text, "generated scream");

    api.create_post(&session, &text)?;
    Ok(text)
}
