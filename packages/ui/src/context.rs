//! App-wide context: configuration, the API client and the notification queue.

use api::ApiClient;
use crud::Notifications;
use dioxus::prelude::*;
use store::AdminConfig;

use crate::auth::AuthProvider;
use crate::toast::Toaster;

pub fn use_config() -> AdminConfig {
    use_context::<AdminConfig>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Wrap the router with this. The client is built from `config` once and
/// shared; nothing below reads the base URL from anywhere else.
#[component]
pub fn ConsoleProvider(config: AdminConfig, children: Element) -> Element {
    let credentials = config.credentials();
    let client = use_hook(|| ApiClient::from_config(&config));
    tracing::debug!("API base URL: {}", client.base_url());

    use_context_provider(|| config.clone());
    use_context_provider(|| client);
    use_context_provider(|| Signal::new(Notifications::new()));

    rsx! {
        AuthProvider {
            credentials,
            {children}
        }
        Toaster {}
    }
}
