//! The client source a builder draws on when preparing requests.

use aws_sdk_dynamodb::{Client, Config};

/// A source of DynamoDB client handles.
///
/// A builder resolves its client through this seam each time a request is
/// prepared, so the source decides whether every prepared request shares one
/// handle or receives its own. The SDK handle is internally reference-counted
/// and cheap to clone, which makes an existing [`Client`] the usual source;
/// a [`Config`] works too and constructs the handle on demand.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::{Client, Config};
/// use dynamodb_request::ProvideClient;
///
/// # fn example(client: Client, config: Config) {
/// let from_handle = client.provide_client();
/// let from_config = config.provide_client();
/// # }
/// ```
pub trait ProvideClient {
    /// Returns the client handle the next prepared request executes on.
    fn provide_client(&self) -> Client;
}

impl ProvideClient for Client {
    fn provide_client(&self) -> Client {
        self.clone()
    }
}

impl ProvideClient for Config {
    fn provide_client(&self) -> Client {
        Client::from_conf(self.clone())
    }
}
