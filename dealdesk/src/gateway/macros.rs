/// Generate a gateway method that resolves one resource for one ticker
/// through [`Desk::fetch_single`](crate::Desk).
///
/// The accessor selects the provider role on a connector; the call is the
/// provider method taking only the ticker.
#[macro_export]
macro_rules! desk_gateway_method {
    (
        $(#[$meta:meta])*
        method: $name:ident -> $ret:ty,
        resource: $resource:ident,
        accessor: $accessor:ident,
        call: $call:ident
    ) => {
        $(#[$meta])*
        #[tracing::instrument(
            target = "dealdesk::gateway",
            skip_all,
            fields(ticker = %ticker, resource = dealdesk_core::Resource::$resource.as_str()),
        )]
        pub async fn $name(&self, ticker: &dealdesk_core::Ticker) -> dealdesk_core::Fetched<$ret> {
            self.fetch_single(dealdesk_core::Resource::$resource, ticker, |c, t| {
                c.$accessor().map(|p| p.$call(t))
            })
            .await
        }
    };
}
