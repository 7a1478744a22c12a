use crate::Desk;
use crate::desk_gateway_method;

impl Desk {
    desk_gateway_method! {
        /// Multi-year statements and valuation ratios.
        method: get_financials -> dealdesk_core::FinancialData,
        resource: Financials,
        accessor: as_financials_provider,
        call: financials
    }

    desk_gateway_method! {
        /// Latest quote. This is the resource refreshed on a timer by
        /// opened project details.
        method: get_live_quote -> dealdesk_core::LiveQuote,
        resource: LiveQuote,
        accessor: as_live_quote_provider,
        call: live_quote
    }

    desk_gateway_method! {
        /// Quotes for up to four comparable companies.
        method: get_peer_comparison -> dealdesk_core::PeerComparison,
        resource: PeerComparison,
        accessor: as_peer_comparison_provider,
        call: peer_comparison
    }

    desk_gateway_method! {
        /// Buy/hold/sell tally and consensus target price.
        method: get_analyst_ratings -> dealdesk_core::AnalystRatings,
        resource: AnalystRatings,
        accessor: as_analyst_ratings_provider,
        call: analyst_ratings
    }
}
