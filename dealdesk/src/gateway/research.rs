use crate::Desk;
use crate::desk_gateway_method;

impl Desk {
    desk_gateway_method! {
        /// Recent CapIQ news, last 30 days, at most ten articles.
        method: get_news -> dealdesk_core::NewsFeed,
        resource: News,
        accessor: as_news_provider,
        call: news
    }

    desk_gateway_method! {
        /// AlphaSense expert call transcripts mentioning the ticker.
        method: get_expert_calls -> dealdesk_core::ExpertCallList,
        resource: ExpertCalls,
        accessor: as_expert_calls_provider,
        call: expert_calls
    }

    desk_gateway_method! {
        /// AlphaSense filings and research reports mentioning the ticker.
        method: get_documents -> dealdesk_core::DocumentList,
        resource: Documents,
        accessor: as_documents_provider,
        call: documents
    }
}
