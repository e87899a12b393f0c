use dioxus::prelude::*;

use common::filter_params::FilterParams;

use crate::components::navbar::Navbar;
use crate::pages::dashboard_page::DashboardPage;
use crate::pages::keywords_page::KeywordsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    DashboardPage {},


    // the query string carries the whole filter/sort configuration
    #[route("/domain/:domain_id?:..filters")]
    KeywordsPage {
        domain_id: u64,
        filters: String,
    },

}

impl Route {
    pub fn keywords_page(domain_id: u64) -> Self {
        Self::KeywordsPage {
            domain_id,
            filters: String::new(),
        }
    }

    pub fn keywords_page_with_filters(domain_id: u64, params: &FilterParams) -> Self {
        Self::KeywordsPage {
            domain_id,
            filters: params.to_query_string(),
        }
    }
}
