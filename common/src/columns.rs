//! Table column configuration shared by the sortable tables.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableColumn {
    pub key: &'static str,
    pub label: &'static str,
    pub numeric: bool,
}

pub const KEYWORD_COLUMNS: &[TableColumn] = &[
    TableColumn { key: "title", label: "Keyword", numeric: false },
    TableColumn { key: "rank", label: "Rank", numeric: true },
    TableColumn { key: "rank_delta", label: "+/-", numeric: true },
    TableColumn { key: "search_volume", label: "Volume", numeric: true },
    TableColumn { key: "clicks", label: "Clicks", numeric: true },
    TableColumn { key: "impressions", label: "Impressions", numeric: true },
    TableColumn { key: "country", label: "Country", numeric: false },
];

pub const DOMAIN_COLUMNS: &[TableColumn] = &[
    TableColumn { key: "display_name", label: "Domain", numeric: false },
    TableColumn { key: "keywords", label: "Keywords", numeric: true },
    TableColumn { key: "average_position", label: "Avg. position", numeric: true },
    TableColumn { key: "clicks", label: "Clicks", numeric: true },
    TableColumn { key: "impressions", label: "Impressions", numeric: true },
    TableColumn { key: "top_three", label: "Top 3", numeric: true },
];

pub fn column_exists(columns: &[TableColumn], key: &str) -> bool {
    columns.iter().any(|c| c.key == key)
}
