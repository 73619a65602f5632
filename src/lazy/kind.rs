use std::fmt;

/// The response shape a deferred proxy materializes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Status,
    Statuses,
    User,
    Users,
    PagableUsers,
    UserList,
    UserLists,
    PagableUserLists,
    DirectMessage,
    DirectMessages,
    Relationship,
    Friendships,
    Trends,
    TrendsList,
    Locations,
    Ids,
    QueryResult,
    SavedSearch,
    SavedSearches,
    RateLimitStatuses,
    AccountTotals,
    AccountSettings,
    Place,
    Places,
    SimilarPlaces,
    Categories,
    Languages,
    ApiConfiguration,
    OEmbed,
    RelatedResults,
    /// A proxy built from a caller-supplied builder.
    Custom(&'static str),
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Status => "status",
            ObjectKind::Statuses => "status list",
            ObjectKind::User => "user",
            ObjectKind::Users => "user list",
            ObjectKind::PagableUsers => "pagable user list",
            ObjectKind::UserList => "list",
            ObjectKind::UserLists => "list of lists",
            ObjectKind::PagableUserLists => "pagable list of lists",
            ObjectKind::DirectMessage => "direct message",
            ObjectKind::DirectMessages => "direct message list",
            ObjectKind::Relationship => "relationship",
            ObjectKind::Friendships => "friendship list",
            ObjectKind::Trends => "trends",
            ObjectKind::TrendsList => "trends list",
            ObjectKind::Locations => "location list",
            ObjectKind::Ids => "ids",
            ObjectKind::QueryResult => "query result",
            ObjectKind::SavedSearch => "saved search",
            ObjectKind::SavedSearches => "saved search list",
            ObjectKind::RateLimitStatuses => "rate limit statuses",
            ObjectKind::AccountTotals => "account totals",
            ObjectKind::AccountSettings => "account settings",
            ObjectKind::Place => "place",
            ObjectKind::Places => "place list",
            ObjectKind::SimilarPlaces => "similar places",
            ObjectKind::Categories => "category list",
            ObjectKind::Languages => "language list",
            ObjectKind::ApiConfiguration => "api configuration",
            ObjectKind::OEmbed => "oembed",
            ObjectKind::RelatedResults => "related results",
            ObjectKind::Custom(name) => name,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
