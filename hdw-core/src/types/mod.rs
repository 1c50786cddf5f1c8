mod item;
mod request;

pub use item::{InputItem, OutputRecord};
pub use request::RequestSpec;

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownNameError;

/// Which API family a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Surface {
    /// Read-only lookups and searches.
    Query,
    /// Actions performed on behalf of a connected account.
    Management,
}

impl Surface {
    pub const ALL: [Surface; 2] = [Surface::Query, Surface::Management];

    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Query => "query",
            Surface::Management => "management",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Surface {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Surface::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownNameError::new("surface", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    User,
    Email,
    Post,
    Company,
    Search,
    Google,
    Group,
    Chat,
}

impl Resource {
    pub const ALL: [Resource; 8] = [
        Resource::User,
        Resource::Email,
        Resource::Post,
        Resource::Company,
        Resource::Search,
        Resource::Google,
        Resource::Group,
        Resource::Chat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::User => "user",
            Resource::Email => "email",
            Resource::Post => "post",
            Resource::Company => "company",
            Resource::Search => "search",
            Resource::Google => "google",
            Resource::Group => "group",
            Resource::Chat => "chat",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownNameError::new("resource", s))
    }
}

/// Operation names as they appear in item parameters (camelCase).
///
/// The set is shared by both surfaces; which operations are valid for a
/// resource is decided by the routing tables, not by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    Search,
    GetProfile,
    GetPosts,
    GetReactions,
    GetUserByEmail,
    GetPostComments,
    GetPostReposts,
    GetCompany,
    GetCompanyEmployees,
    GetCompanyPosts,
    SalesNavigatorSearch,
    SearchJobs,
    SearchCompanies,
    SearchIndustries,
    SearchLocations,
    GoogleSearch,
    GetGroup,
    SendConnection,
    GetConnections,
    GetMe,
    SendMessage,
    GetMessages,
    GetConversations,
    CreatePost,
    CreateComment,
}

impl Operation {
    pub const ALL: [Operation; 25] = [
        Operation::Search,
        Operation::GetProfile,
        Operation::GetPosts,
        Operation::GetReactions,
        Operation::GetUserByEmail,
        Operation::GetPostComments,
        Operation::GetPostReposts,
        Operation::GetCompany,
        Operation::GetCompanyEmployees,
        Operation::GetCompanyPosts,
        Operation::SalesNavigatorSearch,
        Operation::SearchJobs,
        Operation::SearchCompanies,
        Operation::SearchIndustries,
        Operation::SearchLocations,
        Operation::GoogleSearch,
        Operation::GetGroup,
        Operation::SendConnection,
        Operation::GetConnections,
        Operation::GetMe,
        Operation::SendMessage,
        Operation::GetMessages,
        Operation::GetConversations,
        Operation::CreatePost,
        Operation::CreateComment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Search => "search",
            Operation::GetProfile => "getProfile",
            Operation::GetPosts => "getPosts",
            Operation::GetReactions => "getReactions",
            Operation::GetUserByEmail => "getUserByEmail",
            Operation::GetPostComments => "getPostComments",
            Operation::GetPostReposts => "getPostReposts",
            Operation::GetCompany => "getCompany",
            Operation::GetCompanyEmployees => "getCompanyEmployees",
            Operation::GetCompanyPosts => "getCompanyPosts",
            Operation::SalesNavigatorSearch => "salesNavigatorSearch",
            Operation::SearchJobs => "searchJobs",
            Operation::SearchCompanies => "searchCompanies",
            Operation::SearchIndustries => "searchIndustries",
            Operation::SearchLocations => "searchLocations",
            Operation::GoogleSearch => "googleSearch",
            Operation::GetGroup => "getGroup",
            Operation::SendConnection => "sendConnection",
            Operation::GetConnections => "getConnections",
            Operation::GetMe => "getMe",
            Operation::SendMessage => "sendMessage",
            Operation::GetMessages => "getMessages",
            Operation::GetConversations => "getConversations",
            Operation::CreatePost => "createPost",
            Operation::CreateComment => "createComment",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownNameError::new("operation", s))
    }
}

/// A `(resource, operation)` selection for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceOperation {
    pub resource: Resource,
    pub operation: Operation,
}

impl ResourceOperation {
    pub const fn new(resource: Resource, operation: Operation) -> Self {
        Self { resource, operation }
    }
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.resource, self.operation)
    }
}
