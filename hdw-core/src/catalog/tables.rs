use super::{FieldSpec, OperationFields};
use crate::types::Operation as O;
use crate::types::Resource as R;
use crate::types::ResourceOperation;

const ADDITIONAL_FIELDS: &str = "additionalFields";
const ADDITIONAL_FILTERS: &str = "additionalFilters";

const TIMEOUT: FieldSpec = FieldSpec::number("timeout", "Timeout")
    .default_int(300)
    .describe("Timeout in seconds, forwarded to the API");

const fn count(default: i64) -> FieldSpec {
    FieldSpec::number("count", "Count")
        .default_int(default)
        .describe("Maximum number of results")
}

const fn required_string(
    name: &'static str,
    display_name: &'static str,
    description: &'static str,
) -> FieldSpec {
    FieldSpec::string(name, display_name)
        .required()
        .default_str("")
        .describe(description)
}

const fn optional_string(
    name: &'static str,
    display_name: &'static str,
    description: &'static str,
) -> FieldSpec {
    FieldSpec::string(name, display_name)
        .default_str("")
        .describe(description)
}

const fn filter(
    collection: &'static str,
    name: &'static str,
    display_name: &'static str,
    description: &'static str,
) -> FieldSpec {
    FieldSpec::string(name, display_name)
        .in_collection(collection)
        .describe(description)
}

const fn entry(resource: R, operation: O, fields: &'static [FieldSpec]) -> OperationFields {
    OperationFields {
        selection: ResourceOperation::new(resource, operation),
        fields,
    }
}

const KEYWORDS: FieldSpec = optional_string("keywords", "Keywords", "Any keyword to search for");

const JOB_EXPERIENCE_LEVELS: &[&str] = &[
    "internship",
    "entry_level",
    "associate",
    "mid_senior",
    "director",
    "executive",
];
const JOB_TYPES: &[&str] = &[
    "full_time",
    "part_time",
    "contract",
    "temporary",
    "internship",
    "other",
];
const WORK_TYPES: &[&str] = &["on-site", "hybrid", "remote"];
const EMPLOYEE_COUNTS: &[&str] = &[
    "1-10",
    "11-50",
    "51-200",
    "201-500",
    "501-1000",
    "1001-5000",
    "5001-10000",
    "10001+",
];

const QUERY_USER_SEARCH: &[FieldSpec] = &[
    KEYWORDS,
    count(10).describe("Maximum number of results (max 1000)"),
    TIMEOUT,
    filter(ADDITIONAL_FIELDS, "first_name", "First Name", "Exact first name"),
    filter(ADDITIONAL_FIELDS, "last_name", "Last Name", "Exact last name"),
    filter(ADDITIONAL_FIELDS, "title", "Title", "Exact word in the title"),
    filter(ADDITIONAL_FIELDS, "company_keywords", "Company Keywords", "Exact word in the company name"),
    filter(ADDITIONAL_FIELDS, "school_keywords", "School Keywords", "Exact word in the school name"),
    filter(ADDITIONAL_FIELDS, "current_company", "Current Company", "Company URN or name"),
    filter(ADDITIONAL_FIELDS, "past_company", "Past Company", "Past company URN or name"),
    filter(ADDITIONAL_FIELDS, "location", "Location", "Location name or URN"),
    filter(ADDITIONAL_FIELDS, "industry", "Industry", "Industry URN or name"),
    filter(ADDITIONAL_FIELDS, "education", "Education", "Education URN or name"),
];

const QUERY_USER_GET_PROFILE: &[FieldSpec] = &[
    required_string("user", "User", "User alias, URL, or URN"),
    FieldSpec::boolean("withExperience", "Include Experience").default_bool(true),
    FieldSpec::boolean("withEducation", "Include Education").default_bool(true),
    FieldSpec::boolean("withSkills", "Include Skills").default_bool(true),
];

const QUERY_USER_GET_POSTS: &[FieldSpec] = &[
    required_string("urn", "User URN", "User URN (must include prefix, e.g. fsd_profile:ACoAA...)"),
    count(10),
    TIMEOUT,
];

const QUERY_USER_GET_REACTIONS: &[FieldSpec] = &[
    required_string("urn", "User URN", "User URN (must include prefix, e.g. fsd_profile:ACoAA...)"),
    count(10),
    TIMEOUT,
];

const QUERY_EMAIL_GET_USER_BY_EMAIL: &[FieldSpec] = &[
    required_string("email", "Email", "Email address to search for"),
    count(5),
    TIMEOUT,
];

const QUERY_POST_GET_POST_COMMENTS: &[FieldSpec] = &[
    required_string("urn", "Post URN", "Post URN (must include prefix, e.g. activity:7234173400267538433)"),
    FieldSpec::options("sort", "Sort", &["relevance", "recent"])
        .default_str("relevance")
        .describe("Sort type for comments"),
    count(10),
    TIMEOUT,
];

const QUERY_POST_GET_POST_REPOSTS: &[FieldSpec] = &[
    required_string("urn", "Post URN", "Post URN (must include prefix, e.g. activity:7234173400267538433)"),
    count(10),
    TIMEOUT,
];

const QUERY_COMPANY_GET_COMPANY: &[FieldSpec] = &[
    required_string("company", "Company", "Company alias, URL or URN (e.g. \"openai\" or \"company:1441\")"),
    TIMEOUT,
];

const QUERY_COMPANY_GET_COMPANY_EMPLOYEES: &[FieldSpec] = &[
    required_string("companies", "Companies", "Company URNs, comma-separated"),
    optional_string("keywords", "Keywords", "Any keyword for searching employees"),
    optional_string("firstName", "First Name", "Search for exact first name"),
    optional_string("lastName", "Last Name", "Search for exact last name"),
    count(10),
    TIMEOUT,
];

const QUERY_COMPANY_GET_COMPANY_POSTS: &[FieldSpec] = &[
    required_string("urn", "Company URN", "Company URN, only company urn type is allowed (e.g. \"company:11130470\")"),
    count(10),
    TIMEOUT,
];

const QUERY_SEARCH_SALES_NAVIGATOR_SEARCH: &[FieldSpec] = &[
    KEYWORDS,
    count(10).describe("Maximum number of results (max 2500)"),
    TIMEOUT,
    filter(ADDITIONAL_FILTERS, "first_names", "First Names", "Comma-separated list of exact first names"),
    filter(ADDITIONAL_FILTERS, "last_names", "Last Names", "Comma-separated list of exact last names"),
    filter(ADDITIONAL_FILTERS, "current_titles", "Current Titles", "Comma-separated list of exact words in current titles"),
    filter(ADDITIONAL_FILTERS, "location", "Location", "Location name or URN"),
    filter(ADDITIONAL_FILTERS, "industry", "Industry", "Industry URN or name"),
    filter(ADDITIONAL_FILTERS, "current_companies", "Current Companies", "Current company URN or name"),
    filter(ADDITIONAL_FILTERS, "past_companies", "Past Companies", "Past company URN or name"),
];

const QUERY_SEARCH_SEARCH_JOBS: &[FieldSpec] = &[
    KEYWORDS,
    count(10),
    TIMEOUT,
    FieldSpec::options("sort", "Sort", &["recent", "relevant"])
        .in_collection(ADDITIONAL_FILTERS)
        .describe("Job sorting type"),
    FieldSpec::multi_options("experience_level", "Experience Level", JOB_EXPERIENCE_LEVELS)
        .in_collection(ADDITIONAL_FILTERS),
    FieldSpec::multi_options("job_types", "Job Types", JOB_TYPES).in_collection(ADDITIONAL_FILTERS),
    FieldSpec::multi_options("work_types", "Work Types", WORK_TYPES).in_collection(ADDITIONAL_FILTERS),
    filter(ADDITIONAL_FILTERS, "industry", "Industry", "Industry URN (industry:*) or name"),
    filter(ADDITIONAL_FILTERS, "company", "Company", "Company URN (company:*) or comma-separated list of URNs"),
    filter(ADDITIONAL_FILTERS, "location", "Location", "Job location"),
    FieldSpec::number("from_date", "From Date (timestamp)")
        .in_collection(ADDITIONAL_FILTERS)
        .describe("Starting date for jobs search"),
    FieldSpec::number("to_date", "To Date (timestamp)")
        .in_collection(ADDITIONAL_FILTERS)
        .describe("Ending date for jobs search"),
];

const QUERY_SEARCH_SEARCH_COMPANIES: &[FieldSpec] = &[
    KEYWORDS,
    count(10),
    TIMEOUT,
    filter(ADDITIONAL_FILTERS, "location", "Location", "Location URN (geo:*) or name"),
    filter(ADDITIONAL_FILTERS, "industry", "Industry", "Industry URN (industry:*) or name"),
    FieldSpec::multi_options("employee_count", "Employee Count", EMPLOYEE_COUNTS)
        .in_collection(ADDITIONAL_FILTERS)
        .describe("Company sizes to filter by"),
];

const QUERY_SEARCH_SEARCH_INDUSTRIES: &[FieldSpec] = &[
    required_string("name", "Industry Name", "Industry name to search for"),
    count(10),
    TIMEOUT,
];

const QUERY_SEARCH_SEARCH_LOCATIONS: &[FieldSpec] = &[
    required_string("name", "Location Name", "Location name to search for"),
    count(10),
    TIMEOUT,
];

const QUERY_GOOGLE_SEARCH_COMPANIES: &[FieldSpec] = &[
    required_string("keywords", "Keywords", "Company keywords for search (comma-separated)"),
    FieldSpec::boolean("withUrn", "Include URNs").default_bool(false),
    FieldSpec::number("countPerKeyword", "Results Per Keyword")
        .default_int(1)
        .describe("Maximum results per keyword (1-10)"),
    TIMEOUT,
];

const QUERY_GOOGLE_GOOGLE_SEARCH: &[FieldSpec] = &[
    required_string("query", "Query", "Search query (e.g. \"python fastapi\")"),
    count(10).describe("Maximum number of results (1-20)"),
    TIMEOUT,
];

const QUERY_GROUP_GET_GROUP: &[FieldSpec] = &[required_string("group", "Group", "Group URN or URL"), TIMEOUT];

pub static QUERY_CATALOG: &[OperationFields] = &[
    entry(R::User, O::Search, QUERY_USER_SEARCH),
    entry(R::User, O::GetProfile, QUERY_USER_GET_PROFILE),
    entry(R::User, O::GetPosts, QUERY_USER_GET_POSTS),
    entry(R::User, O::GetReactions, QUERY_USER_GET_REACTIONS),
    entry(R::Email, O::GetUserByEmail, QUERY_EMAIL_GET_USER_BY_EMAIL),
    entry(R::Post, O::GetPostComments, QUERY_POST_GET_POST_COMMENTS),
    entry(R::Post, O::GetPostReposts, QUERY_POST_GET_POST_REPOSTS),
    entry(R::Company, O::GetCompany, QUERY_COMPANY_GET_COMPANY),
    entry(R::Company, O::GetCompanyEmployees, QUERY_COMPANY_GET_COMPANY_EMPLOYEES),
    entry(R::Company, O::GetCompanyPosts, QUERY_COMPANY_GET_COMPANY_POSTS),
    entry(R::Search, O::SalesNavigatorSearch, QUERY_SEARCH_SALES_NAVIGATOR_SEARCH),
    entry(R::Search, O::SearchJobs, QUERY_SEARCH_SEARCH_JOBS),
    entry(R::Search, O::SearchCompanies, QUERY_SEARCH_SEARCH_COMPANIES),
    entry(R::Search, O::SearchIndustries, QUERY_SEARCH_SEARCH_INDUSTRIES),
    entry(R::Search, O::SearchLocations, QUERY_SEARCH_SEARCH_LOCATIONS),
    entry(R::Google, O::SearchCompanies, QUERY_GOOGLE_SEARCH_COMPANIES),
    entry(R::Google, O::GoogleSearch, QUERY_GOOGLE_GOOGLE_SEARCH),
    entry(R::Group, O::GetGroup, QUERY_GROUP_GET_GROUP),
];

const USER_URN: FieldSpec = required_string(
    "user",
    "User URN",
    "LinkedIn User URN (must include prefix, e.g. fsd_profile:ACoAA...)",
);
const ADMIN_COMPANY: FieldSpec = optional_string(
    "company",
    "Company URN",
    "Company URN where the account is admin (e.g. company:1441)",
);
const CONNECTED_AFTER: FieldSpec = FieldSpec::number("connectedAfter", "Connected After")
    .default_str("")
    .describe("Only include entries created after this timestamp");

const MANAGEMENT_USER_SEND_CONNECTION: &[FieldSpec] = &[USER_URN, TIMEOUT];

const MANAGEMENT_USER_GET_CONNECTIONS: &[FieldSpec] = &[CONNECTED_AFTER, count(20), TIMEOUT];

const MANAGEMENT_USER_GET_ME: &[FieldSpec] = &[TIMEOUT];

const MANAGEMENT_CHAT_SEND_MESSAGE: &[FieldSpec] = &[
    USER_URN,
    ADMIN_COMPANY,
    required_string("text", "Message Text", "The message text to send"),
    TIMEOUT,
];

const MANAGEMENT_CHAT_GET_MESSAGES: &[FieldSpec] = &[USER_URN, ADMIN_COMPANY, TIMEOUT];

const MANAGEMENT_CHAT_GET_CONVERSATIONS: &[FieldSpec] = &[
    ADMIN_COMPANY,
    CONNECTED_AFTER,
    count(20),
    optional_string("targetUser", "Target User URN", "Only return the conversation with this user"),
    TIMEOUT,
];

const MANAGEMENT_POST_CREATE_POST: &[FieldSpec] = &[
    required_string("text", "Text", "Post text content"),
    FieldSpec::options("visibility", "Visibility", &["ANYONE", "CONNECTIONS_ONLY"])
        .default_str("ANYONE"),
    FieldSpec::options("commentScope", "Comment Scope", &["ALL", "CONNECTIONS_ONLY", "NONE"])
        .default_str("ALL"),
    TIMEOUT,
];

const MANAGEMENT_POST_CREATE_COMMENT: &[FieldSpec] = &[
    required_string("text", "Text", "Comment text"),
    required_string(
        "urn",
        "Post/Comment URN",
        "URN of the activity or comment to comment on (e.g. \"activity:123\")",
    ),
    TIMEOUT,
];

pub static MANAGEMENT_CATALOG: &[OperationFields] = &[
    entry(R::User, O::SendConnection, MANAGEMENT_USER_SEND_CONNECTION),
    entry(R::User, O::GetConnections, MANAGEMENT_USER_GET_CONNECTIONS),
    entry(R::User, O::GetMe, MANAGEMENT_USER_GET_ME),
    entry(R::Chat, O::SendMessage, MANAGEMENT_CHAT_SEND_MESSAGE),
    entry(R::Chat, O::GetMessages, MANAGEMENT_CHAT_GET_MESSAGES),
    entry(R::Chat, O::GetConversations, MANAGEMENT_CHAT_GET_CONVERSATIONS),
    entry(R::Post, O::CreatePost, MANAGEMENT_POST_CREATE_POST),
    entry(R::Post, O::CreateComment, MANAGEMENT_POST_CREATE_COMMENT),
];
