use super::{BodyField as F, Route, RoutingTable};
use crate::types::Operation as O;
use crate::types::Resource as R;
use crate::types::{ResourceOperation, Surface};

const fn route(resource: R, operation: O, path: &'static str, fields: &'static [F]) -> Route {
    Route {
        selection: ResourceOperation::new(resource, operation),
        path,
        fields,
    }
}

const TIMEOUT: F = F::param("timeout", "timeout");
const COUNT: F = F::param("count", "count");
const KEYWORDS: F = F::param("keywords", "keywords");
const URN: F = F::param("urn", "urn");

const fn extra(key: &'static str) -> F {
    F::param(key, key).if_non_empty()
}

const USER_SEARCH: &[F] = &[
    KEYWORDS,
    COUNT,
    TIMEOUT,
    extra("first_name"),
    extra("last_name"),
    extra("title"),
    extra("company_keywords"),
    extra("school_keywords"),
    extra("current_company"),
    extra("past_company"),
    extra("location"),
    extra("industry"),
    extra("education"),
];

const USER_GET_PROFILE: &[F] = &[
    F::param("user", "user"),
    F::param("with_experience", "withExperience"),
    F::param("with_education", "withEducation"),
    F::param("with_skills", "withSkills"),
];

const URN_COUNT_TIMEOUT: &[F] = &[URN, COUNT, TIMEOUT];

const EMAIL_GET_USER: &[F] = &[F::param("email", "email"), COUNT, TIMEOUT];

const POST_GET_COMMENTS: &[F] = &[URN, F::param("sort", "sort"), COUNT, TIMEOUT];

const COMPANY_GET: &[F] = &[F::param("company", "company"), TIMEOUT];

const COMPANY_GET_EMPLOYEES: &[F] = &[
    F::split("companies", "companies"),
    KEYWORDS,
    F::param("first_name", "firstName"),
    F::param("last_name", "lastName"),
    COUNT,
    TIMEOUT,
];

const SALES_NAVIGATOR_SEARCH: &[F] = &[
    KEYWORDS,
    COUNT,
    TIMEOUT,
    F::split("first_names", "first_names").if_non_empty(),
    F::split("last_names", "last_names").if_non_empty(),
    F::split("current_titles", "current_titles").if_non_empty(),
    extra("location"),
    extra("industry"),
    extra("current_companies"),
    extra("past_companies"),
];

const SEARCH_JOBS: &[F] = &[
    KEYWORDS,
    COUNT,
    TIMEOUT,
    extra("sort"),
    extra("experience_level"),
    extra("job_types"),
    extra("work_types"),
    extra("industry"),
    F::scalar_or_list("company", "company").if_non_empty(),
    extra("location"),
    extra("from_date"),
    extra("to_date"),
];

const SEARCH_COMPANIES: &[F] = &[
    KEYWORDS,
    COUNT,
    TIMEOUT,
    extra("location"),
    extra("industry"),
    extra("employee_count"),
];

const NAME_COUNT_TIMEOUT: &[F] = &[F::param("name", "name"), COUNT, TIMEOUT];

const GOOGLE_SEARCH_COMPANIES: &[F] = &[
    F::split("keywords", "keywords"),
    F::param("with_urn", "withUrn"),
    F::param("count_per_keyword", "countPerKeyword"),
    TIMEOUT,
];

const GOOGLE_SEARCH: &[F] = &[F::param("query", "query"), COUNT, TIMEOUT];

const GROUP_GET: &[F] = &[F::param("group", "group"), TIMEOUT];

pub static QUERY_ROUTES: RoutingTable = RoutingTable {
    surface: Surface::Query,
    seed: &[],
    routes: &[
        route(R::User, O::Search, "/api/linkedin/search/users", USER_SEARCH),
        route(R::User, O::GetProfile, "/api/linkedin/user", USER_GET_PROFILE),
        route(R::User, O::GetPosts, "/api/linkedin/user/posts", URN_COUNT_TIMEOUT),
        route(R::User, O::GetReactions, "/api/linkedin/user/reactions", URN_COUNT_TIMEOUT),
        route(R::Email, O::GetUserByEmail, "/api/linkedin/email/user", EMAIL_GET_USER),
        route(R::Post, O::GetPostComments, "/api/linkedin/post/comments", POST_GET_COMMENTS),
        route(R::Post, O::GetPostReposts, "/api/linkedin/post/reposts", URN_COUNT_TIMEOUT),
        route(R::Company, O::GetCompany, "/api/linkedin/company", COMPANY_GET),
        route(
            R::Company,
            O::GetCompanyEmployees,
            "/api/linkedin/company/employees",
            COMPANY_GET_EMPLOYEES,
        ),
        route(R::Company, O::GetCompanyPosts, "/api/linkedin/company/posts", URN_COUNT_TIMEOUT),
        route(
            R::Search,
            O::SalesNavigatorSearch,
            "/api/linkedin/sn_search/users",
            SALES_NAVIGATOR_SEARCH,
        ),
        route(R::Search, O::SearchJobs, "/api/linkedin/search/jobs", SEARCH_JOBS),
        route(R::Search, O::SearchCompanies, "/api/linkedin/search/companies", SEARCH_COMPANIES),
        route(R::Search, O::SearchIndustries, "/api/linkedin/search/industries", NAME_COUNT_TIMEOUT),
        route(R::Search, O::SearchLocations, "/api/linkedin/search/locations", NAME_COUNT_TIMEOUT),
        route(R::Google, O::SearchCompanies, "/api/linkedin/google/company", GOOGLE_SEARCH_COMPANIES),
        route(R::Google, O::GoogleSearch, "/api/google/search", GOOGLE_SEARCH),
        route(R::Group, O::GetGroup, "/api/linkedin/group", GROUP_GET),
    ],
};

const MANAGEMENT_SEED: &[F] = &[TIMEOUT, F::account_id("account_id")];

const ADMIN_COMPANY: F = F::param("company", "company").if_non_empty();
const CONNECTED_AFTER: F = F::param("connected_after", "connectedAfter").if_non_empty();
const USER: F = F::param("user", "user");
const TEXT: F = F::param("text", "text");
const TARGET_USER: F = F::param("target_user", "targetUser").if_non_empty();
const VISIBILITY: F = F::param("visibility", "visibility");
const COMMENT_SCOPE: F = F::param("comment_scope", "commentScope");

pub static MANAGEMENT_ROUTES: RoutingTable = RoutingTable {
    surface: Surface::Management,
    seed: MANAGEMENT_SEED,
    routes: &[
        route(R::User, O::SendConnection, "/api/linkedin/management/user/connection", &[USER]),
        route(
            R::User,
            O::GetConnections,
            "/api/linkedin/management/user/connections",
            &[CONNECTED_AFTER, COUNT],
        ),
        route(R::User, O::GetMe, "/api/linkedin/management/me", &[]),
        route(
            R::Chat,
            O::SendMessage,
            "/api/linkedin/management/chat/message",
            &[ADMIN_COMPANY, USER, TEXT],
        ),
        route(
            R::Chat,
            O::GetMessages,
            "/api/linkedin/management/chat/messages",
            &[ADMIN_COMPANY, USER],
        ),
        route(
            R::Chat,
            O::GetConversations,
            "/api/linkedin/management/conversations",
            &[ADMIN_COMPANY, CONNECTED_AFTER, COUNT, TARGET_USER],
        ),
        route(
            R::Post,
            O::CreatePost,
            "/api/linkedin/management/post",
            &[TEXT, VISIBILITY, COMMENT_SCOPE],
        ),
        route(R::Post, O::CreateComment, "/api/linkedin/management/post/comment", &[TEXT, URN]),
    ],
};
