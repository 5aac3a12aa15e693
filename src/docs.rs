use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use coursehub_core::{EmptyData, PaginationMeta};
use coursehub_models::{
    AdminCreateUserDto, AdminUpdateUserDto, AffectedRowsResponse, Article, ArticleIdsDto,
    ArticleResponse, Author, CategoriesResponse, Category, CategoryResponse, Chapter,
    ChapterDetailResponse, ChapterResponse, Course, CourseDetailResponse, CourseResponse,
    CourseWithAuthor, CreateArticleDto, CreateCategoryDto, CreateChapterDto, CreateCourseDto,
    HomeResponse, LikeToggleResponse, MonthlyUsersResponse, PaginatedArticlesResponse,
    PaginatedCategoriesResponse, PaginatedChaptersResponse, PaginatedCoursesResponse,
    PaginatedUsersResponse, Setting, SettingResponse, SexChartResponse, SexCount, SignInDto,
    SignUpDto, ToggleLikeDto, TokenResponse, UpdateAccountDto, UpdateArticleDto,
    UpdateCategoryDto, UpdateChapterDto, UpdateCourseDto, UpdateSettingDto, UpdateUserInfoDto,
    User, UserMonthCount, UserResponse,
};

use crate::middleware::auth::TOKEN_HEADER;
use crate::modules::health::controller::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health,
        crate::modules::home::controller::home,
        crate::modules::search::controller::search,
        crate::modules::auth::controller::sign_up,
        crate::modules::auth::controller::sign_in,
        crate::modules::auth::controller::admin_sign_in,
        crate::modules::users::controller::get_me,
        crate::modules::users::controller::update_info,
        crate::modules::users::controller::update_account,
        crate::modules::users::admin_controller::get_users,
        crate::modules::users::admin_controller::get_user,
        crate::modules::users::admin_controller::create_user,
        crate::modules::users::admin_controller::update_user,
        crate::modules::likes::controller::toggle_like,
        crate::modules::likes::controller::get_likes,
        crate::modules::categories::controller::get_categories,
        crate::modules::categories::admin_controller::get_categories,
        crate::modules::categories::admin_controller::get_category,
        crate::modules::categories::admin_controller::create_category,
        crate::modules::categories::admin_controller::update_category,
        crate::modules::categories::admin_controller::delete_category,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::admin_controller::get_courses,
        crate::modules::courses::admin_controller::get_course,
        crate::modules::courses::admin_controller::create_course,
        crate::modules::courses::admin_controller::update_course,
        crate::modules::courses::admin_controller::delete_course,
        crate::modules::chapters::controller::get_chapter,
        crate::modules::chapters::admin_controller::get_chapters,
        crate::modules::chapters::admin_controller::get_chapter,
        crate::modules::chapters::admin_controller::create_chapter,
        crate::modules::chapters::admin_controller::update_chapter,
        crate::modules::chapters::admin_controller::delete_chapter,
        crate::modules::articles::controller::get_articles,
        crate::modules::articles::controller::get_article,
        crate::modules::articles::admin_controller::get_articles,
        crate::modules::articles::admin_controller::get_article,
        crate::modules::articles::admin_controller::create_article,
        crate::modules::articles::admin_controller::update_article,
        crate::modules::articles::admin_controller::delete_article,
        crate::modules::articles::admin_controller::delete_articles,
        crate::modules::articles::admin_controller::restore_articles,
        crate::modules::articles::admin_controller::force_delete_articles,
        crate::modules::settings::controller::get_setting,
        crate::modules::settings::controller::admin_get_setting,
        crate::modules::settings::controller::update_setting,
        crate::modules::charts::controller::sex_chart,
        crate::modules::charts::controller::user_chart,
    ),
    components(
        schemas(
            EmptyData,
            PaginationMeta,
            HealthResponse,
            User,
            Author,
            UserResponse,
            PaginatedUsersResponse,
            SignUpDto,
            SignInDto,
            TokenResponse,
            UpdateUserInfoDto,
            UpdateAccountDto,
            AdminCreateUserDto,
            AdminUpdateUserDto,
            Category,
            CategoryResponse,
            CategoriesResponse,
            PaginatedCategoriesResponse,
            CreateCategoryDto,
            UpdateCategoryDto,
            Course,
            CourseWithAuthor,
            CourseResponse,
            CourseDetailResponse,
            PaginatedCoursesResponse,
            CreateCourseDto,
            UpdateCourseDto,
            HomeResponse,
            Chapter,
            ChapterResponse,
            ChapterDetailResponse,
            PaginatedChaptersResponse,
            CreateChapterDto,
            UpdateChapterDto,
            Article,
            ArticleResponse,
            PaginatedArticlesResponse,
            CreateArticleDto,
            UpdateArticleDto,
            ArticleIdsDto,
            AffectedRowsResponse,
            Setting,
            SettingResponse,
            UpdateSettingDto,
            ToggleLikeDto,
            LikeToggleResponse,
            SexCount,
            SexChartResponse,
            UserMonthCount,
            MonthlyUsersResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Home", description = "Homepage feed"),
        (name = "Search", description = "Course search"),
        (name = "Authentication", description = "Sign up and sign in"),
        (name = "Users", description = "Current user profile and account"),
        (name = "Likes", description = "Course likes"),
        (name = "Categories", description = "Public category listing"),
        (name = "Courses", description = "Public course listing and details"),
        (name = "Chapters", description = "Public chapter details"),
        (name = "Articles", description = "Published articles"),
        (name = "Settings", description = "Site settings"),
        (name = "Admin Authentication", description = "Administrator sign in"),
        (name = "Admin Users", description = "User management"),
        (name = "Admin Categories", description = "Category management"),
        (name = "Admin Courses", description = "Course management"),
        (name = "Admin Chapters", description = "Chapter management"),
        (name = "Admin Articles", description = "Article management and trash"),
        (name = "Admin Settings", description = "Site settings management"),
        (name = "Admin Charts", description = "User statistics")
    ),
    info(
        title = "CourseHub API",
        version = "0.1.0",
        description = "REST backend for a course platform built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(TOKEN_HEADER))),
            )
        }
    }
}
