//! # CourseHub Models
//!
//! Domain models and DTOs for the CourseHub API.
//!
//! Rows are decoded with `sqlx::FromRow` using runtime-checked queries; every
//! JSON shape is camelCase. Writable entities have one DTO per operation that
//! lists exactly the accepted fields, so unknown request fields never reach
//! SQL.

pub mod articles;
pub mod categories;
pub mod chapters;
pub mod charts;
pub mod courses;
pub mod likes;
pub mod settings;
pub mod users;

pub use articles::{
    AffectedRowsResponse, Article, ArticleFilterParams, ArticleIdsDto, ArticleResponse,
    CreateArticleDto, PaginatedArticlesResponse, UpdateArticleDto,
};

pub use categories::{
    CategoriesResponse, Category, CategoryFilterParams, CategoryResponse, CreateCategoryDto,
    PaginatedCategoriesResponse, UpdateCategoryDto,
};

pub use chapters::{
    Chapter, ChapterDetailResponse, ChapterFilterParams, ChapterResponse, CreateChapterDto,
    PaginatedChaptersResponse, UpdateChapterDto,
};

pub use charts::{MonthlyUsersResponse, SexChartResponse, SexCount, UserMonthCount};

pub use courses::{
    AdminCourseFilterParams, Course, CourseDetailResponse, CourseResponse, CourseWithAuthor,
    CoursesByCategoryParams, CreateCourseDto, HomeResponse, PaginatedCoursesResponse,
    SearchParams, UpdateCourseDto,
};

pub use likes::{LikeToggleResponse, ToggleLikeDto};

pub use settings::{Setting, SettingResponse, UpdateSettingDto};

pub use users::{
    AdminCreateUserDto, AdminUpdateUserDto, Author, InvalidRole, PaginatedUsersResponse,
    SignInDto, SignUpDto, TokenResponse, UpdateAccountDto, UpdateUserInfoDto, User,
    UserCredentials, UserFilterParams, UserResponse, UserRole,
};
