use chrono::NaiveDate;
use qazyna_db::models::project::{CreateProject, ProjectFilter, UpdateProject};
use qazyna_db::repositories::ProjectRepo;
use sqlx::PgPool;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_project(title: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        slug: None,
        short_description: "Краткое описание".to_string(),
        full_description: None,
        status: None,
        start_date: None,
        end_date: None,
        location: "Астана".to_string(),
        main_image: None,
        is_featured: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_derives_slug_and_defaults(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &sample_project("Молодые таланты"))
        .await
        .unwrap();

    assert_eq!(project.slug, "molodye-talanty");
    assert_eq!(project.status, "current", "status defaults");
    assert!(!project.is_featured);
    assert_eq!(project.status_label(), "Текущий проект");
    assert_eq!(project.detail_path(), "/projects/molodye-talanty/");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duration_permanent(pool: PgPool) {
    let mut input = sample_project("Постоянная экспозиция");
    input.status = Some("permanent".to_string());
    input.start_date = Some(date(2010, 4, 1));
    let project = ProjectRepo::create(&pool, &input).await.unwrap();
    assert_eq!(project.duration(), "С 2010 года");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duration_completed_with_both_dates(pool: PgPool) {
    let mut input = sample_project("Фестиваль");
    input.status = Some("completed".to_string());
    input.start_date = Some(date(2015, 1, 1));
    input.end_date = Some(date(2020, 12, 31));
    let project = ProjectRepo::create(&pool, &input).await.unwrap();
    assert_eq!(project.duration(), "2015-2020");
    assert_eq!(project.status_label(), "Завершен");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duration_current_with_start_only(pool: PgPool) {
    let mut input = sample_project("Новый сезон");
    input.start_date = Some(date(2022, 9, 1));
    let project = ProjectRepo::create(&pool, &input).await.unwrap();
    assert_eq!(project.duration(), "С 2022");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duration_empty_without_dates(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &sample_project("Без дат"))
        .await
        .unwrap();
    assert_eq!(project.duration(), "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn slug_immutable_on_update(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &sample_project("Молодые таланты"))
        .await
        .unwrap();

    let updated = ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            title: Some("Переименованный проект".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.slug, "molodye-talanty");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_slug_is_conflict(pool: PgPool) {
    ProjectRepo::create(&pool, &sample_project("Молодые таланты"))
        .await
        .unwrap();
    let err = ProjectRepo::create(&pool, &sample_project("Молодые таланты"))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn featured_projects_listed_first(pool: PgPool) {
    let mut plain = sample_project("Обычный проект");
    plain.start_date = Some(date(2024, 1, 1));
    ProjectRepo::create(&pool, &plain).await.unwrap();

    let mut featured = sample_project("Рекомендуемый проект");
    featured.is_featured = Some(true);
    featured.start_date = Some(date(2020, 1, 1));
    ProjectRepo::create(&pool, &featured).await.unwrap();

    let projects = ProjectRepo::list(&pool, &ProjectFilter::default())
        .await
        .unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].title, "Рекомендуемый проект");
}
