use qazyna_db::models::article::{Article, CreateArticle};
use qazyna_db::models::interesting_tag::CreateInterestingTag;
use qazyna_db::repositories::{ArticleRepo, InterestingTagRepo};
use sqlx::PgPool;

fn sample_article(title: &str) -> CreateArticle {
    CreateArticle {
        title: title.to_string(),
        slug: None,
        description: "Описание".to_string(),
        thumbnail: None,
        content: "Текст статьи".to_string(),
        author: "Айгерим Садыкова".to_string(),
        reading_time_minutes: None,
        is_published: None,
    }
}

fn tag(name: &str) -> CreateInterestingTag {
    CreateInterestingTag {
        name: name.to_string(),
        slug: None,
    }
}

async fn create_article(pool: &PgPool, title: &str) -> Article {
    ArticleRepo::create(pool, &sample_article(title)).await.unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn tag_slug_derived_from_name(pool: PgPool) {
    let created = InterestingTagRepo::create(&pool, &tag("Современное искусство"))
        .await
        .unwrap();
    assert_eq!(created.slug, "sovremennoe-iskusstvo");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_tag_name_is_conflict(pool: PgPool) {
    InterestingTagRepo::create(&pool, &tag("Музыка")).await.unwrap();
    let err = InterestingTagRepo::create(&pool, &tag("Музыка"))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn article_defaults(pool: PgPool) {
    let article = create_article(&pool, "О фонде").await;
    assert_eq!(article.reading_time_minutes, 5, "reading time defaults");
    assert!(article.is_published);
    assert_eq!(article.slug, "o-fonde");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_tags_replaces_full_set(pool: PgPool) {
    let article = create_article(&pool, "О фонде").await;
    let art = InterestingTagRepo::create(&pool, &tag("Искусство")).await.unwrap();
    let music = InterestingTagRepo::create(&pool, &tag("Музыка")).await.unwrap();
    let history = InterestingTagRepo::create(&pool, &tag("История")).await.unwrap();

    ArticleRepo::set_tags(&pool, article.id, &[art.id, music.id])
        .await
        .unwrap();
    let tags = ArticleRepo::tags_for_article(&pool, article.id).await.unwrap();
    assert_eq!(tags.len(), 2);

    // Replacing drops previous assignments.
    ArticleRepo::set_tags(&pool, article.id, &[history.id]).await.unwrap();
    let tags = ArticleRepo::tags_for_article(&pool, article.id).await.unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "История");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_articles_by_tag_slug(pool: PgPool) {
    let tagged = create_article(&pool, "Статья с тегом").await;
    create_article(&pool, "Статья без тега").await;
    let t = InterestingTagRepo::create(&pool, &tag("Искусство")).await.unwrap();
    ArticleRepo::set_tags(&pool, tagged.id, &[t.id]).await.unwrap();

    let articles = ArticleRepo::list_by_tag_slug(&pool, &t.slug).await.unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, tagged.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_article_cascades_join_rows(pool: PgPool) {
    let article = create_article(&pool, "О фонде").await;
    let t = InterestingTagRepo::create(&pool, &tag("Искусство")).await.unwrap();
    ArticleRepo::set_tags(&pool, article.id, &[t.id]).await.unwrap();

    ArticleRepo::delete(&pool, article.id).await.unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM article_tags")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);

    // The tag itself survives.
    assert!(InterestingTagRepo::find_by_id(&pool, t.id).await.unwrap().is_some());
}
