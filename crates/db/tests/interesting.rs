use qazyna_db::models::interesting::InterestingItem;
use qazyna_db::models::music::CreateMusicTrack;
use qazyna_db::models::video::{CreateVideo, UpdateVideo};
use qazyna_db::repositories::{MusicRepo, VideoRepo};
use qazyna_db::DbError;
use sqlx::PgPool;

fn sample_video(title: &str) -> CreateVideo {
    CreateVideo {
        title: title.to_string(),
        slug: None,
        description: "Описание".to_string(),
        thumbnail: None,
        video_file: Some("interesting/videos/kontsert.mp4".to_string()),
        duration_seconds: Some(420),
        is_published: None,
    }
}

fn sample_track(title: &str) -> CreateMusicTrack {
    CreateMusicTrack {
        title: title.to_string(),
        slug: None,
        description: "Описание".to_string(),
        thumbnail: None,
        audio_file: Some("interesting/music/kyui.mp3".to_string()),
        duration_seconds: Some(180),
        artist: Some("Курмангазы".to_string()),
        is_published: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn video_create_and_detail_path(pool: PgPool) {
    let video = VideoRepo::create(&pool, &sample_video("Гала-концерт"))
        .await
        .unwrap();

    assert_eq!(video.slug, "gala-kontsert");
    assert_eq!(video.views, 0);
    assert!(video.is_published);
    assert_eq!(video.detail_path(), "/interesting/video/gala-kontsert/");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_video_extension_rejected(pool: PgPool) {
    let mut input = sample_video("Вирус");
    input.video_file = Some("interesting/videos/virus.exe".to_string());
    let err = VideoRepo::create(&pool, &input).await.unwrap_err();
    assert!(matches!(err, DbError::Core(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_audio_extension_rejected(pool: PgPool) {
    let mut input = sample_track("Трек");
    input.audio_file = Some("interesting/music/track.mp4".to_string());
    let err = MusicRepo::create(&pool, &input).await.unwrap_err();
    assert!(matches!(err, DbError::Core(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn same_slug_allowed_across_variant_tables(pool: PgPool) {
    // Uniqueness is scoped per table, not across the family.
    let video = VideoRepo::create(&pool, &sample_video("Наследие"))
        .await
        .unwrap();
    let track = MusicRepo::create(&pool, &sample_track("Наследие"))
        .await
        .unwrap();

    assert_eq!(video.slug, track.slug);
    assert_ne!(video.detail_path(), track.detail_path());
    assert_eq!(video.detail_path(), "/interesting/video/nasledie/");
    assert_eq!(track.detail_path(), "/interesting/music/nasledie/");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_slug_within_table_is_conflict(pool: PgPool) {
    VideoRepo::create(&pool, &sample_video("Наследие"))
        .await
        .unwrap();
    let err = VideoRepo::create(&pool, &sample_video("Наследие"))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn increment_views(pool: PgPool) {
    let video = VideoRepo::create(&pool, &sample_video("Гала-концерт"))
        .await
        .unwrap();

    assert_eq!(VideoRepo::increment_views(&pool, video.id).await.unwrap(), 1);
    assert_eq!(VideoRepo::increment_views(&pool, video.id).await.unwrap(), 2);

    let reloaded = VideoRepo::find_by_id(&pool, video.id).await.unwrap().unwrap();
    assert_eq!(reloaded.views, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_keeps_slug_and_checks_extension(pool: PgPool) {
    let video = VideoRepo::create(&pool, &sample_video("Гала-концерт"))
        .await
        .unwrap();

    let err = VideoRepo::update(
        &pool,
        video.id,
        &UpdateVideo {
            video_file: Some("clip.wav".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DbError::Core(_)));

    let updated = VideoRepo::update(
        &pool,
        video.id,
        &UpdateVideo {
            title: Some("Другое название".to_string()),
            video_file: Some("clip.mov".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.slug, "gala-kontsert");
    assert_eq!(updated.video_file.as_deref(), Some("clip.mov"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn music_create_with_artist(pool: PgPool) {
    let track = MusicRepo::create(&pool, &sample_track("Сарыарқа"))
        .await
        .unwrap();
    assert_eq!(track.slug, "saryarqa");
    assert_eq!(track.artist.as_deref(), Some("Курмангазы"));
    assert_eq!(track.duration_seconds, Some(180));
}
