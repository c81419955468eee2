use sqlx::SqlitePool;

use crate::repositories::MediaCaseProfileRepository;

/// Seed the canonical disc-case profiles on first startup. The measurements
/// are the published envelope sizes of the standard retail cases.
pub async fn seed_case_profiles(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if MediaCaseProfileRepository::count(pool).await? > 0 {
        return Ok(());
    }

    tracing::debug!("Seeding canonical media case profiles...");

    sqlx::query(
        r#"
        INSERT INTO media_case_profile (media_format, description, width, height, depth)
        VALUES
            ('bluray', 'Blu-ray (US Standard)', '128.50', '148.00', '12.00'),
            ('bluray', 'Blu-ray (UK Standard)', '148.00', '129.00', '14.00'),
            ('dvd', 'DVD (Standard)', '130.00', '184.00', '14.00')
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Seeded standard media case profiles");
    Ok(())
}
