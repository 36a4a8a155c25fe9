//! Entity counts for the admin dashboard cards.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

/// Row counts per entity, as the dashboard overview displays them.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct EntityCounts {
    pub categories: i64,
    pub volunteers: i64,
    pub buildings: i64,
    pub images: i64,
}

pub struct StatsRepo;

impl StatsRepo {
    /// Count rows of each admin entity in one round trip.
    pub async fn entity_counts(pool: &PgPool) -> Result<EntityCounts, sqlx::Error> {
        sqlx::query_as::<_, EntityCounts>(
            "SELECT
                (SELECT COUNT(*) FROM categories)      AS categories,
                (SELECT COUNT(*) FROM volunteers)      AS volunteers,
                (SELECT COUNT(*) FROM buildings)       AS buildings,
                (SELECT COUNT(*) FROM category_images) AS images",
        )
        .fetch_one(pool)
        .await
    }
}
