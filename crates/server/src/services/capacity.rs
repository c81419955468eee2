//! Shelf capacity and physical-fit decisions.
//!
//! Every answer is derived from current occupancy at call time; nothing here
//! maintains a running counter. Shelf populations are small (tens of items
//! at most), so the per-call occupancy scan is the simplest correct choice.

use rust_decimal::Decimal;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::shelf::{case_fits, stacked_extent};
use crate::models::{Dimension, FitCheck, PhysicalMedia, Shelf, ShelfCapacity};
use crate::repositories::{MediaCaseProfileRepository, PhysicalMediaRepository, ShelfRepository};

#[derive(Debug, Error)]
pub enum CapacityError {
    #[error("Shelf {0} not found")]
    ShelfNotFound(i64),
    #[error("Physical media {0} not found")]
    MediaNotFound(i64),
    #[error("Shelf {shelf_id} cannot accommodate physical media {media_id}: {reason}")]
    CannotAccommodate {
        shelf_id: i64,
        media_id: i64,
        reason: &'static str,
    },
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Capacity service for shelf space accounting and admission decisions
pub struct CapacityService {
    db: SqlitePool,
}

impl CapacityService {
    /// Create a new capacity service
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Could the item ever sit on an empty version of this shelf?
    pub async fn can_fit_media(
        &self,
        shelf_id: i64,
        media_id: i64,
    ) -> Result<bool, CapacityError> {
        let (shelf, envelope) = self.shelf_envelope(shelf_id).await?;
        let case = self.media_case(media_id).await?;

        Ok(case_fits(&case, &envelope, shelf.orientation))
    }

    /// Sum of the stacking-axis extents of every item on the shelf
    pub async fn used_space(&self, shelf_id: i64) -> Result<Decimal, CapacityError> {
        Ok(self.capacity(shelf_id).await?.used_space)
    }

    /// Shelf extent along the stacking axis minus `used_space`. Negative
    /// when occupants were placed past capacity (e.g. by direct data
    /// manipulation); the negative value is a real signal and is reported
    /// as-is, never clamped.
    pub async fn available_space(&self, shelf_id: i64) -> Result<Decimal, CapacityError> {
        Ok(self.capacity(shelf_id).await?.available_space)
    }

    /// Space accounting summary for one shelf
    pub async fn capacity(&self, shelf_id: i64) -> Result<ShelfCapacity, CapacityError> {
        let (shelf, envelope) = self.shelf_envelope(shelf_id).await?;
        let axis = shelf.stacking_axis();

        let occupants =
            PhysicalMediaRepository::occupant_case_dimensions(&self.db, shelf_id).await?;
        let used_space = stacked_extent(shelf.orientation, &occupants);

        Ok(ShelfCapacity {
            stacking_axis: axis,
            used_space,
            available_space: envelope.axis_size(axis) - used_space,
        })
    }

    /// The real admission decision: physical fit and remaining capacity
    pub async fn can_accommodate(
        &self,
        shelf_id: i64,
        media_id: i64,
    ) -> Result<bool, CapacityError> {
        Ok(self.fit_check(shelf_id, media_id).await?.can_accommodate)
    }

    /// Check an item against a shelf, reporting both the physical-fit and
    /// the capacity verdict
    pub async fn fit_check(
        &self,
        shelf_id: i64,
        media_id: i64,
    ) -> Result<FitCheck, CapacityError> {
        let (shelf, envelope) = self.shelf_envelope(shelf_id).await?;
        let case = self.media_case(media_id).await?;

        // A physically impossible item never reaches the occupancy scan.
        if !case_fits(&case, &envelope, shelf.orientation) {
            return Ok(FitCheck {
                can_fit: false,
                can_accommodate: false,
            });
        }

        let axis = shelf.stacking_axis();
        let occupants =
            PhysicalMediaRepository::occupant_case_dimensions(&self.db, shelf_id).await?;
        let available = envelope.axis_size(axis) - stacked_extent(shelf.orientation, &occupants);

        Ok(FitCheck {
            can_fit: true,
            can_accommodate: case.axis_size(axis) <= available,
        })
    }

    /// Place an item on a shelf, admitting it first.
    ///
    /// The check and the placement run in one transaction so a concurrent
    /// assignment cannot slip in between them.
    pub async fn assign(
        &self,
        media_id: i64,
        shelf_id: i64,
        position_on_shelf: Option<i32>,
    ) -> Result<PhysicalMedia, CapacityError> {
        let mut tx = self.db.begin().await?;

        let (shelf, envelope) =
            ShelfRepository::get_with_profile_with_executor(&mut *tx, shelf_id)
                .await?
                .ok_or(CapacityError::ShelfNotFound(shelf_id))?;
        let case = MediaCaseProfileRepository::get_for_media_with_executor(&mut *tx, media_id)
            .await?
            .ok_or(CapacityError::MediaNotFound(media_id))?;

        if !case_fits(&case.dimension, &envelope, shelf.orientation) {
            return Err(CapacityError::CannotAccommodate {
                shelf_id,
                media_id,
                reason: "the case does not physically fit the shelf",
            });
        }

        let axis = shelf.stacking_axis();
        let occupants = PhysicalMediaRepository::occupant_case_dimensions_excluding(
            &mut *tx, shelf_id, media_id,
        )
        .await?;
        let available = envelope.axis_size(axis) - stacked_extent(shelf.orientation, &occupants);
        if case.dimension.axis_size(axis) > available {
            return Err(CapacityError::CannotAccommodate {
                shelf_id,
                media_id,
                reason: "not enough space left on the shelf",
            });
        }

        PhysicalMediaRepository::assign_with_executor(&mut *tx, media_id, shelf_id, position_on_shelf)
            .await?;
        let media = PhysicalMediaRepository::get_by_id_with_executor(&mut *tx, media_id)
            .await?
            .ok_or(CapacityError::MediaNotFound(media_id))?;

        tx.commit().await?;

        Ok(media)
    }

    /// Load a shelf together with its profile dimensions
    async fn shelf_envelope(&self, shelf_id: i64) -> Result<(Shelf, Dimension), CapacityError> {
        ShelfRepository::get_with_profile(&self.db, shelf_id)
            .await?
            .ok_or(CapacityError::ShelfNotFound(shelf_id))
    }

    /// Load the case dimensions of a physical media item
    async fn media_case(&self, media_id: i64) -> Result<Dimension, CapacityError> {
        let profile = MediaCaseProfileRepository::get_for_media(&self.db, media_id)
            .await?
            .ok_or(CapacityError::MediaNotFound(media_id))?;

        Ok(profile.dimension)
    }
}
