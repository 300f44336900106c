use crate::database::DbError;
use crate::database::photo::{Photo, PhotoOrigin, PhotoWithContext, PhotoWithUploader};
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{Executor, QueryBuilder, Sqlite};

/// Filters for the photo search, combined with the caller's access scope.
#[derive(Debug, Default, Clone)]
pub struct PhotoSearchParams {
    pub text: Option<String>,
    pub tags: Vec<String>,
    pub album_id: Option<i64>,
    pub taken_after: Option<DateTime<Utc>>,
    pub taken_before: Option<DateTime<Utc>>,
}

pub struct PhotoStore;

impl PhotoStore {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        conn: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
        uploaded_by: i64,
        filename: &str,
        description: Option<&str>,
        tags: Json<Vec<String>>,
        date_taken: DateTime<Utc>,
        file_size: i64,
    ) -> Result<Photo, DbError> {
        let photo = sqlx::query_as::<_, Photo>(
            "INSERT INTO photo (album_id, uploaded_by, filename, description, tags,
                                date_taken, file_size, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id, album_id, uploaded_by, filename, description, tags,
                       date_taken, file_size, created_at",
        )
        .bind(album_id)
        .bind(uploaded_by)
        .bind(filename)
        .bind(description)
        .bind(tags)
        .bind(date_taken)
        .bind(file_size)
        .bind(Utc::now())
        .fetch_one(conn)
        .await?;
        Ok(photo)
    }

    pub async fn find_by_id(
        conn: impl Executor<'_, Database = Sqlite>,
        photo_id: i64,
    ) -> Result<Option<Photo>, DbError> {
        let photo = sqlx::query_as::<_, Photo>(
            "SELECT id, album_id, uploaded_by, filename, description, tags,
                    date_taken, file_size, created_at
             FROM photo WHERE id = ?",
        )
        .bind(photo_id)
        .fetch_optional(conn)
        .await?;
        Ok(photo)
    }

    /// The minimal row the access resolver needs: album and uploader.
    pub async fn find_origin(
        conn: impl Executor<'_, Database = Sqlite>,
        photo_id: i64,
    ) -> Result<Option<PhotoOrigin>, DbError> {
        let origin = sqlx::query_as::<_, PhotoOrigin>(
            "SELECT id, album_id, uploaded_by FROM photo WHERE id = ?",
        )
        .bind(photo_id)
        .fetch_optional(conn)
        .await?;
        Ok(origin)
    }

    pub async fn list_by_album(
        conn: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
    ) -> Result<Vec<PhotoWithUploader>, DbError> {
        let photos = sqlx::query_as::<_, PhotoWithUploader>(
            "SELECT p.id, p.album_id, p.uploaded_by, p.filename, p.description, p.tags,
                    p.date_taken, p.file_size, p.created_at, u.name AS uploader_name,
                    COUNT(c.id) AS comment_count
             FROM photo p
             JOIN app_user u ON u.id = p.uploaded_by
             LEFT JOIN comment c ON c.photo_id = p.id
             WHERE p.album_id = ?
             GROUP BY p.id
             ORDER BY p.date_taken DESC, p.id DESC",
        )
        .bind(album_id)
        .fetch_all(conn)
        .await?;
        Ok(photos)
    }

    pub async fn last_in_album(
        conn: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
    ) -> Result<Option<Photo>, DbError> {
        let photo = sqlx::query_as::<_, Photo>(
            "SELECT id, album_id, uploaded_by, filename, description, tags,
                    date_taken, file_size, created_at
             FROM photo WHERE album_id = ?
             ORDER BY date_taken DESC, id DESC
             LIMIT 1",
        )
        .bind(album_id)
        .fetch_optional(conn)
        .await?;
        Ok(photo)
    }

    /// Every photo the user may view: own albums, public albums and
    /// albums shared with them.
    pub async fn list_accessible(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PhotoWithContext>, DbError> {
        let photos = sqlx::query_as::<_, PhotoWithContext>(
            "SELECT p.id, p.album_id, p.uploaded_by, p.filename, p.description, p.tags,
                    p.date_taken, p.file_size, p.created_at,
                    a.title AS album_title, u.name AS uploader_name
             FROM photo p
             JOIN album a ON a.id = p.album_id
             JOIN app_user u ON u.id = p.uploaded_by
             WHERE (a.owner_id = ?
                OR a.is_public = 1
                OR EXISTS (SELECT 1 FROM share s WHERE s.album_id = a.id AND s.user_id = ?))
             ORDER BY p.created_at DESC, p.id DESC
             LIMIT ? OFFSET ?",
        )
        .bind(user_id)
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(conn)
        .await?;
        Ok(photos)
    }

    /// Search within the user's accessible photos, stacking optional
    /// filters onto the same access predicate as [`Self::list_accessible`].
    pub async fn search(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
        params: &PhotoSearchParams,
    ) -> Result<Vec<PhotoWithContext>, DbError> {
        let mut builder = QueryBuilder::<Sqlite>::new(
            "SELECT p.id, p.album_id, p.uploaded_by, p.filename, p.description, p.tags,
                    p.date_taken, p.file_size, p.created_at,
                    a.title AS album_title, u.name AS uploader_name
             FROM photo p
             JOIN album a ON a.id = p.album_id
             JOIN app_user u ON u.id = p.uploaded_by
             WHERE (a.owner_id = ",
        );
        builder.push_bind(user_id);
        builder.push(" OR a.is_public = 1 OR EXISTS (SELECT 1 FROM share s WHERE s.album_id = a.id AND s.user_id = ");
        builder.push_bind(user_id);
        builder.push("))");

        if let Some(text) = &params.text {
            builder.push(" AND p.description LIKE ");
            builder.push_bind(format!("%{text}%"));
        }
        // A photo matches when it carries any of the requested tags.
        if !params.tags.is_empty() {
            builder.push(" AND (");
            let mut first = true;
            for tag in &params.tags {
                if !first {
                    builder.push(" OR ");
                }
                builder.push("p.tags LIKE ");
                builder.push_bind(format!("%\"{tag}\"%"));
                first = false;
            }
            builder.push(")");
        }
        if let Some(album_id) = params.album_id {
            builder.push(" AND p.album_id = ");
            builder.push_bind(album_id);
        }
        if let Some(after) = params.taken_after {
            builder.push(" AND p.date_taken >= ");
            builder.push_bind(after);
        }
        if let Some(before) = params.taken_before {
            builder.push(" AND p.date_taken <= ");
            builder.push_bind(before);
        }

        builder.push(" ORDER BY p.date_taken DESC, p.id DESC");

        let photos = builder
            .build_query_as::<PhotoWithContext>()
            .fetch_all(conn)
            .await?;
        Ok(photos)
    }

    pub async fn list_filenames_by_album(
        conn: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
    ) -> Result<Vec<String>, DbError> {
        let filenames = sqlx::query_scalar::<_, String>(
            "SELECT filename FROM photo WHERE album_id = ?",
        )
        .bind(album_id)
        .fetch_all(conn)
        .await?;
        Ok(filenames)
    }

    pub async fn delete(
        conn: impl Executor<'_, Database = Sqlite>,
        photo_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM photo WHERE id = ?")
            .bind(photo_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_by_album(
        conn: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM photo WHERE album_id = ?")
            .bind(album_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}
