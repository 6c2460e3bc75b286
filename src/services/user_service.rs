use sea_orm::{EntityTrait, PaginatorTrait};

use crate::{
    db::OrmConn,
    dto::users::{UpdateOutcome, UpdateUserRequest, UpdateUserResponse},
    entity::Users,
    error::{AppError, AppResult},
    response::ApiResponse,
    state::AppState,
    validation::Validate,
};

/// Rows whose values already match are left alone, so zero affected rows
/// means either "no such user" or "nothing to change"; the existence check
/// tells them apart.
pub async fn update_user(
    state: &AppState,
    payload: UpdateUserRequest,
) -> AppResult<ApiResponse<UpdateUserResponse>> {
    payload.validate()?;
    let id = payload.user_id;

    let mut conn = state.pool.acquire().await?;
    let result = sqlx::query(
        r#"
        UPDATE users
        SET username = $1, email = $2, phone_no = $3, address = $4
        WHERE id = $5
          AND (username, email, phone_no, address) IS DISTINCT FROM ($1, $2, $3, $4)
        "#,
    )
    .bind(payload.username.as_str())
    .bind(payload.email.as_str())
    .bind(payload.phone_no.as_str())
    .bind(payload.address.as_str())
    .bind(id)
    .execute(&mut *conn)
    .await?;
    drop(conn);

    let outcome = if result.rows_affected() > 0 {
        tracing::info!(user_id = id, "user updated");
        UpdateOutcome::Updated
    } else {
        ensure_user_exists(&state.orm, id).await?;
        tracing::debug!(user_id = id, "user update was a no-op");
        UpdateOutcome::Unchanged
    };

    Ok(ApiResponse::success(outcome.into()))
}

pub async fn ensure_user_exists(orm: &OrmConn, id: i64) -> AppResult<()> {
    let count = Users::find_by_id(id).count(orm).await?;
    if count == 0 {
        return Err(AppError::NotFound("User not found".into()));
    }
    Ok(())
}
