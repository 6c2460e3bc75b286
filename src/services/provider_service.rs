use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, Set, SqlErr};

use crate::{
    dto::providers::{LoginRequest, LoginResponse, SignupRequest},
    entity::providers::{
        ActiveModel as ProviderActive, Column as ProviderCol, Entity as Providers,
        Model as ProviderModel,
    },
    error::{AppError, AppResult},
    models::ProviderInfo,
    password::{hash_password, verify_password},
    response::{ApiResponse, Empty},
    state::AppState,
    validation::Validate,
};

const DUPLICATE_PROVIDER: &str = "User with this email or phone already exists";

// "not found" and "wrong password" stay distinct messages for client
// compatibility even though it reveals which emails are registered.
pub async fn login_provider(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    payload.validate()?;
    let LoginRequest { email, password } = payload;
    tracing::debug!(email = %email, "provider login attempt");

    let provider = Providers::find()
        .filter(ProviderCol::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?;

    let provider = match provider {
        Some(p) => p,
        None => {
            tracing::info!(email = %email, "provider not found");
            return Err(AppError::Auth("Provider not found".into()));
        }
    };

    if !verify_password(&password, &provider.password)? {
        tracing::info!(email = %email, "invalid password");
        return Err(AppError::Auth("Invalid password".into()));
    }

    tracing::info!(provider_id = provider.id, "provider logged in");
    Ok(ApiResponse::success(LoginResponse {
        provider_info: provider_info_from_entity(provider),
    }))
}

pub async fn register_provider(
    state: &AppState,
    payload: SignupRequest,
) -> AppResult<ApiResponse<Empty>> {
    payload.validate()?;
    let SignupRequest {
        name,
        email,
        phone,
        service,
        password,
    } = payload;

    let existing = Providers::find()
        .filter(
            Condition::any()
                .add(ProviderCol::Email.eq(email.as_str()))
                .add(ProviderCol::Phone.eq(phone.as_str())),
        )
        .one(&state.orm)
        .await?;

    if existing.is_some() {
        tracing::info!(email = %email, phone = %phone, "provider already exists");
        return Err(AppError::Conflict(DUPLICATE_PROVIDER.into()));
    }

    let password_hash = hash_password(&password)?;

    // A concurrent signup can slip in between the lookup and the insert; the
    // unique indexes catch it.
    let provider = ProviderActive {
        id: NotSet,
        name: Set(name),
        email: Set(email),
        phone: Set(phone),
        service: Set(service),
        password: Set(password_hash),
    }
    .insert(&state.orm)
    .await
    .map_err(|err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict(DUPLICATE_PROVIDER.into())
        }
        _ => AppError::OrmError(err),
    })?;

    tracing::info!(provider_id = provider.id, "provider registered");
    Ok(ApiResponse::message_only())
}

fn provider_info_from_entity(model: ProviderModel) -> ProviderInfo {
    ProviderInfo {
        id: model.id,
        name: model.name,
        email: model.email,
        phone: model.phone,
        service: model.service,
    }
}
