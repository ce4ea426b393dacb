//! User repository for database operations.

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tally_core::ledger::{LedgerError, User, UserRepository as UserRepoTrait};
use tally_shared::types::UserId;

use crate::entities::users;

/// Postgres user store.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: users::Model) -> User {
    User {
        id: UserId::from_uuid(model.id),
        name: model.name,
        email: model.email,
    }
}

impl UserRepoTrait for UserRepository {
    async fn create_user(&self, name: &str, email: &str) -> Result<User, LedgerError> {
        let now = Utc::now().into();
        let user = users::ActiveModel {
            id: Set(UserId::new().into_inner()),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = user.insert(&self.db).await.map_err(LedgerError::storage)?;
        Ok(to_domain(model))
    }

    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, LedgerError> {
        let model = users::Entity::find_by_id(user_id.into_inner())
            .one(&self.db)
            .await
            .map_err(LedgerError::storage)?;

        Ok(model.map(to_domain))
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        name: &str,
        email: &str,
    ) -> Result<(), LedgerError> {
        let result = users::Entity::update_many()
            .col_expr(users::Column::Name, Expr::value(name))
            .col_expr(users::Column::Email, Expr::value(email))
            .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(users::Column::Id.eq(user_id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(LedgerError::storage)?;

        if result.rows_affected == 0 {
            return Err(LedgerError::UserNotFound(user_id));
        }
        Ok(())
    }

    async fn get_email(&self, user_id: UserId) -> Result<Option<String>, LedgerError> {
        Ok(self.find_by_id(user_id).await?.map(|user| user.email))
    }
}

