use crate::data::database::Database;
use crate::data::models::user::{NewUser, NewUserProfile, UpdateUser, User, UserProfile};
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct UserRepo {
    db: Database,
}

impl UserRepo {
    pub fn new(db: Database) -> Self {
        UserRepo { db }
    }

    pub async fn get_by_id(&self, user: i32) -> Result<Option<User>, result::Error> {
        use crate::data::models::schema::users::dsl::users;

        let mut conn = self.db.connection().await?;

        users
            .find(user)
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    pub async fn get_by_username(
        &self,
        username_query: &str,
    ) -> Result<Option<User>, result::Error> {
        use crate::data::models::schema::users::dsl::{username, users};

        let mut conn = self.db.connection().await?;

        users
            .filter(username.eq(username_query))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    pub async fn get_profile(&self, user: i32) -> Result<Option<UserProfile>, result::Error> {
        use crate::data::models::schema::user_profiles::dsl::{user_id, user_profiles};

        let mut conn = self.db.connection().await?;

        user_profiles
            .filter(user_id.eq(user))
            .select(UserProfile::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    /// Creates the user and their empty profile together. A taken username
    /// surfaces as a `UniqueViolation`.
    pub async fn create_with_profile(
        &self,
        new_user: NewUser<'_>,
        phone: &str,
        address: &str,
    ) -> Result<(User, UserProfile), result::Error> {
        use crate::data::models::schema::user_profiles::dsl::user_profiles;
        use crate::data::models::schema::users::dsl::users;

        let mut conn = self.db.connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                let user: User = diesel::insert_into(users)
                    .values(&new_user)
                    .returning(User::as_returning())
                    .get_result(connection)
                    .await?;

                let profile: UserProfile = diesel::insert_into(user_profiles)
                    .values(&NewUserProfile {
                        user_id: user.id,
                        phone,
                        address,
                    })
                    .returning(UserProfile::as_returning())
                    .get_result(connection)
                    .await?;

                Ok((user, profile))
            }
            .scope_boxed()
        })
        .await
    }

    /// Updates the user's names and email and writes the profile, creating
    /// it when the user has none yet.
    pub async fn update_with_profile(
        &self,
        user: i32,
        form: UpdateUser<'_>,
        phone_value: &str,
        address_value: &str,
    ) -> Result<(User, UserProfile), result::Error> {
        use crate::data::models::schema::user_profiles::dsl::{user_id, user_profiles};
        use crate::data::models::schema::users::dsl::users;

        let mut conn = self.db.connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                let updated: User = diesel::update(users.find(user))
                    .set(&form)
                    .returning(User::as_returning())
                    .get_result(connection)
                    .await?;

                let profile_form = NewUserProfile {
                    user_id: user,
                    phone: phone_value,
                    address: address_value,
                };
                let profile: UserProfile = diesel::insert_into(user_profiles)
                    .values(&profile_form)
                    .on_conflict(user_id)
                    .do_update()
                    .set(&profile_form)
                    .returning(UserProfile::as_returning())
                    .get_result(connection)
                    .await?;

                Ok((updated, profile))
            }
            .scope_boxed()
        })
        .await
    }

    pub async fn set_password_hash(&self, user: i32, hash: &str) -> Result<(), result::Error> {
        use crate::data::models::schema::users::dsl::{password_hash, users};

        let mut conn = self.db.connection().await?;

        diesel::update(users.find(user))
            .set(password_hash.eq(hash))
            .execute(&mut conn)
            .await?;
        Ok(())
    }
}
