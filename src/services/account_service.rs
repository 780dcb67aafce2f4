use crate::data::database::Database;
use crate::data::models::order::{Order, OrderItem};
use crate::data::models::product::Product;
use crate::data::models::user::{NewUser, UpdateUser, User, UserProfile};
use crate::data::repos::implementors::order_repo::OrderRepo;
use crate::data::repos::implementors::user_repo::UserRepo;
use crate::security::auth::PasswordService;
use crate::services::errors::AccountServiceError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

pub const ORDER_HISTORY_LIMIT: i64 = 10;
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password_confirm: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), AccountServiceError> {
        let mut invalid = Vec::new();

        let username = self.username.trim();
        if username.is_empty()
            || username.chars().count() > 150
            || !username
                .chars()
                .all(|c| c.is_alphanumeric() || "@.+-_".contains(c))
        {
            invalid.push("username".to_string());
        }
        if !self.email.contains('@') {
            invalid.push("email".to_string());
        }
        if self.first_name.trim().is_empty() || self.first_name.chars().count() > 30 {
            invalid.push("first_name".to_string());
        }
        if self.last_name.trim().is_empty() || self.last_name.chars().count() > 30 {
            invalid.push("last_name".to_string());
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            invalid.push("password".to_string());
        } else if self.password != self.password_confirm {
            invalid.push("password_confirm".to_string());
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(AccountServiceError::InvalidForm(invalid))
        }
    }
}

/// Changes a signed-in user may make to their own account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<(), AccountServiceError> {
        let mut invalid = Vec::new();

        let email = self.email.trim();
        if !email.contains('@') || email.chars().count() > 254 {
            invalid.push("email".to_string());
        }
        if self.first_name.chars().count() > 30 {
            invalid.push("first_name".to_string());
        }
        if self.last_name.chars().count() > 30 {
            invalid.push("last_name".to_string());
        }
        if self.phone.trim().chars().count() > 20 {
            invalid.push("phone".to_string());
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(AccountServiceError::InvalidForm(invalid))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordChangeForm {
    pub old_password: String,
    pub new_password: String,
    pub new_password_confirm: String,
}

impl PasswordChangeForm {
    pub fn validate(&self) -> Result<(), AccountServiceError> {
        let mut invalid = Vec::new();

        if self.old_password.is_empty() {
            invalid.push("old_password".to_string());
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            invalid.push("new_password".to_string());
        } else if self.new_password != self.new_password_confirm {
            invalid.push("new_password_confirm".to_string());
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(AccountServiceError::InvalidForm(invalid))
        }
    }
}

pub type OrderLines = Vec<(OrderItem, Product)>;
pub type OrderHistory = Vec<(Order, OrderLines)>;

pub struct AccountService {
    users: UserRepo,
    orders: OrderRepo,
    passwords: PasswordService,
}

impl AccountService {
    pub fn new(db: &Database) -> Self {
        AccountService {
            users: UserRepo::new(db.clone()),
            orders: OrderRepo::new(db.clone()),
            passwords: PasswordService::new(),
        }
    }

    /// Creates the user and its profile in one transaction.
    pub async fn register(
        &self,
        form: &RegistrationForm,
    ) -> Result<(User, UserProfile), AccountServiceError> {
        form.validate()?;

        let hash = self
            .passwords
            .hash_password(&form.password)
            .await
            .map_err(|_| AccountServiceError::HashingFailed)?;

        let new_user = NewUser {
            username: form.username.trim(),
            email: form.email.trim(),
            first_name: form.first_name.trim(),
            last_name: form.last_name.trim(),
            password_hash: &hash,
        };

        match self.users.create_with_profile(new_user, "", "").await {
            Ok((user, profile)) => {
                tracing::info!(user_id = user.id, "User registered");
                Ok((user, profile))
            }
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(AccountServiceError::UsernameTaken)
            }
            Err(e) => {
                tracing::error!("Failed to register user: {}", e);
                Err(AccountServiceError::DatabaseError)
            }
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<User, AccountServiceError> {
        let user = self
            .users
            .get_by_username(username.trim())
            .await
            .map_err(|_| AccountServiceError::DatabaseError)?
            .ok_or(AccountServiceError::InvalidCredentials)?;

        match self.passwords.verify_password(password, &user.password_hash).await {
            Ok(true) => Ok(user),
            Ok(false) => Err(AccountServiceError::InvalidCredentials),
            Err(e) => {
                tracing::warn!(user_id = user.id, "Password check failed: {}", e);
                Err(AccountServiceError::InvalidCredentials)
            }
        }
    }

    /// Profile plus the user's most recent orders, matched by email.
    pub async fn profile(
        &self,
        user: &User,
    ) -> Result<(Option<UserProfile>, OrderHistory), AccountServiceError> {
        let profile = self
            .users
            .get_profile(user.id)
            .await
            .map_err(|_| AccountServiceError::DatabaseError)?;

        let orders = self
            .order_history(&user.email, Some(ORDER_HISTORY_LIMIT))
            .await?;
        Ok((profile, orders))
    }

    /// The user a verified token names. A deleted account is `UserNotFound`.
    pub async fn current_user(&self, user_id: i32) -> Result<User, AccountServiceError> {
        self.users
            .get_by_id(user_id)
            .await
            .map_err(|_| AccountServiceError::DatabaseError)?
            .ok_or(AccountServiceError::UserNotFound)
    }

    /// Orders placed with `email`, newest first.
    pub async fn order_history(
        &self,
        email: &str,
        limit: Option<i64>,
    ) -> Result<OrderHistory, AccountServiceError> {
        if email.trim().is_empty() {
            return Ok(Vec::new());
        }

        let orders = self
            .orders
            .get_by_email(email.trim(), limit)
            .await
            .map_err(|_| AccountServiceError::DatabaseError)?;

        self.orders
            .attach_items(orders)
            .await
            .map_err(|_| AccountServiceError::DatabaseError)
    }

    /// One order with its lines, only if it was placed with `email`.
    pub async fn order_detail(
        &self,
        email: &str,
        order_id: i32,
    ) -> Result<(Order, OrderLines), AccountServiceError> {
        if email.trim().is_empty() {
            return Err(AccountServiceError::OrderNotFound);
        }

        let order = self
            .orders
            .get_for_email(order_id, email.trim())
            .await
            .map_err(|_| AccountServiceError::DatabaseError)?
            .ok_or(AccountServiceError::OrderNotFound)?;

        self.orders
            .attach_items(vec![order])
            .await
            .map_err(|_| AccountServiceError::DatabaseError)?
            .pop()
            .ok_or(AccountServiceError::OrderNotFound)
    }

    pub async fn update_profile(
        &self,
        user_id: i32,
        form: &ProfileForm,
    ) -> Result<(User, UserProfile), AccountServiceError> {
        form.validate()?;

        let details = UpdateUser {
            email: form.email.trim(),
            first_name: form.first_name.trim(),
            last_name: form.last_name.trim(),
        };

        match self
            .users
            .update_with_profile(user_id, details, form.phone.trim(), form.address.trim())
            .await
        {
            Ok(updated) => {
                tracing::info!(user_id, "Profile updated");
                Ok(updated)
            }
            Err(DieselError::NotFound) => Err(AccountServiceError::UserNotFound),
            Err(e) => {
                tracing::error!("Failed to update profile: {}", e);
                Err(AccountServiceError::DatabaseError)
            }
        }
    }

    /// Replaces the password after checking the current one.
    pub async fn change_password(
        &self,
        user_id: i32,
        form: &PasswordChangeForm,
    ) -> Result<(), AccountServiceError> {
        form.validate()?;

        let user = self.current_user(user_id).await?;
        match self
            .passwords
            .verify_password(&form.old_password, &user.password_hash)
            .await
        {
            Ok(true) => {}
            Ok(false) | Err(_) => {
                return Err(AccountServiceError::InvalidForm(vec![
                    "old_password".to_string(),
                ]));
            }
        }

        let hash = self
            .passwords
            .hash_password(&form.new_password)
            .await
            .map_err(|_| AccountServiceError::HashingFailed)?;

        self.users
            .set_password_hash(user.id, &hash)
            .await
            .map_err(|_| AccountServiceError::DatabaseError)?;

        tracing::info!(user_id = user.id, "Password changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm {
            username: "builder_01".into(),
            email: "builder@example.com".into(),
            first_name: "Ivan".into(),
            last_name: "Petrov".into(),
            password: "concrete-mix".into(),
            password_confirm: "concrete-mix".into(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert_eq!(form().validate(), Ok(()));
    }

    #[test]
    fn mismatched_passwords_are_reported() {
        let mut f = form();
        f.password_confirm = "something-else".into();
        assert_eq!(
            f.validate(),
            Err(AccountServiceError::InvalidForm(vec!["password_confirm".into()]))
        );
    }

    #[test]
    fn profile_form_checks_email_and_lengths() {
        let form = ProfileForm {
            email: "no-at-sign".into(),
            first_name: "И".repeat(31),
            phone: "+7 (900) 000-00-00 ext. 12".into(),
            ..ProfileForm::default()
        };
        assert_eq!(
            form.validate(),
            Err(AccountServiceError::InvalidForm(vec![
                "email".into(),
                "first_name".into(),
                "phone".into(),
            ]))
        );

        let blank_names = ProfileForm {
            email: "ivan@example.com".into(),
            ..ProfileForm::default()
        };
        assert_eq!(blank_names.validate(), Ok(()));
    }

    #[test]
    fn new_password_rules_mirror_registration() {
        let short = PasswordChangeForm {
            old_password: "concrete-mix".into(),
            new_password: "short".into(),
            new_password_confirm: "short".into(),
        };
        assert_eq!(
            short.validate(),
            Err(AccountServiceError::InvalidForm(vec!["new_password".into()]))
        );

        let mismatch = PasswordChangeForm {
            old_password: String::new(),
            new_password: "rebar-steel".into(),
            new_password_confirm: "rebar-steal".into(),
        };
        assert_eq!(
            mismatch.validate(),
            Err(AccountServiceError::InvalidForm(vec![
                "old_password".into(),
                "new_password_confirm".into(),
            ]))
        );
    }

    #[test]
    fn every_bad_field_is_listed() {
        let f = RegistrationForm {
            username: "bad name!".into(),
            email: "nope".into(),
            password: "short".into(),
            ..RegistrationForm::default()
        };
        assert_eq!(
            f.validate(),
            Err(AccountServiceError::InvalidForm(vec![
                "username".into(),
                "email".into(),
                "first_name".into(),
                "last_name".into(),
                "password".into(),
            ]))
        );
    }
}
