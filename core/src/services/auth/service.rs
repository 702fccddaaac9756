//! Main authentication service implementation

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::{User, UserRole};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::PasswordHasher;

/// Authentication service for registration, login and session renewal
pub struct AuthService<U, T, P>
where
    U: UserRepository,
    T: TokenRepository,
    P: PasswordHasher,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT issuance and refresh token state
    token_service: Arc<TokenService<T>>,
    /// Password hashing capability
    password_hasher: Arc<P>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, T, P> AuthService<U, T, P>
where
    U: UserRepository,
    T: TokenRepository,
    P: PasswordHasher,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for JWT token management
    /// * `password_hasher` - Password hashing capability
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService<T>>,
        password_hasher: Arc<P>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            password_hasher,
            config,
        }
    }

    /// Register a new user account
    ///
    /// This method:
    /// 1. Validates the username, email and password against the policy
    /// 2. Rejects usernames and emails that are already taken
    /// 3. Hashes the password and persists the user with the default role
    ///
    /// # Arguments
    ///
    /// * `username` - Desired username
    /// * `email` - Account email address
    /// * `password` - Plaintext password, never stored
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The created account
    /// * `Err(DomainError)` - Validation failed or the account exists
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<User> {
        let username = username.trim();
        let email = email.trim();

        self.validate_username(username)?;
        self.validate_email(email)?;
        self.validate_password(password)?;

        if self.user_repository.exists_by_username(username).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }
        if self.user_repository.exists_by_email(email).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.password_hasher.hash(password)?;
        let user = self
            .user_repository
            .create(User::new(username, email, password_hash))
            .await?;

        info!(user_id = %user.id, "registered new user");
        Ok(user)
    }

    /// Authenticate a user and start a session
    ///
    /// This method:
    /// 1. Resolves the account by email (when the identifier contains `@`)
    ///    or by username
    /// 2. Verifies the password against the stored hash
    /// 3. Issues an access/refresh token pair, persisting the refresh token
    ///
    /// Unknown accounts and wrong passwords produce the same error, so the
    /// response does not reveal which identifiers are registered.
    ///
    /// # Arguments
    ///
    /// * `identifier` - Username or email address
    /// * `password` - Plaintext password
    /// * `client_ip` - Client IP recorded on the refresh token entry
    ///
    /// # Returns
    ///
    /// * `Ok((User, TokenPair))` - The account and its new session tokens
    /// * `Err(DomainError::Auth(AuthError::InvalidCredentials))` - Lookup or
    ///   password check failed
    pub async fn login(
        &self,
        identifier: &str,
        password: &str,
        client_ip: &str,
    ) -> DomainResult<(User, TokenPair)> {
        let identifier = identifier.trim();

        let user = if identifier.contains('@') {
            self.user_repository.find_by_email(identifier).await?
        } else {
            self.user_repository.find_by_username(identifier).await?
        };

        let user = match user {
            Some(user) => user,
            None => {
                warn!(identifier, "login rejected: unknown account");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.password_hasher.verify(password, &user.password_hash)? {
            warn!(user_id = %user.id, "login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let pair = self.token_service.issue_pair(&user, client_ip).await?;
        info!(user_id = %user.id, "user logged in");

        Ok((user, pair))
    }

    /// Exchange a refresh token for a new token pair
    ///
    /// This method:
    /// 1. Validates the presented token against the refresh signing context
    /// 2. Requires a subject claim
    /// 3. Looks the token up in the store
    /// 4. Requires the store entry to be active; a token that was already
    ///    rotated away fails here, which is what blocks replay of stolen
    ///    refresh tokens
    /// 5. Loads the owning user; a deleted account ends the session
    /// 6. Issues the new pair, persisting the new refresh token entry
    /// 7. Revokes the old entry and chains it to the new token
    /// 8. Returns the new pair
    ///
    /// The new pair exists in the store before the old token is revoked; a
    /// crash between the two steps leaves two active sessions rather than
    /// none. A revocation failure in step 7 is returned to the caller, who
    /// may retry the whole call with the old token.
    ///
    /// # Arguments
    ///
    /// * `presented_token` - The refresh token string from the client
    /// * `client_ip` - Client IP recorded on both the new entry and the
    ///   revocation
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The replacement session tokens
    /// * `Err(DomainError)` - Which check or write failed
    pub async fn refresh_token(
        &self,
        presented_token: &str,
        client_ip: &str,
    ) -> DomainResult<TokenPair> {
        let record = match self.token_service.check_refresh_token(presented_token).await {
            Ok(record) => record,
            Err(err) => {
                warn!(reason = %err, "refresh token rejected");
                return Err(err);
            }
        };

        let user = self
            .user_repository
            .find_by_id(record.user_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %record.user_id, "refresh token rejected: user no longer exists");
                DomainError::Auth(AuthError::UserNotFound)
            })?;

        let new_pair = self.token_service.issue_pair(&user, client_ip).await?;

        self.token_service
            .revoke_refresh_token(presented_token, client_ip, Some(&new_pair.refresh_token))
            .await?;

        info!(user_id = %user.id, "refresh token rotated");
        Ok(new_pair)
    }

    /// End a session by revoking its refresh token
    ///
    /// The presented token goes through the same checks as a rotation
    /// (signature, subject, store lookup, activity) and is then revoked
    /// without a successor. Access tokens already issued stay valid until
    /// they expire.
    ///
    /// # Arguments
    ///
    /// * `presented_token` - The refresh token string from the client
    /// * `client_ip` - Client IP recorded on the revocation
    pub async fn logout(&self, presented_token: &str, client_ip: &str) -> DomainResult<()> {
        let record = match self.token_service.check_refresh_token(presented_token).await {
            Ok(record) => record,
            Err(err) => {
                warn!(reason = %err, "logout rejected");
                return Err(err);
            }
        };

        self.token_service
            .revoke_refresh_token(presented_token, client_ip, None)
            .await?;

        info!(user_id = %record.user_id, "user logged out");
        Ok(())
    }

    /// Assign a role to an existing user
    ///
    /// # Arguments
    ///
    /// * `user_id` - The account to change
    /// * `role` - The role to assign
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Role was updated
    /// * `Err(DomainError::NotFound)` - No such user
    pub async fn assign_role(&self, user_id: Uuid, role: UserRole) -> DomainResult<()> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: format!("user {}", user_id),
            })?;

        self.user_repository.update_role(user_id, role).await?;
        info!(user_id = %user_id, role = %role, "role assigned");
        Ok(())
    }

    /// Remove a role from a user, resetting the account to the default role
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Role was removed
    /// * `Err(DomainError::Validation)` - The user does not hold `role`
    /// * `Err(DomainError::NotFound)` - No such user
    pub async fn remove_role(&self, user_id: Uuid, role: UserRole) -> DomainResult<()> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: format!("user {}", user_id),
            })?;

        if user.role != role {
            return Err(DomainError::Validation {
                message: format!("user does not hold role '{}'", role),
            });
        }

        self.user_repository
            .update_role(user_id, UserRole::default())
            .await?;
        info!(user_id = %user_id, role = %role, "role removed");
        Ok(())
    }

    /// List the roles held by a user
    ///
    /// An account holds exactly one role, so the list has one element; it is
    /// a list because the route reports membership, not a field.
    pub async fn user_roles(&self, user_id: Uuid) -> DomainResult<Vec<UserRole>> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: format!("user {}", user_id),
            })?;

        Ok(vec![user.role])
    }

    fn validate_username(&self, username: &str) -> DomainResult<()> {
        if username.is_empty() {
            return Err(DomainError::Validation {
                message: "username must not be empty".to_string(),
            });
        }
        if username.len() > self.config.username_max_length {
            return Err(DomainError::Validation {
                message: format!(
                    "username must be at most {} characters",
                    self.config.username_max_length
                ),
            });
        }
        Ok(())
    }

    fn validate_email(&self, email: &str) -> DomainResult<()> {
        // Full syntax checking lives in the request layer; this guards the
        // service when called directly.
        let well_formed = email
            .split_once('@')
            .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
            .unwrap_or(false);

        if !well_formed {
            return Err(DomainError::Validation {
                message: "email address is not valid".to_string(),
            });
        }
        Ok(())
    }

    fn validate_password(&self, password: &str) -> DomainResult<()> {
        if password.len() < self.config.password_min_length {
            return Err(DomainError::Validation {
                message: format!(
                    "password must be at least {} characters",
                    self.config.password_min_length
                ),
            });
        }
        if self.config.password_require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(DomainError::Validation {
                message: "password must contain at least one digit".to_string(),
            });
        }
        Ok(())
    }
}
