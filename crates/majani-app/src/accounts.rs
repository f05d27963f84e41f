// Rust guideline compliant 2026-10-12

//! User accounts: registration, password and one-time code login, profile
//! edits.
//!
//! Users and pending codes live behind the [`UserStore`] and [`OtpStore`]
//! traits; the current time comes from a [`Clock`].

use crate::clock::Clock;
use crate::error::{AppError, AuthError, Result};
use crate::otp::{generate_code, OtpPolicy, OtpRecord, OtpStore};
use chrono::NaiveDate;
use majani_core::identity::{self, USER_PREFIX};
use majani_core::models::{DEFAULT_TRUST_SCORE, MAX_TRUST_SCORE};
use majani_core::{Gender, User};
use rand::Rng;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Minimum password length in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

const HASH_SCHEME: &str = "sha256";

/// Storage for registered users.
pub trait UserStore {
    /// Looks a user up by phone number.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn find_by_phone(&self, phone: &str) -> Result<Option<User>>;

    /// Looks a user up by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Adds a new user.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID or phone is already taken or the store fails.
    fn insert(&mut self, user: User) -> Result<()>;

    /// Replaces an existing user with the same ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or the store fails.
    fn update(&mut self, user: User) -> Result<()>;
}

/// Process-local user store keyed by ID.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: BTreeMap<String, User>,
}

impl InMemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if no user is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserStore for InMemoryUserStore {
    fn find_by_phone(&self, phone: &str) -> Result<Option<User>> {
        Ok(self.users.values().find(|u| u.phone == phone).cloned())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users.get(id).cloned())
    }

    fn insert(&mut self, user: User) -> Result<()> {
        user.validate()?;
        if self.users.contains_key(&user.id) {
            return Err(AppError::InvalidInput(format!(
                "User ID {} already exists",
                user.id
            )));
        }
        if self.users.values().any(|u| u.phone == user.phone) {
            return Err(AuthError::PhoneTaken(user.phone).into());
        }
        self.users.insert(user.id.clone(), user);
        Ok(())
    }

    fn update(&mut self, user: User) -> Result<()> {
        user.validate()?;
        match self.users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user;
                Ok(())
            }
            None => Err(majani_core::Error::NotFound(user.id).into()),
        }
    }
}

/// Returns true if `phone` is an Iranian mobile number: `09` and nine digits.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 11 && phone.starts_with("09") && phone.bytes().all(|b| b.is_ascii_digit())
}

fn check_phone(phone: &str) -> Result<()> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(AuthError::InvalidPhone(phone.to_string()).into())
    }
}

/// Hashes `password` with a random salt.
///
/// The result has the form `sha256$<salt hex>$<digest hex>`.
pub fn hash_password<R: Rng + ?Sized>(password: &str, rng: &mut R) -> String {
    let salt: [u8; 16] = rng.gen();
    let salt = to_hex(&salt);
    let digest = salted_digest(&salt, password);
    format!("{}${}${}", HASH_SCHEME, salt, digest)
}

/// Checks `password` against a hash produced by [`hash_password`].
#[must_use]
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.splitn(3, '$');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(HASH_SCHEME), Some(salt), Some(digest)) => salted_digest(salt, password) == digest,
        _ => false,
    }
}

fn salted_digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    to_hex(&hasher.finalize())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Sign-up form.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    /// Full name.
    pub name: String,
    /// Mobile number.
    pub phone: String,
    /// Chosen password.
    pub password: String,
    /// Password typed a second time.
    pub password_confirmation: String,
    /// City label.
    pub city: String,
    /// Province label.
    pub province: Option<String>,
    /// Avatar image reference; a generated one is used when absent.
    pub avatar: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Self-reported gender.
    pub gender: Option<Gender>,
    /// Date of birth.
    pub birth_date: Option<NaiveDate>,
    /// Short address.
    pub address: Option<String>,
    /// Whether the terms of use were accepted.
    pub accepted_terms: bool,
}

impl Registration {
    fn validate(&self) -> Result<()> {
        check_phone(&self.phone)?;

        if self.name.trim().is_empty() {
            return Err(invalid_field("Name is required"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(invalid_field(&format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        if self.password != self.password_confirmation {
            return Err(invalid_field("Passwords do not match"));
        }
        if self.city.trim().is_empty() {
            return Err(invalid_field("City is required"));
        }
        if !self.accepted_terms {
            return Err(invalid_field("Terms of use must be accepted"));
        }
        Ok(())
    }
}

/// Partial profile edit; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    /// New name.
    pub name: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New province.
    pub province: Option<String>,
    /// New avatar.
    pub avatar: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New gender.
    pub gender: Option<Gender>,
    /// New date of birth.
    pub birth_date: Option<NaiveDate>,
    /// New address.
    pub address: Option<String>,
    /// New biography.
    pub bio: Option<String>,
}

/// Result of a successful code verification.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeLogin {
    /// The phone belongs to a registered user, now logged in.
    Existing(User),
    /// The phone is verified but unregistered; registration comes next.
    NewUser {
        /// The verified phone.
        phone: String,
    },
}

fn invalid_field(message: &str) -> AppError {
    AuthError::InvalidField(message.to_string()).into()
}

/// Account service over injected stores and clock.
pub struct Accounts<U, O, C> {
    users: U,
    codes: O,
    clock: C,
    policy: OtpPolicy,
}

impl<U: UserStore, O: OtpStore, C: Clock> Accounts<U, O, C> {
    /// Creates the service.
    pub fn new(users: U, codes: O, clock: C, policy: OtpPolicy) -> Self {
        Self {
            users,
            codes,
            clock,
            policy,
        }
    }

    /// The user store.
    pub fn users(&self) -> &U {
        &self.users
    }

    /// Returns true if a user is registered with `phone`.
    ///
    /// # Errors
    ///
    /// Returns an error if the phone is malformed or the store fails.
    pub fn is_registered(&self, phone: &str) -> Result<bool> {
        check_phone(phone)?;
        Ok(self.users.find_by_phone(phone)?.is_some())
    }

    /// Issues a fresh one-time code for `phone` and returns it for delivery.
    ///
    /// Reissuing while a code is live keeps its failed attempt count, so
    /// a locked code stays locked until it expires.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The phone is malformed
    /// - The live code is locked after too many wrong guesses
    /// - The code store fails
    pub fn request_code<R: Rng + ?Sized>(&mut self, phone: &str, rng: &mut R) -> Result<String> {
        check_phone(phone)?;
        let now = self.clock.now();

        let carried = match self.codes.find_by_phone(phone)? {
            Some(existing) if existing.is_live(now) => {
                if existing.failed_attempts >= self.policy.max_attempts {
                    warn!(phone = %mask(phone), "code request rate limited");
                    return Err(AuthError::TooManyAttempts {
                        retry_after_secs: (existing.expires_at - now).num_seconds(),
                    }
                    .into());
                }
                existing.failed_attempts
            }
            _ => 0,
        };

        let code = generate_code(rng);
        self.codes.upsert(OtpRecord {
            phone: phone.to_string(),
            code: code.clone(),
            expires_at: now + self.policy.ttl,
            failed_attempts: carried,
        })?;

        info!(phone = %mask(phone), "issued login code");
        Ok(code)
    }

    /// Verifies a one-time code.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No code was issued for the phone
    /// - The code has expired or is locked
    /// - The code does not match
    pub fn verify_code(&mut self, phone: &str, code: &str) -> Result<CodeLogin> {
        check_phone(phone)?;
        let now = self.clock.now();

        let mut record = self
            .codes
            .find_by_phone(phone)?
            .ok_or_else(|| AuthError::NoPendingCode(phone.to_string()))?;

        if !record.is_live(now) {
            self.codes.remove(phone)?;
            return Err(AuthError::CodeExpired.into());
        }

        if record.failed_attempts >= self.policy.max_attempts {
            return Err(AuthError::TooManyAttempts {
                retry_after_secs: (record.expires_at - now).num_seconds(),
            }
            .into());
        }

        if record.code != code.trim() {
            record.failed_attempts += 1;
            debug!(phone = %mask(phone), attempts = record.failed_attempts, "wrong login code");
            self.codes.upsert(record)?;
            return Err(AuthError::InvalidCode.into());
        }

        self.codes.remove(phone)?;
        info!(phone = %mask(phone), "login code verified");

        match self.users.find_by_phone(phone)? {
            Some(mut user) => {
                user.last_active = now;
                self.users.update(user.clone())?;
                Ok(CodeLogin::Existing(user))
            }
            None => Ok(CodeLogin::NewUser {
                phone: phone.to_string(),
            }),
        }
    }

    /// Logs in with phone and password.
    ///
    /// # Errors
    ///
    /// Returns an error if the phone is unknown or the password is wrong.
    pub fn login(&mut self, phone: &str, password: &str) -> Result<User> {
        check_phone(phone)?;
        let mut user = self
            .users
            .find_by_phone(phone)?
            .ok_or_else(|| AuthError::UnknownPhone(phone.to_string()))?;

        let matches = user
            .password_hash
            .as_deref()
            .is_some_and(|hash| verify_password(password, hash));
        if !matches {
            warn!(user = %user.id, "wrong password");
            return Err(AuthError::WrongPassword.into());
        }

        user.last_active = self.clock.now();
        self.users.update(user.clone())?;
        info!(user = %user.id, "password login");
        Ok(user)
    }

    /// Registers a new user.
    ///
    /// New users start with a neutral trust score and zero counters.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is invalid, the phone is taken, or the
    /// store fails.
    pub fn register<R: Rng + ?Sized>(&mut self, form: Registration, rng: &mut R) -> Result<User> {
        form.validate()?;
        if self.users.find_by_phone(&form.phone)?.is_some() {
            return Err(AuthError::PhoneTaken(form.phone).into());
        }

        let now = self.clock.now();
        let timestamp = now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp());
        let mut nonce = 0;
        let id = loop {
            let candidate = identity::generate_id(USER_PREFIX, &[&form.phone], timestamp, nonce);
            if self.users.find_by_id(&candidate)?.is_none() {
                break candidate;
            }
            nonce += 1;
        };

        let name = form.name.trim().to_string();
        let avatar = form.avatar.unwrap_or_else(|| default_avatar(&name));
        let user = User {
            id,
            name,
            phone: form.phone,
            password_hash: Some(hash_password(&form.password, rng)),
            city: form.city.trim().to_string(),
            province: form.province,
            avatar,
            email: form.email,
            gender: form.gender,
            birth_date: form.birth_date,
            address: form.address,
            bio: None,
            joined_at: now,
            last_active: now,
            donated_count: 0,
            received_count: 0,
            trust_score: DEFAULT_TRUST_SCORE,
            is_admin: false,
        };

        self.users.insert(user.clone())?;
        info!(user = %user.id, "registered user");
        Ok(user)
    }

    /// Applies a partial profile edit.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is missing or a new value is invalid.
    pub fn update_profile(&mut self, user_id: &str, update: ProfileUpdate) -> Result<User> {
        let mut user = self.require_user(user_id)?;

        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(invalid_field("Name is required"));
            }
            user.name = name.trim().to_string();
        }
        if let Some(city) = update.city {
            if city.trim().is_empty() {
                return Err(invalid_field("City is required"));
            }
            user.city = city.trim().to_string();
        }
        if let Some(avatar) = update.avatar {
            user.avatar = avatar;
        }
        user.province = update.province.or(user.province);
        user.email = update.email.or(user.email);
        user.gender = update.gender.or(user.gender);
        user.birth_date = update.birth_date.or(user.birth_date);
        user.address = update.address.or(user.address);
        user.bio = update.bio.or(user.bio);

        self.users.update(user.clone())?;
        debug!(user = %user.id, "profile updated");
        Ok(user)
    }

    /// Sets a user's trust score.
    ///
    /// # Errors
    ///
    /// Returns an error if the score exceeds 100 or the user is missing.
    pub fn set_trust_score(&mut self, user_id: &str, score: u8) -> Result<User> {
        if score > MAX_TRUST_SCORE {
            return Err(invalid_field(&format!(
                "Trust score must be 0-{}, got {}",
                MAX_TRUST_SCORE, score
            )));
        }
        let mut user = self.require_user(user_id)?;
        user.trust_score = score;
        self.users.update(user.clone())?;
        Ok(user)
    }

    fn require_user(&self, user_id: &str) -> Result<User> {
        self.users
            .find_by_id(user_id)?
            .ok_or_else(|| majani_core::Error::NotFound(user_id.to_string()).into())
    }
}

/// Generated initials avatar.
fn default_avatar(name: &str) -> String {
    let encoded: String = name
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() {
                char::from(b).to_string()
            } else {
                format!("%{:02X}", b)
            }
        })
        .collect();
    format!(
        "https://ui-avatars.com/api/?name={}&background=random",
        encoded
    )
}

/// Keeps the last four digits of a phone for logs.
fn mask(phone: &str) -> String {
    let tail = phone.get(phone.len().saturating_sub(4)..).unwrap_or("");
    format!("***{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::ErrorCode;
    use crate::otp::InMemoryOtpStore;
    use chrono::{Duration, TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PHONE: &str = "09123456789";

    type TestAccounts<'c> = Accounts<InMemoryUserStore, InMemoryOtpStore, &'c FixedClock>;

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap())
    }

    fn accounts(clock: &FixedClock) -> TestAccounts<'_> {
        Accounts::new(
            InMemoryUserStore::new(),
            InMemoryOtpStore::new(),
            clock,
            OtpPolicy::default(),
        )
    }

    fn form() -> Registration {
        Registration {
            name: "Sara Jalali".to_string(),
            phone: PHONE.to_string(),
            password: "secret1".to_string(),
            password_confirmation: "secret1".to_string(),
            city: "Tehran".to_string(),
            accepted_terms: true,
            ..Registration::default()
        }
    }

    fn code(err: AppError) -> ErrorCode {
        err.code()
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("09123456789"));
        assert!(!is_valid_phone("9123456789"));
        assert!(!is_valid_phone("0912345678"));
        assert!(!is_valid_phone("08123456789"));
        assert!(!is_valid_phone("0912345678a"));
        assert!(!is_valid_phone("۰۹۱۲۳۴۵۶۷۸۹"));
    }

    #[test]
    fn test_password_hash_roundtrip_and_salt() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = hash_password("secret1", &mut rng);
        let b = hash_password("secret1", &mut rng);
        assert_ne!(a, b, "salts must differ");
        assert!(verify_password("secret1", &a));
        assert!(!verify_password("secret2", &a));
        assert!(!verify_password("secret1", "hashed_secret1_secure"));
    }

    #[test]
    fn test_register_defaults() {
        let clock = clock();
        let mut accounts = accounts(&clock);
        let mut rng = StdRng::seed_from_u64(2);

        let user = accounts.register(form(), &mut rng).unwrap();
        assert!(user.id.starts_with("usr-"));
        assert_eq!(user.trust_score, DEFAULT_TRUST_SCORE);
        assert_eq!(user.donated_count, 0);
        assert_eq!(user.received_count, 0);
        assert!(!user.is_admin);
        assert_eq!(user.joined_at, clock.now());
        assert!(user.avatar.contains("Sara%20Jalali"));
        assert_eq!(accounts.users().len(), 1);
    }

    #[test]
    fn test_register_field_validation() {
        let clock = clock();
        let mut accounts = accounts(&clock);
        let mut rng = StdRng::seed_from_u64(3);

        let cases = [
            Registration {
                name: "  ".to_string(),
                ..form()
            },
            Registration {
                password: "abc".to_string(),
                password_confirmation: "abc".to_string(),
                ..form()
            },
            Registration {
                password_confirmation: "secret2".to_string(),
                ..form()
            },
            Registration {
                city: String::new(),
                ..form()
            },
            Registration {
                accepted_terms: false,
                ..form()
            },
            Registration {
                phone: "12345".to_string(),
                ..form()
            },
        ];
        for case in cases {
            let err = accounts.register(case, &mut rng).unwrap_err();
            assert_eq!(code(err), ErrorCode::ValidationError);
        }
        assert!(accounts.users().is_empty());
    }

    #[test]
    fn test_register_duplicate_phone() {
        let clock = clock();
        let mut accounts = accounts(&clock);
        let mut rng = StdRng::seed_from_u64(4);
        accounts.register(form(), &mut rng).unwrap();
        let err = accounts.register(form(), &mut rng).unwrap_err();
        assert_eq!(code(err), ErrorCode::Conflict);
    }

    #[test]
    fn test_password_login() {
        let clock = clock();
        let mut accounts = accounts(&clock);
        let mut rng = StdRng::seed_from_u64(5);
        accounts.register(form(), &mut rng).unwrap();

        clock.advance(Duration::hours(3));
        let user = accounts.login(PHONE, "secret1").unwrap();
        assert_eq!(user.last_active, clock.now());

        let err = accounts.login(PHONE, "wrong-pass").unwrap_err();
        assert_eq!(code(err), ErrorCode::AuthFailed);

        let err = accounts.login("09999999999", "secret1").unwrap_err();
        assert_eq!(code(err), ErrorCode::NotFound);
    }

    #[test]
    fn test_issued_code_is_the_checked_code() {
        let clock = clock();
        let mut accounts = accounts(&clock);
        let mut rng = StdRng::seed_from_u64(6);

        let issued = accounts.request_code(PHONE, &mut rng).unwrap();
        let outcome = accounts.verify_code(PHONE, &issued).unwrap();
        assert_eq!(
            outcome,
            CodeLogin::NewUser {
                phone: PHONE.to_string()
            }
        );

        let err = accounts.verify_code(PHONE, &issued).unwrap_err();
        assert_eq!(code(err), ErrorCode::AuthFailed, "codes are single use");
    }

    #[test]
    fn test_code_login_for_registered_user() {
        let clock = clock();
        let mut accounts = accounts(&clock);
        let mut rng = StdRng::seed_from_u64(7);
        let registered = accounts.register(form(), &mut rng).unwrap();

        let issued = accounts.request_code(PHONE, &mut rng).unwrap();
        match accounts.verify_code(PHONE, &issued).unwrap() {
            CodeLogin::Existing(user) => assert_eq!(user.id, registered.id),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_code_expires() {
        let clock = clock();
        let mut accounts = accounts(&clock);
        let mut rng = StdRng::seed_from_u64(8);

        let issued = accounts.request_code(PHONE, &mut rng).unwrap();
        clock.advance(Duration::seconds(121));
        let err = accounts.verify_code(PHONE, &issued).unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::CodeExpired)));
    }

    #[test]
    fn test_wrong_codes_lock_until_expiry() {
        let clock = clock();
        let mut accounts = accounts(&clock);
        let mut rng = StdRng::seed_from_u64(9);

        let issued = accounts.request_code(PHONE, &mut rng).unwrap();
        let wrong = if issued == "1000" { "1001" } else { "1000" };
        for _ in 0..3 {
            let err = accounts.verify_code(PHONE, wrong).unwrap_err();
            assert!(matches!(err, AppError::Auth(AuthError::InvalidCode)));
        }

        let err = accounts.verify_code(PHONE, &issued).unwrap_err();
        assert_eq!(code(err), ErrorCode::RateLimited);

        let err = accounts.request_code(PHONE, &mut rng).unwrap_err();
        assert_eq!(code(err), ErrorCode::RateLimited);

        clock.advance(Duration::seconds(121));
        let fresh = accounts.request_code(PHONE, &mut rng).unwrap();
        assert!(accounts.verify_code(PHONE, &fresh).is_ok());
    }

    #[test]
    fn test_reissue_keeps_failed_attempts() {
        let clock = clock();
        let mut accounts = accounts(&clock);
        let mut rng = StdRng::seed_from_u64(10);

        let issued = accounts.request_code(PHONE, &mut rng).unwrap();
        let wrong = if issued == "1000" { "1001" } else { "1000" };
        accounts.verify_code(PHONE, wrong).unwrap_err();
        accounts.verify_code(PHONE, wrong).unwrap_err();

        let reissued = accounts.request_code(PHONE, &mut rng).unwrap();
        let wrong = if reissued == "1000" { "1001" } else { "1000" };
        accounts.verify_code(PHONE, wrong).unwrap_err();
        let err = accounts.verify_code(PHONE, &reissued).unwrap_err();
        assert_eq!(code(err), ErrorCode::RateLimited);
    }

    #[test]
    fn test_verify_without_code() {
        let clock = clock();
        let mut accounts = accounts(&clock);
        let err = accounts.verify_code(PHONE, "1234").unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::NoPendingCode(_))));
    }

    #[test]
    fn test_update_profile_partial() {
        let clock = clock();
        let mut accounts = accounts(&clock);
        let mut rng = StdRng::seed_from_u64(11);
        let user = accounts.register(form(), &mut rng).unwrap();

        let updated = accounts
            .update_profile(
                &user.id,
                ProfileUpdate {
                    bio: Some("Minimalist".to_string()),
                    city: Some("Shiraz".to_string()),
                    ..ProfileUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(updated.bio.as_deref(), Some("Minimalist"));
        assert_eq!(updated.city, "Shiraz");
        assert_eq!(updated.name, "Sara Jalali");

        let err = accounts
            .update_profile(
                &user.id,
                ProfileUpdate {
                    name: Some(" ".to_string()),
                    ..ProfileUpdate::default()
                },
            )
            .unwrap_err();
        assert_eq!(code(err), ErrorCode::ValidationError);
    }

    #[test]
    fn test_trust_score_bounds() {
        let clock = clock();
        let mut accounts = accounts(&clock);
        let mut rng = StdRng::seed_from_u64(12);
        let user = accounts.register(form(), &mut rng).unwrap();

        assert_eq!(accounts.set_trust_score(&user.id, 100).unwrap().trust_score, 100);
        assert_eq!(accounts.set_trust_score(&user.id, 0).unwrap().trust_score, 0);
        assert!(accounts.set_trust_score(&user.id, 101).is_err());
        assert!(accounts.set_trust_score("usr-ffffff", 10).is_err());
    }
}
