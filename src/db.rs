#[cfg(feature = "ssr")]
mod db_impl {
    use crate::models::review::Review;
    use crate::models::user::{DonorFilter, RegisterRequest, UpdateUserRequest, User};
    use chrono::{DateTime, Utc};
    use leptos::logging;
    use leptos::logging::log;
    use rusqlite::types::Type;
    use rusqlite::{params, params_from_iter, Connection, Error, OptionalExtension, Row};
    use std::sync::Arc;
    use tokio::sync::Mutex;
    use uuid::Uuid;

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::models::user::{BloodGroup, Gender};
        use chrono::Duration;

        // Helper function to create test database
        async fn create_test_db() -> Database {
            log!("[TEST] Creating in-memory test database");
            let db = Database::new(":memory:").unwrap();
            db.create_schema().await.unwrap();
            log!("[TEST] Database schema created");
            db
        }

        fn registration(email: &str, mobile: &str) -> RegisterRequest {
            RegisterRequest {
                first_name: "Ravi".into(),
                last_name: "Kumar".into(),
                email: email.into(),
                password: "unused-here".into(),
                mobile_number: mobile.into(),
                blood_group: Some(BloodGroup::BPositive),
                gender: Some(Gender::Male),
                availability: true,
                country: "India".into(),
                state: "Haryana".into(),
                district: "Kurukshetra".into(),
                city: "Thanesar".into(),
                terms_accepted: true,
            }
        }

        fn review_for(user: &User, rating: u8) -> Review {
            let now = Utc::now();
            Review {
                id: Uuid::new_v4().to_string(),
                user_id: user.id.clone(),
                username: user.full_name(),
                rating,
                comment: "Found a donor within an hour".into(),
                image: None,
                created_at: now,
                updated_at: now,
            }
        }

        #[tokio::test]
        async fn test_schema_creation() {
            let db = create_test_db().await;

            let conn = db.conn.lock().await;
            let mut stmt = conn
                .prepare("SELECT name FROM sqlite_master WHERE type='table'")
                .unwrap();
            let tables: Vec<String> = stmt
                .query_map([], |row| row.get(0))
                .unwrap()
                .collect::<Result<_, _>>()
                .unwrap();

            assert!(tables.contains(&"users".to_string()));
            assert!(tables.contains(&"reviews".to_string()));
        }

        #[tokio::test]
        async fn test_user_lifecycle() {
            log!("[TEST] Starting test_user_lifecycle");
            let db = create_test_db().await;

            let user = db
                .insert_user(&registration("ravi@example.com", "+919000000001"), "hash-1")
                .await
                .unwrap();
            assert_eq!(user.blood_group, Some(BloodGroup::BPositive));

            // lookup by either identifier, email case-insensitively
            let by_email = db.find_user_by_identifier("RAVI@example.com").await.unwrap().unwrap();
            assert_eq!(by_email.user.id, user.id);
            assert_eq!(by_email.password_hash, "hash-1");
            let by_mobile = db.find_user_by_identifier("+919000000001").await.unwrap().unwrap();
            assert_eq!(by_mobile.user.id, user.id);

            assert!(db.user_exists("ravi@example.com", "+910000000000").await.unwrap());
            assert!(db.user_exists("other@example.com", "+919000000001").await.unwrap());
            assert!(!db.user_exists("other@example.com", "+910000000000").await.unwrap());

            let update = UpdateUserRequest {
                city: Some("Pehowa".into()),
                availability: Some(false),
                ..Default::default()
            };
            let updated = db.update_user(&user.id, &update).await.unwrap().unwrap();
            assert_eq!(updated.city, "Pehowa");
            assert!(!updated.availability);
            assert_eq!(updated.first_name, "Ravi");

            assert!(db.update_user("missing", &update).await.unwrap().is_none());
            log!("[TEST] test_user_lifecycle completed successfully");
        }

        #[tokio::test]
        async fn test_conflicting_contact_details() {
            let db = create_test_db().await;
            let first = db
                .insert_user(&registration("a@example.com", "+911111111111"), "h")
                .await
                .unwrap();
            db.insert_user(&registration("b@example.com", "+912222222222"), "h")
                .await
                .unwrap();

            assert!(db
                .find_conflicting_user(&first.id, Some("b@example.com"), None)
                .await
                .unwrap());
            assert!(db
                .find_conflicting_user(&first.id, None, Some("+912222222222"))
                .await
                .unwrap());
            // a user never conflicts with their own details
            assert!(!db
                .find_conflicting_user(&first.id, Some("a@example.com"), Some("+911111111111"))
                .await
                .unwrap());
        }

        #[tokio::test]
        async fn test_password_reset_otp() {
            let db = create_test_db().await;
            let user = db
                .insert_user(&registration("reset@example.com", "+913333333333"), "old-hash")
                .await
                .unwrap();

            let now = Utc::now();
            db.set_reset_otp(&user.id, "654321", now + Duration::minutes(10))
                .await
                .unwrap();

            assert!(db
                .find_user_for_reset("reset@example.com", "000000", now)
                .await
                .unwrap()
                .is_none());
            assert!(db
                .find_user_for_reset("reset@example.com", "654321", now + Duration::minutes(11))
                .await
                .unwrap()
                .is_none());
            let found = db
                .find_user_for_reset("reset@example.com", "654321", now)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(found.user.id, user.id);

            db.update_password(&user.id, "new-hash").await.unwrap();
            let reloaded = db.find_user_by_id(&user.id).await.unwrap().unwrap();
            assert_eq!(reloaded.password_hash, "new-hash");
            // the code is single use
            assert!(db
                .find_user_for_reset("reset@example.com", "654321", now)
                .await
                .unwrap()
                .is_none());
        }

        #[tokio::test]
        async fn test_donor_filter() {
            let db = create_test_db().await;
            db.insert_user(&registration("one@example.com", "+914444444441"), "h")
                .await
                .unwrap();
            let mut other = registration("two@example.com", "+914444444442");
            other.blood_group = Some(BloodGroup::ONegative);
            other.city = "Ladwa".into();
            db.insert_user(&other, "h").await.unwrap();

            let all = db.filter_users(&DonorFilter::default()).await.unwrap();
            assert_eq!(all.len(), 2);

            let filter = DonorFilter {
                blood_group: Some("O-".into()),
                state: Some("Haryana".into()),
                ..Default::default()
            };
            let found = db.filter_users(&filter).await.unwrap();
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].email, "two@example.com");

            let none = DonorFilter {
                city: Some("Ambala City".into()),
                ..Default::default()
            };
            assert!(db.filter_users(&none).await.unwrap().is_empty());
        }

        #[tokio::test]
        async fn test_review_lifecycle() {
            log!("[TEST] Starting test_review_lifecycle");
            let db = create_test_db().await;
            let user = db
                .insert_user(&registration("writer@example.com", "+915555555555"), "h")
                .await
                .unwrap();

            let mut review = review_for(&user, 4);
            db.insert_review(&review).await.unwrap();

            // one review per author
            let duplicate = db.insert_review(&review_for(&user, 5)).await.unwrap_err();
            assert!(is_unique_violation(&duplicate));

            let listed = db.list_reviews().await.unwrap();
            assert_eq!(listed.len(), 1);
            assert_eq!(listed[0].username, "Ravi Kumar");

            review.rating = 2;
            review.image = Some("https://img.example/blood-camp.png".into());
            db.update_review(&review).await.unwrap();
            let stored = db.find_review(&review.id).await.unwrap().unwrap();
            assert_eq!(stored.rating, 2);
            assert_eq!(stored.image.as_deref(), Some("https://img.example/blood-camp.png"));

            let by_user = db.find_review_by_user(&user.id).await.unwrap().unwrap();
            assert_eq!(by_user.id, review.id);

            assert!(db.delete_review(&review.id).await.unwrap());
            assert!(!db.delete_review(&review.id).await.unwrap());
            assert!(db.list_reviews().await.unwrap().is_empty());
            log!("[TEST] test_review_lifecycle completed successfully");
        }

        #[tokio::test]
        async fn test_duplicate_contact_details_are_unique_violations() {
            let db = create_test_db().await;
            db.insert_user(&registration("dup@example.com", "+916666666666"), "h")
                .await
                .unwrap();

            let same_email = db
                .insert_user(&registration("DUP@example.com", "+917777777777"), "h")
                .await
                .unwrap_err();
            assert!(is_unique_violation(&same_email));

            let same_mobile = db
                .insert_user(&registration("other@example.com", "+916666666666"), "h")
                .await
                .unwrap_err();
            assert!(is_unique_violation(&same_mobile));

            assert!(!is_unique_violation(&Error::QueryReturnedNoRows));
        }
    }

    const USER_COLUMNS: &str = "id, first_name, last_name, email, mobile_number, blood_group, \
        gender, availability, country, state, district, city, terms_accepted, created_at, \
        updated_at, password_hash";

    const REVIEW_COLUMNS: &str =
        "id, user_id, username, rating, comment, image, created_at, updated_at";

    /// A stored user together with the secret fields that stay server-side.
    #[derive(Debug, Clone)]
    pub struct UserRecord {
        pub user: User,
        pub password_hash: String,
    }

    // Define a struct to represent a database connection
    #[derive(Debug)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        // Create a new database connection
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            logging::log!("Database connection established at: {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        // Create the database schema
        pub async fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;

            conn.execute_batch("PRAGMA foreign_keys = ON;")?;

            // 1. Users table
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS users (
                    id TEXT PRIMARY KEY,
                    first_name TEXT NOT NULL,
                    last_name TEXT NOT NULL,
                    email TEXT NOT NULL UNIQUE COLLATE NOCASE,
                    mobile_number TEXT NOT NULL UNIQUE,
                    password_hash TEXT NOT NULL,
                    blood_group TEXT,
                    gender TEXT,
                    availability INTEGER NOT NULL DEFAULT 0,
                    country TEXT NOT NULL DEFAULT '',
                    state TEXT NOT NULL DEFAULT '',
                    district TEXT NOT NULL DEFAULT '',
                    city TEXT NOT NULL DEFAULT '',
                    terms_accepted INTEGER NOT NULL DEFAULT 0,
                    reset_password_otp TEXT,
                    reset_password_expires INTEGER,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );
                CREATE INDEX IF NOT EXISTS idx_users_search
                    ON users (blood_group, country, state, district, city);",
            )
            .map_err(|e| {
                logging::error!("Failed creating users table: {}", e);
                e
            })?;

            // 2. Reviews table, one per author
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS reviews (
                    id TEXT PRIMARY KEY,
                    user_id TEXT NOT NULL UNIQUE,
                    username TEXT NOT NULL,
                    rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
                    comment TEXT NOT NULL,
                    image TEXT,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL,
                    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
                );",
            )
            .map_err(|e| {
                logging::error!("Failed creating reviews table: {}", e);
                e
            })?;
            Ok(())
        }

        pub async fn insert_user(
            &self,
            request: &RegisterRequest,
            password_hash: &str,
        ) -> Result<User, Error> {
            let now = Utc::now();
            let user = User {
                id: Uuid::new_v4().to_string(),
                first_name: request.first_name.trim().to_string(),
                last_name: request.last_name.trim().to_string(),
                email: request.email.trim().to_string(),
                mobile_number: request.mobile_number.trim().to_string(),
                blood_group: request.blood_group,
                gender: request.gender,
                availability: request.availability,
                country: request.country.clone(),
                state: request.state.clone(),
                district: request.district.clone(),
                city: request.city.clone(),
                terms_accepted: request.terms_accepted,
                created_at: now,
                updated_at: now,
            };

            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO users (id, first_name, last_name, email, mobile_number, password_hash,
                    blood_group, gender, availability, country, state, district, city,
                    terms_accepted, created_at, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
                params![
                    &user.id,
                    &user.first_name,
                    &user.last_name,
                    &user.email,
                    &user.mobile_number,
                    password_hash,
                    user.blood_group.map(|g| g.as_str()),
                    user.gender.map(|g| g.as_str()),
                    user.availability,
                    &user.country,
                    &user.state,
                    &user.district,
                    &user.city,
                    user.terms_accepted,
                    user.created_at.to_rfc3339(),
                    user.updated_at.to_rfc3339(),
                ],
            )?;
            log!("[DB] User inserted: {}", user.id);
            Ok(user)
        }

        pub async fn user_exists(&self, email: &str, mobile_number: &str) -> Result<bool, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?1 OR mobile_number = ?2)",
                params![email.trim(), mobile_number.trim()],
                |row| row.get(0),
            )
        }

        /// Looks a user up by email or mobile number, whichever matches.
        pub async fn find_user_by_identifier(
            &self,
            identifier: &str,
        ) -> Result<Option<UserRecord>, Error> {
            let conn = self.conn.lock().await;
            let sql = format!(
                "SELECT {} FROM users WHERE email = ?1 OR mobile_number = ?1",
                USER_COLUMNS
            );
            conn.query_row(&sql, [identifier.trim()], user_from_row)
                .optional()
        }

        pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, Error> {
            let conn = self.conn.lock().await;
            let sql = format!("SELECT {} FROM users WHERE email = ?1", USER_COLUMNS);
            conn.query_row(&sql, [email.trim()], user_from_row).optional()
        }

        pub async fn find_user_by_id(&self, id: &str) -> Result<Option<UserRecord>, Error> {
            let conn = self.conn.lock().await;
            load_user(&conn, id)
        }

        /// True when another user already owns the given email or mobile number.
        pub async fn find_conflicting_user(
            &self,
            id: &str,
            email: Option<&str>,
            mobile_number: Option<&str>,
        ) -> Result<bool, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                "SELECT EXISTS(
                    SELECT 1 FROM users
                    WHERE id != ?1 AND (email = ?2 OR mobile_number = ?3)
                )",
                params![id, email.map(str::trim), mobile_number.map(str::trim)],
                |row| row.get(0),
            )
        }

        /// Applies a partial profile update, returning the new profile or
        /// `None` when the user does not exist.
        pub async fn update_user(
            &self,
            id: &str,
            update: &UpdateUserRequest,
        ) -> Result<Option<User>, Error> {
            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;

            let mut user = match load_user(&tx, id)? {
                Some(record) => record.user,
                None => return Ok(None),
            };

            fn set(target: &mut String, value: &Option<String>) {
                if let Some(value) = value {
                    *target = value.trim().to_string();
                }
            }
            set(&mut user.first_name, &update.first_name);
            set(&mut user.last_name, &update.last_name);
            set(&mut user.email, &update.email);
            set(&mut user.mobile_number, &update.mobile_number);
            set(&mut user.country, &update.country);
            set(&mut user.state, &update.state);
            set(&mut user.district, &update.district);
            set(&mut user.city, &update.city);
            if update.blood_group.is_some() {
                user.blood_group = update.blood_group;
            }
            if update.gender.is_some() {
                user.gender = update.gender;
            }
            if let Some(availability) = update.availability {
                user.availability = availability;
            }
            user.updated_at = Utc::now();

            tx.execute(
                "UPDATE users SET first_name = ?2, last_name = ?3, email = ?4, mobile_number = ?5,
                    blood_group = ?6, gender = ?7, availability = ?8, country = ?9, state = ?10,
                    district = ?11, city = ?12, updated_at = ?13
                WHERE id = ?1",
                params![
                    &user.id,
                    &user.first_name,
                    &user.last_name,
                    &user.email,
                    &user.mobile_number,
                    user.blood_group.map(|g| g.as_str()),
                    user.gender.map(|g| g.as_str()),
                    user.availability,
                    &user.country,
                    &user.state,
                    &user.district,
                    &user.city,
                    user.updated_at.to_rfc3339(),
                ],
            )?;
            tx.commit()?;
            log!("[DB] User updated: {}", user.id);
            Ok(Some(user))
        }

        pub async fn set_reset_otp(
            &self,
            user_id: &str,
            otp: &str,
            expires_at: DateTime<Utc>,
        ) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            conn.execute(
                "UPDATE users SET reset_password_otp = ?2, reset_password_expires = ?3 WHERE id = ?1",
                params![user_id, otp, expires_at.timestamp_millis()],
            )?;
            log!("[DB] Reset OTP stored for user {}", user_id);
            Ok(())
        }

        /// The user whose unexpired reset code matches.
        pub async fn find_user_for_reset(
            &self,
            email: &str,
            otp: &str,
            now: DateTime<Utc>,
        ) -> Result<Option<UserRecord>, Error> {
            let conn = self.conn.lock().await;
            let sql = format!(
                "SELECT {} FROM users
                WHERE email = ?1 AND reset_password_otp = ?2 AND reset_password_expires > ?3",
                USER_COLUMNS
            );
            conn.query_row(
                &sql,
                params![email.trim(), otp.trim(), now.timestamp_millis()],
                user_from_row,
            )
            .optional()
        }

        /// Stores a new hash and clears any outstanding reset code.
        pub async fn update_password(&self, user_id: &str, password_hash: &str) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            conn.execute(
                "UPDATE users SET password_hash = ?2, reset_password_otp = NULL,
                    reset_password_expires = NULL, updated_at = ?3
                WHERE id = ?1",
                params![user_id, password_hash, Utc::now().to_rfc3339()],
            )?;
            log!("[DB] Password updated for user {}", user_id);
            Ok(())
        }

        // Donor directory: plain equality on every criterion that is set
        pub async fn filter_users(&self, filter: &DonorFilter) -> Result<Vec<User>, Error> {
            let criteria = filter.criteria();
            let mut sql = format!("SELECT {} FROM users", USER_COLUMNS);
            if !criteria.is_empty() {
                let clauses: Vec<String> = criteria
                    .iter()
                    .enumerate()
                    .map(|(i, (column, _))| format!("{} = ?{}", column, i + 1))
                    .collect();
                sql.push_str(" WHERE ");
                sql.push_str(&clauses.join(" AND "));
            }
            sql.push_str(" ORDER BY first_name, last_name");

            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(
                params_from_iter(criteria.iter().map(|(_, value)| *value)),
                user_from_row,
            )?;

            let mut users = Vec::new();
            for row in rows {
                users.push(row?.user);
            }
            log!("[DB] Donor search matched {} users", users.len());
            Ok(users)
        }

        pub async fn list_reviews(&self) -> Result<Vec<Review>, Error> {
            let conn = self.conn.lock().await;
            let sql = format!(
                "SELECT {} FROM reviews ORDER BY created_at DESC",
                REVIEW_COLUMNS
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([], review_from_row)?;
            rows.collect()
        }

        pub async fn find_review(&self, id: &str) -> Result<Option<Review>, Error> {
            let conn = self.conn.lock().await;
            let sql = format!("SELECT {} FROM reviews WHERE id = ?1", REVIEW_COLUMNS);
            conn.query_row(&sql, [id], review_from_row).optional()
        }

        pub async fn find_review_by_user(&self, user_id: &str) -> Result<Option<Review>, Error> {
            let conn = self.conn.lock().await;
            let sql = format!("SELECT {} FROM reviews WHERE user_id = ?1", REVIEW_COLUMNS);
            conn.query_row(&sql, [user_id], review_from_row).optional()
        }

        pub async fn insert_review(&self, review: &Review) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO reviews (id, user_id, username, rating, comment, image, created_at, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    &review.id,
                    &review.user_id,
                    &review.username,
                    review.rating,
                    &review.comment,
                    &review.image,
                    review.created_at.to_rfc3339(),
                    review.updated_at.to_rfc3339(),
                ],
            )?;
            log!("[DB] Review inserted: {}", review.id);
            Ok(())
        }

        pub async fn update_review(&self, review: &Review) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            conn.execute(
                "UPDATE reviews SET username = ?2, rating = ?3, comment = ?4, image = ?5, updated_at = ?6
                WHERE id = ?1",
                params![
                    &review.id,
                    &review.username,
                    review.rating,
                    &review.comment,
                    &review.image,
                    review.updated_at.to_rfc3339(),
                ],
            )?;
            log!("[DB] Review updated: {}", review.id);
            Ok(())
        }

        pub async fn delete_review(&self, id: &str) -> Result<bool, Error> {
            let conn = self.conn.lock().await;
            let deleted = conn.execute("DELETE FROM reviews WHERE id = ?1", [id])?;
            logging::log!("Review deleted: {} ({} rows)", id, deleted);
            Ok(deleted > 0)
        }
    }

    fn load_user(conn: &Connection, id: &str) -> Result<Option<UserRecord>, Error> {
        let sql = format!("SELECT {} FROM users WHERE id = ?1", USER_COLUMNS);
        conn.query_row(&sql, [id], user_from_row).optional()
    }

    /// True when a write was refused by a UNIQUE index, e.g. a second
    /// registration with the same email racing the first.
    pub fn is_unique_violation(err: &Error) -> bool {
        matches!(
            err,
            Error::SqliteFailure(e, _) if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT | (8 << 8)
        )
    }

    fn user_from_row(row: &Row<'_>) -> Result<UserRecord, Error> {
        Ok(UserRecord {
            user: User {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                email: row.get(3)?,
                mobile_number: row.get(4)?,
                blood_group: parse_column(row, 5)?,
                gender: parse_column(row, 6)?,
                availability: row.get(7)?,
                country: row.get(8)?,
                state: row.get(9)?,
                district: row.get(10)?,
                city: row.get(11)?,
                terms_accepted: row.get(12)?,
                created_at: timestamp_column(row, 13)?,
                updated_at: timestamp_column(row, 14)?,
            },
            password_hash: row.get(15)?,
        })
    }

    fn review_from_row(row: &Row<'_>) -> Result<Review, Error> {
        Ok(Review {
            id: row.get(0)?,
            user_id: row.get(1)?,
            username: row.get(2)?,
            rating: row.get(3)?,
            comment: row.get(4)?,
            image: row.get(5)?,
            created_at: timestamp_column(row, 6)?,
            updated_at: timestamp_column(row, 7)?,
        })
    }

    fn parse_column<T>(row: &Row<'_>, idx: usize) -> Result<Option<T>, Error>
    where
        T: std::str::FromStr<Err = String>,
    {
        match row.get::<_, Option<String>>(idx)? {
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|e: String| Error::FromSqlConversionFailure(idx, Type::Text, e.into())),
            None => Ok(None),
        }
    }

    fn timestamp_column(row: &Row<'_>, idx: usize) -> Result<DateTime<Utc>, Error> {
        let raw: String = row.get(idx)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::{is_unique_violation, Database, UserRecord};
