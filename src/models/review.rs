// src/models/review.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,       // author of the review
    pub username: String,      // display name shown next to the review
    pub rating: u8,            // 1 to 5 stars
    pub comment: String,
    pub image: Option<String>, // image URL or data URL
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CreateReviewRequest {
    pub rating: u8,
    pub comment: String,
    pub image: Option<String>,
}

impl CreateReviewRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_rating(self.rating)?;
        validate_comment(&self.comment)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct UpdateReviewRequest {
    pub name: Option<String>,
    pub rating: Option<u8>,
    pub comment: Option<String>,
    pub image: Option<String>,
}

impl UpdateReviewRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        if let Some(comment) = &self.comment {
            validate_comment(comment)?;
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("Name is required.".to_string());
            }
        }
        Ok(())
    }

    pub fn apply(&self, review: &mut Review) {
        if let Some(name) = &self.name {
            review.username = name.trim().to_string();
        }
        if let Some(rating) = self.rating {
            review.rating = rating;
        }
        if let Some(comment) = &self.comment {
            review.comment = comment.trim().to_string();
        }
        if let Some(image) = &self.image {
            review.image = if image.is_empty() { None } else { Some(image.clone()) };
        }
    }
}

fn validate_rating(rating: u8) -> Result<(), String> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(format!(
            "Rating must be between {} and {}.",
            MIN_RATING, MAX_RATING
        ))
    }
}

fn validate_comment(comment: &str) -> Result<(), String> {
    if comment.trim().is_empty() {
        Err("Comment is required.".to_string())
    } else {
        Ok(())
    }
}

/// Average star rating, `None` when there are no reviews.
pub fn average_rating(reviews: &[Review]) -> Option<f32> {
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    Some(total as f32 / reviews.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Review {
        Review {
            id: "r1".into(),
            user_id: "u1".into(),
            username: "Asha Verma".into(),
            rating,
            comment: "Quick response from donors".into(),
            image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn rating_must_be_one_to_five() {
        let mut request = CreateReviewRequest {
            rating: 0,
            comment: "Great".into(),
            image: None,
        };
        assert!(request.validate().is_err());
        request.rating = 6;
        assert!(request.validate().is_err());
        request.rating = 5;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn comment_cannot_be_blank() {
        let request = CreateReviewRequest {
            rating: 4,
            comment: "   ".into(),
            image: None,
        };
        assert_eq!(request.validate().unwrap_err(), "Comment is required.");
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut stored = review(3);
        stored.image = Some("https://img.example/1.png".into());

        let update = UpdateReviewRequest {
            rating: Some(5),
            image: Some(String::new()),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
        update.apply(&mut stored);

        assert_eq!(stored.rating, 5);
        assert_eq!(stored.comment, "Quick response from donors");
        assert_eq!(stored.image, None);
    }

    #[test]
    fn averages_ratings() {
        assert_eq!(average_rating(&[]), None);
        assert_eq!(average_rating(&[review(4), review(5)]), Some(4.5));
    }
}
