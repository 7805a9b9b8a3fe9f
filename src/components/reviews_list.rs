use crate::models::review::{average_rating, Review, MAX_RATING};
use leptos::*;

/// Filled and empty stars for a 1–5 rating.
pub fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(MAX_RATING as usize - filled)
    )
}

#[component]
pub fn ReviewsList(#[prop(into)] reviews: Signal<Vec<Review>>) -> impl IntoView {
    let summary = move || {
        reviews.with(|reviews| match average_rating(reviews) {
            Some(avg) => format!("{:.1} out of {} ({} reviews)", avg, MAX_RATING, reviews.len()),
            None => "No reviews yet".to_string(),
        })
    };

    view! {
        <div class="reviews">
            <h3>{ "Reviews" }</h3>
            <p class="summary">{summary}</p>
            <ul>
                <For
                    each=move || reviews.get()
                    key=|review| (review.id.clone(), review.updated_at)
                    children=|review: Review| {
                        view! {
                            <li class="review">
                                <div class="review-header">
                                    <strong>{ review.username.clone() }</strong>
                                    <span class="stars">{ stars(review.rating) }</span>
                                </div>
                                <p>{ review.comment.clone() }</p>
                                {review.image.clone().map(|src| view! {
                                    <img class="review-image" src=src alt="Review photo"/>
                                })}
                                <small>{ review.created_at.format("%B %-d, %Y").to_string() }</small>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_star_strings() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(9), "★★★★★");
    }
}
