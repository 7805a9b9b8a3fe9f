use crate::models::review::{Review, MAX_RATING, MIN_RATING};
use leptos::ev::SubmitEvent;
use leptos::*;

/// Values collected by the review form. `name` is only editable on an
/// existing review; new reviews are signed with the author's full name.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub name: String,
    pub rating: u8,
    pub comment: String,
    pub image: String,
}

#[component]
pub fn ReviewForm(
    #[prop(optional)] existing: Option<Review>,
    on_submit: Callback<ReviewDraft>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let editing = existing.is_some();
    let (name, set_name) = create_signal(
        existing
            .as_ref()
            .map(|r| r.username.clone())
            .unwrap_or_default(),
    );
    let (rating, set_rating) = create_signal(existing.as_ref().map(|r| r.rating).unwrap_or(5));
    let (comment, set_comment) =
        create_signal(existing.as_ref().map(|r| r.comment.clone()).unwrap_or_default());
    let (image, set_image) = create_signal(
        existing
            .as_ref()
            .and_then(|r| r.image.clone())
            .unwrap_or_default(),
    );

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(ReviewDraft {
            name: name.get(),
            rating: rating.get(),
            comment: comment.get(),
            image: image.get(),
        });
    };

    view! {
        <form class="review-form" on:submit=handle_submit>
            <h3>{ if editing { "Edit your review" } else { "Write a Review" } }</h3>
            {editing.then(|| view! {
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |e| set_name.set(event_target_value(&e))
                />
            })}
            <label>
                { "Rating (1-5)" }
                <input
                    type="number"
                    min=MIN_RATING
                    max=MAX_RATING
                    prop:value=move || rating.get()
                    on:input=move |e| set_rating.set(event_target_value(&e).parse::<u8>().unwrap_or(5))
                />
            </label>
            <textarea
                placeholder="Share your experience"
                prop:value=move || comment.get()
                on:input=move |e| set_comment.set(event_target_value(&e))
            />
            <input
                type="url"
                placeholder="Image URL (optional)"
                prop:value=move || image.get()
                on:input=move |e| set_image.set(event_target_value(&e))
            />
            <button type="submit">{ if editing { "Update Review" } else { "Submit Review" } }</button>
            {on_cancel.map(|cancel| view! {
                <button type="button" on:click=move |_| cancel.call(())>{ "Cancel" }</button>
            })}
        </form>
    }
}
