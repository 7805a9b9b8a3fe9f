use crate::client::api;
use crate::client::auth::use_auth;
use crate::client::forms::non_empty;
use crate::components::review_form::{ReviewDraft, ReviewForm};
use crate::components::reviews_list::{stars, ReviewsList};
use crate::models::review::{CreateReviewRequest, Review, UpdateReviewRequest};
use leptos::logging::log;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

fn update_request(draft: ReviewDraft) -> UpdateReviewRequest {
    UpdateReviewRequest {
        name: non_empty(draft.name),
        rating: Some(draft.rating),
        comment: Some(draft.comment),
        // an empty string clears the stored image
        image: Some(draft.image.trim().to_string()),
    }
}

#[component]
pub fn Reviews() -> impl IntoView {
    let auth = use_auth();

    let (refresh, set_refresh) = create_signal(0u32);
    let reviews = create_local_resource(
        move || refresh.get(),
        |_| async move { api::fetch_reviews().await },
    );
    let (editing, set_editing) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let reload = move || set_refresh.update(|n| *n += 1);

    let done = move |result: Result<Option<Review>, String>| match result {
        Ok(review) => {
            auth.set_user_review(review);
            set_editing.set(false);
            set_error.set(None);
            reload();
        }
        Err(message) => set_error.set(Some(message)),
    };

    let on_create = Callback::new(move |draft: ReviewDraft| {
        let request = CreateReviewRequest {
            rating: draft.rating,
            comment: draft.comment,
            image: non_empty(draft.image),
        };
        if let Err(message) = request.validate() {
            set_error.set(Some(message));
            return;
        }
        spawn_local(async move {
            let result = auth
                .authorized(|token| async move { api::create_review(&token, &request).await })
                .await;
            done(result.map(Some));
        });
    });

    let on_update = Callback::new(move |draft: ReviewDraft| {
        let Some(existing) = auth.user_review() else {
            return;
        };
        let request = update_request(draft);
        if let Err(message) = request.validate() {
            set_error.set(Some(message));
            return;
        }
        spawn_local(async move {
            let result = auth
                .authorized(|token| async move {
                    api::update_review(&token, &existing.id, &request).await
                })
                .await;
            done(result.map(Some));
        });
    });

    let on_delete = move |_: ev::MouseEvent| {
        let Some(existing) = auth.user_review() else {
            return;
        };
        spawn_local(async move {
            let id = existing.id.clone();
            let result = auth
                .authorized(|token| async move { api::delete_review(&token, &id).await })
                .await;
            if result.is_ok() {
                log!("[CLIENT] Review {} deleted", existing.id);
            }
            done(result.map(|_| None));
        });
    };

    let all_reviews = Signal::derive(move || {
        reviews
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });

    view! {
        <section class="reviews-page">
            <h2>{ "What our community says" }</h2>
            {move || error.get().map(|message| view! { <p class="error">{ message }</p> })}
            <Show when=move || auth.is_authenticated()>
                {move || match auth.user_review() {
                    Some(review) if editing.get() => view! {
                        <ReviewForm
                            existing=review
                            on_submit=on_update
                            on_cancel=Callback::new(move |_: ()| set_editing.set(false))
                        />
                    }
                    .into_view(),
                    Some(review) => view! {
                        <div class="my-review">
                            <h3>{ "Your review" }</h3>
                            <span class="stars">{ stars(review.rating) }</span>
                            <p>{ review.comment.clone() }</p>
                            <button type="button" on:click=move |_| set_editing.set(true)>{ "Edit" }</button>
                            <button type="button" on:click=on_delete>{ "Delete" }</button>
                        </div>
                    }
                    .into_view(),
                    None => view! { <ReviewForm on_submit=on_create/> }.into_view(),
                }}
            </Show>
            <Transition fallback=|| view! { <p class="loading">{ "Loading reviews..." }</p> }>
                {move || {
                    reviews.get().map(|result| match result {
                        Ok(_) => view! { <ReviewsList reviews=all_reviews/> }.into_view(),
                        Err(failure) => view! { <p class="error">{ failure.message }</p> }.into_view(),
                    })
                }}
            </Transition>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_keeps_existing_author() {
        let request = update_request(ReviewDraft {
            name: "  ".into(),
            rating: 4,
            comment: "Helpful".into(),
            image: String::new(),
        });
        assert!(request.name.is_none());
        assert_eq!(request.image.as_deref(), Some(""));
        assert!(request.validate().is_ok());
    }
}
