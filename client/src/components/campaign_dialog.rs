//! Shared marketing-campaign dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installed once at the app root and opened from the header on any page.
//! Lists campaigns, loads them lazily on first open, and edits one at a
//! time through the backend's update endpoint.

use leptos::prelude::*;

use crate::state::campaigns::CampaignState;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::MarketingCampaign;

/// Modal dialog for browsing and editing marketing campaigns.
#[component]
pub fn CampaignDialog() -> impl IntoView {
    let campaigns = expect_context::<RwSignal<CampaignState>>();

    // Draft fields for the campaign under edit.
    let title = RwSignal::new(String::new());
    let source = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let media_url = RwSignal::new(String::new());

    // Lazy-load the campaign list on first open.
    Effect::new(move || {
        let state = campaigns.get();
        if !state.open || state.loading || !state.items.is_empty() {
            return;
        }
        campaigns.update(|c| {
            c.loading = true;
            c.error = None;
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_campaigns().await {
                Ok(items) => campaigns.update(|c| {
                    c.items = items;
                    c.loading = false;
                }),
                Err(e) => campaigns.update(|c| {
                    c.error = Some(e);
                    c.loading = false;
                }),
            }
        });
    });

    // Copy the selected campaign into the draft fields.
    Effect::new(move || {
        if let Some(campaign) = campaigns.get().selected_campaign().cloned() {
            title.set(campaign.title);
            source.set(campaign.source);
            message.set(campaign.message);
            media_url.set(campaign.media_url.unwrap_or_default());
        }
    });

    let on_close = move |_| campaigns.update(|c| c.open = false);

    let on_save = move |_| {
        let state = campaigns.get_untracked();
        let Some(id) = state.selected else {
            return;
        };
        if state.saving {
            return;
        }
        let media = media_url.get_untracked().trim().to_owned();
        let updated = MarketingCampaign {
            id,
            title: title.get_untracked().trim().to_owned(),
            source: source.get_untracked().trim().to_owned(),
            message: message.get_untracked(),
            media_url: if media.is_empty() { None } else { Some(media) },
        };
        if updated.title.is_empty() {
            campaigns.update(|c| c.error = Some("Title is required.".to_owned()));
            return;
        }
        campaigns.update(|c| {
            c.saving = true;
            c.error = None;
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::update_campaign(&updated).await {
                Ok(()) => campaigns.update(|c| {
                    if let Some(slot) = c.items.iter_mut().find(|item| item.id == updated.id) {
                        *slot = updated;
                    }
                    c.saving = false;
                    c.selected = None;
                }),
                Err(e) => campaigns.update(|c| {
                    c.error = Some(e);
                    c.saving = false;
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = updated;
    };

    view! {
        <Show when=move || campaigns.get().open>
            <div class="dialog-backdrop" on:click=on_close>
                <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Marketing Campaigns"</h2>

                    <Show when=move || campaigns.get().error.is_some()>
                        <p class="dialog__error">
                            {move || campaigns.get().error.unwrap_or_default()}
                        </p>
                    </Show>

                    <Show
                        when=move || !campaigns.get().loading
                        fallback=move || view! { <p>"Loading campaigns..."</p> }
                    >
                        <ul class="campaign-list">
                            {move || {
                                campaigns
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|campaign| {
                                        let id = campaign.id;
                                        view! {
                                            <li class="campaign-list__item">
                                                <button
                                                    class="campaign-list__pick"
                                                    on:click=move |_| {
                                                        campaigns.update(|c| c.selected = Some(id));
                                                    }
                                                >
                                                    {campaign.title}
                                                    <span class="campaign-list__source">
                                                        {campaign.source}
                                                    </span>
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>

                    <Show when=move || campaigns.get().selected.is_some()>
                        <div class="campaign-form">
                            <label class="dialog__label">
                                "Title"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || title.get()
                                    on:input=move |ev| title.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "Source"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || source.get()
                                    on:input=move |ev| source.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "Message"
                                <textarea
                                    class="dialog__input dialog__input--multiline"
                                    prop:value=move || message.get()
                                    on:input=move |ev| message.set(event_target_value(&ev))
                                ></textarea>
                            </label>
                            <label class="dialog__label">
                                "Media URL"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    placeholder="https://"
                                    prop:value=move || media_url.get()
                                    on:input=move |ev| media_url.set(event_target_value(&ev))
                                />
                            </label>
                        </div>
                    </Show>

                    <div class="dialog__actions">
                        <button class="btn" on:click=on_close>
                            "Close"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=move || {
                                campaigns.get().selected.is_none() || campaigns.get().saving
                            }
                            on:click=on_save
                        >
                            {move || if campaigns.get().saving { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
