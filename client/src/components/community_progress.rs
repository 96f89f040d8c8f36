//! Achievements shared by the whole community.

use leptos::prelude::*;

use super::status_notice::render_presentation;
use crate::resource::use_remote_resource;
use crate::resources::COMMUNITY_PROGRESS;
use crate::state::session::use_session;

#[component]
pub fn CommunityProgress() -> impl IntoView {
    let session = use_session();
    let community = use_remote_resource(&COMMUNITY_PROGRESS);

    Effect::new(move || {
        session.track();
        community.trigger(());
    });

    view! {
        <div class="community-progress">
            <h2 class="community-progress__title">"Community Progress"</h2>
            {move || {
                render_presentation(
                    community.state().into_presentation(),
                    "Loading community progress...",
                    "No progress recorded yet.",
                    |entries| {
                        view! {
                            <ul class="community-progress__list">
                                {entries
                                    .into_iter()
                                    .map(|entry| view! { <li class="community-progress__item">{entry.achievement}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                        .into_any()
                    },
                )
            }}
        </div>
    }
}
