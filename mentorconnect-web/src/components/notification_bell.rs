use std::rc::Rc;

use i18nrs::yew::use_translation;
use shared::catalog::Catalog;
use shared::models::Role;
use shared::notifications::NotificationCenter;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

use crate::models::app_state::AppState;

fn seeded(catalog: Option<&Rc<Catalog>>, role: Role) -> NotificationCenter {
    NotificationCenter::new(catalog.map(|catalog| catalog.notifications(role)).unwrap_or_default())
}

/// Header bell with unread badge and a dropdown of recent notifications.
#[function_component(NotificationBell)]
pub fn notification_bell() -> Html {
    let (i18n, ..) = use_translation();
    let catalog = use_context::<Rc<Catalog>>();
    let role = *use_selector(AppState::role);
    let center = {
        let catalog = catalog.clone();
        use_state_eq(move || seeded(catalog.as_ref(), role))
    };

    {
        let center = center.clone();
        use_effect_with(role, move |role| {
            center.set(seeded(catalog.as_ref(), *role));
            || ()
        });
    }

    let on_mark_all = {
        let center = center.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*center).clone();
            next.mark_all_read();
            center.set(next);
        })
    };

    let unread = center.unread_count();
    let items = if center.is_empty() {
        html! { <li class="p-3 text-sm text-base-content/70">{i18n.t("notifications.empty")}</li> }
    } else {
        html! {
            <>{ for center.iter().map(|notification| {
                let id = notification.id.clone();
                let state = center.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    let mut next = (*state).clone();
                    if next.mark_read(&id) {
                        state.set(next);
                    }
                });
                html! {
                    <li key={notification.id.clone()}>
                        <a class="flex flex-col items-start gap-1" {onclick}>
                            <span class={classes!("text-sm", (!notification.read).then_some("font-semibold"))}>
                                { &notification.title }
                            </span>
                            <span class="text-xs text-base-content/70">{ &notification.description }</span>
                            <span class="text-xs text-base-content/50">{ &notification.time }</span>
                        </a>
                    </li>
                }
            }) }</>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle" aria-label={i18n.t("notifications.title")}>
                <div class="indicator">
                    <Icon icon_id={IconId::HeroiconsOutlineBell} class="h-5 w-5" />
                    {
                        if unread > 0 {
                            html! { <span class="badge badge-primary badge-xs indicator-item">{ unread }</span> }
                        } else {
                            Html::default()
                        }
                    }
                </div>
            </div>
            <div tabindex="0" class="dropdown-content z-[1] card card-compact shadow bg-base-200 w-80">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h3 class="font-semibold">{i18n.t("notifications.title")}</h3>
                        <button class="btn btn-link btn-xs" onclick={on_mark_all} disabled={unread == 0}>
                            {i18n.t("notifications.mark_all_read")}
                        </button>
                    </div>
                    <ul class="menu p-0">{items}</ul>
                </div>
            </div>
        </div>
    }
}
