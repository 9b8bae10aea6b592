use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::state::toasts::{Toast, ToastKind, TOAST_LIFETIME_MS};

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster" role="status" aria-live="polite">
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem
                    key={toast.id.to_string()}
                    toast={toast.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    // Each toast dismisses itself; dropping the timeout on unmount cancels it.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id: &u32| {
                let id = *id;
                let timeout = Timeout::new(TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            props.toast.id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let kind = match props.toast.notice.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };

    html! {
        <div class={classes!("toast", kind)}>
            <span>{&props.toast.notice.message}</span>
            <button class="toast-close" onclick={close}>{"✕"}</button>
        </div>
    }
}
