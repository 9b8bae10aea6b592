use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::i18n::Language;
use crate::services::site_data::SiteData;
use crate::state::forms::{LeadField, LeadForm, SubmitGate};
use crate::state::overlay::LeadOverlay;
use crate::state::toasts::Notice;

#[derive(Properties, PartialEq)]
pub struct LeadCaptureProps {
    pub overlay: LeadOverlay,
    pub language: Language,
    pub on_close: Callback<()>,
    pub on_notice: Callback<Notice>,
}

#[function_component(LeadCapture)]
pub fn lead_capture(props: &LeadCaptureProps) -> Html {
    let language = props.language;
    let form = use_state(LeadForm::default);
    let gate = use_mut_ref(SubmitGate::default);
    let busy = use_state(|| false);

    // Every opening starts from a blank form carrying the plan hint.
    {
        let form = form.clone();
        use_effect_with_deps(
            move |(open, plan_hint): &(bool, Option<String>)| {
                if *open {
                    form.set(LeadForm::prefilled(plan_hint.as_deref()));
                }
                || ()
            },
            (props.overlay.open, props.overlay.plan_hint.clone()),
        );
    }

    if !props.overlay.open {
        return html! {};
    }

    let on_input = |field: LeadField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(form.with(field, input.value()));
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let onsubmit = {
        let form = form.clone();
        let gate = gate.clone();
        let busy = busy.clone();
        let source = props.overlay.source;
        let on_close = props.on_close.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !gate.borrow_mut().try_begin() {
                return;
            }
            busy.set(true);

            let payload = form.payload(source);
            let gate = gate.clone();
            let busy = busy.clone();
            let on_close = on_close.clone();
            let on_notice = on_notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match SiteData::live().submit_organizer_lead(&payload).await {
                    Ok(id) => {
                        log::info!("Organizer lead from {} stored as {}", source.as_str(), id.as_deref().unwrap_or("?"));
                        on_notice.emit(Notice::success(language.pick(
                            "Thanks for reaching out! We will contact you shortly.",
                            "Asante kwa kuwasiliana! Tutakupigia haraka iwezekanavyo.",
                        )));
                        on_close.emit(());
                    }
                    Err(e) => {
                        log::error!("Failed to submit organizer lead: {}", e);
                        on_notice.emit(Notice::error(language.pick(
                            "We could not register your interest. Please try again or contact support.",
                            "Hatukuweza kusajili udadisi wako. Tafadhali jaribu tena au wasiliana na timu ya msaada.",
                        )));
                    }
                }
                gate.borrow_mut().finish();
                busy.set(false);
            });
        })
    };

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div
                class="lead-modal"
                role="dialog"
                aria-modal="true"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <button class="modal-close" onclick={close} aria-label={language.pick("Close", "Funga")}>
                    {"✕"}
                </button>
                <h3>{language.pick("Join Ribera as an Organizer", "Jiunge na Ribera kama Mandaaji")}</h3>
                <p class="modal-subtitle">
                    {language.pick(
                        "Tell us a bit about you and we will reach out to help you onboard.",
                        "Tueleze kidogo kukuhusu na tutawasiliana kukusaidia kuanza.",
                    )}
                </p>
                <form {onsubmit}>
                    <fieldset disabled={*busy}>
                        <label>
                            {language.pick("Full Name", "Jina Kamili")}
                            <input
                                type="text"
                                name="fullName"
                                required=true
                                value={form.full_name.clone()}
                                oninput={on_input(LeadField::FullName)}
                            />
                        </label>
                        <label>
                            {language.pick("Work Email", "Barua Pepe ya Kazi")}
                            <input
                                type="email"
                                name="email"
                                required=true
                                value={form.email.clone()}
                                oninput={on_input(LeadField::Email)}
                            />
                        </label>
                        <div class="form-row">
                            <label>
                                {language.pick("Phone (Optional)", "Namba ya Simu (Hiari)")}
                                <input
                                    type="tel"
                                    name="phone"
                                    value={form.phone.clone()}
                                    oninput={on_input(LeadField::Phone)}
                                />
                            </label>
                            <label>
                                {language.pick("Organization (Optional)", "Taasisi (Hiari)")}
                                <input
                                    type="text"
                                    name="organization"
                                    value={form.organization.clone()}
                                    oninput={on_input(LeadField::Organization)}
                                />
                            </label>
                        </div>
                        <label>
                            {language.pick("Which plan are you interested in?", "Unavutiwa na mpango upi?")}
                            <input
                                type="text"
                                name="planInterest"
                                value={form.plan_interest.clone()}
                                oninput={on_input(LeadField::PlanInterest)}
                            />
                        </label>
                        <button type="submit" class="submit-button">
                            if *busy {
                                <span class="spinner"></span>
                                {language.pick("Submitting...", "Inatuma...")}
                            } else {
                                {language.pick("Submit Interest", "Tuma Udadisi")}
                            }
                        </button>
                    </fieldset>
                </form>
            </div>
        </div>
    }
}
