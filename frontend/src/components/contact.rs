use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::i18n::Language;
use crate::services::site_data::SiteData;
use crate::state::forms::{ContactField, ContactForm, SubmitGate};
use crate::state::toasts::Notice;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub language: Language,
    pub dark_mode: bool,
    pub on_notice: Callback<Notice>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let language = props.language;
    let form = use_state(ContactForm::default);
    let gate = use_mut_ref(SubmitGate::default);
    let busy = use_state(|| false);

    let on_input = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(form.with(field, input.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(form.with(ContactField::Message, input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let gate = gate.clone();
        let busy = busy.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !gate.borrow_mut().try_begin() {
                return;
            }
            busy.set(true);

            // Inputs are disabled while in flight, so the snapshot stays current.
            let snapshot = (*form).clone();
            let payload = snapshot.payload(language);
            let form = form.clone();
            let gate = gate.clone();
            let busy = busy.clone();
            let on_notice = on_notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = SiteData::live().submit_contact_message(&payload).await;
                match &result {
                    Ok(id) => {
                        log::info!("Contact message stored as {}", id.as_deref().unwrap_or("?"));
                        on_notice.emit(Notice::success(language.pick(
                            "Message sent successfully!",
                            "Ujumbe umetumwa kwa mafanikio!",
                        )));
                    }
                    Err(e) => {
                        log::error!("Failed to submit contact message: {}", e);
                        on_notice.emit(Notice::error(language.pick(
                            "We could not send your message. Please try again.",
                            "Hatukuweza kutuma ujumbe wako. Tafadhali jaribu tena.",
                        )));
                    }
                }
                form.set(snapshot.after_submit(&result));
                gate.borrow_mut().finish();
                busy.set(false);
            });
        })
    };

    html! {
        <section id="contact" class={classes!("contact-section", props.dark_mode.then(|| "section-dark"))}>
            <div class="section-inner">
                <h2>{language.pick("Contact Us", "Wasiliana Nasi")}</h2>
                <p class="section-lead">
                    {language.pick(
                        "Let's build the future of African events together.",
                        "Tujenge mustakabali wa matukio ya Kiafrika pamoja.",
                    )}
                </p>

                <div class="contact-grid">
                    <form class="contact-form" {onsubmit}>
                        <fieldset disabled={*busy}>
                            <div class="form-row">
                                <input
                                    type="text"
                                    name="name"
                                    required=true
                                    placeholder={language.pick("Full Name", "Jina Kamili")}
                                    value={form.name.clone()}
                                    oninput={on_input(ContactField::Name)}
                                />
                                <input
                                    type="email"
                                    name="email"
                                    required=true
                                    placeholder={language.pick("Email Address", "Anwani ya Barua Pepe")}
                                    value={form.email.clone()}
                                    oninput={on_input(ContactField::Email)}
                                />
                            </div>
                            <input
                                type="text"
                                name="subject"
                                required=true
                                placeholder={language.pick("Subject", "Mada")}
                                value={form.subject.clone()}
                                oninput={on_input(ContactField::Subject)}
                            />
                            <textarea
                                name="message"
                                rows="6"
                                required=true
                                placeholder={language.pick("Message", "Ujumbe")}
                                value={form.message.clone()}
                                oninput={on_message}
                            />
                            <button type="submit" class="submit-button">
                                if *busy {
                                    <span class="spinner"></span>
                                    {language.pick("Sending...", "Inatuma...")}
                                } else {
                                    {language.pick("Send Message", "Tuma Ujumbe")}
                                }
                            </button>
                        </fieldset>
                    </form>

                    <div class="contact-info">
                        <h3>{language.pick("Contact Information", "Maelezo ya Mawasiliano")}</h3>
                        <div class="contact-item">
                            <span class="contact-icon">{"✉"}</span>
                            <div>
                                <a href="mailto:support@riberaapp.me">{"support@riberaapp.me"}</a>
                                <a href="mailto:info@riberaapp.me">{"info@riberaapp.me"}</a>
                            </div>
                        </div>
                        <div class="contact-item">
                            <span class="contact-icon">{"☎"}</span>
                            <div>
                                <a href="tel:+255760727437">{"+255 760 727 437"}</a>
                                <a href="tel:+255714530292">{"+255 714 530 292"}</a>
                            </div>
                        </div>
                        <div class="contact-item">
                            <span class="contact-icon">{"⌖"}</span>
                            <div>
                                {language.pick(
                                    "DIT, Morogoro Road, Dar es Salaam, Tanzania",
                                    "DIT, Barabara ya Morogoro, Dar es Salaam, Tanzania",
                                )}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
