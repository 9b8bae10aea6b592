use yew::prelude::*;
use yew_hooks::use_interval;

use crate::i18n::Language;
use crate::services::models::{TestimonialRecord, DEFAULT_RATING};
use crate::services::site_data::SiteData;
use crate::state::carousel::Carousel;
use crate::state::remote::{MountGuard, Remote};

const ROTATE_INTERVAL_MS: u32 = 6_000;

struct Highlight {
    name: &'static str,
    role: (&'static str, &'static str),
    event: (&'static str, &'static str),
    text: (&'static str, &'static str),
    image: &'static str,
}

const HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        name: "Amina Hassan",
        role: ("Music Event Organizer", "Mandaaji wa Matukio ya Muziki"),
        event: ("Dar es Salaam Music Festival", "Tamasha la Muziki Dar es Salaam"),
        text: (
            "Ribera made managing my music event effortless! The ticketing system is so smooth and my attendees loved the digital experience.",
            "Ribera imenisaidia kusimamia tamasha langu kwa urahisi kabisa! Mfumo wa tiketi ni laini sana na washiriki wangu walipenda uzoefu wa kidigitali.",
        ),
        image: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=100&h=100&fit=crop&crop=face",
    },
    Highlight {
        name: "John Mwalimu",
        role: ("Conference Organizer", "Mandaaji wa Mikutano"),
        event: ("Tech Summit Tanzania", "Mkutano wa Teknolojia Tanzania"),
        text: (
            "The analytics dashboard helped me understand my audience better. BillPay integration made payments seamless for everyone.",
            "Dashibodi ya uchambuzi ilinisaidia kuelewa hadhira yangu vizuri zaidi. Muunganisho wa BillPay ulifanya malipo kuwa rahisi kwa kila mtu.",
        ),
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face",
    },
    Highlight {
        name: "Grace Kimaro",
        role: ("Wedding Planner", "Mpangaji wa Harusi"),
        event: ("Luxury Weddings TZ", "Harusi za Kifahari TZ"),
        text: (
            "My clients love how easy it is to RSVP and manage their guest lists. Ribera has transformed how I handle events.",
            "Wateja wangu wanapenda jinsi ilivyo rahisi kuthibitisha mahudhurio na kusimamia orodha za wageni. Ribera imebadilisha jinsi ninavyoshughulikia matukio.",
        ),
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&crop=face",
    },
    Highlight {
        name: "David Moshi",
        role: ("Sports Event Manager", "Meneja wa Matukio ya Michezo"),
        event: ("Kilimanjaro Marathon", "Mbio za Kilimanjaro"),
        text: (
            "Managing thousands of participants became so much easier with Ribera. The QR code system worked flawlessly.",
            "Kusimamia maelfu ya washiriki kulikuwa rahisi zaidi na Ribera. Mfumo wa msimbo wa QR ulifanya kazi bila tatizo.",
        ),
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face",
    },
];

/// Bundled testimonials shown while loading, on failure, or when the store has none.
pub fn highlights(language: Language) -> Vec<TestimonialRecord> {
    HIGHLIGHTS
        .iter()
        .map(|h| TestimonialRecord {
            name: h.name.to_string(),
            role: language.pick(h.role.0, h.role.1).to_string(),
            event: language.pick(h.event.0, h.event.1).to_string(),
            text: language.pick(h.text.0, h.text.1).to_string(),
            rating: DEFAULT_RATING,
            image: Some(h.image.to_string()),
        })
        .collect()
}

/// Portrait for a testimonial, falling back to a generated initials avatar.
pub fn avatar_url(record: &TestimonialRecord) -> String {
    match &record.image {
        Some(image) => image.clone(),
        None => format!(
            "https://ui-avatars.com/api/?name={}&background=3f3d56&color=ffffff",
            urlencoding::encode(&record.name)
        ),
    }
}

fn dot_class(index: usize, current: usize) -> Classes {
    classes!("carousel-dot", (index == current).then(|| "active"))
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub language: Language,
    pub dark_mode: bool,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let language = props.language;
    let remote = use_state(Remote::<Vec<TestimonialRecord>>::default);
    let position = use_state(Carousel::default);

    {
        let remote = remote.clone();
        use_effect_with_deps(
            move |language: &Language| {
                let language = *language;
                let guard = MountGuard::new();
                let mounted = guard.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = SiteData::live()
                        .fetch_testimonials_by_language(language)
                        .await;
                    if let Err(e) = &result {
                        log::error!("Failed to load testimonials: {}", e);
                    }
                    if mounted.is_mounted() {
                        remote.set(Remote::from_list(result));
                    }
                });
                move || guard.release()
            },
            language,
        );
    }

    let shown = match remote.ready() {
        Some(records) => records.clone(),
        None => highlights(language),
    };

    {
        let position = position.clone();
        use_effect_with_deps(
            move |(_, _, len): &(Language, Remote<Vec<TestimonialRecord>>, usize)| {
                position.set(Carousel::new(*len));
                || ()
            },
            (language, (*remote).clone(), shown.len()),
        );
    }

    {
        let position = position.clone();
        use_interval(move || position.set((*position).next()), ROTATE_INTERVAL_MS);
    }

    let prev = {
        let position = position.clone();
        Callback::from(move |_: MouseEvent| position.set((*position).prev()))
    };
    let next = {
        let position = position.clone();
        Callback::from(move |_: MouseEvent| position.set((*position).next()))
    };

    let dots = (0..shown.len())
        .map(|i| {
            let class = dot_class(i, position.index());
            let position = position.clone();
            let select = Callback::from(move |_: MouseEvent| position.set((*position).select(i)));
            html! {
                <button
                    {class}
                    onclick={select}
                    aria-label={format!("{} {}", language.pick("Show testimonial", "Onyesha ushuhuda"), i + 1)}
                />
            }
        })
        .collect::<Html>();

    let current = shown.get(position.index()).or_else(|| shown.first()).map(|record| {
        let stars = "★".repeat(usize::from(record.rating));
        html! {
            <div class="testimonial-card" key={record.name.clone()}>
                <div class="testimonial-stars" aria-label={format!("{} / 5", record.rating)}>{stars}</div>
                <blockquote>{format!("\u{201c}{}\u{201d}", record.text)}</blockquote>
                <div class="testimonial-author">
                    <img src={avatar_url(record)} alt={record.name.clone()} />
                    <div>
                        <strong>{&record.name}</strong>
                        <span>{&record.role}</span>
                        <span class="testimonial-event">{&record.event}</span>
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <section id="testimonials" class={classes!("testimonials-section", props.dark_mode.then(|| "section-dark"))}>
            <div class="section-inner">
                <h2>{language.pick("What Our Users Say", "Watumiaji Wetu Wanasema Nini")}</h2>
                <p class="section-lead">
                    {language.pick(
                        "Join thousands of satisfied event organizers and attendees",
                        "Jiunge na maelfu ya waandaaji wa matukio na washiriki wenye furaha",
                    )}
                </p>
                if remote.failed() {
                    <p class="inline-notice">
                        {language.pick(
                            "We could not load the latest testimonials. Showing highlights instead.",
                            "Hatukuweza kupakia ushuhuda wa hivi karibuni. Tunaonyesha chaguo-msingi kwa sasa.",
                        )}
                    </p>
                }
                <div class="carousel">
                    <button class="carousel-arrow" onclick={prev} aria-label="Previous">{"‹"}</button>
                    {current}
                    <button class="carousel-arrow" onclick={next} aria-label="Next">{"›"}</button>
                </div>
                <div class="carousel-dots">{dots}</div>
            </div>
        </section>
    }
}
