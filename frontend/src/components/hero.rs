use yew::prelude::*;
use yew_hooks::use_interval;

use crate::i18n::Language;
use crate::state::carousel::Carousel;

const TAGLINE_INTERVAL_MS: u32 = 4_000;

const TAGLINES: [(&str, &str); 15] = [
    ("Ribera: The Smart Way to Host Events.", "Ribera: Njia ya Kisasa ya Kuandaa Matukio."),
    ("Connect. Celebrate. Cash Out, Instantly.", "Unganika. Sherehekea. Pokea Malipo Papo Hapo."),
    ("Built for Organizers, Loved by Attendees.", "Imeundwa kwa Waandaaji, Inapendwa na Washiriki."),
    ("Simple Events. Fast Payments.", "Matukio Rahisi. Malipo Haraka."),
    ("Your Event, Your Way, With Ribera.", "Tukio Lako, Kwa Njia Yako, Ukiwa na Ribera."),
    ("Digitize Your Events, Maximize Your Reach.", "Badilisha Matukio Yako Kuwa Kidigitali, Fikia Watu Zaidi."),
    ("Africa's Most Intuitive Event Platform.", "Jukwaa la Matukio la Kisasa Zaidi Barani Afrika."),
    ("Plan. Host. Grow.", "Panga. Andaa. Kua."),
    ("Seamless Payments, Limitless Possibilities.", "Malipo Rahisi, Fursa Zisizo na Kikomo."),
    ("Secure, Simple, and Made for You.", "Salama, Rahisi, na Imetengenezwa kwa Ajili Yako."),
    ("From Tickets to Memories, All in One App.", "Kutoka Tiketi Hadi Kumbukumbu, Yote Ndani ya App Moja."),
    ("Empowering Organizers, Delighting Audiences.", "Kuwawezesha Waandaaji, Kuwafurahisha Washiriki."),
    ("Experience the Future of Events, Today.", "Pata Uzoefu wa Baadaye wa Matukio Leo."),
    ("More Than Events: It's a Movement.", "Zaidi ya Matukio: Ni Harakati."),
    ("Ribera: Where Every Event Starts Right.", "Ribera: Kila Tukio Linaanza kwa Usahihi."),
];

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub language: Language,
    pub dark_mode: bool,
    pub on_join: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let language = props.language;
    let tagline = use_state(|| Carousel::new(TAGLINES.len()));

    {
        let tagline = tagline.clone();
        use_interval(move || tagline.set((*tagline).next()), TAGLINE_INTERVAL_MS);
    }

    let join = {
        let on_join = props.on_join.clone();
        Callback::from(move |_: MouseEvent| on_join.emit(()))
    };

    let (en, sw) = TAGLINES[tagline.index()];

    html! {
        <section id="home" class={classes!("hero", props.dark_mode.then(|| "hero-dark"))}>
            <div class="hero-background"></div>
            <div class="hero-content">
                <p class="hero-tagline" key={tagline.index()}>{language.pick(en, sw)}</p>
                <h1>{language.pick("Plan, Connect, Celebrate Effortlessly.", "Panga. Unganisha. Sherehekea Kwa Urahisi.")}</h1>
                <p class="hero-subtitle">
                    {language.pick(
                        "Your modern African event & e-ticketing platform. Secure, smart, and powered by CIFIC Enterprises.",
                        "Jukwaa lako la kisasa la matukio na tiketi. Salama, janja, na linatengenezwa na CIFIC Enterprises.",
                    )}
                </p>
                <div class="hero-cta-group">
                    <a href="#download" class="hero-cta primary">
                        {language.pick("Download App", "Pakua Programu")}
                    </a>
                    <button class="hero-cta secondary" onclick={join}>
                        {language.pick("Join as Organizer", "Jiunge Kama Mandaaji")}
                    </button>
                    <a href="#about" class="hero-link">
                        {language.pick("Learn More", "Jifunze Zaidi")}
                    </a>
                </div>
            </div>
            <div class="hero-card">
                <strong>{language.pick("BillPay Connected", "BillPay Imeunganishwa")}</strong>
                <span>
                    {language.pick(
                        "Payments across every mobile network and bank card.",
                        "Malipo ya harakati mitandao yote ya simu na kadi za benki.",
                    )}
                </span>
            </div>
        </section>
    }
}
