use yew::prelude::*;

use crate::i18n::Language;

const QUICK_LINKS: [(&str, &str, &str); 4] = [
    ("#home", "Home", "Nyumbani"),
    ("#about", "About", "Kuhusu"),
    ("#features", "Features", "Vipengele"),
    ("#download", "Download", "Pakua"),
];

const MORE_LINKS: [(&str, &str, &str); 4] = [
    ("#pricing", "Pricing", "Bei"),
    ("#contact", "Contact", "Wasiliana"),
    ("#privacy", "Privacy", "Faragha"),
    ("#terms", "Terms", "Masharti"),
];

const SOCIAL: [(&str, &str); 3] = [("Instagram", "#"), ("Twitter", "#"), ("LinkedIn", "#")];

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub language: Language,
    pub dark_mode: bool,
    pub on_join: Callback<()>,
}

fn link_list(language: Language, links: &[(&'static str, &'static str, &'static str)]) -> Html {
    links
        .iter()
        .map(|(href, en, sw)| html! {
            <li><a href={*href}>{language.pick(*en, *sw)}</a></li>
        })
        .collect()
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let language = props.language;
    let join = {
        let on_join = props.on_join.clone();
        Callback::from(move |_: MouseEvent| on_join.emit(()))
    };

    html! {
        <footer class={classes!("site-footer", props.dark_mode.then(|| "section-dark"))}>
            <div class="footer-grid">
                <div class="footer-brand">
                    <a href="#home" class="nav-logo">
                        <span class="logo-mark">{"R"}</span>
                        <span>{"Ribera"}</span>
                    </a>
                    <p>
                        {language.pick(
                            "Your modern African event & e-ticketing platform. Secure, smart, and powered by CIFIC Enterprises.",
                            "Jukwaa lako la kisasa la matukio na tiketi. Salama, janja, na linatengenezwa na CIFIC Enterprises.",
                        )}
                    </p>
                    <button class="footer-cta" onclick={join}>
                        {language.pick("Join as Organizer", "Jiunge Kama Mandaaji")}
                    </button>
                </div>
                <div>
                    <h4>{language.pick("Quick Links", "Viungo vya Haraka")}</h4>
                    <ul>{link_list(language, &QUICK_LINKS)}</ul>
                </div>
                <div>
                    <h4>{language.pick("More", "Zaidi")}</h4>
                    <ul>{link_list(language, &MORE_LINKS)}</ul>
                </div>
                <div>
                    <h4>{language.pick("Connect", "Unganisha")}</h4>
                    <div class="social-links">
                        { for SOCIAL.iter().map(|(name, href)| html! {
                            <a href={*href} aria-label={*name}>{*name}</a>
                        }) }
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>
                    {format!(
                        "© 2025 Ribera. {}",
                        language.pick("Powered by CIFIC Enterprises", "Inatengenezwa na CIFIC Enterprises")
                    )}
                </p>
                <p>{language.pick("Built with love by the Ribera Team", "Imetengenezwa kwa upendo na Timu ya Ribera")}</p>
            </div>
        </footer>
    }
}
