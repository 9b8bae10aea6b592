use yew::prelude::*;

use crate::i18n::Language;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub language: Language,
    pub on_language: Callback<Language>,
    pub dark_mode: bool,
    pub on_toggle_theme: Callback<()>,
}

const NAV_ITEMS: [(&str, &str, &str); 6] = [
    ("#home", "Home", "Nyumbani"),
    ("#about", "About", "Kuhusu"),
    ("#features", "Features", "Vipengele"),
    ("#download", "Download", "Pakua"),
    ("#pricing", "Pricing", "Bei"),
    ("#contact", "Contact", "Wasiliana"),
];

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { language, on_language, dark_mode, on_toggle_theme } = props;
    let language = *language;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let language_buttons = Language::ALL
        .iter()
        .map(|&option| {
            let on_language = on_language.clone();
            html! {
                <button
                    class={classes!("lang-button", (option == language).then(|| "active"))}
                    onclick={Callback::from(move |_: MouseEvent| on_language.emit(option))}
                >
                    {option.label()}
                </button>
            }
        })
        .collect::<Html>();

    let nav_links = NAV_ITEMS
        .iter()
        .map(|(href, en, sw)| {
            html! {
                <a href={*href} class="nav-link" onclick={close_menu.clone()}>
                    {language.pick(*en, *sw)}
                </a>
            }
        })
        .collect::<Html>();

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#home" class="nav-logo">
                    <span class="logo-mark">{"R"}</span>
                    <span>{"Ribera"}</span>
                </a>

                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    {nav_links}
                    <div class="lang-switch">{language_buttons}</div>
                    <button class="theme-toggle" onclick={toggle_theme} aria-label="Toggle theme">
                        { if *dark_mode { "☀" } else { "☾" } }
                    </button>
                    <a href="#download" class="nav-cta" onclick={close_menu.clone()}>
                        {language.pick("Get Started", "Anza Sasa")}
                    </a>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}
