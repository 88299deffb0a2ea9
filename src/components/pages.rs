//! Static pages and small page furniture: banner, footer, submit link and
//! the unsupported-browser notice.

use aidmap_core::i18n::{Text, translate};
use aidmap_core::model::SiteLanguage;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/pages.module.css");

#[component]
pub fn About(site_language: SiteLanguage) -> impl IntoView {
    view! {
        <section class=css::page lang=site_language.code()>
            <h1>{translate(Text::MenuAbout, site_language)}</h1>
            <p>{translate(Text::AboutBody, site_language)}</p>
        </section>
    }
}

#[component]
pub fn Resources(site_language: SiteLanguage) -> impl IntoView {
    view! {
        <section class=css::page lang=site_language.code()>
            <h1>{translate(Text::MenuResources, site_language)}</h1>
            <p>{translate(Text::ResourcesBody, site_language)}</p>
        </section>
    }
}

#[component]
pub fn Press() -> impl IntoView {
    view! {
        <section class=css::page>
            <h1>"Press"</h1>
            <p>"For press inquiries, reach out through the submission form."</p>
        </section>
    }
}

#[component]
pub fn PrivacyPolicy() -> impl IntoView {
    view! {
        <section class=css::page>
            <h1>"Site information"</h1>
            <p>
                "This site stores no personal data. Fetched listings are kept in session \
                 storage for the current tab only and cleared when it closes."
            </p>
        </section>
    }
}

/// Shown on the home route when the map cannot run in this browser.
#[component]
pub fn NoWebGl(site_language: SiteLanguage) -> impl IntoView {
    view! {
        <div class=css::notice role="alert">
            {translate(Text::NoWebGl, site_language)}
        </div>
    }
}

#[component]
pub fn Banner(site_language: SiteLanguage) -> impl IntoView {
    view! {
        <div class=css::banner>
            <h1 class=css::bannerTitle>{translate(Text::BannerTitle, site_language)}</h1>
            <p>{translate(Text::BannerBody, site_language)}</p>
        </div>
    }
}

#[component]
pub fn PageFooter(site_language: SiteLanguage) -> impl IntoView {
    view! {
        <footer class=css::footer lang=site_language.code()>
            <span>{APP_NAME}</span>
            <span>{translate(Text::FooterNote, site_language)}</span>
        </footer>
    }
}

/// External link to the resource-submission form.
#[component]
pub fn SubmitButton(link: String, description: &'static str) -> impl IntoView {
    view! {
        <a class=css::submit href=link target="_blank" rel="noopener noreferrer">
            {description}
            <Icon icon=ic::EXTERNAL_LINK />
        </a>
    }
}
