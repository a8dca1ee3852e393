use fest_core::content::{
    ADDRESS, COMPANY_LINKS, CONTACT_EMAIL, COPYRIGHT, LEGAL_LINKS, PHONES, SLOGAN, SOCIALS,
};
use leptos::prelude::*;

use crate::icons::{
    ICON_FACEBOOK, ICON_INSTAGRAM, ICON_LINKEDIN, ICON_LOCATION, ICON_MAIL, ICON_PHONE,
    ICON_TWITTER, Icon,
};

fn social_icon(label: &str) -> &'static str {
    match label {
        "Facebook" => ICON_FACEBOOK,
        "LinkedIn" => ICON_LINKEDIN,
        "Instagram" => ICON_INSTAGRAM,
        _ => ICON_TWITTER,
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="footer">
            <div class="container footer-slogan">
                {SLOGAN.iter().map(|line| view! { <div>{*line}</div> }).collect_view()}
            </div>

            <div class="footer-main">
                <div class="container footer-columns">
                    <div>
                        <h5 class="footer-heading">"COMPANY"</h5>
                        <ul class="footer-list">
                            {COMPANY_LINKS
                                .iter()
                                .map(|link| view! { <li><a href=link.href class="footer-link">{link.label}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>

                    <address class="footer-contact">
                        <div class="contact-row">
                            <Icon path=ICON_LOCATION />
                            <p>
                                {ADDRESS
                                    .iter()
                                    .map(|line| view! { {*line}<br /> })
                                    .collect_view()}
                            </p>
                        </div>
                        <div class="contact-row">
                            <Icon path=ICON_MAIL />
                            <a href=format!("mailto:{CONTACT_EMAIL}") class="footer-link">{CONTACT_EMAIL}</a>
                        </div>
                        {PHONES
                            .iter()
                            .map(|phone| {
                                view! {
                                    <div class="contact-row">
                                        <Icon path=ICON_PHONE />
                                        <a href=phone.href class="footer-link">{phone.label}</a>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </address>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="container footer-bottom-row">
                    <p class="footer-copyright">{COPYRIGHT}</p>
                    <div class="footer-legal">
                        {LEGAL_LINKS
                            .iter()
                            .map(|link| view! { <a href=link.href class="footer-link">{link.label}</a> })
                            .collect_view()}
                    </div>
                    <div class="footer-socials">
                        {SOCIALS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a href=social.href class="social-link" aria-label=social.label>
                                        <Icon path=social_icon(social.label) filled=true size="18" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_social_profile_has_its_own_icon() {
        let icons: Vec<_> = SOCIALS.iter().map(|s| social_icon(s.label)).collect();
        assert_eq!(
            icons,
            vec![ICON_FACEBOOK, ICON_LINKEDIN, ICON_INSTAGRAM, ICON_TWITTER]
        );
    }
}
