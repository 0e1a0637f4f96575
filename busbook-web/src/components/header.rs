use crate::i18n::{t, tr};
use crate::paths::page_url;
use busbook_core::LoggedInUser;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub user: Option<LoggedInUser>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let logout = {
        let cb = p.on_logout.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };
    let auth = match &p.user {
        Some(user) => {
            let mut args = BTreeMap::new();
            args.insert("username", user.username.as_str());
            html! {
                <>
                    { tr("auth.welcome", Some(&args)) }
                    { " | " }
                    <a href="#" id="logout-link" onclick={logout}>{ t("auth.logout") }</a>
                </>
            }
        }
        None => html! { <a href={page_url("login")}>{ t("auth.login") }</a> },
    };
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <nav aria-label={t("nav.label")} class="header-left">
                    <a href={page_url("")} class="brand">{ t("app.title") }</a>
                    <a href={page_url("")}>{ t("nav.book_now") }</a>
                </nav>
                <span id="authLinks" class="header-right">{ auth }</span>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn anonymous_visitors_see_login_link() {
        let props = Props {
            user: None,
            on_logout: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
        assert!(html.contains("href=\"/login\""));
        assert!(!html.contains("Logout"));
    }

    #[test]
    fn signed_in_user_is_welcomed() {
        let props = Props {
            user: Some(LoggedInUser {
                username: "priya".into(),
            }),
            on_logout: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
        assert!(html.contains("Welcome, priya"));
        assert!(html.contains("Logout"));
    }
}
