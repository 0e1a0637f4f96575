use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LoginPageProps {
    pub on_login: Callback<String>,
}

/// Remembers a display name on this device. There is no password check.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let username = use_state(String::new);

    let on_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = crate::dom::event_value(&e) {
                username.set(value);
            }
        })
    };
    let on_submit = {
        let cb = props.on_login.clone();
        let username = username.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit((*username).clone());
        })
    };

    html! {
        <section class="panel login">
            <h1>{ t("login.title") }</h1>
            <form id="loginForm" onsubmit={on_submit}>
                <label for="username">{ t("login.username") }</label>
                <input id="username" name="username" type="text" required=true
                    value={(*username).clone()} oninput={on_input} />
                <p class="note">{ t("login.note") }</p>
                <button type="submit">{ t("login.submit") }</button>
            </form>
        </section>
    }
}
