use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The path that matched no page, echoed back when known.
    #[prop_or_default]
    pub path: Option<AttrValue>,
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let on_click = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ t("not_found.title") }</h1>
            <p>{ t("not_found.message") }</p>
            if let Some(path) = props.path.clone() {
                <p><code>{ path }</code></p>
            }
            <button type="button" onclick={on_click}>{ t("not_found.back") }</button>
        </section>
    }
}
