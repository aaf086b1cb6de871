use patternfly_yew::prelude::*;
use yew::prelude::*;

#[function_component(Login)]
pub fn login() -> Html {
    html! {
        <PageSection>
            <div><p>{"Login"}</p></div>
            <div>{"Log in with the account you just created."}</div>
        </PageSection>
    }
}
